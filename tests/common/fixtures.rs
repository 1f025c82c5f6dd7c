//! Test fixtures and constants.

use stitch_engine::{Image, Rgb};

/// Small floss palette in the on-disk CSV layout
pub const PALETTE_CSV: &str = "\
Floss#,Description,Red,Green,Blue,Symbol
310,Black,0,0,0,88
321,Red,199,43,59,82
699,Green,5,101,23,71
796,Royal Blue Dark,17,65,109,66
3865,Winter White,250,246,240,87
";

/// Named colors used across tests
pub mod colors {
    use stitch_engine::Rgb;

    pub const RED: Rgb = Rgb::new(199, 43, 59);
    pub const GREEN: Rgb = Rgb::new(5, 101, 23);
    pub const NEAR_WHITE: Rgb = Rgb::new(248, 248, 248);
}

/// 4x2 image: left half reddish, right half greenish
pub fn two_tone() -> Image {
    let red = Rgb::new(210, 40, 60);
    let green = Rgb::new(10, 110, 30);
    Image::from_rows(vec![
        vec![red, red, green, green],
        vec![red, red, green, green],
    ])
    .expect("valid fixture")
}

/// Image whose pixels are all distinct (up to 256 pixels)
pub fn distinct(width: usize, height: usize) -> Image {
    let pixels = (0..width * height)
        .map(|i| Rgb::new((i * 37 % 256) as u8, (i * 53 % 256) as u8, (i % 256) as u8))
        .collect();
    Image::new(width, height, pixels).expect("valid fixture")
}
