//! Cross-module regression tests for stitch-engine.
//!
//! Each test pins a whole-pipeline property that single-module tests can't
//! see on their own.

#[cfg(test)]
mod domain_tests {
    use std::collections::BTreeSet;

    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use crate::api::{Command, Engine, EngineError};
    use crate::chunk::{mosaic, pixelate};
    use crate::color::{redmean_distance, Rgb};
    use crate::dither::{color_dither, greyscale_dither};
    use crate::image::Image;
    use crate::palette::{closest, remove, swap, Floss, Palette};
    use crate::pattern::generate;
    use crate::tone::greyscale;

    fn random_image(width: usize, height: usize, seed: u64) -> Image {
        let mut rng = StdRng::seed_from_u64(seed);
        let pixels = (0..width * height)
            .map(|_| Rgb::new(rng.gen(), rng.gen(), rng.gen()))
            .collect();
        Image::new(width, height, pixels).unwrap()
    }

    fn floss_palette() -> Palette {
        Palette::new([
            Floss::new(310, Rgb::new(0, 0, 0), 'X'),
            Floss::new(321, Rgb::new(199, 43, 59), 'R'),
            Floss::new(699, Rgb::new(5, 101, 23), 'G'),
            Floss::new(796, Rgb::new(17, 65, 109), 'B'),
            Floss::new(444, Rgb::new(255, 214, 0), 'Y'),
            Floss::new(3865, Rgb::new(250, 246, 240), 'W'),
        ])
        .unwrap()
    }

    // ========================================================================
    // Identity cases
    // ========================================================================

    /// If this breaks, quantization with 256 levels is no longer a step of
    /// exactly 1, or error is being diffused when there is none.
    #[test]
    fn test_256_levels_is_identity() {
        let image = random_image(13, 9, 1);
        assert_eq!(color_dither(&image, 256).unwrap(), image);

        let grey = greyscale(&image);
        assert_eq!(greyscale_dither(&image, 256).unwrap(), grey);
    }

    /// If this breaks, seeds are being duplicated or a pixel is not assigned
    /// to the seed sitting on it.
    #[test]
    fn test_mosaic_with_every_pixel_seeded_is_identity() {
        let image = random_image(7, 6, 2);
        let mut rng = StdRng::seed_from_u64(2);
        assert_eq!(mosaic(&image, 42, &mut rng).unwrap(), image);
    }

    #[test]
    fn test_pixelate_one_block_is_rounded_mean() {
        let image = random_image(5, 4, 3);
        let n = image.len() as f64;
        let sum = image.pixels().iter().fold([0u32; 3], |mut acc, p| {
            acc[0] += p.r as u32;
            acc[1] += p.g as u32;
            acc[2] += p.b as u32;
            acc
        });
        let expected = Rgb::new(
            (sum[0] as f64 / n + 0.5).floor() as u8,
            (sum[1] as f64 / n + 0.5).floor() as u8,
            (sum[2] as f64 / n + 0.5).floor() as u8,
        );
        let out = pixelate(&image, 1).unwrap();
        assert!(out.pixels().iter().all(|&p| p == expected));
    }

    // ========================================================================
    // Palette matching
    // ========================================================================

    #[test]
    fn test_distance_symmetry_on_random_colors() {
        let mut rng = StdRng::seed_from_u64(4);
        for _ in 0..500 {
            let a = Rgb::new(rng.gen(), rng.gen(), rng.gen());
            let b = Rgb::new(rng.gen(), rng.gen(), rng.gen());
            assert_eq!(redmean_distance(a, b), redmean_distance(b, a));
        }
    }

    /// If this breaks, palette iteration order leaked from load order into
    /// tie-breaking.
    #[test]
    fn test_closest_exact_match_for_every_entry() {
        let palette = floss_palette();
        for floss in palette.iter() {
            assert_eq!(closest(floss.color, &palette), floss.code);
        }
    }

    #[test]
    fn test_swap_and_remove_idempotence() {
        let palette = floss_palette();
        let painted = crate::palette::paint_to_nearest(&random_image(8, 8, 5), &palette);
        let red = Rgb::new(199, 43, 59);

        let once = remove(&painted, red);
        assert_eq!(remove(&once, red), once);
        assert!(!once.pixels().contains(&red));

        let absent = Rgb::new(1, 2, 3);
        assert_eq!(swap(&painted, absent, Rgb::BLACK), painted);
    }

    /// If this breaks, the legend lists codes that never appear in the grid,
    /// repeats codes, or is out of code order.
    #[test]
    fn test_legend_matches_grid() {
        let palette = floss_palette();
        let pattern = generate(&random_image(16, 12, 6), &palette);

        let codes: Vec<u32> = pattern.legend().iter().map(|e| e.code).collect();
        let mut sorted = codes.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(codes, sorted);

        let grid: BTreeSet<char> = pattern.symbols().iter().copied().collect();
        let legend: BTreeSet<char> = pattern.legend().iter().map(|e| e.symbol).collect();
        assert_eq!(grid, legend);

        for entry in pattern.legend() {
            assert_eq!(palette.symbol(entry.code), Ok(entry.symbol));
        }
    }

    // ========================================================================
    // Session behaviour
    // ========================================================================

    /// If this breaks, a transform mutated the original snapshot.
    #[test]
    fn test_reload_after_pipeline_restores_loaded_image() {
        let image = random_image(10, 10, 7);
        let palette = floss_palette();
        let mut engine = Engine::with_seed(7);
        engine.load(image.clone());

        let pipeline = [
            Command::Blur,
            Command::Sharpen,
            Command::Sepia,
            Command::ColorDither(4),
            Command::Mosaic(12),
            Command::Pixelate(3),
            Command::Pattern,
            Command::Remove(Rgb::new(0, 0, 0)),
        ];
        for command in &pipeline {
            command.execute(&mut engine, &palette).unwrap();
        }

        Command::Reload.execute(&mut engine, &palette).unwrap();
        assert_eq!(engine.current_image().unwrap(), &image);
    }

    /// If this breaks, a rejected command partially applied its effect.
    #[test]
    fn test_rejected_commands_do_not_mutate() {
        let image = random_image(4, 3, 8);
        let palette = floss_palette();
        let mut engine = Engine::with_seed(8);
        engine.load(image.clone());

        for command in [
            Command::Mosaic(0),
            Command::Mosaic(13),
            Command::Pixelate(0),
            Command::ColorDither(-8),
            Command::GreyscaleDither(0),
            Command::Custom(vec!['Q']),
        ] {
            assert!(command.execute(&mut engine, &palette).is_err());
            assert_eq!(engine.current_image().unwrap(), &image);
        }
    }

    #[test]
    fn test_pattern_text_for_single_pixel() {
        let palette = Palette::new([
            Floss::new(1, Rgb::new(255, 0, 0), 'A'),
            Floss::new(2, Rgb::new(0, 255, 0), 'B'),
        ])
        .unwrap();
        assert_eq!(palette.find_nearest(Rgb::new(255, 0, 0)), (1, 0.0));

        let mut engine = Engine::with_seed(0);
        engine.load(Image::filled(1, 1, Rgb::new(255, 0, 0)).unwrap());
        engine.generate_pattern(&palette).unwrap();
        assert_eq!(
            engine.serialize_pattern().unwrap(),
            "1x1\nA\n\nLEGEND:\nA DMC-1\n"
        );
        assert!(matches!(
            engine.pixel_at(3, 3),
            Err(EngineError::InvalidArgument(_))
        ));
    }
}
