//! Closed set of engine commands.
//!
//! Each variant carries its own arguments; validation of those arguments
//! happens inside the engine call, before anything is changed, so every
//! command either succeeds completely or reports an error and leaves the
//! session as it was.

use super::engine::Engine;
use super::error::EngineError;
use crate::color::Rgb;
use crate::palette::Palette;

/// One engine operation with its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Reload,
    Blur,
    Sharpen,
    Greyscale,
    Sepia,
    ColorDither(i32),
    GreyscaleDither(i32),
    Mosaic(i64),
    Pixelate(i32),
    /// Paint to nearest floss and record the pattern
    Pattern,
    Swap {
        old: Rgb,
        new: Rgb,
    },
    Remove(Rgb),
    /// Pattern restricted to the floss carrying these legend symbols
    Custom(Vec<char>),
}

impl Command {
    /// Script-level name, used in success/failure reports.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Reload => "reload",
            Command::Blur => "blur",
            Command::Sharpen => "sharpen",
            Command::Greyscale => "greyscale",
            Command::Sepia => "sepia",
            Command::ColorDither(_) => "colordither",
            Command::GreyscaleDither(_) => "greyscaledither",
            Command::Mosaic(_) => "mosaic",
            Command::Pixelate(_) => "pixelate",
            Command::Pattern => "pattern",
            Command::Swap { .. } => "swap",
            Command::Remove(_) => "remove",
            Command::Custom(_) => "custom",
        }
    }

    /// Run the command against `engine`.
    ///
    /// `palette` is the full floss palette; commands that do not match
    /// colors ignore it.
    pub fn execute(&self, engine: &mut Engine, palette: &Palette) -> Result<(), EngineError> {
        match self {
            Command::Reload => engine.reload(),
            Command::Blur => engine.blur(),
            Command::Sharpen => engine.sharpen(),
            Command::Greyscale => engine.greyscale(),
            Command::Sepia => engine.sepiatone(),
            Command::ColorDither(levels) => engine.color_dither(*levels),
            Command::GreyscaleDither(levels) => engine.greyscale_dither(*levels),
            Command::Mosaic(seeds) => engine.mosaic(*seeds),
            Command::Pixelate(blocks) => engine.pixelate(*blocks),
            Command::Pattern => engine.generate_pattern(palette).map(|_| ()),
            Command::Swap { old, new } => engine.swap_color(*old, *new, palette),
            Command::Remove(color) => engine.remove_color(*color, palette),
            Command::Custom(symbols) => {
                let custom = palette.subset_by_symbols(symbols.iter().copied())?;
                engine.custom_pattern(palette, &custom).map(|_| ())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::Image;
    use crate::palette::Floss;

    fn palette() -> Palette {
        Palette::new([
            Floss::new(1, Rgb::new(255, 0, 0), 'A'),
            Floss::new(2, Rgb::new(0, 255, 0), 'B'),
        ])
        .unwrap()
    }

    #[test]
    fn test_execute_dispatches() {
        let palette = palette();
        let mut engine = Engine::with_seed(1);
        engine.load(Image::filled(2, 2, Rgb::new(100, 150, 200)).unwrap());

        Command::Greyscale.execute(&mut engine, &palette).unwrap();
        assert_eq!(engine.pixel_at(1, 1).unwrap(), Rgb::new(143, 143, 143));

        Command::Reload.execute(&mut engine, &palette).unwrap();
        assert_eq!(engine.pixel_at(1, 1).unwrap(), Rgb::new(100, 150, 200));

        Command::Pattern.execute(&mut engine, &palette).unwrap();
        assert!(engine.pattern().is_some());
    }

    #[test]
    fn test_invalid_arguments_surface_as_errors() {
        let palette = palette();
        let mut engine = Engine::with_seed(1);
        engine.load(Image::filled(2, 2, Rgb::BLACK).unwrap());

        for command in [
            Command::Mosaic(0),
            Command::Pixelate(0),
            Command::ColorDither(-8),
        ] {
            assert!(matches!(
                command.execute(&mut engine, &palette),
                Err(EngineError::InvalidArgument(_))
            ));
        }
        assert_eq!(engine.pixel_at(0, 0).unwrap(), Rgb::BLACK);
    }

    #[test]
    fn test_custom_with_unknown_symbol_is_lookup_failure() {
        let palette = palette();
        let mut engine = Engine::with_seed(1);
        engine.load(Image::filled(1, 1, Rgb::BLACK).unwrap());

        let result = Command::Custom(vec!['A', 'Z']).execute(&mut engine, &palette);
        assert!(matches!(result, Err(EngineError::Lookup(_))));
        assert!(engine.pattern().is_none());
    }

    #[test]
    fn test_names() {
        assert_eq!(Command::ColorDither(3).name(), "colordither");
        assert_eq!(Command::Sepia.name(), "sepia");
        assert_eq!(
            Command::Swap {
                old: Rgb::BLACK,
                new: Rgb::WHITE
            }
            .name(),
            "swap"
        );
    }
}
