//! The engine session: one current image, one original, one pattern.

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::error::EngineError;
use crate::chunk;
use crate::color::Rgb;
use crate::dither;
use crate::filter::Filter;
use crate::image::Image;
use crate::palette::{self, Palette};
use crate::pattern::Pattern;
use crate::tone::Tone;

/// Holds the working state an orchestrator transforms step by step.
///
/// # Design
///
/// - `original` is the image as loaded; only [`load()`](Self::load) replaces it
/// - every transform reads `current`, builds a new image, and only then
///   swaps it in, so a failed call leaves the session untouched
/// - a transform discards the stored pattern, which no longer describes the
///   current image; swap and remove regenerate it instead
///
/// # Example
///
/// ```
/// use stitch_engine::{Engine, Floss, Image, Palette, Rgb};
///
/// let palette = Palette::new([
///     Floss::new(1, Rgb::new(255, 0, 0), 'A'),
///     Floss::new(2, Rgb::new(0, 255, 0), 'B'),
/// ])
/// .unwrap();
///
/// let mut engine = Engine::with_seed(7);
/// engine.load(Image::filled(1, 1, Rgb::new(250, 5, 5)).unwrap());
/// engine.blur().unwrap();
/// engine.generate_pattern(&palette).unwrap();
///
/// assert_eq!(
///     engine.serialize_pattern().unwrap(),
///     "1x1\nA\n\nLEGEND:\nA DMC-1\n"
/// );
/// ```
pub struct Engine {
    current: Option<Image>,
    original: Option<Image>,
    pattern: Option<Pattern>,
    rng: StdRng,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Create an empty engine whose mosaic seeds come from OS entropy.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Create an empty engine with a fixed mosaic RNG seed.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            current: None,
            original: None,
            pattern: None,
            rng,
        }
    }

    /// Load an image as both the current and the original image.
    pub fn load(&mut self, image: Image) {
        tracing::debug!(width = image.width(), height = image.height(), "Loaded image");
        self.original = Some(image.clone());
        self.current = Some(image);
        self.pattern = None;
    }

    /// Load from row-major pixels.
    pub fn load_pixels(
        &mut self,
        width: usize,
        height: usize,
        pixels: Vec<Rgb>,
    ) -> Result<(), EngineError> {
        let image = Image::new(width, height, pixels)?;
        self.load(image);
        Ok(())
    }

    /// A copy of the current image, for writing out.
    pub fn save(&self) -> Result<Image, EngineError> {
        self.current_image().cloned()
    }

    /// Discard all transforms and start again from the original image.
    pub fn reload(&mut self) -> Result<(), EngineError> {
        let original = self.original_image()?.clone();
        self.replace("reload", original);
        Ok(())
    }

    /// The current image.
    pub fn current_image(&self) -> Result<&Image, EngineError> {
        self.current.as_ref().ok_or(EngineError::NotLoaded("image"))
    }

    /// The image as it was loaded.
    pub fn original_image(&self) -> Result<&Image, EngineError> {
        self.original.as_ref().ok_or(EngineError::NotLoaded("image"))
    }

    /// The most recently generated pattern, if it still describes the
    /// current image.
    pub fn pattern(&self) -> Option<&Pattern> {
        self.pattern.as_ref()
    }

    /// Color of the current image at `(row, col)`.
    pub fn pixel_at(&self, row: usize, col: usize) -> Result<Rgb, EngineError> {
        let image = self.current_image()?;
        image.get(row, col).ok_or_else(|| {
            EngineError::InvalidArgument(format!(
                "pixel ({}, {}) outside {}x{} image",
                row,
                col,
                image.width(),
                image.height()
            ))
        })
    }

    pub fn blur(&mut self) -> Result<(), EngineError> {
        self.apply_filter(Filter::Blur)
    }

    pub fn sharpen(&mut self) -> Result<(), EngineError> {
        self.apply_filter(Filter::Sharpen)
    }

    pub fn greyscale(&mut self) -> Result<(), EngineError> {
        self.apply_tone(Tone::Greyscale)
    }

    pub fn sepiatone(&mut self) -> Result<(), EngineError> {
        self.apply_tone(Tone::Sepia)
    }

    /// Reduce each channel to `levels` values with error diffusion.
    pub fn color_dither(&mut self, levels: i32) -> Result<(), EngineError> {
        let image = dither::color_dither(self.current_image()?, levels)?;
        self.replace("color_dither", image);
        Ok(())
    }

    /// Greyscale, then reduce to `levels` grey values with error diffusion.
    pub fn greyscale_dither(&mut self, levels: i32) -> Result<(), EngineError> {
        let image = dither::greyscale_dither(self.current_image()?, levels)?;
        self.replace("greyscale_dither", image);
        Ok(())
    }

    /// Mosaic around `seeds` random seed pixels.
    pub fn mosaic(&mut self, seeds: i64) -> Result<(), EngineError> {
        let current = self.current.as_ref().ok_or(EngineError::NotLoaded("image"))?;
        let image = chunk::mosaic(current, seeds, &mut self.rng)?;
        self.replace("mosaic", image);
        Ok(())
    }

    /// Pixelate into `blocks` x `blocks` super-pixels.
    pub fn pixelate(&mut self, blocks: i32) -> Result<(), EngineError> {
        let image = chunk::pixelate(self.current_image()?, blocks)?;
        self.replace("pixelate", image);
        Ok(())
    }

    /// Paint the current image with its nearest floss colors and record
    /// the resulting pattern.
    pub fn generate_pattern(&mut self, palette: &Palette) -> Result<&Pattern, EngineError> {
        let current = self.current_image()?;
        let pattern = Pattern::generate(current, palette);
        let painted = palette::paint_to_nearest(current, palette);
        Ok(self.store_pattern(painted, pattern))
    }

    /// Like [`generate_pattern()`](Self::generate_pattern), restricted to a
    /// custom palette built from `palette` with [`Palette::subset`].
    ///
    /// Pixels are matched against the custom colors but painted with the
    /// thread colors from `palette`.
    pub fn custom_pattern(
        &mut self,
        palette: &Palette,
        custom: &Palette,
    ) -> Result<&Pattern, EngineError> {
        let current = self.current_image()?;
        let pattern = Pattern::generate(current, custom);
        let painted = palette::paint_to_custom(current, palette, custom);
        Ok(self.store_pattern(painted, pattern))
    }

    /// Text form of the stored pattern.
    pub fn serialize_pattern(&self) -> Result<String, EngineError> {
        self.pattern
            .as_ref()
            .map(Pattern::serialize)
            .ok_or(EngineError::NotLoaded("pattern"))
    }

    /// Replace every pixel exactly equal to `old` with `new`.
    ///
    /// A stored pattern is regenerated against `palette`.
    pub fn swap_color(&mut self, old: Rgb, new: Rgb, palette: &Palette) -> Result<(), EngineError> {
        let image = palette::swap(self.current_image()?, old, new);
        self.replace_keeping_pattern("swap_color", image, palette);
        Ok(())
    }

    /// Replace every pixel exactly equal to `color` with white.
    ///
    /// A stored pattern is regenerated against `palette`.
    pub fn remove_color(&mut self, color: Rgb, palette: &Palette) -> Result<(), EngineError> {
        let image = palette::remove(self.current_image()?, color);
        self.replace_keeping_pattern("remove_color", image, palette);
        Ok(())
    }

    fn apply_filter(&mut self, filter: Filter) -> Result<(), EngineError> {
        let image = filter.apply(self.current_image()?);
        self.replace("filter", image);
        Ok(())
    }

    fn apply_tone(&mut self, tone: Tone) -> Result<(), EngineError> {
        let image = tone.apply(self.current_image()?);
        self.replace("tone", image);
        Ok(())
    }

    fn replace(&mut self, op: &'static str, image: Image) {
        tracing::debug!(op, width = image.width(), height = image.height(), "Replaced current image");
        self.current = Some(image);
        self.pattern = None;
    }

    fn replace_keeping_pattern(&mut self, op: &'static str, image: Image, palette: &Palette) {
        let had_pattern = self.pattern.is_some();
        self.replace(op, image);
        if had_pattern {
            if let Some(current) = &self.current {
                self.pattern = Some(Pattern::generate(current, palette));
            }
        }
    }

    fn store_pattern(&mut self, painted: Image, pattern: Pattern) -> &Pattern {
        tracing::debug!(
            width = pattern.width(),
            height = pattern.height(),
            colors = pattern.legend().len(),
            "Generated pattern"
        );
        self.current = Some(painted);
        self.pattern.insert(pattern)
    }
}
