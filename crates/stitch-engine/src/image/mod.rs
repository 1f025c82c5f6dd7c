//! The in-memory raster every engine operation consumes and produces.
//!
//! An [`Image`] is an immutable, rectangular, non-empty grid of [`Rgb`]
//! pixels in row-major order. Transforms never edit an image in place: they
//! read the source grid and return a freshly built one, so a reader holding
//! the previous image never observes a half-finished result.

use crate::api::EngineError;
use crate::color::Rgb;

/// A rectangular grid of RGB pixels, `width` x `height`, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    width: usize,
    height: usize,
    pixels: Vec<Rgb>,
}

impl Image {
    /// Create an image from row-major pixels.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidArgument`] if either dimension is zero or the
    /// pixel count does not equal `width * height`.
    pub fn new(width: usize, height: usize, pixels: Vec<Rgb>) -> Result<Self, EngineError> {
        if width == 0 || height == 0 {
            return Err(EngineError::InvalidArgument(format!(
                "image has no pixels ({}x{})",
                width, height
            )));
        }
        let expected = width.checked_mul(height).ok_or_else(|| {
            EngineError::InvalidArgument(format!("image dimensions {}x{} overflow", width, height))
        })?;
        if pixels.len() != expected {
            return Err(EngineError::InvalidArgument(format!(
                "expected {} pixels for {}x{}, got {}",
                expected,
                width,
                height,
                pixels.len()
            )));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Create an image from a list of rows. Every row must have the same,
    /// non-zero length.
    pub fn from_rows(rows: Vec<Vec<Rgb>>) -> Result<Self, EngineError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(EngineError::InvalidArgument(format!(
                "row {} has {} pixels, expected {}",
                i,
                row.len(),
                width
            )));
        }
        Self::new(width, height, rows.into_iter().flatten().collect())
    }

    /// Create an image from packed `[R, G, B, R, G, B, ...]` bytes.
    pub fn from_rgb_bytes(width: usize, height: usize, bytes: &[u8]) -> Result<Self, EngineError> {
        if bytes.len() % 3 != 0 {
            return Err(EngineError::InvalidArgument(format!(
                "RGB buffer length {} is not a multiple of 3",
                bytes.len()
            )));
        }
        let pixels = bytes
            .chunks_exact(3)
            .map(|c| Rgb::new(c[0], c[1], c[2]))
            .collect();
        Self::new(width, height, pixels)
    }

    /// Create an image where every pixel has the same color.
    pub fn filled(width: usize, height: usize, color: Rgb) -> Result<Self, EngineError> {
        let count = width.saturating_mul(height);
        Self::new(width, height, vec![color; count])
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of pixels.
    #[inline]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// Always `false`; empty images are rejected at construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// All pixels, row-major.
    #[inline]
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Pixel at `(row, col)`, or `None` outside the grid.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<Rgb> {
        if row < self.height && col < self.width {
            Some(self.pixels[row * self.width + col])
        } else {
            None
        }
    }

    /// Iterate over rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[Rgb]> {
        self.pixels.chunks_exact(self.width)
    }

    /// Packed `[R, G, B, ...]` bytes, row-major.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        let mut rgb = Vec::with_capacity(self.pixels.len() * 3);
        for pixel in &self.pixels {
            rgb.extend_from_slice(&pixel.to_bytes());
        }
        rgb
    }

    /// Build a new image of the same size by mapping every pixel.
    pub fn map_pixels<F>(&self, f: F) -> Image
    where
        F: FnMut(Rgb) -> Rgb,
    {
        self.with_pixels(self.pixels.iter().copied().map(f).collect())
    }

    /// Same dimensions, new pixel buffer. Callers guarantee the length.
    pub(crate) fn with_pixels(&self, pixels: Vec<Rgb>) -> Image {
        debug_assert_eq!(pixels.len(), self.pixels.len());
        Image {
            width: self.width,
            height: self.height,
            pixels,
        }
    }
}
