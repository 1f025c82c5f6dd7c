//! Fixed-kernel spatial convolution (blur and sharpen).
//!
//! Each channel is convolved independently. At the image border only the
//! kernel cells that land inside the grid contribute: there is no zero
//! padding, mirroring or wrap-around, and the remaining weights are not
//! renormalized. The sum is rounded half-up and clamped to 0..=255.

mod kernel;

pub use kernel::{ConvolutionKernel, BLUR, SHARPEN};

use crate::color::{round_half_up, Rgb};
use crate::image::Image;

/// Filter selection for the engine's command table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    /// 3x3 blur, see [`BLUR`]
    Blur,
    /// 5x5 sharpen, see [`SHARPEN`]
    Sharpen,
}

impl Filter {
    /// The kernel this filter convolves with.
    pub fn kernel(self) -> &'static ConvolutionKernel {
        match self {
            Filter::Blur => &BLUR,
            Filter::Sharpen => &SHARPEN,
        }
    }

    /// Apply the filter, returning a new image.
    pub fn apply(self, image: &Image) -> Image {
        convolve(image, self.kernel())
    }
}

/// Blur an image with the 3x3 [`BLUR`] kernel.
pub fn blur(image: &Image) -> Image {
    convolve(image, &BLUR)
}

/// Sharpen an image with the 5x5 [`SHARPEN`] kernel.
pub fn sharpen(image: &Image) -> Image {
    convolve(image, &SHARPEN)
}

/// Convolve every channel of `image` with `kernel`.
///
/// Reads only from `image` and writes to a fresh buffer, so every output
/// pixel sees the original neighborhood.
pub fn convolve(image: &Image, kernel: &ConvolutionKernel) -> Image {
    let width = image.width() as isize;
    let height = image.height() as isize;
    let src = image.pixels();
    let divisor = kernel.divisor as f64;

    let mut out = Vec::with_capacity(src.len());
    for y in 0..height {
        for x in 0..width {
            let mut acc = [0i32; 3];
            for (dy, dx, weight) in kernel.taps() {
                let sy = y + dy;
                let sx = x + dx;
                if sy < 0 || sy >= height || sx < 0 || sx >= width {
                    continue;
                }
                let px = src[(sy * width + sx) as usize].to_i32();
                for c in 0..3 {
                    acc[c] += weight * px[c];
                }
            }
            out.push(Rgb::from_i32_clamped([
                round_half_up(acc[0] as f64 / divisor),
                round_half_up(acc[1] as f64 / divisor),
                round_half_up(acc[2] as f64 / divisor),
            ]));
        }
    }

    image.with_pixels(out)
}
