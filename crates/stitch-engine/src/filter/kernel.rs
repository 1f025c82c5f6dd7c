//! Convolution kernel definitions.

/// A square convolution kernel with rational weights.
///
/// Weights are stored as integer numerators over a shared `divisor`, in
/// row-major order, so accumulation is exact and only the final division
/// introduces rounding.
#[derive(Debug, Clone, Copy)]
pub struct ConvolutionKernel {
    /// Side length; always odd so the kernel has a center cell.
    pub size: usize,
    /// `size * size` numerators, row-major.
    pub weights: &'static [i32],
    /// Shared denominator.
    pub divisor: i32,
}

impl ConvolutionKernel {
    /// Distance from the center cell to the kernel edge.
    #[inline]
    pub fn radius(&self) -> usize {
        self.size / 2
    }

    /// Iterate `(dy, dx, numerator)` relative to the center cell.
    pub fn taps(&self) -> impl Iterator<Item = (isize, isize, i32)> + '_ {
        let radius = self.radius() as isize;
        self.weights.iter().enumerate().map(move |(i, &w)| {
            let dy = (i / self.size) as isize - radius;
            let dx = (i % self.size) as isize - radius;
            (dy, dx, w)
        })
    }
}

/// Gaussian-like 3x3 blur.
///
/// ```text
///   1  2  1
///   2  4  2   / 16
///   1  2  1
/// ```
pub const BLUR: ConvolutionKernel = ConvolutionKernel {
    size: 3,
    weights: &[
        1, 2, 1, //
        2, 4, 2, //
        1, 2, 1,
    ],
    divisor: 16,
};

/// 5x5 sharpen: center 1, inner ring 1/4, outer ring -1/8.
///
/// ```text
///  -1 -1 -1 -1 -1
///  -1  2  2  2 -1
///  -1  2  8  2 -1   / 8
///  -1  2  2  2 -1
///  -1 -1 -1 -1 -1
/// ```
pub const SHARPEN: ConvolutionKernel = ConvolutionKernel {
    size: 5,
    weights: &[
        -1, -1, -1, -1, -1, //
        -1, 2, 2, 2, -1, //
        -1, 2, 8, 2, -1, //
        -1, 2, 2, 2, -1, //
        -1, -1, -1, -1, -1,
    ],
    divisor: 8,
};

#[cfg(test)]
mod tests {
    use super::*;

    fn weight_sum(kernel: &ConvolutionKernel) -> i32 {
        kernel.weights.iter().sum()
    }

    #[test]
    fn test_kernels_are_square() {
        for kernel in [BLUR, SHARPEN] {
            assert_eq!(kernel.weights.len(), kernel.size * kernel.size);
            assert_eq!(kernel.size % 2, 1);
        }
    }

    #[test]
    fn test_kernels_are_normalized() {
        assert_eq!(weight_sum(&BLUR), BLUR.divisor);
        assert_eq!(weight_sum(&SHARPEN), SHARPEN.divisor);
    }

    #[test]
    fn test_taps_are_centered() {
        let center: Vec<_> = BLUR.taps().filter(|&(dy, dx, _)| dy == 0 && dx == 0).collect();
        assert_eq!(center, vec![(0, 0, 4)]);

        let corners: Vec<_> = SHARPEN
            .taps()
            .filter(|&(dy, dx, _)| dy.abs() == 2 && dx.abs() == 2)
            .map(|(_, _, w)| w)
            .collect();
        assert_eq!(corners, vec![-1, -1, -1, -1]);
    }
}
