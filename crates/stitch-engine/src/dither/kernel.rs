//! Error diffusion kernel definitions.

/// An error diffusion kernel.
///
/// Each entry is `(dx, dy, weight)`: the neighbor offset relative to the
/// pixel just quantized and the numerator of its share of the error.
/// Entries only point at pixels that come later in row-major order.
#[derive(Debug, Clone, Copy)]
pub struct DiffusionKernel {
    /// (dx, dy, weight) entries
    pub entries: &'static [(isize, isize, i32)],
    /// Denominator shared by all weights
    pub divisor: i32,
}

/// Floyd-Steinberg kernel, 100% error propagation (16/16).
///
/// ```text
///        X   7
///    3   5   1
/// ```
pub const FLOYD_STEINBERG: DiffusionKernel = DiffusionKernel {
    entries: &[
        (1, 0, 7),  // right
        (-1, 1, 3), // bottom-left
        (0, 1, 5),  // bottom
        (1, 1, 1),  // bottom-right
    ],
    divisor: 16,
};
