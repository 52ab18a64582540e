//! Distance strategy selection.
//!
//! The metric is fixed by the collection's dimensionality when the matcher
//! is built: absolute difference in one dimension, squared Euclidean
//! distance otherwise. The two- and three-dimensional paths are unrolled;
//! the general fold agrees with them exactly on the same inputs.

/// Distance function resolved once from the collection's dimensionality.
///
/// N-dimensional variants return **squared** Euclidean distance. The square
/// root is never taken: ordering by squared distance equals ordering by true
/// distance, and the scan only ever compares distances against each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistanceFn {
    /// Absolute difference between two scalars.
    Scalar,
    /// Unrolled squared Euclidean distance over two components.
    Fixed2,
    /// Unrolled squared Euclidean distance over three components.
    Fixed3,
    /// Squared Euclidean distance folded over any component count.
    FixedN,
}

impl DistanceFn {
    /// Select the variant for points with `dimensions` components.
    pub fn for_dimensions(dimensions: usize) -> Self {
        match dimensions {
            1 => DistanceFn::Scalar,
            2 => DistanceFn::Fixed2,
            3 => DistanceFn::Fixed3,
            _ => DistanceFn::FixedN,
        }
    }

    /// Evaluate the metric over two component slices.
    ///
    /// Both slices must carry the component count implied by the variant;
    /// the matcher upholds this by validating dimensionality before any
    /// evaluation reaches the kernel.
    #[inline]
    pub(crate) fn evaluate(&self, a: &[f64], b: &[f64]) -> f64 {
        match self {
            DistanceFn::Scalar => (a[0] - b[0]).abs(),
            DistanceFn::Fixed2 => {
                let dx = a[0] - b[0];
                let dy = a[1] - b[1];
                dx * dx + dy * dy
            }
            DistanceFn::Fixed3 => {
                let dx = a[0] - b[0];
                let dy = a[1] - b[1];
                let dz = a[2] - b[2];
                dx * dx + dy * dy + dz * dz
            }
            DistanceFn::FixedN => a
                .iter()
                .zip(b)
                .map(|(&x, &y)| {
                    let d = x - y;
                    d * d
                })
                .sum(),
        }
    }
}
