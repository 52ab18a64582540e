//! Point representation and cache identity.
//!
//! A [`Point`] is either a scalar or a fixed-length numeric vector. The
//! matcher derives its dimensionality from the first collection entry and
//! evaluates distances over `f64` component slices, so a scalar and a
//! one-component vector are dimensionally compatible while keeping distinct
//! cache identities.

use std::slice;

use serde::{Deserialize, Serialize};

/// A scalar or fixed-length numeric point.
///
/// The serialized form follows the source data shape: a scalar is a bare
/// JSON number, a vector is a JSON array of numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Point {
    /// One-dimensional value.
    Scalar(f64),
    /// Fixed-length vector; dimensionality is the component count.
    Vector(Vec<f64>),
}

impl Point {
    /// Number of components (1 for scalars).
    pub fn dimensions(&self) -> usize {
        match self {
            Point::Scalar(_) => 1,
            Point::Vector(components) => components.len(),
        }
    }

    /// The components as a slice. A scalar exposes a one-element slice.
    pub fn components(&self) -> &[f64] {
        match self {
            Point::Scalar(value) => slice::from_ref(value),
            Point::Vector(components) => components.as_slice(),
        }
    }

    /// Canonical cache identity for this point.
    ///
    /// Structurally equal points produce equal keys: `-0.0` folds onto `0.0`
    /// and every NaN payload folds onto one bit pattern. A scalar and a
    /// one-component vector never share a key, even for the same value.
    pub(crate) fn key(&self) -> PointKey {
        match self {
            Point::Scalar(value) => PointKey::Scalar(canonical_bits(*value)),
            Point::Vector(components) => {
                PointKey::Vector(components.iter().map(|&v| canonical_bits(v)).collect())
            }
        }
    }
}

impl From<f64> for Point {
    fn from(value: f64) -> Self {
        Point::Scalar(value)
    }
}

impl From<Vec<f64>> for Point {
    fn from(components: Vec<f64>) -> Self {
        Point::Vector(components)
    }
}

impl<const N: usize> From<[f64; N]> for Point {
    fn from(components: [f64; N]) -> Self {
        Point::Vector(components.to_vec())
    }
}

/// Hashable identity over canonicalized component bit patterns.
///
/// The representation tag keeps `Scalar(x)` and `Vector([x])` apart.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum PointKey {
    Scalar(u64),
    Vector(Box<[u64]>),
}

fn canonical_bits(value: f64) -> u64 {
    if value == 0.0 {
        // Covers both zero signs.
        0
    } else if value.is_nan() {
        f64::NAN.to_bits()
    } else {
        value.to_bits()
    }
}
