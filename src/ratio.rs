//! Aspect ratios.

use crate::error::LayoutError;
use serde::{Deserialize, Serialize};

/// The width / height ratio of an item's intrinsic size.
///
/// Always positive and finite.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct AspectRatio(f64);

impl AspectRatio {
    /// Creates a new aspect ratio.
    pub fn new(ratio: f64) -> Result<AspectRatio, LayoutError> {
        check(0, ratio).map(AspectRatio)
    }

    /// Projects an intrinsic size (e.g. the pixel dimensions of a photo) to its aspect ratio.
    pub fn from_size(width: f64, height: f64) -> Result<AspectRatio, LayoutError> {
        AspectRatio::new(width / height)
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl From<AspectRatio> for f64 {
    fn from(ratio: AspectRatio) -> f64 {
        ratio.0
    }
}

impl std::convert::TryFrom<f64> for AspectRatio {
    type Error = LayoutError;
    fn try_from(ratio: f64) -> Result<AspectRatio, LayoutError> {
        AspectRatio::new(ratio)
    }
}

/// Checks the ratio of the item at `index`.
///
/// NaN fails the comparison, so it is rejected along with zero and negative ratios.
pub(crate) fn check(index: usize, ratio: f64) -> Result<f64, LayoutError> {
    if ratio > 0. && ratio.is_finite() {
        Ok(ratio)
    } else {
        Err(LayoutError::InvalidAspectRatio { index, ratio })
    }
}
