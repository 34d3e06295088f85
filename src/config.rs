//! Layout configuration.

use crate::error::LayoutError;
use serde::{Deserialize, Serialize};

/// Column count used when none is given.
pub const DEFAULT_COLUMN_COUNT: usize = 2;

/// Spacing used when none is given.
pub const DEFAULT_SPACING: f64 = 10.;

/// Largest accepted column count.
pub const MAX_COLUMN_COUNT: usize = 1024;

/// Parameters of a masonry layout.
///
/// `spacing` is the gap between adjacent cells and also the padding around the content: half of
/// it insets every cell, the other half offsets the whole grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Number of columns; must be between 2 and `MAX_COLUMN_COUNT`.
    pub column_count: usize,

    /// Total available width.
    pub content_width: f64,

    /// Gap between cells.
    pub spacing: f64,

    /// Upper bound on the number of items accepted in one computation.
    #[serde(default)]
    pub max_items: Option<usize>,
}

impl LayoutConfig {
    /// Creates a configuration with the default column count and spacing.
    pub fn new(content_width: f64) -> LayoutConfig {
        LayoutConfig {
            column_count: DEFAULT_COLUMN_COUNT,
            content_width,
            spacing: DEFAULT_SPACING,
            max_items: None,
        }
    }

    pub fn with_column_count(self, column_count: usize) -> LayoutConfig {
        LayoutConfig {
            column_count,
            ..self
        }
    }

    pub fn with_content_width(self, content_width: f64) -> LayoutConfig {
        LayoutConfig {
            content_width,
            ..self
        }
    }

    pub fn with_spacing(self, spacing: f64) -> LayoutConfig {
        LayoutConfig { spacing, ..self }
    }

    pub fn with_max_items(self, max_items: usize) -> LayoutConfig {
        LayoutConfig {
            max_items: Some(max_items),
            ..self
        }
    }

    pub fn half_spacing(&self) -> f64 {
        self.spacing / 2.
    }

    /// Width of every column, after removing the outer padding.
    pub fn column_width(&self) -> f64 {
        (self.content_width - 2. * self.half_spacing()) / self.column_count as f64
    }

    /// The x-coordinate of a column before padding is applied.
    pub fn column_offset(&self, column: usize) -> f64 {
        column as f64 * self.column_width()
    }

    /// Checks that the configuration can produce a layout.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.column_count < 2 {
            return Err(LayoutError::configuration(format!(
                "column count must be at least 2, got {}",
                self.column_count
            )));
        }
        if self.column_count > MAX_COLUMN_COUNT {
            return Err(LayoutError::configuration(format!(
                "column count must be at most {}, got {}",
                MAX_COLUMN_COUNT, self.column_count
            )));
        }
        if !(self.content_width > 0. && self.content_width.is_finite()) {
            return Err(LayoutError::configuration(format!(
                "content width must be positive, got {}",
                self.content_width
            )));
        }
        if !(self.spacing >= 0. && self.spacing.is_finite()) {
            return Err(LayoutError::configuration(format!(
                "spacing must not be negative, got {}",
                self.spacing
            )));
        }
        // cells are one spacing narrower than their column
        if !self.column_width().is_normal() || self.column_width() <= self.spacing {
            return Err(LayoutError::configuration(format!(
                "column width {} leaves no room for cells with spacing {}",
                self.column_width(),
                self.spacing
            )));
        }
        Ok(())
    }

    /// Checks the number of items against `max_items`.
    pub(crate) fn check_item_count(&self, count: usize) -> Result<(), LayoutError> {
        match self.max_items {
            Some(limit) if count > limit => Err(LayoutError::TooManyItems { count, limit }),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_metrics() {
        let config = LayoutConfig::new(300.);
        assert_eq!(config.column_count, 2);
        assert_eq!(config.half_spacing(), 5.);
        assert_eq!(config.column_width(), 145.);
        assert_eq!(config.column_offset(0), 0.);
        assert_eq!(config.column_offset(1), 145.);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn rejects_bad_configurations() {
        let base = LayoutConfig::new(300.);
        let bad = [
            base.with_column_count(1),
            base.with_column_count(0),
            LayoutConfig::new(0.),
            LayoutConfig::new(-300.),
            LayoutConfig::new(f64::NAN),
            LayoutConfig::new(f64::INFINITY),
            base.with_spacing(-1.),
            base.with_spacing(f64::NAN),
            base.with_spacing(100.),
        ];
        for config in &bad {
            let err = config.validate().expect_err("configuration should be rejected");
            assert!(err.is_configuration(), "{:?} gave {:?}", config, err);
        }
    }

    #[test]
    fn column_count_is_bounded() {
        let base = LayoutConfig::new(300.).with_spacing(0.);
        assert_eq!(base.with_column_count(MAX_COLUMN_COUNT).validate(), Ok(()));

        let wide = LayoutConfig::new(1e300).with_spacing(0.);
        for config in &[
            base.with_column_count(MAX_COLUMN_COUNT + 1),
            base.with_column_count(usize::MAX),
            wide.with_column_count(usize::MAX),
        ] {
            let err = config.validate().expect_err("column count should be rejected");
            assert!(err.is_configuration(), "{:?} gave {:?}", config, err);
        }
    }

    #[test]
    fn column_width_must_be_normal() {
        let config = LayoutConfig::new(1e-305)
            .with_spacing(0.)
            .with_column_count(MAX_COLUMN_COUNT);
        assert!(!config.column_width().is_normal());
        assert!(config.validate().unwrap_err().is_configuration());
    }

    #[test]
    fn zero_spacing_is_fine() {
        assert_eq!(LayoutConfig::new(300.).with_spacing(0.).validate(), Ok(()));
    }

    #[test]
    fn item_limit() {
        let config = LayoutConfig::new(300.).with_max_items(2);
        assert_eq!(config.check_item_count(2), Ok(()));
        assert_eq!(
            config.check_item_count(3),
            Err(LayoutError::TooManyItems { count: 3, limit: 2 })
        );
        assert_eq!(LayoutConfig::new(300.).check_item_count(usize::MAX), Ok(()));
    }

    #[test]
    fn deserializes_without_limit() {
        let config: LayoutConfig =
            serde_json::from_str(r#"{"column_count":3,"content_width":320.0,"spacing":8.0}"#)
                .unwrap();
        assert_eq!(config, LayoutConfig::new(320.).with_column_count(3).with_spacing(8.));
    }
}
