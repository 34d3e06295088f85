//! The masonry (waterfall) layout.

use crate::column::ColumnState;
use crate::config::LayoutConfig;
use crate::error::LayoutError;
use crate::rect::Rect;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Frames computed for a list of items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutResult {
    /// One frame per item, in input order.
    pub frames: Vec<Rect>,

    /// The column each item was placed in, parallel to `frames`.
    pub columns: Vec<usize>,

    /// Height of the content, including the bottom padding.
    pub total_height: f64,
}

impl LayoutResult {
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Iterates over `(column, frame)` pairs in input order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Rect)> {
        self.columns.iter().cloned().zip(self.frames.iter())
    }

    /// Returns the frames placed in `column`, top to bottom.
    pub fn column_frames(&self, column: usize) -> impl Iterator<Item = &Rect> {
        self.iter()
            .filter(move |(c, _)| *c == column)
            .map(|(_, frame)| frame)
    }
}

/// Lays out items in columns, always extending the currently shortest column.
///
/// The engine holds nothing but its configuration; every computation starts from empty columns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MasonryLayoutEngine {
    config: LayoutConfig,
}

impl MasonryLayoutEngine {
    pub fn new(config: LayoutConfig) -> MasonryLayoutEngine {
        MasonryLayoutEngine { config }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Computes the frame of every item.
    ///
    /// # Errors
    /// Fails before placing anything if the configuration is invalid, if there are more items
    /// than `max_items`, or if any aspect ratio is not a positive finite number. A ratio so small
    /// that the content height would overflow is reported as an invalid aspect ratio as well.
    pub fn compute(&self, aspect_ratios: &[f64]) -> Result<LayoutResult, LayoutError> {
        compute_layout(aspect_ratios, &self.config)
    }
}

/// Computes the frame of every item with the given configuration.
///
/// See [`MasonryLayoutEngine::compute`].
pub fn compute_layout(
    aspect_ratios: &[f64],
    config: &LayoutConfig,
) -> Result<LayoutResult, LayoutError> {
    config.validate()?;
    config.check_item_count(aspect_ratios.len())?;

    let padding = config.half_spacing();
    let column_width = config.column_width();

    // no column can grow past all slots stacked on top of each other
    let mut stacked = 0.;
    for (index, &ratio) in aspect_ratios.iter().enumerate() {
        crate::ratio::check(index, ratio)?;
        stacked += column_width / ratio + config.spacing;
        if !stacked.is_finite() {
            return Err(LayoutError::InvalidAspectRatio { index, ratio });
        }
    }

    let mut columns = ColumnState::new(config.column_count);
    let mut frames = Vec::with_capacity(aspect_ratios.len());
    let mut placed_columns = Vec::with_capacity(aspect_ratios.len());

    for (index, &ratio) in aspect_ratios.iter().enumerate() {
        let column = columns.shortest();

        let slot = Rect::from_xywh(
            config.column_offset(column),
            columns.bottom(column),
            column_width,
            column_width / ratio,
        );

        // insetting both dimensions by the same amount skews the ratio, so the height is
        // re-derived from the inset width
        let frame = slot
            .inset(padding, padding)
            .offset(padding, padding)
            .with_height_for_ratio(ratio);

        trace!(index, column, y = frame.min_y(), height = frame.height(), "placed item");

        columns.place(column, frame.max_y());
        frames.push(frame);
        placed_columns.push(column);
    }

    let total_height = columns.max_bottom() + padding;

    debug!(
        items = frames.len(),
        columns = config.column_count,
        total_height,
        "computed masonry layout"
    );

    Ok(LayoutResult {
        frames,
        columns: placed_columns,
        total_height,
    })
}
