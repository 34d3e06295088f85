use crate::error::LayoutError;
use crate::masonry::{compute_layout, LayoutResult, MasonryLayoutEngine};
use crate::rect::Rect;
use core::fmt;
use tracing::warn;

/// A layout delegate for a section of items.
pub trait Layout: fmt::Debug + Send + Sync {
    /// Performs layout.
    ///
    /// - `bounds`: the bounds given to the section by the host. Frames are in the same
    ///   coordinate space.
    /// - `aspect_ratios`: one ratio per item, in display order.
    fn layout(&self, bounds: Rect, aspect_ratios: &[f64]) -> Result<LayoutResult, LayoutError> {
        Ok(LayoutResult {
            frames: aspect_ratios.iter().map(|_| bounds).collect(),
            columns: vec![0; aspect_ratios.len()],
            total_height: bounds.height(),
        })
    }
}

/// Identity layout.
///
/// Every item gets the full bounds of the section.
impl Layout for () {}

/// Masonry layout using the width of `bounds` as the content width.
///
/// The configured `content_width` is ignored; column count, spacing and item limit still apply.
impl Layout for MasonryLayoutEngine {
    fn layout(&self, bounds: Rect, aspect_ratios: &[f64]) -> Result<LayoutResult, LayoutError> {
        let config = self.config().with_content_width(bounds.width());
        let mut result = compute_layout(aspect_ratios, &config)?;
        for frame in &mut result.frames {
            *frame = *frame + bounds.origin;
        }
        Ok(result)
    }
}

/// Lays out a section with masonry, degrading to the identity layout if the configuration is
/// unusable (e.g. a single column).
///
/// Errors caused by the items themselves are still returned.
pub fn layout_or_full_bleed(
    engine: &MasonryLayoutEngine,
    bounds: Rect,
    aspect_ratios: &[f64],
) -> Result<LayoutResult, LayoutError> {
    match engine.layout(bounds, aspect_ratios) {
        Err(err) if err.is_configuration() => {
            warn!(error = %err, "falling back to full-bleed layout");
            ().layout(bounds, aspect_ratios)
        }
        result => result,
    }
}
