//! Masonry (waterfall) layout.
//!
//! # Conceptual overview
//! Items of varying height are packed into a fixed number of equally wide columns. Each item is
//! described only by its aspect ratio (width / height); the engine turns a list of ratios into a
//! list of frames, one per item and in the same order, along with the total content height.
//!
//! ## Placement
//! Items are placed one at a time, always at the bottom of the currently shortest column (ties go
//! to the leftmost column). This keeps the columns close to the same height, producing the
//! staggered "Pinterest" look without ever moving an item that has already been placed.
//!
//! ## Spacing
//! A single `spacing` value controls both the gaps between cells and the padding around the
//! content. Half of it insets every cell within its column slot and the other half offsets the
//! whole grid, so cells are exactly `spacing` apart from each other and from the content edges.
//! The bottom padding added to the total height is half the spacing. Frames always keep the exact
//! aspect ratio of their item.
//!
//! ## Coordinate System
//! The origin is at the top left corner of the content area and positive y points down.
//!
//! ## Layout delegates
//! Hosts that lay out sections of a larger view can use the [`Layout`] trait, which places frames
//! inside given bounds. The identity layout `()` gives every item the full bounds; it is what
//! [`layout_or_full_bleed`] degrades to when the masonry configuration is unusable.
//!
//! Computations are pure: nothing is cached between calls and the engine can be shared between
//! threads freely.

mod column;
pub mod config;
mod error;
mod layout;
mod masonry;
mod ratio;
mod rect;

pub use config::LayoutConfig;
pub use error::LayoutError;
pub use layout::{layout_or_full_bleed, Layout};
pub use masonry::{compute_layout, LayoutResult, MasonryLayoutEngine};
pub use ratio::AspectRatio;
pub use rect::Rect;
