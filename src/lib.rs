//! A scrollbar / slider widget for hosts that bring their own scene tree,
//! canvas and pointer handling.
//!
//! A [`Track`] owns a value range and a [`Handle`]. Dragging the handle along
//! the longer side of the track changes the value; changing the value (or the
//! range, or the track size) moves the handle.

pub use slidebar_core::*;
pub use slidebar_widgets::*;
