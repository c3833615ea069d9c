//! Host facing building blocks of slidebar: geometry, colors and the small
//! capability traits (`Node`, `Drawable`, `Draggable`) a host framework calls
//! into. Nothing in here knows about sliders.

pub mod color;
pub mod geom;
pub mod input;
pub mod render;
pub mod theme;

pub use color::{parse_hex, rgb8, Color};
pub use geom::{Axis, Rect, Vec2};
pub use input::{DragEvent, DragTracker, Draggable, Node, PointerEvent};
pub use render::{DisplayList, DrawContext, Drawable, RenderObject};
