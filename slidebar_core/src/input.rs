use crate::geom::{Rect, Vec2};

/// What a host tells a draggable node when the pointer moves during a drag.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum DragEvent {
    /// the pointer moved by this much since the last event
    Delta(Vec2),
    /// the host already moved the node; this is its new position, local to the
    /// node's parent
    MoveTo(Vec2),
}

pub trait Draggable {
    fn on_drag(&mut self, event: DragEvent);
}

/// The position/size capability of a node in the host's tree.
pub trait Node {
    fn position(&self) -> Vec2;
    fn size(&self) -> Vec2;
    fn translate_to(&mut self, position: Vec2);
    fn resize_to(&mut self, size: Vec2);

    fn bounds(&self) -> Rect { Rect { pos: self.position(), size: self.size() } }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PointerEvent {
    Pressed(Vec2),
    Moved(Vec2),
    Released,
}

/// Turns raw pointer events into drag deltas for a single target.
#[derive(Debug, Default)]
pub struct DragTracker {
    cursor_position: Vec2,
    dragging: bool,
}
impl DragTracker {
    pub fn new() -> Self { Default::default() }

    pub fn is_dragging(&self) -> bool { self.dragging }

    /// `target` are the current canvas bounds of the draggable node. A drag only
    /// starts if the pointer is pressed inside them, but once started it
    /// continues until release, even if the pointer leaves the target.
    pub fn handle(&mut self, event: PointerEvent, target: Rect) -> Option<DragEvent> {
        match event {
            PointerEvent::Pressed(position) => {
                self.cursor_position = position;
                self.dragging = target.contains(position);
                if self.dragging {
                    log::trace!("drag started at {:?}", position);
                }
                None
            }
            PointerEvent::Moved(position) => {
                let delta = position - self.cursor_position;
                self.cursor_position = position;
                if self.dragging && delta != Vec2::zero() {
                    Some(DragEvent::Delta(delta))
                } else {
                    None
                }
            }
            PointerEvent::Released => {
                if self.dragging {
                    log::trace!("drag released at {:?}", self.cursor_position);
                }
                self.dragging = false;
                None
            }
        }
    }
}
