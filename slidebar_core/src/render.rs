use crate::{
    geom::{Rect, Vec2},
    Color,
};
use smallvec::SmallVec;

/// The drawing primitives a widget can ask its host for.
/// All rects are in the coordinate space of the host canvas.
pub trait DrawContext {
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32);
}

/// Something the host can render. `origin` is the canvas position of the
/// parent node, so local coordinates have to be offset by it.
pub trait Drawable {
    fn render(&self, origin: Vec2, context: &mut dyn DrawContext);
}

#[derive(Debug, Clone, PartialEq)]
pub enum RenderObject {
    FillRect { rect: Rect, color: Color },
    StrokeRect { rect: Rect, color: Color, width: f32 },
}

impl RenderObject {
    pub fn rect(&self) -> Rect {
        match self {
            RenderObject::FillRect { rect, .. } => *rect,
            RenderObject::StrokeRect { rect, .. } => *rect,
        }
    }
}

/// A `DrawContext` that only records what was drawn. Hosts can replay it onto
/// their canvas once per frame.
#[derive(Debug, Default, Clone)]
pub struct DisplayList {
    objects: SmallVec<[RenderObject; 4]>,
}

impl DisplayList {
    pub fn new() -> Self { Default::default() }

    pub fn objects(&self) -> &[RenderObject] { &self.objects }

    pub fn clear(&mut self) { self.objects.clear() }

    pub fn len(&self) -> usize { self.objects.len() }

    pub fn is_empty(&self) -> bool { self.objects.is_empty() }

    pub fn replay(&self, target: &mut dyn DrawContext) {
        for object in &self.objects {
            match *object {
                RenderObject::FillRect { rect, color } => target.fill_rect(rect, color),
                RenderObject::StrokeRect { rect, color, width } => {
                    target.stroke_rect(rect, color, width)
                }
            }
        }
    }
}

impl DrawContext for DisplayList {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.objects.push(RenderObject::FillRect { rect, color })
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32) {
        self.objects.push(RenderObject::StrokeRect { rect, color, width })
    }
}
