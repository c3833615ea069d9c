use crate::mapping::{Travel, ValueRange};
use slidebar_core::{theme, Axis, Color, DrawContext, Drawable, Node, Vec2};

/// What a handle gets to know about the track it lives on. The track hands
/// this out for every handle operation instead of the handle keeping a
/// reference to its parent.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TrackFrame {
    pub size: Vec2,
    pub range: ValueRange,
}

/// The square knob of a track.
#[derive(Debug, Clone, PartialEq)]
pub struct Handle {
    position: Vec2,
    handle_width: f32,
    /// fractions of `handle_width` the handle is shifted by on the cross axis
    offset: Vec2,
    pub color: Color,
}

impl Handle {
    pub fn new(handle_width: f32) -> Self {
        Handle {
            position: Vec2::zero(),
            handle_width,
            offset: Vec2::zero(),
            color: *theme::HANDLE,
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn handle_width(&self) -> f32 { self.handle_width }

    pub fn offset(&self) -> Vec2 { self.offset }

    pub(crate) fn set_offset(&mut self, offset: Vec2) { self.offset = offset; }

    /// The handle is as wide as the track is thick; the track may have been
    /// resized since the last interaction.
    fn fit(&mut self, frame: &TrackFrame) -> Travel {
        self.handle_width = frame.size.min_element();
        Travel::new(frame.size, self.handle_width)
    }

    fn pinned(&self, axis: Axis) -> f32 { -axis.across(self.offset) * self.handle_width }

    /// Moves the handle towards `candidate` (local to the track) and returns the
    /// value that corresponds to where it ended up. On a track with no length or
    /// an empty range the handle stays where it is and `None` is returned.
    pub fn slide(&mut self, candidate: Vec2, frame: &TrackFrame) -> Option<f32> {
        let travel = self.fit(frame);
        let along = travel.clamp(travel.axis.along(candidate));
        let value = travel.value_at(along, &frame.range)?;

        self.position = travel.axis.compose(along, self.pinned(travel.axis));
        Some(value)
    }

    /// Moves the handle to where `value` lies on the track.
    pub fn place(&mut self, value: f32, frame: &TrackFrame) {
        let travel = self.fit(frame);
        match travel.position_of(value, &frame.range) {
            Some(along) => self.position = travel.axis.compose(along, self.pinned(travel.axis)),
            None => log::trace!("not placing handle on degenerate track {:?}", frame),
        }
    }
}

impl Node for Handle {
    fn position(&self) -> Vec2 { self.position }

    fn size(&self) -> Vec2 { Vec2::new(self.handle_width, self.handle_width) }

    fn translate_to(&mut self, position: Vec2) { self.position = position; }

    fn resize_to(&mut self, size: Vec2) { self.handle_width = size.min_element(); }
}

impl Drawable for Handle {
    fn render(&self, origin: Vec2, context: &mut dyn DrawContext) {
        context.stroke_rect(self.bounds().translated(origin), self.color, 1.0);
    }
}
