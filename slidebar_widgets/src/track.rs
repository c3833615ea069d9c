use crate::{
    handle::{Handle, TrackFrame},
    mapping::ValueRange,
};
use derivative::Derivative;
use slidebar_core::{
    theme,
    Axis,
    Color,
    DragEvent,
    DrawContext,
    Draggable,
    Drawable,
    Node,
    Rect,
    Vec2,
};

/// Construction time configuration of a [`Track`].
#[derive(Debug, Clone, PartialEq)]
pub struct TrackOptions {
    pub min: f32,
    pub max: f32,
    pub value: f32,
    pub background_color: Color,
    pub value_color: Color,
    /// color of the default handle
    pub handle_color: Color,
    /// fill the part of the track before the handle with `value_color`
    pub render_value: bool,
}

impl Default for TrackOptions {
    fn default() -> Self {
        let range = ValueRange::default();
        TrackOptions {
            min: range.min,
            max: range.max,
            value: 5.0,
            background_color: *theme::TRACK_BG,
            value_color: *theme::TRACK_VALUE,
            handle_color: *theme::HANDLE_DARK,
            render_value: true,
        }
    }
}

/// A scrollbar / slider: a rectangle representing `[min, max]` with a handle
/// whose position along the longer side encodes `value`.
///
/// Invalid updates (an empty range, a value outside the range) are ignored and
/// reported by returning `false`; they never put the track into an
/// inconsistent state.
#[derive(Derivative)]
#[derivative(Debug)]
pub struct Track {
    position: Vec2,
    size: Vec2,
    range: ValueRange,
    value: f32,
    handle: Handle,
    handle_color: Color,
    pub background_color: Color,
    pub value_color: Color,
    pub render_value: bool,
    #[derivative(Debug = "ignore")]
    on_change: Option<Box<dyn FnMut(f32)>>,
}

impl Track {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::with_options(Rect::new(x, y, width, height), TrackOptions::default())
    }

    pub fn with_options(bounds: Rect, options: TrackOptions) -> Self {
        let range = ValueRange::new(options.min, options.max).unwrap_or_else(|| {
            log::warn!(
                "invalid track range [{}, {}], falling back to the default",
                options.min,
                options.max
            );
            ValueRange::default()
        });
        let value = if range.contains(options.value) {
            options.value
        } else {
            let clamped = if options.value.is_nan() { range.min } else { range.clamp(options.value) };
            log::warn!("track value {} is outside of {:?}, using {}", options.value, range, clamped);
            clamped
        };

        let mut track = Track {
            position: bounds.pos,
            size: bounds.size,
            range,
            value,
            handle: default_handle(bounds.size, options.handle_color),
            handle_color: options.handle_color,
            background_color: options.background_color,
            value_color: options.value_color,
            render_value: options.render_value,
            on_change: None,
        };
        track.update_handle_position();
        track
    }

    /// Registers a callback that is invoked every time the value changes, be it
    /// through dragging, `set_value` or a range change that moves it.
    pub fn on_change(mut self, callback: impl FnMut(f32) + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    pub fn min(&self) -> f32 { self.range.min }
    pub fn max(&self) -> f32 { self.range.max }
    pub fn range(&self) -> ValueRange { self.range }
    pub fn value(&self) -> f32 { self.value }
    pub fn handle(&self) -> &Handle { &self.handle }
    pub fn axis(&self) -> Axis { Axis::dominant(self.size) }

    fn frame(&self) -> TrackFrame { TrackFrame { size: self.size, range: self.range } }

    pub fn set_min(&mut self, min: f32) -> bool {
        if min == self.range.min {
            return false;
        }
        match ValueRange::new(min, self.range.max) {
            Some(range) => {
                self.set_range(range);
                true
            }
            None => {
                log::trace!("ignoring min {} for track with max {}", min, self.range.max);
                false
            }
        }
    }

    pub fn set_max(&mut self, max: f32) -> bool {
        if max == self.range.max {
            return false;
        }
        match ValueRange::new(self.range.min, max) {
            Some(range) => {
                self.set_range(range);
                true
            }
            None => {
                log::trace!("ignoring max {} for track with min {}", max, self.range.min);
                false
            }
        }
    }

    // a value left outside of the new range is pulled onto its nearest end
    fn set_range(&mut self, range: ValueRange) {
        log::debug!("track range changed from {:?} to {:?}", self.range, range);
        self.range = range;
        let clamped = range.clamp(self.value);
        let changed = clamped != self.value;
        self.value = clamped;
        self.update_handle_position();
        if changed {
            self.notify();
        }
    }

    pub fn set_value(&mut self, value: f32) -> bool {
        if !self.range.contains(value) {
            log::trace!("ignoring value {} outside of {:?}", value, self.range);
            return false;
        }
        self.value = value;
        self.update_handle_position();
        self.notify();
        true
    }

    /// Replaces the handle. Without an explicit handle a square one as wide as
    /// the track is thick is created. `offset` moves the handle on the cross
    /// axis, as a fraction of its width.
    pub fn set_handle(&mut self, handle: Option<Handle>, offset: Option<Vec2>) {
        let mut handle =
            handle.unwrap_or_else(|| default_handle(self.size, self.handle_color));
        if let Some(offset) = offset {
            handle.set_offset(offset);
        }
        self.handle = handle;
        self.update_handle_position();
    }

    /// Moves the handle to where the current value lies on the track.
    pub fn update_handle_position(&mut self) {
        let frame = self.frame();
        self.handle.place(self.value, &frame);
    }

    fn notify(&mut self) {
        let value = self.value;
        if let Some(on_change) = self.on_change.as_mut() {
            on_change(value);
        }
    }
}

fn default_handle(track_size: Vec2, color: Color) -> Handle {
    Handle::new(track_size.min_element()).with_color(color)
}

impl Node for Track {
    fn position(&self) -> Vec2 { self.position }

    fn size(&self) -> Vec2 { self.size }

    fn translate_to(&mut self, position: Vec2) { self.position = position; }

    fn resize_to(&mut self, size: Vec2) {
        self.size = size;
        self.update_handle_position();
    }
}

impl Draggable for Track {
    fn on_drag(&mut self, event: DragEvent) {
        let candidate = match event {
            DragEvent::Delta(delta) => self.handle.position() + delta,
            DragEvent::MoveTo(position) => position,
        };
        let frame = self.frame();
        match self.handle.slide(candidate, &frame) {
            Some(value) => {
                if value != self.value {
                    self.value = value;
                    self.notify();
                }
            }
            None => log::trace!("ignoring drag on degenerate track {:?}", frame),
        }
    }
}

impl Drawable for Track {
    fn render(&self, origin: Vec2, context: &mut dyn DrawContext) {
        let bounds = self.bounds().translated(origin);
        context.fill_rect(bounds, self.background_color);

        if self.render_value {
            let axis = self.axis();
            let handle = self.handle.bounds();
            let filled = (axis.along(handle.pos) + axis.along(handle.size) / 2.0)
                .max(0.0)
                .min(axis.along(self.size));
            if filled > 0.0 {
                let size = axis.compose(filled, axis.across(self.size));
                context.fill_rect(Rect { pos: bounds.pos, size }, self.value_color);
            }
        }

        self.handle.render(bounds.pos, context);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use slidebar_core::{DisplayList, RenderObject};
    use std::{cell::RefCell, rc::Rc};

    macro_rules! assert_close {
        ($a:expr, $b:expr) => {
            let (a, b): (f32, f32) = ($a, $b);
            assert!((a - b).abs() < 1e-3, "{} is not close to {}", a, b);
        };
    }

    fn horizontal() -> Track { Track::new(15.0, 15.0, 200.0, 20.0) }
    fn vertical() -> Track { Track::new(15.0, 15.0, 20.0, 200.0) }

    #[test]
    fn test_defaults() {
        let track = horizontal();
        assert_eq!((track.min(), track.max(), track.value()), (-10.0, 10.0, 5.0));
        assert_eq!(track.handle().handle_width(), 20.0);
        assert_eq!(track.handle().color, *theme::HANDLE_DARK);
        assert_close!(track.handle().position().x, 140.0);
        assert_eq!(track.handle().position().y, 0.0);
    }

    #[test]
    fn test_drag_to_concrete_positions() {
        let mut track = horizontal();
        track.on_drag(DragEvent::MoveTo(Vec2::new(140.0, 0.0)));
        assert_close!(track.value(), 5.0);

        track.on_drag(DragEvent::MoveTo(Vec2::new(-10.0, 0.0)));
        assert_close!(track.value(), -10.0);

        track.on_drag(DragEvent::MoveTo(Vec2::new(190.0, 0.0)));
        assert_close!(track.value(), 10.0);
    }

    #[test]
    fn test_drag_beyond_lower_bound_is_clamped() {
        let mut track = horizontal();
        track.on_drag(DragEvent::MoveTo(Vec2::new(-50.0, 12.0)));
        assert_eq!(track.handle().position(), Vec2::new(-10.0, 0.0));
        assert_eq!(track.value(), -10.0);
    }

    #[test]
    fn test_drag_by_delta() {
        let mut track = horizontal();
        track.on_drag(DragEvent::Delta(Vec2::new(-100.0, 30.0)));
        assert_close!(track.handle().position().x, 40.0);
        assert_close!(track.value(), -5.0);

        track.on_drag(DragEvent::Delta(Vec2::new(1000.0, 0.0)));
        assert_close!(track.handle().position().x, 190.0);
        assert_close!(track.value(), 10.0);
    }

    #[test]
    fn test_orientation_does_not_change_the_value() {
        let mut h = horizontal();
        let mut v = vertical();
        for fraction in [0.0, 0.1, 0.25, 0.5, 0.8, 1.0] {
            h.on_drag(DragEvent::MoveTo(Vec2::new(200.0 * fraction - 10.0, 0.0)));
            v.on_drag(DragEvent::MoveTo(Vec2::new(0.0, 200.0 * fraction - 10.0)));
            assert_close!(h.value(), v.value());
        }
        assert_eq!(v.handle().position().x, 0.0);
    }

    #[test]
    fn test_set_value_round_trip() {
        for mut track in [horizontal(), vertical(), Track::new(0.0, 0.0, 321.0, 13.0)] {
            for i in 0..=40 {
                let value = -10.0 + 20.0 * i as f32 / 40.0;
                assert!(track.set_value(value));

                let travel = crate::mapping::Travel::new(track.size(), track.handle().handle_width());
                let position = travel.axis.along(track.handle().position());
                assert_close!(travel.value_at(position, &track.range()).unwrap(), value);
            }
        }
    }

    #[test]
    fn test_rejected_min_is_a_noop() {
        let mut track = horizontal();
        let before = track.handle().position();
        for min in [10.0, 11.0, -10.0, f32::NAN] {
            assert!(!track.set_min(min));
            assert_eq!(track.min(), -10.0);
            assert_eq!(track.handle().position(), before);
        }
    }

    #[test]
    fn test_rejected_max_is_a_noop() {
        let mut track = horizontal();
        let before = track.handle().position();
        for max in [-10.0, -20.0, 10.0, f32::NAN] {
            assert!(!track.set_max(max));
            assert_eq!(track.max(), 10.0);
            assert_eq!(track.handle().position(), before);
        }
    }

    #[test]
    fn test_rejected_value_is_a_noop() {
        let mut track = horizontal();
        let before = track.handle().position();
        for value in [-10.5, 10.01, f32::NAN, f32::INFINITY] {
            assert!(!track.set_value(value));
            assert_eq!(track.value(), 5.0);
            assert_eq!(track.handle().position(), before);
        }
    }

    #[test]
    fn test_range_change_moves_handle() {
        let mut track = horizontal();
        assert!(track.set_min(0.0));
        // value 5 of [0, 10] is the middle of the track
        assert_close!(track.handle().position().x, 90.0);

        assert!(track.set_max(20.0));
        assert_close!(track.handle().position().x, 40.0);
        assert_eq!(track.value(), 5.0);
    }

    #[test]
    fn test_narrowed_range_pulls_value_along() {
        let seen = Rc::new(RefCell::new(vec![]));
        let mut track = {
            let seen = seen.clone();
            horizontal().on_change(move |v| seen.borrow_mut().push(v))
        };

        assert!(track.set_min(6.0));
        assert_eq!(track.value(), 6.0);
        assert!(track.range().contains(track.value()));
        assert_close!(track.handle().position().x, -10.0);

        assert!(track.set_max(8.0));
        assert_eq!(track.value(), 6.0);

        assert!(track.set_min(-20.0));
        assert!(track.set_max(-15.0));
        assert_eq!(track.value(), -15.0);
        assert_close!(track.handle().position().x, 190.0);

        // widening the range again leaves the value where it is
        assert!(track.set_max(30.0));
        assert_eq!(track.value(), -15.0);

        assert_eq!(*seen.borrow(), vec![6.0, -15.0]);
    }

    #[test]
    fn test_resize_keeps_value() {
        let mut track = horizontal();
        track.resize_to(Vec2::new(400.0, 40.0));
        assert_eq!(track.handle().handle_width(), 40.0);
        assert_close!(track.handle().position().x, 280.0);

        // flip to vertical
        track.resize_to(Vec2::new(20.0, 200.0));
        assert_eq!(track.axis(), Axis::Vertical);
        assert_eq!(track.handle().position(), Vec2::new(0.0, track.handle().position().y));
        assert_close!(track.handle().position().y, 140.0);
        assert_eq!(track.value(), 5.0);
    }

    #[test]
    fn test_degenerate_track_keeps_value() {
        let mut track = Track::new(0.0, 0.0, 0.0, 0.0);
        track.on_drag(DragEvent::MoveTo(Vec2::new(30.0, 30.0)));
        assert_eq!(track.value(), 5.0);
        assert!(track.handle().position().x.is_finite());
        assert!(track.handle().position().y.is_finite());
    }

    #[test]
    fn test_set_handle_replaces_handle() {
        let mut track = horizontal();
        let custom = Handle::new(4.0).with_color(*theme::HANDLE);
        track.set_handle(Some(custom), Some(Vec2::new(0.5, 0.25)));

        assert_eq!(track.handle().color, *theme::HANDLE);
        assert_eq!(track.handle().offset(), Vec2::new(0.5, 0.25));
        // refitted to the track and placed for the current value
        assert_eq!(track.handle().handle_width(), 20.0);
        assert_close!(track.handle().position().x, 140.0);
        assert_eq!(track.handle().position().y, -5.0);

        track.set_handle(None, None);
        assert_eq!(track.handle().color, *theme::HANDLE_DARK);
        assert_eq!(track.handle().offset(), Vec2::zero());
    }

    #[test]
    fn test_invalid_options_fall_back() {
        let options = TrackOptions { min: 5.0, max: 1.0, value: 42.0, ..Default::default() };
        let track = Track::with_options(Rect::new(0.0, 0.0, 100.0, 10.0), options);
        assert_eq!(track.range(), ValueRange::default());
        assert_eq!(track.value(), 10.0);
    }

    #[test]
    fn test_on_change() {
        let seen = Rc::new(RefCell::new(vec![]));
        let mut track = {
            let seen = seen.clone();
            horizontal().on_change(move |v| seen.borrow_mut().push(v))
        };

        track.set_value(0.0);
        track.set_value(100.0);
        track.on_drag(DragEvent::MoveTo(Vec2::new(-10.0, 0.0)));
        track.on_drag(DragEvent::MoveTo(Vec2::new(-20.0, 0.0)));

        assert_eq!(*seen.borrow(), vec![0.0, -10.0]);
    }

    #[test]
    fn test_render() {
        let track = horizontal();
        let mut list = DisplayList::new();
        track.render(Vec2::zero(), &mut list);

        match list.objects() {
            [RenderObject::FillRect { rect: background, color: bg }, RenderObject::FillRect { rect: value, .. }, RenderObject::StrokeRect { rect: handle, .. }] =>
            {
                assert_eq!(*background, Rect::new(15.0, 15.0, 200.0, 20.0));
                assert_eq!(*bg, *theme::TRACK_BG);
                assert_eq!(value.pos, background.pos);
                assert_close!(value.size.x, 150.0);
                assert_eq!(value.size.y, 20.0);
                assert_close!(handle.pos.x, 155.0);
            }
            other => panic!("unexpected render objects {:?}", other),
        }
    }

    #[test]
    fn test_render_without_value() {
        let mut track = horizontal();
        track.render_value = false;
        let mut list = DisplayList::new();
        track.render(Vec2::new(1.0, 1.0), &mut list);
        assert_eq!(list.len(), 2);
        assert_eq!(list.objects()[0].rect(), Rect::new(16.0, 16.0, 200.0, 20.0));
    }
}
