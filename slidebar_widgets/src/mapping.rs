//! The position <-> value transform shared by track and handle.
//!
//! A handle of width `w` travels along the dominant axis of a track of length
//! `l`. Its leading edge `p` may go from `-w/2` to `l - w/2`, so that its centre
//! can reach both ends of the track. The centre (`p + w/2`) is mapped linearly
//! onto `[min, max]`.

use slidebar_core::{Axis, Vec2};

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ValueRange {
    pub min: f32,
    pub max: f32,
}

impl ValueRange {
    /// `None` unless `min < max` and both are finite.
    pub fn new(min: f32, max: f32) -> Option<Self> {
        if min.is_finite() && max.is_finite() && min < max {
            Some(ValueRange { min, max })
        } else {
            None
        }
    }

    pub fn span(&self) -> f32 { self.max - self.min }

    pub fn contains(&self, value: f32) -> bool { value >= self.min && value <= self.max }

    pub fn clamp(&self, value: f32) -> f32 { value.max(self.min).min(self.max) }
}

impl Default for ValueRange {
    fn default() -> Self { ValueRange { min: -10.0, max: 10.0 } }
}

/// The stretch a handle can move along.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Travel {
    pub axis: Axis,
    pub length: f32,
    pub half_width: f32,
}

impl Travel {
    pub fn new(track_size: Vec2, handle_width: f32) -> Self {
        let axis = Axis::dominant(track_size);
        Travel { axis, length: axis.along(track_size), half_width: handle_width / 2.0 }
    }

    pub fn bounds(&self) -> (f32, f32) { (-self.half_width, self.length - self.half_width) }

    pub fn clamp(&self, position: f32) -> f32 {
        let (lower, upper) = self.bounds();
        position.max(lower).min(upper)
    }

    fn is_degenerate(&self, range: &ValueRange) -> bool {
        let span = range.span();
        !(self.length.is_finite() && self.length > 0.0 && span.is_finite() && span > 0.0)
    }

    /// Forward mapping. The position is clamped first, the result is clamped
    /// into the range to swallow rounding at the ends.
    pub fn value_at(&self, position: f32, range: &ValueRange) -> Option<f32> {
        if self.is_degenerate(range) || !position.is_finite() {
            return None;
        }
        let position = self.clamp(position);
        let value = (position + self.half_width) * (range.span() / self.length) + range.min;
        Some(range.clamp(value))
    }

    /// Inverse of `value_at`.
    pub fn position_of(&self, value: f32, range: &ValueRange) -> Option<f32> {
        if self.is_degenerate(range) || !value.is_finite() {
            return None;
        }
        let position = (value - range.min) * (self.length / range.span()) - self.half_width;
        Some(self.clamp(position))
    }
}
