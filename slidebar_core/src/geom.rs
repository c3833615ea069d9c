use std::ops::{Add, Sub};

#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}
impl Vec2 {
    pub fn new(x: f32, y: f32) -> Self { Vec2 { x, y } }
    pub fn zero() -> Self { Vec2 { x: 0.0, y: 0.0 } }

    /// the smaller of both components, i.e. the side of the largest square that
    /// fits a rect of this size
    pub fn min_element(self) -> f32 { self.x.min(self.y) }
}
impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Self) -> Self::Output { Vec2 { x: self.x + rhs.x, y: self.y + rhs.y } }
}
impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Self) -> Self::Output { Vec2 { x: self.x - rhs.x, y: self.y - rhs.y } }
}


#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}
impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Rect { pos: Vec2::new(x, y), size: Vec2::new(width, height) }
    }
    pub fn contains(self, point: Vec2) -> bool {
        point.x >= self.pos.x
            && point.y >= self.pos.y
            && point.x <= self.bottom_right().x
            && point.y <= self.bottom_right().y
    }
    pub fn bottom_right(&self) -> Vec2 { self.pos + self.size }
    pub fn translated(self, by: Vec2) -> Self { Rect { pos: self.pos + by, ..self } }
}

/// The axis a handle travels along. A track is horizontal when it is wider than
/// it is high and vertical otherwise (so a square track is vertical).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}
impl Axis {
    pub fn dominant(size: Vec2) -> Self {
        if size.x > size.y {
            Axis::Horizontal
        } else {
            Axis::Vertical
        }
    }

    /// the component of `v` along this axis
    pub fn along(self, v: Vec2) -> f32 {
        match self {
            Axis::Horizontal => v.x,
            Axis::Vertical => v.y,
        }
    }

    /// the component of `v` perpendicular to this axis
    pub fn across(self, v: Vec2) -> f32 {
        match self {
            Axis::Horizontal => v.y,
            Axis::Vertical => v.x,
        }
    }

    pub fn compose(self, along: f32, across: f32) -> Vec2 {
        match self {
            Axis::Horizontal => Vec2 { x: along, y: across },
            Axis::Vertical => Vec2 { x: across, y: along },
        }
    }
}
