//! Plain 2D value types shared by the transform, gesture and render code.
//!
//! Positions (`Point`) and translations (`Offset`) are kept as distinct types
//! so a drag delta can never be mistaken for a location. Both are `f32`, the
//! same precision the canvas items are stored in.

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub};

/// A location in either document or screen space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

/// A translation vector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Offset {
    pub x: f32,
    pub y: f32,
}

/// Width and height of a viewport or image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

#[inline]
pub fn point(x: f32, y: f32) -> Point {
    Point { x, y }
}

#[inline]
pub fn offset(x: f32, y: f32) -> Offset {
    Offset { x, y }
}

#[inline]
pub fn size(width: f32, height: f32) -> Size {
    Size { width, height }
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    /// Vector from the origin to this point.
    #[inline]
    pub fn to_offset(self) -> Offset {
        offset(self.x, self.y)
    }

    /// Scale both coordinates about the origin.
    #[inline]
    pub fn scale(self, factor: f32) -> Point {
        point(self.x * factor, self.y * factor)
    }

    /// Approximate equality, for float round trips.
    pub fn approx_eq(self, other: Point, epsilon: f32) -> bool {
        (self.x - other.x).abs() <= epsilon && (self.y - other.y).abs() <= epsilon
    }
}

impl Offset {
    pub const ZERO: Offset = Offset { x: 0.0, y: 0.0 };

    #[inline]
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    pub fn approx_eq(self, other: Offset, epsilon: f32) -> bool {
        (self.x - other.x).abs() <= epsilon && (self.y - other.y).abs() <= epsilon
    }
}

impl Size {
    pub const ZERO: Size = Size { width: 0.0, height: 0.0 };

    /// Offset from the top-left corner to the center.
    #[inline]
    pub fn half(self) -> Offset {
        offset(self.width / 2.0, self.height / 2.0)
    }

    /// True when either side is zero, negative or NaN.
    #[inline]
    pub fn is_empty(self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

impl Add<Offset> for Point {
    type Output = Point;

    fn add(self, rhs: Offset) -> Point {
        point(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub<Offset> for Point {
    type Output = Point;

    fn sub(self, rhs: Offset) -> Point {
        point(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Sub for Point {
    type Output = Offset;

    fn sub(self, rhs: Point) -> Offset {
        offset(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Add for Offset {
    type Output = Offset;

    fn add(self, rhs: Offset) -> Offset {
        offset(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Offset {
    fn add_assign(&mut self, rhs: Offset) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Offset {
    type Output = Offset;

    fn sub(self, rhs: Offset) -> Offset {
        offset(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Offset {
    type Output = Offset;

    fn neg(self) -> Offset {
        offset(-self.x, -self.y)
    }
}

impl Mul<f32> for Offset {
    type Output = Offset;

    fn mul(self, rhs: f32) -> Offset {
        offset(self.x * rhs, self.y * rhs)
    }
}

impl Div<f32> for Offset {
    type Output = Offset;

    fn div(self, rhs: f32) -> Offset {
        offset(self.x / rhs, self.y / rhs)
    }
}
