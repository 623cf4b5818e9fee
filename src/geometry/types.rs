use std::fmt;
use std::ops::{Add, Mul, Sub};

/// A location in user units. All points delivered to a sink are absolute.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0., y: 0. };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn as_xy(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Mirror `self` through `center`; used for smooth curve control points.
    pub fn reflect_about(&self, center: Point) -> Self {
        Self::new(2. * center.x - self.x, 2. * center.y - self.y)
    }

    /// Linear interpolation towards `other`; `t == 0` is `self`.
    pub fn lerp(&self, other: Point, t: f64) -> Self {
        *self + (other - *self) * t
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

/// Radii of an elliptical arc.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FillRule {
    #[default]
    EvenOdd,
    Nonzero,
}

impl FillRule {
    /// Map the argument of an `F` directive: `0` is even-odd, `1` non-zero.
    pub fn from_flag(flag: bool) -> Self {
        if flag {
            Self::Nonzero
        } else {
            Self::EvenOdd
        }
    }

    pub fn as_flag(&self) -> bool {
        matches!(self, Self::Nonzero)
    }
}

impl fmt::Display for FillRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EvenOdd => write!(f, "EvenOdd"),
            Self::Nonzero => write!(f, "Nonzero"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SweepDirection {
    #[default]
    Counterclockwise,
    Clockwise,
}

impl SweepDirection {
    /// Map an arc sweep flag; `1` sweeps in the positive-angle (clockwise) direction.
    pub fn from_flag(flag: bool) -> Self {
        if flag {
            Self::Clockwise
        } else {
            Self::Counterclockwise
        }
    }

    pub fn as_flag(&self) -> bool {
        matches!(self, Self::Clockwise)
    }
}

impl fmt::Display for SweepDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Counterclockwise => write!(f, "Counterclockwise"),
            Self::Clockwise => write!(f, "Clockwise"),
        }
    }
}
