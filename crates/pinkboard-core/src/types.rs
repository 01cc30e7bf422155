//! Geometry and colour types

use crate::error::{PinkboardError, Result};
use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// A 2D point or vector in surface pixels
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean magnitude
    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Scale to unit length in place. A zero-length point stays at zero.
    pub fn normalize(&mut self) -> &mut Self {
        let len = self.length();
        if len > 0.0 {
            self.x /= len;
            self.y /= len;
        }
        self
    }

    /// Normalize, then scale to `length`. Returns `self` for chaining.
    pub fn set_length(&mut self, length: f32) -> &mut Self {
        self.normalize();
        self.x *= length;
        self.y *= length;
        self
    }

    /// Copy of this point with its y axis mirrored
    pub fn flip_y(&self) -> Self {
        Self {
            x: self.x,
            y: -self.y,
        }
    }
}

impl Add for Point {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for Point {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl Mul<f32> for Point {
    type Output = Self;
    fn mul(self, scalar: f32) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }
}

/// An axis-aligned rectangle (top-left origin, y down)
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle of the given size centred on `center`
    pub fn centered(center: Point, width: f32, height: f32) -> Self {
        Self {
            x: center.x - width / 2.0,
            y: center.y - height / 2.0,
            width,
            height,
        }
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// RGBA color, straight (non-premultiplied) alpha
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Self = Self {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };
    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };
    pub const TRANSPARENT: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as f32 / 255.0,
            g: ((hex >> 8) & 0xFF) as f32 / 255.0,
            b: (hex & 0xFF) as f32 / 255.0,
            a: 1.0,
        }
    }

    /// Parse `#rrggbb` or `#rrggbbaa` (leading `#` optional)
    pub fn parse(s: &str) -> Result<Self> {
        let digits = s.trim().trim_start_matches('#');
        let value = u32::from_str_radix(digits, 16)
            .map_err(|_| PinkboardError::InvalidColor(s.to_string()))?;
        match digits.len() {
            6 => Ok(Self::from_hex(value)),
            8 => Ok(Self::from_hex(value >> 8).with_alpha((value & 0xFF) as f32 / 255.0)),
            _ => Err(PinkboardError::InvalidColor(s.to_string())),
        }
    }

    pub fn with_alpha(mut self, a: f32) -> Self {
        self.a = a;
        self
    }

    pub fn to_rgba8(&self) -> [u8; 4] {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_operations() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(4.0, 6.0);
        assert_eq!(a + b, Point::new(5.0, 8.0));
        assert_eq!(b - a, Point::new(3.0, 4.0));
        assert_eq!(a * 2.0, Point::new(2.0, 4.0));
        assert!(((b - a).length() - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_set_length_chains_and_mutates() {
        let mut p = Point::new(3.0, 4.0);
        let copy = p;
        let scaled = *p.set_length(10.0);
        assert!((scaled.x - 6.0).abs() < 1e-5);
        assert!((scaled.y - 8.0).abs() < 1e-5);
        assert_eq!(p, scaled);
        // The copy taken before is independent
        assert_eq!(copy, Point::new(3.0, 4.0));
    }

    #[test]
    fn test_normalize_zero_stays_zero() {
        let mut p = Point::ZERO;
        p.set_length(5.0);
        assert_eq!(p, Point::ZERO);
    }

    #[test]
    fn test_rect_centered() {
        let r = Rect::centered(Point::new(100.0, 50.0), 40.0, 20.0);
        assert_eq!(r, Rect::new(80.0, 40.0, 40.0, 20.0));
        assert_eq!(r.center(), Point::new(100.0, 50.0));
    }

    #[test]
    fn test_color_from_hex() {
        let c = Color::from_hex(0xFF7EB9);
        assert!((c.r - 1.0).abs() < 0.01);
        assert!((c.g - 0.494).abs() < 0.01);
        assert!((c.b - 0.725).abs() < 0.01);
    }

    #[test]
    fn test_color_parse() {
        assert_eq!(Color::parse("#ffb6c1").unwrap().to_rgba8(), [255, 182, 193, 255]);
        assert_eq!(Color::parse("00000000").unwrap().to_rgba8(), [0, 0, 0, 0]);
        assert!(Color::parse("#fff").is_err());
        assert!(Color::parse("pink").is_err());
    }
}
