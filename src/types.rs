//! Geometry primitives shared by every stage of the layout engine.
//!
//! Screen convention throughout: x grows right, y grows down, units are
//! output pixels. Points and offsets are `glam::DVec2`.

use std::fmt;
use std::str::FromStr;

use glam::{DVec2, dvec2};
use serde::{Deserialize, Serialize};

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is negative when non-negative required
    Negative,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Negative => write!(f, "value is negative"),
        }
    }
}

impl std::error::Error for NumericError {}

fn check_finite(val: f64) -> Result<f64, NumericError> {
    if val.is_nan() {
        Err(NumericError::NaN)
    } else if val.is_infinite() {
        Err(NumericError::Infinite)
    } else {
        Ok(val)
    }
}

fn check_non_negative(val: f64) -> Result<f64, NumericError> {
    let val = check_finite(val)?;
    if val < 0.0 {
        Err(NumericError::Negative)
    } else {
        Ok(val)
    }
}

/// Distance from `min` to `max`, rounded up until `min + span` reaches `max`.
/// Plain subtraction can land one ulp short.
fn span(min: f64, max: f64) -> f64 {
    let mut span = max - min;
    while span.is_finite() && min + span < max {
        span = f64::from_bits(span.to_bits() + 1);
    }
    span
}

/// Axis-aligned rectangle. Width and height are never negative.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundsBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundsBox {
    /// Create a box without validation. Callers inside the crate only pass
    /// sizes they computed as non-negative.
    #[inline]
    pub(crate) const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        BoundsBox { x, y, width, height }
    }

    /// Create a box with validation (rejects NaN, infinite and negative sizes)
    pub fn try_new(x: f64, y: f64, width: f64, height: f64) -> Result<Self, NumericError> {
        Ok(BoundsBox {
            x: check_finite(x)?,
            y: check_finite(y)?,
            width: check_non_negative(width)?,
            height: check_non_negative(height)?,
        })
    }

    /// Smallest box spanning two corner points, in any order. The far edges
    /// computed by [`right`](Self::right) and [`bottom`](Self::bottom) are
    /// never short of the far corner.
    pub fn from_corners(a: DVec2, b: DVec2) -> Self {
        let min = a.min(b);
        let max = a.max(b);
        BoundsBox::new(min.x, min.y, span(min.x, max.x), span(min.y, max.y))
    }

    /// Smallest box containing every point. `None` for an empty slice.
    pub fn from_points(points: &[DVec2]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let (min, max) = rest
            .iter()
            .fold((*first, *first), |(min, max), p| (min.min(*p), max.max(*p)));
        Some(BoundsBox::from_corners(min, max))
    }

    #[inline]
    pub fn left(&self) -> f64 {
        self.x
    }

    #[inline]
    pub fn top(&self) -> f64 {
        self.y
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    #[inline]
    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    #[inline]
    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    pub fn center(&self) -> DVec2 {
        dvec2(self.center_x(), self.center_y())
    }

    pub fn top_left(&self) -> DVec2 {
        dvec2(self.x, self.y)
    }

    pub fn bottom_right(&self) -> DVec2 {
        dvec2(self.right(), self.bottom())
    }

    /// Smallest box containing both. Never smaller than either input.
    pub fn union(&self, other: &BoundsBox) -> BoundsBox {
        let min = self.top_left().min(other.top_left());
        let max = self.bottom_right().max(other.bottom_right());
        BoundsBox::from_corners(min, max)
    }

    /// Expand by `amount` on every side. Negative amounts are treated as zero
    /// so the result always contains `self`.
    pub fn grow(&self, amount: f64) -> BoundsBox {
        let d = dvec2(amount.max(0.0), amount.max(0.0));
        BoundsBox::from_corners(self.top_left() - d, self.bottom_right() + d)
    }

    /// True if `other` lies entirely inside `self` (edges inclusive).
    pub fn contains(&self, other: &BoundsBox) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Same box moved by `offset`.
    pub fn translate(&self, offset: DVec2) -> BoundsBox {
        BoundsBox::new(self.x + offset.x, self.y + offset.y, self.width, self.height)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.width.is_finite() && self.height.is_finite()
    }
}

impl fmt::Display for BoundsBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}x{})", self.x, self.y, self.width, self.height)
    }
}

/// Rotate a compass bearing (0 = north, clockwise) into a screen direction.
///
/// Screen angles are measured from +x toward +y, so north maps to -90 degrees.
pub fn compass_to_screen(degrees: f64) -> DVec2 {
    let radians = (degrees - 90.0).to_radians();
    dvec2(radians.cos(), radians.sin())
}

/// Left-hand normal of a vector in screen space.
#[inline]
pub fn left_normal(v: DVec2) -> DVec2 {
    dvec2(-v.y, v.x)
}

/// Error returned when a color string cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorParseError(pub String);

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized color: {}", self.0)
    }
}

impl std::error::Error for ColorParseError {}

/// An RGBA color. Alpha is carried separately from the SVG paint string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b, a: 255 }
    }

    /// Perceived brightness on a 0..255 scale (ITU-R BT.601 weights).
    pub fn brightness(&self) -> f64 {
        (self.r as f64 * 299.0 + self.g as f64 * 587.0 + self.b as f64 * 114.0) / 1000.0
    }

    /// Outline color that keeps text in this color readable: black behind
    /// light text, white behind dark text.
    pub fn ideal_outline(&self) -> Color {
        if self.brightness() > 130.0 {
            Color::BLACK
        } else {
            Color::WHITE
        }
    }

    /// Hex form used in SVG paint attributes (alpha dropped).
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Alpha as a 0..1 opacity.
    pub fn opacity(&self) -> f64 {
        self.a as f64 / 255.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "{}", self.to_hex())
        } else {
            write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.a, self.r, self.g, self.b)
        }
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    /// Accepts `#rgb`, `#rrggbb`, `#aarrggbb` and a handful of names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let err = || ColorParseError(s.to_string());

        if let Some(hex) = s.strip_prefix('#') {
            let byte = |i: usize| -> Result<u8, ColorParseError> {
                u8::from_str_radix(hex.get(i..i + 2).ok_or_else(err)?, 16).map_err(|_| err())
            };
            return match hex.len() {
                3 => {
                    let nib = |i: usize| -> Result<u8, ColorParseError> {
                        u8::from_str_radix(hex.get(i..i + 1).ok_or_else(err)?, 16)
                            .map(|v| v * 17)
                            .map_err(|_| err())
                    };
                    Ok(Color::rgb(nib(0)?, nib(1)?, nib(2)?))
                }
                6 => Ok(Color::rgb(byte(0)?, byte(2)?, byte(4)?)),
                8 => Ok(Color {
                    a: byte(0)?,
                    r: byte(2)?,
                    g: byte(4)?,
                    b: byte(6)?,
                }),
                _ => Err(err()),
            };
        }

        match s.to_ascii_lowercase().as_str() {
            "black" => Ok(Color::BLACK),
            "white" => Ok(Color::WHITE),
            "red" => Ok(Color::RED),
            "green" | "lime" => Ok(Color::GREEN),
            "blue" => Ok(Color::BLUE),
            "yellow" => Ok(Color::YELLOW),
            "gray" | "grey" => Ok(Color::rgb(128, 128, 128)),
            _ => Err(err()),
        }
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(c: Color) -> String {
        c.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_try_new_rejects_bad_values() {
        assert_eq!(BoundsBox::try_new(f64::NAN, 0.0, 1.0, 1.0), Err(NumericError::NaN));
        assert_eq!(
            BoundsBox::try_new(0.0, f64::INFINITY, 1.0, 1.0),
            Err(NumericError::Infinite)
        );
        assert_eq!(BoundsBox::try_new(0.0, 0.0, -1.0, 1.0), Err(NumericError::Negative));
        assert!(BoundsBox::try_new(-5.0, -5.0, 0.0, 0.0).is_ok());
    }

    #[test]
    fn union_never_shrinks() {
        let a = BoundsBox::new(10.0, 10.0, 50.0, 30.0);
        let b = BoundsBox::new(-3.0, 20.0, 4.0, 4.0);
        let u = a.union(&b);
        assert!(u.contains(&a));
        assert!(u.contains(&b));
        assert_eq!(u, BoundsBox::new(-3.0, 10.0, 63.0, 30.0));

        let inner = BoundsBox::new(20.0, 15.0, 1.0, 1.0);
        assert_eq!(a.union(&inner), a);
    }

    #[test]
    fn union_covers_far_edges_exactly() {
        // 10 + (69.99999999999999 - 10) rounds below 70 without the span fix
        let icon = BoundsBox::new(10.0, 20.0, 60.0, 60.0);
        let label = BoundsBox::new(-111.21197312156387, -10.808, 20.0, 12.0);
        let u = icon.union(&label);
        assert!(u.right() >= icon.right(), "{u} vs {icon}");
        assert!(u.contains(&icon));
        assert!(u.contains(&label));

        let head = BoundsBox::from_points(&[
            dvec2(0.1, 0.2),
            dvec2(33.3, 109.79898987322333),
            dvec2(-7.7, 51.5),
        ])
        .unwrap();
        assert!(head.bottom() >= 109.79898987322333);
        let image = BoundsBox::new(-0.3, -0.7, 1.0, 1.0).union(&head);
        assert!(image.contains(&head), "{image} vs {head}");
    }

    #[test]
    fn union_chain_keeps_every_part() {
        let parts: Vec<BoundsBox> = (1..200)
            .map(|i| {
                let f = i as f64;
                BoundsBox::new(-f * 0.37, f * 0.113 - 7.0, f * 1.01 + 0.1, f * 0.7 + 0.3)
            })
            .collect();
        let mut image = BoundsBox::new(10.0, 20.0, 60.0, 60.0);
        for p in &parts {
            image = image.union(p);
        }
        for p in &parts {
            assert!(image.contains(p), "{image} vs {p}");
            assert!(p.grow(0.5).contains(p));
        }
    }

    #[test]
    fn grow_is_uniform() {
        let a = BoundsBox::new(10.0, 10.0, 50.0, 30.0);
        assert_eq!(a.grow(2.0), BoundsBox::new(8.0, 8.0, 54.0, 34.0));
        assert_eq!(a.grow(-4.0), a);
    }

    #[test]
    fn from_points_spans_all() {
        let pts = [dvec2(3.0, -1.0), dvec2(-2.0, 4.0), dvec2(0.0, 0.0)];
        let b = BoundsBox::from_points(&pts).unwrap();
        assert_eq!(b, BoundsBox::new(-2.0, -1.0, 5.0, 5.0));
        assert!(BoundsBox::from_points(&[]).is_none());
    }

    #[test]
    fn translate_keeps_size() {
        let a = BoundsBox::new(1.0, 2.0, 3.0, 4.0);
        let t = a.translate(dvec2(10.0, -2.0));
        assert_eq!(t, BoundsBox::new(11.0, 0.0, 3.0, 4.0));
    }

    #[test]
    fn compass_north_points_up() {
        let v = compass_to_screen(0.0);
        assert!(v.x.abs() < 1e-12);
        assert!((v.y + 1.0).abs() < 1e-12);

        let ne = compass_to_screen(45.0) * 40.0;
        assert!((ne.x - 28.284_271).abs() < 1e-5);
        assert!((ne.y + 28.284_271).abs() < 1e-5);
    }

    #[test]
    fn color_parsing() {
        assert_eq!("#ff0000".parse::<Color>(), Ok(Color::RED));
        assert_eq!("#0f0".parse::<Color>(), Ok(Color::GREEN));
        assert_eq!(
            "#80000000".parse::<Color>(),
            Ok(Color { r: 0, g: 0, b: 0, a: 128 })
        );
        assert_eq!("Yellow".parse::<Color>(), Ok(Color::YELLOW));
        assert!("#12345".parse::<Color>().is_err());
        assert!("chartreuse-ish".parse::<Color>().is_err());
    }

    #[test]
    fn outline_contrasts_with_text() {
        assert_eq!(Color::BLACK.ideal_outline(), Color::WHITE);
        assert_eq!(Color::YELLOW.ideal_outline(), Color::BLACK);
    }
}
