//! Operational condition indicator: a colored bar under the symbol or a
//! slash / cross over the frame.

use std::str::FromStr;

use glam::dvec2;

use crate::descriptor::{FrameShape, Status};
use crate::errors::ModifierError;
use crate::modifiers::Modifier;
use crate::svg::PathData;
use crate::types::{BoundsBox, Color};

use super::super::defaults;
use super::super::primitives::{Glyph, Layer, MultiSegmentPath, Paint, Rect};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Condition {
    FullyCapable,
    Damaged,
    Destroyed,
    FullToCapacity,
}

impl Condition {
    pub fn from_status(status: Status) -> Option<Condition> {
        match status {
            Status::FullyCapable => Some(Condition::FullyCapable),
            Status::Damaged => Some(Condition::Damaged),
            Status::Destroyed => Some(Condition::Destroyed),
            Status::FullToCapacity => Some(Condition::FullToCapacity),
            Status::Present | Status::Planned => None,
        }
    }

    pub fn bar_color(self) -> Color {
        match self {
            Condition::FullyCapable => Color::GREEN,
            Condition::Damaged => Color::YELLOW,
            Condition::Destroyed => Color::RED,
            Condition::FullToCapacity => Color::BLUE,
        }
    }
}

impl FromStr for Condition {
    type Err = ModifierError;

    /// Status digit (2-5) or condition name, as given in `AL`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().replace(' ', "_").as_str() {
            "2" | "FULLY_CAPABLE" => Ok(Condition::FullyCapable),
            "3" | "DAMAGED" => Ok(Condition::Damaged),
            "4" | "DESTROYED" => Ok(Condition::Destroyed),
            "5" | "FULL_TO_CAPACITY" => Ok(Condition::FullToCapacity),
            _ => Err(
                ModifierError::invalid(Modifier::Al, s, "unknown operational condition")
                    .with_help("use 2-5 or fully capable, damaged, destroyed, full to capacity"),
            ),
        }
    }
}

pub fn bar_thickness(pixel_size: f64) -> f64 {
    (pixel_size / defaults::OCI_THICKNESS_DIVISOR)
        .round()
        .max(defaults::OCI_MIN_THICKNESS)
}

/// Bar as wide as the frame, just under `below` (the frame bottom or the
/// bottom of the mobility glyph).
pub fn bar(condition: Condition, b: &BoundsBox, below: f64, pixel_size: f64) -> Glyph {
    let rect = BoundsBox::new(
        b.x,
        below + defaults::OCI_GAP,
        b.width,
        bar_thickness(pixel_size),
    );
    Glyph::new(Rect { rect }, Paint::fill(condition.bar_color()), Layer::OciBar)
}

/// Fraction of the frame width and height the slash spans.
fn slash_ratios(shape: Option<FrameShape>) -> (f64, f64) {
    match shape {
        Some(FrameShape::FriendRectangle) | Some(FrameShape::Neutral) | None => (1.0, 1.0),
        Some(FrameShape::FriendRound) | Some(FrameShape::UnknownRound) => (0.8, 0.8),
        Some(FrameShape::HostileDiamond) => (0.6, 0.6),
        Some(FrameShape::UnknownQuatrefoil) => (0.75, 0.75),
    }
}

/// `/` for damaged, `X` for destroyed; nothing for the other conditions.
pub fn slash(
    condition: Condition,
    b: &BoundsBox,
    shape: Option<FrameShape>,
    color: Color,
    stroke_width: f64,
) -> Option<Glyph> {
    let (wr, hr) = slash_ratios(shape);
    let (hw, hh) = (b.width * wr / 2.0, b.height * hr / 2.0);
    let c = b.center();
    let rising = PathData::new()
        .m(dvec2(c.x - hw, c.y + hh))
        .l(dvec2(c.x + hw, c.y - hh));
    let data = match condition {
        Condition::Damaged => rising,
        Condition::Destroyed => rising
            .m(dvec2(c.x - hw, c.y - hh))
            .l(dvec2(c.x + hw, c.y + hh)),
        Condition::FullyCapable | Condition::FullToCapacity => return None,
    };
    Some(Glyph::new(
        MultiSegmentPath::new(data),
        Paint::stroke(color, stroke_width * 2.0),
        Layer::OciSlash,
    ))
}
