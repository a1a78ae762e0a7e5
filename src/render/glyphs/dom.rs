//! Direction-of-movement arrow.

use glam::DVec2;

use crate::types::{Color, compass_to_screen, left_normal};

use super::super::defaults;
use super::super::primitives::{Glyph, Layer, MultiSegmentPath, Paint, Segment};

/// Arrow geometry in screen space
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Arrow {
    pub start: DVec2,
    pub tip: DVec2,
    /// Where the shaft meets the head
    pub base: DVec2,
    pub wings: [DVec2; 2],
}

/// Arrow of `length` from `start` toward compass bearing `degrees`.
///
/// The head is a fixed size: `th` and `ta` are fractions of the shaft vector,
/// so `th * L` is half the head width and `ta * L` is the head length.
/// `None` unless `length` is finite and positive.
pub fn arrow(start: DVec2, degrees: f64, length: f64) -> Option<Arrow> {
    if !(length.is_finite() && length > 0.0) {
        return None;
    }
    let d = compass_to_screen(degrees) * length;
    let tip = start + d;
    let theta = if length < defaults::ARROW_SHORT_LIMIT {
        defaults::ARROW_ANGLE_SHORT
    } else {
        defaults::ARROW_ANGLE_LONG
    };
    let th = defaults::ARROW_WIDTH / (2.0 * length);
    let ta = defaults::ARROW_WIDTH / (2.0 * (theta / 2.0).tan() * length);
    let base = tip - d * ta;
    let n = left_normal(d) * th;
    Some(Arrow {
        start,
        tip,
        base,
        wings: [base + n, base - n],
    })
}

/// Stroked shaft, then the filled head.
pub fn build(arrow: &Arrow, color: Color, stroke_width: f64) -> [Glyph; 2] {
    [
        Glyph::new(
            Segment {
                from: arrow.start,
                to: arrow.base,
            },
            Paint::stroke(color, stroke_width),
            Layer::DirectionOfMovement,
        ),
        Glyph::new(
            MultiSegmentPath::polygon(&[arrow.tip, arrow.wings[0], arrow.wings[1]]),
            Paint::fill(color),
            Layer::DirectionOfMovement,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec2;

    #[test]
    fn northeast_tip() {
        let a = arrow(DVec2::ZERO, 45.0, 40.0).unwrap();
        assert!((a.tip.x - 28.28).abs() < 0.01);
        assert!((a.tip.y + 28.28).abs() < 0.01);
    }

    #[test]
    fn head_is_ten_wide() {
        let a = arrow(dvec2(5.0, 5.0), 90.0, 40.0).unwrap();
        assert!((a.wings[0].distance(a.wings[1]) - 10.0).abs() < 1e-9);
        // short arrows use the wider angle: head length 5 / tan(0.275)
        let head = a.tip.distance(a.base);
        assert!((head - 5.0 / 0.275_f64.tan()).abs() < 1e-9);
    }

    #[test]
    fn long_arrows_use_narrow_head() {
        let a = arrow(DVec2::ZERO, 180.0, 60.0).unwrap();
        let head = a.tip.distance(a.base);
        assert!((head - 5.0 / 0.2115_f64.tan()).abs() < 1e-9);
        assert!(a.tip.y > 59.99);
    }

    #[test]
    fn shaft_then_filled_head() {
        let glyphs = build(&arrow(DVec2::ZERO, 0.0, 40.0).unwrap(), Color::BLACK, 2.0);
        assert!(glyphs[0].paint.stroke.is_some() && glyphs[0].paint.fill.is_none());
        assert!(glyphs[1].paint.stroke.is_none() && glyphs[1].paint.fill.is_some());
    }

    #[test]
    fn degenerate_length_has_no_arrow() {
        for length in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            assert_eq!(arrow(DVec2::ZERO, 45.0, length), None);
        }
    }
}
