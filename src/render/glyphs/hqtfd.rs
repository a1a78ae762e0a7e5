//! Indicators above and beside the frame: echelon and affiliation-modifier
//! text, task force box, headquarters staff, feint/dummy and leadership.

use glam::{DVec2, dvec2};

use crate::descriptor::FrameShape;
use crate::errors::RenderError;
use crate::types::{BoundsBox, Color};

use super::super::context::{LineMetrics, RenderContext};
use super::super::defaults;
use super::super::label::{LabelBox, LabelRole};
use super::super::primitives::{Glyph, Layer, MultiSegmentPath, Paint, Rect, Segment};

/// Echelon text centered above the frame.
pub fn echelon(ctx: &RenderContext<'_>, b: &BoundsBox, text: &str) -> Result<LabelBox, RenderError> {
    let label = ctx.label(text, LabelRole::Echelon)?;
    let anchor = dvec2(
        b.center_x() - label.width() / 2.0,
        b.y - defaults::ECHELON_GAP - label.descent(),
    );
    Ok(label.with_anchor(anchor))
}

/// Exercise / simulation letter at the frame's top-right corner.
pub fn affiliation_modifier(
    ctx: &RenderContext<'_>,
    b: &BoundsBox,
    letter: &str,
) -> Result<LabelBox, RenderError> {
    let label = ctx.label(letter, LabelRole::AffiliationModifier)?;
    Ok(label.with_anchor(dvec2(b.right(), b.y)))
}

/// Box resting on the frame top, around the echelon text when there is one.
pub fn task_force(
    b: &BoundsBox,
    echelon: Option<&LabelBox>,
    line: &LineMetrics,
    color: Color,
    stroke_width: f64,
) -> Glyph {
    let rect = match echelon {
        Some(label) => {
            let e = label.bounds();
            let top = e.y - defaults::TASK_FORCE_TOP_MARGIN;
            BoundsBox::new(
                e.x - defaults::TASK_FORCE_SIDE_MARGIN,
                top,
                e.width + 2.0 * defaults::TASK_FORCE_SIDE_MARGIN,
                (b.y - top).max(0.0),
            )
        }
        None => {
            let width = b.width * defaults::TASK_FORCE_BARE_WIDTH;
            BoundsBox::new(
                b.center_x() - width / 2.0,
                b.y - line.height,
                width,
                line.height,
            )
        }
    };
    Glyph::new(Rect { rect }, Paint::stroke(color, stroke_width), Layer::TaskForce)
}

/// Staff on the frame's left edge. Returns the glyph and the staff's free end.
pub fn hq_staff(
    b: &BoundsBox,
    shape: Option<FrameShape>,
    color: Color,
    stroke_width: f64,
) -> (Glyph, DVec2) {
    let from = match shape {
        Some(FrameShape::FriendRectangle) | Some(FrameShape::Neutral) | None => {
            dvec2(b.x, b.bottom())
        }
        Some(_) => dvec2(b.x, b.center_y()),
    };
    let to = from + dvec2(0.0, b.height);
    let glyph = Glyph::new(
        Segment { from, to },
        Paint::stroke(color, stroke_width),
        Layer::HqStaff,
    );
    (glyph, to)
}

/// How far above the frame top the indicator apex sits.
pub fn apex_rise(shape: Option<FrameShape>, b: &BoundsBox) -> f64 {
    match shape {
        Some(FrameShape::FriendRectangle) => 0.5 * b.height,
        Some(FrameShape::FriendRound) => 0.35 * b.width,
        Some(FrameShape::HostileDiamond) => 0.3 * b.height,
        Some(FrameShape::Neutral) => 0.45 * b.height,
        Some(FrameShape::UnknownQuatrefoil) => 0.3 * b.width,
        Some(FrameShape::UnknownRound) => 0.25 * b.width,
        None => 0.3 * b.height,
    }
}

/// Inverted V from the top-left corner over the apex to the top-right corner.
/// `clear_of` is the top of a task force box or echelon text the apex must
/// stay above.
fn chevron(b: &BoundsBox, shape: Option<FrameShape>, clear_of: Option<f64>) -> [DVec2; 3] {
    let mut apex_y = b.y - apex_rise(shape, b);
    if let Some(top) = clear_of {
        apex_y = apex_y.min(top - defaults::FEINT_CLEARANCE);
    }
    [
        dvec2(b.x, b.y),
        dvec2(b.center_x(), apex_y),
        dvec2(b.right(), b.y),
    ]
}

pub fn feint_dummy(
    b: &BoundsBox,
    shape: Option<FrameShape>,
    clear_of: Option<f64>,
    color: Color,
    stroke_width: f64,
) -> Glyph {
    let dash = if b.height < defaults::FEINT_SMALL_HEIGHT {
        defaults::FEINT_DASH_SMALL
    } else {
        defaults::FEINT_DASH
    };
    let mut path = MultiSegmentPath::polyline(&chevron(b, shape, clear_of));
    path.dash = Some(dash);
    Glyph::new(path, Paint::stroke(color, stroke_width), Layer::FeintDummy)
}

pub fn leadership(
    b: &BoundsBox,
    shape: Option<FrameShape>,
    clear_of: Option<f64>,
    color: Color,
    stroke_width: f64,
) -> Glyph {
    Glyph::new(
        MultiSegmentPath::polyline(&chevron(b, shape, clear_of)),
        Paint::stroke(color, stroke_width),
        Layer::Leadership,
    )
}
