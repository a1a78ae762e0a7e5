//! Glyph families a rule enables, built in dependency order: later overlays
//! stack on top of (or hang below) earlier ones.

use glam::dvec2;

use crate::config::OciDisplay;
use crate::descriptor::{FrameShape, SymbolDescriptor};
use crate::errors::{ModifierError, RenderError};
use crate::modifiers::{Modifier, ModifierValues};
use crate::types::BoundsBox;

use super::super::context::RenderContext;
use super::super::defaults;
use super::super::glyphs::oci::Condition;
use super::super::glyphs::{dom, engagement, hqtfd, mobility, oci};
use super::super::label::LabelBox;
use super::super::primitives::Glyph;
use super::layout::{DomStyle, LayoutRule};

/// Overlay labels (echelon, affiliation letter, engagement text) and glyphs.
#[derive(Default)]
pub struct Overlays {
    pub labels: Vec<LabelBox>,
    pub glyphs: Vec<Glyph>,
}

/// An indicator draws when the symbol supports its key and either the
/// descriptor asks for it or the key carries a value.
fn enabled(
    ctx: &RenderContext<'_>,
    symbol: &SymbolDescriptor,
    working: &ModifierValues,
    key: Modifier,
    flagged: bool,
) -> bool {
    ctx.supports(symbol, key) && (flagged || working.contains(key))
}

pub fn build(
    ctx: &mut RenderContext<'_>,
    rule: &LayoutRule,
    symbol: &SymbolDescriptor,
    working: &ModifierValues,
    b: &BoundsBox,
    placed: &[LabelBox],
) -> Result<Overlays, RenderError> {
    let g = &rule.glyphs;
    let shape = symbol.frame_shape();
    let color = ctx.palette.line;
    let sw = ctx.stroke_width;
    let mut out = Overlays::default();

    let echelon = if g.echelon {
        let text = symbol
            .amplifier
            .echelon()
            .map(|e| e.label().to_string())
            .or_else(|| working.get(Modifier::B).map(str::to_string));
        match text {
            Some(text) if ctx.supports(symbol, Modifier::B) => {
                Some(hqtfd::echelon(ctx, b, &text)?)
            }
            _ => None,
        }
    } else {
        None
    };

    if g.affiliation_modifier {
        if let Some(letter) = symbol.affiliation_modifier() {
            out.labels.push(hqtfd::affiliation_modifier(ctx, b, letter)?);
        }
    }

    let task_force = (g.task_force
        && enabled(ctx, symbol, working, Modifier::D, symbol.hqtfd.task_force()))
    .then(|| hqtfd::task_force(b, echelon.as_ref(), &ctx.line, color, sw));

    let clear_of = task_force
        .as_ref()
        .map(|tf| tf.bounds().y)
        .or_else(|| echelon.as_ref().map(|e| e.bounds().y));

    let feint_dummy = (g.feint_dummy
        && enabled(ctx, symbol, working, Modifier::Ab, symbol.hqtfd.feint_dummy()))
    .then(|| hqtfd::feint_dummy(b, shape, clear_of, color, sw));

    if g.leadership && enabled(ctx, symbol, working, Modifier::Av, symbol.amplifier.leader()) {
        out.glyphs.push(hqtfd::leadership(b, shape, clear_of, color, sw));
    }

    if g.engagement_bar {
        if let Some(text) = working.get(Modifier::Ao) {
            let resting_on = feint_dummy
                .as_ref()
                .map(|fd| fd.bounds().y)
                .or_else(|| task_force.as_ref().map(|tf| tf.bounds().y))
                .or_else(|| echelon.as_ref().map(|e| e.bounds().y))
                .or_else(|| {
                    placed
                        .iter()
                        .find(|l| l.key == Some(Modifier::C))
                        .map(|l| l.bounds().y)
                })
                .unwrap_or(b.y);
            let bar = engagement::build(ctx, b, text, resting_on)?;
            out.glyphs.extend(bar.glyphs);
            out.labels.push(bar.text);
        }
    }

    let mut lowest = b.bottom();
    if let Some(kind) = symbol.amplifier.mobility() {
        let (wanted, key) = if kind.is_towed_array() {
            (g.tow_array, Modifier::Ag)
        } else {
            (g.mobility, Modifier::R)
        };
        if wanted && ctx.supports(symbol, key) {
            let glyphs = mobility::build(kind, b, color, sw);
            for glyph in &glyphs {
                lowest = lowest.max(glyph.bounds().bottom());
            }
            out.glyphs.extend(glyphs);
        }
    }

    if g.operational_condition && ctx.supports(symbol, Modifier::Al) {
        let condition = match working.get(Modifier::Al) {
            Some(value) => match value.parse::<Condition>() {
                Ok(c) => Some(c),
                Err(err) => {
                    ctx.skip(err);
                    None
                }
            },
            None => Condition::from_status(symbol.status),
        };
        if let Some(condition) = condition {
            match ctx.settings.oci_display {
                OciDisplay::Bar => out.glyphs.push(oci::bar(condition, b, lowest, ctx.pixel_size)),
                OciDisplay::Slash => out.glyphs.extend(oci::slash(condition, b, shape, color, sw)),
                OciDisplay::Off => {}
            }
        }
    }

    let staff_end = if g.hq_staff
        && enabled(ctx, symbol, working, Modifier::S, symbol.hqtfd.headquarters())
    {
        let (glyph, end) = hqtfd::hq_staff(b, shape, color, sw);
        out.glyphs.push(glyph);
        Some(end)
    } else {
        None
    };

    if let (Some(style), Some(value)) = (g.direction_of_movement, working.get(Modifier::Q)) {
        match value.trim().parse::<f64>() {
            Ok(degrees) if degrees.is_finite() => {
                let length = match (style, staff_end) {
                    (DomStyle::Cbrn, _) => defaults::DOM_CBRN_FACTOR * b.height,
                    (DomStyle::Standard, Some(_)) => match shape {
                        Some(FrameShape::FriendRectangle) | Some(FrameShape::Neutral) => {
                            defaults::DOM_HQ_SQUARE_FACTOR * b.height
                        }
                        _ => defaults::DOM_HQ_OTHER_FACTOR * b.height,
                    },
                    (DomStyle::Standard, None) => defaults::DOM_LENGTH,
                };
                let start = staff_end.unwrap_or(dvec2(b.center_x(), b.bottom()));
                match dom::arrow(start, degrees, length) {
                    Some(arrow) => out.glyphs.extend(dom::build(&arrow, color, sw)),
                    None => ctx.skip(
                        ModifierError::invalid(Modifier::Q, value, "arrow has no length")
                            .with_help("the arrow length scales with the icon height, which is zero"),
                    ),
                }
            }
            _ => ctx.skip(
                ModifierError::invalid(Modifier::Q, value, "not a finite compass bearing")
                    .with_help("give the direction in compass degrees, e.g. 45"),
            ),
        }
    }

    if let Some(label) = echelon {
        out.labels.push(label);
    }
    out.glyphs.extend(task_force);
    out.glyphs.extend(feint_dummy);
    Ok(out)
}
