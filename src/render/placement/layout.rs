//! Layout rule model: text sources, placements and the per-category rule.

use glam::{DVec2, dvec2};

use crate::descriptor::SymbolDescriptor;
use crate::modifiers::{Modifier, ModifierValues};
use crate::types::BoundsBox;

use super::super::context::{LineMetrics, RenderContext};
use super::super::label::LabelBox;

/// Where a slot's text comes from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TextSource {
    Key(Modifier),
    /// Present values joined with spaces
    Joined(&'static [Modifier]),
    /// `W - W1`, or whichever of the two is present
    DtgRange,
    /// `F` with R / D / RD spelled as (+) / (-) / (±)
    ReinforcedReduced,
    /// `E` followed by `AS` (or the descriptor's country). Consumes both.
    FrameCountry,
    /// Fixed prefix before a value
    Prefixed(&'static str, Modifier),
}

impl TextSource {
    /// Text to draw and the key it is reported under, or `None` when nothing
    /// applicable is present.
    pub fn resolve(
        &self,
        ctx: &RenderContext<'_>,
        symbol: &SymbolDescriptor,
        working: &mut ModifierValues,
    ) -> Option<(String, Modifier)> {
        match *self {
            TextSource::Key(key) => working.get(key).map(|v| (v.to_string(), key)),
            TextSource::Joined(keys) => {
                let first = keys.iter().copied().find(|k| working.contains(*k))?;
                let text = keys
                    .iter()
                    .filter_map(|k| working.get(*k))
                    .collect::<Vec<_>>()
                    .join(" ")
                    .trim()
                    .to_string();
                (!text.is_empty()).then_some((text, first))
            }
            TextSource::DtgRange => match (working.get(Modifier::W), working.get(Modifier::W1)) {
                (Some(w), Some(w1)) => Some((format!("{w} - {w1}"), Modifier::W)),
                (Some(w), None) => Some((w.to_string(), Modifier::W)),
                (None, Some(w1)) => Some((w1.to_string(), Modifier::W1)),
                (None, None) => None,
            },
            TextSource::ReinforcedReduced => working.get(Modifier::F).map(|v| {
                let text = match v.trim() {
                    "R" => "(+)".to_string(),
                    "D" => "(-)".to_string(),
                    "RD" => "(\u{00B1})".to_string(),
                    other => other.to_string(),
                };
                (text, Modifier::F)
            }),
            TextSource::FrameCountry => {
                let frame = working.remove(Modifier::E);
                let country = working
                    .remove(Modifier::As)
                    .or_else(|| {
                        ctx.supports(symbol, Modifier::As)
                            .then(|| ctx.country(symbol.country))
                            .flatten()
                    });
                let key = if frame.is_some() {
                    Modifier::E
                } else {
                    Modifier::As
                };
                let text = [frame, country]
                    .into_iter()
                    .flatten()
                    .collect::<Vec<_>>()
                    .join(" ");
                let text = text.trim();
                (!text.is_empty()).then(|| (text.to_string(), key))
            }
            TextSource::Prefixed(prefix, key) => {
                working.get(key).map(|v| (format!("{prefix}{v}"), key))
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HAlign {
    Start,
    Center,
    End,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VAlign {
    Baseline,
    Center,
    Top,
    Bottom,
}

/// Reference point at a fraction of the symbol bounds plus an offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AtPoint {
    pub fx: f64,
    pub fy: f64,
    pub h: HAlign,
    pub v: VAlign,
    pub dx: f64,
    pub dy: f64,
}

/// Label position relative to the symbol bounds. Rows count baselines
/// (`lineHeight + interLine`), negative rows go up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Placement {
    Left(f64),
    Right(f64),
    LeftFromTop(f64),
    RightFromTop(f64),
    LeftFromBottom(f64),
    RightFromBottom(f64),
    Above(f64),
    Below(f64),
    Inside(f64),
    At(AtPoint),
}

pub const fn at(fx: f64, fy: f64, h: HAlign, v: VAlign) -> Placement {
    at_offset(fx, fy, h, v, 0.0, 0.0)
}

pub const fn at_offset(fx: f64, fy: f64, h: HAlign, v: VAlign, dx: f64, dy: f64) -> Placement {
    Placement::At(AtPoint {
        fx,
        fy,
        h,
        v,
        dx,
        dy,
    })
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Buffers {
    /// Horizontal gap between the frame and side labels
    pub side: f64,
    /// Vertical gap between the frame and labels above or below it
    pub edge: f64,
    pub inter_line: f64,
}

impl Placement {
    /// Baseline-left anchor for `label` around `b`.
    pub fn anchor(
        &self,
        label: &LabelBox,
        b: &BoundsBox,
        line: &LineMetrics,
        buffers: &Buffers,
    ) -> DVec2 {
        let step = line.height + buffers.inter_line;
        let w = label.width();
        let left = b.x - w - buffers.side;
        let right = b.right() + buffers.side;
        let centered_x = b.center_x() - w / 2.0;
        let mid = line.centered(b.center_y());
        let from_top = |n: f64| b.y - buffers.edge - label.descent() + n * step;
        let from_bottom = |n: f64| b.bottom() + buffers.edge + label.ascent() - n * step;

        match *self {
            Placement::Left(row) => dvec2(left, mid + row * step),
            Placement::Right(row) => dvec2(right, mid + row * step),
            Placement::LeftFromTop(n) => dvec2(left, from_top(n)),
            Placement::RightFromTop(n) => dvec2(right, from_top(n)),
            Placement::LeftFromBottom(n) => dvec2(left, from_bottom(n)),
            Placement::RightFromBottom(n) => dvec2(right, from_bottom(n)),
            Placement::Above(n) => dvec2(
                centered_x,
                b.y - buffers.edge - label.descent() - n * step,
            ),
            Placement::Below(n) => dvec2(
                centered_x,
                b.bottom() + buffers.edge + label.ascent() + n * step,
            ),
            Placement::Inside(row) => dvec2(centered_x, mid + row * step),
            Placement::At(at) => {
                let rx = b.x + at.fx * b.width + at.dx;
                let ry = b.y + at.fy * b.height + at.dy;
                let x = match at.h {
                    HAlign::Start => rx,
                    HAlign::Center => rx - w / 2.0,
                    HAlign::End => rx - w,
                };
                let y = match at.v {
                    VAlign::Baseline => ry,
                    VAlign::Center => line.centered(ry),
                    VAlign::Top => ry + label.ascent(),
                    VAlign::Bottom => ry - label.descent(),
                };
                dvec2(x, y)
            }
        }
    }
}

/// One label position in a rule: text plus where it goes in each mode.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Slot {
    pub source: TextSource,
    /// Used when the symbol is too short for absolute rows
    pub stacked: Placement,
    pub absolute: Placement,
}

pub const fn slot(source: TextSource, stacked: Placement, absolute: Placement) -> Slot {
    Slot {
        source,
        stacked,
        absolute,
    }
}

/// Same placement in both modes.
pub const fn fixed(source: TextSource, placement: Placement) -> Slot {
    slot(source, placement, placement)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StackSelector {
    /// Stacked rows when three lines don't fit the symbol height
    Measured,
    StackedOnly,
}

impl StackSelector {
    pub fn stacked(self, line: &LineMetrics, b: &BoundsBox) -> bool {
        match self {
            StackSelector::Measured => 3.0 * line.height > b.height,
            StackSelector::StackedOnly => true,
        }
    }
}

/// How the direction-of-movement arrow is sized.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DomStyle {
    Standard,
    /// Scaled to the symbol height
    Cbrn,
}

/// Glyph families a rule enables
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GlyphSet {
    pub mobility: bool,
    pub tow_array: bool,
    pub echelon: bool,
    pub affiliation_modifier: bool,
    pub hq_staff: bool,
    pub task_force: bool,
    pub feint_dummy: bool,
    pub leadership: bool,
    pub engagement_bar: bool,
    pub operational_condition: bool,
    pub direction_of_movement: Option<DomStyle>,
}

impl GlyphSet {
    pub const NONE: GlyphSet = GlyphSet {
        mobility: false,
        tow_array: false,
        echelon: false,
        affiliation_modifier: false,
        hq_staff: false,
        task_force: false,
        feint_dummy: false,
        leadership: false,
        engagement_bar: false,
        operational_condition: false,
        direction_of_movement: None,
    };
}

/// Category of symbols sharing a layout
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    AirSpaceUnit,
    LandUnit,
    GenericUnit,
    LandEquipment,
    LandInstallation,
    DismountedIndividual,
    SeaSurfaceUnit,
    SeaSubsurfaceUnit,
    Activity,
    Cyberspace,
    ControlMeasure,
    FreezingLevel,
    TropopauseLevel,
}

#[derive(Debug, PartialEq)]
pub struct LayoutRule {
    pub name: &'static str,
    pub category: Category,
    pub buffers: Buffers,
    pub selector: StackSelector,
    pub slots: &'static [Slot],
    pub glyphs: GlyphSet,
}
