//! Control measure points. These have no frame, so every rule stacks around
//! the icon bounds; a handful of entity codes get their own layouts.

use crate::modifiers::Modifier as M;

use super::layout::HAlign::{Center, End, Start};
use super::layout::Placement::*;
use super::layout::TextSource::*;
use super::layout::VAlign;
use super::layout::{
    Buffers, Category, DomStyle, GlyphSet, LayoutRule, StackSelector, at, at_offset, fixed, slot,
};

const BUFFERS: Buffers = Buffers {
    side: 6.0,
    edge: 2.0,
    inter_line: 1.0,
};

macro_rules! point {
    ($name:literal, [$($slot:expr),* $(,)?] $(,)?) => {
        LayoutRule {
            name: $name,
            category: Category::ControlMeasure,
            buffers: BUFFERS,
            selector: StackSelector::StackedOnly,
            slots: &[$($slot),*],
            glyphs: GlyphSet::NONE,
        }
    };
}

pub static GENERIC_CONTROL_MEASURE: LayoutRule = point!(
    "GenericControlMeasure",
    [
        slot(Key(M::T), Right(-1.0), RightFromTop(0.0)),
        fixed(Joined(&[M::H, M::H1, M::H2]), Right(0.0)),
        slot(DtgRange, Right(1.0), RightFromBottom(0.0)),
        fixed(Key(M::N), Left(0.0)),
    ],
);

pub static CONTACT_POINT: LayoutRule = point!(
    "ContactPoint",
    [fixed(Key(M::T), at(0.5, 0.4, Center, VAlign::Center))],
);

pub static DECISION_POINT: LayoutRule = point!(
    "DecisionPoint",
    [fixed(Key(M::T), at(0.5, 0.55, Center, VAlign::Center))],
);

pub static POINT_OF_INTEREST: LayoutRule = point!(
    "PointOfInterest",
    [
        fixed(Key(M::T), at(0.5, 0.3, Center, VAlign::Center)),
        fixed(Joined(&[M::H, M::H1]), Right(0.0)),
    ],
);

pub static WAYPOINT: LayoutRule = point!(
    "Waypoint",
    [fixed(Key(M::T), at_offset(1.0, 0.5, Start, VAlign::Center, 3.0, 0.0))],
);

pub static AIRFIELD: LayoutRule = point!(
    "Airfield",
    [slot(Key(M::T), Right(0.0), RightFromTop(0.0))],
);

pub static KEY_TERRAIN: LayoutRule = point!(
    "KeyTerrain",
    [
        fixed(Key(M::T), at(0.5, 0.5, Center, VAlign::Center)),
        slot(DtgRange, Below(0.0), RightFromBottom(0.0)),
    ],
);

pub static HARBOR: LayoutRule = point!(
    "Harbor",
    [fixed(Key(M::H), at(0.5, 0.5, Center, VAlign::Center))],
);

pub static SHORE_CONTROL_STATION: LayoutRule = point!(
    "ShoreControlStation",
    [
        fixed(Key(M::T), Right(0.0)),
        fixed(Key(M::H), Below(0.0)),
    ],
);

pub static SONOBUOY: LayoutRule = point!(
    "Sonobuoy",
    [
        fixed(Key(M::T), at_offset(1.0, 0.0, Start, VAlign::Center, 2.0, 0.0)),
        fixed(Joined(&[M::H, M::H1]), at_offset(1.0, 1.0, Start, VAlign::Center, 2.0, 0.0)),
        fixed(DtgRange, Below(0.0)),
    ],
);

pub static TACAN: LayoutRule = point!(
    "Tacan",
    [
        slot(Key(M::T), Right(-1.0), RightFromTop(0.0)),
        fixed(Joined(&[M::H, M::H1]), Right(0.0)),
        slot(Key(M::X), Right(1.0), RightFromBottom(0.0)),
    ],
);

pub static DEFENDED_ASSET: LayoutRule = point!(
    "DefendedAsset",
    [
        fixed(Key(M::T), Below(0.0)),
        fixed(DtgRange, Below(1.0)),
    ],
);

pub static TARGET_REFERENCE: LayoutRule = point!(
    "TargetReference",
    [
        fixed(Joined(&[M::Ap, M::Ap1]), at_offset(1.0, 0.0, Start, VAlign::Bottom, 2.0, 0.0)),
        fixed(Joined(&[M::H, M::H1]), at_offset(0.0, 1.0, End, VAlign::Top, -2.0, 0.0)),
    ],
);

pub static KNOWN_POINT: LayoutRule = point!(
    "KnownPoint",
    [fixed(Key(M::T), at_offset(1.0, 0.5, Start, VAlign::Center, 4.0, 0.0))],
);

pub static POINT_TARGET: LayoutRule = point!(
    "PointTarget",
    [
        slot(Joined(&[M::Ap, M::Ap1]), Right(-1.0), RightFromTop(0.0)),
        slot(Joined(&[M::H, M::H1]), Left(-1.0), LeftFromTop(0.0)),
        slot(DtgRange, Right(1.0), RightFromBottom(0.0)),
        slot(Key(M::T), Left(1.0), LeftFromBottom(0.0)),
    ],
);

pub static NUCLEAR_TARGET: LayoutRule = point!(
    "NuclearTarget",
    [
        slot(Joined(&[M::Ap, M::Ap1]), Right(-1.0), RightFromTop(0.0)),
        slot(Joined(&[M::H, M::H1]), Left(-1.0), LeftFromTop(0.0)),
        fixed(Key(M::T), Right(0.0)),
        slot(DtgRange, Left(1.0), LeftFromBottom(0.0)),
        slot(Key(M::Y), Right(1.0), RightFromBottom(0.0)),
    ],
);

pub static STATIC_DEPICTION: LayoutRule = point!(
    "StaticDepiction",
    [
        fixed(Key(M::T), Right(0.0)),
        fixed(Joined(&[M::H, M::H1]), Above(0.0)),
        fixed(DtgRange, Below(0.0)),
    ],
);

pub static TOWER: LayoutRule = point!(
    "Tower",
    [
        fixed(Key(M::X), Above(0.0)),
        fixed(Key(M::T), Right(0.0)),
    ],
);

/// CBRN events also take a downwind direction arrow scaled to the icon.
pub static CBRN_EVENT: LayoutRule = LayoutRule {
    name: "CbrnEvent",
    category: Category::ControlMeasure,
    buffers: BUFFERS,
    selector: StackSelector::StackedOnly,
    slots: &[
        slot(Key(M::T), Right(-1.0), RightFromTop(0.0)),
        slot(Key(M::Y), Right(1.0), RightFromBottom(0.0)),
        slot(Joined(&[M::H, M::H1]), Left(-1.0), LeftFromTop(0.0)),
        slot(DtgRange, Left(1.0), LeftFromBottom(0.0)),
        fixed(Key(M::C), Below(0.0)),
    ],
    glyphs: GlyphSet {
        direction_of_movement: Some(DomStyle::Cbrn),
        ..GlyphSet::NONE
    },
};

/// Rule for a control measure entity code.
pub fn rule_for(entity: u32) -> &'static LayoutRule {
    match entity {
        130500 => &CONTACT_POINT,
        130700 => &DECISION_POINT,
        131300 => &POINT_OF_INTEREST,
        131800 => &WAYPOINT,
        131900 => &AIRFIELD,
        132100 => &KEY_TERRAIN,
        160300 => &HARBOR,
        161200 => &SHORE_CONTROL_STATION,
        e if e / 100 == 1616 => &SONOBUOY,
        180600 => &TACAN,
        220500 => &DEFENDED_ASSET,
        240700 => &TARGET_REFERENCE,
        240800 => &KNOWN_POINT,
        240900 => &POINT_TARGET,
        241000 => &NUCLEAR_TARGET,
        270800 => &STATIC_DEPICTION,
        271300 | 271400 => &TOWER,
        281300..=281600 => &CBRN_EVENT,
        _ => &GENERIC_CONTROL_MEASURE,
    }
}
