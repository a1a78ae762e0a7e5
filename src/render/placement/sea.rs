//! Sea surface and subsurface tracks.

use crate::modifiers::Modifier as M;

use super::layout::Placement::*;
use super::layout::TextSource::*;
use super::layout::{Buffers, Category, DomStyle, GlyphSet, LayoutRule, StackSelector, slot};

pub static SEA_SURFACE: LayoutRule = LayoutRule {
    name: "SeaSurfaceUnit",
    category: Category::SeaSurfaceUnit,
    buffers: Buffers {
        side: 6.0,
        edge: 2.0,
        inter_line: 1.0,
    },
    selector: StackSelector::Measured,
    slots: &[
        slot(Joined(&[M::T, M::T1]), Right(-2.0), RightFromTop(0.0)),
        slot(Key(M::V), Right(-1.0), RightFromTop(1.0)),
        slot(Key(M::P), Right(0.0), RightFromBottom(2.0)),
        slot(Joined(&[M::G, M::H]), Right(1.0), RightFromBottom(1.0)),
        slot(Joined(&[M::Y, M::Z]), Right(2.0), RightFromBottom(0.0)),
        slot(FrameCountry, Left(-1.0), LeftFromTop(0.0)),
        slot(DtgRange, Left(0.0), LeftFromTop(1.0)),
        slot(Key(M::Aq), Left(1.0), LeftFromBottom(0.0)),
        slot(Key(M::Ar), Left(2.0), LeftFromBottom(-1.0)),
    ],
    glyphs: GlyphSet {
        affiliation_modifier: true,
        hq_staff: true,
        task_force: true,
        feint_dummy: true,
        engagement_bar: true,
        operational_condition: true,
        direction_of_movement: Some(DomStyle::Standard),
        ..GlyphSet::NONE
    },
};

/// Subsurface adds depth and the towed sonar array under the frame.
pub static SEA_SUBSURFACE: LayoutRule = LayoutRule {
    name: "SeaSubsurfaceUnit",
    category: Category::SeaSubsurfaceUnit,
    buffers: Buffers {
        side: 6.0,
        edge: 2.0,
        inter_line: 2.0,
    },
    selector: StackSelector::Measured,
    slots: &[
        slot(Joined(&[M::T, M::T1]), Right(-2.0), RightFromTop(0.0)),
        slot(Key(M::V), Right(-1.0), RightFromTop(1.0)),
        slot(Key(M::X), Right(0.0), RightFromBottom(2.0)),
        slot(Joined(&[M::G, M::H]), Right(1.0), RightFromBottom(1.0)),
        slot(Joined(&[M::Y, M::Z]), Right(2.0), RightFromBottom(0.0)),
        slot(FrameCountry, Left(-1.0), LeftFromTop(0.0)),
        slot(DtgRange, Left(0.0), LeftFromTop(1.0)),
        slot(Key(M::Ar), Left(1.0), LeftFromBottom(0.0)),
    ],
    glyphs: GlyphSet {
        tow_array: true,
        affiliation_modifier: true,
        feint_dummy: true,
        engagement_bar: true,
        operational_condition: true,
        direction_of_movement: Some(DomStyle::Standard),
        ..GlyphSet::NONE
    },
};
