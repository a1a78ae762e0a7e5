//! Air and space tracks: everything stacks down the right side of the frame,
//! with the country and date-time group on the left.

use crate::modifiers::Modifier as M;

use super::layout::Placement::*;
use super::layout::TextSource::*;
use super::layout::{Buffers, Category, GlyphSet, LayoutRule, StackSelector, slot};

pub static AIR_SPACE_UNIT: LayoutRule = LayoutRule {
    name: "AirSpaceUnit",
    category: Category::AirSpaceUnit,
    buffers: Buffers {
        side: 6.0,
        edge: 2.0,
        inter_line: 1.0,
    },
    selector: StackSelector::Measured,
    slots: &[
        slot(Joined(&[M::T, M::T1]), Right(-2.0), RightFromTop(0.0)),
        slot(Key(M::P), Right(-1.0), RightFromTop(1.0)),
        slot(Joined(&[M::V, M::Ad]), Right(0.0), RightFromTop(2.0)),
        slot(Joined(&[M::X, M::Z]), Right(1.0), RightFromBottom(1.0)),
        slot(Joined(&[M::G, M::H]), Right(2.0), RightFromBottom(0.0)),
        slot(FrameCountry, Left(-1.0), LeftFromTop(0.0)),
        slot(DtgRange, Left(0.0), LeftFromTop(1.0)),
        slot(Key(M::Af), Left(1.0), LeftFromBottom(0.0)),
    ],
    glyphs: GlyphSet {
        affiliation_modifier: true,
        feint_dummy: true,
        engagement_bar: true,
        operational_condition: true,
        ..GlyphSet::NONE
    },
};
