//! Land equipment. Quantity sits above the frame; mobility hangs below it.

use crate::modifiers::Modifier as M;

use super::layout::Placement::*;
use super::layout::TextSource::*;
use super::layout::{Buffers, Category, DomStyle, GlyphSet, LayoutRule, StackSelector, fixed, slot};

pub static LAND_EQUIPMENT: LayoutRule = LayoutRule {
    name: "LandEquipment",
    category: Category::LandEquipment,
    buffers: Buffers {
        side: 6.0,
        edge: 2.0,
        inter_line: 1.0,
    },
    selector: StackSelector::Measured,
    slots: &[
        fixed(Key(M::C), Above(0.0)),
        slot(FrameCountry, Left(-3.0), LeftFromTop(-1.0)),
        slot(DtgRange, Left(-2.0), LeftFromTop(0.0)),
        slot(Joined(&[M::X, M::Y]), Left(-1.0), LeftFromTop(1.0)),
        fixed(Joined(&[M::V, M::Ad, M::Ae]), Left(0.0)),
        slot(Joined(&[M::T, M::T1]), Left(1.0), LeftFromBottom(1.0)),
        slot(Key(M::Z), Left(2.0), LeftFromBottom(0.0)),
        slot(Joined(&[M::G, M::Aq]), Right(-1.0), RightFromTop(0.0)),
        fixed(Joined(&[M::H, M::H1, M::H2]), Right(0.0)),
        slot(Joined(&[M::J, M::K, M::L, M::N, M::P]), Right(1.0), RightFromBottom(0.0)),
        slot(Key(M::Af), Right(2.0), RightFromBottom(-1.0)),
        slot(Key(M::Ar), Right(-2.0), RightFromTop(-1.0)),
    ],
    glyphs: GlyphSet {
        mobility: true,
        affiliation_modifier: true,
        feint_dummy: true,
        engagement_bar: true,
        operational_condition: true,
        direction_of_movement: Some(DomStyle::Standard),
        ..GlyphSet::NONE
    },
};
