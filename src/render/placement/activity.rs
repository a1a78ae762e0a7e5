//! Activities and events.

use crate::modifiers::Modifier as M;

use super::layout::Placement::*;
use super::layout::TextSource::*;
use super::layout::{Buffers, Category, DomStyle, GlyphSet, LayoutRule, StackSelector, fixed, slot};

pub static ACTIVITY: LayoutRule = LayoutRule {
    name: "Activity",
    category: Category::Activity,
    buffers: Buffers {
        side: 7.0,
        edge: 2.0,
        inter_line: 1.0,
    },
    selector: StackSelector::Measured,
    slots: &[
        slot(FrameCountry, Left(-2.0), LeftFromTop(-1.0)),
        slot(DtgRange, Left(-1.0), LeftFromTop(0.0)),
        fixed(Key(M::Y), Left(0.0)),
        slot(Key(M::G), Right(-1.0), RightFromTop(0.0)),
        fixed(Joined(&[M::H, M::H1, M::H2]), Right(0.0)),
        slot(Key(M::J), Right(1.0), RightFromBottom(0.0)),
        fixed(Key(M::C), Below(0.0)),
    ],
    glyphs: GlyphSet {
        affiliation_modifier: true,
        engagement_bar: true,
        direction_of_movement: Some(DomStyle::Standard),
        ..GlyphSet::NONE
    },
};

#[cfg(test)]
mod tests {
    use glam::dvec2;

    use super::super::testing::{find, labels};
    use super::*;
    use crate::descriptor::{SymbolDescriptor, SymbolSet};
    use crate::modifiers::ModifierValues;
    use crate::types::BoundsBox;

    #[test]
    fn activity_labels() {
        let b = BoundsBox::new(0.0, 0.0, 40.0, 40.0);
        let symbol = SymbolDescriptor::new(SymbolSet::Activity, 110000);
        let values = ModifierValues::new()
            .with(M::Y, "GRID")
            .with(M::J, "A1")
            .with(M::C, "12");
        let placed = labels(&ACTIVITY, &symbol, &values, &b);
        // centered(20) = 24.5
        assert_eq!(find(&placed, M::Y).anchor(), dvec2(-31.0, 24.5));
        assert_eq!(find(&placed, M::J).anchor(), dvec2(47.0, 51.0));
        assert_eq!(find(&placed, M::C).anchor(), dvec2(14.0, 51.0));
    }
}
