//! Meteorological level symbols: the altitude is written inside the icon.

use crate::modifiers::Modifier as M;

use super::layout::Placement::Inside;
use super::layout::TextSource::{Key, Prefixed};
use super::layout::{Buffers, Category, GlyphSet, LayoutRule, StackSelector, fixed};

const FREEZING_LEVEL_ENTITY: u32 = 162300;
const TROPOPAUSE_LEVEL_ENTITY: u32 = 162200;

pub static FREEZING_LEVEL: LayoutRule = LayoutRule {
    name: "FreezingLevel",
    category: Category::FreezingLevel,
    buffers: Buffers {
        side: 6.0,
        edge: 2.0,
        inter_line: 1.0,
    },
    selector: StackSelector::StackedOnly,
    slots: &[fixed(Prefixed("0\u{00B0}:", M::X), Inside(0.0))],
    glyphs: GlyphSet::NONE,
};

pub static TROPOPAUSE_LEVEL: LayoutRule = LayoutRule {
    name: "TropopauseLevel",
    category: Category::TropopauseLevel,
    buffers: Buffers {
        side: 6.0,
        edge: 2.0,
        inter_line: 1.0,
    },
    selector: StackSelector::StackedOnly,
    slots: &[fixed(Key(M::X), Inside(0.0))],
    glyphs: GlyphSet::NONE,
};

/// Only the two level symbols take modifiers.
pub fn rule_for(entity: u32) -> Option<&'static LayoutRule> {
    match entity {
        FREEZING_LEVEL_ENTITY => Some(&FREEZING_LEVEL),
        TROPOPAUSE_LEVEL_ENTITY => Some(&TROPOPAUSE_LEVEL),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use glam::dvec2;

    use super::super::testing::{find, labels};
    use super::*;
    use crate::descriptor::{SymbolDescriptor, SymbolSet};
    use crate::modifiers::ModifierValues;
    use crate::types::BoundsBox;

    #[test]
    fn freezing_level_prefix() {
        let b = BoundsBox::new(0.0, 0.0, 60.0, 20.0);
        let symbol = SymbolDescriptor::new(SymbolSet::Atmospheric, FREEZING_LEVEL_ENTITY);
        let values = ModifierValues::new().with(M::X, "1200");
        let placed = labels(&FREEZING_LEVEL, &symbol, &values, &b);
        let x = find(&placed, M::X);
        assert_eq!(x.text(), "0\u{00B0}:1200");
        // 7 chars centered on x = 30; centered(10) = 14.5
        assert_eq!(x.anchor(), dvec2(9.0, 14.5));
    }

    #[test]
    fn tropopause_plain_altitude() {
        let b = BoundsBox::new(0.0, 0.0, 60.0, 20.0);
        let symbol = SymbolDescriptor::new(SymbolSet::Atmospheric, TROPOPAUSE_LEVEL_ENTITY);
        let values = ModifierValues::new().with(M::X, "FL390");
        let placed = labels(&TROPOPAUSE_LEVEL, &symbol, &values, &b);
        assert_eq!(find(&placed, M::X).text(), "FL390");
        assert_eq!(rule_for(110000), None);
    }
}
