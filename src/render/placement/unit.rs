//! Framed unit categories: land unit, generic unit, land installation,
//! dismounted individual and cyberspace.
//!
//! Left column (top to bottom): country, date-time group, altitude/location,
//! type, designation, speed. Right column: reinforced/reduced, staff
//! comments, additional information, higher formation, evaluation.

use crate::modifiers::Modifier as M;

use super::layout::Placement::*;
use super::layout::TextSource::*;
use super::layout::{Buffers, Category, DomStyle, GlyphSet, LayoutRule, StackSelector, fixed, slot};

pub static LAND_UNIT: LayoutRule = LayoutRule {
    name: "LandUnit",
    category: Category::LandUnit,
    buffers: Buffers {
        side: 7.0,
        edge: 2.0,
        inter_line: 1.0,
    },
    selector: StackSelector::Measured,
    slots: &[
        slot(FrameCountry, Left(-3.0), LeftFromTop(-1.0)),
        slot(DtgRange, Left(-2.0), LeftFromTop(0.0)),
        slot(Joined(&[M::X, M::Y]), Left(-1.0), LeftFromTop(1.0)),
        fixed(Joined(&[M::V, M::Ad, M::Ae]), Left(0.0)),
        slot(Joined(&[M::T, M::T1]), Left(1.0), LeftFromBottom(1.0)),
        slot(Key(M::Z), Left(2.0), LeftFromBottom(0.0)),
        slot(ReinforcedReduced, Right(-2.0), RightFromTop(0.0)),
        slot(Joined(&[M::G, M::Aq]), Right(-1.0), RightFromTop(1.0)),
        fixed(Joined(&[M::H, M::H1, M::H2]), Right(0.0)),
        slot(Key(M::M), Right(1.0), RightFromBottom(1.0)),
        slot(Joined(&[M::J, M::K, M::L, M::N, M::P]), Right(2.0), RightFromBottom(0.0)),
        slot(Key(M::Af), Right(3.0), RightFromBottom(-1.0)),
        fixed(Key(M::Aa), Inside(0.0)),
    ],
    glyphs: GlyphSet {
        echelon: true,
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

pub static GENERIC_UNIT: LayoutRule = LayoutRule {
    name: "GenericUnit",
    category: Category::GenericUnit,
    buffers: Buffers {
        side: 7.0,
        edge: 2.0,
        inter_line: 1.0,
    },
    selector: StackSelector::Measured,
    slots: &[
        slot(FrameCountry, Left(-2.0), LeftFromTop(-1.0)),
        slot(DtgRange, Left(-1.0), LeftFromTop(0.0)),
        slot(Joined(&[M::X, M::Y]), Left(0.0), LeftFromTop(1.0)),
        slot(Joined(&[M::T, M::T1]), Left(1.0), LeftFromBottom(0.0)),
        slot(Joined(&[M::G, M::Aq]), Right(-1.0), RightFromTop(0.0)),
        fixed(Joined(&[M::H, M::H1, M::H2]), Right(0.0)),
        slot(Joined(&[M::J, M::K, M::L, M::N, M::P]), Right(1.0), RightFromBottom(0.0)),
        slot(Key(M::Af), Right(2.0), RightFromBottom(-1.0)),
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

pub static LAND_INSTALLATION: LayoutRule = LayoutRule {
    name: "LandInstallation",
    category: Category::LandInstallation,
    buffers: Buffers {
        side: 7.0,
        edge: 2.0,
        inter_line: 1.0,
    },
    selector: StackSelector::Measured,
    slots: &[
        slot(FrameCountry, Left(-2.0), LeftFromTop(-1.0)),
        slot(DtgRange, Left(-1.0), LeftFromTop(0.0)),
        slot(Joined(&[M::X, M::Y]), Left(0.0), LeftFromTop(1.0)),
        slot(Joined(&[M::T, M::T1]), Left(1.0), LeftFromBottom(0.0)),
        slot(Key(M::G), Right(-1.0), RightFromTop(0.0)),
        fixed(Joined(&[M::H, M::H1, M::H2]), Right(0.0)),
        slot(Joined(&[M::J, M::K, M::P]), Right(1.0), RightFromBottom(0.0)),
        slot(Key(M::Af), Right(2.0), RightFromBottom(-1.0)),
        slot(Key(M::Ar), Right(-2.0), RightFromTop(-1.0)),
    ],
    glyphs: GlyphSet {
        affiliation_modifier: true,
        hq_staff: true,
        feint_dummy: true,
        engagement_bar: true,
        operational_condition: true,
        ..GlyphSet::NONE
    },
};

pub static DISMOUNTED_INDIVIDUAL: LayoutRule = LayoutRule {
    name: "DismountedIndividual",
    category: Category::DismountedIndividual,
    buffers: Buffers {
        side: 7.0,
        edge: 2.0,
        inter_line: 1.0,
    },
    selector: StackSelector::Measured,
    slots: &[
        slot(FrameCountry, Left(-3.0), LeftFromTop(-1.0)),
        slot(DtgRange, Left(-2.0), LeftFromTop(0.0)),
        slot(Joined(&[M::X, M::Y]), Left(-1.0), LeftFromTop(1.0)),
        fixed(Joined(&[M::V, M::Ad, M::Ae]), Left(0.0)),
        slot(Joined(&[M::T, M::T1]), Left(1.0), LeftFromBottom(1.0)),
        slot(Key(M::Z), Left(2.0), LeftFromBottom(0.0)),
        slot(Joined(&[M::G, M::Aq]), Right(-1.0), RightFromTop(1.0)),
        fixed(Joined(&[M::H, M::H1, M::H2]), Right(0.0)),
        slot(Key(M::M), Right(1.0), RightFromBottom(1.0)),
        slot(Joined(&[M::J, M::K, M::L, M::P]), Right(2.0), RightFromBottom(0.0)),
        slot(Key(M::Af), Right(3.0), RightFromBottom(-1.0)),
    ],
    glyphs: GlyphSet {
        affiliation_modifier: true,
        leadership: true,
        feint_dummy: true,
        engagement_bar: true,
        operational_condition: true,
        direction_of_movement: Some(DomStyle::Standard),
        ..GlyphSet::NONE
    },
};

pub static CYBERSPACE: LayoutRule = LayoutRule {
    name: "Cyberspace",
    category: Category::Cyberspace,
    buffers: Buffers {
        side: 7.0,
        edge: 2.0,
        inter_line: 1.0,
    },
    selector: StackSelector::Measured,
    slots: &[
        slot(FrameCountry, Left(-2.0), LeftFromTop(-1.0)),
        slot(DtgRange, Left(-1.0), LeftFromTop(0.0)),
        fixed(Key(M::V), Left(0.0)),
        slot(Joined(&[M::T, M::T1]), Left(1.0), LeftFromBottom(0.0)),
        slot(ReinforcedReduced, Right(-2.0), RightFromTop(0.0)),
        slot(Key(M::G), Right(-1.0), RightFromTop(1.0)),
        fixed(Joined(&[M::H, M::H1, M::H2]), Right(0.0)),
        slot(Key(M::M), Right(1.0), RightFromBottom(1.0)),
        slot(Joined(&[M::K, M::L]), Right(2.0), RightFromBottom(0.0)),
    ],
    glyphs: GlyphSet {
        echelon: true,
        affiliation_modifier: true,
        hq_staff: true,
        task_force: true,
        feint_dummy: true,
        engagement_bar: true,
        operational_condition: true,
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

    // Tall enough for absolute rows: 3 * 12 <= 40
    fn tall() -> BoundsBox {
        BoundsBox::new(10.0, 10.0, 50.0, 40.0)
    }

    // Too short: stacked rows around the center
    fn short() -> BoundsBox {
        BoundsBox::new(10.0, 10.0, 50.0, 30.0)
    }

    #[test]
    fn generic_unit_dtg_absolute() {
        let symbol = SymbolDescriptor::new(SymbolSet::LandCivilian, 110000);
        let values = ModifierValues::new().with(M::W, "231200Z");
        let placed = labels(&GENERIC_UNIT, &symbol, &values, &tall());
        let w = find(&placed, M::W);
        // x = b.x - width - 7, y = b.y - 2 - descent
        assert_eq!(w.anchor(), dvec2(10.0 - 42.0 - 7.0, 10.0 - 2.0 - 3.0));
    }

    #[test]
    fn generic_unit_stacked_rows() {
        let symbol = SymbolDescriptor::new(SymbolSet::LandCivilian, 110000);
        let values = ModifierValues::new()
            .with(M::W, "231200Z")
            .with(M::T, "ALPHA")
            .with(M::J, "A1");
        let placed = labels(&GENERIC_UNIT, &symbol, &values, &short());
        // centered(25) = 29.5, step 13
        assert_eq!(find(&placed, M::W).anchor(), dvec2(-39.0, 16.5));
        assert_eq!(find(&placed, M::T).anchor(), dvec2(-27.0, 42.5));
        assert_eq!(find(&placed, M::J).anchor(), dvec2(67.0, 42.5));
    }

    #[test]
    fn land_unit_absolute_columns() {
        let symbol = SymbolDescriptor::new(SymbolSet::LandUnit, 121100);
        let values = ModifierValues::new()
            .with(M::F, "RD")
            .with(M::G, "STAFF")
            .with(M::Aq, "GU")
            .with(M::H, "H")
            .with(M::M, "3-7")
            .with(M::Z, "12")
            .with(M::T, "1-66")
            .with(M::T1, "B")
            .with(M::Aa, "C2");
        let placed = labels(&LAND_UNIT, &symbol, &values, &tall());
        let f = find(&placed, M::F);
        assert_eq!(f.text(), "(\u{00B1})");
        assert_eq!(f.anchor(), dvec2(67.0, 5.0));
        assert_eq!(find(&placed, M::G).text(), "STAFF GU");
        assert_eq!(find(&placed, M::G).anchor(), dvec2(67.0, 18.0));
        // centered(30) = 34.5
        assert_eq!(find(&placed, M::H).anchor(), dvec2(67.0, 34.5));
        assert_eq!(find(&placed, M::M).anchor(), dvec2(67.0, 48.0));
        assert_eq!(find(&placed, M::Z).anchor(), dvec2(10.0 - 12.0 - 7.0, 61.0));
        let t = find(&placed, M::T);
        assert_eq!(t.text(), "1-66 B");
        assert_eq!(t.anchor(), dvec2(10.0 - 36.0 - 7.0, 48.0));
        assert_eq!(find(&placed, M::Aa).anchor(), dvec2(29.0, 34.5));
    }

    #[test]
    fn land_unit_country_sits_above_dtg() {
        let symbol = SymbolDescriptor::new(SymbolSet::LandUnit, 121100);
        let values = ModifierValues::new()
            .with(M::E, "EX")
            .with(M::As, "USA")
            .with(M::W, "231200Z");
        let placed = labels(&LAND_UNIT, &symbol, &values, &tall());
        assert_eq!(placed.len(), 2);
        let country = find(&placed, M::E);
        assert_eq!(country.text(), "EX USA");
        assert_eq!(country.anchor().y, find(&placed, M::W).anchor().y - 13.0);
    }

    #[test]
    fn installation_special_designator_above_staff_comments() {
        let symbol = SymbolDescriptor::new(SymbolSet::LandInstallation, 110000);
        let values = ModifierValues::new().with(M::Ar, "MSR").with(M::G, "NOTE");
        let placed = labels(&LAND_INSTALLATION, &symbol, &values, &tall());
        assert_eq!(find(&placed, M::G).anchor(), dvec2(67.0, 5.0));
        assert_eq!(find(&placed, M::Ar).anchor(), dvec2(67.0, -8.0));
    }

    #[test]
    fn dismounted_individual_rows() {
        let symbol = SymbolDescriptor::new(SymbolSet::DismountedIndividual, 110101);
        let values = ModifierValues::new()
            .with(M::V, "RIFLE")
            .with(M::Af, "ID7")
            .with(M::J, "B2");
        let placed = labels(&DISMOUNTED_INDIVIDUAL, &symbol, &values, &short());
        assert_eq!(find(&placed, M::V).anchor(), dvec2(10.0 - 30.0 - 7.0, 29.5));
        assert_eq!(find(&placed, M::J).anchor(), dvec2(67.0, 55.5));
        assert_eq!(find(&placed, M::Af).anchor(), dvec2(67.0, 68.5));
    }

    #[test]
    fn cyberspace_ignores_keys_without_slots() {
        let symbol = SymbolDescriptor::new(SymbolSet::Cyberspace, 110000);
        let values = ModifierValues::new().with(M::Z, "9").with(M::K, "95%");
        let placed = labels(&CYBERSPACE, &symbol, &values, &tall());
        assert_eq!(placed.len(), 1);
        assert_eq!(find(&placed, M::K).anchor(), dvec2(67.0, 61.0));
    }
}
