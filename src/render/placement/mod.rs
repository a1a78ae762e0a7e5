//! Category placement rules.
//!
//! Each symbol category owns a [`LayoutRule`]: buffers, a stack selector, an
//! ordered slot list and the glyph families it enables. [`rule_for`] is the
//! function table keyed by symbol set and entity code; [`place`] turns a rule
//! into anchored labels, overlay glyphs and the accumulated image bounds.
//!
//! - `unit`: land, generic, installation, dismounted and cyberspace units
//! - `equipment`: land equipment
//! - `air`: air and space
//! - `sea`: sea surface and subsurface
//! - `activity`: activities and events
//! - `control`: control measures, keyed by entity code
//! - `atmospheric`: freezing and tropopause levels

pub mod activity;
pub mod air;
pub mod atmospheric;
pub mod control;
pub mod equipment;
pub mod layout;
pub mod overlays;
pub mod sea;
pub mod unit;

use crate::descriptor::{SymbolDescriptor, SymbolSet};
use crate::errors::RenderError;
use crate::log::debug;
use crate::modifiers::ModifierValues;
use crate::types::BoundsBox;

use super::bounds::BoundsAccumulator;
use super::context::RenderContext;
use super::label::{LabelBox, LabelRole};
use super::primitives::Glyph;

pub use layout::{Category, LayoutRule};

/// Result of running a category rule.
#[derive(Clone, Debug, PartialEq)]
pub enum Layout {
    /// No rule covers the symbol; the base icon is drawn unmodified.
    NoModifiers,
    Placed {
        labels: Vec<LabelBox>,
        glyphs: Vec<Glyph>,
        image_bounds: BoundsBox,
    },
}

/// Rule for a symbol, or `None` when its category takes no modifiers.
pub fn rule_for(symbol: &SymbolDescriptor) -> Option<&'static LayoutRule> {
    match symbol.symbol_set {
        SymbolSet::Air | SymbolSet::AirMissile | SymbolSet::Space | SymbolSet::SpaceMissile => {
            Some(&air::AIR_SPACE_UNIT)
        }
        SymbolSet::LandUnit => Some(&unit::LAND_UNIT),
        SymbolSet::LandCivilian | SymbolSet::MineWarfare | SymbolSet::SignalsIntelligence(_) => {
            Some(&unit::GENERIC_UNIT)
        }
        SymbolSet::LandEquipment => Some(&equipment::LAND_EQUIPMENT),
        SymbolSet::LandInstallation => Some(&unit::LAND_INSTALLATION),
        SymbolSet::DismountedIndividual => Some(&unit::DISMOUNTED_INDIVIDUAL),
        SymbolSet::SeaSurface => Some(&sea::SEA_SURFACE),
        SymbolSet::SeaSubsurface => Some(&sea::SEA_SUBSURFACE),
        SymbolSet::Activity => Some(&activity::ACTIVITY),
        SymbolSet::Cyberspace => Some(&unit::CYBERSPACE),
        SymbolSet::ControlMeasure => Some(control::rule_for(symbol.entity)),
        SymbolSet::Atmospheric => atmospheric::rule_for(symbol.entity),
        SymbolSet::Oceanographic | SymbolSet::MeteorologicalSpace | SymbolSet::Other(_) => None,
    }
}

/// Select the rule for `symbol` and apply it around the symbol bounds `b`.
pub fn place(
    ctx: &mut RenderContext<'_>,
    symbol: &SymbolDescriptor,
    modifiers: &ModifierValues,
    b: &BoundsBox,
) -> Result<Layout, RenderError> {
    match rule_for(symbol) {
        Some(rule) => apply(ctx, rule, symbol, modifiers, b),
        None => {
            debug!(basic_id = %symbol.basic_id(), "no placement rule");
            Ok(Layout::NoModifiers)
        }
    }
}

/// Apply one rule: gate the values, place every slot, then build overlays.
pub fn apply(
    ctx: &mut RenderContext<'_>,
    rule: &LayoutRule,
    symbol: &SymbolDescriptor,
    modifiers: &ModifierValues,
    b: &BoundsBox,
) -> Result<Layout, RenderError> {
    let mut working = ctx.gate(symbol, modifiers);
    let stacked = rule.selector.stacked(&ctx.line, b);
    debug!(rule = rule.name, stacked, keys = working.len(), "placing modifiers");

    let mut labels = Vec::new();
    for slot in rule.slots {
        let Some((text, key)) = slot.source.resolve(ctx, symbol, &mut working) else {
            continue;
        };
        let label = ctx.label(&text, LabelRole::Category)?.with_key(key);
        let placement = if stacked { slot.stacked } else { slot.absolute };
        let anchor = placement.anchor(&label, b, &ctx.line, &rule.buffers);
        labels.push(label.with_anchor(anchor));
    }

    let overlays = overlays::build(ctx, rule, symbol, &working, b, &labels)?;
    labels.extend(overlays.labels);

    let mut acc = BoundsAccumulator::new(*b);
    for label in &labels {
        acc.add_label(label, ctx.settings);
    }
    for glyph in &overlays.glyphs {
        acc.add_glyph(glyph);
    }

    Ok(Layout::Placed {
        labels,
        glyphs: overlays.glyphs,
        image_bounds: acc.image(),
    })
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RendererSettings;
    use crate::descriptor::Hqtfd;
    use crate::modifiers::Modifier;
    use crate::render::context::testing as ctx_testing;

    #[test]
    fn keying_table() {
        let cases = [
            (SymbolSet::Air, 110000, "AirSpaceUnit"),
            (SymbolSet::SpaceMissile, 110000, "AirSpaceUnit"),
            (SymbolSet::LandUnit, 121100, "LandUnit"),
            (SymbolSet::MineWarfare, 110000, "GenericUnit"),
            (SymbolSet::SignalsIntelligence(52), 110000, "GenericUnit"),
            (SymbolSet::LandEquipment, 120100, "LandEquipment"),
            (SymbolSet::LandInstallation, 110000, "LandInstallation"),
            (SymbolSet::DismountedIndividual, 110101, "DismountedIndividual"),
            (SymbolSet::SeaSurface, 120000, "SeaSurfaceUnit"),
            (SymbolSet::SeaSubsurface, 110000, "SeaSubsurfaceUnit"),
            (SymbolSet::Activity, 110000, "Activity"),
            (SymbolSet::Cyberspace, 110000, "Cyberspace"),
            (SymbolSet::ControlMeasure, 130700, "DecisionPoint"),
            (SymbolSet::ControlMeasure, 999999, "GenericControlMeasure"),
            (SymbolSet::Atmospheric, 162300, "FreezingLevel"),
        ];
        for (set, entity, name) in cases {
            let symbol = SymbolDescriptor::new(set, entity);
            assert_eq!(rule_for(&symbol).map(|r| r.name), Some(name), "{set:?} {entity}");
        }
        for (set, entity) in [
            (SymbolSet::Atmospheric, 110000),
            (SymbolSet::Oceanographic, 110000),
            (SymbolSet::MeteorologicalSpace, 110000),
            (SymbolSet::Other(99), 0),
        ] {
            assert_eq!(rule_for(&SymbolDescriptor::new(set, entity)), None);
        }
    }

    #[test]
    fn unsupported_category_places_nothing() {
        let settings = RendererSettings::default();
        let mut ctx = ctx_testing::context(&settings);
        let symbol = SymbolDescriptor::new(SymbolSet::Oceanographic, 110000);
        let values = ModifierValues::new().with(Modifier::T, "A");
        let b = BoundsBox::new(0.0, 0.0, 40.0, 40.0);
        assert_eq!(place(&mut ctx, &symbol, &values, &b).unwrap(), Layout::NoModifiers);
    }

    #[test]
    fn image_bounds_contain_everything() {
        let settings = RendererSettings::default();
        let mut ctx = ctx_testing::context(&settings);
        let symbol = SymbolDescriptor::new(SymbolSet::LandUnit, 121100)
            .with_hqtfd(Hqtfd::HEADQUARTERS | Hqtfd::TASK_FORCE | Hqtfd::FEINT_DUMMY)
            .with_amplifier(18);
        let values = ModifierValues::new()
            .with(Modifier::T, "1-66")
            .with(Modifier::W, "231200Z")
            .with(Modifier::Ao, "ENG")
            .with(Modifier::Q, "225");
        let b = BoundsBox::new(10.0, 10.0, 50.0, 40.0);
        let Layout::Placed {
            labels,
            glyphs,
            image_bounds,
        } = place(&mut ctx, &symbol, &values, &b).unwrap()
        else {
            panic!("land units take modifiers");
        };
        assert!(image_bounds.contains(&b));
        for label in &labels {
            assert!(image_bounds.contains(&label.bounds()), "{}", label.text());
        }
        for glyph in &glyphs {
            assert!(image_bounds.contains(&glyph.bounds()), "{:?}", glyph.layer);
        }
    }
}
