//! Symbol rendering
//!
//! This module is organized into submodules:
//! - `defaults`: offsets, gaps and ratios shared by the glyph builders
//! - `context`: RenderContext, the per-call snapshot of settings and collaborators
//! - `label`: measured text labels
//! - `primitives`: overlay glyph primitives and drawing layers
//! - `glyphs`: glyph builders (mobility, echelon, task force, engagement bar, ...)
//! - `placement`: category rules and the placement driver
//! - `bounds`: image bounds accumulation and raster normalization
//! - `assemble`: z-ordered SVG output

pub mod assemble;
pub mod bounds;
pub mod context;
pub mod defaults;
pub mod glyphs;
pub mod label;
pub mod placement;
pub mod primitives;

// Re-export commonly used items
pub use assemble::SymbolArtifact;
pub use context::RenderContext;
pub use placement::Layout;

use glam::DVec2;

use crate::catalog::{AllowAll, BaseIcon, CountryLookup, ModifierCatalog, NoCountries};
use crate::config::{OutputTarget, RenderAttributes, RendererSettings};
use crate::descriptor::SymbolDescriptor;
use crate::errors::RenderError;
use crate::log::debug;
use crate::metrics::TextMetrics;
use crate::modifiers::ModifierValues;

/// Lays out modifiers around pre-rendered base icons.
///
/// Holds the external collaborators; every render call takes its own settings
/// snapshot, so one renderer can be shared freely.
pub struct ModifierRenderer<'a> {
    metrics: &'a dyn TextMetrics,
    catalog: &'a dyn ModifierCatalog,
    countries: &'a dyn CountryLookup,
}

impl<'a> ModifierRenderer<'a> {
    /// Renderer that treats every modifier as applicable and knows no
    /// countries.
    pub fn new(metrics: &'a dyn TextMetrics) -> Self {
        ModifierRenderer {
            metrics,
            catalog: &AllowAll,
            countries: &NoCountries,
        }
    }

    pub fn with_catalog(mut self, catalog: &'a dyn ModifierCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn with_countries(mut self, countries: &'a dyn CountryLookup) -> Self {
        self.countries = countries;
        self
    }

    /// Render with the process-wide settings (see [`RendererSettings::install`]).
    pub fn render(
        &self,
        symbol: &SymbolDescriptor,
        modifiers: &ModifierValues,
        attributes: &RenderAttributes,
        icon: &BaseIcon,
    ) -> Result<SymbolArtifact, RenderError> {
        let settings = RendererSettings::current();
        self.render_with_settings(&settings, symbol, modifiers, attributes, icon)
    }

    pub fn render_with_settings(
        &self,
        settings: &RendererSettings,
        symbol: &SymbolDescriptor,
        modifiers: &ModifierValues,
        attributes: &RenderAttributes,
        icon: &BaseIcon,
    ) -> Result<SymbolArtifact, RenderError> {
        let b = icon.bounds;
        if !b.is_finite() || b.width < 0.0 || b.height < 0.0 {
            return Err(RenderError::InvalidBounds {
                bounds: b.to_string(),
            });
        }

        let mut ctx =
            RenderContext::new(settings, attributes, self.metrics, self.catalog, self.countries)?;

        let (mut labels, mut glyphs, mut image_bounds) =
            match placement::place(&mut ctx, symbol, modifiers, &b)? {
                Layout::NoModifiers => (Vec::new(), Vec::new(), b),
                Layout::Placed {
                    labels,
                    glyphs,
                    image_bounds,
                } => (labels, glyphs, image_bounds),
            };

        let mut symbol_bounds = b;
        let mut anchor = icon.anchor;
        let mut icon_offset = DVec2::ZERO;
        if settings.output_target == OutputTarget::Raster {
            if let Some(shift) = bounds::normalize(&image_bounds, b, &labels, &glyphs, settings) {
                labels = shift.labels;
                glyphs = shift.glyphs;
                symbol_bounds = shift.symbol;
                image_bounds = shift.image;
                anchor += shift.offset;
                icon_offset = shift.offset;
            }
        }

        let svg = assemble::fragment(
            &ctx,
            &assemble::Parts {
                icon,
                icon_offset,
                labels: &labels,
                glyphs: &glyphs,
            },
        )?;
        debug!(
            basic_id = %symbol.basic_id(),
            labels = labels.len(),
            glyphs = glyphs.len(),
            image = %image_bounds,
            "rendered symbol"
        );

        Ok(SymbolArtifact {
            svg,
            anchor,
            symbol_bounds,
            image_bounds,
            labels,
            glyphs,
            skipped: ctx.take_skipped(),
        })
    }
}

#[cfg(test)]
mod tests {
    use glam::dvec2;

    use super::*;
    use crate::descriptor::{Hqtfd, SymbolSet};
    use crate::modifiers::Modifier;
    use crate::render::context::testing::FixedAdvance;
    use crate::types::BoundsBox;

    fn icon() -> BaseIcon {
        BaseIcon::new(
            r#"<rect x="0" y="0" width="40" height="30"/>"#,
            BoundsBox::new(0.0, 0.0, 40.0, 30.0),
            dvec2(20.0, 15.0),
        )
    }

    #[test]
    fn invalid_icon_bounds_are_fatal() {
        let renderer = ModifierRenderer::new(&FixedAdvance);
        let mut icon = icon();
        icon.bounds.width = f64::NAN;
        let err = renderer
            .render_with_settings(
                &RendererSettings::default(),
                &SymbolDescriptor::new(SymbolSet::LandUnit, 121100),
                &ModifierValues::new(),
                &RenderAttributes::default(),
                &icon,
            )
            .unwrap_err();
        assert!(matches!(err, RenderError::InvalidBounds { .. }));
    }

    #[test]
    fn no_rule_passes_icon_through() {
        let renderer = ModifierRenderer::new(&FixedAdvance);
        let artifact = renderer
            .render_with_settings(
                &RendererSettings::default(),
                &SymbolDescriptor::new(SymbolSet::Oceanographic, 110000),
                &ModifierValues::new().with(Modifier::T, "IGNORED"),
                &RenderAttributes::default(),
                &icon(),
            )
            .unwrap();
        assert_eq!(artifact.svg, icon().content);
        assert_eq!(artifact.image_bounds, artifact.symbol_bounds);
        assert!(artifact.labels.is_empty());
    }

    #[test]
    fn raster_output_is_shifted_into_view() {
        let renderer = ModifierRenderer::new(&FixedAdvance);
        let symbol = SymbolDescriptor::new(SymbolSet::LandUnit, 121100).with_hqtfd(Hqtfd::TASK_FORCE);
        let values = ModifierValues::new().with(Modifier::W, "231200Z");
        let settings = RendererSettings::default().with_output_target(OutputTarget::Raster);
        let artifact = renderer
            .render_with_settings(&settings, &symbol, &values, &RenderAttributes::default(), &icon())
            .unwrap();

        assert_eq!(artifact.image_bounds.x, 0.0);
        assert_eq!(artifact.image_bounds.y, 0.0);
        let shift = artifact.symbol_bounds.top_left();
        assert!(shift.x > 0.0 && shift.y > 0.0);
        assert_eq!(artifact.anchor, dvec2(20.0, 15.0) + shift);
        assert!(artifact.svg.contains("<g transform=\"translate("));
        for label in &artifact.labels {
            assert!(artifact.image_bounds.contains(&label.bounds()));
        }
        for glyph in &artifact.glyphs {
            assert!(artifact.image_bounds.contains(&glyph.bounds()));
        }
    }

    #[test]
    fn vector_output_keeps_negative_coordinates() {
        let renderer = ModifierRenderer::new(&FixedAdvance);
        let symbol = SymbolDescriptor::new(SymbolSet::LandUnit, 121100);
        let values = ModifierValues::new().with(Modifier::W, "231200Z");
        let artifact = renderer
            .render_with_settings(
                &RendererSettings::default(),
                &symbol,
                &values,
                &RenderAttributes::default(),
                &icon(),
            )
            .unwrap();
        assert!(artifact.image_bounds.x < 0.0);
        assert_eq!(artifact.symbol_bounds, icon().bounds);
        assert!(artifact.image_bounds.contains(&artifact.symbol_bounds));
    }
}
