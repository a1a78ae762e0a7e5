//! Rendering context - the per-call state shared by placement and glyph code

use crate::catalog::{CountryLookup, ModifierCatalog};
use crate::config::{RenderAttributes, RendererSettings};
use crate::descriptor::SymbolDescriptor;
use crate::errors::{ModifierError, RenderError};
use crate::log::warn;
use crate::metrics::{FontDescriptor, TextExtent, TextMetrics};
use crate::modifiers::{Modifier, ModifierValues};
use crate::types::Color;

use super::defaults;
use super::label::{LabelBox, LabelRole};

/// Vertical metrics of one line of label text
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineMetrics {
    pub height: f64,
    pub ascent: f64,
    pub descent: f64,
}

impl LineMetrics {
    /// Baseline that vertically centers a line on `y`.
    pub fn centered(&self, y: f64) -> f64 {
        y - (self.height - self.descent) / 2.0 + self.ascent
    }
}

/// Colors resolved from the attributes over the settings snapshot
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub text: Color,
    pub text_background: Color,
    pub line: Color,
    pub fill: Option<Color>,
    pub engagement_bar: Option<Color>,
}

/// Rendering context
pub struct RenderContext<'a> {
    pub settings: &'a RendererSettings,
    pub font: FontDescriptor,
    pub line: LineMetrics,
    pub palette: Palette,
    pub pixel_size: f64,
    /// Stroke width for overlay line art
    pub stroke_width: f64,
    pub alpha: Option<f64>,
    metrics: &'a dyn TextMetrics,
    catalog: &'a dyn ModifierCatalog,
    countries: &'a dyn CountryLookup,
    skipped: Vec<ModifierError>,
}

impl<'a> RenderContext<'a> {
    pub fn new(
        settings: &'a RendererSettings,
        attributes: &RenderAttributes,
        metrics: &'a dyn TextMetrics,
        catalog: &'a dyn ModifierCatalog,
        countries: &'a dyn CountryLookup,
    ) -> Result<Self, RenderError> {
        let font = settings.label_font.clone();
        let sample = metrics
            .measure(defaults::LINE_SAMPLE, &font)
            .map_err(|source| RenderError::MissingTextMetrics {
                text: defaults::LINE_SAMPLE.to_string(),
                source,
            })?;
        let line = LineMetrics {
            height: sample.height(),
            ascent: sample.ascent,
            descent: sample.descent,
        };

        let text = attributes.text_color.unwrap_or(settings.text_color);
        let palette = Palette {
            text,
            text_background: attributes
                .text_background_color
                .or(settings.text_background_color)
                .unwrap_or_else(|| text.ideal_outline()),
            line: attributes.line_color.unwrap_or(settings.line_color),
            fill: attributes.fill_color,
            engagement_bar: attributes.engagement_bar_color,
        };

        let pixel_size = attributes
            .pixel_size
            .filter(|s| s.is_finite() && *s > 0.0)
            .unwrap_or(settings.default_pixel_size);

        Ok(RenderContext {
            settings,
            font,
            line,
            palette,
            pixel_size,
            stroke_width: (pixel_size / defaults::STROKE_DIVISOR).max(1.0),
            alpha: attributes.clamped_alpha(),
            metrics,
            catalog,
            countries,
            skipped: Vec::new(),
        })
    }

    pub fn measure(&self, text: &str) -> Result<TextExtent, RenderError> {
        self.metrics
            .measure(text, &self.font)
            .map_err(|source| RenderError::MissingTextMetrics {
                text: text.to_string(),
                source,
            })
    }

    /// Measure `text` into an unanchored label.
    pub fn label(&self, text: &str, role: LabelRole) -> Result<LabelBox, RenderError> {
        let extent = self.measure(text)?;
        let background = match role {
            LabelRole::EngagementBar => crate::config::TextBackground::None,
            _ => self.settings.text_background,
        };
        Ok(LabelBox::new(text, extent, role).with_background(background))
    }

    pub fn supports(&self, symbol: &SymbolDescriptor, key: Modifier) -> bool {
        self.catalog.supports(symbol, key)
    }

    pub fn country(&self, code: u16) -> Option<String> {
        if code == 0 {
            return None;
        }
        self.countries.alpha3(code)
    }

    /// Values that may be drawn: present, non-blank and supported.
    pub fn gate(&self, symbol: &SymbolDescriptor, modifiers: &ModifierValues) -> ModifierValues {
        let mut working = ModifierValues::new();
        for (key, value) in modifiers.iter() {
            if !value.trim().is_empty() && self.supports(symbol, key) {
                working.insert(key, value);
            }
        }
        working
    }

    /// Record a modifier that could not be drawn.
    pub fn skip(&mut self, err: ModifierError) {
        warn!(key = %err.key(), error = %err, "skipping modifier");
        self.skipped.push(err);
    }

    pub fn take_skipped(&mut self) -> Vec<ModifierError> {
        std::mem::take(&mut self.skipped)
    }
}


#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;
    use crate::catalog::StaticCatalog;
    use crate::descriptor::SymbolSet;

    #[test]
    fn line_metrics_come_from_sample() {
        let settings = RendererSettings::default();
        let ctx = context(&settings);
        assert_eq!(ctx.line.height, 12.0);
        assert_eq!(ctx.line.ascent, 9.0);
        // centered(y) = y - (12 - 3)/2 + 9
        assert_eq!(ctx.line.centered(30.0), 34.5);
    }

    #[test]
    fn palette_prefers_attributes() {
        let settings = RendererSettings::default();
        let attrs = RenderAttributes::new()
            .with_text_color(Color::WHITE)
            .with_pixel_size(100.0);
        let ctx = context_with(&settings, &attrs);
        assert_eq!(ctx.palette.text, Color::WHITE);
        assert_eq!(ctx.palette.text_background, Color::BLACK);
        assert_eq!(ctx.pixel_size, 100.0);
        assert_eq!(ctx.stroke_width, 4.0);
    }

    #[test]
    fn gate_drops_blank_and_unsupported() {
        let settings = RendererSettings::default();
        let catalog = StaticCatalog::new().with_fallback([Modifier::T, Modifier::H]);
        let ctx = RenderContext::new(
            &settings,
            &RenderAttributes::default(),
            &FixedAdvance,
            &catalog,
            &crate::catalog::NoCountries,
        )
        .unwrap();
        let symbol = SymbolDescriptor::new(SymbolSet::LandUnit, 121100);
        let values = ModifierValues::new()
            .with(Modifier::T, "A")
            .with(Modifier::H, "   ")
            .with(Modifier::W, "231200Z");
        let working = ctx.gate(&symbol, &values);
        assert_eq!(working.len(), 1);
        assert_eq!(working.get(Modifier::T), Some("A"));
    }
}
