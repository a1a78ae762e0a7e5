//! Measured text labels.

use glam::DVec2;

use crate::config::TextBackground;
use crate::metrics::TextExtent;
use crate::modifiers::Modifier;
use crate::types::BoundsBox;

use super::primitives::Layer;

/// What a label is for; selects its layer and paint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LabelRole {
    /// Modifier text placed by a category rule
    Category,
    Echelon,
    AffiliationModifier,
    EngagementBar,
}

impl LabelRole {
    pub fn layer(self) -> Layer {
        match self {
            LabelRole::Category => Layer::Labels,
            LabelRole::Echelon => Layer::Echelon,
            LabelRole::AffiliationModifier => Layer::AffiliationModifier,
            LabelRole::EngagementBar => Layer::EngagementBar,
        }
    }
}

/// A measured line of text anchored at its baseline-left point.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelBox {
    text: String,
    extent: TextExtent,
    anchor: DVec2,
    pub role: LabelRole,
    pub background: TextBackground,
    /// First modifier key the text came from, if any
    pub key: Option<Modifier>,
}

impl LabelBox {
    pub fn new(text: impl Into<String>, extent: TextExtent, role: LabelRole) -> Self {
        LabelBox {
            text: text.into(),
            extent,
            anchor: DVec2::ZERO,
            role,
            background: TextBackground::None,
            key: None,
        }
    }

    pub fn with_anchor(&self, anchor: DVec2) -> LabelBox {
        LabelBox {
            anchor,
            ..self.clone()
        }
    }

    pub fn with_background(mut self, background: TextBackground) -> Self {
        self.background = background;
        self
    }

    pub fn with_key(mut self, key: Modifier) -> Self {
        self.key = Some(key);
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn extent(&self) -> TextExtent {
        self.extent
    }

    pub fn width(&self) -> f64 {
        self.extent.width
    }

    pub fn ascent(&self) -> f64 {
        self.extent.ascent
    }

    pub fn descent(&self) -> f64 {
        self.extent.descent
    }

    pub fn anchor(&self) -> DVec2 {
        self.anchor
    }

    pub fn translate(&mut self, d: DVec2) {
        self.anchor += d;
    }

    /// Ink box implied by the anchor and the measured extent.
    pub fn bounds(&self) -> BoundsBox {
        BoundsBox::new(
            self.anchor.x,
            self.anchor.y - self.extent.ascent,
            self.extent.width,
            self.extent.height(),
        )
    }
}

#[cfg(test)]
mod tests {
    use glam::dvec2;

    use super::*;

    fn extent() -> TextExtent {
        TextExtent {
            width: 30.0,
            ascent: 9.0,
            descent: 3.0,
        }
    }

    #[test]
    fn with_anchor_returns_new_value() {
        let label = LabelBox::new("T", extent(), LabelRole::Category);
        let placed = label.with_anchor(dvec2(5.0, 20.0));
        assert_eq!(label.anchor(), DVec2::ZERO);
        assert_eq!(placed.bounds(), BoundsBox::new(5.0, 11.0, 30.0, 12.0));
    }
}
