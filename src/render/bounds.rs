//! Image bounds accumulation and raster normalization.

use glam::{DVec2, dvec2};

use crate::config::{RendererSettings, TextBackground};
use crate::log::debug;
use crate::types::BoundsBox;

use super::defaults;
use super::label::LabelBox;
use super::primitives::Glyph;

/// How far a label's drawn background reaches past its ink box.
pub fn label_padding(label: &LabelBox, settings: &RendererSettings) -> f64 {
    match label.background {
        TextBackground::Outline => settings.outline_width / 2.0,
        TextBackground::ColorFill => defaults::COLOR_FILL_PADDING,
        TextBackground::None => 0.0,
    }
}

/// Union of the symbol and everything drawn around it. Never shrinks, so the
/// result always contains the symbol bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundsAccumulator {
    symbol: BoundsBox,
    image: BoundsBox,
}

impl BoundsAccumulator {
    pub fn new(symbol: BoundsBox) -> Self {
        BoundsAccumulator {
            symbol,
            image: symbol,
        }
    }

    pub fn add(&mut self, b: &BoundsBox) {
        self.image = self.image.union(b);
    }

    pub fn add_label(&mut self, label: &LabelBox, settings: &RendererSettings) {
        self.add(&label.bounds().grow(label_padding(label, settings)));
    }

    /// Glyph bounds plus half its stroke.
    pub fn add_glyph(&mut self, glyph: &Glyph) {
        let half_stroke = glyph
            .paint
            .stroke
            .map(|_| glyph.paint.width / 2.0)
            .unwrap_or(0.0);
        self.add(&glyph.bounds().grow(half_stroke));
    }

    pub fn symbol(&self) -> BoundsBox {
        self.symbol
    }

    pub fn image(&self) -> BoundsBox {
        self.image
    }
}

/// Shift that moves `image` into non-negative coordinates, if it needs one.
pub fn normalize_offset(image: &BoundsBox) -> Option<DVec2> {
    if image.x.min(image.y) >= 0.0 {
        return None;
    }
    let offset = dvec2(
        if image.x < 0.0 { -image.x } else { 0.0 },
        if image.y < 0.0 { -image.y } else { 0.0 },
    );
    debug!(dx = offset.x, dy = offset.y, "normalizing image bounds");
    Some(offset)
}

/// Everything after a raster shift.
#[derive(Clone, Debug, PartialEq)]
pub struct Shifted {
    pub offset: DVec2,
    pub symbol: BoundsBox,
    pub image: BoundsBox,
    pub labels: Vec<LabelBox>,
    pub glyphs: Vec<Glyph>,
}

fn shift(
    offset: DVec2,
    image: &BoundsBox,
    symbol: BoundsBox,
    labels: &[LabelBox],
    glyphs: &[Glyph],
    settings: &RendererSettings,
) -> Shifted {
    let mut labels = labels.to_vec();
    for label in &mut labels {
        label.translate(offset);
    }
    let mut glyphs = glyphs.to_vec();
    for glyph in &mut glyphs {
        glyph.translate(offset);
    }
    let symbol = symbol.translate(offset);

    // shifted parts round on their own, so the image is re-unioned from them
    let mut acc = BoundsAccumulator::new(symbol);
    acc.add(&image.translate(offset));
    for label in &labels {
        acc.add_label(label, settings);
    }
    for glyph in &glyphs {
        acc.add_glyph(glyph);
    }
    Shifted {
        offset,
        symbol,
        image: acc.image(),
        labels,
        glyphs,
    }
}

fn next_up(v: f64) -> f64 {
    f64::from_bits(v.to_bits() + 1)
}

/// Move every part so the image starts at or just past the origin. The
/// offset is `-min(image.x, 0), -min(image.y, 0)`, raised by single ulps
/// while rounding leaves a shifted part below zero.
pub fn normalize(
    image: &BoundsBox,
    symbol: BoundsBox,
    labels: &[LabelBox],
    glyphs: &[Glyph],
    settings: &RendererSettings,
) -> Option<Shifted> {
    let mut offset = normalize_offset(image)?;
    let mut shifted = shift(offset, image, symbol, labels, glyphs, settings);
    for _ in 0..defaults::MAX_NORMALIZE_NUDGES {
        if shifted.image.x >= 0.0 && shifted.image.y >= 0.0 {
            break;
        }
        if shifted.image.x < 0.0 {
            offset.x = next_up(offset.x);
        }
        if shifted.image.y < 0.0 {
            offset.y = next_up(offset.y);
        }
        shifted = shift(offset, image, symbol, labels, glyphs, settings);
    }
    Some(shifted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::TextExtent;
    use crate::render::label::LabelRole;
    use crate::render::primitives::{Layer, Paint, Rect, Segment};
    use crate::types::Color;

    fn label(background: TextBackground) -> LabelBox {
        LabelBox::new(
            "T",
            TextExtent {
                width: 10.0,
                ascent: 9.0,
                descent: 3.0,
            },
            LabelRole::Category,
        )
        .with_background(background)
        .with_anchor(dvec2(-20.0, 0.0))
    }

    #[test]
    fn labels_grow_by_background_padding() {
        let settings = RendererSettings::default();
        let symbol = BoundsBox::new(0.0, 0.0, 40.0, 40.0);

        let mut acc = BoundsAccumulator::new(symbol);
        acc.add_label(&label(TextBackground::Outline), &settings);
        assert_eq!(acc.image(), BoundsBox::new(-21.0, -10.0, 61.0, 50.0));

        let mut acc = BoundsAccumulator::new(symbol);
        acc.add_label(&label(TextBackground::None), &settings);
        assert_eq!(acc.image(), BoundsBox::new(-20.0, -9.0, 60.0, 49.0));
        assert_eq!(acc.symbol(), symbol);
    }

    #[test]
    fn stroked_glyphs_include_half_stroke() {
        let mut acc = BoundsAccumulator::new(BoundsBox::new(0.0, 0.0, 10.0, 10.0));
        acc.add_glyph(&Glyph::new(
            Segment {
                from: dvec2(0.0, 20.0),
                to: dvec2(10.0, 20.0),
            },
            Paint::stroke(Color::BLACK, 4.0),
            Layer::Mobility,
        ));
        assert_eq!(acc.image().bottom(), 22.0);

        acc.add_glyph(&Glyph::new(
            Rect {
                rect: BoundsBox::new(-5.0, 0.0, 5.0, 5.0),
            },
            Paint::fill(Color::RED),
            Layer::OciBar,
        ));
        assert_eq!(acc.image().x, -5.0);
        assert!(acc.image().contains(&acc.symbol()));
    }

    #[test]
    fn normalized_parts_stay_inside_and_non_negative() {
        let settings = RendererSettings::default();
        let symbol = BoundsBox::new(10.0, 20.0, 60.0, 60.0);
        let labels = vec![
            label(TextBackground::Outline).with_anchor(dvec2(-111.21197312156387, -0.3)),
            label(TextBackground::Outline).with_anchor(dvec2(-0.1, -10.808)),
            label(TextBackground::None).with_anchor(dvec2(70.1, 109.79898987322333)),
        ];
        let glyphs = vec![Glyph::new(
            Segment {
                from: dvec2(-7.3, 0.1),
                to: dvec2(33.3, 109.79898987322333),
            },
            Paint::stroke(Color::BLACK, 1.5),
            Layer::DirectionOfMovement,
        )];
        let mut acc = BoundsAccumulator::new(symbol);
        for l in &labels {
            acc.add_label(l, &settings);
        }
        for g in &glyphs {
            acc.add_glyph(g);
        }

        let shifted = normalize(&acc.image(), symbol, &labels, &glyphs, &settings).unwrap();
        let image = shifted.image;
        assert!(image.x >= 0.0 && image.x < 1e-9, "{image}");
        assert!(image.y >= 0.0 && image.y < 1e-9, "{image}");
        assert!(image.contains(&shifted.symbol), "{image} vs {}", shifted.symbol);
        for l in &shifted.labels {
            assert!(image.contains(&l.bounds()), "{image} vs {}", l.bounds());
        }
        for g in &shifted.glyphs {
            assert!(image.contains(&g.bounds()), "{image} vs {}", g.bounds());
        }
        assert!((shifted.offset.x - 112.21197312156387).abs() < 1e-9);
    }

    #[test]
    fn vector_sized_image_needs_no_shift() {
        let settings = RendererSettings::default();
        let symbol = BoundsBox::new(0.0, 0.0, 10.0, 10.0);
        assert!(normalize(&symbol, symbol, &[], &[], &settings).is_none());
    }

    #[test]
    fn offset_only_for_negative_origin() {
        assert_eq!(normalize_offset(&BoundsBox::new(0.0, 3.0, 5.0, 5.0)), None);
        assert_eq!(
            normalize_offset(&BoundsBox::new(-4.0, 3.0, 5.0, 5.0)),
            Some(dvec2(4.0, 0.0))
        );
        assert_eq!(
            normalize_offset(&BoundsBox::new(2.0, -7.5, 5.0, 5.0)),
            Some(dvec2(0.0, 7.5))
        );
    }
}
