//! Engagement bar: modifier text in a filled box above the symbol.

use glam::dvec2;

use crate::errors::RenderError;
use crate::types::{BoundsBox, Color};

use super::super::context::RenderContext;
use super::super::defaults;
use super::super::label::{LabelBox, LabelRole};
use super::super::primitives::{Glyph, Layer, Paint, Rect};

pub struct EngagementBar {
    /// Fill, then outline
    pub glyphs: [Glyph; 2],
    pub text: LabelBox,
}

/// Bar fill: the engagement bar color, else the symbol fill, else white.
pub fn bar_fill(ctx: &RenderContext<'_>) -> Color {
    ctx.palette
        .engagement_bar
        .or(ctx.palette.fill)
        .unwrap_or(Color::WHITE)
}

/// Build the bar so its bottom sits just above `resting_on`, the top of the
/// highest overlay already placed (or the frame top).
pub fn build(
    ctx: &RenderContext<'_>,
    b: &BoundsBox,
    text: &str,
    resting_on: f64,
) -> Result<EngagementBar, RenderError> {
    let label = ctx.label(text, LabelRole::EngagementBar)?;
    let pad = defaults::ENGAGEMENT_PADDING;
    let height = ctx.line.height + 2.0 * pad;
    let width = (b.width - 2.0).max(label.width() + 4.0);
    let rect = BoundsBox::new(
        b.center_x() - width / 2.0,
        resting_on - defaults::ENGAGEMENT_GAP - height,
        width,
        height,
    );
    let anchor = dvec2(
        b.center_x() - label.width() / 2.0,
        rect.y + pad + label.ascent(),
    );

    Ok(EngagementBar {
        glyphs: [
            Glyph::new(Rect { rect }, Paint::fill(bar_fill(ctx)), Layer::EngagementBar),
            Glyph::new(
                Rect { rect },
                Paint::stroke(Color::BLACK, defaults::ENGAGEMENT_OUTLINE_WIDTH),
                Layer::EngagementBar,
            ),
        ],
        text: label.with_anchor(anchor),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{RenderAttributes, RendererSettings};
    use crate::render::context::testing;

    #[test]
    fn bar_geometry() {
        let settings = RendererSettings::default();
        let ctx = testing::context(&settings);
        let b = BoundsBox::new(10.0, 10.0, 50.0, 30.0);
        let bar = build(&ctx, &b, "TGT", 10.0).unwrap();
        // height 12 + 2, width max(48, 18 + 4), bottom at 10 - 2
        assert_eq!(bar.glyphs[0].bounds(), BoundsBox::new(11.0, -6.0, 48.0, 14.0));
        assert_eq!(bar.text.anchor(), dvec2(26.0, 4.0));
        assert!(bar.glyphs[0].bounds().contains(&bar.text.bounds()));
        assert_eq!(bar.glyphs[0].paint.fill, Some(Color::WHITE));
        assert_eq!(bar.glyphs[1].paint.stroke, Some(Color::BLACK));
    }

    #[test]
    fn wide_text_widens_bar() {
        let settings = RendererSettings::default();
        let ctx = testing::context(&settings);
        let b = BoundsBox::new(0.0, 0.0, 20.0, 20.0);
        let bar = build(&ctx, &b, "ENGAGED", 0.0).unwrap();
        assert_eq!(bar.glyphs[0].bounds().width, 46.0);
    }

    #[test]
    fn fill_falls_back_through_attributes() {
        let settings = RendererSettings::default();
        let attrs = RenderAttributes::new().with_fill_color(Color::BLUE);
        let ctx = testing::context_with(&settings, &attrs);
        assert_eq!(bar_fill(&ctx), Color::BLUE);
        let attrs = attrs.with_engagement_bar_color(Color::RED);
        let ctx = testing::context_with(&settings, &attrs);
        assert_eq!(bar_fill(&ctx), Color::RED);
    }
}
