//! Output assembly: z-ordered SVG fragment and the final artifact.

use glam::DVec2;

use crate::catalog::BaseIcon;
use crate::config::TextBackground;
use crate::errors::{ModifierError, RenderError};
use crate::svg::{self, Group, Presentation, Svg, SvgNode, Text, fmt_num};
use crate::types::{BoundsBox, Color};

use super::context::RenderContext;
use super::defaults;
use super::glyphs::engagement;
use super::label::{LabelBox, LabelRole};
use super::primitives::{Glyph, Layer};

/// One rendered symbol.
#[derive(Clone, Debug, PartialEq)]
pub struct SymbolArtifact {
    /// SVG fragment: every element of the symbol, back to front
    pub svg: String,
    /// Base icon anchor, shifted with everything else
    pub anchor: DVec2,
    pub symbol_bounds: BoundsBox,
    /// Union of the symbol and everything drawn around it
    pub image_bounds: BoundsBox,
    pub labels: Vec<LabelBox>,
    pub glyphs: Vec<Glyph>,
    /// Modifiers that were requested but could not be drawn
    pub skipped: Vec<ModifierError>,
}

impl SymbolArtifact {
    /// Standalone `<svg>` document sized to the image bounds.
    pub fn to_svg_document(&self) -> Result<String, RenderError> {
        let b = self.image_bounds;
        let view_box = [b.x, b.y, b.width, b.height].map(fmt_num).join(" ");
        svg::document(
            Svg {
                xmlns: Some(svg::SVG_NS.to_string()),
                width: Some(b.width),
                height: Some(b.height),
                view_box: Some(view_box),
                children: Vec::new(),
            },
            &self.svg,
        )
    }
}

enum Item<'a> {
    Glyph(&'a Glyph),
    Label(&'a LabelBox),
}

/// Everything placed around the icon, ready to serialize.
pub(crate) struct Parts<'a> {
    pub icon: &'a BaseIcon,
    /// Translation applied to the icon content by normalization
    pub icon_offset: DVec2,
    pub labels: &'a [LabelBox],
    pub glyphs: &'a [Glyph],
}

/// Serialize in layer order. Glyphs come before labels within a layer so the
/// engagement bar text lands on its box. Layers below [`Layer::BaseIcon`] go
/// before the icon content, the rest after it.
pub(crate) fn fragment(ctx: &RenderContext<'_>, parts: &Parts<'_>) -> Result<String, RenderError> {
    let mut items: Vec<(Layer, Item<'_>)> = Vec::new();
    items.extend(parts.glyphs.iter().map(|g| (g.layer, Item::Glyph(g))));
    items.extend(parts.labels.iter().map(|l| (l.role.layer(), Item::Label(l))));
    items.sort_by_key(|(layer, _)| *layer);

    let mut below = Vec::new();
    let mut above = Vec::new();
    for (layer, item) in items {
        let nodes = if layer < Layer::BaseIcon {
            &mut below
        } else {
            &mut above
        };
        match item {
            Item::Glyph(g) => nodes.push(g.to_node()),
            Item::Label(l) => label_nodes(ctx, l, nodes),
        }
    }

    let mut body = svg::to_fragment(below)?;
    body.push_str(&icon_markup(parts.icon, parts.icon_offset)?);
    body.push_str(&svg::to_fragment(above)?);

    match ctx.alpha {
        Some(alpha) => svg::wrap_markup(
            Group {
                opacity: Some(alpha),
                ..Default::default()
            },
            &body,
        ),
        None => Ok(body),
    }
}

fn icon_markup(icon: &BaseIcon, offset: DVec2) -> Result<String, RenderError> {
    if offset == DVec2::ZERO {
        return Ok(icon.content.clone());
    }
    let group = Group {
        transform: Some(format!(
            "translate({} {})",
            fmt_num(offset.x),
            fmt_num(offset.y)
        )),
        ..Default::default()
    };
    svg::wrap_markup(group, &icon.content)
}

fn text_node(ctx: &RenderContext<'_>, label: &LabelBox, presentation: Presentation) -> SvgNode {
    let anchor = label.anchor();
    SvgNode::Text(presentation.paint(Text {
        x: Some(anchor.x),
        y: Some(anchor.y),
        font_family: Some(ctx.font.family.clone()),
        font_size: Some(ctx.font.size),
        font_weight: Some(ctx.font.weight.as_css().to_string()),
        text_anchor: Some("start".to_string()),
        content: label.text().to_string(),
        ..Default::default()
    }))
}

fn label_nodes(ctx: &RenderContext<'_>, label: &LabelBox, out: &mut Vec<SvgNode>) {
    let color: Color = match label.role {
        LabelRole::EngagementBar => engagement::bar_fill(ctx).ideal_outline(),
        LabelRole::Category | LabelRole::Echelon | LabelRole::AffiliationModifier => {
            ctx.palette.text
        }
    };
    let background = ctx.palette.text_background;
    match label.background {
        TextBackground::Outline => {
            out.push(text_node(
                ctx,
                label,
                Presentation::new(Some(background), None, ctx.settings.outline_width),
            ));
        }
        TextBackground::ColorFill => {
            let r = label.bounds().grow(defaults::COLOR_FILL_PADDING);
            let rect = svg::Rect {
                x: Some(r.x),
                y: Some(r.y),
                width: Some(r.width),
                height: Some(r.height),
                ..Default::default()
            };
            out.push(SvgNode::Rect(
                Presentation::new(None, Some(background), 0.0).paint(rect),
            ));
        }
        TextBackground::None => {}
    }
    out.push(text_node(ctx, label, Presentation::new(None, Some(color), 0.0)));
}
