//! SVG emission on top of the `facet_svg` node types.
//!
//! Nodes are serialized with `facet_xml`, using [`fmt_num`] for every float
//! attribute. `facet_svg` has no raw-markup node, so pre-serialized content
//! (the base icon) is spliced into the serialization of an empty group by
//! [`wrap_markup`].

use std::fmt::{self, Display, Write as _};

use facet_svg::Paint;
use facet_svg::facet_xml::{self, SerializeOptions};
use glam::DVec2;

pub use facet_svg::{
    Ellipse, Group, Line, Path, PresentationAttrs, Rect, SVG_NS, Svg, SvgNode, Text,
};

use crate::errors::RenderError;
use crate::types::Color;

/// Format a number with 6 significant figures, trailing zeros trimmed
/// (`%g`-like, never exponent notation).
pub fn fmt_num(value: f64) -> String {
    fmt_num_precision(value, 6)
}

fn fmt_num_precision(value: f64, sig_figs: i32) -> String {
    if value == 0.0 || !value.is_finite() {
        return "0".to_string();
    }

    let magnitude = value.abs().log10().floor() as i32;
    let scale = 10_f64.powi(sig_figs - 1 - magnitude);
    let rounded = (value * scale).round() / scale;

    let decimals = (sig_figs - 1 - magnitude).max(0) as usize;
    let s = format!("{:.prec$}", rounded, prec = decimals);
    let s = if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s.as_str()
    };
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

fn paint_value(color: Option<Color>) -> String {
    color.map_or_else(|| "none".to_string(), |c| c.to_hex())
}

/// Presentation attributes shared by every shape element
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Presentation {
    pub stroke: Option<Color>,
    pub fill: Option<Color>,
    pub stroke_width: f64,
    pub stroke_dasharray: Option<Vec<f64>>,
    /// Emitted when a color carries alpha
    pub stroke_opacity: Option<f64>,
    pub fill_opacity: Option<f64>,
}

impl Presentation {
    pub fn new(stroke: Option<Color>, fill: Option<Color>, stroke_width: f64) -> Self {
        Presentation {
            stroke,
            fill,
            stroke_width,
            stroke_dasharray: None,
            stroke_opacity: stroke.filter(|c| c.a < 255).map(|c| c.opacity()),
            fill_opacity: fill.filter(|c| c.a < 255).map(|c| c.opacity()),
        }
    }

    pub fn with_dash(mut self, dash: Option<Vec<f64>>) -> Self {
        self.stroke_dasharray = dash;
        self
    }

    /// `node` with these attributes set explicitly. Missing colors become
    /// `none`, never inherited.
    pub fn paint<T: PresentationAttrs>(&self, mut node: T) -> T {
        node.set_paint(Paint {
            stroke: Some(paint_value(self.stroke)),
            fill: Some(paint_value(self.fill)),
            stroke_width: Some(fmt_num(self.stroke_width)),
            stroke_dasharray: self.stroke_dasharray.as_ref().map(|dash| {
                dash.iter().map(|d| fmt_num(*d)).collect::<Vec<_>>().join(",")
            }),
            stroke_opacity: self.stroke_opacity.map(fmt_num),
            fill_opacity: self.fill_opacity.map(fmt_num),
        });
        node
    }
}

/// Path `d` attribute built with a fluent API
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PathData {
    commands: Vec<PathCommand>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(DVec2),
    LineTo(DVec2),
    CubicTo(DVec2, DVec2, DVec2),
    Close,
}

impl PathData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn m(mut self, p: DVec2) -> Self {
        self.commands.push(PathCommand::MoveTo(p));
        self
    }

    pub fn l(mut self, p: DVec2) -> Self {
        self.commands.push(PathCommand::LineTo(p));
        self
    }

    pub fn c(mut self, c1: DVec2, c2: DVec2, p: DVec2) -> Self {
        self.commands.push(PathCommand::CubicTo(c1, c2, p));
        self
    }

    pub fn z(mut self) -> Self {
        self.commands.push(PathCommand::Close);
        self
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Every point the commands mention, control points included.
    pub fn points(&self) -> impl Iterator<Item = DVec2> + '_ {
        self.commands.iter().flat_map(|cmd| {
            let pts: Vec<DVec2> = match *cmd {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => vec![p],
                PathCommand::CubicTo(a, b, p) => vec![a, b, p],
                PathCommand::Close => Vec::new(),
            };
            pts
        })
    }

    pub fn translate(&mut self, d: DVec2) {
        for cmd in &mut self.commands {
            match cmd {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => *p += d,
                PathCommand::CubicTo(a, b, p) => {
                    *a += d;
                    *b += d;
                    *p += d;
                }
                PathCommand::Close => {}
            }
        }
    }
}

fn pt(p: DVec2) -> String {
    format!("{},{}", fmt_num(p.x), fmt_num(p.y))
}

impl Display for PathData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cmd) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_char(' ')?;
            }
            match *cmd {
                PathCommand::MoveTo(p) => write!(f, "M{}", pt(p))?,
                PathCommand::LineTo(p) => write!(f, "L{}", pt(p))?,
                PathCommand::CubicTo(a, b, p) => write!(f, "C{} {} {}", pt(a), pt(b), pt(p))?,
                PathCommand::Close => f.write_char('Z')?,
            }
        }
        Ok(())
    }
}

fn format_float(value: f64, writer: &mut dyn std::io::Write) -> Result<(), std::io::Error> {
    write!(writer, "{}", fmt_num(value))
}

fn serialize(svg: &Svg) -> Result<String, RenderError> {
    let options = SerializeOptions {
        float_formatter: Some(format_float),
        ..Default::default()
    };
    facet_xml::to_string_with_options(svg, &options).map_err(|e| RenderError::Serialization {
        message: e.to_string(),
    })
}

fn malformed(tag: &str) -> RenderError {
    RenderError::Serialization {
        message: format!("serializer output has no <{tag}> element"),
    }
}

/// Serialize `nodes` back to back, with no enclosing element.
pub fn to_fragment(nodes: Vec<SvgNode>) -> Result<String, RenderError> {
    if nodes.is_empty() {
        return Ok(String::new());
    }
    let xml = serialize(&Svg {
        children: nodes,
        ..Default::default()
    })?;
    let start = xml
        .find("<svg")
        .and_then(|i| xml[i..].find('>').map(|j| i + j + 1));
    match (start, xml.rfind("</svg>")) {
        (Some(start), Some(end)) if start <= end => Ok(xml[start..end].to_string()),
        _ => Err(malformed("svg")),
    }
}

/// Put `markup` inside an element serialized with no children.
fn splice(empty: &str, tag: &str, markup: &str) -> Result<String, RenderError> {
    let empty = empty.trim_end();
    let close = format!("</{tag}>");
    if let Some(open) = empty.strip_suffix(close.as_str()) {
        return Ok(format!("{open}{markup}{close}"));
    }
    match empty.strip_suffix("/>") {
        Some(open) => Ok(format!("{}>{markup}{close}", open.trim_end())),
        None => Err(malformed(tag)),
    }
}

/// Serialize `group` with `markup` as its content. Children already in the
/// group are dropped.
pub fn wrap_markup(group: Group, markup: &str) -> Result<String, RenderError> {
    let empty = to_fragment(vec![SvgNode::G(Group {
        children: Vec::new(),
        ..group
    })])?;
    splice(&empty, "g", markup)
}

/// Standalone document: `root` attributes around `markup`.
pub fn document(root: Svg, markup: &str) -> Result<String, RenderError> {
    let empty = serialize(&Svg {
        children: Vec::new(),
        ..root
    })?;
    splice(&empty, "svg", markup)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec2;

    #[test]
    fn fmt_num_trims() {
        assert_eq!(fmt_num(0.0), "0");
        assert_eq!(fmt_num(-0.0), "0");
        assert_eq!(fmt_num(11.0), "11");
        assert_eq!(fmt_num(6.666666667), "6.66667");
        assert_eq!(fmt_num(-28.2842712), "-28.2843");
        assert_eq!(fmt_num(100000.0), "100000");
        assert_eq!(fmt_num(1500.0), "1500");
        assert_eq!(fmt_num(0.5), "0.5");
    }

    #[test]
    fn presentation_is_explicit() {
        let rect = Presentation::new(Some(Color::BLACK), None, 2.0)
            .with_dash(Some(vec![6.0, 4.0]))
            .paint(Rect::default());
        assert_eq!(rect.stroke(), Some("#000000"));
        assert_eq!(rect.fill(), Some("none"));
        assert_eq!(rect.stroke_width(), Some("2"));
        assert_eq!(rect.stroke_dasharray(), Some("6,4"));
        assert_eq!(rect.fill_opacity, None);
    }

    #[test]
    fn translucent_color_sets_opacity() {
        let half = Color { a: 128, ..Color::RED };
        let text = Presentation::new(None, Some(half), 0.0).paint(Text::default());
        assert_eq!(text.fill(), Some("#ff0000"));
        assert_eq!(text.fill_opacity.as_deref(), Some("0.501961"));
        assert_eq!(text.stroke_opacity, None);
    }

    #[test]
    fn fragment_keeps_order_and_trims_numbers() {
        let rect = Rect {
            x: Some(11.0),
            y: Some(43.0),
            rx: Some(20.0 / 3.0),
            ..Default::default()
        };
        let line = Line {
            x2: Some(-28.2842712),
            ..Default::default()
        };
        let out = to_fragment(vec![SvgNode::Rect(rect), SvgNode::Line(line)]).unwrap();
        assert!(out.starts_with("<rect"), "{out}");
        assert!(out.contains(r#"rx="6.66667""#), "{out}");
        assert!(out.contains(r#"x2="-28.2843""#), "{out}");
        assert!(out.find("<rect") < out.find("<line"));
        assert!(!out.contains("svg"), "{out}");
        assert_eq!(to_fragment(Vec::new()).unwrap(), "");
    }

    #[test]
    fn text_content_is_escaped() {
        let text = Text {
            x: Some(3.5),
            content: "A&B<C".into(),
            ..Default::default()
        };
        let out = to_fragment(vec![SvgNode::Text(text)]).unwrap();
        assert!(out.contains(r#"x="3.5""#), "{out}");
        assert!(out.contains("A&amp;B&lt;C"), "{out}");
    }

    #[test]
    fn markup_goes_inside_the_group() {
        let group = Group {
            transform: Some("translate(4 0)".into()),
            opacity: Some(0.5),
            ..Default::default()
        };
        let out = wrap_markup(group, r#"<circle r="1"/>"#).unwrap();
        assert!(out.starts_with("<g"), "{out}");
        assert!(out.contains(r#"transform="translate(4 0)""#), "{out}");
        assert!(out.contains(r#"opacity="0.5""#), "{out}");
        assert!(out.ends_with(r#"><circle r="1"/></g>"#), "{out}");
    }

    #[test]
    fn splice_handles_both_empty_forms() {
        assert_eq!(splice("<g></g>", "g", "x").unwrap(), "<g>x</g>");
        assert_eq!(splice("<g a=\"1\" />\n", "g", "x").unwrap(), "<g a=\"1\">x</g>");
        assert!(splice("<g>", "g", "x").is_err());
    }

    #[test]
    fn path_translate_moves_control_points() {
        let mut d = PathData::new()
            .m(dvec2(0.0, 0.0))
            .c(dvec2(1.0, 1.0), dvec2(2.0, 1.0), dvec2(3.0, 0.0))
            .z();
        d.translate(dvec2(1.0, 2.0));
        insta::assert_snapshot!(d, @"M1,2 C2,3 3,3 4,2 Z");
        assert_eq!(d.points().count(), 4);
    }
}
