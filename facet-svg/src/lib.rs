//! Facet-derived SVG element types, serialized with `facet-xml`.
//!
//! Only the elements milsym emits are modelled. Every shape carries its own
//! presentation attributes; nothing relies on CSS or inherited styling.
//!
//! # Example
//!
//! ```rust,no_run
//! use facet_svg::{Rect, Svg, SvgNode, facet_xml};
//!
//! let svg = Svg {
//!     width: Some(100.0),
//!     height: Some(100.0),
//!     children: vec![SvgNode::Rect(Rect {
//!         x: Some(10.0),
//!         y: Some(10.0),
//!         width: Some(80.0),
//!         height: Some(80.0),
//!         ..Default::default()
//!     })],
//!     ..Default::default()
//! };
//! let options = facet_xml::SerializeOptions::default();
//! let xml = facet_xml::to_string_with_options(&svg, &options).unwrap();
//! ```

use facet::Facet;
use facet_xml as xml;

/// SVG namespace URI
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Root SVG element
#[derive(Facet, Debug, Clone, Default)]
#[facet(rename = "svg")]
pub struct Svg {
    #[facet(xml::attribute)]
    pub xmlns: Option<String>,
    #[facet(xml::attribute)]
    pub width: Option<f64>,
    #[facet(xml::attribute)]
    pub height: Option<f64>,
    #[facet(xml::attribute, rename = "viewBox")]
    pub view_box: Option<String>,
    #[facet(xml::elements)]
    pub children: Vec<SvgNode>,
}

/// Any SVG node milsym emits
#[derive(Facet, Debug, Clone)]
#[repr(u8)]
pub enum SvgNode {
    #[facet(rename = "g")]
    G(Group),
    #[facet(rename = "rect")]
    Rect(Rect),
    #[facet(rename = "ellipse")]
    Ellipse(Ellipse),
    #[facet(rename = "line")]
    Line(Line),
    #[facet(rename = "path")]
    Path(Path),
    #[facet(rename = "text")]
    Text(Text),
}

/// SVG group element (`<g>`)
#[derive(Facet, Debug, Clone, Default)]
pub struct Group {
    #[facet(xml::attribute)]
    pub transform: Option<String>,
    #[facet(xml::attribute)]
    pub opacity: Option<f64>,
    #[facet(xml::elements)]
    pub children: Vec<SvgNode>,
}

/// Presentation attributes, already formatted as attribute values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Paint {
    pub stroke: Option<String>,
    pub fill: Option<String>,
    pub stroke_width: Option<String>,
    pub stroke_dasharray: Option<String>,
    pub stroke_opacity: Option<String>,
    pub fill_opacity: Option<String>,
}

/// Common presentation attributes shared by shape and text elements
pub trait PresentationAttrs {
    fn stroke(&self) -> Option<&str>;
    fn fill(&self) -> Option<&str>;
    fn stroke_width(&self) -> Option<&str>;
    fn stroke_dasharray(&self) -> Option<&str>;
    /// Overwrite every presentation attribute with `paint`.
    fn set_paint(&mut self, paint: Paint);
}

macro_rules! impl_presentation_attrs {
    ($($ty:ty),*) => {
        $(
            impl PresentationAttrs for $ty {
                fn stroke(&self) -> Option<&str> { self.stroke.as_deref() }
                fn fill(&self) -> Option<&str> { self.fill.as_deref() }
                fn stroke_width(&self) -> Option<&str> { self.stroke_width.as_deref() }
                fn stroke_dasharray(&self) -> Option<&str> { self.stroke_dasharray.as_deref() }
                fn set_paint(&mut self, paint: Paint) {
                    self.stroke = paint.stroke;
                    self.fill = paint.fill;
                    self.stroke_width = paint.stroke_width;
                    self.stroke_dasharray = paint.stroke_dasharray;
                    self.stroke_opacity = paint.stroke_opacity;
                    self.fill_opacity = paint.fill_opacity;
                }
            }
        )*
    };
}

/// SVG rect element (`<rect>`)
#[derive(Facet, Debug, Clone, Default)]
pub struct Rect {
    #[facet(xml::attribute)]
    pub x: Option<f64>,
    #[facet(xml::attribute)]
    pub y: Option<f64>,
    #[facet(xml::attribute)]
    pub width: Option<f64>,
    #[facet(xml::attribute)]
    pub height: Option<f64>,
    #[facet(xml::attribute)]
    pub rx: Option<f64>,
    #[facet(xml::attribute)]
    pub ry: Option<f64>,
    #[facet(xml::attribute)]
    pub stroke: Option<String>,
    #[facet(xml::attribute)]
    pub fill: Option<String>,
    #[facet(xml::attribute, rename = "stroke-width")]
    pub stroke_width: Option<String>,
    #[facet(xml::attribute, rename = "stroke-dasharray")]
    pub stroke_dasharray: Option<String>,
    #[facet(xml::attribute, rename = "stroke-opacity")]
    pub stroke_opacity: Option<String>,
    #[facet(xml::attribute, rename = "fill-opacity")]
    pub fill_opacity: Option<String>,
}

/// SVG ellipse element (`<ellipse>`)
#[derive(Facet, Debug, Clone, Default)]
pub struct Ellipse {
    #[facet(xml::attribute)]
    pub cx: Option<f64>,
    #[facet(xml::attribute)]
    pub cy: Option<f64>,
    #[facet(xml::attribute)]
    pub rx: Option<f64>,
    #[facet(xml::attribute)]
    pub ry: Option<f64>,
    #[facet(xml::attribute)]
    pub stroke: Option<String>,
    #[facet(xml::attribute)]
    pub fill: Option<String>,
    #[facet(xml::attribute, rename = "stroke-width")]
    pub stroke_width: Option<String>,
    #[facet(xml::attribute, rename = "stroke-dasharray")]
    pub stroke_dasharray: Option<String>,
    #[facet(xml::attribute, rename = "stroke-opacity")]
    pub stroke_opacity: Option<String>,
    #[facet(xml::attribute, rename = "fill-opacity")]
    pub fill_opacity: Option<String>,
}

/// SVG line element (`<line>`)
#[derive(Facet, Debug, Clone, Default)]
pub struct Line {
    #[facet(xml::attribute)]
    pub x1: Option<f64>,
    #[facet(xml::attribute)]
    pub y1: Option<f64>,
    #[facet(xml::attribute)]
    pub x2: Option<f64>,
    #[facet(xml::attribute)]
    pub y2: Option<f64>,
    #[facet(xml::attribute)]
    pub stroke: Option<String>,
    #[facet(xml::attribute)]
    pub fill: Option<String>,
    #[facet(xml::attribute, rename = "stroke-width")]
    pub stroke_width: Option<String>,
    #[facet(xml::attribute, rename = "stroke-dasharray")]
    pub stroke_dasharray: Option<String>,
    #[facet(xml::attribute, rename = "stroke-opacity")]
    pub stroke_opacity: Option<String>,
    #[facet(xml::attribute, rename = "fill-opacity")]
    pub fill_opacity: Option<String>,
}

/// SVG path element (`<path>`)
#[derive(Facet, Debug, Clone, Default)]
pub struct Path {
    #[facet(xml::attribute)]
    pub d: Option<String>,
    #[facet(xml::attribute)]
    pub stroke: Option<String>,
    #[facet(xml::attribute)]
    pub fill: Option<String>,
    #[facet(xml::attribute, rename = "stroke-width")]
    pub stroke_width: Option<String>,
    #[facet(xml::attribute, rename = "stroke-dasharray")]
    pub stroke_dasharray: Option<String>,
    #[facet(xml::attribute, rename = "stroke-opacity")]
    pub stroke_opacity: Option<String>,
    #[facet(xml::attribute, rename = "fill-opacity")]
    pub fill_opacity: Option<String>,
}

/// SVG text element (`<text>`)
#[derive(Facet, Debug, Clone, Default)]
pub struct Text {
    #[facet(xml::attribute)]
    pub x: Option<f64>,
    #[facet(xml::attribute)]
    pub y: Option<f64>,
    #[facet(xml::attribute, rename = "font-family")]
    pub font_family: Option<String>,
    #[facet(xml::attribute, rename = "font-size")]
    pub font_size: Option<f64>,
    #[facet(xml::attribute, rename = "font-weight")]
    pub font_weight: Option<String>,
    #[facet(xml::attribute, rename = "text-anchor")]
    pub text_anchor: Option<String>,
    #[facet(xml::attribute)]
    pub stroke: Option<String>,
    #[facet(xml::attribute)]
    pub fill: Option<String>,
    #[facet(xml::attribute, rename = "stroke-width")]
    pub stroke_width: Option<String>,
    #[facet(xml::attribute, rename = "stroke-dasharray")]
    pub stroke_dasharray: Option<String>,
    #[facet(xml::attribute, rename = "stroke-opacity")]
    pub stroke_opacity: Option<String>,
    #[facet(xml::attribute, rename = "fill-opacity")]
    pub fill_opacity: Option<String>,
    #[facet(xml::text)]
    pub content: String,
}

impl_presentation_attrs!(Rect, Ellipse, Line, Path, Text);

// Re-export facet_xml for convenience
pub use facet_xml;
