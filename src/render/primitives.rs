//! Overlay glyph primitives.
//!
//! Labels are handled separately (see [`super::label`]); these are the line
//! art pieces: mobility wheels, indicator rays, bars and arrows.

use enum_dispatch::enum_dispatch;
use glam::{DVec2, dvec2};

use crate::svg::{self, PathData, Presentation, SvgNode};
use crate::types::{BoundsBox, Color};

#[enum_dispatch]
pub trait Primitive {
    /// Box containing everything the primitive can paint, stroke excluded.
    fn bounds(&self) -> BoundsBox;
    fn translate(&mut self, d: DVec2);
    fn to_node(&self, presentation: &Presentation) -> SvgNode;
}

#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    pub from: DVec2,
    pub to: DVec2,
}

impl Primitive for Segment {
    fn bounds(&self) -> BoundsBox {
        BoundsBox::from_corners(self.from, self.to)
    }

    fn translate(&mut self, d: DVec2) {
        self.from += d;
        self.to += d;
    }

    fn to_node(&self, presentation: &Presentation) -> SvgNode {
        SvgNode::Line(presentation.paint(svg::Line {
            x1: Some(self.from.x),
            y1: Some(self.from.y),
            x2: Some(self.to.x),
            y2: Some(self.to.y),
            ..Default::default()
        }))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Ellipse {
    pub center: DVec2,
    pub radii: DVec2,
}

impl Ellipse {
    pub fn circle(center: DVec2, r: f64) -> Self {
        Ellipse {
            center,
            radii: dvec2(r, r),
        }
    }
}

impl Primitive for Ellipse {
    fn bounds(&self) -> BoundsBox {
        BoundsBox::from_corners(self.center - self.radii, self.center + self.radii)
    }

    fn translate(&mut self, d: DVec2) {
        self.center += d;
    }

    fn to_node(&self, presentation: &Presentation) -> SvgNode {
        SvgNode::Ellipse(presentation.paint(svg::Ellipse {
            cx: Some(self.center.x),
            cy: Some(self.center.y),
            rx: Some(self.radii.x),
            ry: Some(self.radii.y),
            ..Default::default()
        }))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Rect {
    pub rect: BoundsBox,
}

impl Primitive for Rect {
    fn bounds(&self) -> BoundsBox {
        self.rect
    }

    fn translate(&mut self, d: DVec2) {
        self.rect = self.rect.translate(d);
    }

    fn to_node(&self, presentation: &Presentation) -> SvgNode {
        SvgNode::Rect(presentation.paint(svg::Rect {
            x: Some(self.rect.x),
            y: Some(self.rect.y),
            width: Some(self.rect.width),
            height: Some(self.rect.height),
            ..Default::default()
        }))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RoundedRect {
    pub rect: BoundsBox,
    pub radius: f64,
}

impl Primitive for RoundedRect {
    fn bounds(&self) -> BoundsBox {
        self.rect
    }

    fn translate(&mut self, d: DVec2) {
        self.rect = self.rect.translate(d);
    }

    fn to_node(&self, presentation: &Presentation) -> SvgNode {
        SvgNode::Rect(presentation.paint(svg::Rect {
            x: Some(self.rect.x),
            y: Some(self.rect.y),
            width: Some(self.rect.width),
            height: Some(self.rect.height),
            rx: Some(self.radius),
            ry: Some(self.radius),
            ..Default::default()
        }))
    }
}

/// Move/line/cubic path with an optional dash pattern.
#[derive(Clone, Debug, PartialEq)]
pub struct MultiSegmentPath {
    pub data: PathData,
    pub dash: Option<[f64; 2]>,
}

impl MultiSegmentPath {
    pub fn new(data: PathData) -> Self {
        MultiSegmentPath { data, dash: None }
    }

    pub fn dashed(data: PathData, dash: [f64; 2]) -> Self {
        MultiSegmentPath {
            data,
            dash: Some(dash),
        }
    }

    /// Open polyline through `points`.
    pub fn polyline(points: &[DVec2]) -> Self {
        let mut data = PathData::new();
        for (i, p) in points.iter().enumerate() {
            data = if i == 0 { data.m(*p) } else { data.l(*p) };
        }
        MultiSegmentPath::new(data)
    }

    /// Closed polygon through `points`.
    pub fn polygon(points: &[DVec2]) -> Self {
        let mut path = MultiSegmentPath::polyline(points);
        path.data = path.data.z();
        path
    }
}

impl Primitive for MultiSegmentPath {
    /// Uses the control-point hull for curves, which always contains them.
    fn bounds(&self) -> BoundsBox {
        let points: Vec<DVec2> = self.data.points().collect();
        BoundsBox::from_points(&points).unwrap_or_default()
    }

    fn translate(&mut self, d: DVec2) {
        self.data.translate(d);
    }

    fn to_node(&self, presentation: &Presentation) -> SvgNode {
        let presentation = presentation
            .clone()
            .with_dash(self.dash.map(|d| d.to_vec()));
        SvgNode::Path(presentation.paint(svg::Path {
            d: Some(self.data.to_string()),
            ..Default::default()
        }))
    }
}

#[enum_dispatch(Primitive)]
#[derive(Clone, Debug, PartialEq)]
pub enum GlyphPrimitive {
    Segment,
    Ellipse,
    Rect,
    RoundedRect,
    MultiSegmentPath,
}

/// Back-to-front drawing order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Layer {
    Mobility,
    Echelon,
    AffiliationModifier,
    TaskForce,
    EngagementBar,
    FeintDummy,
    Leadership,
    OciBar,
    BaseIcon,
    OciSlash,
    HqStaff,
    DirectionOfMovement,
    Labels,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Paint {
    pub stroke: Option<Color>,
    pub fill: Option<Color>,
    pub width: f64,
}

impl Paint {
    pub fn stroke(color: Color, width: f64) -> Self {
        Paint {
            stroke: Some(color),
            fill: None,
            width,
        }
    }

    pub fn fill(color: Color) -> Self {
        Paint {
            stroke: None,
            fill: Some(color),
            width: 0.0,
        }
    }

    pub fn stroke_and_fill(stroke: Color, fill: Color, width: f64) -> Self {
        Paint {
            stroke: Some(stroke),
            fill: Some(fill),
            width,
        }
    }

    pub fn presentation(&self) -> Presentation {
        Presentation::new(self.stroke, self.fill, self.width)
    }
}

/// A primitive with explicit paint, in its drawing layer.
#[derive(Clone, Debug, PartialEq)]
pub struct Glyph {
    pub primitive: GlyphPrimitive,
    pub paint: Paint,
    pub layer: Layer,
}

impl Glyph {
    pub fn new(primitive: impl Into<GlyphPrimitive>, paint: Paint, layer: Layer) -> Self {
        Glyph {
            primitive: primitive.into(),
            paint,
            layer,
        }
    }

    pub fn bounds(&self) -> BoundsBox {
        self.primitive.bounds()
    }

    pub fn translate(&mut self, d: DVec2) {
        self.primitive.translate(d);
    }

    pub fn to_node(&self) -> SvgNode {
        self.primitive.to_node(&self.paint.presentation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::svg::PresentationAttrs;

    #[test]
    fn curve_bounds_use_control_hull() {
        let path = MultiSegmentPath::new(
            PathData::new()
                .m(dvec2(0.0, 0.0))
                .c(dvec2(0.0, 10.0), dvec2(10.0, 10.0), dvec2(10.0, 0.0)),
        );
        assert_eq!(path.bounds(), BoundsBox::new(0.0, 0.0, 10.0, 10.0));
    }

    #[test]
    fn translate_dispatches_to_variant() {
        let mut glyph = Glyph::new(
            Ellipse::circle(dvec2(5.0, 5.0), 2.0),
            Paint::stroke(Color::BLACK, 1.0),
            Layer::Mobility,
        );
        glyph.translate(dvec2(1.0, -1.0));
        assert_eq!(glyph.bounds(), BoundsBox::new(4.0, 2.0, 4.0, 4.0));
    }

    #[test]
    fn layers_order_back_to_front() {
        assert!(Layer::Mobility < Layer::BaseIcon);
        assert!(Layer::OciBar < Layer::BaseIcon);
        assert!(Layer::OciSlash > Layer::BaseIcon);
        assert!(Layer::DirectionOfMovement < Layer::Labels);
    }

    #[test]
    fn dashed_path_emits_dasharray() {
        let glyph = Glyph::new(
            MultiSegmentPath::dashed(
                PathData::new().m(dvec2(0.0, 0.0)).l(dvec2(4.0, 0.0)),
                [3.0, 2.0],
            ),
            Paint::stroke(Color::BLACK, 1.0),
            Layer::FeintDummy,
        );
        let SvgNode::Path(path) = glyph.to_node() else {
            panic!("dashed path should emit a <path>");
        };
        insta::assert_snapshot!(path.d.clone().unwrap_or_default(), @"M0,0 L4,0");
        assert_eq!(path.stroke(), Some("#000000"));
        assert_eq!(path.fill(), Some("none"));
        assert_eq!(path.stroke_dasharray(), Some("3,2"));
    }
}
