//! Mobility and towed-array glyphs, drawn under the frame.

use glam::dvec2;

use crate::descriptor::Mobility;
use crate::svg::PathData;
use crate::types::{BoundsBox, Color};

use super::super::defaults;
use super::super::primitives::{
    Ellipse, Glyph, GlyphPrimitive, Layer, MultiSegmentPath, Paint, Rect, RoundedRect, Segment,
};

/// Strip under the frame every mobility variant is drawn into.
struct Strip {
    x: f64,
    y0: f64,
    width: f64,
    fifth: f64,
}

impl Strip {
    fn under(b: &BoundsBox) -> Self {
        Strip {
            x: b.x + defaults::MOBILITY_INSET_X,
            y0: b.bottom() + defaults::MOBILITY_GAP,
            width: (b.width - defaults::MOBILITY_WIDTH_TRIM).max(0.0),
            fifth: (b.width * defaults::MOBILITY_FIFTH).round(),
        }
    }

    fn right(&self) -> f64 {
        self.x + self.width
    }

    fn wheel(&self, cx: f64) -> GlyphPrimitive {
        let r = self.fifth / 2.0;
        Ellipse::circle(dvec2(cx, self.y0 + r), r).into()
    }

    fn axle(&self) -> GlyphPrimitive {
        Segment {
            from: dvec2(self.x, self.y0),
            to: dvec2(self.right(), self.y0),
        }
        .into()
    }
}

/// Line art for `kind` under the frame `b`.
pub fn build(kind: Mobility, b: &BoundsBox, color: Color, stroke_width: f64) -> Vec<Glyph> {
    let s = Strip::under(b);
    let r = s.fifth / 2.0;
    let stroke = Paint::stroke(color, stroke_width);

    let mut filled = Vec::new();
    let stroked: Vec<GlyphPrimitive> = match kind {
        Mobility::WheeledLimited => {
            vec![s.axle(), s.wheel(s.x + r), s.wheel(s.right() - r)]
        }
        Mobility::WheeledCrossCountry => vec![
            s.axle(),
            s.wheel(s.x + r),
            s.wheel(s.x + s.width / 2.0),
            s.wheel(s.right() - r),
        ],
        Mobility::Tracked => vec![tracks(s.x, s.y0, s.width, s.fifth)],
        Mobility::WheeledTracked => vec![
            s.wheel(s.x + r),
            tracks(
                s.x + s.fifth + 1.0,
                s.y0,
                (s.width - s.fifth - 1.0).max(0.0),
                s.fifth,
            ),
        ],
        Mobility::Towed => vec![
            Segment {
                from: dvec2(s.x + s.fifth, s.y0 + r),
                to: dvec2(s.right() - s.fifth, s.y0 + r),
            }
            .into(),
            s.wheel(s.x + r),
            s.wheel(s.right() - r),
        ],
        Mobility::Rail => vec![
            s.axle(),
            s.wheel(s.x + r),
            s.wheel(s.x + 3.0 * r),
            s.wheel(s.right() - 3.0 * r),
            s.wheel(s.right() - r),
        ],
        Mobility::PackAnimals => {
            let cx = b.center_x();
            let (top, bottom) = (s.y0, s.y0 + s.fifth);
            let data = PathData::new()
                .m(dvec2(cx - s.fifth, bottom))
                .l(dvec2(cx - r, top))
                .l(dvec2(cx, bottom))
                .l(dvec2(cx + r, top))
                .l(dvec2(cx + s.fifth, bottom));
            vec![MultiSegmentPath::new(data).into()]
        }
        Mobility::OverSnow => {
            let bottom = s.y0 + s.fifth;
            let data = PathData::new()
                .m(dvec2(s.right(), bottom))
                .l(dvec2(s.x + s.fifth, bottom))
                .c(dvec2(s.x, bottom), dvec2(s.x, s.y0 + r), dvec2(s.x, s.y0));
            vec![MultiSegmentPath::new(data).into()]
        }
        Mobility::Sled => {
            let bottom = s.y0 + s.fifth;
            let data = PathData::new()
                .m(dvec2(s.x, s.y0))
                .c(dvec2(s.x, bottom), dvec2(s.x, bottom), dvec2(s.x + s.fifth, bottom))
                .l(dvec2(s.right() - s.fifth, bottom))
                .c(
                    dvec2(s.right(), bottom),
                    dvec2(s.right(), bottom),
                    dvec2(s.right(), s.y0),
                );
            vec![MultiSegmentPath::new(data).into()]
        }
        Mobility::Barge => {
            let bottom = s.y0 + s.fifth;
            let data = PathData::new()
                .m(dvec2(s.x, s.y0))
                .l(dvec2(s.right(), s.y0))
                .c(dvec2(s.right(), bottom), dvec2(s.x, bottom), dvec2(s.x, s.y0))
                .z();
            vec![MultiSegmentPath::new(data).into()]
        }
        Mobility::Amphibious => vec![MultiSegmentPath::new(scallops(&s, 7)).into()],
        Mobility::ShortTowedArray => {
            let side = s.fifth;
            let mid = s.y0 + side / 2.0;
            filled.extend(
                [1.0 / 6.0, 0.5, 5.0 / 6.0]
                    .iter()
                    .map(|t| square(s.x + s.width * t, mid, side)),
            );
            vec![
                Segment {
                    from: dvec2(s.x, mid),
                    to: dvec2(s.right(), mid),
                }
                .into(),
            ]
        }
        Mobility::LongTowedArray => {
            let side = s.fifth;
            let mid = s.y0 + side / 2.0;
            filled.extend(
                [0.0, 0.25, 0.5, 0.75, 1.0]
                    .iter()
                    .map(|t| square(s.x + s.width * t, mid, side)),
            );
            vec![
                Segment {
                    from: dvec2(s.x, mid),
                    to: dvec2(s.right(), mid),
                }
                .into(),
            ]
        }
    };

    let solid = Paint::stroke_and_fill(color, color, stroke_width);
    stroked
        .into_iter()
        .map(|p| Glyph::new(p, stroke, Layer::Mobility))
        .chain(filled.into_iter().map(|p| Glyph::new(p, solid, Layer::Mobility)))
        .collect()
}

fn tracks(x: f64, y: f64, width: f64, height: f64) -> GlyphPrimitive {
    RoundedRect {
        rect: BoundsBox::new(x, y, width, height),
        radius: height * 2.0 / 3.0,
    }
    .into()
}

fn square(cx: f64, cy: f64, side: f64) -> GlyphPrimitive {
    Rect {
        rect: BoundsBox::new(cx - side / 2.0, cy - side / 2.0, side, side),
    }
    .into()
}

/// Wave of `lobes` half-lobes alternating up and down across the strip.
fn scallops(s: &Strip, lobes: usize) -> PathData {
    let mid = s.y0 + s.fifth / 2.0;
    let lobe = s.width / lobes as f64;
    let mut data = PathData::new().m(dvec2(s.x, mid));
    for i in 0..lobes {
        let x0 = s.x + lobe * i as f64;
        let x1 = x0 + lobe;
        let peak = if i % 2 == 0 { s.y0 } else { s.y0 + s.fifth };
        data = data.c(dvec2(x0, peak), dvec2(x1, peak), dvec2(x1, mid));
    }
    data
}
