//! Default sizes and spacing (user units, y down)

/// Gap between the frame and an echelon / affiliation-modifier baseline
pub const ECHELON_GAP: f64 = 2.0;

/// Task force box margin around the echelon text
pub const TASK_FORCE_SIDE_MARGIN: f64 = 4.0;
pub const TASK_FORCE_TOP_MARGIN: f64 = 2.0;
/// Width of a task force box with no echelon, as a fraction of the frame
pub const TASK_FORCE_BARE_WIDTH: f64 = 0.4;

/// Mobility glyph inset from the frame's left edge
pub const MOBILITY_INSET_X: f64 = 1.0;
/// Mobility glyph is narrower than the frame by this much
pub const MOBILITY_WIDTH_TRIM: f64 = 3.0;
/// Gap between the frame bottom and the mobility glyph
pub const MOBILITY_GAP: f64 = 3.0;
pub const MOBILITY_FIFTH: f64 = 0.2;

/// Feint/dummy dash pattern, and the compact one for short frames
pub const FEINT_DASH: [f64; 2] = [6.0, 4.0];
pub const FEINT_DASH_SMALL: [f64; 2] = [3.0, 2.0];
pub const FEINT_SMALL_HEIGHT: f64 = 20.0;
/// Clearance kept between the indicator apex and a task force box or echelon
pub const FEINT_CLEARANCE: f64 = 2.0;

/// Gap between the engagement bar and whatever it sits on
pub const ENGAGEMENT_GAP: f64 = 2.0;
pub const ENGAGEMENT_PADDING: f64 = 1.0;
pub const ENGAGEMENT_OUTLINE_WIDTH: f64 = 1.0;

/// Gap between the operational condition bar and the frame or mobility glyph
pub const OCI_GAP: f64 = 2.0;
pub const OCI_MIN_THICKNESS: f64 = 2.0;
pub const OCI_THICKNESS_DIVISOR: f64 = 5.0;

pub const DOM_LENGTH: f64 = 40.0;
pub const DOM_CBRN_FACTOR: f64 = 1.5;
/// Headquarters arrow length as a fraction of frame height
pub const DOM_HQ_SQUARE_FACTOR: f64 = 0.7;
pub const DOM_HQ_OTHER_FACTOR: f64 = 0.9;
/// Arrowhead width, before the per-length scaling
pub const ARROW_WIDTH: f64 = 10.0;
pub const ARROW_ANGLE_SHORT: f64 = 0.55;
pub const ARROW_ANGLE_LONG: f64 = 0.423;
pub const ARROW_SHORT_LIMIT: f64 = 50.0;

/// Glyph stroke width is the pixel size over this, never below 1
pub const STROKE_DIVISOR: f64 = 25.0;

/// Padding of a filled label background
pub const COLOR_FILL_PADDING: f64 = 1.0;

/// Ulp steps tried when a raster shift rounds a part below zero
pub const MAX_NORMALIZE_NUDGES: usize = 64;

/// Sample used to measure line height
pub const LINE_SAMPLE: &str = "Hj";
