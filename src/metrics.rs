//! Text measurement.
//!
//! Label placement needs the advance width and the ascent/descent of every
//! string it positions. Hosts usually plug in their own font engine through
//! [`TextMetrics`]; [`ProportionalMetrics`] is a table-driven stand-in that
//! needs no font files and gives stable numbers for tests.

use serde::{Deserialize, Serialize};

use crate::errors::MetricsError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Normal,
    #[default]
    Bold,
}

impl FontWeight {
    pub fn as_css(self) -> &'static str {
        match self {
            FontWeight::Normal => "normal",
            FontWeight::Bold => "bold",
        }
    }
}

/// Font used for labels
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontDescriptor {
    pub family: String,
    /// Size in user units
    pub size: f64,
    pub weight: FontWeight,
}

impl Default for FontDescriptor {
    fn default() -> Self {
        FontDescriptor {
            family: "Arial".to_string(),
            size: 12.0,
            weight: FontWeight::Bold,
        }
    }
}

impl FontDescriptor {
    pub fn new(family: impl Into<String>, size: f64, weight: FontWeight) -> Self {
        FontDescriptor {
            family: family.into(),
            size,
            weight,
        }
    }
}

/// Measured extent of one line of text
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct TextExtent {
    /// Advance width
    pub width: f64,
    /// Distance from the baseline to the top of the tallest glyph
    pub ascent: f64,
    /// Distance from the baseline to the bottom of the lowest glyph
    pub descent: f64,
}

impl TextExtent {
    pub fn height(&self) -> f64 {
        self.ascent + self.descent
    }
}

/// Text measurement service
pub trait TextMetrics {
    fn measure(&self, text: &str, font: &FontDescriptor) -> Result<TextExtent, MetricsError>;
}

impl<T: TextMetrics + ?Sized> TextMetrics for &T {
    fn measure(&self, text: &str, font: &FontDescriptor) -> Result<TextExtent, MetricsError> {
        (**self).measure(text, font)
    }
}

impl<T: TextMetrics + ?Sized> TextMetrics for Box<T> {
    fn measure(&self, text: &str, font: &FontDescriptor) -> Result<TextExtent, MetricsError> {
        (**self).measure(text, font)
    }
}

/// Proportional advance widths for printable ASCII, in units where a digit
/// is 91 wide.
#[rustfmt::skip]
const ADVANCE: [u8; 95] = [
    45,  55,  62, 115,  90, 132, 125,  40,
    55,  55,  71, 115,  45,  48,  45,  50,
    91,  91,  91,  91,  91,  91,  91,  91,
    91,  91,  50,  50, 120, 120, 120,  78,
   142, 102, 105, 110, 115, 105,  98, 105,
   125,  58,  58, 107,  95, 145, 125, 115,
    95, 115, 107,  95,  97, 118, 102, 150,
   100,  93, 100,  58,  50,  58, 119,  72,
    72,  86,  92,  80,  92,  85,  52,  92,
    92,  47,  47,  88,  48, 135,  92,  86,
    92,  92,  69,  75,  58,  92,  80, 121,
    81,  80,  76,  91,  49,  91, 118,
];

/// Advance for anything outside printable ASCII.
const ADVANCE_OTHER: u32 = 100;

/// Table units per em. A digit comes out at 0.556 em, as in Arial.
const UNITS_PER_EM: f64 = 163.7;

const BOLD_WIDENING: f64 = 1.08;

/// Sum of table advances for `text`.
pub fn advance_units(text: &str) -> u32 {
    text.chars()
        .map(|c| {
            if (' '..='~').contains(&c) {
                ADVANCE[(c as usize) - 0x20] as u32
            } else {
                ADVANCE_OTHER
            }
        })
        .sum()
}

/// Table-driven metrics with Arial-like vertical proportions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProportionalMetrics {
    /// Ascent as a fraction of the font size
    pub ascent: f64,
    /// Descent as a fraction of the font size
    pub descent: f64,
}

impl Default for ProportionalMetrics {
    fn default() -> Self {
        ProportionalMetrics {
            ascent: 0.905,
            descent: 0.212,
        }
    }
}

impl TextMetrics for ProportionalMetrics {
    fn measure(&self, text: &str, font: &FontDescriptor) -> Result<TextExtent, MetricsError> {
        if !font.size.is_finite() || font.size <= 0.0 {
            return Err(MetricsError::InvalidSize { size: font.size });
        }
        let mut width = advance_units(text) as f64 / UNITS_PER_EM * font.size;
        if font.weight == FontWeight::Bold {
            width *= BOLD_WIDENING;
        }
        Ok(TextExtent {
            width,
            ascent: self.ascent * font.size,
            descent: self.descent * font.size,
        })
    }
}
