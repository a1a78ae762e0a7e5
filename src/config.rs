//! Renderer settings and per-call attributes.
//!
//! Settings are process-wide and swapped atomically; a render call takes one
//! snapshot at its start and never looks at the global again, so a concurrent
//! [`RendererSettings::install`] can't change a render halfway through.

use std::sync::{Arc, LazyLock};

use arc_swap::ArcSwap;
use serde::{Deserialize, Serialize};

use crate::metrics::FontDescriptor;
use crate::types::Color;

/// How label text is kept readable over busy map backgrounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextBackground {
    /// Stroke copy of the text in the background color under the fill copy
    #[default]
    Outline,
    /// Filled rectangle behind the text
    ColorFill,
    None,
}

/// Operational condition indicator style.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OciDisplay {
    #[default]
    Bar,
    Slash,
    Off,
}

/// Where the artifact ends up. Raster targets need non-negative coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputTarget {
    #[default]
    Vector,
    Raster,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererSettings {
    pub label_font: FontDescriptor,
    pub text_background: TextBackground,
    /// Stroke width of the outline copy behind labels
    pub outline_width: f64,
    pub oci_display: OciDisplay,
    pub output_target: OutputTarget,
    pub default_pixel_size: f64,
    pub line_color: Color,
    pub text_color: Color,
    /// Background for labels; derived from the text color when unset
    pub text_background_color: Option<Color>,
}

impl Default for RendererSettings {
    fn default() -> Self {
        RendererSettings {
            label_font: FontDescriptor::default(),
            text_background: TextBackground::Outline,
            outline_width: 2.0,
            oci_display: OciDisplay::Bar,
            output_target: OutputTarget::Vector,
            default_pixel_size: 50.0,
            line_color: Color::BLACK,
            text_color: Color::BLACK,
            text_background_color: None,
        }
    }
}

static CURRENT: LazyLock<ArcSwap<RendererSettings>> =
    LazyLock::new(|| ArcSwap::from_pointee(RendererSettings::default()));

impl RendererSettings {
    /// Snapshot of the process-wide settings.
    pub fn current() -> Arc<RendererSettings> {
        CURRENT.load_full()
    }

    /// Replace the process-wide settings. Renders already running keep the
    /// snapshot they started with.
    pub fn install(settings: RendererSettings) {
        CURRENT.store(Arc::new(settings));
    }

    pub fn with_label_font(mut self, font: FontDescriptor) -> Self {
        self.label_font = font;
        self
    }

    pub fn with_text_background(mut self, policy: TextBackground) -> Self {
        self.text_background = policy;
        self
    }

    pub fn with_oci_display(mut self, mode: OciDisplay) -> Self {
        self.oci_display = mode;
        self
    }

    pub fn with_output_target(mut self, target: OutputTarget) -> Self {
        self.output_target = target;
        self
    }
}

/// Per-call overrides. Anything unset comes from the settings snapshot.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderAttributes {
    pub alpha: Option<f64>,
    pub text_color: Option<Color>,
    pub text_background_color: Option<Color>,
    pub line_color: Option<Color>,
    pub fill_color: Option<Color>,
    pub engagement_bar_color: Option<Color>,
    pub pixel_size: Option<f64>,
}

impl RenderAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = Some(alpha);
        self
    }

    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = Some(color);
        self
    }

    pub fn with_text_background_color(mut self, color: Color) -> Self {
        self.text_background_color = Some(color);
        self
    }

    pub fn with_line_color(mut self, color: Color) -> Self {
        self.line_color = Some(color);
        self
    }

    pub fn with_fill_color(mut self, color: Color) -> Self {
        self.fill_color = Some(color);
        self
    }

    pub fn with_engagement_bar_color(mut self, color: Color) -> Self {
        self.engagement_bar_color = Some(color);
        self
    }

    pub fn with_pixel_size(mut self, size: f64) -> Self {
        self.pixel_size = Some(size);
        self
    }

    /// Alpha clamped to 0..1. NaN counts as unset.
    pub fn clamped_alpha(&self) -> Option<f64> {
        self.alpha
            .filter(|a| !a.is_nan())
            .map(|a| a.clamp(0.0, 1.0))
    }
}
