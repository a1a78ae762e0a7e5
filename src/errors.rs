//! Error types with rich diagnostics using miette

use miette::Diagnostic;
use thiserror::Error;

use crate::modifiers::Modifier;

// ============================================================================
// Modifier Errors
// ============================================================================

/// A modifier value that could not be turned into an overlay.
///
/// Never aborts a render: the overlay is dropped and the error is reported in
/// [`SymbolArtifact::skipped`](crate::SymbolArtifact::skipped).
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum ModifierError {
    #[error("invalid value {value:?} for {key}: {reason}")]
    #[diagnostic(code(milsym::modifier::invalid_value))]
    InvalidValue {
        key: Modifier,
        value: String,
        reason: &'static str,
        #[help]
        help: Option<String>,
    },
}

impl ModifierError {
    pub fn invalid(key: Modifier, value: impl Into<String>, reason: &'static str) -> Self {
        ModifierError::InvalidValue {
            key,
            value: value.into(),
            reason,
            help: None,
        }
    }

    pub fn with_help(self, text: impl Into<String>) -> Self {
        match self {
            ModifierError::InvalidValue {
                key, value, reason, ..
            } => ModifierError::InvalidValue {
                key,
                value,
                reason,
                help: Some(text.into()),
            },
        }
    }

    pub fn key(&self) -> Modifier {
        match self {
            ModifierError::InvalidValue { key, .. } => *key,
        }
    }
}

// ============================================================================
// Metrics Errors
// ============================================================================

/// Failures reported by a [`TextMetrics`](crate::TextMetrics) implementation
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum MetricsError {
    #[error("font {family:?} is not available")]
    #[diagnostic(code(milsym::metrics::font_unavailable))]
    FontUnavailable { family: String },

    #[error("font size {size} is not a usable size")]
    #[diagnostic(
        code(milsym::metrics::invalid_size),
        help("font sizes must be finite and greater than zero")
    )]
    InvalidSize { size: f64 },
}

// ============================================================================
// Render Errors
// ============================================================================

/// Errors that abort a render call
#[derive(Error, Diagnostic, Debug)]
pub enum RenderError {
    #[error("text metrics unavailable while measuring {text:?}")]
    #[diagnostic(
        code(milsym::render::missing_text_metrics),
        help("the metrics service must be able to measure every label")
    )]
    MissingTextMetrics {
        text: String,
        #[source]
        source: MetricsError,
    },

    #[error("base icon bounds {bounds} are not usable")]
    #[diagnostic(
        code(milsym::render::invalid_bounds),
        help("bounds must be finite with non-negative width and height")
    )]
    InvalidBounds { bounds: String },

    #[error("SVG serialization failed: {message}")]
    #[diagnostic(code(milsym::render::serialization))]
    Serialization { message: String },
}
