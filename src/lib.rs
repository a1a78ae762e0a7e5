//! Modifier placement and layout for military symbols.
//!
//! Given a decoded symbol descriptor, a set of modifier values and a
//! pre-rendered base icon, the engine places text labels and overlay glyphs
//! (echelon, task force, mobility, engagement bar, operational condition,
//! direction of movement, ...) around the icon and serializes the result as
//! an SVG fragment.
//!
//! ```no_run
//! use glam::dvec2;
//! use milsym::{
//!     BaseIcon, BoundsBox, Modifier, ModifierRenderer, ModifierValues, ProportionalMetrics,
//!     RenderAttributes, SymbolDescriptor, SymbolSet,
//! };
//!
//! let metrics = ProportionalMetrics::default();
//! let renderer = ModifierRenderer::new(&metrics);
//! let symbol = SymbolDescriptor::new(SymbolSet::LandUnit, 121100).with_amplifier(16);
//! let values = ModifierValues::new()
//!     .with(Modifier::T, "1-66")
//!     .with(Modifier::W, "231200Z");
//! let bounds = BoundsBox::try_new(0.0, 0.0, 60.0, 40.0)?;
//! let icon = BaseIcon::new("<rect width=\"60\" height=\"40\"/>", bounds, dvec2(30.0, 20.0));
//! let artifact = renderer.render(&symbol, &values, &RenderAttributes::default(), &icon)?;
//! println!("{}", artifact.to_svg_document()?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod catalog;
pub mod config;
pub mod descriptor;
pub mod errors;
pub mod log;
pub mod metrics;
pub mod modifiers;
pub mod render;
pub mod svg;
pub mod types;

pub use catalog::{
    AllowAll, BaseIcon, CountryLookup, ModifierCatalog, NoCountries, StaticCatalog,
    StaticCountries,
};
pub use config::{OciDisplay, OutputTarget, RenderAttributes, RendererSettings, TextBackground};
pub use descriptor::{
    Affiliation, Amplifier, Context, FrameShape, Hqtfd, Status, SymbolDescriptor, SymbolSet,
};
pub use errors::{MetricsError, ModifierError, RenderError};
pub use metrics::{FontDescriptor, FontWeight, ProportionalMetrics, TextExtent, TextMetrics};
pub use modifiers::{Modifier, ModifierValues, UnknownModifier};
pub use render::{Layout, ModifierRenderer, SymbolArtifact};
pub use types::{BoundsBox, Color, NumericError};
