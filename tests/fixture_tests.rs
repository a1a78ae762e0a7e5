//! Data-driven render checks. Each `tests/fixtures/*.json` file describes one
//! symbol, its modifiers and the settings to render it with, plus what the
//! result must contain. Every fixture is also checked against the invariants
//! that hold for any render: determinism and bounds containment.

use datatest_stable::Utf8Path;
use milsym::{
    BaseIcon, BoundsBox, Modifier, ModifierRenderer, ModifierValues, OutputTarget,
    ProportionalMetrics, RenderAttributes, RendererSettings, StaticCountries, SymbolArtifact,
    SymbolDescriptor,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Fixture {
    symbol: SymbolDescriptor,
    #[serde(default)]
    modifiers: ModifierValues,
    #[serde(default)]
    settings: RendererSettings,
    #[serde(default)]
    attributes: RenderAttributes,
    #[serde(default)]
    countries: StaticCountries,
    icon: BoundsBox,
    #[serde(default)]
    expect: Expect,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Expect {
    /// Keys that must have a placed label
    labels: Vec<Modifier>,
    /// Keys that must not
    absent: Vec<Modifier>,
    /// Glyph layers that must appear, by name
    layers: Vec<String>,
    /// Keys reported as skipped, in order
    skipped: Vec<Modifier>,
    /// Substrings of the SVG fragment
    contains: Vec<String>,
    /// The fragment is exactly the icon content
    passthrough: bool,
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn render(fixture: &Fixture, icon: &BaseIcon) -> datatest_stable::Result<SymbolArtifact> {
    let metrics = ProportionalMetrics::default();
    let artifact = ModifierRenderer::new(&metrics)
        .with_countries(&fixture.countries)
        .render_with_settings(
            &fixture.settings,
            &fixture.symbol,
            &fixture.modifiers,
            &fixture.attributes,
            icon,
        )?;
    Ok(artifact)
}

fn check_invariants(
    fixture: &Fixture,
    icon: &BaseIcon,
    artifact: &SymbolArtifact,
) -> Result<(), String> {
    let image = artifact.image_bounds;
    if !image.contains(&artifact.symbol_bounds) {
        return Err(format!("image {image} does not contain the symbol"));
    }
    for label in &artifact.labels {
        if !image.contains(&label.bounds()) {
            return Err(format!("label {:?} escapes image {image}", label.text()));
        }
    }
    for glyph in &artifact.glyphs {
        if !image.contains(&glyph.bounds()) {
            return Err(format!("{:?} glyph escapes image {image}", glyph.layer));
        }
    }

    let shift = artifact.symbol_bounds.top_left() - icon.bounds.top_left();
    if (artifact.anchor - (icon.anchor + shift)).length() > 1e-9 {
        return Err("anchor did not move with the symbol".to_string());
    }
    match fixture.settings.output_target {
        OutputTarget::Raster if image.x < 0.0 || image.y < 0.0 => {
            Err(format!("raster image {image} has negative coordinates"))
        }
        OutputTarget::Vector if artifact.symbol_bounds != icon.bounds => {
            Err("vector output moved the symbol".to_string())
        }
        _ => Ok(()),
    }
}

fn check_expectations(
    expect: &Expect,
    icon: &BaseIcon,
    artifact: &SymbolArtifact,
) -> Result<(), String> {
    let has_label = |key: Modifier| artifact.labels.iter().any(|l| l.key == Some(key));
    for key in &expect.labels {
        if !has_label(*key) {
            return Err(format!("no label for {key}"));
        }
    }
    for key in &expect.absent {
        if has_label(*key) {
            return Err(format!("unexpected label for {key}"));
        }
    }
    let layers: Vec<String> = artifact
        .glyphs
        .iter()
        .map(|g| format!("{:?}", g.layer))
        .collect();
    for layer in &expect.layers {
        if !layers.contains(layer) {
            return Err(format!("no {layer} glyph, have {layers:?}"));
        }
    }
    let skipped: Vec<Modifier> = artifact.skipped.iter().map(|e| e.key()).collect();
    if skipped != expect.skipped {
        return Err(format!("skipped {skipped:?}, expected {:?}", expect.skipped));
    }
    for needle in &expect.contains {
        if !artifact.svg.contains(needle.as_str()) {
            return Err(format!("fragment lacks {needle:?}"));
        }
    }
    if expect.passthrough && artifact.svg != icon.content {
        return Err("expected the icon alone".to_string());
    }
    Ok(())
}

fn render_fixture(path: &Utf8Path) -> datatest_stable::Result<()> {
    init_tracing();
    let source = std::fs::read_to_string(path)?;
    let fixture: Fixture = serde_json::from_str(&source)?;
    let icon = BaseIcon::new(
        format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}"/>"#,
            fixture.icon.x, fixture.icon.y, fixture.icon.width, fixture.icon.height
        ),
        fixture.icon,
        fixture.icon.center(),
    );

    let artifact = render(&fixture, &icon)?;
    tracing::debug!(fixture = %path, svg = %artifact.svg, "rendered");

    let again = render(&fixture, &icon)?;
    if again != artifact {
        return Err(format!("{path}: second render differs").into());
    }
    check_invariants(&fixture, &icon, &artifact).map_err(|e| format!("{path}: {e}"))?;
    check_expectations(&fixture.expect, &icon, &artifact).map_err(|e| format!("{path}: {e}"))?;
    Ok(())
}

datatest_stable::harness! {
    { test = render_fixture, root = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures"), pattern = r"\.json$" },
}
