//! One forward pass: ensure the icon directory, write every PNG, then the favicon.

use log::{info, warn};
use render::{RenderRequest, RenderedIcon};
use std::path::PathBuf;
use types::{IconConfig, IconSpec};

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error(transparent)]
    Output(#[from] io::OutputError),
}

/// The favicon could not be written. Never fatal.
#[derive(Debug, thiserror::Error)]
#[error("{source}")]
pub struct FaviconError {
    pub path: PathBuf,
    #[source]
    pub source: io::OutputError,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFile {
    pub spec: IconSpec,
    pub path: PathBuf,
}

#[derive(Debug)]
pub struct GenerationReport {
    pub icons: Vec<OutputFile>,
    pub favicon: Result<PathBuf, FaviconError>,
}

pub fn render_icon(config: &IconConfig, spec: IconSpec) -> RenderedIcon {
    render::render(&RenderRequest::for_icon(
        spec,
        config.glyph,
        config.colors,
        &config.font_sources,
    ))
}

pub fn render_favicon(config: &IconConfig) -> RenderedIcon {
    let side = config.favicon.size;
    render::render(&RenderRequest {
        side,
        font_px: config.favicon.font_px,
        border_width: IconSpec(side).border_width(),
        glyph: config.glyph,
        colors: config.colors,
        font_sources: &config.font_sources,
    })
}

/// Write every PNG in `config.sizes` order, then the favicon.
///
/// Directory or PNG failures abort with `Err`. A favicon failure is reported
/// in [`GenerationReport::favicon`] and logged as a warning.
pub fn generate(config: &IconConfig) -> Result<GenerationReport, GenerateError> {
    io::ensure_dir(&config.output_dir)?;

    let mut icons = Vec::with_capacity(config.sizes.len());
    for spec in config.icon_specs() {
        let icon = render_icon(config, spec);
        let file_name = spec.file_name();
        let path = io::write_png(&config.output_dir, &file_name, &icon.image)?;
        info!("Created {}", file_name);
        icons.push(OutputFile { spec, path });
    }
    info!("All PWA icons created successfully!");

    let favicon = write_favicon(config);
    match &favicon {
        Ok(path) => info!(
            "Created {}",
            path.file_name().map(|n| n.to_string_lossy()).unwrap_or_default()
        ),
        Err(e) => warn!("Could not create favicon.ico: {}", e),
    }
    info!("Icon generation complete!");

    Ok(GenerationReport { icons, favicon })
}

fn write_favicon(config: &IconConfig) -> Result<PathBuf, FaviconError> {
    let icon = render_favicon(config);
    let path = config.favicon_path.clone();
    match io::write_ico(&path, &icon.image) {
        Ok(()) => Ok(path),
        Err(source) => Err(FaviconError { path, source }),
    }
}
