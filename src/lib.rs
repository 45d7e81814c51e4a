//! # Shotcraft
//!
//! Editor engine for app-store screenshot layouts.
//!
//! ## Architecture
//!
//! Shotcraft is organized as a workspace with multiple crates:
//!
//! 1. **shotcraft-core** - Error types, result alias and design constants
//! 2. **shotcraft-designer** - Layer model, drag/resize geometry, selection,
//!    undo/redo history, gesture controller, patterns, generator boundary, SVG export
//! 3. **shotcraft-settings** - Editor configuration (JSON/TOML)
//! 4. **shotcraft** - Logging bootstrap and the command-line front end

use anyhow::Context;
use std::path::{Path, PathBuf};

pub use shotcraft_core::{Error, Result};
pub use shotcraft_designer as designer;
pub use shotcraft_designer::{
    Canvas, CanvasConfig, DesignerState, EditorOptions, ExportSink, ExportSnapshot, Layer,
    LayerId, LayerType, StylePreset, SvgExporter,
};
pub use shotcraft_settings::Config;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output on stderr, so exported markup can go to stdout
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(tracing::Level::INFO.to_string()));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(())
}

/// Loads the config at `path`, or from the platform location when `None`.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => Config::default_path()?,
    };
    Config::load_or_default(&path).with_context(|| format!("loading {}", path.display()))
}

/// Where an export should be written.
#[derive(Debug, Clone, PartialEq)]
pub enum OutputTarget {
    Stdout,
    /// A directory: the file gets the generated `app-store-screenshot-*` name.
    Directory(PathBuf),
    File(PathBuf),
}

impl OutputTarget {
    pub fn from_arg(arg: Option<PathBuf>) -> Self {
        match arg {
            None => OutputTarget::Stdout,
            Some(path) if path.is_dir() => OutputTarget::Directory(path),
            Some(path) => OutputTarget::File(path),
        }
    }
}

/// Exports the document's visible layers as SVG to `target`.
///
/// Returns the written path, or `None` for stdout.
pub fn export_svg(state: &DesignerState, target: &OutputTarget) -> anyhow::Result<Option<PathBuf>> {
    let exporter = SvgExporter::new();
    let snapshot = ExportSnapshot::from_state(state);
    match target {
        OutputTarget::Stdout => {
            print!("{}", exporter.render(&snapshot)?);
            Ok(None)
        }
        OutputTarget::Directory(dir) => {
            let path = shotcraft_designer::export::export_path_in(dir);
            exporter.write_to(&snapshot, &path)?;
            Ok(Some(path))
        }
        OutputTarget::File(path) => {
            exporter.write_to(&snapshot, path)?;
            Ok(Some(path.clone()))
        }
    }
}

/// Loads a saved generator response and applies it to `state`.
///
/// A rejected response leaves `state` untouched and comes back as
/// [`Error::Other`] carrying the user-facing message.
pub fn apply_response_file(
    state: &mut DesignerState,
    path: &Path,
    request: &shotcraft_designer::GenerationRequest,
) -> Result<()> {
    let text = std::fs::read_to_string(path)?;
    let ticket = state.begin_generation();
    let outcome = shotcraft_designer::parse_response(&text);
    state
        .complete_generation(ticket, request, outcome)
        .map_err(|e| Error::other(format!("{} ({})", e.user_message(), e)))?;
    Ok(())
}
