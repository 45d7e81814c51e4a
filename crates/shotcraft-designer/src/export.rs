//! Export of the document as standalone SVG.
//!
//! Export reads a snapshot of the live document: the canvas configuration
//! and the visible layers in z-order. There is no separate export mode; the
//! snapshot is taken on demand and never written back.

use chrono::{DateTime, Utc};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

use crate::canvas::Canvas;
use crate::designer_state::DesignerState;
use crate::model::{CanvasConfig, Layer, LayerType, TextAlign};

const DEVICE_BEZEL: f64 = 10.0;
const DEVICE_BODY_RADIUS: f64 = 30.0;
const DEVICE_SCREEN_RADIUS: f64 = 20.0;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Render error: {0}")]
    Render(String),
}

impl From<std::fmt::Error> for ExportError {
    fn from(e: std::fmt::Error) -> Self {
        ExportError::Render(e.to_string())
    }
}

/// Read-only view of what gets exported.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportSnapshot {
    pub config: CanvasConfig,
    /// Visible layers, bottom first.
    pub layers: Vec<Arc<Layer>>,
    pub user_screenshot: Option<String>,
}

impl ExportSnapshot {
    pub fn from_canvas(canvas: &Canvas) -> Self {
        Self {
            config: canvas.config().clone(),
            layers: canvas.visible_layers().cloned().collect(),
            user_screenshot: None,
        }
    }

    pub fn from_state(state: &DesignerState) -> Self {
        Self {
            user_screenshot: state.user_screenshot.clone(),
            ..Self::from_canvas(&state.canvas)
        }
    }
}

/// Destination format for an export.
pub trait ExportSink {
    fn file_extension(&self) -> &'static str;

    fn render(&self, snapshot: &ExportSnapshot) -> Result<String, ExportError>;

    /// Renders and writes to `path`.
    fn write_to(&self, snapshot: &ExportSnapshot, path: &Path) -> Result<(), ExportError> {
        let output = self.render(snapshot)?;
        std::fs::write(path, output)?;
        tracing::info!(path = %path.display(), layers = snapshot.layers.len(), "exported");
        Ok(())
    }
}

/// `app-store-screenshot-<millis>.svg` for the given instant.
pub fn export_file_name_at(at: DateTime<Utc>) -> String {
    format!("app-store-screenshot-{}.svg", at.timestamp_millis())
}

/// Default file name for an export made now.
pub fn export_file_name() -> String {
    export_file_name_at(Utc::now())
}

/// `dir` joined with [`export_file_name`].
pub fn export_path_in(dir: &Path) -> PathBuf {
    dir.join(export_file_name())
}

/// Renders snapshots as SVG 1.1 markup.
#[derive(Debug, Clone, Copy, Default)]
pub struct SvgExporter;

impl SvgExporter {
    pub fn new() -> Self {
        Self
    }

    fn write_layer(
        &self,
        out: &mut String,
        layer: &Layer,
        screenshot: Option<&str>,
    ) -> Result<(), ExportError> {
        match layer.layer_type {
            LayerType::Text => write_text(out, layer),
            LayerType::Shape => write_shape(out, layer),
            LayerType::Image => write_image(out, layer),
            LayerType::Device => write_device(out, layer, screenshot),
        }
    }
}

impl ExportSink for SvgExporter {
    fn file_extension(&self) -> &'static str {
        "svg"
    }

    fn render(&self, snapshot: &ExportSnapshot) -> Result<String, ExportError> {
        let config = &snapshot.config;
        let mut out = String::new();
        writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = num(config.width),
            h = num(config.height)
        )?;
        writeln!(
            out,
            r#"  <rect x="0" y="0" width="{}" height="{}" fill="{}"/>"#,
            num(config.width),
            num(config.height),
            escape(&config.background_color)
        )?;
        for layer in snapshot.layers.iter().filter(|l| l.visible) {
            self.write_layer(&mut out, layer, snapshot.user_screenshot.as_deref())?;
        }
        out.push_str("</svg>\n");
        Ok(out)
    }
}

fn num(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{:.2}", v)
    }
}

fn escape(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// Rotation about the layer center plus opacity, as attributes.
fn transform_attrs(layer: &Layer) -> String {
    let mut attrs = String::new();
    if layer.rotation != 0.0 {
        let c = layer.center();
        attrs.push_str(&format!(
            r#" transform="rotate({} {} {})""#,
            num(layer.rotation),
            num(c.x),
            num(c.y)
        ));
    }
    if layer.opacity < 1.0 {
        attrs.push_str(&format!(r#" opacity="{}""#, num(layer.opacity)));
    }
    attrs
}

fn write_text(out: &mut String, layer: &Layer) -> Result<(), ExportError> {
    let style = &layer.style;
    let (anchor, x) = match style.text_align.unwrap_or_default() {
        TextAlign::Left => ("start", layer.x),
        TextAlign::Center => ("middle", layer.x + layer.width / 2.0),
        TextAlign::Right => ("end", layer.x + layer.width),
    };
    let weight = style
        .font_weight
        .as_ref()
        .map(|w| w.to_string())
        .unwrap_or_else(|| "normal".to_string());
    let family = style
        .font_family
        .as_deref()
        .unwrap_or(crate::model::LayerStyle::DEFAULT_FONT_FAMILY);

    writeln!(
        out,
        r#"  <text x="{}" y="{}" text-anchor="{}" dominant-baseline="middle" fill="{}" font-size="{}" font-weight="{}" font-family="{}"{}>{}</text>"#,
        num(x),
        num(layer.y + layer.height / 2.0),
        anchor,
        escape(style.text_color_or_default()),
        num(style.font_size_or_default()),
        escape(&weight),
        escape(family),
        transform_attrs(layer),
        escape(&layer.content)
    )?;
    Ok(())
}

fn write_shape(out: &mut String, layer: &Layer) -> Result<(), ExportError> {
    writeln!(
        out,
        r#"  <rect x="{}" y="{}" width="{}" height="{}" rx="{}" fill="{}"{}/>"#,
        num(layer.x),
        num(layer.y),
        num(layer.width),
        num(layer.height),
        num(layer.style.border_radius.unwrap_or(0.0)),
        escape(layer.style.fill_or_default()),
        transform_attrs(layer)
    )?;
    Ok(())
}

fn is_embeddable(source: &str) -> bool {
    source.starts_with("http") || source.starts_with("data:")
}

fn write_image(out: &mut String, layer: &Layer) -> Result<(), ExportError> {
    if is_embeddable(&layer.content) {
        writeln!(
            out,
            r#"  <image href="{}" x="{}" y="{}" width="{}" height="{}" preserveAspectRatio="xMidYMid slice"{}/>"#,
            escape(&layer.content),
            num(layer.x),
            num(layer.y),
            num(layer.width),
            num(layer.height),
            transform_attrs(layer)
        )?;
        return Ok(());
    }

    writeln!(out, "  <g{}>", transform_attrs(layer))?;
    writeln!(
        out,
        r##"    <rect x="{}" y="{}" width="{}" height="{}" fill="#374151" stroke="#4b5563" stroke-width="2" stroke-dasharray="8,4"/>"##,
        num(layer.x),
        num(layer.y),
        num(layer.width),
        num(layer.height)
    )?;
    let c = layer.center();
    writeln!(
        out,
        r##"    <text x="{}" y="{}" text-anchor="middle" dominant-baseline="middle" fill="#9ca3af" font-size="14">Image Placeholder</text>"##,
        num(c.x),
        num(c.y)
    )?;
    writeln!(out, "  </g>")?;
    Ok(())
}

fn write_device(out: &mut String, layer: &Layer, screenshot: Option<&str>) -> Result<(), ExportError> {
    let bezel = DEVICE_BEZEL;
    let screen_w = (layer.width - bezel * 2.0).max(0.0);
    let screen_h = (layer.height - bezel * 2.0).max(0.0);
    let mid = layer.width / 2.0;

    let mut transform = format!("translate({} {})", num(layer.x), num(layer.y));
    if layer.rotation != 0.0 {
        transform.push_str(&format!(
            " rotate({} {} {})",
            num(layer.rotation),
            num(mid),
            num(layer.height / 2.0)
        ));
    }
    let opacity = if layer.opacity < 1.0 {
        format!(r#" opacity="{}""#, num(layer.opacity))
    } else {
        String::new()
    };

    writeln!(out, r#"  <g transform="{}"{}>"#, transform, opacity)?;
    writeln!(
        out,
        r##"    <rect x="0" y="0" width="{}" height="{}" rx="{}" fill="#111" stroke="#333" stroke-width="4"/>"##,
        num(layer.width),
        num(layer.height),
        num(DEVICE_BODY_RADIUS)
    )?;
    writeln!(
        out,
        r##"    <rect x="{b}" y="{b}" width="{}" height="{}" rx="{}" fill="#1f2937"/>"##,
        num(screen_w),
        num(screen_h),
        num(DEVICE_SCREEN_RADIUS),
        b = num(bezel)
    )?;

    match screenshot {
        Some(source) => {
            writeln!(
                out,
                r#"    <image href="{}" x="{b}" y="{b}" width="{}" height="{}" preserveAspectRatio="xMidYMid slice"/>"#,
                escape(source),
                num(screen_w),
                num(screen_h),
                b = num(bezel)
            )?;
        }
        None => {
            let placeholders = [
                (40.0, screen_w - 20.0, 20.0, 4.0, "#374151"),
                (70.0, screen_w - 60.0, 12.0, 3.0, "#4b5563"),
                (100.0, screen_w - 20.0, 80.0, 8.0, "#374151"),
                (200.0, screen_w - 20.0, 60.0, 8.0, "#374151"),
            ];
            for (dy, w, h, rx, fill) in placeholders {
                writeln!(
                    out,
                    r#"    <rect x="{}" y="{}" width="{}" height="{}" rx="{}" fill="{}"/>"#,
                    num(bezel + 10.0),
                    num(bezel + dy),
                    num(w.max(0.0)),
                    num(h),
                    num(rx),
                    fill
                )?;
            }
            writeln!(
                out,
                r##"    <text x="{}" y="{}" text-anchor="middle" fill="#6b7280" font-size="12">Upload screenshot</text>"##,
                num(bezel + screen_w / 2.0),
                num(bezel + screen_h / 2.0 + 40.0)
            )?;
        }
    }

    writeln!(
        out,
        r##"    <path d="M {} {b} Q {} {n} {} {n} Q {} {n} {} {b}" fill="#111"/>"##,
        num(mid - 40.0),
        num(mid - 30.0),
        num(mid),
        num(mid + 30.0),
        num(mid + 40.0),
        b = num(bezel),
        n = num(bezel + 20.0)
    )?;
    writeln!(out, "  </g>")?;
    Ok(())
}
