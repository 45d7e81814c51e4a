//! Boundary with the layout generator.
//!
//! The generator is an external collaborator (an AI service in production)
//! that returns a layout description: a list of loosely typed layer records,
//! a background color and a palette. Nothing it returns is trusted. The
//! response is parsed and normalized here before it can replace the
//! document's layers, and a bad response never partially applies.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use shotcraft_core::constants::{DEVICE_FRAME_CONTENT, MIN_LAYER_SIZE};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::model::{CanvasConfig, Layer, LayerId, LayerStyle, LayerType};
use crate::templates;

/// Visual direction requested from the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StylePreset {
    Minimal,
    Bold,
    Colorful,
    #[default]
    Dark,
}

impl StylePreset {
    pub const ALL: [StylePreset; 4] = [
        StylePreset::Minimal,
        StylePreset::Bold,
        StylePreset::Colorful,
        StylePreset::Dark,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            StylePreset::Minimal => "minimal",
            StylePreset::Bold => "bold",
            StylePreset::Colorful => "colorful",
            StylePreset::Dark => "dark",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StylePreset::Minimal => "Minimalist Clean",
            StylePreset::Bold => "Bold & High Contrast",
            StylePreset::Colorful => "Playful & Colorful",
            StylePreset::Dark => "Dark Mode Tech",
        }
    }

    pub fn background_color(&self) -> &'static str {
        match self {
            StylePreset::Minimal => "#ffffff",
            StylePreset::Bold => "#000000",
            StylePreset::Colorful => "#ff5733",
            StylePreset::Dark => "#0f172a",
        }
    }

    pub fn text_color(&self) -> &'static str {
        match self {
            StylePreset::Minimal => "#0f172a",
            StylePreset::Bold | StylePreset::Colorful | StylePreset::Dark => "#ffffff",
        }
    }

    pub fn accent_colors(&self) -> &'static [&'static str] {
        match self {
            StylePreset::Minimal => &["#e2e8f0"],
            StylePreset::Bold => &["#ef4444", "#f59e0b", "#10b981"],
            StylePreset::Colorful => &["#8b5cf6", "#f59e0b", "#10b981"],
            StylePreset::Dark => &["#3b82f6", "#8b5cf6"],
        }
    }
}

impl fmt::Display for StylePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for StylePreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StylePreset::ALL
            .into_iter()
            .find(|p| p.id().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown style preset '{}'", s))
    }
}

/// What the editor asks the generator for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub app_name: String,
    pub description: String,
    pub style_preset: StylePreset,
    pub canvas: CanvasConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern_id: Option<String>,
}

impl GenerationRequest {
    pub fn new(
        app_name: impl Into<String>,
        description: impl Into<String>,
        style_preset: StylePreset,
        canvas: CanvasConfig,
    ) -> Self {
        Self {
            app_name: app_name.into(),
            description: description.into(),
            style_preset,
            canvas,
            pattern_id: None,
        }
    }

    pub fn with_pattern(mut self, pattern_id: impl Into<String>) -> Self {
        self.pattern_id = Some(pattern_id.into());
        self
    }

    /// Without a pattern the generator lays out the whole screen itself.
    pub fn is_full_layout(&self) -> bool {
        self.pattern_id.is_none()
    }
}

/// One layer as described by the generator. Every field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayerRecord {
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub layer_type: Option<String>,
    pub name: Option<String>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub rotation: Option<f64>,
    pub opacity: Option<f64>,
    pub content: Option<String>,
    pub style: Option<serde_json::Value>,
}

/// Raw generator output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResponse {
    pub layers: Vec<LayerRecord>,
    #[serde(default)]
    pub background_color: Option<String>,
    #[serde(default)]
    pub palette: Vec<String>,
}

/// Normalized generator output, ready to replace the document's layers.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedLayout {
    pub layers: Vec<Layer>,
    pub background_color: String,
    pub palette: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationErrorCategory {
    Auth,
    Network,
    Parse,
    Content,
}

/// Failure of a generation request, reported to the UI as one message.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenerationError {
    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("No response from the generator")]
    EmptyResponse,

    #[error("Failed to parse design layout: {0}")]
    Parse(String),

    #[error("Generated layout contained no usable layers")]
    EmptyLayout,

    #[error("Generation rejected: {0}")]
    Rejected(String),
}

impl GenerationError {
    pub fn category(&self) -> GenerationErrorCategory {
        match self {
            GenerationError::Auth(_) => GenerationErrorCategory::Auth,
            GenerationError::Network(_) => GenerationErrorCategory::Network,
            GenerationError::EmptyResponse | GenerationError::Parse(_) => {
                GenerationErrorCategory::Parse
            }
            GenerationError::EmptyLayout | GenerationError::Rejected(_) => {
                GenerationErrorCategory::Content
            }
        }
    }

    /// The single message shown to the user for this failure.
    pub fn user_message(&self) -> &'static str {
        match self.category() {
            GenerationErrorCategory::Auth => {
                "Failed to generate layout. Please check your API key and try again."
            }
            GenerationErrorCategory::Network => {
                "Failed to reach the layout service. Check your connection and try again."
            }
            GenerationErrorCategory::Parse => {
                "The layout service returned an unreadable design. Please try again."
            }
            GenerationErrorCategory::Content => {
                "The generated layout could not be used. Try a different description."
            }
        }
    }
}

/// Something that can produce a layout for a request.
#[async_trait]
pub trait LayoutGenerator: Send + Sync {
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResponse, GenerationError>;
}

/// Parses the generator's JSON text.
pub fn parse_response(text: &str) -> Result<GenerationResponse, GenerationError> {
    if text.trim().is_empty() {
        return Err(GenerationError::EmptyResponse);
    }
    serde_json::from_str(text).map_err(|e| GenerationError::Parse(e.to_string()))
}

/// Turns a raw response into layers the document can accept.
///
/// - entries without a known type or with missing/non-finite geometry are dropped
/// - ids are kept when present and unique, otherwise freshly generated
/// - every layer becomes visible and unlocked, except that in full-layout
///   mode a background SHAPE at index 0 is locked
/// - sizes are floored at the minimum and capped at the canvas, positions are
///   clamped so the layer starts inside the canvas, opacity is clamped to [0, 1]
/// - style keys missing from the record fall back to the type defaults
/// - when the request names a known pattern, layers are re-positioned by role
pub fn normalize_response(
    response: GenerationResponse,
    request: &GenerationRequest,
) -> Result<GeneratedLayout, GenerationError> {
    let canvas = &request.canvas;
    let mut seen = HashSet::new();
    let mut layers = Vec::with_capacity(response.layers.len());

    for (index, record) in response.layers.into_iter().enumerate() {
        match record_to_layer(record, canvas) {
            Ok(mut layer) => {
                if !seen.insert(layer.id.clone()) {
                    layer.id = LayerId::generate();
                    seen.insert(layer.id.clone());
                }
                layers.push(layer);
            }
            Err(reason) => {
                tracing::warn!(index, reason, "dropping generated layer");
            }
        }
    }

    if layers.is_empty() {
        return Err(GenerationError::EmptyLayout);
    }

    if request.is_full_layout() {
        if let Some(first) = layers.first_mut() {
            if first.layer_type == LayerType::Shape {
                first.locked = true;
            }
        }
    } else if let Some(pattern) = request
        .pattern_id
        .as_deref()
        .and_then(templates::find_pattern)
    {
        layers = templates::apply_pattern(&pattern, canvas, layers);
    }

    let background_color = response
        .background_color
        .filter(|c| !c.trim().is_empty())
        .unwrap_or_else(|| canvas.background_color.clone());

    Ok(GeneratedLayout {
        layers,
        background_color,
        palette: response.palette,
    })
}

fn record_to_layer(record: LayerRecord, canvas: &CanvasConfig) -> Result<Layer, &'static str> {
    let layer_type = match record.layer_type.as_deref().map(str::to_ascii_uppercase) {
        Some(t) if t == "TEXT" => LayerType::Text,
        Some(t) if t == "IMAGE" => LayerType::Image,
        Some(t) if t == "SHAPE" => LayerType::Shape,
        Some(t) if t == "DEVICE" => LayerType::Device,
        Some(_) => return Err("unknown layer type"),
        None => return Err("missing layer type"),
    };

    let (Some(x), Some(y), Some(width), Some(height)) =
        (record.x, record.y, record.width, record.height)
    else {
        return Err("missing geometry");
    };
    if ![x, y, width, height].iter().all(|v| v.is_finite()) {
        return Err("non-finite geometry");
    }

    let width = width.clamp(MIN_LAYER_SIZE, canvas.width.max(MIN_LAYER_SIZE));
    let height = height.clamp(MIN_LAYER_SIZE, canvas.height.max(MIN_LAYER_SIZE));
    let x = x.clamp(0.0, (canvas.width - width).max(0.0));
    let y = y.clamp(0.0, (canvas.height - height).max(0.0));

    let style = match record.style {
        Some(value) => match serde_json::from_value::<LayerStyle>(value) {
            Ok(style) => style,
            Err(e) => {
                tracing::warn!(error = %e, "ignoring malformed layer style");
                LayerStyle::default()
            }
        },
        None => LayerStyle::default(),
    };

    let content = match (layer_type, record.content) {
        (LayerType::Device, _) => DEVICE_FRAME_CONTENT.to_string(),
        (_, Some(content)) => content,
        (other, None) => other.default_content().to_string(),
    };

    let mut layer = Layer::new(layer_type, x, y, width, height);
    if let Some(id) = record.id.filter(|id| !id.trim().is_empty()) {
        layer.id = LayerId::from(id);
    }
    if let Some(name) = record.name.filter(|n| !n.trim().is_empty()) {
        layer.name = name;
    }
    layer.rotation = record.rotation.filter(|r| r.is_finite()).unwrap_or(0.0);
    layer.opacity = record
        .opacity
        .filter(|o| o.is_finite())
        .unwrap_or(1.0)
        .clamp(0.0, 1.0);
    layer.content = content;
    layer.style = layer_type.default_style().merged_with(&style);
    layer.locked = false;
    layer.visible = true;
    Ok(layer)
}

/// Generator that needs no network: lays out a pattern template and colors
/// it with the request's style preset.
#[derive(Debug, Clone, Default)]
pub struct TemplateGenerator {
    pattern_id: Option<String>,
}

impl TemplateGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `pattern_id` when the request does not name a pattern.
    pub fn with_fallback_pattern(pattern_id: impl Into<String>) -> Self {
        Self {
            pattern_id: Some(pattern_id.into()),
        }
    }
}

#[async_trait]
impl LayoutGenerator for TemplateGenerator {
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResponse, GenerationError> {
        let pattern_id = request
            .pattern_id
            .as_deref()
            .or(self.pattern_id.as_deref())
            .unwrap_or(templates::DEFAULT_PATTERN_ID);
        let pattern = templates::find_pattern(pattern_id)
            .ok_or_else(|| GenerationError::Rejected(format!("unknown pattern '{}'", pattern_id)))?;

        let preset = request.style_preset;
        let layers = templates::default_layers(
            &pattern,
            request.canvas.width,
            request.canvas.height,
            &request.app_name,
        )
        .into_iter()
        .map(|layer| styled_record(layer, preset, &request.description))
        .collect();

        let mut palette = vec![
            preset.background_color().to_string(),
            preset.text_color().to_string(),
        ];
        palette.extend(preset.accent_colors().iter().map(|c| c.to_string()));

        Ok(GenerationResponse {
            layers,
            background_color: Some(preset.background_color().to_string()),
            palette,
        })
    }
}

fn styled_record(layer: Layer, preset: StylePreset, description: &str) -> LayerRecord {
    let mut style = layer.style.clone();
    let mut content = layer.content.clone();
    match layer.layer_type {
        LayerType::Shape => style.background_color = Some(preset.background_color().to_string()),
        LayerType::Text if layer.name == "Subheadline" => {
            style.color = Some(preset.text_color().to_string());
            if !description.trim().is_empty() {
                content = description.to_string();
            }
        }
        LayerType::Text => style.color = Some(preset.text_color().to_string()),
        LayerType::Image | LayerType::Device => {}
    }

    LayerRecord {
        id: Some(layer.id.to_string()),
        layer_type: Some(layer.layer_type.to_string()),
        name: Some(layer.name),
        x: Some(layer.x),
        y: Some(layer.y),
        width: Some(layer.width),
        height: Some(layer.height),
        rotation: Some(layer.rotation),
        opacity: Some(layer.opacity),
        content: Some(content),
        style: serde_json::to_value(style).ok(),
    }
}
