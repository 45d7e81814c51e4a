use serde::{Deserialize, Serialize};
use shotcraft_core::constants::{DEVICE_FRAME_CONTENT, MIN_LAYER_SIZE};
use std::fmt;

use super::style::{FontWeight, LayerStyle, TextAlign};
use super::Point;

/// Opaque identifier of a layer, stable for the layer's lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayerId(String);

impl LayerId {
    /// Generates a fresh random identifier.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for LayerId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for LayerId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Kind of visual element. Fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LayerType {
    Text,
    Image,
    Shape,
    Device,
}

impl LayerType {
    /// Default human label for a new layer of this kind.
    pub fn default_name(&self) -> &'static str {
        match self {
            LayerType::Text => "Text",
            LayerType::Image => "Image",
            LayerType::Shape => "Shape",
            LayerType::Device => "Device",
        }
    }

    /// Type-specific construction defaults for the style record.
    pub fn default_style(&self) -> LayerStyle {
        match self {
            LayerType::Text => LayerStyle {
                color: Some("#ffffff".to_string()),
                font_size: Some(16.0),
                font_weight: Some(FontWeight::normal()),
                text_align: Some(TextAlign::Center),
                ..Default::default()
            },
            LayerType::Shape => LayerStyle {
                background_color: Some("#3b82f6".to_string()),
                border_radius: Some(0.0),
                ..Default::default()
            },
            LayerType::Image | LayerType::Device => LayerStyle::default(),
        }
    }

    /// Type-specific default payload.
    pub fn default_content(&self) -> &'static str {
        match self {
            LayerType::Text => "New Text",
            LayerType::Device => DEVICE_FRAME_CONTENT,
            LayerType::Image | LayerType::Shape => "",
        }
    }
}

impl fmt::Display for LayerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayerType::Text => write!(f, "TEXT"),
            LayerType::Image => write!(f, "IMAGE"),
            LayerType::Shape => write!(f, "SHAPE"),
            LayerType::Device => write!(f, "DEVICE"),
        }
    }
}

/// One placed visual element.
///
/// Layers are treated as immutable records: every edit produces a new
/// `Layer` through [`Layer::with_update`], so history snapshots can share
/// them without aliasing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layer {
    pub id: LayerId,
    #[serde(rename = "type")]
    pub layer_type: LayerType,
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Degrees, not normalized.
    pub rotation: f64,
    pub opacity: f64,
    pub content: String,
    #[serde(default)]
    pub style: LayerStyle,
    pub locked: bool,
    pub visible: bool,
}

impl Layer {
    /// Creates a layer of the given kind with its type defaults and a fresh id.
    pub fn new(layer_type: LayerType, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            id: LayerId::generate(),
            layer_type,
            name: layer_type.default_name().to_string(),
            x,
            y,
            width: width.max(MIN_LAYER_SIZE),
            height: height.max(MIN_LAYER_SIZE),
            rotation: 0.0,
            opacity: 1.0,
            content: layer_type.default_content().to_string(),
            style: layer_type.default_style(),
            locked: false,
            visible: true,
        }
    }

    pub fn text(content: impl Into<String>, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            content: content.into(),
            ..Self::new(LayerType::Text, x, y, width, height)
        }
    }

    pub fn shape(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(LayerType::Shape, x, y, width, height)
    }

    pub fn device(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(LayerType::Device, x, y, width, height)
    }

    pub fn image(source: impl Into<String>, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            content: source.into(),
            ..Self::new(LayerType::Image, x, y, width, height)
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_style(mut self, style: LayerStyle) -> Self {
        self.style = style;
        self
    }

    /// Produces a new record with the fields present in `update` replaced.
    ///
    /// Width and height are floored at [`MIN_LAYER_SIZE`] and opacity is
    /// clamped to `[0, 1]`. The id and type are never changed.
    pub fn with_update(&self, update: &LayerUpdate) -> Layer {
        let mut next = self.clone();
        if let Some(x) = update.x {
            next.x = x;
        }
        if let Some(y) = update.y {
            next.y = y;
        }
        if let Some(width) = update.width {
            next.width = width.max(MIN_LAYER_SIZE);
        }
        if let Some(height) = update.height {
            next.height = height.max(MIN_LAYER_SIZE);
        }
        if let Some(rotation) = update.rotation {
            next.rotation = rotation;
        }
        if let Some(opacity) = update.opacity {
            next.opacity = opacity.clamp(0.0, 1.0);
        }
        if let Some(name) = &update.name {
            next.name = name.clone();
        }
        if let Some(content) = &update.content {
            next.content = content.clone();
        }
        if let Some(style) = &update.style {
            next.style = style.clone();
        }
        if let Some(locked) = update.locked {
            next.locked = locked;
        }
        if let Some(visible) = update.visible {
            next.visible = visible;
        }
        next
    }

    /// Axis-aligned bounds as `(min_x, min_y, max_x, max_y)`, ignoring rotation.
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        (self.x, self.y, self.x + self.width, self.y + self.height)
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Hit test against the unrotated bounding box.
    pub fn contains_point(&self, point: &Point, tolerance: f64) -> bool {
        let (x1, y1, x2, y2) = self.bounds();
        point.x >= x1 - tolerance
            && point.x <= x2 + tolerance
            && point.y >= y1 - tolerance
            && point.y <= y2 + tolerance
    }
}

/// Sparse set of field changes applied to a [`Layer`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayerUpdate {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub rotation: Option<f64>,
    pub opacity: Option<f64>,
    pub name: Option<String>,
    pub content: Option<String>,
    pub style: Option<LayerStyle>,
    pub locked: Option<bool>,
    pub visible: Option<bool>,
}

impl LayerUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Default::default()
        }
    }

    pub fn size(width: f64, height: f64) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == LayerUpdate::default()
    }

    /// True when any positional or dimensional field is present.
    pub fn touches_geometry(&self) -> bool {
        self.x.is_some()
            || self.y.is_some()
            || self.width.is_some()
            || self.height.is_some()
            || self.rotation.is_some()
    }

    /// Copy of this update with all geometry fields removed.
    pub fn without_geometry(&self) -> LayerUpdate {
        LayerUpdate {
            x: None,
            y: None,
            width: None,
            height: None,
            rotation: None,
            ..self.clone()
        }
    }
}
