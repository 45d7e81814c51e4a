use serde::{Deserialize, Serialize};
use std::fmt;

/// Horizontal text alignment inside a layer's box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    #[default]
    Center,
    Right,
}

impl TextAlign {
    /// CSS `justify-content` keyword used by renderers.
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

/// Font weight, either a keyword ("bold") or a numeric weight (700).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FontWeight {
    Numeric(u16),
    Named(String),
}

impl FontWeight {
    pub fn bold() -> Self {
        FontWeight::Named("bold".to_string())
    }

    pub fn normal() -> Self {
        FontWeight::Named("normal".to_string())
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontWeight::Numeric(w) => write!(f, "{}", w),
            FontWeight::Named(name) => write!(f, "{}", name),
        }
    }
}

/// Sparse visual attributes of a layer.
///
/// Every field is optional. Absent keys are resolved to fixed defaults by
/// the renderer and are never written back into the model.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayerStyle {
    /// Fill color for shapes (hex).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    /// Text color (hex).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<FontWeight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    /// Corner radius for shapes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow: Option<bool>,
}

impl LayerStyle {
    /// Render-time fallbacks for absent keys.
    pub const DEFAULT_FILL: &'static str = "#cccccc";
    pub const DEFAULT_TEXT_COLOR: &'static str = "#000000";
    pub const DEFAULT_FONT_SIZE: f64 = 16.0;
    pub const DEFAULT_FONT_FAMILY: &'static str = "Inter, sans-serif";

    pub fn is_empty(&self) -> bool {
        *self == LayerStyle::default()
    }

    /// Returns a copy where every key set in `other` overrides the key in `self`.
    pub fn merged_with(&self, other: &LayerStyle) -> LayerStyle {
        LayerStyle {
            background_color: other
                .background_color
                .clone()
                .or_else(|| self.background_color.clone()),
            color: other.color.clone().or_else(|| self.color.clone()),
            font_size: other.font_size.or(self.font_size),
            font_weight: other
                .font_weight
                .clone()
                .or_else(|| self.font_weight.clone()),
            font_family: other
                .font_family
                .clone()
                .or_else(|| self.font_family.clone()),
            border_radius: other.border_radius.or(self.border_radius),
            text_align: other.text_align.or(self.text_align),
            shadow: other.shadow.or(self.shadow),
        }
    }

    pub fn fill_or_default(&self) -> &str {
        self.background_color.as_deref().unwrap_or(Self::DEFAULT_FILL)
    }

    pub fn text_color_or_default(&self) -> &str {
        self.color.as_deref().unwrap_or(Self::DEFAULT_TEXT_COLOR)
    }

    pub fn font_size_or_default(&self) -> f64 {
        self.font_size.unwrap_or(Self::DEFAULT_FONT_SIZE)
    }
}
