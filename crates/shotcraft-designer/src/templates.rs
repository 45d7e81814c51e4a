//! Layout pattern catalog.
//!
//! A pattern fixes the structure of a screenshot (where the device sits,
//! where the headline goes, whether there are badges or a logo) and leaves
//! colors and copy to the generator. Positions are computed from the canvas
//! size so the same pattern works for any export resolution.

use serde::{Deserialize, Serialize};

use crate::model::{CanvasConfig, FontWeight, Layer, LayerStyle, LayerType, TextAlign};

/// Pattern used when nothing else is requested.
pub const DEFAULT_PATTERN_ID: &str = "hero-centered";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DevicePosition {
    Center,
    BottomRight,
    BottomLeft,
    TiltedCenter,
    HandHeld,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeviceSize {
    Small,
    Medium,
    Large,
    Full,
}

impl DeviceSize {
    /// Frame dimensions in canvas units.
    pub fn dimensions(&self) -> (f64, f64) {
        match self {
            DeviceSize::Small => (160.0, 340.0),
            DeviceSize::Medium => (200.0, 420.0),
            DeviceSize::Large => (240.0, 500.0),
            DeviceSize::Full => (280.0, 580.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeadlinePosition {
    TopCenter,
    TopLeft,
    Center,
    BottomLeft,
    BottomCenter,
}

impl HeadlinePosition {
    pub fn is_left_aligned(&self) -> bool {
        matches!(self, HeadlinePosition::TopLeft | HeadlinePosition::BottomLeft)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BadgePosition {
    BelowHeadline,
    BottomLeft,
    AboveDevice,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LogoPosition {
    TopLeft,
    TopCenter,
    BottomCenter,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BackgroundType {
    Solid,
    Gradient,
    Photo,
    Pattern,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternStructure {
    pub has_device: bool,
    pub device_position: DevicePosition,
    pub device_size: DeviceSize,
    pub headline_position: HeadlinePosition,
    pub has_subheadline: bool,
    pub has_badges: bool,
    pub badge_position: BadgePosition,
    pub has_logo: bool,
    pub logo_position: LogoPosition,
    pub background_type: BackgroundType,
    pub has_decorative_shapes: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutPattern {
    pub id: String,
    pub name: String,
    pub description: String,
    pub structure: PatternStructure,
    pub suggested_styles: Vec<String>,
}

/// A resolved slot: position, size and rotation in canvas units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rotation: f64,
}

impl PlacedRect {
    fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            rotation: 0.0,
        }
    }

    fn rotated(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }
}

/// Slots a pattern defines for a given canvas size.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatternPositions {
    pub device: Option<PlacedRect>,
    pub headline: Option<PlacedRect>,
    pub subheadline: Option<PlacedRect>,
    pub logo: Option<PlacedRect>,
    pub badges: Option<PlacedRect>,
}

/// Role a layer plays when a pattern is applied to existing layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternRole {
    Background,
    Device,
    Headline,
    Subheadline,
    Logo,
    Badges,
}

#[allow(clippy::too_many_arguments)]
fn pattern(
    id: &str,
    name: &str,
    description: &str,
    device: Option<(DevicePosition, DeviceSize)>,
    headline_position: HeadlinePosition,
    has_subheadline: bool,
    badges: BadgePosition,
    logo: LogoPosition,
    background_type: BackgroundType,
    has_decorative_shapes: bool,
    suggested_styles: &[&str],
) -> LayoutPattern {
    let (device_position, device_size) =
        device.unwrap_or((DevicePosition::None, DeviceSize::Small));
    LayoutPattern {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        structure: PatternStructure {
            has_device: device.is_some(),
            device_position,
            device_size,
            headline_position,
            has_subheadline,
            has_badges: badges != BadgePosition::None,
            badge_position: badges,
            has_logo: logo != LogoPosition::None,
            logo_position: logo,
            background_type,
            has_decorative_shapes,
        },
        suggested_styles: suggested_styles.iter().map(|s| s.to_string()).collect(),
    }
}

/// The built-in pattern catalog.
pub fn builtin_patterns() -> Vec<LayoutPattern> {
    use BackgroundType::*;
    use HeadlinePosition as H;

    vec![
        pattern(
            "hero-centered",
            "Hero Centered",
            "Clean centered device with headline above. Great for showcasing UI.",
            Some((DevicePosition::Center, DeviceSize::Large)),
            H::TopCenter,
            true,
            BadgePosition::None,
            LogoPosition::None,
            Solid,
            false,
            &["minimal", "dark"],
        ),
        pattern(
            "tilted-dramatic",
            "Tilted Dramatic",
            "Angled device with bold headline. High-impact, editorial feel.",
            Some((DevicePosition::TiltedCenter, DeviceSize::Large)),
            H::TopLeft,
            true,
            BadgePosition::None,
            LogoPosition::None,
            Solid,
            false,
            &["dark", "bold"],
        ),
        pattern(
            "lifestyle-overlay",
            "Lifestyle Photo",
            "Full-bleed photo with text overlay. Emotional, lifestyle-focused.",
            None,
            H::BottomLeft,
            true,
            BadgePosition::BelowHeadline,
            LogoPosition::TopLeft,
            Photo,
            false,
            &["dark"],
        ),
        pattern(
            "bold-stacked",
            "Bold Stacked Text",
            "Giant stacked headlines, minimal imagery. Statement-making.",
            None,
            H::Center,
            false,
            BadgePosition::None,
            LogoPosition::BottomCenter,
            Gradient,
            true,
            &["bold", "colorful"],
        ),
        pattern(
            "device-with-badges",
            "Device + Awards",
            "Device with App Store badges and social proof. Trust-building.",
            Some((DevicePosition::BottomRight, DeviceSize::Medium)),
            H::TopLeft,
            true,
            BadgePosition::BottomLeft,
            LogoPosition::None,
            Gradient,
            true,
            &["colorful", "bold"],
        ),
        pattern(
            "feature-spotlight",
            "Feature Spotlight",
            "Device with highlighted feature area. Great for specific features.",
            Some((DevicePosition::Center, DeviceSize::Large)),
            H::TopCenter,
            true,
            BadgePosition::None,
            LogoPosition::None,
            Solid,
            true,
            &["bold", "dark"],
        ),
        pattern(
            "gradient-glow",
            "Gradient Glow",
            "Dark gradient with glowing accents. Premium, tech-forward.",
            Some((DevicePosition::Center, DeviceSize::Medium)),
            H::TopCenter,
            true,
            BadgePosition::None,
            LogoPosition::None,
            Gradient,
            true,
            &["dark"],
        ),
        pattern(
            "split-comparison",
            "Split Screen",
            "Two-panel layout for before/after or feature comparison.",
            Some((DevicePosition::BottomRight, DeviceSize::Medium)),
            H::TopLeft,
            true,
            BadgePosition::None,
            LogoPosition::None,
            Solid,
            true,
            &["minimal", "bold"],
        ),
    ]
}

/// Looks a pattern up by id.
pub fn find_pattern(id: &str) -> Option<LayoutPattern> {
    builtin_patterns().into_iter().find(|p| p.id == id)
}

/// Resolves the pattern's slots for a `canvas_width` x `canvas_height` canvas.
pub fn positions_for(
    pattern: &LayoutPattern,
    canvas_width: f64,
    canvas_height: f64,
) -> PatternPositions {
    let s = &pattern.structure;
    let mut positions = PatternPositions::default();

    if s.has_device {
        let (dw, dh) = s.device_size.dimensions();
        positions.device = match s.device_position {
            DevicePosition::Center => Some(PlacedRect::new(
                (canvas_width - dw) / 2.0,
                canvas_height * 0.28,
                dw,
                dh,
            )),
            DevicePosition::TiltedCenter => Some(
                PlacedRect::new((canvas_width - dw) / 2.0 + 20.0, canvas_height * 0.25, dw, dh)
                    .rotated(8.0),
            ),
            DevicePosition::BottomRight => Some(
                PlacedRect::new(canvas_width - dw - 20.0, canvas_height * 0.35, dw, dh)
                    .rotated(-5.0),
            ),
            DevicePosition::BottomLeft => {
                Some(PlacedRect::new(20.0, canvas_height * 0.35, dw, dh).rotated(5.0))
            }
            DevicePosition::HandHeld | DevicePosition::None => None,
        };
    }

    let headline = match s.headline_position {
        HeadlinePosition::TopCenter => {
            PlacedRect::new(20.0, canvas_height * 0.08, canvas_width - 40.0, 100.0)
        }
        HeadlinePosition::TopLeft => {
            PlacedRect::new(20.0, canvas_height * 0.06, canvas_width * 0.7, 140.0)
        }
        HeadlinePosition::Center => {
            PlacedRect::new(20.0, canvas_height * 0.35, canvas_width - 40.0, 200.0)
        }
        HeadlinePosition::BottomLeft => {
            PlacedRect::new(20.0, canvas_height * 0.65, canvas_width * 0.8, 120.0)
        }
        HeadlinePosition::BottomCenter => {
            PlacedRect::new(20.0, canvas_height * 0.75, canvas_width - 40.0, 100.0)
        }
    };
    positions.headline = Some(headline);

    if s.has_subheadline {
        positions.subheadline = Some(PlacedRect::new(
            headline.x,
            headline.y + headline.height + 10.0,
            headline.width,
            60.0,
        ));
    }

    if s.has_logo {
        positions.logo = match s.logo_position {
            LogoPosition::TopLeft => Some(PlacedRect::new(20.0, 20.0, 120.0, 40.0)),
            LogoPosition::TopCenter => {
                Some(PlacedRect::new((canvas_width - 50.0) / 2.0, 20.0, 50.0, 50.0))
            }
            LogoPosition::BottomCenter => Some(PlacedRect::new(
                (canvas_width - 120.0) / 2.0,
                canvas_height - 60.0,
                120.0,
                40.0,
            )),
            LogoPosition::None => None,
        };
    }

    if s.has_badges {
        positions.badges = match s.badge_position {
            BadgePosition::BelowHeadline => {
                let anchor_y = positions.subheadline.map_or(headline.y, |sub| sub.y);
                Some(PlacedRect::new(20.0, anchor_y + 80.0, canvas_width - 40.0, 60.0))
            }
            BadgePosition::BottomLeft => {
                Some(PlacedRect::new(20.0, canvas_height - 150.0, 180.0, 120.0))
            }
            BadgePosition::AboveDevice | BadgePosition::None => None,
        };
    }

    positions
}

fn place(layer: Layer, rect: &PlacedRect) -> Layer {
    Layer {
        x: rect.x,
        y: rect.y,
        width: rect.width,
        height: rect.height,
        rotation: rect.rotation,
        ..layer
    }
}

/// Builds the starter layers for a pattern before any generator styling:
/// a full-canvas background, the device frame, the headline and subheadline.
pub fn default_layers(
    pattern: &LayoutPattern,
    canvas_width: f64,
    canvas_height: f64,
    app_name: &str,
) -> Vec<Layer> {
    let positions = positions_for(pattern, canvas_width, canvas_height);
    let align = if pattern.structure.headline_position.is_left_aligned() {
        TextAlign::Left
    } else {
        TextAlign::Center
    };
    let mut layers = Vec::new();

    layers.push(
        Layer::shape(0.0, 0.0, canvas_width, canvas_height)
            .with_name("Background")
            .with_style(LayerStyle {
                background_color: Some("#1e293b".to_string()),
                ..Default::default()
            }),
    );

    if let Some(rect) = &positions.device {
        let device = Layer::device(0.0, 0.0, rect.width, rect.height)
            .with_name(format!("{} Screenshot", app_name))
            .with_style(LayerStyle::default());
        layers.push(place(device, rect));
    }

    if let Some(rect) = &positions.headline {
        let headline = Layer::text(app_name, 0.0, 0.0, rect.width, rect.height)
            .with_name("Headline")
            .with_style(LayerStyle {
                color: Some("#ffffff".to_string()),
                font_size: Some(32.0),
                font_weight: Some(FontWeight::bold()),
                text_align: Some(align),
                ..Default::default()
            });
        layers.push(place(headline, rect));
    }

    if let Some(rect) = &positions.subheadline {
        let mut sub = Layer::text(
            "Your app description goes here",
            0.0,
            0.0,
            rect.width,
            rect.height,
        )
        .with_name("Subheadline")
        .with_style(LayerStyle {
            color: Some("#94a3b8".to_string()),
            font_size: Some(16.0),
            font_weight: Some(FontWeight::normal()),
            text_align: Some(align),
            ..Default::default()
        });
        sub.opacity = 0.8;
        layers.push(place(sub, rect));
    }

    layers
}

/// Guesses the role of `layer` at `index` from its type and name.
pub fn detect_role(layer: &Layer, index: usize, canvas: &CanvasConfig) -> Option<PatternRole> {
    let name = layer.name.to_ascii_lowercase();
    match layer.layer_type {
        LayerType::Device => Some(PatternRole::Device),
        LayerType::Shape
            if index == 0 && layer.width >= canvas.width && layer.height >= canvas.height =>
        {
            Some(PatternRole::Background)
        }
        _ if name.contains("logo") => Some(PatternRole::Logo),
        _ if name.contains("badge") => Some(PatternRole::Badges),
        LayerType::Text if name.contains("sub") => Some(PatternRole::Subheadline),
        LayerType::Text if name.contains("headline") || name.contains("title") => {
            Some(PatternRole::Headline)
        }
        _ => None,
    }
}

/// Moves existing layers into the pattern's slots, keeping their content and style.
///
/// Each role is filled at most once, first match wins. The first untagged
/// text layer stands in for a missing headline. Layers without a role or
/// without a slot in this pattern keep their geometry.
pub fn apply_pattern(
    pattern: &LayoutPattern,
    canvas: &CanvasConfig,
    layers: Vec<Layer>,
) -> Vec<Layer> {
    let positions = positions_for(pattern, canvas.width, canvas.height);
    let mut roles: Vec<Option<PatternRole>> = layers
        .iter()
        .enumerate()
        .map(|(i, l)| detect_role(l, i, canvas))
        .collect();

    if !roles.contains(&Some(PatternRole::Headline)) {
        if let Some(i) = layers
            .iter()
            .enumerate()
            .position(|(i, l)| l.layer_type == LayerType::Text && roles[i].is_none())
        {
            roles[i] = Some(PatternRole::Headline);
        }
    }

    let mut filled = Vec::new();
    layers
        .into_iter()
        .zip(roles)
        .map(|(layer, role)| {
            let Some(role) = role.filter(|r| !filled.contains(r)) else {
                return layer;
            };
            filled.push(role);
            let slot = match role {
                PatternRole::Background => {
                    Some(PlacedRect::new(0.0, 0.0, canvas.width, canvas.height))
                }
                PatternRole::Device => positions.device,
                PatternRole::Headline => positions.headline,
                PatternRole::Subheadline => positions.subheadline,
                PatternRole::Logo => positions.logo,
                PatternRole::Badges => positions.badges,
            };
            match slot {
                Some(rect) => place(layer, &rect),
                None => layer,
            }
        })
        .collect()
}
