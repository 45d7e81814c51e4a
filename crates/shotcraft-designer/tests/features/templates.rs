use shotcraft_designer::model::{CanvasConfig, LayerType};
use shotcraft_designer::templates::{
    apply_pattern, builtin_patterns, default_layers, find_pattern, positions_for, DevicePosition,
};

const W: f64 = 428.0;
const H: f64 = 926.0;

#[test]
fn test_every_pattern_fits_the_default_canvas() {
    for pattern in builtin_patterns() {
        let layers = default_layers(&pattern, W, H, "Your App");
        assert_eq!(layers[0].name, "Background", "{}", pattern.id);
        assert!(layers.iter().any(|l| l.name == "Headline"), "{}", pattern.id);

        let has_device = layers.iter().any(|l| l.layer_type == LayerType::Device);
        assert_eq!(has_device, pattern.structure.has_device, "{}", pattern.id);

        for layer in &layers {
            assert!(layer.x >= 0.0 && layer.x + layer.width <= W, "{} {}", pattern.id, layer.name);
        }
    }
}

#[test]
fn test_device_positions() {
    let tilted = positions_for(&find_pattern("tilted-dramatic").unwrap(), W, H);
    let device = tilted.device.unwrap();
    assert_eq!(device.x, (W - 240.0) / 2.0 + 20.0);
    assert_eq!(device.rotation, 8.0);

    let badges = find_pattern("device-with-badges").unwrap();
    assert_eq!(badges.structure.device_position, DevicePosition::BottomRight);
    let p = positions_for(&badges, W, H);
    let device = p.device.unwrap();
    assert_eq!(device.x, W - 200.0 - 20.0);
    assert_eq!(device.rotation, -5.0);
    let badge = p.badges.unwrap();
    assert_eq!((badge.y, badge.width, badge.height), (H - 150.0, 180.0, 120.0));
}

#[test]
fn test_logo_bottom_center() {
    let p = positions_for(&find_pattern("bold-stacked").unwrap(), W, H);
    let logo = p.logo.unwrap();
    assert_eq!((logo.x, logo.y), ((W - 120.0) / 2.0, H - 60.0));
    assert!(p.subheadline.is_none());
}

#[test]
fn test_apply_pattern_leaves_unmatched_layers() {
    let canvas = CanvasConfig::new(W, H, "#000000");
    let pattern = find_pattern("bold-stacked").unwrap();
    let layers = default_layers(&find_pattern("hero-centered").unwrap(), W, H, "App");
    let device_before = layers[1].clone();

    let result = apply_pattern(&pattern, &canvas, layers);
    // bold-stacked has no device slot
    assert_eq!(result[1].x, device_before.x);
    assert_eq!(result[2].y, H * 0.35);
    assert_eq!(result[2].height, 200.0);
}
