use shotcraft_designer::designer_state::DesignerState;
use shotcraft_designer::export::{export_path_in, ExportSink, ExportSnapshot, SvgExporter};
use shotcraft_designer::model::{CanvasConfigUpdate, Layer};
use tempfile::TempDir;

#[test]
fn test_export_reflects_live_document() {
    let mut state = DesignerState::new();
    assert!(state.apply_pattern_template("tilted-dramatic", "Pulse"));
    state.update_canvas_config(&CanvasConfigUpdate::background("#123456"));
    state.set_user_screenshot(Some("https://example.com/shot.png".to_string()));

    let snapshot = ExportSnapshot::from_state(&state);
    assert_eq!(snapshot.layers.len(), state.canvas.layer_count());

    let svg = SvgExporter::new().render(&snapshot).unwrap();
    assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
    assert!(svg.contains(r##"fill="#123456""##));
    assert!(svg.contains("https://example.com/shot.png"));
    assert!(svg.contains("rotate(8 "));
    assert!(svg.trim_end().ends_with("</svg>"));
}

#[test]
fn test_write_to_directory() {
    let dir = TempDir::new().unwrap();
    let mut state = DesignerState::new();
    state.add_layer(Layer::text("Ship it", 10.0, 10.0, 200.0, 40.0));

    let path = export_path_in(dir.path());
    let exporter = SvgExporter::new();
    assert_eq!(exporter.file_extension(), "svg");
    exporter
        .write_to(&ExportSnapshot::from_state(&state), &path)
        .unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("Ship it"));
    assert!(path
        .file_name()
        .unwrap()
        .to_string_lossy()
        .starts_with("app-store-screenshot-"));
}

#[test]
fn test_export_does_not_touch_history() {
    let mut state = DesignerState::new();
    state.add_shape_layer();
    let len = state.history().len();
    let _ = SvgExporter::new().render(&ExportSnapshot::from_state(&state));
    assert_eq!(state.history().len(), len);
}
