use shotcraft_designer::designer_state::{DesignerState, EditorOptions};
use shotcraft_designer::geometry::ResizeHandle;
use shotcraft_designer::model::{Layer, LayerUpdate, Point};

#[test]
fn test_drag_then_undo_restores_position() {
    let mut state = DesignerState::new();
    let id = state.add_layer(Layer::shape(10.0, 10.0, 50.0, 50.0)).unwrap();

    state.pointer_down_on_layer(&id, Point::new(20.0, 20.0));
    state.pointer_move(Point::new(30.0, 25.0));
    state.pointer_move(Point::new(45.0, 40.0));
    state.pointer_up();

    let moved = state.canvas.get_layer(&id).unwrap();
    assert_eq!((moved.x, moved.y), (35.0, 30.0));

    assert!(state.undo());
    let restored = state.canvas.get_layer(&id).unwrap();
    assert_eq!((restored.x, restored.y), (10.0, 10.0));

    assert!(state.redo());
    let again = state.canvas.get_layer(&id).unwrap();
    assert_eq!((again.x, again.y), (35.0, 30.0));
}

#[test]
fn test_click_without_motion_still_commits() {
    let mut state = DesignerState::new();
    let id = state.add_layer(Layer::shape(10.0, 10.0, 50.0, 50.0)).unwrap();
    let len = state.history().len();

    state.pointer_down_on_layer(&id, Point::new(20.0, 20.0));
    state.pointer_up();
    assert_eq!(state.history().len(), len + 1);
}

#[test]
fn test_second_pointer_down_is_ignored_mid_gesture() {
    let mut state = DesignerState::new();
    let a = state.add_layer(Layer::shape(0.0, 0.0, 50.0, 50.0)).unwrap();
    let b = state.add_layer(Layer::shape(100.0, 0.0, 50.0, 50.0)).unwrap();

    assert!(state.pointer_down_on_layer(&a, Point::new(10.0, 10.0)));
    assert!(!state.pointer_down_on_handle(&b, ResizeHandle::SE, Point::new(150.0, 50.0)));
    assert_eq!(state.canvas.selected_id(), Some(&a));
    state.pointer_move(Point::new(20.0, 10.0));
    state.pointer_up();

    assert_eq!(state.canvas.get_layer(&a).unwrap().x, 10.0);
    assert_eq!(state.canvas.get_layer(&b).unwrap().x, 100.0);
}

#[test]
fn test_layer_locked_mid_drag_stops_moving() {
    let mut state = DesignerState::new();
    let id = state.add_layer(Layer::shape(0.0, 0.0, 50.0, 50.0)).unwrap();
    state.pointer_down_on_layer(&id, Point::new(10.0, 10.0));
    state.pointer_move(Point::new(20.0, 10.0));

    // discrete edits are refused until the gesture ends
    assert!(!state.toggle_lock(&id));
    state.pointer_up();
    assert!(state.toggle_lock(&id));

    assert!(!state.pointer_down_on_layer(&id, Point::new(15.0, 10.0)));
    assert!(!state.pointer_move(Point::new(90.0, 90.0)));
    assert_eq!(state.canvas.get_layer(&id).unwrap().x, 10.0);
}

#[test]
fn test_update_on_locked_layer_applies_only_non_geometry() {
    let mut state = DesignerState::new();
    let id = state.add_layer(Layer::text("Hi", 0.0, 0.0, 100.0, 40.0)).unwrap();
    state.toggle_lock(&id);

    let update = LayerUpdate {
        x: Some(50.0),
        width: Some(400.0),
        content: Some("Hello".to_string()),
        opacity: Some(3.0),
        ..Default::default()
    };
    assert!(state.update_layer(&id, &update));
    let layer = state.canvas.get_layer(&id).unwrap();
    assert_eq!((layer.x, layer.width), (0.0, 100.0));
    assert_eq!(layer.content, "Hello");
    assert_eq!(layer.opacity, 1.0);
}

#[test]
fn test_update_floors_dimensions() {
    let mut state = DesignerState::new();
    let id = state.add_layer(Layer::shape(0.0, 0.0, 100.0, 40.0)).unwrap();
    state.update_layer(&id, &LayerUpdate::size(-5.0, 3.0));
    let layer = state.canvas.get_layer(&id).unwrap();
    assert_eq!((layer.width, layer.height), (10.0, 10.0));
}

#[test]
fn test_custom_history_capacity() {
    let options = EditorOptions {
        history_capacity: 3,
        ..Default::default()
    };
    let mut state = DesignerState::with_options(options);
    for _ in 0..10 {
        state.add_shape_layer();
    }
    assert_eq!(state.history().len(), 3);
    assert!(state.undo());
    assert!(state.undo());
    assert!(!state.undo());
    assert_eq!(state.canvas.layer_count(), 8);
}

#[test]
fn test_duplicate_selected_uses_configured_offset() {
    let options = EditorOptions {
        duplicate_offset: 5.0,
        ..Default::default()
    };
    let mut state = DesignerState::with_options(options);
    let id = state.add_layer(Layer::shape(0.0, 0.0, 20.0, 20.0)).unwrap();
    let copy = state.duplicate_selected().unwrap();
    assert_ne!(copy, id);
    let layer = state.canvas.get_layer(&copy).unwrap();
    assert_eq!((layer.x, layer.y), (5.0, 5.0));
}

#[test]
fn test_replace_all_layers_is_single_undo_step() {
    let mut state = DesignerState::new();
    state.add_shape_layer();
    state.add_text_layer();
    let before = state.canvas.layers().clone();

    state.replace_all_layers(vec![Layer::device(10.0, 10.0, 240.0, 500.0)]);
    assert_eq!(state.canvas.layer_count(), 1);
    assert_eq!(state.canvas.selected_id(), None);

    assert!(state.undo());
    assert_eq!(state.canvas.layers(), &before);
}

#[test]
fn test_hidden_layer_cannot_be_dragged_or_resized() {
    let mut state = DesignerState::new();
    let id = state.add_layer(Layer::shape(100.0, 100.0, 150.0, 150.0)).unwrap();
    assert!(state.toggle_visibility(&id));
    assert_eq!(state.canvas.selected_id(), Some(&id));
    let len = state.history().len();

    // Where the SE grip would be drawn.
    assert!(!state.pointer_down(Point::new(250.0, 250.0)));
    assert!(!state.pointer_move(Point::new(300.0, 300.0)));
    assert!(!state.pointer_up());

    assert!(!state.pointer_down_on_layer(&id, Point::new(150.0, 150.0)));
    assert!(!state.pointer_down_on_handle(&id, ResizeHandle::SE, Point::new(250.0, 250.0)));

    let layer = state.canvas.get_layer(&id).unwrap();
    assert_eq!((layer.x, layer.y, layer.width, layer.height), (100.0, 100.0, 150.0, 150.0));
    assert_eq!(state.history().len(), len);
    assert!(!state.interaction().is_dragging());
}
