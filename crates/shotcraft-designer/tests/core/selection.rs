use shotcraft_designer::canvas::Canvas;
use shotcraft_designer::model::{Layer, LayerId, Point};
use shotcraft_designer::selection_manager::SelectionManager;

#[test]
fn test_duplicate_headline_scenario() {
    let mut canvas = Canvas::new();
    let id = canvas.add_layer(
        Layer::text("Headline", 100.0, 100.0, 200.0, 50.0).with_name("Headline"),
    );

    let copy = canvas.duplicate_layer(&id, 20.0).unwrap();
    assert_eq!(canvas.layer_count(), 2);
    assert_ne!(copy, id);

    let second = &canvas.layers()[1];
    assert_eq!(second.id, copy);
    assert_eq!(second.name, "Headline Copy");
    assert_eq!((second.x, second.y), (120.0, 120.0));
    assert_eq!((second.width, second.height), (200.0, 50.0));
    assert_eq!(canvas.selected_id(), Some(&copy));
}

#[test]
fn test_duplicate_inserts_directly_above_original() {
    let mut canvas = Canvas::new();
    let bottom = canvas.add_layer(Layer::shape(0.0, 0.0, 20.0, 20.0));
    let top = canvas.add_layer(Layer::shape(0.0, 0.0, 20.0, 20.0));

    let copy = canvas.duplicate_layer(&bottom, 20.0).unwrap();
    let order: Vec<&LayerId> = canvas.layers().iter().map(|l| &l.id).collect();
    assert_eq!(order, vec![&bottom, &copy, &top]);
}

#[test]
fn test_operations_on_unknown_id_are_noops() {
    let mut canvas = Canvas::new();
    canvas.add_layer(Layer::shape(0.0, 0.0, 20.0, 20.0));
    let before = canvas.layers().clone();
    let ghost = LayerId::from("ghost");

    assert!(!canvas.delete_layer(&ghost));
    assert!(canvas.duplicate_layer(&ghost, 20.0).is_none());
    assert!(!canvas.move_layer_up(&ghost));
    assert!(!canvas.move_layer_down(&ghost));
    assert!(!canvas.toggle_lock(&ghost));
    assert!(!canvas.toggle_visibility(&ghost));
    assert_eq!(canvas.layers(), &before);
}

#[test]
fn test_z_order_boundaries() {
    let mut canvas = Canvas::new();
    let a = canvas.add_layer(Layer::shape(0.0, 0.0, 20.0, 20.0));
    let b = canvas.add_layer(Layer::shape(0.0, 0.0, 20.0, 20.0));
    let before = canvas.layers().clone();

    assert!(!canvas.move_layer_up(&b));
    assert!(!canvas.move_layer_down(&a));
    assert_eq!(canvas.layers(), &before);

    assert!(canvas.move_layer_up(&a));
    assert_eq!(canvas.index_of(&a), Some(1));
}

#[test]
fn test_delete_clears_selection_only_for_deleted_layer() {
    let mut canvas = Canvas::new();
    let a = canvas.add_layer(Layer::shape(0.0, 0.0, 20.0, 20.0));
    let b = canvas.add_layer(Layer::shape(0.0, 0.0, 20.0, 20.0));

    canvas.select(Some(a.clone()));
    assert!(canvas.delete_layer(&b));
    assert_eq!(canvas.selected_id(), Some(&a));
    assert!(canvas.delete_layer(&a));
    assert_eq!(canvas.selected_id(), None);
}

#[test]
fn test_toggle_lock_keeps_selection() {
    let mut canvas = Canvas::new();
    let a = canvas.add_layer(Layer::shape(0.0, 0.0, 20.0, 20.0));
    canvas.select(Some(a.clone()));
    assert!(canvas.toggle_lock(&a));
    assert!(canvas.get_layer(&a).unwrap().locked);
    assert_eq!(canvas.selected_id(), Some(&a));
}

#[test]
fn test_layer_at_picks_topmost_visible() {
    let mut canvas = Canvas::new();
    let bottom = canvas.add_layer(Layer::shape(0.0, 0.0, 100.0, 100.0));
    let top = canvas.add_layer(Layer::shape(50.0, 50.0, 100.0, 100.0));
    let p = Point::new(75.0, 75.0);

    assert_eq!(SelectionManager::layer_at(canvas.layers(), &p, 0.0), Some(top.clone()));
    canvas.toggle_visibility(&top);
    assert_eq!(canvas.layer_at(&p, 0.0), Some(bottom));
}
