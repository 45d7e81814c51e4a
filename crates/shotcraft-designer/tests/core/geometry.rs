use shotcraft_designer::geometry::{compute_drag, hit_test_handles, DragMode, ResizeHandle};
use shotcraft_designer::model::{Layer, Point};

fn square() -> Layer {
    Layer::shape(100.0, 100.0, 150.0, 150.0)
}

#[test]
fn test_nw_resize_past_the_floor() {
    let layer = square();
    let update = compute_drag(&layer, DragMode::Resize(ResizeHandle::NW), 200.0, 200.0);
    let resized = layer.with_update(&update);

    assert_eq!((resized.width, resized.height), (10.0, 10.0));
    // position takes the full shift, no compensation for the floor
    assert_eq!((resized.x, resized.y), (300.0, 300.0));
}

#[test]
fn test_nw_resize_outward_grows_and_moves() {
    let layer = square();
    let update = compute_drag(&layer, DragMode::Resize(ResizeHandle::NW), -200.0, -200.0);
    let resized = layer.with_update(&update);

    assert_eq!((resized.width, resized.height), (350.0, 350.0));
    assert_eq!((resized.x, resized.y), (-100.0, -100.0));
}

#[test]
fn test_se_resize_clamps_without_moving() {
    let layer = square();
    let update = compute_drag(&layer, DragMode::Resize(ResizeHandle::SE), -200.0, -200.0);
    assert_eq!(update.width, Some(10.0));
    assert_eq!(update.height, Some(10.0));
    assert_eq!(update.x, None);
    assert_eq!(update.y, None);
}

#[test]
fn test_edge_handles_touch_one_axis() {
    let layer = square();
    let n = compute_drag(&layer, DragMode::Resize(ResizeHandle::N), 30.0, 20.0);
    assert_eq!((n.y, n.height, n.x, n.width), (Some(120.0), Some(130.0), None, None));

    let e = compute_drag(&layer, DragMode::Resize(ResizeHandle::E), 30.0, 20.0);
    assert_eq!((e.width, e.height, e.x, e.y), (Some(180.0), None, None, None));

    let sw = compute_drag(&layer, DragMode::Resize(ResizeHandle::SW), 30.0, 20.0);
    assert_eq!(sw.x, Some(130.0));
    assert_eq!(sw.width, Some(120.0));
    assert_eq!(sw.height, Some(170.0));
}

#[test]
fn test_move_is_unclamped() {
    let layer = square();
    let update = compute_drag(&layer, DragMode::Move, -5000.0, 12.5);
    assert_eq!(update.x, Some(-4900.0));
    assert_eq!(update.y, Some(112.5));
    assert_eq!(update.width, None);
}

#[test]
fn test_handles_hit_at_every_anchor() {
    let layer = square();
    for handle in ResizeHandle::ALL {
        let anchor = handle.anchor_point(&layer);
        assert_eq!(hit_test_handles(&layer, &anchor), Some(handle));
    }
    assert_eq!(hit_test_handles(&layer, &Point::new(175.0, 175.0)), None);
}
