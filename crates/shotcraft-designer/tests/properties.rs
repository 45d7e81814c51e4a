//! Property-based invariant tests for the editor engine.
//!
//! 1. Resizing never produces a dimension below the floor
//! 2. Two moves end where one move by the summed delta ends
//! 3. History stays within capacity with the cursor on the newest entry
//! 4. Undo followed by redo restores the same snapshot
//! 5. Locked layers keep their geometry under any gesture sequence
//! 6. Reordering keeps the layer set and respects the list boundaries

use proptest::prelude::*;
use shotcraft_core::constants::MIN_LAYER_SIZE;
use shotcraft_designer::designer_state::DesignerState;
use shotcraft_designer::geometry::{compute_drag, DragMode, ResizeHandle};
use shotcraft_designer::history::HistoryManager;
use shotcraft_designer::model::{Layer, LayerList, Point};
use std::sync::Arc;

// ── Strategies ──────────────────────────────────────────────────────────

fn handle_strategy() -> impl Strategy<Value = ResizeHandle> {
    (0usize..ResizeHandle::ALL.len()).prop_map(|i| ResizeHandle::ALL[i])
}

fn layer_strategy() -> impl Strategy<Value = Layer> {
    (-200.0f64..600.0, -200.0f64..900.0, 10.0f64..400.0, 10.0f64..400.0)
        .prop_map(|(x, y, w, h)| Layer::shape(x, y, w, h))
}

#[derive(Debug, Clone)]
enum Gesture {
    Down(f64, f64),
    Move(f64, f64),
    Up,
    Leave,
}

fn gesture_strategy() -> impl Strategy<Value = Gesture> {
    prop_oneof![
        (0.0f64..428.0, 0.0f64..926.0).prop_map(|(x, y)| Gesture::Down(x, y)),
        (-100.0f64..528.0, -100.0f64..1026.0).prop_map(|(x, y)| Gesture::Move(x, y)),
        Just(Gesture::Up),
        Just(Gesture::Leave),
    ]
}

fn list_of(n: usize) -> LayerList {
    (0..n)
        .map(|i| Arc::new(Layer::shape(i as f64, 0.0, 20.0, 20.0)))
        .collect()
}

// ── Properties ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn resize_respects_floor(
        layer in layer_strategy(),
        handle in handle_strategy(),
        dx in -1000.0f64..1000.0,
        dy in -1000.0f64..1000.0,
    ) {
        let update = compute_drag(&layer, DragMode::Resize(handle), dx, dy);
        let resized = layer.with_update(&update);
        prop_assert!(resized.width >= MIN_LAYER_SIZE);
        prop_assert!(resized.height >= MIN_LAYER_SIZE);
        if !handle.moves_left_edge() && !handle.moves_right_edge() {
            prop_assert_eq!(resized.width, layer.width);
            prop_assert_eq!(resized.x, layer.x);
        }
        if !handle.moves_top_edge() && !handle.moves_bottom_edge() {
            prop_assert_eq!(resized.height, layer.height);
            prop_assert_eq!(resized.y, layer.y);
        }
    }

    #[test]
    fn move_is_additive(
        layer in layer_strategy(),
        dx1 in -500.0f64..500.0,
        dy1 in -500.0f64..500.0,
        dx2 in -500.0f64..500.0,
        dy2 in -500.0f64..500.0,
    ) {
        let first = layer.with_update(&compute_drag(&layer, DragMode::Move, dx1, dy1));
        let stepped = first.with_update(&compute_drag(&first, DragMode::Move, dx2, dy2));
        let single = layer.with_update(&compute_drag(
            &layer,
            DragMode::Move,
            dx1 + dx2,
            dy1 + dy2,
        ));

        prop_assert!((stepped.x - single.x).abs() < 1e-9);
        prop_assert!((stepped.y - single.y).abs() < 1e-9);
        prop_assert_eq!(stepped.width, layer.width);
        prop_assert_eq!(stepped.height, layer.height);
    }

    #[test]
    fn history_stays_bounded(capacity in 1usize..20, commits in 0usize..60) {
        let mut history = HistoryManager::with_capacity(LayerList::new(), capacity);
        for n in 1..=commits {
            history.commit(&list_of(n % 5));
            prop_assert!(history.len() <= capacity);
            prop_assert_eq!(history.index(), history.len() - 1);
            prop_assert!(!history.can_redo());
        }
    }

    #[test]
    fn undo_then_redo_restores_snapshot(commits in 1usize..10, undos in 1usize..10) {
        let mut history = HistoryManager::new(LayerList::new());
        for n in 1..=commits {
            history.commit(&list_of(n));
        }
        let undos = undos.min(commits);
        for _ in 0..undos {
            prop_assert!(history.undo().is_some());
        }
        let before = history.current().cloned();
        if history.undo().is_some() {
            history.redo();
        }
        prop_assert_eq!(history.current().cloned(), before);
    }

    #[test]
    fn locked_layer_geometry_is_invariant(
        gestures in prop::collection::vec(gesture_strategy(), 1..40),
    ) {
        let mut state = DesignerState::new();
        let id = state
            .add_layer(Layer::shape(100.0, 100.0, 200.0, 200.0))
            .ok_or_else(|| TestCaseError::fail("layer not added"))?;
        prop_assert!(state.toggle_lock(&id));

        for gesture in gestures {
            match gesture {
                Gesture::Down(x, y) => {
                    state.pointer_down(Point::new(x, y));
                }
                Gesture::Move(x, y) => {
                    state.pointer_move(Point::new(x, y));
                }
                Gesture::Up => {
                    state.pointer_up();
                }
                Gesture::Leave => {
                    state.pointer_leave();
                }
            }
        }

        let layer = state
            .canvas
            .get_layer(&id)
            .ok_or_else(|| TestCaseError::fail("layer vanished"))?;
        prop_assert_eq!(layer.bounds(), (100.0, 100.0, 300.0, 300.0));
    }

    #[test]
    fn reordering_keeps_layer_set(
        count in 1usize..8,
        moves in prop::collection::vec((0usize..8, any::<bool>()), 0..30),
    ) {
        let mut state = DesignerState::new();
        let ids: Vec<_> = (0..count)
            .filter_map(|i| state.add_layer(Layer::shape(i as f64 * 10.0, 0.0, 20.0, 20.0)))
            .collect();
        prop_assert_eq!(ids.len(), count);

        for (pick, up) in moves {
            let id = &ids[pick % count];
            let index = state.canvas.index_of(id);
            let moved = if up { state.move_layer_up(id) } else { state.move_layer_down(id) };
            if up && index == Some(count - 1) {
                prop_assert!(!moved);
            }
            if !up && index == Some(0) {
                prop_assert!(!moved);
            }
        }

        prop_assert_eq!(state.canvas.layer_count(), count);
        for id in &ids {
            prop_assert!(state.canvas.contains(id));
        }
    }
}
