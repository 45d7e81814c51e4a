use shotcraft_designer::history::HistoryManager;
use shotcraft_designer::model::{Layer, LayerList};
use std::sync::Arc;

fn state(n: usize) -> LayerList {
    (0..n)
        .map(|i| Arc::new(Layer::shape(i as f64, 0.0, 20.0, 20.0).with_name(format!("s{}", i))))
        .collect()
}

#[test]
fn test_fifty_one_commits_evict_the_oldest() {
    let mut history = HistoryManager::new(LayerList::new());
    let commits: Vec<LayerList> = (1..=51).map(state).collect();
    for list in &commits {
        history.commit(list);
    }
    assert_eq!(history.len(), 50);

    let mut last = None;
    for _ in 0..49 {
        last = history.undo().cloned();
    }
    assert_eq!(last.as_ref(), Some(&commits[1]));
    assert!(!history.can_undo());
    assert!(history.undo().is_none());
}

#[test]
fn test_commit_after_undo_discards_redo_branch() {
    let mut history = HistoryManager::new(LayerList::new());
    history.commit(&state(1));
    history.commit(&state(2));
    history.undo();
    assert!(history.can_redo());

    let third = state(3);
    history.commit(&third);
    assert!(!history.can_redo());
    assert_eq!(history.len(), 3);
    assert_eq!(history.current(), Some(&third));
}

#[test]
fn test_redo_at_newest_is_noop() {
    let mut history = HistoryManager::new(LayerList::new());
    history.commit(&state(1));
    assert!(history.redo().is_none());
    assert_eq!(history.index(), 1);
}
