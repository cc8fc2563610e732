//! Workflow tests driving the tile tree and pane registry together, the
//! way the app does: structural edits followed by a coarse sync, content
//! edits followed by a fine refresh, fetch results applied last.

use filedeck::registry::{FetchRequest, LoadOutcome, PaneRegistry, SurfaceState};
use filedeck::tile::{SplitDirection, TileNode, TileTree};
use filedeck_protocol::{FileDocument, ProjectionOutput};

fn document(path: &str, projection: &str) -> FileDocument {
    FileDocument {
        path: path.to_string(),
        is_dir: false,
        projections: Vec::new(),
        active_projection: projection.to_string(),
        output: ProjectionOutput::Text {
            content: "hello".into(),
            language: Some("rust".into()),
            line_count: 1,
        },
    }
}

fn complete_all(registry: &mut PaneRegistry, requests: Vec<FetchRequest>) {
    for request in requests {
        let projection = request.projection.clone().unwrap_or_default();
        let path = request.path.clone();
        registry.complete(LoadOutcome {
            pane_id: request.pane_id,
            generation: request.generation,
            result: Ok(document(&path, &projection)),
        });
    }
}

#[test]
fn test_boot_single_pane_becomes_ready() {
    let mut tree = TileTree::new("");
    let mut registry = PaneRegistry::new();

    let requests = registry.sync_all(&tree);
    assert_eq!(requests.len(), 1);
    complete_all(&mut registry, requests);

    assert!(matches!(
        registry.get(1).unwrap().state,
        SurfaceState::Ready(_)
    ));
}

#[test]
fn test_split_workflow_loads_both_panes() {
    let mut tree = TileTree::new("src");
    let mut registry = PaneRegistry::new();
    let requests = registry.sync_all(&tree);
    complete_all(&mut registry, requests);

    let new_pane = tree.split_pane(1, SplitDirection::Horizontal).unwrap();
    let requests = registry.sync_all(&tree);
    // Coarse pass reloads every pane, both the survivor and the new one
    assert_eq!(requests.len(), 2);
    complete_all(&mut registry, requests);

    for id in [1, new_pane] {
        assert!(matches!(
            registry.get(id).unwrap().state,
            SurfaceState::Ready(_)
        ));
    }
    // New pane opens at the same path as the one that was split
    assert_eq!(tree.pane_state(new_pane), Some(("src".into(), None)));
}

#[test]
fn test_close_workflow_drops_surface_and_ignores_late_fetch() {
    let mut tree = TileTree::new("");
    let mut registry = PaneRegistry::new();
    let second = tree.split_pane(1, SplitDirection::Vertical).unwrap();
    let requests = registry.sync_all(&tree);

    // Hold the closed pane's fetch; let it land after the close + sync
    let late = requests
        .iter()
        .find(|r| r.pane_id == second)
        .cloned()
        .unwrap();
    complete_all(&mut registry, requests);

    tree.close_pane(second);
    let requests = registry.sync_all(&tree);
    complete_all(&mut registry, requests);

    registry.complete(LoadOutcome {
        pane_id: late.pane_id,
        generation: late.generation,
        result: Ok(document("ghost", "")),
    });
    assert!(registry.get(second).is_none());
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_close_promotes_sibling_subtree_into_parent_slot() {
    // root split [1 | split [b / c]]; closing 1 must make the inner split
    // the root without flattening it.
    let mut tree = TileTree::new("a");
    let b = tree.split_pane(1, SplitDirection::Horizontal).unwrap();
    let c = tree.split_pane(b, SplitDirection::Vertical).unwrap();

    assert!(tree.close_pane(1));
    let TileNode::Split { direction, .. } = tree.root() else {
        panic!("promoted sibling should be a split");
    };
    assert_eq!(*direction, SplitDirection::Vertical);
    assert_eq!(tree.pane_ids(), vec![b, c]);

    // Registry follows along: only b and c survive the sync
    let mut registry = PaneRegistry::new();
    let requests = registry.sync_all(&tree);
    let mut ids: Vec<_> = requests.iter().map(|r| r.pane_id).collect();
    ids.sort_unstable();
    let mut expected = vec![b, c];
    expected.sort_unstable();
    assert_eq!(ids, expected);
}

#[test]
fn test_navigation_refresh_is_per_pane() {
    let mut tree = TileTree::new("docs");
    let mut registry = PaneRegistry::new();
    let second = tree.split_pane(1, SplitDirection::Horizontal).unwrap();
    let requests = registry.sync_all(&tree);
    complete_all(&mut registry, requests);

    assert!(tree.navigate_pane(second, "docs/guide.md"));
    let request = registry.refresh(second, &tree).unwrap();
    assert_eq!(request.path, "docs/guide.md");
    assert_eq!(request.projection, None);

    // The untouched pane keeps its loaded content
    assert!(matches!(
        registry.get(1).unwrap().state,
        SurfaceState::Ready(_)
    ));
}

#[test]
fn test_projection_switch_refetches_same_path() {
    let mut tree = TileTree::new("readme.md");
    let mut registry = PaneRegistry::new();
    let requests = registry.sync_all(&tree);
    complete_all(&mut registry, requests);

    assert!(tree.switch_projection(1, "text.raw"));
    let request = registry.refresh(1, &tree).unwrap();
    assert_eq!(request.path, "readme.md");
    assert_eq!(request.projection.as_deref(), Some("text.raw"));
}

#[test]
fn test_rapid_navigation_keeps_latest_content() {
    let mut tree = TileTree::new("a");
    let mut registry = PaneRegistry::new();
    let first = registry.sync_all(&tree).remove(0);

    tree.navigate_pane(1, "b");
    let second = registry.refresh(1, &tree).unwrap();
    tree.navigate_pane(1, "c");
    let third = registry.refresh(1, &tree).unwrap();

    // Results arrive out of order: c, then the two stale ones
    registry.complete(LoadOutcome {
        pane_id: 1,
        generation: third.generation,
        result: Ok(document("c", "")),
    });
    registry.complete(LoadOutcome {
        pane_id: 1,
        generation: first.generation,
        result: Ok(document("a", "")),
    });
    registry.complete(LoadOutcome {
        pane_id: 1,
        generation: second.generation,
        result: Err(filedeck_protocol::ApiError::Server {
            status: 500,
            message: "late failure".into(),
        }),
    });

    match &registry.get(1).unwrap().state {
        SurfaceState::Ready(doc) => assert_eq!(doc.path, "c"),
        other => panic!("expected content for c, got {other:?}"),
    }
}

#[test]
fn test_last_pane_close_refused_and_registry_unchanged() {
    let mut tree = TileTree::new("");
    let mut registry = PaneRegistry::new();
    let requests = registry.sync_all(&tree);
    complete_all(&mut registry, requests);

    assert!(!tree.close_pane(1));
    assert_eq!(registry.len(), 1);
    assert!(matches!(
        registry.get(1).unwrap().state,
        SurfaceState::Ready(_)
    ));
}
