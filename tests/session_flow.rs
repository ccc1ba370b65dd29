// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Wayfinder-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wayfinder and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use rstest::{fixture, rstest};
use tempfile::TempDir;

use wayfinder::autosave::SaveOutcome;
use wayfinder::config::EngineConfig;
use wayfinder::editor::{Draft, PageDraft, PageField};
use wayfinder::model::{
    ArchitectureDocument, Component, ComponentId, DocumentId, Entity, EntityKey, NodeRef, Page,
    PageId, Position,
};
use wayfinder::ops::EdgeKey;
use wayfinder::store::{DocumentPatch, DocumentStore, FolderStore, MemoryStore, StoreError};
use wayfinder::EditorSession;

const SAVE_LATENCY: Duration = Duration::from_millis(300);

fn pid(value: &str) -> PageId {
    PageId::new(value).expect("page id")
}

/// Memory store whose updates take `SAVE_LATENCY` and which tracks overlapping updates.
#[derive(Default)]
struct SlowStore {
    inner: MemoryStore,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

#[async_trait]
impl DocumentStore for SlowStore {
    async fn get(&self, id: &DocumentId) -> Result<Option<ArchitectureDocument>, StoreError> {
        self.inner.get(id).await
    }

    async fn update(&self, id: &DocumentId, patch: DocumentPatch) -> Result<(), StoreError> {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
        tokio::time::sleep(SAVE_LATENCY).await;
        let result = self.inner.update(id, patch).await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        result
    }
}

fn shop() -> ArchitectureDocument {
    let mut doc = ArchitectureDocument::new(DocumentId::new("shop").expect("doc id"), "Shop");
    doc.components
        .push(Component::new(ComponentId::new("button").expect("component id"), "Button"));
    doc.pages.push(Page::new(pid("home"), "Home"));
    doc.pages.push(Page::new(pid("cart"), "Cart"));
    doc.pages.push(Page::new(pid("checkout"), "Checkout"));
    doc
}

fn config() -> EngineConfig {
    EngineConfig {
        autosave_delay_ms: 100,
        ..EngineConfig::default()
    }
}

#[tokio::test(start_paused = true)]
async fn canvas_gestures_flow_into_document_view_and_store() {
    let doc = shop();
    let store = Arc::new(MemoryStore::with_document(doc.clone()));
    let mut session = EditorSession::load(store.clone(), &doc.id, &config())
        .await
        .expect("load");

    let graph = session.view();
    assert_eq!(graph.nodes.len(), 5);
    assert_eq!(
        graph.node("cart").map(|node| node.position),
        Some(Position::new(350.0, 500.0))
    );

    assert!(session.connect(
        pid("home"),
        pid("cart"),
        Some("right".to_owned()),
        Some("left".to_owned())
    ));
    assert!(session.connect(pid("cart"), pid("checkout"), None, None));
    assert!(session.move_node_by_id("cart", Position::new(400.0, 420.0)));

    let graph = session.view();
    assert_eq!(graph.edges.len(), 2);
    assert_eq!(graph.edges[0].id, "e/home/cart/0");
    assert_eq!(graph.edges[0].label, "Manual Connection");
    assert_eq!(
        graph.node("cart").map(|node| node.position),
        Some(Position::new(400.0, 420.0))
    );

    // Removing the edge by its endpoints and handles.
    assert!(session.disconnect(vec![EdgeKey::new(pid("home"), pid("cart"))
        .with_handles(Some("right".to_owned()), Some("left".to_owned()))]));
    assert_eq!(session.view().edges.len(), 1);

    tokio::time::sleep(Duration::from_millis(150)).await;

    assert_eq!(store.update_count(), 1);
    let saved = store.snapshot(&doc.id).expect("saved");
    assert_eq!(&saved, session.document().as_ref());
    assert_eq!(session.status().last_saved_rev, Some(session.revision()));
}

#[tokio::test(start_paused = true)]
async fn edits_during_a_slow_save_are_saved_afterwards() {
    let doc = shop();
    let store = Arc::new(SlowStore::default());
    store.inner.insert(doc.clone());
    let mut session = EditorSession::new(doc.clone(), store.clone(), &config());

    let mut first = PageDraft::new(session.document().page(&pid("home")).expect("home"));
    first.set_field(PageField::Name, "Start".to_owned());
    let op = first.to_op(session.document());
    assert!(session.apply(op));
    session.move_node(NodeRef::Theme, Position::new(1.0, 1.0));

    // First save starts at 100ms and is still running at 150ms.
    tokio::time::sleep(Duration::from_millis(150)).await;
    assert!(session.status().saving);

    let mut draft = PageDraft::new(session.document().page(&pid("cart")).expect("cart"));
    draft.set_field(PageField::Route, "/cart".to_owned());
    let op = draft.to_op(session.document());
    assert!(session.apply(op));

    // A manual save while the first is in flight is refused.
    assert!(matches!(session.save_now().await, SaveOutcome::Skipped(_)));

    tokio::time::sleep(Duration::from_secs(2)).await;

    assert_eq!(store.max_in_flight.load(Ordering::SeqCst), 1);
    assert_eq!(store.inner.update_count(), 2);
    let saved = store.inner.snapshot(&doc.id).expect("saved");
    assert_eq!(saved.page(&pid("cart")).expect("cart").main.route, "/cart");
    assert_eq!(saved.page(&pid("home")).expect("home").main.name, "Start");
    assert!(!session.status().dirty);
    assert!(!session.status().saving);
}

#[tokio::test(start_paused = true)]
async fn deleting_a_page_keeps_dangling_navigation_hidden() {
    let doc = shop();
    let store = Arc::new(MemoryStore::with_document(doc.clone()));
    let mut session = EditorSession::new(doc, store.clone(), &config());

    session.connect(pid("home"), pid("checkout"), None, None);
    session.connect(pid("cart"), pid("checkout"), None, None);
    assert!(session.delete(EntityKey::Page(pid("checkout"))));
    assert!(!session.delete(EntityKey::Page(pid("checkout"))));

    assert!(session.view().edges.is_empty());
    let home = session.document().page(&pid("home")).expect("home");
    assert!(home.navigates_to(&pid("checkout")));

    // Re-creating the page brings the old edges back.
    session.upsert(Entity::Page(Page::new(pid("checkout"), "Checkout v2")));
    assert_eq!(session.view().edges.len(), 2);
}

#[fixture]
fn folder() -> (TempDir, FolderStore) {
    let tmp = tempfile::Builder::new()
        .prefix("wayfinder-session")
        .tempdir()
        .expect("temp dir");
    let store = FolderStore::new(tmp.path().join("docs"));
    (tmp, store)
}

#[rstest]
#[tokio::test]
async fn manual_save_round_trips_through_folder_store(folder: (TempDir, FolderStore)) {
    let (_tmp, store) = folder;
    let doc = shop();
    store.save_document(&doc).expect("seed document");

    let shared: Arc<dyn DocumentStore> = Arc::new(store.clone());
    let mut session = EditorSession::load(shared, &doc.id, &config())
        .await
        .expect("load");
    session.connect(pid("home"), pid("cart"), None, None);
    session.move_node(NodeRef::Page(pid("home")), Position::new(12.5, -3.0));

    let outcome = session.save_now().await;
    assert!(outcome.is_saved(), "unexpected outcome: {outcome:?}");
    let expected = session.close();

    let reloaded = store
        .load_document(&doc.id)
        .expect("read")
        .expect("document");
    assert_eq!(&reloaded, expected.as_ref());
    assert_eq!(
        reloaded.page(&pid("home")).expect("home").navigation[0].trigger_type,
        "click"
    );
}
