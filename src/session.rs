// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Wayfinder-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wayfinder and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Editing session: owns the current snapshot and wires gestures to ops, projection and autosave.

use std::fmt;
use std::sync::{Arc, OnceLock};

use tokio::sync::watch;

use crate::autosave::{Autosave, SaveOutcome, SaveStatus, Snapshot};
use crate::config::EngineConfig;
use crate::model::{ArchitectureDocument, DocumentId, Entity, EntityKey, NodeRef, PageId, Position};
use crate::ops::{apply_op, Delta, EdgeKey, Op};
use crate::store::{DocumentStore, StoreError};
use crate::view::{project_with, LayoutDefaults, ViewGraph};

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("document {id} not found")]
    NotFound { id: DocumentId },
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Passed to graph-change listeners after every applied change.
#[derive(Debug, Clone)]
pub struct GraphChange {
    pub rev: u64,
    pub op: &'static str,
    pub delta: Delta,
    pub graph: Arc<ViewGraph>,
}

type Listener = Box<dyn FnMut(&GraphChange) + Send + Sync>;

pub struct EditorSession {
    doc: Arc<ArchitectureDocument>,
    rev: u64,
    layout: LayoutDefaults,
    view: OnceLock<Arc<ViewGraph>>,
    snapshots: watch::Sender<Snapshot>,
    autosave: Autosave,
    listeners: Vec<Listener>,
}

impl fmt::Debug for EditorSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EditorSession")
            .field("doc_id", &self.doc.id)
            .field("rev", &self.rev)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl EditorSession {
    /// Loads `id` from `store` and starts autosaving back into it.
    pub async fn load(
        store: Arc<dyn DocumentStore>,
        id: &DocumentId,
        config: &EngineConfig,
    ) -> Result<Self, SessionError> {
        let doc = store
            .get(id)
            .await?
            .ok_or_else(|| SessionError::NotFound { id: id.clone() })?;
        tracing::info!(
            doc_id = %id,
            components = doc.components.len(),
            pages = doc.pages.len(),
            "document loaded"
        );
        Ok(Self::new(doc, store, config))
    }

    /// Starts a session on an in-memory document. Must run inside a tokio runtime.
    ///
    /// The initial snapshot is revision 0 and is not considered an edit.
    pub fn new(
        doc: ArchitectureDocument,
        store: Arc<dyn DocumentStore>,
        config: &EngineConfig,
    ) -> Self {
        let doc = Arc::new(doc);
        let (snapshots, receiver) = watch::channel(Snapshot {
            rev: 0,
            doc: Arc::clone(&doc),
        });
        let autosave = Autosave::spawn(store, doc.id.clone(), receiver, config.autosave_delay());
        Self {
            doc,
            rev: 0,
            layout: config.layout.clone(),
            view: OnceLock::new(),
            snapshots,
            autosave,
            listeners: Vec::new(),
        }
    }

    pub fn document(&self) -> &Arc<ArchitectureDocument> {
        &self.doc
    }

    pub fn revision(&self) -> u64 {
        self.rev
    }

    /// The projection of the current snapshot, computed at most once per revision.
    pub fn view(&self) -> Arc<ViewGraph> {
        Arc::clone(
            self.view
                .get_or_init(|| Arc::new(project_with(&self.doc, &self.layout))),
        )
    }

    pub fn on_graph_change(&mut self, listener: impl FnMut(&GraphChange) + Send + Sync + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn connect(
        &mut self,
        source: PageId,
        target: PageId,
        source_handle: Option<String>,
        target_handle: Option<String>,
    ) -> bool {
        self.apply(Op::Connect {
            source,
            target,
            source_handle,
            target_handle,
        })
    }

    pub fn disconnect(&mut self, edges: Vec<EdgeKey>) -> bool {
        self.apply(Op::Disconnect { edges })
    }

    pub fn move_node(&mut self, node: NodeRef, position: Position) -> bool {
        self.apply(Op::MoveNode { node, position })
    }

    /// Moves the node the canvas knows as `node_id`. Unknown ids are ignored.
    pub fn move_node_by_id(&mut self, node_id: &str, position: Position) -> bool {
        match NodeRef::resolve(&self.doc, node_id) {
            Some(node) => self.move_node(node, position),
            None => {
                tracing::debug!(doc_id = %self.doc.id, node_id, "move ignored: unknown node");
                false
            }
        }
    }

    pub fn upsert(&mut self, entity: Entity) -> bool {
        self.apply(Op::UpsertEntity(entity))
    }

    pub fn delete(&mut self, key: EntityKey) -> bool {
        self.apply(Op::DeleteEntity(key))
    }

    /// Applies `op` to the current snapshot. Returns whether the document changed.
    pub fn apply(&mut self, op: Op) -> bool {
        let mutation = apply_op(&self.doc, &op);
        if !mutation.changed {
            tracing::trace!(doc_id = %self.doc.id, op = op.name(), "op was a no-op");
            return false;
        }

        self.rev += 1;
        self.doc = mutation.next;
        self.view = OnceLock::new();
        tracing::debug!(doc_id = %self.doc.id, op = op.name(), rev = self.rev, "document changed");

        self.snapshots.send_replace(Snapshot {
            rev: self.rev,
            doc: Arc::clone(&self.doc),
        });

        if !self.listeners.is_empty() {
            let change = GraphChange {
                rev: self.rev,
                op: op.name(),
                delta: mutation.delta,
                graph: self.view(),
            };
            for listener in &mut self.listeners {
                listener(&change);
            }
        }
        true
    }

    /// Saves right away instead of waiting for the debounce timer.
    pub async fn save_now(&self) -> SaveOutcome {
        self.autosave.save_now().await
    }

    pub fn status(&self) -> SaveStatus {
        self.autosave.status()
    }

    /// Stops autosaving. A save already in flight still completes.
    pub fn close(mut self) -> Arc<ArchitectureDocument> {
        self.autosave.shutdown();
        tracing::debug!(doc_id = %self.doc.id, rev = self.rev, "session closed");
        Arc::clone(&self.doc)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::time::Duration;

    use super::*;
    use crate::model::fixtures::{pid, storefront_document, two_page_document};
    use crate::model::Page;
    use crate::store::MemoryStore;

    fn config() -> EngineConfig {
        EngineConfig {
            autosave_delay_ms: 100,
            ..EngineConfig::default()
        }
    }

    fn session_with(doc: ArchitectureDocument) -> (EditorSession, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::with_document(doc.clone()));
        let session = EditorSession::new(doc, store.clone(), &config());
        (session, store)
    }

    #[tokio::test]
    async fn load_reports_missing_documents() {
        let store: Arc<dyn DocumentStore> = Arc::new(MemoryStore::new());
        let id = DocumentId::new("nope").expect("id");

        let err = EditorSession::load(store, &id, &config())
            .await
            .expect_err("missing");
        assert!(matches!(err, SessionError::NotFound { id: ref missing } if missing == &id));
    }

    #[tokio::test]
    async fn load_starts_at_revision_zero() {
        let doc = storefront_document();
        let store: Arc<dyn DocumentStore> = Arc::new(MemoryStore::with_document(doc.clone()));

        let session = EditorSession::load(store, &doc.id, &config())
            .await
            .expect("load");

        assert_eq!(session.revision(), 0);
        assert_eq!(session.document().as_ref(), &doc);
        assert!(!session.status().dirty);
    }

    #[tokio::test]
    async fn changes_bump_revision_and_no_ops_do_not() {
        let (mut session, _store) = session_with(two_page_document());

        assert!(session.connect(pid("a"), pid("b"), None, None));
        assert_eq!(session.revision(), 1);
        assert!(!session.connect(pid("a"), pid("b"), Some("right".to_owned()), None));
        assert_eq!(session.revision(), 1);

        assert!(session.move_node_by_id("theme", Position::new(9.0, 9.0)));
        assert!(!session.move_node_by_id("unknown", Position::new(9.0, 9.0)));
        assert_eq!(session.revision(), 2);
    }

    #[tokio::test]
    async fn view_is_cached_per_revision() {
        let (mut session, _store) = session_with(two_page_document());

        let first = session.view();
        assert!(Arc::ptr_eq(&first, &session.view()));

        session.move_node(NodeRef::Page(pid("a")), Position::new(1.0, 2.0));
        let second = session.view();
        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(
            second.node("a").map(|node| node.position),
            Some(Position::new(1.0, 2.0))
        );
    }

    #[tokio::test]
    async fn listeners_see_each_change() {
        let (mut session, _store) = session_with(two_page_document());
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        session.on_graph_change(move |change| {
            sink.lock()
                .expect("listener lock")
                .push((change.rev, change.op, change.graph.edges.len()));
        });

        session.connect(pid("a"), pid("b"), None, None);
        session.connect(pid("a"), pid("b"), None, None);
        session.delete(EntityKey::Page(pid("b")));

        let seen = seen.lock().expect("listener lock").clone();
        assert_eq!(seen, vec![(1, "connect", 1), (2, "delete_entity", 0)]);
    }

    #[tokio::test]
    async fn delete_hides_edges_without_touching_navigation() {
        let (mut session, _store) = session_with(storefront_document());

        assert!(session.delete(EntityKey::Page(pid("product"))));

        let home = session.document().page(&pid("home")).expect("home");
        assert!(home.navigates_to(&pid("product")));
        assert!(session.view().edges.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn edits_are_autosaved_after_the_quiet_period() {
        let (mut session, store) = session_with(two_page_document());

        session.upsert(Entity::Page(Page::new(pid("c"), "Cart")));
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(session.status().dirty);
        assert_eq!(store.update_count(), 0);

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(store.update_count(), 1);
        let saved = store.snapshot(&session.document().id).expect("saved");
        assert!(saved.page(&pid("c")).is_some());
        assert!(!session.status().dirty);
        assert_eq!(session.status().last_saved_rev, Some(1));
    }

    #[tokio::test(start_paused = true)]
    async fn close_drops_pending_autosave() {
        let (mut session, store) = session_with(two_page_document());
        session.connect(pid("a"), pid("b"), None, None);

        let doc = session.close();
        tokio::time::sleep(Duration::from_secs(5)).await;

        assert!(doc.page(&pid("a")).expect("a").navigates_to(&pid("b")));
        assert_eq!(store.update_count(), 0);
    }

    #[tokio::test]
    async fn manual_save_persists_current_snapshot() {
        let (mut session, store) = session_with(two_page_document());
        session.connect(pid("a"), pid("b"), None, None);

        let outcome = session.save_now().await;

        assert!(matches!(outcome, SaveOutcome::Saved { rev: 1 }));
        let saved = store.snapshot(&session.document().id).expect("saved");
        assert!(saved.page(&pid("a")).expect("a").navigates_to(&pid("b")));
    }
}
