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
use tokio::sync::{watch, Semaphore};

use super::{Autosave, SaveOutcome, SaveSkip, Snapshot};
use crate::model::fixtures::two_page_document;
use crate::model::{ArchitectureDocument, DocumentId};
use crate::store::{DocumentPatch, DocumentStore, MemoryStore, StoreError};

const DELAY: Duration = Duration::from_millis(2000);

fn titled(title: &str) -> Arc<ArchitectureDocument> {
    let mut doc = two_page_document();
    doc.title = title.to_owned();
    Arc::new(doc)
}

fn snapshot(rev: u64) -> Snapshot {
    Snapshot {
        rev,
        doc: titled(&format!("v{rev}")),
    }
}

fn setup(store: Arc<dyn DocumentStore>) -> (watch::Sender<Snapshot>, Autosave) {
    let (tx, rx) = watch::channel(snapshot(0));
    let autosave = Autosave::spawn(store, two_page_document().id, rx, DELAY);
    (tx, autosave)
}

async fn settle() {
    tokio::time::sleep(Duration::from_millis(1)).await;
}

/// Holds every update until the test hands out a permit.
struct GatedStore {
    inner: MemoryStore,
    gate: Semaphore,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl GatedStore {
    fn new(inner: MemoryStore) -> Self {
        Self {
            inner,
            gate: Semaphore::new(0),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
        }
    }

    fn release_one(&self) {
        self.gate.add_permits(1);
    }
}

#[async_trait]
impl DocumentStore for GatedStore {
    async fn get(&self, id: &DocumentId) -> Result<Option<ArchitectureDocument>, StoreError> {
        self.inner.get(id).await
    }

    async fn update(&self, id: &DocumentId, patch: DocumentPatch) -> Result<(), StoreError> {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
        self.gate.acquire().await.expect("gate open").forget();
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        self.inner.update(id, patch).await
    }
}

#[tokio::test(start_paused = true)]
async fn loaded_snapshot_is_not_saved() {
    let store = MemoryStore::with_document(two_page_document());
    let (_tx, autosave) = setup(Arc::new(store.clone()));

    tokio::time::sleep(Duration::from_secs(10)).await;
    assert_eq!(store.update_count(), 0);
    assert!(!autosave.status().dirty);
}

#[tokio::test(start_paused = true)]
async fn rapid_edits_coalesce_into_one_save_of_latest_snapshot() {
    let store = MemoryStore::with_document(two_page_document());
    let (tx, autosave) = setup(Arc::new(store.clone()));

    for rev in 1..=5 {
        tx.send(snapshot(rev)).unwrap();
        tokio::time::sleep(Duration::from_millis(500)).await;
    }
    assert_eq!(store.update_count(), 0);
    assert!(autosave.status().dirty);

    tokio::time::sleep(Duration::from_millis(2000)).await;
    let updates = store.updates();
    assert_eq!(updates.len(), 1);
    assert_eq!(updates[0].title.as_deref(), Some("v5"));

    let status = autosave.status();
    assert!(!status.dirty);
    assert!(!status.saving);
    assert_eq!(status.last_saved_rev, Some(5));
}

#[tokio::test(start_paused = true)]
async fn only_one_save_is_in_flight_and_later_edits_catch_up() {
    let memory = MemoryStore::with_document(two_page_document());
    let store = Arc::new(GatedStore::new(memory.clone()));
    let (tx, autosave) = setup(store.clone());

    tx.send(snapshot(1)).unwrap();
    tokio::time::sleep(DELAY + Duration::from_millis(100)).await;
    assert!(autosave.status().saving);

    // An edit lands while the first save is blocked; its timer fires into the busy flag.
    tx.send(snapshot(2)).unwrap();
    tokio::time::sleep(DELAY + Duration::from_millis(100)).await;
    assert!(matches!(
        autosave.save_now().await,
        SaveOutcome::Skipped(SaveSkip::InFlight)
    ));
    assert_eq!(store.in_flight.load(Ordering::SeqCst), 1);

    store.release_one();
    settle().await;
    assert_eq!(memory.updates()[0].title.as_deref(), Some("v1"));
    let status = autosave.status();
    assert!(!status.saving);
    assert!(status.dirty);

    tokio::time::sleep(DELAY + Duration::from_millis(100)).await;
    assert!(autosave.status().saving);
    store.release_one();
    settle().await;

    let updates = memory.updates();
    assert_eq!(updates.len(), 2);
    assert_eq!(updates[1].title.as_deref(), Some("v2"));
    assert_eq!(store.max_in_flight.load(Ordering::SeqCst), 1);
    assert!(!autosave.status().dirty);
}

#[tokio::test(start_paused = true)]
async fn manual_save_writes_current_snapshot_immediately() {
    let store = MemoryStore::with_document(two_page_document());
    let (tx, autosave) = setup(Arc::new(store.clone()));

    tx.send(snapshot(1)).unwrap();
    tx.send(snapshot(2)).unwrap();
    let outcome = autosave.save_now().await;
    assert!(matches!(outcome, SaveOutcome::Saved { rev: 2 }));
    assert!(outcome.is_saved());

    // The pending debounce cycle finds nothing left to do.
    tokio::time::sleep(DELAY * 2).await;
    let updates = store.updates();
    assert_eq!(updates.len(), 1);
    assert_eq!(updates[0].title.as_deref(), Some("v2"));
}

#[tokio::test(start_paused = true)]
async fn failed_save_is_logged_and_not_retried() {
    let store = MemoryStore::with_document(two_page_document());
    store.set_fail_updates(true);
    let (tx, autosave) = setup(Arc::new(store.clone()));

    tx.send(snapshot(1)).unwrap();
    tokio::time::sleep(DELAY + Duration::from_millis(100)).await;

    let status = autosave.status();
    assert!(!status.saving);
    assert!(!status.dirty);
    assert!(status.last_error.is_some());

    store.set_fail_updates(false);
    tokio::time::sleep(DELAY * 5).await;
    assert_eq!(store.update_count(), 0);

    tx.send(snapshot(2)).unwrap();
    tokio::time::sleep(DELAY + Duration::from_millis(100)).await;
    assert_eq!(store.update_count(), 1);
    assert_eq!(autosave.status().last_error, None);
}

#[tokio::test(start_paused = true)]
async fn manual_save_failure_is_reported() {
    let store = MemoryStore::with_document(two_page_document());
    store.set_fail_updates(true);
    let (_tx, autosave) = setup(Arc::new(store.clone()));

    let outcome = autosave.save_now().await;
    assert!(matches!(outcome, SaveOutcome::Failed(StoreError::Backend(_))));
    assert!(!autosave.status().saving);
}

#[tokio::test(start_paused = true)]
async fn shutdown_cancels_pending_timer() {
    let store = MemoryStore::with_document(two_page_document());
    let (tx, mut autosave) = setup(Arc::new(store.clone()));

    tx.send(snapshot(1)).unwrap();
    settle().await;
    autosave.shutdown();

    tokio::time::sleep(DELAY * 3).await;
    assert_eq!(store.update_count(), 0);
    assert!(autosave.status().dirty);
}

#[tokio::test(start_paused = true)]
async fn abandoned_manual_save_releases_the_saving_flag() {
    let memory = MemoryStore::with_document(two_page_document());
    let store = Arc::new(GatedStore::new(memory));
    let (_tx, autosave) = setup(store.clone());

    let result = tokio::time::timeout(Duration::from_millis(100), autosave.save_now()).await;
    assert!(result.is_err());

    let status = autosave.status();
    assert!(!status.saving);
    assert_eq!(status.last_error.as_deref(), Some("save interrupted"));
}
