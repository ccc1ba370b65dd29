// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Wayfinder-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wayfinder and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Debounced autosave for an editor session.
//!
//! Every snapshot the session publishes after the initial load marks the document dirty and
//! re-arms a single debounce deadline. When the deadline passes, the snapshot that is current at
//! that moment is written through the [`DocumentStore`]. At most one write is in flight at a
//! time; manual saves share the same exclusion and are skipped, not queued, while a save runs.

mod state;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::sync::{watch, Notify};
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};

use crate::model::{ArchitectureDocument, DocumentId};
use crate::store::{DocumentPatch, DocumentStore, StoreError};

pub use state::{SaveSkip, SaveState, SaveTicket, SaveTrigger};

pub const DEFAULT_AUTOSAVE_DELAY: Duration = Duration::from_millis(2000);

/// One published document revision.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub rev: u64,
    pub doc: Arc<ArchitectureDocument>,
}

#[derive(Debug)]
pub enum SaveOutcome {
    Saved { rev: u64 },
    Skipped(SaveSkip),
    Failed(StoreError),
}

impl SaveOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, Self::Saved { .. })
    }
}

/// Point-in-time view of the save bookkeeping, for status indicators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveStatus {
    pub dirty: bool,
    pub saving: bool,
    pub last_saved_rev: Option<u64>,
    pub last_error: Option<String>,
}

struct Shared {
    store: Arc<dyn DocumentStore>,
    doc_id: DocumentId,
    state: Mutex<SaveState>,
    latest: watch::Receiver<Snapshot>,
    rearm: Notify,
}

impl Shared {
    fn state(&self) -> MutexGuard<'_, SaveState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Picks the current snapshot and claims the saving flag for it.
    fn begin(&self, trigger: SaveTrigger) -> Result<(SaveTicket, Snapshot), SaveSkip> {
        let snapshot = self.latest.borrow().clone();
        let ticket = self.state().begin(trigger, snapshot.rev)?;
        Ok((ticket, snapshot))
    }
}

/// Releases the saving flag when the save ends, however it ends.
struct InFlight<'a> {
    shared: &'a Shared,
    ticket: Option<SaveTicket>,
}

impl InFlight<'_> {
    fn complete(mut self, result: Result<(), String>) {
        if let Some(ticket) = self.ticket.take() {
            self.release(ticket, result);
        }
    }

    fn release(&self, ticket: SaveTicket, result: Result<(), String>) {
        let still_dirty = self.shared.state().finish(ticket, result);
        if still_dirty {
            self.shared.rearm.notify_one();
        }
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if let Some(ticket) = self.ticket.take() {
            self.release(ticket, Err("save interrupted".to_owned()));
        }
    }
}

async fn persist(
    shared: &Shared,
    ticket: SaveTicket,
    snapshot: Snapshot,
) -> Result<u64, StoreError> {
    let rev = ticket.rev();
    let trigger = ticket.trigger();
    let guard = InFlight {
        shared,
        ticket: Some(ticket),
    };

    tracing::debug!(doc_id = %shared.doc_id, rev, ?trigger, "saving document");
    let patch = DocumentPatch::from_document(&snapshot.doc);
    match shared.store.update(&shared.doc_id, patch).await {
        Ok(()) => {
            guard.complete(Ok(()));
            tracing::info!(doc_id = %shared.doc_id, rev, ?trigger, "document saved");
            Ok(rev)
        }
        Err(err) => {
            guard.complete(Err(err.to_string()));
            tracing::warn!(
                doc_id = %shared.doc_id,
                rev,
                ?trigger,
                error = %err,
                "document save failed"
            );
            Err(err)
        }
    }
}

/// Autosave coordinator for one document.
///
/// Must be created inside a tokio runtime. Dropping it cancels the pending debounce timer; a
/// save that already started runs to completion.
pub struct Autosave {
    shared: Arc<Shared>,
    driver: Option<JoinHandle<()>>,
}

impl Autosave {
    pub fn spawn(
        store: Arc<dyn DocumentStore>,
        doc_id: DocumentId,
        snapshots: watch::Receiver<Snapshot>,
        delay: Duration,
    ) -> Self {
        let loaded_rev = snapshots.borrow().rev;
        let shared = Arc::new(Shared {
            store,
            doc_id,
            state: Mutex::new(SaveState::new(loaded_rev)),
            latest: snapshots.clone(),
            rearm: Notify::new(),
        });
        let driver = tokio::spawn(run_debounce(Arc::clone(&shared), snapshots, delay));
        Self {
            shared,
            driver: Some(driver),
        }
    }

    pub fn doc_id(&self) -> &DocumentId {
        &self.shared.doc_id
    }

    /// Saves the current snapshot now, unless a save is already in flight.
    pub async fn save_now(&self) -> SaveOutcome {
        let (ticket, snapshot) = match self.shared.begin(SaveTrigger::Manual) {
            Ok(started) => started,
            Err(skip) => {
                tracing::debug!(doc_id = %self.shared.doc_id, ?skip, "manual save skipped");
                return SaveOutcome::Skipped(skip);
            }
        };
        match persist(&self.shared, ticket, snapshot).await {
            Ok(rev) => SaveOutcome::Saved { rev },
            Err(err) => SaveOutcome::Failed(err),
        }
    }

    pub fn status(&self) -> SaveStatus {
        let state = self.shared.state();
        SaveStatus {
            dirty: state.is_dirty(),
            saving: state.is_saving(),
            last_saved_rev: state.last_saved_rev(),
            last_error: state.last_error().map(ToOwned::to_owned),
        }
    }

    /// Cancels the debounce timer. Pending unsaved edits stay unsaved.
    pub fn shutdown(&mut self) {
        if let Some(driver) = self.driver.take() {
            driver.abort();
        }
    }
}

impl Drop for Autosave {
    fn drop(&mut self) {
        self.shutdown();
    }
}

async fn run_debounce(
    shared: Arc<Shared>,
    mut snapshots: watch::Receiver<Snapshot>,
    delay: Duration,
) {
    // The loaded revision is not an edit.
    snapshots.borrow_and_update();
    let mut deadline: Option<Instant> = None;

    loop {
        tokio::select! {
            changed = snapshots.changed() => {
                if changed.is_err() {
                    break;
                }
                let rev = snapshots.borrow_and_update().rev;
                if shared.state().mark_dirty(rev) {
                    deadline = Some(Instant::now() + delay);
                }
            }
            () = shared.rearm.notified() => {
                deadline = Some(Instant::now() + delay);
            }
            () = sleep_until(deadline.unwrap_or_else(Instant::now)), if deadline.is_some() => {
                deadline = None;
                match shared.begin(SaveTrigger::Debounce) {
                    Ok((ticket, snapshot)) => {
                        let shared = Arc::clone(&shared);
                        tokio::spawn(async move {
                            // Failures are logged inside `persist`.
                            let _ = persist(&shared, ticket, snapshot).await;
                        });
                    }
                    Err(skip) => {
                        tracing::trace!(doc_id = %shared.doc_id, ?skip, "debounced save skipped");
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests;
