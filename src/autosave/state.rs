// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Wayfinder-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wayfinder and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// What asked for a save.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveTrigger {
    Debounce,
    Manual,
}

/// Why a save request did not start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveSkip {
    /// Another save is still in flight.
    InFlight,
    /// Nothing changed since the last save was sent.
    Clean,
}

/// Proof that a save was started; handed back to [`SaveState::finish`].
#[derive(Debug, PartialEq, Eq)]
#[must_use]
pub struct SaveTicket {
    rev: u64,
    trigger: SaveTrigger,
}

impl SaveTicket {
    /// Revision of the snapshot this save carries.
    pub fn rev(&self) -> u64 {
        self.rev
    }

    pub fn trigger(&self) -> SaveTrigger {
        self.trigger
    }
}

/// Save bookkeeping for one document: a dirty flag, a saving flag and revision counters.
///
/// Revisions are the session's snapshot revisions. `edit_rev` is the newest one observed,
/// `sent_rev` the newest one handed to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveState {
    dirty: bool,
    saving: bool,
    edit_rev: u64,
    sent_rev: u64,
    last_saved_rev: Option<u64>,
    last_error: Option<String>,
}

impl SaveState {
    /// State right after loading revision `loaded_rev`, which counts as persisted.
    pub fn new(loaded_rev: u64) -> Self {
        Self {
            dirty: false,
            saving: false,
            edit_rev: loaded_rev,
            sent_rev: loaded_rev,
            last_saved_rev: None,
            last_error: None,
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn edit_rev(&self) -> u64 {
        self.edit_rev
    }

    pub fn last_saved_rev(&self) -> Option<u64> {
        self.last_saved_rev
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Records a new snapshot revision. Returns `true` when it still needs saving, i.e. the
    /// debounce timer should be (re)armed.
    pub fn mark_dirty(&mut self, rev: u64) -> bool {
        self.edit_rev = self.edit_rev.max(rev);
        if rev <= self.sent_rev {
            return false;
        }
        self.dirty = true;
        true
    }

    /// Checks and sets the saving flag in one step.
    ///
    /// Debounced saves also require the dirty flag; manual saves only require that no other
    /// save is in flight.
    pub fn begin(&mut self, trigger: SaveTrigger, rev: u64) -> Result<SaveTicket, SaveSkip> {
        if self.saving {
            return Err(SaveSkip::InFlight);
        }
        if trigger == SaveTrigger::Debounce && !self.dirty {
            return Err(SaveSkip::Clean);
        }
        self.saving = true;
        self.sent_rev = self.sent_rev.max(rev);
        Ok(SaveTicket { rev, trigger })
    }

    /// Completes a save, successful or not.
    ///
    /// Failed saves are not retried; the document only becomes dirty again through a newer
    /// revision, including one that arrived while this save was in flight. Returns whether the
    /// document is still dirty.
    pub fn finish(&mut self, ticket: SaveTicket, result: Result<(), String>) -> bool {
        self.saving = false;
        self.dirty = self.edit_rev > ticket.rev;
        match result {
            Ok(()) => {
                self.last_saved_rev = Some(ticket.rev);
                self.last_error = None;
            }
            Err(message) => self.last_error = Some(message),
        }
        self.dirty
    }
}
