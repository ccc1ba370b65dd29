// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Wayfinder-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wayfinder and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::{DocumentPatch, DocumentStore, StoreError};
use crate::model::{ArchitectureDocument, DocumentId};

/// In-process store. Cloning shares the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<MemoryState>>,
}

#[derive(Debug, Default)]
struct MemoryState {
    documents: BTreeMap<DocumentId, ArchitectureDocument>,
    updates: Vec<DocumentPatch>,
    fail_updates: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(doc: ArchitectureDocument) -> Self {
        let store = Self::new();
        store.insert(doc);
        store
    }

    pub fn insert(&self, doc: ArchitectureDocument) {
        let mut state = self.inner.lock().expect("memory store lock poisoned");
        state.documents.insert(doc.id.clone(), doc);
    }

    pub fn snapshot(&self, id: &DocumentId) -> Option<ArchitectureDocument> {
        let state = self.inner.lock().expect("memory store lock poisoned");
        state.documents.get(id).cloned()
    }

    /// Every patch accepted so far, oldest first.
    pub fn updates(&self) -> Vec<DocumentPatch> {
        let state = self.inner.lock().expect("memory store lock poisoned");
        state.updates.clone()
    }

    pub fn update_count(&self) -> usize {
        let state = self.inner.lock().expect("memory store lock poisoned");
        state.updates.len()
    }

    /// Makes subsequent updates fail with a backend error until reset.
    pub fn set_fail_updates(&self, fail: bool) {
        let mut state = self.inner.lock().expect("memory store lock poisoned");
        state.fail_updates = fail;
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn get(&self, id: &DocumentId) -> Result<Option<ArchitectureDocument>, StoreError> {
        Ok(self.snapshot(id))
    }

    async fn update(&self, id: &DocumentId, patch: DocumentPatch) -> Result<(), StoreError> {
        let mut state = self.inner.lock().expect("memory store lock poisoned");
        if state.fail_updates {
            return Err(StoreError::Backend("update rejected".to_owned()));
        }
        let Some(doc) = state.documents.get_mut(id) else {
            return Err(StoreError::NotFound { id: id.clone() });
        };
        patch.clone().apply_to(doc);
        state.updates.push(patch);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::MemoryStore;
    use crate::model::fixtures::two_page_document;
    use crate::model::DocumentId;
    use crate::store::{DocumentPatch, DocumentStore, StoreError};

    #[tokio::test]
    async fn update_applies_patch_and_records_it() {
        let doc = two_page_document();
        let store = MemoryStore::with_document(doc.clone());

        let patch = DocumentPatch {
            title: Some("Renamed".to_owned()),
            ..DocumentPatch::default()
        };
        store.update(&doc.id, patch.clone()).await.expect("update");

        let stored = store.get(&doc.id).await.expect("get").expect("document");
        assert_eq!(stored.title, "Renamed");
        assert_eq!(stored.pages, doc.pages);
        assert_eq!(store.updates(), vec![patch]);
    }

    #[tokio::test]
    async fn update_of_unknown_document_fails() {
        let store = MemoryStore::new();
        let id = DocumentId::new("missing").unwrap();
        let err = store
            .update(&id, DocumentPatch::default())
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
        assert!(store.get(&id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn failing_updates_are_not_recorded() {
        let doc = two_page_document();
        let store = MemoryStore::with_document(doc.clone());
        store.set_fail_updates(true);

        let err = store
            .update(&doc.id, DocumentPatch::from_document(&doc))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Backend(_)));
        assert_eq!(store.update_count(), 0);
    }
}
