// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Wayfinder-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wayfinder and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Document persistence collaborators.
//!
//! The synchronization engine only talks to a [`DocumentStore`]: fetch a document by id, write a
//! partial update. Writes are latest-write-wins with no concurrency token; the autosave
//! coordinator keeps at most one of its own writes in flight.

pub mod folder;
pub mod memory;

use std::io;
use std::path::PathBuf;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::model::{ArchitectureDocument, Component, DocumentId, Page, Theme};

pub use folder::{FolderStore, WriteDurability};
pub use memory::MemoryStore;

#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn get(&self, id: &DocumentId) -> Result<Option<ArchitectureDocument>, StoreError>;

    async fn update(&self, id: &DocumentId, patch: DocumentPatch) -> Result<(), StoreError>;
}

/// Partial document update. `None` fields are left as stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<Vec<Component>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<Vec<Page>>,
}

impl DocumentPatch {
    /// Patch carrying every editable part of `doc`.
    pub fn from_document(doc: &ArchitectureDocument) -> Self {
        Self {
            title: Some(doc.title.clone()),
            theme: Some(doc.theme.clone()),
            components: Some(doc.components.clone()),
            pages: Some(doc.pages.clone()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.theme.is_none()
            && self.components.is_none()
            && self.pages.is_none()
    }

    pub fn apply_to(self, doc: &mut ArchitectureDocument) {
        if let Some(title) = self.title {
            doc.title = title;
        }
        if let Some(theme) = self.theme {
            doc.theme = theme;
        }
        if let Some(components) = self.components {
            doc.components = components;
        }
        if let Some(pages) = self.pages {
            doc.pages = pages;
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("io error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid document JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("document not found (id={id})")]
    NotFound { id: DocumentId },
    #[error("store backend error: {0}")]
    Backend(String),
}
