// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Wayfinder-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wayfinder and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Property editors for theme, component and page entities.
//!
//! A draft owns a copy of the entity it edits; the document snapshot is never touched until the
//! draft is committed and the resulting op is applied. Canvas-owned state (positions and page
//! navigation) is taken from the document at commit time, so a drag or connect that happened
//! while the editor was open is not rolled back.

mod drafts;

use std::fmt;

use async_trait::async_trait;

use crate::model::{ArchitectureDocument, Entity, EntityKey, EntityKind};
use crate::ops::Op;

pub use drafts::{ComponentDraft, ComponentField, PageDraft, PageField, ThemeDraft, ThemeField};

/// Everything the recommendation service needs to propose a value for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionRequest {
    pub kind: EntityKind,
    pub target_name: String,
    pub context_text: String,
    pub global_context: String,
    pub field: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SuggestError {
    #[error("suggestion service unavailable: {0}")]
    Unavailable(String),
    #[error("suggestion service returned an empty value")]
    Empty,
}

/// External recommendation collaborator. Timeouts and retries are its own business.
#[async_trait]
pub trait SuggestionProvider: Send + Sync {
    async fn suggest(&self, request: &SuggestionRequest) -> Result<String, SuggestError>;
}

/// Common surface of the per-kind drafts.
pub trait Draft {
    type Field: Copy + fmt::Debug;

    fn kind(&self) -> EntityKind;

    /// Display name of the entity being edited.
    fn target_name(&self) -> &str;

    /// Short description of the entity's current field values.
    fn context_text(&self) -> String;

    fn field_name(field: Self::Field) -> &'static str;

    fn field(&self, field: Self::Field) -> &str;

    fn set_field(&mut self, field: Self::Field, value: String);

    /// The full replacement entity, with canvas-owned state taken from `doc`.
    fn commit_onto(&self, doc: &ArchitectureDocument) -> Entity;

    fn suggestion_error(&self) -> Option<&str>;

    fn set_suggestion_error(&mut self, error: Option<String>);

    fn to_op(&self, doc: &ArchitectureDocument) -> Op {
        Op::UpsertEntity(self.commit_onto(doc))
    }
}

/// Asks `provider` for a value of `field` and writes it into the draft.
///
/// On failure only the draft's inline error is set; every field keeps its value.
pub async fn request_suggestion<D: Draft>(
    draft: &mut D,
    field: D::Field,
    provider: &dyn SuggestionProvider,
    global_context: &str,
) -> Result<(), SuggestError> {
    let request = SuggestionRequest {
        kind: draft.kind(),
        target_name: draft.target_name().to_owned(),
        context_text: draft.context_text(),
        global_context: global_context.to_owned(),
        field: D::field_name(field),
    };

    let result = provider.suggest(&request).await.and_then(|value| {
        let value = value.trim();
        if value.is_empty() {
            Err(SuggestError::Empty)
        } else {
            Ok(value.to_owned())
        }
    });

    match result {
        Ok(value) => {
            draft.set_field(field, value);
            draft.set_suggestion_error(None);
            Ok(())
        }
        Err(err) => {
            tracing::debug!(
                kind = %request.kind,
                field = request.field,
                error = %err,
                "suggestion failed"
            );
            draft.set_suggestion_error(Some(err.to_string()));
            Err(err)
        }
    }
}

/// A delete that still needs the user's confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct DeleteRequest {
    key: EntityKey,
    label: String,
}

impl DeleteRequest {
    pub fn new(key: EntityKey, label: impl Into<String>) -> Self {
        Self {
            key,
            label: label.into(),
        }
    }

    /// Delete request for the component or page named by `key`, labelled from `doc`.
    pub fn for_entity(doc: &ArchitectureDocument, key: EntityKey) -> Self {
        let label = match &key {
            EntityKey::Component(id) => doc.component(id).map(|c| c.main.name.clone()),
            EntityKey::Page(id) => doc.page(id).map(|p| p.main.name.clone()),
        }
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| key.node_ref().node_id().to_owned());
        Self::new(key, label)
    }

    pub fn key(&self) -> &EntityKey {
        &self.key
    }

    pub fn prompt(&self) -> String {
        let kind = match self.key {
            EntityKey::Component(_) => "component",
            EntityKey::Page(_) => "page",
        };
        format!("Delete {kind} \"{}\"? This cannot be undone.", self.label)
    }

    pub fn confirm(self) -> Op {
        Op::DeleteEntity(self.key)
    }

    pub fn cancel(self) {}
}
