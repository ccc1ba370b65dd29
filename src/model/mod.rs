// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Wayfinder-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wayfinder and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! An architecture document holds a theme, components and pages; page navigation entries are the
//! only stored connectivity.

pub mod document;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod ids;
pub mod node_ref;

pub use document::{
    ArchitectureDocument, Component, ComponentAdvanced, ComponentMain, NavigationEdge, Page,
    PageAdvanced, PageMain, Position, Theme, ThemeAdvanced, ThemeMain,
};
pub use ids::{ComponentId, DocumentId, Id, IdError, IdTag, PageId, THEME_NODE_ID};
pub use node_ref::{Entity, EntityKey, EntityKind, NodeRef};
