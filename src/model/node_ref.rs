// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Wayfinder-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wayfinder and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::document::{ArchitectureDocument, Component, Page, Theme};
use super::ids::{ComponentId, PageId, THEME_NODE_ID};

/// The kind of entity a canvas node stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Theme,
    Component,
    Page,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Theme => "theme",
            Self::Component => "component",
            Self::Page => "page",
        })
    }
}

/// Typed identity of a canvas node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "lowercase")]
pub enum NodeRef {
    Theme,
    Component(ComponentId),
    Page(PageId),
}

impl NodeRef {
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Theme => EntityKind::Theme,
            Self::Component(_) => EntityKind::Component,
            Self::Page(_) => EntityKind::Page,
        }
    }

    /// The untyped id the canvas uses for this node.
    pub fn node_id(&self) -> &str {
        match self {
            Self::Theme => THEME_NODE_ID,
            Self::Component(id) => id.as_str(),
            Self::Page(id) => id.as_str(),
        }
    }

    /// Resolves an untyped canvas id against `doc`.
    ///
    /// `"theme"` always names the theme; otherwise components are looked up before pages.
    pub fn resolve(doc: &ArchitectureDocument, node_id: &str) -> Option<Self> {
        if node_id == THEME_NODE_ID {
            return Some(Self::Theme);
        }
        if let Some(component) = doc
            .components
            .iter()
            .find(|c| c.component_id.as_str() == node_id)
        {
            return Some(Self::Component(component.component_id.clone()));
        }
        doc.pages
            .iter()
            .find(|p| p.page_id.as_str() == node_id)
            .map(|p| Self::Page(p.page_id.clone()))
    }
}

impl fmt::Display for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind(), self.node_id())
    }
}

/// A full replacement entity, as produced by the property editors.
#[derive(Debug, Clone, PartialEq)]
pub enum Entity {
    Theme(Theme),
    Component(Component),
    Page(Page),
}

impl Entity {
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Theme(_) => EntityKind::Theme,
            Self::Component(_) => EntityKind::Component,
            Self::Page(_) => EntityKind::Page,
        }
    }

    pub fn node_ref(&self) -> NodeRef {
        match self {
            Self::Theme(_) => NodeRef::Theme,
            Self::Component(c) => NodeRef::Component(c.component_id.clone()),
            Self::Page(p) => NodeRef::Page(p.page_id.clone()),
        }
    }
}

/// A deletable entity. The theme is a singleton and has no key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EntityKey {
    Component(ComponentId),
    Page(PageId),
}

impl EntityKey {
    pub fn node_ref(&self) -> NodeRef {
        match self {
            Self::Component(id) => NodeRef::Component(id.clone()),
            Self::Page(id) => NodeRef::Page(id.clone()),
        }
    }
}
