// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Wayfinder-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wayfinder and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

use super::ids::{ComponentId, DocumentId, PageId};

/// Canvas position persisted per entity as `editor_metadata`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The normalized, persisted representation of one UI/UX architecture.
///
/// Connectivity lives only in [`Page::navigation`]; the canvas edges are derived from it.
/// Missing collections deserialize to empty ones so older or partial documents load cleanly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchitectureDocument {
    pub id: DocumentId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub components: Vec<Component>,
    #[serde(default)]
    pub pages: Vec<Page>,
}

impl ArchitectureDocument {
    pub fn new(id: DocumentId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            theme: Theme::default(),
            components: Vec::new(),
            pages: Vec::new(),
        }
    }

    pub fn component(&self, component_id: &ComponentId) -> Option<&Component> {
        self.components
            .iter()
            .find(|c| &c.component_id == component_id)
    }

    pub fn page(&self, page_id: &PageId) -> Option<&Page> {
        self.pages.iter().find(|p| &p.page_id == page_id)
    }

    pub(crate) fn component_mut(&mut self, component_id: &ComponentId) -> Option<&mut Component> {
        self.components
            .iter_mut()
            .find(|c| &c.component_id == component_id)
    }

    pub(crate) fn page_mut(&mut self, page_id: &PageId) -> Option<&mut Page> {
        self.pages.iter_mut().find(|p| &p.page_id == page_id)
    }

    /// Total number of navigation entries across all pages.
    pub fn navigation_len(&self) -> usize {
        self.pages.iter().map(|p| p.navigation.len()).sum()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    #[serde(default)]
    pub main: ThemeMain,
    #[serde(default)]
    pub advanced: ThemeAdvanced,
    #[serde(
        rename = "editor_metadata",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub editor_metadata: Option<Position>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeMain {
    pub brand_name: String,
    pub primary_color: String,
    pub secondary_color: String,
    pub typography: String,
    pub tone: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeAdvanced {
    pub spacing_scale: String,
    pub border_radius: String,
    pub dark_mode: bool,
    pub accessibility_notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    pub component_id: ComponentId,
    #[serde(default)]
    pub main: ComponentMain,
    #[serde(default)]
    pub advanced: ComponentAdvanced,
    #[serde(
        rename = "editor_metadata",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub editor_metadata: Option<Position>,
}

impl Component {
    pub fn new(component_id: ComponentId, name: impl Into<String>) -> Self {
        Self {
            component_id,
            main: ComponentMain {
                name: name.into(),
                ..ComponentMain::default()
            },
            advanced: ComponentAdvanced::default(),
            editor_metadata: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ComponentMain {
    pub name: String,
    pub description: String,
    pub component_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ComponentAdvanced {
    pub props: Vec<String>,
    pub states: Vec<String>,
    pub interactions: String,
    pub accessibility: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub page_id: PageId,
    #[serde(default)]
    pub main: PageMain,
    #[serde(default)]
    pub advanced: PageAdvanced,
    #[serde(default)]
    pub navigation: Vec<NavigationEdge>,
    #[serde(
        rename = "editor_metadata",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub editor_metadata: Option<Position>,
}

impl Page {
    pub fn new(page_id: PageId, name: impl Into<String>) -> Self {
        Self {
            page_id,
            main: PageMain {
                name: name.into(),
                ..PageMain::default()
            },
            advanced: PageAdvanced::default(),
            navigation: Vec::new(),
            editor_metadata: None,
        }
    }

    /// Whether any navigation entry already links this page to `target`.
    pub fn navigates_to(&self, target: &PageId) -> bool {
        self.navigation
            .iter()
            .any(|nav| nav.to_page_id.as_ref() == Some(target))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageMain {
    pub name: String,
    pub description: String,
    pub route: String,
    pub page_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageAdvanced {
    pub layout: String,
    pub key_components: Vec<ComponentId>,
    pub user_goals: String,
    pub data_requirements: String,
}

/// A page-to-page transition stored on the source page.
///
/// Missing and `null` handles both mean "no handle"; they compare equal as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationEdge {
    #[serde(
        default,
        deserialize_with = "super::ids::deserialize_optional_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub to_page_id: Option<PageId>,
    #[serde(default)]
    pub trigger_element: String,
    #[serde(default)]
    pub trigger_type: String,
    #[serde(default)]
    pub condition_description: String,
    #[serde(default)]
    pub user_action: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_handle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_handle: Option<String>,
}

pub const MANUAL_TRIGGER_ELEMENT: &str = "Manual Connection";
pub const MANUAL_TRIGGER_TYPE: &str = "click";
pub const MANUAL_USER_ACTION: &str = "Navigate";

impl NavigationEdge {
    /// Entry created by drawing a connection on the canvas.
    pub fn manual(
        to_page_id: PageId,
        source_handle: Option<String>,
        target_handle: Option<String>,
    ) -> Self {
        Self {
            to_page_id: Some(to_page_id),
            trigger_element: MANUAL_TRIGGER_ELEMENT.to_owned(),
            trigger_type: MANUAL_TRIGGER_TYPE.to_owned(),
            condition_description: String::new(),
            user_action: MANUAL_USER_ACTION.to_owned(),
            source_handle,
            target_handle,
        }
    }

    pub fn handles_match(&self, source_handle: Option<&str>, target_handle: Option<&str>) -> bool {
        self.source_handle.as_deref() == source_handle
            && self.target_handle.as_deref() == target_handle
    }
}
