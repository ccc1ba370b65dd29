// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Wayfinder-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wayfinder and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Graph projection: derives the canvas node/edge graph from an architecture document.
//!
//! The view graph is a cache of a pure function of the document; it is never persisted and
//! never edited directly.

use serde::{Deserialize, Serialize};

use crate::model::{ArchitectureDocument, Component, Page, PageId, Position, Theme};
use crate::model::{EntityKind, NodeRef};

/// Fallback positions for entities that have no `editor_metadata` yet.
///
/// Components and pages are laid out on separate rows, one slot per index, so a freshly loaded
/// document never stacks nodes on top of each other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutDefaults {
    pub theme: Position,
    pub component_origin_x: f64,
    pub component_spacing: f64,
    pub component_y: f64,
    pub page_origin_x: f64,
    pub page_spacing: f64,
    pub page_y: f64,
}

impl Default for LayoutDefaults {
    fn default() -> Self {
        Self {
            theme: Position::new(50.0, 50.0),
            component_origin_x: 50.0,
            component_spacing: 250.0,
            component_y: 250.0,
            page_origin_x: 50.0,
            page_spacing: 300.0,
            page_y: 500.0,
        }
    }
}

impl LayoutDefaults {
    pub fn component_position(&self, index: usize) -> Position {
        Position::new(
            self.component_origin_x + index as f64 * self.component_spacing,
            self.component_y,
        )
    }

    pub fn page_position(&self, index: usize) -> Position {
        Position::new(
            self.page_origin_x + index as f64 * self.page_spacing,
            self.page_y,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "lowercase")]
pub enum NodePayload {
    Theme(Theme),
    Component(Component),
    Page(Page),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewNode {
    pub id: String,
    pub node: NodeRef,
    pub position: Position,
    pub payload: NodePayload,
}

impl ViewNode {
    pub fn kind(&self) -> EntityKind {
        self.node.kind()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewEdge {
    pub id: String,
    pub source: PageId,
    pub target: PageId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_handle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_handle: Option<String>,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ViewGraph {
    pub nodes: Vec<ViewNode>,
    pub edges: Vec<ViewEdge>,
}

impl ViewGraph {
    pub fn node(&self, node_id: &str) -> Option<&ViewNode> {
        self.nodes.iter().find(|n| n.id == node_id)
    }

    pub fn edges_from<'a>(&'a self, source: &'a PageId) -> impl Iterator<Item = &'a ViewEdge> + 'a {
        self.edges.iter().filter(move |e| &e.source == source)
    }
}

/// Composite id of the view edge for the `index`-th navigation entry of `source`.
pub fn edge_id(source: &PageId, target: &PageId, index: usize) -> String {
    format!("e/{source}/{target}/{index}")
}

/// Projects `doc` with the default layout.
pub fn project(doc: &ArchitectureDocument) -> ViewGraph {
    project_with(doc, &LayoutDefaults::default())
}

pub fn project_with(doc: &ArchitectureDocument, layout: &LayoutDefaults) -> ViewGraph {
    let mut nodes = Vec::with_capacity(1 + doc.components.len() + doc.pages.len());

    nodes.push(ViewNode {
        id: NodeRef::Theme.node_id().to_owned(),
        node: NodeRef::Theme,
        position: doc.theme.editor_metadata.unwrap_or(layout.theme),
        payload: NodePayload::Theme(doc.theme.clone()),
    });

    for (index, component) in doc.components.iter().enumerate() {
        nodes.push(ViewNode {
            id: component.component_id.as_str().to_owned(),
            node: NodeRef::Component(component.component_id.clone()),
            position: component
                .editor_metadata
                .unwrap_or_else(|| layout.component_position(index)),
            payload: NodePayload::Component(component.clone()),
        });
    }

    for (index, page) in doc.pages.iter().enumerate() {
        nodes.push(ViewNode {
            id: page.page_id.as_str().to_owned(),
            node: NodeRef::Page(page.page_id.clone()),
            position: page
                .editor_metadata
                .unwrap_or_else(|| layout.page_position(index)),
            payload: NodePayload::Page(page.clone()),
        });
    }

    let mut edges = Vec::new();
    for page in &doc.pages {
        for (index, nav) in page.navigation.iter().enumerate() {
            let Some(target) = nav.to_page_id.as_ref() else {
                continue;
            };
            // Entries pointing at a deleted page stay stored but are not drawn.
            if doc.page(target).is_none() {
                continue;
            }
            edges.push(ViewEdge {
                id: edge_id(&page.page_id, target, index),
                source: page.page_id.clone(),
                target: target.clone(),
                source_handle: nav.source_handle.clone(),
                target_handle: nav.target_handle.clone(),
                label: nav.trigger_element.clone(),
            });
        }
    }

    ViewGraph { nodes, edges }
}
