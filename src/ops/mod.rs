// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Wayfinder-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wayfinder and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Mutation operations for architecture documents.
//!
//! Each canvas gesture or property-editor commit becomes one [`Op`]. Applying an op never fails:
//! gestures that would not change anything (duplicate connection, unknown node, missing delete
//! target) report `changed == false` and hand back the very same snapshot.

use std::collections::BTreeSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::model::{
    ArchitectureDocument, Entity, EntityKey, NavigationEdge, NodeRef, PageId, Position,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    /// Draw a connection between two pages.
    Connect {
        source: PageId,
        target: PageId,
        source_handle: Option<String>,
        target_handle: Option<String>,
    },
    /// Remove drawn connections.
    Disconnect { edges: Vec<EdgeKey> },
    /// Drag stop.
    MoveNode { node: NodeRef, position: Position },
    UpsertEntity(Entity),
    DeleteEntity(EntityKey),
}

impl Op {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Connect { .. } => "connect",
            Self::Disconnect { .. } => "disconnect",
            Self::MoveNode { .. } => "move_node",
            Self::UpsertEntity(_) => "upsert_entity",
            Self::DeleteEntity(_) => "delete_entity",
        }
    }
}

/// Identity of a drawn connection as the canvas reports it on removal.
///
/// Removal matches on endpoints and handles, never on the composite view edge id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeKey {
    pub source: PageId,
    pub target: PageId,
    #[serde(default)]
    pub source_handle: Option<String>,
    #[serde(default)]
    pub target_handle: Option<String>,
}

impl EdgeKey {
    pub fn new(source: PageId, target: PageId) -> Self {
        Self {
            source,
            target,
            source_handle: None,
            target_handle: None,
        }
    }

    pub fn with_handles(
        mut self,
        source_handle: Option<String>,
        target_handle: Option<String>,
    ) -> Self {
        self.source_handle = source_handle;
        self.target_handle = target_handle;
        self
    }
}

/// Result of applying one or more ops to a snapshot.
#[derive(Debug, Clone)]
pub struct Mutation {
    /// The next snapshot. Pointer-equal to the input when nothing changed.
    pub next: Arc<ArchitectureDocument>,
    pub changed: bool,
    pub delta: Delta,
}

/// Coarse description of what an op touched, for graph-change listeners.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Delta {
    pub added: Vec<NodeRef>,
    pub removed: Vec<NodeRef>,
    pub updated: Vec<NodeRef>,
    pub edges_added: Vec<EdgeKey>,
    pub edges_removed: Vec<EdgeKey>,
}

impl Delta {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty()
            && self.removed.is_empty()
            && self.updated.is_empty()
            && self.edges_added.is_empty()
            && self.edges_removed.is_empty()
    }
}

#[derive(Debug, Default)]
struct DeltaBuilder {
    added: BTreeSet<NodeRef>,
    removed: BTreeSet<NodeRef>,
    updated: BTreeSet<NodeRef>,
    edges_added: BTreeSet<EdgeKey>,
    edges_removed: BTreeSet<EdgeKey>,
}

impl DeltaBuilder {
    fn record_added(&mut self, node: NodeRef) {
        self.removed.remove(&node);
        self.updated.remove(&node);
        self.added.insert(node);
    }

    fn record_removed(&mut self, node: NodeRef) {
        self.added.remove(&node);
        self.updated.remove(&node);
        self.removed.insert(node);
    }

    fn record_updated(&mut self, node: NodeRef) {
        if self.added.contains(&node) || self.removed.contains(&node) {
            return;
        }
        self.updated.insert(node);
    }

    fn record_edge_added(&mut self, key: EdgeKey) {
        if !self.edges_removed.remove(&key) {
            self.edges_added.insert(key);
        }
    }

    fn record_edge_removed(&mut self, key: EdgeKey) {
        if !self.edges_added.remove(&key) {
            self.edges_removed.insert(key);
        }
    }

    fn finish(self) -> Delta {
        Delta {
            added: self.added.into_iter().collect(),
            removed: self.removed.into_iter().collect(),
            updated: self.updated.into_iter().collect(),
            edges_added: self.edges_added.into_iter().collect(),
            edges_removed: self.edges_removed.into_iter().collect(),
        }
    }
}

pub fn apply_op(doc: &Arc<ArchitectureDocument>, op: &Op) -> Mutation {
    apply_ops(doc, std::slice::from_ref(op))
}

/// Applies `ops` in order to a copy of `doc`.
///
/// The input snapshot is never touched; a new one is allocated only if some op changed it.
pub fn apply_ops(doc: &Arc<ArchitectureDocument>, ops: &[Op]) -> Mutation {
    if ops.is_empty() {
        return unchanged(doc);
    }

    let mut next = ArchitectureDocument::clone(doc);
    let mut delta = DeltaBuilder::default();
    let mut changed = false;

    for op in ops {
        changed |= apply_one(&mut next, op, &mut delta);
    }

    if !changed {
        return unchanged(doc);
    }

    Mutation {
        next: Arc::new(next),
        changed: true,
        delta: delta.finish(),
    }
}

fn unchanged(doc: &Arc<ArchitectureDocument>) -> Mutation {
    Mutation {
        next: Arc::clone(doc),
        changed: false,
        delta: Delta::default(),
    }
}

// Per-op application helpers.
include!("ops_impl.rs");
