// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Wayfinder-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wayfinder and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// Op application helpers used by `apply_ops`.
/// Each helper returns whether the document changed.
fn apply_one(doc: &mut ArchitectureDocument, op: &Op, delta: &mut DeltaBuilder) -> bool {
    match op {
        Op::Connect {
            source,
            target,
            source_handle,
            target_handle,
        } => connect(doc, source, target, source_handle, target_handle, delta),
        Op::Disconnect { edges } => {
            let mut changed = false;
            for key in edges {
                changed |= disconnect(doc, key, delta);
            }
            changed
        }
        Op::MoveNode { node, position } => move_node(doc, node, *position, delta),
        Op::UpsertEntity(entity) => upsert_entity(doc, entity, delta),
        Op::DeleteEntity(key) => delete_entity(doc, key, delta),
    }
}

fn connect(
    doc: &mut ArchitectureDocument,
    source: &PageId,
    target: &PageId,
    source_handle: &Option<String>,
    target_handle: &Option<String>,
    delta: &mut DeltaBuilder,
) -> bool {
    if doc.page(target).is_none() {
        return false;
    }
    let Some(page) = doc.page_mut(source) else {
        return false;
    };
    // One connection per page pair, whichever sides were used.
    if page.navigates_to(target) {
        return false;
    }

    page.navigation.push(NavigationEdge::manual(
        target.clone(),
        source_handle.clone(),
        target_handle.clone(),
    ));
    delta.record_updated(NodeRef::Page(source.clone()));
    delta.record_edge_added(EdgeKey {
        source: source.clone(),
        target: target.clone(),
        source_handle: source_handle.clone(),
        target_handle: target_handle.clone(),
    });
    true
}

fn disconnect(doc: &mut ArchitectureDocument, key: &EdgeKey, delta: &mut DeltaBuilder) -> bool {
    let Some(page) = doc.page_mut(&key.source) else {
        return false;
    };

    let before_len = page.navigation.len();
    page.navigation.retain(|nav| {
        !(nav.to_page_id.as_ref() == Some(&key.target)
            && nav.handles_match(key.source_handle.as_deref(), key.target_handle.as_deref()))
    });
    if page.navigation.len() == before_len {
        return false;
    }

    delta.record_updated(NodeRef::Page(key.source.clone()));
    delta.record_edge_removed(key.clone());
    true
}

fn move_node(
    doc: &mut ArchitectureDocument,
    node: &NodeRef,
    position: Position,
    delta: &mut DeltaBuilder,
) -> bool {
    let slot = match node {
        NodeRef::Theme => Some(&mut doc.theme.editor_metadata),
        NodeRef::Component(id) => doc.component_mut(id).map(|c| &mut c.editor_metadata),
        NodeRef::Page(id) => doc.page_mut(id).map(|p| &mut p.editor_metadata),
    };
    let Some(slot) = slot else {
        return false;
    };
    if *slot == Some(position) {
        return false;
    }

    *slot = Some(position);
    delta.record_updated(node.clone());
    true
}

/// Replaces the entity with the same id, or appends it.
///
/// Components and pages share one canvas id space, so a new entity whose id is already taken by
/// the other kind is refused.
fn upsert_entity(
    doc: &mut ArchitectureDocument,
    entity: &Entity,
    delta: &mut DeltaBuilder,
) -> bool {
    match entity {
        Entity::Theme(theme) => {
            if &doc.theme == theme {
                return false;
            }
            doc.theme = theme.clone();
            delta.record_updated(NodeRef::Theme);
            true
        }
        Entity::Component(component) => {
            let node = entity.node_ref();
            let taken_by_page = doc
                .pages
                .iter()
                .any(|p| p.page_id.as_str() == component.component_id.as_str());
            match doc.component_mut(&component.component_id) {
                Some(existing) if existing == component => false,
                Some(existing) => {
                    *existing = component.clone();
                    delta.record_updated(node);
                    true
                }
                None if taken_by_page => false,
                None => {
                    doc.components.push(component.clone());
                    delta.record_added(node);
                    true
                }
            }
        }
        Entity::Page(page) => {
            let node = entity.node_ref();
            let taken_by_component = doc
                .components
                .iter()
                .any(|c| c.component_id.as_str() == page.page_id.as_str());
            match doc.page_mut(&page.page_id) {
                Some(existing) if existing == page => false,
                Some(existing) => {
                    *existing = page.clone();
                    delta.record_updated(node);
                    true
                }
                None if taken_by_component => false,
                None => {
                    doc.pages.push(page.clone());
                    delta.record_added(node);
                    true
                }
            }
        }
    }
}

/// Removes a component or page.
///
/// Navigation entries on other pages that point at a deleted page are left in place; the
/// projector skips edges whose target no longer exists.
fn delete_entity(
    doc: &mut ArchitectureDocument,
    key: &EntityKey,
    delta: &mut DeltaBuilder,
) -> bool {
    let removed = match key {
        EntityKey::Component(id) => {
            let before_len = doc.components.len();
            doc.components.retain(|c| &c.component_id != id);
            doc.components.len() != before_len
        }
        EntityKey::Page(id) => {
            let before_len = doc.pages.len();
            doc.pages.retain(|p| &p.page_id != id);
            doc.pages.len() != before_len
        }
    };
    if removed {
        delta.record_removed(key.node_ref());
    }
    removed
}
