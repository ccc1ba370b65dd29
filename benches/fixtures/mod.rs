// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Wayfinder-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wayfinder and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use wayfinder::model::{
    ArchitectureDocument, Component, ComponentId, DocumentId, NavigationEdge, Page, PageId,
    Position,
};

pub fn page_id(idx: usize) -> PageId {
    PageId::new(format!("page-{idx:05}")).expect("page id")
}

pub fn component_id(idx: usize) -> ComponentId {
    ComponentId::new(format!("component-{idx:05}")).expect("component id")
}

/// A document with `pages` pages, each linking to the next `fanout` pages (wrapping).
///
/// Every third entity has a stored position so both layout paths are exercised.
pub fn architecture(components: usize, pages: usize, fanout: usize) -> ArchitectureDocument {
    let mut doc = ArchitectureDocument::new(
        DocumentId::new(format!("bench-{components}-{pages}-{fanout}")).expect("doc id"),
        "bench",
    );

    for idx in 0..components {
        let mut component = Component::new(component_id(idx), format!("Component {idx}"));
        component.main.component_type = "card".to_owned();
        if idx % 3 == 0 {
            component.editor_metadata = Some(Position::new(idx as f64 * 10.0, 200.0));
        }
        doc.components.push(component);
    }

    for idx in 0..pages {
        let mut page = Page::new(page_id(idx), format!("Page {idx}"));
        page.main.route = format!("/p/{idx}");
        if idx % 3 == 0 {
            page.editor_metadata = Some(Position::new(idx as f64 * 10.0, 600.0));
        }
        for step in 1..=fanout.min(pages.saturating_sub(1)) {
            let target = page_id((idx + step) % pages);
            page.navigation.push(NavigationEdge {
                trigger_element: format!("link {step}"),
                ..NavigationEdge::manual(target, Some("right".to_owned()), Some("left".to_owned()))
            });
        }
        doc.pages.push(page);
    }

    doc
}
