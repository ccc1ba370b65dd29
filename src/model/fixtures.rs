// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Wayfinder-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wayfinder and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::document::{ArchitectureDocument, Component, NavigationEdge, Page, Position};
use super::ids::{ComponentId, DocumentId, PageId};

pub(crate) fn pid(value: &str) -> PageId {
    PageId::new(value).expect("page id")
}

pub(crate) fn cid(value: &str) -> ComponentId {
    ComponentId::new(value).expect("component id")
}

/// Pages `a` and `b` without navigation plus one `button` component.
pub(crate) fn two_page_document() -> ArchitectureDocument {
    let mut doc = ArchitectureDocument::new(DocumentId::new("doc-1").expect("doc id"), "Shop");
    doc.theme.main.brand_name = "Shop".to_owned();
    doc.components.push(Component::new(cid("button"), "Button"));
    doc.pages.push(Page::new(pid("a"), "Home"));
    doc.pages.push(Page::new(pid("b"), "Checkout"));
    doc
}

/// A small storefront with positioned nodes and a navigation cycle.
pub(crate) fn storefront_document() -> ArchitectureDocument {
    let mut doc = ArchitectureDocument::new(
        DocumentId::new("storefront").expect("doc id"),
        "Storefront",
    );
    doc.theme.main.brand_name = "Storefront".to_owned();
    doc.theme.main.primary_color = "#0f766e".to_owned();
    doc.theme.editor_metadata = Some(Position::new(0.0, 0.0));

    let mut header = Component::new(cid("header"), "Header");
    header.main.component_type = "navigation".to_owned();
    header.editor_metadata = Some(Position::new(120.0, 240.0));
    doc.components.push(header);
    doc.components.push(Component::new(cid("card"), "Product Card"));

    let mut home = Page::new(pid("home"), "Home");
    home.main.route = "/".to_owned();
    home.editor_metadata = Some(Position::new(40.0, 600.0));
    home.navigation.push(NavigationEdge {
        to_page_id: Some(pid("product")),
        trigger_element: "Product Card".to_owned(),
        trigger_type: "click".to_owned(),
        condition_description: String::new(),
        user_action: "Open product".to_owned(),
        source_handle: Some("right".to_owned()),
        target_handle: Some("left".to_owned()),
    });

    let mut product = Page::new(pid("product"), "Product");
    product.main.route = "/p/:id".to_owned();
    product.navigation.push(NavigationEdge {
        to_page_id: Some(pid("home")),
        trigger_element: "Logo".to_owned(),
        trigger_type: "click".to_owned(),
        condition_description: String::new(),
        user_action: "Go home".to_owned(),
        source_handle: None,
        target_handle: None,
    });

    doc.pages.push(home);
    doc.pages.push(product);
    doc
}
