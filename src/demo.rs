// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Wayfinder-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wayfinder and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Built-in sample document used by `wayfinder --demo`.

use crate::model::{
    ArchitectureDocument, Component, ComponentId, DocumentId, IdError, NavigationEdge, Page,
    PageId,
};

pub fn demo_document(id: DocumentId) -> Result<ArchitectureDocument, IdError> {
    let mut doc = ArchitectureDocument::new(id, "Coffee Shop");

    let theme = &mut doc.theme;
    theme.main.brand_name = "Bean There".to_owned();
    theme.main.primary_color = "#6f4e37".to_owned();
    theme.main.secondary_color = "#f5e6d3".to_owned();
    theme.main.typography = "Inter, sans-serif".to_owned();
    theme.main.tone = "Warm and friendly".to_owned();
    theme.advanced.spacing_scale = "4px base".to_owned();
    theme.advanced.border_radius = "8px".to_owned();

    let mut nav_bar = Component::new(ComponentId::new("nav-bar")?, "Navigation Bar");
    nav_bar.main.component_type = "navigation".to_owned();
    nav_bar.main.description = "Logo, menu link and cart badge".to_owned();
    nav_bar.advanced.states = vec!["default".to_owned(), "cart-not-empty".to_owned()];

    let mut menu_card = Component::new(ComponentId::new("menu-card")?, "Menu Card");
    menu_card.main.component_type = "card".to_owned();
    menu_card.advanced.props = vec!["name".to_owned(), "price".to_owned(), "image".to_owned()];
    menu_card.advanced.interactions = "Tap opens the item page".to_owned();

    let home_id = PageId::new("home")?;
    let menu_id = PageId::new("menu")?;
    let checkout_id = PageId::new("checkout")?;

    let mut home = Page::new(home_id.clone(), "Home");
    home.main.route = "/".to_owned();
    home.advanced.key_components = vec![nav_bar.component_id.clone()];
    home.advanced.user_goals = "Find today's specials".to_owned();
    home.navigation.push(NavigationEdge {
        trigger_element: "Menu link".to_owned(),
        user_action: "Browse the menu".to_owned(),
        ..NavigationEdge::manual(menu_id.clone(), None, None)
    });

    let mut menu = Page::new(menu_id.clone(), "Menu");
    menu.main.route = "/menu".to_owned();
    menu.advanced.key_components = vec![
        nav_bar.component_id.clone(),
        menu_card.component_id.clone(),
    ];
    menu.navigation.push(NavigationEdge {
        trigger_element: "Cart badge".to_owned(),
        user_action: "Review order".to_owned(),
        condition_description: "Cart is not empty".to_owned(),
        ..NavigationEdge::manual(checkout_id.clone(), None, None)
    });

    let mut checkout = Page::new(checkout_id, "Checkout");
    checkout.main.route = "/checkout".to_owned();
    checkout.advanced.data_requirements = "Cart items, payment methods".to_owned();
    checkout.navigation.push(NavigationEdge {
        trigger_element: "Logo".to_owned(),
        user_action: "Return home".to_owned(),
        ..NavigationEdge::manual(home_id, None, None)
    });

    doc.components = vec![nav_bar, menu_card];
    doc.pages = vec![home, menu, checkout];
    Ok(doc)
}
