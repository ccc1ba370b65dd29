// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Wayfinder-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wayfinder and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Markdown export of an architecture document.
//!
//! Sections: title, theme, components, pages, then a navigation table. Empty fields are left
//! out. Navigation entries whose target page is gone are skipped, the same way the canvas
//! skips them.

use crate::model::{ArchitectureDocument, Component, ComponentId, Page};

const UNTITLED: &str = "Untitled architecture";

pub fn to_markdown(doc: &ArchitectureDocument) -> String {
    let mut out = String::new();

    out.push_str("# ");
    out.push_str(non_empty(&doc.title).unwrap_or(UNTITLED));
    out.push_str("\n\n");

    push_theme(&mut out, doc);
    push_components(&mut out, doc);
    push_pages(&mut out, doc);
    push_navigation(&mut out, doc);

    // Exactly one trailing newline.
    while out.ends_with("\n\n") {
        out.pop();
    }
    out
}

fn push_theme(out: &mut String, doc: &ArchitectureDocument) {
    let (main, advanced) = (&doc.theme.main, &doc.theme.advanced);
    out.push_str("## Theme\n\n");
    let before = out.len();
    push_item(out, "Brand", &main.brand_name);
    push_item(out, "Primary color", &main.primary_color);
    push_item(out, "Secondary color", &main.secondary_color);
    push_item(out, "Typography", &main.typography);
    push_item(out, "Tone", &main.tone);
    push_item(out, "Spacing scale", &advanced.spacing_scale);
    push_item(out, "Border radius", &advanced.border_radius);
    if advanced.dark_mode {
        push_item(out, "Dark mode", "yes");
    }
    push_item(out, "Accessibility", &advanced.accessibility_notes);
    if out.len() == before {
        out.push_str("_No theme settings._\n");
    }
    out.push('\n');
}

fn push_components(out: &mut String, doc: &ArchitectureDocument) {
    out.push_str("## Components\n\n");
    if doc.components.is_empty() {
        out.push_str("_None._\n\n");
        return;
    }
    for component in &doc.components {
        push_component(out, component);
    }
}

fn push_component(out: &mut String, component: &Component) {
    let (main, advanced) = (&component.main, &component.advanced);
    push_heading(out, &main.name, component.component_id.as_str());
    if let Some(description) = non_empty(&main.description) {
        out.push_str(description);
        out.push_str("\n\n");
    }
    push_item(out, "Type", &main.component_type);
    push_item(out, "Props", &advanced.props.join(", "));
    push_item(out, "States", &advanced.states.join(", "));
    push_item(out, "Interactions", &advanced.interactions);
    push_item(out, "Accessibility", &advanced.accessibility);
    ensure_blank_line(out);
}

fn push_pages(out: &mut String, doc: &ArchitectureDocument) {
    out.push_str("## Pages\n\n");
    if doc.pages.is_empty() {
        out.push_str("_None._\n\n");
        return;
    }
    for page in &doc.pages {
        push_page(out, doc, page);
    }
}

fn push_page(out: &mut String, doc: &ArchitectureDocument, page: &Page) {
    let (main, advanced) = (&page.main, &page.advanced);
    push_heading(out, &main.name, page.page_id.as_str());
    if let Some(description) = non_empty(&main.description) {
        out.push_str(description);
        out.push_str("\n\n");
    }
    push_item(out, "Route", &main.route);
    push_item(out, "Type", &main.page_type);
    push_item(out, "Layout", &advanced.layout);
    let key_components = advanced
        .key_components
        .iter()
        .map(|id| component_label(doc, id))
        .collect::<Vec<_>>()
        .join(", ");
    push_item(out, "Key components", &key_components);
    push_item(out, "User goals", &advanced.user_goals);
    push_item(out, "Data requirements", &advanced.data_requirements);
    ensure_blank_line(out);
}

fn push_navigation(out: &mut String, doc: &ArchitectureDocument) {
    out.push_str("## Navigation\n\n");
    let mut rows = Vec::new();
    for page in &doc.pages {
        for nav in &page.navigation {
            let Some(target) = nav.to_page_id.as_ref().and_then(|id| doc.page(id)) else {
                continue;
            };
            rows.push([
                page_label(page),
                page_label(target),
                nav.trigger_element.as_str(),
                nav.user_action.as_str(),
                nav.condition_description.as_str(),
            ]);
        }
    }
    if rows.is_empty() {
        out.push_str("_No navigation._\n");
        return;
    }

    out.push_str("| From | To | Trigger | Action | Condition |\n");
    out.push_str("| --- | --- | --- | --- | --- |\n");
    for row in rows {
        out.push('|');
        for cell in row {
            out.push(' ');
            push_cell(out, cell);
            out.push_str(" |");
        }
        out.push('\n');
    }
}

fn push_heading(out: &mut String, name: &str, id: &str) {
    out.push_str("### ");
    match non_empty(name) {
        Some(name) => {
            out.push_str(name);
            out.push_str(" (`");
            out.push_str(id);
            out.push_str("`)");
        }
        None => {
            out.push('`');
            out.push_str(id);
            out.push('`');
        }
    }
    out.push_str("\n\n");
}

fn push_item(out: &mut String, label: &str, value: &str) {
    let Some(value) = non_empty(value) else {
        return;
    };
    out.push_str("- **");
    out.push_str(label);
    out.push_str(":** ");
    out.push_str(value);
    out.push('\n');
}

fn push_cell(out: &mut String, value: &str) {
    for ch in value.trim().chars() {
        match ch {
            '|' => out.push_str("\\|"),
            '\n' | '\r' => out.push(' '),
            _ => out.push(ch),
        }
    }
}

fn ensure_blank_line(out: &mut String) {
    if !out.ends_with("\n\n") {
        out.push('\n');
    }
}

fn non_empty(value: &str) -> Option<&str> {
    let value = value.trim();
    (!value.is_empty()).then_some(value)
}

fn page_label(page: &Page) -> &str {
    non_empty(&page.main.name).unwrap_or(page.page_id.as_str())
}

fn component_label<'a>(doc: &'a ArchitectureDocument, id: &'a ComponentId) -> &'a str {
    doc.component(id)
        .and_then(|c| non_empty(&c.main.name))
        .unwrap_or(id.as_str())
}
