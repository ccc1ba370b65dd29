// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Wayfinder-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wayfinder and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{
    ArchitectureDocument, Component, ComponentId, Entity, EntityKind, Page, PageId, Theme,
};

use super::Draft;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeField {
    BrandName,
    PrimaryColor,
    SecondaryColor,
    Typography,
    Tone,
    SpacingScale,
    BorderRadius,
    AccessibilityNotes,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ThemeDraft {
    theme: Theme,
    suggestion_error: Option<String>,
}

impl ThemeDraft {
    pub fn new(theme: &Theme) -> Self {
        Self {
            theme: theme.clone(),
            suggestion_error: None,
        }
    }

    pub fn set_dark_mode(&mut self, dark_mode: bool) {
        self.theme.advanced.dark_mode = dark_mode;
    }

    pub fn dark_mode(&self) -> bool {
        self.theme.advanced.dark_mode
    }

    pub fn commit(&self) -> Theme {
        self.theme.clone()
    }
}

impl Draft for ThemeDraft {
    type Field = ThemeField;

    fn kind(&self) -> EntityKind {
        EntityKind::Theme
    }

    fn target_name(&self) -> &str {
        &self.theme.main.brand_name
    }

    fn context_text(&self) -> String {
        let main = &self.theme.main;
        format!(
            "brand: {}\nprimary color: {}\nsecondary color: {}\ntypography: {}\ntone: {}",
            main.brand_name, main.primary_color, main.secondary_color, main.typography, main.tone
        )
    }

    fn field_name(field: ThemeField) -> &'static str {
        match field {
            ThemeField::BrandName => "brandName",
            ThemeField::PrimaryColor => "primaryColor",
            ThemeField::SecondaryColor => "secondaryColor",
            ThemeField::Typography => "typography",
            ThemeField::Tone => "tone",
            ThemeField::SpacingScale => "spacingScale",
            ThemeField::BorderRadius => "borderRadius",
            ThemeField::AccessibilityNotes => "accessibilityNotes",
        }
    }

    fn field(&self, field: ThemeField) -> &str {
        let (main, advanced) = (&self.theme.main, &self.theme.advanced);
        match field {
            ThemeField::BrandName => &main.brand_name,
            ThemeField::PrimaryColor => &main.primary_color,
            ThemeField::SecondaryColor => &main.secondary_color,
            ThemeField::Typography => &main.typography,
            ThemeField::Tone => &main.tone,
            ThemeField::SpacingScale => &advanced.spacing_scale,
            ThemeField::BorderRadius => &advanced.border_radius,
            ThemeField::AccessibilityNotes => &advanced.accessibility_notes,
        }
    }

    fn set_field(&mut self, field: ThemeField, value: String) {
        let (main, advanced) = (&mut self.theme.main, &mut self.theme.advanced);
        let slot = match field {
            ThemeField::BrandName => &mut main.brand_name,
            ThemeField::PrimaryColor => &mut main.primary_color,
            ThemeField::SecondaryColor => &mut main.secondary_color,
            ThemeField::Typography => &mut main.typography,
            ThemeField::Tone => &mut main.tone,
            ThemeField::SpacingScale => &mut advanced.spacing_scale,
            ThemeField::BorderRadius => &mut advanced.border_radius,
            ThemeField::AccessibilityNotes => &mut advanced.accessibility_notes,
        };
        *slot = value;
    }

    fn commit_onto(&self, doc: &ArchitectureDocument) -> Entity {
        let mut theme = self.commit();
        theme.editor_metadata = doc.theme.editor_metadata;
        Entity::Theme(theme)
    }

    fn suggestion_error(&self) -> Option<&str> {
        self.suggestion_error.as_deref()
    }

    fn set_suggestion_error(&mut self, error: Option<String>) {
        self.suggestion_error = error;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentField {
    Name,
    Description,
    ComponentType,
    Interactions,
    Accessibility,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComponentDraft {
    component: Component,
    suggestion_error: Option<String>,
}

impl ComponentDraft {
    pub fn new(component: &Component) -> Self {
        Self {
            component: component.clone(),
            suggestion_error: None,
        }
    }

    /// Draft for a component that does not exist yet.
    pub fn create(component_id: ComponentId) -> Self {
        Self::new(&Component::new(component_id, ""))
    }

    pub fn component_id(&self) -> &ComponentId {
        &self.component.component_id
    }

    pub fn props(&self) -> &[String] {
        &self.component.advanced.props
    }

    pub fn set_props(&mut self, props: Vec<String>) {
        self.component.advanced.props = props;
    }

    pub fn states(&self) -> &[String] {
        &self.component.advanced.states
    }

    pub fn set_states(&mut self, states: Vec<String>) {
        self.component.advanced.states = states;
    }

    pub fn commit(&self) -> Component {
        self.component.clone()
    }
}

impl Draft for ComponentDraft {
    type Field = ComponentField;

    fn kind(&self) -> EntityKind {
        EntityKind::Component
    }

    fn target_name(&self) -> &str {
        &self.component.main.name
    }

    fn context_text(&self) -> String {
        let main = &self.component.main;
        format!(
            "name: {}\ntype: {}\ndescription: {}\nprops: {}\nstates: {}",
            main.name,
            main.component_type,
            main.description,
            self.component.advanced.props.join(", "),
            self.component.advanced.states.join(", ")
        )
    }

    fn field_name(field: ComponentField) -> &'static str {
        match field {
            ComponentField::Name => "name",
            ComponentField::Description => "description",
            ComponentField::ComponentType => "componentType",
            ComponentField::Interactions => "interactions",
            ComponentField::Accessibility => "accessibility",
        }
    }

    fn field(&self, field: ComponentField) -> &str {
        let (main, advanced) = (&self.component.main, &self.component.advanced);
        match field {
            ComponentField::Name => &main.name,
            ComponentField::Description => &main.description,
            ComponentField::ComponentType => &main.component_type,
            ComponentField::Interactions => &advanced.interactions,
            ComponentField::Accessibility => &advanced.accessibility,
        }
    }

    fn set_field(&mut self, field: ComponentField, value: String) {
        let (main, advanced) = (&mut self.component.main, &mut self.component.advanced);
        let slot = match field {
            ComponentField::Name => &mut main.name,
            ComponentField::Description => &mut main.description,
            ComponentField::ComponentType => &mut main.component_type,
            ComponentField::Interactions => &mut advanced.interactions,
            ComponentField::Accessibility => &mut advanced.accessibility,
        };
        *slot = value;
    }

    fn commit_onto(&self, doc: &ArchitectureDocument) -> Entity {
        let mut component = self.commit();
        if let Some(current) = doc.component(&component.component_id) {
            component.editor_metadata = current.editor_metadata;
        }
        Entity::Component(component)
    }

    fn suggestion_error(&self) -> Option<&str> {
        self.suggestion_error.as_deref()
    }

    fn set_suggestion_error(&mut self, error: Option<String>) {
        self.suggestion_error = error;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageField {
    Name,
    Description,
    Route,
    PageType,
    Layout,
    UserGoals,
    DataRequirements,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageDraft {
    page: Page,
    suggestion_error: Option<String>,
}

impl PageDraft {
    pub fn new(page: &Page) -> Self {
        Self {
            page: page.clone(),
            suggestion_error: None,
        }
    }

    /// Draft for a page that does not exist yet.
    pub fn create(page_id: PageId) -> Self {
        Self::new(&Page::new(page_id, ""))
    }

    pub fn page_id(&self) -> &PageId {
        &self.page.page_id
    }

    pub fn key_components(&self) -> &[ComponentId] {
        &self.page.advanced.key_components
    }

    pub fn add_key_component(&mut self, component_id: ComponentId) {
        if !self.page.advanced.key_components.contains(&component_id) {
            self.page.advanced.key_components.push(component_id);
        }
    }

    pub fn remove_key_component(&mut self, component_id: &ComponentId) {
        self.page
            .advanced
            .key_components
            .retain(|id| id != component_id);
    }

    pub fn commit(&self) -> Page {
        self.page.clone()
    }
}

impl Draft for PageDraft {
    type Field = PageField;

    fn kind(&self) -> EntityKind {
        EntityKind::Page
    }

    fn target_name(&self) -> &str {
        &self.page.main.name
    }

    fn context_text(&self) -> String {
        let main = &self.page.main;
        format!(
            "name: {}\nroute: {}\ntype: {}\ndescription: {}\nuser goals: {}",
            main.name, main.route, main.page_type, main.description, self.page.advanced.user_goals
        )
    }

    fn field_name(field: PageField) -> &'static str {
        match field {
            PageField::Name => "name",
            PageField::Description => "description",
            PageField::Route => "route",
            PageField::PageType => "pageType",
            PageField::Layout => "layout",
            PageField::UserGoals => "userGoals",
            PageField::DataRequirements => "dataRequirements",
        }
    }

    fn field(&self, field: PageField) -> &str {
        let (main, advanced) = (&self.page.main, &self.page.advanced);
        match field {
            PageField::Name => &main.name,
            PageField::Description => &main.description,
            PageField::Route => &main.route,
            PageField::PageType => &main.page_type,
            PageField::Layout => &advanced.layout,
            PageField::UserGoals => &advanced.user_goals,
            PageField::DataRequirements => &advanced.data_requirements,
        }
    }

    fn set_field(&mut self, field: PageField, value: String) {
        let (main, advanced) = (&mut self.page.main, &mut self.page.advanced);
        let slot = match field {
            PageField::Name => &mut main.name,
            PageField::Description => &mut main.description,
            PageField::Route => &mut main.route,
            PageField::PageType => &mut main.page_type,
            PageField::Layout => &mut advanced.layout,
            PageField::UserGoals => &mut advanced.user_goals,
            PageField::DataRequirements => &mut advanced.data_requirements,
        };
        *slot = value;
    }

    fn commit_onto(&self, doc: &ArchitectureDocument) -> Entity {
        let mut page = self.commit();
        if let Some(current) = doc.page(&page.page_id) {
            page.editor_metadata = current.editor_metadata;
            page.navigation = current.navigation.clone();
        }
        Entity::Page(page)
    }

    fn suggestion_error(&self) -> Option<&str> {
        self.suggestion_error.as_deref()
    }

    fn set_suggestion_error(&mut self, error: Option<String>) {
        self.suggestion_error = error;
    }
}
