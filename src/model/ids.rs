// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Wayfinder-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wayfinder and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Reserved node id of the singleton theme entity.
pub const THEME_NODE_ID: &str = "theme";

/// A stable identifier for documents and the entities inside them.
///
/// The id is an opaque, non-empty string without `/`; ids end up in file names
/// (`<document_id>.architecture.json`) and in composite view edge ids. Component and page ids
/// may not be `"theme"`, the canvas id of the theme node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id<T> {
    value: String,
    _marker: PhantomData<fn() -> T>,
}

/// Marker for the entity kind an [`Id`] names.
pub trait IdTag {
    /// Canvas node ids this kind may not use.
    const RESERVED: &'static [&'static str] = &[];
}

impl<T: IdTag> Id<T> {
    pub fn new(value: impl Into<String>) -> Result<Self, IdError> {
        let value = value.into();
        check_id(&value, T::RESERVED)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }
}

impl<T> Id<T> {
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl<T: IdTag> FromStr for Id<T> {
    type Err = IdError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::new(raw)
    }
}

impl<T> Serialize for Id<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.value)
    }
}

impl<'de, T: IdTag> Deserialize<'de> for Id<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}

/// Deserializes an optional id where `null`, a missing field and `""` all mean "unset".
pub(crate) fn deserialize_optional_id<'de, D, T>(
    deserializer: D,
) -> Result<Option<Id<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: IdTag,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(value) if value.is_empty() => Ok(None),
        Some(value) => Id::new(value).map(Some).map_err(serde::de::Error::custom),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdError {
    #[error("id must not be empty")]
    Empty,
    #[error("id must not contain '/'")]
    ContainsSlash,
    #[error("id {0:?} is reserved")]
    Reserved(&'static str),
}

fn check_id(value: &str, reserved: &[&'static str]) -> Result<(), IdError> {
    if value.is_empty() {
        return Err(IdError::Empty);
    }
    if value.contains('/') {
        return Err(IdError::ContainsSlash);
    }
    match reserved.iter().find(|name| **name == value) {
        Some(name) => Err(IdError::Reserved(name)),
        None => Ok(()),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DocumentIdTag {}
pub type DocumentId = Id<DocumentIdTag>;
impl IdTag for DocumentIdTag {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ComponentIdTag {}
pub type ComponentId = Id<ComponentIdTag>;
impl IdTag for ComponentIdTag {
    const RESERVED: &'static [&'static str] = &[THEME_NODE_ID];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PageIdTag {}
pub type PageId = Id<PageIdTag>;
impl IdTag for PageIdTag {
    const RESERVED: &'static [&'static str] = &[THEME_NODE_ID];
}
