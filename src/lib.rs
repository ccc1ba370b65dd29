// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Wayfinder-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wayfinder and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Wayfinder: keeps a UI/UX architecture canvas in sync with its architecture document.
//!
//! Gestures on the canvas become [`ops::Op`]s applied to an immutable document snapshot; the
//! canvas graph is projected from the snapshot ([`view`]) and changes are autosaved through a
//! [`store::DocumentStore`] ([`autosave`]). [`session::EditorSession`] ties these together.

pub mod autosave;
pub mod config;
pub mod demo;
pub mod editor;
pub mod format;
pub mod logging;
pub mod model;
pub mod ops;
pub mod session;
pub mod store;
pub mod view;

pub use session::{EditorSession, GraphChange, SessionError};
