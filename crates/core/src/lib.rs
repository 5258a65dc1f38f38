//! Domain building blocks for the Canjala festival CMS.
//!
//! This crate has no database or HTTP dependencies so the access policy,
//! locale resolution and media naming rules can be tested in isolation and
//! shared by the repository and API layers.

pub mod access;
pub mod content;
pub mod error;
pub mod locale;
pub mod media;
pub mod roles;
pub mod types;
