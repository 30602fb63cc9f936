//! The shared library for loancalc's rooms sidebar and its backend.
//!
//! Provides the rooms API client, wire data, typed ids, display preferences,
//! UI strings, the framework-independent rooms panel, error types, logging
//! setup, and macros used by the frontend.

pub mod api;
pub mod clipboard;
pub mod data;
pub mod errors;
pub mod i18n;
pub mod id;
pub mod log;
pub mod macros;
pub mod navigation;
pub mod panel;
pub mod preferences;
pub mod session;

pub use serde;
pub use serde_json;
pub use tracing;
