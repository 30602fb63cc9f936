//! Shared error types and utilities for the loancalc project.
#[cfg(not(target_arch = "wasm32"))]
pub use color_eyre::Report;

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[cfg(not(target_arch = "wasm32"))]
    // Report is not a std error, so it is carried without `#[source]`
    #[error("Failed to install color_eyre: {0}")]
    ColorEyre(color_eyre::Report),
    #[error("Failed to install tracing-subscriber")]
    TracingSubscriber(#[from] Box<dyn std::error::Error + Send + Sync>),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClipboardError {
    #[error("Clipboard is not available in this environment")]
    Unavailable,
    #[error("Clipboard write was rejected: {0}")]
    Rejected(String),
    #[error("Copy command did not succeed")]
    CommandFailed,
}
