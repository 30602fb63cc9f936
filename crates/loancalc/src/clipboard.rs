//! Clipboard access behind a strategy interface.
//!
//! The browser build picks its strategies once (see the frontend's
//! `platform` module); callers only ever see a [`Clipboard`].

use std::rc::Rc;

use crate::errors::ClipboardError;
use crate::log::warn;

#[async_trait::async_trait(?Send)]
pub trait Clipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Tries `primary`, and on any failure retries with `fallback`.
pub struct FallbackClipboard {
    primary: Rc<dyn Clipboard>,
    fallback: Rc<dyn Clipboard>,
}

impl FallbackClipboard {
    pub fn new(primary: Rc<dyn Clipboard>, fallback: Rc<dyn Clipboard>) -> Self {
        Self { primary, fallback }
    }
}

#[async_trait::async_trait(?Send)]
impl Clipboard for FallbackClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        match self.primary.write_text(text).await {
            Ok(()) => Ok(()),
            Err(err) => {
                warn!("Could not copy text, falling back: {err}");
                self.fallback.write_text(text).await
            }
        }
    }
}
