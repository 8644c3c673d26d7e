//! Ports onto the Volumio web UI.
//!
//! The extractor only ever sees a [`DocumentReader`] and the dispatcher only
//! ever sees an [`ActionPort`]. `BrowserPage` implements both over CDP; tests
//! use the in-memory page from `page::memory`.

mod browser;
#[cfg(test)]
pub(crate) mod memory;
mod probe;

use std::sync::Arc;

use thiserror::Error;

pub use browser::BrowserPage;
pub use probe::*;

#[derive(Debug, Error)]
pub enum PageError {
    #[error("page has no `#{}` control", .0.element_id())]
    MissingControl(Control),
    #[error("browser: {0}")]
    Cdp(#[from] chromiumoxide::error::CdpError),
    #[error("browser config: {0}")]
    Config(String),
    #[error("page at {url} not ready after {waited_ms} ms")]
    NotReady { url: String, waited_ms: u64 },
    #[error("unexpected script result: {0}")]
    Script(#[from] serde_json::Error),
}

/// Read-only access to the rendered document.
///
/// Every read is its own failure boundary: anything that goes wrong reads as
/// `None`.
pub trait DocumentReader {
    async fn try_read(&self, probe: &Probe) -> Option<String>;
}

/// Simulated interactions with the page's transport buttons.
pub trait ActionPort {
    async fn click(&self, control: Control) -> Result<(), PageError>;
}

impl<T: DocumentReader> DocumentReader for Arc<T> {
    async fn try_read(&self, probe: &Probe) -> Option<String> {
        (**self).try_read(probe).await
    }
}

impl<T: ActionPort> ActionPort for Arc<T> {
    async fn click(&self, control: Control) -> Result<(), PageError> {
        (**self).click(control).await
    }
}

#[cfg(test)]
mod tests;
