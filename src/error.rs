//! Crate error type.
//!
//! Only embedder-facing failures get an error value; every internal
//! missing-prerequisite condition (document absent, not yet mounted,
//! node refs unfilled) degrades to a logged no-op instead.

use thiserror::Error;

/// Failures surfaced to the embedding page.
#[derive(Debug, Error)]
pub enum WidgetError {
    /// `updateConfig` received JSON that does not parse as overrides.
    #[error("invalid configuration overrides: {0}")]
    InvalidOverrides(#[from] serde_json::Error),
}
