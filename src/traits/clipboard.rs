use async_trait::async_trait;

use crate::errors::ClipboardError;

/// Host clipboard capability.
///
/// Both operations have exactly two outcomes: success or a reportable
/// `ClipboardError`. Callers treat every error as non-fatal.
#[async_trait]
pub trait Clipboard: Send + Sync {
    async fn read_text(&self) -> Result<String, ClipboardError>;

    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;

    /// Backend label used in log fields.
    fn name(&self) -> &'static str;
}
