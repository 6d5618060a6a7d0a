use async_trait::async_trait;

use crate::errors::ClipboardError;
use crate::traits::Clipboard;

/// Clipboard of a host that grants no access at all.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledClipboard;

#[async_trait]
impl Clipboard for DisabledClipboard {
    async fn read_text(&self) -> Result<String, ClipboardError> {
        Err(ClipboardError::permission_denied(
            "clipboard backend is disabled",
        ))
    }

    async fn write_text(&self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::unavailable("clipboard backend is disabled"))
    }

    fn name(&self) -> &'static str {
        "disabled"
    }
}
