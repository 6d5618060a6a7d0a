use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::errors::ClipboardError;
use crate::traits::Clipboard;

/// Process-local clipboard.
///
/// `deny_reads` simulates a host that refuses clipboard reads while still
/// accepting writes, the common browser situation.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Mutex<String>,
    deny_reads: bool,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            contents: Mutex::new(text.into()),
            deny_reads: false,
        }
    }

    pub fn denying_reads() -> Self {
        Self {
            contents: Mutex::new(String::new()),
            deny_reads: true,
        }
    }

    /// Current contents, bypassing the read permission check.
    pub async fn snapshot(&self) -> String {
        self.contents.lock().await.clone()
    }
}

#[async_trait]
impl Clipboard for MemoryClipboard {
    async fn read_text(&self) -> Result<String, ClipboardError> {
        if self.deny_reads {
            return Err(ClipboardError::permission_denied(
                "clipboard reads are not permitted",
            ));
        }
        Ok(self.contents.lock().await.clone())
    }

    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut contents = self.contents.lock().await;
        contents.clear();
        contents.push_str(text);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
