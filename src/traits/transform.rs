use crate::config::{ToolCategory, ToolName};

/// A catalog entry: a pure, total function from text to text.
///
/// Implementations hold no mutable state, so one instance can serve any
/// number of calls. `apply` never fails; malformed input yields a
/// best-effort deterministic string.
pub trait Transform: Send + Sync {
    fn apply(&self, input: &str) -> String;

    fn tool(&self) -> ToolName;

    fn name(&self) -> &'static str {
        self.tool().as_str()
    }

    fn category(&self) -> ToolCategory {
        self.tool().category()
    }
}
