pub mod clipboard;
pub mod html;
pub mod transform;

pub use crate::config::{ToolName, ToolRegistry};
pub use clipboard::Clipboard;
pub use html::HtmlTextExtractor;
pub use transform::Transform;
