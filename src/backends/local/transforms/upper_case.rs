use crate::config::ToolName;
use crate::traits::Transform;

/// Upper Case transform
pub struct UpperCaseTransform;

impl UpperCaseTransform {
    pub fn new() -> Self {
        Self
    }
}

impl Transform for UpperCaseTransform {
    fn apply(&self, input: &str) -> String {
        input.to_uppercase()
    }

    fn tool(&self) -> ToolName {
        ToolName::UpperCase
    }
}
