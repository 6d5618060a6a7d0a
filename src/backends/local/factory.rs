use std::sync::Arc;

use super::transforms::*;
use crate::config::ToolName;
use crate::traits::{HtmlTextExtractor, Transform};

/// Factory for creating in-process transform instances
pub struct LocalTransformFactory;

impl LocalTransformFactory {
    /// Create the transform for a tool, with default host capabilities
    pub fn create_transform(tool: ToolName) -> Arc<dyn Transform> {
        match tool {
            ToolName::SmartUnwrap => Arc::new(SmartUnwrapTransform::new()),
            ToolName::TrimSpace => Arc::new(TrimSpaceTransform::new()),
            ToolName::FixQuotes => Arc::new(FixQuotesTransform::new()),
            ToolName::SentenceCase => Arc::new(SentenceCaseTransform::new()),
            ToolName::TitleCase => Arc::new(TitleCaseTransform::new()),
            ToolName::UpperCase => Arc::new(UpperCaseTransform::new()),
            ToolName::SortLines => Arc::new(SortLinesTransform::new()),
            ToolName::StripHtml => Arc::new(StripHtmlTransform::default()),
            ToolName::ExtractEmails => Arc::new(ExtractEmailsTransform::new()),
        }
    }

    /// Create the strip-html transform around a host-provided HTML parser
    pub fn create_strip_html(extractor: Arc<dyn HtmlTextExtractor>) -> Arc<dyn Transform> {
        Arc::new(StripHtmlTransform::new(extractor))
    }

    /// Create a transform from its wire name
    pub fn create_by_name(name: &str) -> Result<Arc<dyn Transform>, String> {
        name.parse::<ToolName>()
            .map(Self::create_transform)
            .map_err(|e| e.to_string())
    }

    /// List all available tool names
    pub fn list_available_implementations() -> Vec<&'static str> {
        ToolName::ALL.iter().map(|tool| tool.as_str()).collect()
    }

    /// Check if a tool name is available
    pub fn is_implementation_available(name: &str) -> bool {
        Self::list_available_implementations().contains(&name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_transforms_table_driven() {
        let test_cases = vec![
            ("smart-unwrap", "a\nb", "a b"),
            ("trim-space", " a  b ", "a b"),
            ("fix-quotes", "\u{201C}q\u{201D}", "\"q\""),
            ("sent-case", "HI. YOU", "Hi. You"),
            ("title-case", "the quick brown fox", "The Quick Brown Fox"),
            ("upper-case", "hello", "HELLO"),
            ("sort-lines", "b\na", "a\nb"),
            ("strip-html", "<i>x</i>", "x"),
            ("extract-emails", "to: a@b.co", "a@b.co"),
        ];

        for (name, input, expected) in test_cases {
            let transform = LocalTransformFactory::create_by_name(name)
                .unwrap_or_else(|e| panic!("Failed to create transform {}: {}", name, e));
            assert_eq!(transform.name(), name);
            assert_eq!(transform.apply(input), expected, "Failed for tool: {}", name);
        }
    }

    #[test]
    fn test_create_by_name_unknown() {
        let result = LocalTransformFactory::create_by_name("reverse_text");
        let error_msg = result.err().unwrap();
        assert!(error_msg.contains("Unknown tool: 'reverse_text'"));
    }

    #[test]
    fn test_every_transform_is_total_on_awkward_input() {
        let inputs = ["", "\n", "\u{0}\u{FFFD}<<&&;", "<div", "a@", "\r\n\r\n\t"];
        for name in LocalTransformFactory::list_available_implementations() {
            let transform = LocalTransformFactory::create_by_name(name).unwrap();
            for input in inputs {
                let first = transform.apply(input);
                assert_eq!(first, transform.apply(input), "{} not deterministic", name);
            }
        }
    }

    #[test]
    fn test_is_implementation_available() {
        assert!(LocalTransformFactory::is_implementation_available("strip-html"));
        assert!(!LocalTransformFactory::is_implementation_available("change_text_case_upper"));
    }
}
