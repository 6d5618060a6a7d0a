use std::sync::Arc;

use crate::backends::html::ScraperTextExtractor;
use crate::config::ToolName;
use crate::traits::{HtmlTextExtractor, Transform};

/// Strip HTML transform - keeps only the rendered text of a markup fragment.
///
/// Parsing is delegated to an injected `HtmlTextExtractor`, so hosts that
/// already own an HTML engine can plug it in.
pub struct StripHtmlTransform {
    extractor: Arc<dyn HtmlTextExtractor>,
}

impl StripHtmlTransform {
    pub fn new(extractor: Arc<dyn HtmlTextExtractor>) -> Self {
        Self { extractor }
    }
}

impl Default for StripHtmlTransform {
    fn default() -> Self {
        Self::new(Arc::new(ScraperTextExtractor::new()))
    }
}

impl Transform for StripHtmlTransform {
    fn apply(&self, input: &str) -> String {
        self.extractor.text_content(input)
    }

    fn tool(&self) -> ToolName {
        ToolName::StripHtml
    }
}
