// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! HTML5 fragment parsing backed by `scraper` (html5ever).

use scraper::{Html, Node};

use crate::traits::HtmlTextExtractor;

/// Elements whose text is never rendered.
const NON_RENDERED_ELEMENTS: [&str; 3] = ["script", "style", "template"];

/// Text extractor that parses input the way a browser parses an
/// `innerHTML` assignment, then concatenates the rendered text nodes.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScraperTextExtractor;

impl ScraperTextExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl HtmlTextExtractor for ScraperTextExtractor {
    fn text_content(&self, markup: &str) -> String {
        let fragment = Html::parse_fragment(markup);
        let mut text = String::new();

        for node in fragment.tree.root().descendants() {
            let Node::Text(chunk) = node.value() else {
                continue;
            };
            let hidden = node.ancestors().any(|ancestor| match ancestor.value() {
                Node::Element(element) => NON_RENDERED_ELEMENTS.contains(&element.name()),
                _ => false,
            });
            if !hidden {
                text.push_str(chunk);
            }
        }

        text
    }
}
