// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::backends::local::LocalTransformFactory;
use crate::config::{Config, ToolName};
use crate::traits::Transform;
use std::collections::HashMap;
use std::sync::Arc;

/// A type-safe registry mapping tool names to their transforms.
///
/// The `ToolRegistry` is the toolkit API consumed by presentation layers: a
/// lookup from `ToolName` to a shared `Arc<dyn Transform>`. It has no
/// dependency on any UI or clipboard capability.
///
/// # Examples
///
/// ```
/// use the_textkit::config::{ToolName, ToolRegistry};
///
/// let registry = ToolRegistry::with_all_tools();
/// let upper = registry.get(ToolName::UpperCase).unwrap();
/// assert_eq!(upper.apply("shout"), "SHOUT");
/// ```
#[derive(Clone)]
pub struct ToolRegistry(pub HashMap<ToolName, Arc<dyn Transform>>);

impl ToolRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Registry holding the whole catalog with default capabilities
    pub fn with_all_tools() -> Self {
        Self::from_tools(ToolName::ALL)
    }

    /// Create a ToolRegistry from configuration, honoring the `tools` subset
    pub fn from_config(cfg: &Config) -> Self {
        Self::from_tools(cfg.enabled_tools())
    }

    fn from_tools(tools: impl IntoIterator<Item = ToolName>) -> Self {
        let mut registry = Self::new();
        for tool in tools {
            registry.insert(LocalTransformFactory::create_transform(tool));
        }
        registry
    }

    /// Insert a transform, keyed by the tool it implements
    pub fn insert(&mut self, transform: Arc<dyn Transform>) {
        self.0.insert(transform.tool(), transform);
    }

    /// Get a transform by tool name
    pub fn get(&self, tool: ToolName) -> Option<&Arc<dyn Transform>> {
        self.0.get(&tool)
    }

    /// Check if a tool is registered
    pub fn contains_key(&self, tool: ToolName) -> bool {
        self.0.contains_key(&tool)
    }

    /// Registered tools in catalog order
    pub fn tools(&self) -> Vec<ToolName> {
        ToolName::ALL
            .into_iter()
            .filter(|tool| self.0.contains_key(tool))
            .collect()
    }

    /// Get the number of registered tools
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::with_all_tools()
    }
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("tool_count", &self.0.len())
            .field("tools", &self.tools())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_table_driven() {
        struct TestCase {
            name: &'static str,
            tools: Option<Vec<ToolName>>,
            expected: Vec<ToolName>,
        }

        let test_cases = vec![
            TestCase {
                name: "tools omitted",
                tools: None,
                expected: ToolName::ALL.to_vec(),
            },
            TestCase {
                name: "explicit empty list",
                tools: Some(vec![]),
                expected: vec![],
            },
            TestCase {
                name: "subset out of order",
                tools: Some(vec![ToolName::StripHtml, ToolName::TrimSpace]),
                expected: vec![ToolName::TrimSpace, ToolName::StripHtml],
            },
        ];

        for case in test_cases {
            let cfg = Config {
                tools: case.tools,
                ..Config::default()
            };
            let registry = ToolRegistry::from_config(&cfg);
            assert_eq!(registry.tools(), case.expected, "case: {}", case.name);
            assert_eq!(registry.len(), case.expected.len(), "case: {}", case.name);
        }
    }

    #[test]
    fn test_registered_transform_matches_key() {
        let registry = ToolRegistry::with_all_tools();
        for tool in ToolName::ALL {
            let transform = registry.get(tool).unwrap();
            assert_eq!(transform.tool(), tool);
            assert_eq!(transform.name(), tool.as_str());
        }
    }

    #[test]
    fn test_missing_tool_lookup() {
        let registry = ToolRegistry::new();
        assert!(registry.is_empty());
        assert!(!registry.contains_key(ToolName::FixQuotes));
        assert!(registry.get(ToolName::FixQuotes).is_none());
    }
}
