// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;
use std::time::Instant;

use crate::config::{ToolName, ToolRegistry};
use crate::errors::DispatchError;
use crate::observability::messages::tool::{
    ToolExecutionCompleted, ToolExecutionStarted, ToolLookupFailed,
};
use crate::observability::messages::StructuredLog;
use crate::traits::Transform;

/// Routes a user-selected tool name to its registered transform.
///
/// The dispatcher owns no text; it resolves, runs and logs. Transforms run
/// synchronously to completion on the caller's thread.
#[derive(Debug, Clone, Default)]
pub struct Dispatcher {
    registry: ToolRegistry,
}

impl Dispatcher {
    pub fn new(registry: ToolRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Resolve a wire name to a registered transform.
    pub fn resolve(&self, name: &str) -> Result<&Arc<dyn Transform>, DispatchError> {
        let resolved = name.parse::<ToolName>().and_then(|tool| {
            self.registry
                .get(tool)
                .ok_or(DispatchError::ToolDisabled { tool })
        });

        if let Err(e) = &resolved {
            ToolLookupFailed {
                requested: name,
                reason: &e.to_string(),
            }
            .log();
        }
        resolved
    }

    /// Run the named tool over `input`.
    pub fn dispatch(&self, name: &str, input: &str) -> Result<String, DispatchError> {
        let transform = self.resolve(name)?;
        Ok(Self::execute(transform.as_ref(), input))
    }

    /// Run an already-parsed tool over `input`.
    pub fn run(&self, tool: ToolName, input: &str) -> Result<String, DispatchError> {
        let transform = self
            .registry
            .get(tool)
            .ok_or(DispatchError::ToolDisabled { tool })?;
        Ok(Self::execute(transform.as_ref(), input))
    }

    fn execute(transform: &dyn Transform, input: &str) -> String {
        let start_msg = ToolExecutionStarted {
            tool: transform.name(),
            input_size: input.len(),
        };
        let span = start_msg.span("dispatch");
        let _guard = span.enter();
        start_msg.log();

        let start_time = Instant::now();
        let output = transform.apply(input);

        ToolExecutionCompleted {
            tool: transform.name(),
            input_size: input.len(),
            output_size: output.len(),
            duration: start_time.elapsed(),
        }
        .log();

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn test_dispatch_by_wire_name() {
        let dispatcher = Dispatcher::default();
        assert_eq!(
            dispatcher.dispatch("title-case", "the quick brown fox").unwrap(),
            "The Quick Brown Fox"
        );
        assert_eq!(
            dispatcher.dispatch("extract-emails", "no addresses here").unwrap(),
            "No emails found."
        );
    }

    #[test]
    fn test_unknown_tool() {
        let dispatcher = Dispatcher::default();
        assert_eq!(
            dispatcher.dispatch("reverse", "abc").unwrap_err(),
            DispatchError::UnknownTool {
                requested: "reverse".to_string()
            }
        );
    }

    #[test]
    fn test_disabled_tool() {
        let cfg = Config {
            tools: Some(vec![ToolName::UpperCase]),
            ..Config::default()
        };
        let dispatcher = Dispatcher::new(ToolRegistry::from_config(&cfg));

        assert_eq!(dispatcher.run(ToolName::UpperCase, "ok").unwrap(), "OK");
        assert_eq!(
            dispatcher.dispatch("sort-lines", "b\na").unwrap_err(),
            DispatchError::ToolDisabled {
                tool: ToolName::SortLines
            }
        );
    }

    #[test]
    fn test_dispatch_does_not_reject_empty_input() {
        let dispatcher = Dispatcher::default();
        assert_eq!(dispatcher.dispatch("trim-space", "").unwrap(), "");
    }
}
