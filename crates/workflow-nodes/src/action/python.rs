use workflow_core::{truncate_text, ConfigMap, NodeCategory, NodeTypeDefinition, NodeTypeDescriptor};

use crate::summary::{self, SUMMARY_MAX_CHARS};

/// Runs a user-supplied Python snippet against the incoming data
pub struct PythonNode;

impl PythonNode {
    pub const NODE_TYPE: &'static str = "python";
    pub const CODE: &'static str = "pythonCode";

    /// First non-blank line of the code, truncated
    pub fn summarize(config: &ConfigMap) -> Option<String> {
        let code = summary::text(config, Self::CODE)?;
        let first_line = code.lines().map(str::trim).find(|line| !line.is_empty())?;
        Some(truncate_text(first_line, SUMMARY_MAX_CHARS))
    }
}

impl NodeTypeDescriptor for PythonNode {
    fn descriptor() -> NodeTypeDefinition {
        NodeTypeDefinition::new(Self::NODE_TYPE, NodeCategory::Action, "Python")
            .with_description("Runs a Python snippet")
            .require(Self::CODE)
    }
}

inventory::submit!(workflow_core::DescriptorFn(PythonNode::descriptor));
inventory::submit!(workflow_core::SummaryFn {
    node_type: PythonNode::NODE_TYPE,
    summarize: PythonNode::summarize,
});

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_summary_uses_first_line() {
        let config = json!({"pythonCode": "\n  rows = [r for r in data if r['ok']]\nreturn rows"});
        assert_eq!(
            PythonNode::summarize(config.as_object().unwrap()).as_deref(),
            Some("rows = [r for r in data if r['ok']]")
        );
    }

    #[test]
    fn test_summary_truncates_long_line() {
        let line = "x".repeat(80);
        let config = json!({ "pythonCode": line });
        let summary = PythonNode::summarize(config.as_object().unwrap()).unwrap();
        assert_eq!(summary, format!("{}...", "x".repeat(50)));
    }
}
