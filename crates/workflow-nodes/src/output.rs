//! Output node

use workflow_core::{ConfigMap, NodeCategory, NodeTypeDefinition, NodeTypeDescriptor};

use crate::summary;

/// Terminal collector of run results
///
/// Gathers up to ten upstream results and never feeds another node.
pub struct OutputNode;

impl OutputNode {
    pub const NODE_TYPE: &'static str = "output";
    pub const FORMAT: &'static str = "outputFormat";
    pub const MAX_INPUTS: usize = 10;

    pub fn summarize(config: &ConfigMap) -> Option<String> {
        summary::text(config, Self::FORMAT).map(str::to_string)
    }
}

impl NodeTypeDescriptor for OutputNode {
    fn descriptor() -> NodeTypeDefinition {
        NodeTypeDefinition::new(Self::NODE_TYPE, NodeCategory::Output, "Output")
            .with_description("Collects the results of the workflow")
            .max_inputs(Self::MAX_INPUTS)
            .max_outputs(0)
    }
}

inventory::submit!(workflow_core::DescriptorFn(OutputNode::descriptor));
inventory::submit!(workflow_core::SummaryFn {
    node_type: OutputNode::NODE_TYPE,
    summarize: OutputNode::summarize,
});

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_descriptor() {
        let def = OutputNode::descriptor();
        assert_eq!(def.category, NodeCategory::Output);
        assert_eq!(def.input_limit(), 10);
        assert_eq!(def.output_limit(), Some(0));
    }

    #[test]
    fn test_summary() {
        let config = json!({"outputFormat": "csv"});
        assert_eq!(OutputNode::summarize(config.as_object().unwrap()).as_deref(), Some("csv"));
    }
}
