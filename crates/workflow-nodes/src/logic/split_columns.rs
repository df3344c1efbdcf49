use workflow_core::{ConfigMap, NodeCategory, NodeTypeDefinition, NodeTypeDescriptor};

use crate::summary;

/// Splits each row's columns between outputs A and B
pub struct SplitColumnsNode;

impl SplitColumnsNode {
    pub const NODE_TYPE: &'static str = "splitColumns";
    /// Columns sent to output A
    pub const COLUMNS_A: &'static str = "columnsA";
    /// Columns sent to output B
    pub const COLUMNS_B: &'static str = "columnsB";

    /// `"A: n cols, B: m cols"`, absent while no column is assigned
    pub fn summarize(config: &ConfigMap) -> Option<String> {
        let a = summary::count(config, Self::COLUMNS_A);
        let b = summary::count(config, Self::COLUMNS_B);
        if a == 0 && b == 0 {
            return None;
        }
        Some(format!("A: {} cols, B: {} cols", a, b))
    }
}

impl NodeTypeDescriptor for SplitColumnsNode {
    fn descriptor() -> NodeTypeDefinition {
        NodeTypeDefinition::new(Self::NODE_TYPE, NodeCategory::Logic, "Split Columns")
            .with_description("Sends chosen columns to output A and the rest to output B")
            .multiple_outputs()
    }
}

inventory::submit!(workflow_core::DescriptorFn(SplitColumnsNode::descriptor));
inventory::submit!(workflow_core::SummaryFn {
    node_type: SplitColumnsNode::NODE_TYPE,
    summarize: SplitColumnsNode::summarize,
});
