//! Join node
//!
//! Merges two upstream datasets arriving on input ports A and B.

use workflow_core::{ConfigMap, NodeCategory, NodeTypeDefinition, NodeTypeDescriptor};

use crate::summary;

/// Two-port merge
///
/// # Config
/// - `joinStrategy` - How rows are matched, e.g. `inner` or `concat`
/// - `joinKey` - Field rows are matched on
pub struct JoinNode;

impl JoinNode {
    pub const NODE_TYPE: &'static str = "join";
    pub const STRATEGY: &'static str = "joinStrategy";
    pub const KEY: &'static str = "joinKey";

    /// `"<strategy> on <key>"`, or the strategy alone
    pub fn summarize(config: &ConfigMap) -> Option<String> {
        let strategy = summary::text(config, Self::STRATEGY)?;
        Some(match summary::text(config, Self::KEY) {
            Some(key) => format!("{} on {}", strategy, key),
            None => strategy.to_string(),
        })
    }
}

impl NodeTypeDescriptor for JoinNode {
    fn descriptor() -> NodeTypeDefinition {
        NodeTypeDefinition::new(Self::NODE_TYPE, NodeCategory::Logic, "Join")
            .with_description("Merges the data arriving on inputs A and B")
            .multiple_inputs()
    }
}

inventory::submit!(workflow_core::DescriptorFn(JoinNode::descriptor));
inventory::submit!(workflow_core::SummaryFn {
    node_type: JoinNode::NODE_TYPE,
    summarize: JoinNode::summarize,
});
