//! Fetch Data node
//!
//! Loads the records of a named entity at the start of a run.

use workflow_core::{ConfigMap, NodeCategory, NodeTypeDefinition, NodeTypeDescriptor};

use crate::summary;

/// Fetches all records of one entity
///
/// # Config
/// - `entityName` (required) - Entity to load
pub struct FetchDataNode;

impl FetchDataNode {
    pub const NODE_TYPE: &'static str = "fetchData";
    /// Config key for the entity to load
    pub const ENTITY_NAME: &'static str = "entityName";

    /// The configured entity name
    pub fn summarize(config: &ConfigMap) -> Option<String> {
        summary::text(config, Self::ENTITY_NAME).map(str::to_string)
    }
}

impl NodeTypeDescriptor for FetchDataNode {
    fn descriptor() -> NodeTypeDefinition {
        NodeTypeDefinition::new(Self::NODE_TYPE, NodeCategory::Input, "Fetch Data")
            .with_description("Loads the records of an entity")
            .require(Self::ENTITY_NAME)
            .max_inputs(0)
    }
}

inventory::submit!(workflow_core::DescriptorFn(FetchDataNode::descriptor));
inventory::submit!(workflow_core::SummaryFn {
    node_type: FetchDataNode::NODE_TYPE,
    summarize: FetchDataNode::summarize,
});
