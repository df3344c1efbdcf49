use workflow_core::{ConfigMap, NodeCategory, NodeTypeDefinition, NodeTypeDescriptor};

use crate::summary;

/// Adds a constant field to every record
pub struct AddFieldNode;

impl AddFieldNode {
    pub const NODE_TYPE: &'static str = "addField";
    pub const FIELD_NAME: &'static str = "fieldName";
    pub const FIELD_VALUE: &'static str = "fieldValue";

    pub fn summarize(config: &ConfigMap) -> Option<String> {
        let name = summary::text(config, Self::FIELD_NAME)?;
        let value = summary::scalar(config, Self::FIELD_VALUE).unwrap_or_default();
        Some(format!("{} = {}", name, value))
    }
}

impl NodeTypeDescriptor for AddFieldNode {
    fn descriptor() -> NodeTypeDefinition {
        NodeTypeDefinition::new(Self::NODE_TYPE, NodeCategory::Logic, "Add Field")
            .with_description("Adds a field with a fixed value to each record")
            .require(Self::FIELD_NAME)
    }
}

inventory::submit!(workflow_core::DescriptorFn(AddFieldNode::descriptor));
inventory::submit!(workflow_core::SummaryFn {
    node_type: AddFieldNode::NODE_TYPE,
    summarize: AddFieldNode::summarize,
});

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_summary() {
        let config = json!({"fieldName": "region", "fieldValue": "EMEA"});
        assert_eq!(
            AddFieldNode::summarize(config.as_object().unwrap()).as_deref(),
            Some("region = EMEA")
        );

        let config = json!({"fieldName": "flagged"});
        assert_eq!(
            AddFieldNode::summarize(config.as_object().unwrap()).as_deref(),
            Some("flagged = ")
        );
    }
}
