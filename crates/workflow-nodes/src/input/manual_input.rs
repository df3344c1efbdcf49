use workflow_core::{ConfigMap, NodeCategory, NodeTypeDefinition, NodeTypeDescriptor};

use crate::summary;

/// A named value typed in by the user
pub struct ManualInputNode;

impl ManualInputNode {
    pub const NODE_TYPE: &'static str = "manualInput";
    pub const VAR_NAME: &'static str = "inputVarName";
    pub const VAR_VALUE: &'static str = "inputVarValue";

    /// `"<name> = <value>"`, or just the name while no value is set
    pub fn summarize(config: &ConfigMap) -> Option<String> {
        let name = summary::text(config, Self::VAR_NAME)?;
        Some(match summary::scalar(config, Self::VAR_VALUE) {
            Some(value) => format!("{} = {}", name, value),
            None => name.to_string(),
        })
    }
}

impl NodeTypeDescriptor for ManualInputNode {
    fn descriptor() -> NodeTypeDefinition {
        NodeTypeDefinition::new(Self::NODE_TYPE, NodeCategory::Input, "Manual Input")
            .with_description("Provides a value entered by the user")
            .require(Self::VAR_NAME)
            .max_inputs(0)
    }
}

inventory::submit!(workflow_core::DescriptorFn(ManualInputNode::descriptor));
inventory::submit!(workflow_core::SummaryFn {
    node_type: ManualInputNode::NODE_TYPE,
    summarize: ManualInputNode::summarize,
});
