//! Plant equipment nodes
//!
//! Process models driven by the incoming data. Neither requires any
//! configuration to be placed.

use workflow_core::{ConfigMap, NodeCategory, NodeTypeDefinition, NodeTypeDescriptor};

use crate::summary;

/// Conveyor belt model
pub struct ConveyorNode;

impl ConveyorNode {
    pub const NODE_TYPE: &'static str = "conveyor";
    pub const SPEED: &'static str = "conveyorSpeed";

    pub fn summarize(config: &ConfigMap) -> Option<String> {
        summary::scalar(config, Self::SPEED).map(|speed| format!("Speed: {}", speed))
    }
}

impl NodeTypeDescriptor for ConveyorNode {
    fn descriptor() -> NodeTypeDefinition {
        NodeTypeDefinition::new(Self::NODE_TYPE, NodeCategory::Action, "Conveyor")
            .with_description("Simulates material moving along a conveyor")
    }
}

inventory::submit!(workflow_core::DescriptorFn(ConveyorNode::descriptor));
inventory::submit!(workflow_core::SummaryFn {
    node_type: ConveyorNode::NODE_TYPE,
    summarize: ConveyorNode::summarize,
});

/// FRANMIT reactor model
pub struct FranmitNode;

impl FranmitNode {
    pub const NODE_TYPE: &'static str = "franmit";
    pub const CATALYST: &'static str = "catalystType";

    pub fn summarize(config: &ConfigMap) -> Option<String> {
        summary::scalar(config, Self::CATALYST).map(|catalyst| format!("Catalyst: {}", catalyst))
    }
}

impl NodeTypeDescriptor for FranmitNode {
    fn descriptor() -> NodeTypeDefinition {
        NodeTypeDefinition::new(Self::NODE_TYPE, NodeCategory::Action, "FRANMIT Reactor")
            .with_description("Runs the FRANMIT reactor model on the incoming feed")
    }
}

inventory::submit!(workflow_core::DescriptorFn(FranmitNode::descriptor));
inventory::submit!(workflow_core::SummaryFn {
    node_type: FranmitNode::NODE_TYPE,
    summarize: FranmitNode::summarize,
});
