//! Trigger nodes
//!
//! Starting points of a workflow. They take no incoming connections.

use workflow_core::{ConfigMap, NodeCategory, NodeTypeDefinition, NodeTypeDescriptor};

use crate::summary;

/// Manual or scheduled start of a run
pub struct TriggerNode;

impl TriggerNode {
    pub const NODE_TYPE: &'static str = "trigger";
    /// Optional schedule expression
    pub const SCHEDULE: &'static str = "schedule";

    /// The schedule, when one is configured
    pub fn summarize(config: &ConfigMap) -> Option<String> {
        summary::text(config, Self::SCHEDULE).map(str::to_string)
    }
}

impl NodeTypeDescriptor for TriggerNode {
    fn descriptor() -> NodeTypeDefinition {
        NodeTypeDefinition::new(Self::NODE_TYPE, NodeCategory::Trigger, "Trigger")
            .with_description("Starts the workflow manually or on a schedule")
            .max_inputs(0)
    }
}

inventory::submit!(workflow_core::DescriptorFn(TriggerNode::descriptor));
inventory::submit!(workflow_core::SummaryFn {
    node_type: TriggerNode::NODE_TYPE,
    summarize: TriggerNode::summarize,
});

/// Start of a run on an incoming HTTP call
pub struct WebhookNode;

impl WebhookNode {
    pub const NODE_TYPE: &'static str = "webhook";
    pub const WEBHOOK_ID: &'static str = "webhookId";

    pub fn summarize(config: &ConfigMap) -> Option<String> {
        summary::text(config, Self::WEBHOOK_ID).map(str::to_string)
    }
}

impl NodeTypeDescriptor for WebhookNode {
    fn descriptor() -> NodeTypeDefinition {
        NodeTypeDefinition::new(Self::NODE_TYPE, NodeCategory::Trigger, "Webhook")
            .with_description("Starts the workflow when its webhook is called")
            .max_inputs(0)
            .start_priority(1)
    }
}

inventory::submit!(workflow_core::DescriptorFn(WebhookNode::descriptor));
inventory::submit!(workflow_core::SummaryFn {
    node_type: WebhookNode::NODE_TYPE,
    summarize: WebhookNode::summarize,
});
