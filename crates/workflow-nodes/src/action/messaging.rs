//! Notification nodes
//!
//! Each sender takes exactly one upstream connection and needs a recipient
//! plus a message before it can run.

use workflow_core::{ConfigMap, NodeCategory, NodeTypeDefinition, NodeTypeDescriptor};

use crate::summary;

fn sender_definition(
    node_type: &str,
    label: &str,
    description: &str,
    recipient: &str,
    message: &str,
) -> NodeTypeDefinition {
    NodeTypeDefinition::new(node_type, NodeCategory::Action, label)
        .with_description(description)
        .require(recipient)
        .require(message)
        .max_inputs(1)
}

fn recipient_summary(config: &ConfigMap, key: &str) -> Option<String> {
    summary::text(config, key).map(|to| format!("To: {}", to))
}

/// Sends an email
pub struct SendEmailNode;

impl SendEmailNode {
    pub const NODE_TYPE: &'static str = "sendEmail";
    pub const TO: &'static str = "emailTo";
    pub const SUBJECT: &'static str = "emailSubject";

    pub fn summarize(config: &ConfigMap) -> Option<String> {
        recipient_summary(config, Self::TO)
    }
}

impl NodeTypeDescriptor for SendEmailNode {
    fn descriptor() -> NodeTypeDefinition {
        sender_definition(
            Self::NODE_TYPE,
            "Send Email",
            "Sends an email notification",
            Self::TO,
            Self::SUBJECT,
        )
    }
}

inventory::submit!(workflow_core::DescriptorFn(SendEmailNode::descriptor));
inventory::submit!(workflow_core::SummaryFn {
    node_type: SendEmailNode::NODE_TYPE,
    summarize: SendEmailNode::summarize,
});

/// Sends a text message
pub struct SendSmsNode;

impl SendSmsNode {
    pub const NODE_TYPE: &'static str = "sendSMS";
    pub const TO: &'static str = "smsTo";
    pub const MESSAGE: &'static str = "smsMessage";

    pub fn summarize(config: &ConfigMap) -> Option<String> {
        recipient_summary(config, Self::TO)
    }
}

impl NodeTypeDescriptor for SendSmsNode {
    fn descriptor() -> NodeTypeDefinition {
        sender_definition(
            Self::NODE_TYPE,
            "Send SMS",
            "Sends a text message",
            Self::TO,
            Self::MESSAGE,
        )
    }
}

inventory::submit!(workflow_core::DescriptorFn(SendSmsNode::descriptor));
inventory::submit!(workflow_core::SummaryFn {
    node_type: SendSmsNode::NODE_TYPE,
    summarize: SendSmsNode::summarize,
});

/// Sends a WhatsApp message
pub struct SendWhatsAppNode;

impl SendWhatsAppNode {
    pub const NODE_TYPE: &'static str = "sendWhatsApp";
    pub const TO: &'static str = "whatsappTo";
    pub const MESSAGE: &'static str = "whatsappMessage";

    pub fn summarize(config: &ConfigMap) -> Option<String> {
        recipient_summary(config, Self::TO)
    }
}

impl NodeTypeDescriptor for SendWhatsAppNode {
    fn descriptor() -> NodeTypeDefinition {
        sender_definition(
            Self::NODE_TYPE,
            "Send WhatsApp",
            "Sends a WhatsApp message",
            Self::TO,
            Self::MESSAGE,
        )
    }
}

inventory::submit!(workflow_core::DescriptorFn(SendWhatsAppNode::descriptor));
inventory::submit!(workflow_core::SummaryFn {
    node_type: SendWhatsAppNode::NODE_TYPE,
    summarize: SendWhatsAppNode::summarize,
});

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_senders_take_one_input() {
        for def in [
            SendEmailNode::descriptor(),
            SendSmsNode::descriptor(),
            SendWhatsAppNode::descriptor(),
        ] {
            assert_eq!(def.category, NodeCategory::Action);
            assert_eq!(def.input_limit(), 1);
            assert_eq!(def.rules.required_config_fields.len(), 2);
        }
        assert_eq!(
            SendEmailNode::descriptor().rules.required_config_fields,
            vec!["emailTo", "emailSubject"]
        );
    }

    #[test]
    fn test_summaries() {
        let config = json!({
            "emailTo": "ops@example.com",
            "smsTo": "+15550100",
            "whatsappTo": "+15550101"
        });
        let config = config.as_object().unwrap();
        assert_eq!(SendEmailNode::summarize(config).as_deref(), Some("To: ops@example.com"));
        assert_eq!(SendSmsNode::summarize(config).as_deref(), Some("To: +15550100"));
        assert_eq!(SendWhatsAppNode::summarize(config).as_deref(), Some("To: +15550101"));
        assert_eq!(SendEmailNode::summarize(&ConfigMap::new()), None);
    }
}
