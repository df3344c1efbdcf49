//! Condition node
//!
//! Compares a field of the incoming data against a value. Outgoing
//! connections leave either the `true` or the `false` output, and only the
//! branch matching the result is followed.

use workflow_core::{ConfigMap, NodeCategory, NodeTypeDefinition, NodeTypeDescriptor};

use crate::summary;

/// Two-way branch on a field comparison
///
/// # Config
/// - `conditionField` (required) - Field of the incoming data
/// - `conditionOperator` (required) - Comparison, e.g. `>` or `equals`
/// - `conditionValue` - Right-hand side of the comparison
pub struct ConditionNode;

impl ConditionNode {
    pub const NODE_TYPE: &'static str = "condition";
    pub const FIELD: &'static str = "conditionField";
    pub const OPERATOR: &'static str = "conditionOperator";
    pub const VALUE: &'static str = "conditionValue";

    /// `"<field> <operator> <value>"`
    pub fn summarize(config: &ConfigMap) -> Option<String> {
        let field = summary::text(config, Self::FIELD)?;
        let operator = summary::text(config, Self::OPERATOR)?;
        Some(match summary::scalar(config, Self::VALUE) {
            Some(value) => format!("{} {} {}", field, operator, value),
            None => format!("{} {}", field, operator),
        })
    }
}

impl NodeTypeDescriptor for ConditionNode {
    fn descriptor() -> NodeTypeDefinition {
        NodeTypeDefinition::new(Self::NODE_TYPE, NodeCategory::Logic, "Condition")
            .with_description("Routes data down the true or false branch")
            .multiple_outputs()
            .require(Self::FIELD)
            .require(Self::OPERATOR)
    }
}

inventory::submit!(workflow_core::DescriptorFn(ConditionNode::descriptor));
inventory::submit!(workflow_core::SummaryFn {
    node_type: ConditionNode::NODE_TYPE,
    summarize: ConditionNode::summarize,
});

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_descriptor() {
        let def = ConditionNode::descriptor();
        assert_eq!(def.category, NodeCategory::Logic);
        assert!(def.produces_multiple_outputs);
        assert!(!def.accepts_multiple_inputs);
        assert_eq!(
            def.rules.required_config_fields,
            vec!["conditionField", "conditionOperator"]
        );
    }

    #[test]
    fn test_summary() {
        let config = json!({
            "conditionField": "amount",
            "conditionOperator": ">",
            "conditionValue": 100
        });
        assert_eq!(
            ConditionNode::summarize(config.as_object().unwrap()).as_deref(),
            Some("amount > 100")
        );

        let config = json!({"conditionField": "status", "conditionOperator": "isEmpty"});
        assert_eq!(
            ConditionNode::summarize(config.as_object().unwrap()).as_deref(),
            Some("status isEmpty")
        );

        let config = json!({"conditionField": "amount"});
        assert_eq!(ConditionNode::summarize(config.as_object().unwrap()), None);
    }
}
