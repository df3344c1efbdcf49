//! Node type descriptors and metadata
//!
//! This module provides the `NodeTypeDescriptor` trait that lets each node
//! type describe its category, capability flags and validation rules, plus
//! the link-time registration hooks used to build the built-in catalog.
//!
//! A node type is registered once by submitting its descriptor function and,
//! optionally, a summary strategy:
//!
//! ```ignore
//! inventory::submit!(workflow_core::DescriptorFn(HttpNode::descriptor));
//! inventory::submit!(workflow_core::SummaryFn {
//!     node_type: "http",
//!     summarize: HttpNode::summarize,
//! });
//! ```

use serde::{Deserialize, Serialize};

use crate::types::{ConfigMap, NodeCategory};

/// Trait for node types that can describe their metadata
///
/// # Example
///
/// ```ignore
/// impl NodeTypeDescriptor for SendEmailNode {
///     fn descriptor() -> NodeTypeDefinition {
///         NodeTypeDefinition::new("sendEmail", NodeCategory::Action, "Send Email")
///             .require("emailTo")
///             .max_inputs(1)
///     }
/// }
/// ```
pub trait NodeTypeDescriptor {
    /// Get the static definition for this node type
    fn descriptor() -> NodeTypeDefinition
    where
        Self: Sized;
}

/// Cap on the number of connections a node of some type may take part in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaxConnections {
    /// Maximum incoming connections, absent = no type-specific cap
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<usize>,
    /// Maximum outgoing connections, absent = unlimited
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<usize>,
}

/// Validation rules attached to a node type
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationRules {
    /// Config fields that must be set before the node can run
    #[serde(default)]
    pub required_config_fields: Vec<String>,
    /// Connection caps
    #[serde(default)]
    pub max_connections: MaxConnections,
}

/// Complete, immutable definition of a node type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeTypeDefinition {
    /// Unique type tag (e.g., "sendEmail")
    pub node_type: String,
    /// Category for palette grouping and classification
    pub category: NodeCategory,
    /// Human-readable label
    pub label: String,
    /// Description of what the node does
    #[serde(default)]
    pub description: String,
    /// Whether the node merges two labelled inputs (ports A/B)
    #[serde(default)]
    pub accepts_multiple_inputs: bool,
    /// Whether the node has more than one labelled output
    #[serde(default)]
    pub produces_multiple_outputs: bool,
    /// Required config and connection caps
    #[serde(default)]
    pub rules: ValidationRules,
    /// Rank among trigger-category start candidates, lower starts first
    #[serde(default)]
    pub start_priority: u8,
}

impl NodeTypeDefinition {
    /// Create a definition with no rules and no capability flags
    pub fn new(
        node_type: impl Into<String>,
        category: NodeCategory,
        label: impl Into<String>,
    ) -> Self {
        Self {
            node_type: node_type.into(),
            category,
            label: label.into(),
            description: String::new(),
            accepts_multiple_inputs: false,
            produces_multiple_outputs: false,
            rules: ValidationRules::default(),
            start_priority: 0,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Mark the type as a two-port join
    pub fn multiple_inputs(mut self) -> Self {
        self.accepts_multiple_inputs = true;
        self
    }

    /// Mark the type as having labelled outputs
    pub fn multiple_outputs(mut self) -> Self {
        self.produces_multiple_outputs = true;
        self
    }

    /// Add a required config field
    pub fn require(mut self, field: impl Into<String>) -> Self {
        self.rules.required_config_fields.push(field.into());
        self
    }

    /// Cap incoming connections
    pub fn max_inputs(mut self, max: usize) -> Self {
        self.rules.max_connections.input = Some(max);
        self
    }

    /// Cap outgoing connections
    pub fn max_outputs(mut self, max: usize) -> Self {
        self.rules.max_connections.output = Some(max);
        self
    }

    /// Rank this type behind other triggers when choosing where a run starts
    pub fn start_priority(mut self, priority: u8) -> Self {
        self.start_priority = priority;
        self
    }

    /// Effective incoming connection limit
    ///
    /// Join-like types take exactly two inputs; otherwise the declared cap
    /// applies, defaulting to a single input.
    pub fn input_limit(&self) -> usize {
        if self.accepts_multiple_inputs {
            2
        } else {
            self.rules.max_connections.input.unwrap_or(1)
        }
    }

    /// Outgoing connection limit, if any
    pub fn output_limit(&self) -> Option<usize> {
        self.rules.max_connections.output
    }
}

/// Link-time registration of a node type definition
pub struct DescriptorFn(pub fn() -> NodeTypeDefinition);

inventory::collect!(DescriptorFn);

/// Strategy that extracts a short synopsis from a node's config
pub type Summarizer = fn(&ConfigMap) -> Option<String>;

/// Link-time registration of a summary strategy for one node type
///
/// Uses the same function-pointer pattern as `DescriptorFn`.
pub struct SummaryFn {
    /// The node type this strategy belongs to
    pub node_type: &'static str,
    /// Extracts the synopsis, `None` while the relevant config is unset
    pub summarize: Summarizer,
}

inventory::collect!(SummaryFn);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_limit_defaults_to_one() {
        let def = NodeTypeDefinition::new("http", NodeCategory::Action, "HTTP");
        assert_eq!(def.input_limit(), 1);
        assert_eq!(def.output_limit(), None);
    }

    #[test]
    fn test_input_limit_join_overrides_cap() {
        let def = NodeTypeDefinition::new("join", NodeCategory::Logic, "Join")
            .multiple_inputs()
            .max_inputs(5);
        assert_eq!(def.input_limit(), 2);
    }

    #[test]
    fn test_input_limit_uses_declared_cap() {
        let def = NodeTypeDefinition::new("output", NodeCategory::Output, "Output")
            .max_inputs(10)
            .max_outputs(0);
        assert_eq!(def.input_limit(), 10);
        assert_eq!(def.output_limit(), Some(0));
    }

    #[test]
    fn test_definition_serialization() {
        let def = NodeTypeDefinition::new("sendEmail", NodeCategory::Action, "Send Email")
            .require("emailTo")
            .max_inputs(1);

        let json = serde_json::to_value(&def).unwrap();
        assert_eq!(json["nodeType"], "sendEmail");
        assert_eq!(json["category"], "action");
        assert_eq!(json["rules"]["requiredConfigFields"][0], "emailTo");
        assert_eq!(json["rules"]["maxConnections"]["input"], 1);
        assert!(json["rules"]["maxConnections"].get("output").is_none());
    }
}
