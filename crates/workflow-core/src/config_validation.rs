//! Node configuration validation
//!
//! Checks a node's config against the required fields declared by its type.
//! Does not consult the graph.

use serde::Serialize;

use crate::error::{Result, WorkflowError};
use crate::registry::NodeRegistry;
use crate::types::WorkflowNode;

/// Outcome of validating one node's configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigValidation {
    /// True iff `errors` is empty
    pub valid: bool,
    /// Human-readable problems, in required-field order
    pub errors: Vec<String>,
    /// Required fields that were unset
    #[serde(skip)]
    missing: Vec<String>,
    #[serde(skip)]
    unknown_type: Option<String>,
}

impl ConfigValidation {
    fn from_errors(errors: Vec<String>, missing: Vec<String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
            missing,
            unknown_type: None,
        }
    }

    fn unknown(node_type: &str) -> Self {
        Self {
            valid: false,
            errors: vec![WorkflowError::unknown_type(node_type).to_string()],
            missing: Vec::new(),
            unknown_type: Some(node_type.to_string()),
        }
    }

    /// Required fields that were found unset
    pub fn missing_fields(&self) -> &[String] {
        &self.missing
    }

    /// Convert into a `Result`, reporting the missing fields for `node_id`
    pub fn into_result(self, node_id: &str) -> Result<()> {
        if let Some(node_type) = self.unknown_type {
            Err(WorkflowError::UnknownNodeType(node_type))
        } else if self.valid {
            Ok(())
        } else {
            Err(WorkflowError::MissingRequiredConfig {
                node_id: node_id.to_string(),
                fields: self.missing,
            })
        }
    }
}

/// Whether a config value counts as unset
///
/// Null, `false`, zero, and the empty string are unset. Arrays and objects
/// count as set even when empty.
pub fn is_unset(value: Option<&serde_json::Value>) -> bool {
    match value {
        None | Some(serde_json::Value::Null) => true,
        Some(serde_json::Value::Bool(b)) => !b,
        Some(serde_json::Value::Number(n)) => n.as_f64().is_some_and(|f| f == 0.0),
        Some(serde_json::Value::String(s)) => s.is_empty(),
        Some(serde_json::Value::Array(_)) | Some(serde_json::Value::Object(_)) => false,
    }
}

/// Validate a node's configuration against its type's required fields
///
/// An unregistered type yields a single error and `valid = false`.
pub fn validate_node_config(registry: &NodeRegistry, node: &WorkflowNode) -> ConfigValidation {
    let Some(definition) = registry.get_definition(&node.node_type) else {
        return ConfigValidation::unknown(&node.node_type);
    };

    let missing: Vec<String> = definition
        .rules
        .required_config_fields
        .iter()
        .filter(|field| is_unset(node.config.get(field.as_str())))
        .cloned()
        .collect();

    let errors = missing
        .iter()
        .map(|field| format!("Missing required configuration: {}", field))
        .collect();

    ConfigValidation::from_errors(errors, missing)
}
