//! Error types for the workflow core

use thiserror::Error;

use crate::connection::ConnectionRejection;
use crate::types::NodeId;

/// Result type alias using WorkflowError
pub type Result<T> = std::result::Result<T, WorkflowError>;

/// Errors that can occur in the workflow core
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// Type tag is not present in the registry
    #[error("Unknown node type: {0}")]
    UnknownNodeType(String),

    /// One or more required configuration fields are unset
    #[error("Node '{node_id}' is missing required configuration: {}", fields.join(", "))]
    MissingRequiredConfig { node_id: NodeId, fields: Vec<String> },

    /// A proposed connection was refused
    #[error("Invalid connection: {0}")]
    InvalidConnection(#[from] ConnectionRejection),

    /// A cycle was found while resolving a strict execution order
    #[error("Cycle detected in workflow graph: {}", path.join(" -> "))]
    CyclicGraph { path: Vec<NodeId> },

    /// A node id did not resolve to a node in the graph
    #[error("Node not found: {0}")]
    NodeNotFound(NodeId),

    /// The graph has nothing to start from
    #[error("No starting nodes found in workflow")]
    NoStartingNodes,

    /// Engine configuration could not be interpreted
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl WorkflowError {
    /// Create an unknown node type error
    pub fn unknown_type(node_type: impl Into<String>) -> Self {
        Self::UnknownNodeType(node_type.into())
    }

    /// Whether the error means the caller should simply refuse the edit
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::InvalidConnection(_) | Self::MissingRequiredConfig { .. }
        )
    }
}
