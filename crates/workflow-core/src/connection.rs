//! Connection legality checks
//!
//! Decides whether a proposed link between two nodes may be added to the
//! current graph. Rejections are values, not failures: the graph-editing
//! layer simply refuses the edit and shows the reason next to the edge.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::EngineConfig;
use crate::registry::NodeRegistry;
use crate::types::{Connection, InputPort, OutputType, WorkflowNode};

/// Why a connection was refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConnectionRejection {
    #[error("Cannot connect node to itself")]
    SelfConnection,

    #[error("Connection already exists")]
    Duplicate,

    #[error("Maximum output connections reached")]
    MaxOutputsReached,

    #[error("Maximum input connections reached")]
    MaxInputsReached,

    #[error("Both input ports are already connected")]
    BothPortsConnected,

    #[error("Input port {0} is already connected")]
    PortInUse(InputPort),

    #[error("Unknown node type: {0}")]
    UnknownNodeType(String),
}

/// Connection rule switches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionRules {
    /// Refuse a join input whose explicitly chosen port is already taken
    pub enforce_port_uniqueness: bool,
}

impl Default for ConnectionRules {
    fn default() -> Self {
        Self {
            enforce_port_uniqueness: true,
        }
    }
}

/// Verdict shape consumed by the editor UI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionVerdict {
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl From<Result<(), ConnectionRejection>> for ConnectionVerdict {
    fn from(result: Result<(), ConnectionRejection>) -> Self {
        match result {
            Ok(()) => Self {
                valid: true,
                reason: None,
            },
            Err(rejection) => Self {
                valid: false,
                reason: Some(rejection.to_string()),
            },
        }
    }
}

/// Validates proposed connections against the registry's type rules
pub struct ConnectionValidator<'a> {
    registry: &'a NodeRegistry,
    rules: ConnectionRules,
}

impl<'a> ConnectionValidator<'a> {
    /// Create a validator with default rules
    pub fn new(registry: &'a NodeRegistry) -> Self {
        Self {
            registry,
            rules: ConnectionRules::default(),
        }
    }

    /// Create a validator with rules taken from engine settings
    pub fn from_config(registry: &'a NodeRegistry, config: &EngineConfig) -> Self {
        Self::new(registry).with_rules(config.connection_rules())
    }

    /// Override the rule switches
    pub fn with_rules(mut self, rules: ConnectionRules) -> Self {
        self.rules = rules;
        self
    }

    /// Check a proposed connection, returning the first applicable rejection
    ///
    /// Checks in order: self-loop, duplicate tuple, source output cap,
    /// target input cap, then join port occupancy.
    pub fn check(
        &self,
        from: &WorkflowNode,
        to: &WorkflowNode,
        existing: &[Connection],
        output_type: Option<OutputType>,
        input_port: Option<InputPort>,
    ) -> Result<(), ConnectionRejection> {
        if from.id == to.id {
            return Err(ConnectionRejection::SelfConnection);
        }

        if existing
            .iter()
            .any(|c| c.matches(&from.id, &to.id, output_type, input_port))
        {
            return Err(ConnectionRejection::Duplicate);
        }

        let from_def = self
            .registry
            .get_definition(&from.node_type)
            .ok_or_else(|| ConnectionRejection::UnknownNodeType(from.node_type.clone()))?;
        if let Some(max_outputs) = from_def.output_limit() {
            let outgoing = existing.iter().filter(|c| c.from_node_id == from.id).count();
            if outgoing >= max_outputs {
                return Err(ConnectionRejection::MaxOutputsReached);
            }
        }

        let to_def = self
            .registry
            .get_definition(&to.node_type)
            .ok_or_else(|| ConnectionRejection::UnknownNodeType(to.node_type.clone()))?;
        let incoming: Vec<&Connection> =
            existing.iter().filter(|c| c.to_node_id == to.id).collect();
        if incoming.len() >= to_def.input_limit() {
            return Err(ConnectionRejection::MaxInputsReached);
        }

        if to_def.accepts_multiple_inputs {
            let port_used = |port: InputPort| incoming.iter().any(|c| c.input_port == Some(port));
            match input_port {
                // Shadowed by the two-input limit above while joins cap at two
                None if port_used(InputPort::A) && port_used(InputPort::B) => {
                    return Err(ConnectionRejection::BothPortsConnected);
                }
                Some(port) if self.rules.enforce_port_uniqueness && port_used(port) => {
                    return Err(ConnectionRejection::PortInUse(port));
                }
                _ => {}
            }
        }

        Ok(())
    }

    /// Check a proposed connection and report it in verdict form
    pub fn verdict(
        &self,
        from: &WorkflowNode,
        to: &WorkflowNode,
        existing: &[Connection],
        output_type: Option<OutputType>,
        input_port: Option<InputPort>,
    ) -> ConnectionVerdict {
        self.check(from, to, existing, output_type, input_port).into()
    }

    /// Every other node that `from` could connect to with default output and port
    pub fn connectable_nodes<'n>(
        &self,
        from: &WorkflowNode,
        all_nodes: &'n [WorkflowNode],
        existing: &[Connection],
    ) -> Vec<&'n WorkflowNode> {
        all_nodes
            .iter()
            .filter(|n| n.id != from.id)
            .filter(|n| self.check(from, n, existing, None, None).is_ok())
            .collect()
    }
}

/// Check a proposed connection with default rules
pub fn is_valid_connection(
    registry: &NodeRegistry,
    from: &WorkflowNode,
    to: &WorkflowNode,
    existing: &[Connection],
    output_type: Option<OutputType>,
    input_port: Option<InputPort>,
) -> ConnectionVerdict {
    ConnectionValidator::new(registry).verdict(from, to, existing, output_type, input_port)
}

/// Nodes `from` may connect to, with default rules
pub fn get_connectable_nodes<'n>(
    registry: &NodeRegistry,
    from: &WorkflowNode,
    all_nodes: &'n [WorkflowNode],
    existing: &[Connection],
) -> Vec<&'n WorkflowNode> {
    ConnectionValidator::new(registry).connectable_nodes(from, all_nodes, existing)
}
