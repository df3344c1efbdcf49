//! Whole-graph validation
//!
//! Checks an entire workflow against the structural invariants the
//! connection validator maintains edit by edit: known node types, unique
//! ids, connections between distinct existing nodes, no duplicate
//! connections, and per-type connection caps. Also reports unset required
//! configuration.

use std::collections::{HashMap, HashSet};

use thiserror::Error;

use crate::config_validation::validate_node_config;
use crate::registry::NodeRegistry;
use crate::types::{ConnectionId, NodeId, WorkflowGraph};

/// A single problem found in a graph
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphViolation {
    #[error("Node id '{node_id}' is used more than once")]
    DuplicateNodeId { node_id: NodeId },

    #[error("Unknown node type '{node_type}' for node '{node_id}'")]
    UnknownNodeType { node_id: NodeId, node_type: String },

    #[error("Connection '{connection_id}' references unknown node '{node_id}'")]
    UnknownNode {
        connection_id: ConnectionId,
        node_id: NodeId,
    },

    #[error("Connection '{connection_id}' connects node '{node_id}' to itself")]
    SelfConnection {
        connection_id: ConnectionId,
        node_id: NodeId,
    },

    #[error("Connection '{connection_id}' duplicates an earlier connection")]
    DuplicateConnection { connection_id: ConnectionId },

    #[error("Node '{node_id}' has {count} outgoing connections, at most {max} allowed")]
    TooManyOutputs {
        node_id: NodeId,
        count: usize,
        max: usize,
    },

    #[error("Node '{node_id}' has {count} incoming connections, at most {max} allowed")]
    TooManyInputs {
        node_id: NodeId,
        count: usize,
        max: usize,
    },

    #[error("Node '{node_id}' is missing required configuration: {field}")]
    MissingRequiredConfig { node_id: NodeId, field: String },
}

/// Validate a workflow graph
///
/// Returns all violations found (not just the first).
pub fn validate_graph(registry: &NodeRegistry, graph: &WorkflowGraph) -> Vec<GraphViolation> {
    let mut errors = Vec::new();

    validate_node_ids(graph, &mut errors);
    validate_node_types(graph, registry, &mut errors);
    validate_connection_references(graph, &mut errors);
    validate_connection_caps(graph, registry, &mut errors);
    validate_node_configs(graph, registry, &mut errors);

    errors
}

/// Check that node ids are unique
fn validate_node_ids(graph: &WorkflowGraph, errors: &mut Vec<GraphViolation>) {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut reported: HashSet<&str> = HashSet::new();
    for node in &graph.nodes {
        if !seen.insert(&node.id) && reported.insert(&node.id) {
            errors.push(GraphViolation::DuplicateNodeId {
                node_id: node.id.clone(),
            });
        }
    }
}

/// Check that all nodes have known types in the registry
fn validate_node_types(
    graph: &WorkflowGraph,
    registry: &NodeRegistry,
    errors: &mut Vec<GraphViolation>,
) {
    for node in &graph.nodes {
        if !registry.has_node_type(&node.node_type) {
            errors.push(GraphViolation::UnknownNodeType {
                node_id: node.id.clone(),
                node_type: node.node_type.clone(),
            });
        }
    }
}

/// Check endpoints exist, differ, and that no connection tuple repeats
fn validate_connection_references(graph: &WorkflowGraph, errors: &mut Vec<GraphViolation>) {
    let node_ids: HashSet<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
    let mut tuples = HashSet::new();

    for conn in &graph.connections {
        for endpoint in [&conn.from_node_id, &conn.to_node_id] {
            if !node_ids.contains(endpoint.as_str()) {
                errors.push(GraphViolation::UnknownNode {
                    connection_id: conn.id.clone(),
                    node_id: endpoint.clone(),
                });
            }
        }
        if conn.from_node_id == conn.to_node_id {
            errors.push(GraphViolation::SelfConnection {
                connection_id: conn.id.clone(),
                node_id: conn.from_node_id.clone(),
            });
        }
        let tuple = (
            conn.from_node_id.as_str(),
            conn.to_node_id.as_str(),
            conn.output_type,
            conn.input_port,
        );
        if !tuples.insert(tuple) {
            errors.push(GraphViolation::DuplicateConnection {
                connection_id: conn.id.clone(),
            });
        }
    }
}

/// Check per-type incoming and outgoing caps
fn validate_connection_caps(
    graph: &WorkflowGraph,
    registry: &NodeRegistry,
    errors: &mut Vec<GraphViolation>,
) {
    let mut outgoing: HashMap<&str, usize> = HashMap::new();
    let mut incoming: HashMap<&str, usize> = HashMap::new();
    for conn in &graph.connections {
        *outgoing.entry(&conn.from_node_id).or_insert(0) += 1;
        *incoming.entry(&conn.to_node_id).or_insert(0) += 1;
    }

    for node in &graph.nodes {
        let Some(def) = registry.get_definition(&node.node_type) else {
            continue;
        };

        let out_count = outgoing.get(node.id.as_str()).copied().unwrap_or(0);
        if let Some(max) = def.output_limit() {
            if out_count > max {
                errors.push(GraphViolation::TooManyOutputs {
                    node_id: node.id.clone(),
                    count: out_count,
                    max,
                });
            }
        }

        let in_count = incoming.get(node.id.as_str()).copied().unwrap_or(0);
        let max = def.input_limit();
        if in_count > max {
            errors.push(GraphViolation::TooManyInputs {
                node_id: node.id.clone(),
                count: in_count,
                max,
            });
        }
    }
}

/// Check that required config fields are set
fn validate_node_configs(
    graph: &WorkflowGraph,
    registry: &NodeRegistry,
    errors: &mut Vec<GraphViolation>,
) {
    for node in &graph.nodes {
        if !registry.has_node_type(&node.node_type) {
            continue;
        }
        let result = validate_node_config(registry, node);
        for field in result.missing_fields() {
            errors.push(GraphViolation::MissingRequiredConfig {
                node_id: node.id.clone(),
                field: field.clone(),
            });
        }
    }
}
