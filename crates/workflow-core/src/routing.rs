//! Entry points and branch routing
//!
//! Helpers for an engine that walks the graph forward from its starting
//! nodes and follows only the branch a conditional node selected.

use std::collections::HashSet;

use crate::error::{Result, WorkflowError};
use crate::registry::NodeRegistry;
use crate::types::{NodeCategory, OutputType, WorkflowGraph, WorkflowNode};

/// Find the nodes a forward run starts from
///
/// In priority order:
/// 1. a trigger-category node, lowest `start_priority` first and node order
///    among equals,
/// 2. every node without incoming connections, annotations excluded,
/// 3. every input-category node.
///
/// Fails with `NoStartingNodes` when none of these exist.
pub fn find_starting_nodes<'g>(
    registry: &NodeRegistry,
    graph: &'g WorkflowGraph,
) -> Result<Vec<&'g WorkflowNode>> {
    let category = |node: &WorkflowNode| {
        registry
            .get_definition(&node.node_type)
            .map(|def| def.category)
    };

    let trigger = graph
        .nodes
        .iter()
        .filter_map(|node| {
            registry
                .get_definition(&node.node_type)
                .filter(|def| def.category == NodeCategory::Trigger)
                .map(|def| (def.start_priority, node))
        })
        .min_by_key(|&(priority, _)| priority);
    if let Some((_, trigger)) = trigger {
        return Ok(vec![trigger]);
    }

    let with_incoming: HashSet<&str> = graph
        .connections
        .iter()
        .map(|c| c.to_node_id.as_str())
        .collect();
    let roots: Vec<&WorkflowNode> = graph
        .nodes
        .iter()
        .filter(|n| !with_incoming.contains(n.id.as_str()))
        .filter(|n| category(*n) != Some(NodeCategory::Annotation))
        .collect();
    if !roots.is_empty() {
        return Ok(roots);
    }

    let inputs: Vec<&WorkflowNode> = graph
        .nodes
        .iter()
        .filter(|n| category(*n) == Some(NodeCategory::Input))
        .collect();
    if !inputs.is_empty() {
        return Ok(inputs);
    }

    Err(WorkflowError::NoStartingNodes)
}

/// Nodes to run after `node_id`, in node order
///
/// With a condition result, connections leaving the `true` output are only
/// followed when it holds and `false` connections only when it fails.
/// Connections without a branch output are always followed.
pub fn next_nodes<'g>(
    graph: &'g WorkflowGraph,
    node_id: &str,
    condition_result: Option<bool>,
) -> Vec<&'g WorkflowNode> {
    let targets: HashSet<&str> = graph
        .outgoing(node_id)
        .filter(|c| match (condition_result, c.output_type) {
            (Some(result), Some(OutputType::True)) => result,
            (Some(result), Some(OutputType::False)) => !result,
            _ => true,
        })
        .map(|c| c.to_node_id.as_str())
        .collect();

    log::debug!(
        "Routing from '{}' (condition {:?}) to {} nodes",
        node_id,
        condition_result,
        targets.len()
    );

    graph
        .nodes
        .iter()
        .filter(|n| targets.contains(n.id.as_str()))
        .collect()
}
