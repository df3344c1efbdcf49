//! Runtime node state owned by the execution engine
//!
//! The engine writes status and results here, keyed by node id. The core
//! only reads or clears these values. [`WorkflowDocument`] converts between
//! this split representation and the flat persisted form where each node
//! carries its runtime fields inline.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::{Connection, ConfigMap, NodeId, WorkflowGraph, WorkflowNode};

/// Execution status of a node
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeStatus {
    #[default]
    Idle,
    Running,
    Success,
    Error,
}

/// Runtime fields for a single node
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeRuntime {
    #[serde(default)]
    pub status: NodeStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution_result: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_data: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_data: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition_result: Option<bool>,
}

impl NodeRuntime {
    /// Return to idle and drop every result from a previous run
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Whether the node is idle with no results attached
    pub fn is_pristine(&self) -> bool {
        *self == Self::default()
    }
}

/// Runtime state for every node of one run, keyed by node id
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RunState {
    nodes: HashMap<NodeId, NodeRuntime>,
}

impl RunState {
    /// Create an empty run state
    pub fn new() -> Self {
        Self::default()
    }

    /// Runtime for a node; nodes never written read as idle
    pub fn get(&self, node_id: &str) -> NodeRuntime {
        self.nodes.get(node_id).cloned().unwrap_or_default()
    }

    /// Status of a node
    pub fn status(&self, node_id: &str) -> NodeStatus {
        self.nodes
            .get(node_id)
            .map(|r| r.status)
            .unwrap_or_default()
    }

    /// Mutable runtime for a node, inserting an idle entry if absent
    pub fn entry(&mut self, node_id: &str) -> &mut NodeRuntime {
        self.nodes.entry(node_id.to_string()).or_default()
    }

    /// Replace the runtime of a node
    pub fn insert(&mut self, node_id: impl Into<String>, runtime: NodeRuntime) {
        self.nodes.insert(node_id.into(), runtime);
    }

    /// Drop the runtime of a node (e.g., after the node is deleted)
    pub fn remove(&mut self, node_id: &str) -> Option<NodeRuntime> {
        self.nodes.remove(node_id)
    }

    /// Reset every node to idle
    pub fn reset_all(&mut self) {
        for runtime in self.nodes.values_mut() {
            runtime.reset();
        }
    }

    /// Number of nodes with recorded state
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether no node has recorded state
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// A node in its flat persisted form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedNode {
    pub id: NodeId,
    #[serde(rename = "type")]
    pub node_type: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub config: ConfigMap,
    #[serde(flatten)]
    pub runtime: NodeRuntime,
}

impl PersistedNode {
    /// Split into the structural node and its runtime
    pub fn split(self) -> (WorkflowNode, NodeRuntime) {
        let node = WorkflowNode {
            id: self.id,
            node_type: self.node_type,
            label: self.label,
            x: self.x,
            y: self.y,
            config: self.config,
        };
        (node, self.runtime)
    }

    /// Recombine a structural node with its runtime
    pub fn join(node: WorkflowNode, runtime: NodeRuntime) -> Self {
        Self {
            id: node.id,
            node_type: node.node_type,
            label: node.label,
            x: node.x,
            y: node.y,
            config: node.config,
            runtime,
        }
    }
}

/// The persisted shape of a workflow: nodes with inline runtime fields
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowDocument {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub nodes: Vec<PersistedNode>,
    #[serde(default)]
    pub connections: Vec<Connection>,
}

impl WorkflowDocument {
    /// Parse a document from JSON
    pub fn from_json(json: &str) -> crate::error::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the document to JSON
    pub fn to_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Separate structural graph from runtime state
    pub fn split(self) -> (WorkflowGraph, RunState) {
        let mut graph = WorkflowGraph::new(self.id, self.name);
        let mut state = RunState::new();
        for persisted in self.nodes {
            let (node, runtime) = persisted.split();
            if !runtime.is_pristine() {
                state.insert(node.id.clone(), runtime);
            }
            graph.nodes.push(node);
        }
        graph.connections = self.connections;
        (graph, state)
    }

    /// Recombine a graph with its run state
    pub fn join(graph: WorkflowGraph, state: &RunState) -> Self {
        let nodes = graph
            .nodes
            .into_iter()
            .map(|node| {
                let runtime = state.get(&node.id);
                PersistedNode::join(node, runtime)
            })
            .collect();
        Self {
            id: graph.id,
            name: graph.name,
            nodes,
            connections: graph.connections,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unknown_node_reads_idle() {
        let state = RunState::new();
        assert_eq!(state.status("nobody"), NodeStatus::Idle);
        assert!(state.get("nobody").is_pristine());
    }

    #[test]
    fn test_reset_clears_results() {
        let mut runtime = NodeRuntime {
            status: NodeStatus::Success,
            execution_result: Some(json!({"rows": 3})),
            data: Some(json!([1, 2, 3])),
            input_data: Some(json!({"a": 1})),
            output_data: Some(json!({"b": 2})),
            condition_result: Some(true),
        };
        runtime.reset();
        assert!(runtime.is_pristine());
        assert_eq!(runtime.status, NodeStatus::Idle);
    }

    #[test]
    fn test_document_split_keeps_runtime_fields() {
        let doc = WorkflowDocument::from_json(
            r#"{
                "id": "wf-1",
                "name": "Report",
                "nodes": [
                    {"id": "a", "type": "trigger", "label": "Start", "x": 0, "y": 0,
                     "status": "success", "outputData": {"ok": true}},
                    {"id": "b", "type": "output", "label": "End", "x": 100, "y": 0}
                ],
                "connections": [{"id": "c1", "fromNodeId": "a", "toNodeId": "b"}]
            }"#,
        )
        .unwrap();

        let (graph, state) = doc.split();
        assert_eq!(graph.nodes.len(), 2);
        assert_eq!(graph.connections.len(), 1);
        assert_eq!(state.len(), 1);
        assert_eq!(state.status("a"), NodeStatus::Success);
        assert_eq!(state.get("a").output_data, Some(json!({"ok": true})));
        assert_eq!(state.status("b"), NodeStatus::Idle);

        let joined = WorkflowDocument::join(graph, &state);
        let json = serde_json::to_value(&joined).unwrap();
        assert_eq!(json["nodes"][0]["status"], "success");
        assert_eq!(json["nodes"][0]["outputData"]["ok"], true);
        assert_eq!(json["nodes"][1]["status"], "idle");
        assert!(json["nodes"][1].get("outputData").is_none());
    }
}
