//! Core types for workflow graphs
//!
//! These types define the structural side of a workflow: nodes, the
//! connections between them and the graph they form. Runtime state written
//! by the execution engine lives separately in [`crate::runtime`].

use serde::{Deserialize, Serialize};

/// Unique identifier for a node
pub type NodeId = String;

/// Unique identifier for a connection
pub type ConnectionId = String;

/// Per-node configuration, keyed by field name
pub type ConfigMap = serde_json::Map<String, serde_json::Value>;

/// Category of a node type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeCategory {
    /// Entry points that start a run (schedules, webhooks)
    Trigger,
    /// Nodes that bring data into the workflow
    Input,
    /// Branching, joining and reshaping
    Logic,
    /// Side-effecting nodes (HTTP, notifications, simulations)
    Action,
    /// Model calls
    Ai,
    /// Terminal result sinks
    Output,
    /// Canvas notes that never run
    Annotation,
}

impl NodeCategory {
    /// Categories whose nodes need no upstream dependency
    pub fn is_root(&self) -> bool {
        matches!(self, NodeCategory::Trigger | NodeCategory::Input)
    }

    /// Categories whose nodes are sinks
    pub fn is_terminal(&self) -> bool {
        matches!(self, NodeCategory::Output | NodeCategory::Annotation)
    }

    /// All categories in palette order
    pub fn all() -> [NodeCategory; 7] {
        [
            NodeCategory::Trigger,
            NodeCategory::Input,
            NodeCategory::Logic,
            NodeCategory::Action,
            NodeCategory::Ai,
            NodeCategory::Output,
            NodeCategory::Annotation,
        ]
    }
}

/// Which output of a multi-output node a connection leaves from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutputType {
    /// Conditional branch taken when the condition holds
    #[serde(rename = "true")]
    True,
    /// Conditional branch taken when the condition fails
    #[serde(rename = "false")]
    False,
    /// First split output
    A,
    /// Second split output
    B,
}

impl OutputType {
    /// Whether this output is one of the conditional branches
    pub fn is_branch(&self) -> bool {
        matches!(self, OutputType::True | OutputType::False)
    }
}

/// Which input slot of a multi-input node a connection enters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputPort {
    A,
    B,
}

impl std::fmt::Display for InputPort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputPort::A => write!(f, "A"),
            InputPort::B => write!(f, "B"),
        }
    }
}

/// A node instance in a graph
///
/// Holds only structural fields. Execution results are tracked per node id
/// in a [`crate::runtime::RunState`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowNode {
    /// Unique identifier for this node instance
    pub id: NodeId,
    /// Node type tag (references a registry entry)
    #[serde(rename = "type")]
    pub node_type: String,
    /// Display text
    #[serde(default)]
    pub label: String,
    /// Canvas x position
    #[serde(default)]
    pub x: f64,
    /// Canvas y position
    #[serde(default)]
    pub y: f64,
    /// Type-specific configuration
    #[serde(default)]
    pub config: ConfigMap,
}

impl WorkflowNode {
    /// Create a node with an empty configuration
    pub fn new(
        id: impl Into<String>,
        node_type: impl Into<String>,
        label: impl Into<String>,
        position: (f64, f64),
    ) -> Self {
        Self {
            id: id.into(),
            node_type: node_type.into(),
            label: label.into(),
            x: position.0,
            y: position.1,
            config: ConfigMap::new(),
        }
    }

    /// Canvas position as a pair
    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Read a config value as a string slice
    pub fn config_str(&self, field: &str) -> Option<&str> {
        self.config.get(field).and_then(|v| v.as_str())
    }
}

/// A directed link between two nodes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    /// Unique identifier for this connection
    pub id: ConnectionId,
    /// Source node ID
    pub from_node_id: NodeId,
    /// Target node ID
    pub to_node_id: NodeId,
    /// Output of the source node this edge leaves from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_type: Option<OutputType>,
    /// Input slot of the target node this edge enters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_port: Option<InputPort>,
}

impl Connection {
    /// Create an untyped connection
    pub fn new(
        id: impl Into<String>,
        from_node_id: impl Into<String>,
        to_node_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            from_node_id: from_node_id.into(),
            to_node_id: to_node_id.into(),
            output_type: None,
            input_port: None,
        }
    }

    /// Set the output this connection leaves from
    pub fn with_output_type(mut self, output_type: OutputType) -> Self {
        self.output_type = Some(output_type);
        self
    }

    /// Set the input slot this connection enters
    pub fn with_input_port(mut self, input_port: InputPort) -> Self {
        self.input_port = Some(input_port);
        self
    }

    /// Whether this connection links the given endpoints through the given slots
    pub fn matches(
        &self,
        from: &str,
        to: &str,
        output_type: Option<OutputType>,
        input_port: Option<InputPort>,
    ) -> bool {
        self.from_node_id == from
            && self.to_node_id == to
            && self.output_type == output_type
            && self.input_port == input_port
    }

    /// Whether either endpoint is the given node
    pub fn touches(&self, node_id: &str) -> bool {
        self.from_node_id == node_id || self.to_node_id == node_id
    }
}

/// A complete workflow graph
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowGraph {
    /// Unique identifier for this graph
    #[serde(default)]
    pub id: String,
    /// Human-readable name
    #[serde(default)]
    pub name: String,
    /// Nodes in the graph
    #[serde(default)]
    pub nodes: Vec<WorkflowNode>,
    /// Connections between nodes
    #[serde(default)]
    pub connections: Vec<Connection>,
}

impl WorkflowGraph {
    /// Create a new empty graph
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            nodes: Vec::new(),
            connections: Vec::new(),
        }
    }

    /// Find a node by ID
    pub fn find_node(&self, id: &str) -> Option<&WorkflowNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Find a node by ID (mutable)
    pub fn find_node_mut(&mut self, id: &str) -> Option<&mut WorkflowNode> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    /// Get connections coming into a node
    pub fn incoming<'a>(&'a self, node_id: &'a str) -> impl Iterator<Item = &'a Connection> + 'a {
        self.connections.iter().filter(move |c| c.to_node_id == node_id)
    }

    /// Get connections going out of a node
    pub fn outgoing<'a>(&'a self, node_id: &'a str) -> impl Iterator<Item = &'a Connection> + 'a {
        self.connections.iter().filter(move |c| c.from_node_id == node_id)
    }

    /// Get the IDs of nodes that this node depends on (upstream nodes)
    pub fn get_dependencies(&self, node_id: &str) -> Vec<NodeId> {
        self.incoming(node_id).map(|c| c.from_node_id.clone()).collect()
    }

    /// Get the IDs of nodes that depend on this node (downstream nodes)
    pub fn get_dependents(&self, node_id: &str) -> Vec<NodeId> {
        self.outgoing(node_id).map(|c| c.to_node_id.clone()).collect()
    }

    /// Remove a node and every connection touching it
    pub fn remove_node(&mut self, node_id: &str) -> Option<WorkflowNode> {
        let pos = self.nodes.iter().position(|n| n.id == node_id)?;
        self.connections.retain(|c| !c.touches(node_id));
        Some(self.nodes.remove(pos))
    }

    /// Remove a connection by ID
    pub fn remove_connection(&mut self, connection_id: &str) -> Option<Connection> {
        let pos = self.connections.iter().position(|c| c.id == connection_id)?;
        Some(self.connections.remove(pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_node_graph() -> WorkflowGraph {
        let mut graph = WorkflowGraph::new("test", "Test Graph");
        graph.nodes.push(WorkflowNode::new("node1", "trigger", "Start", (0.0, 0.0)));
        graph.nodes.push(WorkflowNode::new("node2", "output", "Result", (100.0, 0.0)));
        graph.connections.push(Connection::new("conn1", "node1", "node2"));
        graph
    }

    #[test]
    fn test_graph_dependencies() {
        let graph = two_node_graph();

        assert_eq!(graph.get_dependencies("node2"), vec!["node1"]);
        assert_eq!(graph.get_dependents("node1"), vec!["node2"]);
        assert!(graph.get_dependencies("node1").is_empty());
    }

    #[test]
    fn test_remove_node_drops_connections() {
        let mut graph = two_node_graph();
        let removed = graph.remove_node("node1").unwrap();

        assert_eq!(removed.id, "node1");
        assert_eq!(graph.nodes.len(), 1);
        assert!(graph.connections.is_empty());
        assert!(graph.remove_node("missing").is_none());
    }

    #[test]
    fn test_connection_serialization() {
        let conn = Connection::new("c1", "cond", "notify").with_output_type(OutputType::True);
        let json = serde_json::to_value(&conn).unwrap();

        assert_eq!(json["fromNodeId"], "cond");
        assert_eq!(json["toNodeId"], "notify");
        assert_eq!(json["outputType"], "true");
        assert!(json.get("inputPort").is_none());

        let back: Connection = serde_json::from_value(json).unwrap();
        assert_eq!(back, conn);
    }

    #[test]
    fn test_node_deserializes_type_tag() {
        let node: WorkflowNode = serde_json::from_value(serde_json::json!({
            "id": "n1",
            "type": "http",
            "label": "Call API",
            "x": 10.0,
            "y": 20.0,
            "config": { "httpUrl": "https://example.com" }
        }))
        .unwrap();

        assert_eq!(node.node_type, "http");
        assert_eq!(node.position(), (10.0, 20.0));
        assert_eq!(node.config_str("httpUrl"), Some("https://example.com"));
    }

    #[test]
    fn test_category_classification() {
        assert!(NodeCategory::Trigger.is_root());
        assert!(NodeCategory::Input.is_root());
        assert!(!NodeCategory::Logic.is_root());
        assert!(NodeCategory::Output.is_terminal());
        assert!(NodeCategory::Annotation.is_terminal());
        assert!(!NodeCategory::Action.is_terminal());
    }
}
