//! Fluent builder for workflow graphs
//!
//! Provides a fluent API for constructing graphs programmatically.

use crate::types::{Connection, InputPort, OutputType, WorkflowGraph, WorkflowNode};

/// Fluent builder for constructing workflow graphs
///
/// # Example
///
/// ```ignore
/// let graph = WorkflowBuilder::new("wf-1", "Daily report")
///     .add_node("fetch", "fetchData", (0.0, 0.0))
///     .with_config(serde_json::json!({"entityName": "sales"}))
///     .add_node("cond", "condition", (200.0, 0.0))
///     .add_node("notify", "sendEmail", (400.0, 0.0))
///     .connect("fetch", "cond")
///     .connect_with("cond", "notify", Some(OutputType::True), None)
///     .build();
/// ```
pub struct WorkflowBuilder {
    id: String,
    name: String,
    nodes: Vec<WorkflowNode>,
    connections: Vec<Connection>,
    connection_counter: usize,
}

impl WorkflowBuilder {
    /// Create a new workflow builder
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            nodes: Vec::new(),
            connections: Vec::new(),
            connection_counter: 0,
        }
    }

    /// Add a node to the graph, labelled with its id
    pub fn add_node(
        mut self,
        id: impl Into<String>,
        node_type: impl Into<String>,
        position: (f64, f64),
    ) -> Self {
        let id = id.into();
        self.nodes
            .push(WorkflowNode::new(id.clone(), node_type, id, position));
        self
    }

    /// Set the label of the most recently added node
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        if let Some(node) = self.nodes.last_mut() {
            node.label = label.into();
        }
        self
    }

    /// Set config on the most recently added node
    ///
    /// Must be called immediately after `add_node`. Non-object values are ignored.
    pub fn with_config(mut self, config: serde_json::Value) -> Self {
        if let (Some(node), serde_json::Value::Object(map)) = (self.nodes.last_mut(), config) {
            node.config = map;
        }
        self
    }

    /// Add an untyped connection (auto-generates connection ID)
    pub fn connect(self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.connect_with(from, to, None, None)
    }

    /// Add a connection leaving a specific output and entering a specific port
    pub fn connect_with(
        mut self,
        from: impl Into<String>,
        to: impl Into<String>,
        output_type: Option<OutputType>,
        input_port: Option<InputPort>,
    ) -> Self {
        self.connection_counter += 1;
        let id = format!("conn-{}", self.connection_counter);
        self.connections.push(Connection {
            id,
            from_node_id: from.into(),
            to_node_id: to.into(),
            output_type,
            input_port,
        });
        self
    }

    /// Add a prebuilt connection with an explicit ID
    pub fn add_connection(mut self, connection: Connection) -> Self {
        self.connections.push(connection);
        self
    }

    /// Build the graph without validation
    pub fn build(self) -> WorkflowGraph {
        let mut graph = WorkflowGraph::new(self.id, self.name);
        graph.nodes = self.nodes;
        graph.connections = self.connections;
        graph
    }
}
