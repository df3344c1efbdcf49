//! Workflow Core - graph model and rules for visual automation workflows
//!
//! This crate owns the part of a workflow builder that does not depend on
//! what any node actually does:
//!
//! - The graph model (`WorkflowGraph`, `WorkflowNode`, `Connection`) and the
//!   runtime state an executor attaches to it (`RunState`)
//! - A registry of node type definitions, filled at link time by node crates
//! - Per-node configuration checks and connection legality rules
//! - Deterministic, dependency-respecting execution ordering
//!
//! # Architecture
//!
//! Node types are described, not implemented, here. A node crate submits
//! a `DescriptorFn` (and optionally a `SummaryFn`) through `inventory`, and
//! `NodeRegistry::with_builtins()` collects every submission:
//!
//! ```ignore
//! struct FetchData;
//!
//! impl NodeTypeDescriptor for FetchData {
//!     fn descriptor() -> NodeTypeDefinition {
//!         NodeTypeDefinition::new("fetchData", NodeCategory::Input, "Fetch Data")
//!             .require("entityName")
//!             .max_inputs(0)
//!     }
//! }
//!
//! inventory::submit!(workflow_core::DescriptorFn(FetchData::descriptor));
//! ```
//!
//! Running a node is left to an external engine, which asks this crate for
//! an order (`get_execution_order`) and for the branch to follow after a
//! condition (`next_nodes`).

pub mod builder;
pub mod config;
pub mod config_validation;
pub mod connection;
pub mod descriptor;
pub mod error;
pub mod lifecycle;
pub mod ordering;
pub mod registry;
pub mod routing;
pub mod runtime;
pub mod types;
pub mod validation;

// Re-export key types
pub use builder::WorkflowBuilder;
pub use config::EngineConfig;
pub use config_validation::{validate_node_config, ConfigValidation};
pub use connection::{
    get_connectable_nodes, is_valid_connection, ConnectionRejection, ConnectionRules,
    ConnectionValidator, ConnectionVerdict,
};
pub use descriptor::{
    DescriptorFn, MaxConnections, NodeTypeDefinition, NodeTypeDescriptor, Summarizer, SummaryFn,
    ValidationRules,
};
pub use error::{Result, WorkflowError};
pub use lifecycle::{
    clone_node, clone_node_with_state, duplicate_in_graph, duplicate_node,
    get_node_display_name, get_node_summary, is_terminal_node, is_trigger_node, truncate_text,
};
pub use ordering::{
    execution_layers, get_execution_order, CyclePolicy, CycleWarning, ExecutionOrderResolver,
    ExecutionPlan,
};
pub use registry::NodeRegistry;
pub use routing::{find_starting_nodes, next_nodes};
pub use runtime::{NodeRuntime, NodeStatus, PersistedNode, RunState, WorkflowDocument};
pub use types::{
    ConfigMap, Connection, ConnectionId, InputPort, NodeCategory, NodeId, OutputType,
    WorkflowGraph, WorkflowNode,
};
pub use validation::{validate_graph, GraphViolation};
