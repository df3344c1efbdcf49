//! Node lifecycle helpers
//!
//! Cloning with runtime reset, display name and summary derivation, and
//! trigger/terminal classification.

use crate::config::EngineConfig;
use crate::error::{Result, WorkflowError};
use crate::registry::NodeRegistry;
use crate::runtime::{NodeRuntime, RunState};
use crate::types::{NodeId, WorkflowGraph, WorkflowNode};

/// Config key that overrides a node's label in the editor chrome
pub const CUSTOM_NAME_KEY: &str = "customName";

/// Copy a node under a new id, shifted by `offset`
///
/// Only structural fields are copied; runtime state is keyed by node id, so
/// the clone starts idle with no results.
pub fn clone_node(node: &WorkflowNode, new_id: impl Into<String>, offset: (f64, f64)) -> WorkflowNode {
    WorkflowNode {
        id: new_id.into(),
        node_type: node.node_type.clone(),
        label: node.label.clone(),
        x: node.x + offset.0,
        y: node.y + offset.1,
        config: node.config.clone(),
    }
}

/// Clone a node and record a fresh idle runtime for the copy
///
/// Overwrites any state left behind under `new_id` by a previously deleted node.
pub fn clone_node_with_state(
    node: &WorkflowNode,
    state: &mut RunState,
    new_id: impl Into<String>,
    offset: (f64, f64),
) -> WorkflowNode {
    let clone = clone_node(node, new_id, offset);
    state.insert(clone.id.clone(), NodeRuntime::default());
    clone
}

/// Clone a node under a freshly generated id
pub fn duplicate_node(node: &WorkflowNode, offset: (f64, f64)) -> WorkflowNode {
    let new_id = format!("{}-{}", node.node_type, uuid::Uuid::new_v4());
    clone_node(node, new_id, offset)
}

/// Duplicate a node inside its graph
///
/// The copy is shifted by the configured `clone_offset` and appended to the
/// graph with an idle runtime; connections are not copied. Returns the new
/// node's id.
pub fn duplicate_in_graph(
    graph: &mut WorkflowGraph,
    state: &mut RunState,
    node_id: &str,
    config: &EngineConfig,
) -> Result<NodeId> {
    let source = graph
        .find_node(node_id)
        .ok_or_else(|| WorkflowError::NodeNotFound(node_id.to_string()))?;
    let copy = duplicate_node(source, config.clone_offset);
    let new_id = copy.id.clone();

    state.insert(new_id.clone(), NodeRuntime::default());
    graph.nodes.push(copy);
    log::debug!("Duplicated node '{}' as '{}'", node_id, new_id);
    Ok(new_id)
}

/// Name shown on the node: `config.customName` when set, else the label
pub fn get_node_display_name(node: &WorkflowNode) -> &str {
    node.config_str(CUSTOM_NAME_KEY)
        .filter(|name| !name.is_empty())
        .unwrap_or(&node.label)
}

/// Short synopsis of a node's config, via its type's summary strategy
pub fn get_node_summary(registry: &NodeRegistry, node: &WorkflowNode) -> Option<String> {
    let summarize = registry.summarizer(&node.node_type)?;
    summarize(&node.config)
}

/// Whether nodes of this type need no upstream dependency
///
/// Unknown types are not triggers.
pub fn is_trigger_node(registry: &NodeRegistry, node_type: &str) -> bool {
    registry
        .get_definition(node_type)
        .is_some_and(|def| def.category.is_root())
}

/// Whether nodes of this type are sinks (outputs and annotations)
pub fn is_terminal_node(registry: &NodeRegistry, node_type: &str) -> bool {
    registry
        .get_definition(node_type)
        .is_some_and(|def| def.category.is_terminal())
}

/// Truncate to at most `max_chars` characters, appending "..." when cut
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::NodeTypeDefinition;
    use crate::runtime::NodeStatus;
    use crate::types::{ConfigMap, NodeCategory};
    use serde_json::json;

    fn entity(config: &ConfigMap) -> Option<String> {
        config.get("entity").and_then(|v| v.as_str()).map(str::to_string)
    }

    fn make_test_registry() -> NodeRegistry {
        let mut registry = NodeRegistry::new();
        registry.register_with_summary(
            NodeTypeDefinition::new("fetch", NodeCategory::Input, "Fetch"),
            entity,
        );
        registry.register(NodeTypeDefinition::new("start", NodeCategory::Trigger, "Start"));
        registry.register(NodeTypeDefinition::new("step", NodeCategory::Action, "Step"));
        registry.register(NodeTypeDefinition::new("out", NodeCategory::Output, "Out"));
        registry.register(NodeTypeDefinition::new("note", NodeCategory::Annotation, "Note"));
        registry
    }

    fn fetch_node() -> WorkflowNode {
        let mut node = WorkflowNode::new("f1", "fetch", "Fetch Sales", (10.0, 20.0));
        node.config.insert("entity".to_string(), json!("sales"));
        node
    }

    #[test]
    fn test_clone_shifts_and_keeps_config() {
        let node = fetch_node();
        let clone = clone_node(&node, "f2", (5.0, -5.0));

        assert_eq!(clone.id, "f2");
        assert_eq!(clone.position(), (15.0, 15.0));
        assert_eq!(clone.label, node.label);
        assert_eq!(clone.config, node.config);
    }

    #[test]
    fn test_clone_starts_idle_even_after_success() {
        let node = fetch_node();
        let mut state = RunState::new();
        {
            let runtime = state.entry("f1");
            runtime.status = NodeStatus::Success;
            runtime.output_data = Some(json!({"rows": 12}));
            runtime.condition_result = Some(true);
        }
        // Leftover state under the target id from a deleted node
        state.entry("f2").status = NodeStatus::Error;

        let clone = clone_node_with_state(&node, &mut state, "f2", (20.0, 20.0));

        assert_eq!(state.status(&clone.id), NodeStatus::Idle);
        assert!(state.get(&clone.id).is_pristine());
        assert_eq!(state.status("f1"), NodeStatus::Success);
    }

    #[test]
    fn test_duplicate_generates_fresh_id() {
        let node = fetch_node();
        let a = duplicate_node(&node, (20.0, 20.0));
        let b = duplicate_node(&node, (20.0, 20.0));

        assert_ne!(a.id, node.id);
        assert_ne!(a.id, b.id);
        assert!(a.id.starts_with("fetch-"));
    }

    #[test]
    fn test_duplicate_in_graph() {
        let mut graph = WorkflowGraph::new("wf", "Test");
        graph.nodes.push(fetch_node());
        let mut state = RunState::new();
        state.entry("f1").status = NodeStatus::Running;

        let config = EngineConfig::default();
        let new_id = duplicate_in_graph(&mut graph, &mut state, "f1", &config).unwrap();

        assert_eq!(graph.nodes.len(), 2);
        let copy = graph.find_node(&new_id).unwrap();
        assert_eq!(copy.position(), (30.0, 40.0));
        assert_eq!(state.status(&new_id), NodeStatus::Idle);
        assert!(graph.connections.is_empty());

        let err = duplicate_in_graph(&mut graph, &mut state, "ghost", &config).unwrap_err();
        assert!(matches!(err, WorkflowError::NodeNotFound(id) if id == "ghost"));
    }

    #[test]
    fn test_duplicate_uses_configured_offset() {
        let mut graph = WorkflowGraph::new("wf", "Test");
        graph.nodes.push(fetch_node());
        let mut state = RunState::new();

        let config = EngineConfig::from_json(r#"{"cloneOffset": [0.0, 75.0]}"#).unwrap();
        let new_id = duplicate_in_graph(&mut graph, &mut state, "f1", &config).unwrap();

        assert_eq!(graph.find_node(&new_id).unwrap().position(), (10.0, 95.0));
    }

    #[test]
    fn test_display_name_prefers_custom_name() {
        let mut node = fetch_node();
        assert_eq!(get_node_display_name(&node), "Fetch Sales");

        node.config.insert(CUSTOM_NAME_KEY.to_string(), json!(""));
        assert_eq!(get_node_display_name(&node), "Fetch Sales");

        node.config.insert(CUSTOM_NAME_KEY.to_string(), json!("Monthly sales"));
        assert_eq!(get_node_display_name(&node), "Monthly sales");
    }

    #[test]
    fn test_summary_dispatches_by_type() {
        let registry = make_test_registry();
        assert_eq!(get_node_summary(&registry, &fetch_node()), Some("sales".to_string()));

        let mut unset = fetch_node();
        unset.config.clear();
        assert_eq!(get_node_summary(&registry, &unset), None);

        let step = WorkflowNode::new("s1", "step", "Step", (0.0, 0.0));
        assert_eq!(get_node_summary(&registry, &step), None);
    }

    #[test]
    fn test_classification() {
        let registry = make_test_registry();
        assert!(is_trigger_node(&registry, "start"));
        assert!(is_trigger_node(&registry, "fetch"));
        assert!(!is_trigger_node(&registry, "step"));
        assert!(!is_trigger_node(&registry, "teleport"));

        assert!(is_terminal_node(&registry, "out"));
        assert!(is_terminal_node(&registry, "note"));
        assert!(!is_terminal_node(&registry, "start"));
        assert!(!is_terminal_node(&registry, "teleport"));
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("exactly", 7), "exactly");
        assert_eq!(truncate_text("summarize this", 9), "summarize...");
        assert_eq!(truncate_text("héllo wörld", 5), "héllo...");
    }
}
