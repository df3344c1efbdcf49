//! Workflow Nodes
//!
//! The built-in node types of the workflow builder. Each type is a small
//! descriptor (category, capability flags, required config, connection
//! caps) plus a summary strategy, both submitted at link time so that
//! `NodeRegistry::with_builtins()` picks them up.
//!
//! # Categories
//!
//! - **Trigger**: Starting points (`trigger`, `webhook`)
//! - **Input**: Data sources (`manualInput`, `fetchData`, `excelInput`, `pdfInput`)
//! - **Logic**: Branching and reshaping (`condition`, `join`, `splitColumns`, `addField`)
//! - **Action**: Side effects (`http`, `python`, senders, plant models)
//! - **AI**: Model calls (`llm`)
//! - **Output**: Result collection (`output`)
//! - **Annotation**: Canvas notes (`comment`)

pub mod action;
pub mod ai;
pub mod annotation;
pub mod input;
pub mod logic;
pub mod output;
pub mod summary;
pub mod trigger;

// Re-export all node types for convenience
pub use action::*;
pub use ai::LlmNode;
pub use annotation::CommentNode;
pub use input::*;
pub use logic::*;
pub use output::OutputNode;
pub use trigger::{TriggerNode, WebhookNode};

#[cfg(test)]
mod tests {
    use serde_json::json;
    use workflow_core::{
        find_starting_nodes, get_execution_order, get_node_summary, is_terminal_node,
        is_trigger_node, is_valid_connection, validate_graph, validate_node_config,
        ConnectionRejection, ConnectionValidator, ConnectionVerdict, InputPort, NodeCategory,
        NodeRegistry, OutputType, WorkflowBuilder, WorkflowError,
    };

    fn rejected(rejection: ConnectionRejection) -> ConnectionVerdict {
        ConnectionVerdict {
            valid: false,
            reason: Some(rejection.to_string()),
        }
    }

    #[test]
    fn test_inventory_collects_all_builtins() {
        let registry = NodeRegistry::with_builtins();
        assert_eq!(registry.all_definitions().len(), 20, "Expected 20 built-in node types");

        // Every built-in type has a summary strategy
        for node_type in registry.node_types() {
            assert!(
                registry.summarizer(node_type).is_some(),
                "No summary strategy for '{}'",
                node_type
            );
        }

        // Spot-check known types
        assert!(registry.has_node_type("fetchData"));
        assert!(registry.has_node_type("condition"));
        assert!(registry.has_node_type("sendWhatsApp"));
        assert!(registry.has_node_type("franmit"));
        assert!(registry.has_node_type("comment"));
        assert!(matches!(
            registry.lookup("teleport"),
            Err(WorkflowError::UnknownNodeType(t)) if t == "teleport"
        ));
    }

    #[test]
    fn test_categories() {
        let registry = NodeRegistry::builtin();
        assert_eq!(registry.list_by_category(NodeCategory::Trigger), vec!["trigger", "webhook"]);
        assert_eq!(
            registry.list_by_category(NodeCategory::Input),
            vec!["excelInput", "fetchData", "manualInput", "pdfInput"]
        );
        assert_eq!(
            registry.list_by_category(NodeCategory::Logic),
            vec!["addField", "condition", "join", "splitColumns"]
        );
        assert_eq!(
            registry.list_by_category(NodeCategory::Action),
            vec!["conveyor", "franmit", "http", "python", "sendEmail", "sendSMS", "sendWhatsApp"]
        );
        assert_eq!(registry.list_by_category(NodeCategory::Ai), vec!["llm"]);
        assert_eq!(registry.list_by_category(NodeCategory::Output), vec!["output"]);
        assert_eq!(registry.list_by_category(NodeCategory::Annotation), vec!["comment"]);

        assert!(is_trigger_node(registry, "webhook"));
        assert!(is_trigger_node(registry, "fetchData"));
        assert!(!is_trigger_node(registry, "http"));
        assert!(is_terminal_node(registry, "output"));
        assert!(is_terminal_node(registry, "comment"));
        assert!(!is_terminal_node(registry, "sendEmail"));
    }

    #[test]
    fn test_fetch_condition_notify_flow() {
        let registry = NodeRegistry::builtin();
        let graph = WorkflowBuilder::new("wf-sales", "Sales alert")
            .add_node("notify", "sendEmail", (400.0, 0.0))
            .with_config(json!({"emailTo": "ops@example.com", "emailSubject": "Big order"}))
            .add_node("cond", "condition", (200.0, 0.0))
            .with_config(json!({
                "conditionField": "amount",
                "conditionOperator": ">",
                "conditionValue": 1000
            }))
            .add_node("fetch", "fetchData", (0.0, 0.0))
            .with_config(json!({"entityName": "sales"}))
            .connect("fetch", "cond")
            .connect_with("cond", "notify", Some(OutputType::True), None)
            .build();

        assert!(validate_graph(registry, &graph).is_empty());

        let order: Vec<&str> = get_execution_order(registry, &graph)
            .iter()
            .map(|n| n.id.as_str())
            .collect();
        assert_eq!(order, vec!["fetch", "cond", "notify"]);

        let starts = find_starting_nodes(registry, &graph).unwrap();
        assert_eq!(starts.len(), 1);
        assert_eq!(starts[0].id, "fetch");

        // A distinct tuple, but sendEmail takes a single upstream connection
        let cond = graph.find_node("cond").unwrap();
        let notify = graph.find_node("notify").unwrap();
        assert_eq!(
            is_valid_connection(
                registry,
                cond,
                notify,
                &graph.connections,
                Some(OutputType::False),
                None
            ),
            rejected(ConnectionRejection::MaxInputsReached)
        );

        let summaries: Vec<Option<String>> = graph
            .nodes
            .iter()
            .map(|n| get_node_summary(registry, n))
            .collect();
        assert_eq!(
            summaries,
            vec![
                Some("To: ops@example.com".to_string()),
                Some("amount > 1000".to_string()),
                Some("sales".to_string()),
            ]
        );
    }

    #[test]
    fn test_trigger_starts_before_webhook() {
        let registry = NodeRegistry::builtin();
        let graph = WorkflowBuilder::new("wf", "Two entry points")
            .add_node("wh", "webhook", (0.0, 0.0))
            .add_node("tr", "trigger", (0.0, 100.0))
            .add_node("call", "http", (200.0, 0.0))
            .connect("wh", "call")
            .build();

        let starts = find_starting_nodes(registry, &graph).unwrap();
        assert_eq!(starts.len(), 1);
        assert_eq!(starts[0].id, "tr");
    }

    #[test]
    fn test_distinct_branches_into_output() {
        let registry = NodeRegistry::builtin();
        let graph = WorkflowBuilder::new("wf", "Branches")
            .add_node("cond", "condition", (0.0, 0.0))
            .add_node("out", "output", (200.0, 0.0))
            .connect_with("cond", "out", Some(OutputType::True), None)
            .build();
        let cond = graph.find_node("cond").unwrap();
        let out = graph.find_node("out").unwrap();

        let verdict = is_valid_connection(
            registry,
            cond,
            out,
            &graph.connections,
            Some(OutputType::False),
            None,
        );
        assert!(verdict.valid);

        assert_eq!(
            is_valid_connection(
                registry,
                cond,
                out,
                &graph.connections,
                Some(OutputType::True),
                None
            ),
            rejected(ConnectionRejection::Duplicate)
        );

        // Outputs feed nothing
        assert_eq!(
            is_valid_connection(registry, out, cond, &graph.connections, None, None),
            rejected(ConnectionRejection::MaxOutputsReached)
        );
    }

    #[test]
    fn test_join_ports() {
        let registry = NodeRegistry::builtin();
        let graph = WorkflowBuilder::new("wf", "Join")
            .add_node("left", "fetchData", (0.0, 0.0))
            .add_node("right", "excelInput", (0.0, 100.0))
            .add_node("merge", "join", (200.0, 50.0))
            .connect_with("left", "merge", None, Some(InputPort::A))
            .build();
        let right = graph.find_node("right").unwrap();
        let merge = graph.find_node("merge").unwrap();
        let validator = ConnectionValidator::new(registry);

        assert_eq!(
            validator.check(right, merge, &graph.connections, None, Some(InputPort::A)),
            Err(ConnectionRejection::PortInUse(InputPort::A))
        );
        assert!(validator
            .check(right, merge, &graph.connections, None, Some(InputPort::B))
            .is_ok());

        // Inputs never take upstream connections
        let left = graph.find_node("left").unwrap();
        assert_eq!(
            validator.check(merge, left, &graph.connections, None, None),
            Err(ConnectionRejection::MaxInputsReached)
        );
    }

    #[test]
    fn test_missing_config_messages() {
        let registry = NodeRegistry::builtin();
        let graph = WorkflowBuilder::new("wf", "Unconfigured")
            .add_node("mail", "sendEmail", (0.0, 0.0))
            .with_config(json!({"emailTo": "", "emailSubject": "Hi"}))
            .build();

        let result = validate_node_config(registry, &graph.nodes[0]);
        assert!(!result.valid);
        assert_eq!(result.errors, vec!["Missing required configuration: emailTo"]);
    }
}
