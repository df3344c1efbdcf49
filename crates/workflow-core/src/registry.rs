//! Node type registry
//!
//! This module provides the registry that maps node type tags to their
//! definitions and summary strategies. It is the single source of truth for
//! what each node type is allowed to do, consulted by the config validator,
//! the connection validator, the ordering resolver and the lifecycle helpers.
//!
//! # Usage
//!
//! ```ignore
//! use workflow_core::NodeRegistry;
//!
//! // Built-in catalog, collected once from link-time descriptors
//! let registry = NodeRegistry::builtin();
//! let def = registry.lookup("sendEmail")?;
//! ```

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::descriptor::{DescriptorFn, NodeTypeDefinition, Summarizer, SummaryFn};
use crate::error::{Result, WorkflowError};
use crate::types::NodeCategory;

/// A registration entry combining a definition with an optional summary strategy
struct RegistryEntry {
    definition: NodeTypeDefinition,
    summarizer: Option<Summarizer>,
}

/// Registry of node types
///
/// Registries can be composed by merging:
/// ```ignore
/// let mut registry = NodeRegistry::with_builtins();
/// registry.merge(plugin_registry); // Add plugin node types
/// ```
pub struct NodeRegistry {
    entries: HashMap<String, RegistryEntry>,
}

impl NodeRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Create a registry holding every descriptor submitted via `inventory`
    ///
    /// Summary strategies submitted as `SummaryFn` are attached to their
    /// node type; a strategy for an unregistered type is ignored.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for descriptor in inventory::iter::<DescriptorFn> {
            registry.register((descriptor.0)());
        }
        for summary in inventory::iter::<SummaryFn> {
            match registry.entries.get_mut(summary.node_type) {
                Some(entry) => entry.summarizer = Some(summary.summarize),
                None => log::warn!(
                    "Summary strategy submitted for unregistered node type '{}'",
                    summary.node_type
                ),
            }
        }
        log::debug!("Collected {} built-in node types", registry.entries.len());
        registry
    }

    /// Process-wide built-in registry, constructed on first use
    pub fn builtin() -> &'static NodeRegistry {
        static BUILTIN: OnceLock<NodeRegistry> = OnceLock::new();
        BUILTIN.get_or_init(NodeRegistry::with_builtins)
    }

    /// Register a node type without a summary strategy
    pub fn register(&mut self, definition: NodeTypeDefinition) {
        self.entries.insert(
            definition.node_type.clone(),
            RegistryEntry {
                definition,
                summarizer: None,
            },
        );
    }

    /// Register a node type together with its summary strategy
    pub fn register_with_summary(&mut self, definition: NodeTypeDefinition, summarizer: Summarizer) {
        self.entries.insert(
            definition.node_type.clone(),
            RegistryEntry {
                definition,
                summarizer: Some(summarizer),
            },
        );
    }

    /// Look up the definition for a node type
    pub fn lookup(&self, node_type: &str) -> Result<&NodeTypeDefinition> {
        self.get_definition(node_type)
            .ok_or_else(|| WorkflowError::unknown_type(node_type))
    }

    /// Get the definition for a node type, if registered
    pub fn get_definition(&self, node_type: &str) -> Option<&NodeTypeDefinition> {
        self.entries.get(node_type).map(|e| &e.definition)
    }

    /// Get the summary strategy for a node type, if any
    pub fn summarizer(&self, node_type: &str) -> Option<Summarizer> {
        self.entries.get(node_type).and_then(|e| e.summarizer)
    }

    /// Type tags in a category, sorted for stable palette order
    pub fn list_by_category(&self, category: NodeCategory) -> Vec<&str> {
        let mut tags: Vec<&str> = self
            .entries
            .values()
            .filter(|e| e.definition.category == category)
            .map(|e| e.definition.node_type.as_str())
            .collect();
        tags.sort_unstable();
        tags
    }

    /// Get definitions grouped by category
    pub fn definitions_by_category(&self) -> HashMap<NodeCategory, Vec<&NodeTypeDefinition>> {
        let mut grouped: HashMap<NodeCategory, Vec<&NodeTypeDefinition>> = HashMap::new();
        for entry in self.entries.values() {
            grouped
                .entry(entry.definition.category)
                .or_default()
                .push(&entry.definition);
        }
        grouped
    }

    /// Get all registered definitions
    pub fn all_definitions(&self) -> Vec<&NodeTypeDefinition> {
        self.entries.values().map(|e| &e.definition).collect()
    }

    /// Check if a node type is registered
    pub fn has_node_type(&self, node_type: &str) -> bool {
        self.entries.contains_key(node_type)
    }

    /// List all registered node type tags
    pub fn node_types(&self) -> Vec<&str> {
        self.entries.keys().map(|s| s.as_str()).collect()
    }

    /// Merge another registry into this one
    ///
    /// Entries from `other` override entries in `self` if they share the same tag.
    pub fn merge(&mut self, other: NodeRegistry) {
        self.entries.extend(other.entries);
    }
}

impl Default for NodeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
