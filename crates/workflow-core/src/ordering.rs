//! Execution ordering
//!
//! Turns an unordered node/connection set into a deterministic run order
//! for an external engine that executes nodes one at a time.
//!
//! # Algorithm
//!
//! - Roots are nodes of a root category (trigger/input) plus nodes with no
//!   incoming connections, in node order.
//! - Visiting a node first visits every upstream node (in connection order),
//!   tracking the current path. Meeting a node already on the path is a
//!   cycle: the walk records it and stops descending there.
//! - Nodes still unvisited after the roots (isolated, or only reachable
//!   through a broken cycle) are visited in node order.
//!
//! Every node appears exactly once, and for every edge that is not part of
//! a cycle the source precedes the target.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::error::{Result, WorkflowError};
use crate::registry::NodeRegistry;
use crate::types::{NodeId, WorkflowGraph, WorkflowNode};

/// What to do when the dependency walk meets a cycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CyclePolicy {
    /// Break the cycle, warn, and return a best-effort order
    #[default]
    Lenient,
    /// Fail with `CyclicGraph`
    Strict,
}

impl std::str::FromStr for CyclePolicy {
    type Err = WorkflowError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lenient" => Ok(CyclePolicy::Lenient),
            "strict" => Ok(CyclePolicy::Strict),
            other => Err(WorkflowError::InvalidConfig(format!(
                "unknown cycle policy '{}'",
                other
            ))),
        }
    }
}

/// A cycle met while resolving the order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleWarning {
    /// Node ids along the cycle; the first and last entries are the same node
    pub path: Vec<NodeId>,
}

/// Resolved run order plus any cycles that were broken to produce it
#[derive(Debug, Clone)]
pub struct ExecutionPlan<'g> {
    /// Every node of the graph, dependencies first
    pub order: Vec<&'g WorkflowNode>,
    /// Cycles met during the walk
    pub cycles: Vec<CycleWarning>,
}

impl<'g> ExecutionPlan<'g> {
    /// Node ids in run order
    pub fn node_ids(&self) -> Vec<&'g str> {
        self.order.iter().map(|&n| n.id.as_str()).collect()
    }

    /// Whether any cycle had to be broken
    pub fn has_cycles(&self) -> bool {
        !self.cycles.is_empty()
    }
}

/// Computes dependency-respecting run orders
pub struct ExecutionOrderResolver<'r> {
    registry: &'r NodeRegistry,
    policy: CyclePolicy,
}

impl<'r> ExecutionOrderResolver<'r> {
    /// Create a resolver with the lenient cycle policy
    pub fn new(registry: &'r NodeRegistry) -> Self {
        Self {
            registry,
            policy: CyclePolicy::default(),
        }
    }

    /// Create a resolver configured from engine settings
    pub fn from_config(registry: &'r NodeRegistry, config: &EngineConfig) -> Self {
        Self::new(registry).with_policy(config.cycle_policy)
    }

    /// Set the cycle policy
    pub fn with_policy(mut self, policy: CyclePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Resolve the run order under the configured policy
    pub fn resolve<'g>(&self, graph: &'g WorkflowGraph) -> Result<ExecutionPlan<'g>> {
        let plan = self.plan(graph);
        match (self.policy, plan.cycles.first()) {
            (CyclePolicy::Strict, Some(cycle)) => Err(WorkflowError::CyclicGraph {
                path: cycle.path.clone(),
            }),
            _ => Ok(plan),
        }
    }

    /// Resolve the run order, breaking any cycles
    pub fn plan<'g>(&self, graph: &'g WorkflowGraph) -> ExecutionPlan<'g> {
        let mut walk = Walk::new(graph);

        let roots: Vec<usize> = (0..graph.nodes.len())
            .filter(|&idx| self.is_root(&graph.nodes[idx]) || walk.dependencies[idx].is_empty())
            .collect();
        log::debug!(
            "Resolving order for '{}': {} nodes, {} roots",
            graph.id,
            graph.nodes.len(),
            roots.len()
        );

        for idx in roots {
            walk.visit(idx);
        }
        for idx in 0..graph.nodes.len() {
            walk.visit(idx);
        }

        ExecutionPlan {
            order: walk.order,
            cycles: walk.cycles,
        }
    }

    fn is_root(&self, node: &WorkflowNode) -> bool {
        match self.registry.get_definition(&node.node_type) {
            Some(def) => def.category.is_root(),
            None => {
                log::warn!(
                    "Node '{}' has unknown type '{}', treating as non-trigger",
                    node.id,
                    node.node_type
                );
                false
            }
        }
    }
}

/// Depth-first state over node indices
struct Walk<'g> {
    nodes: &'g [WorkflowNode],
    /// Upstream node indices per node, in connection order
    dependencies: Vec<Vec<usize>>,
    visited: Vec<bool>,
    on_path: Vec<bool>,
    path: Vec<usize>,
    /// Next dependency to look at, per entry of `path`
    cursors: Vec<usize>,
    order: Vec<&'g WorkflowNode>,
    cycles: Vec<CycleWarning>,
}

impl<'g> Walk<'g> {
    fn new(graph: &'g WorkflowGraph) -> Self {
        let n = graph.nodes.len();
        let mut index: HashMap<&str, usize> = HashMap::with_capacity(n);
        for (idx, node) in graph.nodes.iter().enumerate() {
            index.entry(node.id.as_str()).or_insert(idx);
        }

        let mut dependencies = vec![Vec::new(); n];
        for conn in &graph.connections {
            match (
                index.get(conn.from_node_id.as_str()),
                index.get(conn.to_node_id.as_str()),
            ) {
                (Some(&from), Some(&to)) => dependencies[to].push(from),
                _ => log::debug!(
                    "Ignoring connection '{}' with a missing endpoint",
                    conn.id
                ),
            }
        }

        Self {
            nodes: &graph.nodes,
            dependencies,
            visited: vec![false; n],
            on_path: vec![false; n],
            path: Vec::new(),
            cursors: Vec::new(),
            order: Vec::with_capacity(n),
            cycles: Vec::new(),
        }
    }

    /// Post-order walk from `start`, iterative so long chains cannot
    /// exhaust the call stack
    fn visit(&mut self, start: usize) {
        if self.visited[start] {
            return;
        }
        self.enter(start);

        while let Some(&idx) = self.path.last() {
            let next = match self.cursors.last_mut() {
                Some(cursor) if *cursor < self.dependencies[idx].len() => {
                    let dep = self.dependencies[idx][*cursor];
                    *cursor += 1;
                    Some(dep)
                }
                _ => None,
            };

            match next {
                Some(dep) if self.visited[dep] => {}
                Some(dep) if self.on_path[dep] => self.record_cycle(dep),
                Some(dep) => self.enter(dep),
                None => {
                    self.path.pop();
                    self.cursors.pop();
                    self.on_path[idx] = false;
                    self.visited[idx] = true;
                    let nodes = self.nodes;
                    self.order.push(&nodes[idx]);
                }
            }
        }
    }

    fn enter(&mut self, idx: usize) {
        self.on_path[idx] = true;
        self.path.push(idx);
        self.cursors.push(0);
    }

    fn record_cycle(&mut self, idx: usize) {
        let start = self.path.iter().position(|&p| p == idx).unwrap_or(0);
        let path: Vec<NodeId> = self.path[start..]
            .iter()
            .chain(std::iter::once(&idx))
            .map(|&p| self.nodes[p].id.clone())
            .collect();
        log::warn!("Cycle detected, breaking at '{}': {}", self.nodes[idx].id, path.join(" -> "));
        self.cycles.push(CycleWarning { path });
    }
}

/// Resolve the run order with the lenient policy
pub fn get_execution_order<'g>(
    registry: &NodeRegistry,
    graph: &'g WorkflowGraph,
) -> Vec<&'g WorkflowNode> {
    ExecutionOrderResolver::new(registry).plan(graph).order
}

/// Group nodes into layers that can run in parallel
///
/// Each layer holds the nodes whose dependencies all sit in earlier layers,
/// in node order. Fails with `CyclicGraph` listing the unresolved nodes
/// when no further layer can be formed.
pub fn execution_layers(graph: &WorkflowGraph) -> Result<Vec<Vec<NodeId>>> {
    let known: HashSet<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
    let mut processed: HashSet<&str> = HashSet::new();
    let mut remaining: Vec<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
    let mut layers = Vec::new();

    while !remaining.is_empty() {
        let layer: Vec<&str> = remaining
            .iter()
            .copied()
            .filter(|id| {
                graph
                    .incoming(id)
                    .filter(|c| known.contains(c.from_node_id.as_str()))
                    .all(|c| processed.contains(c.from_node_id.as_str()))
            })
            .collect();

        if layer.is_empty() {
            return Err(WorkflowError::CyclicGraph {
                path: remaining.iter().map(|s| s.to_string()).collect(),
            });
        }

        processed.extend(layer.iter().copied());
        remaining.retain(|id| !processed.contains(id));
        layers.push(layer.into_iter().map(str::to_string).collect());
    }

    Ok(layers)
}
