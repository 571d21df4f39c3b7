//! Dependency graph over an active module set.

use std::collections::{BTreeSet, HashMap};

use crate::error::{OutfitterError, Result};

/// Dependency relationships between active modules.
///
/// Edges point from a module to the modules it requires. Every referenced
/// id must be added as a node before ordering; the resolver guarantees
/// this by walking the transitive closure first.
#[derive(Debug, Clone, Default)]
pub struct ModuleGraph {
    /// Node ids in insertion order.
    nodes: Vec<String>,
    /// Map of module id to its direct requirements.
    requires: HashMap<String, Vec<String>>,
    /// Map of module id to modules that require it.
    dependents: HashMap<String, Vec<String>>,
}

impl ModuleGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a module with its requirements.
    pub fn add_module(&mut self, id: impl Into<String>, requires: Vec<String>) {
        let id = id.into();
        if !self.requires.contains_key(&id) {
            self.nodes.push(id.clone());
            self.requires.insert(id.clone(), Vec::new());
        }
        for dep in requires {
            self.dependents
                .entry(dep.clone())
                .or_default()
                .push(id.clone());
            if let Some(deps) = self.requires.get_mut(&id) {
                deps.push(dep);
            }
        }
    }

    /// Check if a module exists in the graph.
    pub fn contains(&self, id: &str) -> bool {
        self.requires.contains_key(id)
    }

    /// Number of modules in the graph.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the graph is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns module ids in deterministic topological order.
    ///
    /// Requirements strictly precede their dependents. Ties among modules
    /// with no ordering constraint break alphabetically by id, so the same
    /// input set always produces byte-identical output.
    ///
    /// Returns an error naming every cycle participant if a cycle exists.
    pub fn topological_order(&self) -> Result<Vec<String>> {
        if let Some(cycle) = self.find_cycle() {
            return Err(OutfitterError::CircularDependency {
                cycle: cycle.join(" -> "),
            });
        }

        let mut in_degree: HashMap<&str, usize> = self
            .nodes
            .iter()
            .map(|id| {
                (
                    id.as_str(),
                    self.requires.get(id).map_or(0, |deps| deps.len()),
                )
            })
            .collect();

        // Min-frontier of ready modules; BTreeSet iteration yields the
        // alphabetically smallest id first.
        let mut ready: BTreeSet<&str> = in_degree
            .iter()
            .filter(|(_, &degree)| degree == 0)
            .map(|(id, _)| *id)
            .collect();

        let mut order = Vec::with_capacity(self.nodes.len());

        while let Some(id) = ready.pop_first() {
            order.push(id.to_string());

            if let Some(dependents) = self.dependents.get(id) {
                for dependent in dependents {
                    if let Some(degree) = in_degree.get_mut(dependent.as_str()) {
                        *degree -= 1;
                        if *degree == 0 {
                            ready.insert(dependent);
                        }
                    }
                }
            }
        }

        debug_assert_eq!(order.len(), self.nodes.len());
        Ok(order)
    }

    /// Find a cycle in the graph, returning its participants if one exists.
    ///
    /// Uses a three-color depth-first search: revisiting an in-progress
    /// node means the path from that node back to itself is a cycle.
    pub fn find_cycle(&self) -> Option<Vec<String>> {
        #[derive(Clone, Copy, PartialEq)]
        enum State {
            Unvisited,
            Visiting,
            Visited,
        }

        let mut state: HashMap<&str, State> = self
            .nodes
            .iter()
            .map(|id| (id.as_str(), State::Unvisited))
            .collect();

        let mut path: Vec<String> = Vec::new();

        fn dfs<'a>(
            node: &'a str,
            graph: &'a ModuleGraph,
            state: &mut HashMap<&'a str, State>,
            path: &mut Vec<String>,
        ) -> Option<Vec<String>> {
            state.insert(node, State::Visiting);
            path.push(node.to_string());

            if let Some(deps) = graph.requires.get(node) {
                for dep in deps {
                    match state.get(dep.as_str()) {
                        Some(State::Visiting) => {
                            let cycle_start = path.iter().position(|id| id == dep)?;
                            let mut cycle: Vec<String> = path[cycle_start..].to_vec();
                            cycle.push(dep.clone());
                            return Some(cycle);
                        }
                        Some(State::Unvisited) | None => {
                            if let Some(cycle) = dfs(dep, graph, state, path) {
                                return Some(cycle);
                            }
                        }
                        Some(State::Visited) => {}
                    }
                }
            }

            path.pop();
            state.insert(node, State::Visited);
            None
        }

        // Sorted starts keep the reported cycle stable across runs.
        let mut starts: Vec<&str> = self.nodes.iter().map(|id| id.as_str()).collect();
        starts.sort_unstable();

        for id in starts {
            if state.get(id) == Some(&State::Unvisited) {
                if let Some(cycle) = dfs(id, self, &mut state, &mut path) {
                    return Some(cycle);
                }
            }
        }

        None
    }
}
