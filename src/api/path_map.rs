//! Endpoint hierarchy of the document.
//!
//! Paths are sorted and each one hangs from the longest previously seen
//! path that is a string prefix of it. String prefixes are not always
//! containers (`/redfish/v1/Chassis` is a prefix of
//! `/redfish/v1/ChassisGroups`), so [`EndpointGraph::normalize`] re-mounts
//! such endpoints under the root and then checks that the result is a tree.

use indexmap::IndexMap;
use petgraph::algo::all_simple_paths;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::{Bfs, Dfs, EdgeRef};
use petgraph::Direction;
use serde_json::Value;
use std::collections::HashMap;
use tracing::{debug, warn};

use crate::api::endpoint::ApiEndpoint;
use crate::api::name_translator::PathNameTranslator;
use crate::api::trait_context::{TraitContext, TraitContextFactory};
use crate::codegen::module_context::ModuleRegistry;
use crate::error::{CodegenError, NormalizationError};

#[derive(Debug, Clone, Default)]
pub struct EndpointGraph {
    graph: DiGraph<ApiEndpoint, ()>,
    index: IndexMap<String, NodeIndex>,
    root: Option<NodeIndex>,
}

fn strip_trailing_separator(path: &str) -> &str {
    match path.strip_suffix('/') {
        Some(stripped) if !stripped.is_empty() => stripped,
        _ => path,
    }
}

/// True when `ancestor` is `path` with one or more whole segments removed
fn is_segment_ancestor(ancestor: &str, path: &str) -> bool {
    path.strip_prefix(ancestor)
        .map_or(false, |rest| rest.starts_with('/'))
}

impl EndpointGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the graph from the document's path table
    ///
    /// Input order does not matter: paths are sorted first, which puts every
    /// path after all of its string prefixes.
    pub fn build(
        paths: &IndexMap<String, Value>,
        translator: &PathNameTranslator,
    ) -> Result<Self, CodegenError> {
        let mut sorted: Vec<(&String, &Value)> = paths.iter().collect();
        sorted.sort_by(|a, b| a.0.cmp(b.0));

        let mut graph = Self::new();
        for (path, payload) in sorted {
            graph.add_endpoint(path, payload.clone(), translator)?;
        }
        Ok(graph)
    }

    /// Add one endpoint below the longest known path that prefixes it
    ///
    /// The first endpoint added becomes the root. A path equal to a known
    /// one after stripping its trailing `/` is not added again.
    pub fn add_endpoint(
        &mut self,
        raw_path: &str,
        payload: Value,
        translator: &PathNameTranslator,
    ) -> Result<NodeIndex, CodegenError> {
        let path = strip_trailing_separator(raw_path);
        if let Some(&existing) = self.index.get(path) {
            warn!("Endpoint {} duplicates {}, keeping the first", raw_path, path);
            return Ok(existing);
        }

        let name = translator.translate(path)?;
        let node = self.graph.add_node(ApiEndpoint::new(path, name, payload));

        let parent = self
            .index
            .iter()
            .filter(|(seen, _)| seen.len() < path.len() && path.starts_with(seen.as_str()))
            .max_by_key(|(seen, _)| seen.len())
            .map(|(_, &index)| index);

        match parent {
            Some(parent) => {
                self.graph.add_edge(parent, node, ());
            }
            None if self.root.is_none() => self.root = Some(node),
            None => debug!("Endpoint {} has no parent", path),
        }

        self.index.insert(path.to_string(), node);
        Ok(node)
    }

    /// Add an edge by hand
    pub fn link(&mut self, parent: NodeIndex, child: NodeIndex) {
        self.graph.update_edge(parent, child, ());
    }

    pub fn root(&self) -> Option<NodeIndex> {
        self.root
    }

    pub fn node(&self, path: &str) -> Option<NodeIndex> {
        self.index.get(strip_trailing_separator(path)).copied()
    }

    pub fn endpoint(&self, node: NodeIndex) -> &ApiEndpoint {
        &self.graph[node]
    }

    pub fn graph(&self) -> &DiGraph<ApiEndpoint, ()> {
        &self.graph
    }

    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    pub fn parents(&self, node: NodeIndex) -> Vec<NodeIndex> {
        self.graph
            .neighbors_directed(node, Direction::Incoming)
            .collect()
    }

    pub fn children(&self, node: NodeIndex) -> Vec<NodeIndex> {
        self.graph
            .neighbors_directed(node, Direction::Outgoing)
            .collect()
    }

    // An endpoint is mounted when a parent other than the root is only a
    // string prefix of it, not a segment ancestor.
    fn is_mounted(&self, node: NodeIndex, root: NodeIndex) -> bool {
        let path = self.graph[node].path();
        self.graph
            .neighbors_directed(node, Direction::Incoming)
            .any(|parent| parent != root && !is_segment_ancestor(self.graph[parent].path(), path))
    }

    fn remount_under(&mut self, node: NodeIndex, root: NodeIndex) {
        while let Some(edge) = self
            .graph
            .edges_directed(node, Direction::Incoming)
            .next()
            .map(|edge| edge.id())
        {
            self.graph.remove_edge(edge);
        }
        self.graph.add_edge(root, node, ());
    }

    /// Re-mount misattributed and unparented endpoints under the root, then
    /// check that every endpoint has exactly one path from the root
    pub fn normalize(&mut self) -> Result<(), NormalizationError> {
        let Some(root) = self.root else {
            return Ok(());
        };

        let mut mounted = Vec::new();
        let mut dfs = Dfs::new(&self.graph, root);
        while let Some(node) = dfs.next(&self.graph) {
            if node != root && self.is_mounted(node, root) {
                mounted.push(node);
            }
        }

        let unparented = self.graph.node_indices().filter(|&node| {
            node != root
                && self
                    .graph
                    .neighbors_directed(node, Direction::Incoming)
                    .next()
                    .is_none()
        });
        mounted.extend(unparented.collect::<Vec<_>>());

        for node in mounted {
            debug!("Mounting {} under {}", self.graph[node], self.graph[root]);
            self.remount_under(node, root);
        }

        self.check_tree()
    }

    /// Every endpoint reachable from the root by exactly one path
    pub fn check_tree(&self) -> Result<(), NormalizationError> {
        let Some(root) = self.root else {
            return Ok(());
        };

        for node in self.graph.node_indices() {
            let parents = self
                .graph
                .neighbors_directed(node, Direction::Incoming)
                .count();
            let expected = if node == root { 0 } else { 1 };
            if parents > expected {
                return Err(NormalizationError::MultiplePaths {
                    endpoint: self.graph[node].to_string(),
                });
            }
        }

        let mut reached = vec![false; self.graph.node_count()];
        let mut bfs = Bfs::new(&self.graph, root);
        while let Some(node) = bfs.next(&self.graph) {
            reached[node.index()] = true;
        }

        match self.graph.node_indices().find(|node| !reached[node.index()]) {
            Some(node) => Err(NormalizationError::Unreachable {
                endpoint: self.graph[node].to_string(),
            }),
            None => Ok(()),
        }
    }

    /// The endpoints from the root down to `node`, derived from the graph
    /// every time it is asked for
    pub fn path_from_root(&self, node: NodeIndex) -> Result<Vec<NodeIndex>, NormalizationError> {
        let root = self.root.ok_or_else(|| NormalizationError::Unreachable {
            endpoint: self.graph[node].to_string(),
        })?;
        if node == root {
            return Ok(vec![root]);
        }

        let mut paths = all_simple_paths::<Vec<NodeIndex>, _>(&self.graph, root, node, 0, None);
        let first = paths.next();
        match (first, paths.next()) {
            (Some(path), None) => Ok(path),
            (Some(_), Some(_)) => Err(NormalizationError::MultiplePaths {
                endpoint: self.graph[node].to_string(),
            }),
            (None, _) => Err(NormalizationError::Unreachable {
                endpoint: self.graph[node].to_string(),
            }),
        }
    }
}

/// Turn the endpoint tree into trait contexts
///
/// Each trait is declared as a named submodule of the trait module of
/// every predecessor (the root's trait goes in the api base module). The
/// result is in depth-first order so a parent always precedes its children.
pub fn project(
    graph: &EndpointGraph,
    factory: &TraitContextFactory,
    registry: &mut ModuleRegistry,
) -> Result<Vec<TraitContext>, CodegenError> {
    let Some(root) = graph.root() else {
        return Ok(Vec::new());
    };

    let mut traits: HashMap<NodeIndex, TraitContext> = HashMap::new();
    let mut bfs = Bfs::new(graph.graph(), root);
    while let Some(node) = bfs.next(graph.graph()) {
        let path = graph.path_from_root(node)?;
        let summaries: Vec<&str> = path
            .iter()
            .map(|&vertex| graph.endpoint(vertex).summary())
            .collect();

        let context = factory.make_trait_context(&summaries, graph.endpoint(node))?;
        if let Some(leaf) = context.module_path.last_component() {
            let parents = graph.parents(node);
            if parents.is_empty() {
                registry.add_named(factory.base_path(), leaf.clone());
            }
            for parent in parents {
                if let Some(parent_context) = traits.get(&parent) {
                    registry.add_named(&parent_context.module_path, leaf.clone());
                }
            }
        }

        debug!("Endpoint {} is trait {}", graph.endpoint(node), context.rust_type);
        traits.insert(node, context);
    }

    let mut ordered = Vec::with_capacity(traits.len());
    let mut dfs = Dfs::new(graph.graph(), root);
    while let Some(node) = dfs.next(graph.graph()) {
        if let Some(context) = traits.remove(&node) {
            ordered.push(context);
        }
    }
    Ok(ordered)
}
