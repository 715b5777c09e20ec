//! Stock-level analysis over a store snapshot.
//!
//! Two read-only views, both derived freshly from the snapshot on every
//! call and never cached: a classification of each item against its target
//! quantity, and an undirected same-location graph relating items that
//! share a storage site.

use std::collections::HashMap;

use petgraph::graph::{NodeIndex, UnGraph};
use serde::Serialize;

use wardstock_core::{StoreError, StoreResult, ValueObject};

use crate::store::Store;

/// One item's distance from its target level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetDeviation {
    pub name: String,
    pub current: u32,
    pub target: u32,
    /// Deficit for below-target entries, surplus for above-target entries.
    pub delta: u32,
}

impl ValueObject for TargetDeviation {}

/// Disjoint classification of a store snapshot against target levels.
///
/// Items exactly at target appear in neither list. Entries follow the
/// store's sorted order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StockReport {
    pub below_target: Vec<TargetDeviation>,
    pub above_target: Vec<TargetDeviation>,
}

impl ValueObject for StockReport {}

/// Classify every item in the snapshot as below or above its target.
///
/// An empty store yields two empty lists; there are no error conditions.
pub fn analyze(store: &Store) -> StockReport {
    let mut report = StockReport::default();
    for item in store.items() {
        if item.current_quantity < item.target_quantity {
            report.below_target.push(TargetDeviation {
                name: item.name.clone(),
                current: item.current_quantity,
                target: item.target_quantity,
                delta: item.target_quantity - item.current_quantity,
            });
        } else if item.current_quantity > item.target_quantity {
            report.above_target.push(TargetDeviation {
                name: item.name.clone(),
                current: item.current_quantity,
                target: item.target_quantity,
                delta: item.current_quantity - item.target_quantity,
            });
        }
    }
    report
}

/// Undirected same-location graph: one node per item (labelled by name),
/// an edge between every pair of items stored in the same location
/// (labelled by that location).
#[derive(Debug)]
pub struct LocationGraph {
    graph: UnGraph<String, String>,
    nodes: HashMap<String, NodeIndex>,
}

impl LocationGraph {
    /// Build the graph from the current store snapshot.
    pub fn build(store: &Store) -> Self {
        let mut graph = UnGraph::new_undirected();
        let mut nodes = HashMap::new();
        for item in store.items() {
            let index = graph.add_node(item.name.clone());
            nodes.insert(item.name.clone(), index);
        }

        let mut by_location: HashMap<&str, Vec<&str>> = HashMap::new();
        for item in store.items() {
            by_location
                .entry(item.location.as_str())
                .or_default()
                .push(item.name.as_str());
        }
        for (location, names) in &by_location {
            for i in 0..names.len() {
                for j in (i + 1)..names.len() {
                    graph.add_edge(nodes[names[i]], nodes[names[j]], location.to_string());
                }
            }
        }

        Self { graph, nodes }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Names of the other items stored in the same location as `name`, or
    /// `None` when the item is absent from the snapshot.
    pub fn neighbors_of(&self, name: &str) -> Option<Vec<String>> {
        let index = self.nodes.get(name)?;
        Some(
            self.graph
                .neighbors(*index)
                .map(|neighbor| self.graph[neighbor].clone())
                .collect(),
        )
    }
}

/// Same-location query against a graph freshly derived from the snapshot.
///
/// The queried item itself is excluded; an item alone in its location
/// yields an empty list.
pub fn same_location(store: &Store, name: &str) -> StoreResult<Vec<String>> {
    LocationGraph::build(store)
        .neighbors_of(name)
        .ok_or_else(|| StoreError::not_found(name))
}
