use std::collections::HashMap;

use ahash::RandomState;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::node_id::NodeId;

/// Adjacency list keyed by node id.
///
/// Dispatch only ever borrows a graph immutably, so workers read it without
/// locking. Nodes that are not keys have no outgoing edges.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Graph {
    adjacency: HashMap<NodeId, Vec<NodeId>, RandomState>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Graph {
            adjacency: HashMap::with_capacity_and_hasher(capacity, RandomState::new()),
        }
    }

    /// Builds a graph from raw `(node, neighbors)` pairs.
    pub fn from_adjacency<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (i64, Vec<i64>)>,
    {
        entries
            .into_iter()
            .map(|(node, neighbors)| {
                (
                    NodeId::new(node),
                    neighbors.into_iter().map(NodeId::new).collect(),
                )
            })
            .collect()
    }

    /// Sets the neighbor list of `node`, returning the previous one.
    pub fn insert(&mut self, node: NodeId, neighbors: Vec<NodeId>) -> Option<Vec<NodeId>> {
        self.adjacency.insert(node, neighbors)
    }

    /// Appends a directed edge `from -> to`.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId) {
        self.adjacency.entry(from).or_default().push(to);
    }

    pub fn neighbors(&self, node: NodeId) -> &[NodeId] {
        self.adjacency.get(&node).map_or(&[], Vec::as_slice)
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.adjacency.contains_key(&node)
    }

    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.adjacency.keys().copied()
    }

    /// Number of nodes with an adjacency entry.
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}

impl FromIterator<(NodeId, Vec<NodeId>)> for Graph {
    fn from_iter<T: IntoIterator<Item = (NodeId, Vec<NodeId>)>>(iter: T) -> Self {
        Graph {
            adjacency: iter.into_iter().collect(),
        }
    }
}
