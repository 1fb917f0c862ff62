use std::collections::HashMap;

use ahash::RandomState;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::node_id::NodeId;

/// Visit orders keyed by the query node that produced them.
///
/// Handed back by a dispatch only after every worker has joined; there is no
/// way to mutate it afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct QueryResults {
    orders: HashMap<NodeId, Vec<NodeId>, RandomState>,
}

impl QueryResults {
    pub(crate) fn from_map(orders: HashMap<NodeId, Vec<NodeId>, RandomState>) -> Self {
        QueryResults { orders }
    }

    pub fn get(&self, query: NodeId) -> Option<&[NodeId]> {
        self.orders.get(&query).map(Vec::as_slice)
    }

    pub fn contains(&self, query: NodeId) -> bool {
        self.orders.contains_key(&query)
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn queries(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.orders.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &[NodeId])> + '_ {
        self.orders.iter().map(|(query, order)| (*query, order.as_slice()))
    }

    pub fn into_inner(self) -> HashMap<NodeId, Vec<NodeId>, RandomState> {
        self.orders
    }
}
