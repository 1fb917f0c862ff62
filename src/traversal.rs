use std::collections::{HashMap, HashSet, VecDeque};

use ahash::RandomState;

use crate::graph::Graph;
use crate::node_id::NodeId;

/// Pending nodes in FIFO order plus an occurrence count for O(1) membership.
///
/// The seed may hold the same neighbor twice, so a plain set would not do.
struct Pending {
    queue: VecDeque<NodeId>,
    counts: HashMap<NodeId, usize, RandomState>,
}

impl Pending {
    fn new() -> Self {
        Pending {
            queue: VecDeque::new(),
            counts: HashMap::default(),
        }
    }

    fn push(&mut self, node: NodeId) {
        self.queue.push_back(node);
        *self.counts.entry(node).or_insert(0) += 1;
    }

    fn pop_front(&mut self) {
        if let Some(node) = self.queue.pop_front() {
            if let Some(count) = self.counts.get_mut(&node) {
                *count -= 1;
                if *count == 0 {
                    self.counts.remove(&node);
                }
            }
        }
    }

    fn contains(&self, node: NodeId) -> bool {
        self.counts.contains_key(&node)
    }
}

/// Computes the visit order of a breadth-first walk from `start`.
///
/// The order begins with `start`. A node is queued when it is neither
/// visited nor already pending. The walk ends as soon as the node just
/// visited is the only pending entry left, instead of popping it first.
pub fn traverse(graph: &Graph, start: NodeId) -> Vec<NodeId> {
    let mut order = vec![start];
    let mut visited: HashSet<NodeId, RandomState> = HashSet::default();
    visited.insert(start);

    let mut pending = Pending::new();
    for &neighbor in graph.neighbors(start) {
        if neighbor != start {
            pending.push(neighbor);
        }
    }

    while let Some(&current) = pending.queue.front() {
        order.push(current);
        visited.insert(current);

        for &neighbor in graph.neighbors(current) {
            if !visited.contains(&neighbor) && !pending.contains(neighbor) {
                pending.push(neighbor);
            }
        }

        if pending.queue.len() > 1 {
            pending.pop_front();
        } else {
            break;
        }
    }

    order
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[i64]) -> Vec<NodeId> {
        raw.iter().copied().map(NodeId::new).collect()
    }

    #[test]
    fn isolated_node_visits_only_itself() {
        let graph = Graph::new();
        assert_eq!(traverse(&graph, NodeId::new(42)), ids(&[42]));
    }

    #[test]
    fn two_node_chain() {
        let graph = Graph::from_adjacency([(0, vec![1]), (1, vec![0])]);
        assert_eq!(traverse(&graph, NodeId::new(0)), ids(&[0, 1]));
    }

    #[test]
    fn longer_chain() {
        let graph = Graph::from_adjacency([
            (0, vec![1]),
            (1, vec![0, 2]),
            (2, vec![1, 3]),
            (3, vec![2]),
        ]);
        assert_eq!(traverse(&graph, NodeId::new(0)), ids(&[0, 1, 2, 3]));
        assert_eq!(traverse(&graph, NodeId::new(2)), ids(&[2, 1, 3, 0]));
    }

    #[test]
    fn visits_level_by_level_in_neighbor_order() {
        let graph = Graph::from_adjacency([
            (0, vec![2, 1]),
            (1, vec![3]),
            (2, vec![4, 3]),
            (3, vec![]),
            (4, vec![5]),
        ]);
        assert_eq!(traverse(&graph, NodeId::new(0)), ids(&[0, 2, 1, 4, 3, 5]));
    }

    #[test]
    fn start_self_loop_is_ignored() {
        let graph = Graph::from_adjacency([(0, vec![0, 1]), (1, vec![1])]);
        assert_eq!(traverse(&graph, NodeId::new(0)), ids(&[0, 1]));
    }

    #[test]
    fn cycle_back_to_start_is_not_revisited() {
        let graph = Graph::from_adjacency([(0, vec![1]), (1, vec![2]), (2, vec![0])]);
        assert_eq!(traverse(&graph, NodeId::new(0)), ids(&[0, 1, 2]));
    }

    #[test]
    fn dangling_neighbor_is_visited_as_leaf() {
        let graph = Graph::from_adjacency([(0, vec![9])]);
        assert_eq!(traverse(&graph, NodeId::new(0)), ids(&[0, 9]));
    }

    #[test]
    fn duplicate_seed_neighbor_is_visited_twice() {
        // Both seed copies are queued before either is visited.
        let graph = Graph::from_adjacency([(0, vec![1, 1])]);
        assert_eq!(traverse(&graph, NodeId::new(0)), ids(&[0, 1, 1]));
    }
}
