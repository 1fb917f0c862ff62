//! Concurrent breadth-first traversal queries over a shared, read-only graph.
//!
//! A [`Dispatcher`] spawns a fixed number of worker threads, feeds them query
//! nodes through a bounded queue and collects one visit order per query into
//! [`QueryResults`]. The graph is only borrowed, so workers never lock it.
//!
//! ```
//! use bfs_dispatch::{concurrent_bfs_queries, Graph, NodeId};
//!
//! let graph = Graph::from_adjacency([(0, vec![1]), (1, vec![0, 2]), (2, vec![1])]);
//! let results = concurrent_bfs_queries(&graph, &[NodeId::new(0)], 2);
//! let order: Vec<i64> = results
//!     .get(NodeId::new(0))
//!     .unwrap()
//!     .iter()
//!     .map(|n| n.get())
//!     .collect();
//! assert_eq!(order, vec![0, 1, 2]);
//! ```

pub mod config;
pub mod dispatch;
pub mod error;
pub mod graph;
pub mod node_id;
pub mod results;
pub mod traversal;
pub mod words;

pub use crate::config::DispatchConfig;
pub use crate::dispatch::{concurrent_bfs_queries, Dispatcher};
pub use crate::error::{DispatchError, Result};
pub use crate::graph::Graph;
pub use crate::node_id::NodeId;
pub use crate::results::QueryResults;
pub use crate::traversal::traverse;
pub use crate::words::count_word_frequency;
