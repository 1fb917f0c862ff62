use std::thread;

use ahash::RandomState;
use crossbeam_channel::Receiver;

use crate::config::DispatchConfig;
use crate::error::Result;
use crate::graph::Graph;
use crate::node_id::NodeId;
use crate::results::QueryResults;
use crate::traversal::traverse;

type SharedOrders = papaya::HashMap<NodeId, Vec<NodeId>, RandomState>;

/// Fans traversal queries out over a fixed pool of worker threads.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    config: DispatchConfig,
}

impl Dispatcher {
    pub fn new(config: DispatchConfig) -> Result<Self> {
        config.validate()?;
        Ok(Dispatcher { config })
    }

    pub fn with_workers(workers: usize) -> Self {
        Dispatcher {
            config: DispatchConfig::with_workers(workers),
        }
    }

    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    /// Runs one traversal per query and returns once every worker has exited.
    ///
    /// All workers are spawned before the first query is queued. Queries are
    /// handed out in submission order; completion order is unspecified.
    /// Repeated queries are recomputed and the last write wins.
    pub fn dispatch(&self, graph: &Graph, queries: &[NodeId]) -> QueryResults {
        let workers = self.config.workers;
        if workers == 0 {
            tracing::debug!(queries = queries.len(), "no workers, skipping dispatch");
            return QueryResults::default();
        }

        tracing::debug!(
            workers,
            queries = queries.len(),
            nodes = graph.len(),
            "dispatching traversal queries"
        );

        let capacity = self.config.effective_queue_capacity();
        let (sender, receiver) = crossbeam_channel::bounded::<NodeId>(capacity);
        let orders = SharedOrders::with_hasher(RandomState::new());

        thread::scope(|scope| {
            for worker in 0..workers {
                let queue = receiver.clone();
                let orders = &orders;
                scope.spawn(move || run_worker(worker, graph, queue, orders));
            }
            drop(receiver);

            for &query in queries {
                // Only fails once every worker is gone, and the scope
                // re-raises their panics on exit.
                if sender.send(query).is_err() {
                    break;
                }
            }
            // Closing the queue is the drain signal.
            drop(sender);
        });

        let pinned = orders.pin();
        let results = QueryResults::from_map(
            pinned
                .iter()
                .map(|(query, order)| (*query, order.clone()))
                .collect(),
        );
        tracing::debug!(results = results.len(), "dispatch finished");
        results
    }
}

fn run_worker(worker: usize, graph: &Graph, queue: Receiver<NodeId>, orders: &SharedOrders) {
    for query in queue.iter() {
        let order = traverse(graph, query);
        tracing::trace!(worker, %query, visited = order.len(), "query finished");
        orders.pin().insert(query, order);
    }
}

/// Answers every query with `workers` threads; zero workers yields no results.
pub fn concurrent_bfs_queries(graph: &Graph, queries: &[NodeId], workers: usize) -> QueryResults {
    Dispatcher::with_workers(workers).dispatch(graph, queries)
}
