use std::num::NonZeroUsize;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{DispatchError, Result};

// --- Defaults ---
pub const DEFAULT_WORKERS: usize = 4;
pub const CONFIG_FILE: &str = "bfs_dispatch";
pub const ENV_PREFIX: &str = "BFS_DISPATCH";

/// Worker pool sizing for a dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DispatchConfig {
    /// Number of worker threads. Zero is allowed and yields empty results.
    pub workers: usize,
    /// Bound of the work queue. Falls back to `workers` when unset.
    #[cfg_attr(feature = "serde", serde(default))]
    pub queue_capacity: Option<usize>,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        DispatchConfig {
            workers: default_workers(),
            queue_capacity: None,
        }
    }
}

fn default_workers() -> usize {
    std::thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(DEFAULT_WORKERS)
}

impl DispatchConfig {
    pub fn with_workers(workers: usize) -> Self {
        DispatchConfig {
            workers,
            queue_capacity: None,
        }
    }

    pub fn with_queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = Some(capacity);
        self
    }

    /// Queue bound actually used by the dispatcher.
    pub fn effective_queue_capacity(&self) -> usize {
        self.queue_capacity.unwrap_or(self.workers)
    }

    pub fn validate(&self) -> Result<()> {
        if self.queue_capacity == Some(0) {
            return Err(DispatchError::ZeroQueueCapacity);
        }
        Ok(())
    }

    /// Loads defaults, then `bfs_dispatch.toml` if present, then
    /// `BFS_DISPATCH__*` environment variables.
    #[cfg(feature = "config")]
    pub fn load() -> Result<Self> {
        use ::config::{Config, Environment, File};

        let settings = Config::builder()
            .set_default("workers", default_workers() as i64)?
            .add_source(File::with_name(CONFIG_FILE).required(false))
            // BFS_DISPATCH__QUEUE_CAPACITY=64 -> queue_capacity=64
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: DispatchConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_defaults_to_worker_count() {
        assert_eq!(DispatchConfig::with_workers(3).effective_queue_capacity(), 3);
        assert_eq!(
            DispatchConfig::with_workers(3)
                .with_queue_capacity(16)
                .effective_queue_capacity(),
            16
        );
    }

    #[test]
    fn zero_capacity_is_rejected() {
        let err = DispatchConfig::with_workers(2)
            .with_queue_capacity(0)
            .validate()
            .unwrap_err();
        assert!(matches!(err, DispatchError::ZeroQueueCapacity));
    }

    #[test]
    fn zero_workers_is_valid() {
        assert!(DispatchConfig::with_workers(0).validate().is_ok());
    }

    #[test]
    fn default_has_at_least_one_worker() {
        assert!(DispatchConfig::default().workers >= 1);
    }

    #[cfg(feature = "config")]
    #[test]
    fn load_without_sources_uses_defaults() {
        let config = DispatchConfig::load().unwrap();
        assert!(config.workers >= 1);
    }
}
