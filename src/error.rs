use thiserror::Error;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("queue capacity must be at least 1")]
    ZeroQueueCapacity,

    #[cfg(feature = "config")]
    #[error("failed to load dispatch config: {0}")]
    Config(#[from] ::config::ConfigError),
}

pub type Result<T, E = DispatchError> = std::result::Result<T, E>;
