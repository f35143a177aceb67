use thiserror::Error;

#[derive(Debug, Error)]
pub enum SystemError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Store task failed: {0}")]
    TaskFailed(#[from] tokio::task::JoinError),
}
