use servicearea_core::{import::ImportError, resolution::ResolutionError, store::StoreError};

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("invalid configuration: {0}")]
    Configuration(String),
    #[error("invalid user input: {0}")]
    InvalidUserInput(String),
    #[error(transparent)]
    Import(#[from] ImportError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Resolution(#[from] ResolutionError),
    #[error("Error creating a runtime to handle async code: {0}")]
    Runtime(String),
    #[error("server failure: {0}")]
    Server(String),
    #[error("Serializing result failed: {0}")]
    Serialization(String),
}
