use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum ImportError {
    #[error("failure reading zones file from {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse zones: {0}")]
    Parse(String),
    #[error("failed to deserialize feature {index}: {message}")]
    Feature { index: usize, message: String },
}
