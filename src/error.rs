use thiserror::Error;

/// Grouping, summarizing and rendering are total; only the fetch can fail.
#[derive(Error, Debug)]
pub enum NodeviewError {
    #[error("{0}")]
    FetchError(String),
}

impl NodeviewError {
    pub fn fetch(step: &str, cause: impl std::fmt::Display) -> Self {
        NodeviewError::FetchError(format!("Failed to {}: {}", step, cause))
    }
}

pub type Result<T> = std::result::Result<T, NodeviewError>;
