use thiserror::Error;

/// Error produced when a search fails.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("No path found to a terminal node")]
    NoPathFound,
}

/// Result when a search method might fail.
pub type Result<T> = std::result::Result<T, SearchError>;
