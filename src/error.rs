use thiserror::Error;

/// Unified error type for git-semvers operations
#[derive(Error, Debug)]
pub enum GitSemversError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in git-semvers
pub type Result<T> = std::result::Result<T, GitSemversError>;

impl GitSemversError {
    /// Create a repository error with context
    pub fn repository(msg: impl Into<String>) -> Self {
        GitSemversError::Repository(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        GitSemversError::Config(msg.into())
    }

    /// Whether this error came from reading the repository rather than from
    /// the user's configuration.
    pub fn is_tag_retrieval(&self) -> bool {
        matches!(self, GitSemversError::Git(_) | GitSemversError::Repository(_))
    }
}
