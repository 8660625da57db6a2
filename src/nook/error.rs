use thiserror::Error;

/// A mutation the store refused to apply. The store is unchanged whenever
/// one of these is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("name is empty")]
    EmptyName,

    #[error("no category is selected")]
    NoCategorySelected,

    #[error("no matching category: {0}")]
    CategoryNotFound(String),

    #[error("item index {index} is out of range for {len} items")]
    IndexOutOfRange { index: usize, len: usize },
}

#[derive(Error, Debug)]
pub enum NookError {
    #[error(transparent)]
    Rejected(#[from] Rejection),

    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, NookError>;
