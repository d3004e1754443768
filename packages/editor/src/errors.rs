//! Error types for the editor

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Mutation error: {0}")]
    Mutation(#[from] crate::mutations::MutationError),
}
