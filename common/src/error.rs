//! Errors raised by the catalog state engine before anything reaches the network.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Please type a question before sending.")]
    EmptyChatQuery,
    #[error("Still waiting for the previous answer.")]
    ChatBusy,
    #[error("Resource {0} was not found.")]
    ResourceNotFound(String),
    #[error("{0}")]
    Remote(String),
}
