use crate::coordination::PathError;
use crate::record::RecordError;
use bytes::Bytes;
use std::sync::Arc;

/// CoordinationStore is a consistent hierarchical key-value store with child listing. Paths are
/// absolute and '/'-separated. Implementations must be safe to share across tasks; other writers
/// may mutate the store at any time.
#[async_trait::async_trait]
pub trait CoordinationStore: Send + Sync {
    /// Returns the node's value, or `None` if the node doesn't exist or holds no value.
    async fn get(&self, path: &str) -> Result<Option<Bytes>, CoordinationError>;

    /// Returns the names (not full paths) of the node's children. A missing node has no children.
    async fn get_children(&self, path: &str) -> Result<Vec<String>, CoordinationError>;

    /// Creates or overwrites the node's value.
    async fn set(&self, path: &str, data: Bytes) -> Result<(), CoordinationError>;

    /// Removes the node and everything below it. Removing a missing node is not an error.
    async fn remove(&self, path: &str) -> Result<(), CoordinationError>;
}

// Lets the controller and other writers (admin tools, tests) share one store.
#[async_trait::async_trait]
impl<S: CoordinationStore + ?Sized> CoordinationStore for Arc<S> {
    async fn get(&self, path: &str) -> Result<Option<Bytes>, CoordinationError> {
        (**self).get(path).await
    }

    async fn get_children(&self, path: &str) -> Result<Vec<String>, CoordinationError> {
        (**self).get_children(path).await
    }

    async fn set(&self, path: &str, data: Bytes) -> Result<(), CoordinationError> {
        (**self).set(path, data).await
    }

    async fn remove(&self, path: &str) -> Result<(), CoordinationError> {
        (**self).remove(path).await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CoordinationError {
    #[error(transparent)]
    Path(#[from] PathError),
    #[error("malformed record at '{path}': {source}")]
    Record { path: String, source: RecordError },
    #[error("records '{first}' and '{second}' under '{collection}' share the name '{id}'")]
    DuplicateId {
        collection: String,
        id: String,
        first: String,
        second: String,
    },
    #[error("coordination store fault: {0}")]
    StoreFault(String),
    #[error("coordination rpc failed: {0}")]
    Rpc(#[from] tonic::Status),
}
