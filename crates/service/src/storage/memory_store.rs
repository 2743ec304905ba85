use std::sync::Arc;

use async_trait::async_trait;
use models::Consignment;
use tokio::sync::RwLock;

use crate::consignment::repository::ConsignmentRepository;
use crate::errors::ServiceError;

/// Append-only in-memory consignment log.
///
/// Writers take the lock exclusively for the push; readers take it shared and
/// copy the vector out, so a returned listing is never affected by later
/// appends. Clones share the same log. Nothing is persisted: the log lives as
/// long as the process.
#[derive(Clone, Default)]
pub struct InMemoryConsignmentStore {
    inner: Arc<RwLock<Vec<Consignment>>>,
}

impl InMemoryConsignmentStore {
    pub fn new() -> Self { Self::default() }

    /// Number of stored consignments.
    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}

#[async_trait]
impl ConsignmentRepository for InMemoryConsignmentStore {
    async fn create(&self, consignment: Consignment) -> Result<Consignment, ServiceError> {
        let mut log = self.inner.write().await;
        log.push(consignment.clone());
        drop(log);
        Ok(consignment)
    }

    async fn get_all(&self) -> Vec<Consignment> {
        let log = self.inner.read().await;
        log.clone()
    }
}
