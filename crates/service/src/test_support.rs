#![cfg(test)]
use async_trait::async_trait;
use models::Consignment;

use crate::consignment::repository::ConsignmentRepository;
use crate::errors::ServiceError;

/// Repository that rejects every write and holds a fixed listing.
pub struct FailingRepository {
    pub message: String,
    pub listing: Vec<Consignment>,
}

impl FailingRepository {
    pub fn new(message: &str) -> Self {
        Self { message: message.to_string(), listing: Vec::new() }
    }
}

#[async_trait]
impl ConsignmentRepository for FailingRepository {
    async fn create(&self, _consignment: Consignment) -> Result<Consignment, ServiceError> {
        Err(ServiceError::storage(self.message.clone()))
    }

    async fn get_all(&self) -> Vec<Consignment> {
        self.listing.clone()
    }
}
