use async_trait::async_trait;
use models::Consignment;

use crate::errors::ServiceError;

/// Storage capability behind the shipping service.
///
/// Implementations must make `create` atomic with respect to other creates
/// and to `get_all`: no append may be lost and no read may see a partially
/// stored record. `get_all` returns records in the order their appends
/// completed.
#[async_trait]
pub trait ConsignmentRepository: Send + Sync {
    /// Append a consignment and hand it back unchanged.
    async fn create(&self, consignment: Consignment) -> Result<Consignment, ServiceError>;
    /// Every stored consignment, oldest first.
    async fn get_all(&self) -> Vec<Consignment>;
}
