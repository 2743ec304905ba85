use std::sync::Arc;

use models::{Consignment, GetRequest, Response};
use tracing::{debug, instrument};

use crate::consignment::repository::ConsignmentRepository;
use crate::errors::ServiceError;

/// RPC adapter for `shipping.ShippingService`.
/// Translates the two methods into repository calls and shapes the replies;
/// holds no state of its own.
pub struct ShippingService<R: ConsignmentRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: ConsignmentRepository + ?Sized> Clone for ShippingService<R> {
    fn clone(&self) -> Self { Self { repo: Arc::clone(&self.repo) } }
}

impl<R: ConsignmentRepository + ?Sized> ShippingService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Store the consignment and echo it back with `created = true`.
    /// Repository errors are returned as-is.
    #[instrument(skip(self, request), fields(consignment_id = %request.id))]
    pub async fn create_consignment(&self, request: Consignment) -> Result<Response, ServiceError> {
        let consignment = self.repo.create(request).await?;
        debug!("consignment stored");
        Ok(Response::created(consignment))
    }

    /// List every stored consignment. The request carries no filter.
    #[instrument(skip(self, _request))]
    pub async fn get_consignments(&self, _request: GetRequest) -> Response {
        let consignments = self.repo.get_all().await;
        debug!(count = consignments.len(), "consignments listed");
        Response::listing(consignments)
    }
}
