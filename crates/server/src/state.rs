use std::sync::Arc;

use service::consignment::{ConsignmentRepository, ShippingService};
use service::storage::memory_store::InMemoryConsignmentStore;

/// Router state: the shipping adapter over whichever repository was wired in.
#[derive(Clone)]
pub struct ServerState {
    pub shipping: ShippingService<dyn ConsignmentRepository>,
}

impl ServerState {
    pub fn new(repo: Arc<dyn ConsignmentRepository>) -> Self {
        Self { shipping: ShippingService::new(repo) }
    }

    /// State backed by a fresh, empty in-memory store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryConsignmentStore::new()))
    }
}
