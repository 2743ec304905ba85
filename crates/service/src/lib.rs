//! Service layer of the shipping service.
//! - `storage`: the in-memory consignment store.
//! - `consignment`: the repository abstraction and the RPC adapter on top of it.

pub mod errors;
pub mod storage;
pub mod consignment;
#[cfg(test)]
pub mod test_support;
