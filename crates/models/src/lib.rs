//! Message types of the `shipping.ShippingService` RPC schema.
//!
//! The schema is owned by the interface definition; these types mirror it
//! field for field and carry no behaviour beyond construction helpers.

pub mod consignment;

pub use consignment::{Consignment, Container, GetRequest, Response};
