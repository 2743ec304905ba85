pub mod repository;
pub mod service;

pub use repository::ConsignmentRepository;
pub use service::ShippingService;
