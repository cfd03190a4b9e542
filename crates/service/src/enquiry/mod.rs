//! Enquiry persistence: repository abstraction, SeaORM implementation and
//! the application service used by the HTTP layer.

pub mod repository;
pub mod service;

pub use repository::{EnquiryRepository, SeaOrmEnquiryRepository};
pub use service::EnquiryService;
