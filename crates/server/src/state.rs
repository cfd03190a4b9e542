use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::enquiry::{EnquiryRepository, EnquiryService, SeaOrmEnquiryRepository};

/// Shared handler state. Cloning is cheap: only `Arc`s are copied.
#[derive(Clone)]
pub struct ServerState {
    pub enquiries: EnquiryService<dyn EnquiryRepository>,
}

impl ServerState {
    pub fn new(repo: Arc<dyn EnquiryRepository>) -> Self {
        Self { enquiries: EnquiryService::new(repo) }
    }

    /// State backed by the given pool.
    pub fn from_db(db: DatabaseConnection) -> Self {
        Self::new(Arc::new(SeaOrmEnquiryRepository::new(db)))
    }
}
