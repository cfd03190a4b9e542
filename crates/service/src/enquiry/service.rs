use std::sync::Arc;

use tracing::{info, instrument};

use crate::domain::{Enquiry, EnquiryInput};
use crate::enquiry::repository::EnquiryRepository;
use crate::errors::ServiceError;

/// Application service for enquiries; the HTTP handlers call only this.
pub struct EnquiryService<R: EnquiryRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: EnquiryRepository + ?Sized> Clone for EnquiryService<R> {
    fn clone(&self) -> Self { Self { repo: Arc::clone(&self.repo) } }
}

impl<R: EnquiryRepository + ?Sized> EnquiryService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Validate the input into an [`Enquiry`] and persist it.
    #[instrument(skip(self, input), fields(services = input.services.len()))]
    pub async fn create(&self, input: EnquiryInput) -> Result<Enquiry, ServiceError> {
        let enquiry = Enquiry::new(input)?;
        let id = self.repo.create(&enquiry).await?;
        info!(enquiry_id = id, "enquiry created");
        Ok(enquiry.with_id(id))
    }

    pub async fn list(&self) -> Result<Vec<Enquiry>, ServiceError> {
        self.repo.list().await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        self.repo.delete(id).await?;
        info!(enquiry_id = id, "enquiry deleted");
        Ok(())
    }
}
