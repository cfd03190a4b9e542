use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing::{debug, warn};

use crate::catalog;
use crate::domain::Enquiry;
use crate::errors::ServiceError;

/// Storage contract for enquiries.
#[async_trait]
pub trait EnquiryRepository: Send + Sync {
    /// Persist the enquiry and links to its recognized services as one unit.
    async fn create(&self, enquiry: &Enquiry) -> Result<i32, ServiceError>;
    async fn list(&self) -> Result<Vec<Enquiry>, ServiceError>;
    /// Remove by id. A missing id is not an error.
    async fn delete(&self, id: i32) -> Result<(), ServiceError>;
}

/// SeaORM-backed repository implementation.
#[derive(Clone)]
pub struct SeaOrmEnquiryRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmEnquiryRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl EnquiryRepository for SeaOrmEnquiryRepository {
    async fn create(&self, enquiry: &Enquiry) -> Result<i32, ServiceError> {
        let txn = self.db.begin().await?;

        let known = catalog::list_services(&txn).await?;
        let mut service_ids = Vec::with_capacity(enquiry.services().len());
        for name in enquiry.services() {
            match catalog::find_by_name(&known, name) {
                Some(s) => service_ids.push(s.id),
                None => {
                    warn!(service = %name, "unknown service on create");
                    txn.rollback().await?;
                    return Err(ServiceError::unknown_service(name));
                }
            }
        }

        // an error past this point drops `txn` uncommitted, rolling back both inserts
        let row = models::enquiry::create(&txn, enquiry.to_new_row(Utc::now().naive_utc())).await?;
        models::enquiry_service::link(&txn, row.id, &service_ids).await?;

        txn.commit().await?;
        debug!(enquiry_id = row.id, services = service_ids.len(), "enquiry committed");
        Ok(row.id)
    }

    async fn list(&self) -> Result<Vec<Enquiry>, ServiceError> {
        let rows = models::enquiry::list_with_services(&self.db).await?;
        Ok(group_rows(rows))
    }

    async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        let removed = models::enquiry::delete(&self.db, id).await?;
        debug!(enquiry_id = id, removed, "enquiry delete");
        Ok(())
    }
}

/// Fold joined (enquiry, service) rows into one [`Enquiry`] per id, keeping
/// first-seen order of enquiries and the row order of their services.
pub fn group_rows(rows: Vec<(models::enquiry::Model, Option<models::service::Model>)>) -> Vec<Enquiry> {
    let mut index: HashMap<i32, usize> = HashMap::new();
    let mut grouped: Vec<(models::enquiry::Model, Vec<String>)> = Vec::new();
    for (row, service) in rows {
        let idx = *index.entry(row.id).or_insert_with(|| {
            grouped.push((row, Vec::new()));
            grouped.len() - 1
        });
        if let Some(s) = service {
            grouped[idx].1.push(s.name);
        }
    }
    grouped.into_iter().map(|(row, services)| Enquiry::from_row(row, services)).collect()
}

/// Simple in-memory repository for handler tests.
pub mod mock {
    use super::*;
    use std::sync::{Mutex, PoisonError};

    #[derive(Default)]
    pub struct MockEnquiryRepository {
        rows: Mutex<Vec<Enquiry>>,
        next_id: Mutex<i32>,
        fail: Mutex<bool>,
    }

    impl MockEnquiryRepository {
        /// Make every subsequent call fail with a database error.
        pub fn fail_all(&self) {
            *self.fail.lock().unwrap_or_else(PoisonError::into_inner) = true;
        }

        pub fn len(&self) -> usize {
            self.rows.lock().unwrap_or_else(PoisonError::into_inner).len()
        }

        pub fn is_empty(&self) -> bool {
            self.len() == 0
        }

        fn check(&self) -> Result<(), ServiceError> {
            if *self.fail.lock().unwrap_or_else(PoisonError::into_inner) {
                return Err(ServiceError::Db("connection refused".into()));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl EnquiryRepository for MockEnquiryRepository {
        async fn create(&self, enquiry: &Enquiry) -> Result<i32, ServiceError> {
            self.check()?;
            let known = catalog::seed_catalog();
            if let Some(name) = enquiry.services().iter().find(|n| catalog::find_by_name(&known, n).is_none()) {
                return Err(ServiceError::unknown_service(name));
            }
            let mut next = self.next_id.lock().unwrap_or_else(PoisonError::into_inner);
            *next += 1;
            self.rows.lock().unwrap_or_else(PoisonError::into_inner).push(enquiry.clone().with_id(*next));
            Ok(*next)
        }

        async fn list(&self) -> Result<Vec<Enquiry>, ServiceError> {
            self.check()?;
            Ok(self.rows.lock().unwrap_or_else(PoisonError::into_inner).clone())
        }

        async fn delete(&self, id: i32) -> Result<(), ServiceError> {
            self.check()?;
            self.rows.lock().unwrap_or_else(PoisonError::into_inner).retain(|e| e.id() != Some(id));
            Ok(())
        }
    }
}
