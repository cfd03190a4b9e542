//! Service catalog: the fixed list of bookable offerings.

use sea_orm::ConnectionTrait;
use tracing::debug;

use crate::domain::Service;
use crate::errors::ServiceError;

pub use migration::SEED_SERVICES;

/// Read the catalog from storage, in id order.
pub async fn list_services<C: ConnectionTrait>(db: &C) -> Result<Vec<Service>, ServiceError> {
    let rows = models::service::list(db).await?;
    debug!(count = rows.len(), "loaded service catalog");
    Ok(rows.into_iter().map(Service::from).collect())
}

/// The seeded catalog with the ids a fresh database assigns (1-based).
pub fn seed_catalog() -> Vec<Service> {
    SEED_SERVICES
        .iter()
        .zip(1..)
        .map(|(name, id)| Service::new(id, *name))
        .collect()
}

pub fn find_by_name<'a>(catalog: &'a [Service], name: &str) -> Option<&'a Service> {
    catalog.iter().find(|s| s.name == name)
}
