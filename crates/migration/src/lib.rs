//! Migrator registering entity-specific migrations in dependency order.
//! The catalog seed runs last.
pub use sea_orm_migration::prelude::*;

mod m20240826_000001_create_services;
mod m20240826_000002_create_enquiries;
mod m20240826_000003_create_enquiries_services;
mod m20240826_000004_seed_services;

pub use m20240826_000004_seed_services::SEED_SERVICES;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240826_000001_create_services::Migration),
            Box::new(m20240826_000002_create_enquiries::Migration),
            Box::new(m20240826_000003_create_enquiries_services::Migration),
            Box::new(m20240826_000004_seed_services::Migration),
        ]
    }
}
