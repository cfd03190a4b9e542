//! Seed the service catalog.
use sea_orm_migration::prelude::*;

/// Default catalog, in id order.
pub const SEED_SERVICES: [&str; 10] = [
    "Live Band (3/5/7 piece)",
    "Wedding Film",
    "Photography",
    "Singing Waiting",
    "Bagpipes",
    "Acoustic Duo",
    "Karaoke/Bandeoke",
    "Saxophone Solo",
    "DJ",
    "Ceilidh",
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut insert = Query::insert();
        insert.into_table(Services::Table).columns([Services::Name]);
        for name in SEED_SERVICES {
            insert.values_panic([name.into()]);
        }
        manager.exec_stmt(insert).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let delete = Query::delete()
            .from_table(Services::Table)
            .and_where(Expr::col(Services::Name).is_in(SEED_SERVICES))
            .to_owned();
        manager.exec_stmt(delete).await
    }
}

#[derive(DeriveIden)]
enum Services { Table, Name }
