//! Create `enquiries_services` join table.
//!
//! Both foreign keys cascade so deleting an enquiry or a service removes
//! its links.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EnquiriesServices::Table)
                    .if_not_exists()
                    .col(pk_auto(EnquiriesServices::Id))
                    .col(integer_null(EnquiriesServices::ServiceId))
                    .col(integer_null(EnquiriesServices::EnquiryId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_enquiries_services_service")
                            .from(EnquiriesServices::Table, EnquiriesServices::ServiceId)
                            .to(Services::Table, Services::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_enquiries_services_enquiry")
                            .from(EnquiriesServices::Table, EnquiriesServices::EnquiryId)
                            .to(Enquiries::Table, Enquiries::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_enquiries_services_enquiry")
                    .table(EnquiriesServices::Table)
                    .col(EnquiriesServices::EnquiryId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(EnquiriesServices::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum EnquiriesServices { Table, Id, ServiceId, EnquiryId }

#[derive(DeriveIden)]
enum Services { Table, Id }

#[derive(DeriveIden)]
enum Enquiries { Table, Id }
