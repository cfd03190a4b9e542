//! Create `enquiries` table.
//!
//! Free-text services that did not match the catalog live in the
//! `other_services` array column rather than the join table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Enquiries::Table)
                    .if_not_exists()
                    .col(pk_auto(Enquiries::Id))
                    .col(timestamp_null(Enquiries::CreatedAt))
                    .col(string_len(Enquiries::FirstName, 255).not_null())
                    .col(string_len(Enquiries::LastName, 255).not_null())
                    .col(string_len_null(Enquiries::PartnerName, 255))
                    .col(string_len(Enquiries::Email, 255).not_null())
                    .col(string_len_null(Enquiries::Phone, 255))
                    .col(date_null(Enquiries::EventDate))
                    .col(string_len_null(Enquiries::VenueLocation, 255))
                    .col(
                        ColumnDef::new(Enquiries::OtherServices)
                            .array(ColumnType::String(StringLen::N(255)))
                            .null(),
                    )
                    .col(text_null(Enquiries::Message))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Enquiries::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Enquiries {
    Table,
    Id,
    CreatedAt,
    FirstName,
    LastName,
    PartnerName,
    Email,
    Phone,
    EventDate,
    VenueLocation,
    OtherServices,
    Message,
}
