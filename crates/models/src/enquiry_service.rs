use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::{enquiry, errors, service};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "enquiries_services")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub service_id: Option<i32>,
    pub enquiry_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Service, Enquiry }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Service => Entity::belongs_to(service::Entity)
                .from(Column::ServiceId)
                .to(service::Column::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .into(),
            Relation::Enquiry => Entity::belongs_to(enquiry::Entity)
                .from(Column::EnquiryId)
                .to(enquiry::Column::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .into(),
        }
    }
}

impl Related<service::Entity> for Entity {
    fn to() -> RelationDef { Relation::Service.def() }
}

impl Related<enquiry::Entity> for Entity {
    fn to() -> RelationDef { Relation::Enquiry.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Insert one join row per service id. An empty slice inserts nothing.
pub async fn link<C: ConnectionTrait>(db: &C, enquiry_id: i32, service_ids: &[i32]) -> Result<(), errors::ModelError> {
    if service_ids.is_empty() {
        return Ok(());
    }
    let rows = service_ids.iter().map(|sid| ActiveModel {
        enquiry_id: Set(Some(enquiry_id)),
        service_id: Set(Some(*sid)),
        ..Default::default()
    });
    Entity::insert_many(rows).exec(db).await?;
    Ok(())
}
