use sea_orm::{entity::prelude::*, ConnectionTrait, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::{enquiry, enquiry_service, errors};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "services")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { EnquiryService }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::EnquiryService => Entity::has_many(enquiry_service::Entity).into(),
        }
    }
}

impl Related<enquiry_service::Entity> for Entity {
    fn to() -> RelationDef { Relation::EnquiryService.def() }
}

impl Related<enquiry::Entity> for Entity {
    fn to() -> RelationDef { enquiry_service::Relation::Enquiry.def() }
    fn via() -> Option<RelationDef> { Some(enquiry_service::Relation::Service.def().rev()) }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn create<C: ConnectionTrait>(db: &C, name: &str) -> Result<Model, errors::ModelError> {
    if name.trim().is_empty() { return Err(errors::ModelError::Validation("name required".into())); }
    let am = ActiveModel { name: Set(name.to_string()), ..Default::default() };
    Ok(am.insert(db).await?)
}

/// All catalog rows in id order.
pub async fn list<C: ConnectionTrait>(db: &C) -> Result<Vec<Model>, errors::ModelError> {
    Ok(Entity::find().order_by_asc(Column::Id).all(db).await?)
}
