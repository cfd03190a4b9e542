use sea_orm::{entity::prelude::*, ConnectionTrait, QueryOrder, SelectTwo, Set};
use serde::{Deserialize, Serialize};

use crate::{enquiry_service, errors, service};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "enquiries")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub created_at: Option<DateTime>,
    pub first_name: String,
    pub last_name: String,
    pub partner_name: Option<String>,
    pub email: String,
    pub phone: Option<String>,
    pub event_date: Option<Date>,
    pub venue_location: Option<String>,
    pub other_services: Option<Vec<String>>,
    #[sea_orm(column_type = "Text", nullable)]
    pub message: Option<String>,
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

impl Related<service::Entity> for Entity {
    fn to() -> RelationDef { enquiry_service::Relation::Service.def() }
    fn via() -> Option<RelationDef> { Some(enquiry_service::Relation::Enquiry.def().rev()) }
}

impl ActiveModelBehavior for ActiveModel {}

/// Column values for a new row; `id` is assigned by the database.
#[derive(Clone, Debug)]
pub struct NewEnquiry {
    pub created_at: DateTime,
    pub first_name: String,
    pub last_name: String,
    pub partner_name: Option<String>,
    pub email: String,
    pub phone: Option<String>,
    pub event_date: Option<Date>,
    pub venue_location: Option<String>,
    pub other_services: Vec<String>,
    pub message: Option<String>,
}

pub fn validate_required(first_name: &str, last_name: &str, email: &str) -> Result<(), errors::ModelError> {
    if first_name.trim().is_empty() { return Err(errors::ModelError::Validation("first_name required".into())); }
    if last_name.trim().is_empty() { return Err(errors::ModelError::Validation("last_name required".into())); }
    if email.trim().is_empty() { return Err(errors::ModelError::Validation("email required".into())); }
    Ok(())
}

pub async fn create<C: ConnectionTrait>(db: &C, new: NewEnquiry) -> Result<Model, errors::ModelError> {
    validate_required(&new.first_name, &new.last_name, &new.email)?;
    let am = ActiveModel {
        created_at: Set(Some(new.created_at)),
        first_name: Set(new.first_name),
        last_name: Set(new.last_name),
        partner_name: Set(new.partner_name),
        email: Set(new.email),
        phone: Set(new.phone),
        event_date: Set(new.event_date),
        venue_location: Set(new.venue_location),
        other_services: Set(Some(new.other_services)),
        message: Set(new.message),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

/// Enquiries LEFT JOIN services through the join table, ordered by enquiry id
/// and then by link insertion order.
pub fn list_with_services_query() -> SelectTwo<Entity, service::Entity> {
    Entity::find()
        .find_also_related(service::Entity)
        .order_by_asc(Column::Id)
        .order_by_asc(enquiry_service::Column::Id)
}

/// Every enquiry paired with each linked service (or `None` when it has none).
pub async fn list_with_services<C: ConnectionTrait>(db: &C) -> Result<Vec<(Model, Option<service::Model>)>, errors::ModelError> {
    Ok(list_with_services_query().all(db).await?)
}

/// Delete by id; returns the number of rows removed (0 when it did not exist).
pub async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> Result<u64, errors::ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected)
}
