//! Domain records shared by the API, the importer and the composer.

use chrono::{NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;

/// A bookable offering from the catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub id: i32,
    pub name: String,
}

impl Service {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self { id, name: name.into() }
    }
}

impl From<models::service::Model> for Service {
    fn from(m: models::service::Model) -> Self {
        Self { id: m.id, name: m.name }
    }
}

/// Request body shape for a new enquiry.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnquiryInput {
    #[serde(default)]
    pub id: Option<i32>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub partners_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub event_date: Option<NaiveDate>,
    #[serde(default)]
    pub venue_location: Option<String>,
    #[serde(default)]
    pub services: Vec<String>,
    #[serde(default)]
    pub other_services: Vec<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// A customer's request for wedding services.
///
/// Built only through [`Enquiry::new`] (or from a stored row), so the email
/// is always normalized. There are no setters: enquiries are never updated.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Enquiry {
    id: Option<i32>,
    created_at: NaiveDateTime,
    first_name: String,
    last_name: String,
    partners_name: String,
    email: String,
    phone: String,
    event_date: Option<NaiveDate>,
    venue_location: Option<String>,
    services: Vec<String>,
    other_services: Vec<String>,
    message: Option<String>,
}

/// Trim and drop every space character.
pub fn normalize_email(raw: &str) -> String {
    raw.trim().replace(' ', "")
}

impl Enquiry {
    pub fn new(input: EnquiryInput) -> Result<Self, ServiceError> {
        let email = normalize_email(&input.email);
        models::enquiry::validate_required(&input.first_name, &input.last_name, &email)?;
        Ok(Self {
            id: input.id,
            created_at: input.created_at.unwrap_or_else(|| Utc::now().naive_utc()),
            first_name: input.first_name,
            last_name: input.last_name,
            partners_name: input.partners_name,
            email,
            phone: input.phone,
            event_date: input.event_date,
            venue_location: input.venue_location,
            services: input.services,
            other_services: input.other_services,
            message: input.message,
        })
    }

    /// Rebuild from a stored row plus its linked service names.
    pub fn from_row(row: models::enquiry::Model, services: Vec<String>) -> Self {
        Self {
            id: Some(row.id),
            created_at: row.created_at.unwrap_or_default(),
            first_name: row.first_name,
            last_name: row.last_name,
            partners_name: row.partner_name.unwrap_or_default(),
            email: normalize_email(&row.email),
            phone: row.phone.unwrap_or_default(),
            event_date: row.event_date,
            venue_location: row.venue_location,
            services,
            other_services: row.other_services.unwrap_or_default(),
            message: row.message,
        }
    }

    /// Column values for insertion, stamped with `created_at`.
    pub fn to_new_row(&self, created_at: NaiveDateTime) -> models::enquiry::NewEnquiry {
        models::enquiry::NewEnquiry {
            created_at,
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            partner_name: Some(self.partners_name.clone()),
            email: self.email.clone(),
            phone: Some(self.phone.clone()),
            event_date: self.event_date,
            venue_location: self.venue_location.clone(),
            other_services: self.other_services.clone(),
            message: self.message.clone(),
        }
    }

    pub fn with_id(mut self, id: i32) -> Self {
        self.id = Some(id);
        self
    }

    pub fn id(&self) -> Option<i32> { self.id }
    pub fn created_at(&self) -> NaiveDateTime { self.created_at }
    pub fn first_name(&self) -> &str { &self.first_name }
    pub fn last_name(&self) -> &str { &self.last_name }
    pub fn partners_name(&self) -> &str { &self.partners_name }
    pub fn email(&self) -> &str { &self.email }
    pub fn phone(&self) -> &str { &self.phone }
    pub fn event_date(&self) -> Option<NaiveDate> { self.event_date }
    pub fn venue_location(&self) -> Option<&str> { self.venue_location.as_deref() }
    pub fn services(&self) -> &[String] { &self.services }
    pub fn other_services(&self) -> &[String] { &self.other_services }
    pub fn message(&self) -> Option<&str> { self.message.as_deref() }

    /// Recognized names followed by free-text ones.
    pub fn all_services(&self) -> impl Iterator<Item = &str> {
        self.services.iter().chain(self.other_services.iter()).map(String::as_str)
    }
}
