//! Spreadsheet export → [`Enquiry`] mapping.
//!
//! Each row of the form export is a column-name → value map. Requested
//! services are split into catalog matches and free-text "other" entries.

use std::collections::HashMap;
use std::io;

use chrono::{NaiveDate, NaiveDateTime};
use thiserror::Error;

use crate::domain::{Enquiry, EnquiryInput, Service};
use crate::errors::ServiceError;

pub const COL_TIMESTAMP: &str = "Timestamp";
pub const COL_FIRST_NAME: &str = "First Name";
pub const COL_LAST_NAME: &str = "Last Name";
pub const COL_PARTNERS_NAME: &str = "Partner's Name (Full name)";
pub const COL_EMAIL: &str = "Email";
pub const COL_PHONE: &str = "Phone";
pub const COL_EVENT_DATE: &str = "Event Date (optional)";
pub const COL_VENUE: &str = "Venue Location (optional)";
pub const COL_SERVICES: &str = "Which services are you interested in?";
pub const COL_MESSAGE: &str = "Message (optional)";

pub const SERVICES_SEPARATOR: &str = ", ";
const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";
const EVENT_DATE_FORMAT: &str = "%d/%m/%Y";

pub type RawRow = HashMap<String, String>;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("missing column `{0}`")]
    MissingField(&'static str),
    #[error("cannot parse {field} `{value}`: {source}")]
    Parse {
        field: &'static str,
        value: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Invalid(#[from] ServiceError),
}

fn required<'a>(raw: &'a RawRow, column: &'static str) -> Result<&'a str, ImportError> {
    raw.get(column).map(String::as_str).ok_or(ImportError::MissingField(column))
}

fn optional(raw: &RawRow, column: &str) -> Option<String> {
    raw.get(column).filter(|v| !v.is_empty()).cloned()
}

/// Split the interested-services field into (catalog names, other names),
/// each in encounter order. Matching is exact.
pub fn split_services(interested: &str, known: &[Service]) -> (Vec<String>, Vec<String>) {
    let mut services = Vec::new();
    let mut other = Vec::new();
    for token in interested.split(SERVICES_SEPARATOR) {
        if known.iter().any(|s| s.name == token) {
            services.push(token.to_string());
        } else {
            other.push(token.to_string());
        }
    }
    (services, other)
}

/// Map one export row to a new, unsaved enquiry.
pub fn import_row(raw: &RawRow, known: &[Service]) -> Result<Enquiry, ImportError> {
    let timestamp = required(raw, COL_TIMESTAMP)?;
    let created_at = NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT).map_err(|source| {
        ImportError::Parse { field: COL_TIMESTAMP, value: timestamp.to_string(), source }
    })?;

    let event_date = match optional(raw, COL_EVENT_DATE) {
        Some(value) => Some(NaiveDate::parse_from_str(&value, EVENT_DATE_FORMAT).map_err(|source| {
            ImportError::Parse { field: COL_EVENT_DATE, value: value.clone(), source }
        })?),
        None => None,
    };

    let (services, other_services) = split_services(required(raw, COL_SERVICES)?, known);

    let enquiry = Enquiry::new(EnquiryInput {
        id: None,
        created_at: Some(created_at),
        first_name: required(raw, COL_FIRST_NAME)?.to_string(),
        last_name: required(raw, COL_LAST_NAME)?.to_string(),
        partners_name: raw.get(COL_PARTNERS_NAME).cloned().unwrap_or_default(),
        email: required(raw, COL_EMAIL)?.to_string(),
        phone: raw.get(COL_PHONE).cloned().unwrap_or_default(),
        event_date,
        venue_location: optional(raw, COL_VENUE),
        services,
        other_services,
        message: optional(raw, COL_MESSAGE),
    })?;
    Ok(enquiry)
}

/// Read a headered, comma-delimited export into raw rows.
pub fn read_rows<R: io::Read>(reader: R) -> Result<Vec<RawRow>, ImportError> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);
    let mut rows = Vec::new();
    for record in rdr.deserialize::<RawRow>() {
        rows.push(record?);
    }
    Ok(rows)
}

/// Import every row, stopping at the first failure.
pub fn import_all(rows: &[RawRow], known: &[Service]) -> Result<Vec<Enquiry>, ImportError> {
    rows.iter().map(|r| import_row(r, known)).collect()
}
