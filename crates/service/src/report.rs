//! Offline reports over imported enquiries: a semicolon CSV and an HTML table,
//! both carrying the composed mailto link.

use std::io;

use thiserror::Error;

use crate::composer::{self, format_date_small};
use crate::domain::Enquiry;
use crate::importer::ImportError;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error(transparent)]
    Import(#[from] ImportError),
    #[error(transparent)]
    Service(#[from] crate::errors::ServiceError),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// A record that can be laid out as a row under fixed headers.
pub trait Tabular {
    fn headers() -> &'static [&'static str];
    fn cells(&self) -> Vec<String>;
}

/// Full enquiry plus its link, as written to the CSV export.
#[derive(Clone, Debug)]
pub struct CsvRow {
    pub enquiry: Enquiry,
    pub link: String,
}

/// Condensed view used by the printable table.
#[derive(Clone, Debug)]
pub struct TableRow {
    pub enquiry: Enquiry,
    pub link: String,
}

impl CsvRow {
    pub fn new(enquiry: Enquiry) -> Self {
        let link = composer::compose(&enquiry).mailto;
        Self { enquiry, link }
    }
}

impl TableRow {
    pub fn new(enquiry: Enquiry) -> Self {
        let link = format!("<a href={}>email</a>", composer::compose(&enquiry).mailto);
        Self { enquiry, link }
    }
}

impl Tabular for CsvRow {
    fn headers() -> &'static [&'static str] {
        &[
            "id", "createdAt", "firstName", "lastName", "partnersName", "email", "phone",
            "eventDate", "venueLocation", "services", "otherServices", "message", "link",
        ]
    }

    fn cells(&self) -> Vec<String> {
        let e = &self.enquiry;
        vec![
            e.id().map(|id| id.to_string()).unwrap_or_default(),
            e.created_at().format("%d/%m/%Y %H:%M:%S").to_string(),
            e.first_name().to_string(),
            e.last_name().to_string(),
            e.partners_name().to_string(),
            e.email().to_string(),
            e.phone().to_string(),
            e.event_date().map(format_date_small).unwrap_or_default(),
            e.venue_location().unwrap_or_default().to_string(),
            e.services().join(","),
            e.other_services().join(","),
            e.message().unwrap_or_default().to_string(),
            self.link.clone(),
        ]
    }
}

impl Tabular for TableRow {
    fn headers() -> &'static [&'static str] {
        &["date", "name", "partnerName", "email", "phone", "venue", "services", "other", "message", "link"]
    }

    fn cells(&self) -> Vec<String> {
        let e = &self.enquiry;
        vec![
            format_date_small(e.created_at().date()),
            format!("{} {}", e.first_name(), e.last_name()),
            e.partners_name().to_string(),
            e.email().to_string(),
            e.phone().to_string(),
            e.venue_location().unwrap_or_default().to_string(),
            e.services().join(","),
            e.other_services().join(","),
            e.message().unwrap_or_default().to_string(),
            self.link.clone(),
        ]
    }
}

/// Write `rows` as semicolon-delimited CSV with a header row.
pub fn write_csv<T: Tabular, W: io::Write>(rows: &[T], writer: W) -> Result<(), ReportError> {
    let mut wtr = csv::WriterBuilder::new().delimiter(b';').from_writer(writer);
    wtr.write_record(T::headers())?;
    for row in rows {
        wtr.write_record(row.cells())?;
    }
    wtr.flush()?;
    Ok(())
}

/// Render `rows` as an HTML table. Cell values are inserted verbatim.
pub fn html_table<T: Tabular>(rows: &[T]) -> String {
    if rows.is_empty() {
        return "<table><tr><td>No data available</td></tr></table>".to_string();
    }
    let mut html = String::from("<table border='1'>");
    html.push_str("<thead><tr>");
    for header in T::headers() {
        html.push_str(&format!("<th>{}</th>", header));
    }
    html.push_str("</tr></thead>");

    html.push_str("<tbody>");
    for row in rows {
        html.push_str("<tr>");
        for cell in row.cells() {
            html.push_str(&format!("<td>{}</td>", cell));
        }
        html.push_str("</tr>");
    }
    html.push_str("</tbody>");
    html.push_str("</table>");
    html
}
