//! Business layer for the enquiry manager.
//! - `importer` and `composer` are pure: spreadsheet rows in, enquiries and
//!   follow-up emails out.
//! - `enquiry` holds the repository abstraction and the service the API uses.
//! - `report` renders imported enquiries as CSV or an HTML table.

pub mod errors;
pub mod domain;
pub mod categories;
pub mod catalog;
pub mod importer;
pub mod composer;
pub mod report;
pub mod enquiry;
#[cfg(test)]
pub mod test_support;
