pub mod errors;
pub mod db;
pub mod service;
pub mod enquiry;
pub mod enquiry_service;

#[cfg(test)]
mod tests;
