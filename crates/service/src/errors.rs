use thiserror::Error;

/// Failures of the enquiry store and the domain constructors.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl From<sea_orm::DbErr> for ServiceError {
    fn from(e: sea_orm::DbErr) -> Self { Self::Db(e.to_string()) }
}

impl ServiceError {
    pub fn unknown_service(name: &str) -> Self {
        Self::Validation(format!("service `{}` is not in the catalog", name))
    }
}
