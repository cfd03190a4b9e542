use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// JSON body returned to API clients when a request fails.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn internal_error() -> Self {
        Self { message: "Internal Server Error".into() }
    }
}
