use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct MessageDoc { pub message: String }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnquiryInputDoc {
    pub first_name: String,
    pub last_name: String,
    pub partners_name: Option<String>,
    pub email: String,
    pub phone: Option<String>,
    /// ISO date, e.g. `2024-12-26`
    pub event_date: Option<String>,
    pub venue_location: Option<String>,
    pub services: Vec<String>,
    pub other_services: Vec<String>,
    pub message: Option<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnquiryDoc {
    pub id: Option<i32>,
    pub created_at: String,
    pub first_name: String,
    pub last_name: String,
    pub partners_name: String,
    pub email: String,
    pub phone: String,
    pub event_date: Option<String>,
    pub venue_location: Option<String>,
    pub services: Vec<String>,
    pub other_services: Vec<String>,
    pub message: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::enquiries::create,
        crate::routes::enquiries::list,
        crate::routes::enquiries::delete,
    ),
    components(
        schemas(
            HealthResponse,
            MessageDoc,
            EnquiryInputDoc,
            EnquiryDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "enquiries")
    )
)]
pub struct ApiDoc;
