use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

/// Wire shape of a flight; `id` is ignored on input.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FlightDoc {
    pub id: Option<i32>,
    pub source: Option<String>,
    pub destination: Option<String>,
    /// ISO date, `YYYY-MM-DD`
    #[schema(example = "2024-01-01")]
    pub departure_date: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::flights::list,
        crate::routes::flights::get,
        crate::routes::flights::create,
        crate::routes::flights::update,
        crate::routes::flights::delete,
    ),
    components(schemas(HealthResponse, FlightDoc)),
    tags(
        (name = "health"),
        (name = "flights")
    )
)]
pub struct ApiDoc;
