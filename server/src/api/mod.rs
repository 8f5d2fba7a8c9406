pub mod entry;
pub mod parse;
pub mod summary;
pub mod testing;

use crate::AppState;
use axum::routing::{get, post};
use axum::Router;
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

/// Shared error response used by all endpoints. Every rejection is a 400
/// with a message; callers are expected to treat all of them uniformly.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Returns the router for all cookbook endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/parse", post(parse::parse_name))
        .route("/entry", post(entry::create_entry))
        .route("/summary", get(summary::get_summary))
        .route("/ping", get(testing::ping))
}

#[derive(OpenApi)]
#[openapi(
    paths(
        parse::parse_name,
        entry::create_entry,
        summary::get_summary,
        testing::ping,
    ),
    components(schemas(
        ErrorResponse,
        parse::ParseRequest,
        parse::ParseResponse,
        entry::EntryRequest,
        entry::RequiredItemRequest,
        summary::SummaryResponse,
        summary::IngredientQuantity,
        testing::PingResponse,
    ))
)]
struct ApiDoc;

/// Generate the complete OpenAPI spec
pub fn openapi() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}
