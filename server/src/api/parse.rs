use crate::api::ErrorResponse;
use axum::{http::StatusCode, response::IntoResponse, Json};
use cookbook_core::parse_handwriting;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ParseRequest {
    /// Raw handwritten recipe name, e.g. "Riz@z RISO00tto!"
    pub input: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ParseResponse {
    pub msg: String,
}

#[utoipa::path(
    post,
    path = "/parse",
    tag = "cookbook",
    request_body = ParseRequest,
    responses(
        (status = 200, description = "Cleaned recipe name", body = ParseResponse),
        (status = 400, description = "Name contains no letters", body = ErrorResponse)
    )
)]
pub async fn parse_name(Json(request): Json<ParseRequest>) -> impl IntoResponse {
    match parse_handwriting(&request.input) {
        Ok(name) => (StatusCode::OK, Json(ParseResponse { msg: name })).into_response(),
        Err(e) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
            .into_response(),
    }
}
