use crate::api::ErrorResponse;
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use cookbook_core::{validate, RawEntry, RawRequiredItem};
use serde::Deserialize;
use utoipa::ToSchema;

/// An entry submission as it arrives off the wire. Every field is optional
/// so malformed payloads come back as a 400 validation error rather than a
/// rejection from the JSON extractor.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EntryRequest {
    /// Either "ingredient" or "recipe"
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub name: Option<String>,
    pub cook_time: Option<i64>,
    pub required_items: Option<Vec<RequiredItemRequest>>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct RequiredItemRequest {
    pub name: Option<String>,
    pub quantity: Option<i64>,
}

impl From<EntryRequest> for RawEntry {
    fn from(request: EntryRequest) -> Self {
        RawEntry {
            kind: request.kind,
            name: request.name,
            cook_time: request.cook_time,
            required_items: request.required_items.map(|items| {
                items
                    .into_iter()
                    .map(|item| RawRequiredItem {
                        name: item.name,
                        quantity: item.quantity,
                    })
                    .collect()
            }),
        }
    }
}

#[utoipa::path(
    post,
    path = "/entry",
    tag = "cookbook",
    request_body = EntryRequest,
    responses(
        (status = 200, description = "Entry added to the cookbook"),
        (status = 400, description = "Invalid or duplicate entry", body = ErrorResponse)
    )
)]
pub async fn create_entry(
    State(state): State<AppState>,
    Json(request): Json<EntryRequest>,
) -> impl IntoResponse {
    // Hold the write lock across validate + register so the uniqueness
    // check and the insert are one atomic step.
    let mut cookbook = state.write().await;

    let entry = match validate(request.into(), &cookbook) {
        Ok(entry) => entry,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    };

    if let Err(e) = cookbook.register(entry) {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
            .into_response();
    }

    StatusCode::OK.into_response()
}
