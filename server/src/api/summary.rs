use crate::api::ErrorResponse;
use crate::AppState;
use axum::extract::{Query, State};
use axum::{http::StatusCode, response::IntoResponse, Json};
use cookbook_core::{summarize, RecipeSummary};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams)]
pub struct SummaryParams {
    /// Name of the recipe to summarize
    pub name: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct IngredientQuantity {
    pub name: String,
    pub quantity: u64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResponse {
    pub name: String,
    pub cook_time: u64,
    pub ingredients: Vec<IngredientQuantity>,
}

impl From<RecipeSummary> for SummaryResponse {
    fn from(summary: RecipeSummary) -> Self {
        Self {
            name: summary.name,
            cook_time: summary.cook_time,
            ingredients: summary
                .ingredients
                .into_iter()
                .map(|total| IngredientQuantity {
                    name: total.name,
                    quantity: total.quantity,
                })
                .collect(),
        }
    }
}

#[utoipa::path(
    get,
    path = "/summary",
    tag = "cookbook",
    params(SummaryParams),
    responses(
        (status = 200, description = "Flattened ingredient totals for the recipe", body = SummaryResponse),
        (status = 400, description = "Unknown, non-recipe, incomplete, or cyclic recipe", body = ErrorResponse)
    )
)]
pub async fn get_summary(
    State(state): State<AppState>,
    Query(params): Query<SummaryParams>,
) -> impl IntoResponse {
    let cookbook = state.read().await;
    match summarize(&cookbook, &params.name) {
        Ok(summary) => (StatusCode::OK, Json(SummaryResponse::from(summary))).into_response(),
        Err(e) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
            .into_response(),
    }
}
