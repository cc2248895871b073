use std::sync::Arc;

use crate::{
    api::ApiJson,
    error::{ApiError, ApiResult},
    main_lib::AppState,
    models::{ApiResponse, DealRequestBody, ErrorResponse},
};
use axum::{extract::State, routing::post, Json, Router};
use fxdeals_core::deals::DealRequest;

/// Accept a single FX deal.
#[utoipa::path(
    post,
    path = "/api/v1/fx-deals/submit",
    request_body = DealRequestBody,
    responses(
        (status = 200, description = "Deal saved", body = ApiResponse),
        (status = 400, description = "Malformed body or invalid fields", body = ErrorResponse),
        (status = 409, description = "Unique id already used", body = ErrorResponse),
        (status = 422, description = "Invalid amount or currency code", body = ErrorResponse),
        (status = 500, description = "Unexpected failure", body = ErrorResponse)
    )
)]
pub async fn submit_deal(
    State(state): State<Arc<AppState>>,
    ApiJson(body): ApiJson<DealRequestBody>,
) -> ApiResult<Json<ApiResponse>> {
    let request = DealRequest::try_from(body).map_err(ApiError::FieldValidation)?;
    state.deal_service.submit_request(request).await?;
    Ok(Json(ApiResponse::success()))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/fx-deals/submit", post(submit_deal))
}
