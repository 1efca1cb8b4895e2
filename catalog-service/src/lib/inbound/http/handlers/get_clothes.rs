use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::list_clothes::ClothesData;
use super::ApiError;
use crate::domain::clothes::models::ClothesId;
use crate::inbound::http::router::AppState;

/// `GET /clothes/:clothes_id` (protected)
pub async fn get_clothes(
    State(state): State<AppState>,
    Path(clothes_id): Path<i64>,
) -> Result<(StatusCode, Json<ClothesData>), ApiError> {
    let clothes = state.clothes.get(ClothesId(clothes_id)).await?;

    Ok((StatusCode::OK, Json(ClothesData::from(&clothes))))
}
