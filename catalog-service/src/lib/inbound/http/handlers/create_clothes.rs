use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::list_clothes::ClothesData;
use super::ApiError;
use crate::domain::clothes::models::Color;
use crate::domain::clothes::models::NewClothes;
use crate::domain::clothes::models::Size;
use crate::inbound::http::router::AppState;

/// `POST /clothes` (protected)
pub async fn create_clothes(
    State(state): State<AppState>,
    Json(body): Json<CreateClothesRequest>,
) -> Result<(StatusCode, Json<ClothesData>), ApiError> {
    let clothes = state
        .clothes
        .create(NewClothes {
            name: body.name,
            color: body.color,
            size: body.size,
            photo_url: body.photo_url,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(ClothesData::from(&clothes))))
}

/// HTTP request body for creating a catalog entry (raw JSON); unknown color
/// or size values are rejected at deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateClothesRequest {
    name: String,
    color: Color,
    size: Size,
    photo_url: Option<String>,
}
