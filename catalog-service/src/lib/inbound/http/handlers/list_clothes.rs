use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use super::ApiError;
use crate::domain::clothes::models::Clothes;
use crate::domain::clothes::models::Color;
use crate::domain::clothes::models::Size;
use crate::inbound::http::router::AppState;

/// `GET /clothes` (protected)
pub async fn list_clothes(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Vec<ClothesData>>), ApiError> {
    let listing = state.clothes.list().await?;

    Ok((
        StatusCode::OK,
        Json(listing.iter().map(ClothesData::from).collect()),
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClothesData {
    pub id: i64,
    pub name: String,
    pub color: Color,
    pub size: Size,
    pub photo_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub last_modified_at: DateTime<Utc>,
}

impl From<&Clothes> for ClothesData {
    fn from(clothes: &Clothes) -> Self {
        Self {
            id: clothes.id.0,
            name: clothes.name.clone(),
            color: clothes.color,
            size: clothes.size,
            photo_url: clothes.photo_url.clone(),
            created_at: clothes.created_at,
            last_modified_at: clothes.last_modified_at,
        }
    }
}
