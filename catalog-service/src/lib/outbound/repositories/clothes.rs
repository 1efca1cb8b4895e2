use std::str::FromStr;

use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;

use crate::clothes::errors::ClothesError;
use crate::domain::clothes::models::Clothes;
use crate::domain::clothes::models::ClothesId;
use crate::domain::clothes::models::Color;
use crate::domain::clothes::models::NewClothes;
use crate::domain::clothes::models::Size;
use crate::domain::clothes::ports::ClothesRepository;

pub struct PostgresClothesRepository {
    pool: PgPool,
}

impl PostgresClothesRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ClothesRow {
    id: i64,
    name: String,
    color: String,
    size: String,
    photo_url: Option<String>,
    created_at: DateTime<Utc>,
    last_modified_at: DateTime<Utc>,
}

impl ClothesRow {
    fn try_into_clothes(self) -> Result<Clothes, ClothesError> {
        Ok(Clothes {
            id: ClothesId(self.id),
            name: self.name,
            color: Color::from_str(&self.color)?,
            size: Size::from_str(&self.size)?,
            photo_url: self.photo_url,
            created_at: self.created_at,
            last_modified_at: self.last_modified_at,
        })
    }
}

#[async_trait]
impl ClothesRepository for PostgresClothesRepository {
    async fn create(&self, clothes: NewClothes) -> Result<ClothesId, ClothesError> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO clothes (name, color, size, photo_url)
            VALUES ($1, $2::color_enum, $3::size_enum, $4)
            RETURNING id
            "#,
        )
        .bind(&clothes.name)
        .bind(clothes.color.as_str())
        .bind(clothes.size.as_str())
        .bind(&clothes.photo_url)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| ClothesError::DatabaseError(e.to_string()))?;

        Ok(ClothesId(id))
    }

    async fn find_by_id(&self, id: ClothesId) -> Result<Option<Clothes>, ClothesError> {
        let row: Option<ClothesRow> = sqlx::query_as(
            r#"
            SELECT id, name, color::TEXT AS color, size::TEXT AS size,
                   photo_url, created_at, last_modified_at
            FROM clothes
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ClothesError::DatabaseError(e.to_string()))?;

        row.map(ClothesRow::try_into_clothes).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Clothes>, ClothesError> {
        let rows: Vec<ClothesRow> = sqlx::query_as(
            r#"
            SELECT id, name, color::TEXT AS color, size::TEXT AS size,
                   photo_url, created_at, last_modified_at
            FROM clothes
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ClothesError::DatabaseError(e.to_string()))?;

        rows.into_iter()
            .map(ClothesRow::try_into_clothes)
            .collect()
    }
}
