use std::sync::Arc;

use crate::clothes::errors::ClothesError;
use crate::domain::clothes::models::Clothes;
use crate::domain::clothes::models::ClothesId;
use crate::domain::clothes::models::NewClothes;
use crate::domain::clothes::ports::ClothesRepository;

/// Domain service for the catalog collaborator.
///
/// Thin by design: the catalog is plain CRUD, the interesting behavior lives
/// in the auth gate in front of it.
pub struct ClothesService {
    repository: Arc<dyn ClothesRepository>,
}

impl ClothesService {
    pub fn new(repository: Arc<dyn ClothesRepository>) -> Self {
        Self { repository }
    }

    /// Create a catalog entry and read back the stored record.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    pub async fn create(&self, clothes: NewClothes) -> Result<Clothes, ClothesError> {
        let id = self.repository.create(clothes).await?;

        self.repository.find_by_id(id).await?.ok_or_else(|| {
            ClothesError::DatabaseError(format!("clothes {} missing after insert", id))
        })
    }

    /// Retrieve a catalog entry by unique identifier.
    ///
    /// # Errors
    /// * `NotFound` - Entry does not exist
    /// * `DatabaseError` - Database operation failed
    pub async fn get(&self, id: ClothesId) -> Result<Clothes, ClothesError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ClothesError::NotFound(id.0))
    }

    /// Retrieve the full catalog listing.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    pub async fn list(&self) -> Result<Vec<Clothes>, ClothesError> {
        self.repository.list_all().await
    }
}
