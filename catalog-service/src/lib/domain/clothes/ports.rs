use async_trait::async_trait;

use crate::clothes::errors::ClothesError;
use crate::domain::clothes::models::Clothes;
use crate::domain::clothes::models::ClothesId;
use crate::domain::clothes::models::NewClothes;

/// Persistence operations for catalog entries.
///
/// Deliberately narrow: insert, select-by-id and select-all are the whole
/// surface.
#[async_trait]
pub trait ClothesRepository: Send + Sync + 'static {
    /// Persist a new catalog entry, returning the store-assigned id.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, clothes: NewClothes) -> Result<ClothesId, ClothesError>;

    /// Retrieve a catalog entry by identifier.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: ClothesId) -> Result<Option<Clothes>, ClothesError>;

    /// Retrieve the full catalog listing.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_all(&self) -> Result<Vec<Clothes>, ClothesError>;
}
