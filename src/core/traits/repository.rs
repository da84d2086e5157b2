use async_trait::async_trait;

use crate::core::resource::Resource;
use crate::core::Result;

/// Base repository trait for CRUD operations
///
/// One implementation serves every [`Resource`]; the entity's delete strategy
/// decides whether deletes remove rows or mark them.
#[async_trait]
pub trait CrudRepository<E: Resource>: Send + Sync {
    /// All live rows, in storage order
    async fn find_all(&self) -> Result<Vec<E>>;

    /// `None` when the row is missing or soft-deleted
    async fn find_by_id(&self, id: i64) -> Result<Option<E>>;

    /// Case-sensitive, unanchored substring match on the search field
    async fn find_all_containing(&self, text: &str) -> Result<Vec<E>>;

    /// Replace the row carrying the entity's id, or insert with a fresh id
    /// when it has none or the id is unknown
    async fn save(&self, entity: E) -> Result<E>;

    async fn exists_by_id(&self, id: i64) -> Result<bool>;

    /// Succeeds silently when the id does not exist
    async fn delete_by_id(&self, id: i64) -> Result<()>;

    async fn delete_all(&self) -> Result<()>;
}
