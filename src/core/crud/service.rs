use std::sync::Arc;

use tracing::{debug, info};

use crate::core::resource::Resource;
use crate::core::traits::CrudRepository;
use crate::core::Result;

/// Service layer shared by every resource family
///
/// Forwards to the repository unchanged, except for `remove_by_id` which
/// turns "delete something that may not exist" into a boolean.
pub struct CrudService<E: Resource> {
    repository: Arc<dyn CrudRepository<E>>,
}

impl<E: Resource> Clone for CrudService<E> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<E: Resource> CrudService<E> {
    pub fn new(repository: Arc<dyn CrudRepository<E>>) -> Self {
        Self { repository }
    }

    pub async fn find_all(&self) -> Result<Vec<E>> {
        debug!(resource = E::PATH, "Listing all rows");
        self.repository.find_all().await
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<E>> {
        debug!(resource = E::PATH, id, "Fetching row");
        self.repository.find_by_id(id).await
    }

    pub async fn find_all_containing(&self, text: &str) -> Result<Vec<E>> {
        debug!(
            resource = E::PATH,
            field = E::SEARCH_COLUMN,
            text,
            "Searching rows"
        );
        self.repository.find_all_containing(text).await
    }

    /// Create or fully replace, depending on the entity's id
    pub async fn save(&self, entity: E) -> Result<E> {
        let saved = self.repository.save(entity).await?;
        info!(resource = E::PATH, id = ?saved.id(), "Row saved");
        Ok(saved)
    }

    /// `false` without touching storage when the id does not exist
    pub async fn remove_by_id(&self, id: i64) -> Result<bool> {
        if !self.repository.exists_by_id(id).await? {
            debug!(resource = E::PATH, id, "Nothing to remove");
            return Ok(false);
        }

        self.repository.delete_by_id(id).await?;
        info!(resource = E::PATH, id, "Row removed");
        Ok(true)
    }

    pub async fn remove_all(&self) -> Result<()> {
        self.repository.delete_all().await?;
        info!(resource = E::PATH, "All rows removed");
        Ok(())
    }
}
