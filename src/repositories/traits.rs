//! Common repository traits
//!
//! This module defines generic interfaces for database operations, one trait
//! per operation so that callers can depend on exactly what they use.

use super::Page;
use crate::core::StoreResult;
use crate::entities::Changes;

/// Trait for adding new entities to the store
///
/// # Type Parameters
/// * `Entity` - Type of the entity (its ID is assigned by the database)
pub trait Create<Entity> {
    /// Inserts `entity` and commits
    ///
    /// # Returns
    /// * `Ok(Entity)` - Stored entity, refreshed with the ID and any store defaults
    /// * `Err(StoreError::ConstraintViolation)` - Rejected by a table constraint
    async fn add(&mut self, entity: &Entity) -> StoreResult<Entity>;
}

/// Trait for reading a single entity by primary key
pub trait Read<Entity> {
    /// # Returns
    /// * `Ok(Some(Entity))` - Entity found
    /// * `Ok(None)` - No entity with that ID
    /// * `Err(StoreError)` - The query itself failed
    async fn get(&mut self, id: i64) -> StoreResult<Option<Entity>>;
}

/// Trait for reading a page of entities
pub trait List<Entity> {
    /// Reads entities in insertion order, skipping `page.offset` rows and
    /// returning at most `page.limit` of them
    ///
    /// # Note
    /// An offset past the last row yields an empty Vec, not an error.
    async fn list(&mut self, page: Page) -> StoreResult<Vec<Entity>>;
}

/// Trait for partially updating existing entities
pub trait Update<Entity> {
    /// Assigns the fields named in `changes` and commits; other fields keep their value
    ///
    /// # Returns
    /// * `Ok(Entity)` - Updated entity as stored
    /// * `Err(StoreError::UnknownField)` - A field is not persisted by `Entity` (nothing is written)
    /// * `Err(StoreError::NotFound)` - No entity with that ID (nothing is written)
    async fn update(&mut self, id: i64, changes: Changes) -> StoreResult<Entity>;
}

/// Trait for deleting entities
pub trait Delete {
    /// # Returns
    /// * `Ok(())` - Deletion committed
    /// * `Err(StoreError::NotFound)` - No entity with that ID (nothing is written)
    async fn delete(&mut self, id: i64) -> StoreResult<()>;
}
