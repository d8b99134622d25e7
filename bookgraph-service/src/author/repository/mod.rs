use std::{fmt::Debug, sync::Arc};

use async_trait::async_trait;
use bookgraph_api::model::author::{Author, AuthorId};

use crate::error::AppResult;

/// In-memory repository implementation.
pub mod memory;

/// Repository trait for author data operations.
///
/// The author collection is append-only: no update or delete exists,
/// and every read observes insertion order.
#[async_trait]
pub trait AuthorRepository: Debug {
    /// Appends a new author record and returns it.
    ///
    /// The identifier is assigned by the repository as one past the
    /// current collection length, atomically with the append.
    ///
    /// # Errors
    ///
    /// Returns an error if the insertion fails.
    async fn insert(&self, name: &str) -> AppResult<Author>;

    /// Selects an author record by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the selection fails.
    ///
    /// # Returns
    ///
    /// Returns the author record if found, `None` otherwise.
    async fn select(&self, id: AuthorId) -> AppResult<Option<Author>>;

    /// Selects all author records in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the selection fails.
    async fn select_all(&self) -> AppResult<Vec<Author>>;
}

/// Thread-safe shared reference to an author repository.
pub type AuthorRepositoryArc = Arc<dyn AuthorRepository + Send + Sync>;
