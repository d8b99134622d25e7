use std::{fmt::Debug, sync::Arc};

use async_trait::async_trait;
use bookgraph_api::model::{
    author::AuthorId,
    book::{Book, BookId},
};

use crate::error::AppResult;

/// In-memory repository implementation.
pub mod memory;

/// Repository trait for book data operations.
///
/// The book collection is append-only: no update or delete exists, and
/// every read observes insertion order. The author reference carried by
/// a book is never validated here; dangling references are stored as-is.
#[async_trait]
pub trait BookRepository: Debug {
    /// Appends a new book record and returns it.
    ///
    /// The identifier is assigned by the repository as one past the
    /// current collection length, atomically with the append.
    ///
    /// # Errors
    ///
    /// Returns an error if the insertion fails.
    async fn insert(&self, name: &str, author_id: AuthorId) -> AppResult<Book>;

    /// Selects a book record by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the selection fails.
    ///
    /// # Returns
    ///
    /// Returns the book record if found, `None` otherwise.
    async fn select(&self, id: BookId) -> AppResult<Option<Book>>;

    /// Selects all book records in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the selection fails.
    async fn select_all(&self) -> AppResult<Vec<Book>>;

    /// Selects the book records referencing the given author, in
    /// insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the selection fails.
    async fn select_by_author(&self, author_id: AuthorId) -> AppResult<Vec<Book>>;
}

/// Thread-safe shared reference to a book repository.
pub type BookRepositoryArc = Arc<dyn BookRepository + Send + Sync>;
