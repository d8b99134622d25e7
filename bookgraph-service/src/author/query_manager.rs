use bookgraph_api::model::{
    author::{Author, AuthorId},
    book::Book,
};

use super::repository::AuthorRepositoryArc;
use crate::{book::repository::BookRepositoryArc, error::AppResult};

/// Read side of the author catalog.
///
/// Also resolves the derived one-to-many association to books: the
/// relationship is computed by scanning the book collection on every
/// call, never stored.
#[derive(Debug, Clone)]
pub struct AuthorQueryManager {
    author_repository: AuthorRepositoryArc,
    book_repository: BookRepositoryArc,
}

impl AuthorQueryManager {
    pub fn new(
        author_repository: AuthorRepositoryArc,
        book_repository: BookRepositoryArc,
    ) -> Self {
        AuthorQueryManager {
            author_repository,
            book_repository,
        }
    }

    /// Looks up a single author.
    ///
    /// An omitted or unknown id yields `Ok(None)`; absence is a normal
    /// result, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying selection fails.
    pub async fn query_single(&self, id: Option<AuthorId>) -> AppResult<Option<Author>> {
        let Some(id) = id else {
            return Ok(None);
        };
        self.author_repository.select(id).await
    }

    /// Lists all authors in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying selection fails.
    pub async fn query_list(&self) -> AppResult<Vec<Author>> {
        self.author_repository.select_all().await
    }

    /// Books written by the given author, in insertion order.
    ///
    /// An empty result is valid: an author with no books resolves to
    /// an empty sequence.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying selection fails.
    pub async fn query_books(&self, author_id: AuthorId) -> AppResult<Vec<Book>> {
        self.book_repository.select_by_author(author_id).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use bookgraph_api::seed;

    use super::*;
    use crate::{
        author::repository::memory::MemoryAuthorRepository,
        book::repository::memory::MemoryBookRepository,
    };

    fn seeded_manager() -> AuthorQueryManager {
        AuthorQueryManager::new(
            Arc::new(MemoryAuthorRepository::with_data(seed::authors())),
            Arc::new(MemoryBookRepository::with_data(seed::books())),
        )
    }

    #[tokio::test]
    async fn omitted_id_is_an_absence() {
        let manager = seeded_manager();
        assert!(manager.query_single(None).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn query_books_returns_exactly_the_matching_books() {
        let manager = seeded_manager();

        let books = manager.query_books(AuthorId::new(1)).await.unwrap();
        let names: Vec<_> = books.iter().map(|book| book.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "Harry Potter and the Chamber of Secrets",
                "Harry Potter and the Prisoner of Azkaban",
                "Harry Potter and the Goblet of Fire",
            ]
        );
        assert!(books.iter().all(|book| book.author_id == AuthorId::new(1)));
    }

    #[tokio::test]
    async fn query_books_is_empty_for_an_author_without_books() {
        let manager = AuthorQueryManager::new(
            Arc::new(MemoryAuthorRepository::with_data(seed::authors())),
            Arc::new(MemoryBookRepository::new()),
        );
        assert!(manager.query_books(AuthorId::new(1)).await.unwrap().is_empty());
    }
}
