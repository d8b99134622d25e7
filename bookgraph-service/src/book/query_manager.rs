use bookgraph_api::model::{
    author::Author,
    book::{Book, BookId},
};

use super::repository::BookRepositoryArc;
use crate::{author::repository::AuthorRepositoryArc, error::AppResult};

/// Read side of the book catalog.
///
/// Also resolves the derived many-to-one association to the author: the
/// relationship is computed by scanning the author collection on every
/// call, never stored.
#[derive(Debug, Clone)]
pub struct BookQueryManager {
    book_repository: BookRepositoryArc,
    author_repository: AuthorRepositoryArc,
}

impl BookQueryManager {
    pub fn new(
        book_repository: BookRepositoryArc,
        author_repository: AuthorRepositoryArc,
    ) -> Self {
        BookQueryManager {
            book_repository,
            author_repository,
        }
    }

    /// Looks up a single book.
    ///
    /// An omitted or unknown id yields `Ok(None)`; absence is a normal
    /// result, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying selection fails.
    pub async fn query_single(&self, id: Option<BookId>) -> AppResult<Option<Book>> {
        let Some(id) = id else {
            return Ok(None);
        };
        self.book_repository.select(id).await
    }

    /// Lists all books in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying selection fails.
    pub async fn query_list(&self) -> AppResult<Vec<Book>> {
        self.book_repository.select_all().await
    }

    /// The author a book references.
    ///
    /// A dangling reference yields `Ok(None)`; this is the designed
    /// behavior, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying selection fails.
    pub async fn query_author(&self, book: &Book) -> AppResult<Option<Author>> {
        self.author_repository.select(book.author_id).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use bookgraph_api::{
        model::author::AuthorId,
        seed,
    };

    use super::*;
    use crate::{
        author::repository::memory::MemoryAuthorRepository,
        book::repository::{BookRepository, memory::MemoryBookRepository},
    };

    fn seeded_manager() -> BookQueryManager {
        BookQueryManager::new(
            Arc::new(MemoryBookRepository::with_data(seed::books())),
            Arc::new(MemoryAuthorRepository::with_data(seed::authors())),
        )
    }

    #[tokio::test]
    async fn query_single_finds_the_seeded_book() {
        let manager = seeded_manager();

        let book = manager
            .query_single(Some(BookId::new(2)))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(book.name, "Harry Potter and the Prisoner of Azkaban");
        assert_eq!(book.author_id, AuthorId::new(1));

        let author = manager.query_author(&book).await.unwrap().unwrap();
        assert_eq!(author.name, "J. K. Rowling");
    }

    #[tokio::test]
    async fn unknown_and_omitted_ids_are_absences() {
        let manager = seeded_manager();
        assert!(manager.query_single(Some(BookId::new(99))).await.unwrap().is_none());
        assert!(manager.query_single(None).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn query_author_is_none_for_a_dangling_reference() {
        let book_repository = Arc::new(MemoryBookRepository::new());
        let manager = BookQueryManager::new(
            Arc::clone(&book_repository) as BookRepositoryArc,
            Arc::new(MemoryAuthorRepository::with_data(seed::authors())),
        );

        let book = book_repository
            .insert("Orphan", AuthorId::new(42))
            .await
            .unwrap();
        assert!(manager.query_author(&book).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn query_list_returns_the_full_seed_in_order() {
        let manager = seeded_manager();
        let books = manager.query_list().await.unwrap();
        assert_eq!(books.len(), 8);
        assert!(books.windows(2).all(|pair| pair[0].id.0 + 1 == pair[1].id.0));
    }
}
