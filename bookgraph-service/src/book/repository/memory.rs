use std::sync::Arc;

use async_trait::async_trait;
use bookgraph_api::model::{
    author::AuthorId,
    book::{Book, BookId},
};
use tokio::sync::RwLock;

use crate::{book::repository::BookRepository, error::AppResult};

/// In-memory implementation of the book repository.
///
/// Records live in a `Vec` so that insertion order stays observable;
/// reads clone out, so callers can never mutate the stored collection.
#[derive(Debug)]
pub struct MemoryBookRepository {
    books: Arc<RwLock<Vec<Book>>>,
}

impl Default for MemoryBookRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBookRepository {
    /// Creates a new empty memory book repository.
    pub fn new() -> Self {
        Self {
            books: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Creates a new memory book repository with initial data.
    ///
    /// # Arguments
    ///
    /// * `books` - Initial books to populate the repository with
    pub fn with_data(books: Vec<Book>) -> Self {
        Self {
            books: Arc::new(RwLock::new(books)),
        }
    }
}

#[async_trait]
impl BookRepository for MemoryBookRepository {
    async fn insert(&self, name: &str, author_id: AuthorId) -> AppResult<Book> {
        let mut books = self.books.write().await;
        // Id assignment and the push share the write lock, so the
        // count-derived id is never observed twice.
        let book = Book {
            id: BookId::new(books.len() as i32 + 1),
            name: name.to_string(),
            author_id,
        };
        books.push(book.clone());
        Ok(book)
    }

    async fn select(&self, id: BookId) -> AppResult<Option<Book>> {
        let books = self.books.read().await;
        Ok(books.iter().find(|book| book.id == id).cloned())
    }

    async fn select_all(&self) -> AppResult<Vec<Book>> {
        Ok(self.books.read().await.clone())
    }

    async fn select_by_author(&self, author_id: AuthorId) -> AppResult<Vec<Book>> {
        let books = self.books.read().await;
        Ok(books
            .iter()
            .filter(|book| book.author_id == author_id)
            .cloned()
            .collect())
    }
}
