use std::sync::Arc;

use async_trait::async_trait;
use bookgraph_api::model::author::{Author, AuthorId};
use tokio::sync::RwLock;

use crate::{author::repository::AuthorRepository, error::AppResult};

/// In-memory implementation of the author repository.
///
/// Records live in a `Vec` so that insertion order stays observable;
/// reads clone out, so callers can never mutate the stored collection.
#[derive(Debug)]
pub struct MemoryAuthorRepository {
    authors: Arc<RwLock<Vec<Author>>>,
}

impl Default for MemoryAuthorRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryAuthorRepository {
    /// Creates a new empty memory author repository.
    pub fn new() -> Self {
        Self {
            authors: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Creates a new memory author repository with initial data.
    ///
    /// # Arguments
    ///
    /// * `authors` - Initial authors to populate the repository with
    pub fn with_data(authors: Vec<Author>) -> Self {
        Self {
            authors: Arc::new(RwLock::new(authors)),
        }
    }
}

#[async_trait]
impl AuthorRepository for MemoryAuthorRepository {
    async fn insert(&self, name: &str) -> AppResult<Author> {
        let mut authors = self.authors.write().await;
        // Id assignment and the push share the write lock, so the
        // count-derived id is never observed twice.
        let author = Author {
            id: AuthorId::new(authors.len() as i32 + 1),
            name: name.to_string(),
        };
        authors.push(author.clone());
        Ok(author)
    }

    async fn select(&self, id: AuthorId) -> AppResult<Option<Author>> {
        let authors = self.authors.read().await;
        Ok(authors.iter().find(|author| author.id == id).cloned())
    }

    async fn select_all(&self) -> AppResult<Vec<Author>> {
        Ok(self.authors.read().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookgraph_api::seed;

    #[tokio::test]
    async fn insert_continues_the_id_sequence() {
        let repository = MemoryAuthorRepository::with_data(seed::authors());

        let author = repository.insert("Ursula K. Le Guin").await.unwrap();
        assert_eq!(author.id, AuthorId::new(4));
        assert_eq!(author.name, "Ursula K. Le Guin");

        let all = repository.select_all().await.unwrap();
        assert_eq!(all.len(), 4);
        assert_eq!(all.last(), Some(&author));
    }

    #[tokio::test]
    async fn select_returns_the_inserted_record_or_none() {
        let repository = MemoryAuthorRepository::with_data(seed::authors());

        let author = repository.select(AuthorId::new(2)).await.unwrap().unwrap();
        assert_eq!(author.name, "J. R. R. Tolkien");

        assert!(repository.select(AuthorId::new(99)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn select_all_preserves_insertion_order() {
        let repository = MemoryAuthorRepository::new();
        repository.insert("First").await.unwrap();
        repository.insert("Second").await.unwrap();
        repository.insert("Third").await.unwrap();

        let names: Vec<_> = repository
            .select_all()
            .await
            .unwrap()
            .into_iter()
            .map(|author| author.name)
            .collect();
        assert_eq!(names, ["First", "Second", "Third"]);
    }
}
