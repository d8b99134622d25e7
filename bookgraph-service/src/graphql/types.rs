use async_graphql::{Context, Object, Result};
use bookgraph_api::model::{author, book};

use crate::{author::query_manager::AuthorQueryManager, book::query_manager::BookQueryManager};

/// Book object exposed through the schema.
pub struct Book(pub book::Book);

/// Author object exposed through the schema.
pub struct Author(pub author::Author);

/// This represents a book written by an author
#[Object]
impl Book {
    async fn id(&self) -> i32 {
        self.0.id.0
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn author_id(&self) -> i32 {
        self.0.author_id.0
    }

    /// The author this book references; null when the reference is dangling
    async fn author(&self, ctx: &Context<'_>) -> Result<Option<Author>> {
        let manager = ctx.data::<BookQueryManager>()?;
        Ok(manager.query_author(&self.0).await?.map(Author))
    }
}

/// This represents an author of a book
#[Object]
impl Author {
    async fn id(&self) -> i32 {
        self.0.id.0
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    /// Books written by this author; empty when none reference it
    async fn books(&self, ctx: &Context<'_>) -> Result<Vec<Book>> {
        let manager = ctx.data::<AuthorQueryManager>()?;
        Ok(manager
            .query_books(self.0.id)
            .await?
            .into_iter()
            .map(Book)
            .collect())
    }
}
