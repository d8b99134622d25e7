use async_graphql::{Context, Object, Result};
use bookgraph_api::model::{author::AuthorId, book::BookId};

use super::types::{Author, Book};
use crate::{author::query_manager::AuthorQueryManager, book::query_manager::BookQueryManager};

/// Root Query
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// A Single Book
    async fn book(&self, ctx: &Context<'_>, id: Option<i32>) -> Result<Option<Book>> {
        let manager = ctx.data::<BookQueryManager>()?;
        Ok(manager.query_single(id.map(BookId::new)).await?.map(Book))
    }

    /// List of All Books
    async fn books(&self, ctx: &Context<'_>) -> Result<Vec<Book>> {
        let manager = ctx.data::<BookQueryManager>()?;
        Ok(manager.query_list().await?.into_iter().map(Book).collect())
    }

    /// A Single Author
    async fn author(&self, ctx: &Context<'_>, id: Option<i32>) -> Result<Option<Author>> {
        let manager = ctx.data::<AuthorQueryManager>()?;
        Ok(manager
            .query_single(id.map(AuthorId::new))
            .await?
            .map(Author))
    }

    /// List of All Authors
    async fn authors(&self, ctx: &Context<'_>) -> Result<Vec<Author>> {
        let manager = ctx.data::<AuthorQueryManager>()?;
        Ok(manager.query_list().await?.into_iter().map(Author).collect())
    }
}
