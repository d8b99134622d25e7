use async_graphql::{Context, Object, Result};
use bookgraph_api::model::author::AuthorId;

use super::types::{Author, Book};
use crate::{
    author::create_author_command::{CreateAuthorCommand, CreateAuthorCommandInput},
    book::create_book_command::{CreateBookCommand, CreateBookCommandInput},
};

/// Root Mutation
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Add a Book
    async fn add_book(&self, ctx: &Context<'_>, name: String, author_id: i32) -> Result<Book> {
        let command = ctx.data::<CreateBookCommand>()?;
        let result = command
            .execute(CreateBookCommandInput {
                name: &name,
                author_id: AuthorId::new(author_id),
            })
            .await?;
        Ok(Book(result.book))
    }

    /// Add an Author
    async fn add_author(&self, ctx: &Context<'_>, name: String) -> Result<Author> {
        let command = ctx.data::<CreateAuthorCommand>()?;
        let result = command
            .execute(CreateAuthorCommandInput { name: &name })
            .await?;
        Ok(Author(result.author))
    }
}
