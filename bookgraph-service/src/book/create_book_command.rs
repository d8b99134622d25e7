use bookgraph_api::model::{author::AuthorId, book::Book};

use super::repository::BookRepositoryArc;
use crate::error::AppResult;

/// Command handler that appends a book to the catalog.
///
/// The author reference is not checked against the author collection;
/// a dangling id resolves to no author on read.
#[derive(Debug, Clone)]
pub struct CreateBookCommand {
    book_repository: BookRepositoryArc,
}

#[derive(Debug)]
pub struct CreateBookCommandInput<'a> {
    pub name: &'a str,
    pub author_id: AuthorId,
}

#[derive(Debug)]
pub struct CreateBookCommandResult {
    pub book: Book,
}

impl CreateBookCommand {
    pub fn new(book_repository: BookRepositoryArc) -> Self {
        Self { book_repository }
    }

    /// # Errors
    ///
    /// Returns an error if the insertion fails.
    pub async fn execute(
        &self,
        input: CreateBookCommandInput<'_>,
    ) -> AppResult<CreateBookCommandResult> {
        let book = self
            .book_repository
            .insert(input.name, input.author_id)
            .await?;
        Ok(CreateBookCommandResult { book })
    }
}
