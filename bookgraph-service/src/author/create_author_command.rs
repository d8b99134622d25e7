use bookgraph_api::model::author::Author;

use super::repository::AuthorRepositoryArc;
use crate::error::AppResult;

/// Command handler that appends an author to the catalog.
#[derive(Debug, Clone)]
pub struct CreateAuthorCommand {
    author_repository: AuthorRepositoryArc,
}

#[derive(Debug)]
pub struct CreateAuthorCommandInput<'a> {
    pub name: &'a str,
}

#[derive(Debug)]
pub struct CreateAuthorCommandResult {
    pub author: Author,
}

impl CreateAuthorCommand {
    pub fn new(author_repository: AuthorRepositoryArc) -> Self {
        Self { author_repository }
    }

    /// # Errors
    ///
    /// Returns an error if the insertion fails.
    pub async fn execute(
        &self,
        input: CreateAuthorCommandInput<'_>,
    ) -> AppResult<CreateAuthorCommandResult> {
        let author = self.author_repository.insert(input.name).await?;
        Ok(CreateAuthorCommandResult { author })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use bookgraph_api::model::author::AuthorId;

    use super::*;
    use crate::author::repository::{AuthorRepository, memory::MemoryAuthorRepository};

    #[tokio::test]
    async fn execute_returns_the_created_author() {
        let repository = Arc::new(MemoryAuthorRepository::new());
        let command = CreateAuthorCommand::new(Arc::clone(&repository) as AuthorRepositoryArc);

        let result = command
            .execute(CreateAuthorCommandInput { name: "Y" })
            .await
            .unwrap();

        assert_eq!(result.author.id, AuthorId::new(1));
        assert_eq!(result.author.name, "Y");

        let stored = repository.select(result.author.id).await.unwrap();
        assert_eq!(stored, Some(result.author));
    }
}
