//! Bookgraph service library.
//!
//! Wires the in-memory catalog (repositories, query managers, create
//! commands) into a GraphQL schema and serves it over HTTP.

pub mod author;
pub mod book;
pub mod config;
pub mod error;
pub mod graphql;
pub mod server;
pub mod tracing;

use std::sync::Arc;

use bookgraph_api::seed;

use author::{
    create_author_command::CreateAuthorCommand,
    query_manager::AuthorQueryManager,
    repository::{AuthorRepositoryArc, memory::MemoryAuthorRepository},
};
use book::{
    create_book_command::CreateBookCommand,
    query_manager::BookQueryManager,
    repository::{BookRepositoryArc, memory::MemoryBookRepository},
};
use graphql::CatalogSchema;

/// Assembles a complete schema over fresh in-memory repositories.
///
/// `seeded` loads the fixed startup dataset; tests that need an empty
/// catalog pass `false`. Each call owns its own store, so schemas are
/// isolated from one another.
pub fn create_catalog_schema(seeded: bool) -> CatalogSchema {
    let (author_repository, book_repository): (AuthorRepositoryArc, BookRepositoryArc) =
        if seeded {
            (
                Arc::new(MemoryAuthorRepository::with_data(seed::authors())),
                Arc::new(MemoryBookRepository::with_data(seed::books())),
            )
        } else {
            (
                Arc::new(MemoryAuthorRepository::new()),
                Arc::new(MemoryBookRepository::new()),
            )
        };

    let author_query_manager =
        AuthorQueryManager::new(Arc::clone(&author_repository), Arc::clone(&book_repository));
    let book_query_manager =
        BookQueryManager::new(Arc::clone(&book_repository), Arc::clone(&author_repository));
    let create_author_command = CreateAuthorCommand::new(author_repository);
    let create_book_command = CreateBookCommand::new(book_repository);

    graphql::build_schema(
        author_query_manager,
        book_query_manager,
        create_author_command,
        create_book_command,
    )
}
