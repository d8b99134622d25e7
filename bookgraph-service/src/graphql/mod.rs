//! GraphQL surface of the catalog.
//!
//! - [`QueryRoot`]: single and list lookups for books and authors
//! - [`MutationRoot`]: append-only mutations
//! - [`types`]: the object types with their relationship fields
//!
//! The catalog services are attached as schema context data and fetched
//! by the resolvers; no resolver captures state of its own.

pub mod mutation;
pub mod query;
pub mod types;

pub use mutation::MutationRoot;
pub use query::QueryRoot;

use async_graphql::{EmptySubscription, Schema};

use crate::{
    author::{create_author_command::CreateAuthorCommand, query_manager::AuthorQueryManager},
    book::{create_book_command::CreateBookCommand, query_manager::BookQueryManager},
};

/// Schema over the catalog query and mutation roots.
pub type CatalogSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Builds the schema with the catalog services attached as context data.
pub fn build_schema(
    author_query_manager: AuthorQueryManager,
    book_query_manager: BookQueryManager,
    create_author_command: CreateAuthorCommand,
    create_book_command: CreateBookCommand,
) -> CatalogSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(author_query_manager)
        .data(book_query_manager)
        .data(create_author_command)
        .data(create_book_command)
        .finish()
}
