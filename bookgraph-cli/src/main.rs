//! Command-line interface for the bookgraph GraphQL service.
//!
//! Provides commands to inspect and extend the catalog of authors and
//! books in a running service. Supports both JSON and text output.

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde_json::{Value, json};

use bookgraph_api::client::GraphQlClient;

const AUTHOR_QUERY: &str =
    "query Author($id: Int) { author(id: $id) { id name books { id name } } }";
const AUTHORS_QUERY: &str = "{ authors { id name } }";
const ADD_AUTHOR_MUTATION: &str =
    "mutation AddAuthor($name: String!) { addAuthor(name: $name) { id name } }";
const BOOK_QUERY: &str =
    "query Book($id: Int) { book(id: $id) { id name authorId author { id name } } }";
const BOOKS_QUERY: &str = "{ books { id name authorId } }";
const ADD_BOOK_MUTATION: &str = "mutation AddBook($name: String!, $authorId: Int!) \
     { addBook(name: $name, authorId: $authorId) { id name authorId } }";

/// Command-line interface configuration.
#[derive(Parser)]
#[command(name = "bookgraph-cli")]
#[command(about = "A CLI tool for interacting with the bookgraph GraphQL service")]
#[command(version)]
pub struct Cli {
    /// The GraphQL endpoint address
    #[arg(long, short, default_value = "http://127.0.0.1:5000/graphql")]
    pub address: String,

    /// Output raw JSON instead of text
    #[arg(long, short = 'J', env = "BOOKGRAPH_JSON")]
    pub json: bool,

    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands, grouped by resource type.
#[derive(Subcommand)]
pub enum Commands {
    /// Author operations
    Author {
        /// The author subcommand to execute
        #[command(subcommand)]
        command: AuthorCommands,
    },
    /// Book operations
    Book {
        /// The book subcommand to execute
        #[command(subcommand)]
        command: BookCommands,
    },
}

/// Author-related operations.
#[derive(Subcommand)]
pub enum AuthorCommands {
    /// Get an author by ID
    Get {
        /// Author ID
        id: i32,
    },
    /// List all authors
    List,
    /// Create a new author
    Create {
        /// Author name
        name: String,
    },
}

/// Book-related operations.
#[derive(Subcommand)]
pub enum BookCommands {
    /// Get a book by ID
    Get {
        /// Book ID
        id: i32,
    },
    /// List all books
    List,
    /// Create a new book
    Create {
        /// Book name
        name: String,
        /// Author ID the book references
        author_id: i32,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let client = GraphQlClient::new(cli.address.clone());

    match cli.command {
        Commands::Author { command } => {
            handle_author_command(&client, command, cli.json).await?;
        }
        Commands::Book { command } => {
            handle_book_command(&client, command, cli.json).await?;
        }
    }

    Ok(())
}

/// Handles author-related CLI commands.
///
/// # Errors
///
/// Returns an error if the HTTP call fails or the response is invalid.
async fn handle_author_command(
    client: &GraphQlClient,
    command: AuthorCommands,
    json_output: bool,
) -> Result<()> {
    match command {
        AuthorCommands::Get { id } => {
            let data = client.query(AUTHOR_QUERY, json!({ "id": id })).await?;
            match &data["author"] {
                Value::Null => println!("Author not found"),
                author => output_author(author, json_output),
            }
        }

        AuthorCommands::List => {
            let data = client.query(AUTHORS_QUERY, Value::Null).await?;
            let authors = data["authors"].as_array().cloned().unwrap_or_default();
            if json_output {
                println!("{data:#}");
            } else {
                println!("Authors ({} total):", authors.len());
                for author in &authors {
                    println!("  - {}: {}", author["id"], field_str(author, "name"));
                }
            }
        }

        AuthorCommands::Create { name } => {
            let data = client
                .query(ADD_AUTHOR_MUTATION, json!({ "name": name }))
                .await?;
            output_author(&data["addAuthor"], json_output);
        }
    }

    Ok(())
}

/// Handles book-related CLI commands.
///
/// # Errors
///
/// Returns an error if the HTTP call fails or the response is invalid.
async fn handle_book_command(
    client: &GraphQlClient,
    command: BookCommands,
    json_output: bool,
) -> Result<()> {
    match command {
        BookCommands::Get { id } => {
            let data = client.query(BOOK_QUERY, json!({ "id": id })).await?;
            match &data["book"] {
                Value::Null => println!("Book not found"),
                book => output_book(book, json_output),
            }
        }

        BookCommands::List => {
            let data = client.query(BOOKS_QUERY, Value::Null).await?;
            let books = data["books"].as_array().cloned().unwrap_or_default();
            if json_output {
                println!("{data:#}");
            } else {
                println!("Books ({} total):", books.len());
                for book in &books {
                    println!(
                        "  - {}: {} (author {})",
                        book["id"],
                        field_str(book, "name"),
                        book["authorId"],
                    );
                }
            }
        }

        BookCommands::Create { name, author_id } => {
            let data = client
                .query(
                    ADD_BOOK_MUTATION,
                    json!({ "name": name, "authorId": author_id }),
                )
                .await?;
            output_book(&data["addBook"], json_output);
        }
    }

    Ok(())
}

fn output_author(author: &Value, json_output: bool) {
    if json_output {
        println!("{author:#}");
        return;
    }
    println!("Author {}: {}", author["id"], field_str(author, "name"));
    if let Some(books) = author["books"].as_array() {
        for book in books {
            println!("  - {}: {}", book["id"], field_str(book, "name"));
        }
    }
}

fn output_book(book: &Value, json_output: bool) {
    if json_output {
        println!("{book:#}");
        return;
    }
    println!(
        "Book {}: {} (author {})",
        book["id"],
        field_str(book, "name"),
        book["authorId"],
    );
    match book.get("author") {
        Some(Value::Null) => println!("  author reference is dangling"),
        Some(author) => println!("  by {}", field_str(author, "name")),
        None => {}
    }
}

fn field_str<'a>(value: &'a Value, key: &str) -> &'a str {
    value[key].as_str().unwrap_or_default()
}
