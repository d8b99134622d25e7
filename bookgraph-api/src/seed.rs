//! The fixed dataset loaded at process start.
//!
//! The service, the CLI examples, and the test suites all reproduce the
//! same catalog from these constructors, so the values must not change.

use crate::model::{
    author::{Author, AuthorId},
    book::{Book, BookId},
};

/// The authors present when the service starts.
pub fn authors() -> Vec<Author> {
    [(1, "J. K. Rowling"), (2, "J. R. R. Tolkien"), (3, "Brent Weeks")]
        .into_iter()
        .map(|(id, name)| Author {
            id: AuthorId::new(id),
            name: name.to_string(),
        })
        .collect()
}

/// The books present when the service starts.
pub fn books() -> Vec<Book> {
    [
        (1, "Harry Potter and the Chamber of Secrets", 1),
        (2, "Harry Potter and the Prisoner of Azkaban", 1),
        (3, "Harry Potter and the Goblet of Fire", 1),
        (4, "The Fellowship of the Ring", 2),
        (5, "The Two Towers", 2),
        (6, "The Return of the King", 2),
        (7, "The Way of Shadows", 3),
        (8, "Beyond the Shadows", 3),
    ]
    .into_iter()
    .map(|(id, name, author_id)| Book {
        id: BookId::new(id),
        name: name.to_string(),
        author_id: AuthorId::new(author_id),
    })
    .collect()
}
