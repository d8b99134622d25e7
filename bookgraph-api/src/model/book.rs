use std::{
    fmt::{self, Display, Formatter},
    num::ParseIntError,
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::model::author::AuthorId;

/// Identifier of a book, unique within the book collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(pub i32);

/// A book written by an author.
///
/// `author_id` is a plain reference into the author collection. It is
/// not validated at insert time; a dangling reference resolves to no
/// author on read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub name: String,
    pub author_id: AuthorId,
}

impl BookId {
    pub fn new(id: i32) -> Self {
        Self(id)
    }
}

impl Display for BookId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for BookId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}
