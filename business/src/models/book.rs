use serde::{Deserialize, Serialize};

use super::{EntityId, Resource};

/// A catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: EntityId,
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub isbn: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub published_year: Option<i32>,
    #[serde(default)]
    pub total_copies: u32,
    #[serde(default)]
    pub available_copies: u32,
    /// Replacement price.
    #[serde(default)]
    pub price: Option<f64>,
    /// RFC 3339 timestamp.
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Book {
    pub fn is_available(&self) -> bool {
        self.available_copies > 0
    }

    pub fn availability_label(&self) -> &'static str {
        if self.is_available() {
            "Available"
        } else {
            "Checked out"
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub isbn: Option<String>,
    pub genre: Option<String>,
    pub description: Option<String>,
    pub published_year: Option<i32>,
    pub total_copies: u32,
    pub price: Option<f64>,
}

impl From<&Book> for BookDraft {
    fn from(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            author: book.author.clone(),
            isbn: book.isbn.clone(),
            genre: book.genre.clone(),
            description: book.description.clone(),
            published_year: book.published_year,
            total_copies: book.total_copies,
            price: book.price,
        }
    }
}

impl Resource for Book {
    type Draft = BookDraft;

    const PATH: &'static str = "books";
    const NAME: &'static str = "book";

    fn id(&self) -> EntityId {
        self.id
    }
}
