//! Book model

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

/// Book record
///
/// Missing or `null` fields decode to their zero value and unknown fields are
/// ignored, so `{}` is a valid (if empty) book. Capitalised keys (`"Title"`)
/// are accepted alongside the lowercase wire names.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Book {
    /// Opaque identifier, not required to be unique
    #[serde(alias = "ID", alias = "Id")]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub id: String,
    #[serde(alias = "Title")]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub title: String,
    #[serde(alias = "Author")]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub author: String,
    /// Copies currently on the shelf
    #[serde(alias = "Quantity")]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub quantity: i64,
}

impl Book {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        quantity: i64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            quantity,
        }
    }

    /// Records present at process start
    pub fn seed() -> Vec<Book> {
        vec![
            Book::new("1", "In Search of Lost Time", "Marcel Proust", 2),
            Book::new("2", "The Great Gatsby", "F. Scott Fitzgerald", 5),
            Book::new("3", "War and Peace", "Leo Tolstoy", 6),
        ]
    }
}
