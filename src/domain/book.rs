//! Book display record and operations.
//!
//! This module defines the core `Book` type, the flat display-ready record
//! produced by the response mapper. Books are immutable once constructed: the
//! list fetched at startup is held unchanged for the lifetime of the screen,
//! and only per-cell toggle state mutates afterward.

use serde::{Deserialize, Serialize};

/// Separator used when rendering the author list as a single line.
const AUTHOR_SEPARATOR: &str = ", ";

/// A display-ready book record.
///
/// Produced by the response mapper from the raw search envelope, with default
/// values substituted for absent optional fields: `authors` defaults to an
/// empty list (never null), `description` and `image_url` default to `""`.
/// `title` passes through verbatim from the source.
///
/// # Fields
///
/// - `title`: Book title, required upstream
/// - `authors`: Ordered author names, possibly empty
/// - `description`: Free-text description, possibly empty
/// - `image_url`: Cover thumbnail URL with the scheme forced to HTTPS,
///   possibly empty
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub authors: Vec<String>,
    pub description: String,
    pub image_url: String,
}

impl Book {
    /// Creates a new book record.
    ///
    /// # Examples
    ///
    /// ```
    /// use bookgrid::domain::Book;
    ///
    /// let book = Book::new(
    ///     "T".to_string(),
    ///     vec!["A1".to_string()],
    ///     "D".to_string(),
    ///     "https://img/1.png".to_string(),
    /// );
    /// assert_eq!(book.title, "T");
    /// ```
    #[must_use]
    pub fn new(title: String, authors: Vec<String>, description: String, image_url: String) -> Self {
        Self {
            title,
            authors,
            description,
            image_url,
        }
    }

    /// Returns the authors joined by `", "` for display.
    ///
    /// Rendered on every cell regardless of which face is visible. An empty
    /// author list yields an empty string.
    ///
    /// # Examples
    ///
    /// ```
    /// use bookgrid::domain::Book;
    ///
    /// let book = Book::new(
    ///     "T".to_string(),
    ///     vec!["A".to_string(), "B".to_string()],
    ///     String::new(),
    ///     String::new(),
    /// );
    /// assert_eq!(book.authors_line(), "A, B");
    /// ```
    #[must_use]
    pub fn authors_line(&self) -> String {
        self.authors.join(AUTHOR_SEPARATOR)
    }

    /// Returns whether this book has a cover thumbnail URL.
    #[must_use]
    pub fn has_cover(&self) -> bool {
        !self.image_url.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authors_line_joins_with_comma_space() {
        let book = Book::new(
            "T".to_string(),
            vec!["A1".to_string(), "A2".to_string(), "A3".to_string()],
            String::new(),
            String::new(),
        );
        assert_eq!(book.authors_line(), "A1, A2, A3");
    }

    #[test]
    fn authors_line_empty_for_no_authors() {
        let book = Book::new("T".to_string(), vec![], String::new(), String::new());
        assert_eq!(book.authors_line(), "");
    }

    #[test]
    fn has_cover_reflects_image_url() {
        let with = Book::new(
            "T".to_string(),
            vec![],
            String::new(),
            "https://img/1.png".to_string(),
        );
        let without = Book::new("T".to_string(), vec![], String::new(), String::new());
        assert!(with.has_cover());
        assert!(!without.has_cover());
    }
}
