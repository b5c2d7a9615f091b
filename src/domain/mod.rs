//! Domain layer for bookgrid.
//!
//! This module contains the core domain types and business logic for the
//! application, independent of HTTP, terminal, or runtime concerns. It follows
//! domain-driven design principles by keeping business rules isolated from
//! external dependencies.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`book`]: Book display record and operations
//!
//! # Examples
//!
//! ```
//! use bookgrid::domain::{Book, Result};
//!
//! fn make_book() -> Result<Book> {
//!     Ok(Book::new(
//!         "The Rust Programming Language".to_string(),
//!         vec!["Steve Klabnik".to_string(), "Carol Nichols".to_string()],
//!         String::new(),
//!         String::new(),
//!     ))
//! }
//! ```

pub mod book;
pub mod error;

pub use book::Book;
pub use error::{BookgridError, Result};
