//! Book-search API layer: client, raw envelope types, and response mapper.
//!
//! This module owns everything between the HTTP wire and the domain layer.
//! The data flows in one direction:
//!
//! ```text
//! BooksClient::search → RawSearchResponse → mapper::to_books → Vec<Book>
//! ```
//!
//! # Modules
//!
//! - [`client`]: Issues the single search GET and parses the JSON body
//! - [`raw`]: Serde types mirroring the wire envelope (nested, partially
//!   optional fields)
//! - [`mapper`]: Pure transformation from the raw envelope to display records
//!
//! The raw types are created per fetch and discarded after mapping; only the
//! mapped `Book` list survives into application state.

pub mod client;
pub mod mapper;
pub mod raw;

pub use client::BooksClient;
pub use mapper::to_books;
pub use raw::RawSearchResponse;
