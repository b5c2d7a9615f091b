//! Pure transformation from the raw search envelope to display records.
//!
//! The mapper collapses every fetch failure to an empty list: network errors,
//! non-2xx statuses, and unparseable bodies all yield the same `Vec::new()`,
//! leaving diagnostics to the caller's log line. For a successful envelope it
//! produces one `Book` per item in input order, substituting defaults for
//! absent optional fields, with no sorting, filtering, or deduplication.
//!
//! Thumbnail URLs are secured here: a leading `http://` is rewritten to
//! `https://` before the record is constructed, so everything downstream only
//! ever sees secure or empty URLs.

use crate::api::raw::RawSearchResponse;
use crate::domain::{Book, Result};

/// Insecure scheme prefix rewritten on thumbnail URLs.
const INSECURE_PREFIX: &str = "http://";

/// Secure scheme prefix substituted for [`INSECURE_PREFIX`].
const SECURE_PREFIX: &str = "https://";

/// Maps a fetch outcome to the list of display records.
///
/// # Rules
///
/// - A failure, or an envelope without `items`, maps to an empty list.
/// - `title` passes through verbatim.
/// - `authors` defaults to an empty list, never null.
/// - `description` defaults to `""`.
/// - `image_url` is `imageLinks.thumbnail` with the scheme secured, or `""`
///   when `imageLinks` (or its thumbnail) is absent.
/// - Input order is preserved.
///
/// Mapping is idempotent: the same envelope always yields an equal list.
///
/// # Examples
///
/// ```
/// use bookgrid::api::{mapper, raw::RawSearchResponse};
///
/// let response: RawSearchResponse =
///     serde_json::from_str(r#"{"items":[{"volumeInfo":{"title":"T"}}]}"#).unwrap();
/// let books = mapper::to_books(Ok(response));
/// assert_eq!(books[0].title, "T");
/// assert!(books[0].authors.is_empty());
/// ```
#[must_use]
pub fn to_books(response: Result<RawSearchResponse>) -> Vec<Book> {
    let Ok(response) = response else {
        return Vec::new();
    };

    response
        .items
        .unwrap_or_default()
        .into_iter()
        .map(|item| {
            let info = item.volume_info;
            let image_url = info
                .image_links
                .and_then(|links| links.thumbnail)
                .map(|url| secure_thumbnail(&url))
                .unwrap_or_default();

            Book::new(
                info.title,
                info.authors.unwrap_or_default(),
                info.description.unwrap_or_default(),
                image_url,
            )
        })
        .collect()
}

/// Rewrites a leading insecure scheme prefix to the secure one.
///
/// Only the prefix itself is replaced; occurrences of `http://` elsewhere in
/// the URL are untouched. URLs that are already secure, relative, or empty
/// pass through unchanged.
///
/// # Examples
///
/// ```
/// use bookgrid::api::mapper::secure_thumbnail;
///
/// assert_eq!(secure_thumbnail("http://x/y.png"), "https://x/y.png");
/// assert_eq!(secure_thumbnail("https://x/y.png"), "https://x/y.png");
/// assert_eq!(secure_thumbnail(""), "");
/// ```
#[must_use]
pub fn secure_thumbnail(url: &str) -> String {
    if url.starts_with(INSECURE_PREFIX) {
        url.replacen(INSECURE_PREFIX, SECURE_PREFIX, 1)
    } else {
        url.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BookgridError;

    fn envelope(json: &str) -> RawSearchResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn failure_maps_to_empty_list() {
        let books = to_books(Err(BookgridError::Response { status: 404 }));
        assert!(books.is_empty());
    }

    #[test]
    fn absent_items_maps_to_empty_list() {
        let books = to_books(Ok(envelope("{}")));
        assert!(books.is_empty());
    }

    #[test]
    fn empty_items_maps_to_empty_list() {
        let books = to_books(Ok(envelope(r#"{"items":[]}"#)));
        assert!(books.is_empty());
    }

    #[test]
    fn absent_authors_default_to_empty_list() {
        let books = to_books(Ok(envelope(r#"{"items":[{"volumeInfo":{"title":"T"}}]}"#)));
        assert_eq!(books[0].authors, Vec::<String>::new());
    }

    #[test]
    fn present_authors_pass_through_in_order() {
        let books = to_books(Ok(envelope(
            r#"{"items":[{"volumeInfo":{"title":"T","authors":["A","B"]}}]}"#,
        )));
        assert_eq!(books[0].authors, vec!["A".to_string(), "B".to_string()]);
    }

    #[test]
    fn absent_description_defaults_to_empty_string() {
        let books = to_books(Ok(envelope(r#"{"items":[{"volumeInfo":{"title":"T"}}]}"#)));
        assert_eq!(books[0].description, "");
    }

    #[test]
    fn absent_image_links_default_to_empty_url() {
        let books = to_books(Ok(envelope(r#"{"items":[{"volumeInfo":{"title":"T"}}]}"#)));
        assert_eq!(books[0].image_url, "");
    }

    #[test]
    fn insecure_thumbnail_is_rewritten() {
        let books = to_books(Ok(envelope(
            r#"{"items":[{"volumeInfo":{"title":"T","imageLinks":{"thumbnail":"http://x/y.png"}}}]}"#,
        )));
        assert_eq!(books[0].image_url, "https://x/y.png");
    }

    #[test]
    fn secure_thumbnail_only_replaces_the_prefix() {
        assert_eq!(
            secure_thumbnail("http://x/redirect?to=http://y"),
            "https://x/redirect?to=http://y"
        );
    }

    #[test]
    fn already_secure_thumbnail_is_unchanged() {
        assert_eq!(secure_thumbnail("https://x/y.png"), "https://x/y.png");
    }

    #[test]
    fn mapping_preserves_item_order() {
        let books = to_books(Ok(envelope(
            r#"{"items":[{"volumeInfo":{"title":"First"}},{"volumeInfo":{"title":"Second"}},{"volumeInfo":{"title":"Third"}}]}"#,
        )));
        let titles: Vec<&str> = books.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn mapping_is_idempotent() {
        let json = r#"{"items":[{"volumeInfo":{"title":"T","authors":["A1"],"description":"D","imageLinks":{"thumbnail":"http://img/1.png"}}}]}"#;
        let first = to_books(Ok(envelope(json)));
        let second = to_books(Ok(envelope(json)));
        assert_eq!(first, second);
    }

    #[test]
    fn maps_full_item_end_to_end() {
        let books = to_books(Ok(envelope(
            r#"{"items":[{"volumeInfo":{"title":"T","authors":["A1"],"description":"D","imageLinks":{"thumbnail":"http://img/1.png"}}}]}"#,
        )));
        assert_eq!(
            books,
            vec![crate::domain::Book::new(
                "T".to_string(),
                vec!["A1".to_string()],
                "D".to_string(),
                "https://img/1.png".to_string(),
            )]
        );
    }
}
