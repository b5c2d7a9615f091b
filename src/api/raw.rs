//! Serde types mirroring the book-search wire envelope.
//!
//! These types follow the JSON shape of the volumes search endpoint exactly,
//! optionality included. Anything the endpoint may omit is an `Option`;
//! substituting defaults is the mapper's job, not the deserializer's.
//! Unknown fields in the response body are ignored.

use serde::Deserialize;

/// Top-level JSON envelope returned by the search endpoint.
///
/// `items` is absent entirely when the search matches nothing, so it is an
/// `Option` rather than defaulting to an empty list here; the mapper treats
/// both the same way.
#[derive(Debug, Clone, Deserialize)]
pub struct RawSearchResponse {
    pub items: Option<Vec<RawItem>>,
}

/// A single search result item wrapping the volume metadata.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawItem {
    pub volume_info: RawVolumeInfo,
}

/// Volume metadata for one search result.
///
/// `title` is the only field the endpoint guarantees; its absence is a parse
/// failure of the whole envelope rather than a mappable record.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawVolumeInfo {
    pub title: String,
    pub authors: Option<Vec<String>>,
    pub description: Option<String>,
    pub image_links: Option<RawImageLinks>,
}

/// Cover image links for a volume.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawImageLinks {
    pub thumbnail: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_full_item() {
        let body = r#"{"items":[{"volumeInfo":{"title":"T","authors":["A1"],"description":"D","imageLinks":{"thumbnail":"http://img/1.png"}}}]}"#;
        let response: RawSearchResponse = serde_json::from_str(body).unwrap();
        let items = response.items.unwrap();
        assert_eq!(items.len(), 1);
        let info = &items[0].volume_info;
        assert_eq!(info.title, "T");
        assert_eq!(info.authors.as_deref(), Some(&["A1".to_string()][..]));
        assert_eq!(info.description.as_deref(), Some("D"));
        assert_eq!(
            info.image_links.as_ref().unwrap().thumbnail.as_deref(),
            Some("http://img/1.png")
        );
    }

    #[test]
    fn deserializes_minimal_item() {
        let body = r#"{"items":[{"volumeInfo":{"title":"Only Title"}}]}"#;
        let response: RawSearchResponse = serde_json::from_str(body).unwrap();
        let info = &response.items.unwrap()[0].volume_info;
        assert_eq!(info.title, "Only Title");
        assert!(info.authors.is_none());
        assert!(info.description.is_none());
        assert!(info.image_links.is_none());
    }

    #[test]
    fn deserializes_absent_items() {
        let response: RawSearchResponse = serde_json::from_str("{}").unwrap();
        assert!(response.items.is_none());
    }

    #[test]
    fn ignores_unknown_fields() {
        let body = r#"{"kind":"books#volumes","totalItems":0,"items":[]}"#;
        let response: RawSearchResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.items.unwrap().len(), 0);
    }

    #[test]
    fn missing_title_is_a_parse_failure() {
        let body = r#"{"items":[{"volumeInfo":{"authors":["A"]}}]}"#;
        assert!(serde_json::from_str::<RawSearchResponse>(body).is_err());
    }
}
