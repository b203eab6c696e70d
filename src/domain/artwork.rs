//! Artwork - Catalog Record

use serde::{Deserialize, Serialize};

/// One record of the remote artwork catalog.
///
/// The `id` is unique within any single fetched page and stable across
/// pages as long as the remote collection does not mutate between fetches.
/// Display fields are optional because the endpoint returns `null` for
/// records it has no data for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artwork {
    /// Unique ID
    pub id: u64,
    /// Artwork title
    #[serde(default)]
    pub title: String,
    /// Place of origin
    #[serde(default)]
    pub place_of_origin: Option<String>,
    /// Artist display text
    #[serde(default)]
    pub artist_display: Option<String>,
    /// Start year of the dating range
    #[serde(default)]
    pub date_start: Option<i32>,
    /// End year of the dating range
    #[serde(default)]
    pub date_end: Option<i32>,
}

/// One fetched block of records plus the catalog's total record count.
///
/// Fully replaced on every fetch, never merged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtworkPage {
    /// Records of this page, in catalog order (length <= page size)
    pub records: Vec<Artwork>,
    /// Total number of records in the whole remote collection
    pub total_records: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_tolerates_null_display_fields() {
        let raw = r#"{
            "id": 27992,
            "title": "A Sunday on La Grande Jatte",
            "place_of_origin": null,
            "artist_display": "Georges Seurat",
            "date_start": 1884,
            "date_end": null
        }"#;

        let artwork: Artwork = serde_json::from_str(raw).expect("valid record");
        assert_eq!(artwork.id, 27992);
        assert_eq!(artwork.place_of_origin, None);
        assert_eq!(artwork.artist_display.as_deref(), Some("Georges Seurat"));
        assert_eq!(artwork.date_start, Some(1884));
        assert_eq!(artwork.date_end, None);
    }

    #[test]
    fn decode_tolerates_missing_display_fields() {
        let raw = r#"{ "id": 7 }"#;

        let artwork: Artwork = serde_json::from_str(raw).expect("valid record");
        assert_eq!(artwork.id, 7);
        assert_eq!(artwork.title, "");
        assert_eq!(artwork.date_start, None);
    }
}
