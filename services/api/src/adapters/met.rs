//! services/api/src/adapters/met.rs
//!
//! This module contains the adapter for The Metropolitan Museum of Art
//! collection API. It implements the `CatalogueService` port from the `core`
//! crate.
//!
//! The catalogue is best-effort: transport failures, non-2xx responses and
//! malformed payloads all degrade to "no results" here rather than becoming
//! distinct errors — the sampler treats a missing candidate and a failed
//! fetch identically anyway.

use async_trait::async_trait;
use curator_core::domain::CatalogueRecord;
use curator_core::ports::{CatalogueService, PortResult};
use serde::Deserialize;
use tracing::warn;

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// An adapter that implements `CatalogueService` against the Met collection API.
#[derive(Clone)]
pub struct MetCatalogueAdapter {
    client: reqwest::Client,
    base_url: String,
}

impl MetCatalogueAdapter {
    /// Creates a new `MetCatalogueAdapter`. The client is expected to carry
    /// the configured request timeout.
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }
}

//=========================================================================================
// Wire DTOs (the Met's own JSON schema, consumed read-only)
//=========================================================================================

/// Response payload of `GET /search`.
#[derive(Debug, Deserialize)]
struct SearchResponseDto {
    #[serde(rename = "objectIDs")]
    object_ids: Option<Vec<u64>>,
}

/// Raw object payload of `GET /objects/{id}`. Every field defaults so that
/// partially populated records still deserialize; emptiness is judged by the
/// core validator, not here.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct MetObjectDto {
    #[serde(rename = "objectID")]
    object_id: u64,
    is_public_domain: bool,
    primary_image: String,
    primary_image_small: String,
    department: String,
    object_name: String,
    title: String,
    medium: String,
    artist_display_name: String,
    artist_display_bio: String,
    artist_nationality: String,
    object_date: String,
    dimensions: String,
    culture: String,
    period: String,
    #[serde(rename = "objectURL")]
    object_url: String,
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

impl MetObjectDto {
    fn into_domain(self) -> CatalogueRecord {
        CatalogueRecord {
            object_id: self.object_id,
            title: non_empty(self.title),
            primary_image: non_empty(self.primary_image),
            primary_image_small: non_empty(self.primary_image_small),
            is_public_domain: Some(self.is_public_domain),
            department: non_empty(self.department),
            object_name: non_empty(self.object_name),
            medium: non_empty(self.medium),
            artist_display_name: non_empty(self.artist_display_name),
            artist_display_bio: non_empty(self.artist_display_bio),
            artist_nationality: non_empty(self.artist_nationality),
            object_date: non_empty(self.object_date),
            dimensions: non_empty(self.dimensions),
            culture: non_empty(self.culture),
            period: non_empty(self.period),
            object_url: non_empty(self.object_url),
        }
    }
}

//=========================================================================================
// `CatalogueService` Trait Implementation
//=========================================================================================

#[async_trait]
impl CatalogueService for MetCatalogueAdapter {
    /// Searches for object identifiers matching a keyword, restricted to
    /// objects with images. Failure degrades to an empty list.
    async fn search(&self, keyword: &str) -> PortResult<Vec<u64>> {
        let url = format!("{}/search", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("hasImages", "true"), ("q", keyword)])
            .send()
            .await
            .and_then(|response| response.error_for_status());

        let response = match response {
            Ok(response) => response,
            Err(err) => {
                warn!(keyword, error = %err, "catalogue search request failed");
                return Ok(Vec::new());
            }
        };

        match response.json::<SearchResponseDto>().await {
            Ok(body) => Ok(body.object_ids.unwrap_or_default()),
            Err(err) => {
                warn!(keyword, error = %err, "catalogue search payload malformed");
                Ok(Vec::new())
            }
        }
    }

    /// Fetches one raw object record. Not-found and transport failures both
    /// degrade to `None`.
    async fn fetch_object(&self, object_id: u64) -> PortResult<Option<CatalogueRecord>> {
        let url = format!("{}/objects/{}", self.base_url, object_id);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .and_then(|response| response.error_for_status());

        let response = match response {
            Ok(response) => response,
            Err(err) => {
                warn!(object_id, error = %err, "catalogue object request failed");
                return Ok(None);
            }
        };

        match response.json::<MetObjectDto>().await {
            Ok(dto) => Ok(Some(dto.into_domain())),
            Err(err) => {
                warn!(object_id, error = %err, "catalogue object payload malformed");
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_dto_maps_empty_strings_to_none() {
        let json = r#"{
            "objectID": 436535,
            "isPublicDomain": true,
            "primaryImage": "https://images.metmuseum.org/CRDImages/ep/original/DT1567.jpg",
            "primaryImageSmall": "",
            "department": "European Paintings",
            "objectName": "Painting",
            "title": "Wheat Field with Cypresses",
            "medium": "Oil on canvas",
            "artistDisplayName": "Vincent van Gogh",
            "objectDate": "1889",
            "culture": "",
            "objectURL": "https://www.metmuseum.org/art/collection/search/436535"
        }"#;

        let dto: MetObjectDto = serde_json::from_str(json).expect("payload should parse");
        let record = dto.into_domain();

        assert_eq!(record.object_id, 436_535);
        assert_eq!(record.is_public_domain, Some(true));
        assert_eq!(record.title.as_deref(), Some("Wheat Field with Cypresses"));
        assert!(record.primary_image_small.is_none());
        assert!(record.culture.is_none());
        assert!(record.period.is_none());
    }

    #[test]
    fn search_dto_tolerates_a_null_id_list() {
        let body: SearchResponseDto =
            serde_json::from_str(r#"{"total": 0, "objectIDs": null}"#).expect("should parse");
        assert!(body.object_ids.is_none());

        let body: SearchResponseDto =
            serde_json::from_str(r#"{"total": 2, "objectIDs": [10, 20]}"#).expect("should parse");
        assert_eq!(body.object_ids, Some(vec![10, 20]));
    }
}
