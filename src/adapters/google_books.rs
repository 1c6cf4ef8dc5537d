//! Google Books adapter: identifier fallback and the only keyword search.

use crate::adapters::http::{endpoint, get_json};
use crate::domain::model::{Candidate, UNKNOWN_AUTHOR, UNKNOWN_TITLE};
use crate::domain::ports::{BookSource, LookupOutcome};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

pub const SOURCE_NAME: &str = "google_books";

#[derive(Debug, Deserialize)]
struct VolumesResponse {
    items: Option<Vec<VolumeItem>>,
}

#[derive(Debug, Deserialize)]
struct VolumeItem {
    #[serde(rename = "volumeInfo")]
    volume_info: Option<VolumeInfo>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VolumeInfo {
    title: Option<String>,
    authors: Option<Vec<String>>,
    industry_identifiers: Option<Vec<IndustryIdentifier>>,
    image_links: Option<ImageLinks>,
    page_count: Option<u32>,
    publisher: Option<String>,
}

#[derive(Debug, Deserialize)]
struct IndustryIdentifier {
    #[serde(rename = "type")]
    kind: Option<String>,
    identifier: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ImageLinks {
    small_thumbnail: Option<String>,
    thumbnail: Option<String>,
}

impl VolumeInfo {
    fn identifier_of(&self, kind: &str) -> Option<String> {
        self.industry_identifiers
            .iter()
            .flatten()
            .find(|id| id.kind.as_deref() == Some(kind))
            .and_then(|id| id.identifier.clone())
    }
}

impl VolumeItem {
    /// Items without an ISBN-13 or ISBN-10 cannot be identified and are dropped.
    fn into_candidate(self) -> Option<Candidate> {
        let info = self.volume_info?;
        let isbn = info
            .identifier_of("ISBN_13")
            .or_else(|| info.identifier_of("ISBN_10"))?;

        let author = info
            .authors
            .map(|authors| authors.join(", "))
            .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string());

        let cover_url = info
            .image_links
            .and_then(|links| links.thumbnail.or(links.small_thumbnail));

        Some(Candidate {
            isbn,
            title: info.title.unwrap_or_else(|| UNKNOWN_TITLE.to_string()),
            author,
            cover_url,
            page_count: info.page_count,
            classification_code: None,
            publisher: info.publisher,
        })
    }
}

pub struct GoogleBooksSource {
    client: Client,
    base_url: String,
}

impl GoogleBooksSource {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    async fn volumes(&self, query: &[(&str, &str)]) -> Result<Vec<VolumeItem>> {
        let url = endpoint(&self.base_url, "volumes");
        let response: VolumesResponse = get_json(&self.client, SOURCE_NAME, &url, query).await?;
        Ok(response.items.unwrap_or_default())
    }
}

#[async_trait]
impl BookSource for GoogleBooksSource {
    fn name(&self) -> &str {
        SOURCE_NAME
    }

    async fn lookup_by_isbn(&self, isbn: &str) -> LookupOutcome {
        let q = format!("isbn:{}", isbn);
        match self.volumes(&[("q", q.as_str())]).await {
            Ok(items) => items
                .into_iter()
                .find_map(VolumeItem::into_candidate)
                .map(LookupOutcome::Found)
                .unwrap_or(LookupOutcome::NotFound),
            Err(e) => {
                tracing::warn!("[{}] lookup for {} failed: {}", SOURCE_NAME, isbn, e);
                LookupOutcome::SourceError(e.to_string())
            }
        }
    }

    async fn search_by_keyword(&self, keyword: &str, max_results: usize) -> Vec<Candidate> {
        let max_results = max_results.to_string();
        match self
            .volumes(&[("q", keyword), ("maxResults", max_results.as_str())])
            .await
        {
            Ok(items) => items
                .into_iter()
                .filter_map(VolumeItem::into_candidate)
                .collect(),
            Err(e) => {
                tracing::warn!("[{}] keyword search '{}' failed: {}", SOURCE_NAME, keyword, e);
                Vec::new()
            }
        }
    }
}
