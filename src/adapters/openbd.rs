//! OpenBD (<https://openbd.jp>) adapter, the primary source.
//!
//! `GET /get?isbn=<isbn>` answers with a JSON array holding one entry per
//! requested ISBN; unknown ISBNs come back as `null`. Book details live in a
//! `summary` block plus a subset of the ONIX record.

use crate::adapters::http::{endpoint, get_json};
use crate::domain::model::{Candidate, UNKNOWN_AUTHOR, UNKNOWN_TITLE};
use crate::domain::ports::{BookSource, LookupOutcome};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

pub const SOURCE_NAME: &str = "openbd";

/// ONIX subject scheme for the Japanese C-code.
const C_CODE_SCHEME: &str = "29";
/// ONIX extent type for the main-content page count.
const PAGE_COUNT_EXTENT: &str = "00";

#[derive(Debug, Deserialize)]
struct OpenBdBook {
    summary: Option<Summary>,
    onix: Option<Onix>,
}

#[derive(Debug, Deserialize)]
struct Summary {
    isbn: Option<String>,
    title: Option<String>,
    author: Option<String>,
    cover: Option<String>,
    publisher: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Onix {
    #[serde(rename = "DescriptiveDetail")]
    descriptive_detail: Option<DescriptiveDetail>,
}

#[derive(Debug, Deserialize)]
struct DescriptiveDetail {
    #[serde(rename = "Extent")]
    extent: Option<Vec<Extent>>,
    #[serde(rename = "Subject")]
    subject: Option<Vec<Subject>>,
}

#[derive(Debug, Deserialize)]
struct Extent {
    #[serde(rename = "ExtentType")]
    extent_type: Option<String>,
    #[serde(rename = "ExtentValue")]
    extent_value: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Subject {
    #[serde(rename = "SubjectSchemeIdentifier")]
    scheme: Option<String>,
    #[serde(rename = "SubjectCode")]
    code: Option<String>,
}

impl OpenBdBook {
    fn into_candidate(self) -> Option<Candidate> {
        let summary = self.summary?;
        let isbn = summary.isbn?;
        let detail = self.onix.and_then(|onix| onix.descriptive_detail);

        let classification_code = detail.as_ref().and_then(|detail| {
            detail
                .subject
                .iter()
                .flatten()
                .find(|subject| subject.scheme.as_deref() == Some(C_CODE_SCHEME))
                .and_then(|subject| subject.code.clone())
        });

        let page_count = detail.as_ref().and_then(|detail| {
            detail
                .extent
                .iter()
                .flatten()
                .find(|extent| extent.extent_type.as_deref() == Some(PAGE_COUNT_EXTENT))
                .and_then(|extent| extent.extent_value.as_deref())
                .and_then(|value| value.parse::<u32>().ok())
        });

        Some(Candidate {
            isbn,
            title: summary.title.unwrap_or_else(|| UNKNOWN_TITLE.to_string()),
            author: summary.author.unwrap_or_else(|| UNKNOWN_AUTHOR.to_string()),
            cover_url: summary.cover.filter(|cover| !cover.trim().is_empty()),
            page_count,
            classification_code,
            publisher: summary.publisher.filter(|publisher| !publisher.is_empty()),
        })
    }
}

pub struct OpenBdSource {
    client: Client,
    base_url: String,
}

impl OpenBdSource {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    async fn fetch(&self, isbn: &str) -> Result<Vec<Option<OpenBdBook>>> {
        let url = endpoint(&self.base_url, "get");
        get_json(&self.client, SOURCE_NAME, &url, &[("isbn", isbn)]).await
    }
}

#[async_trait]
impl BookSource for OpenBdSource {
    fn name(&self) -> &str {
        SOURCE_NAME
    }

    async fn lookup_by_isbn(&self, isbn: &str) -> LookupOutcome {
        match self.fetch(isbn).await {
            Ok(books) => match books.into_iter().next().flatten() {
                Some(book) => match book.into_candidate() {
                    Some(candidate) => LookupOutcome::Found(candidate),
                    None => {
                        tracing::debug!(
                            "[{}] entry for {} has no ISBN, discarding",
                            SOURCE_NAME,
                            isbn
                        );
                        LookupOutcome::NotFound
                    }
                },
                None => LookupOutcome::NotFound,
            },
            Err(e) => {
                tracing::warn!("[{}] lookup for {} failed: {}", SOURCE_NAME, isbn, e);
                LookupOutcome::SourceError(e.to_string())
            }
        }
    }
}
