use crate::adapters::{build_client, GoogleBooksSource, OpenBdSource};
use crate::config::ResolverConfig;
use crate::core::isbn::Isbn;
use crate::core::size::{classify_by_code, classify_by_text};
use crate::domain::model::{Book, Candidate, SizeClass};
use crate::domain::ports::{BookSource, LookupOutcome};
use crate::utils::error::Result;
use std::sync::Arc;

/// Resolves an ISBN to a [`Book`] by trying sources in priority order.
///
/// 1. primary source by ISBN
/// 2. secondary source by ISBN
/// 3. secondary source by keyword, only when a keyword is given
///
/// The first hit wins and later sources are never queried. A source error
/// counts as a miss for that source; callers only ever see `None` when the
/// chain is exhausted, whatever the individual sources reported.
#[derive(Clone)]
pub struct BookResolver {
    primary: Arc<dyn BookSource>,
    secondary: Arc<dyn BookSource>,
    max_results: usize,
}

impl BookResolver {
    pub fn new(
        primary: Arc<dyn BookSource>,
        secondary: Arc<dyn BookSource>,
        max_results: usize,
    ) -> Self {
        Self {
            primary,
            secondary,
            max_results,
        }
    }

    /// OpenBD first, Google Books as fallback, sharing one HTTP client.
    pub fn from_config(config: &ResolverConfig) -> Result<Self> {
        let client = build_client(&config.http)?;
        let primary = OpenBdSource::new(client.clone(), &config.sources.openbd_base_url);
        let secondary = GoogleBooksSource::new(client, &config.sources.google_books_base_url);

        Ok(Self::new(
            Arc::new(primary),
            Arc::new(secondary),
            config.search.max_results,
        ))
    }

    /// Runs the fallback chain without checking the identifier.
    pub async fn resolve(&self, isbn: &str, keyword: Option<&str>) -> Option<Book> {
        tracing::debug!("Resolving {} (keyword: {:?})", isbn, keyword);

        let candidate = self.find_candidate(isbn, keyword).await;
        match candidate {
            Some(candidate) => {
                let book = enrich(candidate);
                tracing::info!(
                    "Resolved {} -> \"{}\" (size {})",
                    isbn,
                    book.title,
                    book.size
                );
                Some(book)
            }
            None => {
                tracing::info!("No source could identify {}", isbn);
                None
            }
        }
    }

    /// Validates `isbn` before any request is made, then resolves it.
    pub async fn resolve_validated(
        &self,
        isbn: &str,
        keyword: Option<&str>,
    ) -> Result<Option<Book>> {
        let isbn = Isbn::parse(isbn)?;
        Ok(self.resolve(isbn.as_str(), keyword).await)
    }

    async fn find_candidate(&self, isbn: &str, keyword: Option<&str>) -> Option<Candidate> {
        if let Some(candidate) = lookup(self.primary.as_ref(), isbn).await {
            return Some(candidate);
        }

        if let Some(candidate) = lookup(self.secondary.as_ref(), isbn).await {
            return Some(candidate);
        }

        let keyword = keyword?;
        tracing::debug!(
            "[{}] ISBN {} not found, searching keyword '{}'",
            self.secondary.name(),
            isbn,
            keyword
        );
        self.secondary
            .search_by_keyword(keyword, self.max_results)
            .await
            .into_iter()
            .next()
    }
}

async fn lookup(source: &dyn BookSource, isbn: &str) -> Option<Candidate> {
    match source.lookup_by_isbn(isbn).await {
        LookupOutcome::Found(candidate) => {
            tracing::debug!("[{}] found {}", source.name(), isbn);
            Some(candidate)
        }
        LookupOutcome::NotFound => {
            tracing::debug!("[{}] has no record for {}", source.name(), isbn);
            None
        }
        LookupOutcome::SourceError(message) => {
            tracing::debug!("[{}] skipped after error: {}", source.name(), message);
            None
        }
    }
}

/// Settles the size class. A size from the C-code is never overridden; the
/// text heuristic only fills in when the code gives nothing.
fn enrich(candidate: Candidate) -> Book {
    let structured = classify_by_code(candidate.classification_code.as_deref());
    let size = if structured.is_known() {
        structured
    } else {
        match classify_by_text(&candidate.title, &candidate.author) {
            SizeClass::Unknown => structured,
            heuristic => heuristic,
        }
    };
    Book::from_candidate(candidate, size)
}
