use crate::domain::model::Candidate;
use async_trait::async_trait;

/// Result of asking one source for an ISBN.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Found(Candidate),
    /// The source answered and has no record for the identifier.
    NotFound,
    /// Transport failure, timeout, non-2xx status or undecodable payload.
    SourceError(String),
}

impl LookupOutcome {
    pub fn into_candidate(self) -> Option<Candidate> {
        match self {
            LookupOutcome::Found(candidate) => Some(candidate),
            LookupOutcome::NotFound | LookupOutcome::SourceError(_) => None,
        }
    }
}

/// An external bibliographic API.
///
/// Implementations never return errors: failures are folded into
/// [`LookupOutcome::SourceError`] or an empty search result so the resolver
/// can move on to the next source.
#[async_trait]
pub trait BookSource: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &str;

    async fn lookup_by_isbn(&self, isbn: &str) -> LookupOutcome;

    async fn search_by_keyword(&self, _keyword: &str, _max_results: usize) -> Vec<Candidate> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct LookupOnly;

    #[async_trait]
    impl BookSource for LookupOnly {
        fn name(&self) -> &str {
            "lookup-only"
        }

        async fn lookup_by_isbn(&self, _isbn: &str) -> LookupOutcome {
            LookupOutcome::NotFound
        }
    }

    #[test]
    fn test_default_keyword_search_is_empty() {
        let source = LookupOnly;
        let results = tokio_test::block_on(source.search_by_keyword("夏目漱石", 10));
        assert!(results.is_empty());
    }

    #[test]
    fn test_into_candidate() {
        let candidate = Candidate::new("9784101010014");
        assert_eq!(
            LookupOutcome::Found(candidate.clone()).into_candidate(),
            Some(candidate)
        );
        assert_eq!(LookupOutcome::NotFound.into_candidate(), None);
        assert_eq!(
            LookupOutcome::SourceError("timeout".to_string()).into_candidate(),
            None
        );
    }
}
