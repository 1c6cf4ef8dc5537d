use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder used when a source reports no title.
pub const UNKNOWN_TITLE: &str = "タイトル不明";
/// Placeholder used when a source reports no author.
pub const UNKNOWN_AUTHOR: &str = "著者不明";

/// Physical size bucket of a book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SizeClass {
    /// Bunko and other pocket formats.
    #[serde(rename = "S")]
    Small,
    /// Shinsho, comics, B6 and shiroku-ban hardcovers.
    #[serde(rename = "M")]
    Medium,
    /// A5/B5 tankobon and collected editions.
    #[serde(rename = "L")]
    Large,
    /// Mooks, encyclopedias, picture books and other oversized formats.
    #[serde(rename = "XL")]
    ExtraLarge,
    #[default]
    #[serde(rename = "UNKNOWN")]
    Unknown,
}

impl SizeClass {
    pub fn is_known(self) -> bool {
        self != SizeClass::Unknown
    }

    pub fn label(self) -> &'static str {
        match self {
            SizeClass::Small => "S",
            SizeClass::Medium => "M",
            SizeClass::Large => "L",
            SizeClass::ExtraLarge => "XL",
            SizeClass::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for SizeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Book data as mapped by a single source, before size enrichment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub cover_url: Option<String>,
    pub page_count: Option<u32>,
    /// Japanese C-code (e.g. `C0193`); only OpenBD reports one.
    pub classification_code: Option<String>,
    pub publisher: Option<String>,
}

impl Candidate {
    /// Candidate with placeholder title/author and every optional field empty.
    pub fn new(isbn: impl Into<String>) -> Self {
        Self {
            isbn: isbn.into(),
            title: UNKNOWN_TITLE.to_string(),
            author: UNKNOWN_AUTHOR.to_string(),
            cover_url: None,
            page_count: None,
            classification_code: None,
            publisher: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn with_cover_url(mut self, cover_url: impl Into<String>) -> Self {
        self.cover_url = Some(cover_url.into());
        self
    }

    pub fn with_page_count(mut self, page_count: u32) -> Self {
        self.page_count = Some(page_count);
        self
    }

    pub fn with_classification_code(mut self, code: impl Into<String>) -> Self {
        self.classification_code = Some(code.into());
        self
    }

    pub fn with_publisher(mut self, publisher: impl Into<String>) -> Self {
        self.publisher = Some(publisher.into());
        self
    }
}

/// The canonical, source-independent book record.
///
/// Title and author always carry text (a placeholder when the source had
/// none), whereas `cover_url` and `page_count` stay `None` when unknown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Storage id assigned by the persistence layer; `None` until saved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub cover_url: Option<String>,
    pub page_count: Option<u32>,
    pub size: SizeClass,
}

impl Book {
    pub fn from_candidate(candidate: Candidate, size: SizeClass) -> Self {
        Self {
            id: None,
            isbn: candidate.isbn,
            title: candidate.title,
            author: candidate.author,
            cover_url: candidate.cover_url,
            page_count: candidate.page_count,
            size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_class_serializes_to_short_labels() {
        let json = serde_json::to_string(&SizeClass::ExtraLarge).unwrap();
        assert_eq!(json, "\"XL\"");

        let parsed: SizeClass = serde_json::from_str("\"UNKNOWN\"").unwrap();
        assert_eq!(parsed, SizeClass::Unknown);
        assert_eq!(SizeClass::Small.to_string(), "S");
    }

    #[test]
    fn test_candidate_defaults_to_placeholders() {
        let candidate = Candidate::new("9784101010014");

        assert_eq!(candidate.title, UNKNOWN_TITLE);
        assert_eq!(candidate.author, UNKNOWN_AUTHOR);
        assert!(candidate.cover_url.is_none());
        assert!(candidate.page_count.is_none());
    }

    #[test]
    fn test_book_from_candidate_keeps_optionals() {
        let candidate = Candidate::new("9784101010014")
            .with_title("こころ")
            .with_author("夏目漱石")
            .with_page_count(384);

        let book = Book::from_candidate(candidate, SizeClass::Small);

        assert!(book.id.is_none());
        assert_eq!(book.title, "こころ");
        assert_eq!(book.page_count, Some(384));
        assert!(book.cover_url.is_none());

        let json = serde_json::to_value(&book).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["size"], "S");
        assert!(json["cover_url"].is_null());
    }
}
