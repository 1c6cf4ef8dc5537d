//! Physical size classification.
//!
//! Two entry points: the structured Japanese C-code, whose third character
//! is the publication form, and a keyword heuristic over free text for
//! sources that carry no code.

use crate::domain::model::SizeClass;

/// Pocket formats.
const SMALL_KEYWORDS: &[&str] = &["文庫", "ポケット", "bunko", "pocket"];

/// Shinsho, sensho imprints and standard hardcovers.
const MEDIUM_KEYWORDS: &[&str] = &[
    "新書",
    "選書",
    "ハードカバー",
    "単行本",
    "四六判",
    "shinsho",
    "hardcover",
];

/// Comics share the shinsho/B6 footprint.
const COMIC_KEYWORDS: &[&str] = &["コミック", "漫画", "マンガ", "comic", "manga"];

/// Technical, reference and oversized books.
const EXTRA_LARGE_KEYWORDS: &[&str] = &[
    "技術",
    "リファレンス",
    "オライリー",
    "事典",
    "辞典",
    "図鑑",
    "画集",
    "写真集",
    "ムック",
    "大型本",
    "o'reilly",
    "reference",
    "encyclopedia",
    "art book",
    "oversized",
];

/// Evaluated in order; the first set with a hit decides.
const KEYWORD_RULES: &[(&[&str], SizeClass)] = &[
    (SMALL_KEYWORDS, SizeClass::Small),
    (MEDIUM_KEYWORDS, SizeClass::Medium),
    (COMIC_KEYWORDS, SizeClass::Medium),
    (EXTRA_LARGE_KEYWORDS, SizeClass::ExtraLarge),
];

/// Maps a C-code such as `C0193` to a size class via its form digit.
pub fn classify_by_code(code: Option<&str>) -> SizeClass {
    let Some(form) = code.and_then(|code| code.chars().nth(2)) else {
        return SizeClass::Unknown;
    };

    match form {
        // bunko
        '1' => SizeClass::Small,
        // shinsho, comics
        '2' | '9' => SizeClass::Medium,
        // tankobon, collected series
        '0' | '3' => SizeClass::Large,
        // mook, encyclopedia, picture book
        '4'..='7' => SizeClass::ExtraLarge,
        _ => SizeClass::Unknown,
    }
}

/// Keyword heuristic over `title` and a secondary text (publisher or
/// author). Matching is case-insensitive.
///
/// A pocket-format hit wins over a large-format hit in the same text.
pub fn classify_by_text(title: &str, secondary: &str) -> SizeClass {
    let target = format!("{} {}", title, secondary).to_lowercase();

    KEYWORD_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|keyword| target.contains(keyword)))
        .map(|(_, size)| *size)
        .unwrap_or(SizeClass::Unknown)
}
