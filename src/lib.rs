pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliArgs;
pub use config::ResolverConfig;

pub use adapters::{GoogleBooksSource, OpenBdSource};
pub use crate::core::{
    isbn::{is_valid_isbn13, Isbn},
    resolver::BookResolver,
    size::{classify_by_code, classify_by_text},
};
pub use domain::model::{Book, Candidate, SizeClass};
pub use domain::ports::{BookSource, LookupOutcome};
pub use utils::error::{ResolverError, Result};
