pub mod isbn;
pub mod resolver;
pub mod size;

pub use crate::domain::model::{Book, Candidate, SizeClass};
pub use crate::domain::ports::{BookSource, LookupOutcome};
pub use crate::utils::error::Result;
