// Adapters layer: concrete BookSource implementations over HTTP.

pub mod google_books;
pub mod http;
pub mod openbd;

pub use google_books::GoogleBooksSource;
pub use http::build_client;
pub use openbd::OpenBdSource;
