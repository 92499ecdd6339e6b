// Cloud controller v2 API.
//
// Resources come wrapped in `{ metadata, entity }`; lists are paged with
// `page` / `results-per-page` and filtered with repeated `q` parameters.

pub mod client;
pub mod requests;
pub mod types;

pub use client::Routes;
