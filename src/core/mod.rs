//! Core types - pure abstractions shared across the codebase.

pub mod escape;
mod hostname;
mod url;

pub use hostname::Hostname;
pub use url::UrlPath;
