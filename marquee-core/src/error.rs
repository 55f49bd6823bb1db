use std::fmt;

use marquee_model::GenreId;
use thiserror::Error;

use crate::providers::{PersonId, ProviderError};

/// Which upstream listing a failed request belonged to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingKind {
    Popular,
    ByGenre(GenreId),
    ByCrew(PersonId),
}

impl fmt::Display for ListingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListingKind::Popular => write!(f, "popular"),
            ListingKind::ByGenre(id) => write!(f, "genre {id}"),
            ListingKind::ByCrew(id) => write!(f, "crew {id}"),
        }
    }
}

/// Failures that abort a catalog resolution.
///
/// Per-movie credit and availability lookups never surface here; they are
/// recovered inside the enrichment pipeline.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("genre taxonomy lookup failed: {0}")]
    Taxonomy(#[source] ProviderError),

    #[error("{listing} listing failed: {source}")]
    Listing {
        listing: ListingKind,
        #[source]
        source: ProviderError,
    },

    #[error("person search for '{name}' failed: {source}")]
    PersonSearch {
        name: String,
        #[source]
        source: ProviderError,
    },
}

impl CatalogError {
    /// The upstream failure behind this error.
    pub fn provider_error(&self) -> &ProviderError {
        match self {
            CatalogError::Taxonomy(source) => source,
            CatalogError::Listing { source, .. } => source,
            CatalogError::PersonSearch { source, .. } => source,
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
