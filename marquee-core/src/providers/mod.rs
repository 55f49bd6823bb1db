pub mod tmdb;
pub mod tmdb_types;
pub mod traits;

pub use tmdb::TmdbProvider;
pub use tmdb_types::{
    CastMember, Credits, CrewMember, ListingPage, PersonSummary, ProviderListing, RawMovie,
    RegionAvailability, WatchProviders,
};
pub use traits::{MovieProvider, PersonId, ProviderError, bounded};
