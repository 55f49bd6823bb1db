//! Core data model definitions shared across Marquee crates.
//!
//! These are the output-facing records: a fully enriched [`Movie`] together
//! with its [`Genre`] list and the [`StreamingService`]s it can be watched on.
//! Wire formats of the upstream provider live in `marquee-core`, not here.

pub mod genre;
pub mod movie;
pub mod streaming;

pub use genre::{Genre, GenreId};
pub use movie::{Movie, MovieId, UNKNOWN_GENRE};
pub use streaming::{ProviderId, StreamingService};
