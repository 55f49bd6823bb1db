use std::collections::BTreeMap;

use marquee_model::{Genre, GenreId, MovieId, ProviderId};
use serde::{Deserialize, Serialize};

use super::traits::PersonId;

fn deserialize_optional_date<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty()))
}

fn deserialize_null_as_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or_default())
}

/// A single listing page. Only `results` drives behaviour; the pagination
/// counters are decoded for completeness.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListingPage {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub results: Vec<RawMovie>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u32,
}

impl ListingPage {
    pub fn of(results: Vec<RawMovie>) -> Self {
        let total = results.len() as u32;
        Self {
            page: 1,
            results,
            total_pages: 1,
            total_results: total,
        }
    }
}

/// A catalog entry as returned by a listing call, before enrichment.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawMovie {
    pub id: MovieId,
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub release_date: Option<String>,
    #[serde(default, deserialize_with = "deserialize_null_as_zero")]
    pub vote_average: f64,
    #[serde(default)]
    pub genre_ids: Vec<GenreId>,
    /// Populated by some endpoints; takes precedence over `genre_ids`.
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenreList {
    #[serde(default)]
    pub genres: Vec<Genre>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PersonPage {
    #[serde(default)]
    pub results: Vec<PersonSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PersonSummary {
    pub id: PersonId,
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Credits {
    #[serde(default)]
    pub cast: Vec<CastMember>,
    #[serde(default)]
    pub crew: Vec<CrewMember>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CastMember {
    pub id: PersonId,
    pub name: String,
    #[serde(default)]
    pub character: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CrewMember {
    pub id: PersonId,
    pub name: String,
    #[serde(default)]
    pub job: String,
    #[serde(default)]
    pub department: Option<String>,
}

impl CrewMember {
    pub fn new(id: PersonId, name: impl Into<String>, job: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            job: job.into(),
            department: None,
        }
    }
}

/// Watch availability keyed by region code. Ordered so that "first region"
/// means the lexicographically smallest code.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WatchProviders {
    #[serde(default)]
    pub results: BTreeMap<String, RegionAvailability>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegionAvailability {
    #[serde(default)]
    pub flatrate: Option<Vec<ProviderListing>>,
    #[serde(default)]
    pub rent: Option<Vec<ProviderListing>>,
    #[serde(default)]
    pub buy: Option<Vec<ProviderListing>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProviderListing {
    pub provider_id: ProviderId,
    pub provider_name: String,
    #[serde(default)]
    pub logo_path: Option<String>,
}

impl ProviderListing {
    pub fn new(provider_id: ProviderId, provider_name: impl Into<String>) -> Self {
        Self {
            provider_id,
            provider_name: provider_name.into(),
            logo_path: None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct KeyQuery<'a> {
    pub api_key: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct ListingQuery<'a> {
    pub api_key: &'a str,
    pub page: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_genres: Option<GenreId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_crew: Option<PersonId>,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct PersonQuery<'a> {
    pub api_key: &'a str,
    pub query: &'a str,
    pub page: u32,
}
