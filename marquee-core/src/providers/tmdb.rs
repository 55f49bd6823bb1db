use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use marquee_model::{Genre, GenreId, MovieId};
use reqwest::Client;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tracing::debug;
use url::Url;

use super::tmdb_types::{
    Credits, GenreList, KeyQuery, ListingPage, ListingQuery, PersonPage, PersonQuery,
    PersonSummary, WatchProviders,
};
use super::traits::{MovieProvider, PersonId, ProviderError};
use crate::config::LiveProviderConfig;

/// HTTP client for the TMDB v3 API.
pub struct TmdbProvider {
    http: Client,
    api_key: String,
    base_url: String,
    request_timeout: Duration,
}

impl fmt::Debug for TmdbProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TmdbProvider")
            .field("base_url", &self.base_url)
            .field("request_timeout", &self.request_timeout)
            .finish_non_exhaustive()
    }
}

impl TmdbProvider {
    pub fn new(config: &LiveProviderConfig) -> Result<Self, ProviderError> {
        let base = Url::parse(&config.base_url)?;
        let http = Client::builder().timeout(config.request_timeout).build()?;

        Ok(Self {
            http,
            api_key: config.api_key.clone(),
            base_url: base.as_str().trim_end_matches('/').to_string(),
            request_timeout: config.request_timeout,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn get_tmdb_json<Q, T>(&self, path: &str, query: &Q) -> Result<T, ProviderError>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path);
        debug!(%url, "TMDB request");

        let response = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|err| self.classify(err))?;

        let status = response.status();
        if status.is_success() {
            let body = response.bytes().await.map_err(|err| self.classify(err))?;
            return serde_json::from_slice::<T>(&body)
                .map_err(|err| ProviderError::Parse(format!("{path}: {err}")));
        }

        #[derive(Debug, Deserialize)]
        struct TmdbErrorBody {
            #[serde(default)]
            status_message: Option<String>,
        }

        let message = response
            .json::<TmdbErrorBody>()
            .await
            .ok()
            .and_then(|body| body.status_message)
            .unwrap_or_else(|| format!("TMDB request failed with status {status}"));

        match status.as_u16() {
            401 => Err(ProviderError::InvalidApiKey),
            404 => Err(ProviderError::NotFound),
            429 => Err(ProviderError::RateLimited),
            _ => Err(ProviderError::ApiError(message)),
        }
    }

    fn classify(&self, err: reqwest::Error) -> ProviderError {
        if err.is_timeout() {
            ProviderError::Timeout(self.request_timeout)
        } else {
            ProviderError::Network(err)
        }
    }

    fn listing_query(
        &self,
        page: u32,
        with_genres: Option<GenreId>,
        with_crew: Option<PersonId>,
    ) -> ListingQuery<'_> {
        ListingQuery {
            api_key: &self.api_key,
            page: page.max(1),
            with_genres,
            with_crew,
        }
    }
}

#[async_trait]
impl MovieProvider for TmdbProvider {
    async fn popular_movies(&self, page: u32) -> Result<ListingPage, ProviderError> {
        self.get_tmdb_json("movie/popular", &self.listing_query(page, None, None))
            .await
    }

    async fn discover_by_genre(
        &self,
        genre_id: GenreId,
        page: u32,
    ) -> Result<ListingPage, ProviderError> {
        self.get_tmdb_json(
            "discover/movie",
            &self.listing_query(page, Some(genre_id), None),
        )
        .await
    }

    async fn discover_by_crew(
        &self,
        person_id: PersonId,
        page: u32,
    ) -> Result<ListingPage, ProviderError> {
        self.get_tmdb_json(
            "discover/movie",
            &self.listing_query(page, None, Some(person_id)),
        )
        .await
    }

    async fn genres(&self) -> Result<Vec<Genre>, ProviderError> {
        let list: GenreList = self
            .get_tmdb_json(
                "genre/movie/list",
                &KeyQuery {
                    api_key: &self.api_key,
                },
            )
            .await?;
        Ok(list.genres)
    }

    async fn search_person(&self, name: &str) -> Result<Vec<PersonSummary>, ProviderError> {
        let page: PersonPage = self
            .get_tmdb_json(
                "search/person",
                &PersonQuery {
                    api_key: &self.api_key,
                    query: name,
                    page: 1,
                },
            )
            .await?;
        Ok(page.results)
    }

    async fn movie_credits(&self, movie_id: MovieId) -> Result<Credits, ProviderError> {
        self.get_tmdb_json(
            &format!("movie/{movie_id}/credits"),
            &KeyQuery {
                api_key: &self.api_key,
            },
        )
        .await
    }

    async fn watch_providers(&self, movie_id: MovieId) -> Result<WatchProviders, ProviderError> {
        self.get_tmdb_json(
            &format!("movie/{movie_id}/watch/providers"),
            &KeyQuery {
                api_key: &self.api_key,
            },
        )
        .await
    }

    fn name(&self) -> &'static str {
        "TMDB"
    }
}
