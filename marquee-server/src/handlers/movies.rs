//! Movie endpoints under `/api/movies`.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use marquee_core::{Genre, Movie, MovieFilter, MovieId};
use serde::Deserialize;
use tracing::info;

use crate::infra::{
    app_state::AppState,
    errors::{AppError, AppResult},
};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RandomMovieQuery {
    pub genre_id: Option<u64>,
    pub director: Option<String>,
}

impl From<RandomMovieQuery> for MovieFilter {
    fn from(query: RandomMovieQuery) -> Self {
        MovieFilter::new(query.genre_id, query.director)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub query: String,
}

pub async fn list_movies(State(state): State<AppState>) -> AppResult<Json<Vec<Movie>>> {
    Ok(Json(state.catalog().movies().await?))
}

pub async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<MovieId>,
) -> AppResult<Json<Movie>> {
    state
        .catalog()
        .movie_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found(format!("Movie {id} not found")))
}

pub async fn random_movie(
    State(state): State<AppState>,
    Query(query): Query<RandomMovieQuery>,
) -> AppResult<Json<Movie>> {
    let filter = MovieFilter::from(query);
    let picked = state.catalog().random_movie(&filter).await?;

    match picked {
        Some(movie) => {
            info!(movie_id = movie.id, title = %movie.title, "picked random movie");
            Ok(Json(movie))
        }
        None => Err(AppError::not_found("No movies match the requested filters")),
    }
}

pub async fn list_genres(State(state): State<AppState>) -> AppResult<Json<Vec<Genre>>> {
    Ok(Json(state.catalog().genres().await?))
}

pub async fn movies_by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> AppResult<Json<Vec<Movie>>> {
    Ok(Json(state.catalog().movies_by_genre_name(&category).await?))
}

pub async fn movies_by_director(
    State(state): State<AppState>,
    Path(director): Path<String>,
) -> AppResult<Json<Vec<Movie>>> {
    let director = director.trim();
    if director.is_empty() {
        return Err(AppError::bad_request("Director name must not be empty"));
    }
    Ok(Json(state.catalog().movies_by_director(director).await?))
}

pub async fn search_movies(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> AppResult<Json<Vec<Movie>>> {
    Ok(Json(state.catalog().search(query.query.trim()).await?))
}
