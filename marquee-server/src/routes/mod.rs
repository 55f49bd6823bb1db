use axum::{Router, routing::get};

use crate::handlers::{movies, status};
use crate::infra::app_state::AppState;

pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/api/movies", movie_routes())
        .route("/api/status", get(status::status_handler))
}

fn movie_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(movies::list_movies))
        .route("/random", get(movies::random_movie))
        .route("/genres", get(movies::list_genres))
        .route("/search", get(movies::search_movies))
        .route("/category/{category}", get(movies::movies_by_category))
        .route("/director/{director}", get(movies::movies_by_director))
        .route("/{id}", get(movies::get_movie))
}
