use marquee_model::{GenreId, Movie, MovieId};
use rand::Rng;

/// Keeps movies carrying `genre_id` in any position.
pub fn filter_by_genre(movies: Vec<Movie>, genre_id: GenreId) -> Vec<Movie> {
    movies
        .into_iter()
        .filter(|movie| movie.has_genre(genre_id))
        .collect()
}

/// Keeps movies whose director contains `name`, ignoring case.
pub fn filter_by_director(movies: Vec<Movie>, name: &str) -> Vec<Movie> {
    movies
        .into_iter()
        .filter(|movie| movie.directed_by(name))
        .collect()
}

pub fn search_titles(movies: Vec<Movie>, query: &str) -> Vec<Movie> {
    movies
        .into_iter()
        .filter(|movie| movie.title_matches(query))
        .collect()
}

pub fn find_by_id(movies: Vec<Movie>, id: MovieId) -> Option<Movie> {
    movies.into_iter().find(|movie| movie.id == id)
}

/// Uniform pick over `candidates`; `None` when there is nothing to pick.
pub fn pick_random(candidates: Vec<Movie>) -> Option<Movie> {
    pick_with(candidates, &mut rand::rng())
}

pub fn pick_with<R: Rng + ?Sized>(mut candidates: Vec<Movie>, rng: &mut R) -> Option<Movie> {
    if candidates.is_empty() {
        return None;
    }
    let index = rng.random_range(0..candidates.len());
    Some(candidates.swap_remove(index))
}
