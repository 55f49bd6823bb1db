use std::collections::HashMap;

use marquee_model::{Genre, GenreId};

use crate::providers::RawMovie;

/// Snapshot of the genre id -> name mapping, fetched once per pipeline run.
#[derive(Debug, Clone, Default)]
pub struct GenreTaxonomy {
    genres: Vec<Genre>,
    names: HashMap<GenreId, usize>,
}

impl GenreTaxonomy {
    pub fn new(genres: Vec<Genre>) -> Self {
        let mut names = HashMap::with_capacity(genres.len());
        for (index, genre) in genres.iter().enumerate() {
            names.entry(genre.id).or_insert(index);
        }
        Self { genres, names }
    }

    pub fn get(&self, id: GenreId) -> Option<&Genre> {
        self.names.get(&id).map(|&index| &self.genres[index])
    }

    pub fn contains(&self, id: GenreId) -> bool {
        self.names.contains_key(&id)
    }

    /// Case-insensitive lookup by display name.
    pub fn find_by_name(&self, name: &str) -> Option<&Genre> {
        let name = name.trim().to_lowercase();
        self.genres
            .iter()
            .find(|genre| genre.name.to_lowercase() == name)
    }

    /// Maps ids to genres in order, dropping ids the snapshot doesn't know.
    pub fn resolve(&self, ids: &[GenreId]) -> Vec<Genre> {
        ids.iter().filter_map(|&id| self.get(id).cloned()).collect()
    }

    /// Genres for a raw entry: its own list when populated, else its ids.
    pub fn genres_for(&self, entry: &RawMovie) -> Vec<Genre> {
        if entry.genres.is_empty() {
            self.resolve(&entry.genre_ids)
        } else {
            entry.genres.clone()
        }
    }

    pub fn genres(&self) -> &[Genre] {
        &self.genres
    }
}
