//! Built-in offline catalog.
//!
//! Serves a small fixed set of well-known movies and the standard genre list
//! when no usable credential is configured. Every genre a fallback movie
//! references is present in the fallback taxonomy.

use marquee_model::{Genre, GenreId, Movie, MovieId};
use once_cell::sync::Lazy;

use crate::selection;
use crate::taxonomy::GenreTaxonomy;

static GENRES: Lazy<Vec<Genre>> = Lazy::new(|| {
    [
        (28, "Action"),
        (12, "Adventure"),
        (16, "Animation"),
        (35, "Comedy"),
        (80, "Crime"),
        (99, "Documentary"),
        (18, "Drama"),
        (10751, "Family"),
        (14, "Fantasy"),
        (36, "History"),
        (27, "Horror"),
        (10402, "Music"),
        (9648, "Mystery"),
        (10749, "Romance"),
        (878, "Science Fiction"),
        (10770, "TV Movie"),
        (53, "Thriller"),
        (10752, "War"),
        (37, "Western"),
    ]
    .into_iter()
    .map(|(id, name)| Genre::new(id, name))
    .collect()
});

static TAXONOMY: Lazy<GenreTaxonomy> = Lazy::new(|| GenreTaxonomy::new(GENRES.clone()));

struct Entry {
    id: MovieId,
    title: &'static str,
    release_date: &'static str,
    vote_average: f64,
    genres: &'static [GenreId],
    poster_path: &'static str,
    overview: &'static str,
    director: &'static str,
}

const ENTRIES: &[Entry] = &[
    Entry {
        id: 1,
        title: "The Shawshank Redemption",
        release_date: "1994-09-23",
        vote_average: 9.3,
        genres: &[18],
        poster_path: "/q6y0Go1tsGEsmtFryDOJo3dEmqu.jpg",
        overview: "Framed in the 1940s for the double murder of his wife and her lover, upstanding banker Andy Dufresne begins a new life at the Shawshank prison, where he puts his accounting skills to work for an amoral warden. During his long stretch in prison, Dufresne comes to be admired by the other inmates -- including an older prisoner named Red -- for his integrity and unquenchable sense of hope.",
        director: "Frank Darabont",
    },
    Entry {
        id: 2,
        title: "The Godfather",
        release_date: "1972-03-14",
        vote_average: 9.2,
        genres: &[18, 80],
        poster_path: "/3bhkrj58Vtu7enYsRolD1fZdja1.jpg",
        overview: "Spanning the years 1945 to 1955, a chronicle of the fictional Italian-American Corleone crime family. When organized crime family patriarch, Vito Corleone barely survives an attempt on his life, his youngest son, Michael steps in to take care of the would-be killers, launching a campaign of bloody revenge.",
        director: "Francis Ford Coppola",
    },
    Entry {
        id: 3,
        title: "The Dark Knight",
        release_date: "2008-07-16",
        vote_average: 9.0,
        genres: &[28, 80, 18],
        poster_path: "/qJ2tW6WMUDux911r6m7haRef0WH.jpg",
        overview: "Batman raises the stakes in his war on crime. With the help of Lt. Jim Gordon and District Attorney Harvey Dent, Batman sets out to dismantle the remaining criminal organizations that plague the streets. The partnership proves to be effective, but they soon find themselves prey to a reign of chaos unleashed by a rising criminal mastermind known to the terrified citizens of Gotham as the Joker.",
        director: "Christopher Nolan",
    },
    Entry {
        id: 4,
        title: "Pulp Fiction",
        release_date: "1994-09-10",
        vote_average: 8.9,
        genres: &[53, 80],
        poster_path: "/d5iIlFn5s0ImszYzBPb8JPIfbXD.jpg",
        overview: "A burger-loving hit man, his philosophical partner, a drug-addled gangster's moll and a washed-up boxer converge in this sprawling, comedic crime caper. Their adventures unfurl in three stories that ingeniously trip back and forth in time.",
        director: "Quentin Tarantino",
    },
    Entry {
        id: 5,
        title: "Inception",
        release_date: "2010-07-15",
        vote_average: 8.8,
        genres: &[28, 878, 12],
        poster_path: "/9gk7adHYeDvHkCSEqAvQNLV5Uge.jpg",
        overview: "Cobb, a skilled thief who commits corporate espionage by infiltrating the subconscious of his targets is offered a chance to regain his old life as payment for a task considered to be impossible: \"inception\", the implantation of another person's idea into a target's subconscious.",
        director: "Christopher Nolan",
    },
    Entry {
        id: 6,
        title: "The Matrix",
        release_date: "1999-03-30",
        vote_average: 8.7,
        genres: &[28, 878],
        poster_path: "/f89U3ADr1oiB1s9GkdPOEpXUk5H.jpg",
        overview: "Set in the 22nd century, The Matrix tells the story of a computer hacker who joins a group of underground insurgents fighting the vast and powerful computers who now rule the earth.",
        director: "Lana Wachowski",
    },
    Entry {
        id: 7,
        title: "Spirited Away",
        release_date: "2001-07-20",
        vote_average: 8.7,
        genres: &[16, 10751, 14],
        poster_path: "/39wmItIWsg5sZMyRUHLkWBcuVCM.jpg",
        overview: "A young girl, Chihiro, becomes trapped in a strange new world of spirits. When her parents undergo a mysterious transformation, she must call upon the courage she never knew she had to free her family.",
        director: "Hayao Miyazaki",
    },
    Entry {
        id: 8,
        title: "Parasite",
        release_date: "2019-05-30",
        vote_average: 8.6,
        genres: &[35, 53, 18],
        poster_path: "/7IiTTgloJzvGI1TAYymCfbfl3vT.jpg",
        overview: "All unemployed, Ki-taek's family takes peculiar interest in the wealthy and glamorous Parks for their livelihood until they get entangled in an unexpected incident.",
        director: "Bong Joon-ho",
    },
    Entry {
        id: 9,
        title: "Your Name",
        release_date: "2016-08-26",
        vote_average: 8.6,
        genres: &[16, 18, 10749],
        poster_path: "/q719jXXEzOoYaps6babgKnONONX.jpg",
        overview: "High schoolers Mitsuha and Taki are complete strangers living separate lives. But one night, they suddenly switch places. Mitsuha wakes up in Taki's body, and he in hers. This bizarre occurrence continues to happen randomly, and the two must adjust their lives around each other.",
        director: "Makoto Shinkai",
    },
    Entry {
        id: 10,
        title: "Whiplash",
        release_date: "2014-10-10",
        vote_average: 8.5,
        genres: &[18, 10402],
        poster_path: "/6uSPcdGNA2A6vJmCagXkvnutegs.jpg",
        overview: "Under the direction of a ruthless instructor, a talented young drummer begins to pursue perfection at any cost, even his humanity.",
        director: "Damien Chazelle",
    },
];

static MOVIES: Lazy<Vec<Movie>> = Lazy::new(|| ENTRIES.iter().map(Entry::to_movie).collect());

impl Entry {
    fn to_movie(&self) -> Movie {
        Movie {
            id: self.id,
            title: self.title.to_string(),
            release_date: Some(self.release_date.to_string()),
            vote_average: self.vote_average,
            genres: TAXONOMY.resolve(self.genres),
            poster_path: Some(self.poster_path.to_string()),
            overview: Some(self.overview.to_string()),
            director: Some(self.director.to_string()),
            streaming_services: Vec::new(),
        }
    }
}

/// Read-only access to the built-in catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackCatalog;

impl FallbackCatalog {
    pub fn movies(&self) -> Vec<Movie> {
        MOVIES.clone()
    }

    pub fn genres(&self) -> Vec<Genre> {
        GENRES.clone()
    }

    pub fn taxonomy(&self) -> &'static GenreTaxonomy {
        &TAXONOMY
    }

    pub fn by_genre(&self, genre_id: GenreId) -> Vec<Movie> {
        selection::filter_by_genre(self.movies(), genre_id)
    }

    pub fn by_director(&self, name: &str) -> Vec<Movie> {
        selection::filter_by_director(self.movies(), name)
    }

    /// Raw genre ids as authored, before taxonomy resolution.
    pub fn referenced_genre_ids(&self) -> impl Iterator<Item = GenreId> {
        ENTRIES.iter().flat_map(|entry| entry.genres.iter().copied())
    }
}
