pub mod movies;
pub mod status;
