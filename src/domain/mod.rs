//! Domain models

pub mod artwork;

pub use artwork::{Artwork, ArtworkPage};
