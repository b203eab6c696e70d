//! Artworks table feature

pub mod controller;

pub use controller::{ArtworksController, FetchOutcome, PageEvent};
