//! Feature controllers

pub mod artworks;
