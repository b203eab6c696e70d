//! Artic Table Core
//!
//! Headless core for a remotely paginated artwork table: page fetching,
//! row selection, and the bulk "select first N rows" prompt. Rendering is
//! left to a host UI; this crate only produces the state it displays and
//! exposes the event handlers the host wires to its widgets.

pub mod config;
pub mod domain;
pub mod error;
pub mod features;
pub mod services;
pub mod state;

pub use error::{Error, Result};
