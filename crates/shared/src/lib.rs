mod date;
mod error;
mod json;
pub mod pantry;
pub mod recipe;
pub mod restaurant;

pub use date::*;
pub use error::*;
pub use json::*;

/// Opaque unique identifier for a locally stored record.
pub fn new_id() -> String {
    ulid::Ulid::new().to_string()
}
