//! # Catalogue Services
//!
//! Application services in front of the store ports. Handlers stay thin;
//! duplicate checks, reference resolution, and the rating uniqueness guard
//! all live here.

pub mod developer;
pub mod game;
pub mod genre;
pub mod rating;
pub mod user;

use thiserror::Error;

use crate::error::entity::NotFoundError;

/// Failures shared by the catalogue CRUD services.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error(transparent)]
    NotFound(#[from] NotFoundError),
    /// A unique attribute (genre name, studio name, email) is already taken.
    #[error("duplicate {entity}: {value}")]
    Duplicate {
        entity: &'static str,
        value: String,
    },
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

pub use developer::DeveloperService;
pub use game::GameService;
pub use genre::GenreService;
pub use rating::RatingService;
pub use user::UserService;
