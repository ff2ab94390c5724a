pub mod memory;
pub mod port;

pub use port::{DeveloperStore, GameStore, GenreStore, RatingStore, StoreError, UserStore};
