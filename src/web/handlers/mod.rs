pub mod auth;
pub mod developers;
pub mod games;
pub mod genres;
pub mod ratings;
pub mod users;
