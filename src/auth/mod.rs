pub mod filter;
pub mod password;
pub mod policy;
pub mod principal;
pub mod service;
pub mod token;

pub use filter::AuthState;
pub use policy::{AccessMatrix, Decision};
pub use principal::SecurityContext;
pub use service::AuthService;
pub use token::TokenCodec;
