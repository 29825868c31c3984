//! Authentication module
//!
//! Provides stateless bearer-token authentication with bcrypt password
//! hashing.

mod middleware;
mod password;
mod token;

pub use middleware::{AuthUser, TOKEN_HEADER};
pub use password::PasswordHasher;
pub use token::{Claims, TokenService};
