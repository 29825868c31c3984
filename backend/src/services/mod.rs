//! Business logic services
//!
//! Services encapsulate business logic and coordinate between
//! repositories and the auth primitives.

pub mod auth;
pub mod bio;
pub mod category;
pub mod post;
pub mod user;

pub use auth::AuthService;
pub use bio::BioService;
pub use category::CategoryService;
pub use post::PostService;
pub use user::UserService;
