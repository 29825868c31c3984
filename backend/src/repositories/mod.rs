//! Database repositories
//!
//! Provides data access layer for database operations.

pub mod bio;
pub mod category;
pub mod post;
pub mod user;

pub use bio::{BioRecord, BioRepository, CreateBio};
pub use category::{
    CategorizedPostRecord, CategoryPostRecord, CategoryRecord, CategoryRepository,
    PostCategoryRecord,
};
pub use post::{PostRecord, PostRepository, PostWithAuthorRecord};
pub use user::{UserRecord, UserRepository};
