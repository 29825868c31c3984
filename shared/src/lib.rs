//! Blog Backend shared types
//!
//! Request/response types and input validation rules shared between
//! the backend and its integration tests.

pub mod types;
pub mod validation;
