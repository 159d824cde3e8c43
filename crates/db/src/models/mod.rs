//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A validated input DTO carrying the user-editable fields

pub mod actor;
pub mod movie;
