//! Domain types, validation rules and query filters for the catalog.
//!
//! Has no database or HTTP dependencies so it can be shared by the
//! repository layer and the API server.

pub mod actor;
pub mod binding;
pub mod concurrency;
pub mod error;
pub mod filter;
pub mod movie;
pub mod types;
