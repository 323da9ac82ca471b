//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts

pub mod badge;
pub mod book;
pub mod lending_request;
pub mod user;
