//! Domain rules for the Shelfwise reading tracker.
//!
//! Everything in this crate is pure: no I/O, no database access. The `db`
//! and `engine` crates load rows and feed them through these rules.

pub mod badges;
pub mod error;
pub mod lending;
pub mod stats;
pub mod types;
