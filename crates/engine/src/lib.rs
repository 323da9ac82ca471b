//! Shelfwise domain services.
//!
//! Each service owns a clone of the connection pool handed to it at
//! construction and applies the rules from `shelfwise_core` over the
//! repositories in `shelfwise_db`.
//!
//! - [`lending::LendingService`] -- lending request lifecycle.
//! - [`badges::BadgeEngine`] -- badge qualification and award queries.

pub mod badges;
pub mod error;
pub mod lending;

pub use badges::BadgeEngine;
pub use error::{EngineError, EngineResult};
pub use lending::LendingService;
