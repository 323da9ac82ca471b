pub mod auth;
pub mod badges;
pub mod lending;
