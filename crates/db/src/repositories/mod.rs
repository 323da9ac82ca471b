//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod badge_repo;
pub mod book_repo;
pub mod lending_request_repo;
pub mod reading_goal_repo;
pub mod review_repo;
pub mod stats_repo;
pub mod user_book_repo;
pub mod user_repo;

pub use badge_repo::BadgeRepo;
pub use book_repo::BookRepo;
pub use lending_request_repo::LendingRequestRepo;
pub use reading_goal_repo::ReadingGoalRepo;
pub use review_repo::ReviewRepo;
pub use stats_repo::StatsRepo;
pub use user_book_repo::UserBookRepo;
pub use user_repo::UserRepo;
