//! Badge catalog and award models.

use serde::Serialize;
use shelfwise_core::badges::{BadgeCategory, BadgeThreshold};
use shelfwise_core::error::CoreError;
use shelfwise_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `badges` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Badge {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub category: String,
    pub requirement: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Badge {
    /// Reduce this row to its qualification rule.
    ///
    /// Fails if the stored category is not a known [`BadgeCategory`].
    pub fn threshold(&self) -> Result<BadgeThreshold, CoreError> {
        let category: BadgeCategory = self.category.parse()?;
        Ok(BadgeThreshold {
            badge_id: self.id,
            category,
            requirement: i64::from(self.requirement),
        })
    }
}

/// A badge a user holds, with the time it was earned.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EarnedBadge {
    pub badge_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub category: String,
    pub requirement: i32,
    pub earned_at: Timestamp,
}
