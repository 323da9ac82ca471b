//! Badge qualification engine.
//!
//! Loads a user's [`ReadingStats`], the badge catalog and the badges already
//! held, asks [`shelfwise_core::badges::newly_qualified`] which ones are now
//! earned, and records them in a single insert. Awards are never revoked.

use std::collections::HashSet;

use shelfwise_core::badges::{newly_qualified, BadgeThreshold};
use shelfwise_core::stats::ReadingStats;
use shelfwise_core::types::DbId;
use shelfwise_db::models::badge::{Badge, EarnedBadge};
use shelfwise_db::repositories::{BadgeRepo, StatsRepo, UserRepo};
use sqlx::PgPool;

use crate::error::EngineResult;

/// Evaluates badge thresholds against reading statistics.
#[derive(Clone)]
pub struct BadgeEngine {
    pool: PgPool,
}

impl BadgeEngine {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Award every badge `user_id` now qualifies for and does not yet hold.
    ///
    /// Returns the newly awarded badges in catalog order. An unknown user
    /// yields an empty list. A storage failure during the award leaves no
    /// partial awards behind and is returned to the caller as-is.
    pub async fn check_and_award(&self, user_id: DbId) -> EngineResult<Vec<Badge>> {
        if UserRepo::find_by_id(&self.pool, user_id).await?.is_none() {
            tracing::debug!(user_id, "Skipping badge check for unknown user");
            return Ok(Vec::new());
        }

        let stats = StatsRepo::reading_stats(&self.pool, user_id).await?;
        let catalog = BadgeRepo::list_all(&self.pool).await?;
        let awarded: HashSet<DbId> = BadgeRepo::list_awarded_ids(&self.pool, user_id)
            .await?
            .into_iter()
            .collect();

        let thresholds = thresholds(&catalog);
        let qualified = newly_qualified(&stats, &thresholds, &awarded);
        if qualified.is_empty() {
            return Ok(Vec::new());
        }

        let inserted: HashSet<DbId> = BadgeRepo::award_many(&self.pool, user_id, &qualified)
            .await?
            .into_iter()
            .collect();

        let earned: Vec<Badge> = catalog
            .into_iter()
            .filter(|badge| inserted.contains(&badge.id))
            .collect();

        tracing::info!(
            user_id,
            awarded = earned.len(),
            badge_ids = ?earned.iter().map(|b| b.id).collect::<Vec<_>>(),
            "Badges awarded"
        );

        Ok(earned)
    }

    /// A user's aggregate reading statistics.
    pub async fn reading_stats(&self, user_id: DbId) -> EngineResult<ReadingStats> {
        Ok(StatsRepo::reading_stats(&self.pool, user_id).await?)
    }

    /// The full badge catalog.
    pub async fn catalog(&self) -> EngineResult<Vec<Badge>> {
        Ok(BadgeRepo::list_all(&self.pool).await?)
    }

    /// Badges a user holds, most recent first.
    pub async fn awards_for(&self, user_id: DbId) -> EngineResult<Vec<EarnedBadge>> {
        Ok(BadgeRepo::list_for_user(&self.pool, user_id).await?)
    }
}

/// Convert catalog rows to thresholds, skipping rows with an unknown category.
fn thresholds(catalog: &[Badge]) -> Vec<BadgeThreshold> {
    catalog
        .iter()
        .filter_map(|badge| match badge.threshold() {
            Ok(threshold) => Some(threshold),
            Err(e) => {
                tracing::warn!(
                    badge_id = badge.id,
                    error = %e,
                    "Ignoring badge with unknown category"
                );
                None
            }
        })
        .collect()
}
