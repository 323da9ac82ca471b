//! Repository for the `badges` catalog and `user_badges` awards.

use shelfwise_core::types::DbId;
use sqlx::PgPool;

use crate::models::badge::{Badge, EarnedBadge};

/// Column list for badges queries.
const COLUMNS: &str =
    "id, name, description, icon, category, requirement, created_at, updated_at";

/// Read access to the badge catalog and append-only award writes.
pub struct BadgeRepo;

impl BadgeRepo {
    /// List the full catalog, ordered by category then requirement.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Badge>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM badges ORDER BY category, requirement, id");
        sqlx::query_as::<_, Badge>(&query).fetch_all(pool).await
    }

    /// Find a badge by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Badge>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM badges WHERE id = $1");
        sqlx::query_as::<_, Badge>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Ids of every badge the user already holds.
    pub async fn list_awarded_ids(pool: &PgPool, user_id: DbId) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>("SELECT badge_id FROM user_badges WHERE user_id = $1")
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Badges the user holds, most recently earned first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<EarnedBadge>, sqlx::Error> {
        sqlx::query_as::<_, EarnedBadge>(
            "SELECT b.id AS badge_id, b.name, b.description, b.icon, b.category,
                    b.requirement, ub.earned_at
             FROM user_badges ub
             JOIN badges b ON b.id = ub.badge_id
             WHERE ub.user_id = $1
             ORDER BY ub.earned_at DESC, b.id ASC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    /// Award several badges in one statement.
    ///
    /// Pairs that already exist are skipped. Returns the ids that were
    /// actually inserted. The insert is a single statement, so either every
    /// new row lands or none do.
    pub async fn award_many(
        pool: &PgPool,
        user_id: DbId,
        badge_ids: &[DbId],
    ) -> Result<Vec<DbId>, sqlx::Error> {
        if badge_ids.is_empty() {
            return Ok(Vec::new());
        }
        sqlx::query_scalar::<_, DbId>(
            "INSERT INTO user_badges (user_id, badge_id)
             SELECT $1, badge_id FROM UNNEST($2::BIGINT[]) AS t(badge_id)
             ON CONFLICT (user_id, badge_id) DO NOTHING
             RETURNING badge_id",
        )
        .bind(user_id)
        .bind(badge_ids)
        .fetch_all(pool)
        .await
    }

    /// Number of badges a user holds.
    pub async fn count_for_user(pool: &PgPool, user_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM user_badges WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(pool)
            .await
    }
}
