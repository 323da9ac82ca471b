//! Repository for the `reading_goals` table.

use sqlx::PgPool;

use crate::models::book::{CreateReadingGoal, ReadingGoal};

const COLUMNS: &str =
    "id, user_id, goal_type, target, deadline, completed_at, created_at, updated_at";

pub struct ReadingGoalRepo;

impl ReadingGoalRepo {
    /// Insert a reading goal, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateReadingGoal,
    ) -> Result<ReadingGoal, sqlx::Error> {
        let query = format!(
            "INSERT INTO reading_goals (user_id, goal_type, target, deadline, completed_at)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ReadingGoal>(&query)
            .bind(input.user_id)
            .bind(&input.goal_type)
            .bind(input.target)
            .bind(input.deadline)
            .bind(input.completed_at)
            .fetch_one(pool)
            .await
    }
}
