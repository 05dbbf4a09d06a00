//! PostgreSQL implementation of HookRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use clan_core::entities::Hook;
use clan_core::error::DomainError;
use clan_core::traits::{HookRepository, RepoResult};
use clan_core::value_objects::HookEventType;

use crate::models::HookModel;

use super::error::map_db_error;

/// PostgreSQL implementation of HookRepository
#[derive(Clone)]
pub struct PgHookRepository {
    pool: PgPool,
}

impl PgHookRepository {
    /// Create a new PgHookRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HookRepository for PgHookRepository {
    #[instrument(skip(self))]
    async fn find_by_game_and_type(
        &self,
        game_id: &str,
        event_type: HookEventType,
    ) -> RepoResult<Vec<Hook>> {
        let results = sqlx::query_as::<_, HookModel>(
            r#"
            SELECT id, game_id, public_id, event_type, url, created_at, updated_at
            FROM hooks
            WHERE game_id = $1 AND event_type = $2
            ORDER BY id
            "#,
        )
        .bind(game_id)
        .bind(event_type.code())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(Hook::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn find_by_game(&self, game_id: &str) -> RepoResult<Vec<Hook>> {
        let results = sqlx::query_as::<_, HookModel>(
            r#"
            SELECT id, game_id, public_id, event_type, url, created_at, updated_at
            FROM hooks
            WHERE game_id = $1
            ORDER BY event_type, id
            "#,
        )
        .bind(game_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(Hook::try_from).collect()
    }

    #[instrument(skip(self, hook), fields(game_id = %hook.game_id, event_type = %hook.event_type))]
    async fn create(&self, hook: &Hook) -> RepoResult<Hook> {
        let model = sqlx::query_as::<_, HookModel>(
            r#"
            INSERT INTO hooks (game_id, public_id, event_type, url, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, game_id, public_id, event_type, url, created_at, updated_at
            "#,
        )
        .bind(&hook.game_id)
        .bind(&hook.public_id)
        .bind(hook.event_type.code())
        .bind(&hook.url)
        .bind(hook.created_at)
        .bind(hook.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Hook::try_from(model)
    }

    #[instrument(skip(self))]
    async fn delete(&self, game_id: &str, public_id: &str) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM hooks WHERE game_id = $1 AND public_id = $2")
            .bind(game_id)
            .bind(public_id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::HookNotFound(public_id.to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgHookRepository>();
    }
}
