//! PostgreSQL implementation of ClanRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use clan_core::entities::Clan;
use clan_core::error::DomainError;
use clan_core::traits::{ClanRepository, RepoResult};

use crate::models::ClanModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ClanRepository
#[derive(Clone)]
pub struct PgClanRepository {
    pool: PgPool,
}

impl PgClanRepository {
    /// Create a new PgClanRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClanRepository for PgClanRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Clan>> {
        let result = sqlx::query_as::<_, ClanModel>(
            r#"
            SELECT id, game_id, public_id, name, owner_id, metadata, created_at, updated_at
            FROM clans
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Clan::from))
    }

    #[instrument(skip(self))]
    async fn find_by_public_id(&self, game_id: &str, public_id: &str) -> RepoResult<Option<Clan>> {
        let result = sqlx::query_as::<_, ClanModel>(
            r#"
            SELECT id, game_id, public_id, name, owner_id, metadata, created_at, updated_at
            FROM clans
            WHERE game_id = $1 AND public_id = $2
            "#,
        )
        .bind(game_id)
        .bind(public_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Clan::from))
    }

    #[instrument(skip(self, clan), fields(game_id = %clan.game_id, public_id = %clan.public_id))]
    async fn create(&self, clan: &Clan) -> RepoResult<Clan> {
        let model = sqlx::query_as::<_, ClanModel>(
            r#"
            INSERT INTO clans (game_id, public_id, name, owner_id, metadata, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, game_id, public_id, name, owner_id, metadata, created_at, updated_at
            "#,
        )
        .bind(&clan.game_id)
        .bind(&clan.public_id)
        .bind(&clan.name)
        .bind(clan.owner_id)
        .bind(&clan.metadata)
        .bind(clan.created_at)
        .bind(clan.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(model.into())
    }

    #[instrument(skip(self, clan), fields(clan_id = clan.id))]
    async fn update(&self, clan: &Clan) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE clans
            SET name = $2, metadata = $3, updated_at = $4
            WHERE id = $1
            "#,
        )
        .bind(clan.id)
        .bind(&clan.name)
        .bind(&clan.metadata)
        .bind(clan.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::ClanNotFound(clan.public_id.clone()));
        }

        Ok(())
    }
}
