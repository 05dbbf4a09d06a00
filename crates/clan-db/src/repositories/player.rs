//! PostgreSQL implementation of PlayerRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use clan_core::entities::Player;
use clan_core::error::DomainError;
use clan_core::traits::{PlayerRepository, RepoResult};

use crate::models::PlayerModel;

use super::error::map_db_error;

/// PostgreSQL implementation of PlayerRepository
#[derive(Clone)]
pub struct PgPlayerRepository {
    pool: PgPool,
}

impl PgPlayerRepository {
    /// Create a new PgPlayerRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PlayerRepository for PgPlayerRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Player>> {
        let result = sqlx::query_as::<_, PlayerModel>(
            r#"
            SELECT id, game_id, public_id, name, metadata, created_at, updated_at
            FROM players
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Player::from))
    }

    #[instrument(skip(self))]
    async fn find_by_public_id(&self, game_id: &str, public_id: &str) -> RepoResult<Option<Player>> {
        let result = sqlx::query_as::<_, PlayerModel>(
            r#"
            SELECT id, game_id, public_id, name, metadata, created_at, updated_at
            FROM players
            WHERE game_id = $1 AND public_id = $2
            "#,
        )
        .bind(game_id)
        .bind(public_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Player::from))
    }

    #[instrument(skip(self, player), fields(game_id = %player.game_id, public_id = %player.public_id))]
    async fn create(&self, player: &Player) -> RepoResult<Player> {
        let model = sqlx::query_as::<_, PlayerModel>(
            r#"
            INSERT INTO players (game_id, public_id, name, metadata, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, game_id, public_id, name, metadata, created_at, updated_at
            "#,
        )
        .bind(&player.game_id)
        .bind(&player.public_id)
        .bind(&player.name)
        .bind(&player.metadata)
        .bind(player.created_at)
        .bind(player.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(model.into())
    }

    #[instrument(skip(self, player), fields(player_id = player.id))]
    async fn update(&self, player: &Player) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE players
            SET name = $2, metadata = $3, updated_at = $4
            WHERE id = $1
            "#,
        )
        .bind(player.id)
        .bind(&player.name)
        .bind(&player.metadata)
        .bind(player.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::PlayerNotFound(player.public_id.clone()));
        }

        Ok(())
    }
}
