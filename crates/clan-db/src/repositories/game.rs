//! PostgreSQL implementation of GameRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use clan_core::entities::Game;
use clan_core::error::DomainError;
use clan_core::traits::{GameRepository, RepoResult};

use crate::models::GameModel;

use super::error::map_db_error;

const GAME_COLUMNS: &str = "id, public_id, name, min_membership_level, max_membership_level, \
     min_level_to_accept_application, min_level_to_create_invitation, \
     min_level_offset_to_promote_member, min_level_offset_to_demote_member, \
     allow_application, metadata, created_at, updated_at";

/// PostgreSQL implementation of GameRepository
#[derive(Clone)]
pub struct PgGameRepository {
    pool: PgPool,
}

impl PgGameRepository {
    /// Create a new PgGameRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GameRepository for PgGameRepository {
    #[instrument(skip(self))]
    async fn find_by_public_id(&self, public_id: &str) -> RepoResult<Option<Game>> {
        let result = sqlx::query_as::<_, GameModel>(&format!(
            "SELECT {GAME_COLUMNS} FROM games WHERE public_id = $1"
        ))
        .bind(public_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Game::from))
    }

    #[instrument(skip(self, game), fields(public_id = %game.public_id))]
    async fn create(&self, game: &Game) -> RepoResult<Game> {
        let s = &game.settings;
        let model = sqlx::query_as::<_, GameModel>(&format!(
            r#"
            INSERT INTO games (
                public_id, name, min_membership_level, max_membership_level,
                min_level_to_accept_application, min_level_to_create_invitation,
                min_level_offset_to_promote_member, min_level_offset_to_demote_member,
                allow_application, metadata, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING {GAME_COLUMNS}
            "#
        ))
        .bind(&game.public_id)
        .bind(&game.name)
        .bind(s.min_membership_level)
        .bind(s.max_membership_level)
        .bind(s.min_level_to_accept_application)
        .bind(s.min_level_to_create_invitation)
        .bind(s.min_level_offset_to_promote_member)
        .bind(s.min_level_offset_to_demote_member)
        .bind(s.allow_application)
        .bind(&game.metadata)
        .bind(game.created_at)
        .bind(game.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(model.into())
    }

    #[instrument(skip(self, game), fields(public_id = %game.public_id))]
    async fn update(&self, game: &Game) -> RepoResult<()> {
        let s = &game.settings;
        let result = sqlx::query(
            r#"
            UPDATE games
            SET name = $2,
                min_membership_level = $3,
                max_membership_level = $4,
                min_level_to_accept_application = $5,
                min_level_to_create_invitation = $6,
                min_level_offset_to_promote_member = $7,
                min_level_offset_to_demote_member = $8,
                allow_application = $9,
                metadata = $10,
                updated_at = $11
            WHERE id = $1
            "#,
        )
        .bind(game.id)
        .bind(&game.name)
        .bind(s.min_membership_level)
        .bind(s.max_membership_level)
        .bind(s.min_level_to_accept_application)
        .bind(s.min_level_to_create_invitation)
        .bind(s.min_level_offset_to_promote_member)
        .bind(s.min_level_offset_to_demote_member)
        .bind(s.allow_application)
        .bind(&game.metadata)
        .bind(game.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::GameNotFound(game.public_id.clone()));
        }

        Ok(())
    }
}
