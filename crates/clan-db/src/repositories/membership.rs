//! PostgreSQL implementation of MembershipRepository
//!
//! Updates are compare-and-swap on `(id, version)`. The partial unique index
//! `memberships_active_pair_idx` keeps one pending or approved row per
//! (clan, player).

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use clan_core::entities::Membership;
use clan_core::error::DomainError;
use clan_core::traits::{MembershipRepository, RepoResult};

use crate::models::MembershipModel;

use super::error::{map_db_error, map_unique_violation};

const MEMBERSHIP_COLUMNS: &str = "id, game_id, clan_id, player_id, requestor_id, level, \
     approved, denied, message, version, created_at, updated_at, deleted_at, deleted_by";

/// PostgreSQL implementation of MembershipRepository
#[derive(Clone)]
pub struct PgMembershipRepository {
    pool: PgPool,
}

impl PgMembershipRepository {
    /// Create a new PgMembershipRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn exists(&self, id: i64) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM memberships WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }
}

#[async_trait]
impl MembershipRepository for PgMembershipRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Membership>> {
        let result = sqlx::query_as::<_, MembershipModel>(&format!(
            "SELECT {MEMBERSHIP_COLUMNS} FROM memberships WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Membership::from))
    }

    #[instrument(skip(self))]
    async fn find_active(&self, clan_id: i64, player_id: i64) -> RepoResult<Option<Membership>> {
        let result = sqlx::query_as::<_, MembershipModel>(&format!(
            r#"
            SELECT {MEMBERSHIP_COLUMNS}
            FROM memberships
            WHERE clan_id = $1 AND player_id = $2 AND deleted_at IS NULL AND denied = FALSE
            "#
        ))
        .bind(clan_id)
        .bind(player_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Membership::from))
    }

    #[instrument(skip(self))]
    async fn find_approved_by_clan(&self, clan_id: i64) -> RepoResult<Vec<Membership>> {
        let results = sqlx::query_as::<_, MembershipModel>(&format!(
            r#"
            SELECT {MEMBERSHIP_COLUMNS}
            FROM memberships
            WHERE clan_id = $1 AND approved = TRUE AND deleted_at IS NULL
            ORDER BY level DESC, id
            "#
        ))
        .bind(clan_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Membership::from).collect())
    }

    #[instrument(
        skip(self, membership),
        fields(clan_id = membership.clan_id, player_id = membership.player_id)
    )]
    async fn create(&self, membership: &Membership) -> RepoResult<Membership> {
        let model = sqlx::query_as::<_, MembershipModel>(&format!(
            r#"
            INSERT INTO memberships (
                game_id, clan_id, player_id, requestor_id, level, approved, denied,
                message, version, created_at, updated_at, deleted_at, deleted_by
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, 0, $9, $10, $11, $12)
            RETURNING {MEMBERSHIP_COLUMNS}
            "#
        ))
        .bind(&membership.game_id)
        .bind(membership.clan_id)
        .bind(membership.player_id)
        .bind(membership.requestor_id)
        .bind(membership.level)
        .bind(membership.approved)
        .bind(membership.denied)
        .bind(&membership.message)
        .bind(membership.created_at)
        .bind(membership.updated_at)
        .bind(membership.deleted_at)
        .bind(membership.deleted_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::MembershipAlreadyExists))?;

        Ok(model.into())
    }

    #[instrument(
        skip(self, membership),
        fields(membership_id = membership.id, version = membership.version)
    )]
    async fn update(&self, membership: &Membership) -> RepoResult<Membership> {
        let result = sqlx::query_as::<_, MembershipModel>(&format!(
            r#"
            UPDATE memberships
            SET requestor_id = $3,
                level = $4,
                approved = $5,
                denied = $6,
                message = $7,
                updated_at = $8,
                deleted_at = $9,
                deleted_by = $10,
                version = version + 1
            WHERE id = $1 AND version = $2
            RETURNING {MEMBERSHIP_COLUMNS}
            "#
        ))
        .bind(membership.id)
        .bind(membership.version)
        .bind(membership.requestor_id)
        .bind(membership.level)
        .bind(membership.approved)
        .bind(membership.denied)
        .bind(&membership.message)
        .bind(membership.updated_at)
        .bind(membership.deleted_at)
        .bind(membership.deleted_by)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::MembershipAlreadyExists))?;

        match result {
            Some(model) => Ok(model.into()),
            None if self.exists(membership.id).await? => Err(DomainError::ConcurrentModification(
                format!("membership {}", membership.id),
            )),
            None => Err(DomainError::MembershipNotFound(membership.id.to_string())),
        }
    }
}
