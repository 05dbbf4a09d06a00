//! Entity lookups shared by the services
//!
//! Every lookup turns a missing row into the matching `*NotFound` error.

use clan_core::entities::{Clan, Game, Player};
use clan_core::error::DomainError;
use clan_core::value_objects::Authority;

use super::context::ServiceContext;
use super::error::ServiceResult;

pub(crate) async fn game(ctx: &ServiceContext, public_id: &str) -> ServiceResult<Game> {
    ctx.game_repo()
        .find_by_public_id(public_id)
        .await?
        .ok_or_else(|| DomainError::GameNotFound(public_id.to_string()).into())
}

pub(crate) async fn player(
    ctx: &ServiceContext,
    game_id: &str,
    public_id: &str,
) -> ServiceResult<Player> {
    ctx.player_repo()
        .find_by_public_id(game_id, public_id)
        .await?
        .ok_or_else(|| DomainError::PlayerNotFound(public_id.to_string()).into())
}

pub(crate) async fn player_by_id(ctx: &ServiceContext, id: i64) -> ServiceResult<Player> {
    ctx.player_repo()
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::PlayerNotFound(id.to_string()).into())
}

pub(crate) async fn clan(ctx: &ServiceContext, game_id: &str, public_id: &str) -> ServiceResult<Clan> {
    ctx.clan_repo()
        .find_by_public_id(game_id, public_id)
        .await?
        .ok_or_else(|| DomainError::ClanNotFound(public_id.to_string()).into())
}

pub(crate) async fn clan_by_id(ctx: &ServiceContext, id: i64) -> ServiceResult<Clan> {
    ctx.clan_repo()
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::ClanNotFound(id.to_string()).into())
}

/// Standing of `player` in `clan`
pub(crate) async fn authority(
    ctx: &ServiceContext,
    clan: &Clan,
    player: &Player,
) -> ServiceResult<Authority> {
    if clan.is_owner(player.id) {
        return Ok(Authority::Owner);
    }
    let membership = ctx.membership_repo().find_active(clan.id, player.id).await?;
    Ok(Authority::resolve(clan, player.id, membership.as_ref()))
}
