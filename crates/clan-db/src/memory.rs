//! In-memory entity store
//!
//! Implements every repository trait over a single `parking_lot::Mutex`, so
//! each call is atomic with respect to every other. It enforces the same
//! store constraints as the PostgreSQL schema: public id length, per-game
//! uniqueness, one active membership per (clan, player), and
//! compare-and-swap membership updates.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use clan_core::entities::{Clan, Game, Hook, Membership, Player};
use clan_core::error::DomainError;
use clan_core::traits::{
    ClanRepository, GameRepository, HookRepository, MembershipRepository, PlayerRepository,
    RepoResult,
};
use clan_core::value_objects::{HookEventType, MAX_PUBLIC_ID_LEN};

/// Stored length of names
const MAX_NAME_LEN: usize = 2000;

/// One table: rows keyed by store-assigned id
#[derive(Debug)]
struct Table<T> {
    rows: BTreeMap<i64, T>,
    next_id: i64,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl<T> Table<T> {
    fn insert(&mut self, build: impl FnOnce(i64) -> T) -> &T {
        let id = self.next_id;
        self.next_id += 1;
        self.rows.entry(id).or_insert_with(|| build(id))
    }
}

#[derive(Debug, Default)]
struct Tables {
    games: Table<Game>,
    players: Table<Player>,
    clans: Table<Clan>,
    memberships: Table<Membership>,
    hooks: Table<Hook>,
}

/// Shared in-memory store; clones share the same tables
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn check_len(column: &str, value: &str, max: usize) -> RepoResult<()> {
    if value.chars().count() > max {
        return Err(DomainError::ConstraintViolation(format!(
            "value too long for {column} (max {max})"
        )));
    }
    Ok(())
}

fn duplicate(table: &str, public_id: &str) -> DomainError {
    DomainError::ConstraintViolation(format!("duplicate {table} public id: {public_id}"))
}

// ============================================================================
// Games
// ============================================================================

#[async_trait]
impl GameRepository for MemoryStore {
    async fn find_by_public_id(&self, public_id: &str) -> RepoResult<Option<Game>> {
        let tables = self.tables.lock();
        Ok(tables
            .games
            .rows
            .values()
            .find(|g| g.public_id == public_id)
            .cloned())
    }

    async fn create(&self, game: &Game) -> RepoResult<Game> {
        check_len("games.public_id", &game.public_id, MAX_PUBLIC_ID_LEN)?;
        check_len("games.name", &game.name, MAX_NAME_LEN)?;

        let mut tables = self.tables.lock();
        if tables.games.rows.values().any(|g| g.public_id == game.public_id) {
            return Err(duplicate("game", &game.public_id));
        }
        Ok(tables
            .games
            .insert(|id| Game {
                id,
                ..game.clone()
            })
            .clone())
    }

    async fn update(&self, game: &Game) -> RepoResult<()> {
        check_len("games.name", &game.name, MAX_NAME_LEN)?;

        let mut tables = self.tables.lock();
        let stored = tables
            .games
            .rows
            .get_mut(&game.id)
            .ok_or_else(|| DomainError::GameNotFound(game.public_id.clone()))?;
        *stored = Game {
            public_id: stored.public_id.clone(),
            created_at: stored.created_at,
            ..game.clone()
        };
        Ok(())
    }
}

// ============================================================================
// Players
// ============================================================================

#[async_trait]
impl PlayerRepository for MemoryStore {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Player>> {
        Ok(self.tables.lock().players.rows.get(&id).cloned())
    }

    async fn find_by_public_id(&self, game_id: &str, public_id: &str) -> RepoResult<Option<Player>> {
        let tables = self.tables.lock();
        Ok(tables
            .players
            .rows
            .values()
            .find(|p| p.game_id == game_id && p.public_id == public_id)
            .cloned())
    }

    async fn create(&self, player: &Player) -> RepoResult<Player> {
        check_len("players.public_id", &player.public_id, MAX_PUBLIC_ID_LEN)?;
        check_len("players.name", &player.name, MAX_NAME_LEN)?;

        let mut tables = self.tables.lock();
        let taken = tables
            .players
            .rows
            .values()
            .any(|p| p.game_id == player.game_id && p.public_id == player.public_id);
        if taken {
            return Err(duplicate("player", &player.public_id));
        }
        Ok(tables
            .players
            .insert(|id| Player {
                id,
                ..player.clone()
            })
            .clone())
    }

    async fn update(&self, player: &Player) -> RepoResult<()> {
        check_len("players.name", &player.name, MAX_NAME_LEN)?;

        let mut tables = self.tables.lock();
        let stored = tables
            .players
            .rows
            .get_mut(&player.id)
            .ok_or_else(|| DomainError::PlayerNotFound(player.public_id.clone()))?;
        stored.name.clone_from(&player.name);
        stored.metadata = player.metadata.clone();
        stored.updated_at = player.updated_at;
        Ok(())
    }
}

// ============================================================================
// Clans
// ============================================================================

#[async_trait]
impl ClanRepository for MemoryStore {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Clan>> {
        Ok(self.tables.lock().clans.rows.get(&id).cloned())
    }

    async fn find_by_public_id(&self, game_id: &str, public_id: &str) -> RepoResult<Option<Clan>> {
        let tables = self.tables.lock();
        Ok(tables
            .clans
            .rows
            .values()
            .find(|c| c.game_id == game_id && c.public_id == public_id)
            .cloned())
    }

    async fn create(&self, clan: &Clan) -> RepoResult<Clan> {
        check_len("clans.public_id", &clan.public_id, MAX_PUBLIC_ID_LEN)?;
        check_len("clans.name", &clan.name, MAX_NAME_LEN)?;

        let mut tables = self.tables.lock();
        let taken = tables
            .clans
            .rows
            .values()
            .any(|c| c.game_id == clan.game_id && c.public_id == clan.public_id);
        if taken {
            return Err(duplicate("clan", &clan.public_id));
        }
        if !tables.players.rows.contains_key(&clan.owner_id) {
            return Err(DomainError::ConstraintViolation(format!(
                "clans.owner_id references missing player {}",
                clan.owner_id
            )));
        }
        Ok(tables
            .clans
            .insert(|id| Clan {
                id,
                ..clan.clone()
            })
            .clone())
    }

    async fn update(&self, clan: &Clan) -> RepoResult<()> {
        check_len("clans.name", &clan.name, MAX_NAME_LEN)?;

        let mut tables = self.tables.lock();
        let stored = tables
            .clans
            .rows
            .get_mut(&clan.id)
            .ok_or_else(|| DomainError::ClanNotFound(clan.public_id.clone()))?;
        stored.name.clone_from(&clan.name);
        stored.metadata = clan.metadata.clone();
        stored.updated_at = clan.updated_at;
        Ok(())
    }
}

// ============================================================================
// Memberships
// ============================================================================

#[async_trait]
impl MembershipRepository for MemoryStore {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Membership>> {
        Ok(self.tables.lock().memberships.rows.get(&id).cloned())
    }

    async fn find_active(&self, clan_id: i64, player_id: i64) -> RepoResult<Option<Membership>> {
        let tables = self.tables.lock();
        Ok(tables
            .memberships
            .rows
            .values()
            .find(|m| m.clan_id == clan_id && m.player_id == player_id && m.is_active())
            .cloned())
    }

    async fn find_approved_by_clan(&self, clan_id: i64) -> RepoResult<Vec<Membership>> {
        let tables = self.tables.lock();
        let mut members: Vec<Membership> = tables
            .memberships
            .rows
            .values()
            .filter(|m| m.clan_id == clan_id && m.is_approved())
            .cloned()
            .collect();
        // level desc, then insertion order
        members.sort_by(|a, b| b.level.cmp(&a.level).then(a.id.cmp(&b.id)));
        Ok(members)
    }

    async fn create(&self, membership: &Membership) -> RepoResult<Membership> {
        let mut tables = self.tables.lock();
        if membership.is_active() {
            let taken = tables.memberships.rows.values().any(|m| {
                m.clan_id == membership.clan_id && m.player_id == membership.player_id && m.is_active()
            });
            if taken {
                return Err(DomainError::MembershipAlreadyExists);
            }
        }
        Ok(tables
            .memberships
            .insert(|id| Membership {
                id,
                version: 0,
                ..membership.clone()
            })
            .clone())
    }

    async fn update(&self, membership: &Membership) -> RepoResult<Membership> {
        let mut tables = self.tables.lock();
        let stored = tables
            .memberships
            .rows
            .get_mut(&membership.id)
            .ok_or_else(|| DomainError::MembershipNotFound(membership.id.to_string()))?;
        if stored.version != membership.version {
            return Err(DomainError::ConcurrentModification(format!(
                "membership {}",
                membership.id
            )));
        }
        *stored = Membership {
            version: stored.version + 1,
            game_id: stored.game_id.clone(),
            clan_id: stored.clan_id,
            player_id: stored.player_id,
            created_at: stored.created_at,
            ..membership.clone()
        };
        Ok(stored.clone())
    }
}

// ============================================================================
// Hooks
// ============================================================================

#[async_trait]
impl HookRepository for MemoryStore {
    async fn find_by_game_and_type(
        &self,
        game_id: &str,
        event_type: HookEventType,
    ) -> RepoResult<Vec<Hook>> {
        let tables = self.tables.lock();
        Ok(tables
            .hooks
            .rows
            .values()
            .filter(|h| h.game_id == game_id && h.event_type == event_type)
            .cloned()
            .collect())
    }

    async fn find_by_game(&self, game_id: &str) -> RepoResult<Vec<Hook>> {
        let tables = self.tables.lock();
        let mut hooks: Vec<Hook> = tables
            .hooks
            .rows
            .values()
            .filter(|h| h.game_id == game_id)
            .cloned()
            .collect();
        hooks.sort_by_key(|h| (h.event_type.code(), h.id));
        Ok(hooks)
    }

    async fn create(&self, hook: &Hook) -> RepoResult<Hook> {
        check_len("hooks.public_id", &hook.public_id, MAX_PUBLIC_ID_LEN)?;

        let mut tables = self.tables.lock();
        let taken = tables
            .hooks
            .rows
            .values()
            .any(|h| h.game_id == hook.game_id && h.public_id == hook.public_id);
        if taken {
            return Err(duplicate("hook", &hook.public_id));
        }
        Ok(tables
            .hooks
            .insert(|id| Hook {
                id,
                ..hook.clone()
            })
            .clone())
    }

    async fn delete(&self, game_id: &str, public_id: &str) -> RepoResult<()> {
        let mut tables = self.tables.lock();
        let id = tables
            .hooks
            .rows
            .values()
            .find(|h| h.game_id == game_id && h.public_id == public_id)
            .map(|h| h.id)
            .ok_or_else(|| DomainError::HookNotFound(public_id.to_string()))?;
        tables.hooks.rows.remove(&id);
        Ok(())
    }
}
