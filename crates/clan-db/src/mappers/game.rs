//! Game entity <-> model mapper

use clan_core::entities::{Game, GameSettings};

use crate::models::GameModel;

impl From<GameModel> for Game {
    fn from(model: GameModel) -> Self {
        Game {
            id: model.id,
            public_id: model.public_id,
            name: model.name,
            settings: GameSettings {
                min_membership_level: model.min_membership_level,
                max_membership_level: model.max_membership_level,
                min_level_to_accept_application: model.min_level_to_accept_application,
                min_level_to_create_invitation: model.min_level_to_create_invitation,
                min_level_offset_to_promote_member: model.min_level_offset_to_promote_member,
                min_level_offset_to_demote_member: model.min_level_offset_to_demote_member,
                allow_application: model.allow_application,
            },
            metadata: model.metadata,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
