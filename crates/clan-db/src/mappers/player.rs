//! Player entity <-> model mapper

use clan_core::entities::Player;

use crate::models::PlayerModel;

impl From<PlayerModel> for Player {
    fn from(model: PlayerModel) -> Self {
        Player {
            id: model.id,
            game_id: model.game_id,
            public_id: model.public_id,
            name: model.name,
            metadata: model.metadata,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
