//! Clan entity <-> model mapper

use clan_core::entities::Clan;

use crate::models::ClanModel;

impl From<ClanModel> for Clan {
    fn from(model: ClanModel) -> Self {
        Clan {
            id: model.id,
            game_id: model.game_id,
            public_id: model.public_id,
            name: model.name,
            owner_id: model.owner_id,
            metadata: model.metadata,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
