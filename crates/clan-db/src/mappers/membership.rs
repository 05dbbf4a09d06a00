//! Membership entity <-> model mapper

use clan_core::entities::Membership;

use crate::models::MembershipModel;

impl From<MembershipModel> for Membership {
    fn from(model: MembershipModel) -> Self {
        Membership {
            id: model.id,
            game_id: model.game_id,
            clan_id: model.clan_id,
            player_id: model.player_id,
            requestor_id: model.requestor_id,
            level: model.level,
            approved: model.approved,
            denied: model.denied,
            message: model.message,
            version: model.version,
            created_at: model.created_at,
            updated_at: model.updated_at,
            deleted_at: model.deleted_at,
            deleted_by: model.deleted_by,
        }
    }
}
