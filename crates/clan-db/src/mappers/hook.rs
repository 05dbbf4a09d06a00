//! Hook entity <-> model mapper

use clan_core::entities::Hook;
use clan_core::error::DomainError;
use clan_core::value_objects::HookEventType;

use crate::models::HookModel;

impl TryFrom<HookModel> for Hook {
    type Error = DomainError;

    fn try_from(model: HookModel) -> Result<Self, Self::Error> {
        Ok(Hook {
            id: model.id,
            game_id: model.game_id,
            public_id: model.public_id,
            event_type: HookEventType::from_code(model.event_type)?,
            url: model.url,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
