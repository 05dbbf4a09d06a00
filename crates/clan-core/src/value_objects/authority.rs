//! Authority - a requestor's standing inside a clan

use crate::entities::{Clan, Membership};

/// What a player is allowed to do in a clan, derived from ownership and
/// their approved membership
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Authority {
    /// The clan owner passes every level check
    Owner,
    /// Approved, non-deleted member
    Member { level: i32 },
    /// No approved membership (absent, pending, denied or removed)
    Outsider,
}

impl Authority {
    /// Resolve the authority of `player_id` given its active membership in `clan`
    pub fn resolve(clan: &Clan, player_id: i64, membership: Option<&Membership>) -> Self {
        if clan.is_owner(player_id) {
            return Self::Owner;
        }
        match membership {
            Some(m) if m.player_id == player_id && m.clan_id == clan.id && m.is_approved() => {
                Self::Member { level: m.level }
            }
            _ => Self::Outsider,
        }
    }

    /// `level >= required`
    pub fn meets_level(&self, required: i32) -> bool {
        match self {
            Self::Owner => true,
            Self::Member { level } => *level >= required,
            Self::Outsider => false,
        }
    }

    /// `level - target_level >= offset`
    pub fn exceeds_by(&self, target_level: i32, offset: i32) -> bool {
        match self {
            Self::Owner => true,
            Self::Member { level } => i64::from(*level) - i64::from(target_level) >= i64::from(offset),
            Self::Outsider => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn clan() -> Clan {
        let mut clan = Clan::new("g".into(), "c".into(), "C".into(), 1, json!({}));
        clan.id = 100;
        clan
    }

    #[test]
    fn test_owner_resolution() {
        assert_eq!(Authority::resolve(&clan(), 1, None), Authority::Owner);
    }

    #[test]
    fn test_member_resolution_requires_approval() {
        let mut membership = Membership::new_application("g".into(), 100, 2, 4, None);
        assert_eq!(
            Authority::resolve(&clan(), 2, Some(&membership)),
            Authority::Outsider
        );

        membership.approve(1).unwrap();
        assert_eq!(
            Authority::resolve(&clan(), 2, Some(&membership)),
            Authority::Member { level: 4 }
        );
    }

    #[test]
    fn test_membership_of_other_clan_is_ignored() {
        let mut membership = Membership::new_application("g".into(), 999, 2, 4, None);
        membership.approve(1).unwrap();
        assert_eq!(
            Authority::resolve(&clan(), 2, Some(&membership)),
            Authority::Outsider
        );
    }

    #[test]
    fn test_meets_level_is_inclusive() {
        let member = Authority::Member { level: 5 };
        assert!(member.meets_level(5));
        assert!(member.meets_level(4));
        assert!(!member.meets_level(6));
        assert!(Authority::Owner.meets_level(i32::MAX));
        assert!(!Authority::Outsider.meets_level(i32::MIN));
    }

    #[test]
    fn test_exceeds_by_is_inclusive() {
        let member = Authority::Member { level: 5 };
        assert!(member.exceeds_by(3, 2));
        assert!(!member.exceeds_by(4, 2));
        assert!(!Authority::Outsider.exceeds_by(0, 0));
    }
}
