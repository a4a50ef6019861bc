//! The `Card` capability set and the `AnyCard` tagged union.
//!
//! Every card can be played onto a mat, activate its effect and report its
//! owner. Zones store cards as `AnyCard` so a single sequence can hold either
//! variant; the enum tag keeps a magic card from ever equalling a monster.

use serde::{Deserialize, Serialize};

use super::magic::MagicCard;
use super::monster::MonsterCard;
use crate::core::PlayerId;
use crate::mat::PlayerMat;

/// Operations shared by all cards.
pub trait Card {
    /// Play this card to its corresponding zone on `mat`.
    ///
    /// Never fails from the card's side. A full zone silently drops the card.
    fn play_to(self, mat: &mut PlayerMat);

    /// Activate this card's effect.
    ///
    /// Effects are resolved outside this crate; this is only the hook.
    fn use_effect(&self);

    /// The player who owns this card, if any has claimed it.
    fn owner(&self) -> Option<PlayerId>;

    /// Assign (or clear) the owning player.
    fn set_owner(&mut self, owner: Option<PlayerId>);
}

/// Either kind of card.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnyCard {
    Magic(MagicCard),
    Monster(MonsterCard),
}

impl AnyCard {
    #[must_use]
    pub fn is_magic(&self) -> bool {
        matches!(self, AnyCard::Magic(_))
    }

    #[must_use]
    pub fn is_monster(&self) -> bool {
        matches!(self, AnyCard::Monster(_))
    }

    #[must_use]
    pub fn as_magic(&self) -> Option<&MagicCard> {
        match self {
            AnyCard::Magic(card) => Some(card),
            AnyCard::Monster(_) => None,
        }
    }

    #[must_use]
    pub fn as_monster(&self) -> Option<&MonsterCard> {
        match self {
            AnyCard::Monster(card) => Some(card),
            AnyCard::Magic(_) => None,
        }
    }

    pub fn as_monster_mut(&mut self) -> Option<&mut MonsterCard> {
        match self {
            AnyCard::Monster(card) => Some(card),
            AnyCard::Magic(_) => None,
        }
    }
}

impl From<MagicCard> for AnyCard {
    fn from(card: MagicCard) -> Self {
        AnyCard::Magic(card)
    }
}

impl From<MonsterCard> for AnyCard {
    fn from(card: MonsterCard) -> Self {
        AnyCard::Monster(card)
    }
}

impl std::fmt::Display for AnyCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnyCard::Magic(card) => std::fmt::Display::fmt(card, f),
            AnyCard::Monster(card) => std::fmt::Display::fmt(card, f),
        }
    }
}

impl Card for AnyCard {
    fn play_to(self, mat: &mut PlayerMat) {
        match self {
            AnyCard::Magic(card) => card.play_to(mat),
            AnyCard::Monster(card) => card.play_to(mat),
        }
    }

    fn use_effect(&self) {
        match self {
            AnyCard::Magic(card) => card.use_effect(),
            AnyCard::Monster(card) => card.use_effect(),
        }
    }

    fn owner(&self) -> Option<PlayerId> {
        match self {
            AnyCard::Magic(card) => card.owner(),
            AnyCard::Monster(card) => card.owner(),
        }
    }

    fn set_owner(&mut self, owner: Option<PlayerId>) {
        match self {
            AnyCard::Magic(card) => card.set_owner(owner),
            AnyCard::Monster(card) => card.set_owner(owner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardPosition;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_variants_never_equal() {
        let magic: AnyCard = MagicCard::new("1000").into();
        let monster: AnyCard = MonsterCard::new(1000, 1000, CardPosition::Attack).into();
        assert_ne!(magic, monster);
        assert_ne!(hash_of(&magic), hash_of(&monster));
    }

    #[test]
    fn test_wrapped_equality_matches_inner() {
        let a: AnyCard = MagicCard::new("Test card").into();
        let b: AnyCard = MagicCard::new("Test card").with_owner(PlayerId::new(3)).into();
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn test_play_to_routes_by_variant() {
        let mut mat = PlayerMat::new();
        AnyCard::from(MagicCard::new("Mirror Force")).play_to(&mut mat);
        AnyCard::from(MonsterCard::new(1200, 800, CardPosition::Defense)).play_to(&mut mat);

        assert_eq!(mat.magic_zone().len(), 1);
        assert_eq!(mat.monster_zone().len(), 1);
        assert!(mat.magic_zone()[0].is_magic());
        assert!(mat.monster_zone()[0].is_monster());
    }

    #[test]
    fn test_owner_delegation() {
        let mut card: AnyCard = MonsterCard::new(500, 500, CardPosition::Attack).into();
        assert_eq!(card.owner(), None);
        card.set_owner(Some(PlayerId::new(2)));
        assert_eq!(card.owner(), Some(PlayerId::new(2)));
        assert_eq!(card.as_monster().and_then(|m| m.owner()), Some(PlayerId::new(2)));
    }

    #[test]
    fn test_accessors() {
        let mut card: AnyCard = MonsterCard::new(500, 500, CardPosition::Attack).into();
        assert!(card.as_magic().is_none());
        if let Some(monster) = card.as_monster_mut() {
            monster.switch_position();
        }
        assert_eq!(
            card.as_monster().map(|m| m.position),
            Some(CardPosition::Defense)
        );
    }

    #[test]
    fn test_use_effect_is_noop() {
        let card: AnyCard = MagicCard::new("Pot of Greed").into();
        let before = card.clone();
        card.use_effect();
        assert_eq!(card, before);
    }

    #[test]
    fn test_card_serialization() {
        let card: AnyCard = MonsterCard::new(1000, 1000, CardPosition::Attack)
            .with_owner(PlayerId::new(0))
            .into();
        let json = serde_json::to_string(&card).unwrap();
        let deserialized: AnyCard = serde_json::from_str(&json).unwrap();
        assert_eq!(card, deserialized);
        assert_eq!(deserialized.owner(), Some(PlayerId::new(0)));
    }
}
