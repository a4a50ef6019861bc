//! Monster cards and battle positions.

use serde::{Deserialize, Serialize};

use super::card::Card;
use crate::core::PlayerId;
use crate::mat::PlayerMat;

/// Hash discriminator for monster cards.
const MONSTER_TAG: u8 = 1;

/// Battle stance of a monster on the mat.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardPosition {
    #[default]
    Attack,
    Defense,
}

impl CardPosition {
    /// The opposite stance.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            CardPosition::Attack => CardPosition::Defense,
            CardPosition::Defense => CardPosition::Attack,
        }
    }
}

impl std::fmt::Display for CardPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardPosition::Attack => write!(f, "Attack"),
            CardPosition::Defense => write!(f, "Defense"),
        }
    }
}

/// A monster card with attack/defense stats.
///
/// Equality covers stats and position; the owner is ignored.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MonsterCard {
    pub attack: i64,
    pub defense: i64,
    pub position: CardPosition,

    #[serde(default)]
    owner: Option<PlayerId>,
}

impl MonsterCard {
    /// Create an unowned monster card.
    #[must_use]
    pub fn new(attack: i64, defense: i64, position: CardPosition) -> Self {
        Self {
            attack,
            defense,
            position,
            owner: None,
        }
    }

    /// Set the owner (builder pattern).
    #[must_use]
    pub fn with_owner(mut self, owner: PlayerId) -> Self {
        self.owner = Some(owner);
        self
    }

    /// Flip between attack and defense position, returning the new one.
    pub fn switch_position(&mut self) -> CardPosition {
        self.position = self.position.toggled();
        self.position
    }
}

impl PartialEq for MonsterCard {
    fn eq(&self, other: &Self) -> bool {
        self.attack == other.attack
            && self.defense == other.defense
            && self.position == other.position
    }
}

impl Eq for MonsterCard {}

impl std::hash::Hash for MonsterCard {
    fn hash<H: std::hash::Hasher>(&self, hasher: &mut H) {
        MONSTER_TAG.hash(hasher);
        self.attack.hash(hasher);
        self.defense.hash(hasher);
        self.position.hash(hasher);
    }
}

impl std::fmt::Display for MonsterCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Monster({}/{}, {})", self.attack, self.defense, self.position)
    }
}

impl Card for MonsterCard {
    fn play_to(self, mat: &mut PlayerMat) {
        mat.add_monster_card(self);
    }

    fn use_effect(&self) {
        tracing::trace!(card = %self, "monster effect activated");
    }

    fn owner(&self) -> Option<PlayerId> {
        self.owner
    }

    fn set_owner(&mut self, owner: Option<PlayerId>) {
        self.owner = owner;
    }
}
