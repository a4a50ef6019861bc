//! Magic cards.
//!
//! A magic card is identified by its name alone: two cards named
//! "Pot of Greed" are interchangeable, whoever owns them.

use serde::{Deserialize, Serialize};

use super::card::Card;
use crate::core::PlayerId;
use crate::mat::PlayerMat;

/// Hash discriminator for magic cards.
const MAGIC_TAG: u8 = 0;

/// A named magic card.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MagicCard {
    pub name: String,

    /// `None` until a player claims the card. Not part of equality.
    #[serde(default)]
    owner: Option<PlayerId>,
}

impl MagicCard {
    /// Create an unowned magic card.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            owner: None,
        }
    }

    /// Set the owner (builder pattern).
    #[must_use]
    pub fn with_owner(mut self, owner: PlayerId) -> Self {
        self.owner = Some(owner);
        self
    }
}

impl PartialEq for MagicCard {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for MagicCard {}

impl std::hash::Hash for MagicCard {
    fn hash<H: std::hash::Hasher>(&self, hasher: &mut H) {
        MAGIC_TAG.hash(hasher);
        self.name.hash(hasher);
    }
}

impl std::fmt::Display for MagicCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Magic({})", self.name)
    }
}

impl Card for MagicCard {
    fn play_to(self, mat: &mut PlayerMat) {
        mat.add_magic_card(self);
    }

    fn use_effect(&self) {
        tracing::trace!(card = %self, "magic effect activated");
    }

    fn owner(&self) -> Option<PlayerId> {
        self.owner
    }

    fn set_owner(&mut self, owner: Option<PlayerId>) {
        self.owner = owner;
    }
}
