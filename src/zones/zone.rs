//! Bounded, ordered card zones.
//!
//! A `Zone` keeps cards in insertion order and refuses new cards once it
//! holds `capacity` of them. Cards are found and removed by value, so any
//! card equal to the one on the mat can be used to remove it.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::AnyCard;
use crate::core::{MatError, MAX_ZONE_CARDS};

/// Which zone of a mat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZoneKind {
    Monster,
    Magic,
}

impl std::fmt::Display for ZoneKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ZoneKind::Monster => write!(f, "monster"),
            ZoneKind::Magic => write!(f, "magic"),
        }
    }
}

/// Card storage sized for a default-capacity zone.
type ZoneCards = SmallVec<[AnyCard; MAX_ZONE_CARDS]>;

/// An ordered zone holding at most `capacity` cards.
///
/// Equality and hashing look only at the cards, in order.
///
/// ## Usage
///
/// ```
/// use king_mat::{MagicCard, Zone, ZoneKind};
///
/// let mut zone = Zone::new(ZoneKind::Magic, 1);
/// assert!(zone.try_push(MagicCard::new("Raigeki").into()).is_ok());
/// assert!(zone.try_push(MagicCard::new("Fissure").into()).is_err());
/// assert_eq!(zone.len(), 1);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "ZoneRepr")]
pub struct Zone {
    kind: ZoneKind,
    capacity: usize,
    cards: ZoneCards,
}

/// Unchecked serde form of a `Zone`.
#[derive(Deserialize)]
struct ZoneRepr {
    kind: ZoneKind,
    capacity: usize,
    cards: ZoneCards,
}

impl TryFrom<ZoneRepr> for Zone {
    type Error = MatError;

    fn try_from(repr: ZoneRepr) -> Result<Self, Self::Error> {
        if repr.capacity == 0 {
            return Err(MatError::InvalidConfig(format!(
                "{} zone must hold at least one card",
                repr.kind
            )));
        }
        if repr.cards.len() > repr.capacity {
            return Err(MatError::ZoneFull {
                zone: repr.kind,
                capacity: repr.capacity,
            });
        }
        Ok(Self {
            kind: repr.kind,
            capacity: repr.capacity,
            cards: repr.cards,
        })
    }
}

impl Zone {
    /// Create an empty zone.
    #[must_use]
    pub fn new(kind: ZoneKind, capacity: usize) -> Self {
        Self {
            kind,
            capacity,
            cards: SmallVec::new(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> ZoneKind {
        self.kind
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cards.len() >= self.capacity
    }

    /// Number of cards that can still be added.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.capacity.saturating_sub(self.cards.len())
    }

    /// Append a card, or report `ZoneFull` and leave the zone unchanged.
    pub fn try_push(&mut self, card: AnyCard) -> Result<(), MatError> {
        if self.is_full() {
            return Err(MatError::ZoneFull {
                zone: self.kind,
                capacity: self.capacity,
            });
        }
        self.cards.push(card);
        Ok(())
    }

    /// Index of the first card equal to `card`.
    #[must_use]
    pub fn position(&self, card: &AnyCard) -> Option<usize> {
        self.cards.iter().position(|c| c == card)
    }

    #[must_use]
    pub fn contains(&self, card: &AnyCard) -> bool {
        self.position(card).is_some()
    }

    /// Remove and return the first card equal to `card`.
    ///
    /// Later duplicates stay in place.
    pub fn remove_first(&mut self, card: &AnyCard) -> Option<AnyCard> {
        let idx = self.position(card)?;
        Some(self.cards.remove(idx))
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&AnyCard> {
        self.cards.get(index)
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut AnyCard> {
        self.cards.get_mut(index)
    }

    /// Cards in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[AnyCard] {
        &self.cards
    }

    pub fn iter(&self) -> impl Iterator<Item = &AnyCard> {
        self.cards.iter()
    }

    /// Remove every card, returning them in order.
    pub fn clear(&mut self) -> Vec<AnyCard> {
        self.cards.drain(..).collect()
    }
}

impl PartialEq for Zone {
    fn eq(&self, other: &Self) -> bool {
        self.cards == other.cards
    }
}

impl Eq for Zone {}

impl std::hash::Hash for Zone {
    fn hash<H: std::hash::Hasher>(&self, hasher: &mut H) {
        self.cards.as_slice().hash(hasher);
    }
}
