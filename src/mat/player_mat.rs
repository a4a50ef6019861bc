//! Player mat: a monster zone and a magic zone.
//!
//! The mat exposes two flavours of mutation:
//! - `add_*` / `remove_*`: never fail. A full zone or a missing card turns
//!   the call into a no-op, logged at debug level.
//! - `try_*`: same effect, but the rejection comes back as a `MatError`.
//!
//! Zones are only readable from outside (`&[AnyCard]`), so the capacity
//! checks here are the only way cards get in.

use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;
use serde::{Deserialize, Serialize};

use crate::cards::{AnyCard, CardPosition};
use crate::core::{MatConfig, MatError};
use crate::zones::{Zone, ZoneKind};

/// A player's mat.
///
/// Two mats are equal when both zones hold equal cards in the same order.
///
/// ## Example
///
/// ```
/// use king_mat::{CardPosition, MagicCard, MonsterCard, PlayerMat};
///
/// let mut mat = PlayerMat::new();
/// for _ in 0..6 {
///     mat.add_monster_card(MonsterCard::new(1000, 1000, CardPosition::Attack));
/// }
/// assert_eq!(mat.monster_zone().len(), 5);
///
/// mat.add_magic_card(MagicCard::new("X"));
/// mat.remove_magic_card(MagicCard::new("X"));
/// assert!(mat.magic_zone().is_empty());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "PlayerMatRepr")]
pub struct PlayerMat {
    monster_zone: Zone,
    magic_zone: Zone,
}

/// Unchecked serde form of a `PlayerMat`.
#[derive(Deserialize)]
struct PlayerMatRepr {
    monster_zone: Zone,
    magic_zone: Zone,
}

impl TryFrom<PlayerMatRepr> for PlayerMat {
    type Error = MatError;

    fn try_from(repr: PlayerMatRepr) -> Result<Self, Self::Error> {
        for (zone, expected) in [
            (&repr.monster_zone, ZoneKind::Monster),
            (&repr.magic_zone, ZoneKind::Magic),
        ] {
            if zone.kind() != expected {
                return Err(MatError::InvalidConfig(format!(
                    "{} zone slot holds a {} zone",
                    expected,
                    zone.kind()
                )));
            }
        }
        Ok(Self {
            monster_zone: repr.monster_zone,
            magic_zone: repr.magic_zone,
        })
    }
}

impl Default for PlayerMat {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerMat {
    /// Create an empty mat with the default zone capacities.
    #[must_use]
    pub fn new() -> Self {
        Self::from_valid_config(&MatConfig::default())
    }

    /// Create an empty mat with custom zone capacities.
    pub fn with_config(config: MatConfig) -> Result<Self, MatError> {
        config.validate()?;
        Ok(Self::from_valid_config(&config))
    }

    fn from_valid_config(config: &MatConfig) -> Self {
        Self {
            monster_zone: Zone::new(ZoneKind::Monster, config.monster_zone.max_cards),
            magic_zone: Zone::new(ZoneKind::Magic, config.magic_zone.max_cards),
        }
    }

    // === Queries ===

    /// Cards in the monster zone, in the order they were added.
    #[must_use]
    pub fn monster_zone(&self) -> &[AnyCard] {
        self.monster_zone.as_slice()
    }

    /// Cards in the magic zone, in the order they were added.
    #[must_use]
    pub fn magic_zone(&self) -> &[AnyCard] {
        self.magic_zone.as_slice()
    }

    #[must_use]
    pub fn zone(&self, kind: ZoneKind) -> &Zone {
        match kind {
            ZoneKind::Monster => &self.monster_zone,
            ZoneKind::Magic => &self.magic_zone,
        }
    }

    fn zone_mut(&mut self, kind: ZoneKind) -> &mut Zone {
        match kind {
            ZoneKind::Monster => &mut self.monster_zone,
            ZoneKind::Magic => &mut self.magic_zone,
        }
    }

    /// Total cards across both zones.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.monster_zone.len() + self.magic_zone.len()
    }

    /// Deterministic hash of the mat contents.
    ///
    /// Unlike `Hash` with `DefaultHasher`, the value is stable across runs.
    #[must_use]
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = FxHasher::default();
        self.hash(&mut hasher);
        hasher.finish()
    }

    // === Signalling mutation ===

    /// Add a card to the monster zone, or report `ZoneFull`.
    pub fn try_add_monster_card(&mut self, card: impl Into<AnyCard>) -> Result<(), MatError> {
        self.try_add(ZoneKind::Monster, card.into())
    }

    /// Add a card to the magic zone, or report `ZoneFull`.
    pub fn try_add_magic_card(&mut self, card: impl Into<AnyCard>) -> Result<(), MatError> {
        self.try_add(ZoneKind::Magic, card.into())
    }

    /// Remove the first magic-zone card equal to `card`.
    pub fn try_remove_magic_card(&mut self, card: impl Into<AnyCard>) -> Result<AnyCard, MatError> {
        self.try_remove(ZoneKind::Magic, &card.into())
    }

    /// Remove the first monster-zone card equal to `card`.
    pub fn try_remove_monster_card(&mut self, card: impl Into<AnyCard>) -> Result<AnyCard, MatError> {
        self.try_remove(ZoneKind::Monster, &card.into())
    }

    fn try_add(&mut self, kind: ZoneKind, card: AnyCard) -> Result<(), MatError> {
        tracing::trace!(zone = %kind, card = %card, "placing card");
        self.zone_mut(kind).try_push(card)
    }

    fn try_remove(&mut self, kind: ZoneKind, card: &AnyCard) -> Result<AnyCard, MatError> {
        self.zone_mut(kind)
            .remove_first(card)
            .ok_or(MatError::CardNotFound { zone: kind })
    }

    // === Silent mutation ===

    /// Add a card to the monster zone. Ignored when the zone is full.
    pub fn add_monster_card(&mut self, card: impl Into<AnyCard>) {
        if let Err(err) = self.try_add_monster_card(card) {
            tracing::debug!(%err, "monster card rejected");
        }
    }

    /// Add a card to the magic zone. Ignored when the zone is full.
    pub fn add_magic_card(&mut self, card: impl Into<AnyCard>) {
        if let Err(err) = self.try_add_magic_card(card) {
            tracing::debug!(%err, "magic card rejected");
        }
    }

    /// Remove the first magic-zone card equal to `card`, if any.
    pub fn remove_magic_card(&mut self, card: impl Into<AnyCard>) {
        if let Err(err) = self.try_remove_magic_card(card) {
            tracing::debug!(%err, "magic card not removed");
        }
    }

    /// Remove the first monster-zone card equal to `card`, if any.
    pub fn remove_monster_card(&mut self, card: impl Into<AnyCard>) {
        if let Err(err) = self.try_remove_monster_card(card) {
            tracing::debug!(%err, "monster card not removed");
        }
    }

    // === Monster state ===

    /// Flip the battle position of the monster at `index`.
    ///
    /// Returns the new position, or `None` if there is no monster there.
    pub fn switch_monster_position(&mut self, index: usize) -> Option<CardPosition> {
        let monster = self.monster_zone.get_mut(index)?.as_monster_mut()?;
        Some(monster.switch_position())
    }

    /// Remove every card from both zones, monsters first.
    pub fn clear(&mut self) -> Vec<AnyCard> {
        let mut removed = self.monster_zone.clear();
        removed.extend(self.magic_zone.clear());
        removed
    }
}
