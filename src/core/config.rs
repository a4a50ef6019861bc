//! Mat configuration types.
//!
//! A mat is configured by providing:
//! - `ZoneConfig`: Name and capacity of one zone
//! - `MatConfig`: The monster zone and magic zone configs together
//!
//! The default configuration is the standard 5-card monster zone and
//! 5-card magic zone.

use serde::{Deserialize, Serialize};

use super::MatError;

/// Default number of cards a zone can hold.
pub const MAX_ZONE_CARDS: usize = 5;

/// Configuration for a single zone.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneConfig {
    /// Human-readable name (for debugging/display).
    pub name: String,

    /// Maximum cards allowed.
    pub max_cards: usize,
}

impl ZoneConfig {
    /// Create a zone configuration with the default capacity.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            max_cards: MAX_ZONE_CARDS,
        }
    }

    /// Set maximum card limit.
    #[must_use]
    pub fn with_max_cards(mut self, max: usize) -> Self {
        self.max_cards = max;
        self
    }
}

/// Complete configuration of a player mat.
///
/// ## Example
///
/// ```
/// use king_mat::core::MatConfig;
///
/// let config = MatConfig::default().with_monster_capacity(3);
/// assert_eq!(config.monster_zone.max_cards, 3);
/// assert_eq!(config.magic_zone.max_cards, 5);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatConfig {
    pub monster_zone: ZoneConfig,
    pub magic_zone: ZoneConfig,
}

impl Default for MatConfig {
    fn default() -> Self {
        Self {
            monster_zone: ZoneConfig::new("Monster Zone"),
            magic_zone: ZoneConfig::new("Magic Zone"),
        }
    }
}

impl MatConfig {
    /// Set the monster zone capacity.
    #[must_use]
    pub fn with_monster_capacity(mut self, max: usize) -> Self {
        self.monster_zone.max_cards = max;
        self
    }

    /// Set the magic zone capacity.
    #[must_use]
    pub fn with_magic_capacity(mut self, max: usize) -> Self {
        self.magic_zone.max_cards = max;
        self
    }

    /// Check that every zone can hold at least one card.
    pub fn validate(&self) -> Result<(), MatError> {
        for zone in [&self.monster_zone, &self.magic_zone] {
            if zone.max_cards == 0 {
                return Err(MatError::InvalidConfig(format!(
                    "{} must hold at least one card",
                    zone.name
                )));
            }
        }
        Ok(())
    }
}
