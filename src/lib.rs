//! # king-mat
//!
//! Card and player-mat data model for a monster/magic card game.
//!
//! ## Design Principles
//!
//! 1. **Value Equality**: Cards compare by their attributes, never by
//!    identity. Two `MagicCard`s named "X" are the same card.
//!
//! 2. **Bounded Zones**: A mat has a monster zone and a magic zone, each
//!    holding at most `MAX_ZONE_CARDS` cards unless configured otherwise.
//!
//! 3. **Quiet by Default**: `add_*`/`remove_*` never fail. Rejected moves
//!    are logged and ignored. The `try_*` family reports them as `MatError`.
//!
//! ## Modules
//!
//! - `core`: Player IDs, players, mat configuration, errors
//! - `cards`: The `Card` trait and the magic/monster variants
//! - `zones`: Bounded ordered card zones
//! - `mat`: The player mat

pub mod core;
pub mod cards;
pub mod zones;
pub mod mat;

// Re-export commonly used types
pub use crate::core::{
    MatConfig, MatError, Player, PlayerId, ZoneConfig, MAX_ZONE_CARDS,
};

pub use crate::cards::{AnyCard, Card, CardPosition, MagicCard, MonsterCard};

pub use crate::zones::{Zone, ZoneKind};

pub use crate::mat::PlayerMat;
