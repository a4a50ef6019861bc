//! Card system.
//!
//! ## Key Types
//!
//! - `Card`: Capability set shared by every card (play, effect, owner)
//! - `MagicCard`: Named card played to the magic zone
//! - `MonsterCard`: Attack/defense card with a battle position
//! - `AnyCard`: Tagged union stored by the mat's zones

pub mod card;
pub mod magic;
pub mod monster;

pub use card::{AnyCard, Card};
pub use magic::MagicCard;
pub use monster::{CardPosition, MonsterCard};
