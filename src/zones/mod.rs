//! Zone system for card locations.
//!
//! A mat has two zones, one per `ZoneKind`. Each is a `Zone`: an ordered,
//! capacity-bounded sequence of cards.
//!
//! ## Key Types
//!
//! - `ZoneKind`: Which zone of the mat (monster or magic)
//! - `Zone`: Bounded card storage with value-based lookup

pub mod zone;

pub use zone::{Zone, ZoneKind};
