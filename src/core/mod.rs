//! Core types: players, configuration, errors.

pub mod config;
pub mod error;
pub mod player;

pub use config::{MatConfig, ZoneConfig, MAX_ZONE_CARDS};
pub use error::MatError;
pub use player::{Player, PlayerId};
