//! Errors reported by the signalling (`try_*`) mat API.

use thiserror::Error;

use crate::zones::ZoneKind;

/// Why a mat operation did not take effect.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatError {
    #[error("{zone} zone is full ({capacity} cards)")]
    ZoneFull { zone: ZoneKind, capacity: usize },
    #[error("no matching card in {zone} zone")]
    CardNotFound { zone: ZoneKind },
    #[error("invalid mat configuration: {0}")]
    InvalidConfig(String),
}
