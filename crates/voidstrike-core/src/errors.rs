//! Error taxonomy for the simulation core.
//!
//! Nothing here is globally fatal: spawn errors abort that spawn call only,
//! and weapon-selection misses are recovered by no-op at the call site.

use thiserror::Error;

use crate::enums::WeaponKind;

/// Spawn request rejected before an entity was created.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpawnError {
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },
}

/// Weapon loadout operation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WeaponError {
    #[error("weapon {kind:?} is not present in the loadout")]
    NotFound { kind: WeaponKind },
}
