//! Events emitted by the simulation for the audio collaborator.
//!
//! Fire-and-forget: collected per tick, delivered in the snapshot, no
//! return value and no failure visible to the core.

use serde::{Deserialize, Serialize};

/// Sound identifiers the audio collaborator knows how to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoundId {
    EngineRoar,
    PulseFire,
    TorpedoFire,
    MissileFire,
    ShieldHit,
    HullHit,
    Explosion,
    WaveChime,
}

/// Audio notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioEvent {
    Play { sound: SoundId },
    Fade { sound: SoundId },
}
