//! Timed-event scheduler driving scenario scripting.
//!
//! Events carry a closed callback enum and an explicit context payload
//! rather than capturing closures, so firing is replayable and testable.
//! Recurring events reschedule from the current tick (`now + interval`),
//! never by accumulation, so a stalled clock fires once instead of
//! producing a catch-up burst.

use voidstrike_core::enums::EnemyArchetype;

pub type EventId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventMode {
    OneShot,
    Recurring,
}

/// Capabilities an event can invoke. Dispatched by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventCallback {
    RevealPlayer,
    WaveCheck,
    SpawnEnemy,
}

/// Explicit payload handed to the callback at fire time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventContext {
    Empty,
    Spawn { archetype: EnemyArchetype },
}

#[derive(Debug, Clone)]
pub struct ScheduledEvent {
    pub id: EventId,
    pub mode: EventMode,
    pub interval_ticks: u64,
    pub next_fire_at: u64,
    pub callback: EventCallback,
    pub context: EventContext,
}

/// Owns all pending events. Event ids double as insertion sequence, which
/// breaks ties between events due at the same tick.
#[derive(Debug, Default)]
pub struct EventScheduler {
    events: Vec<ScheduledEvent>,
    next_id: EventId,
}

impl EventScheduler {
    pub fn schedule(
        &mut self,
        mode: EventMode,
        delay_ticks: u64,
        callback: EventCallback,
        context: EventContext,
        now: u64,
    ) -> EventId {
        let id = self.next_id;
        self.next_id += 1;
        self.events.push(ScheduledEvent {
            id,
            mode,
            interval_ticks: delay_ticks,
            next_fire_at: now + delay_ticks,
            callback,
            context,
        });
        id
    }

    /// Remove a pending event. Returns false if the id is unknown.
    pub fn cancel(&mut self, id: EventId) -> bool {
        let before = self.events.len();
        self.events.retain(|e| e.id != id);
        self.events.len() != before
    }

    /// Drain every event due at `now`, ordered by fire time with insertion
    /// order breaking ties. One-shots are removed; recurring events are
    /// rescheduled to `now + interval`.
    pub fn collect_due(&mut self, now: u64) -> Vec<ScheduledEvent> {
        let mut due: Vec<ScheduledEvent> = self
            .events
            .iter()
            .filter(|e| now >= e.next_fire_at)
            .cloned()
            .collect();
        due.sort_by_key(|e| (e.next_fire_at, e.id));

        self.events
            .retain(|e| !(now >= e.next_fire_at && e.mode == EventMode::OneShot));
        for event in &mut self.events {
            if now >= event.next_fire_at {
                event.next_fire_at = now + event.interval_ticks;
            }
        }

        due
    }

    pub fn pending(&self) -> usize {
        self.events.len()
    }

    pub fn contains(&self, id: EventId) -> bool {
        self.events.iter().any(|e| e.id == id)
    }
}
