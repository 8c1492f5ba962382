use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::engine::{EndReason, PhaseOutcome};
use crate::phase::Phase;

/// Every state change in a session produces an Event.
///
/// The engine records them in order; the CLI can dump the journal as JSON
/// once the terminal is back in cooked mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    SessionStarted {
        mode: String,
        total_seconds: u64,
        at: DateTime<Utc>,
    },
    PhaseStarted {
        phase: Phase,
        duration_seconds: u64,
        at: DateTime<Utc>,
    },
    PhaseEnded {
        phase: Phase,
        outcome: PhaseOutcome,
        at: DateTime<Utc>,
    },
    SessionPaused {
        at: DateTime<Utc>,
    },
    /// Pause lifted; carries the cumulative paused time so far.
    SessionResumed {
        paused_ms: u64,
        at: DateTime<Utc>,
    },
    SessionEnded {
        reason: EndReason,
        cycles_completed: u64,
        at: DateTime<Utc>,
    },
}
