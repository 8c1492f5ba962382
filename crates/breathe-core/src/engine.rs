//! The phase cycle engine.
//!
//! One session is a loop over the four phases in fixed order. Each phase is
//! a frame loop: poll input, account for pause, check the session deadline,
//! compute the eased radius, hand one frame to the renderer, sleep to the
//! next frame boundary. Single-threaded and cooperative -- the only
//! suspension point is the pacing sleep, bounded by one frame period.
//!
//! The engine owns every piece of mutable session state (pause flag, sound
//! gate, current radius, deadline, journal). The terminal, keyboard, and
//! bell are traits it calls out to; it treats all three as infallible.

use std::time::Duration;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::clock::{Clock, SessionClock};
use crate::ease::ease;
use crate::events::Event;
use crate::phase::{Phase, PhaseStyle};
use crate::session::SessionConfig;

/// Render ticks per second. A design constant, not user-configurable.
pub const FRAME_RATE: u32 = 60;

/// Radius of the fully exhaled circle, in cells.
pub const MIN_RADIUS: f32 = 4.0;
/// Radius of the fully inhaled circle, in cells.
pub const MAX_RADIUS: f32 = 16.0;

/// One idle tick while paused. Coarser than a frame -- a paused session
/// only needs to notice keystrokes, not animate.
const PAUSE_TICK: Duration = Duration::from_millis(20);

/// A keystroke the engine reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// Abort the whole session, not just the current phase.
    Quit,
    /// Flip the pause state without consuming a frame.
    PauseToggle,
}

/// Non-blocking input poll. Must not stall the frame cadence.
pub trait InputSource {
    fn poll(&mut self) -> Option<Signal>;
}

/// Receives one full-frame redraw per rendered frame.
pub trait FrameSink {
    fn render(&mut self, frame: &Frame<'_>);
}

/// End-of-phase audio cue. Fire and forget; implementations swallow their
/// own failures.
pub trait Chime {
    fn notify(&mut self);
}

/// Everything the renderer needs for one redraw. Centering coordinates are
/// the renderer's business -- it owns the terminal surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame<'a> {
    pub phase: Phase,
    pub style: PhaseStyle,
    pub label: &'static str,
    pub radius: f32,
    /// Whole seconds left in the current phase.
    pub seconds_remaining: u64,
    pub mode_name: &'a str,
    pub total_seconds: u64,
    /// The four configured durations in cycle order.
    pub durations: (u64, u64, u64, u64),
}

/// How a single phase run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseOutcome {
    /// The frame budget ran out; the phase played in full.
    Completed,
    /// The session deadline passed mid-phase.
    TimedOut,
    /// The user quit.
    Cancelled,
}

/// Why the session loop exited. Both variants are normal termination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndReason {
    TimedOut,
    Cancelled,
}

/// Whether pausing stops the session countdown too.
///
/// Phase timing is always pause-compensated (frames freeze while paused);
/// this policy decides what pausing does to the session total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeadlinePolicy {
    /// Idle ticks push the session deadline forward; paused time never
    /// counts against the total.
    #[default]
    ExtendOnPause,
    /// The deadline is immovable; a long pause can consume the session.
    Fixed,
}

/// What a finished session looks like from the outside.
#[derive(Debug, Clone)]
pub struct SessionReport {
    pub reason: EndReason,
    pub cycles_completed: u64,
    pub phases_completed: u64,
    pub paused_total: Duration,
    pub events: Vec<Event>,
}

/// The four-phase state machine and its frame loop.
pub struct SessionEngine<C, R, I, N> {
    config: SessionConfig,
    policy: DeadlinePolicy,
    sound_on: bool,
    clock: C,
    renderer: R,
    input: I,
    chime: N,
    paused: bool,
    radius: f32,
    paused_total: Duration,
    events: Vec<Event>,
}

impl<C, R, I, N> SessionEngine<C, R, I, N>
where
    C: Clock,
    R: FrameSink,
    I: InputSource,
    N: Chime,
{
    pub fn new(config: SessionConfig, clock: C, renderer: R, input: I, chime: N) -> Self {
        Self {
            config,
            policy: DeadlinePolicy::default(),
            sound_on: true,
            clock,
            renderer,
            input,
            chime,
            paused: false,
            radius: MIN_RADIUS,
            paused_total: Duration::ZERO,
            events: Vec::new(),
        }
    }

    pub fn with_policy(mut self, policy: DeadlinePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_sound(mut self, on: bool) -> Self {
        self.sound_on = on;
        self
    }

    // ── Session loop ─────────────────────────────────────────────────

    /// Run the session to completion and report how it went.
    ///
    /// The loop walks the four phases in fixed order until the session
    /// deadline passes or the user quits. Both are normal termination.
    pub fn run(mut self) -> SessionReport {
        self.events.push(Event::SessionStarted {
            mode: self.config.mode_name.clone(),
            total_seconds: self.config.total_seconds,
            at: Utc::now(),
        });

        let mut session = SessionClock::starting_at(self.clock.now(), self.config.total_seconds);
        let mut cycles_completed = 0;
        let mut phases_completed = 0;

        let reason = 'session: loop {
            if session.expired(self.clock.now()) {
                break EndReason::TimedOut;
            }
            // A cycle with no positive phase would spin without advancing
            // the clock. Resolution rejects such configs; refuse them here
            // as well.
            if self.config.cycle_seconds() == 0 {
                break EndReason::TimedOut;
            }
            for phase in Phase::CYCLE {
                let seconds = self.config.duration_of(phase);
                match self.run_phase(phase, seconds, &mut session) {
                    PhaseOutcome::Completed => phases_completed += 1,
                    PhaseOutcome::TimedOut => break 'session EndReason::TimedOut,
                    PhaseOutcome::Cancelled => break 'session EndReason::Cancelled,
                }
            }
            cycles_completed += 1;
        };

        self.events.push(Event::SessionEnded {
            reason,
            cycles_completed,
            at: Utc::now(),
        });

        SessionReport {
            reason,
            cycles_completed,
            phases_completed,
            paused_total: self.paused_total,
            events: self.events,
        }
    }

    // ── Per-phase frame loop ─────────────────────────────────────────

    /// Execute one phase against its frame budget.
    ///
    /// `Cancelled` and `TimedOut` short-circuit: the caller must not move
    /// on to the next phase in the cycle.
    fn run_phase(
        &mut self,
        phase: Phase,
        seconds: u64,
        session: &mut SessionClock,
    ) -> PhaseOutcome {
        self.events.push(Event::PhaseStarted {
            phase,
            duration_seconds: seconds,
            at: Utc::now(),
        });

        let outcome = self.drive_frames(phase, seconds, session);

        if outcome == PhaseOutcome::Completed && self.sound_on {
            self.chime.notify();
        }
        self.events.push(Event::PhaseEnded {
            phase,
            outcome,
            at: Utc::now(),
        });
        outcome
    }

    fn drive_frames(
        &mut self,
        phase: Phase,
        seconds: u64,
        session: &mut SessionClock,
    ) -> PhaseOutcome {
        let frames_total = seconds.saturating_mul(u64::from(FRAME_RATE));
        let period = Duration::from_secs(1) / FRAME_RATE;
        let mut frame_index: u64 = 0;
        let mut next_frame = self.clock.now() + period;

        while frame_index < frames_total {
            match self.input.poll() {
                Some(Signal::Quit) => return PhaseOutcome::Cancelled,
                Some(Signal::PauseToggle) => self.toggle_pause(),
                None => {}
            }

            if self.paused {
                self.idle_tick(session);
                // Resumed frames pace from the resume point; paused frames
                // are frozen, not owed.
                next_frame = self.clock.now() + period;
                continue;
            }

            if session.expired(self.clock.now()) {
                return PhaseOutcome::TimedOut;
            }

            let t = progress(frame_index, frames_total);
            self.radius = match phase {
                Phase::Inhale => MIN_RADIUS + ease(t) * (MAX_RADIUS - MIN_RADIUS),
                Phase::Exhale => MAX_RADIUS - ease(t) * (MAX_RADIUS - MIN_RADIUS),
                // Holds keep the radius the preceding phase arrived at.
                Phase::HoldIn | Phase::HoldOut => self.radius,
            };

            let frame = Frame {
                phase,
                style: phase.style(),
                label: phase.label(),
                radius: self.radius,
                seconds_remaining: seconds - frame_index / u64::from(FRAME_RATE),
                mode_name: &self.config.mode_name,
                total_seconds: self.config.total_seconds,
                durations: self.config.durations(),
            };
            self.renderer.render(&frame);

            frame_index += 1;

            let now = self.clock.now();
            if next_frame > now {
                self.clock.sleep(next_frame - now);
                next_frame += period;
            } else {
                // The render overran the frame; pace from here rather than
                // back-filling missed frames.
                next_frame = now + period;
            }
        }

        PhaseOutcome::Completed
    }

    fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        if self.paused {
            self.events.push(Event::SessionPaused { at: Utc::now() });
        } else {
            self.events.push(Event::SessionResumed {
                paused_ms: self.paused_total.as_millis() as u64,
                at: Utc::now(),
            });
        }
    }

    /// One low-cost tick while paused: sleep coarsely, then push the
    /// deadline forward by the time that actually passed, so paused time is
    /// excluded from the phase's effective duration.
    fn idle_tick(&mut self, session: &mut SessionClock) {
        let before = self.clock.now();
        self.clock.sleep(PAUSE_TICK);
        let idle = self.clock.now().saturating_duration_since(before);
        self.paused_total += idle;
        if self.policy == DeadlinePolicy::ExtendOnPause {
            session.extend(idle);
        }
    }
}

/// Normalized progress through a frame budget. A single-frame phase has
/// nowhere to travel.
fn progress(frame_index: u64, frames_total: u64) -> f32 {
    if frames_total <= 1 {
        return 0.0;
    }
    frame_index as f32 / (frames_total - 1) as f32
}
