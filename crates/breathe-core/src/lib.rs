//! # Breathe Core Library
//!
//! Core logic for `breathe`, a terminal guided-breathing session player.
//!
//! The heart of the crate is the phase cycle engine: a single-threaded,
//! frame-paced state machine that turns four phase durations into a
//! sequence of rendered frames, easing a circle's radius between its
//! bounds, while a wall-clock deadline with pause compensation decides
//! when a phase -- and the whole session -- ends.
//!
//! ## Key components
//!
//! - [`SessionEngine`]: the four-phase state machine and frame loop
//! - [`SessionConfig`]: the validated durations tuple a session runs from
//! - [`AppConfig`]: TOML user configuration
//! - [`FrameSink`], [`InputSource`], [`Chime`]: collaborator traits the
//!   CLI implements over the terminal
//!
//! The engine owns all mutable session state and never spawns threads;
//! collaborators are called from the one control loop, once per frame.

pub mod clock;
pub mod config;
pub mod ease;
pub mod engine;
pub mod error;
pub mod events;
pub mod phase;
pub mod preset;
pub mod session;

pub use clock::{Clock, SessionClock, WallClock};
pub use config::AppConfig;
pub use ease::ease;
pub use engine::{
    Chime, DeadlinePolicy, EndReason, Frame, FrameSink, InputSource, PhaseOutcome, SessionEngine,
    SessionReport, Signal, FRAME_RATE, MAX_RADIUS, MIN_RADIUS,
};
pub use error::{ConfigError, CoreError, ValidationError};
pub use events::Event;
pub use phase::{Phase, PhaseStyle, Tint};
pub use preset::{Preset, PRESETS};
pub use session::SessionConfig;
