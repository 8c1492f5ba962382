use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::phase::Phase;
use crate::preset::Preset;

/// Everything the engine needs to know about one session.
///
/// Built once by the resolution layer (preset lookup, manual durations, or
/// configured defaults) and immutable from then on. Durations are unsigned,
/// so negative values are unrepresentable by construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Session length in seconds.
    pub total_seconds: u64,
    pub inhale: u64,
    pub hold_in: u64,
    pub exhale: u64,
    pub hold_out: u64,
    /// A preset name, or the literal "manual".
    pub mode_name: String,
}

impl SessionConfig {
    /// Build a manual configuration.
    ///
    /// A cycle whose four durations are all zero could never advance the
    /// clock and is rejected.
    pub fn manual(
        total_seconds: u64,
        inhale: u64,
        hold_in: u64,
        exhale: u64,
        hold_out: u64,
    ) -> Result<Self, ValidationError> {
        let config = Self {
            total_seconds,
            inhale,
            hold_in,
            exhale,
            hold_out,
            mode_name: "manual".into(),
        };
        if config.cycle_seconds() == 0 {
            return Err(ValidationError::EmptyCycle);
        }
        Ok(config)
    }

    /// Build from a preset with the caller-chosen session length.
    pub fn from_preset(preset: &Preset, total_seconds: u64) -> Self {
        Self {
            total_seconds,
            inhale: preset.inhale,
            hold_in: preset.hold_in,
            exhale: preset.exhale,
            hold_out: preset.hold_out,
            mode_name: preset.name.to_string(),
        }
    }

    /// Configured duration of one phase, in seconds.
    pub fn duration_of(&self, phase: Phase) -> u64 {
        match phase {
            Phase::Inhale => self.inhale,
            Phase::HoldIn => self.hold_in,
            Phase::Exhale => self.exhale,
            Phase::HoldOut => self.hold_out,
        }
    }

    /// Seconds in one full inhale-hold-exhale-hold cycle.
    pub fn cycle_seconds(&self) -> u64 {
        self.inhale
            .saturating_add(self.hold_in)
            .saturating_add(self.exhale)
            .saturating_add(self.hold_out)
    }

    /// The four configured durations in cycle order.
    pub fn durations(&self) -> (u64, u64, u64, u64) {
        (self.inhale, self.hold_in, self.exhale, self.hold_out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preset;

    #[test]
    fn manual_rejects_an_all_zero_cycle() {
        assert!(SessionConfig::manual(60, 0, 0, 0, 0).is_err());
    }

    #[test]
    fn manual_accepts_single_positive_phase() {
        let cfg = SessionConfig::manual(60, 0, 0, 5, 0).unwrap();
        assert_eq!(cfg.cycle_seconds(), 5);
        assert_eq!(cfg.mode_name, "manual");
    }

    #[test]
    fn from_preset_carries_name_and_durations() {
        let cfg = SessionConfig::from_preset(preset::find("box").unwrap(), 300);
        assert_eq!(cfg.mode_name, "box");
        assert_eq!(cfg.durations(), (4, 4, 4, 4));
        assert_eq!(cfg.total_seconds, 300);
    }

    #[test]
    fn duration_of_maps_each_phase() {
        let cfg = SessionConfig::manual(60, 1, 2, 3, 4).unwrap();
        assert_eq!(cfg.duration_of(Phase::Inhale), 1);
        assert_eq!(cfg.duration_of(Phase::HoldIn), 2);
        assert_eq!(cfg.duration_of(Phase::Exhale), 3);
        assert_eq!(cfg.duration_of(Phase::HoldOut), 4);
    }
}
