use serde::{Deserialize, Serialize};

/// One stage of a breathing cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Inhale,
    HoldIn,
    Exhale,
    HoldOut,
}

/// Surface-agnostic color identity for a phase. The renderer decides what
/// each tint looks like on the actual terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tint {
    Cool,
    Deep,
    Warm,
}

/// How a phase is drawn: its tint, and whether the circle's outer edge
/// softens while the phase runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseStyle {
    pub tint: Tint,
    pub fading: bool,
}

impl Phase {
    /// The fixed execution order within one breathing cycle.
    pub const CYCLE: [Phase; 4] = [
        Phase::Inhale,
        Phase::HoldIn,
        Phase::Exhale,
        Phase::HoldOut,
    ];

    /// On-screen label. Both holds read "Hold".
    pub fn label(self) -> &'static str {
        match self {
            Phase::Inhale => "Inhale",
            Phase::HoldIn | Phase::HoldOut => "Hold",
            Phase::Exhale => "Exhale",
        }
    }

    /// Appearance lookup. Only the inhale softens its outer ring.
    pub fn style(self) -> PhaseStyle {
        match self {
            Phase::Inhale => PhaseStyle {
                tint: Tint::Cool,
                fading: true,
            },
            Phase::Exhale => PhaseStyle {
                tint: Tint::Warm,
                fading: false,
            },
            Phase::HoldIn | Phase::HoldOut => PhaseStyle {
                tint: Tint::Deep,
                fading: false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_order_is_fixed() {
        assert_eq!(
            Phase::CYCLE,
            [Phase::Inhale, Phase::HoldIn, Phase::Exhale, Phase::HoldOut]
        );
    }

    #[test]
    fn both_holds_share_a_label() {
        assert_eq!(Phase::HoldIn.label(), "Hold");
        assert_eq!(Phase::HoldOut.label(), "Hold");
    }

    #[test]
    fn only_inhale_fades() {
        for phase in Phase::CYCLE {
            assert_eq!(phase.style().fading, phase == Phase::Inhale);
        }
    }

    #[test]
    fn holds_share_a_tint() {
        assert_eq!(Phase::HoldIn.style().tint, Tint::Deep);
        assert_eq!(Phase::HoldOut.style().tint, Tint::Deep);
        assert_ne!(Phase::Inhale.style().tint, Phase::Exhale.style().tint);
    }
}
