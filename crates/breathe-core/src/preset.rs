//! Named breathing patterns.

/// A named, fixed set of the four phase durations, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub name: &'static str,
    pub inhale: u64,
    pub hold_in: u64,
    pub exhale: u64,
    pub hold_out: u64,
}

/// The built-in patterns. Static, never mutated at runtime.
pub const PRESETS: [Preset; 7] = [
    Preset { name: "box", inhale: 4, hold_in: 4, exhale: 4, hold_out: 4 },
    Preset { name: "478", inhale: 4, hold_in: 7, exhale: 8, hold_out: 0 },
    Preset { name: "relax", inhale: 5, hold_in: 2, exhale: 7, hold_out: 3 },
    Preset { name: "focus", inhale: 4, hold_in: 0, exhale: 6, hold_out: 0 },
    Preset { name: "calm", inhale: 6, hold_in: 2, exhale: 8, hold_out: 2 },
    Preset { name: "sleep", inhale: 4, hold_in: 7, exhale: 8, hold_out: 0 },
    Preset { name: "energize", inhale: 3, hold_in: 0, exhale: 3, hold_out: 0 },
];

/// Look up a preset by name.
pub fn find(name: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|p| p.name == name)
}
