//! Easing for the circle's radius motion.

/// Smoothstep: `3t^2 - 2t^3`.
///
/// Maps linear progress to an S-curve with zero slope at both endpoints, so
/// the circle neither snaps into motion at a phase boundary nor slams to a
/// stop at the other end. Input outside `[0, 1]` is clamped.
pub fn ease(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}
