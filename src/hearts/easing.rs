//! Timing curves for heart animations

/// Linear curve
pub fn linear(t: f32) -> f32 {
    t.clamp(0.0, 1.0)
}

/// Ease-out (cubic): fast start, gentle landing
pub fn ease_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Fraction of `duration` covered by `elapsed`, clamped to [0, 1]
///
/// A zero duration counts as already finished.
pub fn progress(elapsed: std::time::Duration, duration: std::time::Duration) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f32() / duration.as_secs_f32()).clamp(0.0, 1.0)
}
