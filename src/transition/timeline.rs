use crate::foundation::math::unit_clamp;

/// Progress at which the displayed content is swapped.
pub const SWAP_PROGRESS: f64 = 0.5;

/// `elapsed / duration`, clamped to `[0, 1]`. A clock running backwards reads as 0.
pub fn progress(elapsed: f64, duration: f64) -> f64 {
    if duration.is_nan() || duration <= 0.0 {
        return 1.0;
    }
    unit_clamp(elapsed / duration)
}

/// Symmetric ramp: 0 at both ends of the session, 1 at the midpoint, linear in between.
pub fn intensity(progress: f64) -> f64 {
    let p = unit_clamp(progress);
    if p < SWAP_PROGRESS {
        p * 2.0
    } else {
        1.0 - (p - SWAP_PROGRESS) * 2.0
    }
}
