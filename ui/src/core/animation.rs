//! Pure sampling functions behind the cosmetic animations. The components
//! own the timers; everything testable lives here.

/// Tick cadence for the animated counter, roughly one browser frame.
pub const FRAME_MS: u64 = 16;

/// Interval between loading-sequencer steps.
pub const STEP_INTERVAL_MS: u64 = 170;

/// Counter value at `elapsed_ms` into an ease-out quartic ramp toward
/// `target`. Clamps at the target once the duration is spent.
pub fn counter_sample(target: u64, elapsed_ms: u64, duration_ms: u64) -> u64 {
    if duration_ms == 0 {
        return target;
    }
    let progress = (elapsed_ms as f64 / duration_ms as f64).min(1.0);
    let eased = 1.0 - (1.0 - progress).powi(4);
    (target as f64 * eased).floor() as u64
}

/// Next state of the loading sequencer: `0..=icon_count`, wrapping.
pub fn next_step(step: usize, icon_count: usize) -> usize {
    (step + 1) % (icon_count + 1)
}
