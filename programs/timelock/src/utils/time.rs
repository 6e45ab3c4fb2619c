//! Phase eligibility in Unix seconds.
//! - due_k = start_ts + lock_durations[k]
//! - phase k is eligible once now >= due_k (inclusive)

use crate::constants::SECONDS_PER_DAY;
use crate::error::TimelockError;

pub const fn days_to_seconds(days: u64) -> u64 {
    days * SECONDS_PER_DAY
}

/// Timestamp at which a phase with `duration` seconds from `start_ts` unlocks.
pub fn phase_due_ts(start_ts: i64, duration: u64) -> Result<i64, TimelockError> {
    let duration = i64::try_from(duration).map_err(|_| TimelockError::InvalidTimestamp)?;
    start_ts
        .checked_add(duration)
        .ok_or(TimelockError::MathOverflow)
}

pub fn is_phase_due(now_ts: i64, start_ts: i64, duration: u64) -> Result<bool, TimelockError> {
    Ok(now_ts >= phase_due_ts(start_ts, duration)?)
}
