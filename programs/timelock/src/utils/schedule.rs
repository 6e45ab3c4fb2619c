//! Release schedule math, kept free of account types so it runs off-chain.

use anchor_lang::prelude::Pubkey;

use crate::constants::{MAX_PHASES, PERCENT_DENOMINATOR};
use crate::error::TimelockError;
use crate::utils::time;

/// Borrowed view of a lock's schedule.
#[derive(Clone, Copy, Debug)]
pub struct Schedule<'a> {
    pub start_ts: i64,
    pub lock_durations: &'a [u64],
    pub release_percents: &'a [u8],
}

/// Outcome of a successful eligibility scan; nothing is mutated until applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReleasePlan {
    /// First phase released by this call.
    pub from_index: u8,
    /// Last phase released by this call (inclusive).
    pub to_index: u8,
    /// Sum of the percents of the phases in `from_index..=to_index`.
    pub percent: u8,
    /// Tokens to transfer.
    pub amount: u64,
    /// Unlock date of `to_index`.
    pub release_date: i64,
}

impl ReleasePlan {
    pub fn next_index(&self) -> u8 {
        self.to_index + 1
    }

    pub fn phase_count(&self) -> u8 {
        self.to_index - self.from_index + 1
    }
}

/// Eager validation performed once at lock creation.
pub fn validate_schedule(
    lock_durations: &[u64],
    release_percents: &[u8],
) -> Result<(), TimelockError> {
    if lock_durations.len() != release_percents.len() {
        return Err(TimelockError::UnlockLengthMismatch);
    }
    if lock_durations.len() > MAX_PHASES {
        return Err(TimelockError::TooManyPhases);
    }
    let total: u64 = release_percents.iter().map(|p| *p as u64).sum();
    if total != PERCENT_DENOMINATOR {
        return Err(TimelockError::UnlockPercentMismatch);
    }
    Ok(())
}

/// Every check `initialize_lock` runs before storing anything.
pub fn validate_lock(
    beneficiary: &Pubkey,
    mint: &Pubkey,
    total_allocation: u64,
    lock_durations: &[u64],
    release_percents: &[u8],
    start_ts: i64,
) -> Result<(), TimelockError> {
    if *beneficiary == Pubkey::default() {
        return Err(TimelockError::ZeroBeneficiary);
    }
    if *mint == Pubkey::default() {
        return Err(TimelockError::ZeroToken);
    }
    if total_allocation == 0 {
        return Err(TimelockError::ZeroAllocation);
    }
    validate_schedule(lock_durations, release_percents)?;
    // Every unlock date must be representable.
    for duration in lock_durations.iter() {
        time::phase_due_ts(start_ts, *duration)?;
    }
    Ok(())
}

/// Cumulative amount owed once phases `0..=last_index` are released.
/// The final phase always settles to exactly `total_allocation`.
pub fn cumulative_target(
    total_allocation: u64,
    release_percents: &[u8],
    last_index: usize,
) -> Result<u64, TimelockError> {
    if last_index + 1 >= release_percents.len() {
        return Ok(total_allocation);
    }
    let pct: u128 = release_percents[..=last_index]
        .iter()
        .map(|p| *p as u128)
        .sum();
    let v = (total_allocation as u128)
        .checked_mul(pct)
        .ok_or(TimelockError::MathOverflow)?
        / PERCENT_DENOMINATOR as u128;
    u64::try_from(v).map_err(|_| TimelockError::MathOverflow)
}

/// Scans forward from `next_index` and collects every phase whose unlock
/// date has passed at `now_ts`.
pub fn plan_release(
    schedule: &Schedule<'_>,
    next_index: usize,
    total_allocation: u64,
    released_amount: u64,
    now_ts: i64,
) -> Result<ReleasePlan, TimelockError> {
    let count = schedule.lock_durations.len();
    if next_index >= count {
        return Err(TimelockError::AllPhasesReleased);
    }
    if !time::is_phase_due(now_ts, schedule.start_ts, schedule.lock_durations[next_index])? {
        return Err(TimelockError::NextPhaseUnavailable);
    }

    let mut to_index = next_index;
    let mut percent = schedule.release_percents[next_index];
    while to_index + 1 < count
        && time::is_phase_due(now_ts, schedule.start_ts, schedule.lock_durations[to_index + 1])?
    {
        to_index += 1;
        percent = percent
            .checked_add(schedule.release_percents[to_index])
            .ok_or(TimelockError::MathOverflow)?;
    }

    let target = cumulative_target(total_allocation, schedule.release_percents, to_index)?;
    let amount = target
        .checked_sub(released_amount)
        .ok_or(TimelockError::MathOverflow)?;
    let release_date = time::phase_due_ts(schedule.start_ts, schedule.lock_durations[to_index])?;

    Ok(ReleasePlan {
        from_index: u8::try_from(next_index).map_err(|_| TimelockError::MathOverflow)?,
        to_index: u8::try_from(to_index).map_err(|_| TimelockError::MathOverflow)?,
        percent,
        amount,
        release_date,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::time::days_to_seconds;

    const START: i64 = 1_700_000_000;

    fn days(d: &[u64]) -> Vec<u64> {
        d.iter().map(|d| days_to_seconds(*d)).collect()
    }

    fn at_day(d: i64) -> i64 {
        START + d * 86_400
    }

    #[test]
    fn validation_rejects_length_mismatch() {
        let err = validate_schedule(&days(&[1, 2, 3, 4, 5]), &[20, 20, 20, 20]).unwrap_err();
        assert!(matches!(err, TimelockError::UnlockLengthMismatch));
    }

    #[test]
    fn validation_rejects_percent_sum() {
        let err = validate_schedule(&days(&[1, 2, 3, 4, 5]), &[20, 20, 20, 20, 10]).unwrap_err();
        assert!(matches!(err, TimelockError::UnlockPercentMismatch));

        let err = validate_schedule(&[], &[]).unwrap_err();
        assert!(matches!(err, TimelockError::UnlockPercentMismatch));
    }

    #[test]
    fn validation_rejects_oversized_schedule() {
        let durations = vec![1u64; MAX_PHASES + 1];
        let mut percents = vec![0u8; MAX_PHASES + 1];
        percents[0] = 100;
        let err = validate_schedule(&durations, &percents).unwrap_err();
        assert!(matches!(err, TimelockError::TooManyPhases));
    }

    #[test]
    fn validation_accepts_full_schedule() {
        validate_schedule(&days(&[1, 2, 3, 4, 5]), &[20, 20, 10, 25, 25]).unwrap();
    }

    const BENEFICIARY: Pubkey = Pubkey::new_from_array([1; 32]);
    const MINT: Pubkey = Pubkey::new_from_array([2; 32]);

    #[test]
    fn lock_rejects_zero_beneficiary() {
        let err = validate_lock(&Pubkey::default(), &MINT, 10, &days(&[1]), &[100], START)
            .unwrap_err();
        assert!(matches!(err, TimelockError::ZeroBeneficiary));
    }

    #[test]
    fn lock_rejects_zero_token() {
        let err = validate_lock(&BENEFICIARY, &Pubkey::default(), 10, &days(&[1]), &[100], START)
            .unwrap_err();
        assert!(matches!(err, TimelockError::ZeroToken));
    }

    #[test]
    fn lock_rejects_zero_allocation() {
        let err = validate_lock(&BENEFICIARY, &MINT, 0, &days(&[1]), &[100], START).unwrap_err();
        assert!(matches!(err, TimelockError::ZeroAllocation));
    }

    #[test]
    fn lock_rejects_unrepresentable_unlock_date() {
        let err = validate_lock(&BENEFICIARY, &MINT, 10, &[1, 2], &[50, 50], i64::MAX - 1)
            .unwrap_err();
        assert!(matches!(err, TimelockError::MathOverflow));

        let err = validate_lock(&BENEFICIARY, &MINT, 10, &[u64::MAX], &[100], START).unwrap_err();
        assert!(matches!(err, TimelockError::InvalidTimestamp));
    }

    #[test]
    fn lock_runs_schedule_checks() {
        let err = validate_lock(&BENEFICIARY, &MINT, 10, &days(&[1, 2]), &[100], START)
            .unwrap_err();
        assert!(matches!(err, TimelockError::UnlockLengthMismatch));

        validate_lock(&BENEFICIARY, &MINT, 10, &days(&[1, 2]), &[40, 60], START).unwrap();
    }

    #[test]
    fn nothing_due_before_first_cliff() {
        let durations = days(&[1, 2, 3, 4, 5]);
        let s = Schedule {
            start_ts: START,
            lock_durations: &durations,
            release_percents: &[20, 20, 10, 25, 25],
        };
        let err = plan_release(&s, 0, 100, 0, at_day(1) - 1).unwrap_err();
        assert!(matches!(err, TimelockError::NextPhaseUnavailable));
    }

    #[test]
    fn releases_single_phase_at_boundary() {
        let durations = days(&[1, 2, 3, 4, 5]);
        let s = Schedule {
            start_ts: START,
            lock_durations: &durations,
            release_percents: &[20, 20, 10, 25, 25],
        };
        let plan = plan_release(&s, 0, 100, 0, at_day(1)).unwrap();
        assert_eq!(plan.from_index, 0);
        assert_eq!(plan.to_index, 0);
        assert_eq!(plan.next_index(), 1);
        assert_eq!(plan.percent, 20);
        assert_eq!(plan.amount, 20);
        assert_eq!(plan.release_date, at_day(1));
    }

    #[test]
    fn releases_skipped_phases_in_bulk() {
        let durations = days(&[1, 2, 3, 4, 5]);
        let s = Schedule {
            start_ts: START,
            lock_durations: &durations,
            release_percents: &[20, 20, 10, 25, 25],
        };
        let plan = plan_release(&s, 1, 100, 20, at_day(5)).unwrap();
        assert_eq!((plan.from_index, plan.to_index), (1, 4));
        assert_eq!(plan.phase_count(), 4);
        assert_eq!(plan.percent, 80);
        assert_eq!(plan.amount, 80);
        assert_eq!(plan.release_date, at_day(5));
    }

    #[test]
    fn exhausted_schedule_reports_all_released() {
        let durations = days(&[1, 2]);
        let s = Schedule {
            start_ts: START,
            lock_durations: &durations,
            release_percents: &[50, 50],
        };
        let err = plan_release(&s, 2, 100, 100, at_day(10)).unwrap_err();
        assert!(matches!(err, TimelockError::AllPhasesReleased));
    }

    #[test]
    fn final_phase_settles_rounding_dust() {
        let durations = days(&[1, 2, 3, 4]);
        let percents = [25u8, 25, 25, 25];
        let s = Schedule {
            start_ts: START,
            lock_durations: &durations,
            release_percents: &percents,
        };
        // 10 * 25 / 100 floors to 2 per phase; the last phase picks up the rest.
        let mut released = 0u64;
        for (i, day) in [1i64, 2, 3].iter().enumerate() {
            let plan = plan_release(&s, i, 10, released, at_day(*day)).unwrap();
            released += plan.amount;
        }
        assert_eq!(released, 7);
        let last = plan_release(&s, 3, 10, released, at_day(4)).unwrap();
        assert_eq!(last.amount, 3);
        assert_eq!(released + last.amount, 10);
    }

    #[test]
    fn zero_percent_phase_releases_nothing() {
        let durations = days(&[180, 210]);
        let s = Schedule {
            start_ts: START,
            lock_durations: &durations,
            release_percents: &[0, 100],
        };
        let plan = plan_release(&s, 0, 1_000, 0, at_day(180)).unwrap();
        assert_eq!(plan.amount, 0);
        assert_eq!(plan.next_index(), 1);
    }

    #[test]
    fn cumulative_target_large_allocation() {
        let total = 1_900_000_000u64 * 1_000_000_000;
        let target = cumulative_target(total, &[0, 5, 5, 90], 2).unwrap();
        assert_eq!(target, total / 10);
    }
}
