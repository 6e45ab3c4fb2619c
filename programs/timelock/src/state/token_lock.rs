use anchor_lang::prelude::*;
use std::result::Result;

use crate::constants::LOCK_SEED;
use crate::error::TimelockError;
use crate::utils::schedule::{self, ReleasePlan, Schedule};
use crate::utils::time;

/// One phased allocation (PDA `[b"token_lock", mint, beneficiary, lock_id]`).
/// A beneficiary may hold several locks on the same mint under different ids.
#[account]
#[derive(Debug)]
pub struct TokenLock {
    /// Receiver of every release.
    pub beneficiary: Pubkey,
    /// Token mint locked by this account.
    pub mint: Pubkey,
    /// Signer that created the lock.
    pub factory: Pubkey,
    /// Caller-chosen id distinguishing locks of one beneficiary and mint.
    pub lock_id: u64,
    /// Total tokens released over the whole schedule.
    pub total_allocation: u64,
    /// Tokens released so far (monotonic).
    pub released_amount: u64,
    /// Schedule origin (Unix seconds, UTC).
    pub start_ts: i64,
    /// Cursor of the next unreleased phase (monotonic).
    pub next_release_idx: u8,
    pub bump: u8,
    pub vault_bump: u8,
    /// Seconds from `start_ts` at which each phase unlocks.
    pub lock_durations: Vec<u64>,
    /// Percent of `total_allocation` unlocked by each phase.
    pub release_percents: Vec<u8>,
    /// Recorded unlock date per phase; 0 until the phase is released.
    pub release_dates: Vec<i64>,
}

impl TokenLock {
    pub const FIXED_SIZE: usize =
        32 + // beneficiary
        32 + // mint
        32 + // factory
        8 +  // lock_id
        8 +  // total_allocation
        8 +  // released_amount
        8 +  // start_ts
        1 +  // next_release_idx
        1 +  // bump
        1 +  // vault_bump
        4 +  // lock_durations vec header
        4 +  // release_percents vec header
        4;   // release_dates vec header

    /// Account space (discriminator included) for a schedule of `phases` entries.
    pub const fn space(phases: usize) -> usize {
        8 + Self::FIXED_SIZE + phases * (8 + 1 + 8)
    }

    /// Program address of the lock for (`mint`, `beneficiary`, `lock_id`).
    pub fn address(mint: &Pubkey, beneficiary: &Pubkey, lock_id: u64) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[
                LOCK_SEED,
                mint.as_ref(),
                beneficiary.as_ref(),
                &lock_id.to_le_bytes(),
            ],
            &crate::ID,
        )
    }

    pub fn schedule(&self) -> Schedule<'_> {
        Schedule {
            start_ts: self.start_ts,
            lock_durations: &self.lock_durations,
            release_percents: &self.release_percents,
        }
    }

    pub fn phase_count(&self) -> usize {
        self.lock_durations.len()
    }

    pub fn is_fully_released(&self) -> bool {
        self.next_release_idx as usize >= self.phase_count()
    }

    /// Works out what `release` would do at `now_ts` against a vault holding
    /// `vault_balance`. Fails without touching state.
    pub fn plan_release(
        &self,
        now_ts: i64,
        vault_balance: u64,
    ) -> Result<ReleasePlan, TimelockError> {
        let plan = schedule::plan_release(
            &self.schedule(),
            self.next_release_idx as usize,
            self.total_allocation,
            self.released_amount,
            now_ts,
        )?;
        if vault_balance < plan.amount {
            return Err(TimelockError::InsufficientBalance);
        }
        Ok(plan)
    }

    /// Like `plan_release` but ignores the vault balance and maps "nothing
    /// due yet" and "schedule exhausted" to `None`.
    pub fn releasable_at(&self, now_ts: i64) -> Result<Option<ReleasePlan>, TimelockError> {
        match self.plan_release(now_ts, u64::MAX) {
            Ok(plan) => Ok(Some(plan)),
            Err(TimelockError::NextPhaseUnavailable | TimelockError::AllPhasesReleased) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Unlock date of the next unreleased phase.
    pub fn next_release_ts(&self) -> Result<Option<i64>, TimelockError> {
        if self.is_fully_released() {
            return Ok(None);
        }
        let idx = self.next_release_idx as usize;
        time::phase_due_ts(self.start_ts, self.lock_durations[idx]).map(Some)
    }

    /// Records a plan produced by `plan_release` on this same state.
    pub fn apply_release(&mut self, plan: &ReleasePlan) -> Result<(), TimelockError> {
        for idx in plan.from_index as usize..=plan.to_index as usize {
            self.release_dates[idx] = time::phase_due_ts(self.start_ts, self.lock_durations[idx])?;
        }
        self.released_amount = self
            .released_amount
            .checked_add(plan.amount)
            .ok_or(TimelockError::MathOverflow)?;
        self.next_release_idx = plan.next_index();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::time::days_to_seconds;

    const START: i64 = 1_651_231_656;

    fn lock(total: u64, durations_days: &[u64], percents: &[u8]) -> TokenLock {
        TokenLock {
            beneficiary: Pubkey::new_from_array([1; 32]),
            mint: Pubkey::new_from_array([2; 32]),
            factory: Pubkey::new_from_array([3; 32]),
            lock_id: 0,
            total_allocation: total,
            released_amount: 0,
            start_ts: START,
            next_release_idx: 0,
            bump: 255,
            vault_bump: 254,
            lock_durations: durations_days.iter().map(|d| days_to_seconds(*d)).collect(),
            release_percents: percents.to_vec(),
            release_dates: vec![0; percents.len()],
        }
    }

    fn day(d: i64) -> i64 {
        START + d * 86_400
    }

    /// Mirrors the handler: plan, move tokens, apply.
    fn release(l: &mut TokenLock, vault: &mut u64, now: i64) -> Result<ReleasePlan, TimelockError> {
        let plan = l.plan_release(now, *vault)?;
        *vault -= plan.amount;
        l.apply_release(&plan)?;
        Ok(plan)
    }

    #[test]
    fn space_covers_largest_schedule() {
        assert_eq!(TokenLock::space(0), 8 + TokenLock::FIXED_SIZE);
        assert_eq!(TokenLock::space(5) - TokenLock::space(4), 17);
    }

    #[test]
    fn lock_ids_separate_allocations_of_one_beneficiary() {
        let mint = Pubkey::new_from_array([2; 32]);
        let treasury = Pubkey::new_from_array([1; 32]);
        let (community, _) = TokenLock::address(&mint, &treasury, 0);
        let (reserve, _) = TokenLock::address(&mint, &treasury, 1);
        assert_ne!(community, reserve);
        assert_eq!(TokenLock::address(&mint, &treasury, 1).0, reserve);
    }

    #[test]
    fn one_day_then_remaining_phases() {
        let mut l = lock(100, &[1, 2, 3, 4, 5], &[20, 20, 10, 25, 25]);
        let mut vault = 100;

        let first = release(&mut l, &mut vault, day(1)).unwrap();
        assert_eq!(first.amount, 20);
        assert_eq!(l.released_amount, 20);
        assert_eq!(l.next_release_idx, 1);

        let rest = release(&mut l, &mut vault, day(5)).unwrap();
        assert_eq!(rest.amount, 80);
        assert_eq!((rest.from_index, rest.to_index), (1, 4));
        assert_eq!(l.released_amount, 100);
        assert_eq!(vault, 0);
        assert!(l.is_fully_released());
    }

    #[test]
    fn release_dates_follow_schedule_not_call_time() {
        let mut l = lock(100, &[1, 2, 3, 4, 5], &[20, 20, 10, 25, 25]);
        let mut vault = 100;

        release(&mut l, &mut vault, day(1) + 30).unwrap();
        assert_eq!(l.release_dates[0], day(1));
        assert_eq!(&l.release_dates[1..], &[0, 0, 0, 0]);

        release(&mut l, &mut vault, day(5) + 30).unwrap();
        assert_eq!(l.release_dates, vec![day(1), day(2), day(3), day(4), day(5)]);
    }

    #[test]
    fn phase_by_phase_matches_single_release() {
        let mut stepped = lock(1_000_003, &[1, 2, 3, 4, 5], &[20, 20, 10, 25, 25]);
        let mut vault = 1_000_003;
        for d in 1..=5 {
            release(&mut stepped, &mut vault, day(d)).unwrap();
        }

        let mut once = lock(1_000_003, &[1, 2, 3, 4, 5], &[20, 20, 10, 25, 25]);
        let mut vault_once = 1_000_003;
        release(&mut once, &mut vault_once, day(10)).unwrap();

        assert_eq!(stepped.released_amount, 1_000_003);
        assert_eq!(once.released_amount, 1_000_003);
        assert_eq!(vault, 0);
        assert_eq!(vault_once, 0);
    }

    #[test]
    fn second_call_without_time_advance_fails() {
        let mut l = lock(100, &[1, 2, 3, 4, 5], &[20, 20, 10, 25, 25]);
        let mut vault = 100;

        assert!(matches!(
            release(&mut l, &mut vault, day(0)),
            Err(TimelockError::NextPhaseUnavailable)
        ));

        release(&mut l, &mut vault, day(1)).unwrap();
        assert!(matches!(
            release(&mut l, &mut vault, day(1)),
            Err(TimelockError::NextPhaseUnavailable)
        ));
        assert_eq!(vault, 80);

        release(&mut l, &mut vault, day(4)).unwrap();
        assert_eq!(l.next_release_idx, 4);
        assert!(matches!(
            release(&mut l, &mut vault, day(4)),
            Err(TimelockError::NextPhaseUnavailable)
        ));

        release(&mut l, &mut vault, day(5)).unwrap();
        assert!(matches!(
            release(&mut l, &mut vault, day(5)),
            Err(TimelockError::AllPhasesReleased)
        ));
        assert_eq!(l.released_amount, 100);
    }

    #[test]
    fn insufficient_balance_leaves_state_untouched() {
        let mut l = lock(100, &[1, 2, 3, 4, 5], &[20, 20, 10, 25, 25]);
        let mut vault = 50;

        assert!(matches!(
            release(&mut l, &mut vault, day(5)),
            Err(TimelockError::InsufficientBalance)
        ));
        assert_eq!(l.released_amount, 0);
        assert_eq!(l.next_release_idx, 0);
        assert_eq!(l.release_dates, vec![0; 5]);
        assert_eq!(vault, 50);

        // Funding the shortfall makes the same call succeed.
        vault += 50;
        let plan = release(&mut l, &mut vault, day(5)).unwrap();
        assert_eq!(plan.amount, 100);
    }

    #[test]
    fn quote_tracks_progress() {
        let mut l = lock(100, &[1, 2, 3], &[30, 30, 40]);
        assert!(l.releasable_at(day(0)).unwrap().is_none());
        assert_eq!(l.next_release_ts().unwrap(), Some(day(1)));

        let quote = l.releasable_at(day(2)).unwrap().unwrap();
        assert_eq!(quote.amount, 60);

        let mut vault = 100;
        release(&mut l, &mut vault, day(3)).unwrap();
        assert!(l.releasable_at(day(3)).unwrap().is_none());
        assert_eq!(l.next_release_ts().unwrap(), None);
    }

    #[test]
    fn plan_does_not_mutate() {
        let l = lock(100, &[1, 2], &[40, 60]);
        let plan = l.plan_release(day(2), 100).unwrap();
        assert_eq!(plan.amount, 100);
        assert_eq!(l.released_amount, 0);
        assert_eq!(l.next_release_idx, 0);
    }
}
