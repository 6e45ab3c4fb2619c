//! Allocation schedules used when deploying the project's locks.
//!
//! Amounts are base units of a 9-decimal mint.

use crate::constants::SECONDS_PER_DAY;
use crate::utils::time::days_to_seconds;

const UNIT: u64 = 1_000_000_000;

pub const ECOSYSTEM_ALLOCATION: u64 = 2_000_000_000 * UNIT;
pub const FOUNDING_TEAM_ALLOCATION: u64 = 1_900_000_000 * UNIT;
pub const COMPANY_RESERVE_ALLOCATION: u64 = 1_200_000_000 * UNIT;
pub const COMMUNITY_ALLOCATION: u64 = 800_000_000 * UNIT;
pub const PUBLIC_SALE_ALLOCATION: u64 = 800_000_000 * UNIT;
pub const STRATEGIC_PARTNERS_ALLOCATION: u64 = 600_000_000 * UNIT;

/// `initialize_lock` schedule arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LockSchedule {
    pub lock_durations: Vec<u64>,
    pub release_percents: Vec<u8>,
}

impl LockSchedule {
    /// `phases` unlocks, the first after `cliff` seconds and then one every
    /// `step` seconds. Percents: 0 at the cliff, 5 for the next five, 3 after.
    fn cliff_then_monthly(cliff: u64, step: u64, phases: usize) -> Self {
        let lock_durations = (0..phases as u64).map(|i| cliff + step * i).collect();
        let release_percents = (0..phases)
            .map(|i| match i {
                0 => 0,
                1..=5 => 5,
                _ => 3,
            })
            .collect();
        Self {
            lock_durations,
            release_percents,
        }
    }
}

/// 180-day cliff followed by 30 monthly unlocks (ecosystem, team, reserve,
/// community, strategic partners).
pub fn standard_cliff_schedule() -> LockSchedule {
    LockSchedule::cliff_then_monthly(days_to_seconds(180), days_to_seconds(30), 31)
}

/// Five equal unlocks every 20 days.
pub fn public_sale_schedule() -> LockSchedule {
    let step = 20 * SECONDS_PER_DAY;
    LockSchedule {
        lock_durations: (1..=5).map(|i| step * i).collect(),
        release_percents: vec![20; 5],
    }
}

/// Standard schedule compressed to minutes, for devnet rehearsals.
pub fn test_schedule() -> LockSchedule {
    LockSchedule::cliff_then_monthly(120, 60, 31)
}
