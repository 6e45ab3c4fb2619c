//! Program-wide constants.

/// PDA seed of a `TokenLock` account: `[LOCK_SEED, mint, beneficiary, lock_id]`.
pub const LOCK_SEED: &[u8] = b"token_lock";

/// PDA seed of the vault token account: `[VAULT_SEED, token_lock]`.
pub const VAULT_SEED: &[u8] = b"vault";

/// Max phases a single lock can carry (account space is fixed at init).
pub const MAX_PHASES: usize = 48;

/// Release percents of a schedule must add up to this.
pub const PERCENT_DENOMINATOR: u64 = 100;

/// Seconds per day (UTC).
pub const SECONDS_PER_DAY: u64 = 86_400;
