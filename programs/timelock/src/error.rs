use anchor_lang::prelude::*;

/// Custom error codes for the token timelock program.
#[error_code]
pub enum TimelockError {
    #[msg("TokenTimeLock: beneficiary is the zero address")]
    ZeroBeneficiary,

    #[msg("TokenTimeLock: token is the zero address")]
    ZeroToken,

    #[msg("TokenTimeLock: total allocation is zero")]
    ZeroAllocation,

    #[msg("TokenTimeLock: unlock length not match")]
    UnlockLengthMismatch,

    #[msg("TokenTimeLock: unlock percent not match 100")]
    UnlockPercentMismatch,

    #[msg("TokenTimeLock: too many phases")]
    TooManyPhases,

    #[msg("TokenTimeLock: next phase unavailable")]
    NextPhaseUnavailable,

    #[msg("TokenTimeLock: all phases are released")]
    AllPhasesReleased,

    #[msg("TokenTimeLock: insufficient balance")]
    InsufficientBalance,

    #[msg("Invalid deposit amount (must be > 0)")]
    InvalidAmount,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Invalid timestamp")]
    InvalidTimestamp,

    #[msg("Math overflow")]
    MathOverflow,
}
