use anchor_lang::prelude::*;

/// Custom error codes for the presale program.
#[error_code]
pub enum PresaleError {
    #[msg("Rate must be greater than 0.")]
    InvalidRate,

    #[msg("Beneficiary address cannot be the zero address.")]
    ZeroBeneficiary,

    #[msg("You cannot buy with 0 lamports.")]
    ZeroPurchase,

    #[msg("Token amount exceeds the presale balance.")]
    ExceedsPresaleBalance,

    #[msg("Ownable: caller is not the owner")]
    Unauthorized,

    #[msg("Insufficient balance")]
    InsufficientBalance,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Math overflow")]
    MathOverflow,
}
