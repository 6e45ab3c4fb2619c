//! Sale arithmetic, kept free of account types so it runs off-chain.

use anchor_lang::prelude::Pubkey;

use crate::error::PresaleError;

/// Validates a purchase of `lamports` and returns the token amount it buys
/// out of `available` vault tokens.
pub fn quote_purchase(
    beneficiary: &Pubkey,
    lamports: u64,
    rate: u64,
    available: u64,
) -> Result<u64, PresaleError> {
    if *beneficiary == Pubkey::default() {
        return Err(PresaleError::ZeroBeneficiary);
    }
    if lamports == 0 {
        return Err(PresaleError::ZeroPurchase);
    }
    // Widened so an oversized purchase reports the balance error, not overflow.
    let tokens = lamports as u128 * rate as u128;
    if tokens > available as u128 {
        return Err(PresaleError::ExceedsPresaleBalance);
    }
    Ok(tokens as u64)
}

/// Only the sale's admin may move funds out.
pub fn check_admin(admin: &Pubkey, signer: &Pubkey) -> Result<(), PresaleError> {
    if admin != signer {
        return Err(PresaleError::Unauthorized);
    }
    Ok(())
}

/// Gate for `forward_funds`: admin signer and enough spendable lamports.
pub fn check_forward(
    admin: &Pubkey,
    signer: &Pubkey,
    spendable: u64,
    amount: u64,
) -> Result<(), PresaleError> {
    check_admin(admin, signer)?;
    if spendable < amount {
        return Err(PresaleError::InsufficientBalance);
    }
    Ok(())
}

/// Lamports an account can give away while staying rent exempt.
pub fn spendable_lamports(balance: u64, rent_exempt_minimum: u64) -> u64 {
    balance.saturating_sub(rent_exempt_minimum)
}
