use anchor_lang::prelude::*;
use std::result::Result;

use crate::error::PresaleError;

/// Fixed-rate sale of one mint (PDA `[b"presale", mint]`).
/// Raised lamports accumulate on this account until forwarded.
#[account]
#[derive(Debug)]
pub struct PresaleState {
    /// Owner: forwards funds and ends the sale.
    pub admin: Pubkey,
    /// Token mint being sold.
    pub mint: Pubkey,
    /// Token base units per lamport.
    pub rate: u64,
    /// Lamports paid in by buyers over the sale's lifetime.
    pub lamports_raised: u64,
    /// Token base units delivered to beneficiaries.
    pub tokens_sold: u64,
    pub bump: u8,
    pub vault_bump: u8,
}

impl PresaleState {
    pub const SIZE: usize =
        32 + // admin
        32 + // mint
        8 +  // rate
        8 +  // lamports_raised
        8 +  // tokens_sold
        1 +  // bump
        1;   // vault_bump

    pub fn record_purchase(&mut self, lamports: u64, tokens: u64) -> Result<(), PresaleError> {
        self.lamports_raised = self
            .lamports_raised
            .checked_add(lamports)
            .ok_or(PresaleError::MathOverflow)?;
        self.tokens_sold = self
            .tokens_sold
            .checked_add(tokens)
            .ok_or(PresaleError::MathOverflow)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn purchases_accumulate() {
        let mut st = PresaleState {
            admin: Pubkey::new_from_array([1; 32]),
            mint: Pubkey::new_from_array([2; 32]),
            rate: 1_000,
            lamports_raised: 0,
            tokens_sold: 0,
            bump: 255,
            vault_bump: 255,
        };
        st.record_purchase(10, 10_000).unwrap();
        st.record_purchase(5, 5_000).unwrap();
        assert_eq!(st.lamports_raised, 15);
        assert_eq!(st.tokens_sold, 15_000);

        st.lamports_raised = u64::MAX;
        assert!(matches!(
            st.record_purchase(1, 1_000),
            Err(PresaleError::MathOverflow)
        ));
    }
}
