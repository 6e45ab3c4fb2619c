use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::constants::{LOCK_SEED, VAULT_SEED};
use crate::state::TokenLock;

pub fn emit_lock_quote(ctx: Context<EmitLockQuote>) -> Result<()> {
    let lock = &ctx.accounts.token_lock;
    let now = Clock::get()?.unix_timestamp;
    let due = lock.releasable_at(now)?;

    emit!(LockQuote {
        token_lock: lock.key(),
        beneficiary: lock.beneficiary,
        total_allocation: lock.total_allocation,
        released_amount: lock.released_amount,
        next_release_idx: lock.next_release_idx,
        next_release_ts: lock.next_release_ts()?,
        releasable: due.map_or(0, |p| p.amount),
        releasable_to_index: due.map(|p| p.to_index),
        vault_balance: ctx.accounts.vault.amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct EmitLockQuote<'info> {
    #[account(
        seeds = [
            LOCK_SEED,
            token_lock.mint.as_ref(),
            token_lock.beneficiary.as_ref(),
            &token_lock.lock_id.to_le_bytes(),
        ],
        bump = token_lock.bump
    )]
    pub token_lock: Account<'info, TokenLock>,

    #[account(
        seeds = [VAULT_SEED, token_lock.key().as_ref()],
        bump = token_lock.vault_bump,
    )]
    pub vault: Account<'info, TokenAccount>,
}

#[event]
pub struct LockQuote {
    pub token_lock: Pubkey,
    pub beneficiary: Pubkey,
    pub total_allocation: u64,
    pub released_amount: u64,
    pub next_release_idx: u8,
    pub next_release_ts: Option<i64>,
    pub releasable: u64,
    pub releasable_to_index: Option<u8>,
    pub vault_balance: u64,
}
