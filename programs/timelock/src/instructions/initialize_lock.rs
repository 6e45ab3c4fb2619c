use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{LOCK_SEED, VAULT_SEED};
use crate::state::TokenLock;
use crate::utils::schedule;

pub fn initialize_lock(
    ctx: Context<InitializeLock>,
    beneficiary: Pubkey,
    lock_id: u64,
    total_allocation: u64,
    lock_durations: Vec<u64>,
    release_percents: Vec<u8>,
    start_ts: i64,
) -> Result<()> {
    schedule::validate_lock(
        &beneficiary,
        &ctx.accounts.mint.key(),
        total_allocation,
        &lock_durations,
        &release_percents,
        start_ts,
    )?;

    let phases = lock_durations.len();
    let lock = &mut ctx.accounts.token_lock;
    lock.beneficiary = beneficiary;
    lock.mint = ctx.accounts.mint.key();
    lock.factory = ctx.accounts.factory.key();
    lock.lock_id = lock_id;
    lock.total_allocation = total_allocation;
    lock.released_amount = 0;
    lock.start_ts = start_ts;
    lock.next_release_idx = 0;
    lock.bump = ctx.bumps.token_lock;
    lock.vault_bump = ctx.bumps.vault;
    lock.lock_durations = lock_durations;
    lock.release_percents = release_percents;
    lock.release_dates = vec![0; phases];

    emit!(LockInitialized {
        token_lock: lock.key(),
        beneficiary,
        mint: lock.mint,
        factory: lock.factory,
        lock_id,
        total_allocation,
        start_ts,
        phases: phases as u8,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(beneficiary: Pubkey, lock_id: u64, total_allocation: u64, lock_durations: Vec<u64>)]
pub struct InitializeLock<'info> {
    #[account(
        init,
        payer = factory,
        space = TokenLock::space(lock_durations.len()),
        seeds = [LOCK_SEED, mint.key().as_ref(), beneficiary.as_ref(), &lock_id.to_le_bytes()],
        bump
    )]
    pub token_lock: Account<'info, TokenLock>,

    #[account(
        init,
        payer = factory,
        token::mint = mint,
        token::authority = token_lock,
        seeds = [VAULT_SEED, token_lock.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub factory: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct LockInitialized {
    pub token_lock: Pubkey,
    pub beneficiary: Pubkey,
    pub mint: Pubkey,
    pub factory: Pubkey,
    pub lock_id: u64,
    pub total_allocation: u64,
    pub start_ts: i64,
    pub phases: u8,
}
