#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod presets;
pub mod state;
pub mod utils;

pub use instructions::*;

declare_id!("DBie9bGMuzy7EUyz4Wddz2cnBkmQTJnRKXHGRbPSCyqN");

#[program]
pub mod timelock {
    use super::*;

    pub fn initialize_lock(
        ctx: Context<InitializeLock>,
        beneficiary: Pubkey,
        lock_id: u64,
        total_allocation: u64,
        lock_durations: Vec<u64>,
        release_percents: Vec<u8>,
        start_ts: i64,
    ) -> Result<()> {
        instructions::initialize_lock::initialize_lock(
            ctx,
            beneficiary,
            lock_id,
            total_allocation,
            lock_durations,
            release_percents,
            start_ts,
        )
    }

    pub fn deposit_tokens(ctx: Context<DepositTokens>, amount: u64) -> Result<()> {
        instructions::deposit_tokens::deposit_tokens(ctx, amount)
    }

    pub fn release(ctx: Context<Release>) -> Result<()> {
        instructions::release::release(ctx)
    }

    pub fn emit_lock_quote(ctx: Context<EmitLockQuote>) -> Result<()> {
        instructions::emit_lock_quote::emit_lock_quote(ctx)
    }
}
