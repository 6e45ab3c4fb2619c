#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

pub use instructions::*;

declare_id!("H4BPtaPHrp18dUinJwLd1xHJvzH59AByt7e9LL8Y8jwa");

#[program]
pub mod presale {
    use super::*;

    pub fn initialize_presale(ctx: Context<InitializePresale>, rate: u64) -> Result<()> {
        instructions::initialize_presale::initialize_presale(ctx, rate)
    }

    pub fn buy_tokens(ctx: Context<BuyTokens>, beneficiary: Pubkey, lamports: u64) -> Result<()> {
        instructions::buy_tokens::buy_tokens(ctx, beneficiary, lamports)
    }

    pub fn forward_funds(ctx: Context<ForwardFunds>, amount: u64) -> Result<()> {
        instructions::forward_funds::forward_funds(ctx, amount)
    }

    pub fn end_presale(ctx: Context<EndPresale>) -> Result<()> {
        instructions::end_presale::end_presale(ctx)
    }
}
