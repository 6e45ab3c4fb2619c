use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{PRESALE_SEED, VAULT_SEED};
use crate::error::PresaleError;
use crate::state::PresaleState;

pub fn initialize_presale(ctx: Context<InitializePresale>, rate: u64) -> Result<()> {
    require!(rate > 0, PresaleError::InvalidRate);

    let st = &mut ctx.accounts.presale;
    st.admin = ctx.accounts.admin.key();
    st.mint = ctx.accounts.mint.key();
    st.rate = rate;
    st.lamports_raised = 0;
    st.tokens_sold = 0;
    st.bump = ctx.bumps.presale;
    st.vault_bump = ctx.bumps.vault;

    emit!(PresaleInitialized {
        presale: st.key(),
        admin: st.admin,
        mint: st.mint,
        rate,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct InitializePresale<'info> {
    #[account(
        init,
        payer = admin,
        space = 8 + PresaleState::SIZE,
        seeds = [PRESALE_SEED, mint.key().as_ref()],
        bump
    )]
    pub presale: Account<'info, PresaleState>,

    #[account(
        init,
        payer = admin,
        token::mint = mint,
        token::authority = presale,
        seeds = [VAULT_SEED, presale.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct PresaleInitialized {
    pub presale: Pubkey,
    pub admin: Pubkey,
    pub mint: Pubkey,
    pub rate: u64,
}
