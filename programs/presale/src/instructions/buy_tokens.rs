use anchor_lang::prelude::*;
use anchor_lang::system_program;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{PRESALE_SEED, VAULT_SEED};
use crate::error::PresaleError;
use crate::state::PresaleState;
use crate::utils::math;

pub fn buy_tokens(ctx: Context<BuyTokens>, beneficiary: Pubkey, lamports: u64) -> Result<()> {
    let presale_ai = ctx.accounts.presale.to_account_info();
    let st = &mut ctx.accounts.presale;

    let tokens = math::quote_purchase(&beneficiary, lamports, st.rate, ctx.accounts.vault.amount)?;

    require_keys_eq!(
        ctx.accounts.beneficiary_token_account.owner,
        beneficiary,
        PresaleError::InvalidTokenAccount
    );
    require_keys_eq!(
        ctx.accounts.beneficiary_token_account.mint,
        st.mint,
        PresaleError::InvalidTokenMint
    );

    // Payment stays on the sale account until the admin forwards it.
    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.purchaser.to_account_info(),
                to: presale_ai.clone(),
            },
        ),
        lamports,
    )?;

    let mint = st.mint;
    let bump = [st.bump];
    let signer_seeds: &[&[&[u8]]] = &[&[PRESALE_SEED, mint.as_ref(), &bump]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.beneficiary_token_account.to_account_info(),
                authority: presale_ai,
            },
            signer_seeds,
        ),
        tokens,
    )?;

    st.record_purchase(lamports, tokens)?;

    emit!(TokensPurchased {
        purchaser: ctx.accounts.purchaser.key(),
        beneficiary,
        value: lamports,
        amount: tokens,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct BuyTokens<'info> {
    #[account(
        mut,
        seeds = [PRESALE_SEED, presale.mint.as_ref()],
        bump = presale.bump
    )]
    pub presale: Account<'info, PresaleState>,

    #[account(
        mut,
        seeds = [VAULT_SEED, presale.key().as_ref()],
        bump = presale.vault_bump,
        constraint = vault.mint == presale.mint @ PresaleError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub beneficiary_token_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub purchaser: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

#[event]
pub struct TokensPurchased {
    pub purchaser: Pubkey,
    pub beneficiary: Pubkey,
    pub value: u64,
    pub amount: u64,
}
