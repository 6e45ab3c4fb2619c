use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{LOCK_SEED, VAULT_SEED};
use crate::error::TimelockError;
use crate::state::TokenLock;

pub fn deposit_tokens(ctx: Context<DepositTokens>, amount: u64) -> Result<()> {
    require!(amount > 0, TimelockError::InvalidAmount);

    let lock = &ctx.accounts.token_lock;
    require_keys_eq!(
        ctx.accounts.depositor_token_account.mint,
        lock.mint,
        TimelockError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.depositor_token_account.owner,
        ctx.accounts.depositor.key(),
        TimelockError::InvalidTokenAccount
    );

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.depositor_token_account.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
                authority: ctx.accounts.depositor.to_account_info(),
            },
        ),
        amount,
    )?;

    ctx.accounts.vault.reload()?;

    emit!(TokensDeposited {
        token_lock: ctx.accounts.token_lock.key(),
        depositor: ctx.accounts.depositor.key(),
        amount,
        vault_balance: ctx.accounts.vault.amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct DepositTokens<'info> {
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
        mut,
        seeds = [VAULT_SEED, token_lock.key().as_ref()],
        bump = token_lock.vault_bump,
        constraint = vault.mint == token_lock.mint @ TimelockError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub depositor_token_account: Account<'info, TokenAccount>,

    pub depositor: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct TokensDeposited {
    pub token_lock: Pubkey,
    pub depositor: Pubkey,
    pub amount: u64,
    pub vault_balance: u64,
}
