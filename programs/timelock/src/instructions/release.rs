use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{LOCK_SEED, VAULT_SEED};
use crate::error::TimelockError;
use crate::state::TokenLock;

pub fn release(ctx: Context<Release>) -> Result<()> {
    // Capture the lock's AccountInfo before taking the mutable borrow.
    let token_lock_ai = ctx.accounts.token_lock.to_account_info();
    let token_lock_key = ctx.accounts.token_lock.key();

    let now = Clock::get()?.unix_timestamp;
    let lock = &mut ctx.accounts.token_lock;
    let plan = lock.plan_release(now, ctx.accounts.vault.amount)?;

    if plan.phase_count() > 1 {
        msg!(
            "releasing phases {}..={} in a single call",
            plan.from_index,
            plan.to_index
        );
    }

    // Zero-percent phases still advance the cursor.
    if plan.amount > 0 {
        let mint = lock.mint;
        let beneficiary = lock.beneficiary;
        let lock_id = lock.lock_id.to_le_bytes();
        let bump = [lock.bump];
        let signer_seeds: &[&[&[u8]]] = &[&[
            LOCK_SEED,
            mint.as_ref(),
            beneficiary.as_ref(),
            &lock_id,
            &bump,
        ]];
        token::transfer(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.vault.to_account_info(),
                    to: ctx.accounts.beneficiary_token_account.to_account_info(),
                    authority: token_lock_ai,
                },
                signer_seeds,
            ),
            plan.amount,
        )?;
    }

    lock.apply_release(&plan)?;

    emit!(Released {
        token_lock: token_lock_key,
        amount: plan.amount,
        released_total: lock.released_amount,
        from_index: plan.from_index,
        to_index: plan.to_index,
        release_date: plan.release_date,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Release<'info> {
    #[account(
        mut,
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

    #[account(
        mut,
        constraint = beneficiary_token_account.mint == token_lock.mint @ TimelockError::InvalidTokenMint,
        constraint = beneficiary_token_account.owner == token_lock.beneficiary @ TimelockError::InvalidTokenAccount,
    )]
    pub beneficiary_token_account: Account<'info, TokenAccount>,

    /// Anyone may trigger a release; tokens only ever go to the beneficiary.
    pub caller: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct Released {
    pub token_lock: Pubkey,
    pub amount: u64,
    pub released_total: u64,
    pub from_index: u8,
    pub to_index: u8,
    pub release_date: i64,
}
