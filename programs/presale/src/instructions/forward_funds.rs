use anchor_lang::prelude::*;

use crate::constants::PRESALE_SEED;
use crate::error::PresaleError;
use crate::state::PresaleState;
use crate::utils::math;

pub fn forward_funds(ctx: Context<ForwardFunds>, amount: u64) -> Result<()> {
    let st = &ctx.accounts.presale;
    let presale_ai = ctx.accounts.presale.to_account_info();
    let rent_min = Rent::get()?.minimum_balance(presale_ai.data_len());
    let spendable = math::spendable_lamports(presale_ai.lamports(), rent_min);
    math::check_forward(&st.admin, &ctx.accounts.admin.key(), spendable, amount)?;

    move_lamports(&presale_ai, &ctx.accounts.admin.to_account_info(), amount)?;

    emit!(FundsForwarded {
        admin: st.admin,
        amount,
        remaining: spendable - amount,
    });

    Ok(())
}

/// Debits a program-owned account directly; the system program cannot move
/// lamports out of an account that carries data.
pub(crate) fn move_lamports(from: &AccountInfo, to: &AccountInfo, amount: u64) -> Result<()> {
    let mut from_lamports = from.try_borrow_mut_lamports()?;
    let mut to_lamports = to.try_borrow_mut_lamports()?;
    **from_lamports = from_lamports
        .checked_sub(amount)
        .ok_or(PresaleError::InsufficientBalance)?;
    **to_lamports = to_lamports
        .checked_add(amount)
        .ok_or(PresaleError::MathOverflow)?;
    Ok(())
}

#[derive(Accounts)]
pub struct ForwardFunds<'info> {
    #[account(
        mut,
        seeds = [PRESALE_SEED, presale.mint.as_ref()],
        bump = presale.bump
    )]
    pub presale: Account<'info, PresaleState>,

    #[account(mut)]
    pub admin: Signer<'info>,
}

#[event]
pub struct FundsForwarded {
    pub admin: Pubkey,
    pub amount: u64,
    pub remaining: u64,
}
