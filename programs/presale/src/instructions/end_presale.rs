use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{PRESALE_SEED, VAULT_SEED};
use crate::error::PresaleError;
use crate::instructions::forward_funds::move_lamports;
use crate::state::PresaleState;
use crate::utils::math;

/// Returns unsold tokens and every spendable lamport to the admin. The vault
/// is left empty, so later purchases fail on the balance check.
pub fn end_presale(ctx: Context<EndPresale>) -> Result<()> {
    let st = &ctx.accounts.presale;
    math::check_admin(&st.admin, &ctx.accounts.admin.key())?;
    require_keys_eq!(
        ctx.accounts.admin_token_account.mint,
        st.mint,
        PresaleError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.admin_token_account.owner,
        st.admin,
        PresaleError::InvalidTokenAccount
    );

    let presale_ai = ctx.accounts.presale.to_account_info();
    let unsold = ctx.accounts.vault.amount;
    if unsold > 0 {
        let mint = st.mint;
        let bump = [st.bump];
        let signer_seeds: &[&[&[u8]]] = &[&[PRESALE_SEED, mint.as_ref(), &bump]];
        token::transfer(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.vault.to_account_info(),
                    to: ctx.accounts.admin_token_account.to_account_info(),
                    authority: presale_ai.clone(),
                },
                signer_seeds,
            ),
            unsold,
        )?;
    }

    let rent_min = Rent::get()?.minimum_balance(presale_ai.data_len());
    let raised = math::spendable_lamports(presale_ai.lamports(), rent_min);
    if raised > 0 {
        move_lamports(&presale_ai, &ctx.accounts.admin.to_account_info(), raised)?;
    }

    msg!("presale ended: {} tokens returned, {} lamports forwarded", unsold, raised);

    emit!(PresaleEnded {
        admin: st.admin,
        tokens_returned: unsold,
        lamports_forwarded: raised,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct EndPresale<'info> {
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
    pub admin_token_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct PresaleEnded {
    pub admin: Pubkey,
    pub tokens_returned: u64,
    pub lamports_forwarded: u64,
}
