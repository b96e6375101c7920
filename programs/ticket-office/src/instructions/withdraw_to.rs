use anchor_lang::prelude::*;

use crate::constants::BOX_OFFICE_SEED;
use crate::errors::TicketOfficeError;
use crate::state::BoxOffice;

#[derive(Accounts)]
pub struct WithdrawTo<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [
            BOX_OFFICE_SEED,
            box_office.authority.as_ref(),
            box_office.label.as_bytes()
        ],
        bump = box_office.bump,
        constraint = box_office.authority == authority.key() @ TicketOfficeError::Unauthorized,
    )]
    pub box_office: Account<'info, BoxOffice>,

    /// CHECK: any account the administrator names receives the lamports.
    #[account(mut)]
    pub destination: UncheckedAccount<'info>,
}

pub fn withdraw_to(ctx: Context<WithdrawTo>, amount: u64) -> Result<()> {
    let box_office = &mut ctx.accounts.box_office;
    box_office.apply_withdrawal(amount)?;

    // The program owns the box office account, so the debit is a direct
    // lamport move rather than a system transfer.
    let from = box_office.to_account_info();
    let to = ctx.accounts.destination.to_account_info();
    let new_from = from
        .lamports()
        .checked_sub(amount)
        .ok_or(TicketOfficeError::InsufficientBalance)?;
    let new_to = to
        .lamports()
        .checked_add(amount)
        .ok_or(TicketOfficeError::MathOverflow)?;
    **from.try_borrow_mut_lamports()? = new_from;
    **to.try_borrow_mut_lamports()? = new_to;

    emit!(FundsWithdrawn {
        box_office: box_office.key(),
        destination: to.key(),
        amount,
        remaining_balance: box_office.balance(),
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Withdrew {} lamports from custody", amount);

    Ok(())
}

#[event]
pub struct FundsWithdrawn {
    pub box_office: Pubkey,
    pub destination: Pubkey,
    pub amount: u64,
    pub remaining_balance: u64,
    pub timestamp: i64,
}
