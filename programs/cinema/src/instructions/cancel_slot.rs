use anchor_lang::prelude::*;

use crate::constants::CINEMA_SEED;
use crate::errors::CinemaError;
use crate::state::Cinema;

#[derive(Accounts)]
pub struct CancelSlot<'info> {
    pub issuer: Signer<'info>,

    #[account(
        mut,
        seeds = [CINEMA_SEED],
        bump = cinema.bump,
        constraint = cinema.is_authorized(&issuer.key()) @ CinemaError::NotAuthorized,
    )]
    pub cinema: Account<'info, Cinema>,
}

pub fn cancel_slot(ctx: Context<CancelSlot>, slot_id: u64) -> Result<()> {
    let cinema = &mut ctx.accounts.cinema;
    cinema.cancel_slot(slot_id)?;

    emit!(SlotCancelled {
        issuer: ctx.accounts.issuer.key(),
        slot_id,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Slot {} cancelled", slot_id);

    Ok(())
}

#[event]
pub struct SlotCancelled {
    pub issuer: Pubkey,
    pub slot_id: u64,
    pub timestamp: i64,
}
