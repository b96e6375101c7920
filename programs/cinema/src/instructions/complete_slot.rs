use anchor_lang::prelude::*;

use crate::constants::CINEMA_SEED;
use crate::errors::CinemaError;
use crate::state::Cinema;

#[derive(Accounts)]
pub struct CompleteSlot<'info> {
    pub issuer: Signer<'info>,

    #[account(
        mut,
        seeds = [CINEMA_SEED],
        bump = cinema.bump,
        constraint = cinema.is_authorized(&issuer.key()) @ CinemaError::NotAuthorized,
    )]
    pub cinema: Account<'info, Cinema>,
}

pub fn complete_slot(ctx: Context<CompleteSlot>, slot_id: u64) -> Result<()> {
    let cinema = &mut ctx.accounts.cinema;
    cinema.complete_slot(slot_id)?;

    emit!(SlotCompleted {
        issuer: ctx.accounts.issuer.key(),
        slot_id,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Slot {} settled as completed", slot_id);

    Ok(())
}

#[event]
pub struct SlotCompleted {
    pub issuer: Pubkey,
    pub slot_id: u64,
    pub timestamp: i64,
}
