use anchor_lang::prelude::*;

use crate::constants::CINEMA_SEED;
use crate::errors::CinemaError;
use crate::state::Cinema;

#[derive(Accounts)]
pub struct RecordSale<'info> {
    /// The currently granted issuer; usually a program-derived signer
    /// provided through CPI.
    pub issuer: Signer<'info>,

    #[account(
        mut,
        seeds = [CINEMA_SEED],
        bump = cinema.bump,
        constraint = cinema.is_authorized(&issuer.key()) @ CinemaError::NotAuthorized,
    )]
    pub cinema: Account<'info, Cinema>,
}

pub fn record_sale(ctx: Context<RecordSale>, slot_id: u64, quantity: u32) -> Result<()> {
    let cinema = &mut ctx.accounts.cinema;
    cinema.record_sale(slot_id, quantity)?;

    emit!(SaleRecorded {
        issuer: ctx.accounts.issuer.key(),
        slot_id,
        quantity,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Recorded {} seats sold for slot {}", quantity, slot_id);

    Ok(())
}

#[event]
pub struct SaleRecorded {
    pub issuer: Pubkey,
    pub slot_id: u64,
    pub quantity: u32,
    pub timestamp: i64,
}
