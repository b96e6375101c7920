use anchor_lang::prelude::*;

use crate::constants::CINEMA_SEED;
use crate::errors::CinemaError;
use crate::state::{Cinema, SlotRecord};

#[derive(Accounts)]
#[instruction(movie_id: u64, records: Vec<SlotRecord>)]
pub struct AddTimeSlots<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [CINEMA_SEED],
        bump = cinema.bump,
        constraint = cinema.authority == authority.key() @ CinemaError::Unauthorized,
        realloc = Cinema::space_for(cinema.movies.len(), cinema.slots.len() + records.len()),
        realloc::payer = authority,
        realloc::zero = false,
    )]
    pub cinema: Account<'info, Cinema>,

    pub system_program: Program<'info, System>,
}

pub fn add_time_slots(
    ctx: Context<AddTimeSlots>,
    movie_id: u64,
    records: Vec<SlotRecord>,
) -> Result<()> {
    let cinema = &mut ctx.accounts.cinema;
    let slot_ids = cinema.add_time_slots(movie_id, &records)?;

    emit!(TimeSlotsAdded {
        movie_id,
        slot_ids: slot_ids.clone(),
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Added {} time slots for movie {}", slot_ids.len(), movie_id);

    Ok(())
}

#[event]
pub struct TimeSlotsAdded {
    pub movie_id: u64,
    pub slot_ids: Vec<u64>,
    pub timestamp: i64,
}
