use anchor_lang::prelude::*;

use crate::constants::CINEMA_SEED;
use crate::errors::CinemaError;
use crate::state::{Cinema, MovieParams};

#[derive(Accounts)]
pub struct AddMovie<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [CINEMA_SEED],
        bump = cinema.bump,
        constraint = cinema.authority == authority.key() @ CinemaError::Unauthorized,
        realloc = Cinema::space_for(cinema.movies.len() + 1, cinema.slots.len()),
        realloc::payer = authority,
        realloc::zero = false,
    )]
    pub cinema: Account<'info, Cinema>,

    pub system_program: Program<'info, System>,
}

pub fn add_movie(ctx: Context<AddMovie>, params: MovieParams) -> Result<()> {
    let name = params.name.clone();
    let cinema = &mut ctx.accounts.cinema;
    let movie_id = cinema.add_movie(params)?;

    emit!(MovieAdded {
        movie_id,
        name,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Movie {} added to the catalog", movie_id);

    Ok(())
}

#[event]
pub struct MovieAdded {
    pub movie_id: u64,
    pub name: String,
    pub timestamp: i64,
}
