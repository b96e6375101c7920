use anchor_lang::prelude::*;

use crate::constants::CINEMA_SEED;
use crate::errors::CinemaError;
use crate::state::{Cinema, MovieParams};

#[derive(Accounts)]
pub struct UpdateMovie<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [CINEMA_SEED],
        bump = cinema.bump,
        constraint = cinema.authority == authority.key() @ CinemaError::Unauthorized,
    )]
    pub cinema: Account<'info, Cinema>,
}

pub fn update_movie(ctx: Context<UpdateMovie>, movie_id: u64, params: MovieParams) -> Result<()> {
    let cinema = &mut ctx.accounts.cinema;
    cinema.update_movie(movie_id, params)?;

    emit!(MovieUpdated {
        movie_id,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Movie {} updated", movie_id);

    Ok(())
}

#[event]
pub struct MovieUpdated {
    pub movie_id: u64,
    pub timestamp: i64,
}
