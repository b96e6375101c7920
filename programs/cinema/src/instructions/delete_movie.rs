use anchor_lang::prelude::*;

use crate::constants::CINEMA_SEED;
use crate::errors::CinemaError;
use crate::state::Cinema;

#[derive(Accounts)]
pub struct DeleteMovie<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [CINEMA_SEED],
        bump = cinema.bump,
        constraint = cinema.authority == authority.key() @ CinemaError::Unauthorized,
    )]
    pub cinema: Account<'info, Cinema>,
}

pub fn delete_movie(ctx: Context<DeleteMovie>, movie_id: u64) -> Result<()> {
    let cinema = &mut ctx.accounts.cinema;
    cinema.delete_movie(movie_id)?;

    emit!(MovieRemoved {
        movie_id,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Movie {} delisted", movie_id);

    Ok(())
}

#[event]
pub struct MovieRemoved {
    pub movie_id: u64,
    pub timestamp: i64,
}
