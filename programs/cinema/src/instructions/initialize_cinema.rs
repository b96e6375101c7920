use anchor_lang::prelude::*;

use crate::constants::CINEMA_SEED;
use crate::state::Cinema;

#[derive(Accounts)]
pub struct InitializeCinema<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        init,
        payer = authority,
        space = Cinema::space_for(0, 0),
        seeds = [CINEMA_SEED],
        bump
    )]
    pub cinema: Account<'info, Cinema>,

    pub system_program: Program<'info, System>,
}

pub fn initialize_cinema(ctx: Context<InitializeCinema>) -> Result<()> {
    let cinema = &mut ctx.accounts.cinema;
    cinema.authority = ctx.accounts.authority.key();
    cinema.authorized_issuer = Pubkey::default();
    cinema.next_movie_id = 1;
    cinema.next_slot_id = 1;
    cinema.movies = Vec::new();
    cinema.slots = Vec::new();
    cinema.bump = ctx.bumps.cinema;

    emit!(CinemaInitialized {
        authority: cinema.authority,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Cinema registry initialized");

    Ok(())
}

#[event]
pub struct CinemaInitialized {
    pub authority: Pubkey,
    pub timestamp: i64,
}
