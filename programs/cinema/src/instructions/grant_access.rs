use anchor_lang::prelude::*;

use crate::constants::CINEMA_SEED;
use crate::errors::CinemaError;
use crate::state::Cinema;

#[derive(Accounts)]
pub struct GrantAccess<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [CINEMA_SEED],
        bump = cinema.bump,
        constraint = cinema.authority == authority.key() @ CinemaError::Unauthorized,
    )]
    pub cinema: Account<'info, Cinema>,
}

pub fn grant_access(ctx: Context<GrantAccess>, new_issuer: Pubkey) -> Result<()> {
    let cinema = &mut ctx.accounts.cinema;
    let previous_issuer = cinema.grant_access(new_issuer);

    emit!(AccessGranted {
        previous_issuer,
        new_issuer,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Slot mutation access granted to {}", new_issuer);

    Ok(())
}

#[event]
pub struct AccessGranted {
    pub previous_issuer: Pubkey,
    pub new_issuer: Pubkey,
    pub timestamp: i64,
}
