use anchor_lang::prelude::*;

use crate::constants::{BOX_OFFICE_SEED, ISSUER_SEAL_SEED};
use crate::errors::TicketOfficeError;
use crate::state::BoxOffice;

#[derive(Accounts)]
pub struct CompleteTickets<'info> {
    pub authority: Signer<'info>,

    #[account(
        seeds = [
            BOX_OFFICE_SEED,
            box_office.authority.as_ref(),
            box_office.label.as_bytes()
        ],
        bump = box_office.bump,
        constraint = box_office.authority == authority.key() @ TicketOfficeError::Unauthorized,
        constraint = box_office.cinema == cinema.key() @ TicketOfficeError::CinemaMismatch,
    )]
    pub box_office: Account<'info, BoxOffice>,

    #[account(mut)]
    pub cinema: Account<'info, cinema::state::Cinema>,

    /// CHECK: issuer seal PDA; signs the registry CPI.
    #[account(
        seeds = [ISSUER_SEAL_SEED, box_office.key().as_ref()],
        bump = box_office.seal_bump
    )]
    pub issuer_seal: UncheckedAccount<'info>,

    pub cinema_program: Program<'info, cinema::program::Cinema>,
}

/// Settlement: the showtime happened and the tickets are final. The slot
/// leaves the registry's active view; ticket records, holder entries and
/// the custody balance all stay as they are.
pub fn complete_tickets(ctx: Context<CompleteTickets>, slot_id: u64) -> Result<()> {
    let box_office_key = ctx.accounts.box_office.key();
    let seal_seeds: &[&[u8]] = &[
        ISSUER_SEAL_SEED,
        box_office_key.as_ref(),
        &[ctx.accounts.box_office.seal_bump],
    ];
    cinema::cpi::complete_slot(
        CpiContext::new_with_signer(
            ctx.accounts.cinema_program.to_account_info(),
            cinema::cpi::accounts::CompleteSlot {
                issuer: ctx.accounts.issuer_seal.to_account_info(),
                cinema: ctx.accounts.cinema.to_account_info(),
            },
            &[seal_seeds],
        ),
        slot_id,
    )?;

    emit!(TicketsSettled {
        box_office: box_office_key,
        slot_id,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Tickets for slot {} settled", slot_id);

    Ok(())
}

#[event]
pub struct TicketsSettled {
    pub box_office: Pubkey,
    pub slot_id: u64,
    pub timestamp: i64,
}
