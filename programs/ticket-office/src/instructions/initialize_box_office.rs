use anchor_lang::prelude::*;

use crate::constants::{BOX_OFFICE_SEED, ISSUER_SEAL_SEED};
use crate::state::BoxOffice;

#[derive(Accounts)]
#[instruction(label: String)]
pub struct InitializeBoxOffice<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        init,
        payer = authority,
        space = BoxOffice::space_for(label.len(), 0),
        seeds = [BOX_OFFICE_SEED, authority.key().as_ref(), label.as_bytes()],
        bump
    )]
    pub box_office: Account<'info, BoxOffice>,

    /// CHECK: program-derived issuer seal; holds no data, only signs CPIs
    /// into the registry once the registry grants it access.
    #[account(
        seeds = [ISSUER_SEAL_SEED, box_office.key().as_ref()],
        bump
    )]
    pub issuer_seal: UncheckedAccount<'info>,

    pub cinema: Account<'info, cinema::state::Cinema>,

    pub system_program: Program<'info, System>,
}

pub fn initialize_box_office(ctx: Context<InitializeBoxOffice>, label: String) -> Result<()> {
    BoxOffice::validate_label(&label)?;

    let box_office = &mut ctx.accounts.box_office;
    box_office.authority = ctx.accounts.authority.key();
    box_office.cinema = ctx.accounts.cinema.key();
    box_office.label = label;
    box_office.custody_balance = 0;
    box_office.total_received = 0;
    box_office.total_withdrawn = 0;
    box_office.next_ticket_id = 1;
    box_office.tickets = Vec::new();
    box_office.seal_bump = ctx.bumps.issuer_seal;
    box_office.bump = ctx.bumps.box_office;

    emit!(BoxOfficeInitialized {
        box_office: box_office.key(),
        authority: box_office.authority,
        cinema: box_office.cinema,
        issuer_seal: ctx.accounts.issuer_seal.key(),
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!(
        "Box office initialized; grant {} on the registry to start selling",
        ctx.accounts.issuer_seal.key()
    );

    Ok(())
}

#[event]
pub struct BoxOfficeInitialized {
    pub box_office: Pubkey,
    pub authority: Pubkey,
    pub cinema: Pubkey,
    pub issuer_seal: Pubkey,
    pub timestamp: i64,
}
