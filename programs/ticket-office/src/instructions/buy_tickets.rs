use anchor_lang::prelude::*;

use crate::constants::{BOX_OFFICE_SEED, ISSUER_SEAL_SEED};
use crate::errors::TicketOfficeError;
use crate::state::BoxOffice;

#[derive(Accounts)]
pub struct BuyTickets<'info> {
    #[account(mut)]
    pub buyer: Signer<'info>,

    #[account(
        mut,
        seeds = [
            BOX_OFFICE_SEED,
            box_office.authority.as_ref(),
            box_office.label.as_bytes()
        ],
        bump = box_office.bump,
        constraint = box_office.cinema == cinema.key() @ TicketOfficeError::CinemaMismatch,
        realloc = BoxOffice::space_for(box_office.label.len(), box_office.tickets.len() + 1),
        realloc::payer = buyer,
        realloc::zero = false,
    )]
    pub box_office: Account<'info, BoxOffice>,

    #[account(mut)]
    pub cinema: Account<'info, cinema::state::Cinema>,

    /// CHECK: issuer seal PDA; signs the registry CPI. The registry rejects
    /// the call unless this key holds the current grant.
    #[account(
        seeds = [ISSUER_SEAL_SEED, box_office.key().as_ref()],
        bump = box_office.seal_bump
    )]
    pub issuer_seal: UncheckedAccount<'info>,

    pub cinema_program: Program<'info, cinema::program::Cinema>,

    pub system_program: Program<'info, System>,
}

pub fn buy_tickets(
    ctx: Context<BuyTickets>,
    slot_id: u64,
    quantity: u32,
    payment: u64,
) -> Result<()> {
    BoxOffice::validate_quantity(quantity)?;

    // Price and status come from the registry's committed state.
    let (price, active) = {
        let slot = ctx
            .accounts
            .cinema
            .slot(slot_id)
            .ok_or(TicketOfficeError::SlotNotFound)?;
        (slot.price, slot.is_active())
    };
    require!(active, TicketOfficeError::SlotNotActive);
    require!(
        payment == BoxOffice::expected_payment(price, quantity)?,
        TicketOfficeError::IncorrectPayment
    );

    // The registry enforces capacity and authorization; a refusal aborts the
    // whole purchase before any lamports move.
    let box_office_key = ctx.accounts.box_office.key();
    let seal_seeds: &[&[u8]] = &[
        ISSUER_SEAL_SEED,
        box_office_key.as_ref(),
        &[ctx.accounts.box_office.seal_bump],
    ];
    cinema::cpi::record_sale(
        CpiContext::new_with_signer(
            ctx.accounts.cinema_program.to_account_info(),
            cinema::cpi::accounts::RecordSale {
                issuer: ctx.accounts.issuer_seal.to_account_info(),
                cinema: ctx.accounts.cinema.to_account_info(),
            },
            &[seal_seeds],
        ),
        slot_id,
        quantity,
    )?;

    anchor_lang::system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            anchor_lang::system_program::Transfer {
                from: ctx.accounts.buyer.to_account_info(),
                to: ctx.accounts.box_office.to_account_info(),
            },
        ),
        payment,
    )?;

    let now = Clock::get()?.unix_timestamp;
    let holder = ctx.accounts.buyer.key();
    let box_office = &mut ctx.accounts.box_office;
    let ticket_id = box_office.record_purchase(slot_id, holder, quantity, payment, now)?;

    emit!(TicketsPurchased {
        box_office: box_office_key,
        buyer: holder,
        slot_id,
        ticket_id,
        quantity,
        price_each: price,
        total_paid: payment,
        timestamp: now,
    });

    msg!("Sold {} tickets for slot {}", quantity, slot_id);

    Ok(())
}

#[event]
pub struct TicketsPurchased {
    pub box_office: Pubkey,
    pub buyer: Pubkey,
    pub slot_id: u64,
    pub ticket_id: u64,
    pub quantity: u32,
    pub price_each: u64,
    pub total_paid: u64,
    pub timestamp: i64,
}
