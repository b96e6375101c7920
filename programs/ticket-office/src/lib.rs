use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod instructions;
pub mod state;

use instructions::*;

declare_id!("GZVn56cKAKbq6K76jf2rigSktqELicPjvneNBvEgDBkM");

#[program]
pub mod ticket_office {
    use super::*;

    pub fn initialize_box_office(ctx: Context<InitializeBoxOffice>, label: String) -> Result<()> {
        instructions::initialize_box_office::initialize_box_office(ctx, label)
    }

    pub fn buy_tickets(
        ctx: Context<BuyTickets>,
        slot_id: u64,
        quantity: u32,
        payment: u64,
    ) -> Result<()> {
        instructions::buy_tickets::buy_tickets(ctx, slot_id, quantity, payment)
    }

    pub fn complete_tickets(ctx: Context<CompleteTickets>, slot_id: u64) -> Result<()> {
        instructions::complete_tickets::complete_tickets(ctx, slot_id)
    }

    pub fn delete_tickets(ctx: Context<DeleteTickets>, slot_id: u64) -> Result<()> {
        instructions::delete_tickets::delete_tickets(ctx, slot_id)
    }

    pub fn withdraw_to(ctx: Context<WithdrawTo>, amount: u64) -> Result<()> {
        instructions::withdraw_to::withdraw_to(ctx, amount)
    }
}
