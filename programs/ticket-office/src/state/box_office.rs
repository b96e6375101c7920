use anchor_lang::prelude::*;

use crate::constants::{MAX_LABEL_LEN, MAX_TICKET_PURCHASE};
use crate::errors::TicketOfficeError;
use crate::state::TicketRecord;

/// One issuer instance: its ticket ledger and the custody of sale proceeds.
/// Lamports received from buyers sit on this account; `custody_balance`
/// tracks received-minus-withdrawn so a withdrawal can never touch the rent
/// reserve. Several box offices may exist against the same cinema, each with
/// its own label; the registry decides which one is currently authorized.
#[account]
pub struct BoxOffice {
    pub authority: Pubkey,          // 32 bytes - administrator
    pub cinema: Pubkey,             // 32 bytes - linked registry account
    pub label: String,              // 4 + len bytes - instance label, part of the PDA seeds
    pub custody_balance: u64,       // 8 bytes - withdrawable lamports
    pub total_received: u64,        // 8 bytes
    pub total_withdrawn: u64,       // 8 bytes
    pub next_ticket_id: u64,        // 8 bytes
    pub tickets: Vec<TicketRecord>, // 4 + n * TicketRecord::SPACE
    pub seal_bump: u8,              // 1 byte - bump of the issuer seal PDA
    pub bump: u8,                   // 1 byte
}

impl BoxOffice {
    pub const BASE_SPACE: usize = 8 +   // discriminator
        32 +                            // authority
        32 +                            // cinema
        4 +                             // label prefix
        8 +                             // custody_balance
        8 +                             // total_received
        8 +                             // total_withdrawn
        8 +                             // next_ticket_id
        4 +                             // tickets vec prefix
        1 +                             // seal_bump
        1;                              // bump

    pub fn space_for(label_len: usize, ticket_count: usize) -> usize {
        Self::BASE_SPACE + label_len + ticket_count * TicketRecord::SPACE
    }

    pub fn validate_label(label: &str) -> Result<()> {
        require!(!label.is_empty(), TicketOfficeError::LabelTooLong);
        require!(label.len() <= MAX_LABEL_LEN, TicketOfficeError::LabelTooLong);
        Ok(())
    }

    pub fn validate_quantity(quantity: u32) -> Result<()> {
        require!(
            quantity > 0 && quantity <= MAX_TICKET_PURCHASE,
            TicketOfficeError::InvalidQuantity
        );
        Ok(())
    }

    /// Exact-match payment policy: no overpayment, no underpayment.
    pub fn expected_payment(price: u64, quantity: u32) -> Result<u64> {
        price
            .checked_mul(quantity as u64)
            .ok_or(TicketOfficeError::MathOverflow.into())
    }

    /// Appends the ticket record and credits custody. Payment and capacity
    /// are validated by the caller before any lamports move.
    pub fn record_purchase(
        &mut self,
        slot_id: u64,
        holder: Pubkey,
        quantity: u32,
        payment: u64,
        now: i64,
    ) -> Result<u64> {
        let id = self.next_ticket_id;
        self.next_ticket_id = id
            .checked_add(1)
            .ok_or(TicketOfficeError::MathOverflow)?;
        self.total_received = self
            .total_received
            .checked_add(payment)
            .ok_or(TicketOfficeError::MathOverflow)?;
        self.custody_balance = self
            .custody_balance
            .checked_add(payment)
            .ok_or(TicketOfficeError::MathOverflow)?;
        self.tickets.push(TicketRecord {
            id,
            slot_id,
            holder,
            quantity,
            purchased_at: now,
        });
        Ok(id)
    }

    /// Ticket records for a slot, in purchase order.
    pub fn tickets(&self, slot_id: u64) -> impl Iterator<Item = &TicketRecord> {
        self.tickets.iter().filter(move |t| t.slot_id == slot_id)
    }

    /// One entry per seat: a record with quantity 2 yields its holder twice.
    pub fn ticket_holders(&self, slot_id: u64) -> Vec<Pubkey> {
        self.tickets(slot_id)
            .flat_map(|t| std::iter::repeat(t.holder).take(t.quantity as usize))
            .collect()
    }

    /// Cancellation path: drops every record for the slot. Custody is left
    /// exactly where it is; there is no refund operation.
    pub fn void_tickets(&mut self, slot_id: u64) -> usize {
        let before = self.tickets.len();
        self.tickets.retain(|t| t.slot_id != slot_id);
        before - self.tickets.len()
    }

    /// Debits custody for a withdrawal. Fails without touching state when
    /// the amount exceeds the withdrawable balance.
    pub fn apply_withdrawal(&mut self, amount: u64) -> Result<()> {
        require!(
            amount <= self.custody_balance,
            TicketOfficeError::InsufficientBalance
        );
        self.custody_balance -= amount;
        self.total_withdrawn = self
            .total_withdrawn
            .checked_add(amount)
            .ok_or(TicketOfficeError::MathOverflow)?;
        Ok(())
    }

    pub fn balance(&self) -> u64 {
        self.custody_balance
    }
}
