use anchor_lang::prelude::*;

use crate::constants::MAX_SLOT_CAPACITY;
use crate::errors::CinemaError;
use crate::utils::safe_add_u32;

/// Lifecycle of a showtime slot. Transitions only run forward:
/// Active -> Completed (settlement) or Active -> Deleted (cancellation).
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotStatus {
    Active,
    Completed,
    Deleted,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct TimeSlot {
    pub id: u64,                    // 8 bytes - assigned by the registry
    pub movie_id: u64,              // 8 bytes - owning movie
    pub price: u64,                 // 8 bytes - per ticket, in lamports
    pub starts_at: i64,             // 8 bytes - Unix timestamp
    pub ends_at: i64,               // 8 bytes - Unix timestamp
    pub capacity: u32,              // 4 bytes - fixed at creation
    pub seats_sold: u32,            // 4 bytes - moved only via record_sale
    pub day: i64,                   // 8 bytes - showing day marker
    pub status: SlotStatus,         // 1 byte
}

/// One showtime to schedule. `add_time_slots` takes a batch of these and
/// creates them all or none.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug)]
pub struct SlotRecord {
    pub price: u64,
    pub starts_at: i64,
    pub ends_at: i64,
    pub capacity: u32,
    pub day: i64,
}

impl SlotRecord {
    pub fn validate(&self) -> Result<()> {
        require!(self.ends_at > self.starts_at, CinemaError::InvalidSchedule);
        require!(
            self.capacity > 0 && self.capacity <= MAX_SLOT_CAPACITY,
            CinemaError::InvalidCapacity
        );
        Ok(())
    }
}

impl TimeSlot {
    pub const SPACE: usize = 8 +    // id
        8 +                         // movie_id
        8 +                         // price
        8 +                         // starts_at
        8 +                         // ends_at
        4 +                         // capacity
        4 +                         // seats_sold
        8 +                         // day
        1;                          // status

    pub fn new(id: u64, movie_id: u64, record: SlotRecord) -> Self {
        Self {
            id,
            movie_id,
            price: record.price,
            starts_at: record.starts_at,
            ends_at: record.ends_at,
            capacity: record.capacity,
            seats_sold: 0,
            day: record.day,
            status: SlotStatus::Active,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == SlotStatus::Active
    }

    /// Listed in `time_slots` views: settlement keeps a slot visible,
    /// only cancellation removes it.
    pub fn is_listed(&self) -> bool {
        self.status != SlotStatus::Deleted
    }

    pub fn seats_left(&self) -> u32 {
        self.capacity.saturating_sub(self.seats_sold)
    }

    /// Registers `quantity` sold seats against the committed count.
    pub fn record_sale(&mut self, quantity: u32) -> Result<()> {
        require!(self.is_active(), CinemaError::SlotNotActive);
        require!(quantity > 0, CinemaError::InvalidQuantity);
        let new_sold = safe_add_u32(self.seats_sold, quantity)?;
        require!(new_sold <= self.capacity, CinemaError::CapacityExceeded);
        self.seats_sold = new_sold;
        Ok(())
    }

    pub fn complete(&mut self) -> Result<()> {
        require!(self.is_active(), CinemaError::SlotNotActive);
        self.status = SlotStatus::Completed;
        Ok(())
    }

    pub fn cancel(&mut self) -> Result<()> {
        require!(self.is_active(), CinemaError::SlotNotActive);
        self.status = SlotStatus::Deleted;
        Ok(())
    }
}
