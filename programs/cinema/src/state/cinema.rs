use anchor_lang::prelude::*;

use crate::constants::MAX_SLOT_BATCH;
use crate::errors::CinemaError;
use crate::state::{Movie, MovieParams, MovieStatus, SlotRecord, TimeSlot};

/// The registry: one account owning the whole catalog plus the single
/// authorized-issuer grant. Ids are 1-based, monotonic and never reused;
/// only the program assigns them.
#[account]
pub struct Cinema {
    pub authority: Pubkey,          // 32 bytes - administrator
    pub authorized_issuer: Pubkey,  // 32 bytes - current grant, default = nobody
    pub next_movie_id: u64,         // 8 bytes
    pub next_slot_id: u64,          // 8 bytes
    pub movies: Vec<Movie>,         // 4 + n * Movie::SPACE
    pub slots: Vec<TimeSlot>,       // 4 + n * TimeSlot::SPACE
    pub bump: u8,                   // 1 byte
}

impl Cinema {
    pub const BASE_SPACE: usize = 8 +   // discriminator
        32 +                            // authority
        32 +                            // authorized_issuer
        8 +                             // next_movie_id
        8 +                             // next_slot_id
        4 +                             // movies vec prefix
        4 +                             // slots vec prefix
        1;                              // bump

    pub fn space_for(movie_count: usize, slot_count: usize) -> usize {
        Self::BASE_SPACE + movie_count * Movie::SPACE + slot_count * TimeSlot::SPACE
    }

    // ── Grant ────────────────────────────────────────────────────────────

    /// Replaces the grant unconditionally; the previous issuer is revoked
    /// by the same write.
    pub fn grant_access(&mut self, new_issuer: Pubkey) -> Pubkey {
        std::mem::replace(&mut self.authorized_issuer, new_issuer)
    }

    pub fn is_authorized(&self, issuer: &Pubkey) -> bool {
        self.authorized_issuer != Pubkey::default() && self.authorized_issuer == *issuer
    }

    // ── Movies ───────────────────────────────────────────────────────────

    pub fn add_movie(&mut self, params: MovieParams) -> Result<u64> {
        params.validate()?;
        let id = self.next_movie_id;
        self.next_movie_id = id.checked_add(1).ok_or(CinemaError::MathOverflow)?;
        self.movies.push(Movie::new(id, params));
        Ok(id)
    }

    /// Point lookup, delisted movies included so callers can observe the flag.
    pub fn movie(&self, movie_id: u64) -> Option<&Movie> {
        self.movies.iter().find(|m| m.id == movie_id)
    }

    /// Enumeration, delisted movies excluded. Ascending id by construction.
    pub fn movies(&self) -> impl Iterator<Item = &Movie> {
        self.movies.iter().filter(|m| m.is_listed())
    }

    pub fn update_movie(&mut self, movie_id: u64, params: MovieParams) -> Result<()> {
        params.validate()?;
        let movie = self
            .movies
            .iter_mut()
            .find(|m| m.id == movie_id && m.is_listed())
            .ok_or(CinemaError::MovieNotFound)?;
        movie.overwrite(params);
        Ok(())
    }

    /// Soft delete. Deleting an already-delisted movie reports MovieNotFound,
    /// same as an unknown id.
    pub fn delete_movie(&mut self, movie_id: u64) -> Result<()> {
        let movie = self
            .movies
            .iter_mut()
            .find(|m| m.id == movie_id && m.is_listed())
            .ok_or(CinemaError::MovieNotFound)?;
        movie.status = MovieStatus::Delisted;
        Ok(())
    }

    // ── Time slots ───────────────────────────────────────────────────────

    /// All-or-nothing batch creation: the batch is validated in full before
    /// the first slot is written. Returns the assigned ids.
    pub fn add_time_slots(&mut self, movie_id: u64, records: &[SlotRecord]) -> Result<Vec<u64>> {
        require!(!records.is_empty(), CinemaError::EmptySlotBatch);
        require!(records.len() <= MAX_SLOT_BATCH, CinemaError::BatchTooLarge);
        let movie = self.movie(movie_id).ok_or(CinemaError::MovieNotFound)?;
        require!(movie.is_listed(), CinemaError::MovieNotFound);
        for record in records {
            record.validate()?;
        }

        let mut ids = Vec::with_capacity(records.len());
        for record in records {
            let id = self.next_slot_id;
            self.next_slot_id = id.checked_add(1).ok_or(CinemaError::MathOverflow)?;
            self.slots.push(TimeSlot::new(id, movie_id, *record));
            ids.push(id);
        }
        Ok(ids)
    }

    pub fn slot(&self, slot_id: u64) -> Option<&TimeSlot> {
        self.slots.iter().find(|s| s.id == slot_id)
    }

    fn slot_mut(&mut self, slot_id: u64) -> Result<&mut TimeSlot> {
        self.slots
            .iter_mut()
            .find(|s| s.id == slot_id)
            .ok_or(CinemaError::SlotNotFound.into())
    }

    /// Non-deleted slots for a movie, ascending id. Completed slots stay
    /// listed here; only cancellation removes them.
    pub fn time_slots(&self, movie_id: u64) -> impl Iterator<Item = &TimeSlot> {
        self.slots
            .iter()
            .filter(move |s| s.movie_id == movie_id && s.is_listed())
    }

    /// Active slots only: settlement removes a slot from this view while
    /// leaving it in `time_slots`.
    pub fn active_time_slots(&self, movie_id: u64) -> impl Iterator<Item = &TimeSlot> {
        self.slots
            .iter()
            .filter(move |s| s.movie_id == movie_id && s.is_active())
    }

    // ── Issuer-gated mutations ───────────────────────────────────────────

    pub fn record_sale(&mut self, slot_id: u64, quantity: u32) -> Result<()> {
        self.slot_mut(slot_id)?.record_sale(quantity)
    }

    pub fn complete_slot(&mut self, slot_id: u64) -> Result<()> {
        self.slot_mut(slot_id)?.complete()
    }

    pub fn cancel_slot(&mut self, slot_id: u64) -> Result<()> {
        self.slot_mut(slot_id)?.cancel()
    }
}
