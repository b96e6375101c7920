use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;
use state::{MovieParams, SlotRecord};

declare_id!("2oUmUDgTvVFBDqNC2TpVLhtvaenKgiNnuvsPMUYT4yJq");

#[program]
pub mod cinema {
    use super::*;

    pub fn initialize_cinema(ctx: Context<InitializeCinema>) -> Result<()> {
        instructions::initialize_cinema::initialize_cinema(ctx)
    }

    pub fn add_movie(ctx: Context<AddMovie>, params: MovieParams) -> Result<()> {
        instructions::add_movie::add_movie(ctx, params)
    }

    pub fn update_movie(
        ctx: Context<UpdateMovie>,
        movie_id: u64,
        params: MovieParams,
    ) -> Result<()> {
        instructions::update_movie::update_movie(ctx, movie_id, params)
    }

    pub fn delete_movie(ctx: Context<DeleteMovie>, movie_id: u64) -> Result<()> {
        instructions::delete_movie::delete_movie(ctx, movie_id)
    }

    pub fn add_time_slots(
        ctx: Context<AddTimeSlots>,
        movie_id: u64,
        records: Vec<SlotRecord>,
    ) -> Result<()> {
        instructions::add_time_slots::add_time_slots(ctx, movie_id, records)
    }

    pub fn grant_access(ctx: Context<GrantAccess>, new_issuer: Pubkey) -> Result<()> {
        instructions::grant_access::grant_access(ctx, new_issuer)
    }

    pub fn record_sale(ctx: Context<RecordSale>, slot_id: u64, quantity: u32) -> Result<()> {
        instructions::record_sale::record_sale(ctx, slot_id, quantity)
    }

    pub fn complete_slot(ctx: Context<CompleteSlot>, slot_id: u64) -> Result<()> {
        instructions::complete_slot::complete_slot(ctx, slot_id)
    }

    pub fn cancel_slot(ctx: Context<CancelSlot>, slot_id: u64) -> Result<()> {
        instructions::cancel_slot::cancel_slot(ctx, slot_id)
    }
}
