use anchor_lang::prelude::*;

#[error_code]
pub enum CinemaError {
    #[msg("Movie not found")]
    MovieNotFound,
    #[msg("Time slot not found")]
    SlotNotFound,
    #[msg("Time slot is not active")]
    SlotNotActive,
    #[msg("Start times cannot be empty")]
    EmptySlotBatch,
    #[msg("Too many slots in one batch")]
    BatchTooLarge,
    #[msg("Field exceeds maximum length")]
    StringTooLong,
    #[msg("Invalid quantity")]
    InvalidQuantity,
    #[msg("End time must be after start time")]
    InvalidSchedule,
    #[msg("Invalid slot capacity")]
    InvalidCapacity,
    #[msg("Not enough seats left for this slot")]
    CapacityExceeded,
    #[msg("Caller is not the authorized issuer")]
    NotAuthorized,
    #[msg("Caller is not the cinema administrator")]
    Unauthorized,
    #[msg("Math overflow")]
    MathOverflow,
}
