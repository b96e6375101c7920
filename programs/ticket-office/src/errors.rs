use anchor_lang::prelude::*;

#[error_code]
pub enum TicketOfficeError {
    #[msg("Time slot not found in the linked registry")]
    SlotNotFound,
    #[msg("Time slot is not active")]
    SlotNotActive,
    #[msg("Invalid ticket quantity")]
    InvalidQuantity,
    #[msg("Payment must equal quantity times slot price")]
    IncorrectPayment,
    #[msg("Withdrawal exceeds custody balance")]
    InsufficientBalance,
    #[msg("Caller is not the box office administrator")]
    Unauthorized,
    #[msg("Box office is linked to a different cinema")]
    CinemaMismatch,
    #[msg("Label exceeds maximum length")]
    LabelTooLong,
    #[msg("Math overflow")]
    MathOverflow,
}
