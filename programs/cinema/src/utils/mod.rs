use anchor_lang::prelude::*;
use crate::errors::CinemaError;

pub fn validate_len(input: &str, max_len: usize) -> Result<()> {
    require!(input.len() <= max_len, CinemaError::StringTooLong);
    Ok(())
}

pub fn safe_add_u32(a: u32, b: u32) -> Result<u32> {
    a.checked_add(b).ok_or(CinemaError::MathOverflow.into())
}
