pub mod cinema;
pub mod movie;
pub mod time_slot;

#[cfg(test)]
mod tests;

pub use cinema::*;
pub use movie::*;
pub use time_slot::*;
