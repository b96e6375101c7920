pub mod box_office;
pub mod ticket;


pub use box_office::*;
pub use ticket::*;
