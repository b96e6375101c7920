pub mod buy_tickets;
pub mod complete_tickets;
pub mod delete_tickets;
pub mod initialize_box_office;
pub mod withdraw_to;

pub use buy_tickets::*;
pub use complete_tickets::*;
pub use delete_tickets::*;
pub use initialize_box_office::*;
pub use withdraw_to::*;
