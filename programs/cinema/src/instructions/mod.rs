pub mod add_movie;
pub mod add_time_slots;
pub mod cancel_slot;
pub mod complete_slot;
pub mod delete_movie;
pub mod grant_access;
pub mod initialize_cinema;
pub mod record_sale;
pub mod update_movie;

pub use add_movie::*;
pub use add_time_slots::*;
pub use cancel_slot::*;
pub use complete_slot::*;
pub use delete_movie::*;
pub use grant_access::*;
pub use initialize_cinema::*;
pub use record_sale::*;
pub use update_movie::*;
