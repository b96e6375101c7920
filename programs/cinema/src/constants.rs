// Seeds
pub const CINEMA_SEED: &[u8] = b"cinema";

// Catalog field bounds
pub const MAX_NAME_LEN: usize = 64;
pub const MAX_URL_LEN: usize = 128;
pub const MAX_GENRE_LEN: usize = 32;
pub const MAX_DESCRIPTION_LEN: usize = 200;
pub const MAX_CAPTION_LEN: usize = 100;
pub const MAX_CASTS_LEN: usize = 200;
pub const MAX_RUNNING_LEN: usize = 32;
pub const MAX_RELEASED_LEN: usize = 32;

// Scheduling limits
pub const MAX_SLOT_BATCH: usize = 16;
pub const MAX_SLOT_CAPACITY: u32 = 1_000_000;
