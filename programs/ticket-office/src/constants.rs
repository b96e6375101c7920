// Seeds
pub const BOX_OFFICE_SEED: &[u8] = b"box_office";
pub const ISSUER_SEAL_SEED: &[u8] = b"issuer_seal";

// Limits
pub const MAX_LABEL_LEN: usize = 16;
pub const MAX_TICKET_PURCHASE: u32 = 10;
