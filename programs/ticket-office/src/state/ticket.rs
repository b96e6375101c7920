use anchor_lang::prelude::*;

/// One purchase transaction. A single call may buy several seats; holder
/// views expand the record to one entry per seat.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct TicketRecord {
    pub id: u64,                    // 8 bytes - assigned by the box office
    pub slot_id: u64,               // 8 bytes - registry slot this ticket is for
    pub holder: Pubkey,             // 32 bytes - buyer
    pub quantity: u32,              // 4 bytes - seats bought in this call
    pub purchased_at: i64,          // 8 bytes - Unix timestamp
}

impl TicketRecord {
    pub const SPACE: usize = 8 +    // id
        8 +                         // slot_id
        32 +                        // holder
        4 +                         // quantity
        8;                          // purchased_at
}
