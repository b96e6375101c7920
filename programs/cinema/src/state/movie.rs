use anchor_lang::prelude::*;

use crate::constants::*;
use crate::utils::validate_len;

/// Catalog visibility of a movie. A delisted movie stays addressable by id
/// (point lookups still return it) but is excluded from enumeration.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum MovieStatus {
    Listed,
    Delisted,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct Movie {
    pub id: u64,                    // 8 bytes - assigned by the registry, never reused
    pub name: String,               // 4 + 64 bytes
    pub banner_url: String,         // 4 + 128 bytes
    pub poster_url: String,         // 4 + 128 bytes
    pub video_url: String,          // 4 + 128 bytes
    pub genre: String,              // 4 + 32 bytes
    pub description: String,        // 4 + 200 bytes
    pub caption: String,            // 4 + 100 bytes
    pub casts: String,              // 4 + 200 bytes
    pub running_time: String,       // 4 + 32 bytes
    pub released: String,           // 4 + 32 bytes
    pub status: MovieStatus,        // 1 byte
}

/// All mutable movie fields in one record. `add_movie` consumes one to mint a
/// new entry; `update_movie` overwrites every field of an existing entry.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct MovieParams {
    pub name: String,
    pub banner_url: String,
    pub poster_url: String,
    pub video_url: String,
    pub genre: String,
    pub description: String,
    pub caption: String,
    pub casts: String,
    pub running_time: String,
    pub released: String,
}

impl MovieParams {
    pub fn validate(&self) -> Result<()> {
        validate_len(&self.name, MAX_NAME_LEN)?;
        validate_len(&self.banner_url, MAX_URL_LEN)?;
        validate_len(&self.poster_url, MAX_URL_LEN)?;
        validate_len(&self.video_url, MAX_URL_LEN)?;
        validate_len(&self.genre, MAX_GENRE_LEN)?;
        validate_len(&self.description, MAX_DESCRIPTION_LEN)?;
        validate_len(&self.caption, MAX_CAPTION_LEN)?;
        validate_len(&self.casts, MAX_CASTS_LEN)?;
        validate_len(&self.running_time, MAX_RUNNING_LEN)?;
        validate_len(&self.released, MAX_RELEASED_LEN)?;
        Ok(())
    }
}

impl Movie {
    pub const SPACE: usize = 8 +                // id
        (4 + MAX_NAME_LEN) +                    // name
        (4 + MAX_URL_LEN) +                     // banner_url
        (4 + MAX_URL_LEN) +                     // poster_url
        (4 + MAX_URL_LEN) +                     // video_url
        (4 + MAX_GENRE_LEN) +                   // genre
        (4 + MAX_DESCRIPTION_LEN) +             // description
        (4 + MAX_CAPTION_LEN) +                 // caption
        (4 + MAX_CASTS_LEN) +                   // casts
        (4 + MAX_RUNNING_LEN) +                 // running_time
        (4 + MAX_RELEASED_LEN) +                // released
        1;                                      // status

    pub fn new(id: u64, params: MovieParams) -> Self {
        Self {
            id,
            name: params.name,
            banner_url: params.banner_url,
            poster_url: params.poster_url,
            video_url: params.video_url,
            genre: params.genre,
            description: params.description,
            caption: params.caption,
            casts: params.casts,
            running_time: params.running_time,
            released: params.released,
            status: MovieStatus::Listed,
        }
    }

    pub fn overwrite(&mut self, params: MovieParams) {
        self.name = params.name;
        self.banner_url = params.banner_url;
        self.poster_url = params.poster_url;
        self.video_url = params.video_url;
        self.genre = params.genre;
        self.description = params.description;
        self.caption = params.caption;
        self.casts = params.casts;
        self.running_time = params.running_time;
        self.released = params.released;
    }

    pub fn is_listed(&self) -> bool {
        self.status == MovieStatus::Listed
    }

    pub fn is_deleted(&self) -> bool {
        self.status == MovieStatus::Delisted
    }
}
