use anchor_lang::prelude::*;

use crate::errors::CinemaError;
use crate::state::{Cinema, Movie, MovieParams, SlotRecord, SlotStatus, TimeSlot};

fn sample_params() -> MovieParams {
    MovieParams {
        name: "The Matrix".to_string(),
        banner_url: "https://example.com/matrix-banner.jpg".to_string(),
        poster_url: "https://example.com/matrix-image.jpg".to_string(),
        video_url: "https://example.com/matrix-trailer.mp4".to_string(),
        genre: "Science Fiction".to_string(),
        description: "A computer hacker learns the true nature of his reality.".to_string(),
        caption: "Welcome to the Real World.".to_string(),
        casts: "Keanu Reeves, Laurence Fishburne, Carrie-Anne Moss".to_string(),
        running_time: "142 minutes".to_string(),
        released: "March 2nd, 2023".to_string(),
    }
}

fn sample_record() -> SlotRecord {
    SlotRecord {
        price: 50_000_000,
        starts_at: 1_700_000_000,
        ends_at: 1_700_007_200,
        capacity: 10,
        day: 1_700_000_000,
    }
}

fn new_cinema() -> Cinema {
    Cinema {
        authority: Pubkey::new_unique(),
        authorized_issuer: Pubkey::default(),
        next_movie_id: 1,
        next_slot_id: 1,
        movies: Vec::new(),
        slots: Vec::new(),
        bump: 255,
    }
}

#[test]
fn test_space_constants() {
    assert_eq!(TimeSlot::SPACE, 57);
    assert_eq!(Movie::SPACE, 1093);
    assert_eq!(Cinema::space_for(0, 0), 97);
    assert_eq!(
        Cinema::space_for(2, 3),
        97 + 2 * Movie::SPACE + 3 * TimeSlot::SPACE
    );
}

#[test]
fn test_add_movie_assigns_sequential_ids() {
    let mut cinema = new_cinema();

    assert_eq!(cinema.add_movie(sample_params()).unwrap(), 1);
    assert_eq!(cinema.add_movie(sample_params()).unwrap(), 2);
    assert_eq!(cinema.movies().count(), 2);
    assert_eq!(cinema.movie(1).unwrap().name, "The Matrix");
}

#[test]
fn test_update_movie_overwrites_fields() {
    let mut cinema = new_cinema();
    cinema.add_movie(sample_params()).unwrap();

    let mut params = sample_params();
    params.name = "Matrix X".to_string();
    cinema.update_movie(1, params).unwrap();

    let movie = cinema.movie(1).unwrap();
    assert_eq!(movie.id, 1);
    assert_eq!(movie.name, "Matrix X");
    assert_eq!(movie.genre, "Science Fiction");
}

#[test]
fn test_update_unknown_movie_fails() {
    let mut cinema = new_cinema();
    let err = cinema.update_movie(9, sample_params()).unwrap_err();
    assert_eq!(err, CinemaError::MovieNotFound.into());
}

#[test]
fn test_delete_movie_keeps_point_lookup() {
    let mut cinema = new_cinema();
    cinema.add_movie(sample_params()).unwrap();

    assert_eq!(cinema.movies().count(), 1);
    assert!(!cinema.movie(1).unwrap().is_deleted());

    cinema.delete_movie(1).unwrap();

    // Excluded from enumeration but still addressable, with the flag visible
    // and every other field untouched.
    assert_eq!(cinema.movies().count(), 0);
    let movie = cinema.movie(1).unwrap();
    assert!(movie.is_deleted());
    assert_eq!(movie.name, "The Matrix");
}

#[test]
fn test_delete_movie_twice_reports_not_found() {
    let mut cinema = new_cinema();
    cinema.add_movie(sample_params()).unwrap();
    cinema.delete_movie(1).unwrap();

    let err = cinema.delete_movie(1).unwrap_err();
    assert_eq!(err, CinemaError::MovieNotFound.into());
}

#[test]
fn test_movie_params_length_bounds() {
    let mut cinema = new_cinema();
    let mut params = sample_params();
    params.name = "A".repeat(65);

    let err = cinema.add_movie(params).unwrap_err();
    assert_eq!(err, CinemaError::StringTooLong.into());
    assert_eq!(cinema.next_movie_id, 1);
}

#[test]
fn test_add_time_slots_empty_batch() {
    let mut cinema = new_cinema();
    cinema.add_movie(sample_params()).unwrap();

    // The empty check fires before the movie lookup, so it applies to any
    // movie id.
    let err = cinema.add_time_slots(1, &[]).unwrap_err();
    assert_eq!(err, CinemaError::EmptySlotBatch.into());
    let err = cinema.add_time_slots(42, &[]).unwrap_err();
    assert_eq!(err, CinemaError::EmptySlotBatch.into());
}

#[test]
fn test_add_time_slots_unknown_or_deleted_movie() {
    let mut cinema = new_cinema();
    cinema.add_movie(sample_params()).unwrap();

    let err = cinema.add_time_slots(0, &[sample_record()]).unwrap_err();
    assert_eq!(err, CinemaError::MovieNotFound.into());

    cinema.delete_movie(1).unwrap();
    let err = cinema.add_time_slots(1, &[sample_record()]).unwrap_err();
    assert_eq!(err, CinemaError::MovieNotFound.into());
}

#[test]
fn test_add_time_slots_batch() {
    let mut cinema = new_cinema();
    cinema.add_movie(sample_params()).unwrap();

    let mut late = sample_record();
    late.starts_at += 10_800;
    late.ends_at += 10_800;
    let ids = cinema.add_time_slots(1, &[sample_record(), late]).unwrap();

    assert_eq!(ids, vec![1, 2]);
    assert_eq!(cinema.time_slots(1).count(), 2);
    assert_eq!(cinema.active_time_slots(1).count(), 2);
    let slot = cinema.slot(1).unwrap();
    assert_eq!(slot.movie_id, 1);
    assert_eq!(slot.seats_sold, 0);
    assert_eq!(slot.status, SlotStatus::Active);
}

#[test]
fn test_add_time_slots_rejects_bad_records() {
    let mut cinema = new_cinema();
    cinema.add_movie(sample_params()).unwrap();

    let mut backwards = sample_record();
    backwards.ends_at = backwards.starts_at;
    let err = cinema.add_time_slots(1, &[backwards]).unwrap_err();
    assert_eq!(err, CinemaError::InvalidSchedule.into());

    let mut empty_room = sample_record();
    empty_room.capacity = 0;
    // All-or-nothing: one bad record rejects the whole batch before any
    // slot is created.
    let err = cinema
        .add_time_slots(1, &[sample_record(), empty_room])
        .unwrap_err();
    assert_eq!(err, CinemaError::InvalidCapacity.into());
    assert_eq!(cinema.time_slots(1).count(), 0);
}

#[test]
fn test_record_sale_enforces_capacity() {
    let mut cinema = new_cinema();
    cinema.add_movie(sample_params()).unwrap();
    cinema.add_time_slots(1, &[sample_record()]).unwrap();

    // Capacity 10, sold in uneven batches: 4 + 5 + 1 fills the room.
    cinema.record_sale(1, 4).unwrap();
    cinema.record_sale(1, 5).unwrap();
    cinema.record_sale(1, 1).unwrap();
    assert_eq!(cinema.slot(1).unwrap().seats_left(), 0);

    let err = cinema.record_sale(1, 1).unwrap_err();
    assert_eq!(err, CinemaError::CapacityExceeded.into());
    assert_eq!(cinema.slot(1).unwrap().seats_sold, 10);
}

#[test]
fn test_record_sale_rejects_overshooting_batch() {
    let mut cinema = new_cinema();
    cinema.add_movie(sample_params()).unwrap();
    cinema.add_time_slots(1, &[sample_record()]).unwrap();

    cinema.record_sale(1, 8).unwrap();
    let err = cinema.record_sale(1, 3).unwrap_err();
    assert_eq!(err, CinemaError::CapacityExceeded.into());
    // Failed call leaves the committed count untouched.
    assert_eq!(cinema.slot(1).unwrap().seats_sold, 8);
}

#[test]
fn test_record_sale_unknown_or_inactive_slot() {
    let mut cinema = new_cinema();
    cinema.add_movie(sample_params()).unwrap();
    cinema.add_time_slots(1, &[sample_record()]).unwrap();

    let err = cinema.record_sale(7, 1).unwrap_err();
    assert_eq!(err, CinemaError::SlotNotFound.into());

    cinema.complete_slot(1).unwrap();
    let err = cinema.record_sale(1, 1).unwrap_err();
    assert_eq!(err, CinemaError::SlotNotActive.into());
}

#[test]
fn test_complete_slot_keeps_listing() {
    let mut cinema = new_cinema();
    cinema.add_movie(sample_params()).unwrap();
    cinema.add_time_slots(1, &[sample_record()]).unwrap();

    cinema.complete_slot(1).unwrap();

    // Settlement drops the slot from the active view only.
    assert_eq!(cinema.time_slots(1).count(), 1);
    assert_eq!(cinema.active_time_slots(1).count(), 0);
    assert_eq!(cinema.slot(1).unwrap().status, SlotStatus::Completed);
}

#[test]
fn test_cancel_slot_drops_listing() {
    let mut cinema = new_cinema();
    cinema.add_movie(sample_params()).unwrap();
    cinema.add_time_slots(1, &[sample_record()]).unwrap();

    cinema.cancel_slot(1).unwrap();

    assert_eq!(cinema.time_slots(1).count(), 0);
    assert_eq!(cinema.active_time_slots(1).count(), 0);
    // Point lookup still resolves the slot and shows the terminal status.
    assert_eq!(cinema.slot(1).unwrap().status, SlotStatus::Deleted);
}

#[test]
fn test_slot_transitions_never_run_backwards() {
    let mut cinema = new_cinema();
    cinema.add_movie(sample_params()).unwrap();
    cinema.add_time_slots(1, &[sample_record(), sample_record()]).unwrap();

    cinema.complete_slot(1).unwrap();
    let err = cinema.cancel_slot(1).unwrap_err();
    assert_eq!(err, CinemaError::SlotNotActive.into());
    let err = cinema.complete_slot(1).unwrap_err();
    assert_eq!(err, CinemaError::SlotNotActive.into());

    cinema.cancel_slot(2).unwrap();
    let err = cinema.complete_slot(2).unwrap_err();
    assert_eq!(err, CinemaError::SlotNotActive.into());
}

#[test]
fn test_grant_access_swaps_single_issuer() {
    let mut cinema = new_cinema();
    let issuer_a = Pubkey::new_unique();
    let issuer_b = Pubkey::new_unique();

    // Nobody is authorized until the first grant, not even the default key.
    assert!(!cinema.is_authorized(&Pubkey::default()));

    let previous = cinema.grant_access(issuer_a);
    assert_eq!(previous, Pubkey::default());
    assert!(cinema.is_authorized(&issuer_a));

    // Re-granting atomically revokes the previous issuer.
    let previous = cinema.grant_access(issuer_b);
    assert_eq!(previous, issuer_a);
    assert!(!cinema.is_authorized(&issuer_a));
    assert!(cinema.is_authorized(&issuer_b));
}
