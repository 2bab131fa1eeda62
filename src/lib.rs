//! General MIDI and GS name tables for MIDI firmware.
//!
//! Every table is `'static` read-only data, and every accessor is total:
//! out-of-range codes produce an empty string, a clamped value, or the
//! `"--------"` percussion placeholder. The `*_to` variants copy the label
//! into a caller buffer with `copy_label`, which never writes past it.
//!
//! Disable the default `std` feature for `no_std` targets.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

mod consts;
mod drum;
mod error;
mod family;
mod kit;
mod label;
mod program;
mod variation;

pub use consts::{
    DRUM_NOTE_PLACEHOLDER, FAMILY_COUNT, FIRST_DRUM_NOTE, FIXED_LABEL_WIDTH, LABEL_CAPACITY,
    LAST_DRUM_NOTE, MAX_NAME_LEN, PROGRAM_COUNT, VARIATION_MAX,
};
pub use drum::{drum_note_name, drum_note_name_to, try_drum_note_name, DrumNote, DRUM_NOTES};
pub use error::Error;
pub use family::{
    clamp_program_to_family, family_name, family_name_to, family_of_program, try_family_name,
    Family, FAMILIES,
};
pub use kit::{
    drum_kit_name, drum_kit_name_to, kit_name_for_program_change, try_drum_kit_name, DrumKit,
    DrumKitTable, GS_KITS, SAM9703_KITS, SC8820_KITS,
};
pub use label::{copy_label, fixed_width, Label};
pub use program::{program_name, program_name_to, try_program_name, PROGRAM_NAMES};
pub use variation::{variation_abbrev, variation_abbrev_to, VARIATION_ABBREVS};
