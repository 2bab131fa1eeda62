/// Number of GM instrument families.
pub const FAMILY_COUNT: u8 = 16;
/// Programs per family.
pub(crate) const FAMILY_SPAN: u8 = 8;
/// Number of GM programs.
pub const PROGRAM_COUNT: u8 = 128;

/// Highest reachable variation selector; larger selectors are clamped.
pub const VARIATION_MAX: u8 = 7;

/// Width of the fixed percussion and vendor kit labels.
pub const FIXED_LABEL_WIDTH: usize = 8;
/// Longest variable-length name in any table.
pub const MAX_NAME_LEN: usize = 10;
/// Capacity of a `Label`.
pub const LABEL_CAPACITY: usize = 16;

/// Shown in place of a percussion label when the note has no entry.
pub const DRUM_NOTE_PLACEHOLDER: &str = "--------";
/// Range of notes covered by the percussion table.
pub const FIRST_DRUM_NOTE: u8 = 35;
pub const LAST_DRUM_NOTE: u8 = 81;
