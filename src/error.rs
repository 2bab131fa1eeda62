/// Possible errors from the checked `try_*` lookups.
///
/// The plain accessors never return these; they fall back to an empty string,
/// a clamped value or a placeholder instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(thiserror::Error))]
pub enum Error {
    #[cfg_attr(feature = "std", error("Family index {0} out of range"))]
    FamilyOutOfRange(u8),

    #[cfg_attr(feature = "std", error("Program number {0} out of range"))]
    ProgramOutOfRange(u8),

    #[cfg_attr(feature = "std", error("Drum kit index {0} out of range"))]
    KitIndexOutOfRange(u8),

    #[cfg_attr(
        feature = "std",
        error("No {vendor} drum kit at program change {program_change}")
    )]
    UnknownProgramChange {
        vendor: &'static str,
        program_change: u8,
    },

    #[cfg_attr(feature = "std", error("No percussion name for note {0}"))]
    UnknownDrumNote(u8),
}
