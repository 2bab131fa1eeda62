use log::trace;

use crate::consts::DRUM_NOTE_PLACEHOLDER;
use crate::error::Error;
use crate::label::copy_label;

/// A GM percussion note and its fixed-width label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrumNote {
    pub note: u8,
    pub name: &'static str, // Always 8 columns, space padded
}

const fn drum(note: u8, name: &'static str) -> DrumNote {
    DrumNote { note, name }
}

/// GM key map, notes 35 through 81.
pub static DRUM_NOTES: [DrumNote; 47] = [
    drum(35, "AcBasDrm"), // Acoustic Bass Drum
    drum(36, "BassDrm1"), // Bass Drum 1
    drum(37, "SideStck"), // Side Stick
    drum(38, "AcSnare "), // Acoustic Snare
    drum(39, "HandClap"), // Hand Clap
    drum(40, "ElSnare "), // Electric Snare
    drum(41, "LoFlrTom"), // Low Floor Tom
    drum(42, "ClHiHat "), // Closed Hi-Hat
    drum(43, "HiFlrTom"), // High Floor Tom
    drum(44, "PedlHHat"), // Pedal Hi-Hat
    drum(45, "LowTom1 "), // Low Tom
    drum(46, "OpnHiHat"), // Open Hi-Hat
    drum(47, "LowTom2 "), // Low-Mid Tom
    drum(48, "MidTom  "), // Hi-Mid Tom
    drum(49, "Crash1  "), // Crash Cymbal 1
    drum(50, "HiTom   "), // High Tom
    drum(51, "RideCym1"), // Ride Cymbal 1
    drum(52, "ChinaCym"), // Chinese Cymbal
    drum(53, "RideBell"), // Ride Bell
    drum(54, "Tamborin"), // Tambourine
    drum(55, "SplashCy"), // Splash Cymbal
    drum(56, "Cowbell "), // Cowbell
    drum(57, "Crash2  "), // Crash Cymbal 2
    drum(58, "VibrSlap"), // Vibraslap
    drum(59, "RideCym2"), // Ride Cymbal 2
    drum(60, "HiBongo "), // High Bongo
    drum(61, "LoBongo "), // Low Bongo
    drum(62, "MuteCong"), // Mute High Conga
    drum(63, "OpenCong"), // Open High Conga
    // From 64 on the labels sit one key off the GM 1 names; kept as shipped.
    drum(64, "HiTumba "),
    drum(65, "LoTumba "),
    drum(66, "HiTimbl "),
    drum(67, "LoTimbl "),
    drum(68, "AgogoHi "),
    drum(69, "AgogoLo "),
    drum(70, "Cabasa  "),
    drum(71, "Maracas "),
    drum(72, "WhistleL"),
    drum(73, "WhistleH"),
    drum(74, "GuiroSt "),
    drum(75, "GuiroLng"),
    drum(76, "Claves  "),
    drum(77, "HiWoodBl"),
    drum(78, "LoWoodBl"),
    drum(79, "MuteTria"),
    drum(80, "CuicaHi "),
    drum(81, "CuicaLo "),
];

/// Get the percussion label for `note`.
pub fn try_drum_note_name(note: u8) -> Result<&'static str, Error> {
    DRUM_NOTES
        .iter()
        .find(|entry| entry.note == note)
        .map(|entry| entry.name)
        .ok_or(Error::UnknownDrumNote(note))
}

/// Get the 8-column percussion label for `note`, or `"--------"` when the note
/// has no entry. The placeholder keeps the same width as a real label.
///
/// ```rust
/// assert_eq!(gm_names::drum_note_name(38), "AcSnare ");
/// assert_eq!(gm_names::drum_note_name(1), "--------");
/// ```
pub fn drum_note_name(note: u8) -> &'static str {
    try_drum_note_name(note).unwrap_or_else(|e| {
        trace!("{:?}", e);
        DRUM_NOTE_PLACEHOLDER
    })
}

/// Write the percussion label for `note` into `out`. See `copy_label`.
pub fn drum_note_name_to(out: &mut [u8], note: u8) -> usize {
    copy_label(out, drum_note_name(note))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{FIRST_DRUM_NOTE, FIXED_LABEL_WIDTH, LAST_DRUM_NOTE};
    use crate::label::terminated;

    #[test]
    fn labels_are_fixed_width() {
        for entry in DRUM_NOTES.iter() {
            assert_eq!(entry.name.len(), FIXED_LABEL_WIDTH, "{:?}", entry);
        }
        assert_eq!(DRUM_NOTE_PLACEHOLDER.len(), FIXED_LABEL_WIDTH);
    }

    #[test]
    fn covers_gm_key_map() {
        for note in 0..=u8::MAX {
            let known = (FIRST_DRUM_NOTE..=LAST_DRUM_NOTE).contains(&note);
            assert_eq!(try_drum_note_name(note).is_ok(), known, "note {}", note);
        }
    }

    #[test]
    fn lookup() {
        assert_eq!(drum_note_name(35), "AcBasDrm");
        assert_eq!(drum_note_name(38), "AcSnare ");
        assert_eq!(drum_note_name(42), "ClHiHat ");
        assert_eq!(drum_note_name(81), "CuicaLo ");
    }

    #[test]
    fn placeholder_on_miss() {
        assert_eq!(drum_note_name(1), "--------");
        assert_eq!(drum_note_name(34), "--------");
        assert_eq!(drum_note_name(82), "--------");
        assert_eq!(try_drum_note_name(127), Err(Error::UnknownDrumNote(127)));
    }

    #[test]
    fn name_to_buffer() {
        let mut out = [0xaa_u8; FIXED_LABEL_WIDTH + 1];
        assert_eq!(drum_note_name_to(&mut out, 38), 8);
        assert_eq!(&out, b"AcSnare \0");
        assert_eq!(drum_note_name_to(&mut out, 0), 8);
        assert_eq!(&out, b"--------\0");

        let mut out = [0xaa_u8; 4];
        assert_eq!(drum_note_name_to(&mut out, 46), 3);
        assert_eq!(terminated(&out), "Opn");
    }
}
