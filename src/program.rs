use log::trace;

use crate::consts::PROGRAM_COUNT;
use crate::error::Error;
use crate::label::copy_label;

/// Short display names for the 128 GM programs, indexed by program number.
pub static PROGRAM_NAMES: [&str; PROGRAM_COUNT as usize] = [
    // Piano
    "Acou Piano",
    "BrightPno",
    "ElecGrand",
    "HonkyTonk",
    "EPiano 1",
    "EPiano 2",
    "Harpsi",
    "Clavi",

    // Chromatic percussion
    "Celesta",
    "Glocken",
    "MusicBox",
    "Vibes",
    "Marimba",
    "Xylophone",
    "TubulBell",
    "Dulcimer",

    // Organ
    "DrawbarOr",
    "PercOrgan",
    "RockOrgan",
    "ChurchOrg",
    "ReedOrgan",
    "Accordian",
    "Harmonica",
    "TangoAccd",

    // Guitar
    "NylonGtr",
    "SteelGtr",
    "JazzGtr",
    "CleanGtr",
    "MutedGtr",
    "OverdrGtr",
    "Dist Gtr",
    "GtrHarm",

    // Bass
    "AcouBass",
    "FngrBass",
    "PickBass",
    "Fretless",
    "SlapBass1",
    "SlapBass2",
    "SynBass1",
    "SynBass2",

    // Strings
    "Violin",
    "Viola",
    "Cello",
    "ContraB",
    "Trem Str",
    "Pizz Str",
    "Harp",
    "Timpani",

    // Ensemble
    "Str Ens1",
    "Str Ens2",
    "SynStr1",
    "SynStr2",
    "Choir Aah",
    "Voice Ooh",
    "Syn Voice",
    "Orch Hit",

    // Brass
    "Trumpet",
    "Trombone",
    "Tuba",
    "MuteTrpt",
    "FrenchHrn",
    "BrassSect",
    "SynBrass1",
    "SynBrass2",

    // Reed
    "SopSax",
    "AltoSax",
    "TenorSax",
    "BariSax",
    "Oboe",
    "EnglHorn",
    "Bassoon",
    "Clarinet",

    // Pipe
    "Piccolo",
    "Flute",
    "Recorder",
    "PanFlute",
    "Bottle",
    "Shakuhachi",
    "Whistle",
    "Ocarina",

    // Synth lead
    "SquareLd",
    "SawLead",
    "Calliope",
    "Chiffer",
    "Charang",
    "Solo Vox",
    "5th Lead",
    "BassLead",

    // Synth pad
    "New Age",
    "Warm Pad",
    "Polysynth",
    "ChoirPad",
    "BowedPad",
    "MetalPad",
    "HaloPad",
    "SweepPad",

    // Synth effects
    "Rain",
    "SoundTrk",
    "Crystal",
    "Atmos",
    "Bright",
    "Goblins",
    "Echoes",
    "Sci-Fi",

    // Ethnic
    "Sitar",
    "Banjo",
    "Shamisen",
    "Koto",
    "Kalimba",
    "Bagpipe",
    "Fiddle",
    "Shanai",

    // Percussive
    "TinkleBel",
    "Agogo",
    "SteelDrms",
    "Woodblock",
    "Taiko",
    "MeloTom",
    "Syn Drum",
    "Rev Cym",

    // Sound effects
    "FretNoise",
    "Breath",
    "Seashore",
    "Bird",
    "Telephone",
    "Helicopt",
    "Applause",
    "Gunshot",
];

/// Get the name of GM program `program`.
pub fn try_program_name(program: u8) -> Result<&'static str, Error> {
    PROGRAM_NAMES
        .get(usize::from(program))
        .copied()
        .ok_or(Error::ProgramOutOfRange(program))
}

/// Get the name of GM program `program`, or an empty string past 127.
///
/// ```rust
/// assert_eq!(gm_names::program_name(0), "Acou Piano");
/// assert_eq!(gm_names::program_name(128), "");
/// ```
pub fn program_name(program: u8) -> &'static str {
    match try_program_name(program) {
        Ok(name) => name,
        Err(e) => {
            trace!("{:?}", e);
            ""
        }
    }
}

/// Write the name of GM program `program` into `out`. See `copy_label`.
pub fn program_name_to(out: &mut [u8], program: u8) -> usize {
    copy_label(out, program_name(program))
}
