use log::trace;

use crate::error::Error;
use crate::label::copy_label;

/// A drum kit and the program change that selects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrumKit {
    pub program_change: u8,
    pub name: &'static str,
}

/// The drum kits offered by one sound source.
///
/// Entries are kept in device order. They are not required to be sorted or
/// gap-free, and names may repeat across program changes.
#[derive(Debug)]
pub struct DrumKitTable {
    pub vendor: &'static str,
    pub kits: &'static [DrumKit],
}

const fn kit(program_change: u8, name: &'static str) -> DrumKit {
    DrumKit {
        program_change,
        name,
    }
}

/// The common GS kit set, addressed by compact kit index. Program changes
/// are zero-based.
pub static GS_KITS: DrumKitTable = DrumKitTable {
    vendor: "GS",
    kits: &[
        kit(0, "Standard"),
        kit(8, "Room"),
        kit(16, "Power"),
        kit(24, "Electronic"),
        kit(25, "TR-808"),
        kit(32, "Jazz"),
        kit(40, "Brush"),
        kit(48, "Orchestra"),
        kit(56, "SFX"),
        kit(127, "CM6432"),
    ],
};

/// Dream SAM9703 kits. Program changes are one-based, as shown on the device.
pub static SAM9703_KITS: DrumKitTable = DrumKitTable {
    vendor: "SAM9703",
    kits: &[
        kit(1, "STDSET1 "),
        kit(9, "ROOMSET "),
        kit(17, "POWERSET"),
        kit(25, "ELECSET "),
        kit(26, "TR808SET"),
        kit(33, "JAZZ    "),
        kit(41, "BRUSH   "),
        kit(49, "ORCHESTR"),
        kit(57, "SFXSET  "),
        kit(127, "CM6432  "),
    ],
};

/// Roland SC-8820 kits. Program changes are one-based, as shown on the device.
pub static SC8820_KITS: DrumKitTable = DrumKitTable {
    vendor: "SC-8820",
    kits: &[
        kit(1, "STANDARD"),
        kit(2, "STANDARD"),
        kit(3, "STANDARD"),
        kit(9, "ROOM    "),
        kit(10, "HIPHOP  "),
        kit(11, "JUNGLE  "),
        kit(12, "TECHNO  "),
        kit(13, "ROOMLR  "),
        kit(14, "HOUSE   "),
        kit(17, "POWER   "),
        kit(25, "ELECTRON"),
        kit(26, "TR808   "),
        kit(27, "DANCE   "),
        kit(28, "CR78    "),
        kit(29, "TR606   "),
        kit(30, "TR707   "),
        kit(31, "TR909   "),
        kit(33, "JAZZ    "),
        kit(34, "JAZZLR  "),
        kit(41, "BRUSH   "),
        kit(42, "BRUSH2  "),
        kit(43, "BRUSH2LR"),
        kit(49, "ORCHESTR"),
        kit(50, "ETHNIC  "),
        kit(51, "KICKSNAR"),
        kit(52, "KICKSNAR"),
        kit(53, "ASIA    "),
        kit(54, "CYMBALCL"),
        kit(55, "GAMELAN1"),
        kit(56, "GAMELAN2"),
        kit(57, "SFX     "),
        kit(58, "RHYTHMFX"),
        kit(59, "RHYTHMFX"),
        kit(60, "RHYTHMFX"),
        kit(61, "SFX2    "),
        kit(62, "VOICE   "),
        kit(63, "CYMCLAP "),
    ],
};

impl DrumKitTable {
    pub fn len(&self) -> usize {
        self.kits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kits.is_empty()
    }

    /// Get the kit at compact index `index`.
    pub fn get(&self, index: u8) -> Option<&'static DrumKit> {
        let kits: &'static [DrumKit] = self.kits;
        kits.get(usize::from(index))
    }

    /// Get the compact index of the first kit selected by exactly `pc`.
    pub fn index_of_program_change(&self, pc: u8) -> Option<u8> {
        self.kits
            .iter()
            .position(|kit| kit.program_change == pc)
            .map(|i| i as u8)
    }

    /// Get the name of the first kit selected by exactly `pc`.
    pub fn try_name_for_program_change(&self, pc: u8) -> Result<&'static str, Error> {
        let kits: &'static [DrumKit] = self.kits;
        kits.iter()
            .find(|kit| kit.program_change == pc)
            .map(|kit| kit.name)
            .ok_or(Error::UnknownProgramChange {
                vendor: self.vendor,
                program_change: pc,
            })
    }

    /// Get the name of the first kit selected by exactly `pc`.
    ///
    /// There is no fallback to a neighbouring kit; see `nearest_preceding`
    /// for that.
    ///
    /// ```rust
    /// use gm_names::SC8820_KITS;
    ///
    /// assert_eq!(SC8820_KITS.name_for_program_change(26), Some("TR808   "));
    /// assert_eq!(SC8820_KITS.name_for_program_change(4), None);
    /// ```
    pub fn name_for_program_change(&self, pc: u8) -> Option<&'static str> {
        self.try_name_for_program_change(pc)
            .map_err(|e| trace!("{:?}", e))
            .ok()
    }

    /// Write the kit name for `pc` into `out`, or `not_found` when no kit
    /// matches exactly. See `copy_label`.
    pub fn name_for_program_change_to(&self, out: &mut [u8], pc: u8, not_found: &str) -> usize {
        copy_label(out, self.name_for_program_change(pc).unwrap_or(not_found))
    }

    /// Get the kit with the highest program change not above `pc`.
    ///
    /// Devices commonly fall back to the kit at the start of a bank when an
    /// empty program is selected. On ties the earlier entry wins.
    pub fn nearest_preceding(&self, pc: u8) -> Option<&'static DrumKit> {
        let kits: &'static [DrumKit] = self.kits;
        kits.iter()
            .filter(|kit| kit.program_change <= pc)
            .fold(None, |best: Option<&'static DrumKit>, kit| match best {
                Some(best) if best.program_change >= kit.program_change => Some(best),
                _ => Some(kit),
            })
    }
}

/// Get the name of the kit selected by exactly `pc` in `table`.
pub fn kit_name_for_program_change(table: &DrumKitTable, pc: u8) -> Option<&'static str> {
    table.name_for_program_change(pc)
}

/// Get the name of GS kit `index`.
pub fn try_drum_kit_name(index: u8) -> Result<&'static str, Error> {
    GS_KITS
        .get(index)
        .map(|kit| kit.name)
        .ok_or(Error::KitIndexOutOfRange(index))
}

/// Get the name of GS kit `index`, or an empty string when there is none.
///
/// ```rust
/// assert_eq!(gm_names::drum_kit_name(4), "TR-808");
/// assert_eq!(gm_names::drum_kit_name(10), "");
/// ```
pub fn drum_kit_name(index: u8) -> &'static str {
    try_drum_kit_name(index).unwrap_or_else(|e| {
        trace!("{:?}", e);
        ""
    })
}

/// Write the name of GS kit `index` into `out`. See `copy_label`.
pub fn drum_kit_name_to(out: &mut [u8], index: u8) -> usize {
    copy_label(out, drum_kit_name(index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{FIXED_LABEL_WIDTH, MAX_NAME_LEN};
    use crate::label::terminated;

    const NOT_FOUND: &str = "????????";

    #[test]
    fn table_shapes() {
        assert_eq!(GS_KITS.len(), 10);
        assert_eq!(SAM9703_KITS.len(), 10);
        assert_eq!(SC8820_KITS.len(), 37);

        for kit in GS_KITS.kits {
            assert!(!kit.name.is_empty() && kit.name.len() <= MAX_NAME_LEN);
        }
        for kit in SAM9703_KITS.kits.iter().chain(SC8820_KITS.kits) {
            assert_eq!(kit.name.len(), FIXED_LABEL_WIDTH, "{:?}", kit);
        }
    }

    #[test]
    fn by_index() {
        assert_eq!(drum_kit_name(0), "Standard");
        assert_eq!(drum_kit_name(3), "Electronic");
        assert_eq!(drum_kit_name(9), "CM6432");
        assert_eq!(drum_kit_name(10), "");
        assert_eq!(try_drum_kit_name(255), Err(Error::KitIndexOutOfRange(255)));

        let mut out = [0xaa_u8; 9];
        assert_eq!(drum_kit_name_to(&mut out, 3), 8);
        assert_eq!(terminated(&out), "Electron");
    }

    #[test]
    fn by_program_change_exact() {
        for table in [&GS_KITS, &SAM9703_KITS, &SC8820_KITS] {
            for kit in table.kits {
                let first = table
                    .kits
                    .iter()
                    .find(|other| other.program_change == kit.program_change)
                    .unwrap();
                assert_eq!(table.name_for_program_change(kit.program_change), Some(first.name));
            }
        }

        assert_eq!(SAM9703_KITS.name_for_program_change(17), Some("POWERSET"));
        assert_eq!(kit_name_for_program_change(&SC8820_KITS, 63), Some("CYMCLAP "));
    }

    #[test]
    fn by_program_change_unlisted() {
        // Between STDSET1 and ROOMSET; must not borrow either name.
        assert_eq!(SAM9703_KITS.name_for_program_change(5), None);
        assert_eq!(SAM9703_KITS.name_for_program_change(0), None);
        assert_eq!(SC8820_KITS.name_for_program_change(64), None);
        assert_eq!(GS_KITS.name_for_program_change(1), None);
        assert_eq!(
            SC8820_KITS.try_name_for_program_change(4),
            Err(Error::UnknownProgramChange {
                vendor: "SC-8820",
                program_change: 4,
            })
        );

        let mut out = [0xaa_u8; 9];
        assert_eq!(SAM9703_KITS.name_for_program_change_to(&mut out, 5, NOT_FOUND), 8);
        assert_eq!(terminated(&out), NOT_FOUND);
        assert_eq!(SAM9703_KITS.name_for_program_change_to(&mut out, 26, NOT_FOUND), 8);
        assert_eq!(terminated(&out), "TR808SET");
    }

    #[test]
    fn program_change_to_index() {
        assert_eq!(GS_KITS.index_of_program_change(25), Some(4));
        assert_eq!(GS_KITS.index_of_program_change(127), Some(9));
        assert_eq!(GS_KITS.index_of_program_change(26), None);
        assert_eq!(SC8820_KITS.index_of_program_change(3), Some(2));
    }

    #[test]
    fn nearest_preceding_kit() {
        assert_eq!(SAM9703_KITS.nearest_preceding(5).unwrap().name, "STDSET1 ");
        assert_eq!(SAM9703_KITS.nearest_preceding(26).unwrap().name, "TR808SET");
        assert_eq!(SAM9703_KITS.nearest_preceding(100).unwrap().name, "SFXSET  ");
        assert_eq!(SAM9703_KITS.nearest_preceding(0), None);
        assert_eq!(SC8820_KITS.nearest_preceding(127).unwrap().name, "CYMCLAP ");
        assert_eq!(GS_KITS.nearest_preceding(0).unwrap().name, "Standard");
    }
}
