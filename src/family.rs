use log::trace;

use crate::consts::*;
use crate::error::Error;
use crate::label::copy_label;

/// A contiguous block of GM programs sharing an instrument family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Family {
    pub start: u8, // First program, inclusive
    pub end: u8,   // Last program, inclusive
    pub name: &'static str,
}

impl Family {
    const fn new(index: u8, name: &'static str) -> Self {
        let start = index * FAMILY_SPAN;
        Family {
            start,
            end: start + FAMILY_SPAN - 1,
            name,
        }
    }

    /// Whether `program` belongs to this family.
    pub fn contains(&self, program: u8) -> bool {
        (self.start..=self.end).contains(&program)
    }

    /// Restrict `value` to this family's program range.
    pub fn clamp(&self, value: i32) -> u8 {
        value.clamp(i32::from(self.start), i32::from(self.end)) as u8
    }
}

/// The GM/GS families, in program order.
pub static FAMILIES: [Family; FAMILY_COUNT as usize] = [
    Family::new(0, "Piano"),
    Family::new(1, "Perc"),
    Family::new(2, "Organ"),
    Family::new(3, "Guitar"),
    Family::new(4, "Bass"),
    Family::new(5, "Strings"),
    Family::new(6, "Ensemble"),
    Family::new(7, "Brass"),
    Family::new(8, "Reeds"),
    Family::new(9, "Flutes"),
    Family::new(10, "Leads"),
    Family::new(11, "Pads"),
    Family::new(12, "FX"),
    Family::new(13, "Ethnic"),
    Family::new(14, "Perc"),
    Family::new(15, "FX"),
];

/// Get the family label at `index`.
pub fn try_family_name(index: u8) -> Result<&'static str, Error> {
    FAMILIES
        .get(usize::from(index))
        .map(|family| family.name)
        .ok_or(Error::FamilyOutOfRange(index))
}

/// Get the family label at `index`, or an empty string when there is none.
///
/// ```rust
/// assert_eq!(gm_names::family_name(4), "Bass");
/// assert_eq!(gm_names::family_name(16), "");
/// ```
pub fn family_name(index: u8) -> &'static str {
    try_family_name(index).unwrap_or_else(|e| {
        trace!("{:?}", e);
        ""
    })
}

/// Write the family label at `index` into `out`. See `copy_label`.
pub fn family_name_to(out: &mut [u8], index: u8) -> usize {
    copy_label(out, family_name(index))
}

/// Clamp `value` into the program range of family `index`.
///
/// Values outside the range snap to its nearest end; they are never wrapped.
/// An invalid `index` is treated as the last family.
///
/// ```rust
/// assert_eq!(gm_names::clamp_program_to_family(0, -5), 0);
/// assert_eq!(gm_names::clamp_program_to_family(0, 999), 7);
/// assert_eq!(gm_names::clamp_program_to_family(4, 35), 35);
/// ```
pub fn clamp_program_to_family(index: u8, value: i32) -> u8 {
    let last = FAMILIES.len() - 1;
    let i = usize::from(index);
    if i > last {
        trace!("Clamping family index {} to {}", index, last);
    }

    FAMILIES[i.min(last)].clamp(value)
}

/// Get the index of the family owning `program`.
pub fn family_of_program(program: u8) -> Option<u8> {
    FAMILIES
        .iter()
        .position(|family| family.contains(program))
        .map(|i| i as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label::terminated;

    #[test]
    fn families_partition_programs() {
        let mut next = 0_u16;
        for family in FAMILIES.iter() {
            assert_eq!(u16::from(family.start), next);
            assert_eq!(family.end - family.start + 1, FAMILY_SPAN);
            next = u16::from(family.end) + 1;
        }
        assert_eq!(next, u16::from(PROGRAM_COUNT));
    }

    #[test]
    fn names_in_range() {
        for i in 0..FAMILY_COUNT {
            assert!(!family_name(i).is_empty());
        }
        assert_eq!(family_name(0), "Piano");
        assert_eq!(family_name(15), "FX");
    }

    #[test]
    fn names_out_of_range() {
        for i in FAMILY_COUNT..=u8::MAX {
            assert_eq!(family_name(i), "");
            assert_eq!(try_family_name(i), Err(Error::FamilyOutOfRange(i)));
        }
    }

    #[test]
    fn name_to_buffer() {
        let mut out = [0xaa_u8; 5];
        assert_eq!(family_name_to(&mut out, 6), 4);
        assert_eq!(terminated(&out), "Ense");

        let mut out = [0xaa_u8; 4];
        assert_eq!(family_name_to(&mut out, 200), 0);
        assert_eq!(out[0], 0);
    }

    #[test]
    fn clamp_program() {
        assert_eq!(clamp_program_to_family(0, -5), 0);
        assert_eq!(clamp_program_to_family(0, 999), 7);
        assert_eq!(clamp_program_to_family(3, 0), 24);
        assert_eq!(clamp_program_to_family(3, 27), 27);
        assert_eq!(clamp_program_to_family(3, 32), 31);
        assert_eq!(clamp_program_to_family(15, i32::MAX), 127);
        assert_eq!(clamp_program_to_family(15, i32::MIN), 120);
    }

    #[test]
    fn clamp_program_invalid_family() {
        assert_eq!(clamp_program_to_family(99, 0), 120);
        assert_eq!(clamp_program_to_family(u8::MAX, 500), 127);
    }

    #[test]
    fn program_to_family() {
        for program in 0..PROGRAM_COUNT {
            let index = family_of_program(program).unwrap();
            assert!(FAMILIES[usize::from(index)].contains(program));
        }
        assert_eq!(family_of_program(33), Some(4));
        assert_eq!(family_of_program(PROGRAM_COUNT), None);
    }
}
