use crate::consts::VARIATION_MAX;
use crate::label::copy_label;

/// Tags for GS variation banks, indexed by bank-select LSB. Selector 0 is the
/// capital tone.
pub static VARIATION_ABBREVS: [&str; VARIATION_MAX as usize + 1] =
    ["Cap", "V1", "V2", "V3", "V4", "V5", "V6", "V7"];

/// Get the variation tag for `selector`, clamped to the last variation.
///
/// ```rust
/// assert_eq!(gm_names::variation_abbrev(0), "Cap");
/// assert_eq!(gm_names::variation_abbrev(99), "V7");
/// ```
pub fn variation_abbrev(selector: u8) -> &'static str {
    VARIATION_ABBREVS[usize::from(selector.min(VARIATION_MAX))]
}

/// Write the variation tag for `selector` into `out`. See `copy_label`.
pub fn variation_abbrev_to(out: &mut [u8], selector: u8) -> usize {
    copy_label(out, variation_abbrev(selector))
}
