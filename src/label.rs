use arrayvec::ArrayString;

use crate::consts::LABEL_CAPACITY;

/// A stack-allocated label, sized for the longest name plus display padding.
pub type Label = ArrayString<LABEL_CAPACITY>;

/// Longest prefix of `src` that fits in `max` bytes without splitting a char.
fn prefix(src: &str, max: usize) -> &str {
    if src.len() <= max {
        return src;
    }

    let mut end = max;
    while !src.is_char_boundary(end) {
        end -= 1;
    }

    &src[..end]
}

/// Copy `src` into `out` as a NUL-terminated string.
///
/// At most `out.len() - 1` bytes of `src` are written, followed by a `0`
/// terminator. Nothing is written to an empty buffer. Returns the number of
/// label bytes written, not counting the terminator.
///
/// ```rust
/// let mut out = [0xff_u8; 6];
/// assert_eq!(gm_names::copy_label(&mut out, "Electronic"), 5);
/// assert_eq!(&out, b"Elect\0");
/// ```
pub fn copy_label(out: &mut [u8], src: &str) -> usize {
    let capacity = match out.len().checked_sub(1) {
        Some(capacity) => capacity,
        None => return 0,
    };

    let src = prefix(src, capacity);
    let len = src.len();
    out[..len].copy_from_slice(src.as_bytes());
    out[len] = 0;

    len
}

/// Fit `src` to exactly `width` columns, truncating or padding with spaces.
///
/// `width` is capped at `LABEL_CAPACITY`.
///
/// ```rust
/// assert_eq!(gm_names::fixed_width("Harp", 8).as_str(), "Harp    ");
/// assert_eq!(gm_names::fixed_width("Shakuhachi", 8).as_str(), "Shakuhac");
/// ```
pub fn fixed_width(src: &str, width: usize) -> Label {
    let width = width.min(LABEL_CAPACITY);

    let mut label = Label::new();
    label.push_str(prefix(src, width));
    while label.len() < width {
        label.push(' ');
    }

    label
}

#[cfg(test)]
pub(crate) fn terminated(out: &[u8]) -> &str {
    let end = out.iter().position(|&b| b == 0).unwrap();
    core::str::from_utf8(&out[..end]).unwrap()
}
