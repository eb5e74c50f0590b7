use crate::error::{Error, Result};
use smallvec::SmallVec;

/// The largest valid Unicode scalar value or surrogate.
pub const MAX_CODE_POINT: u32 = 0x10_FFFF;

pub(crate) const MAX_UNIT_COUNT: usize = 2;

const SURROGATE_OFFSET: u32 = 0x1_0000;
const TAG_HIGH: u16 = 0xD800;
const TAG_LOW: u16 = 0xDC00;
const SURROGATE_VALUE_MASK: u32 = 0x3FF;

/// UTF-16 form of a single code point.
pub type Utf16Units = SmallVec<[u16; MAX_UNIT_COUNT]>;

/// Returns the number of UTF-16 code units needed to encode `cp`.
pub fn len_utf16(cp: u32) -> usize {
    if cp < SURROGATE_OFFSET {
        1
    } else {
        2
    }
}

#[inline]
pub(crate) fn is_high_surrogate(unit: u16) -> bool {
    (0xD800..0xDC00).contains(&unit)
}

#[inline]
pub(crate) fn is_low_surrogate(unit: u16) -> bool {
    (0xDC00..0xE000).contains(&unit)
}

/// Returns the first value above [`MAX_CODE_POINT`] as an error.
pub(crate) fn check_code_points(cps: &[u32]) -> Result<()> {
    match cps.iter().find(|&&cp| cp > MAX_CODE_POINT) {
        Some(&cp) => Err(Error::InvalidCodePoint(cp)),
        None => Ok(()),
    }
}

/// Encodes a code point into the provided buffer and returns the number of
/// units written. Values below 0x10000, lone surrogates included, take one
/// unit; supplementary code points take a surrogate pair.
///
/// `cp` must not exceed [`MAX_CODE_POINT`]; callers validate first.
///
/// # Panics
///
/// Panics if the buffer is not large enough for the encoded form.
pub(crate) fn encode_utf16_raw(cp: u32, dst: &mut [u16]) -> usize {
    debug_assert!(cp <= MAX_CODE_POINT, "U+{:X} is not a code point", cp);
    let len = len_utf16(cp);
    match (len, dst) {
        (1, [a, ..]) => {
            *a = cp as u16;
        }
        (2, [a, b, ..]) => {
            let v = cp - SURROGATE_OFFSET;
            *a = TAG_HIGH | (v >> 10 & SURROGATE_VALUE_MASK) as u16;
            *b = TAG_LOW | (v & SURROGATE_VALUE_MASK) as u16;
        }
        (len, dst) => panic!(
            "encode_utf16_raw: need {} units to encode U+{:04X}, the buffer has {}",
            len,
            cp,
            dst.len()
        ),
    }
    len
}

/// Returns the UTF-16 form of a code point.
///
/// # Errors
///
/// Returns [`Error::InvalidCodePoint`] above U+10FFFF.
pub fn encode(cp: u32) -> Result<Utf16Units> {
    check_code_points(&[cp])?;
    let mut buf = [0; MAX_UNIT_COUNT];
    let len = encode_utf16_raw(cp, &mut buf);
    Ok(Utf16Units::from_slice(&buf[..len]))
}

#[inline]
fn decode_surrogate_pair(high: u16, low: u16) -> u32 {
    SURROGATE_OFFSET
        + ((u32::from(high) & SURROGATE_VALUE_MASK) << 10)
        + (u32::from(low) & SURROGATE_VALUE_MASK)
}

/// Decodes UTF-16 code units into code points.
///
/// A well-formed surrogate pair becomes one supplementary code point; an
/// unpaired surrogate is passed through as its own value.
pub fn code_points(units: &[u16]) -> Vec<u32> {
    let mut result = Vec::with_capacity(units.len());
    let mut rest = units;
    loop {
        match *rest {
            [] => break,
            [high, low, ref tail @ ..] if is_high_surrogate(high) && is_low_surrogate(low) => {
                result.push(decode_surrogate_pair(high, low));
                rest = tail;
            }
            [unit, ref tail @ ..] => {
                result.push(u32::from(unit));
                rest = tail;
            }
        }
    }
    result
}

/// Encodes a sequence of code points back into UTF-16.
///
/// # Errors
///
/// Returns [`Error::InvalidCodePoint`] for the first value above U+10FFFF.
pub fn units_from_code_points(cps: &[u32]) -> Result<Vec<u16>> {
    check_code_points(cps)?;
    Ok(encode_all(cps))
}

pub(crate) fn encode_all(cps: &[u32]) -> Vec<u16> {
    let mut result = Vec::with_capacity(cps.len());
    let mut buf = [0; MAX_UNIT_COUNT];
    for &cp in cps {
        let len = encode_utf16_raw(cp, &mut buf);
        result.extend_from_slice(&buf[..len]);
    }
    result
}

/// Converts UTF-16 to a `String`, replacing unpaired surrogates with U+FFFD.
pub(crate) fn lossy_string(units: &[u16]) -> String {
    String::from_utf16_lossy(units)
}

/// Display forms accepted by [`code_point_string`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CodePointFormat {
    /// Bare hex digits, e.g. `00E9`.
    #[default]
    Plain,
    /// Numeric character reference, e.g. `&#x00E9;`.
    Entity,
    /// Unicode notation, e.g. `U+00E9`.
    Unicode,
}

/// Formats a code point as upper-case hex, zero padded to four digits below
/// 0x10000 and unpadded above.
pub fn code_point_string(cp: u32, format: CodePointFormat) -> String {
    match format {
        CodePointFormat::Plain => format!("{cp:04X}"),
        CodePointFormat::Entity => format!("&#x{cp:04X};"),
        CodePointFormat::Unicode => format!("U+{cp:04X}"),
    }
}

#[cfg(test)]
mod tests {
    use super::{
        code_point_string, code_points, encode, len_utf16, units_from_code_points,
        CodePointFormat,
    };
    use crate::error::Error;

    #[test]
    fn test_decode_pairs_and_lone_surrogates() {
        let units: Vec<u16> = "a\u{1F1FA}".encode_utf16().collect();
        assert_eq!(vec![0x61, 0x1F1FA], code_points(&units));

        assert_eq!(vec![0xD83D, 0x61], code_points(&[0xD83D, 0x61]));
        assert_eq!(vec![0xDC00, 0xD800], code_points(&[0xDC00, 0xD800]));
    }

    #[test]
    fn test_encode() {
        assert_eq!(&[0x61][..], &encode(0x61).unwrap()[..]);
        assert_eq!(&[0xD83C, 0xDDFA][..], &encode(0x1F1FA).unwrap()[..]);
        assert_eq!(&[0xDBFF, 0xDFFF][..], &encode(0x10_FFFF).unwrap()[..]);
        assert_eq!(&[0xD800][..], &encode(0xD800).unwrap()[..]);
        assert_eq!(2, len_utf16(0x1_0000));
        assert_eq!(1, len_utf16(0xFFFF));
    }

    #[test]
    fn test_encode_rejects_values_past_the_code_space() {
        assert_eq!(Err(Error::InvalidCodePoint(0x11_0000)), encode(0x11_0000));
        assert_eq!(
            Err(Error::InvalidCodePoint(0x20_0000)),
            units_from_code_points(&[0x61, 0x20_0000, 0x11_0000])
        );
        assert_eq!(
            Ok(vec![0x61, 0xD83D, 0xDE00]),
            units_from_code_points(&[0x61, 0x1F600])
        );
    }

    #[test]
    fn test_code_point_string() {
        assert_eq!("00E9", code_point_string(0xE9, CodePointFormat::Plain));
        assert_eq!("1F600", code_point_string(0x1F600, CodePointFormat::Plain));
        assert_eq!("&#x000A;", code_point_string(0x0A, CodePointFormat::Entity));
        assert_eq!("U+1F1FA", code_point_string(0x1F1FA, CodePointFormat::Unicode));
    }
}
