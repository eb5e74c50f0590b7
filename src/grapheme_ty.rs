use crate::error::{Error, Result};
use crate::utf16::{self, code_point_string, CodePointFormat};
use smallvec::SmallVec;
use std::fmt;

pub(crate) type CodePointVec = SmallVec<[u32; 4]>;
pub(crate) type RawUnitVec = SmallVec<[u16; 8]>;

/// One grapheme cluster: its code points, their UTF-16 form and the UTF-16
/// offset of the first unit within the owning string.
///
/// The code points never change after construction; only the owning
/// [`Unistring`](crate::Unistring) moves the offset around.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Grapheme {
    code_points: CodePointVec,
    raw: RawUnitVec,
    raw_index: usize,
}

impl Grapheme {
    /// Builds a cluster from its code points.
    ///
    /// No boundary detection happens here: the caller decides what forms a
    /// cluster.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyCluster`] for an empty list and
    /// [`Error::InvalidCodePoint`] for a value above U+10FFFF.
    pub fn new(code_points: &[u32]) -> Result<Self> {
        if code_points.is_empty() {
            return Err(Error::EmptyCluster);
        }
        utf16::check_code_points(code_points)?;
        Ok(Self::from_code_points_unchecked(code_points, 0))
    }

    /// Like [`Grapheme::new`], with the cluster placed at `raw_index`.
    ///
    /// # Errors
    ///
    /// Same as [`Grapheme::new`].
    pub fn with_raw_index(code_points: &[u32], raw_index: usize) -> Result<Self> {
        let mut grapheme = Self::new(code_points)?;
        grapheme.raw_index = raw_index;
        Ok(grapheme)
    }

    pub(crate) fn from_code_points_unchecked(code_points: &[u32], raw_index: usize) -> Self {
        let mut raw = RawUnitVec::new();
        let mut buf = [0; utf16::MAX_UNIT_COUNT];
        for &cp in code_points {
            let len = utf16::encode_utf16_raw(cp, &mut buf);
            raw.extend_from_slice(&buf[..len]);
        }
        Grapheme {
            code_points: CodePointVec::from_slice(code_points),
            raw,
            raw_index,
        }
    }

    /// The code points of this cluster, in order.
    pub fn code_points(&self) -> &[u32] {
        &self.code_points
    }

    /// The UTF-16 form of this cluster.
    pub fn raw_string(&self) -> &[u16] {
        &self.raw
    }

    /// UTF-16 offset of this cluster within the string that owns it.
    pub fn raw_index(&self) -> usize {
        self.raw_index
    }

    /// Number of UTF-16 code units in this cluster.
    pub fn len_utf16(&self) -> usize {
        self.raw.len()
    }

    pub(crate) fn set_raw_index(&mut self, raw_index: usize) {
        self.raw_index = raw_index;
    }

    /// Describes the cluster for diagnostics.
    ///
    /// The short form joins the code points with `×`, e.g. `0061 × 0301`; the
    /// detailed form lists the code points, offset and UTF-16 length on
    /// separate lines.
    pub fn dump(&self, detail: bool) -> String {
        if detail {
            let code_points = self
                .code_points
                .iter()
                .map(|&cp| code_point_string(cp, CodePointFormat::Unicode))
                .collect::<Vec<_>>()
                .join(", ");
            format!(
                "codePoints: [{}]\n  rawIndex: {}\n rawString: ({}) \"{}\"",
                code_points,
                self.raw_index,
                self.raw.len(),
                self
            )
        } else {
            self.code_points
                .iter()
                .map(|&cp| code_point_string(cp, CodePointFormat::Plain))
                .collect::<Vec<_>>()
                .join(" × ")
        }
    }

    /// Returns an iterator over the `char`s of this cluster. Unpaired
    /// surrogates come out as U+FFFD.
    pub fn chars(&self) -> impl DoubleEndedIterator<Item = char> + '_ {
        self.code_points
            .iter()
            .map(|&cp| char::from_u32(cp).unwrap_or(char::REPLACEMENT_CHARACTER))
    }
}

impl fmt::Display for Grapheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in self.chars() {
            write!(f, "{}", ch)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Grapheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Grapheme(\"")?;
        for ch in self.chars() {
            write!(f, "{}", ch.escape_debug())?;
        }
        write!(f, "\")")
    }
}

impl PartialEq<str> for Grapheme {
    fn eq(&self, other: &str) -> bool {
        self.chars().eq(other.chars())
    }
}

impl PartialEq<&str> for Grapheme {
    fn eq(&self, other: &&str) -> bool {
        self.chars().eq(other.chars())
    }
}

#[cfg(test)]
mod tests {
    use super::Grapheme;
    use crate::error::Error;

    #[test]
    fn test_new() {
        let g = Grapheme::new(&[0x61, 0x301]).unwrap();
        assert_eq!(&[0x61, 0x301], g.code_points());
        assert_eq!(&[0x61, 0x301], g.raw_string());
        assert_eq!(0, g.raw_index());

        let flag = Grapheme::with_raw_index(&[0x1F1FA, 0x1F1F8], 3).unwrap();
        assert_eq!(4, flag.len_utf16());
        assert_eq!(3, flag.raw_index());

        assert_eq!(Err(Error::EmptyCluster), Grapheme::new(&[]));
        assert_eq!(
            Err(Error::InvalidCodePoint(0x11_0000)),
            Grapheme::new(&[0x61, 0x11_0000])
        );
    }

    #[test]
    fn test_display() {
        assert_eq!("a\u{301}", Grapheme::new(&[0x61, 0x301]).unwrap().to_string());
        assert_eq!("\u{FFFD}", Grapheme::new(&[0xD800]).unwrap().to_string());
        assert_eq!(
            "Grapheme(\"\\r\\n\")",
            format!("{:?}", Grapheme::new(&[0x0D, 0x0A]).unwrap())
        );
        assert!(Grapheme::new(&[0x0D, 0x0A]).unwrap() == "\r\n");
    }

    #[test]
    fn test_dump() {
        let g = Grapheme::with_raw_index(&[0x61, 0x301], 2).unwrap();
        assert_eq!("0061 × 0301", g.dump(false));
        assert_eq!(
            "codePoints: [U+0061, U+0301]\n  rawIndex: 2\n rawString: (2) \"a\u{301}\"",
            g.dump(true)
        );
    }

    #[test]
    fn test_clone_is_deep() {
        let g = Grapheme::new(&[0x1F600]).unwrap();
        let mut h = g.clone();
        h.set_raw_index(7);
        assert_eq!(0, g.raw_index());
        assert_eq!(g.code_points(), h.code_points());
    }
}
