use crate::{
    cluster::{build_grapheme_clusters, grapheme_clusters},
    error::{Error, Result},
    grapheme_ty::Grapheme,
    utf16,
};
use std::{cmp::Ordering, fmt, ops, slice};

/// A mutable string addressed by grapheme cluster.
///
/// Every positional argument is a cluster index. Negative indices count from
/// the end where noted, and indices are clamped to `0..=len()` rather than
/// rejected. Each cluster records its UTF-16 offset, which mutations keep up
/// to date incrementally.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Unistring {
    clusters: Vec<Grapheme>,
}

impl fmt::Display for Unistring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for grapheme in &self.clusters {
            write!(f, "{}", grapheme)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Unistring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unistring(")?;
        f.debug_list().entries(&self.clusters).finish()?;
        write!(f, ")")
    }
}

impl PartialEq<str> for Unistring {
    fn eq(&self, other: &str) -> bool {
        self.clusters
            .iter()
            .flat_map(|grapheme| grapheme.chars())
            .eq(other.chars())
    }
}

impl PartialEq<&str> for Unistring {
    fn eq(&self, other: &&str) -> bool {
        *self == **other
    }
}

fn find_units(haystack: &[u16], needle: &[u16], from: usize) -> Option<usize> {
    if needle.is_empty() {
        return Some(from.min(haystack.len()));
    }
    haystack
        .get(from..)?
        .windows(needle.len())
        .position(|window| window == needle)
        .map(|pos| pos + from)
}

fn rfind_units(haystack: &[u16], needle: &[u16], limit: usize) -> Option<usize> {
    if needle.is_empty() {
        return Some(limit.min(haystack.len()));
    }
    let last_start = haystack.len().checked_sub(needle.len())?.min(limit);
    (0..=last_start)
        .rev()
        .find(|&pos| haystack[pos..pos + needle.len()] == *needle)
}

impl Unistring {
    /// Creates a new empty `Unistring`.
    pub const fn new() -> Self {
        Unistring {
            clusters: Vec::new(),
        }
    }

    /// Segments UTF-16 text into a `Unistring`. Unpaired surrogates are kept
    /// as clusters of their own.
    pub fn from_utf16(units: &[u16]) -> Self {
        Unistring {
            clusters: grapheme_clusters(&utf16::code_points(units)),
        }
    }

    /// Segments a sequence of code points into a `Unistring`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCodePoint`] if a value is above U+10FFFF.
    pub fn try_from_code_points(code_points: &[u32]) -> Result<Self> {
        Ok(Unistring {
            clusters: build_grapheme_clusters(code_points)?,
        })
    }

    /// Builds a `Unistring` from existing clusters, recomputing their offsets
    /// from left to right. No re-segmentation takes place.
    pub fn from_graphemes<I: IntoIterator<Item = Grapheme>>(graphemes: I) -> Self {
        let mut raw_index = 0;
        let clusters = graphemes
            .into_iter()
            .map(|mut grapheme| {
                grapheme.set_raw_index(raw_index);
                raw_index += grapheme.len_utf16();
                grapheme
            })
            .collect();
        Unistring { clusters }
    }

    fn ensure_index(&self, index: isize) -> usize {
        let len = self.clusters.len();
        if index < 0 {
            len.saturating_sub(index.unsigned_abs())
        } else {
            index.unsigned_abs().min(len)
        }
    }

    fn clamp_index(&self, index: isize) -> usize {
        if index < 0 {
            0
        } else {
            index.unsigned_abs().min(self.clusters.len())
        }
    }

    fn end_raw_index(&self) -> usize {
        self.clusters
            .last()
            .map_or(0, |last| last.raw_index() + last.len_utf16())
    }

    fn sub_range(&self, start: usize, end: usize) -> Self {
        Self::from_graphemes(self.clusters[start..end].iter().cloned())
    }

    /// Number of grapheme clusters.
    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    /// Returns whether the string has no clusters.
    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    /// Total length in UTF-16 code units.
    pub fn len_utf16(&self) -> usize {
        self.end_raw_index()
    }

    /// Returns an iterator over the clusters.
    pub fn iter(&self) -> slice::Iter<'_, Grapheme> {
        self.clusters.iter()
    }

    /// The clusters as a slice.
    pub fn clusters(&self) -> &[Grapheme] {
        &self.clusters
    }

    /// Returns the UTF-16 form of the whole string.
    pub fn to_utf16(&self) -> Vec<u16> {
        let mut units = Vec::with_capacity(self.len_utf16());
        for grapheme in &self.clusters {
            units.extend_from_slice(grapheme.raw_string());
        }
        units
    }

    /// Describes the clusters for diagnostics, either as `÷ 0061 ÷ 0062 ÷`
    /// or, with `detail`, one block per cluster.
    pub fn dump(&self, detail: bool) -> String {
        if detail {
            self.clusters
                .iter()
                .enumerate()
                .map(|(index, grapheme)| {
                    format!("*** Grapheme Cluster #{} ***\n{}", index, grapheme.dump(true))
                })
                .collect::<Vec<_>>()
                .join("\n")
        } else {
            let body = self
                .clusters
                .iter()
                .map(|grapheme| grapheme.dump(false))
                .collect::<Vec<_>>()
                .join(" ÷ ");
            format!("÷ {} ÷", body)
        }
    }

    /// Inserts `source` before the cluster at `position`; a negative position
    /// counts from the end.
    ///
    /// Text sources are segmented on their own and the resulting clusters
    /// are spliced in as they are: clusters on either side of the two new
    /// seams are not merged even where the boundary rules would join them.
    pub fn insert<S: Into<Unistring>>(&mut self, source: S, position: isize) -> &mut Self {
        let start = self.ensure_index(position);
        let mut inserted = source.into().clusters;

        let src_delta = self
            .clusters
            .get(start)
            .map_or_else(|| self.end_raw_index(), Grapheme::raw_index);
        let mut dst_delta = 0;
        for grapheme in &mut inserted {
            grapheme.set_raw_index(grapheme.raw_index() + src_delta);
            dst_delta += grapheme.len_utf16();
        }
        for grapheme in &mut self.clusters[start..] {
            grapheme.set_raw_index(grapheme.raw_index() + dst_delta);
        }

        log::trace!(
            "insert {} clusters at {}, shifting the rest by {} units",
            inserted.len(),
            start,
            dst_delta
        );
        self.clusters.splice(start..start, inserted);
        self
    }

    /// Removes `length` clusters starting at `start`, or every cluster from
    /// `start` on when `length` is `None`. A negative `start` counts from the
    /// end and the length is clamped to what is available.
    pub fn delete(&mut self, start: isize, length: Option<usize>) -> &mut Self {
        let start = self.ensure_index(start);
        let available = self.clusters.len() - start;
        let length = length.map_or(available, |length| length.min(available));
        let end = start + length;

        let delta: usize = self.clusters[start..end]
            .iter()
            .map(Grapheme::len_utf16)
            .sum();
        for grapheme in &mut self.clusters[end..] {
            grapheme.set_raw_index(grapheme.raw_index() - delta);
        }

        log::trace!(
            "delete {} clusters at {}, shifting the rest by -{} units",
            length,
            start,
            delta
        );
        self.clusters.drain(start..end);
        self
    }

    /// Appends `source` to the end.
    pub fn append<S: Into<Unistring>>(&mut self, source: S) -> &mut Self {
        let end = isize::try_from(self.clusters.len()).unwrap_or(isize::MAX);
        self.insert(source, end)
    }

    /// Same as [`Unistring::append`].
    pub fn concat<S: Into<Unistring>>(&mut self, source: S) -> &mut Self {
        self.append(source)
    }

    /// The cluster at `index` (negative counts from the end).
    pub fn cluster_at(&self, index: isize) -> Option<&Grapheme> {
        self.clusters.get(self.ensure_index(index))
    }

    /// Code points of the cluster at `index` (negative counts from the end).
    pub fn code_points_at(&self, index: isize) -> Option<&[u32]> {
        self.cluster_at(index).map(Grapheme::code_points)
    }

    /// UTF-16 form of the cluster at `index`, or an empty slice if there is
    /// no such cluster.
    pub fn raw_string_at(&self, index: isize) -> &[u16] {
        self.cluster_at(index).map_or(&[][..], Grapheme::raw_string)
    }

    /// UTF-16 offset of the cluster at `index`. The position one past the
    /// last cluster maps to the total UTF-16 length. Returns `None` for an
    /// empty string.
    pub fn raw_index_at(&self, index: isize) -> Option<usize> {
        if self.clusters.is_empty() {
            return None;
        }
        let index = self.ensure_index(index);
        Some(
            self.clusters
                .get(index)
                .map_or_else(|| self.end_raw_index(), Grapheme::raw_index),
        )
    }

    /// Maps a UTF-16 offset back to the index of the cluster starting there.
    ///
    /// The offset is expected to fall on a cluster boundary; an offset inside
    /// a cluster yields that cluster. The end-of-text offset maps to
    /// `len()`. Returns `None` past the end.
    pub fn cluster_index_from_utf16_index(&self, offset: usize) -> Option<usize> {
        if !self.clusters.is_empty() && offset == self.end_raw_index() {
            return Some(self.clusters.len());
        }
        self.clusters
            .binary_search_by(|grapheme| {
                if grapheme.raw_index() + grapheme.len_utf16() <= offset {
                    Ordering::Less
                } else if offset < grapheme.raw_index() {
                    Ordering::Greater
                } else {
                    Ordering::Equal
                }
            })
            .ok()
    }

    /// First code point of the cluster at `index` as a `char`.
    ///
    /// Only the first code point is exposed, even for clusters made of
    /// several. Negative indices are out of range here, and so are lone
    /// surrogates.
    pub fn char_at(&self, index: isize) -> Option<char> {
        self.char_code_at(index).and_then(char::from_u32)
    }

    /// First code point of the cluster at `index`. Negative indices are out
    /// of range.
    pub fn char_code_at(&self, index: isize) -> Option<u32> {
        let index = usize::try_from(index).ok()?;
        self.clusters
            .get(index)
            .and_then(|grapheme| grapheme.code_points().first().copied())
    }

    /// Clusters from `start` up to `end` (default: the end). Both bounds are
    /// clamped to `0..=len()` and swapped when reversed.
    pub fn substring(&self, start: isize, end: Option<isize>) -> Self {
        let mut start = self.clamp_index(start);
        let mut end = end.map_or(self.clusters.len(), |end| self.clamp_index(end));
        if start > end {
            std::mem::swap(&mut start, &mut end);
        }
        self.sub_range(start, end)
    }

    /// `length` clusters from `start` (negative counts from the end). A
    /// missing length runs to the end; a negative one selects nothing.
    pub fn substr(&self, start: isize, length: Option<isize>) -> Self {
        let start = self.ensure_index(start);
        let available = self.clusters.len() - start;
        let length = match length {
            None => available,
            Some(length) if length < 0 => 0,
            Some(length) => length.unsigned_abs().min(available),
        };
        self.sub_range(start, start + length)
    }

    /// Clusters from `start` up to `end` (default: the end), where negative
    /// bounds count from the end. Reversed bounds select nothing.
    pub fn slice(&self, start: isize, end: Option<isize>) -> Self {
        let start = self.ensure_index(start);
        let end = end.map_or(self.clusters.len(), |end| self.ensure_index(end));
        if start >= end {
            return Self::new();
        }
        self.sub_range(start, end)
    }

    fn clusters_match(&self, start: usize, count: usize, part: &[u16]) -> bool {
        let end = start.saturating_add(count).min(self.clusters.len());
        let mut rest = part;
        for grapheme in &self.clusters[start..end] {
            match rest.strip_prefix(grapheme.raw_string()) {
                Some(tail) => rest = tail,
                None => return false,
            }
        }
        rest.is_empty()
    }

    /// Index of the first cluster where `needle` occurs, matching on whole
    /// clusters only.
    pub fn index_of<S: Into<Unistring>>(&self, needle: S) -> Option<usize> {
        let needle = needle.into();
        let whole = self.to_utf16();
        let part = needle.to_utf16();
        let mut from = 0;
        let mut cluster = 0;

        while let Some(found) = find_units(&whole, &part, from) {
            while cluster < self.clusters.len() && self.clusters[cluster].raw_index() < found {
                cluster += 1;
            }
            if cluster >= self.clusters.len() {
                return None;
            }
            if self.clusters_match(cluster, needle.len(), &part) {
                return Some(cluster);
            }
            from = found + 1;
        }
        None
    }

    /// Index of the last cluster where `needle` occurs, matching on whole
    /// clusters only.
    pub fn last_index_of<S: Into<Unistring>>(&self, needle: S) -> Option<usize> {
        let needle = needle.into();
        let whole = self.to_utf16();
        let part = needle.to_utf16();
        let mut limit = whole.len().checked_sub(1);
        let mut cluster = self.clusters.len();

        while let Some(found) = limit.and_then(|limit| rfind_units(&whole, &part, limit)) {
            while cluster > 0 && self.clusters[cluster - 1].raw_index() > found {
                cluster -= 1;
            }
            let candidate = cluster.checked_sub(1)?;
            if self.clusters_match(candidate, needle.len(), &part) {
                return Some(candidate);
            }
            limit = found.checked_sub(1);
        }
        None
    }

    fn map_case(&self, convert: fn(&str) -> String) -> Self {
        let units = self.to_utf16();
        let mut result = Vec::with_capacity(units.len());
        let mut run = String::new();
        for decoded in char::decode_utf16(units.iter().copied()) {
            match decoded {
                Ok(ch) => run.push(ch),
                Err(err) => {
                    result.extend(convert(&run).encode_utf16());
                    run.clear();
                    result.push(err.unpaired_surrogate());
                }
            }
        }
        result.extend(convert(&run).encode_utf16());
        Self::from_utf16(&result)
    }

    /// Lower-cases the text and segments the result afresh. The cluster
    /// count may change.
    pub fn to_lowercase(&self) -> Self {
        self.map_case(str::to_lowercase)
    }

    /// Upper-cases the text and segments the result afresh. The cluster
    /// count may change.
    pub fn to_uppercase(&self) -> Self {
        self.map_case(str::to_uppercase)
    }
}

impl From<&str> for Unistring {
    fn from(s: &str) -> Self {
        let code_points = s.chars().map(u32::from).collect::<Vec<_>>();
        Unistring {
            clusters: grapheme_clusters(&code_points),
        }
    }
}

impl From<String> for Unistring {
    fn from(s: String) -> Self {
        Unistring::from(s.as_str())
    }
}

impl From<&String> for Unistring {
    fn from(s: &String) -> Self {
        Unistring::from(s.as_str())
    }
}

impl From<&[u16]> for Unistring {
    fn from(units: &[u16]) -> Self {
        Unistring::from_utf16(units)
    }
}

impl From<&Unistring> for Unistring {
    fn from(s: &Unistring) -> Self {
        s.clone()
    }
}

impl From<Grapheme> for Unistring {
    fn from(grapheme: Grapheme) -> Self {
        Unistring::from_graphemes([grapheme])
    }
}

impl TryFrom<&[u8]> for Unistring {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        std::str::from_utf8(bytes)
            .map(Unistring::from)
            .map_err(|err| Error::InvalidArgument(err.to_string()))
    }
}

impl Extend<Grapheme> for Unistring {
    fn extend<T: IntoIterator<Item = Grapheme>>(&mut self, iter: T) {
        let mut raw_index = self.end_raw_index();
        for mut grapheme in iter {
            grapheme.set_raw_index(raw_index);
            raw_index += grapheme.len_utf16();
            self.clusters.push(grapheme);
        }
    }
}

impl FromIterator<Grapheme> for Unistring {
    fn from_iter<T: IntoIterator<Item = Grapheme>>(iter: T) -> Self {
        Unistring::from_graphemes(iter)
    }
}

impl<'a> IntoIterator for &'a Unistring {
    type Item = &'a Grapheme;
    type IntoIter = slice::Iter<'a, Grapheme>;

    fn into_iter(self) -> Self::IntoIter {
        self.clusters.iter()
    }
}

impl<S: Into<Unistring>> ops::AddAssign<S> for Unistring {
    fn add_assign(&mut self, rhs: S) {
        self.append(rhs);
    }
}

#[cfg(test)]
mod tests {
    use super::Unistring;
    use crate::{error::Error, grapheme_ty::Grapheme};
    use pretty_assertions::assert_eq;

    fn raw_indices(s: &Unistring) -> Vec<usize> {
        s.iter().map(Grapheme::raw_index).collect()
    }

    #[test]
    fn test_cluster_count() {
        let s = Unistring::from("\u{0041}\u{0301}\u{304B}\u{3099}\u{9508}");
        assert_eq!(3, s.len());
        assert_eq!(5, s.len_utf16());

        let s = Unistring::from("\r\r\n\n");
        assert_eq!(3, s.len());
        assert_eq!(vec![0, 1, 3], raw_indices(&s));
    }

    #[test]
    fn test_insert() {
        let mut s = Unistring::from("ab");
        s.insert("X", 1);
        assert_eq!("aXb", s.to_string());
        assert_eq!(3, s.len());
        assert_eq!(vec![0, 1, 2], raw_indices(&s));

        s.insert("\u{1F600}", -1).insert("<", 0).append(">");
        assert_eq!("<aX\u{1F600}b>", s.to_string());
        assert_eq!(vec![0, 1, 2, 3, 5, 6], raw_indices(&s));

        let mut t = Unistring::new();
        t.insert("x", 10);
        assert_eq!("x", t.to_string());
        assert_eq!(vec![0], raw_indices(&t));
    }

    #[test]
    fn test_insert_does_not_merge_seams() {
        let mut s = Unistring::from("ab");
        s.insert("\u{301}", 1);
        assert_eq!(3, s.len());
        assert_eq!("a\u{301}b", s.to_string());
        assert_eq!(2, Unistring::from(s.to_string()).len());
    }

    #[test]
    fn test_delete() {
        let mut s = Unistring::from("ab");
        s.delete(0, Some(1));
        assert_eq!("b", s.to_string());
        assert_eq!(vec![0], raw_indices(&s));

        let mut s = Unistring::from("a\u{1F600}bcd");
        s.delete(1, Some(2));
        assert_eq!("acd", s.to_string());
        assert_eq!(vec![0, 1, 2], raw_indices(&s));

        s.delete(-2, None);
        assert_eq!("a", s.to_string());

        s.delete(0, Some(100)).delete(5, Some(1));
        assert!(s.is_empty());
    }

    #[test]
    fn test_add_assign_and_concat() {
        let mut s = Unistring::from("e");
        s += "\u{301}";
        s.concat(&Unistring::from("!"));
        assert_eq!(3, s.len());
        assert_eq!(vec![0, 1, 2], raw_indices(&s));
    }

    #[test]
    fn test_accessors() {
        let s = Unistring::from("a\u{301}\u{1F1FA}\u{1F1F8}z");
        assert_eq!(Some(&[0x61, 0x301][..]), s.code_points_at(0));
        assert_eq!(Some(&[0x7A][..]), s.code_points_at(-1));
        assert_eq!(None, s.code_points_at(3));
        assert_eq!(&[0xD83C, 0xDDFA, 0xD83C, 0xDDF8][..], s.raw_string_at(1));
        assert!(s.raw_string_at(10).is_empty());

        assert_eq!(Some('a'), s.char_at(0));
        assert_eq!(Some(0x1F1FA), s.char_code_at(1));
        assert_eq!(None, s.char_at(-1));
        assert_eq!(None, s.char_code_at(3));
    }

    #[test]
    fn test_raw_index_at() {
        let s = Unistring::from("a\u{301}\u{1F600}z");
        assert_eq!(Some(0), s.raw_index_at(0));
        assert_eq!(Some(2), s.raw_index_at(1));
        assert_eq!(Some(4), s.raw_index_at(2));
        assert_eq!(Some(5), s.raw_index_at(3));
        assert_eq!(Some(5), s.raw_index_at(42));
        assert_eq!(Some(4), s.raw_index_at(-1));
        assert_eq!(None, Unistring::new().raw_index_at(0));
    }

    #[test]
    fn test_cluster_index_from_utf16_index() {
        let s = Unistring::from("a\u{301}\u{1F600}z");
        assert_eq!(Some(0), s.cluster_index_from_utf16_index(0));
        assert_eq!(Some(1), s.cluster_index_from_utf16_index(2));
        assert_eq!(Some(2), s.cluster_index_from_utf16_index(4));
        assert_eq!(Some(3), s.cluster_index_from_utf16_index(5));
        assert_eq!(None, s.cluster_index_from_utf16_index(6));
        assert_eq!(None, Unistring::new().cluster_index_from_utf16_index(0));
    }

    #[test]
    fn test_substring_substr_slice() {
        let s = Unistring::from("abcdef");
        assert_eq!("bcd", s.substring(1, Some(4)).to_string());
        assert_eq!("bcd", s.substring(4, Some(1)).to_string());
        assert_eq!("abc", s.substring(-5, Some(3)).to_string());
        assert_eq!("ef", s.substring(4, None).to_string());

        assert_eq!("cd", s.substr(2, Some(2)).to_string());
        assert_eq!("ef", s.substr(-2, None).to_string());
        assert_eq!("", s.substr(2, Some(-1)).to_string());
        assert_eq!("cdef", s.substr(2, Some(100)).to_string());

        assert_eq!("bcde", s.slice(1, Some(-1)).to_string());
        assert_eq!("ef", s.slice(-2, None).to_string());
        assert_eq!("", s.slice(4, Some(2)).to_string());

        let sub = Unistring::from("x\u{1F600}yz").substring(1, Some(3));
        assert_eq!(vec![0, 2], raw_indices(&sub));
    }

    #[test]
    fn test_index_of() {
        let s = Unistring::from("ae\u{301}xe");
        assert_eq!(Some(3), s.index_of("e"));
        assert_eq!(Some(1), s.index_of("e\u{301}"));
        assert_eq!(Some(3), s.last_index_of("e"));
        assert_eq!(Some(1), s.last_index_of("e\u{301}"));
        assert_eq!(None, s.index_of("q"));
        assert_eq!(Some(0), s.index_of(""));
        assert_eq!(None, Unistring::new().index_of(""));

        let s = Unistring::from("abab");
        assert_eq!(Some(0), s.index_of(&Unistring::from("ab")));
        assert_eq!(Some(2), s.last_index_of("ab"));
        assert_eq!(Some(3), s.last_index_of(""));
    }

    #[test]
    fn test_case_mapping() {
        let s = Unistring::from("Stra\u{DF}e \u{C9}t\u{E9}");
        assert_eq!("STRASSE \u{C9}T\u{C9}", s.to_uppercase().to_string());
        assert_eq!(s.len() + 1, s.to_uppercase().len());
        assert_eq!("stra\u{DF}e \u{E9}t\u{E9}", s.to_lowercase().to_string());

        let lone = Unistring::from_utf16(&[0x41, 0xD800, 0x42]);
        assert_eq!(vec![0x61, 0xD800, 0x62], lone.to_lowercase().to_utf16());
    }

    #[test]
    fn test_from_graphemes() {
        let a = Grapheme::with_raw_index(&[0x61], 9).unwrap();
        let b = Grapheme::new(&[0x1F600]).unwrap();
        let c = Grapheme::new(&[0x62]).unwrap();
        let mut s: Unistring = vec![a, b].into_iter().collect();
        assert_eq!(vec![0, 1], raw_indices(&s));
        s.extend(Some(c));
        assert_eq!(vec![0, 1, 3], raw_indices(&s));
    }

    #[test]
    fn test_invalid_sources() {
        assert_eq!(
            Err(Error::InvalidCodePoint(0x20_0000)),
            Unistring::try_from_code_points(&[0x61, 0x20_0000])
        );
        assert!(matches!(
            Unistring::try_from(&b"\xFF\xFE"[..]),
            Err(Error::InvalidArgument(_))
        ));
        assert_eq!(Ok(Unistring::from("ok")), Unistring::try_from(&b"ok"[..]));
    }

    #[test]
    fn test_dump() {
        let s = Unistring::from("a\u{301}b");
        assert_eq!("÷ 0061 × 0301 ÷ 0062 ÷", s.dump(false));
        assert!(s.dump(true).starts_with("*** Grapheme Cluster #0 ***\ncodePoints: [U+0061, U+0301]"));
        assert_eq!("Unistring([Grapheme(\"a\\u{301}\"), Grapheme(\"b\")])", format!("{:?}", s));
    }
}
