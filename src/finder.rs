use crate::tables::{
    grapheme::{GraphemeCat, GRAPHEME_CAT_TABLE},
    script::{Script, SCRIPT_TABLE},
    sentence::{SentenceCat, SENTENCE_CAT_TABLE},
    word::{WordCat, WORD_CAT_TABLE},
};
use rustc_hash::FxHashMap;
use std::{cell::RefCell, cmp::Ordering, fmt, thread::LocalKey};

/// A sorted, non-overlapping table of `(start, length, value)` runs with a
/// default value for code points outside every run.
pub struct PropertyTable<P: 'static> {
    ranges: &'static [(u32, u32, P)],
    default: P,
}

impl<P: Copy> PropertyTable<P> {
    /// Wraps a range table. The runs must be sorted by start and must not
    /// overlap.
    pub const fn new(ranges: &'static [(u32, u32, P)], default: P) -> Self {
        PropertyTable { ranges, default }
    }

    /// Looks up the value for `cp` by binary search over the runs.
    pub fn find(&self, cp: u32) -> P {
        let found = self.ranges.binary_search_by(|&(start, len, _)| {
            if start.saturating_add(len) <= cp {
                Ordering::Less
            } else if cp < start {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        });
        match found {
            Ok(idx) => self.ranges[idx].2,
            Err(_) => self.default,
        }
    }

    /// Returns the value used for code points not present in the table.
    pub fn default_value(&self) -> P {
        self.default
    }

    /// Returns the number of runs in the table.
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// Returns whether the table has no runs at all.
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

impl<P> fmt::Debug for PropertyTable<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyTable")
            .field("runs", &self.ranges.len())
            .finish()
    }
}

pub(crate) static GRAPHEME_TABLE: PropertyTable<GraphemeCat> =
    PropertyTable::new(GRAPHEME_CAT_TABLE, GraphemeCat::GC_Other);
pub(crate) static WORD_TABLE: PropertyTable<WordCat> =
    PropertyTable::new(WORD_CAT_TABLE, WordCat::WC_Other);
pub(crate) static SENTENCE_TABLE: PropertyTable<SentenceCat> =
    PropertyTable::new(SENTENCE_CAT_TABLE, SentenceCat::SC_Other);
pub(crate) static SCRIPT_PROP_TABLE: PropertyTable<Script> =
    PropertyTable::new(SCRIPT_TABLE, Script::Unknown);

/// Per-thread memo of table lookups. Entries are never evicted; the key space
/// is bounded by the Unicode code space.
pub(crate) struct PropertyCache<P> {
    entries: RefCell<FxHashMap<u32, P>>,
}

impl<P> Default for PropertyCache<P> {
    fn default() -> Self {
        PropertyCache {
            entries: RefCell::new(FxHashMap::default()),
        }
    }
}

impl<P: Copy> PropertyCache<P> {
    fn get_or_find(&self, cp: u32, table: &PropertyTable<P>) -> P {
        if let Some(&value) = self.entries.borrow().get(&cp) {
            return value;
        }
        let value = table.find(cp);
        self.entries.borrow_mut().insert(cp, value);
        value
    }

    fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    fn clear(&self) {
        self.entries.borrow_mut().clear();
    }
}

thread_local! {
    static GRAPHEME_CACHE: PropertyCache<GraphemeCat> = PropertyCache::default();
    static WORD_CACHE: PropertyCache<WordCat> = PropertyCache::default();
    static SENTENCE_CACHE: PropertyCache<SentenceCat> = PropertyCache::default();
    static SCRIPT_CACHE: PropertyCache<Script> = PropertyCache::default();
}

fn cached<P: Copy + 'static>(
    cache: &'static LocalKey<PropertyCache<P>>,
    table: &PropertyTable<P>,
    cp: u32,
) -> P {
    cache.with(|cache| cache.get_or_find(cp, table))
}

/// Returns the `Grapheme_Cluster_Break` property of a code point.
pub fn grapheme_property(cp: u32) -> GraphemeCat {
    cached(&GRAPHEME_CACHE, &GRAPHEME_TABLE, cp)
}

/// Returns the (tailored) `Word_Break` property of a code point.
pub fn word_property(cp: u32) -> WordCat {
    cached(&WORD_CACHE, &WORD_TABLE, cp)
}

/// Returns the `Sentence_Break` property of a code point.
pub fn sentence_property(cp: u32) -> SentenceCat {
    cached(&SENTENCE_CACHE, &SENTENCE_TABLE, cp)
}

/// Returns the `Script` property of a code point.
pub fn script_property(cp: u32) -> Script {
    cached(&SCRIPT_CACHE, &SCRIPT_PROP_TABLE, cp)
}

/// The classification axes served by the finders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    /// Grapheme cluster break.
    Grapheme,
    /// Word break.
    Word,
    /// Sentence break.
    Sentence,
    /// Script.
    Script,
}

/// Returns how many code points the current thread has memoised for `axis`.
pub fn cached_len(axis: Axis) -> usize {
    match axis {
        Axis::Grapheme => GRAPHEME_CACHE.with(PropertyCache::len),
        Axis::Word => WORD_CACHE.with(PropertyCache::len),
        Axis::Sentence => SENTENCE_CACHE.with(PropertyCache::len),
        Axis::Script => SCRIPT_CACHE.with(PropertyCache::len),
    }
}

/// Drops every memoised lookup of the current thread.
pub fn clear_caches() {
    GRAPHEME_CACHE.with(PropertyCache::clear);
    WORD_CACHE.with(PropertyCache::clear);
    SENTENCE_CACHE.with(PropertyCache::clear);
    SCRIPT_CACHE.with(PropertyCache::clear);
    log::debug!("cleared property caches");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::{grapheme::*, sentence::*, word::*};

    #[test]
    fn test_table_hits_and_misses() {
        assert_eq!(GC_CR, GRAPHEME_TABLE.find(0x0D));
        assert_eq!(GC_Extend, GRAPHEME_TABLE.find(0x0301));
        assert_eq!(GC_Other, GRAPHEME_TABLE.find(0x61));
        assert_eq!(GC_Regional_Indicator, GRAPHEME_TABLE.find(0x1F1FA));
        assert_eq!(GC_Other, GRAPHEME_TABLE.find(0x10_FFFF));
        assert_eq!(GC_Other, GRAPHEME_TABLE.default_value());
    }

    #[test]
    fn test_tables_are_sorted() {
        fn check<P>(ranges: &[(u32, u32, P)]) {
            for pair in ranges.windows(2) {
                assert!(pair[0].0 + pair[0].1 <= pair[1].0);
            }
        }
        check(GRAPHEME_CAT_TABLE);
        check(WORD_CAT_TABLE);
        check(SENTENCE_CAT_TABLE);
        check(SCRIPT_TABLE);
    }

    #[test]
    fn test_finders() {
        assert_eq!(WC_ALetter, word_property(u32::from('a')));
        assert_eq!(WC_Numeric, word_property(u32::from('3')));
        assert_eq!(WC_MidNumLet, word_property(u32::from('.')));
        assert_eq!(WC_Hiragana, word_property(0x3042));
        assert_eq!(WC_Katakana, word_property(0x30A2));
        assert_eq!(WC_KanaExtension, word_property(0x30FC));
        assert_eq!(WC_ALetter_ExtPict, word_property(0x2139));
        assert_eq!(WC_ALetter, word_property(0x2138));
        assert_eq!(SC_ATerm, sentence_property(u32::from('.')));
        assert_eq!(SC_Upper, sentence_property(u32::from('A')));
        assert_eq!(Script::Latin, script_property(u32::from('a')));
        assert_eq!(Script::Han, script_property(0x6F22));
        assert_eq!(Script::Unknown, script_property(0x10_FFFF));
    }

    #[test]
    fn test_cache_fills_once_per_code_point() {
        clear_caches();
        assert_eq!(0, cached_len(Axis::Grapheme));
        grapheme_property(0x61);
        grapheme_property(0x61);
        grapheme_property(0x62);
        assert_eq!(2, cached_len(Axis::Grapheme));
        assert_eq!(0, cached_len(Axis::Word));
        clear_caches();
        assert_eq!(0, cached_len(Axis::Grapheme));
    }
}
