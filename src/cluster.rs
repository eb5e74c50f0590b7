use crate::error::Result;
use crate::finder::{grapheme_property, sentence_property, word_property};
use crate::grapheme_ty::Grapheme;
use crate::rules::{can_break_grapheme, can_break_sentence, can_break_word, is_in_script_word};
use crate::tables::{grapheme::GraphemeCat, sentence::SentenceCat, word::WordCat};
use crate::utf16;
use std::ops::Deref;

/// Options for word segmentation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WordConfig {
    /// Keep neighbours of one script together even where the standard rules
    /// would break, and keep runs of white space together. Unclassified code
    /// points never merge.
    pub merge_scripts: bool,
}

impl WordConfig {
    /// Configuration with the script merging extension turned on.
    pub const fn merge_scripts() -> Self {
        WordConfig {
            merge_scripts: true,
        }
    }
}

/// A word or sentence produced by segmentation.
///
/// `index` and `length` count code points, not UTF-16 units or grapheme
/// clusters. `kind` is the boundary property of the last code point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment<P> {
    /// The text of the segment, with unpaired surrogates replaced by U+FFFD.
    pub text: String,
    /// The exact UTF-16 form of the segment, unpaired surrogates included.
    pub raw: Vec<u16>,
    /// Code point offset of the segment in the input.
    pub index: usize,
    /// Number of code points in the segment.
    pub length: usize,
    /// Boundary property of the segment's last code point.
    pub kind: P,
}

impl Segment<WordCat> {
    /// Returns whether this segment ends in a letter, digit, kana or
    /// connector, as opposed to white space, punctuation or symbols.
    pub fn is_word_like(&self) -> bool {
        matches!(
            self.kind,
            WordCat::WC_ALetter
                | WordCat::WC_ALetter_ExtPict
                | WordCat::WC_Hebrew_Letter
                | WordCat::WC_Numeric
                | WordCat::WC_Katakana
                | WordCat::WC_Hiragana
                | WordCat::WC_KanaExtension
                | WordCat::WC_ExtendNumLet
        )
    }
}

/// The word segments of a text, in order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Words(Vec<Segment<WordCat>>);

impl Words {
    /// Finds the segment containing the code point at `index`.
    pub fn word_index_of(&self, index: usize) -> Option<usize> {
        self.0
            .binary_search_by(|word| {
                if word.index + word.length <= index {
                    std::cmp::Ordering::Less
                } else if index < word.index {
                    std::cmp::Ordering::Greater
                } else {
                    std::cmp::Ordering::Equal
                }
            })
            .ok()
    }

    /// Iterates over the word-like segments only.
    pub fn word_like(&self) -> impl Iterator<Item = &Segment<WordCat>> {
        self.0.iter().filter(|word| word.is_word_like())
    }

    /// Unwraps the segment list.
    pub fn into_inner(self) -> Vec<Segment<WordCat>> {
        self.0
    }
}

impl Deref for Words {
    type Target = [Segment<WordCat>];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl IntoIterator for Words {
    type Item = Segment<WordCat>;
    type IntoIter = std::vec::IntoIter<Segment<WordCat>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Words {
    type Item = &'a Segment<WordCat>;
    type IntoIter = std::slice::Iter<'a, Segment<WordCat>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

fn classify<P>(code_points: &[u32], finder: fn(u32) -> P, eot: P) -> Vec<P> {
    let mut props = Vec::with_capacity(code_points.len() + 1);
    props.extend(code_points.iter().map(|&cp| finder(cp)));
    props.push(eot);
    props
}

/// Splits code points into grapheme clusters, with UTF-16 offsets starting
/// at zero.
///
/// # Errors
///
/// Returns [`Error::InvalidCodePoint`](crate::Error::InvalidCodePoint) if a
/// value is above U+10FFFF.
pub fn build_grapheme_clusters(code_points: &[u32]) -> Result<Vec<Grapheme>> {
    utf16::check_code_points(code_points)?;
    Ok(grapheme_clusters(code_points))
}

pub(crate) fn grapheme_clusters(code_points: &[u32]) -> Vec<Grapheme> {
    let props = classify(code_points, grapheme_property, GraphemeCat::GC_EOT);
    let mut result = Vec::new();
    let mut start = 0;
    let mut raw_index = 0;

    for i in 0..props.len() {
        if !can_break_grapheme(&props[..i], &props[i..]) {
            continue;
        }
        if start < i {
            let grapheme = Grapheme::from_code_points_unchecked(&code_points[start..i], raw_index);
            raw_index += grapheme.len_utf16();
            result.push(grapheme);
        }
        start = i;
    }

    log::trace!(
        "built {} grapheme clusters from {} code points",
        result.len(),
        code_points.len()
    );
    result
}

fn segment<P: Copy>(code_points: &[u32], props: &[P], start: usize, end: usize) -> Segment<P> {
    let raw = utf16::encode_all(&code_points[start..end]);
    Segment {
        text: utf16::lossy_string(&raw),
        raw,
        index: start,
        length: end - start,
        kind: props[end - 1],
    }
}

/// Splits code points into word segments.
///
/// # Errors
///
/// Returns [`Error::InvalidCodePoint`](crate::Error::InvalidCodePoint) if a
/// value is above U+10FFFF.
pub fn build_word_clusters(code_points: &[u32], config: WordConfig) -> Result<Words> {
    utf16::check_code_points(code_points)?;
    Ok(word_clusters(code_points, config))
}

fn word_clusters(code_points: &[u32], config: WordConfig) -> Words {
    let props = classify(code_points, word_property, WordCat::WC_EOT);
    let mut result = Vec::new();
    let mut start = 0;

    for i in 0..props.len() {
        let (prev, next) = props.split_at(i);
        if !can_break_word(prev, next) {
            continue;
        }
        if config.merge_scripts
            && i > 0
            && i < code_points.len()
            && is_in_script_word(prev, next, code_points[i - 1], code_points[i])
        {
            continue;
        }
        if start < i {
            result.push(segment(code_points, &props, start, i));
        }
        start = i;
    }

    log::trace!("built {} word segments", result.len());
    Words(result)
}

/// Splits code points into sentence segments.
///
/// # Errors
///
/// Returns [`Error::InvalidCodePoint`](crate::Error::InvalidCodePoint) if a
/// value is above U+10FFFF.
pub fn build_sentence_clusters(code_points: &[u32]) -> Result<Vec<Segment<SentenceCat>>> {
    utf16::check_code_points(code_points)?;
    Ok(sentence_clusters(code_points))
}

fn sentence_clusters(code_points: &[u32]) -> Vec<Segment<SentenceCat>> {
    let props = classify(code_points, sentence_property, SentenceCat::SC_EOT);
    let mut result = Vec::new();
    let mut start = 0;

    for i in 0..props.len() {
        let (prev, next) = props.split_at(i);
        if !can_break_sentence(prev, next) {
            continue;
        }
        if start < i {
            result.push(segment(code_points, &props, start, i));
        }
        start = i;
    }

    log::trace!("built {} sentence segments", result.len());
    result
}

/// Splits UTF-16 text into word segments.
pub fn get_words_utf16(units: &[u16], config: WordConfig) -> Words {
    word_clusters(&utf16::code_points(units), config)
}

/// Splits text into word segments.
pub fn get_words(s: &str, config: WordConfig) -> Words {
    let code_points = s.chars().map(u32::from).collect::<Vec<_>>();
    word_clusters(&code_points, config)
}

/// Splits UTF-16 text into sentence segments.
pub fn get_sentences_utf16(units: &[u16]) -> Vec<Segment<SentenceCat>> {
    sentence_clusters(&utf16::code_points(units))
}

/// Splits text into sentence segments.
pub fn get_sentences(s: &str) -> Vec<Segment<SentenceCat>> {
    let code_points = s.chars().map(u32::from).collect::<Vec<_>>();
    sentence_clusters(&code_points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use pretty_assertions::assert_eq;

    fn cps(s: &str) -> Vec<u32> {
        s.chars().map(u32::from).collect()
    }

    fn grapheme_texts(s: &str) -> Vec<String> {
        build_grapheme_clusters(&cps(s))
            .unwrap()
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    fn word_texts(s: &str, config: WordConfig) -> Vec<String> {
        get_words(s, config).into_iter().map(|w| w.text).collect()
    }

    #[test]
    fn test_graphemes() {
        assert_eq!(vec!["a\u{301}", "b"], grapheme_texts("a\u{301}b"));
        assert_eq!(vec!["\r\n", "\n"], grapheme_texts("\r\n\n"));
        assert_eq!(vec!["\u{1F1FA}\u{1F1F8}", "\u{1F1EF}"], grapheme_texts("\u{1F1FA}\u{1F1F8}\u{1F1EF}"));
        assert_eq!(
            vec!["\u{1F469}\u{200D}\u{1F467}"],
            grapheme_texts("\u{1F469}\u{200D}\u{1F467}")
        );
        assert_eq!(vec!["\u{1100}\u{1161}\u{11A8}"], grapheme_texts("\u{1100}\u{1161}\u{11A8}"));
        assert_eq!(Ok(vec![]), build_grapheme_clusters(&[]));
    }

    #[test]
    fn test_grapheme_offsets() {
        let clusters = build_grapheme_clusters(&cps("x\u{1F600}e\u{301}")).unwrap();
        let offsets = clusters.iter().map(Grapheme::raw_index).collect::<Vec<_>>();
        assert_eq!(vec![0, 1, 3], offsets);
    }

    #[test]
    fn test_lone_surrogate_is_its_own_cluster() {
        let clusters = build_grapheme_clusters(&[0x61, 0xD800, 0x62]).unwrap();
        assert_eq!(3, clusters.len());
        assert_eq!(&[0xD800], clusters[1].code_points());
    }

    #[test]
    fn test_builders_reject_values_past_the_code_space() {
        assert_eq!(
            Err(Error::InvalidCodePoint(0x20_0000)),
            build_grapheme_clusters(&[0x61, 0x20_0000])
        );
        assert_eq!(
            Err(Error::InvalidCodePoint(0x11_0000)),
            build_word_clusters(&[0x11_0000], WordConfig::default())
        );
        assert_eq!(
            Err(Error::InvalidCodePoint(0x11_0000)),
            build_sentence_clusters(&[0x2E, 0x11_0000])
        );
        assert_eq!(3, build_word_clusters(&cps("a b"), WordConfig::default()).unwrap().len());
    }

    #[test]
    fn test_words() {
        assert_eq!(
            vec!["I", " ", "have", " ", "3.14", " ", "dollars", "."],
            word_texts("I have 3.14 dollars.", WordConfig::default())
        );
        assert_eq!(
            vec!["can't", " ", "e.g", ".", " ", "1,000"],
            word_texts("can't e.g. 1,000", WordConfig::default())
        );
    }

    #[test]
    fn test_pictographic_letters_after_zwj() {
        assert_eq!(
            vec!["a", "\u{1F468}\u{200D}\u{2139}", " ", "x\u{2139}"],
            word_texts("a\u{1F468}\u{200D}\u{2139} x\u{2139}", WordConfig::default())
        );
    }

    #[test]
    fn test_word_segment_fields() {
        let words = get_words("I have 3.14 dollars.", WordConfig::default());
        let pi = &words[4];
        assert_eq!("3.14", pi.text);
        assert_eq!(7, pi.index);
        assert_eq!(4, pi.length);
        assert_eq!(WordCat::WC_Numeric, pi.kind);
        assert_eq!(WordCat::WC_MidNumLet, words[7].kind);

        let like = words.word_like().map(|w| w.text.as_str()).collect::<Vec<_>>();
        assert_eq!(vec!["I", "have", "3.14", "dollars"], like);
    }

    #[test]
    fn test_word_index_of() {
        let words = get_words("I have 3.14 dollars.", WordConfig::default());
        assert_eq!(Some(0), words.word_index_of(0));
        assert_eq!(Some(2), words.word_index_of(2));
        assert_eq!(Some(2), words.word_index_of(5));
        assert_eq!(Some(4), words.word_index_of(9));
        assert_eq!(Some(7), words.word_index_of(19));
        assert_eq!(None, words.word_index_of(20));
    }

    #[test]
    fn test_kana_words() {
        // ひらがな カタカナー
        assert_eq!(
            vec!["ひらがな", "カタカナー"],
            word_texts("ひらがなカタカナー", WordConfig::default())
        );
        assert_eq!(
            vec!["らーめん"],
            word_texts("らーめん", WordConfig::default())
        );
    }

    #[test]
    fn test_script_merge() {
        assert_eq!(
            vec!["漢", "字"],
            word_texts("漢字", WordConfig::default())
        );
        // Ideographs and Thai letters are unclassified and never merge.
        assert_eq!(
            vec!["漢", "字", "abc"],
            word_texts("漢字abc", WordConfig::merge_scripts())
        );
        assert_eq!(
            vec!["ไ", "ท", "ย", " ", "ok"],
            word_texts("ไทย ok", WordConfig::merge_scripts())
        );
        assert_eq!(
            vec!["a", ".", ".", ".", "b", "\u{3000} ", "c"],
            word_texts("a...b\u{3000} c", WordConfig::default())
        );
        assert_eq!(
            vec!["a", "...", "b", "\u{3000} ", "c"],
            word_texts("a...b\u{3000} c", WordConfig::merge_scripts())
        );
    }

    #[test]
    fn test_sentences() {
        let sentences = get_sentences("Hello there. How are you? Fine.");
        let texts = sentences.iter().map(|s| s.text.as_str()).collect::<Vec<_>>();
        assert_eq!(vec!["Hello there. ", "How are you? ", "Fine."], texts);
        assert_eq!(13, sentences[1].index);
        assert_eq!(SentenceCat::SC_Sp, sentences[0].kind);
        assert_eq!(SentenceCat::SC_ATerm, sentences[2].kind);

        let texts = get_sentences("He went to Washington.\r\nShe left.")
            .into_iter()
            .map(|s| s.text)
            .collect::<Vec<_>>();
        assert_eq!(vec!["He went to Washington.\r\n", "She left."], texts);

        let texts = get_sentences("etc. the end")
            .into_iter()
            .map(|s| s.text)
            .collect::<Vec<_>>();
        assert_eq!(vec!["etc. the end"], texts);
    }

    #[test]
    fn test_utf16_front_doors() {
        let units = "a\u{1F600} b".encode_utf16().collect::<Vec<_>>();
        let words = get_words_utf16(&units, WordConfig::default());
        assert_eq!(4, words.len());
        assert_eq!(1, words[1].index);
        assert_eq!(2, words[2].index);

        let sentences = get_sentences_utf16(&units);
        assert_eq!(1, sentences.len());
        assert_eq!(4, sentences[0].length);
        assert_eq!(units, sentences[0].raw);
    }

    #[test]
    fn test_segments_keep_lone_surrogates() {
        let units = [0x61, 0xD800, 0x62];
        let words = get_words_utf16(&units, WordConfig::default());
        assert_eq!(3, words.len());
        assert_eq!(vec![0xD800], words[1].raw);
        assert_eq!("\u{FFFD}", words[1].text);
        assert_eq!(WordCat::WC_Other, words[1].kind);

        let sentences = get_sentences_utf16(&units);
        assert_eq!(1, sentences.len());
        assert_eq!(units.to_vec(), sentences[0].raw);
    }
}
