//! Boundary rules of UAX #29 (Unicode 14.0).
//!
//! Every predicate receives the property symbols before a candidate boundary
//! (`prev`, empty at start of text) and after it (`next`, terminated by the
//! `EOT` sentinel), and answers whether a break is permitted there. Rules are
//! checked in the order the standard numbers them and the first match wins.
//! The grapheme and word rules fall back to permitting a break; the sentence
//! rules fall back to suppressing it.

use crate::finder::script_property;
use crate::tables::{
    grapheme::GraphemeCat::{self, *},
    sentence::SentenceCat::{self, *},
    word::WordCat::{self, *},
};

/// Iterates a prefix backwards with runs of ignorable symbols folded into the
/// symbol before them (`X Ignorable* -> X`). A run directly after start of
/// text or after an anchor symbol is not folded away; it reads as its first
/// member instead.
struct FoldedBack<'a, T> {
    rest: &'a [T],
    ignorable: fn(T) -> bool,
    anchor: fn(T) -> bool,
}

impl<T: Copy> Iterator for FoldedBack<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let (&last, init) = self.rest.split_last()?;
        if !(self.ignorable)(last) {
            self.rest = init;
            return Some(last);
        }
        let ignorable = self.ignorable;
        let run = self.rest.iter().rev().take_while(|&&c| ignorable(c)).count();
        let start = self.rest.len() - run;
        let first = self.rest[start];
        match start.checked_sub(1).map(|i| self.rest[i]) {
            Some(base) if !(self.anchor)(base) => {
                self.rest = &self.rest[..start - 1];
                Some(base)
            }
            _ => {
                self.rest = &self.rest[..start];
                Some(first)
            }
        }
    }
}

/// Forward counterpart of [`FoldedBack`]. The first symbol must not be
/// ignorable, which the callers guarantee by checking the ignore rule first.
struct FoldedFwd<'a, T> {
    rest: &'a [T],
    ignorable: fn(T) -> bool,
    anchor: fn(T) -> bool,
}

impl<T: Copy> Iterator for FoldedFwd<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let (&first, tail) = self.rest.split_first()?;
        let skip = if (self.anchor)(first) {
            0
        } else {
            let ignorable = self.ignorable;
            tail.iter().take_while(|&&c| ignorable(c)).count()
        };
        self.rest = &tail[skip..];
        Some(first)
    }
}

fn is_ri_run_odd<I: Iterator<Item = bool>>(is_ri: I) -> bool {
    is_ri.take_while(|&ri| ri).count() % 2 == 1
}

/// Decides whether a grapheme cluster boundary is permitted between `prev`
/// and `next`.
pub fn can_break_grapheme(prev: &[GraphemeCat], next: &[GraphemeCat]) -> bool {
    // GB1: sot ÷ Any
    let Some(&before) = prev.last() else {
        return true;
    };
    let after = next.first().copied().unwrap_or(GC_EOT);

    // GB2: Any ÷ eot
    if after == GC_EOT {
        return true;
    }

    // GB3: CR × LF
    if before == GC_CR && after == GC_LF {
        return false;
    }

    // GB4: (Control | CR | LF) ÷
    if matches!(before, GC_Control | GC_CR | GC_LF) {
        return true;
    }

    // GB5: ÷ (Control | CR | LF)
    if matches!(after, GC_Control | GC_CR | GC_LF) {
        return true;
    }

    // GB6: L × (L | V | LV | LVT)
    if before == GC_L && matches!(after, GC_L | GC_V | GC_LV | GC_LVT) {
        return false;
    }

    // GB7: (LV | V) × (V | T)
    if matches!(before, GC_LV | GC_V) && matches!(after, GC_V | GC_T) {
        return false;
    }

    // GB8: (LVT | T) × T
    if matches!(before, GC_LVT | GC_T) && after == GC_T {
        return false;
    }

    // GB9: × (Extend | ZWJ)
    if matches!(after, GC_Extend | GC_ZWJ) {
        return false;
    }

    // GB9a: × SpacingMark
    if after == GC_SpacingMark {
        return false;
    }

    // GB9b: Prepend ×
    if before == GC_Prepend {
        return false;
    }

    // GB11: ExtPict Extend* ZWJ × ExtPict
    if before == GC_ZWJ && after == GC_Extended_Pictographic {
        let mut base = prev[..prev.len() - 1]
            .iter()
            .rev()
            .skip_while(|&&c| c == GC_Extend);
        if base.next() == Some(&GC_Extended_Pictographic) {
            return false;
        }
    }

    // GB12: sot (RI RI)* RI × RI
    // GB13: [^RI] (RI RI)* RI × RI
    if after == GC_Regional_Indicator
        && is_ri_run_odd(prev.iter().rev().map(|&c| c == GC_Regional_Indicator))
    {
        return false;
    }

    // GB999: Any ÷ Any
    true
}

fn is_word_ignorable(c: WordCat) -> bool {
    matches!(c, WC_Extend | WC_Format | WC_ZWJ)
}

fn is_word_anchor(c: WordCat) -> bool {
    matches!(c, WC_CR | WC_LF | WC_Newline | WC_EOT)
}

fn word_back(prev: &[WordCat]) -> FoldedBack<'_, WordCat> {
    FoldedBack {
        rest: prev,
        ignorable: is_word_ignorable,
        anchor: is_word_anchor,
    }
}

fn word_fwd(next: &[WordCat]) -> FoldedFwd<'_, WordCat> {
    FoldedFwd {
        rest: next,
        ignorable: is_word_ignorable,
        anchor: is_word_anchor,
    }
}

fn is_ahletter(c: Option<WordCat>) -> bool {
    matches!(c, Some(WC_ALetter | WC_ALetter_ExtPict | WC_Hebrew_Letter))
}

fn is_mid_letter_q(c: Option<WordCat>) -> bool {
    matches!(c, Some(WC_MidLetter | WC_MidNumLet | WC_Single_Quote))
}

fn is_mid_num_q(c: Option<WordCat>) -> bool {
    matches!(c, Some(WC_MidNum | WC_MidNumLet | WC_Single_Quote))
}

fn is_kana(c: Option<WordCat>) -> bool {
    matches!(c, Some(WC_Katakana | WC_Hiragana | WC_KanaExtension))
}

/// Decides whether a word boundary is permitted between `prev` and `next`.
///
/// The standard Katakana rule (WB13) is replaced by a kana rule that also keeps
/// runs of Hiragana and of kana extension marks together and glues extension
/// marks to the kana around them.
pub fn can_break_word(prev: &[WordCat], next: &[WordCat]) -> bool {
    // WB1: sot ÷ Any
    let Some(&before) = prev.last() else {
        return true;
    };
    let after = next.first().copied().unwrap_or(WC_EOT);

    // WB2: Any ÷ eot
    if after == WC_EOT {
        return true;
    }

    // WB3: CR × LF
    if before == WC_CR && after == WC_LF {
        return false;
    }

    // WB3a: (Newline | CR | LF) ÷
    if matches!(before, WC_Newline | WC_CR | WC_LF) {
        return true;
    }

    // WB3b: ÷ (Newline | CR | LF)
    if matches!(after, WC_Newline | WC_CR | WC_LF) {
        return true;
    }

    // WB3c: ZWJ × \p{Extended_Pictographic}
    if before == WC_ZWJ && matches!(after, WC_Extended_Pictographic | WC_ALetter_ExtPict) {
        return false;
    }

    // WB3d: WSegSpace × WSegSpace
    if before == WC_WSegSpace && after == WC_WSegSpace {
        return false;
    }

    // WB4: X (Extend | Format | ZWJ)* → X
    if is_word_ignorable(after) {
        return false;
    }

    let mut back = word_back(prev);
    let (b0, b1) = (back.next(), back.next());
    let mut fwd = word_fwd(next);
    let (n0, n1) = (fwd.next(), fwd.next());

    // WB5: AHLetter × AHLetter
    if is_ahletter(b0) && is_ahletter(n0) {
        return false;
    }

    // WB6: AHLetter × (MidLetter | MidNumLetQ) AHLetter
    if is_ahletter(b0) && is_mid_letter_q(n0) && is_ahletter(n1) {
        return false;
    }

    // WB7: AHLetter (MidLetter | MidNumLetQ) × AHLetter
    if is_ahletter(b1) && is_mid_letter_q(b0) && is_ahletter(n0) {
        return false;
    }

    // WB7a: Hebrew_Letter × Single_Quote
    if b0 == Some(WC_Hebrew_Letter) && n0 == Some(WC_Single_Quote) {
        return false;
    }

    // WB7b: Hebrew_Letter × Double_Quote Hebrew_Letter
    if b0 == Some(WC_Hebrew_Letter)
        && n0 == Some(WC_Double_Quote)
        && n1 == Some(WC_Hebrew_Letter)
    {
        return false;
    }

    // WB7c: Hebrew_Letter Double_Quote × Hebrew_Letter
    if b1 == Some(WC_Hebrew_Letter)
        && b0 == Some(WC_Double_Quote)
        && n0 == Some(WC_Hebrew_Letter)
    {
        return false;
    }

    // WB8: Numeric × Numeric
    if b0 == Some(WC_Numeric) && n0 == Some(WC_Numeric) {
        return false;
    }

    // WB9: AHLetter × Numeric
    if is_ahletter(b0) && n0 == Some(WC_Numeric) {
        return false;
    }

    // WB10: Numeric × AHLetter
    if b0 == Some(WC_Numeric) && is_ahletter(n0) {
        return false;
    }

    // WB11: Numeric (MidNum | MidNumLetQ) × Numeric
    if b1 == Some(WC_Numeric) && is_mid_num_q(b0) && n0 == Some(WC_Numeric) {
        return false;
    }

    // WB12: Numeric × (MidNum | MidNumLetQ) Numeric
    if b0 == Some(WC_Numeric) && is_mid_num_q(n0) && n1 == Some(WC_Numeric) {
        return false;
    }

    // WB13 (kana): Katakana × Katakana, Hiragana × Hiragana,
    //              KanaExtension × KanaExtension
    if is_kana(b0) && b0 == n0 {
        return false;
    }

    // WB13 (kana): (Katakana | Hiragana) × KanaExtension
    if matches!(b0, Some(WC_Katakana | WC_Hiragana)) && n0 == Some(WC_KanaExtension) {
        return false;
    }

    // WB13 (kana): KanaExtension × (Katakana | Hiragana)
    if b0 == Some(WC_KanaExtension) && matches!(n0, Some(WC_Katakana | WC_Hiragana)) {
        return false;
    }

    // WB13a: (AHLetter | Numeric | Kana | ExtendNumLet) × ExtendNumLet
    if (is_ahletter(b0) || is_kana(b0) || matches!(b0, Some(WC_Numeric | WC_ExtendNumLet)))
        && n0 == Some(WC_ExtendNumLet)
    {
        return false;
    }

    // WB13b: ExtendNumLet × (AHLetter | Numeric | Kana)
    if b0 == Some(WC_ExtendNumLet)
        && (is_ahletter(n0) || is_kana(n0) || n0 == Some(WC_Numeric))
    {
        return false;
    }

    // WB15: sot (RI RI)* RI × RI
    // WB16: [^RI] (RI RI)* RI × RI
    if n0 == Some(WC_Regional_Indicator)
        && is_ri_run_odd(word_back(prev).map(|c| c == WC_Regional_Indicator))
    {
        return false;
    }

    // WB999: Any ÷ Any
    true
}

/// Script extension of the word rules, consulted only where
/// [`can_break_word`] permits a break: returns `true` when the boundary lies
/// inside a run of one script and should be suppressed.
///
/// Runs of white space stay together and never join anything else.
/// Unclassified (`Other`) code points never join either. Everything else
/// joins its neighbour when both code points report the same script.
pub fn is_in_script_word(prev: &[WordCat], next: &[WordCat], prev_cp: u32, next_cp: u32) -> bool {
    let (Some(&before), Some(&after)) = (prev.last(), next.first()) else {
        return false;
    };

    match (before == WC_WSegSpace, after == WC_WSegSpace) {
        (true, true) => return true,
        (true, false) | (false, true) => return false,
        (false, false) => {}
    }

    if matches!(before, WC_Other | WC_EOT) || matches!(after, WC_Other | WC_EOT) {
        return false;
    }

    script_property(prev_cp) == script_property(next_cp)
}

fn is_sentence_ignorable(c: SentenceCat) -> bool {
    matches!(c, SC_Extend | SC_Format)
}

fn is_para_sep(c: SentenceCat) -> bool {
    matches!(c, SC_Sep | SC_CR | SC_LF)
}

fn is_sentence_anchor(c: SentenceCat) -> bool {
    is_para_sep(c) || c == SC_EOT
}

fn is_sa_term(c: SentenceCat) -> bool {
    matches!(c, SC_ATerm | SC_STerm)
}

fn sentence_back(prev: &[SentenceCat]) -> FoldedBack<'_, SentenceCat> {
    FoldedBack {
        rest: prev,
        ignorable: is_sentence_ignorable,
        anchor: is_sentence_anchor,
    }
}

fn sentence_fwd(next: &[SentenceCat]) -> FoldedFwd<'_, SentenceCat> {
    FoldedFwd {
        rest: next,
        ignorable: is_sentence_ignorable,
        anchor: is_sentence_anchor,
    }
}

/// Matches `SATerm Close* Sp* ParaSep?` at the end of the folded prefix, with
/// the `Sp*` and `ParaSep?` parts enabled on request, and returns the
/// terminator found.
fn terminator_before(prev: &[SentenceCat], spaces: bool, para_sep: bool) -> Option<SentenceCat> {
    let mut back = sentence_back(prev).peekable();
    if para_sep {
        back.next_if(|&c| is_para_sep(c));
    }
    if spaces {
        while back.next_if_eq(&SC_Sp).is_some() {}
    }
    while back.next_if_eq(&SC_Close).is_some() {}
    back.next().filter(|&c| is_sa_term(c))
}

/// Decides whether a sentence boundary is permitted between `prev` and
/// `next`.
pub fn can_break_sentence(prev: &[SentenceCat], next: &[SentenceCat]) -> bool {
    // SB1: sot ÷ Any
    let Some(&before) = prev.last() else {
        return true;
    };
    let after = next.first().copied().unwrap_or(SC_EOT);

    // SB2: Any ÷ eot
    if after == SC_EOT {
        return true;
    }

    // SB3: CR × LF
    if before == SC_CR && after == SC_LF {
        return false;
    }

    // SB4: ParaSep ÷
    if is_para_sep(before) {
        return true;
    }

    // SB5: X (Extend | Format)* → X
    if is_sentence_ignorable(after) {
        return false;
    }

    let mut back = sentence_back(prev);
    let (b0, b1) = (back.next(), back.next());

    // SB6: ATerm × Numeric
    if b0 == Some(SC_ATerm) && after == SC_Numeric {
        return false;
    }

    // SB7: (Upper | Lower) ATerm × Upper
    if matches!(b1, Some(SC_Upper | SC_Lower)) && b0 == Some(SC_ATerm) && after == SC_Upper {
        return false;
    }

    // SB8: ATerm Close* Sp* × ( ¬(OLetter | Upper | Lower | ParaSep | SATerm) )* Lower
    if terminator_before(prev, true, false) == Some(SC_ATerm) {
        let stop = sentence_fwd(next).find(|&c| {
            matches!(c, SC_OLetter | SC_Upper | SC_Lower) || is_para_sep(c) || is_sa_term(c)
        });
        if stop == Some(SC_Lower) {
            return false;
        }
    }

    // SB8a: SATerm Close* Sp* × (SContinue | SATerm)
    if terminator_before(prev, true, false).is_some()
        && (after == SC_SContinue || is_sa_term(after))
    {
        return false;
    }

    // SB9: SATerm Close* × (Close | Sp | ParaSep)
    if terminator_before(prev, false, false).is_some()
        && (matches!(after, SC_Close | SC_Sp) || is_para_sep(after))
    {
        return false;
    }

    // SB10: SATerm Close* Sp* × (Sp | ParaSep)
    if terminator_before(prev, true, false).is_some()
        && (after == SC_Sp || is_para_sep(after))
    {
        return false;
    }

    // SB11: SATerm Close* Sp* ParaSep? ÷
    if terminator_before(prev, true, true).is_some() {
        return true;
    }

    // SB998: Any × Any
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grapheme_rules() {
        assert!(can_break_grapheme(&[], &[GC_Other, GC_EOT]));
        assert!(can_break_grapheme(&[GC_Other], &[GC_EOT]));
        assert!(!can_break_grapheme(&[GC_CR], &[GC_LF, GC_EOT]));
        assert!(can_break_grapheme(&[GC_LF], &[GC_Extend, GC_EOT]));
        assert!(!can_break_grapheme(&[GC_Other], &[GC_Extend, GC_EOT]));
        assert!(!can_break_grapheme(&[GC_L], &[GC_LVT, GC_EOT]));
        assert!(can_break_grapheme(&[GC_LVT], &[GC_V, GC_EOT]));
        assert!(!can_break_grapheme(&[GC_Prepend], &[GC_Other, GC_EOT]));
        assert!(can_break_grapheme(&[GC_Other], &[GC_Prepend, GC_EOT]));
    }

    #[test]
    fn test_grapheme_emoji_zwj() {
        let prev = [GC_Extended_Pictographic, GC_Extend, GC_Extend, GC_ZWJ];
        assert!(!can_break_grapheme(&prev, &[GC_Extended_Pictographic, GC_EOT]));
        assert!(can_break_grapheme(&[GC_Other, GC_ZWJ], &[GC_Extended_Pictographic, GC_EOT]));
    }

    #[test]
    fn test_regional_indicator_parity() {
        let ri = GC_Regional_Indicator;
        assert!(!can_break_grapheme(&[ri], &[ri, GC_EOT]));
        assert!(can_break_grapheme(&[ri, ri], &[ri, GC_EOT]));
        assert!(!can_break_grapheme(&[GC_Other, ri, ri, ri], &[ri, GC_EOT]));

        let wri = WC_Regional_Indicator;
        assert!(!can_break_word(&[wri, WC_Extend], &[wri, WC_EOT]));
        assert!(can_break_word(&[wri, WC_Extend, wri], &[wri, WC_EOT]));
    }

    #[test]
    fn test_word_rules() {
        assert!(!can_break_word(&[WC_ALetter], &[WC_ALetter, WC_EOT]));
        assert!(!can_break_word(&[WC_ALetter], &[WC_MidLetter, WC_ALetter, WC_EOT]));
        assert!(can_break_word(&[WC_ALetter], &[WC_MidLetter, WC_WSegSpace, WC_EOT]));
        assert!(!can_break_word(&[WC_ALetter, WC_MidLetter], &[WC_ALetter, WC_EOT]));
        assert!(!can_break_word(&[WC_Numeric], &[WC_MidNumLet, WC_Numeric, WC_EOT]));
        assert!(!can_break_word(&[WC_Numeric, WC_MidNum], &[WC_Numeric, WC_EOT]));
        assert!(can_break_word(&[WC_Numeric], &[WC_MidNum, WC_EOT]));
        assert!(!can_break_word(&[WC_WSegSpace], &[WC_WSegSpace, WC_EOT]));
        assert!(can_break_word(&[WC_Other], &[WC_Other, WC_EOT]));
    }

    #[test]
    fn test_pictographic_letters() {
        // ZWJ followed by U+2139 stays joined; the sign still acts as a letter.
        assert!(!can_break_word(&[WC_Extended_Pictographic, WC_ZWJ], &[WC_ALetter_ExtPict, WC_EOT]));
        assert!(!can_break_word(&[WC_ALetter], &[WC_ALetter_ExtPict, WC_EOT]));
        assert!(!can_break_word(&[WC_ALetter_ExtPict], &[WC_MidLetter, WC_ALetter, WC_EOT]));
        assert!(can_break_word(&[WC_Other, WC_ZWJ], &[WC_ALetter, WC_EOT]));
    }

    #[test]
    fn test_word_ignorables_fold_into_their_base() {
        // a ◌́ · b: the accent belongs to `a`, so WB5 still applies.
        assert!(!can_break_word(&[WC_ALetter, WC_Extend], &[WC_ALetter, WC_EOT]));
        // a ◌́ : ◌́ b
        assert!(!can_break_word(
            &[WC_ALetter, WC_Extend],
            &[WC_MidLetter, WC_Format, WC_ALetter, WC_EOT]
        ));
        assert!(!can_break_word(&[WC_ALetter], &[WC_Extend, WC_EOT]));
        // After a newline the ignorable run is not absorbed.
        assert!(can_break_word(&[WC_LF, WC_Extend], &[WC_ALetter, WC_EOT]));
    }

    #[test]
    fn test_word_kana_extension() {
        assert!(!can_break_word(&[WC_Katakana], &[WC_Katakana, WC_EOT]));
        assert!(!can_break_word(&[WC_Hiragana], &[WC_Hiragana, WC_EOT]));
        assert!(!can_break_word(&[WC_Hiragana], &[WC_KanaExtension, WC_EOT]));
        assert!(!can_break_word(&[WC_KanaExtension], &[WC_Katakana, WC_EOT]));
        assert!(can_break_word(&[WC_Hiragana], &[WC_Katakana, WC_EOT]));
        assert!(!can_break_word(&[WC_Hiragana], &[WC_ExtendNumLet, WC_EOT]));
    }

    #[test]
    fn test_script_word() {
        let han = [0x6F22, 0x5B57];
        // Ideographs are unclassified and stay apart.
        assert!(!is_in_script_word(&[WC_Other], &[WC_Other, WC_EOT], han[0], han[1]));
        assert!(!is_in_script_word(&[WC_ALetter], &[WC_Other, WC_EOT], 0x61, han[0]));
        assert!(!is_in_script_word(&[WC_ALetter], &[WC_EOT], 0x61, 0x62));
        assert!(is_in_script_word(&[WC_ALetter], &[WC_ALetter, WC_EOT], 0x61, 0x62));
        // Latin next to Cyrillic.
        assert!(!is_in_script_word(&[WC_ALetter], &[WC_ALetter, WC_EOT], 0x61, 0x0431));
        // Both full stops are Common.
        assert!(is_in_script_word(&[WC_MidNumLet], &[WC_MidNumLet, WC_EOT], 0x2E, 0x2E));
        assert!(is_in_script_word(&[WC_WSegSpace], &[WC_WSegSpace, WC_EOT], 0x20, 0x3000));
        assert!(!is_in_script_word(&[WC_WSegSpace], &[WC_Other, WC_EOT], 0x20, han[0]));
    }

    #[test]
    fn test_sentence_rules() {
        assert!(!can_break_sentence(&[SC_Upper], &[SC_Lower, SC_EOT]));
        assert!(can_break_sentence(&[SC_Lower], &[SC_EOT]));
        assert!(!can_break_sentence(&[SC_CR], &[SC_LF, SC_EOT]));
        assert!(can_break_sentence(&[SC_LF], &[SC_Upper, SC_EOT]));
        // etc. 3.
        assert!(!can_break_sentence(&[SC_Lower, SC_ATerm], &[SC_Sp, SC_Numeric, SC_EOT]));
        // "U.S." × "A"
        assert!(!can_break_sentence(&[SC_Upper, SC_ATerm], &[SC_Upper, SC_EOT]));
        // "Hi." ÷ " There"
        assert!(!can_break_sentence(&[SC_Lower, SC_ATerm], &[SC_Sp, SC_Upper, SC_EOT]));
        assert!(can_break_sentence(&[SC_Lower, SC_ATerm, SC_Sp], &[SC_Upper, SC_EOT]));
        // "etc.) the" stays one sentence (SB8).
        assert!(!can_break_sentence(
            &[SC_Lower, SC_ATerm, SC_Close, SC_Sp],
            &[SC_Other, SC_Lower, SC_EOT]
        ));
        // "Go!" ÷ "Now", but "Go!" × "?"
        assert!(can_break_sentence(&[SC_Lower, SC_STerm], &[SC_Upper, SC_EOT]));
        assert!(!can_break_sentence(&[SC_Lower, SC_STerm], &[SC_STerm, SC_EOT]));
        // Extend after a terminator is folded into it.
        assert!(can_break_sentence(&[SC_STerm, SC_Extend, SC_Sp], &[SC_Upper, SC_EOT]));
    }
}
