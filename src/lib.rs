#![forbid(unsafe_code)]
#![deny(missing_docs, missing_debug_implementations)]
//! Grapheme-cluster indexed strings and UAX #29 text segmentation.
//!
//! The `Unistring` type is a mutable string whose positions are user-perceived
//! characters (extended grapheme clusters) instead of bytes or code units.
//! Each cluster is a `Grapheme`, which remembers its code points, their UTF-16
//! form and its UTF-16 offset within the string, so that positions can be
//! translated to and from UTF-16 based APIs cheaply.
//!
//! Text comes in either as Rust strings or as UTF-16 code units. UTF-16 input
//! may carry unpaired surrogates; they are kept as they are, form clusters of
//! their own and survive a round trip through `to_utf16`.
//!
//! Besides grapheme clusters, the crate segments text into words
//! (`get_words`) and sentences (`get_sentences`). Segments report their
//! position in code points.
//!
//! # Segmentation rules
//!
//! Boundaries follow the default rules of UAX #29 for Unicode 14.0 with two
//! tailorings of the word rules:
//!
//! * Hiragana form words of their own, and the prolonged sound mark and
//!   iteration marks shared by both kana scripts attach to either of them.
//! * With `WordConfig::merge_scripts`, neighbours that report the same script
//!   stay together even where the default rules would break, e.g. a run of
//!   full stops. Unclassified characters such as ideographs never take part,
//!   and runs of white space stay together but never join anything else.
//!
//! Letters that are also pictographic (e.g. U+2139) keep their letter
//! behaviour and still join a preceding zero width joiner.
//!
//! # Property lookups
//!
//! Break properties are found by binary search over the tables in
//! [`tables`] and memoised per thread. The caches only grow;
//! [`clear_caches`] empties those of the calling thread.

pub mod tables;

pub(crate) mod error;

pub(crate) mod utf16;

pub(crate) mod finder;

pub(crate) mod rules;

pub(crate) mod cluster;

pub(crate) mod grapheme_ty;

pub(crate) mod unistring_ty;

pub use error::{Error, Result};

pub use utf16::{
    code_point_string, code_points, encode, len_utf16, units_from_code_points, CodePointFormat,
    Utf16Units, MAX_CODE_POINT,
};

pub use finder::{
    cached_len, clear_caches, grapheme_property, script_property, sentence_property,
    word_property, Axis, PropertyTable,
};

pub use rules::{can_break_grapheme, can_break_sentence, can_break_word, is_in_script_word};

pub use cluster::{
    build_grapheme_clusters, build_sentence_clusters, build_word_clusters, get_sentences,
    get_sentences_utf16, get_words, get_words_utf16, Segment, WordConfig, Words,
};

pub use grapheme_ty::Grapheme;

pub use unistring_ty::Unistring;

pub use tables::{
    grapheme::GraphemeCat, script::Script, sentence::SentenceCat, word::WordCat,
    UNICODE_VERSION,
};
