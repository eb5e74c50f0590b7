use pretty_assertions::assert_eq;
use unicode_normalization::UnicodeNormalization;
use unicode_segmentation::UnicodeSegmentation;
use unistring::{
    get_sentences_utf16, get_words, get_words_utf16, Grapheme, Unistring, WordCat, WordConfig,
};

const SAMPLES: &[&str] = &[
    "",
    "plain ascii text",
    "a\u{301}\u{1F1FA}\u{1F1F8}\r\n",
    "\u{1F469}\u{200D}\u{1F469}\u{200D}\u{1F467} family",
    "\u{D55C}\u{AD6D}\u{C5B4} \u{1100}\u{1161}\u{11A8}",
    "日本語のテキスト、カタカナー。",
    "Stra\u{DF}e \u{1F44D}\u{1F3FD}!",
];

fn check_invariants(s: &Unistring) {
    let units = s.to_utf16();
    let total: usize = s.iter().map(Grapheme::len_utf16).sum();
    assert_eq!(units.len(), total);
    assert_eq!(units.len(), s.len_utf16());

    let mut expected = 0;
    for (i, grapheme) in s.iter().enumerate() {
        assert_eq!(expected, grapheme.raw_index(), "offset of cluster {}", i);
        expected += grapheme.len_utf16();
    }

    for i in 0..s.len() {
        let i = i as isize;
        let raw = s.raw_index_at(i).unwrap();
        let next = s.raw_index_at(i + 1).unwrap();
        assert_eq!(next, raw + s.raw_string_at(i).len());
        assert_eq!(Some(i as usize), s.cluster_index_from_utf16_index(raw));
    }
}

#[test]
fn round_trip_reproduces_clusters() {
    for sample in SAMPLES {
        let s = Unistring::from(*sample);
        assert_eq!(*sample, s.to_string());
        assert_eq!(s, Unistring::from(s.to_string()));
        assert_eq!(s, Unistring::from_utf16(&s.to_utf16()));
        check_invariants(&s);
    }
}

#[test]
fn round_trip_keeps_lone_surrogates() {
    let units = [0x61, 0xDC00, 0xD83D, 0xDE00, 0xD800];
    let s = Unistring::from_utf16(&units);
    assert_eq!(4, s.len());
    assert_eq!(units.to_vec(), s.to_utf16());
    assert_eq!(s, Unistring::from_utf16(&s.to_utf16()));
    check_invariants(&s);
}

#[test]
fn invariants_survive_mutation() {
    let mut s = Unistring::from("hello \u{1F30D}");
    s.insert("\u{1F1EF}\u{1F1F5}", 2);
    check_invariants(&s);
    s.delete(-3, Some(2));
    check_invariants(&s);
    s.append("e\u{301}").insert("\r\n", 0);
    check_invariants(&s);
    assert_eq!("\r\nhe\u{1F1EF}\u{1F1F5}ll\u{1F30D}e\u{301}", s.to_string());
}

#[test]
fn documented_scenarios() {
    let s = Unistring::from("a\u{301}");
    assert_eq!(1, s.len());
    assert_eq!(2, s.raw_string_at(0).len());

    assert_eq!(1, Unistring::from("\u{1F1FA}\u{1F1F8}").len());
    assert_eq!(1, Unistring::from("\r\n").len());

    let words = get_words("I have 3.14 dollars.", WordConfig::default());
    let like = words
        .word_like()
        .map(|word| word.text.as_str())
        .collect::<Vec<_>>();
    assert_eq!(vec!["I", "have", "3.14", "dollars"], like);
    assert_eq!(
        Some(WordCat::WC_Numeric),
        words.iter().find(|word| word.text == "3.14").map(|word| word.kind)
    );

    let mut s = Unistring::from("ab");
    s.insert("X", 1);
    assert_eq!("aXb", s.to_string());
    assert_eq!(3, s.len());

    let mut s = Unistring::from("ab");
    s.delete(0, Some(1));
    assert_eq!("b", s.to_string());
    assert_eq!(Some(0), s.raw_index_at(0));
}

#[test]
fn graphemes_agree_with_unicode_segmentation() {
    let texts = [
        "The quick brown fox",
        "a\u{301}e\u{308}\u{323}o",
        "\u{1F1FA}\u{1F1F8}\u{1F1EF}\u{1F1F5}\u{1F1EB}",
        "\u{1F468}\u{200D}\u{1F4BB} \u{1F44B}\u{1F3FF}",
        "\u{1100}\u{1161}\u{11A8}\u{AC00}\u{11A8}",
        "line\r\nbreak\n\r",
    ];
    for text in texts {
        let ours = Unistring::from(text)
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>();
        let theirs = text.graphemes(true).collect::<Vec<_>>();
        assert_eq!(theirs, ours, "{:?}", text);
    }
}

#[test]
fn decomposed_text_keeps_cluster_count() {
    let composed = "Caf\u{E9} r\u{E9}sum\u{E9} na\u{EF}ve \u{C5}ngstr\u{F6}m";
    let decomposed = composed.nfd().collect::<String>();
    assert!(decomposed.chars().count() > composed.chars().count());

    let a = Unistring::from(composed);
    let b = Unistring::from(decomposed.as_str());
    assert_eq!(a.len(), b.len());
    assert_eq!(composed.chars().count(), b.len());
    assert_eq!(decomposed.graphemes(true).count(), b.len());
    check_invariants(&b);
}

#[test]
fn words_agree_with_unicode_segmentation() {
    let texts = [
        "The quick (\"brown\") fox can't jump 32.3 feet, right?",
        "e.g. 1,000.5 apples_and_pears",
        "  multiple   spaces\tand\ttabs ",
    ];
    for text in texts {
        let words = get_words(text, WordConfig::default());
        let bounds = words
            .iter()
            .map(|word| word.text.as_str())
            .collect::<Vec<_>>();
        assert_eq!(text.split_word_bounds().collect::<Vec<_>>(), bounds, "{:?}", text);

        let like = words
            .word_like()
            .map(|word| word.text.as_str())
            .collect::<Vec<_>>();
        assert_eq!(text.unicode_words().collect::<Vec<_>>(), like, "{:?}", text);
    }
}

#[test]
fn navigation_clamps() {
    let s = Unistring::from("x\u{1F600}y");
    assert_eq!("x\u{1F600}y", s.substring(-10, Some(10)).to_string());
    assert_eq!("", s.substr(10, None).to_string());
    assert_eq!(Some(4), s.raw_index_at(10));
    assert_eq!(Some(1), s.index_of("\u{1F600}"));
    assert_eq!(None, s.index_of(Unistring::from_utf16(&[0xD83D])));
}

#[test]
fn segments_reassemble_utf16_input() {
    let units = [0x48, 0x69, 0xDC00, 0x20, 0xD83D, 0xDE00, 0x2E, 0x20, 0xD800];
    for config in [WordConfig::default(), WordConfig::merge_scripts()] {
        let joined = get_words_utf16(&units, config)
            .iter()
            .flat_map(|word| word.raw.iter().copied())
            .collect::<Vec<_>>();
        assert_eq!(units.to_vec(), joined);
    }
    let joined = get_sentences_utf16(&units)
        .into_iter()
        .flat_map(|sentence| sentence.raw)
        .collect::<Vec<_>>();
    assert_eq!(units.to_vec(), joined);
}
