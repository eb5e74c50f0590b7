// Generated from the Unicode Character Database, version 14.0.0.
// Do not edit by hand.
//
// Each table is a list of `(first code point, run length, value)` triples,
// sorted by first code point and non-overlapping. Code points not covered by
// any run take the default value of the property (`Other` or `Unknown`).

#![allow(missing_docs)]

/// The version of the Unicode Character Database the tables were generated from.
pub const UNICODE_VERSION: (u8, u8, u8) = (14, 0, 0);

pub mod grapheme {
    pub use self::GraphemeCat::*;

    /// `Grapheme_Cluster_Break` values, with `Extended_Pictographic` folded in.
    #[allow(non_camel_case_types)]
    #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub enum GraphemeCat {
        GC_Other,
        GC_CR,
        GC_LF,
        GC_Control,
        GC_Extend,
        GC_ZWJ,
        GC_Regional_Indicator,
        GC_Prepend,
        GC_SpacingMark,
        GC_L,
        GC_V,
        GC_T,
        GC_LV,
        GC_LVT,
        GC_Extended_Pictographic,
        /// End-of-text sentinel; never stored in the table.
        GC_EOT,
    }

    pub(crate) const GRAPHEME_CAT_TABLE: &[(u32, u32, GraphemeCat)] = &[
        (0x0000, 10, GC_Control),
        (0x000A, 1, GC_LF),
        (0x000B, 2, GC_Control),
        (0x000D, 1, GC_CR),
        (0x000E, 18, GC_Control),
        (0x007F, 33, GC_Control),
        (0x00A9, 1, GC_Extended_Pictographic),
        (0x00AD, 1, GC_Control),
        (0x00AE, 1, GC_Extended_Pictographic),
        (0x0300, 112, GC_Extend),
        (0x0483, 7, GC_Extend),
        (0x0591, 45, GC_Extend),
        (0x05BF, 1, GC_Extend),
        (0x05C1, 2, GC_Extend),
        (0x05C4, 2, GC_Extend),
        (0x05C7, 1, GC_Extend),
        (0x0600, 6, GC_Prepend),
        (0x0610, 11, GC_Extend),
        (0x061C, 1, GC_Control),
        (0x064B, 21, GC_Extend),
        (0x0670, 1, GC_Extend),
        (0x06D6, 7, GC_Extend),
        (0x06DD, 1, GC_Prepend),
        (0x06DF, 6, GC_Extend),
        (0x06E7, 2, GC_Extend),
        (0x06EA, 4, GC_Extend),
        (0x070F, 1, GC_Prepend),
        (0x0711, 1, GC_Extend),
        (0x0730, 27, GC_Extend),
        (0x07A6, 11, GC_Extend),
        (0x07EB, 9, GC_Extend),
        (0x07FD, 1, GC_Extend),
        (0x0816, 4, GC_Extend),
        (0x081B, 9, GC_Extend),
        (0x0825, 3, GC_Extend),
        (0x0829, 5, GC_Extend),
        (0x0859, 3, GC_Extend),
        (0x0890, 2, GC_Prepend),
        (0x0898, 8, GC_Extend),
        (0x08CA, 24, GC_Extend),
        (0x08E2, 1, GC_Prepend),
        (0x08E3, 32, GC_Extend),
        (0x0903, 1, GC_SpacingMark),
        (0x093A, 1, GC_Extend),
        (0x093B, 1, GC_SpacingMark),
        (0x093C, 1, GC_Extend),
        (0x093E, 3, GC_SpacingMark),
        (0x0941, 8, GC_Extend),
        (0x0949, 4, GC_SpacingMark),
        (0x094D, 1, GC_Extend),
        (0x094E, 2, GC_SpacingMark),
        (0x0951, 7, GC_Extend),
        (0x0962, 2, GC_Extend),
        (0x0981, 1, GC_Extend),
        (0x0982, 2, GC_SpacingMark),
        (0x09BC, 1, GC_Extend),
        (0x09BE, 1, GC_Extend),
        (0x09BF, 2, GC_SpacingMark),
        (0x09C1, 4, GC_Extend),
        (0x09C7, 2, GC_SpacingMark),
        (0x09CB, 2, GC_SpacingMark),
        (0x09CD, 1, GC_Extend),
        (0x09D7, 1, GC_Extend),
        (0x09E2, 2, GC_Extend),
        (0x09FE, 1, GC_Extend),
        (0x0A01, 2, GC_Extend),
        (0x0A03, 1, GC_SpacingMark),
        (0x0A3C, 1, GC_Extend),
        (0x0A3E, 3, GC_SpacingMark),
        (0x0A41, 2, GC_Extend),
        (0x0A47, 2, GC_Extend),
        (0x0A4B, 3, GC_Extend),
        (0x0A51, 1, GC_Extend),
        (0x0A70, 2, GC_Extend),
        (0x0A75, 1, GC_Extend),
        (0x0A81, 2, GC_Extend),
        (0x0A83, 1, GC_SpacingMark),
        (0x0ABC, 1, GC_Extend),
        (0x0ABE, 3, GC_SpacingMark),
        (0x0AC1, 5, GC_Extend),
        (0x0AC7, 2, GC_Extend),
        (0x0AC9, 1, GC_SpacingMark),
        (0x0ACB, 2, GC_SpacingMark),
        (0x0ACD, 1, GC_Extend),
        (0x0AE2, 2, GC_Extend),
        (0x0AFA, 6, GC_Extend),
        (0x0B01, 1, GC_Extend),
        (0x0B02, 2, GC_SpacingMark),
        (0x0B3C, 1, GC_Extend),
        (0x0B3E, 2, GC_Extend),
        (0x0B40, 1, GC_SpacingMark),
        (0x0B41, 4, GC_Extend),
        (0x0B47, 2, GC_SpacingMark),
        (0x0B4B, 2, GC_SpacingMark),
        (0x0B4D, 1, GC_Extend),
        (0x0B55, 3, GC_Extend),
        (0x0B62, 2, GC_Extend),
        (0x0B82, 1, GC_Extend),
        (0x0BBE, 1, GC_Extend),
        (0x0BBF, 1, GC_SpacingMark),
        (0x0BC0, 1, GC_Extend),
        (0x0BC1, 2, GC_SpacingMark),
        (0x0BC6, 3, GC_SpacingMark),
        (0x0BCA, 3, GC_SpacingMark),
        (0x0BCD, 1, GC_Extend),
        (0x0BD7, 1, GC_Extend),
        (0x0C00, 1, GC_Extend),
        (0x0C01, 3, GC_SpacingMark),
        (0x0C04, 1, GC_Extend),
        (0x0C3C, 1, GC_Extend),
        (0x0C3E, 3, GC_Extend),
        (0x0C41, 4, GC_SpacingMark),
        (0x0C46, 3, GC_Extend),
        (0x0C4A, 4, GC_Extend),
        (0x0C55, 2, GC_Extend),
        (0x0C62, 2, GC_Extend),
        (0x0C81, 1, GC_Extend),
        (0x0C82, 2, GC_SpacingMark),
        (0x0CBC, 1, GC_Extend),
        (0x0CBE, 1, GC_SpacingMark),
        (0x0CBF, 1, GC_Extend),
        (0x0CC0, 2, GC_SpacingMark),
        (0x0CC2, 1, GC_Extend),
        (0x0CC3, 2, GC_SpacingMark),
        (0x0CC6, 1, GC_Extend),
        (0x0CC7, 2, GC_SpacingMark),
        (0x0CCA, 2, GC_SpacingMark),
        (0x0CCC, 2, GC_Extend),
        (0x0CD5, 2, GC_Extend),
        (0x0CE2, 2, GC_Extend),
        (0x0D00, 2, GC_Extend),
        (0x0D02, 2, GC_SpacingMark),
        (0x0D3B, 2, GC_Extend),
        (0x0D3E, 1, GC_Extend),
        (0x0D3F, 2, GC_SpacingMark),
        (0x0D41, 4, GC_Extend),
        (0x0D46, 3, GC_SpacingMark),
        (0x0D4A, 3, GC_SpacingMark),
        (0x0D4D, 1, GC_Extend),
        (0x0D4E, 1, GC_Prepend),
        (0x0D57, 1, GC_Extend),
        (0x0D62, 2, GC_Extend),
        (0x0D81, 1, GC_Extend),
        (0x0D82, 2, GC_SpacingMark),
        (0x0DCA, 1, GC_Extend),
        (0x0DCF, 1, GC_Extend),
        (0x0DD0, 2, GC_SpacingMark),
        (0x0DD2, 3, GC_Extend),
        (0x0DD6, 1, GC_Extend),
        (0x0DD8, 7, GC_SpacingMark),
        (0x0DDF, 1, GC_Extend),
        (0x0DF2, 2, GC_SpacingMark),
        (0x0E31, 1, GC_Extend),
        (0x0E33, 1, GC_SpacingMark),
        (0x0E34, 7, GC_Extend),
        (0x0E47, 8, GC_Extend),
        (0x0EB1, 1, GC_Extend),
        (0x0EB3, 1, GC_SpacingMark),
        (0x0EB4, 9, GC_Extend),
        (0x0EC8, 6, GC_Extend),
        (0x0F18, 2, GC_Extend),
        (0x0F35, 1, GC_Extend),
        (0x0F37, 1, GC_Extend),
        (0x0F39, 1, GC_Extend),
        (0x0F3E, 2, GC_SpacingMark),
        (0x0F71, 14, GC_Extend),
        (0x0F7F, 1, GC_SpacingMark),
        (0x0F80, 5, GC_Extend),
        (0x0F86, 2, GC_Extend),
        (0x0F8D, 11, GC_Extend),
        (0x0F99, 36, GC_Extend),
        (0x0FC6, 1, GC_Extend),
        (0x102D, 4, GC_Extend),
        (0x1031, 1, GC_SpacingMark),
        (0x1032, 6, GC_Extend),
        (0x1039, 2, GC_Extend),
        (0x103B, 2, GC_SpacingMark),
        (0x103D, 2, GC_Extend),
        (0x1056, 2, GC_SpacingMark),
        (0x1058, 2, GC_Extend),
        (0x105E, 3, GC_Extend),
        (0x1071, 4, GC_Extend),
        (0x1082, 1, GC_Extend),
        (0x1084, 1, GC_SpacingMark),
        (0x1085, 2, GC_Extend),
        (0x108D, 1, GC_Extend),
        (0x109D, 1, GC_Extend),
        (0x1100, 96, GC_L),
        (0x1160, 72, GC_V),
        (0x11A8, 88, GC_T),
        (0x135D, 3, GC_Extend),
        (0x1712, 3, GC_Extend),
        (0x1715, 1, GC_SpacingMark),
        (0x1732, 2, GC_Extend),
        (0x1734, 1, GC_SpacingMark),
        (0x1752, 2, GC_Extend),
        (0x1772, 2, GC_Extend),
        (0x17B4, 2, GC_Extend),
        (0x17B6, 1, GC_SpacingMark),
        (0x17B7, 7, GC_Extend),
        (0x17BE, 8, GC_SpacingMark),
        (0x17C6, 1, GC_Extend),
        (0x17C7, 2, GC_SpacingMark),
        (0x17C9, 11, GC_Extend),
        (0x17DD, 1, GC_Extend),
        (0x180B, 3, GC_Extend),
        (0x180E, 1, GC_Control),
        (0x180F, 1, GC_Extend),
        (0x1885, 2, GC_Extend),
        (0x18A9, 1, GC_Extend),
        (0x1920, 3, GC_Extend),
        (0x1923, 4, GC_SpacingMark),
        (0x1927, 2, GC_Extend),
        (0x1929, 3, GC_SpacingMark),
        (0x1930, 2, GC_SpacingMark),
        (0x1932, 1, GC_Extend),
        (0x1933, 6, GC_SpacingMark),
        (0x1939, 3, GC_Extend),
        (0x1A17, 2, GC_Extend),
        (0x1A19, 2, GC_SpacingMark),
        (0x1A1B, 1, GC_Extend),
        (0x1A55, 1, GC_SpacingMark),
        (0x1A56, 1, GC_Extend),
        (0x1A57, 1, GC_SpacingMark),
        (0x1A58, 7, GC_Extend),
        (0x1A60, 1, GC_Extend),
        (0x1A62, 1, GC_Extend),
        (0x1A65, 8, GC_Extend),
        (0x1A6D, 6, GC_SpacingMark),
        (0x1A73, 10, GC_Extend),
        (0x1A7F, 1, GC_Extend),
        (0x1AB0, 31, GC_Extend),
        (0x1B00, 4, GC_Extend),
        (0x1B04, 1, GC_SpacingMark),
        (0x1B34, 7, GC_Extend),
        (0x1B3B, 1, GC_SpacingMark),
        (0x1B3C, 1, GC_Extend),
        (0x1B3D, 5, GC_SpacingMark),
        (0x1B42, 1, GC_Extend),
        (0x1B43, 2, GC_SpacingMark),
        (0x1B6B, 9, GC_Extend),
        (0x1B80, 2, GC_Extend),
        (0x1B82, 1, GC_SpacingMark),
        (0x1BA1, 1, GC_SpacingMark),
        (0x1BA2, 4, GC_Extend),
        (0x1BA6, 2, GC_SpacingMark),
        (0x1BA8, 2, GC_Extend),
        (0x1BAA, 1, GC_SpacingMark),
        (0x1BAB, 3, GC_Extend),
        (0x1BE6, 1, GC_Extend),
        (0x1BE7, 1, GC_SpacingMark),
        (0x1BE8, 2, GC_Extend),
        (0x1BEA, 3, GC_SpacingMark),
        (0x1BED, 1, GC_Extend),
        (0x1BEE, 1, GC_SpacingMark),
        (0x1BEF, 3, GC_Extend),
        (0x1BF2, 2, GC_SpacingMark),
        (0x1C24, 8, GC_SpacingMark),
        (0x1C2C, 8, GC_Extend),
        (0x1C34, 2, GC_SpacingMark),
        (0x1C36, 2, GC_Extend),
        (0x1CD0, 3, GC_Extend),
        (0x1CD4, 13, GC_Extend),
        (0x1CE1, 1, GC_SpacingMark),
        (0x1CE2, 7, GC_Extend),
        (0x1CED, 1, GC_Extend),
        (0x1CF4, 1, GC_Extend),
        (0x1CF7, 1, GC_SpacingMark),
        (0x1CF8, 2, GC_Extend),
        (0x1DC0, 64, GC_Extend),
        (0x200B, 1, GC_Control),
        (0x200C, 1, GC_Extend),
        (0x200D, 1, GC_ZWJ),
        (0x200E, 2, GC_Control),
        (0x2028, 7, GC_Control),
        (0x203C, 1, GC_Extended_Pictographic),
        (0x2049, 1, GC_Extended_Pictographic),
        (0x2060, 16, GC_Control),
        (0x20D0, 33, GC_Extend),
        (0x2122, 1, GC_Extended_Pictographic),
        (0x2139, 1, GC_Extended_Pictographic),
        (0x2194, 6, GC_Extended_Pictographic),
        (0x21A9, 2, GC_Extended_Pictographic),
        (0x231A, 2, GC_Extended_Pictographic),
        (0x2328, 1, GC_Extended_Pictographic),
        (0x2388, 1, GC_Extended_Pictographic),
        (0x23CF, 1, GC_Extended_Pictographic),
        (0x23E9, 11, GC_Extended_Pictographic),
        (0x23F8, 3, GC_Extended_Pictographic),
        (0x24C2, 1, GC_Extended_Pictographic),
        (0x25AA, 2, GC_Extended_Pictographic),
        (0x25B6, 1, GC_Extended_Pictographic),
        (0x25C0, 1, GC_Extended_Pictographic),
        (0x25FB, 4, GC_Extended_Pictographic),
        (0x2600, 6, GC_Extended_Pictographic),
        (0x2607, 12, GC_Extended_Pictographic),
        (0x2614, 114, GC_Extended_Pictographic),
        (0x2690, 118, GC_Extended_Pictographic),
        (0x2708, 11, GC_Extended_Pictographic),
        (0x2714, 1, GC_Extended_Pictographic),
        (0x2716, 1, GC_Extended_Pictographic),
        (0x271D, 1, GC_Extended_Pictographic),
        (0x2721, 1, GC_Extended_Pictographic),
        (0x2728, 1, GC_Extended_Pictographic),
        (0x2733, 2, GC_Extended_Pictographic),
        (0x2744, 1, GC_Extended_Pictographic),
        (0x2747, 1, GC_Extended_Pictographic),
        (0x274C, 1, GC_Extended_Pictographic),
        (0x274E, 1, GC_Extended_Pictographic),
        (0x2753, 3, GC_Extended_Pictographic),
        (0x2757, 1, GC_Extended_Pictographic),
        (0x2763, 5, GC_Extended_Pictographic),
        (0x2795, 3, GC_Extended_Pictographic),
        (0x27A1, 1, GC_Extended_Pictographic),
        (0x27B0, 1, GC_Extended_Pictographic),
        (0x27BF, 1, GC_Extended_Pictographic),
        (0x2934, 2, GC_Extended_Pictographic),
        (0x2B05, 3, GC_Extended_Pictographic),
        (0x2B1B, 2, GC_Extended_Pictographic),
        (0x2B50, 1, GC_Extended_Pictographic),
        (0x2B55, 1, GC_Extended_Pictographic),
        (0x2CEF, 3, GC_Extend),
        (0x2D7F, 1, GC_Extend),
        (0x2DE0, 32, GC_Extend),
        (0x302A, 6, GC_Extend),
        (0x3030, 1, GC_Extended_Pictographic),
        (0x303D, 1, GC_Extended_Pictographic),
        (0x3099, 2, GC_Extend),
        (0x3297, 1, GC_Extended_Pictographic),
        (0x3299, 1, GC_Extended_Pictographic),
        (0xA66F, 4, GC_Extend),
        (0xA674, 10, GC_Extend),
        (0xA69E, 2, GC_Extend),
        (0xA6F0, 2, GC_Extend),
        (0xA802, 1, GC_Extend),
        (0xA806, 1, GC_Extend),
        (0xA80B, 1, GC_Extend),
        (0xA823, 2, GC_SpacingMark),
        (0xA825, 2, GC_Extend),
        (0xA827, 1, GC_SpacingMark),
        (0xA82C, 1, GC_Extend),
        (0xA880, 2, GC_SpacingMark),
        (0xA8B4, 16, GC_SpacingMark),
        (0xA8C4, 2, GC_Extend),
        (0xA8E0, 18, GC_Extend),
        (0xA8FF, 1, GC_Extend),
        (0xA926, 8, GC_Extend),
        (0xA947, 11, GC_Extend),
        (0xA952, 2, GC_SpacingMark),
        (0xA960, 29, GC_L),
        (0xA980, 3, GC_Extend),
        (0xA983, 1, GC_SpacingMark),
        (0xA9B3, 1, GC_Extend),
        (0xA9B4, 2, GC_SpacingMark),
        (0xA9B6, 4, GC_Extend),
        (0xA9BA, 2, GC_SpacingMark),
        (0xA9BC, 2, GC_Extend),
        (0xA9BE, 3, GC_SpacingMark),
        (0xA9E5, 1, GC_Extend),
        (0xAA29, 6, GC_Extend),
        (0xAA2F, 2, GC_SpacingMark),
        (0xAA31, 2, GC_Extend),
        (0xAA33, 2, GC_SpacingMark),
        (0xAA35, 2, GC_Extend),
        (0xAA43, 1, GC_Extend),
        (0xAA4C, 1, GC_Extend),
        (0xAA4D, 1, GC_SpacingMark),
        (0xAA7C, 1, GC_Extend),
        (0xAAB0, 1, GC_Extend),
        (0xAAB2, 3, GC_Extend),
        (0xAAB7, 2, GC_Extend),
        (0xAABE, 2, GC_Extend),
        (0xAAC1, 1, GC_Extend),
        (0xAAEB, 1, GC_SpacingMark),
        (0xAAEC, 2, GC_Extend),
        (0xAAEE, 2, GC_SpacingMark),
        (0xAAF5, 1, GC_SpacingMark),
        (0xAAF6, 1, GC_Extend),
        (0xABE3, 2, GC_SpacingMark),
        (0xABE5, 1, GC_Extend),
        (0xABE6, 2, GC_SpacingMark),
        (0xABE8, 1, GC_Extend),
        (0xABE9, 2, GC_SpacingMark),
        (0xABEC, 1, GC_SpacingMark),
        (0xABED, 1, GC_Extend),
        (0xAC00, 1, GC_LV),
        (0xAC01, 27, GC_LVT),
        (0xAC1C, 1, GC_LV),
        (0xAC1D, 27, GC_LVT),
        (0xAC38, 1, GC_LV),
        (0xAC39, 27, GC_LVT),
        (0xAC54, 1, GC_LV),
        (0xAC55, 27, GC_LVT),
        (0xAC70, 1, GC_LV),
        (0xAC71, 27, GC_LVT),
        (0xAC8C, 1, GC_LV),
        (0xAC8D, 27, GC_LVT),
        (0xACA8, 1, GC_LV),
        (0xACA9, 27, GC_LVT),
        (0xACC4, 1, GC_LV),
        (0xACC5, 27, GC_LVT),
        (0xACE0, 1, GC_LV),
        (0xACE1, 27, GC_LVT),
        (0xACFC, 1, GC_LV),
        (0xACFD, 27, GC_LVT),
        (0xAD18, 1, GC_LV),
        (0xAD19, 27, GC_LVT),
        (0xAD34, 1, GC_LV),
        (0xAD35, 27, GC_LVT),
        (0xAD50, 1, GC_LV),
        (0xAD51, 27, GC_LVT),
        (0xAD6C, 1, GC_LV),
        (0xAD6D, 27, GC_LVT),
        (0xAD88, 1, GC_LV),
        (0xAD89, 27, GC_LVT),
        (0xADA4, 1, GC_LV),
        (0xADA5, 27, GC_LVT),
        (0xADC0, 1, GC_LV),
        (0xADC1, 27, GC_LVT),
        (0xADDC, 1, GC_LV),
        (0xADDD, 27, GC_LVT),
        (0xADF8, 1, GC_LV),
        (0xADF9, 27, GC_LVT),
        (0xAE14, 1, GC_LV),
        (0xAE15, 27, GC_LVT),
        (0xAE30, 1, GC_LV),
        (0xAE31, 27, GC_LVT),
        (0xAE4C, 1, GC_LV),
        (0xAE4D, 27, GC_LVT),
        (0xAE68, 1, GC_LV),
        (0xAE69, 27, GC_LVT),
        (0xAE84, 1, GC_LV),
        (0xAE85, 27, GC_LVT),
        (0xAEA0, 1, GC_LV),
        (0xAEA1, 27, GC_LVT),
        (0xAEBC, 1, GC_LV),
        (0xAEBD, 27, GC_LVT),
        (0xAED8, 1, GC_LV),
        (0xAED9, 27, GC_LVT),
        (0xAEF4, 1, GC_LV),
        (0xAEF5, 27, GC_LVT),
        (0xAF10, 1, GC_LV),
        (0xAF11, 27, GC_LVT),
        (0xAF2C, 1, GC_LV),
        (0xAF2D, 27, GC_LVT),
        (0xAF48, 1, GC_LV),
        (0xAF49, 27, GC_LVT),
        (0xAF64, 1, GC_LV),
        (0xAF65, 27, GC_LVT),
        (0xAF80, 1, GC_LV),
        (0xAF81, 27, GC_LVT),
        (0xAF9C, 1, GC_LV),
        (0xAF9D, 27, GC_LVT),
        (0xAFB8, 1, GC_LV),
        (0xAFB9, 27, GC_LVT),
        (0xAFD4, 1, GC_LV),
        (0xAFD5, 27, GC_LVT),
        (0xAFF0, 1, GC_LV),
        (0xAFF1, 27, GC_LVT),
        (0xB00C, 1, GC_LV),
        (0xB00D, 27, GC_LVT),
        (0xB028, 1, GC_LV),
        (0xB029, 27, GC_LVT),
        (0xB044, 1, GC_LV),
        (0xB045, 27, GC_LVT),
        (0xB060, 1, GC_LV),
        (0xB061, 27, GC_LVT),
        (0xB07C, 1, GC_LV),
        (0xB07D, 27, GC_LVT),
        (0xB098, 1, GC_LV),
        (0xB099, 27, GC_LVT),
        (0xB0B4, 1, GC_LV),
        (0xB0B5, 27, GC_LVT),
        (0xB0D0, 1, GC_LV),
        (0xB0D1, 27, GC_LVT),
        (0xB0EC, 1, GC_LV),
        (0xB0ED, 27, GC_LVT),
        (0xB108, 1, GC_LV),
        (0xB109, 27, GC_LVT),
        (0xB124, 1, GC_LV),
        (0xB125, 27, GC_LVT),
        (0xB140, 1, GC_LV),
        (0xB141, 27, GC_LVT),
        (0xB15C, 1, GC_LV),
        (0xB15D, 27, GC_LVT),
        (0xB178, 1, GC_LV),
        (0xB179, 27, GC_LVT),
        (0xB194, 1, GC_LV),
        (0xB195, 27, GC_LVT),
        (0xB1B0, 1, GC_LV),
        (0xB1B1, 27, GC_LVT),
        (0xB1CC, 1, GC_LV),
        (0xB1CD, 27, GC_LVT),
        (0xB1E8, 1, GC_LV),
        (0xB1E9, 27, GC_LVT),
        (0xB204, 1, GC_LV),
        (0xB205, 27, GC_LVT),
        (0xB220, 1, GC_LV),
        (0xB221, 27, GC_LVT),
        (0xB23C, 1, GC_LV),
        (0xB23D, 27, GC_LVT),
        (0xB258, 1, GC_LV),
        (0xB259, 27, GC_LVT),
        (0xB274, 1, GC_LV),
        (0xB275, 27, GC_LVT),
        (0xB290, 1, GC_LV),
        (0xB291, 27, GC_LVT),
        (0xB2AC, 1, GC_LV),
        (0xB2AD, 27, GC_LVT),
        (0xB2C8, 1, GC_LV),
        (0xB2C9, 27, GC_LVT),
        (0xB2E4, 1, GC_LV),
        (0xB2E5, 27, GC_LVT),
        (0xB300, 1, GC_LV),
        (0xB301, 27, GC_LVT),
        (0xB31C, 1, GC_LV),
        (0xB31D, 27, GC_LVT),
        (0xB338, 1, GC_LV),
        (0xB339, 27, GC_LVT),
        (0xB354, 1, GC_LV),
        (0xB355, 27, GC_LVT),
        (0xB370, 1, GC_LV),
        (0xB371, 27, GC_LVT),
        (0xB38C, 1, GC_LV),
        (0xB38D, 27, GC_LVT),
        (0xB3A8, 1, GC_LV),
        (0xB3A9, 27, GC_LVT),
        (0xB3C4, 1, GC_LV),
        (0xB3C5, 27, GC_LVT),
        (0xB3E0, 1, GC_LV),
        (0xB3E1, 27, GC_LVT),
        (0xB3FC, 1, GC_LV),
        (0xB3FD, 27, GC_LVT),
        (0xB418, 1, GC_LV),
        (0xB419, 27, GC_LVT),
        (0xB434, 1, GC_LV),
        (0xB435, 27, GC_LVT),
        (0xB450, 1, GC_LV),
        (0xB451, 27, GC_LVT),
        (0xB46C, 1, GC_LV),
        (0xB46D, 27, GC_LVT),
        (0xB488, 1, GC_LV),
        (0xB489, 27, GC_LVT),
        (0xB4A4, 1, GC_LV),
        (0xB4A5, 27, GC_LVT),
        (0xB4C0, 1, GC_LV),
        (0xB4C1, 27, GC_LVT),
        (0xB4DC, 1, GC_LV),
        (0xB4DD, 27, GC_LVT),
        (0xB4F8, 1, GC_LV),
        (0xB4F9, 27, GC_LVT),
        (0xB514, 1, GC_LV),
        (0xB515, 27, GC_LVT),
        (0xB530, 1, GC_LV),
        (0xB531, 27, GC_LVT),
        (0xB54C, 1, GC_LV),
        (0xB54D, 27, GC_LVT),
        (0xB568, 1, GC_LV),
        (0xB569, 27, GC_LVT),
        (0xB584, 1, GC_LV),
        (0xB585, 27, GC_LVT),
        (0xB5A0, 1, GC_LV),
        (0xB5A1, 27, GC_LVT),
        (0xB5BC, 1, GC_LV),
        (0xB5BD, 27, GC_LVT),
        (0xB5D8, 1, GC_LV),
        (0xB5D9, 27, GC_LVT),
        (0xB5F4, 1, GC_LV),
        (0xB5F5, 27, GC_LVT),
        (0xB610, 1, GC_LV),
        (0xB611, 27, GC_LVT),
        (0xB62C, 1, GC_LV),
        (0xB62D, 27, GC_LVT),
        (0xB648, 1, GC_LV),
        (0xB649, 27, GC_LVT),
        (0xB664, 1, GC_LV),
        (0xB665, 27, GC_LVT),
        (0xB680, 1, GC_LV),
        (0xB681, 27, GC_LVT),
        (0xB69C, 1, GC_LV),
        (0xB69D, 27, GC_LVT),
        (0xB6B8, 1, GC_LV),
        (0xB6B9, 27, GC_LVT),
        (0xB6D4, 1, GC_LV),
        (0xB6D5, 27, GC_LVT),
        (0xB6F0, 1, GC_LV),
        (0xB6F1, 27, GC_LVT),
        (0xB70C, 1, GC_LV),
        (0xB70D, 27, GC_LVT),
        (0xB728, 1, GC_LV),
        (0xB729, 27, GC_LVT),
        (0xB744, 1, GC_LV),
        (0xB745, 27, GC_LVT),
        (0xB760, 1, GC_LV),
        (0xB761, 27, GC_LVT),
        (0xB77C, 1, GC_LV),
        (0xB77D, 27, GC_LVT),
        (0xB798, 1, GC_LV),
        (0xB799, 27, GC_LVT),
        (0xB7B4, 1, GC_LV),
        (0xB7B5, 27, GC_LVT),
        (0xB7D0, 1, GC_LV),
        (0xB7D1, 27, GC_LVT),
        (0xB7EC, 1, GC_LV),
        (0xB7ED, 27, GC_LVT),
        (0xB808, 1, GC_LV),
        (0xB809, 27, GC_LVT),
        (0xB824, 1, GC_LV),
        (0xB825, 27, GC_LVT),
        (0xB840, 1, GC_LV),
        (0xB841, 27, GC_LVT),
        (0xB85C, 1, GC_LV),
        (0xB85D, 27, GC_LVT),
        (0xB878, 1, GC_LV),
        (0xB879, 27, GC_LVT),
        (0xB894, 1, GC_LV),
        (0xB895, 27, GC_LVT),
        (0xB8B0, 1, GC_LV),
        (0xB8B1, 27, GC_LVT),
        (0xB8CC, 1, GC_LV),
        (0xB8CD, 27, GC_LVT),
        (0xB8E8, 1, GC_LV),
        (0xB8E9, 27, GC_LVT),
        (0xB904, 1, GC_LV),
        (0xB905, 27, GC_LVT),
        (0xB920, 1, GC_LV),
        (0xB921, 27, GC_LVT),
        (0xB93C, 1, GC_LV),
        (0xB93D, 27, GC_LVT),
        (0xB958, 1, GC_LV),
        (0xB959, 27, GC_LVT),
        (0xB974, 1, GC_LV),
        (0xB975, 27, GC_LVT),
        (0xB990, 1, GC_LV),
        (0xB991, 27, GC_LVT),
        (0xB9AC, 1, GC_LV),
        (0xB9AD, 27, GC_LVT),
        (0xB9C8, 1, GC_LV),
        (0xB9C9, 27, GC_LVT),
        (0xB9E4, 1, GC_LV),
        (0xB9E5, 27, GC_LVT),
        (0xBA00, 1, GC_LV),
        (0xBA01, 27, GC_LVT),
        (0xBA1C, 1, GC_LV),
        (0xBA1D, 27, GC_LVT),
        (0xBA38, 1, GC_LV),
        (0xBA39, 27, GC_LVT),
        (0xBA54, 1, GC_LV),
        (0xBA55, 27, GC_LVT),
        (0xBA70, 1, GC_LV),
        (0xBA71, 27, GC_LVT),
        (0xBA8C, 1, GC_LV),
        (0xBA8D, 27, GC_LVT),
        (0xBAA8, 1, GC_LV),
        (0xBAA9, 27, GC_LVT),
        (0xBAC4, 1, GC_LV),
        (0xBAC5, 27, GC_LVT),
        (0xBAE0, 1, GC_LV),
        (0xBAE1, 27, GC_LVT),
        (0xBAFC, 1, GC_LV),
        (0xBAFD, 27, GC_LVT),
        (0xBB18, 1, GC_LV),
        (0xBB19, 27, GC_LVT),
        (0xBB34, 1, GC_LV),
        (0xBB35, 27, GC_LVT),
        (0xBB50, 1, GC_LV),
        (0xBB51, 27, GC_LVT),
        (0xBB6C, 1, GC_LV),
        (0xBB6D, 27, GC_LVT),
        (0xBB88, 1, GC_LV),
        (0xBB89, 27, GC_LVT),
        (0xBBA4, 1, GC_LV),
        (0xBBA5, 27, GC_LVT),
        (0xBBC0, 1, GC_LV),
        (0xBBC1, 27, GC_LVT),
        (0xBBDC, 1, GC_LV),
        (0xBBDD, 27, GC_LVT),
        (0xBBF8, 1, GC_LV),
        (0xBBF9, 27, GC_LVT),
        (0xBC14, 1, GC_LV),
        (0xBC15, 27, GC_LVT),
        (0xBC30, 1, GC_LV),
        (0xBC31, 27, GC_LVT),
        (0xBC4C, 1, GC_LV),
        (0xBC4D, 27, GC_LVT),
        (0xBC68, 1, GC_LV),
        (0xBC69, 27, GC_LVT),
        (0xBC84, 1, GC_LV),
        (0xBC85, 27, GC_LVT),
        (0xBCA0, 1, GC_LV),
        (0xBCA1, 27, GC_LVT),
        (0xBCBC, 1, GC_LV),
        (0xBCBD, 27, GC_LVT),
        (0xBCD8, 1, GC_LV),
        (0xBCD9, 27, GC_LVT),
        (0xBCF4, 1, GC_LV),
        (0xBCF5, 27, GC_LVT),
        (0xBD10, 1, GC_LV),
        (0xBD11, 27, GC_LVT),
        (0xBD2C, 1, GC_LV),
        (0xBD2D, 27, GC_LVT),
        (0xBD48, 1, GC_LV),
        (0xBD49, 27, GC_LVT),
        (0xBD64, 1, GC_LV),
        (0xBD65, 27, GC_LVT),
        (0xBD80, 1, GC_LV),
        (0xBD81, 27, GC_LVT),
        (0xBD9C, 1, GC_LV),
        (0xBD9D, 27, GC_LVT),
        (0xBDB8, 1, GC_LV),
        (0xBDB9, 27, GC_LVT),
        (0xBDD4, 1, GC_LV),
        (0xBDD5, 27, GC_LVT),
        (0xBDF0, 1, GC_LV),
        (0xBDF1, 27, GC_LVT),
        (0xBE0C, 1, GC_LV),
        (0xBE0D, 27, GC_LVT),
        (0xBE28, 1, GC_LV),
        (0xBE29, 27, GC_LVT),
        (0xBE44, 1, GC_LV),
        (0xBE45, 27, GC_LVT),
        (0xBE60, 1, GC_LV),
        (0xBE61, 27, GC_LVT),
        (0xBE7C, 1, GC_LV),
        (0xBE7D, 27, GC_LVT),
        (0xBE98, 1, GC_LV),
        (0xBE99, 27, GC_LVT),
        (0xBEB4, 1, GC_LV),
        (0xBEB5, 27, GC_LVT),
        (0xBED0, 1, GC_LV),
        (0xBED1, 27, GC_LVT),
        (0xBEEC, 1, GC_LV),
        (0xBEED, 27, GC_LVT),
        (0xBF08, 1, GC_LV),
        (0xBF09, 27, GC_LVT),
        (0xBF24, 1, GC_LV),
        (0xBF25, 27, GC_LVT),
        (0xBF40, 1, GC_LV),
        (0xBF41, 27, GC_LVT),
        (0xBF5C, 1, GC_LV),
        (0xBF5D, 27, GC_LVT),
        (0xBF78, 1, GC_LV),
        (0xBF79, 27, GC_LVT),
        (0xBF94, 1, GC_LV),
        (0xBF95, 27, GC_LVT),
        (0xBFB0, 1, GC_LV),
        (0xBFB1, 27, GC_LVT),
        (0xBFCC, 1, GC_LV),
        (0xBFCD, 27, GC_LVT),
        (0xBFE8, 1, GC_LV),
        (0xBFE9, 27, GC_LVT),
        (0xC004, 1, GC_LV),
        (0xC005, 27, GC_LVT),
        (0xC020, 1, GC_LV),
        (0xC021, 27, GC_LVT),
        (0xC03C, 1, GC_LV),
        (0xC03D, 27, GC_LVT),
        (0xC058, 1, GC_LV),
        (0xC059, 27, GC_LVT),
        (0xC074, 1, GC_LV),
        (0xC075, 27, GC_LVT),
        (0xC090, 1, GC_LV),
        (0xC091, 27, GC_LVT),
        (0xC0AC, 1, GC_LV),
        (0xC0AD, 27, GC_LVT),
        (0xC0C8, 1, GC_LV),
        (0xC0C9, 27, GC_LVT),
        (0xC0E4, 1, GC_LV),
        (0xC0E5, 27, GC_LVT),
        (0xC100, 1, GC_LV),
        (0xC101, 27, GC_LVT),
        (0xC11C, 1, GC_LV),
        (0xC11D, 27, GC_LVT),
        (0xC138, 1, GC_LV),
        (0xC139, 27, GC_LVT),
        (0xC154, 1, GC_LV),
        (0xC155, 27, GC_LVT),
        (0xC170, 1, GC_LV),
        (0xC171, 27, GC_LVT),
        (0xC18C, 1, GC_LV),
        (0xC18D, 27, GC_LVT),
        (0xC1A8, 1, GC_LV),
        (0xC1A9, 27, GC_LVT),
        (0xC1C4, 1, GC_LV),
        (0xC1C5, 27, GC_LVT),
        (0xC1E0, 1, GC_LV),
        (0xC1E1, 27, GC_LVT),
        (0xC1FC, 1, GC_LV),
        (0xC1FD, 27, GC_LVT),
        (0xC218, 1, GC_LV),
        (0xC219, 27, GC_LVT),
        (0xC234, 1, GC_LV),
        (0xC235, 27, GC_LVT),
        (0xC250, 1, GC_LV),
        (0xC251, 27, GC_LVT),
        (0xC26C, 1, GC_LV),
        (0xC26D, 27, GC_LVT),
        (0xC288, 1, GC_LV),
        (0xC289, 27, GC_LVT),
        (0xC2A4, 1, GC_LV),
        (0xC2A5, 27, GC_LVT),
        (0xC2C0, 1, GC_LV),
        (0xC2C1, 27, GC_LVT),
        (0xC2DC, 1, GC_LV),
        (0xC2DD, 27, GC_LVT),
        (0xC2F8, 1, GC_LV),
        (0xC2F9, 27, GC_LVT),
        (0xC314, 1, GC_LV),
        (0xC315, 27, GC_LVT),
        (0xC330, 1, GC_LV),
        (0xC331, 27, GC_LVT),
        (0xC34C, 1, GC_LV),
        (0xC34D, 27, GC_LVT),
        (0xC368, 1, GC_LV),
        (0xC369, 27, GC_LVT),
        (0xC384, 1, GC_LV),
        (0xC385, 27, GC_LVT),
        (0xC3A0, 1, GC_LV),
        (0xC3A1, 27, GC_LVT),
        (0xC3BC, 1, GC_LV),
        (0xC3BD, 27, GC_LVT),
        (0xC3D8, 1, GC_LV),
        (0xC3D9, 27, GC_LVT),
        (0xC3F4, 1, GC_LV),
        (0xC3F5, 27, GC_LVT),
        (0xC410, 1, GC_LV),
        (0xC411, 27, GC_LVT),
        (0xC42C, 1, GC_LV),
        (0xC42D, 27, GC_LVT),
        (0xC448, 1, GC_LV),
        (0xC449, 27, GC_LVT),
        (0xC464, 1, GC_LV),
        (0xC465, 27, GC_LVT),
        (0xC480, 1, GC_LV),
        (0xC481, 27, GC_LVT),
        (0xC49C, 1, GC_LV),
        (0xC49D, 27, GC_LVT),
        (0xC4B8, 1, GC_LV),
        (0xC4B9, 27, GC_LVT),
        (0xC4D4, 1, GC_LV),
        (0xC4D5, 27, GC_LVT),
        (0xC4F0, 1, GC_LV),
        (0xC4F1, 27, GC_LVT),
        (0xC50C, 1, GC_LV),
        (0xC50D, 27, GC_LVT),
        (0xC528, 1, GC_LV),
        (0xC529, 27, GC_LVT),
        (0xC544, 1, GC_LV),
        (0xC545, 27, GC_LVT),
        (0xC560, 1, GC_LV),
        (0xC561, 27, GC_LVT),
        (0xC57C, 1, GC_LV),
        (0xC57D, 27, GC_LVT),
        (0xC598, 1, GC_LV),
        (0xC599, 27, GC_LVT),
        (0xC5B4, 1, GC_LV),
        (0xC5B5, 27, GC_LVT),
        (0xC5D0, 1, GC_LV),
        (0xC5D1, 27, GC_LVT),
        (0xC5EC, 1, GC_LV),
        (0xC5ED, 27, GC_LVT),
        (0xC608, 1, GC_LV),
        (0xC609, 27, GC_LVT),
        (0xC624, 1, GC_LV),
        (0xC625, 27, GC_LVT),
        (0xC640, 1, GC_LV),
        (0xC641, 27, GC_LVT),
        (0xC65C, 1, GC_LV),
        (0xC65D, 27, GC_LVT),
        (0xC678, 1, GC_LV),
        (0xC679, 27, GC_LVT),
        (0xC694, 1, GC_LV),
        (0xC695, 27, GC_LVT),
        (0xC6B0, 1, GC_LV),
        (0xC6B1, 27, GC_LVT),
        (0xC6CC, 1, GC_LV),
        (0xC6CD, 27, GC_LVT),
        (0xC6E8, 1, GC_LV),
        (0xC6E9, 27, GC_LVT),
        (0xC704, 1, GC_LV),
        (0xC705, 27, GC_LVT),
        (0xC720, 1, GC_LV),
        (0xC721, 27, GC_LVT),
        (0xC73C, 1, GC_LV),
        (0xC73D, 27, GC_LVT),
        (0xC758, 1, GC_LV),
        (0xC759, 27, GC_LVT),
        (0xC774, 1, GC_LV),
        (0xC775, 27, GC_LVT),
        (0xC790, 1, GC_LV),
        (0xC791, 27, GC_LVT),
        (0xC7AC, 1, GC_LV),
        (0xC7AD, 27, GC_LVT),
        (0xC7C8, 1, GC_LV),
        (0xC7C9, 27, GC_LVT),
        (0xC7E4, 1, GC_LV),
        (0xC7E5, 27, GC_LVT),
        (0xC800, 1, GC_LV),
        (0xC801, 27, GC_LVT),
        (0xC81C, 1, GC_LV),
        (0xC81D, 27, GC_LVT),
        (0xC838, 1, GC_LV),
        (0xC839, 27, GC_LVT),
        (0xC854, 1, GC_LV),
        (0xC855, 27, GC_LVT),
        (0xC870, 1, GC_LV),
        (0xC871, 27, GC_LVT),
        (0xC88C, 1, GC_LV),
        (0xC88D, 27, GC_LVT),
        (0xC8A8, 1, GC_LV),
        (0xC8A9, 27, GC_LVT),
        (0xC8C4, 1, GC_LV),
        (0xC8C5, 27, GC_LVT),
        (0xC8E0, 1, GC_LV),
        (0xC8E1, 27, GC_LVT),
        (0xC8FC, 1, GC_LV),
        (0xC8FD, 27, GC_LVT),
        (0xC918, 1, GC_LV),
        (0xC919, 27, GC_LVT),
        (0xC934, 1, GC_LV),
        (0xC935, 27, GC_LVT),
        (0xC950, 1, GC_LV),
        (0xC951, 27, GC_LVT),
        (0xC96C, 1, GC_LV),
        (0xC96D, 27, GC_LVT),
        (0xC988, 1, GC_LV),
        (0xC989, 27, GC_LVT),
        (0xC9A4, 1, GC_LV),
        (0xC9A5, 27, GC_LVT),
        (0xC9C0, 1, GC_LV),
        (0xC9C1, 27, GC_LVT),
        (0xC9DC, 1, GC_LV),
        (0xC9DD, 27, GC_LVT),
        (0xC9F8, 1, GC_LV),
        (0xC9F9, 27, GC_LVT),
        (0xCA14, 1, GC_LV),
        (0xCA15, 27, GC_LVT),
        (0xCA30, 1, GC_LV),
        (0xCA31, 27, GC_LVT),
        (0xCA4C, 1, GC_LV),
        (0xCA4D, 27, GC_LVT),
        (0xCA68, 1, GC_LV),
        (0xCA69, 27, GC_LVT),
        (0xCA84, 1, GC_LV),
        (0xCA85, 27, GC_LVT),
        (0xCAA0, 1, GC_LV),
        (0xCAA1, 27, GC_LVT),
        (0xCABC, 1, GC_LV),
        (0xCABD, 27, GC_LVT),
        (0xCAD8, 1, GC_LV),
        (0xCAD9, 27, GC_LVT),
        (0xCAF4, 1, GC_LV),
        (0xCAF5, 27, GC_LVT),
        (0xCB10, 1, GC_LV),
        (0xCB11, 27, GC_LVT),
        (0xCB2C, 1, GC_LV),
        (0xCB2D, 27, GC_LVT),
        (0xCB48, 1, GC_LV),
        (0xCB49, 27, GC_LVT),
        (0xCB64, 1, GC_LV),
        (0xCB65, 27, GC_LVT),
        (0xCB80, 1, GC_LV),
        (0xCB81, 27, GC_LVT),
        (0xCB9C, 1, GC_LV),
        (0xCB9D, 27, GC_LVT),
        (0xCBB8, 1, GC_LV),
        (0xCBB9, 27, GC_LVT),
        (0xCBD4, 1, GC_LV),
        (0xCBD5, 27, GC_LVT),
        (0xCBF0, 1, GC_LV),
        (0xCBF1, 27, GC_LVT),
        (0xCC0C, 1, GC_LV),
        (0xCC0D, 27, GC_LVT),
        (0xCC28, 1, GC_LV),
        (0xCC29, 27, GC_LVT),
        (0xCC44, 1, GC_LV),
        (0xCC45, 27, GC_LVT),
        (0xCC60, 1, GC_LV),
        (0xCC61, 27, GC_LVT),
        (0xCC7C, 1, GC_LV),
        (0xCC7D, 27, GC_LVT),
        (0xCC98, 1, GC_LV),
        (0xCC99, 27, GC_LVT),
        (0xCCB4, 1, GC_LV),
        (0xCCB5, 27, GC_LVT),
        (0xCCD0, 1, GC_LV),
        (0xCCD1, 27, GC_LVT),
        (0xCCEC, 1, GC_LV),
        (0xCCED, 27, GC_LVT),
        (0xCD08, 1, GC_LV),
        (0xCD09, 27, GC_LVT),
        (0xCD24, 1, GC_LV),
        (0xCD25, 27, GC_LVT),
        (0xCD40, 1, GC_LV),
        (0xCD41, 27, GC_LVT),
        (0xCD5C, 1, GC_LV),
        (0xCD5D, 27, GC_LVT),
        (0xCD78, 1, GC_LV),
        (0xCD79, 27, GC_LVT),
        (0xCD94, 1, GC_LV),
        (0xCD95, 27, GC_LVT),
        (0xCDB0, 1, GC_LV),
        (0xCDB1, 27, GC_LVT),
        (0xCDCC, 1, GC_LV),
        (0xCDCD, 27, GC_LVT),
        (0xCDE8, 1, GC_LV),
        (0xCDE9, 27, GC_LVT),
        (0xCE04, 1, GC_LV),
        (0xCE05, 27, GC_LVT),
        (0xCE20, 1, GC_LV),
        (0xCE21, 27, GC_LVT),
        (0xCE3C, 1, GC_LV),
        (0xCE3D, 27, GC_LVT),
        (0xCE58, 1, GC_LV),
        (0xCE59, 27, GC_LVT),
        (0xCE74, 1, GC_LV),
        (0xCE75, 27, GC_LVT),
        (0xCE90, 1, GC_LV),
        (0xCE91, 27, GC_LVT),
        (0xCEAC, 1, GC_LV),
        (0xCEAD, 27, GC_LVT),
        (0xCEC8, 1, GC_LV),
        (0xCEC9, 27, GC_LVT),
        (0xCEE4, 1, GC_LV),
        (0xCEE5, 27, GC_LVT),
        (0xCF00, 1, GC_LV),
        (0xCF01, 27, GC_LVT),
        (0xCF1C, 1, GC_LV),
        (0xCF1D, 27, GC_LVT),
        (0xCF38, 1, GC_LV),
        (0xCF39, 27, GC_LVT),
        (0xCF54, 1, GC_LV),
        (0xCF55, 27, GC_LVT),
        (0xCF70, 1, GC_LV),
        (0xCF71, 27, GC_LVT),
        (0xCF8C, 1, GC_LV),
        (0xCF8D, 27, GC_LVT),
        (0xCFA8, 1, GC_LV),
        (0xCFA9, 27, GC_LVT),
        (0xCFC4, 1, GC_LV),
        (0xCFC5, 27, GC_LVT),
        (0xCFE0, 1, GC_LV),
        (0xCFE1, 27, GC_LVT),
        (0xCFFC, 1, GC_LV),
        (0xCFFD, 27, GC_LVT),
        (0xD018, 1, GC_LV),
        (0xD019, 27, GC_LVT),
        (0xD034, 1, GC_LV),
        (0xD035, 27, GC_LVT),
        (0xD050, 1, GC_LV),
        (0xD051, 27, GC_LVT),
        (0xD06C, 1, GC_LV),
        (0xD06D, 27, GC_LVT),
        (0xD088, 1, GC_LV),
        (0xD089, 27, GC_LVT),
        (0xD0A4, 1, GC_LV),
        (0xD0A5, 27, GC_LVT),
        (0xD0C0, 1, GC_LV),
        (0xD0C1, 27, GC_LVT),
        (0xD0DC, 1, GC_LV),
        (0xD0DD, 27, GC_LVT),
        (0xD0F8, 1, GC_LV),
        (0xD0F9, 27, GC_LVT),
        (0xD114, 1, GC_LV),
        (0xD115, 27, GC_LVT),
        (0xD130, 1, GC_LV),
        (0xD131, 27, GC_LVT),
        (0xD14C, 1, GC_LV),
        (0xD14D, 27, GC_LVT),
        (0xD168, 1, GC_LV),
        (0xD169, 27, GC_LVT),
        (0xD184, 1, GC_LV),
        (0xD185, 27, GC_LVT),
        (0xD1A0, 1, GC_LV),
        (0xD1A1, 27, GC_LVT),
        (0xD1BC, 1, GC_LV),
        (0xD1BD, 27, GC_LVT),
        (0xD1D8, 1, GC_LV),
        (0xD1D9, 27, GC_LVT),
        (0xD1F4, 1, GC_LV),
        (0xD1F5, 27, GC_LVT),
        (0xD210, 1, GC_LV),
        (0xD211, 27, GC_LVT),
        (0xD22C, 1, GC_LV),
        (0xD22D, 27, GC_LVT),
        (0xD248, 1, GC_LV),
        (0xD249, 27, GC_LVT),
        (0xD264, 1, GC_LV),
        (0xD265, 27, GC_LVT),
        (0xD280, 1, GC_LV),
        (0xD281, 27, GC_LVT),
        (0xD29C, 1, GC_LV),
        (0xD29D, 27, GC_LVT),
        (0xD2B8, 1, GC_LV),
        (0xD2B9, 27, GC_LVT),
        (0xD2D4, 1, GC_LV),
        (0xD2D5, 27, GC_LVT),
        (0xD2F0, 1, GC_LV),
        (0xD2F1, 27, GC_LVT),
        (0xD30C, 1, GC_LV),
        (0xD30D, 27, GC_LVT),
        (0xD328, 1, GC_LV),
        (0xD329, 27, GC_LVT),
        (0xD344, 1, GC_LV),
        (0xD345, 27, GC_LVT),
        (0xD360, 1, GC_LV),
        (0xD361, 27, GC_LVT),
        (0xD37C, 1, GC_LV),
        (0xD37D, 27, GC_LVT),
        (0xD398, 1, GC_LV),
        (0xD399, 27, GC_LVT),
        (0xD3B4, 1, GC_LV),
        (0xD3B5, 27, GC_LVT),
        (0xD3D0, 1, GC_LV),
        (0xD3D1, 27, GC_LVT),
        (0xD3EC, 1, GC_LV),
        (0xD3ED, 27, GC_LVT),
        (0xD408, 1, GC_LV),
        (0xD409, 27, GC_LVT),
        (0xD424, 1, GC_LV),
        (0xD425, 27, GC_LVT),
        (0xD440, 1, GC_LV),
        (0xD441, 27, GC_LVT),
        (0xD45C, 1, GC_LV),
        (0xD45D, 27, GC_LVT),
        (0xD478, 1, GC_LV),
        (0xD479, 27, GC_LVT),
        (0xD494, 1, GC_LV),
        (0xD495, 27, GC_LVT),
        (0xD4B0, 1, GC_LV),
        (0xD4B1, 27, GC_LVT),
        (0xD4CC, 1, GC_LV),
        (0xD4CD, 27, GC_LVT),
        (0xD4E8, 1, GC_LV),
        (0xD4E9, 27, GC_LVT),
        (0xD504, 1, GC_LV),
        (0xD505, 27, GC_LVT),
        (0xD520, 1, GC_LV),
        (0xD521, 27, GC_LVT),
        (0xD53C, 1, GC_LV),
        (0xD53D, 27, GC_LVT),
        (0xD558, 1, GC_LV),
        (0xD559, 27, GC_LVT),
        (0xD574, 1, GC_LV),
        (0xD575, 27, GC_LVT),
        (0xD590, 1, GC_LV),
        (0xD591, 27, GC_LVT),
        (0xD5AC, 1, GC_LV),
        (0xD5AD, 27, GC_LVT),
        (0xD5C8, 1, GC_LV),
        (0xD5C9, 27, GC_LVT),
        (0xD5E4, 1, GC_LV),
        (0xD5E5, 27, GC_LVT),
        (0xD600, 1, GC_LV),
        (0xD601, 27, GC_LVT),
        (0xD61C, 1, GC_LV),
        (0xD61D, 27, GC_LVT),
        (0xD638, 1, GC_LV),
        (0xD639, 27, GC_LVT),
        (0xD654, 1, GC_LV),
        (0xD655, 27, GC_LVT),
        (0xD670, 1, GC_LV),
        (0xD671, 27, GC_LVT),
        (0xD68C, 1, GC_LV),
        (0xD68D, 27, GC_LVT),
        (0xD6A8, 1, GC_LV),
        (0xD6A9, 27, GC_LVT),
        (0xD6C4, 1, GC_LV),
        (0xD6C5, 27, GC_LVT),
        (0xD6E0, 1, GC_LV),
        (0xD6E1, 27, GC_LVT),
        (0xD6FC, 1, GC_LV),
        (0xD6FD, 27, GC_LVT),
        (0xD718, 1, GC_LV),
        (0xD719, 27, GC_LVT),
        (0xD734, 1, GC_LV),
        (0xD735, 27, GC_LVT),
        (0xD750, 1, GC_LV),
        (0xD751, 27, GC_LVT),
        (0xD76C, 1, GC_LV),
        (0xD76D, 27, GC_LVT),
        (0xD788, 1, GC_LV),
        (0xD789, 27, GC_LVT),
        (0xD7B0, 23, GC_V),
        (0xD7CB, 49, GC_T),
        (0xFB1E, 1, GC_Extend),
        (0xFE00, 16, GC_Extend),
        (0xFE20, 16, GC_Extend),
        (0xFEFF, 1, GC_Control),
        (0xFF9E, 2, GC_Extend),
        (0xFFF0, 12, GC_Control),
        (0x101FD, 1, GC_Extend),
        (0x102E0, 1, GC_Extend),
        (0x10376, 5, GC_Extend),
        (0x10A01, 3, GC_Extend),
        (0x10A05, 2, GC_Extend),
        (0x10A0C, 4, GC_Extend),
        (0x10A38, 3, GC_Extend),
        (0x10A3F, 1, GC_Extend),
        (0x10AE5, 2, GC_Extend),
        (0x10D24, 4, GC_Extend),
        (0x10EAB, 2, GC_Extend),
        (0x10F46, 11, GC_Extend),
        (0x10F82, 4, GC_Extend),
        (0x11000, 1, GC_SpacingMark),
        (0x11001, 1, GC_Extend),
        (0x11002, 1, GC_SpacingMark),
        (0x11038, 15, GC_Extend),
        (0x11070, 1, GC_Extend),
        (0x11073, 2, GC_Extend),
        (0x1107F, 3, GC_Extend),
        (0x11082, 1, GC_SpacingMark),
        (0x110B0, 3, GC_SpacingMark),
        (0x110B3, 4, GC_Extend),
        (0x110B7, 2, GC_SpacingMark),
        (0x110B9, 2, GC_Extend),
        (0x110BD, 1, GC_Prepend),
        (0x110C2, 1, GC_Extend),
        (0x110CD, 1, GC_Prepend),
        (0x11100, 3, GC_Extend),
        (0x11127, 5, GC_Extend),
        (0x1112C, 1, GC_SpacingMark),
        (0x1112D, 8, GC_Extend),
        (0x11145, 2, GC_SpacingMark),
        (0x11173, 1, GC_Extend),
        (0x11180, 2, GC_Extend),
        (0x11182, 1, GC_SpacingMark),
        (0x111B3, 3, GC_SpacingMark),
        (0x111B6, 9, GC_Extend),
        (0x111BF, 2, GC_SpacingMark),
        (0x111C2, 2, GC_Prepend),
        (0x111C9, 4, GC_Extend),
        (0x111CE, 1, GC_SpacingMark),
        (0x111CF, 1, GC_Extend),
        (0x1122C, 3, GC_SpacingMark),
        (0x1122F, 3, GC_Extend),
        (0x11232, 2, GC_SpacingMark),
        (0x11234, 1, GC_Extend),
        (0x11235, 1, GC_SpacingMark),
        (0x11236, 2, GC_Extend),
        (0x1123E, 1, GC_Extend),
        (0x112DF, 1, GC_Extend),
        (0x112E0, 3, GC_SpacingMark),
        (0x112E3, 8, GC_Extend),
        (0x11300, 2, GC_Extend),
        (0x11302, 2, GC_SpacingMark),
        (0x1133B, 2, GC_Extend),
        (0x1133E, 1, GC_Extend),
        (0x1133F, 1, GC_SpacingMark),
        (0x11340, 1, GC_Extend),
        (0x11341, 4, GC_SpacingMark),
        (0x11347, 2, GC_SpacingMark),
        (0x1134B, 3, GC_SpacingMark),
        (0x11357, 1, GC_Extend),
        (0x11362, 2, GC_SpacingMark),
        (0x11366, 7, GC_Extend),
        (0x11370, 5, GC_Extend),
        (0x11435, 3, GC_SpacingMark),
        (0x11438, 8, GC_Extend),
        (0x11440, 2, GC_SpacingMark),
        (0x11442, 3, GC_Extend),
        (0x11445, 1, GC_SpacingMark),
        (0x11446, 1, GC_Extend),
        (0x1145E, 1, GC_Extend),
        (0x114B0, 1, GC_Extend),
        (0x114B1, 2, GC_SpacingMark),
        (0x114B3, 6, GC_Extend),
        (0x114B9, 1, GC_SpacingMark),
        (0x114BA, 1, GC_Extend),
        (0x114BB, 2, GC_SpacingMark),
        (0x114BD, 1, GC_Extend),
        (0x114BE, 1, GC_SpacingMark),
        (0x114BF, 2, GC_Extend),
        (0x114C1, 1, GC_SpacingMark),
        (0x114C2, 2, GC_Extend),
        (0x115AF, 1, GC_Extend),
        (0x115B0, 2, GC_SpacingMark),
        (0x115B2, 4, GC_Extend),
        (0x115B8, 4, GC_SpacingMark),
        (0x115BC, 2, GC_Extend),
        (0x115BE, 1, GC_SpacingMark),
        (0x115BF, 2, GC_Extend),
        (0x115DC, 2, GC_Extend),
        (0x11630, 3, GC_SpacingMark),
        (0x11633, 8, GC_Extend),
        (0x1163B, 2, GC_SpacingMark),
        (0x1163D, 1, GC_Extend),
        (0x1163E, 1, GC_SpacingMark),
        (0x1163F, 2, GC_Extend),
        (0x116AB, 1, GC_Extend),
        (0x116AC, 1, GC_SpacingMark),
        (0x116AD, 1, GC_Extend),
        (0x116AE, 2, GC_SpacingMark),
        (0x116B0, 6, GC_Extend),
        (0x116B6, 1, GC_SpacingMark),
        (0x116B7, 1, GC_Extend),
        (0x1171D, 3, GC_Extend),
        (0x11722, 4, GC_Extend),
        (0x11726, 1, GC_SpacingMark),
        (0x11727, 5, GC_Extend),
        (0x1182C, 3, GC_SpacingMark),
        (0x1182F, 9, GC_Extend),
        (0x11838, 1, GC_SpacingMark),
        (0x11839, 2, GC_Extend),
        (0x11930, 1, GC_Extend),
        (0x11931, 5, GC_SpacingMark),
        (0x11937, 2, GC_SpacingMark),
        (0x1193B, 2, GC_Extend),
        (0x1193D, 1, GC_SpacingMark),
        (0x1193E, 1, GC_Extend),
        (0x1193F, 1, GC_Prepend),
        (0x11940, 1, GC_SpacingMark),
        (0x11941, 1, GC_Prepend),
        (0x11942, 1, GC_SpacingMark),
        (0x11943, 1, GC_Extend),
        (0x119D1, 3, GC_SpacingMark),
        (0x119D4, 4, GC_Extend),
        (0x119DA, 2, GC_Extend),
        (0x119DC, 4, GC_SpacingMark),
        (0x119E0, 1, GC_Extend),
        (0x119E4, 1, GC_SpacingMark),
        (0x11A01, 10, GC_Extend),
        (0x11A33, 6, GC_Extend),
        (0x11A39, 1, GC_SpacingMark),
        (0x11A3A, 1, GC_Prepend),
        (0x11A3B, 4, GC_Extend),
        (0x11A47, 1, GC_Extend),
        (0x11A51, 6, GC_Extend),
        (0x11A57, 2, GC_SpacingMark),
        (0x11A59, 3, GC_Extend),
        (0x11A84, 6, GC_Prepend),
        (0x11A8A, 13, GC_Extend),
        (0x11A97, 1, GC_SpacingMark),
        (0x11A98, 2, GC_Extend),
        (0x11C2F, 1, GC_SpacingMark),
        (0x11C30, 7, GC_Extend),
        (0x11C38, 6, GC_Extend),
        (0x11C3E, 1, GC_SpacingMark),
        (0x11C3F, 1, GC_Extend),
        (0x11C92, 22, GC_Extend),
        (0x11CA9, 1, GC_SpacingMark),
        (0x11CAA, 7, GC_Extend),
        (0x11CB1, 1, GC_SpacingMark),
        (0x11CB2, 2, GC_Extend),
        (0x11CB4, 1, GC_SpacingMark),
        (0x11CB5, 2, GC_Extend),
        (0x11D31, 6, GC_Extend),
        (0x11D3A, 1, GC_Extend),
        (0x11D3C, 2, GC_Extend),
        (0x11D3F, 7, GC_Extend),
        (0x11D46, 1, GC_Prepend),
        (0x11D47, 1, GC_Extend),
        (0x11D8A, 5, GC_SpacingMark),
        (0x11D90, 2, GC_Extend),
        (0x11D93, 2, GC_SpacingMark),
        (0x11D95, 1, GC_Extend),
        (0x11D96, 1, GC_SpacingMark),
        (0x11D97, 1, GC_Extend),
        (0x11EF3, 2, GC_Extend),
        (0x11EF5, 2, GC_SpacingMark),
        (0x13430, 9, GC_Control),
        (0x16AF0, 5, GC_Extend),
        (0x16B30, 7, GC_Extend),
        (0x16F4F, 1, GC_Extend),
        (0x16F51, 55, GC_SpacingMark),
        (0x16F8F, 4, GC_Extend),
        (0x16FE4, 1, GC_Extend),
        (0x16FF0, 2, GC_SpacingMark),
        (0x1BC9D, 2, GC_Extend),
        (0x1BCA0, 4, GC_Control),
        (0x1CF00, 46, GC_Extend),
        (0x1CF30, 23, GC_Extend),
        (0x1D165, 1, GC_Extend),
        (0x1D166, 1, GC_SpacingMark),
        (0x1D167, 3, GC_Extend),
        (0x1D16D, 1, GC_SpacingMark),
        (0x1D16E, 5, GC_Extend),
        (0x1D173, 8, GC_Control),
        (0x1D17B, 8, GC_Extend),
        (0x1D185, 7, GC_Extend),
        (0x1D1AA, 4, GC_Extend),
        (0x1D242, 3, GC_Extend),
        (0x1DA00, 55, GC_Extend),
        (0x1DA3B, 50, GC_Extend),
        (0x1DA75, 1, GC_Extend),
        (0x1DA84, 1, GC_Extend),
        (0x1DA9B, 5, GC_Extend),
        (0x1DAA1, 15, GC_Extend),
        (0x1E000, 7, GC_Extend),
        (0x1E008, 17, GC_Extend),
        (0x1E01B, 7, GC_Extend),
        (0x1E023, 2, GC_Extend),
        (0x1E026, 5, GC_Extend),
        (0x1E130, 7, GC_Extend),
        (0x1E2AE, 1, GC_Extend),
        (0x1E2EC, 4, GC_Extend),
        (0x1E8D0, 7, GC_Extend),
        (0x1E944, 7, GC_Extend),
        (0x1F000, 256, GC_Extended_Pictographic),
        (0x1F10D, 3, GC_Extended_Pictographic),
        (0x1F12F, 1, GC_Extended_Pictographic),
        (0x1F16C, 6, GC_Extended_Pictographic),
        (0x1F17E, 2, GC_Extended_Pictographic),
        (0x1F18E, 1, GC_Extended_Pictographic),
        (0x1F191, 10, GC_Extended_Pictographic),
        (0x1F1AD, 57, GC_Extended_Pictographic),
        (0x1F1E6, 26, GC_Regional_Indicator),
        (0x1F201, 15, GC_Extended_Pictographic),
        (0x1F21A, 1, GC_Extended_Pictographic),
        (0x1F22F, 1, GC_Extended_Pictographic),
        (0x1F232, 9, GC_Extended_Pictographic),
        (0x1F23C, 4, GC_Extended_Pictographic),
        (0x1F249, 434, GC_Extended_Pictographic),
        (0x1F3FB, 5, GC_Extend),
        (0x1F400, 318, GC_Extended_Pictographic),
        (0x1F546, 266, GC_Extended_Pictographic),
        (0x1F680, 128, GC_Extended_Pictographic),
        (0x1F774, 12, GC_Extended_Pictographic),
        (0x1F7D5, 43, GC_Extended_Pictographic),
        (0x1F80C, 4, GC_Extended_Pictographic),
        (0x1F848, 8, GC_Extended_Pictographic),
        (0x1F85A, 6, GC_Extended_Pictographic),
        (0x1F888, 8, GC_Extended_Pictographic),
        (0x1F8AE, 82, GC_Extended_Pictographic),
        (0x1F90C, 47, GC_Extended_Pictographic),
        (0x1F93C, 10, GC_Extended_Pictographic),
        (0x1F947, 441, GC_Extended_Pictographic),
        (0x1FC00, 1022, GC_Extended_Pictographic),
        (0xE0000, 32, GC_Control),
        (0xE0020, 96, GC_Extend),
        (0xE0080, 128, GC_Control),
        (0xE0100, 240, GC_Extend),
        (0xE01F0, 3600, GC_Control),
    ];
}

pub mod word {
    pub use self::WordCat::*;

    /// `Word_Break` values, tailored with `Hiragana`, `KanaExtension`, `Extended_Pictographic` and `ALetter_ExtPict` (letters that are also pictographic).
    #[allow(non_camel_case_types)]
    #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub enum WordCat {
        WC_Other,
        WC_CR,
        WC_LF,
        WC_Newline,
        WC_Extend,
        WC_ZWJ,
        WC_Regional_Indicator,
        WC_Format,
        WC_Katakana,
        WC_Hiragana,
        WC_KanaExtension,
        WC_Hebrew_Letter,
        WC_ALetter,
        WC_ALetter_ExtPict,
        WC_Single_Quote,
        WC_Double_Quote,
        WC_MidNumLet,
        WC_MidLetter,
        WC_MidNum,
        WC_Numeric,
        WC_ExtendNumLet,
        WC_WSegSpace,
        WC_Extended_Pictographic,
        /// End-of-text sentinel; never stored in the table.
        WC_EOT,
    }

    pub(crate) const WORD_CAT_TABLE: &[(u32, u32, WordCat)] = &[
        (0x000A, 1, WC_LF),
        (0x000B, 2, WC_Newline),
        (0x000D, 1, WC_CR),
        (0x0020, 1, WC_WSegSpace),
        (0x0022, 1, WC_Double_Quote),
        (0x0027, 1, WC_Single_Quote),
        (0x002C, 1, WC_MidNum),
        (0x002E, 1, WC_MidNumLet),
        (0x0030, 10, WC_Numeric),
        (0x003A, 1, WC_MidLetter),
        (0x003B, 1, WC_MidNum),
        (0x0041, 26, WC_ALetter),
        (0x005F, 1, WC_ExtendNumLet),
        (0x0061, 26, WC_ALetter),
        (0x0085, 1, WC_Newline),
        (0x00A9, 1, WC_Extended_Pictographic),
        (0x00AA, 1, WC_ALetter),
        (0x00AD, 1, WC_Format),
        (0x00AE, 1, WC_Extended_Pictographic),
        (0x00B5, 1, WC_ALetter),
        (0x00B7, 1, WC_MidLetter),
        (0x00BA, 1, WC_ALetter),
        (0x00C0, 23, WC_ALetter),
        (0x00D8, 31, WC_ALetter),
        (0x00F8, 480, WC_ALetter),
        (0x02DE, 34, WC_ALetter),
        (0x0300, 112, WC_Extend),
        (0x0370, 5, WC_ALetter),
        (0x0376, 2, WC_ALetter),
        (0x037A, 4, WC_ALetter),
        (0x037E, 1, WC_MidNum),
        (0x037F, 1, WC_ALetter),
        (0x0386, 1, WC_ALetter),
        (0x0387, 1, WC_MidLetter),
        (0x0388, 3, WC_ALetter),
        (0x038C, 1, WC_ALetter),
        (0x038E, 20, WC_ALetter),
        (0x03A3, 83, WC_ALetter),
        (0x03F7, 139, WC_ALetter),
        (0x0483, 7, WC_Extend),
        (0x048A, 166, WC_ALetter),
        (0x0531, 38, WC_ALetter),
        (0x0559, 4, WC_ALetter),
        (0x055E, 1, WC_ALetter),
        (0x055F, 1, WC_MidLetter),
        (0x0560, 41, WC_ALetter),
        (0x0589, 1, WC_MidNum),
        (0x058A, 1, WC_ALetter),
        (0x0591, 45, WC_Extend),
        (0x05BF, 1, WC_Extend),
        (0x05C1, 2, WC_Extend),
        (0x05C4, 2, WC_Extend),
        (0x05C7, 1, WC_Extend),
        (0x05D0, 27, WC_Hebrew_Letter),
        (0x05EF, 4, WC_Hebrew_Letter),
        (0x05F3, 1, WC_ALetter),
        (0x05F4, 1, WC_MidLetter),
        (0x0600, 6, WC_Format),
        (0x060C, 2, WC_MidNum),
        (0x0610, 11, WC_Extend),
        (0x061C, 1, WC_Format),
        (0x0620, 43, WC_ALetter),
        (0x064B, 21, WC_Extend),
        (0x0660, 10, WC_Numeric),
        (0x066B, 1, WC_Numeric),
        (0x066C, 1, WC_MidNum),
        (0x066E, 2, WC_ALetter),
        (0x0670, 1, WC_Extend),
        (0x0671, 99, WC_ALetter),
        (0x06D5, 1, WC_ALetter),
        (0x06D6, 7, WC_Extend),
        (0x06DD, 1, WC_Format),
        (0x06DF, 6, WC_Extend),
        (0x06E5, 2, WC_ALetter),
        (0x06E7, 2, WC_Extend),
        (0x06EA, 4, WC_Extend),
        (0x06EE, 2, WC_ALetter),
        (0x06F0, 10, WC_Numeric),
        (0x06FA, 3, WC_ALetter),
        (0x06FF, 1, WC_ALetter),
        (0x070F, 1, WC_Format),
        (0x0710, 1, WC_ALetter),
        (0x0711, 1, WC_Extend),
        (0x0712, 30, WC_ALetter),
        (0x0730, 27, WC_Extend),
        (0x074D, 89, WC_ALetter),
        (0x07A6, 11, WC_Extend),
        (0x07B1, 1, WC_ALetter),
        (0x07C0, 10, WC_Numeric),
        (0x07CA, 33, WC_ALetter),
        (0x07EB, 9, WC_Extend),
        (0x07F4, 2, WC_ALetter),
        (0x07F8, 1, WC_MidNum),
        (0x07FA, 1, WC_ALetter),
        (0x07FD, 1, WC_Extend),
        (0x0800, 22, WC_ALetter),
        (0x0816, 4, WC_Extend),
        (0x081A, 1, WC_ALetter),
        (0x081B, 9, WC_Extend),
        (0x0824, 1, WC_ALetter),
        (0x0825, 3, WC_Extend),
        (0x0828, 1, WC_ALetter),
        (0x0829, 5, WC_Extend),
        (0x0840, 25, WC_ALetter),
        (0x0859, 3, WC_Extend),
        (0x0860, 11, WC_ALetter),
        (0x0870, 24, WC_ALetter),
        (0x0889, 6, WC_ALetter),
        (0x0890, 2, WC_Format),
        (0x0898, 8, WC_Extend),
        (0x08A0, 42, WC_ALetter),
        (0x08CA, 24, WC_Extend),
        (0x08E2, 1, WC_Format),
        (0x08E3, 33, WC_Extend),
        (0x0904, 54, WC_ALetter),
        (0x093A, 3, WC_Extend),
        (0x093D, 1, WC_ALetter),
        (0x093E, 18, WC_Extend),
        (0x0950, 1, WC_ALetter),
        (0x0951, 7, WC_Extend),
        (0x0958, 10, WC_ALetter),
        (0x0962, 2, WC_Extend),
        (0x0966, 10, WC_Numeric),
        (0x0971, 16, WC_ALetter),
        (0x0981, 3, WC_Extend),
        (0x0985, 8, WC_ALetter),
        (0x098F, 2, WC_ALetter),
        (0x0993, 22, WC_ALetter),
        (0x09AA, 7, WC_ALetter),
        (0x09B2, 1, WC_ALetter),
        (0x09B6, 4, WC_ALetter),
        (0x09BC, 1, WC_Extend),
        (0x09BD, 1, WC_ALetter),
        (0x09BE, 7, WC_Extend),
        (0x09C7, 2, WC_Extend),
        (0x09CB, 3, WC_Extend),
        (0x09CE, 1, WC_ALetter),
        (0x09D7, 1, WC_Extend),
        (0x09DC, 2, WC_ALetter),
        (0x09DF, 3, WC_ALetter),
        (0x09E2, 2, WC_Extend),
        (0x09E6, 10, WC_Numeric),
        (0x09F0, 2, WC_ALetter),
        (0x09FC, 1, WC_ALetter),
        (0x09FE, 1, WC_Extend),
        (0x0A01, 3, WC_Extend),
        (0x0A05, 6, WC_ALetter),
        (0x0A0F, 2, WC_ALetter),
        (0x0A13, 22, WC_ALetter),
        (0x0A2A, 7, WC_ALetter),
        (0x0A32, 2, WC_ALetter),
        (0x0A35, 2, WC_ALetter),
        (0x0A38, 2, WC_ALetter),
        (0x0A3C, 1, WC_Extend),
        (0x0A3E, 5, WC_Extend),
        (0x0A47, 2, WC_Extend),
        (0x0A4B, 3, WC_Extend),
        (0x0A51, 1, WC_Extend),
        (0x0A59, 4, WC_ALetter),
        (0x0A5E, 1, WC_ALetter),
        (0x0A66, 10, WC_Numeric),
        (0x0A70, 2, WC_Extend),
        (0x0A72, 3, WC_ALetter),
        (0x0A75, 1, WC_Extend),
        (0x0A81, 3, WC_Extend),
        (0x0A85, 9, WC_ALetter),
        (0x0A8F, 3, WC_ALetter),
        (0x0A93, 22, WC_ALetter),
        (0x0AAA, 7, WC_ALetter),
        (0x0AB2, 2, WC_ALetter),
        (0x0AB5, 5, WC_ALetter),
        (0x0ABC, 1, WC_Extend),
        (0x0ABD, 1, WC_ALetter),
        (0x0ABE, 8, WC_Extend),
        (0x0AC7, 3, WC_Extend),
        (0x0ACB, 3, WC_Extend),
        (0x0AD0, 1, WC_ALetter),
        (0x0AE0, 2, WC_ALetter),
        (0x0AE2, 2, WC_Extend),
        (0x0AE6, 10, WC_Numeric),
        (0x0AF9, 1, WC_ALetter),
        (0x0AFA, 6, WC_Extend),
        (0x0B01, 3, WC_Extend),
        (0x0B05, 8, WC_ALetter),
        (0x0B0F, 2, WC_ALetter),
        (0x0B13, 22, WC_ALetter),
        (0x0B2A, 7, WC_ALetter),
        (0x0B32, 2, WC_ALetter),
        (0x0B35, 5, WC_ALetter),
        (0x0B3C, 1, WC_Extend),
        (0x0B3D, 1, WC_ALetter),
        (0x0B3E, 7, WC_Extend),
        (0x0B47, 2, WC_Extend),
        (0x0B4B, 3, WC_Extend),
        (0x0B55, 3, WC_Extend),
        (0x0B5C, 2, WC_ALetter),
        (0x0B5F, 3, WC_ALetter),
        (0x0B62, 2, WC_Extend),
        (0x0B66, 10, WC_Numeric),
        (0x0B71, 1, WC_ALetter),
        (0x0B82, 1, WC_Extend),
        (0x0B83, 1, WC_ALetter),
        (0x0B85, 6, WC_ALetter),
        (0x0B8E, 3, WC_ALetter),
        (0x0B92, 4, WC_ALetter),
        (0x0B99, 2, WC_ALetter),
        (0x0B9C, 1, WC_ALetter),
        (0x0B9E, 2, WC_ALetter),
        (0x0BA3, 2, WC_ALetter),
        (0x0BA8, 3, WC_ALetter),
        (0x0BAE, 12, WC_ALetter),
        (0x0BBE, 5, WC_Extend),
        (0x0BC6, 3, WC_Extend),
        (0x0BCA, 4, WC_Extend),
        (0x0BD0, 1, WC_ALetter),
        (0x0BD7, 1, WC_Extend),
        (0x0BE6, 10, WC_Numeric),
        (0x0C00, 5, WC_Extend),
        (0x0C05, 8, WC_ALetter),
        (0x0C0E, 3, WC_ALetter),
        (0x0C12, 23, WC_ALetter),
        (0x0C2A, 16, WC_ALetter),
        (0x0C3C, 1, WC_Extend),
        (0x0C3D, 1, WC_ALetter),
        (0x0C3E, 7, WC_Extend),
        (0x0C46, 3, WC_Extend),
        (0x0C4A, 4, WC_Extend),
        (0x0C55, 2, WC_Extend),
        (0x0C58, 3, WC_ALetter),
        (0x0C5D, 1, WC_ALetter),
        (0x0C60, 2, WC_ALetter),
        (0x0C62, 2, WC_Extend),
        (0x0C66, 10, WC_Numeric),
        (0x0C80, 1, WC_ALetter),
        (0x0C81, 3, WC_Extend),
        (0x0C85, 8, WC_ALetter),
        (0x0C8E, 3, WC_ALetter),
        (0x0C92, 23, WC_ALetter),
        (0x0CAA, 10, WC_ALetter),
        (0x0CB5, 5, WC_ALetter),
        (0x0CBC, 1, WC_Extend),
        (0x0CBD, 1, WC_ALetter),
        (0x0CBE, 7, WC_Extend),
        (0x0CC6, 3, WC_Extend),
        (0x0CCA, 4, WC_Extend),
        (0x0CD5, 2, WC_Extend),
        (0x0CDD, 2, WC_ALetter),
        (0x0CE0, 2, WC_ALetter),
        (0x0CE2, 2, WC_Extend),
        (0x0CE6, 10, WC_Numeric),
        (0x0CF1, 2, WC_ALetter),
        (0x0D00, 4, WC_Extend),
        (0x0D04, 9, WC_ALetter),
        (0x0D0E, 3, WC_ALetter),
        (0x0D12, 41, WC_ALetter),
        (0x0D3B, 2, WC_Extend),
        (0x0D3D, 1, WC_ALetter),
        (0x0D3E, 7, WC_Extend),
        (0x0D46, 3, WC_Extend),
        (0x0D4A, 4, WC_Extend),
        (0x0D4E, 1, WC_ALetter),
        (0x0D54, 3, WC_ALetter),
        (0x0D57, 1, WC_Extend),
        (0x0D5F, 3, WC_ALetter),
        (0x0D62, 2, WC_Extend),
        (0x0D66, 10, WC_Numeric),
        (0x0D7A, 6, WC_ALetter),
        (0x0D81, 3, WC_Extend),
        (0x0D85, 18, WC_ALetter),
        (0x0D9A, 24, WC_ALetter),
        (0x0DB3, 9, WC_ALetter),
        (0x0DBD, 1, WC_ALetter),
        (0x0DC0, 7, WC_ALetter),
        (0x0DCA, 1, WC_Extend),
        (0x0DCF, 6, WC_Extend),
        (0x0DD6, 1, WC_Extend),
        (0x0DD8, 8, WC_Extend),
        (0x0DE6, 10, WC_Numeric),
        (0x0DF2, 2, WC_Extend),
        (0x0E31, 1, WC_Extend),
        (0x0E34, 7, WC_Extend),
        (0x0E47, 8, WC_Extend),
        (0x0E50, 10, WC_Numeric),
        (0x0EB1, 1, WC_Extend),
        (0x0EB4, 9, WC_Extend),
        (0x0EC8, 6, WC_Extend),
        (0x0ED0, 10, WC_Numeric),
        (0x0F00, 1, WC_ALetter),
        (0x0F18, 2, WC_Extend),
        (0x0F20, 10, WC_Numeric),
        (0x0F35, 1, WC_Extend),
        (0x0F37, 1, WC_Extend),
        (0x0F39, 1, WC_Extend),
        (0x0F3E, 2, WC_Extend),
        (0x0F40, 8, WC_ALetter),
        (0x0F49, 36, WC_ALetter),
        (0x0F71, 20, WC_Extend),
        (0x0F86, 2, WC_Extend),
        (0x0F88, 5, WC_ALetter),
        (0x0F8D, 11, WC_Extend),
        (0x0F99, 36, WC_Extend),
        (0x0FC6, 1, WC_Extend),
        (0x102B, 20, WC_Extend),
        (0x1040, 10, WC_Numeric),
        (0x1056, 4, WC_Extend),
        (0x105E, 3, WC_Extend),
        (0x1062, 3, WC_Extend),
        (0x1067, 7, WC_Extend),
        (0x1071, 4, WC_Extend),
        (0x1082, 12, WC_Extend),
        (0x108F, 1, WC_Extend),
        (0x1090, 10, WC_Numeric),
        (0x109A, 4, WC_Extend),
        (0x10A0, 38, WC_ALetter),
        (0x10C7, 1, WC_ALetter),
        (0x10CD, 1, WC_ALetter),
        (0x10D0, 43, WC_ALetter),
        (0x10FC, 333, WC_ALetter),
        (0x124A, 4, WC_ALetter),
        (0x1250, 7, WC_ALetter),
        (0x1258, 1, WC_ALetter),
        (0x125A, 4, WC_ALetter),
        (0x1260, 41, WC_ALetter),
        (0x128A, 4, WC_ALetter),
        (0x1290, 33, WC_ALetter),
        (0x12B2, 4, WC_ALetter),
        (0x12B8, 7, WC_ALetter),
        (0x12C0, 1, WC_ALetter),
        (0x12C2, 4, WC_ALetter),
        (0x12C8, 15, WC_ALetter),
        (0x12D8, 57, WC_ALetter),
        (0x1312, 4, WC_ALetter),
        (0x1318, 67, WC_ALetter),
        (0x135D, 3, WC_Extend),
        (0x1380, 16, WC_ALetter),
        (0x13A0, 86, WC_ALetter),
        (0x13F8, 6, WC_ALetter),
        (0x1401, 620, WC_ALetter),
        (0x166F, 17, WC_ALetter),
        (0x1680, 1, WC_WSegSpace),
        (0x1681, 26, WC_ALetter),
        (0x16A0, 75, WC_ALetter),
        (0x16EE, 11, WC_ALetter),
        (0x1700, 18, WC_ALetter),
        (0x1712, 4, WC_Extend),
        (0x171F, 19, WC_ALetter),
        (0x1732, 3, WC_Extend),
        (0x1740, 18, WC_ALetter),
        (0x1752, 2, WC_Extend),
        (0x1760, 13, WC_ALetter),
        (0x176E, 3, WC_ALetter),
        (0x1772, 2, WC_Extend),
        (0x17B4, 32, WC_Extend),
        (0x17DD, 1, WC_Extend),
        (0x17E0, 10, WC_Numeric),
        (0x180B, 3, WC_Extend),
        (0x180E, 1, WC_Format),
        (0x180F, 1, WC_Extend),
        (0x1810, 10, WC_Numeric),
        (0x1820, 89, WC_ALetter),
        (0x1880, 5, WC_ALetter),
        (0x1885, 2, WC_Extend),
        (0x1887, 34, WC_ALetter),
        (0x18A9, 1, WC_Extend),
        (0x18AA, 1, WC_ALetter),
        (0x18B0, 70, WC_ALetter),
        (0x1900, 31, WC_ALetter),
        (0x1920, 12, WC_Extend),
        (0x1930, 12, WC_Extend),
        (0x1946, 10, WC_Numeric),
        (0x19D0, 10, WC_Numeric),
        (0x1A00, 23, WC_ALetter),
        (0x1A17, 5, WC_Extend),
        (0x1A55, 10, WC_Extend),
        (0x1A60, 29, WC_Extend),
        (0x1A7F, 1, WC_Extend),
        (0x1A80, 10, WC_Numeric),
        (0x1A90, 10, WC_Numeric),
        (0x1AB0, 31, WC_Extend),
        (0x1B00, 5, WC_Extend),
        (0x1B05, 47, WC_ALetter),
        (0x1B34, 17, WC_Extend),
        (0x1B45, 8, WC_ALetter),
        (0x1B50, 10, WC_Numeric),
        (0x1B6B, 9, WC_Extend),
        (0x1B80, 3, WC_Extend),
        (0x1B83, 30, WC_ALetter),
        (0x1BA1, 13, WC_Extend),
        (0x1BAE, 2, WC_ALetter),
        (0x1BB0, 10, WC_Numeric),
        (0x1BBA, 44, WC_ALetter),
        (0x1BE6, 14, WC_Extend),
        (0x1C00, 36, WC_ALetter),
        (0x1C24, 20, WC_Extend),
        (0x1C40, 10, WC_Numeric),
        (0x1C4D, 3, WC_ALetter),
        (0x1C50, 10, WC_Numeric),
        (0x1C5A, 36, WC_ALetter),
        (0x1C80, 9, WC_ALetter),
        (0x1C90, 43, WC_ALetter),
        (0x1CBD, 3, WC_ALetter),
        (0x1CD0, 3, WC_Extend),
        (0x1CD4, 21, WC_Extend),
        (0x1CE9, 4, WC_ALetter),
        (0x1CED, 1, WC_Extend),
        (0x1CEE, 6, WC_ALetter),
        (0x1CF4, 1, WC_Extend),
        (0x1CF5, 2, WC_ALetter),
        (0x1CF7, 3, WC_Extend),
        (0x1CFA, 1, WC_ALetter),
        (0x1D00, 192, WC_ALetter),
        (0x1DC0, 64, WC_Extend),
        (0x1E00, 278, WC_ALetter),
        (0x1F18, 6, WC_ALetter),
        (0x1F20, 38, WC_ALetter),
        (0x1F48, 6, WC_ALetter),
        (0x1F50, 8, WC_ALetter),
        (0x1F59, 1, WC_ALetter),
        (0x1F5B, 1, WC_ALetter),
        (0x1F5D, 1, WC_ALetter),
        (0x1F5F, 31, WC_ALetter),
        (0x1F80, 53, WC_ALetter),
        (0x1FB6, 7, WC_ALetter),
        (0x1FBE, 1, WC_ALetter),
        (0x1FC2, 3, WC_ALetter),
        (0x1FC6, 7, WC_ALetter),
        (0x1FD0, 4, WC_ALetter),
        (0x1FD6, 6, WC_ALetter),
        (0x1FE0, 13, WC_ALetter),
        (0x1FF2, 3, WC_ALetter),
        (0x1FF6, 7, WC_ALetter),
        (0x2000, 7, WC_WSegSpace),
        (0x2008, 3, WC_WSegSpace),
        (0x200C, 1, WC_Extend),
        (0x200D, 1, WC_ZWJ),
        (0x200E, 2, WC_Format),
        (0x2018, 2, WC_MidNumLet),
        (0x2024, 1, WC_MidNumLet),
        (0x2027, 1, WC_MidLetter),
        (0x2028, 2, WC_Newline),
        (0x202A, 5, WC_Format),
        (0x202F, 1, WC_ExtendNumLet),
        (0x203C, 1, WC_Extended_Pictographic),
        (0x203F, 2, WC_ExtendNumLet),
        (0x2044, 1, WC_MidNum),
        (0x2049, 1, WC_Extended_Pictographic),
        (0x2054, 1, WC_ExtendNumLet),
        (0x205F, 1, WC_WSegSpace),
        (0x2060, 5, WC_Format),
        (0x2066, 10, WC_Format),
        (0x2071, 1, WC_ALetter),
        (0x207F, 1, WC_ALetter),
        (0x2090, 13, WC_ALetter),
        (0x20D0, 33, WC_Extend),
        (0x2102, 1, WC_ALetter),
        (0x2107, 1, WC_ALetter),
        (0x210A, 10, WC_ALetter),
        (0x2115, 1, WC_ALetter),
        (0x2119, 5, WC_ALetter),
        (0x2122, 1, WC_Extended_Pictographic),
        (0x2124, 1, WC_ALetter),
        (0x2126, 1, WC_ALetter),
        (0x2128, 1, WC_ALetter),
        (0x212A, 4, WC_ALetter),
        (0x212F, 10, WC_ALetter),
        (0x2139, 1, WC_ALetter_ExtPict),
        (0x213C, 4, WC_ALetter),
        (0x2145, 5, WC_ALetter),
        (0x214E, 1, WC_ALetter),
        (0x2160, 41, WC_ALetter),
        (0x2194, 6, WC_Extended_Pictographic),
        (0x21A9, 2, WC_Extended_Pictographic),
        (0x231A, 2, WC_Extended_Pictographic),
        (0x2328, 1, WC_Extended_Pictographic),
        (0x2388, 1, WC_Extended_Pictographic),
        (0x23CF, 1, WC_Extended_Pictographic),
        (0x23E9, 11, WC_Extended_Pictographic),
        (0x23F8, 3, WC_Extended_Pictographic),
        (0x24B6, 12, WC_ALetter),
        (0x24C2, 1, WC_ALetter_ExtPict),
        (0x24C3, 39, WC_ALetter),
        (0x25AA, 2, WC_Extended_Pictographic),
        (0x25B6, 1, WC_Extended_Pictographic),
        (0x25C0, 1, WC_Extended_Pictographic),
        (0x25FB, 4, WC_Extended_Pictographic),
        (0x2600, 6, WC_Extended_Pictographic),
        (0x2607, 12, WC_Extended_Pictographic),
        (0x2614, 114, WC_Extended_Pictographic),
        (0x2690, 118, WC_Extended_Pictographic),
        (0x2708, 11, WC_Extended_Pictographic),
        (0x2714, 1, WC_Extended_Pictographic),
        (0x2716, 1, WC_Extended_Pictographic),
        (0x271D, 1, WC_Extended_Pictographic),
        (0x2721, 1, WC_Extended_Pictographic),
        (0x2728, 1, WC_Extended_Pictographic),
        (0x2733, 2, WC_Extended_Pictographic),
        (0x2744, 1, WC_Extended_Pictographic),
        (0x2747, 1, WC_Extended_Pictographic),
        (0x274C, 1, WC_Extended_Pictographic),
        (0x274E, 1, WC_Extended_Pictographic),
        (0x2753, 3, WC_Extended_Pictographic),
        (0x2757, 1, WC_Extended_Pictographic),
        (0x2763, 5, WC_Extended_Pictographic),
        (0x2795, 3, WC_Extended_Pictographic),
        (0x27A1, 1, WC_Extended_Pictographic),
        (0x27B0, 1, WC_Extended_Pictographic),
        (0x27BF, 1, WC_Extended_Pictographic),
        (0x2934, 2, WC_Extended_Pictographic),
        (0x2B05, 3, WC_Extended_Pictographic),
        (0x2B1B, 2, WC_Extended_Pictographic),
        (0x2B50, 1, WC_Extended_Pictographic),
        (0x2B55, 1, WC_Extended_Pictographic),
        (0x2C00, 229, WC_ALetter),
        (0x2CEB, 4, WC_ALetter),
        (0x2CEF, 3, WC_Extend),
        (0x2CF2, 2, WC_ALetter),
        (0x2D00, 38, WC_ALetter),
        (0x2D27, 1, WC_ALetter),
        (0x2D2D, 1, WC_ALetter),
        (0x2D30, 56, WC_ALetter),
        (0x2D6F, 1, WC_ALetter),
        (0x2D7F, 1, WC_Extend),
        (0x2D80, 23, WC_ALetter),
        (0x2DA0, 7, WC_ALetter),
        (0x2DA8, 7, WC_ALetter),
        (0x2DB0, 7, WC_ALetter),
        (0x2DB8, 7, WC_ALetter),
        (0x2DC0, 7, WC_ALetter),
        (0x2DC8, 7, WC_ALetter),
        (0x2DD0, 7, WC_ALetter),
        (0x2DD8, 7, WC_ALetter),
        (0x2DE0, 32, WC_Extend),
        (0x2E2F, 1, WC_ALetter),
        (0x3000, 1, WC_WSegSpace),
        (0x3005, 1, WC_ALetter),
        (0x302A, 6, WC_Extend),
        (0x3030, 1, WC_Extended_Pictographic),
        (0x3031, 5, WC_KanaExtension),
        (0x303B, 2, WC_ALetter),
        (0x303D, 1, WC_Extended_Pictographic),
        (0x3041, 86, WC_Hiragana),
        (0x3099, 2, WC_Extend),
        (0x309B, 2, WC_KanaExtension),
        (0x309D, 3, WC_Hiragana),
        (0x30A0, 1, WC_KanaExtension),
        (0x30A1, 90, WC_Katakana),
        (0x30FC, 1, WC_KanaExtension),
        (0x30FD, 3, WC_Katakana),
        (0x3105, 43, WC_ALetter),
        (0x3131, 94, WC_ALetter),
        (0x31A0, 32, WC_ALetter),
        (0x31F0, 16, WC_Katakana),
        (0x3297, 1, WC_Extended_Pictographic),
        (0x3299, 1, WC_Extended_Pictographic),
        (0x32D0, 47, WC_Katakana),
        (0x3300, 88, WC_Katakana),
        (0xA000, 1165, WC_ALetter),
        (0xA4D0, 46, WC_ALetter),
        (0xA500, 269, WC_ALetter),
        (0xA610, 16, WC_ALetter),
        (0xA620, 10, WC_Numeric),
        (0xA62A, 2, WC_ALetter),
        (0xA640, 47, WC_ALetter),
        (0xA66F, 4, WC_Extend),
        (0xA674, 10, WC_Extend),
        (0xA67F, 31, WC_ALetter),
        (0xA69E, 2, WC_Extend),
        (0xA6A0, 80, WC_ALetter),
        (0xA6F0, 2, WC_Extend),
        (0xA708, 195, WC_ALetter),
        (0xA7D0, 2, WC_ALetter),
        (0xA7D3, 1, WC_ALetter),
        (0xA7D5, 5, WC_ALetter),
        (0xA7F2, 16, WC_ALetter),
        (0xA802, 1, WC_Extend),
        (0xA803, 3, WC_ALetter),
        (0xA806, 1, WC_Extend),
        (0xA807, 4, WC_ALetter),
        (0xA80B, 1, WC_Extend),
        (0xA80C, 23, WC_ALetter),
        (0xA823, 5, WC_Extend),
        (0xA82C, 1, WC_Extend),
        (0xA840, 52, WC_ALetter),
        (0xA880, 2, WC_Extend),
        (0xA882, 50, WC_ALetter),
        (0xA8B4, 18, WC_Extend),
        (0xA8D0, 10, WC_Numeric),
        (0xA8E0, 18, WC_Extend),
        (0xA8F2, 6, WC_ALetter),
        (0xA8FB, 1, WC_ALetter),
        (0xA8FD, 2, WC_ALetter),
        (0xA8FF, 1, WC_Extend),
        (0xA900, 10, WC_Numeric),
        (0xA90A, 28, WC_ALetter),
        (0xA926, 8, WC_Extend),
        (0xA930, 23, WC_ALetter),
        (0xA947, 13, WC_Extend),
        (0xA960, 29, WC_ALetter),
        (0xA980, 4, WC_Extend),
        (0xA984, 47, WC_ALetter),
        (0xA9B3, 14, WC_Extend),
        (0xA9CF, 1, WC_ALetter),
        (0xA9D0, 10, WC_Numeric),
        (0xA9E5, 1, WC_Extend),
        (0xA9F0, 10, WC_Numeric),
        (0xAA00, 41, WC_ALetter),
        (0xAA29, 14, WC_Extend),
        (0xAA40, 3, WC_ALetter),
        (0xAA43, 1, WC_Extend),
        (0xAA44, 8, WC_ALetter),
        (0xAA4C, 2, WC_Extend),
        (0xAA50, 10, WC_Numeric),
        (0xAA7B, 3, WC_Extend),
        (0xAAB0, 1, WC_Extend),
        (0xAAB2, 3, WC_Extend),
        (0xAAB7, 2, WC_Extend),
        (0xAABE, 2, WC_Extend),
        (0xAAC1, 1, WC_Extend),
        (0xAAE0, 11, WC_ALetter),
        (0xAAEB, 5, WC_Extend),
        (0xAAF2, 3, WC_ALetter),
        (0xAAF5, 2, WC_Extend),
        (0xAB01, 6, WC_ALetter),
        (0xAB09, 6, WC_ALetter),
        (0xAB11, 6, WC_ALetter),
        (0xAB20, 7, WC_ALetter),
        (0xAB28, 7, WC_ALetter),
        (0xAB30, 58, WC_ALetter),
        (0xAB70, 115, WC_ALetter),
        (0xABE3, 8, WC_Extend),
        (0xABEC, 2, WC_Extend),
        (0xABF0, 10, WC_Numeric),
        (0xAC00, 11172, WC_ALetter),
        (0xD7B0, 23, WC_ALetter),
        (0xD7CB, 49, WC_ALetter),
        (0xFB00, 7, WC_ALetter),
        (0xFB13, 5, WC_ALetter),
        (0xFB1D, 1, WC_Hebrew_Letter),
        (0xFB1E, 1, WC_Extend),
        (0xFB1F, 10, WC_Hebrew_Letter),
        (0xFB2A, 13, WC_Hebrew_Letter),
        (0xFB38, 5, WC_Hebrew_Letter),
        (0xFB3E, 1, WC_Hebrew_Letter),
        (0xFB40, 2, WC_Hebrew_Letter),
        (0xFB43, 2, WC_Hebrew_Letter),
        (0xFB46, 10, WC_Hebrew_Letter),
        (0xFB50, 98, WC_ALetter),
        (0xFBD3, 363, WC_ALetter),
        (0xFD50, 64, WC_ALetter),
        (0xFD92, 54, WC_ALetter),
        (0xFDF0, 12, WC_ALetter),
        (0xFE00, 16, WC_Extend),
        (0xFE10, 1, WC_MidNum),
        (0xFE13, 1, WC_MidLetter),
        (0xFE14, 1, WC_MidNum),
        (0xFE20, 16, WC_Extend),
        (0xFE33, 2, WC_ExtendNumLet),
        (0xFE4D, 3, WC_ExtendNumLet),
        (0xFE50, 1, WC_MidNum),
        (0xFE52, 1, WC_MidNumLet),
        (0xFE54, 1, WC_MidNum),
        (0xFE55, 1, WC_MidLetter),
        (0xFE70, 5, WC_ALetter),
        (0xFE76, 135, WC_ALetter),
        (0xFEFF, 1, WC_Format),
        (0xFF07, 1, WC_MidNumLet),
        (0xFF0C, 1, WC_MidNum),
        (0xFF0E, 1, WC_MidNumLet),
        (0xFF10, 10, WC_Numeric),
        (0xFF1A, 1, WC_MidLetter),
        (0xFF1B, 1, WC_MidNum),
        (0xFF21, 26, WC_ALetter),
        (0xFF3F, 1, WC_ExtendNumLet),
        (0xFF41, 26, WC_ALetter),
        (0xFF66, 10, WC_Katakana),
        (0xFF70, 1, WC_KanaExtension),
        (0xFF71, 45, WC_Katakana),
        (0xFF9E, 2, WC_Extend),
        (0xFFA0, 31, WC_ALetter),
        (0xFFC2, 6, WC_ALetter),
        (0xFFCA, 6, WC_ALetter),
        (0xFFD2, 6, WC_ALetter),
        (0xFFDA, 3, WC_ALetter),
        (0xFFF9, 3, WC_Format),
        (0x10000, 12, WC_ALetter),
        (0x1000D, 26, WC_ALetter),
        (0x10028, 19, WC_ALetter),
        (0x1003C, 2, WC_ALetter),
        (0x1003F, 15, WC_ALetter),
        (0x10050, 14, WC_ALetter),
        (0x10080, 123, WC_ALetter),
        (0x10140, 53, WC_ALetter),
        (0x101FD, 1, WC_Extend),
        (0x10280, 29, WC_ALetter),
        (0x102A0, 49, WC_ALetter),
        (0x102E0, 1, WC_Extend),
        (0x10300, 32, WC_ALetter),
        (0x1032D, 30, WC_ALetter),
        (0x10350, 38, WC_ALetter),
        (0x10376, 5, WC_Extend),
        (0x10380, 30, WC_ALetter),
        (0x103A0, 36, WC_ALetter),
        (0x103C8, 8, WC_ALetter),
        (0x103D1, 5, WC_ALetter),
        (0x10400, 158, WC_ALetter),
        (0x104A0, 10, WC_Numeric),
        (0x104B0, 36, WC_ALetter),
        (0x104D8, 36, WC_ALetter),
        (0x10500, 40, WC_ALetter),
        (0x10530, 52, WC_ALetter),
        (0x10570, 11, WC_ALetter),
        (0x1057C, 15, WC_ALetter),
        (0x1058C, 7, WC_ALetter),
        (0x10594, 2, WC_ALetter),
        (0x10597, 11, WC_ALetter),
        (0x105A3, 15, WC_ALetter),
        (0x105B3, 7, WC_ALetter),
        (0x105BB, 2, WC_ALetter),
        (0x10600, 311, WC_ALetter),
        (0x10740, 22, WC_ALetter),
        (0x10760, 8, WC_ALetter),
        (0x10780, 6, WC_ALetter),
        (0x10787, 42, WC_ALetter),
        (0x107B2, 9, WC_ALetter),
        (0x10800, 6, WC_ALetter),
        (0x10808, 1, WC_ALetter),
        (0x1080A, 44, WC_ALetter),
        (0x10837, 2, WC_ALetter),
        (0x1083C, 1, WC_ALetter),
        (0x1083F, 23, WC_ALetter),
        (0x10860, 23, WC_ALetter),
        (0x10880, 31, WC_ALetter),
        (0x108E0, 19, WC_ALetter),
        (0x108F4, 2, WC_ALetter),
        (0x10900, 22, WC_ALetter),
        (0x10920, 26, WC_ALetter),
        (0x10980, 56, WC_ALetter),
        (0x109BE, 2, WC_ALetter),
        (0x10A00, 1, WC_ALetter),
        (0x10A01, 3, WC_Extend),
        (0x10A05, 2, WC_Extend),
        (0x10A0C, 4, WC_Extend),
        (0x10A10, 4, WC_ALetter),
        (0x10A15, 3, WC_ALetter),
        (0x10A19, 29, WC_ALetter),
        (0x10A38, 3, WC_Extend),
        (0x10A3F, 1, WC_Extend),
        (0x10A60, 29, WC_ALetter),
        (0x10A80, 29, WC_ALetter),
        (0x10AC0, 8, WC_ALetter),
        (0x10AC9, 28, WC_ALetter),
        (0x10AE5, 2, WC_Extend),
        (0x10B00, 54, WC_ALetter),
        (0x10B40, 22, WC_ALetter),
        (0x10B60, 19, WC_ALetter),
        (0x10B80, 18, WC_ALetter),
        (0x10C00, 73, WC_ALetter),
        (0x10C80, 51, WC_ALetter),
        (0x10CC0, 51, WC_ALetter),
        (0x10D00, 36, WC_ALetter),
        (0x10D24, 4, WC_Extend),
        (0x10D30, 10, WC_Numeric),
        (0x10E80, 42, WC_ALetter),
        (0x10EAB, 2, WC_Extend),
        (0x10EB0, 2, WC_ALetter),
        (0x10F00, 29, WC_ALetter),
        (0x10F27, 1, WC_ALetter),
        (0x10F30, 22, WC_ALetter),
        (0x10F46, 11, WC_Extend),
        (0x10F70, 18, WC_ALetter),
        (0x10F82, 4, WC_Extend),
        (0x10FB0, 21, WC_ALetter),
        (0x10FE0, 23, WC_ALetter),
        (0x11000, 3, WC_Extend),
        (0x11003, 53, WC_ALetter),
        (0x11038, 15, WC_Extend),
        (0x11066, 10, WC_Numeric),
        (0x11070, 1, WC_Extend),
        (0x11071, 2, WC_ALetter),
        (0x11073, 2, WC_Extend),
        (0x11075, 1, WC_ALetter),
        (0x1107F, 4, WC_Extend),
        (0x11083, 45, WC_ALetter),
        (0x110B0, 11, WC_Extend),
        (0x110BD, 1, WC_Format),
        (0x110C2, 1, WC_Extend),
        (0x110CD, 1, WC_Format),
        (0x110D0, 25, WC_ALetter),
        (0x110F0, 10, WC_Numeric),
        (0x11100, 3, WC_Extend),
        (0x11103, 36, WC_ALetter),
        (0x11127, 14, WC_Extend),
        (0x11136, 10, WC_Numeric),
        (0x11144, 1, WC_ALetter),
        (0x11145, 2, WC_Extend),
        (0x11147, 1, WC_ALetter),
        (0x11150, 35, WC_ALetter),
        (0x11173, 1, WC_Extend),
        (0x11176, 1, WC_ALetter),
        (0x11180, 3, WC_Extend),
        (0x11183, 48, WC_ALetter),
        (0x111B3, 14, WC_Extend),
        (0x111C1, 4, WC_ALetter),
        (0x111C9, 4, WC_Extend),
        (0x111CE, 2, WC_Extend),
        (0x111D0, 10, WC_Numeric),
        (0x111DA, 1, WC_ALetter),
        (0x111DC, 1, WC_ALetter),
        (0x11200, 18, WC_ALetter),
        (0x11213, 25, WC_ALetter),
        (0x1122C, 12, WC_Extend),
        (0x1123E, 1, WC_Extend),
        (0x11280, 7, WC_ALetter),
        (0x11288, 1, WC_ALetter),
        (0x1128A, 4, WC_ALetter),
        (0x1128F, 15, WC_ALetter),
        (0x1129F, 10, WC_ALetter),
        (0x112B0, 47, WC_ALetter),
        (0x112DF, 12, WC_Extend),
        (0x112F0, 10, WC_Numeric),
        (0x11300, 4, WC_Extend),
        (0x11305, 8, WC_ALetter),
        (0x1130F, 2, WC_ALetter),
        (0x11313, 22, WC_ALetter),
        (0x1132A, 7, WC_ALetter),
        (0x11332, 2, WC_ALetter),
        (0x11335, 5, WC_ALetter),
        (0x1133B, 2, WC_Extend),
        (0x1133D, 1, WC_ALetter),
        (0x1133E, 7, WC_Extend),
        (0x11347, 2, WC_Extend),
        (0x1134B, 3, WC_Extend),
        (0x11350, 1, WC_ALetter),
        (0x11357, 1, WC_Extend),
        (0x1135D, 5, WC_ALetter),
        (0x11362, 2, WC_Extend),
        (0x11366, 7, WC_Extend),
        (0x11370, 5, WC_Extend),
        (0x11400, 53, WC_ALetter),
        (0x11435, 18, WC_Extend),
        (0x11447, 4, WC_ALetter),
        (0x11450, 10, WC_Numeric),
        (0x1145E, 1, WC_Extend),
        (0x1145F, 3, WC_ALetter),
        (0x11480, 48, WC_ALetter),
        (0x114B0, 20, WC_Extend),
        (0x114C4, 2, WC_ALetter),
        (0x114C7, 1, WC_ALetter),
        (0x114D0, 10, WC_Numeric),
        (0x11580, 47, WC_ALetter),
        (0x115AF, 7, WC_Extend),
        (0x115B8, 9, WC_Extend),
        (0x115D8, 4, WC_ALetter),
        (0x115DC, 2, WC_Extend),
        (0x11600, 48, WC_ALetter),
        (0x11630, 17, WC_Extend),
        (0x11644, 1, WC_ALetter),
        (0x11650, 10, WC_Numeric),
        (0x11680, 43, WC_ALetter),
        (0x116AB, 13, WC_Extend),
        (0x116B8, 1, WC_ALetter),
        (0x116C0, 10, WC_Numeric),
        (0x1171D, 15, WC_Extend),
        (0x11730, 10, WC_Numeric),
        (0x11800, 44, WC_ALetter),
        (0x1182C, 15, WC_Extend),
        (0x118A0, 64, WC_ALetter),
        (0x118E0, 10, WC_Numeric),
        (0x118FF, 8, WC_ALetter),
        (0x11909, 1, WC_ALetter),
        (0x1190C, 8, WC_ALetter),
        (0x11915, 2, WC_ALetter),
        (0x11918, 24, WC_ALetter),
        (0x11930, 6, WC_Extend),
        (0x11937, 2, WC_Extend),
        (0x1193B, 4, WC_Extend),
        (0x1193F, 1, WC_ALetter),
        (0x11940, 1, WC_Extend),
        (0x11941, 1, WC_ALetter),
        (0x11942, 2, WC_Extend),
        (0x11950, 10, WC_Numeric),
        (0x119A0, 8, WC_ALetter),
        (0x119AA, 39, WC_ALetter),
        (0x119D1, 7, WC_Extend),
        (0x119DA, 7, WC_Extend),
        (0x119E1, 1, WC_ALetter),
        (0x119E3, 1, WC_ALetter),
        (0x119E4, 1, WC_Extend),
        (0x11A00, 1, WC_ALetter),
        (0x11A01, 10, WC_Extend),
        (0x11A0B, 40, WC_ALetter),
        (0x11A33, 7, WC_Extend),
        (0x11A3A, 1, WC_ALetter),
        (0x11A3B, 4, WC_Extend),
        (0x11A47, 1, WC_Extend),
        (0x11A50, 1, WC_ALetter),
        (0x11A51, 11, WC_Extend),
        (0x11A5C, 46, WC_ALetter),
        (0x11A8A, 16, WC_Extend),
        (0x11A9D, 1, WC_ALetter),
        (0x11AB0, 73, WC_ALetter),
        (0x11C00, 9, WC_ALetter),
        (0x11C0A, 37, WC_ALetter),
        (0x11C2F, 8, WC_Extend),
        (0x11C38, 8, WC_Extend),
        (0x11C40, 1, WC_ALetter),
        (0x11C50, 10, WC_Numeric),
        (0x11C72, 30, WC_ALetter),
        (0x11C92, 22, WC_Extend),
        (0x11CA9, 14, WC_Extend),
        (0x11D00, 7, WC_ALetter),
        (0x11D08, 2, WC_ALetter),
        (0x11D0B, 38, WC_ALetter),
        (0x11D31, 6, WC_Extend),
        (0x11D3A, 1, WC_Extend),
        (0x11D3C, 2, WC_Extend),
        (0x11D3F, 7, WC_Extend),
        (0x11D46, 1, WC_ALetter),
        (0x11D47, 1, WC_Extend),
        (0x11D50, 10, WC_Numeric),
        (0x11D60, 6, WC_ALetter),
        (0x11D67, 2, WC_ALetter),
        (0x11D6A, 32, WC_ALetter),
        (0x11D8A, 5, WC_Extend),
        (0x11D90, 2, WC_Extend),
        (0x11D93, 5, WC_Extend),
        (0x11D98, 1, WC_ALetter),
        (0x11DA0, 10, WC_Numeric),
        (0x11EE0, 19, WC_ALetter),
        (0x11EF3, 4, WC_Extend),
        (0x11FB0, 1, WC_ALetter),
        (0x12000, 922, WC_ALetter),
        (0x12400, 111, WC_ALetter),
        (0x12480, 196, WC_ALetter),
        (0x12F90, 97, WC_ALetter),
        (0x13000, 1071, WC_ALetter),
        (0x13430, 9, WC_Format),
        (0x14400, 583, WC_ALetter),
        (0x16800, 569, WC_ALetter),
        (0x16A40, 31, WC_ALetter),
        (0x16A60, 10, WC_Numeric),
        (0x16A70, 79, WC_ALetter),
        (0x16AC0, 10, WC_Numeric),
        (0x16AD0, 30, WC_ALetter),
        (0x16AF0, 5, WC_Extend),
        (0x16B00, 48, WC_ALetter),
        (0x16B30, 7, WC_Extend),
        (0x16B40, 4, WC_ALetter),
        (0x16B50, 10, WC_Numeric),
        (0x16B63, 21, WC_ALetter),
        (0x16B7D, 19, WC_ALetter),
        (0x16E40, 64, WC_ALetter),
        (0x16F00, 75, WC_ALetter),
        (0x16F4F, 1, WC_Extend),
        (0x16F50, 1, WC_ALetter),
        (0x16F51, 55, WC_Extend),
        (0x16F8F, 4, WC_Extend),
        (0x16F93, 13, WC_ALetter),
        (0x16FE0, 2, WC_ALetter),
        (0x16FE3, 1, WC_ALetter),
        (0x16FE4, 1, WC_Extend),
        (0x16FF0, 2, WC_Extend),
        (0x1AFF0, 4, WC_Katakana),
        (0x1AFF5, 7, WC_Katakana),
        (0x1AFFD, 2, WC_Katakana),
        (0x1B000, 1, WC_Katakana),
        (0x1B001, 287, WC_Hiragana),
        (0x1B120, 3, WC_Katakana),
        (0x1B150, 3, WC_Hiragana),
        (0x1B164, 4, WC_Katakana),
        (0x1BC00, 107, WC_ALetter),
        (0x1BC70, 13, WC_ALetter),
        (0x1BC80, 9, WC_ALetter),
        (0x1BC90, 10, WC_ALetter),
        (0x1BC9D, 2, WC_Extend),
        (0x1BCA0, 4, WC_Format),
        (0x1CF00, 46, WC_Extend),
        (0x1CF30, 23, WC_Extend),
        (0x1D165, 5, WC_Extend),
        (0x1D16D, 6, WC_Extend),
        (0x1D173, 8, WC_Format),
        (0x1D17B, 8, WC_Extend),
        (0x1D185, 7, WC_Extend),
        (0x1D1AA, 4, WC_Extend),
        (0x1D242, 3, WC_Extend),
        (0x1D400, 85, WC_ALetter),
        (0x1D456, 71, WC_ALetter),
        (0x1D49E, 2, WC_ALetter),
        (0x1D4A2, 1, WC_ALetter),
        (0x1D4A5, 2, WC_ALetter),
        (0x1D4A9, 4, WC_ALetter),
        (0x1D4AE, 12, WC_ALetter),
        (0x1D4BB, 1, WC_ALetter),
        (0x1D4BD, 7, WC_ALetter),
        (0x1D4C5, 65, WC_ALetter),
        (0x1D507, 4, WC_ALetter),
        (0x1D50D, 8, WC_ALetter),
        (0x1D516, 7, WC_ALetter),
        (0x1D51E, 28, WC_ALetter),
        (0x1D53B, 4, WC_ALetter),
        (0x1D540, 5, WC_ALetter),
        (0x1D546, 1, WC_ALetter),
        (0x1D54A, 7, WC_ALetter),
        (0x1D552, 340, WC_ALetter),
        (0x1D6A8, 25, WC_ALetter),
        (0x1D6C2, 25, WC_ALetter),
        (0x1D6DC, 31, WC_ALetter),
        (0x1D6FC, 25, WC_ALetter),
        (0x1D716, 31, WC_ALetter),
        (0x1D736, 25, WC_ALetter),
        (0x1D750, 31, WC_ALetter),
        (0x1D770, 25, WC_ALetter),
        (0x1D78A, 31, WC_ALetter),
        (0x1D7AA, 25, WC_ALetter),
        (0x1D7C4, 8, WC_ALetter),
        (0x1D7CE, 50, WC_Numeric),
        (0x1DA00, 55, WC_Extend),
        (0x1DA3B, 50, WC_Extend),
        (0x1DA75, 1, WC_Extend),
        (0x1DA84, 1, WC_Extend),
        (0x1DA9B, 5, WC_Extend),
        (0x1DAA1, 15, WC_Extend),
        (0x1DF00, 31, WC_ALetter),
        (0x1E000, 7, WC_Extend),
        (0x1E008, 17, WC_Extend),
        (0x1E01B, 7, WC_Extend),
        (0x1E023, 2, WC_Extend),
        (0x1E026, 5, WC_Extend),
        (0x1E100, 45, WC_ALetter),
        (0x1E130, 7, WC_Extend),
        (0x1E137, 7, WC_ALetter),
        (0x1E140, 10, WC_Numeric),
        (0x1E14E, 1, WC_ALetter),
        (0x1E290, 30, WC_ALetter),
        (0x1E2AE, 1, WC_Extend),
        (0x1E2C0, 44, WC_ALetter),
        (0x1E2EC, 4, WC_Extend),
        (0x1E2F0, 10, WC_Numeric),
        (0x1E7E0, 7, WC_ALetter),
        (0x1E7E8, 4, WC_ALetter),
        (0x1E7ED, 2, WC_ALetter),
        (0x1E7F0, 15, WC_ALetter),
        (0x1E800, 197, WC_ALetter),
        (0x1E8D0, 7, WC_Extend),
        (0x1E900, 68, WC_ALetter),
        (0x1E944, 7, WC_Extend),
        (0x1E94B, 1, WC_ALetter),
        (0x1E950, 10, WC_Numeric),
        (0x1EE00, 4, WC_ALetter),
        (0x1EE05, 27, WC_ALetter),
        (0x1EE21, 2, WC_ALetter),
        (0x1EE24, 1, WC_ALetter),
        (0x1EE27, 1, WC_ALetter),
        (0x1EE29, 10, WC_ALetter),
        (0x1EE34, 4, WC_ALetter),
        (0x1EE39, 1, WC_ALetter),
        (0x1EE3B, 1, WC_ALetter),
        (0x1EE42, 1, WC_ALetter),
        (0x1EE47, 1, WC_ALetter),
        (0x1EE49, 1, WC_ALetter),
        (0x1EE4B, 1, WC_ALetter),
        (0x1EE4D, 3, WC_ALetter),
        (0x1EE51, 2, WC_ALetter),
        (0x1EE54, 1, WC_ALetter),
        (0x1EE57, 1, WC_ALetter),
        (0x1EE59, 1, WC_ALetter),
        (0x1EE5B, 1, WC_ALetter),
        (0x1EE5D, 1, WC_ALetter),
        (0x1EE5F, 1, WC_ALetter),
        (0x1EE61, 2, WC_ALetter),
        (0x1EE64, 1, WC_ALetter),
        (0x1EE67, 4, WC_ALetter),
        (0x1EE6C, 7, WC_ALetter),
        (0x1EE74, 4, WC_ALetter),
        (0x1EE79, 4, WC_ALetter),
        (0x1EE7E, 1, WC_ALetter),
        (0x1EE80, 10, WC_ALetter),
        (0x1EE8B, 17, WC_ALetter),
        (0x1EEA1, 3, WC_ALetter),
        (0x1EEA5, 5, WC_ALetter),
        (0x1EEAB, 17, WC_ALetter),
        (0x1F000, 256, WC_Extended_Pictographic),
        (0x1F10D, 3, WC_Extended_Pictographic),
        (0x1F12F, 1, WC_Extended_Pictographic),
        (0x1F130, 26, WC_ALetter),
        (0x1F150, 26, WC_ALetter),
        (0x1F16C, 4, WC_Extended_Pictographic),
        (0x1F170, 2, WC_ALetter_ExtPict),
        (0x1F172, 12, WC_ALetter),
        (0x1F17E, 2, WC_ALetter_ExtPict),
        (0x1F180, 10, WC_ALetter),
        (0x1F18E, 1, WC_Extended_Pictographic),
        (0x1F191, 10, WC_Extended_Pictographic),
        (0x1F1AD, 57, WC_Extended_Pictographic),
        (0x1F1E6, 26, WC_Regional_Indicator),
        (0x1F200, 1, WC_Hiragana),
        (0x1F201, 15, WC_Extended_Pictographic),
        (0x1F21A, 1, WC_Extended_Pictographic),
        (0x1F22F, 1, WC_Extended_Pictographic),
        (0x1F232, 9, WC_Extended_Pictographic),
        (0x1F23C, 4, WC_Extended_Pictographic),
        (0x1F249, 434, WC_Extended_Pictographic),
        (0x1F3FB, 5, WC_Extend),
        (0x1F400, 318, WC_Extended_Pictographic),
        (0x1F546, 266, WC_Extended_Pictographic),
        (0x1F680, 128, WC_Extended_Pictographic),
        (0x1F774, 12, WC_Extended_Pictographic),
        (0x1F7D5, 43, WC_Extended_Pictographic),
        (0x1F80C, 4, WC_Extended_Pictographic),
        (0x1F848, 8, WC_Extended_Pictographic),
        (0x1F85A, 6, WC_Extended_Pictographic),
        (0x1F888, 8, WC_Extended_Pictographic),
        (0x1F8AE, 82, WC_Extended_Pictographic),
        (0x1F90C, 47, WC_Extended_Pictographic),
        (0x1F93C, 10, WC_Extended_Pictographic),
        (0x1F947, 441, WC_Extended_Pictographic),
        (0x1FBF0, 10, WC_Numeric),
        (0x1FC00, 1022, WC_Extended_Pictographic),
        (0xE0001, 1, WC_Format),
        (0xE0020, 96, WC_Extend),
        (0xE0100, 240, WC_Extend),
    ];
}

pub mod sentence {
    pub use self::SentenceCat::*;

    /// `Sentence_Break` values.
    #[allow(non_camel_case_types)]
    #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub enum SentenceCat {
        SC_Other,
        SC_CR,
        SC_LF,
        SC_Extend,
        SC_Sep,
        SC_Format,
        SC_Sp,
        SC_Lower,
        SC_Upper,
        SC_OLetter,
        SC_Numeric,
        SC_ATerm,
        SC_STerm,
        SC_Close,
        SC_SContinue,
        /// End-of-text sentinel; never stored in the table.
        SC_EOT,
    }

    pub(crate) const SENTENCE_CAT_TABLE: &[(u32, u32, SentenceCat)] = &[
        (0x0009, 1, SC_Sp),
        (0x000A, 1, SC_LF),
        (0x000B, 2, SC_Sp),
        (0x000D, 1, SC_CR),
        (0x0020, 1, SC_Sp),
        (0x0021, 1, SC_STerm),
        (0x0022, 1, SC_Close),
        (0x0027, 3, SC_Close),
        (0x002C, 2, SC_SContinue),
        (0x002E, 1, SC_ATerm),
        (0x0030, 10, SC_Numeric),
        (0x003A, 1, SC_SContinue),
        (0x003F, 1, SC_STerm),
        (0x0041, 26, SC_Upper),
        (0x005B, 1, SC_Close),
        (0x005D, 1, SC_Close),
        (0x0061, 26, SC_Lower),
        (0x007B, 1, SC_Close),
        (0x007D, 1, SC_Close),
        (0x0085, 1, SC_Sep),
        (0x00A0, 1, SC_Sp),
        (0x00AA, 1, SC_Lower),
        (0x00AB, 1, SC_Close),
        (0x00AD, 1, SC_Format),
        (0x00B5, 1, SC_Lower),
        (0x00BA, 1, SC_Lower),
        (0x00BB, 1, SC_Close),
        (0x00C0, 23, SC_Upper),
        (0x00D8, 7, SC_Upper),
        (0x00DF, 24, SC_Lower),
        (0x00F8, 8, SC_Lower),
        (0x0100, 1, SC_Upper),
        (0x0101, 1, SC_Lower),
        (0x0102, 1, SC_Upper),
        (0x0103, 1, SC_Lower),
        (0x0104, 1, SC_Upper),
        (0x0105, 1, SC_Lower),
        (0x0106, 1, SC_Upper),
        (0x0107, 1, SC_Lower),
        (0x0108, 1, SC_Upper),
        (0x0109, 1, SC_Lower),
        (0x010A, 1, SC_Upper),
        (0x010B, 1, SC_Lower),
        (0x010C, 1, SC_Upper),
        (0x010D, 1, SC_Lower),
        (0x010E, 1, SC_Upper),
        (0x010F, 1, SC_Lower),
        (0x0110, 1, SC_Upper),
        (0x0111, 1, SC_Lower),
        (0x0112, 1, SC_Upper),
        (0x0113, 1, SC_Lower),
        (0x0114, 1, SC_Upper),
        (0x0115, 1, SC_Lower),
        (0x0116, 1, SC_Upper),
        (0x0117, 1, SC_Lower),
        (0x0118, 1, SC_Upper),
        (0x0119, 1, SC_Lower),
        (0x011A, 1, SC_Upper),
        (0x011B, 1, SC_Lower),
        (0x011C, 1, SC_Upper),
        (0x011D, 1, SC_Lower),
        (0x011E, 1, SC_Upper),
        (0x011F, 1, SC_Lower),
        (0x0120, 1, SC_Upper),
        (0x0121, 1, SC_Lower),
        (0x0122, 1, SC_Upper),
        (0x0123, 1, SC_Lower),
        (0x0124, 1, SC_Upper),
        (0x0125, 1, SC_Lower),
        (0x0126, 1, SC_Upper),
        (0x0127, 1, SC_Lower),
        (0x0128, 1, SC_Upper),
        (0x0129, 1, SC_Lower),
        (0x012A, 1, SC_Upper),
        (0x012B, 1, SC_Lower),
        (0x012C, 1, SC_Upper),
        (0x012D, 1, SC_Lower),
        (0x012E, 1, SC_Upper),
        (0x012F, 1, SC_Lower),
        (0x0130, 1, SC_Upper),
        (0x0131, 1, SC_Lower),
        (0x0132, 1, SC_Upper),
        (0x0133, 1, SC_Lower),
        (0x0134, 1, SC_Upper),
        (0x0135, 1, SC_Lower),
        (0x0136, 1, SC_Upper),
        (0x0137, 2, SC_Lower),
        (0x0139, 1, SC_Upper),
        (0x013A, 1, SC_Lower),
        (0x013B, 1, SC_Upper),
        (0x013C, 1, SC_Lower),
        (0x013D, 1, SC_Upper),
        (0x013E, 1, SC_Lower),
        (0x013F, 1, SC_Upper),
        (0x0140, 1, SC_Lower),
        (0x0141, 1, SC_Upper),
        (0x0142, 1, SC_Lower),
        (0x0143, 1, SC_Upper),
        (0x0144, 1, SC_Lower),
        (0x0145, 1, SC_Upper),
        (0x0146, 1, SC_Lower),
        (0x0147, 1, SC_Upper),
        (0x0148, 2, SC_Lower),
        (0x014A, 1, SC_Upper),
        (0x014B, 1, SC_Lower),
        (0x014C, 1, SC_Upper),
        (0x014D, 1, SC_Lower),
        (0x014E, 1, SC_Upper),
        (0x014F, 1, SC_Lower),
        (0x0150, 1, SC_Upper),
        (0x0151, 1, SC_Lower),
        (0x0152, 1, SC_Upper),
        (0x0153, 1, SC_Lower),
        (0x0154, 1, SC_Upper),
        (0x0155, 1, SC_Lower),
        (0x0156, 1, SC_Upper),
        (0x0157, 1, SC_Lower),
        (0x0158, 1, SC_Upper),
        (0x0159, 1, SC_Lower),
        (0x015A, 1, SC_Upper),
        (0x015B, 1, SC_Lower),
        (0x015C, 1, SC_Upper),
        (0x015D, 1, SC_Lower),
        (0x015E, 1, SC_Upper),
        (0x015F, 1, SC_Lower),
        (0x0160, 1, SC_Upper),
        (0x0161, 1, SC_Lower),
        (0x0162, 1, SC_Upper),
        (0x0163, 1, SC_Lower),
        (0x0164, 1, SC_Upper),
        (0x0165, 1, SC_Lower),
        (0x0166, 1, SC_Upper),
        (0x0167, 1, SC_Lower),
        (0x0168, 1, SC_Upper),
        (0x0169, 1, SC_Lower),
        (0x016A, 1, SC_Upper),
        (0x016B, 1, SC_Lower),
        (0x016C, 1, SC_Upper),
        (0x016D, 1, SC_Lower),
        (0x016E, 1, SC_Upper),
        (0x016F, 1, SC_Lower),
        (0x0170, 1, SC_Upper),
        (0x0171, 1, SC_Lower),
        (0x0172, 1, SC_Upper),
        (0x0173, 1, SC_Lower),
        (0x0174, 1, SC_Upper),
        (0x0175, 1, SC_Lower),
        (0x0176, 1, SC_Upper),
        (0x0177, 1, SC_Lower),
        (0x0178, 2, SC_Upper),
        (0x017A, 1, SC_Lower),
        (0x017B, 1, SC_Upper),
        (0x017C, 1, SC_Lower),
        (0x017D, 1, SC_Upper),
        (0x017E, 3, SC_Lower),
        (0x0181, 2, SC_Upper),
        (0x0183, 1, SC_Lower),
        (0x0184, 1, SC_Upper),
        (0x0185, 1, SC_Lower),
        (0x0186, 2, SC_Upper),
        (0x0188, 1, SC_Lower),
        (0x0189, 3, SC_Upper),
        (0x018C, 2, SC_Lower),
        (0x018E, 4, SC_Upper),
        (0x0192, 1, SC_Lower),
        (0x0193, 2, SC_Upper),
        (0x0195, 1, SC_Lower),
        (0x0196, 3, SC_Upper),
        (0x0199, 3, SC_Lower),
        (0x019C, 2, SC_Upper),
        (0x019E, 1, SC_Lower),
        (0x019F, 2, SC_Upper),
        (0x01A1, 1, SC_Lower),
        (0x01A2, 1, SC_Upper),
        (0x01A3, 1, SC_Lower),
        (0x01A4, 1, SC_Upper),
        (0x01A5, 1, SC_Lower),
        (0x01A6, 2, SC_Upper),
        (0x01A8, 1, SC_Lower),
        (0x01A9, 1, SC_Upper),
        (0x01AA, 2, SC_Lower),
        (0x01AC, 1, SC_Upper),
        (0x01AD, 1, SC_Lower),
        (0x01AE, 2, SC_Upper),
        (0x01B0, 1, SC_Lower),
        (0x01B1, 3, SC_Upper),
        (0x01B4, 1, SC_Lower),
        (0x01B5, 1, SC_Upper),
        (0x01B6, 1, SC_Lower),
        (0x01B7, 2, SC_Upper),
        (0x01B9, 2, SC_Lower),
        (0x01BB, 1, SC_OLetter),
        (0x01BC, 1, SC_Upper),
        (0x01BD, 3, SC_Lower),
        (0x01C0, 4, SC_OLetter),
        (0x01C4, 2, SC_Upper),
        (0x01C6, 1, SC_Lower),
        (0x01C7, 2, SC_Upper),
        (0x01C9, 1, SC_Lower),
        (0x01CA, 2, SC_Upper),
        (0x01CC, 1, SC_Lower),
        (0x01CD, 1, SC_Upper),
        (0x01CE, 1, SC_Lower),
        (0x01CF, 1, SC_Upper),
        (0x01D0, 1, SC_Lower),
        (0x01D1, 1, SC_Upper),
        (0x01D2, 1, SC_Lower),
        (0x01D3, 1, SC_Upper),
        (0x01D4, 1, SC_Lower),
        (0x01D5, 1, SC_Upper),
        (0x01D6, 1, SC_Lower),
        (0x01D7, 1, SC_Upper),
        (0x01D8, 1, SC_Lower),
        (0x01D9, 1, SC_Upper),
        (0x01DA, 1, SC_Lower),
        (0x01DB, 1, SC_Upper),
        (0x01DC, 2, SC_Lower),
        (0x01DE, 1, SC_Upper),
        (0x01DF, 1, SC_Lower),
        (0x01E0, 1, SC_Upper),
        (0x01E1, 1, SC_Lower),
        (0x01E2, 1, SC_Upper),
        (0x01E3, 1, SC_Lower),
        (0x01E4, 1, SC_Upper),
        (0x01E5, 1, SC_Lower),
        (0x01E6, 1, SC_Upper),
        (0x01E7, 1, SC_Lower),
        (0x01E8, 1, SC_Upper),
        (0x01E9, 1, SC_Lower),
        (0x01EA, 1, SC_Upper),
        (0x01EB, 1, SC_Lower),
        (0x01EC, 1, SC_Upper),
        (0x01ED, 1, SC_Lower),
        (0x01EE, 1, SC_Upper),
        (0x01EF, 2, SC_Lower),
        (0x01F1, 2, SC_Upper),
        (0x01F3, 1, SC_Lower),
        (0x01F4, 1, SC_Upper),
        (0x01F5, 1, SC_Lower),
        (0x01F6, 3, SC_Upper),
        (0x01F9, 1, SC_Lower),
        (0x01FA, 1, SC_Upper),
        (0x01FB, 1, SC_Lower),
        (0x01FC, 1, SC_Upper),
        (0x01FD, 1, SC_Lower),
        (0x01FE, 1, SC_Upper),
        (0x01FF, 1, SC_Lower),
        (0x0200, 1, SC_Upper),
        (0x0201, 1, SC_Lower),
        (0x0202, 1, SC_Upper),
        (0x0203, 1, SC_Lower),
        (0x0204, 1, SC_Upper),
        (0x0205, 1, SC_Lower),
        (0x0206, 1, SC_Upper),
        (0x0207, 1, SC_Lower),
        (0x0208, 1, SC_Upper),
        (0x0209, 1, SC_Lower),
        (0x020A, 1, SC_Upper),
        (0x020B, 1, SC_Lower),
        (0x020C, 1, SC_Upper),
        (0x020D, 1, SC_Lower),
        (0x020E, 1, SC_Upper),
        (0x020F, 1, SC_Lower),
        (0x0210, 1, SC_Upper),
        (0x0211, 1, SC_Lower),
        (0x0212, 1, SC_Upper),
        (0x0213, 1, SC_Lower),
        (0x0214, 1, SC_Upper),
        (0x0215, 1, SC_Lower),
        (0x0216, 1, SC_Upper),
        (0x0217, 1, SC_Lower),
        (0x0218, 1, SC_Upper),
        (0x0219, 1, SC_Lower),
        (0x021A, 1, SC_Upper),
        (0x021B, 1, SC_Lower),
        (0x021C, 1, SC_Upper),
        (0x021D, 1, SC_Lower),
        (0x021E, 1, SC_Upper),
        (0x021F, 1, SC_Lower),
        (0x0220, 1, SC_Upper),
        (0x0221, 1, SC_Lower),
        (0x0222, 1, SC_Upper),
        (0x0223, 1, SC_Lower),
        (0x0224, 1, SC_Upper),
        (0x0225, 1, SC_Lower),
        (0x0226, 1, SC_Upper),
        (0x0227, 1, SC_Lower),
        (0x0228, 1, SC_Upper),
        (0x0229, 1, SC_Lower),
        (0x022A, 1, SC_Upper),
        (0x022B, 1, SC_Lower),
        (0x022C, 1, SC_Upper),
        (0x022D, 1, SC_Lower),
        (0x022E, 1, SC_Upper),
        (0x022F, 1, SC_Lower),
        (0x0230, 1, SC_Upper),
        (0x0231, 1, SC_Lower),
        (0x0232, 1, SC_Upper),
        (0x0233, 7, SC_Lower),
        (0x023A, 2, SC_Upper),
        (0x023C, 1, SC_Lower),
        (0x023D, 2, SC_Upper),
        (0x023F, 2, SC_Lower),
        (0x0241, 1, SC_Upper),
        (0x0242, 1, SC_Lower),
        (0x0243, 4, SC_Upper),
        (0x0247, 1, SC_Lower),
        (0x0248, 1, SC_Upper),
        (0x0249, 1, SC_Lower),
        (0x024A, 1, SC_Upper),
        (0x024B, 1, SC_Lower),
        (0x024C, 1, SC_Upper),
        (0x024D, 1, SC_Lower),
        (0x024E, 1, SC_Upper),
        (0x024F, 69, SC_Lower),
        (0x0294, 1, SC_OLetter),
        (0x0295, 36, SC_Lower),
        (0x02B9, 7, SC_OLetter),
        (0x02C0, 2, SC_Lower),
        (0x02C6, 12, SC_OLetter),
        (0x02E0, 5, SC_Lower),
        (0x02EC, 1, SC_OLetter),
        (0x02EE, 1, SC_OLetter),
        (0x0300, 112, SC_Extend),
        (0x0370, 1, SC_Upper),
        (0x0371, 1, SC_Lower),
        (0x0372, 1, SC_Upper),
        (0x0373, 1, SC_Lower),
        (0x0374, 1, SC_OLetter),
        (0x0376, 1, SC_Upper),
        (0x0377, 1, SC_Lower),
        (0x037A, 4, SC_Lower),
        (0x037F, 1, SC_Upper),
        (0x0386, 1, SC_Upper),
        (0x0388, 3, SC_Upper),
        (0x038C, 1, SC_Upper),
        (0x038E, 2, SC_Upper),
        (0x0390, 1, SC_Lower),
        (0x0391, 17, SC_Upper),
        (0x03A3, 9, SC_Upper),
        (0x03AC, 35, SC_Lower),
        (0x03CF, 1, SC_Upper),
        (0x03D0, 2, SC_Lower),
        (0x03D2, 3, SC_Upper),
        (0x03D5, 3, SC_Lower),
        (0x03D8, 1, SC_Upper),
        (0x03D9, 1, SC_Lower),
        (0x03DA, 1, SC_Upper),
        (0x03DB, 1, SC_Lower),
        (0x03DC, 1, SC_Upper),
        (0x03DD, 1, SC_Lower),
        (0x03DE, 1, SC_Upper),
        (0x03DF, 1, SC_Lower),
        (0x03E0, 1, SC_Upper),
        (0x03E1, 1, SC_Lower),
        (0x03E2, 1, SC_Upper),
        (0x03E3, 1, SC_Lower),
        (0x03E4, 1, SC_Upper),
        (0x03E5, 1, SC_Lower),
        (0x03E6, 1, SC_Upper),
        (0x03E7, 1, SC_Lower),
        (0x03E8, 1, SC_Upper),
        (0x03E9, 1, SC_Lower),
        (0x03EA, 1, SC_Upper),
        (0x03EB, 1, SC_Lower),
        (0x03EC, 1, SC_Upper),
        (0x03ED, 1, SC_Lower),
        (0x03EE, 1, SC_Upper),
        (0x03EF, 5, SC_Lower),
        (0x03F4, 1, SC_Upper),
        (0x03F5, 1, SC_Lower),
        (0x03F7, 1, SC_Upper),
        (0x03F8, 1, SC_Lower),
        (0x03F9, 2, SC_Upper),
        (0x03FB, 2, SC_Lower),
        (0x03FD, 51, SC_Upper),
        (0x0430, 48, SC_Lower),
        (0x0460, 1, SC_Upper),
        (0x0461, 1, SC_Lower),
        (0x0462, 1, SC_Upper),
        (0x0463, 1, SC_Lower),
        (0x0464, 1, SC_Upper),
        (0x0465, 1, SC_Lower),
        (0x0466, 1, SC_Upper),
        (0x0467, 1, SC_Lower),
        (0x0468, 1, SC_Upper),
        (0x0469, 1, SC_Lower),
        (0x046A, 1, SC_Upper),
        (0x046B, 1, SC_Lower),
        (0x046C, 1, SC_Upper),
        (0x046D, 1, SC_Lower),
        (0x046E, 1, SC_Upper),
        (0x046F, 1, SC_Lower),
        (0x0470, 1, SC_Upper),
        (0x0471, 1, SC_Lower),
        (0x0472, 1, SC_Upper),
        (0x0473, 1, SC_Lower),
        (0x0474, 1, SC_Upper),
        (0x0475, 1, SC_Lower),
        (0x0476, 1, SC_Upper),
        (0x0477, 1, SC_Lower),
        (0x0478, 1, SC_Upper),
        (0x0479, 1, SC_Lower),
        (0x047A, 1, SC_Upper),
        (0x047B, 1, SC_Lower),
        (0x047C, 1, SC_Upper),
        (0x047D, 1, SC_Lower),
        (0x047E, 1, SC_Upper),
        (0x047F, 1, SC_Lower),
        (0x0480, 1, SC_Upper),
        (0x0481, 1, SC_Lower),
        (0x0483, 7, SC_Extend),
        (0x048A, 1, SC_Upper),
        (0x048B, 1, SC_Lower),
        (0x048C, 1, SC_Upper),
        (0x048D, 1, SC_Lower),
        (0x048E, 1, SC_Upper),
        (0x048F, 1, SC_Lower),
        (0x0490, 1, SC_Upper),
        (0x0491, 1, SC_Lower),
        (0x0492, 1, SC_Upper),
        (0x0493, 1, SC_Lower),
        (0x0494, 1, SC_Upper),
        (0x0495, 1, SC_Lower),
        (0x0496, 1, SC_Upper),
        (0x0497, 1, SC_Lower),
        (0x0498, 1, SC_Upper),
        (0x0499, 1, SC_Lower),
        (0x049A, 1, SC_Upper),
        (0x049B, 1, SC_Lower),
        (0x049C, 1, SC_Upper),
        (0x049D, 1, SC_Lower),
        (0x049E, 1, SC_Upper),
        (0x049F, 1, SC_Lower),
        (0x04A0, 1, SC_Upper),
        (0x04A1, 1, SC_Lower),
        (0x04A2, 1, SC_Upper),
        (0x04A3, 1, SC_Lower),
        (0x04A4, 1, SC_Upper),
        (0x04A5, 1, SC_Lower),
        (0x04A6, 1, SC_Upper),
        (0x04A7, 1, SC_Lower),
        (0x04A8, 1, SC_Upper),
        (0x04A9, 1, SC_Lower),
        (0x04AA, 1, SC_Upper),
        (0x04AB, 1, SC_Lower),
        (0x04AC, 1, SC_Upper),
        (0x04AD, 1, SC_Lower),
        (0x04AE, 1, SC_Upper),
        (0x04AF, 1, SC_Lower),
        (0x04B0, 1, SC_Upper),
        (0x04B1, 1, SC_Lower),
        (0x04B2, 1, SC_Upper),
        (0x04B3, 1, SC_Lower),
        (0x04B4, 1, SC_Upper),
        (0x04B5, 1, SC_Lower),
        (0x04B6, 1, SC_Upper),
        (0x04B7, 1, SC_Lower),
        (0x04B8, 1, SC_Upper),
        (0x04B9, 1, SC_Lower),
        (0x04BA, 1, SC_Upper),
        (0x04BB, 1, SC_Lower),
        (0x04BC, 1, SC_Upper),
        (0x04BD, 1, SC_Lower),
        (0x04BE, 1, SC_Upper),
        (0x04BF, 1, SC_Lower),
        (0x04C0, 2, SC_Upper),
        (0x04C2, 1, SC_Lower),
        (0x04C3, 1, SC_Upper),
        (0x04C4, 1, SC_Lower),
        (0x04C5, 1, SC_Upper),
        (0x04C6, 1, SC_Lower),
        (0x04C7, 1, SC_Upper),
        (0x04C8, 1, SC_Lower),
        (0x04C9, 1, SC_Upper),
        (0x04CA, 1, SC_Lower),
        (0x04CB, 1, SC_Upper),
        (0x04CC, 1, SC_Lower),
        (0x04CD, 1, SC_Upper),
        (0x04CE, 2, SC_Lower),
        (0x04D0, 1, SC_Upper),
        (0x04D1, 1, SC_Lower),
        (0x04D2, 1, SC_Upper),
        (0x04D3, 1, SC_Lower),
        (0x04D4, 1, SC_Upper),
        (0x04D5, 1, SC_Lower),
        (0x04D6, 1, SC_Upper),
        (0x04D7, 1, SC_Lower),
        (0x04D8, 1, SC_Upper),
        (0x04D9, 1, SC_Lower),
        (0x04DA, 1, SC_Upper),
        (0x04DB, 1, SC_Lower),
        (0x04DC, 1, SC_Upper),
        (0x04DD, 1, SC_Lower),
        (0x04DE, 1, SC_Upper),
        (0x04DF, 1, SC_Lower),
        (0x04E0, 1, SC_Upper),
        (0x04E1, 1, SC_Lower),
        (0x04E2, 1, SC_Upper),
        (0x04E3, 1, SC_Lower),
        (0x04E4, 1, SC_Upper),
        (0x04E5, 1, SC_Lower),
        (0x04E6, 1, SC_Upper),
        (0x04E7, 1, SC_Lower),
        (0x04E8, 1, SC_Upper),
        (0x04E9, 1, SC_Lower),
        (0x04EA, 1, SC_Upper),
        (0x04EB, 1, SC_Lower),
        (0x04EC, 1, SC_Upper),
        (0x04ED, 1, SC_Lower),
        (0x04EE, 1, SC_Upper),
        (0x04EF, 1, SC_Lower),
        (0x04F0, 1, SC_Upper),
        (0x04F1, 1, SC_Lower),
        (0x04F2, 1, SC_Upper),
        (0x04F3, 1, SC_Lower),
        (0x04F4, 1, SC_Upper),
        (0x04F5, 1, SC_Lower),
        (0x04F6, 1, SC_Upper),
        (0x04F7, 1, SC_Lower),
        (0x04F8, 1, SC_Upper),
        (0x04F9, 1, SC_Lower),
        (0x04FA, 1, SC_Upper),
        (0x04FB, 1, SC_Lower),
        (0x04FC, 1, SC_Upper),
        (0x04FD, 1, SC_Lower),
        (0x04FE, 1, SC_Upper),
        (0x04FF, 1, SC_Lower),
        (0x0500, 1, SC_Upper),
        (0x0501, 1, SC_Lower),
        (0x0502, 1, SC_Upper),
        (0x0503, 1, SC_Lower),
        (0x0504, 1, SC_Upper),
        (0x0505, 1, SC_Lower),
        (0x0506, 1, SC_Upper),
        (0x0507, 1, SC_Lower),
        (0x0508, 1, SC_Upper),
        (0x0509, 1, SC_Lower),
        (0x050A, 1, SC_Upper),
        (0x050B, 1, SC_Lower),
        (0x050C, 1, SC_Upper),
        (0x050D, 1, SC_Lower),
        (0x050E, 1, SC_Upper),
        (0x050F, 1, SC_Lower),
        (0x0510, 1, SC_Upper),
        (0x0511, 1, SC_Lower),
        (0x0512, 1, SC_Upper),
        (0x0513, 1, SC_Lower),
        (0x0514, 1, SC_Upper),
        (0x0515, 1, SC_Lower),
        (0x0516, 1, SC_Upper),
        (0x0517, 1, SC_Lower),
        (0x0518, 1, SC_Upper),
        (0x0519, 1, SC_Lower),
        (0x051A, 1, SC_Upper),
        (0x051B, 1, SC_Lower),
        (0x051C, 1, SC_Upper),
        (0x051D, 1, SC_Lower),
        (0x051E, 1, SC_Upper),
        (0x051F, 1, SC_Lower),
        (0x0520, 1, SC_Upper),
        (0x0521, 1, SC_Lower),
        (0x0522, 1, SC_Upper),
        (0x0523, 1, SC_Lower),
        (0x0524, 1, SC_Upper),
        (0x0525, 1, SC_Lower),
        (0x0526, 1, SC_Upper),
        (0x0527, 1, SC_Lower),
        (0x0528, 1, SC_Upper),
        (0x0529, 1, SC_Lower),
        (0x052A, 1, SC_Upper),
        (0x052B, 1, SC_Lower),
        (0x052C, 1, SC_Upper),
        (0x052D, 1, SC_Lower),
        (0x052E, 1, SC_Upper),
        (0x052F, 1, SC_Lower),
        (0x0531, 38, SC_Upper),
        (0x0559, 1, SC_OLetter),
        (0x055D, 1, SC_SContinue),
        (0x0560, 41, SC_Lower),
        (0x0589, 1, SC_STerm),
        (0x0591, 45, SC_Extend),
        (0x05BF, 1, SC_Extend),
        (0x05C1, 2, SC_Extend),
        (0x05C4, 2, SC_Extend),
        (0x05C7, 1, SC_Extend),
        (0x05D0, 27, SC_OLetter),
        (0x05EF, 5, SC_OLetter),
        (0x0600, 6, SC_Format),
        (0x060C, 2, SC_SContinue),
        (0x0610, 11, SC_Extend),
        (0x061C, 1, SC_Format),
        (0x061D, 3, SC_STerm),
        (0x0620, 43, SC_OLetter),
        (0x064B, 21, SC_Extend),
        (0x0660, 10, SC_Numeric),
        (0x066B, 2, SC_Numeric),
        (0x066E, 2, SC_OLetter),
        (0x0670, 1, SC_Extend),
        (0x0671, 99, SC_OLetter),
        (0x06D4, 1, SC_STerm),
        (0x06D5, 1, SC_OLetter),
        (0x06D6, 7, SC_Extend),
        (0x06DD, 1, SC_Format),
        (0x06DF, 6, SC_Extend),
        (0x06E5, 2, SC_OLetter),
        (0x06E7, 2, SC_Extend),
        (0x06EA, 4, SC_Extend),
        (0x06EE, 2, SC_OLetter),
        (0x06F0, 10, SC_Numeric),
        (0x06FA, 3, SC_OLetter),
        (0x06FF, 1, SC_OLetter),
        (0x0700, 3, SC_STerm),
        (0x070F, 1, SC_Format),
        (0x0710, 1, SC_OLetter),
        (0x0711, 1, SC_Extend),
        (0x0712, 30, SC_OLetter),
        (0x0730, 27, SC_Extend),
        (0x074D, 89, SC_OLetter),
        (0x07A6, 11, SC_Extend),
        (0x07B1, 1, SC_OLetter),
        (0x07C0, 10, SC_Numeric),
        (0x07CA, 33, SC_OLetter),
        (0x07EB, 9, SC_Extend),
        (0x07F4, 2, SC_OLetter),
        (0x07F8, 1, SC_SContinue),
        (0x07F9, 1, SC_STerm),
        (0x07FA, 1, SC_OLetter),
        (0x07FD, 1, SC_Extend),
        (0x0800, 22, SC_OLetter),
        (0x0816, 4, SC_Extend),
        (0x081A, 1, SC_OLetter),
        (0x081B, 9, SC_Extend),
        (0x0824, 1, SC_OLetter),
        (0x0825, 3, SC_Extend),
        (0x0828, 1, SC_OLetter),
        (0x0829, 5, SC_Extend),
        (0x0837, 1, SC_STerm),
        (0x0839, 1, SC_STerm),
        (0x083D, 2, SC_STerm),
        (0x0840, 25, SC_OLetter),
        (0x0859, 3, SC_Extend),
        (0x0860, 11, SC_OLetter),
        (0x0870, 24, SC_OLetter),
        (0x0889, 6, SC_OLetter),
        (0x0890, 2, SC_Format),
        (0x0898, 8, SC_Extend),
        (0x08A0, 42, SC_OLetter),
        (0x08CA, 24, SC_Extend),
        (0x08E2, 1, SC_Format),
        (0x08E3, 33, SC_Extend),
        (0x0904, 54, SC_OLetter),
        (0x093A, 3, SC_Extend),
        (0x093D, 1, SC_OLetter),
        (0x093E, 18, SC_Extend),
        (0x0950, 1, SC_OLetter),
        (0x0951, 7, SC_Extend),
        (0x0958, 10, SC_OLetter),
        (0x0962, 2, SC_Extend),
        (0x0964, 2, SC_STerm),
        (0x0966, 10, SC_Numeric),
        (0x0971, 16, SC_OLetter),
        (0x0981, 3, SC_Extend),
        (0x0985, 8, SC_OLetter),
        (0x098F, 2, SC_OLetter),
        (0x0993, 22, SC_OLetter),
        (0x09AA, 7, SC_OLetter),
        (0x09B2, 1, SC_OLetter),
        (0x09B6, 4, SC_OLetter),
        (0x09BC, 1, SC_Extend),
        (0x09BD, 1, SC_OLetter),
        (0x09BE, 7, SC_Extend),
        (0x09C7, 2, SC_Extend),
        (0x09CB, 3, SC_Extend),
        (0x09CE, 1, SC_OLetter),
        (0x09D7, 1, SC_Extend),
        (0x09DC, 2, SC_OLetter),
        (0x09DF, 3, SC_OLetter),
        (0x09E2, 2, SC_Extend),
        (0x09E6, 10, SC_Numeric),
        (0x09F0, 2, SC_OLetter),
        (0x09FC, 1, SC_OLetter),
        (0x09FE, 1, SC_Extend),
        (0x0A01, 3, SC_Extend),
        (0x0A05, 6, SC_OLetter),
        (0x0A0F, 2, SC_OLetter),
        (0x0A13, 22, SC_OLetter),
        (0x0A2A, 7, SC_OLetter),
        (0x0A32, 2, SC_OLetter),
        (0x0A35, 2, SC_OLetter),
        (0x0A38, 2, SC_OLetter),
        (0x0A3C, 1, SC_Extend),
        (0x0A3E, 5, SC_Extend),
        (0x0A47, 2, SC_Extend),
        (0x0A4B, 3, SC_Extend),
        (0x0A51, 1, SC_Extend),
        (0x0A59, 4, SC_OLetter),
        (0x0A5E, 1, SC_OLetter),
        (0x0A66, 10, SC_Numeric),
        (0x0A70, 2, SC_Extend),
        (0x0A72, 3, SC_OLetter),
        (0x0A75, 1, SC_Extend),
        (0x0A81, 3, SC_Extend),
        (0x0A85, 9, SC_OLetter),
        (0x0A8F, 3, SC_OLetter),
        (0x0A93, 22, SC_OLetter),
        (0x0AAA, 7, SC_OLetter),
        (0x0AB2, 2, SC_OLetter),
        (0x0AB5, 5, SC_OLetter),
        (0x0ABC, 1, SC_Extend),
        (0x0ABD, 1, SC_OLetter),
        (0x0ABE, 8, SC_Extend),
        (0x0AC7, 3, SC_Extend),
        (0x0ACB, 3, SC_Extend),
        (0x0AD0, 1, SC_OLetter),
        (0x0AE0, 2, SC_OLetter),
        (0x0AE2, 2, SC_Extend),
        (0x0AE6, 10, SC_Numeric),
        (0x0AF9, 1, SC_OLetter),
        (0x0AFA, 6, SC_Extend),
        (0x0B01, 3, SC_Extend),
        (0x0B05, 8, SC_OLetter),
        (0x0B0F, 2, SC_OLetter),
        (0x0B13, 22, SC_OLetter),
        (0x0B2A, 7, SC_OLetter),
        (0x0B32, 2, SC_OLetter),
        (0x0B35, 5, SC_OLetter),
        (0x0B3C, 1, SC_Extend),
        (0x0B3D, 1, SC_OLetter),
        (0x0B3E, 7, SC_Extend),
        (0x0B47, 2, SC_Extend),
        (0x0B4B, 3, SC_Extend),
        (0x0B55, 3, SC_Extend),
        (0x0B5C, 2, SC_OLetter),
        (0x0B5F, 3, SC_OLetter),
        (0x0B62, 2, SC_Extend),
        (0x0B66, 10, SC_Numeric),
        (0x0B71, 1, SC_OLetter),
        (0x0B82, 1, SC_Extend),
        (0x0B83, 1, SC_OLetter),
        (0x0B85, 6, SC_OLetter),
        (0x0B8E, 3, SC_OLetter),
        (0x0B92, 4, SC_OLetter),
        (0x0B99, 2, SC_OLetter),
        (0x0B9C, 1, SC_OLetter),
        (0x0B9E, 2, SC_OLetter),
        (0x0BA3, 2, SC_OLetter),
        (0x0BA8, 3, SC_OLetter),
        (0x0BAE, 12, SC_OLetter),
        (0x0BBE, 5, SC_Extend),
        (0x0BC6, 3, SC_Extend),
        (0x0BCA, 4, SC_Extend),
        (0x0BD0, 1, SC_OLetter),
        (0x0BD7, 1, SC_Extend),
        (0x0BE6, 10, SC_Numeric),
        (0x0C00, 5, SC_Extend),
        (0x0C05, 8, SC_OLetter),
        (0x0C0E, 3, SC_OLetter),
        (0x0C12, 23, SC_OLetter),
        (0x0C2A, 16, SC_OLetter),
        (0x0C3C, 1, SC_Extend),
        (0x0C3D, 1, SC_OLetter),
        (0x0C3E, 7, SC_Extend),
        (0x0C46, 3, SC_Extend),
        (0x0C4A, 4, SC_Extend),
        (0x0C55, 2, SC_Extend),
        (0x0C58, 3, SC_OLetter),
        (0x0C5D, 1, SC_OLetter),
        (0x0C60, 2, SC_OLetter),
        (0x0C62, 2, SC_Extend),
        (0x0C66, 10, SC_Numeric),
        (0x0C80, 1, SC_OLetter),
        (0x0C81, 3, SC_Extend),
        (0x0C85, 8, SC_OLetter),
        (0x0C8E, 3, SC_OLetter),
        (0x0C92, 23, SC_OLetter),
        (0x0CAA, 10, SC_OLetter),
        (0x0CB5, 5, SC_OLetter),
        (0x0CBC, 1, SC_Extend),
        (0x0CBD, 1, SC_OLetter),
        (0x0CBE, 7, SC_Extend),
        (0x0CC6, 3, SC_Extend),
        (0x0CCA, 4, SC_Extend),
        (0x0CD5, 2, SC_Extend),
        (0x0CDD, 2, SC_OLetter),
        (0x0CE0, 2, SC_OLetter),
        (0x0CE2, 2, SC_Extend),
        (0x0CE6, 10, SC_Numeric),
        (0x0CF1, 2, SC_OLetter),
        (0x0D00, 4, SC_Extend),
        (0x0D04, 9, SC_OLetter),
        (0x0D0E, 3, SC_OLetter),
        (0x0D12, 41, SC_OLetter),
        (0x0D3B, 2, SC_Extend),
        (0x0D3D, 1, SC_OLetter),
        (0x0D3E, 7, SC_Extend),
        (0x0D46, 3, SC_Extend),
        (0x0D4A, 4, SC_Extend),
        (0x0D4E, 1, SC_OLetter),
        (0x0D54, 3, SC_OLetter),
        (0x0D57, 1, SC_Extend),
        (0x0D5F, 3, SC_OLetter),
        (0x0D62, 2, SC_Extend),
        (0x0D66, 10, SC_Numeric),
        (0x0D7A, 6, SC_OLetter),
        (0x0D81, 3, SC_Extend),
        (0x0D85, 18, SC_OLetter),
        (0x0D9A, 24, SC_OLetter),
        (0x0DB3, 9, SC_OLetter),
        (0x0DBD, 1, SC_OLetter),
        (0x0DC0, 7, SC_OLetter),
        (0x0DCA, 1, SC_Extend),
        (0x0DCF, 6, SC_Extend),
        (0x0DD6, 1, SC_Extend),
        (0x0DD8, 8, SC_Extend),
        (0x0DE6, 10, SC_Numeric),
        (0x0DF2, 2, SC_Extend),
        (0x0E01, 48, SC_OLetter),
        (0x0E31, 1, SC_Extend),
        (0x0E32, 2, SC_OLetter),
        (0x0E34, 7, SC_Extend),
        (0x0E40, 7, SC_OLetter),
        (0x0E47, 8, SC_Extend),
        (0x0E50, 10, SC_Numeric),
        (0x0E81, 2, SC_OLetter),
        (0x0E84, 1, SC_OLetter),
        (0x0E86, 5, SC_OLetter),
        (0x0E8C, 24, SC_OLetter),
        (0x0EA5, 1, SC_OLetter),
        (0x0EA7, 10, SC_OLetter),
        (0x0EB1, 1, SC_Extend),
        (0x0EB2, 2, SC_OLetter),
        (0x0EB4, 9, SC_Extend),
        (0x0EBD, 1, SC_OLetter),
        (0x0EC0, 5, SC_OLetter),
        (0x0EC6, 1, SC_OLetter),
        (0x0EC8, 6, SC_Extend),
        (0x0ED0, 10, SC_Numeric),
        (0x0EDC, 4, SC_OLetter),
        (0x0F00, 1, SC_OLetter),
        (0x0F18, 2, SC_Extend),
        (0x0F20, 10, SC_Numeric),
        (0x0F35, 1, SC_Extend),
        (0x0F37, 1, SC_Extend),
        (0x0F39, 1, SC_Extend),
        (0x0F3A, 4, SC_Close),
        (0x0F3E, 2, SC_Extend),
        (0x0F40, 8, SC_OLetter),
        (0x0F49, 36, SC_OLetter),
        (0x0F71, 20, SC_Extend),
        (0x0F86, 2, SC_Extend),
        (0x0F88, 5, SC_OLetter),
        (0x0F8D, 11, SC_Extend),
        (0x0F99, 36, SC_Extend),
        (0x0FC6, 1, SC_Extend),
        (0x1000, 43, SC_OLetter),
        (0x102B, 20, SC_Extend),
        (0x103F, 1, SC_OLetter),
        (0x1040, 10, SC_Numeric),
        (0x104A, 2, SC_STerm),
        (0x1050, 6, SC_OLetter),
        (0x1056, 4, SC_Extend),
        (0x105A, 4, SC_OLetter),
        (0x105E, 3, SC_Extend),
        (0x1061, 1, SC_OLetter),
        (0x1062, 3, SC_Extend),
        (0x1065, 2, SC_OLetter),
        (0x1067, 7, SC_Extend),
        (0x106E, 3, SC_OLetter),
        (0x1071, 4, SC_Extend),
        (0x1075, 13, SC_OLetter),
        (0x1082, 12, SC_Extend),
        (0x108E, 1, SC_OLetter),
        (0x108F, 1, SC_Extend),
        (0x1090, 10, SC_Numeric),
        (0x109A, 4, SC_Extend),
        (0x10A0, 38, SC_Upper),
        (0x10C7, 1, SC_Upper),
        (0x10CD, 1, SC_Upper),
        (0x10D0, 43, SC_OLetter),
        (0x10FC, 333, SC_OLetter),
        (0x124A, 4, SC_OLetter),
        (0x1250, 7, SC_OLetter),
        (0x1258, 1, SC_OLetter),
        (0x125A, 4, SC_OLetter),
        (0x1260, 41, SC_OLetter),
        (0x128A, 4, SC_OLetter),
        (0x1290, 33, SC_OLetter),
        (0x12B2, 4, SC_OLetter),
        (0x12B8, 7, SC_OLetter),
        (0x12C0, 1, SC_OLetter),
        (0x12C2, 4, SC_OLetter),
        (0x12C8, 15, SC_OLetter),
        (0x12D8, 57, SC_OLetter),
        (0x1312, 4, SC_OLetter),
        (0x1318, 67, SC_OLetter),
        (0x135D, 3, SC_Extend),
        (0x1362, 1, SC_STerm),
        (0x1367, 2, SC_STerm),
        (0x1380, 16, SC_OLetter),
        (0x13A0, 86, SC_Upper),
        (0x13F8, 6, SC_Lower),
        (0x1401, 620, SC_OLetter),
        (0x166E, 1, SC_STerm),
        (0x166F, 17, SC_OLetter),
        (0x1680, 1, SC_Sp),
        (0x1681, 26, SC_OLetter),
        (0x169B, 2, SC_Close),
        (0x16A0, 75, SC_OLetter),
        (0x16EE, 11, SC_OLetter),
        (0x1700, 18, SC_OLetter),
        (0x1712, 4, SC_Extend),
        (0x171F, 19, SC_OLetter),
        (0x1732, 3, SC_Extend),
        (0x1735, 2, SC_STerm),
        (0x1740, 18, SC_OLetter),
        (0x1752, 2, SC_Extend),
        (0x1760, 13, SC_OLetter),
        (0x176E, 3, SC_OLetter),
        (0x1772, 2, SC_Extend),
        (0x1780, 52, SC_OLetter),
        (0x17B4, 32, SC_Extend),
        (0x17D7, 1, SC_OLetter),
        (0x17DC, 1, SC_OLetter),
        (0x17DD, 1, SC_Extend),
        (0x17E0, 10, SC_Numeric),
        (0x1802, 1, SC_SContinue),
        (0x1803, 1, SC_STerm),
        (0x1808, 1, SC_SContinue),
        (0x1809, 1, SC_STerm),
        (0x180B, 3, SC_Extend),
        (0x180E, 1, SC_Format),
        (0x180F, 1, SC_Extend),
        (0x1810, 10, SC_Numeric),
        (0x1820, 89, SC_OLetter),
        (0x1880, 5, SC_OLetter),
        (0x1885, 2, SC_Extend),
        (0x1887, 34, SC_OLetter),
        (0x18A9, 1, SC_Extend),
        (0x18AA, 1, SC_OLetter),
        (0x18B0, 70, SC_OLetter),
        (0x1900, 31, SC_OLetter),
        (0x1920, 12, SC_Extend),
        (0x1930, 12, SC_Extend),
        (0x1944, 2, SC_STerm),
        (0x1946, 10, SC_Numeric),
        (0x1950, 30, SC_OLetter),
        (0x1970, 5, SC_OLetter),
        (0x1980, 44, SC_OLetter),
        (0x19B0, 26, SC_OLetter),
        (0x19D0, 10, SC_Numeric),
        (0x1A00, 23, SC_OLetter),
        (0x1A17, 5, SC_Extend),
        (0x1A20, 53, SC_OLetter),
        (0x1A55, 10, SC_Extend),
        (0x1A60, 29, SC_Extend),
        (0x1A7F, 1, SC_Extend),
        (0x1A80, 10, SC_Numeric),
        (0x1A90, 10, SC_Numeric),
        (0x1AA7, 1, SC_OLetter),
        (0x1AA8, 4, SC_STerm),
        (0x1AB0, 31, SC_Extend),
        (0x1B00, 5, SC_Extend),
        (0x1B05, 47, SC_OLetter),
        (0x1B34, 17, SC_Extend),
        (0x1B45, 8, SC_OLetter),
        (0x1B50, 10, SC_Numeric),
        (0x1B5A, 2, SC_STerm),
        (0x1B5E, 2, SC_STerm),
        (0x1B6B, 9, SC_Extend),
        (0x1B7D, 2, SC_STerm),
        (0x1B80, 3, SC_Extend),
        (0x1B83, 30, SC_OLetter),
        (0x1BA1, 13, SC_Extend),
        (0x1BAE, 2, SC_OLetter),
        (0x1BB0, 10, SC_Numeric),
        (0x1BBA, 44, SC_OLetter),
        (0x1BE6, 14, SC_Extend),
        (0x1C00, 36, SC_OLetter),
        (0x1C24, 20, SC_Extend),
        (0x1C3B, 2, SC_STerm),
        (0x1C40, 10, SC_Numeric),
        (0x1C4D, 3, SC_OLetter),
        (0x1C50, 10, SC_Numeric),
        (0x1C5A, 36, SC_OLetter),
        (0x1C7E, 2, SC_STerm),
        (0x1C80, 9, SC_Lower),
        (0x1C90, 43, SC_OLetter),
        (0x1CBD, 3, SC_OLetter),
        (0x1CD0, 3, SC_Extend),
        (0x1CD4, 21, SC_Extend),
        (0x1CE9, 4, SC_OLetter),
        (0x1CED, 1, SC_Extend),
        (0x1CEE, 6, SC_OLetter),
        (0x1CF4, 1, SC_Extend),
        (0x1CF5, 2, SC_OLetter),
        (0x1CF7, 3, SC_Extend),
        (0x1CFA, 1, SC_OLetter),
        (0x1D00, 192, SC_Lower),
        (0x1DC0, 64, SC_Extend),
        (0x1E00, 1, SC_Upper),
        (0x1E01, 1, SC_Lower),
        (0x1E02, 1, SC_Upper),
        (0x1E03, 1, SC_Lower),
        (0x1E04, 1, SC_Upper),
        (0x1E05, 1, SC_Lower),
        (0x1E06, 1, SC_Upper),
        (0x1E07, 1, SC_Lower),
        (0x1E08, 1, SC_Upper),
        (0x1E09, 1, SC_Lower),
        (0x1E0A, 1, SC_Upper),
        (0x1E0B, 1, SC_Lower),
        (0x1E0C, 1, SC_Upper),
        (0x1E0D, 1, SC_Lower),
        (0x1E0E, 1, SC_Upper),
        (0x1E0F, 1, SC_Lower),
        (0x1E10, 1, SC_Upper),
        (0x1E11, 1, SC_Lower),
        (0x1E12, 1, SC_Upper),
        (0x1E13, 1, SC_Lower),
        (0x1E14, 1, SC_Upper),
        (0x1E15, 1, SC_Lower),
        (0x1E16, 1, SC_Upper),
        (0x1E17, 1, SC_Lower),
        (0x1E18, 1, SC_Upper),
        (0x1E19, 1, SC_Lower),
        (0x1E1A, 1, SC_Upper),
        (0x1E1B, 1, SC_Lower),
        (0x1E1C, 1, SC_Upper),
        (0x1E1D, 1, SC_Lower),
        (0x1E1E, 1, SC_Upper),
        (0x1E1F, 1, SC_Lower),
        (0x1E20, 1, SC_Upper),
        (0x1E21, 1, SC_Lower),
        (0x1E22, 1, SC_Upper),
        (0x1E23, 1, SC_Lower),
        (0x1E24, 1, SC_Upper),
        (0x1E25, 1, SC_Lower),
        (0x1E26, 1, SC_Upper),
        (0x1E27, 1, SC_Lower),
        (0x1E28, 1, SC_Upper),
        (0x1E29, 1, SC_Lower),
        (0x1E2A, 1, SC_Upper),
        (0x1E2B, 1, SC_Lower),
        (0x1E2C, 1, SC_Upper),
        (0x1E2D, 1, SC_Lower),
        (0x1E2E, 1, SC_Upper),
        (0x1E2F, 1, SC_Lower),
        (0x1E30, 1, SC_Upper),
        (0x1E31, 1, SC_Lower),
        (0x1E32, 1, SC_Upper),
        (0x1E33, 1, SC_Lower),
        (0x1E34, 1, SC_Upper),
        (0x1E35, 1, SC_Lower),
        (0x1E36, 1, SC_Upper),
        (0x1E37, 1, SC_Lower),
        (0x1E38, 1, SC_Upper),
        (0x1E39, 1, SC_Lower),
        (0x1E3A, 1, SC_Upper),
        (0x1E3B, 1, SC_Lower),
        (0x1E3C, 1, SC_Upper),
        (0x1E3D, 1, SC_Lower),
        (0x1E3E, 1, SC_Upper),
        (0x1E3F, 1, SC_Lower),
        (0x1E40, 1, SC_Upper),
        (0x1E41, 1, SC_Lower),
        (0x1E42, 1, SC_Upper),
        (0x1E43, 1, SC_Lower),
        (0x1E44, 1, SC_Upper),
        (0x1E45, 1, SC_Lower),
        (0x1E46, 1, SC_Upper),
        (0x1E47, 1, SC_Lower),
        (0x1E48, 1, SC_Upper),
        (0x1E49, 1, SC_Lower),
        (0x1E4A, 1, SC_Upper),
        (0x1E4B, 1, SC_Lower),
        (0x1E4C, 1, SC_Upper),
        (0x1E4D, 1, SC_Lower),
        (0x1E4E, 1, SC_Upper),
        (0x1E4F, 1, SC_Lower),
        (0x1E50, 1, SC_Upper),
        (0x1E51, 1, SC_Lower),
        (0x1E52, 1, SC_Upper),
        (0x1E53, 1, SC_Lower),
        (0x1E54, 1, SC_Upper),
        (0x1E55, 1, SC_Lower),
        (0x1E56, 1, SC_Upper),
        (0x1E57, 1, SC_Lower),
        (0x1E58, 1, SC_Upper),
        (0x1E59, 1, SC_Lower),
        (0x1E5A, 1, SC_Upper),
        (0x1E5B, 1, SC_Lower),
        (0x1E5C, 1, SC_Upper),
        (0x1E5D, 1, SC_Lower),
        (0x1E5E, 1, SC_Upper),
        (0x1E5F, 1, SC_Lower),
        (0x1E60, 1, SC_Upper),
        (0x1E61, 1, SC_Lower),
        (0x1E62, 1, SC_Upper),
        (0x1E63, 1, SC_Lower),
        (0x1E64, 1, SC_Upper),
        (0x1E65, 1, SC_Lower),
        (0x1E66, 1, SC_Upper),
        (0x1E67, 1, SC_Lower),
        (0x1E68, 1, SC_Upper),
        (0x1E69, 1, SC_Lower),
        (0x1E6A, 1, SC_Upper),
        (0x1E6B, 1, SC_Lower),
        (0x1E6C, 1, SC_Upper),
        (0x1E6D, 1, SC_Lower),
        (0x1E6E, 1, SC_Upper),
        (0x1E6F, 1, SC_Lower),
        (0x1E70, 1, SC_Upper),
        (0x1E71, 1, SC_Lower),
        (0x1E72, 1, SC_Upper),
        (0x1E73, 1, SC_Lower),
        (0x1E74, 1, SC_Upper),
        (0x1E75, 1, SC_Lower),
        (0x1E76, 1, SC_Upper),
        (0x1E77, 1, SC_Lower),
        (0x1E78, 1, SC_Upper),
        (0x1E79, 1, SC_Lower),
        (0x1E7A, 1, SC_Upper),
        (0x1E7B, 1, SC_Lower),
        (0x1E7C, 1, SC_Upper),
        (0x1E7D, 1, SC_Lower),
        (0x1E7E, 1, SC_Upper),
        (0x1E7F, 1, SC_Lower),
        (0x1E80, 1, SC_Upper),
        (0x1E81, 1, SC_Lower),
        (0x1E82, 1, SC_Upper),
        (0x1E83, 1, SC_Lower),
        (0x1E84, 1, SC_Upper),
        (0x1E85, 1, SC_Lower),
        (0x1E86, 1, SC_Upper),
        (0x1E87, 1, SC_Lower),
        (0x1E88, 1, SC_Upper),
        (0x1E89, 1, SC_Lower),
        (0x1E8A, 1, SC_Upper),
        (0x1E8B, 1, SC_Lower),
        (0x1E8C, 1, SC_Upper),
        (0x1E8D, 1, SC_Lower),
        (0x1E8E, 1, SC_Upper),
        (0x1E8F, 1, SC_Lower),
        (0x1E90, 1, SC_Upper),
        (0x1E91, 1, SC_Lower),
        (0x1E92, 1, SC_Upper),
        (0x1E93, 1, SC_Lower),
        (0x1E94, 1, SC_Upper),
        (0x1E95, 9, SC_Lower),
        (0x1E9E, 1, SC_Upper),
        (0x1E9F, 1, SC_Lower),
        (0x1EA0, 1, SC_Upper),
        (0x1EA1, 1, SC_Lower),
        (0x1EA2, 1, SC_Upper),
        (0x1EA3, 1, SC_Lower),
        (0x1EA4, 1, SC_Upper),
        (0x1EA5, 1, SC_Lower),
        (0x1EA6, 1, SC_Upper),
        (0x1EA7, 1, SC_Lower),
        (0x1EA8, 1, SC_Upper),
        (0x1EA9, 1, SC_Lower),
        (0x1EAA, 1, SC_Upper),
        (0x1EAB, 1, SC_Lower),
        (0x1EAC, 1, SC_Upper),
        (0x1EAD, 1, SC_Lower),
        (0x1EAE, 1, SC_Upper),
        (0x1EAF, 1, SC_Lower),
        (0x1EB0, 1, SC_Upper),
        (0x1EB1, 1, SC_Lower),
        (0x1EB2, 1, SC_Upper),
        (0x1EB3, 1, SC_Lower),
        (0x1EB4, 1, SC_Upper),
        (0x1EB5, 1, SC_Lower),
        (0x1EB6, 1, SC_Upper),
        (0x1EB7, 1, SC_Lower),
        (0x1EB8, 1, SC_Upper),
        (0x1EB9, 1, SC_Lower),
        (0x1EBA, 1, SC_Upper),
        (0x1EBB, 1, SC_Lower),
        (0x1EBC, 1, SC_Upper),
        (0x1EBD, 1, SC_Lower),
        (0x1EBE, 1, SC_Upper),
        (0x1EBF, 1, SC_Lower),
        (0x1EC0, 1, SC_Upper),
        (0x1EC1, 1, SC_Lower),
        (0x1EC2, 1, SC_Upper),
        (0x1EC3, 1, SC_Lower),
        (0x1EC4, 1, SC_Upper),
        (0x1EC5, 1, SC_Lower),
        (0x1EC6, 1, SC_Upper),
        (0x1EC7, 1, SC_Lower),
        (0x1EC8, 1, SC_Upper),
        (0x1EC9, 1, SC_Lower),
        (0x1ECA, 1, SC_Upper),
        (0x1ECB, 1, SC_Lower),
        (0x1ECC, 1, SC_Upper),
        (0x1ECD, 1, SC_Lower),
        (0x1ECE, 1, SC_Upper),
        (0x1ECF, 1, SC_Lower),
        (0x1ED0, 1, SC_Upper),
        (0x1ED1, 1, SC_Lower),
        (0x1ED2, 1, SC_Upper),
        (0x1ED3, 1, SC_Lower),
        (0x1ED4, 1, SC_Upper),
        (0x1ED5, 1, SC_Lower),
        (0x1ED6, 1, SC_Upper),
        (0x1ED7, 1, SC_Lower),
        (0x1ED8, 1, SC_Upper),
        (0x1ED9, 1, SC_Lower),
        (0x1EDA, 1, SC_Upper),
        (0x1EDB, 1, SC_Lower),
        (0x1EDC, 1, SC_Upper),
        (0x1EDD, 1, SC_Lower),
        (0x1EDE, 1, SC_Upper),
        (0x1EDF, 1, SC_Lower),
        (0x1EE0, 1, SC_Upper),
        (0x1EE1, 1, SC_Lower),
        (0x1EE2, 1, SC_Upper),
        (0x1EE3, 1, SC_Lower),
        (0x1EE4, 1, SC_Upper),
        (0x1EE5, 1, SC_Lower),
        (0x1EE6, 1, SC_Upper),
        (0x1EE7, 1, SC_Lower),
        (0x1EE8, 1, SC_Upper),
        (0x1EE9, 1, SC_Lower),
        (0x1EEA, 1, SC_Upper),
        (0x1EEB, 1, SC_Lower),
        (0x1EEC, 1, SC_Upper),
        (0x1EED, 1, SC_Lower),
        (0x1EEE, 1, SC_Upper),
        (0x1EEF, 1, SC_Lower),
        (0x1EF0, 1, SC_Upper),
        (0x1EF1, 1, SC_Lower),
        (0x1EF2, 1, SC_Upper),
        (0x1EF3, 1, SC_Lower),
        (0x1EF4, 1, SC_Upper),
        (0x1EF5, 1, SC_Lower),
        (0x1EF6, 1, SC_Upper),
        (0x1EF7, 1, SC_Lower),
        (0x1EF8, 1, SC_Upper),
        (0x1EF9, 1, SC_Lower),
        (0x1EFA, 1, SC_Upper),
        (0x1EFB, 1, SC_Lower),
        (0x1EFC, 1, SC_Upper),
        (0x1EFD, 1, SC_Lower),
        (0x1EFE, 1, SC_Upper),
        (0x1EFF, 9, SC_Lower),
        (0x1F08, 8, SC_Upper),
        (0x1F10, 6, SC_Lower),
        (0x1F18, 6, SC_Upper),
        (0x1F20, 8, SC_Lower),
        (0x1F28, 8, SC_Upper),
        (0x1F30, 8, SC_Lower),
        (0x1F38, 8, SC_Upper),
        (0x1F40, 6, SC_Lower),
        (0x1F48, 6, SC_Upper),
        (0x1F50, 8, SC_Lower),
        (0x1F59, 1, SC_Upper),
        (0x1F5B, 1, SC_Upper),
        (0x1F5D, 1, SC_Upper),
        (0x1F5F, 1, SC_Upper),
        (0x1F60, 8, SC_Lower),
        (0x1F68, 8, SC_Upper),
        (0x1F70, 14, SC_Lower),
        (0x1F80, 8, SC_Lower),
        (0x1F88, 8, SC_Upper),
        (0x1F90, 8, SC_Lower),
        (0x1F98, 8, SC_Upper),
        (0x1FA0, 8, SC_Lower),
        (0x1FA8, 8, SC_Upper),
        (0x1FB0, 5, SC_Lower),
        (0x1FB6, 2, SC_Lower),
        (0x1FB8, 5, SC_Upper),
        (0x1FBE, 1, SC_Lower),
        (0x1FC2, 3, SC_Lower),
        (0x1FC6, 2, SC_Lower),
        (0x1FC8, 5, SC_Upper),
        (0x1FD0, 4, SC_Lower),
        (0x1FD6, 2, SC_Lower),
        (0x1FD8, 4, SC_Upper),
        (0x1FE0, 8, SC_Lower),
        (0x1FE8, 5, SC_Upper),
        (0x1FF2, 3, SC_Lower),
        (0x1FF6, 2, SC_Lower),
        (0x1FF8, 5, SC_Upper),
        (0x2000, 11, SC_Sp),
        (0x200B, 1, SC_Format),
        (0x200C, 2, SC_Extend),
        (0x200E, 2, SC_Format),
        (0x2013, 2, SC_SContinue),
        (0x2018, 8, SC_Close),
        (0x2024, 1, SC_ATerm),
        (0x2028, 2, SC_Sep),
        (0x202A, 5, SC_Format),
        (0x202F, 1, SC_Sp),
        (0x2039, 2, SC_Close),
        (0x203C, 2, SC_STerm),
        (0x2045, 2, SC_Close),
        (0x2047, 3, SC_STerm),
        (0x205F, 1, SC_Sp),
        (0x2060, 5, SC_Format),
        (0x2066, 10, SC_Format),
        (0x2071, 1, SC_Lower),
        (0x207D, 2, SC_Close),
        (0x207F, 1, SC_Lower),
        (0x208D, 2, SC_Close),
        (0x2090, 13, SC_Lower),
        (0x20D0, 33, SC_Extend),
        (0x2102, 1, SC_Upper),
        (0x2107, 1, SC_Upper),
        (0x210A, 1, SC_Lower),
        (0x210B, 3, SC_Upper),
        (0x210E, 2, SC_Lower),
        (0x2110, 3, SC_Upper),
        (0x2113, 1, SC_Lower),
        (0x2115, 1, SC_Upper),
        (0x2119, 5, SC_Upper),
        (0x2124, 1, SC_Upper),
        (0x2126, 1, SC_Upper),
        (0x2128, 1, SC_Upper),
        (0x212A, 4, SC_Upper),
        (0x212F, 1, SC_Lower),
        (0x2130, 4, SC_Upper),
        (0x2134, 1, SC_Lower),
        (0x2135, 4, SC_OLetter),
        (0x2139, 1, SC_Lower),
        (0x213C, 2, SC_Lower),
        (0x213E, 2, SC_Upper),
        (0x2145, 1, SC_Upper),
        (0x2146, 4, SC_Lower),
        (0x214E, 1, SC_Lower),
        (0x2160, 16, SC_Upper),
        (0x2170, 16, SC_Lower),
        (0x2180, 3, SC_OLetter),
        (0x2183, 1, SC_Upper),
        (0x2184, 1, SC_Lower),
        (0x2185, 4, SC_OLetter),
        (0x2308, 4, SC_Close),
        (0x2329, 2, SC_Close),
        (0x24B6, 26, SC_Upper),
        (0x24D0, 26, SC_Lower),
        (0x275B, 6, SC_Close),
        (0x2768, 14, SC_Close),
        (0x27C5, 2, SC_Close),
        (0x27E6, 10, SC_Close),
        (0x2983, 22, SC_Close),
        (0x29D8, 4, SC_Close),
        (0x29FC, 2, SC_Close),
        (0x2C00, 48, SC_Upper),
        (0x2C30, 48, SC_Lower),
        (0x2C60, 1, SC_Upper),
        (0x2C61, 1, SC_Lower),
        (0x2C62, 3, SC_Upper),
        (0x2C65, 2, SC_Lower),
        (0x2C67, 1, SC_Upper),
        (0x2C68, 1, SC_Lower),
        (0x2C69, 1, SC_Upper),
        (0x2C6A, 1, SC_Lower),
        (0x2C6B, 1, SC_Upper),
        (0x2C6C, 1, SC_Lower),
        (0x2C6D, 4, SC_Upper),
        (0x2C71, 1, SC_Lower),
        (0x2C72, 1, SC_Upper),
        (0x2C73, 2, SC_Lower),
        (0x2C75, 1, SC_Upper),
        (0x2C76, 8, SC_Lower),
        (0x2C7E, 3, SC_Upper),
        (0x2C81, 1, SC_Lower),
        (0x2C82, 1, SC_Upper),
        (0x2C83, 1, SC_Lower),
        (0x2C84, 1, SC_Upper),
        (0x2C85, 1, SC_Lower),
        (0x2C86, 1, SC_Upper),
        (0x2C87, 1, SC_Lower),
        (0x2C88, 1, SC_Upper),
        (0x2C89, 1, SC_Lower),
        (0x2C8A, 1, SC_Upper),
        (0x2C8B, 1, SC_Lower),
        (0x2C8C, 1, SC_Upper),
        (0x2C8D, 1, SC_Lower),
        (0x2C8E, 1, SC_Upper),
        (0x2C8F, 1, SC_Lower),
        (0x2C90, 1, SC_Upper),
        (0x2C91, 1, SC_Lower),
        (0x2C92, 1, SC_Upper),
        (0x2C93, 1, SC_Lower),
        (0x2C94, 1, SC_Upper),
        (0x2C95, 1, SC_Lower),
        (0x2C96, 1, SC_Upper),
        (0x2C97, 1, SC_Lower),
        (0x2C98, 1, SC_Upper),
        (0x2C99, 1, SC_Lower),
        (0x2C9A, 1, SC_Upper),
        (0x2C9B, 1, SC_Lower),
        (0x2C9C, 1, SC_Upper),
        (0x2C9D, 1, SC_Lower),
        (0x2C9E, 1, SC_Upper),
        (0x2C9F, 1, SC_Lower),
        (0x2CA0, 1, SC_Upper),
        (0x2CA1, 1, SC_Lower),
        (0x2CA2, 1, SC_Upper),
        (0x2CA3, 1, SC_Lower),
        (0x2CA4, 1, SC_Upper),
        (0x2CA5, 1, SC_Lower),
        (0x2CA6, 1, SC_Upper),
        (0x2CA7, 1, SC_Lower),
        (0x2CA8, 1, SC_Upper),
        (0x2CA9, 1, SC_Lower),
        (0x2CAA, 1, SC_Upper),
        (0x2CAB, 1, SC_Lower),
        (0x2CAC, 1, SC_Upper),
        (0x2CAD, 1, SC_Lower),
        (0x2CAE, 1, SC_Upper),
        (0x2CAF, 1, SC_Lower),
        (0x2CB0, 1, SC_Upper),
        (0x2CB1, 1, SC_Lower),
        (0x2CB2, 1, SC_Upper),
        (0x2CB3, 1, SC_Lower),
        (0x2CB4, 1, SC_Upper),
        (0x2CB5, 1, SC_Lower),
        (0x2CB6, 1, SC_Upper),
        (0x2CB7, 1, SC_Lower),
        (0x2CB8, 1, SC_Upper),
        (0x2CB9, 1, SC_Lower),
        (0x2CBA, 1, SC_Upper),
        (0x2CBB, 1, SC_Lower),
        (0x2CBC, 1, SC_Upper),
        (0x2CBD, 1, SC_Lower),
        (0x2CBE, 1, SC_Upper),
        (0x2CBF, 1, SC_Lower),
        (0x2CC0, 1, SC_Upper),
        (0x2CC1, 1, SC_Lower),
        (0x2CC2, 1, SC_Upper),
        (0x2CC3, 1, SC_Lower),
        (0x2CC4, 1, SC_Upper),
        (0x2CC5, 1, SC_Lower),
        (0x2CC6, 1, SC_Upper),
        (0x2CC7, 1, SC_Lower),
        (0x2CC8, 1, SC_Upper),
        (0x2CC9, 1, SC_Lower),
        (0x2CCA, 1, SC_Upper),
        (0x2CCB, 1, SC_Lower),
        (0x2CCC, 1, SC_Upper),
        (0x2CCD, 1, SC_Lower),
        (0x2CCE, 1, SC_Upper),
        (0x2CCF, 1, SC_Lower),
        (0x2CD0, 1, SC_Upper),
        (0x2CD1, 1, SC_Lower),
        (0x2CD2, 1, SC_Upper),
        (0x2CD3, 1, SC_Lower),
        (0x2CD4, 1, SC_Upper),
        (0x2CD5, 1, SC_Lower),
        (0x2CD6, 1, SC_Upper),
        (0x2CD7, 1, SC_Lower),
        (0x2CD8, 1, SC_Upper),
        (0x2CD9, 1, SC_Lower),
        (0x2CDA, 1, SC_Upper),
        (0x2CDB, 1, SC_Lower),
        (0x2CDC, 1, SC_Upper),
        (0x2CDD, 1, SC_Lower),
        (0x2CDE, 1, SC_Upper),
        (0x2CDF, 1, SC_Lower),
        (0x2CE0, 1, SC_Upper),
        (0x2CE1, 1, SC_Lower),
        (0x2CE2, 1, SC_Upper),
        (0x2CE3, 2, SC_Lower),
        (0x2CEB, 1, SC_Upper),
        (0x2CEC, 1, SC_Lower),
        (0x2CED, 1, SC_Upper),
        (0x2CEE, 1, SC_Lower),
        (0x2CEF, 3, SC_Extend),
        (0x2CF2, 1, SC_Upper),
        (0x2CF3, 1, SC_Lower),
        (0x2D00, 38, SC_Lower),
        (0x2D27, 1, SC_Lower),
        (0x2D2D, 1, SC_Lower),
        (0x2D30, 56, SC_OLetter),
        (0x2D6F, 1, SC_OLetter),
        (0x2D7F, 1, SC_Extend),
        (0x2D80, 23, SC_OLetter),
        (0x2DA0, 7, SC_OLetter),
        (0x2DA8, 7, SC_OLetter),
        (0x2DB0, 7, SC_OLetter),
        (0x2DB8, 7, SC_OLetter),
        (0x2DC0, 7, SC_OLetter),
        (0x2DC8, 7, SC_OLetter),
        (0x2DD0, 7, SC_OLetter),
        (0x2DD8, 7, SC_OLetter),
        (0x2DE0, 32, SC_Extend),
        (0x2E00, 14, SC_Close),
        (0x2E1C, 2, SC_Close),
        (0x2E20, 10, SC_Close),
        (0x2E2E, 1, SC_STerm),
        (0x2E2F, 1, SC_OLetter),
        (0x2E3C, 1, SC_STerm),
        (0x2E42, 1, SC_Close),
        (0x2E53, 2, SC_STerm),
        (0x2E55, 8, SC_Close),
        (0x3000, 1, SC_Sp),
        (0x3001, 1, SC_SContinue),
        (0x3002, 1, SC_STerm),
        (0x3005, 3, SC_OLetter),
        (0x3008, 10, SC_Close),
        (0x3014, 8, SC_Close),
        (0x301D, 3, SC_Close),
        (0x3021, 9, SC_OLetter),
        (0x302A, 6, SC_Extend),
        (0x3031, 5, SC_OLetter),
        (0x3038, 5, SC_OLetter),
        (0x3041, 86, SC_OLetter),
        (0x3099, 2, SC_Extend),
        (0x309D, 3, SC_OLetter),
        (0x30A1, 90, SC_OLetter),
        (0x30FC, 4, SC_OLetter),
        (0x3105, 43, SC_OLetter),
        (0x3131, 94, SC_OLetter),
        (0x31A0, 32, SC_OLetter),
        (0x31F0, 16, SC_OLetter),
        (0x3400, 6592, SC_OLetter),
        (0x4E00, 22157, SC_OLetter),
        (0xA4D0, 46, SC_OLetter),
        (0xA4FF, 1, SC_STerm),
        (0xA500, 269, SC_OLetter),
        (0xA60E, 2, SC_STerm),
        (0xA610, 16, SC_OLetter),
        (0xA620, 10, SC_Numeric),
        (0xA62A, 2, SC_OLetter),
        (0xA640, 1, SC_Upper),
        (0xA641, 1, SC_Lower),
        (0xA642, 1, SC_Upper),
        (0xA643, 1, SC_Lower),
        (0xA644, 1, SC_Upper),
        (0xA645, 1, SC_Lower),
        (0xA646, 1, SC_Upper),
        (0xA647, 1, SC_Lower),
        (0xA648, 1, SC_Upper),
        (0xA649, 1, SC_Lower),
        (0xA64A, 1, SC_Upper),
        (0xA64B, 1, SC_Lower),
        (0xA64C, 1, SC_Upper),
        (0xA64D, 1, SC_Lower),
        (0xA64E, 1, SC_Upper),
        (0xA64F, 1, SC_Lower),
        (0xA650, 1, SC_Upper),
        (0xA651, 1, SC_Lower),
        (0xA652, 1, SC_Upper),
        (0xA653, 1, SC_Lower),
        (0xA654, 1, SC_Upper),
        (0xA655, 1, SC_Lower),
        (0xA656, 1, SC_Upper),
        (0xA657, 1, SC_Lower),
        (0xA658, 1, SC_Upper),
        (0xA659, 1, SC_Lower),
        (0xA65A, 1, SC_Upper),
        (0xA65B, 1, SC_Lower),
        (0xA65C, 1, SC_Upper),
        (0xA65D, 1, SC_Lower),
        (0xA65E, 1, SC_Upper),
        (0xA65F, 1, SC_Lower),
        (0xA660, 1, SC_Upper),
        (0xA661, 1, SC_Lower),
        (0xA662, 1, SC_Upper),
        (0xA663, 1, SC_Lower),
        (0xA664, 1, SC_Upper),
        (0xA665, 1, SC_Lower),
        (0xA666, 1, SC_Upper),
        (0xA667, 1, SC_Lower),
        (0xA668, 1, SC_Upper),
        (0xA669, 1, SC_Lower),
        (0xA66A, 1, SC_Upper),
        (0xA66B, 1, SC_Lower),
        (0xA66C, 1, SC_Upper),
        (0xA66D, 1, SC_Lower),
        (0xA66E, 1, SC_OLetter),
        (0xA66F, 4, SC_Extend),
        (0xA674, 10, SC_Extend),
        (0xA67F, 1, SC_OLetter),
        (0xA680, 1, SC_Upper),
        (0xA681, 1, SC_Lower),
        (0xA682, 1, SC_Upper),
        (0xA683, 1, SC_Lower),
        (0xA684, 1, SC_Upper),
        (0xA685, 1, SC_Lower),
        (0xA686, 1, SC_Upper),
        (0xA687, 1, SC_Lower),
        (0xA688, 1, SC_Upper),
        (0xA689, 1, SC_Lower),
        (0xA68A, 1, SC_Upper),
        (0xA68B, 1, SC_Lower),
        (0xA68C, 1, SC_Upper),
        (0xA68D, 1, SC_Lower),
        (0xA68E, 1, SC_Upper),
        (0xA68F, 1, SC_Lower),
        (0xA690, 1, SC_Upper),
        (0xA691, 1, SC_Lower),
        (0xA692, 1, SC_Upper),
        (0xA693, 1, SC_Lower),
        (0xA694, 1, SC_Upper),
        (0xA695, 1, SC_Lower),
        (0xA696, 1, SC_Upper),
        (0xA697, 1, SC_Lower),
        (0xA698, 1, SC_Upper),
        (0xA699, 1, SC_Lower),
        (0xA69A, 1, SC_Upper),
        (0xA69B, 3, SC_Lower),
        (0xA69E, 2, SC_Extend),
        (0xA6A0, 80, SC_OLetter),
        (0xA6F0, 2, SC_Extend),
        (0xA6F3, 1, SC_STerm),
        (0xA6F7, 1, SC_STerm),
        (0xA717, 9, SC_OLetter),
        (0xA722, 1, SC_Upper),
        (0xA723, 1, SC_Lower),
        (0xA724, 1, SC_Upper),
        (0xA725, 1, SC_Lower),
        (0xA726, 1, SC_Upper),
        (0xA727, 1, SC_Lower),
        (0xA728, 1, SC_Upper),
        (0xA729, 1, SC_Lower),
        (0xA72A, 1, SC_Upper),
        (0xA72B, 1, SC_Lower),
        (0xA72C, 1, SC_Upper),
        (0xA72D, 1, SC_Lower),
        (0xA72E, 1, SC_Upper),
        (0xA72F, 3, SC_Lower),
        (0xA732, 1, SC_Upper),
        (0xA733, 1, SC_Lower),
        (0xA734, 1, SC_Upper),
        (0xA735, 1, SC_Lower),
        (0xA736, 1, SC_Upper),
        (0xA737, 1, SC_Lower),
        (0xA738, 1, SC_Upper),
        (0xA739, 1, SC_Lower),
        (0xA73A, 1, SC_Upper),
        (0xA73B, 1, SC_Lower),
        (0xA73C, 1, SC_Upper),
        (0xA73D, 1, SC_Lower),
        (0xA73E, 1, SC_Upper),
        (0xA73F, 1, SC_Lower),
        (0xA740, 1, SC_Upper),
        (0xA741, 1, SC_Lower),
        (0xA742, 1, SC_Upper),
        (0xA743, 1, SC_Lower),
        (0xA744, 1, SC_Upper),
        (0xA745, 1, SC_Lower),
        (0xA746, 1, SC_Upper),
        (0xA747, 1, SC_Lower),
        (0xA748, 1, SC_Upper),
        (0xA749, 1, SC_Lower),
        (0xA74A, 1, SC_Upper),
        (0xA74B, 1, SC_Lower),
        (0xA74C, 1, SC_Upper),
        (0xA74D, 1, SC_Lower),
        (0xA74E, 1, SC_Upper),
        (0xA74F, 1, SC_Lower),
        (0xA750, 1, SC_Upper),
        (0xA751, 1, SC_Lower),
        (0xA752, 1, SC_Upper),
        (0xA753, 1, SC_Lower),
        (0xA754, 1, SC_Upper),
        (0xA755, 1, SC_Lower),
        (0xA756, 1, SC_Upper),
        (0xA757, 1, SC_Lower),
        (0xA758, 1, SC_Upper),
        (0xA759, 1, SC_Lower),
        (0xA75A, 1, SC_Upper),
        (0xA75B, 1, SC_Lower),
        (0xA75C, 1, SC_Upper),
        (0xA75D, 1, SC_Lower),
        (0xA75E, 1, SC_Upper),
        (0xA75F, 1, SC_Lower),
        (0xA760, 1, SC_Upper),
        (0xA761, 1, SC_Lower),
        (0xA762, 1, SC_Upper),
        (0xA763, 1, SC_Lower),
        (0xA764, 1, SC_Upper),
        (0xA765, 1, SC_Lower),
        (0xA766, 1, SC_Upper),
        (0xA767, 1, SC_Lower),
        (0xA768, 1, SC_Upper),
        (0xA769, 1, SC_Lower),
        (0xA76A, 1, SC_Upper),
        (0xA76B, 1, SC_Lower),
        (0xA76C, 1, SC_Upper),
        (0xA76D, 1, SC_Lower),
        (0xA76E, 1, SC_Upper),
        (0xA76F, 10, SC_Lower),
        (0xA779, 1, SC_Upper),
        (0xA77A, 1, SC_Lower),
        (0xA77B, 1, SC_Upper),
        (0xA77C, 1, SC_Lower),
        (0xA77D, 2, SC_Upper),
        (0xA77F, 1, SC_Lower),
        (0xA780, 1, SC_Upper),
        (0xA781, 1, SC_Lower),
        (0xA782, 1, SC_Upper),
        (0xA783, 1, SC_Lower),
        (0xA784, 1, SC_Upper),
        (0xA785, 1, SC_Lower),
        (0xA786, 1, SC_Upper),
        (0xA787, 1, SC_Lower),
        (0xA788, 1, SC_OLetter),
        (0xA78B, 1, SC_Upper),
        (0xA78C, 1, SC_Lower),
        (0xA78D, 1, SC_Upper),
        (0xA78E, 1, SC_Lower),
        (0xA78F, 1, SC_OLetter),
        (0xA790, 1, SC_Upper),
        (0xA791, 1, SC_Lower),
        (0xA792, 1, SC_Upper),
        (0xA793, 3, SC_Lower),
        (0xA796, 1, SC_Upper),
        (0xA797, 1, SC_Lower),
        (0xA798, 1, SC_Upper),
        (0xA799, 1, SC_Lower),
        (0xA79A, 1, SC_Upper),
        (0xA79B, 1, SC_Lower),
        (0xA79C, 1, SC_Upper),
        (0xA79D, 1, SC_Lower),
        (0xA79E, 1, SC_Upper),
        (0xA79F, 1, SC_Lower),
        (0xA7A0, 1, SC_Upper),
        (0xA7A1, 1, SC_Lower),
        (0xA7A2, 1, SC_Upper),
        (0xA7A3, 1, SC_Lower),
        (0xA7A4, 1, SC_Upper),
        (0xA7A5, 1, SC_Lower),
        (0xA7A6, 1, SC_Upper),
        (0xA7A7, 1, SC_Lower),
        (0xA7A8, 1, SC_Upper),
        (0xA7A9, 1, SC_Lower),
        (0xA7AA, 5, SC_Upper),
        (0xA7AF, 1, SC_Lower),
        (0xA7B0, 5, SC_Upper),
        (0xA7B5, 1, SC_Lower),
        (0xA7B6, 1, SC_Upper),
        (0xA7B7, 1, SC_Lower),
        (0xA7B8, 1, SC_Upper),
        (0xA7B9, 1, SC_Lower),
        (0xA7BA, 1, SC_Upper),
        (0xA7BB, 1, SC_Lower),
        (0xA7BC, 1, SC_Upper),
        (0xA7BD, 1, SC_Lower),
        (0xA7BE, 1, SC_Upper),
        (0xA7BF, 1, SC_Lower),
        (0xA7C0, 1, SC_Upper),
        (0xA7C1, 1, SC_Lower),
        (0xA7C2, 1, SC_Upper),
        (0xA7C3, 1, SC_Lower),
        (0xA7C4, 4, SC_Upper),
        (0xA7C8, 1, SC_Lower),
        (0xA7C9, 1, SC_Upper),
        (0xA7CA, 1, SC_Lower),
        (0xA7D0, 1, SC_Upper),
        (0xA7D1, 1, SC_Lower),
        (0xA7D3, 1, SC_Lower),
        (0xA7D5, 1, SC_Lower),
        (0xA7D6, 1, SC_Upper),
        (0xA7D7, 1, SC_Lower),
        (0xA7D8, 1, SC_Upper),
        (0xA7D9, 1, SC_Lower),
        (0xA7F2, 3, SC_OLetter),
        (0xA7F5, 1, SC_Upper),
        (0xA7F6, 1, SC_Lower),
        (0xA7F7, 1, SC_OLetter),
        (0xA7F8, 3, SC_Lower),
        (0xA7FB, 7, SC_OLetter),
        (0xA802, 1, SC_Extend),
        (0xA803, 3, SC_OLetter),
        (0xA806, 1, SC_Extend),
        (0xA807, 4, SC_OLetter),
        (0xA80B, 1, SC_Extend),
        (0xA80C, 23, SC_OLetter),
        (0xA823, 5, SC_Extend),
        (0xA82C, 1, SC_Extend),
        (0xA840, 52, SC_OLetter),
        (0xA876, 2, SC_STerm),
        (0xA880, 2, SC_Extend),
        (0xA882, 50, SC_OLetter),
        (0xA8B4, 18, SC_Extend),
        (0xA8CE, 2, SC_STerm),
        (0xA8D0, 10, SC_Numeric),
        (0xA8E0, 18, SC_Extend),
        (0xA8F2, 6, SC_OLetter),
        (0xA8FB, 1, SC_OLetter),
        (0xA8FD, 2, SC_OLetter),
        (0xA8FF, 1, SC_Extend),
        (0xA900, 10, SC_Numeric),
        (0xA90A, 28, SC_OLetter),
        (0xA926, 8, SC_Extend),
        (0xA92F, 1, SC_STerm),
        (0xA930, 23, SC_OLetter),
        (0xA947, 13, SC_Extend),
        (0xA960, 29, SC_OLetter),
        (0xA980, 4, SC_Extend),
        (0xA984, 47, SC_OLetter),
        (0xA9B3, 14, SC_Extend),
        (0xA9C8, 2, SC_STerm),
        (0xA9CF, 1, SC_OLetter),
        (0xA9D0, 10, SC_Numeric),
        (0xA9E0, 5, SC_OLetter),
        (0xA9E5, 1, SC_Extend),
        (0xA9E6, 10, SC_OLetter),
        (0xA9F0, 10, SC_Numeric),
        (0xA9FA, 5, SC_OLetter),
        (0xAA00, 41, SC_OLetter),
        (0xAA29, 14, SC_Extend),
        (0xAA40, 3, SC_OLetter),
        (0xAA43, 1, SC_Extend),
        (0xAA44, 8, SC_OLetter),
        (0xAA4C, 2, SC_Extend),
        (0xAA50, 10, SC_Numeric),
        (0xAA5D, 3, SC_STerm),
        (0xAA60, 23, SC_OLetter),
        (0xAA7A, 1, SC_OLetter),
        (0xAA7B, 3, SC_Extend),
        (0xAA7E, 50, SC_OLetter),
        (0xAAB0, 1, SC_Extend),
        (0xAAB1, 1, SC_OLetter),
        (0xAAB2, 3, SC_Extend),
        (0xAAB5, 2, SC_OLetter),
        (0xAAB7, 2, SC_Extend),
        (0xAAB9, 5, SC_OLetter),
        (0xAABE, 2, SC_Extend),
        (0xAAC0, 1, SC_OLetter),
        (0xAAC1, 1, SC_Extend),
        (0xAAC2, 1, SC_OLetter),
        (0xAADB, 3, SC_OLetter),
        (0xAAE0, 11, SC_OLetter),
        (0xAAEB, 5, SC_Extend),
        (0xAAF0, 2, SC_STerm),
        (0xAAF2, 3, SC_OLetter),
        (0xAAF5, 2, SC_Extend),
        (0xAB01, 6, SC_OLetter),
        (0xAB09, 6, SC_OLetter),
        (0xAB11, 6, SC_OLetter),
        (0xAB20, 7, SC_OLetter),
        (0xAB28, 7, SC_OLetter),
        (0xAB30, 43, SC_Lower),
        (0xAB5C, 13, SC_Lower),
        (0xAB69, 1, SC_OLetter),
        (0xAB70, 80, SC_Lower),
        (0xABC0, 35, SC_OLetter),
        (0xABE3, 8, SC_Extend),
        (0xABEB, 1, SC_STerm),
        (0xABEC, 2, SC_Extend),
        (0xABF0, 10, SC_Numeric),
        (0xAC00, 11172, SC_OLetter),
        (0xD7B0, 23, SC_OLetter),
        (0xD7CB, 49, SC_OLetter),
        (0xF900, 366, SC_OLetter),
        (0xFA70, 106, SC_OLetter),
        (0xFB00, 7, SC_Lower),
        (0xFB13, 5, SC_Lower),
        (0xFB1D, 1, SC_OLetter),
        (0xFB1E, 1, SC_Extend),
        (0xFB1F, 10, SC_OLetter),
        (0xFB2A, 13, SC_OLetter),
        (0xFB38, 5, SC_OLetter),
        (0xFB3E, 1, SC_OLetter),
        (0xFB40, 2, SC_OLetter),
        (0xFB43, 2, SC_OLetter),
        (0xFB46, 108, SC_OLetter),
        (0xFBD3, 363, SC_OLetter),
        (0xFD3E, 2, SC_Close),
        (0xFD50, 64, SC_OLetter),
        (0xFD92, 54, SC_OLetter),
        (0xFDF0, 12, SC_OLetter),
        (0xFE00, 16, SC_Extend),
        (0xFE10, 2, SC_SContinue),
        (0xFE13, 1, SC_SContinue),
        (0xFE17, 2, SC_Close),
        (0xFE20, 16, SC_Extend),
        (0xFE31, 2, SC_SContinue),
        (0xFE35, 16, SC_Close),
        (0xFE47, 2, SC_Close),
        (0xFE50, 2, SC_SContinue),
        (0xFE52, 1, SC_ATerm),
        (0xFE55, 1, SC_SContinue),
        (0xFE56, 2, SC_STerm),
        (0xFE58, 1, SC_SContinue),
        (0xFE59, 6, SC_Close),
        (0xFE63, 1, SC_SContinue),
        (0xFE70, 5, SC_OLetter),
        (0xFE76, 135, SC_OLetter),
        (0xFEFF, 1, SC_Format),
        (0xFF01, 1, SC_STerm),
        (0xFF08, 2, SC_Close),
        (0xFF0C, 2, SC_SContinue),
        (0xFF0E, 1, SC_ATerm),
        (0xFF10, 10, SC_Numeric),
        (0xFF1A, 1, SC_SContinue),
        (0xFF1F, 1, SC_STerm),
        (0xFF21, 26, SC_Upper),
        (0xFF3B, 1, SC_Close),
        (0xFF3D, 1, SC_Close),
        (0xFF41, 26, SC_Lower),
        (0xFF5B, 1, SC_Close),
        (0xFF5D, 1, SC_Close),
        (0xFF5F, 2, SC_Close),
        (0xFF61, 1, SC_STerm),
        (0xFF62, 2, SC_Close),
        (0xFF64, 1, SC_SContinue),
        (0xFF66, 56, SC_OLetter),
        (0xFF9E, 2, SC_Extend),
        (0xFFA0, 31, SC_OLetter),
        (0xFFC2, 6, SC_OLetter),
        (0xFFCA, 6, SC_OLetter),
        (0xFFD2, 6, SC_OLetter),
        (0xFFDA, 3, SC_OLetter),
        (0xFFF9, 3, SC_Format),
        (0x10000, 12, SC_OLetter),
        (0x1000D, 26, SC_OLetter),
        (0x10028, 19, SC_OLetter),
        (0x1003C, 2, SC_OLetter),
        (0x1003F, 15, SC_OLetter),
        (0x10050, 14, SC_OLetter),
        (0x10080, 123, SC_OLetter),
        (0x10140, 53, SC_OLetter),
        (0x101FD, 1, SC_Extend),
        (0x10280, 29, SC_OLetter),
        (0x102A0, 49, SC_OLetter),
        (0x102E0, 1, SC_Extend),
        (0x10300, 32, SC_OLetter),
        (0x1032D, 30, SC_OLetter),
        (0x10350, 38, SC_OLetter),
        (0x10376, 5, SC_Extend),
        (0x10380, 30, SC_OLetter),
        (0x103A0, 36, SC_OLetter),
        (0x103C8, 8, SC_OLetter),
        (0x103D1, 5, SC_OLetter),
        (0x10400, 40, SC_Upper),
        (0x10428, 40, SC_Lower),
        (0x10450, 78, SC_OLetter),
        (0x104A0, 10, SC_Numeric),
        (0x104B0, 36, SC_Upper),
        (0x104D8, 36, SC_Lower),
        (0x10500, 40, SC_OLetter),
        (0x10530, 52, SC_OLetter),
        (0x10570, 11, SC_Upper),
        (0x1057C, 15, SC_Upper),
        (0x1058C, 7, SC_Upper),
        (0x10594, 2, SC_Upper),
        (0x10597, 11, SC_Lower),
        (0x105A3, 15, SC_Lower),
        (0x105B3, 7, SC_Lower),
        (0x105BB, 2, SC_Lower),
        (0x10600, 311, SC_OLetter),
        (0x10740, 22, SC_OLetter),
        (0x10760, 8, SC_OLetter),
        (0x10780, 1, SC_Lower),
        (0x10781, 2, SC_OLetter),
        (0x10783, 3, SC_Lower),
        (0x10787, 42, SC_Lower),
        (0x107B2, 9, SC_Lower),
        (0x10800, 6, SC_OLetter),
        (0x10808, 1, SC_OLetter),
        (0x1080A, 44, SC_OLetter),
        (0x10837, 2, SC_OLetter),
        (0x1083C, 1, SC_OLetter),
        (0x1083F, 23, SC_OLetter),
        (0x10860, 23, SC_OLetter),
        (0x10880, 31, SC_OLetter),
        (0x108E0, 19, SC_OLetter),
        (0x108F4, 2, SC_OLetter),
        (0x10900, 22, SC_OLetter),
        (0x10920, 26, SC_OLetter),
        (0x10980, 56, SC_OLetter),
        (0x109BE, 2, SC_OLetter),
        (0x10A00, 1, SC_OLetter),
        (0x10A01, 3, SC_Extend),
        (0x10A05, 2, SC_Extend),
        (0x10A0C, 4, SC_Extend),
        (0x10A10, 4, SC_OLetter),
        (0x10A15, 3, SC_OLetter),
        (0x10A19, 29, SC_OLetter),
        (0x10A38, 3, SC_Extend),
        (0x10A3F, 1, SC_Extend),
        (0x10A56, 2, SC_STerm),
        (0x10A60, 29, SC_OLetter),
        (0x10A80, 29, SC_OLetter),
        (0x10AC0, 8, SC_OLetter),
        (0x10AC9, 28, SC_OLetter),
        (0x10AE5, 2, SC_Extend),
        (0x10B00, 54, SC_OLetter),
        (0x10B40, 22, SC_OLetter),
        (0x10B60, 19, SC_OLetter),
        (0x10B80, 18, SC_OLetter),
        (0x10C00, 73, SC_OLetter),
        (0x10C80, 51, SC_Upper),
        (0x10CC0, 51, SC_Lower),
        (0x10D00, 36, SC_OLetter),
        (0x10D24, 4, SC_Extend),
        (0x10D30, 10, SC_Numeric),
        (0x10E80, 42, SC_OLetter),
        (0x10EAB, 2, SC_Extend),
        (0x10EB0, 2, SC_OLetter),
        (0x10F00, 29, SC_OLetter),
        (0x10F27, 1, SC_OLetter),
        (0x10F30, 22, SC_OLetter),
        (0x10F46, 11, SC_Extend),
        (0x10F55, 5, SC_STerm),
        (0x10F70, 18, SC_OLetter),
        (0x10F82, 4, SC_Extend),
        (0x10F86, 4, SC_STerm),
        (0x10FB0, 21, SC_OLetter),
        (0x10FE0, 23, SC_OLetter),
        (0x11000, 3, SC_Extend),
        (0x11003, 53, SC_OLetter),
        (0x11038, 15, SC_Extend),
        (0x11047, 2, SC_STerm),
        (0x11066, 10, SC_Numeric),
        (0x11070, 1, SC_Extend),
        (0x11071, 2, SC_OLetter),
        (0x11073, 2, SC_Extend),
        (0x11075, 1, SC_OLetter),
        (0x1107F, 4, SC_Extend),
        (0x11083, 45, SC_OLetter),
        (0x110B0, 11, SC_Extend),
        (0x110BD, 1, SC_Format),
        (0x110BE, 4, SC_STerm),
        (0x110C2, 1, SC_Extend),
        (0x110CD, 1, SC_Format),
        (0x110D0, 25, SC_OLetter),
        (0x110F0, 10, SC_Numeric),
        (0x11100, 3, SC_Extend),
        (0x11103, 36, SC_OLetter),
        (0x11127, 14, SC_Extend),
        (0x11136, 10, SC_Numeric),
        (0x11141, 3, SC_STerm),
        (0x11144, 1, SC_OLetter),
        (0x11145, 2, SC_Extend),
        (0x11147, 1, SC_OLetter),
        (0x11150, 35, SC_OLetter),
        (0x11173, 1, SC_Extend),
        (0x11176, 1, SC_OLetter),
        (0x11180, 3, SC_Extend),
        (0x11183, 48, SC_OLetter),
        (0x111B3, 14, SC_Extend),
        (0x111C1, 4, SC_OLetter),
        (0x111C5, 2, SC_STerm),
        (0x111C9, 4, SC_Extend),
        (0x111CD, 1, SC_STerm),
        (0x111CE, 2, SC_Extend),
        (0x111D0, 10, SC_Numeric),
        (0x111DA, 1, SC_OLetter),
        (0x111DC, 1, SC_OLetter),
        (0x111DE, 2, SC_STerm),
        (0x11200, 18, SC_OLetter),
        (0x11213, 25, SC_OLetter),
        (0x1122C, 12, SC_Extend),
        (0x11238, 2, SC_STerm),
        (0x1123B, 2, SC_STerm),
        (0x1123E, 1, SC_Extend),
        (0x11280, 7, SC_OLetter),
        (0x11288, 1, SC_OLetter),
        (0x1128A, 4, SC_OLetter),
        (0x1128F, 15, SC_OLetter),
        (0x1129F, 10, SC_OLetter),
        (0x112A9, 1, SC_STerm),
        (0x112B0, 47, SC_OLetter),
        (0x112DF, 12, SC_Extend),
        (0x112F0, 10, SC_Numeric),
        (0x11300, 4, SC_Extend),
        (0x11305, 8, SC_OLetter),
        (0x1130F, 2, SC_OLetter),
        (0x11313, 22, SC_OLetter),
        (0x1132A, 7, SC_OLetter),
        (0x11332, 2, SC_OLetter),
        (0x11335, 5, SC_OLetter),
        (0x1133B, 2, SC_Extend),
        (0x1133D, 1, SC_OLetter),
        (0x1133E, 7, SC_Extend),
        (0x11347, 2, SC_Extend),
        (0x1134B, 3, SC_Extend),
        (0x11350, 1, SC_OLetter),
        (0x11357, 1, SC_Extend),
        (0x1135D, 5, SC_OLetter),
        (0x11362, 2, SC_Extend),
        (0x11366, 7, SC_Extend),
        (0x11370, 5, SC_Extend),
        (0x11400, 53, SC_OLetter),
        (0x11435, 18, SC_Extend),
        (0x11447, 4, SC_OLetter),
        (0x1144B, 2, SC_STerm),
        (0x11450, 10, SC_Numeric),
        (0x1145E, 1, SC_Extend),
        (0x1145F, 3, SC_OLetter),
        (0x11480, 48, SC_OLetter),
        (0x114B0, 20, SC_Extend),
        (0x114C4, 2, SC_OLetter),
        (0x114C7, 1, SC_OLetter),
        (0x114D0, 10, SC_Numeric),
        (0x11580, 47, SC_OLetter),
        (0x115AF, 7, SC_Extend),
        (0x115B8, 9, SC_Extend),
        (0x115C2, 2, SC_STerm),
        (0x115C9, 15, SC_STerm),
        (0x115D8, 4, SC_OLetter),
        (0x115DC, 2, SC_Extend),
        (0x11600, 48, SC_OLetter),
        (0x11630, 17, SC_Extend),
        (0x11641, 2, SC_STerm),
        (0x11644, 1, SC_OLetter),
        (0x11650, 10, SC_Numeric),
        (0x11680, 43, SC_OLetter),
        (0x116AB, 13, SC_Extend),
        (0x116B8, 1, SC_OLetter),
        (0x116C0, 10, SC_Numeric),
        (0x11700, 27, SC_OLetter),
        (0x1171D, 15, SC_Extend),
        (0x11730, 10, SC_Numeric),
        (0x1173C, 3, SC_STerm),
        (0x11740, 7, SC_OLetter),
        (0x11800, 44, SC_OLetter),
        (0x1182C, 15, SC_Extend),
        (0x118A0, 32, SC_Upper),
        (0x118C0, 32, SC_Lower),
        (0x118E0, 10, SC_Numeric),
        (0x118FF, 8, SC_OLetter),
        (0x11909, 1, SC_OLetter),
        (0x1190C, 8, SC_OLetter),
        (0x11915, 2, SC_OLetter),
        (0x11918, 24, SC_OLetter),
        (0x11930, 6, SC_Extend),
        (0x11937, 2, SC_Extend),
        (0x1193B, 4, SC_Extend),
        (0x1193F, 1, SC_OLetter),
        (0x11940, 1, SC_Extend),
        (0x11941, 1, SC_OLetter),
        (0x11942, 2, SC_Extend),
        (0x11944, 1, SC_STerm),
        (0x11946, 1, SC_STerm),
        (0x11950, 10, SC_Numeric),
        (0x119A0, 8, SC_OLetter),
        (0x119AA, 39, SC_OLetter),
        (0x119D1, 7, SC_Extend),
        (0x119DA, 7, SC_Extend),
        (0x119E1, 1, SC_OLetter),
        (0x119E3, 1, SC_OLetter),
        (0x119E4, 1, SC_Extend),
        (0x11A00, 1, SC_OLetter),
        (0x11A01, 10, SC_Extend),
        (0x11A0B, 40, SC_OLetter),
        (0x11A33, 7, SC_Extend),
        (0x11A3A, 1, SC_OLetter),
        (0x11A3B, 4, SC_Extend),
        (0x11A42, 2, SC_STerm),
        (0x11A47, 1, SC_Extend),
        (0x11A50, 1, SC_OLetter),
        (0x11A51, 11, SC_Extend),
        (0x11A5C, 46, SC_OLetter),
        (0x11A8A, 16, SC_Extend),
        (0x11A9B, 2, SC_STerm),
        (0x11A9D, 1, SC_OLetter),
        (0x11AB0, 73, SC_OLetter),
        (0x11C00, 9, SC_OLetter),
        (0x11C0A, 37, SC_OLetter),
        (0x11C2F, 8, SC_Extend),
        (0x11C38, 8, SC_Extend),
        (0x11C40, 1, SC_OLetter),
        (0x11C41, 2, SC_STerm),
        (0x11C50, 10, SC_Numeric),
        (0x11C72, 30, SC_OLetter),
        (0x11C92, 22, SC_Extend),
        (0x11CA9, 14, SC_Extend),
        (0x11D00, 7, SC_OLetter),
        (0x11D08, 2, SC_OLetter),
        (0x11D0B, 38, SC_OLetter),
        (0x11D31, 6, SC_Extend),
        (0x11D3A, 1, SC_Extend),
        (0x11D3C, 2, SC_Extend),
        (0x11D3F, 7, SC_Extend),
        (0x11D46, 1, SC_OLetter),
        (0x11D47, 1, SC_Extend),
        (0x11D50, 10, SC_Numeric),
        (0x11D60, 6, SC_OLetter),
        (0x11D67, 2, SC_OLetter),
        (0x11D6A, 32, SC_OLetter),
        (0x11D8A, 5, SC_Extend),
        (0x11D90, 2, SC_Extend),
        (0x11D93, 5, SC_Extend),
        (0x11D98, 1, SC_OLetter),
        (0x11DA0, 10, SC_Numeric),
        (0x11EE0, 19, SC_OLetter),
        (0x11EF3, 4, SC_Extend),
        (0x11EF7, 2, SC_STerm),
        (0x11FB0, 1, SC_OLetter),
        (0x12000, 922, SC_OLetter),
        (0x12400, 111, SC_OLetter),
        (0x12480, 196, SC_OLetter),
        (0x12F90, 97, SC_OLetter),
        (0x13000, 1071, SC_OLetter),
        (0x13430, 9, SC_Format),
        (0x14400, 583, SC_OLetter),
        (0x16800, 569, SC_OLetter),
        (0x16A40, 31, SC_OLetter),
        (0x16A60, 10, SC_Numeric),
        (0x16A6E, 2, SC_STerm),
        (0x16A70, 79, SC_OLetter),
        (0x16AC0, 10, SC_Numeric),
        (0x16AD0, 30, SC_OLetter),
        (0x16AF0, 5, SC_Extend),
        (0x16AF5, 1, SC_STerm),
        (0x16B00, 48, SC_OLetter),
        (0x16B30, 7, SC_Extend),
        (0x16B37, 2, SC_STerm),
        (0x16B40, 4, SC_OLetter),
        (0x16B44, 1, SC_STerm),
        (0x16B50, 10, SC_Numeric),
        (0x16B63, 21, SC_OLetter),
        (0x16B7D, 19, SC_OLetter),
        (0x16E40, 32, SC_Upper),
        (0x16E60, 32, SC_Lower),
        (0x16E98, 1, SC_STerm),
        (0x16F00, 75, SC_OLetter),
        (0x16F4F, 1, SC_Extend),
        (0x16F50, 1, SC_OLetter),
        (0x16F51, 55, SC_Extend),
        (0x16F8F, 4, SC_Extend),
        (0x16F93, 13, SC_OLetter),
        (0x16FE0, 2, SC_OLetter),
        (0x16FE3, 1, SC_OLetter),
        (0x16FE4, 1, SC_Extend),
        (0x16FF0, 2, SC_Extend),
        (0x17000, 6136, SC_OLetter),
        (0x18800, 1238, SC_OLetter),
        (0x18D00, 9, SC_OLetter),
        (0x1AFF0, 4, SC_OLetter),
        (0x1AFF5, 7, SC_OLetter),
        (0x1AFFD, 2, SC_OLetter),
        (0x1B000, 291, SC_OLetter),
        (0x1B150, 3, SC_OLetter),
        (0x1B164, 4, SC_OLetter),
        (0x1B170, 396, SC_OLetter),
        (0x1BC00, 107, SC_OLetter),
        (0x1BC70, 13, SC_OLetter),
        (0x1BC80, 9, SC_OLetter),
        (0x1BC90, 10, SC_OLetter),
        (0x1BC9D, 2, SC_Extend),
        (0x1BC9F, 1, SC_STerm),
        (0x1BCA0, 4, SC_Format),
        (0x1CF00, 46, SC_Extend),
        (0x1CF30, 23, SC_Extend),
        (0x1D165, 5, SC_Extend),
        (0x1D16D, 6, SC_Extend),
        (0x1D173, 8, SC_Format),
        (0x1D17B, 8, SC_Extend),
        (0x1D185, 7, SC_Extend),
        (0x1D1AA, 4, SC_Extend),
        (0x1D242, 3, SC_Extend),
        (0x1D400, 26, SC_Upper),
        (0x1D41A, 26, SC_Lower),
        (0x1D434, 26, SC_Upper),
        (0x1D44E, 7, SC_Lower),
        (0x1D456, 18, SC_Lower),
        (0x1D468, 26, SC_Upper),
        (0x1D482, 26, SC_Lower),
        (0x1D49C, 1, SC_Upper),
        (0x1D49E, 2, SC_Upper),
        (0x1D4A2, 1, SC_Upper),
        (0x1D4A5, 2, SC_Upper),
        (0x1D4A9, 4, SC_Upper),
        (0x1D4AE, 8, SC_Upper),
        (0x1D4B6, 4, SC_Lower),
        (0x1D4BB, 1, SC_Lower),
        (0x1D4BD, 7, SC_Lower),
        (0x1D4C5, 11, SC_Lower),
        (0x1D4D0, 26, SC_Upper),
        (0x1D4EA, 26, SC_Lower),
        (0x1D504, 2, SC_Upper),
        (0x1D507, 4, SC_Upper),
        (0x1D50D, 8, SC_Upper),
        (0x1D516, 7, SC_Upper),
        (0x1D51E, 26, SC_Lower),
        (0x1D538, 2, SC_Upper),
        (0x1D53B, 4, SC_Upper),
        (0x1D540, 5, SC_Upper),
        (0x1D546, 1, SC_Upper),
        (0x1D54A, 7, SC_Upper),
        (0x1D552, 26, SC_Lower),
        (0x1D56C, 26, SC_Upper),
        (0x1D586, 26, SC_Lower),
        (0x1D5A0, 26, SC_Upper),
        (0x1D5BA, 26, SC_Lower),
        (0x1D5D4, 26, SC_Upper),
        (0x1D5EE, 26, SC_Lower),
        (0x1D608, 26, SC_Upper),
        (0x1D622, 26, SC_Lower),
        (0x1D63C, 26, SC_Upper),
        (0x1D656, 26, SC_Lower),
        (0x1D670, 26, SC_Upper),
        (0x1D68A, 28, SC_Lower),
        (0x1D6A8, 25, SC_Upper),
        (0x1D6C2, 25, SC_Lower),
        (0x1D6DC, 6, SC_Lower),
        (0x1D6E2, 25, SC_Upper),
        (0x1D6FC, 25, SC_Lower),
        (0x1D716, 6, SC_Lower),
        (0x1D71C, 25, SC_Upper),
        (0x1D736, 25, SC_Lower),
        (0x1D750, 6, SC_Lower),
        (0x1D756, 25, SC_Upper),
        (0x1D770, 25, SC_Lower),
        (0x1D78A, 6, SC_Lower),
        (0x1D790, 25, SC_Upper),
        (0x1D7AA, 25, SC_Lower),
        (0x1D7C4, 6, SC_Lower),
        (0x1D7CA, 1, SC_Upper),
        (0x1D7CB, 1, SC_Lower),
        (0x1D7CE, 50, SC_Numeric),
        (0x1DA00, 55, SC_Extend),
        (0x1DA3B, 50, SC_Extend),
        (0x1DA75, 1, SC_Extend),
        (0x1DA84, 1, SC_Extend),
        (0x1DA88, 1, SC_STerm),
        (0x1DA9B, 5, SC_Extend),
        (0x1DAA1, 15, SC_Extend),
        (0x1DF00, 10, SC_Lower),
        (0x1DF0A, 1, SC_OLetter),
        (0x1DF0B, 20, SC_Lower),
        (0x1E000, 7, SC_Extend),
        (0x1E008, 17, SC_Extend),
        (0x1E01B, 7, SC_Extend),
        (0x1E023, 2, SC_Extend),
        (0x1E026, 5, SC_Extend),
        (0x1E100, 45, SC_OLetter),
        (0x1E130, 7, SC_Extend),
        (0x1E137, 7, SC_OLetter),
        (0x1E140, 10, SC_Numeric),
        (0x1E14E, 1, SC_OLetter),
        (0x1E290, 30, SC_OLetter),
        (0x1E2AE, 1, SC_Extend),
        (0x1E2C0, 44, SC_OLetter),
        (0x1E2EC, 4, SC_Extend),
        (0x1E2F0, 10, SC_Numeric),
        (0x1E7E0, 7, SC_OLetter),
        (0x1E7E8, 4, SC_OLetter),
        (0x1E7ED, 2, SC_OLetter),
        (0x1E7F0, 15, SC_OLetter),
        (0x1E800, 197, SC_OLetter),
        (0x1E8D0, 7, SC_Extend),
        (0x1E900, 34, SC_Upper),
        (0x1E922, 34, SC_Lower),
        (0x1E944, 7, SC_Extend),
        (0x1E94B, 1, SC_OLetter),
        (0x1E950, 10, SC_Numeric),
        (0x1EE00, 4, SC_OLetter),
        (0x1EE05, 27, SC_OLetter),
        (0x1EE21, 2, SC_OLetter),
        (0x1EE24, 1, SC_OLetter),
        (0x1EE27, 1, SC_OLetter),
        (0x1EE29, 10, SC_OLetter),
        (0x1EE34, 4, SC_OLetter),
        (0x1EE39, 1, SC_OLetter),
        (0x1EE3B, 1, SC_OLetter),
        (0x1EE42, 1, SC_OLetter),
        (0x1EE47, 1, SC_OLetter),
        (0x1EE49, 1, SC_OLetter),
        (0x1EE4B, 1, SC_OLetter),
        (0x1EE4D, 3, SC_OLetter),
        (0x1EE51, 2, SC_OLetter),
        (0x1EE54, 1, SC_OLetter),
        (0x1EE57, 1, SC_OLetter),
        (0x1EE59, 1, SC_OLetter),
        (0x1EE5B, 1, SC_OLetter),
        (0x1EE5D, 1, SC_OLetter),
        (0x1EE5F, 1, SC_OLetter),
        (0x1EE61, 2, SC_OLetter),
        (0x1EE64, 1, SC_OLetter),
        (0x1EE67, 4, SC_OLetter),
        (0x1EE6C, 7, SC_OLetter),
        (0x1EE74, 4, SC_OLetter),
        (0x1EE79, 4, SC_OLetter),
        (0x1EE7E, 1, SC_OLetter),
        (0x1EE80, 10, SC_OLetter),
        (0x1EE8B, 17, SC_OLetter),
        (0x1EEA1, 3, SC_OLetter),
        (0x1EEA5, 5, SC_OLetter),
        (0x1EEAB, 17, SC_OLetter),
        (0x1F130, 26, SC_Upper),
        (0x1F150, 26, SC_Upper),
        (0x1F170, 26, SC_Upper),
        (0x1F676, 3, SC_Close),
        (0x1FBF0, 10, SC_Numeric),
        (0x20000, 42720, SC_OLetter),
        (0x2A700, 4153, SC_OLetter),
        (0x2B740, 222, SC_OLetter),
        (0x2B820, 5762, SC_OLetter),
        (0x2CEB0, 7473, SC_OLetter),
        (0x2F800, 542, SC_OLetter),
        (0x30000, 4939, SC_OLetter),
        (0xE0001, 1, SC_Format),
        (0xE0020, 96, SC_Extend),
        (0xE0100, 240, SC_Extend),
    ];
}

pub mod script {
    /// `Script` values.
    #[allow(non_camel_case_types)]
    #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub enum Script {
        Adlam,
        Ahom,
        Anatolian_Hieroglyphs,
        Arabic,
        Armenian,
        Avestan,
        Balinese,
        Bamum,
        Bassa_Vah,
        Batak,
        Bengali,
        Bhaiksuki,
        Bopomofo,
        Brahmi,
        Braille,
        Buginese,
        Buhid,
        Canadian_Aboriginal,
        Carian,
        Caucasian_Albanian,
        Chakma,
        Cham,
        Cherokee,
        Chorasmian,
        Common,
        Coptic,
        Cuneiform,
        Cypriot,
        Cypro_Minoan,
        Cyrillic,
        Deseret,
        Devanagari,
        Dives_Akuru,
        Dogra,
        Duployan,
        Egyptian_Hieroglyphs,
        Elbasan,
        Elymaic,
        Ethiopic,
        Georgian,
        Glagolitic,
        Gothic,
        Grantha,
        Greek,
        Gujarati,
        Gunjala_Gondi,
        Gurmukhi,
        Han,
        Hangul,
        Hanifi_Rohingya,
        Hanunoo,
        Hatran,
        Hebrew,
        Hiragana,
        Imperial_Aramaic,
        Inherited,
        Inscriptional_Pahlavi,
        Inscriptional_Parthian,
        Javanese,
        Kaithi,
        Kannada,
        Katakana,
        Kayah_Li,
        Kharoshthi,
        Khitan_Small_Script,
        Khmer,
        Khojki,
        Khudawadi,
        Lao,
        Latin,
        Lepcha,
        Limbu,
        Linear_A,
        Linear_B,
        Lisu,
        Lycian,
        Lydian,
        Mahajani,
        Makasar,
        Malayalam,
        Mandaic,
        Manichaean,
        Marchen,
        Masaram_Gondi,
        Medefaidrin,
        Meetei_Mayek,
        Mende_Kikakui,
        Meroitic_Cursive,
        Meroitic_Hieroglyphs,
        Miao,
        Modi,
        Mongolian,
        Mro,
        Multani,
        Myanmar,
        Nabataean,
        Nandinagari,
        New_Tai_Lue,
        Newa,
        Nko,
        Nushu,
        Nyiakeng_Puachue_Hmong,
        Ogham,
        Ol_Chiki,
        Old_Hungarian,
        Old_Italic,
        Old_North_Arabian,
        Old_Permic,
        Old_Persian,
        Old_Sogdian,
        Old_South_Arabian,
        Old_Turkic,
        Old_Uyghur,
        Oriya,
        Osage,
        Osmanya,
        Pahawh_Hmong,
        Palmyrene,
        Pau_Cin_Hau,
        Phags_Pa,
        Phoenician,
        Psalter_Pahlavi,
        Rejang,
        Runic,
        Samaritan,
        Saurashtra,
        Sharada,
        Shavian,
        Siddham,
        SignWriting,
        Sinhala,
        Sogdian,
        Sora_Sompeng,
        Soyombo,
        Sundanese,
        Syloti_Nagri,
        Syriac,
        Tagalog,
        Tagbanwa,
        Tai_Le,
        Tai_Tham,
        Tai_Viet,
        Takri,
        Tamil,
        Tangsa,
        Tangut,
        Telugu,
        Thaana,
        Thai,
        Tibetan,
        Tifinagh,
        Tirhuta,
        Toto,
        Ugaritic,
        Unknown,
        Vai,
        Vithkuqi,
        Wancho,
        Warang_Citi,
        Yezidi,
        Yi,
        Zanabazar_Square,
    }

    pub(crate) const SCRIPT_TABLE: &[(u32, u32, Script)] = &[
        (0x0000, 65, Script::Common),
        (0x0041, 26, Script::Latin),
        (0x005B, 6, Script::Common),
        (0x0061, 26, Script::Latin),
        (0x007B, 47, Script::Common),
        (0x00AA, 1, Script::Latin),
        (0x00AB, 15, Script::Common),
        (0x00BA, 1, Script::Latin),
        (0x00BB, 5, Script::Common),
        (0x00C0, 23, Script::Latin),
        (0x00D7, 1, Script::Common),
        (0x00D8, 31, Script::Latin),
        (0x00F7, 1, Script::Common),
        (0x00F8, 449, Script::Latin),
        (0x02B9, 39, Script::Common),
        (0x02E0, 5, Script::Latin),
        (0x02E5, 5, Script::Common),
        (0x02EA, 2, Script::Bopomofo),
        (0x02EC, 20, Script::Common),
        (0x0300, 112, Script::Inherited),
        (0x0370, 4, Script::Greek),
        (0x0374, 1, Script::Common),
        (0x0375, 3, Script::Greek),
        (0x037A, 4, Script::Greek),
        (0x037E, 1, Script::Common),
        (0x037F, 1, Script::Greek),
        (0x0384, 1, Script::Greek),
        (0x0385, 1, Script::Common),
        (0x0386, 1, Script::Greek),
        (0x0387, 1, Script::Common),
        (0x0388, 3, Script::Greek),
        (0x038C, 1, Script::Greek),
        (0x038E, 20, Script::Greek),
        (0x03A3, 63, Script::Greek),
        (0x03E2, 14, Script::Coptic),
        (0x03F0, 16, Script::Greek),
        (0x0400, 133, Script::Cyrillic),
        (0x0485, 2, Script::Inherited),
        (0x0487, 169, Script::Cyrillic),
        (0x0531, 38, Script::Armenian),
        (0x0559, 50, Script::Armenian),
        (0x058D, 3, Script::Armenian),
        (0x0591, 55, Script::Hebrew),
        (0x05D0, 27, Script::Hebrew),
        (0x05EF, 6, Script::Hebrew),
        (0x0600, 5, Script::Arabic),
        (0x0605, 1, Script::Common),
        (0x0606, 6, Script::Arabic),
        (0x060C, 1, Script::Common),
        (0x060D, 14, Script::Arabic),
        (0x061B, 1, Script::Common),
        (0x061C, 3, Script::Arabic),
        (0x061F, 1, Script::Common),
        (0x0620, 32, Script::Arabic),
        (0x0640, 1, Script::Common),
        (0x0641, 10, Script::Arabic),
        (0x064B, 11, Script::Inherited),
        (0x0656, 26, Script::Arabic),
        (0x0670, 1, Script::Inherited),
        (0x0671, 108, Script::Arabic),
        (0x06DD, 1, Script::Common),
        (0x06DE, 34, Script::Arabic),
        (0x0700, 14, Script::Syriac),
        (0x070F, 60, Script::Syriac),
        (0x074D, 3, Script::Syriac),
        (0x0750, 48, Script::Arabic),
        (0x0780, 50, Script::Thaana),
        (0x07C0, 59, Script::Nko),
        (0x07FD, 3, Script::Nko),
        (0x0800, 46, Script::Samaritan),
        (0x0830, 15, Script::Samaritan),
        (0x0840, 28, Script::Mandaic),
        (0x085E, 1, Script::Mandaic),
        (0x0860, 11, Script::Syriac),
        (0x0870, 31, Script::Arabic),
        (0x0890, 2, Script::Arabic),
        (0x0898, 74, Script::Arabic),
        (0x08E2, 1, Script::Common),
        (0x08E3, 29, Script::Arabic),
        (0x0900, 81, Script::Devanagari),
        (0x0951, 4, Script::Inherited),
        (0x0955, 15, Script::Devanagari),
        (0x0964, 2, Script::Common),
        (0x0966, 26, Script::Devanagari),
        (0x0980, 4, Script::Bengali),
        (0x0985, 8, Script::Bengali),
        (0x098F, 2, Script::Bengali),
        (0x0993, 22, Script::Bengali),
        (0x09AA, 7, Script::Bengali),
        (0x09B2, 1, Script::Bengali),
        (0x09B6, 4, Script::Bengali),
        (0x09BC, 9, Script::Bengali),
        (0x09C7, 2, Script::Bengali),
        (0x09CB, 4, Script::Bengali),
        (0x09D7, 1, Script::Bengali),
        (0x09DC, 2, Script::Bengali),
        (0x09DF, 5, Script::Bengali),
        (0x09E6, 25, Script::Bengali),
        (0x0A01, 3, Script::Gurmukhi),
        (0x0A05, 6, Script::Gurmukhi),
        (0x0A0F, 2, Script::Gurmukhi),
        (0x0A13, 22, Script::Gurmukhi),
        (0x0A2A, 7, Script::Gurmukhi),
        (0x0A32, 2, Script::Gurmukhi),
        (0x0A35, 2, Script::Gurmukhi),
        (0x0A38, 2, Script::Gurmukhi),
        (0x0A3C, 1, Script::Gurmukhi),
        (0x0A3E, 5, Script::Gurmukhi),
        (0x0A47, 2, Script::Gurmukhi),
        (0x0A4B, 3, Script::Gurmukhi),
        (0x0A51, 1, Script::Gurmukhi),
        (0x0A59, 4, Script::Gurmukhi),
        (0x0A5E, 1, Script::Gurmukhi),
        (0x0A66, 17, Script::Gurmukhi),
        (0x0A81, 3, Script::Gujarati),
        (0x0A85, 9, Script::Gujarati),
        (0x0A8F, 3, Script::Gujarati),
        (0x0A93, 22, Script::Gujarati),
        (0x0AAA, 7, Script::Gujarati),
        (0x0AB2, 2, Script::Gujarati),
        (0x0AB5, 5, Script::Gujarati),
        (0x0ABC, 10, Script::Gujarati),
        (0x0AC7, 3, Script::Gujarati),
        (0x0ACB, 3, Script::Gujarati),
        (0x0AD0, 1, Script::Gujarati),
        (0x0AE0, 4, Script::Gujarati),
        (0x0AE6, 12, Script::Gujarati),
        (0x0AF9, 7, Script::Gujarati),
        (0x0B01, 3, Script::Oriya),
        (0x0B05, 8, Script::Oriya),
        (0x0B0F, 2, Script::Oriya),
        (0x0B13, 22, Script::Oriya),
        (0x0B2A, 7, Script::Oriya),
        (0x0B32, 2, Script::Oriya),
        (0x0B35, 5, Script::Oriya),
        (0x0B3C, 9, Script::Oriya),
        (0x0B47, 2, Script::Oriya),
        (0x0B4B, 3, Script::Oriya),
        (0x0B55, 3, Script::Oriya),
        (0x0B5C, 2, Script::Oriya),
        (0x0B5F, 5, Script::Oriya),
        (0x0B66, 18, Script::Oriya),
        (0x0B82, 2, Script::Tamil),
        (0x0B85, 6, Script::Tamil),
        (0x0B8E, 3, Script::Tamil),
        (0x0B92, 4, Script::Tamil),
        (0x0B99, 2, Script::Tamil),
        (0x0B9C, 1, Script::Tamil),
        (0x0B9E, 2, Script::Tamil),
        (0x0BA3, 2, Script::Tamil),
        (0x0BA8, 3, Script::Tamil),
        (0x0BAE, 12, Script::Tamil),
        (0x0BBE, 5, Script::Tamil),
        (0x0BC6, 3, Script::Tamil),
        (0x0BCA, 4, Script::Tamil),
        (0x0BD0, 1, Script::Tamil),
        (0x0BD7, 1, Script::Tamil),
        (0x0BE6, 21, Script::Tamil),
        (0x0C00, 13, Script::Telugu),
        (0x0C0E, 3, Script::Telugu),
        (0x0C12, 23, Script::Telugu),
        (0x0C2A, 16, Script::Telugu),
        (0x0C3C, 9, Script::Telugu),
        (0x0C46, 3, Script::Telugu),
        (0x0C4A, 4, Script::Telugu),
        (0x0C55, 2, Script::Telugu),
        (0x0C58, 3, Script::Telugu),
        (0x0C5D, 1, Script::Telugu),
        (0x0C60, 4, Script::Telugu),
        (0x0C66, 10, Script::Telugu),
        (0x0C77, 9, Script::Telugu),
        (0x0C80, 13, Script::Kannada),
        (0x0C8E, 3, Script::Kannada),
        (0x0C92, 23, Script::Kannada),
        (0x0CAA, 10, Script::Kannada),
        (0x0CB5, 5, Script::Kannada),
        (0x0CBC, 9, Script::Kannada),
        (0x0CC6, 3, Script::Kannada),
        (0x0CCA, 4, Script::Kannada),
        (0x0CD5, 2, Script::Kannada),
        (0x0CDD, 2, Script::Kannada),
        (0x0CE0, 4, Script::Kannada),
        (0x0CE6, 10, Script::Kannada),
        (0x0CF1, 2, Script::Kannada),
        (0x0D00, 13, Script::Malayalam),
        (0x0D0E, 3, Script::Malayalam),
        (0x0D12, 51, Script::Malayalam),
        (0x0D46, 3, Script::Malayalam),
        (0x0D4A, 6, Script::Malayalam),
        (0x0D54, 16, Script::Malayalam),
        (0x0D66, 26, Script::Malayalam),
        (0x0D81, 3, Script::Sinhala),
        (0x0D85, 18, Script::Sinhala),
        (0x0D9A, 24, Script::Sinhala),
        (0x0DB3, 9, Script::Sinhala),
        (0x0DBD, 1, Script::Sinhala),
        (0x0DC0, 7, Script::Sinhala),
        (0x0DCA, 1, Script::Sinhala),
        (0x0DCF, 6, Script::Sinhala),
        (0x0DD6, 1, Script::Sinhala),
        (0x0DD8, 8, Script::Sinhala),
        (0x0DE6, 10, Script::Sinhala),
        (0x0DF2, 3, Script::Sinhala),
        (0x0E01, 58, Script::Thai),
        (0x0E3F, 1, Script::Common),
        (0x0E40, 28, Script::Thai),
        (0x0E81, 2, Script::Lao),
        (0x0E84, 1, Script::Lao),
        (0x0E86, 5, Script::Lao),
        (0x0E8C, 24, Script::Lao),
        (0x0EA5, 1, Script::Lao),
        (0x0EA7, 23, Script::Lao),
        (0x0EC0, 5, Script::Lao),
        (0x0EC6, 1, Script::Lao),
        (0x0EC8, 6, Script::Lao),
        (0x0ED0, 10, Script::Lao),
        (0x0EDC, 4, Script::Lao),
        (0x0F00, 72, Script::Tibetan),
        (0x0F49, 36, Script::Tibetan),
        (0x0F71, 39, Script::Tibetan),
        (0x0F99, 36, Script::Tibetan),
        (0x0FBE, 15, Script::Tibetan),
        (0x0FCE, 7, Script::Tibetan),
        (0x0FD5, 4, Script::Common),
        (0x0FD9, 2, Script::Tibetan),
        (0x1000, 160, Script::Myanmar),
        (0x10A0, 38, Script::Georgian),
        (0x10C7, 1, Script::Georgian),
        (0x10CD, 1, Script::Georgian),
        (0x10D0, 43, Script::Georgian),
        (0x10FB, 1, Script::Common),
        (0x10FC, 4, Script::Georgian),
        (0x1100, 256, Script::Hangul),
        (0x1200, 73, Script::Ethiopic),
        (0x124A, 4, Script::Ethiopic),
        (0x1250, 7, Script::Ethiopic),
        (0x1258, 1, Script::Ethiopic),
        (0x125A, 4, Script::Ethiopic),
        (0x1260, 41, Script::Ethiopic),
        (0x128A, 4, Script::Ethiopic),
        (0x1290, 33, Script::Ethiopic),
        (0x12B2, 4, Script::Ethiopic),
        (0x12B8, 7, Script::Ethiopic),
        (0x12C0, 1, Script::Ethiopic),
        (0x12C2, 4, Script::Ethiopic),
        (0x12C8, 15, Script::Ethiopic),
        (0x12D8, 57, Script::Ethiopic),
        (0x1312, 4, Script::Ethiopic),
        (0x1318, 67, Script::Ethiopic),
        (0x135D, 32, Script::Ethiopic),
        (0x1380, 26, Script::Ethiopic),
        (0x13A0, 86, Script::Cherokee),
        (0x13F8, 6, Script::Cherokee),
        (0x1400, 640, Script::Canadian_Aboriginal),
        (0x1680, 29, Script::Ogham),
        (0x16A0, 75, Script::Runic),
        (0x16EB, 3, Script::Common),
        (0x16EE, 11, Script::Runic),
        (0x1700, 22, Script::Tagalog),
        (0x171F, 1, Script::Tagalog),
        (0x1720, 21, Script::Hanunoo),
        (0x1735, 2, Script::Common),
        (0x1740, 20, Script::Buhid),
        (0x1760, 13, Script::Tagbanwa),
        (0x176E, 3, Script::Tagbanwa),
        (0x1772, 2, Script::Tagbanwa),
        (0x1780, 94, Script::Khmer),
        (0x17E0, 10, Script::Khmer),
        (0x17F0, 10, Script::Khmer),
        (0x1800, 2, Script::Mongolian),
        (0x1802, 2, Script::Common),
        (0x1804, 1, Script::Mongolian),
        (0x1805, 1, Script::Common),
        (0x1806, 20, Script::Mongolian),
        (0x1820, 89, Script::Mongolian),
        (0x1880, 43, Script::Mongolian),
        (0x18B0, 70, Script::Canadian_Aboriginal),
        (0x1900, 31, Script::Limbu),
        (0x1920, 12, Script::Limbu),
        (0x1930, 12, Script::Limbu),
        (0x1940, 1, Script::Limbu),
        (0x1944, 12, Script::Limbu),
        (0x1950, 30, Script::Tai_Le),
        (0x1970, 5, Script::Tai_Le),
        (0x1980, 44, Script::New_Tai_Lue),
        (0x19B0, 26, Script::New_Tai_Lue),
        (0x19D0, 11, Script::New_Tai_Lue),
        (0x19DE, 2, Script::New_Tai_Lue),
        (0x19E0, 32, Script::Khmer),
        (0x1A00, 28, Script::Buginese),
        (0x1A1E, 2, Script::Buginese),
        (0x1A20, 63, Script::Tai_Tham),
        (0x1A60, 29, Script::Tai_Tham),
        (0x1A7F, 11, Script::Tai_Tham),
        (0x1A90, 10, Script::Tai_Tham),
        (0x1AA0, 14, Script::Tai_Tham),
        (0x1AB0, 31, Script::Inherited),
        (0x1B00, 77, Script::Balinese),
        (0x1B50, 47, Script::Balinese),
        (0x1B80, 64, Script::Sundanese),
        (0x1BC0, 52, Script::Batak),
        (0x1BFC, 4, Script::Batak),
        (0x1C00, 56, Script::Lepcha),
        (0x1C3B, 15, Script::Lepcha),
        (0x1C4D, 3, Script::Lepcha),
        (0x1C50, 48, Script::Ol_Chiki),
        (0x1C80, 9, Script::Cyrillic),
        (0x1C90, 43, Script::Georgian),
        (0x1CBD, 3, Script::Georgian),
        (0x1CC0, 8, Script::Sundanese),
        (0x1CD0, 3, Script::Inherited),
        (0x1CD3, 1, Script::Common),
        (0x1CD4, 13, Script::Inherited),
        (0x1CE1, 1, Script::Common),
        (0x1CE2, 7, Script::Inherited),
        (0x1CE9, 4, Script::Common),
        (0x1CED, 1, Script::Inherited),
        (0x1CEE, 6, Script::Common),
        (0x1CF4, 1, Script::Inherited),
        (0x1CF5, 3, Script::Common),
        (0x1CF8, 2, Script::Inherited),
        (0x1CFA, 1, Script::Common),
        (0x1D00, 38, Script::Latin),
        (0x1D26, 5, Script::Greek),
        (0x1D2B, 1, Script::Cyrillic),
        (0x1D2C, 49, Script::Latin),
        (0x1D5D, 5, Script::Greek),
        (0x1D62, 4, Script::Latin),
        (0x1D66, 5, Script::Greek),
        (0x1D6B, 13, Script::Latin),
        (0x1D78, 1, Script::Cyrillic),
        (0x1D79, 70, Script::Latin),
        (0x1DBF, 1, Script::Greek),
        (0x1DC0, 64, Script::Inherited),
        (0x1E00, 256, Script::Latin),
        (0x1F00, 22, Script::Greek),
        (0x1F18, 6, Script::Greek),
        (0x1F20, 38, Script::Greek),
        (0x1F48, 6, Script::Greek),
        (0x1F50, 8, Script::Greek),
        (0x1F59, 1, Script::Greek),
        (0x1F5B, 1, Script::Greek),
        (0x1F5D, 1, Script::Greek),
        (0x1F5F, 31, Script::Greek),
        (0x1F80, 53, Script::Greek),
        (0x1FB6, 15, Script::Greek),
        (0x1FC6, 14, Script::Greek),
        (0x1FD6, 6, Script::Greek),
        (0x1FDD, 19, Script::Greek),
        (0x1FF2, 3, Script::Greek),
        (0x1FF6, 9, Script::Greek),
        (0x2000, 12, Script::Common),
        (0x200C, 2, Script::Inherited),
        (0x200E, 87, Script::Common),
        (0x2066, 11, Script::Common),
        (0x2071, 1, Script::Latin),
        (0x2074, 11, Script::Common),
        (0x207F, 1, Script::Latin),
        (0x2080, 15, Script::Common),
        (0x2090, 13, Script::Latin),
        (0x20A0, 33, Script::Common),
        (0x20D0, 33, Script::Inherited),
        (0x2100, 38, Script::Common),
        (0x2126, 1, Script::Greek),
        (0x2127, 3, Script::Common),
        (0x212A, 2, Script::Latin),
        (0x212C, 6, Script::Common),
        (0x2132, 1, Script::Latin),
        (0x2133, 27, Script::Common),
        (0x214E, 1, Script::Latin),
        (0x214F, 17, Script::Common),
        (0x2160, 41, Script::Latin),
        (0x2189, 3, Script::Common),
        (0x2190, 663, Script::Common),
        (0x2440, 11, Script::Common),
        (0x2460, 928, Script::Common),
        (0x2800, 256, Script::Braille),
        (0x2900, 628, Script::Common),
        (0x2B76, 32, Script::Common),
        (0x2B97, 105, Script::Common),
        (0x2C00, 96, Script::Glagolitic),
        (0x2C60, 32, Script::Latin),
        (0x2C80, 116, Script::Coptic),
        (0x2CF9, 7, Script::Coptic),
        (0x2D00, 38, Script::Georgian),
        (0x2D27, 1, Script::Georgian),
        (0x2D2D, 1, Script::Georgian),
        (0x2D30, 56, Script::Tifinagh),
        (0x2D6F, 2, Script::Tifinagh),
        (0x2D7F, 1, Script::Tifinagh),
        (0x2D80, 23, Script::Ethiopic),
        (0x2DA0, 7, Script::Ethiopic),
        (0x2DA8, 7, Script::Ethiopic),
        (0x2DB0, 7, Script::Ethiopic),
        (0x2DB8, 7, Script::Ethiopic),
        (0x2DC0, 7, Script::Ethiopic),
        (0x2DC8, 7, Script::Ethiopic),
        (0x2DD0, 7, Script::Ethiopic),
        (0x2DD8, 7, Script::Ethiopic),
        (0x2DE0, 32, Script::Cyrillic),
        (0x2E00, 94, Script::Common),
        (0x2E80, 26, Script::Han),
        (0x2E9B, 89, Script::Han),
        (0x2F00, 214, Script::Han),
        (0x2FF0, 12, Script::Common),
        (0x3000, 5, Script::Common),
        (0x3005, 1, Script::Han),
        (0x3006, 1, Script::Common),
        (0x3007, 1, Script::Han),
        (0x3008, 25, Script::Common),
        (0x3021, 9, Script::Han),
        (0x302A, 4, Script::Inherited),
        (0x302E, 2, Script::Hangul),
        (0x3030, 8, Script::Common),
        (0x3038, 4, Script::Han),
        (0x303C, 4, Script::Common),
        (0x3041, 86, Script::Hiragana),
        (0x3099, 2, Script::Inherited),
        (0x309B, 2, Script::Common),
        (0x309D, 3, Script::Hiragana),
        (0x30A0, 1, Script::Common),
        (0x30A1, 90, Script::Katakana),
        (0x30FB, 2, Script::Common),
        (0x30FD, 3, Script::Katakana),
        (0x3105, 43, Script::Bopomofo),
        (0x3131, 94, Script::Hangul),
        (0x3190, 16, Script::Common),
        (0x31A0, 32, Script::Bopomofo),
        (0x31C0, 36, Script::Common),
        (0x31F0, 16, Script::Katakana),
        (0x3200, 31, Script::Hangul),
        (0x3220, 64, Script::Common),
        (0x3260, 31, Script::Hangul),
        (0x327F, 81, Script::Common),
        (0x32D0, 47, Script::Katakana),
        (0x32FF, 1, Script::Common),
        (0x3300, 88, Script::Katakana),
        (0x3358, 168, Script::Common),
        (0x3400, 6592, Script::Han),
        (0x4DC0, 64, Script::Common),
        (0x4E00, 20992, Script::Han),
        (0xA000, 1165, Script::Yi),
        (0xA490, 55, Script::Yi),
        (0xA4D0, 48, Script::Lisu),
        (0xA500, 300, Script::Vai),
        (0xA640, 96, Script::Cyrillic),
        (0xA6A0, 88, Script::Bamum),
        (0xA700, 34, Script::Common),
        (0xA722, 102, Script::Latin),
        (0xA788, 3, Script::Common),
        (0xA78B, 64, Script::Latin),
        (0xA7D0, 2, Script::Latin),
        (0xA7D3, 1, Script::Latin),
        (0xA7D5, 5, Script::Latin),
        (0xA7F2, 14, Script::Latin),
        (0xA800, 45, Script::Syloti_Nagri),
        (0xA830, 10, Script::Common),
        (0xA840, 56, Script::Phags_Pa),
        (0xA880, 70, Script::Saurashtra),
        (0xA8CE, 12, Script::Saurashtra),
        (0xA8E0, 32, Script::Devanagari),
        (0xA900, 46, Script::Kayah_Li),
        (0xA92E, 1, Script::Common),
        (0xA92F, 1, Script::Kayah_Li),
        (0xA930, 36, Script::Rejang),
        (0xA95F, 1, Script::Rejang),
        (0xA960, 29, Script::Hangul),
        (0xA980, 78, Script::Javanese),
        (0xA9CF, 1, Script::Common),
        (0xA9D0, 10, Script::Javanese),
        (0xA9DE, 2, Script::Javanese),
        (0xA9E0, 31, Script::Myanmar),
        (0xAA00, 55, Script::Cham),
        (0xAA40, 14, Script::Cham),
        (0xAA50, 10, Script::Cham),
        (0xAA5C, 4, Script::Cham),
        (0xAA60, 32, Script::Myanmar),
        (0xAA80, 67, Script::Tai_Viet),
        (0xAADB, 5, Script::Tai_Viet),
        (0xAAE0, 23, Script::Meetei_Mayek),
        (0xAB01, 6, Script::Ethiopic),
        (0xAB09, 6, Script::Ethiopic),
        (0xAB11, 6, Script::Ethiopic),
        (0xAB20, 7, Script::Ethiopic),
        (0xAB28, 7, Script::Ethiopic),
        (0xAB30, 43, Script::Latin),
        (0xAB5B, 1, Script::Common),
        (0xAB5C, 9, Script::Latin),
        (0xAB65, 1, Script::Greek),
        (0xAB66, 4, Script::Latin),
        (0xAB6A, 2, Script::Common),
        (0xAB70, 80, Script::Cherokee),
        (0xABC0, 46, Script::Meetei_Mayek),
        (0xABF0, 10, Script::Meetei_Mayek),
        (0xAC00, 11172, Script::Hangul),
        (0xD7B0, 23, Script::Hangul),
        (0xD7CB, 49, Script::Hangul),
        (0xF900, 366, Script::Han),
        (0xFA70, 106, Script::Han),
        (0xFB00, 7, Script::Latin),
        (0xFB13, 5, Script::Armenian),
        (0xFB1D, 26, Script::Hebrew),
        (0xFB38, 5, Script::Hebrew),
        (0xFB3E, 1, Script::Hebrew),
        (0xFB40, 2, Script::Hebrew),
        (0xFB43, 2, Script::Hebrew),
        (0xFB46, 10, Script::Hebrew),
        (0xFB50, 115, Script::Arabic),
        (0xFBD3, 363, Script::Arabic),
        (0xFD3E, 2, Script::Common),
        (0xFD40, 80, Script::Arabic),
        (0xFD92, 54, Script::Arabic),
        (0xFDCF, 1, Script::Arabic),
        (0xFDF0, 16, Script::Arabic),
        (0xFE00, 16, Script::Inherited),
        (0xFE10, 10, Script::Common),
        (0xFE20, 14, Script::Inherited),
        (0xFE2E, 2, Script::Cyrillic),
        (0xFE30, 35, Script::Common),
        (0xFE54, 19, Script::Common),
        (0xFE68, 4, Script::Common),
        (0xFE70, 5, Script::Arabic),
        (0xFE76, 135, Script::Arabic),
        (0xFEFF, 1, Script::Common),
        (0xFF01, 32, Script::Common),
        (0xFF21, 26, Script::Latin),
        (0xFF3B, 6, Script::Common),
        (0xFF41, 26, Script::Latin),
        (0xFF5B, 11, Script::Common),
        (0xFF66, 10, Script::Katakana),
        (0xFF70, 1, Script::Common),
        (0xFF71, 45, Script::Katakana),
        (0xFF9E, 2, Script::Common),
        (0xFFA0, 31, Script::Hangul),
        (0xFFC2, 6, Script::Hangul),
        (0xFFCA, 6, Script::Hangul),
        (0xFFD2, 6, Script::Hangul),
        (0xFFDA, 3, Script::Hangul),
        (0xFFE0, 7, Script::Common),
        (0xFFE8, 7, Script::Common),
        (0xFFF9, 5, Script::Common),
        (0x10000, 12, Script::Linear_B),
        (0x1000D, 26, Script::Linear_B),
        (0x10028, 19, Script::Linear_B),
        (0x1003C, 2, Script::Linear_B),
        (0x1003F, 15, Script::Linear_B),
        (0x10050, 14, Script::Linear_B),
        (0x10080, 123, Script::Linear_B),
        (0x10100, 3, Script::Common),
        (0x10107, 45, Script::Common),
        (0x10137, 9, Script::Common),
        (0x10140, 79, Script::Greek),
        (0x10190, 13, Script::Common),
        (0x101A0, 1, Script::Greek),
        (0x101D0, 45, Script::Common),
        (0x101FD, 1, Script::Inherited),
        (0x10280, 29, Script::Lycian),
        (0x102A0, 49, Script::Carian),
        (0x102E0, 1, Script::Inherited),
        (0x102E1, 27, Script::Common),
        (0x10300, 36, Script::Old_Italic),
        (0x1032D, 3, Script::Old_Italic),
        (0x10330, 27, Script::Gothic),
        (0x10350, 43, Script::Old_Permic),
        (0x10380, 30, Script::Ugaritic),
        (0x1039F, 1, Script::Ugaritic),
        (0x103A0, 36, Script::Old_Persian),
        (0x103C8, 14, Script::Old_Persian),
        (0x10400, 80, Script::Deseret),
        (0x10450, 48, Script::Shavian),
        (0x10480, 30, Script::Osmanya),
        (0x104A0, 10, Script::Osmanya),
        (0x104B0, 36, Script::Osage),
        (0x104D8, 36, Script::Osage),
        (0x10500, 40, Script::Elbasan),
        (0x10530, 52, Script::Caucasian_Albanian),
        (0x1056F, 1, Script::Caucasian_Albanian),
        (0x10570, 11, Script::Vithkuqi),
        (0x1057C, 15, Script::Vithkuqi),
        (0x1058C, 7, Script::Vithkuqi),
        (0x10594, 2, Script::Vithkuqi),
        (0x10597, 11, Script::Vithkuqi),
        (0x105A3, 15, Script::Vithkuqi),
        (0x105B3, 7, Script::Vithkuqi),
        (0x105BB, 2, Script::Vithkuqi),
        (0x10600, 311, Script::Linear_A),
        (0x10740, 22, Script::Linear_A),
        (0x10760, 8, Script::Linear_A),
        (0x10780, 6, Script::Latin),
        (0x10787, 42, Script::Latin),
        (0x107B2, 9, Script::Latin),
        (0x10800, 6, Script::Cypriot),
        (0x10808, 1, Script::Cypriot),
        (0x1080A, 44, Script::Cypriot),
        (0x10837, 2, Script::Cypriot),
        (0x1083C, 1, Script::Cypriot),
        (0x1083F, 1, Script::Cypriot),
        (0x10840, 22, Script::Imperial_Aramaic),
        (0x10857, 9, Script::Imperial_Aramaic),
        (0x10860, 32, Script::Palmyrene),
        (0x10880, 31, Script::Nabataean),
        (0x108A7, 9, Script::Nabataean),
        (0x108E0, 19, Script::Hatran),
        (0x108F4, 2, Script::Hatran),
        (0x108FB, 5, Script::Hatran),
        (0x10900, 28, Script::Phoenician),
        (0x1091F, 1, Script::Phoenician),
        (0x10920, 26, Script::Lydian),
        (0x1093F, 1, Script::Lydian),
        (0x10980, 32, Script::Meroitic_Hieroglyphs),
        (0x109A0, 24, Script::Meroitic_Cursive),
        (0x109BC, 20, Script::Meroitic_Cursive),
        (0x109D2, 46, Script::Meroitic_Cursive),
        (0x10A00, 4, Script::Kharoshthi),
        (0x10A05, 2, Script::Kharoshthi),
        (0x10A0C, 8, Script::Kharoshthi),
        (0x10A15, 3, Script::Kharoshthi),
        (0x10A19, 29, Script::Kharoshthi),
        (0x10A38, 3, Script::Kharoshthi),
        (0x10A3F, 10, Script::Kharoshthi),
        (0x10A50, 9, Script::Kharoshthi),
        (0x10A60, 32, Script::Old_South_Arabian),
        (0x10A80, 32, Script::Old_North_Arabian),
        (0x10AC0, 39, Script::Manichaean),
        (0x10AEB, 12, Script::Manichaean),
        (0x10B00, 54, Script::Avestan),
        (0x10B39, 7, Script::Avestan),
        (0x10B40, 22, Script::Inscriptional_Parthian),
        (0x10B58, 8, Script::Inscriptional_Parthian),
        (0x10B60, 19, Script::Inscriptional_Pahlavi),
        (0x10B78, 8, Script::Inscriptional_Pahlavi),
        (0x10B80, 18, Script::Psalter_Pahlavi),
        (0x10B99, 4, Script::Psalter_Pahlavi),
        (0x10BA9, 7, Script::Psalter_Pahlavi),
        (0x10C00, 73, Script::Old_Turkic),
        (0x10C80, 51, Script::Old_Hungarian),
        (0x10CC0, 51, Script::Old_Hungarian),
        (0x10CFA, 6, Script::Old_Hungarian),
        (0x10D00, 40, Script::Hanifi_Rohingya),
        (0x10D30, 10, Script::Hanifi_Rohingya),
        (0x10E60, 31, Script::Arabic),
        (0x10E80, 42, Script::Yezidi),
        (0x10EAB, 3, Script::Yezidi),
        (0x10EB0, 2, Script::Yezidi),
        (0x10F00, 40, Script::Old_Sogdian),
        (0x10F30, 42, Script::Sogdian),
        (0x10F70, 26, Script::Old_Uyghur),
        (0x10FB0, 28, Script::Chorasmian),
        (0x10FE0, 23, Script::Elymaic),
        (0x11000, 78, Script::Brahmi),
        (0x11052, 36, Script::Brahmi),
        (0x1107F, 1, Script::Brahmi),
        (0x11080, 67, Script::Kaithi),
        (0x110CD, 1, Script::Kaithi),
        (0x110D0, 25, Script::Sora_Sompeng),
        (0x110F0, 10, Script::Sora_Sompeng),
        (0x11100, 53, Script::Chakma),
        (0x11136, 18, Script::Chakma),
        (0x11150, 39, Script::Mahajani),
        (0x11180, 96, Script::Sharada),
        (0x111E1, 20, Script::Sinhala),
        (0x11200, 18, Script::Khojki),
        (0x11213, 44, Script::Khojki),
        (0x11280, 7, Script::Multani),
        (0x11288, 1, Script::Multani),
        (0x1128A, 4, Script::Multani),
        (0x1128F, 15, Script::Multani),
        (0x1129F, 11, Script::Multani),
        (0x112B0, 59, Script::Khudawadi),
        (0x112F0, 10, Script::Khudawadi),
        (0x11300, 4, Script::Grantha),
        (0x11305, 8, Script::Grantha),
        (0x1130F, 2, Script::Grantha),
        (0x11313, 22, Script::Grantha),
        (0x1132A, 7, Script::Grantha),
        (0x11332, 2, Script::Grantha),
        (0x11335, 5, Script::Grantha),
        (0x1133B, 1, Script::Inherited),
        (0x1133C, 9, Script::Grantha),
        (0x11347, 2, Script::Grantha),
        (0x1134B, 3, Script::Grantha),
        (0x11350, 1, Script::Grantha),
        (0x11357, 1, Script::Grantha),
        (0x1135D, 7, Script::Grantha),
        (0x11366, 7, Script::Grantha),
        (0x11370, 5, Script::Grantha),
        (0x11400, 92, Script::Newa),
        (0x1145D, 5, Script::Newa),
        (0x11480, 72, Script::Tirhuta),
        (0x114D0, 10, Script::Tirhuta),
        (0x11580, 54, Script::Siddham),
        (0x115B8, 38, Script::Siddham),
        (0x11600, 69, Script::Modi),
        (0x11650, 10, Script::Modi),
        (0x11660, 13, Script::Mongolian),
        (0x11680, 58, Script::Takri),
        (0x116C0, 10, Script::Takri),
        (0x11700, 27, Script::Ahom),
        (0x1171D, 15, Script::Ahom),
        (0x11730, 23, Script::Ahom),
        (0x11800, 60, Script::Dogra),
        (0x118A0, 83, Script::Warang_Citi),
        (0x118FF, 1, Script::Warang_Citi),
        (0x11900, 7, Script::Dives_Akuru),
        (0x11909, 1, Script::Dives_Akuru),
        (0x1190C, 8, Script::Dives_Akuru),
        (0x11915, 2, Script::Dives_Akuru),
        (0x11918, 30, Script::Dives_Akuru),
        (0x11937, 2, Script::Dives_Akuru),
        (0x1193B, 12, Script::Dives_Akuru),
        (0x11950, 10, Script::Dives_Akuru),
        (0x119A0, 8, Script::Nandinagari),
        (0x119AA, 46, Script::Nandinagari),
        (0x119DA, 11, Script::Nandinagari),
        (0x11A00, 72, Script::Zanabazar_Square),
        (0x11A50, 83, Script::Soyombo),
        (0x11AB0, 16, Script::Canadian_Aboriginal),
        (0x11AC0, 57, Script::Pau_Cin_Hau),
        (0x11C00, 9, Script::Bhaiksuki),
        (0x11C0A, 45, Script::Bhaiksuki),
        (0x11C38, 14, Script::Bhaiksuki),
        (0x11C50, 29, Script::Bhaiksuki),
        (0x11C70, 32, Script::Marchen),
        (0x11C92, 22, Script::Marchen),
        (0x11CA9, 14, Script::Marchen),
        (0x11D00, 7, Script::Masaram_Gondi),
        (0x11D08, 2, Script::Masaram_Gondi),
        (0x11D0B, 44, Script::Masaram_Gondi),
        (0x11D3A, 1, Script::Masaram_Gondi),
        (0x11D3C, 2, Script::Masaram_Gondi),
        (0x11D3F, 9, Script::Masaram_Gondi),
        (0x11D50, 10, Script::Masaram_Gondi),
        (0x11D60, 6, Script::Gunjala_Gondi),
        (0x11D67, 2, Script::Gunjala_Gondi),
        (0x11D6A, 37, Script::Gunjala_Gondi),
        (0x11D90, 2, Script::Gunjala_Gondi),
        (0x11D93, 6, Script::Gunjala_Gondi),
        (0x11DA0, 10, Script::Gunjala_Gondi),
        (0x11EE0, 25, Script::Makasar),
        (0x11FB0, 1, Script::Lisu),
        (0x11FC0, 50, Script::Tamil),
        (0x11FFF, 1, Script::Tamil),
        (0x12000, 922, Script::Cuneiform),
        (0x12400, 111, Script::Cuneiform),
        (0x12470, 5, Script::Cuneiform),
        (0x12480, 196, Script::Cuneiform),
        (0x12F90, 99, Script::Cypro_Minoan),
        (0x13000, 1071, Script::Egyptian_Hieroglyphs),
        (0x13430, 9, Script::Egyptian_Hieroglyphs),
        (0x14400, 583, Script::Anatolian_Hieroglyphs),
        (0x16800, 569, Script::Bamum),
        (0x16A40, 31, Script::Mro),
        (0x16A60, 10, Script::Mro),
        (0x16A6E, 2, Script::Mro),
        (0x16A70, 79, Script::Tangsa),
        (0x16AC0, 10, Script::Tangsa),
        (0x16AD0, 30, Script::Bassa_Vah),
        (0x16AF0, 6, Script::Bassa_Vah),
        (0x16B00, 70, Script::Pahawh_Hmong),
        (0x16B50, 10, Script::Pahawh_Hmong),
        (0x16B5B, 7, Script::Pahawh_Hmong),
        (0x16B63, 21, Script::Pahawh_Hmong),
        (0x16B7D, 19, Script::Pahawh_Hmong),
        (0x16E40, 91, Script::Medefaidrin),
        (0x16F00, 75, Script::Miao),
        (0x16F4F, 57, Script::Miao),
        (0x16F8F, 17, Script::Miao),
        (0x16FE0, 1, Script::Tangut),
        (0x16FE1, 1, Script::Nushu),
        (0x16FE2, 2, Script::Han),
        (0x16FE4, 1, Script::Khitan_Small_Script),
        (0x16FF0, 2, Script::Han),
        (0x17000, 6136, Script::Tangut),
        (0x18800, 768, Script::Tangut),
        (0x18B00, 470, Script::Khitan_Small_Script),
        (0x18D00, 9, Script::Tangut),
        (0x1AFF0, 4, Script::Katakana),
        (0x1AFF5, 7, Script::Katakana),
        (0x1AFFD, 2, Script::Katakana),
        (0x1B000, 1, Script::Katakana),
        (0x1B001, 287, Script::Hiragana),
        (0x1B120, 3, Script::Katakana),
        (0x1B150, 3, Script::Hiragana),
        (0x1B164, 4, Script::Katakana),
        (0x1B170, 396, Script::Nushu),
        (0x1BC00, 107, Script::Duployan),
        (0x1BC70, 13, Script::Duployan),
        (0x1BC80, 9, Script::Duployan),
        (0x1BC90, 10, Script::Duployan),
        (0x1BC9C, 4, Script::Duployan),
        (0x1BCA0, 4, Script::Common),
        (0x1CF00, 46, Script::Inherited),
        (0x1CF30, 23, Script::Inherited),
        (0x1CF50, 116, Script::Common),
        (0x1D000, 246, Script::Common),
        (0x1D100, 39, Script::Common),
        (0x1D129, 62, Script::Common),
        (0x1D167, 3, Script::Inherited),
        (0x1D16A, 17, Script::Common),
        (0x1D17B, 8, Script::Inherited),
        (0x1D183, 2, Script::Common),
        (0x1D185, 7, Script::Inherited),
        (0x1D18C, 30, Script::Common),
        (0x1D1AA, 4, Script::Inherited),
        (0x1D1AE, 61, Script::Common),
        (0x1D200, 70, Script::Greek),
        (0x1D2E0, 20, Script::Common),
        (0x1D300, 87, Script::Common),
        (0x1D360, 25, Script::Common),
        (0x1D400, 85, Script::Common),
        (0x1D456, 71, Script::Common),
        (0x1D49E, 2, Script::Common),
        (0x1D4A2, 1, Script::Common),
        (0x1D4A5, 2, Script::Common),
        (0x1D4A9, 4, Script::Common),
        (0x1D4AE, 12, Script::Common),
        (0x1D4BB, 1, Script::Common),
        (0x1D4BD, 7, Script::Common),
        (0x1D4C5, 65, Script::Common),
        (0x1D507, 4, Script::Common),
        (0x1D50D, 8, Script::Common),
        (0x1D516, 7, Script::Common),
        (0x1D51E, 28, Script::Common),
        (0x1D53B, 4, Script::Common),
        (0x1D540, 5, Script::Common),
        (0x1D546, 1, Script::Common),
        (0x1D54A, 7, Script::Common),
        (0x1D552, 340, Script::Common),
        (0x1D6A8, 292, Script::Common),
        (0x1D7CE, 50, Script::Common),
        (0x1D800, 652, Script::SignWriting),
        (0x1DA9B, 5, Script::SignWriting),
        (0x1DAA1, 15, Script::SignWriting),
        (0x1DF00, 31, Script::Latin),
        (0x1E000, 7, Script::Glagolitic),
        (0x1E008, 17, Script::Glagolitic),
        (0x1E01B, 7, Script::Glagolitic),
        (0x1E023, 2, Script::Glagolitic),
        (0x1E026, 5, Script::Glagolitic),
        (0x1E100, 45, Script::Nyiakeng_Puachue_Hmong),
        (0x1E130, 14, Script::Nyiakeng_Puachue_Hmong),
        (0x1E140, 10, Script::Nyiakeng_Puachue_Hmong),
        (0x1E14E, 2, Script::Nyiakeng_Puachue_Hmong),
        (0x1E290, 31, Script::Toto),
        (0x1E2C0, 58, Script::Wancho),
        (0x1E2FF, 1, Script::Wancho),
        (0x1E7E0, 7, Script::Ethiopic),
        (0x1E7E8, 4, Script::Ethiopic),
        (0x1E7ED, 2, Script::Ethiopic),
        (0x1E7F0, 15, Script::Ethiopic),
        (0x1E800, 197, Script::Mende_Kikakui),
        (0x1E8C7, 16, Script::Mende_Kikakui),
        (0x1E900, 76, Script::Adlam),
        (0x1E950, 10, Script::Adlam),
        (0x1E95E, 2, Script::Adlam),
        (0x1EC71, 68, Script::Common),
        (0x1ED01, 61, Script::Common),
        (0x1EE00, 4, Script::Arabic),
        (0x1EE05, 27, Script::Arabic),
        (0x1EE21, 2, Script::Arabic),
        (0x1EE24, 1, Script::Arabic),
        (0x1EE27, 1, Script::Arabic),
        (0x1EE29, 10, Script::Arabic),
        (0x1EE34, 4, Script::Arabic),
        (0x1EE39, 1, Script::Arabic),
        (0x1EE3B, 1, Script::Arabic),
        (0x1EE42, 1, Script::Arabic),
        (0x1EE47, 1, Script::Arabic),
        (0x1EE49, 1, Script::Arabic),
        (0x1EE4B, 1, Script::Arabic),
        (0x1EE4D, 3, Script::Arabic),
        (0x1EE51, 2, Script::Arabic),
        (0x1EE54, 1, Script::Arabic),
        (0x1EE57, 1, Script::Arabic),
        (0x1EE59, 1, Script::Arabic),
        (0x1EE5B, 1, Script::Arabic),
        (0x1EE5D, 1, Script::Arabic),
        (0x1EE5F, 1, Script::Arabic),
        (0x1EE61, 2, Script::Arabic),
        (0x1EE64, 1, Script::Arabic),
        (0x1EE67, 4, Script::Arabic),
        (0x1EE6C, 7, Script::Arabic),
        (0x1EE74, 4, Script::Arabic),
        (0x1EE79, 4, Script::Arabic),
        (0x1EE7E, 1, Script::Arabic),
        (0x1EE80, 10, Script::Arabic),
        (0x1EE8B, 17, Script::Arabic),
        (0x1EEA1, 3, Script::Arabic),
        (0x1EEA5, 5, Script::Arabic),
        (0x1EEAB, 17, Script::Arabic),
        (0x1EEF0, 2, Script::Arabic),
        (0x1F000, 44, Script::Common),
        (0x1F030, 100, Script::Common),
        (0x1F0A0, 15, Script::Common),
        (0x1F0B1, 15, Script::Common),
        (0x1F0C1, 15, Script::Common),
        (0x1F0D1, 37, Script::Common),
        (0x1F100, 174, Script::Common),
        (0x1F1E6, 26, Script::Common),
        (0x1F200, 1, Script::Hiragana),
        (0x1F201, 2, Script::Common),
        (0x1F210, 44, Script::Common),
        (0x1F240, 9, Script::Common),
        (0x1F250, 2, Script::Common),
        (0x1F260, 6, Script::Common),
        (0x1F300, 984, Script::Common),
        (0x1F6DD, 16, Script::Common),
        (0x1F6F0, 13, Script::Common),
        (0x1F700, 116, Script::Common),
        (0x1F780, 89, Script::Common),
        (0x1F7E0, 12, Script::Common),
        (0x1F7F0, 1, Script::Common),
        (0x1F800, 12, Script::Common),
        (0x1F810, 56, Script::Common),
        (0x1F850, 10, Script::Common),
        (0x1F860, 40, Script::Common),
        (0x1F890, 30, Script::Common),
        (0x1F8B0, 2, Script::Common),
        (0x1F900, 340, Script::Common),
        (0x1FA60, 14, Script::Common),
        (0x1FA70, 5, Script::Common),
        (0x1FA78, 5, Script::Common),
        (0x1FA80, 7, Script::Common),
        (0x1FA90, 29, Script::Common),
        (0x1FAB0, 11, Script::Common),
        (0x1FAC0, 6, Script::Common),
        (0x1FAD0, 10, Script::Common),
        (0x1FAE0, 8, Script::Common),
        (0x1FAF0, 7, Script::Common),
        (0x1FB00, 147, Script::Common),
        (0x1FB94, 55, Script::Common),
        (0x1FBF0, 10, Script::Common),
        (0x20000, 42720, Script::Han),
        (0x2A700, 4153, Script::Han),
        (0x2B740, 222, Script::Han),
        (0x2B820, 5762, Script::Han),
        (0x2CEB0, 7473, Script::Han),
        (0x2F800, 542, Script::Han),
        (0x30000, 4939, Script::Han),
        (0xE0001, 1, Script::Common),
        (0xE0020, 96, Script::Common),
        (0xE0100, 240, Script::Inherited),
    ];
}
