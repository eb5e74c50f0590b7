use thiserror::Error;

/// Errors raised while constructing clusters or strings from raw input.
///
/// Only constructors fail; every other operation reports missing data through
/// sentinel values (`None`, empty slices) instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A value outside `0..=0x10FFFF` was supplied as a code point.
    #[error("invalid code point: {0:#X}")]
    InvalidCodePoint(u32),

    /// A grapheme cluster needs at least one code point.
    #[error("a grapheme cluster cannot be empty")]
    EmptyCluster,

    /// The source could not be interpreted as text.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result alias used by the fallible constructors of this crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn test_display() {
        assert_eq!(
            "invalid code point: 0x110000",
            Error::InvalidCodePoint(0x11_0000).to_string()
        );
        assert_eq!(
            "a grapheme cluster cannot be empty",
            Error::EmptyCluster.to_string()
        );
    }
}
