use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BdecodeError {
    #[error("Empty buffer provided .")]
    EmptyInput,

    #[error("Expected value (list, dict, int or string) in bencoded string at position '{0}' .")]
    ExpectedValue(usize),

    #[error("Expected digit in bencoded string at position '{0}' .")]
    ExpectedDigit(usize),

    #[error("Unexpected end of file in bencoded string at position '{0}' .")]
    UnexpectedEof(usize),

    #[error("Expected '{1}' in bencoded string at position '{0}', got '{2}' .")]
    ExpectedChar(usize, char, char),

    #[error("Leading zeros are not allowed in bencoded numbers at position '{0}' .")]
    LeadingZero(usize),

    #[error("Negative zero is not allowed in bencoded integers at position '{0}' .")]
    NegativeZero(usize),

    #[error("String length '{1}' at position '{0}' exceeds the remaining buffer .")]
    TruncatedString(usize, u64),

    #[error("Extra data found after the top level value at position '{0}' .")]
    TrailingData(usize),

    #[error("bencoded recursion depth limit exceeded over '{0}' times.")]
    DepthExceeded(usize),

    #[error("integer overflow at position '{0}' with string '{1}'")]
    Overflow(usize, String),
}
