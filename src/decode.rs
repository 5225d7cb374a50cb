mod commons;
mod cursor;
mod utils;
mod value;

use bytes::Bytes;

use commons::limits::DEFAULT_DEPTH_LIMIT;
use cursor::Cursor;

pub use utils::{escape_char, escape_string};
pub use value::BdecodeValue;

use crate::{BdecodeError, BdecodeResult};

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Compact,
    Pretty(usize),
}

impl BdecodeValue {
    /// Decodes a complete bencoded buffer into an owned value tree.
    ///
    /// The buffer must hold exactly one top level value; anything after it
    /// fails with [`BdecodeError::TrailingData`]. Dicts and lists nested
    /// deeper than `depth_limit` fail with [`BdecodeError::DepthExceeded`].
    pub fn parse(buffer: &[u8], depth_limit: Option<usize>) -> BdecodeResult<Self> {
        if buffer.is_empty() {
            return Err(BdecodeError::EmptyInput);
        }

        let mut decoder = Decoder {
            cursor: Cursor::new(buffer),
            depth_limit: depth_limit.unwrap_or(DEFAULT_DEPTH_LIMIT),
        };

        let value = decoder.parse_value(0)?;

        if !decoder.cursor.at_end() {
            return Err(BdecodeError::TrailingData(decoder.cursor.index()));
        }

        Ok(value)
    }

    /// [`BdecodeValue::parse`] with the default depth limit.
    pub fn parse_buffer(buffer: &[u8]) -> BdecodeResult<Self> {
        Self::parse(buffer, None)
    }
}

/// Recursive descent over the buffer, one byte of lookahead per production.
struct Decoder<'a> {
    cursor: Cursor<'a>,
    depth_limit: usize,
}

impl Decoder<'_> {
    // <BE> ::= <DICT> | <LIST> | <INT> | <STR>
    fn parse_value(&mut self, depth: usize) -> BdecodeResult<BdecodeValue> {
        match self.cursor.peek() {
            Some(b'd') => self.parse_dict(depth),
            Some(b'l') => self.parse_list(depth),
            Some(b'i') => self.parse_int(),
            Some(t) if t.is_ascii_digit() => Ok(BdecodeValue::Str(self.parse_str()?)),
            _ => Err(BdecodeError::ExpectedValue(self.cursor.index())),
        }
    }

    // <DICT> ::= "d" 1 * (<STR> <BE>) "e"
    //
    // The key is parsed with the string production, so a non string key is
    // a grammar error and "de" is rejected: at least one pair is required.
    fn parse_dict(&mut self, depth: usize) -> BdecodeResult<BdecodeValue> {
        if depth >= self.depth_limit {
            return Err(BdecodeError::DepthExceeded(self.depth_limit));
        }

        self.cursor.consume(b'd')?;
        let mut pairs = Vec::new();

        loop {
            if self.cursor.at_end() {
                return Err(BdecodeError::UnexpectedEof(self.cursor.index()));
            }

            let key = self.parse_str()?;
            let value = self.parse_value(depth + 1)?;

            // a duplicate key collapses to the latest value, keeping the
            // position of the first occurrence
            match pairs.iter_mut().find(|(k, _)| *k == key) {
                Some((_, slot)) => *slot = value,
                None => pairs.push((key, value)),
            }

            if self.cursor.peek() == Some(b'e') {
                break;
            }
        }

        self.cursor.consume(b'e')?;
        Ok(BdecodeValue::Dict(pairs))
    }

    // <LIST> ::= "l" 1 * <BE> "e"
    fn parse_list(&mut self, depth: usize) -> BdecodeResult<BdecodeValue> {
        if depth >= self.depth_limit {
            return Err(BdecodeError::DepthExceeded(self.depth_limit));
        }

        self.cursor.consume(b'l')?;
        let mut items = Vec::new();

        loop {
            if self.cursor.at_end() {
                return Err(BdecodeError::UnexpectedEof(self.cursor.index()));
            }

            items.push(self.parse_value(depth + 1)?);

            if self.cursor.peek() == Some(b'e') {
                break;
            }
        }

        self.cursor.consume(b'e')?;
        Ok(BdecodeValue::List(items))
    }

    // <INT> ::= "i" <SNUM> "e"
    fn parse_int(&mut self) -> BdecodeResult<BdecodeValue> {
        self.cursor.consume(b'i')?;
        let value = self.parse_snum()?;
        self.cursor.consume(b'e')?;

        Ok(BdecodeValue::Int(value))
    }

    // <SNUM> ::= "-" <NUM> / <NUM>
    fn parse_snum(&mut self) -> BdecodeResult<i64> {
        match self.cursor.peek() {
            Some(t) if t.is_ascii_digit() => self.parse_num(),
            Some(b'-') => {
                self.cursor.consume(b'-')?;

                if self.cursor.peek() == Some(b'0') {
                    return Err(BdecodeError::NegativeZero(self.cursor.index()));
                }

                Ok(-self.parse_num()?)
            }
            Some(_) => Err(BdecodeError::ExpectedDigit(self.cursor.index())),
            None => Err(BdecodeError::UnexpectedEof(self.cursor.index())),
        }
    }

    // <NUM> ::= 1 * <DIGIT>
    //
    // A leading zero is only valid as the single digit "0".
    fn parse_num(&mut self) -> BdecodeResult<i64> {
        let start = self.cursor.index();

        match self.cursor.peek() {
            Some(b'0') => {
                self.cursor.bump();

                if self.cursor.peek().is_some_and(|t| t.is_ascii_digit()) {
                    return Err(BdecodeError::LeadingZero(start));
                }

                Ok(0)
            }
            Some(t) if t.is_ascii_digit() => {
                let mut value: i64 = 0;

                while let Some(t) = self.cursor.peek() {
                    if !t.is_ascii_digit() {
                        break;
                    }

                    let digit = (t - b'0') as i64;
                    match value.checked_mul(10).and_then(|v| v.checked_add(digit)) {
                        Some(v) => value = v,
                        None => return Err(self.overflow(start)),
                    }

                    self.cursor.bump();
                }

                Ok(value)
            }
            Some(_) => Err(BdecodeError::ExpectedDigit(start)),
            None => Err(BdecodeError::UnexpectedEof(start)),
        }
    }

    // <STR> ::= <NUM> ":" n * <CHAR>; where n equals the <NUM>
    fn parse_str(&mut self) -> BdecodeResult<Bytes> {
        let num = self.parse_num()?;
        self.cursor.consume(b':')?;

        // a length that does not fit usize cannot fit the buffer either
        let len = usize::try_from(num)
            .map_err(|_| BdecodeError::TruncatedString(self.cursor.index(), num as u64))?;
        let bytes = self.cursor.take(len)?;

        Ok(Bytes::copy_from_slice(bytes))
    }

    /// Builds the overflow error with the whole digit run in the message.
    fn overflow(&mut self, start: usize) -> BdecodeError {
        while self.cursor.peek().is_some_and(|t| t.is_ascii_digit()) {
            self.cursor.bump();
        }

        let digits = String::from_utf8_lossy(self.cursor.span(start)).into_owned();
        BdecodeError::Overflow(start, digits)
    }
}
