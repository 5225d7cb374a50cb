use crate::{BdecodeError, BdecodeResult};

/// Position tracking over the input buffer.
///
/// The lookahead is always the byte at `index`, or `None` once the whole
/// buffer has been consumed. Every consuming operation advances `index` by
/// exactly the number of bytes it consumed.
pub(crate) struct Cursor<'a> {
    buffer: &'a [u8],
    index: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(buffer: &'a [u8]) -> Self {
        Cursor { buffer, index: 0 }
    }

    /// Current lookahead byte.
    pub(crate) fn peek(&self) -> Option<u8> {
        self.buffer.get(self.index).copied()
    }

    pub(crate) fn index(&self) -> usize {
        self.index
    }

    pub(crate) fn at_end(&self) -> bool {
        self.index >= self.buffer.len()
    }

    /// Advances past `expected`, or reports what was found instead.
    pub(crate) fn consume(&mut self, expected: u8) -> BdecodeResult<()> {
        match self.peek() {
            Some(b) if b == expected => {
                self.index += 1;
                Ok(())
            }
            Some(b) => Err(BdecodeError::ExpectedChar(
                self.index,
                expected as char,
                b as char,
            )),
            None => Err(BdecodeError::UnexpectedEof(self.index)),
        }
    }

    /// Advances one byte past lookahead the caller has already inspected.
    pub(crate) fn bump(&mut self) {
        debug_assert!(self.index < self.buffer.len());
        self.index += 1;
    }

    /// Takes `len` raw bytes verbatim.
    ///
    /// A declared length past the end of the buffer is a
    /// [`BdecodeError::TruncatedString`], never an out of bounds access.
    pub(crate) fn take(&mut self, len: usize) -> BdecodeResult<&'a [u8]> {
        let end = self
            .index
            .checked_add(len)
            .filter(|end| *end <= self.buffer.len())
            .ok_or(BdecodeError::TruncatedString(self.index, len as u64))?;

        let bytes = &self.buffer[self.index..end];
        self.index = end;
        Ok(bytes)
    }

    /// Bytes from `start` up to the current position.
    pub(crate) fn span(&self, start: usize) -> &'a [u8] {
        &self.buffer[start..self.index]
    }
}
