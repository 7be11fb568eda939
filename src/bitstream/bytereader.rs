//! ByteReader: a cursor over a compressed buffer.
//!
//! The decoder needs to know exactly how many bytes it has consumed, both to report where
//! a stream went bad and to check that it stopped right before the trailer padding.

/// Reads bytes from a borrowed buffer.
#[derive(Debug)]
pub struct ByteReader<'a> {
    buffer: &'a [u8],
    cursor: usize,
}

impl<'a> ByteReader<'a> {
    pub fn new(buffer: &'a [u8]) -> Self {
        Self { buffer, cursor: 0 }
    }

    /// Return the next byte, or None if there is no more data to read.
    #[inline]
    pub fn byte(&mut self) -> Option<u8> {
        let byte = self.buffer.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(byte)
    }

    /// Return the next four bytes as a big endian word, or None if fewer than four remain.
    /// Nothing is consumed on failure.
    pub fn word(&mut self) -> Option<u32> {
        let bytes = self.buffer.get(self.cursor..self.cursor + 4)?;
        self.cursor += 4;
        Some(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Bytes consumed so far.
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// The unread tail of the buffer.
    pub fn remaining(&self) -> &'a [u8] {
        &self.buffer[self.cursor..]
    }

    /// Debugging function. Report current position in the buffer.
    pub fn loc(&self) -> String {
        format!("[{}/{}]", self.cursor, self.buffer.len())
    }
}

#[cfg(test)]
mod test {
    use super::ByteReader;

    #[test]
    fn byte_test() {
        let x = "Hello".as_bytes();
        let mut br = ByteReader::new(x);
        assert_eq!(br.byte(), Some(b'H'));
        assert_eq!(br.byte(), Some(b'e'));
        assert_eq!(br.position(), 2);
        assert_eq!(br.remaining(), b"llo");
    }

    #[test]
    fn exhausted_test() {
        let mut br = ByteReader::new(&[7]);
        assert_eq!(br.byte(), Some(7));
        assert_eq!(br.byte(), None);
        assert_eq!(br.position(), 1);
    }

    #[test]
    fn word_test() {
        let mut br = ByteReader::new(&[0xde, 0xad, 0xbe, 0xef, 0x01, 0x02]);
        assert_eq!(br.word(), Some(0xdead_beef));
        assert_eq!(br.word(), None);
        assert_eq!(br.position(), 4);
        assert_eq!(br.byte(), Some(1));
    }

    #[test]
    fn loc_test() {
        let mut br = ByteReader::new("Hello, world!".as_bytes());
        br.byte();
        br.byte();
        assert_eq!(br.loc(), "[2/13]");
    }
}
