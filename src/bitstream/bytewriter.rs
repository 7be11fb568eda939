//! ByteWriter: the output sink used by the arithmetic encoder.
//!
//! The coder emits whole bytes only, so there is no bit queue here. Bytes are collected in
//! a buffer and handed to the underlying writer in large chunks.

use std::io::Write;

const BUFFER_SIZE: usize = 64 * 1024;

/// Buffers and counts the bytes written to any `std::io::Write`.
#[derive(Debug)]
pub struct ByteWriter<W: Write> {
    /// Output buffer, drained into the writer once it fills.
    output: Vec<u8>,
    /// Total bytes accepted so far, including those still in the buffer.
    written: usize,
    /// Handle to the output stream
    writer: W,
}

impl<W: Write> ByteWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            output: Vec::with_capacity(BUFFER_SIZE),
            written: 0,
            writer,
        }
    }

    /// Put one byte on the stream.
    #[inline]
    pub fn out8(&mut self, byte: u8) -> std::io::Result<()> {
        self.output.push(byte);
        self.written += 1;
        if self.output.len() >= BUFFER_SIZE {
            self.push_buffer()?;
        }
        Ok(())
    }

    /// Put a 32 bit word on the stream, most significant byte first.
    pub fn out32(&mut self, word: u32) -> std::io::Result<()> {
        word.to_be_bytes().iter().try_for_each(|&b| self.out8(b))
    }

    /// Bytes accepted so far.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Write out everything buffered and flush the writer. Must be called before the
    /// writer is read back or data may be left in the buffer.
    pub fn flush(&mut self) -> std::io::Result<()> {
        self.push_buffer()?;
        self.writer.flush()
    }

    /// Flush, then hand back the underlying writer.
    pub fn into_inner(mut self) -> std::io::Result<W> {
        self.flush()?;
        Ok(self.writer)
    }

    fn push_buffer(&mut self) -> std::io::Result<()> {
        self.writer.write_all(&self.output)?;
        self.output.clear();
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::ByteWriter;

    #[test]
    fn out8_test() {
        let mut bw = ByteWriter::new(Vec::new());
        bw.out8(b'x').unwrap();
        assert_eq!(bw.written(), 1);
        assert_eq!(bw.into_inner().unwrap(), b"x");
    }

    #[test]
    fn out32_big_endian_test() {
        let mut bw = ByteWriter::new(Vec::new());
        bw.out32(0x0102_0304).unwrap();
        bw.out32(0).unwrap();
        assert_eq!(bw.written(), 8);
        assert_eq!(bw.into_inner().unwrap(), vec![1, 2, 3, 4, 0, 0, 0, 0]);
    }

    #[test]
    fn large_output_test() {
        let mut bw = ByteWriter::new(Vec::new());
        for i in 0..200_000_u32 {
            bw.out8(i as u8).unwrap();
        }
        let out = bw.into_inner().unwrap();
        assert_eq!(out.len(), 200_000);
        assert_eq!(out[65_537], 1);
        assert_eq!(out[199_999], (199_999_u32 & 0xff) as u8);
    }
}
