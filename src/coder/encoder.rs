use std::io::Write;

use log::trace;

use super::{shift, split, top_byte_settled, HIGH_START, LOW_START};
use crate::bitstream::bytewriter::ByteWriter;

/// Encodes bits with given probabilities into a byte stream.
#[derive(Debug)]
pub struct ArithmeticEncoder<W: Write> {
    low: u32,
    high: u32,
    out: ByteWriter<W>,
}

impl<W: Write> ArithmeticEncoder<W> {
    pub fn new(writer: W) -> Self {
        Self {
            low: LOW_START,
            high: HIGH_START,
            out: ByteWriter::new(writer),
        }
    }

    /// Encode `bit` given `probability` (Q16, strictly between 0 and 65536) that it is a
    /// one. Returns the number of bytes the renormalization emitted.
    pub fn encode_bit(&mut self, bit: u8, probability: u32) -> std::io::Result<usize> {
        let mid = split(self.low, self.high, probability);
        if bit == 1 {
            self.high = mid;
        } else {
            self.low = mid + 1;
        }

        let mut emitted = 0;
        while top_byte_settled(self.low, self.high) {
            self.out.out8((self.high >> 24) as u8)?;
            shift(&mut self.low, &mut self.high);
            emitted += 1;
        }
        debug_assert!(self.low != 0 && self.low <= self.high);
        Ok(emitted)
    }

    /// Current bottom of the interval.
    pub fn low(&self) -> u32 {
        self.low
    }

    /// Current top of the interval.
    pub fn high(&self) -> u32 {
        self.high
    }

    /// Bytes emitted so far. The trailer is not counted until `finish` writes it.
    pub fn bytes_written(&self) -> usize {
        self.out.written()
    }

    /// Write the trailer and flush. Returns the underlying writer.
    pub fn finish(mut self) -> std::io::Result<W> {
        trace!(
            "Flushing coder: low {:#010x}, high {:#010x} after {} bytes.",
            self.low,
            self.high,
            self.out.written()
        );
        self.out.out32(self.high)?;
        self.out.out32(0)?;
        self.out.into_inner()
    }
}
