use log::trace;

use super::{shift, split, top_byte_settled, HIGH_START, LOW_START, TRAILER_LEN};
use crate::bitstream::bytereader::ByteReader;
use crate::error::{Error, Result};

/// Decodes bits from a stream written by `ArithmeticEncoder`.
#[derive(Debug)]
pub struct ArithmeticDecoder<'a> {
    low: u32,
    high: u32,
    /// Four byte window of the input, aligned with `low` and `high`.
    code: u32,
    input: ByteReader<'a>,
}

impl<'a> ArithmeticDecoder<'a> {
    /// Start decoding `input`, which must at least hold the trailer.
    pub fn new(input: &'a [u8]) -> Result<Self> {
        if input.len() < TRAILER_LEN {
            return Err(Error::UnexpectedEnd {
                position: input.len(),
            });
        }
        let mut input = ByteReader::new(input);
        let code = input.word().ok_or(Error::UnexpectedEnd { position: 0 })?;
        Ok(Self {
            low: LOW_START,
            high: HIGH_START,
            code,
            input,
        })
    }

    /// Decode one bit given the same `probability` the encoder used for it.
    pub fn decode_bit(&mut self, probability: u32) -> Result<u8> {
        let mid = split(self.low, self.high, probability);
        if self.code < self.low || self.code > self.high {
            return Err(self.corrupt());
        }

        let bit = (self.code <= mid) as u8;
        if bit == 1 {
            self.high = mid;
        } else {
            self.low = mid + 1;
        }

        while top_byte_settled(self.low, self.high) {
            shift(&mut self.low, &mut self.high);
            let byte = self.input.byte().ok_or(Error::UnexpectedEnd {
                position: self.input.position(),
            })?;
            self.code = self.code << 8 | byte as u32;
        }
        debug_assert!(self.low != 0 && self.low <= self.high);
        Ok(bit)
    }

    /// Check that the stream ends where the encoder stopped: only the four bytes of
    /// padding are left, and the window holds the `high` the encoder flushed.
    pub fn finish(self) -> Result<()> {
        let rest = self.input.remaining();
        trace!(
            "Decoder finished at {} with {} bytes left.",
            self.input.loc(),
            rest.len()
        );
        if self.code != self.high || rest.len() != TRAILER_LEN / 2 || rest.iter().any(|&b| b != 0)
        {
            return Err(self.corrupt());
        }
        Ok(())
    }

    /// Current bottom of the interval.
    pub fn low(&self) -> u32 {
        self.low
    }

    /// Current top of the interval.
    pub fn high(&self) -> u32 {
        self.high
    }

    /// Input bytes consumed so far.
    pub fn position(&self) -> usize {
        self.input.position()
    }

    fn corrupt(&self) -> Error {
        Error::Corrupt {
            position: self.input.position(),
            low: self.low,
            high: self.high,
            code: self.code,
        }
    }
}

#[cfg(test)]
mod test {
    use super::ArithmeticDecoder;
    use crate::coder::encoder::ArithmeticEncoder;
    use crate::error::Error;

    const PROBS: [u32; 6] = [32767, 1, 65535, 40000, 2000, 60000];

    fn encode(bits: &[u8]) -> Vec<u8> {
        let mut enc = ArithmeticEncoder::new(Vec::new());
        for (i, &bit) in bits.iter().enumerate() {
            enc.encode_bit(bit, PROBS[i % PROBS.len()]).unwrap();
        }
        enc.finish().unwrap()
    }

    #[test]
    fn fixed_probability_bits_test() {
        let bits: Vec<u8> = (0..1000_u32).map(|i| ((i * 7 + i / 3) % 5 == 0) as u8).collect();
        let stream = encode(&bits);
        let mut dec = ArithmeticDecoder::new(&stream).unwrap();
        for (i, &bit) in bits.iter().enumerate() {
            assert_eq!(dec.decode_bit(PROBS[i % PROBS.len()]).unwrap(), bit);
            assert!(dec.low() >= 1 && dec.low() <= dec.high());
        }
        dec.finish().unwrap();
    }

    #[test]
    fn consumes_all_but_padding_test() {
        let bits = [1, 0, 0, 1, 1, 1, 0, 1, 0, 0, 0, 0, 1];
        let stream = encode(&bits);
        let mut dec = ArithmeticDecoder::new(&stream).unwrap();
        for (i, &bit) in bits.iter().enumerate() {
            assert_eq!(dec.decode_bit(PROBS[i % PROBS.len()]).unwrap(), bit);
        }
        assert_eq!(dec.position(), stream.len() - 4);
        dec.finish().unwrap();
    }

    #[test]
    fn too_short_test() {
        assert!(matches!(
            ArithmeticDecoder::new(&[0xff, 0xff, 0xff]),
            Err(Error::UnexpectedEnd { position: 3 })
        ));
    }

    #[test]
    fn code_outside_interval_test() {
        // The encoder never lets low reach zero, so an all zero window is impossible.
        let stream = [0, 0, 0, 0, 0, 0, 0, 0];
        let mut dec = ArithmeticDecoder::new(&stream).unwrap();
        assert!(matches!(dec.decode_bit(32767), Err(Error::Corrupt { .. })));
    }

    #[test]
    fn bad_trailer_test() {
        let bits = [1, 1, 0, 1];
        let mut stream = encode(&bits);
        let last = stream.len() - 1;
        stream[last] = 9;
        let mut dec = ArithmeticDecoder::new(&stream).unwrap();
        for (i, &bit) in bits.iter().enumerate() {
            assert_eq!(dec.decode_bit(PROBS[i % PROBS.len()]).unwrap(), bit);
        }
        assert!(matches!(dec.finish(), Err(Error::Corrupt { .. })));
    }

    #[test]
    fn truncated_stream_test() {
        let bits = vec![0_u8; 64];
        let mut enc = ArithmeticEncoder::new(Vec::new());
        for &bit in &bits {
            enc.encode_bit(bit, 65000).unwrap();
        }
        let stream = enc.finish().unwrap();
        // Drop the trailer and half of the data the zeros produced.
        let cut = &stream[..(stream.len() - 8) / 2];
        let mut dec = ArithmeticDecoder::new(cut).unwrap();
        let result: Result<Vec<u8>, Error> = bits.iter().map(|_| dec.decode_bit(65000)).collect();
        assert!(matches!(result, Err(Error::UnexpectedEnd { .. })));
    }
}
