//! The coder module is the carry-less binary arithmetic coder.
//!
//! Encoder and decoder share a 32 bit interval `[low, high]`. Each coded bit splits it at
//! `mid`, giving `[low, mid]` to a one and `[mid + 1, high]` to a zero. Once the top byte
//! of `low` and `high` agree it can never change again, so it is shifted out (written by
//! the encoder, matched by one byte of input on the decoder side) and the interval is
//! widened again. No carry can ever propagate into bytes already written.
//!
//! After the last bit the encoder writes its final `high` followed by four zero bytes.
//! The decoder reads four bytes ahead of the encoder, so the padding is what it consumes
//! while finishing the final renormalization.
//!
pub mod decoder;
pub mod encoder;

/// Starting `low`. Zero is never used so renormalization cannot emit runs of zero bytes.
pub const LOW_START: u32 = 1;
/// Starting `high`.
pub const HIGH_START: u32 = 0xffff_ffff;
/// Bytes appended after the coded data: the final `high` and four bytes of padding.
pub const TRAILER_LEN: usize = 8;

/// Split point of `[low, high]` for a Q16 probability that the next bit is one.
#[inline]
pub(crate) fn split(low: u32, high: u32, probability: u32) -> u32 {
    debug_assert!(probability < 1 << 16);
    low + (((high - low) as u64 * probability as u64) >> 16) as u32
}

/// True while the leading bytes of `low` and `high` are identical.
#[inline]
pub(crate) fn top_byte_settled(low: u32, high: u32) -> bool {
    (high ^ low) < 0x0100_0000
}

/// Shift the settled top byte out of the interval, keeping `low` away from zero.
#[inline]
pub(crate) fn shift(low: &mut u32, high: &mut u32) {
    *high = *high << 8 | 0xff;
    *low <<= 8;
    if *low == 0 {
        *low = 1;
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn split_test() {
        assert_eq!(split(LOW_START, HIGH_START, 32768), 0x8000_0000);
        assert_eq!(split(0, 0xffff, 1), 0);
        assert_eq!(split(10, 10, 40000), 10);
    }

    #[test]
    fn shift_never_zero_test() {
        let (mut low, mut high) = (0x1200_0000, 0x12ff_ffff);
        assert!(top_byte_settled(low, high));
        shift(&mut low, &mut high);
        assert_eq!(low, 1);
        assert_eq!(high, 0xffff_ffff);
        assert!(!top_byte_settled(low, high));
    }
}
