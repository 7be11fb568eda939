//! The bitstream module forms the I/O subsystem for the bitwise compressor.
//!
//! The arithmetic coder renormalizes a whole byte at a time, so both directions work in
//! bytes rather than bits.
//!
//! - bytewriter: Buffered, counting output sink for the encoder.
//! - bytereader: Cursor over the compressed buffer for the decoder.
//!
pub mod bytereader;
pub mod bytewriter;
