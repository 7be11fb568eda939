//! Bitwise: a small lossless compressor built on adaptive binary arithmetic coding.
//!
//! Each byte is split into eight binary decisions along a bit tree. Every decision is
//! coded with its own adaptive probability, chosen by the previous byte (an order-1
//! context) and the decision's node in the tree. The coder is a 32 bit carry-less
//! arithmetic coder that emits a byte whenever the leading byte of its interval settles.
//!
//! The compressed stream is the coder output followed by an 8 byte trailer, with no
//! header of any kind. The decompressor must be told the original length.
//!
//! Basic usage:
//!
//! ```
//! let data = b"hello hello hello hello";
//! let packed = bitwise::compress_to_vec(data).unwrap();
//! let unpacked = bitwise::decompress_to_vec(&packed, data.len()).unwrap();
//! assert_eq!(unpacked, data);
//! ```
//!
//! A model table belongs to one run. Independent streams can be coded concurrently as
//! long as each uses its own `ModelTable`.
//!
pub mod bitstream;
pub mod coder;
pub mod compression;
pub mod error;
pub mod model;
pub mod tools;

pub use coder::{decoder::ArithmeticDecoder, encoder::ArithmeticEncoder, TRAILER_LEN};
pub use compression::compress::{compress, compress_to_vec};
pub use compression::decompress::{decompress, decompress_to_vec};
pub use error::{Error, Result};
pub use model::table::{ModelTable, Probability};
