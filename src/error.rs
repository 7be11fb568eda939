//! Error types for the bitwise compressor.
//!
//! Every error is fatal to the run that produced it. An arithmetic coded stream has no
//! resynchronization points, so nothing after the first failure can be trusted.

use std::path::PathBuf;

use thiserror::Error;

/// Error variants for compression and decompression runs.
#[derive(Debug, Error)]
pub enum Error {
    /// The code value fell outside the current interval, or the trailer did not match
    /// the decoder's final state. Either the stream is damaged or it was decoded with a
    /// different model than the one that encoded it.
    #[error("archive corrupted at byte {position}: code {code:#010x} outside [{low:#010x}, {high:#010x}]")]
    Corrupt {
        position: usize,
        low: u32,
        high: u32,
        code: u32,
    },

    /// Renormalization needed another input byte but the buffer was exhausted.
    #[error("unexpected end of compressed data at byte {position}")]
    UnexpectedEnd { position: usize },

    /// The verification pass decoded something other than the original input.
    #[error("decompressed data differs from the input at byte {position}")]
    Mismatch { position: usize },

    /// A file could not be opened or created.
    #[error("unable to open {}: {source}", .path.display())]
    IoUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing to the output sink failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for bitwise operations.
pub type Result<T> = std::result::Result<T, Error>;
