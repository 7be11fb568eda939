use std::fs;
use std::io::Write;
use std::time::Instant;

use log::{debug, error, info};

use crate::bitstream::bytewriter::ByteWriter;
use crate::coder::decoder::ArithmeticDecoder;
use crate::error::{Error, Result};
use crate::model::context::BitTree;
use crate::model::table::ModelTable;
use crate::tools::cli::BitOpts;
use crate::tools::report::{Direction, PassReport};

/// Decompress `input` into `writer`. `original_len` is the number of bytes that were
/// compressed; the stream itself does not record it.
///
/// Each byte is rebuilt by walking its bit tree from the root, using the same table
/// entries in the same order as the encoder did. Once `original_len` bytes are out,
/// the remaining input must be exactly the trailer padding.
///
/// Returns the number of bytes written.
pub fn decompress<W: Write>(
    input: &[u8],
    original_len: usize,
    model: &mut ModelTable,
    writer: W,
) -> Result<usize> {
    let mut dec = ArithmeticDecoder::new(input)?;
    let mut out = ByteWriter::new(writer);
    let mut prev = 0_u8;

    for _ in 0..original_len {
        let mut tree = BitTree::new();
        while !tree.is_complete() {
            let entry = model.get(prev, tree.node());
            let bit = dec.decode_bit(entry.prediction())?;
            entry.update(bit);
            tree.push(bit);
        }
        prev = tree.byte();
        out.out8(prev)?;
    }

    debug!(
        "Decoded {} bytes from {} of {} input bytes.",
        out.written(),
        dec.position(),
        input.len()
    );
    dec.finish()?;
    out.flush()?;
    Ok(out.written())
}

/// Decompress `input` with a fresh model into a new buffer.
pub fn decompress_to_vec(input: &[u8], original_len: usize) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(original_len);
    decompress(input, original_len, &mut ModelTable::new(), &mut out)?;
    Ok(out)
}

/// Read back the output file named in opts, decompress it and compare the result with
/// `original`. Returns the timing report for this pass.
pub fn verify_file(opts: &BitOpts, original: &[u8]) -> Result<PassReport> {
    let data = fs::read(&opts.output).map_err(|source| Error::IoUnavailable {
        path: opts.output.clone(),
        source,
    })?;
    info!(
        "Verifying {} ({} bytes).",
        opts.output.display(),
        data.len()
    );

    let start = Instant::now();
    let mut restored = Vec::with_capacity(original.len());
    let total = decompress(&data, original.len(), &mut ModelTable::new(), &mut restored)?;
    let elapsed = start.elapsed();

    if let Some(position) = restored.iter().zip(original).position(|(a, b)| a != b) {
        error!("Verification failed for {}.", opts.output.display());
        return Err(Error::Mismatch { position });
    }

    Ok(PassReport {
        direction: Direction::Decompress,
        bytes_in: data.len(),
        bytes_out: total,
        elapsed,
    })
}
