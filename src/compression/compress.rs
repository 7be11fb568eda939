use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::time::Instant;

use log::{debug, info};

use crate::coder::encoder::ArithmeticEncoder;
use crate::error::{Error, Result};
use crate::model::context::encode_nodes;
use crate::model::table::ModelTable;
use crate::tools::cli::BitOpts;
use crate::tools::report::{Direction, PassReport};

/// Compress `input` into `writer`, one bit at a time, most significant bit first.
///
/// Every bit is coded with the table entry selected by the previous byte and the bit's
/// node in the byte's bit tree, and that entry is updated right after. The first byte is
/// coded as if it followed a zero byte. The trailer is written last.
///
/// Returns the bytes produced by the coder itself, not counting the 8 byte trailer.
pub fn compress<W: Write>(input: &[u8], model: &mut ModelTable, writer: W) -> Result<usize> {
    let mut enc = ArithmeticEncoder::new(writer);
    let mut prev = 0_u8;

    for &byte in input {
        for (node, bit) in encode_nodes(byte) {
            let entry = model.get(prev, node);
            enc.encode_bit(bit, entry.prediction())?;
            entry.update(bit);
        }
        prev = byte;
    }

    let written = enc.bytes_written();
    enc.finish()?;
    debug!(
        "Compressed {} bytes into {} coded bytes plus trailer.",
        input.len(),
        written
    );
    Ok(written)
}

/// Compress `input` with a fresh model into a new buffer, trailer included.
pub fn compress_to_vec(input: &[u8]) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(input.len() / 2 + 16);
    compress(input, &mut ModelTable::new(), &mut out)?;
    Ok(out)
}

/// Compress the input file named in opts into the output file. Returns the original data
/// so the caller can verify the round trip, and the timing report for this pass.
pub fn compress_file(opts: &BitOpts) -> Result<(Vec<u8>, PassReport)> {
    let data = fs::read(&opts.input).map_err(|source| Error::IoUnavailable {
        path: opts.input.clone(),
        source,
    })?;
    let f_out = File::create(&opts.output).map_err(|source| Error::IoUnavailable {
        path: opts.output.clone(),
        source,
    })?;
    info!(
        "Compressing {} ({} bytes) into {}.",
        opts.input.display(),
        data.len(),
        opts.output.display()
    );

    let start = Instant::now();
    let mut writer = BufWriter::new(f_out);
    let coded = compress(&data, &mut ModelTable::new(), &mut writer)?;
    writer.flush()?;
    let elapsed = start.elapsed();

    let report = PassReport {
        direction: Direction::Compress,
        bytes_in: data.len(),
        bytes_out: coded,
        elapsed,
    };
    Ok((data, report))
}
