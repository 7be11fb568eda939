use std::fmt::{Display, Formatter};
use std::time::Duration;

/// Which way the data went
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Compress,
    Decompress,
}

/// Counts and timing for one pass over a file.
#[derive(Clone, Debug)]
pub struct PassReport {
    pub direction: Direction,
    /// Bytes read by the pass
    pub bytes_in: usize,
    /// Bytes produced. For compression this excludes the trailer.
    pub bytes_out: usize,
    pub elapsed: Duration,
}

impl PassReport {
    /// Throughput over the input, in MB/s. Zero when the pass took no measurable time.
    pub fn mbps(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs == 0.0 {
            return 0.0;
        }
        self.bytes_in as f64 / (1024.0 * 1024.0) / secs
    }

    /// Compressed size as a percentage of the original.
    pub fn remaining(&self) -> usize {
        if self.bytes_in == 0 {
            return 0;
        }
        self.bytes_out * 100 / self.bytes_in
    }
}

impl Display for PassReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let usec = self.elapsed.as_micros();
        match self.direction {
            Direction::Compress => write!(
                f,
                "{:9} bytes   compressed in {:9} usec, {:.2} MB/s remaining {}%",
                self.bytes_in,
                usec,
                self.mbps(),
                self.remaining()
            ),
            Direction::Decompress => write!(
                f,
                "{:9} bytes decompressed in {:9} usec, {:.2} MB/s",
                self.bytes_out,
                usec,
                self.mbps()
            ),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn compress_line_test() {
        let r = PassReport {
            direction: Direction::Compress,
            bytes_in: 2 * 1024 * 1024,
            bytes_out: 512 * 1024,
            elapsed: Duration::from_secs(1),
        };
        assert_eq!(r.remaining(), 25);
        assert_eq!(
            r.to_string(),
            "  2097152 bytes   compressed in   1000000 usec, 2.00 MB/s remaining 25%"
        );
    }

    #[test]
    fn decompress_line_test() {
        let r = PassReport {
            direction: Direction::Decompress,
            bytes_in: 1024 * 1024,
            bytes_out: 4_000_000,
            elapsed: Duration::from_millis(500),
        };
        assert_eq!(
            r.to_string(),
            "  4000000 bytes decompressed in    500000 usec, 2.00 MB/s"
        );
    }

    #[test]
    fn empty_pass_test() {
        let r = PassReport {
            direction: Direction::Compress,
            bytes_in: 0,
            bytes_out: 0,
            elapsed: Duration::ZERO,
        };
        assert_eq!(r.remaining(), 0);
        assert_eq!(r.mbps(), 0.0);
    }
}
