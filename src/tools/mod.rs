//! The tools module provides the helpers around the codec used by the command line program.
//!
//! The tools are:
//! - cli: Command line interface and run options.
//! - report: Byte counts, timing and throughput for each pass.
//!
pub mod cli;
pub mod report;
