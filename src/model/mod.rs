//! The model module holds everything the encoder and decoder must agree on before a
//! single bit is coded.
//!
//! - table: The dense order-1 table of adaptive probabilities and its update rule.
//! - context: The bit-tree decomposition that maps each bit of a byte to a table column.
//!
pub mod context;
pub mod table;
