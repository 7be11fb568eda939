//! The compression module drives the model and the coder over whole buffers.
//!
//! Compression happens in the following steps, for every input byte in order:
//! - Bit tree: Split the byte into eight decisions, most significant first, each with its
//!   own node in the byte's bit tree.
//! - Model lookup: Select the table entry for (previous byte, node).
//! - Coding: Narrow the coder interval with that entry's prediction, emitting any settled
//!   leading bytes.
//! - Update: Move the entry's prediction toward the bit just coded.
//!
//! After the last byte the coder's final `high` and four zero bytes are appended.
//!
//! Decompression is the mirror image. The decoder walks the bit tree from the root,
//! and each decoded bit selects the next node, so it visits the same entries in the same
//! order and keeps an identical model. The stream carries no length, so the caller
//! supplies the original size.
//!
pub mod compress;
pub mod decompress;
