//! Bit-tree contexts for coding one byte as eight binary decisions.
//!
//! The tree is implicit: the root is node 1, and the children of node `n` are `2n` and
//! `2n + 1`. After eight decisions the node lies in 256..512 and its low byte is the
//! value that was coded. The leading one bit keeps paths of different lengths apart.
//!
//! The encoder knows the whole byte and can compute every node directly. The decoder
//! only knows the bits it has decoded so far and walks down the tree instead. Both
//! visit exactly the same nodes, which is what lets the two sides share a model.

/// Node where every byte starts.
pub const ROOT: usize = 1;

/// Node and bit for each of the eight bit positions of `byte`, most significant first.
pub fn encode_nodes(byte: u8) -> impl Iterator<Item = (usize, u8)> {
    let x = byte as usize;
    (0..8).rev().map(move |j| ((x + 256) >> (j + 1), (x >> j) as u8 & 1))
}

/// Decoder side walk down the bit tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BitTree {
    node: usize,
}

impl BitTree {
    pub fn new() -> Self {
        Self { node: ROOT }
    }

    /// Context for the next bit.
    #[inline]
    pub fn node(&self) -> usize {
        self.node
    }

    /// Descend by one decoded bit.
    #[inline]
    pub fn push(&mut self, bit: u8) {
        debug_assert!(!self.is_complete());
        self.node = self.node * 2 + bit as usize;
    }

    /// True once all eight bits are known.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.node >= 256
    }

    /// The finished byte. Only meaningful once `is_complete` is true.
    #[inline]
    pub fn byte(&self) -> u8 {
        (self.node - 256) as u8
    }
}

impl Default for BitTree {
    fn default() -> Self {
        Self::new()
    }
}
