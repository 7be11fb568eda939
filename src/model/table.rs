//! ModelTable: the adaptive probabilities used by the arithmetic coder.
//!
//! One entry exists for every (previous byte, bit-tree node) pair. The table is dense
//! so every lookup is a single index computation, whatever contexts the data visits.

/// Initial prediction, just under one half in Q16.
pub const INITIAL_PREDICTION: i32 = 65536 / 2 - 1;
/// Update count at which the adaptation rate stops slowing down.
pub const COUNT_LIMIT: u16 = 10;
/// Added to the step denominator so the first update cannot overshoot.
const DELTA: i64 = 32767;

const ROWS: usize = 256;
const NODES: usize = 256;

/// An adaptive estimate of P(bit = 1), in Q16 fixed point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Probability {
    prediction: i32,
    count: u16,
}

impl Probability {
    pub const fn new() -> Self {
        Self {
            prediction: INITIAL_PREDICTION,
            count: 0,
        }
    }

    /// Current prediction, P(1) * 65536.
    pub fn prediction(&self) -> u32 {
        self.prediction as u32
    }

    /// Number of updates seen so far, saturating at COUNT_LIMIT.
    pub fn count(&self) -> u16 {
        self.count
    }

    /// Move the prediction toward the observed bit. The step is large while the entry is
    /// young and settles at roughly 1/10.5 of the error once the count saturates.
    ///
    /// Integer division truncates toward zero, and the denominator always exceeds 65536,
    /// so each step is strictly smaller than the remaining error. The prediction can
    /// therefore never leave [1, 65535].
    pub fn update(&mut self, bit: u8) {
        if self.count < COUNT_LIMIT {
            self.count += 1;
        }
        let error = (((bit as i64) << 16) - self.prediction as i64) << 16;
        self.prediction += (error / (((self.count as i64) << 16) + DELTA)) as i32;
        debug_assert!((1..65536).contains(&self.prediction));
    }
}

impl Default for Probability {
    fn default() -> Self {
        Self::new()
    }
}

/// The 256 x 256 table of probabilities, owned by exactly one coding run at a time.
#[derive(Clone, Debug)]
pub struct ModelTable {
    entries: Box<[Probability]>,
}

impl ModelTable {
    /// Create a table with every entry at the uniform prior.
    pub fn new() -> Self {
        Self {
            entries: vec![Probability::new(); ROWS * NODES].into_boxed_slice(),
        }
    }

    /// Return every entry to the uniform prior.
    pub fn reset_all(&mut self) {
        self.entries.fill(Probability::new());
    }

    /// Entry for the bit coded at `node` of the bit tree, following byte `prev`.
    #[inline]
    pub fn get(&mut self, prev: u8, node: usize) -> &mut Probability {
        debug_assert!((1..NODES).contains(&node));
        &mut self.entries[(prev as usize) << 8 | node]
    }
}

impl Default for ModelTable {
    fn default() -> Self {
        Self::new()
    }
}
