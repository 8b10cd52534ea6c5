use crate::{
    error::{Error, Result},
    types::VId,
};

const WORD_BITS: usize = 64;

/// A dense square bit matrix, one row of `u64` words per vertex.
///
/// The diagonal is always set, so `connected(v, v)` holds for every `v`.
/// Off the diagonal the matrix is symmetric.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    num_rows: usize,
    stride: usize,
    words: Vec<u64>,
}

impl AdjacencyMatrix {
    /// Creates a matrix with `num_rows` rows and only the diagonal set.
    ///
    /// Fails with [`Error::GraphTooLarge`] if the words cannot be addressed
    /// or allocated.
    pub fn new(num_rows: usize) -> Result<Self> {
        let too_large = || Error::GraphTooLarge {
            num_vertices: num_rows.saturating_sub(1),
        };
        let stride = Self::stride(num_rows);
        let len = num_rows.checked_mul(stride).ok_or_else(too_large)?;
        let mut words = Vec::new();
        words.try_reserve_exact(len).map_err(|_| too_large())?;
        words.resize(len, 0);
        let mut matrix = Self {
            num_rows,
            stride,
            words,
        };
        for v in 0..num_rows {
            matrix.set(v, v);
        }
        Ok(matrix)
    }

    /// The number of bytes a matrix with `num_rows` rows occupies, or `None`
    /// if that overflows `usize`.
    pub fn size_of(num_rows: usize) -> Option<usize> {
        num_rows
            .checked_mul(Self::stride(num_rows))?
            .checked_mul(std::mem::size_of::<u64>())
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    #[inline]
    pub fn connected(&self, u: VId, v: VId) -> bool {
        self.words[u * self.stride + v / WORD_BITS] >> (v % WORD_BITS) & 1 == 1
    }

    /// `connected(u, v)` as `0` or `1`.
    #[inline]
    pub fn bit(&self, u: VId, v: VId) -> u8 {
        (self.words[u * self.stride + v / WORD_BITS] >> (v % WORD_BITS) & 1) as u8
    }

    pub fn connect(&mut self, u: VId, v: VId) {
        self.set(u, v);
        self.set(v, u);
    }

    fn set(&mut self, u: VId, v: VId) {
        self.words[u * self.stride + v / WORD_BITS] |= 1 << (v % WORD_BITS);
    }

    fn stride(num_rows: usize) -> usize {
        num_rows / WORD_BITS + (num_rows % WORD_BITS != 0) as usize
    }
}
