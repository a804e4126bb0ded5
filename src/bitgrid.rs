//! A runtime-sized bit grid over unsigned words.
//!
//! A `rows × cols` grid is packed row-major into a vector of unsigned
//! integers `T`. The game keeps two of these per board: one marking mine
//! cells and one marking swept cells. Dimensions come from the game
//! configuration, so they are plain fields rather than const generics.

use core::{any, fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

/// Errors returned by bit-grid operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitGridError {
    /// Row or column index is out of bounds [0..rows) × [0..cols).
    IndexOutOfBounds { row: usize, col: usize },
}

impl fmt::Display for BitGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitGridError::IndexOutOfBounds { row, col } => {
                write!(f, "IndexOutOfBounds: row={}, col={}", row, col)
            }
        }
    }
}

/// A `rows × cols` bit grid stored in a vector of unsigned integers `T`.
#[derive(Clone, PartialEq, Eq)]
pub struct BitGrid<T>
where
    T: PrimInt + Unsigned + Zero,
{
    rows: usize,
    cols: usize,
    words: Vec<T>,
}

impl<T> BitGrid<T>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Number of usable bits per storage word.
    const WORD_BITS: usize = mem::size_of::<T>() * 8;

    /// Create a new empty grid (all bits cleared).
    pub fn new(rows: usize, cols: usize) -> Self {
        let words = vec![T::zero(); (rows * cols).div_ceil(Self::WORD_BITS)];
        BitGrid { rows, cols, words }
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the number of set bits (marked cells).
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Returns true if no bits are set.
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|w| w.is_zero())
    }

    /// Gets the bit at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<bool, BitGridError> {
        let idx = self.check_bounds(row, col)?;
        Ok(self.bit(idx))
    }

    /// Sets the bit at (row, col) to 1.
    pub fn set(&mut self, row: usize, col: usize) -> Result<(), BitGridError> {
        let idx = self.check_bounds(row, col)?;
        let word = &mut self.words[idx / Self::WORD_BITS];
        *word = *word | (T::one() << (idx % Self::WORD_BITS));
        Ok(())
    }

    /// Clears the bit at (row, col) to 0.
    pub fn clear(&mut self, row: usize, col: usize) -> Result<(), BitGridError> {
        let idx = self.check_bounds(row, col)?;
        let word = &mut self.words[idx / Self::WORD_BITS];
        *word = *word & !(T::one() << (idx % Self::WORD_BITS));
        Ok(())
    }

    /// Clears all bits to `0`.
    pub fn clear_all(&mut self) {
        for w in &mut self.words {
            *w = T::zero();
        }
    }

    #[inline]
    fn check_bounds(&self, row: usize, col: usize) -> Result<usize, BitGridError> {
        if row >= self.rows || col >= self.cols {
            Err(BitGridError::IndexOutOfBounds { row, col })
        } else {
            Ok(row * self.cols + col)
        }
    }

    #[inline]
    fn bit(&self, idx: usize) -> bool {
        ((self.words[idx / Self::WORD_BITS] >> (idx % Self::WORD_BITS)) & T::one()) != T::zero()
    }

    /// Iterator over the set bits of the grid, in row-major order.
    #[inline]
    pub fn iter_set_bits(&self) -> SetBits<'_, T> {
        SetBits { grid: self, idx: 0 }
    }
}

impl<T> fmt::Debug for BitGrid<T>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "BitGrid<{}> {}x{}:",
            any::type_name::<T>(),
            self.rows,
            self.cols
        )?;
        for r in 0..self.rows {
            for c in 0..self.cols {
                let bit = if self.bit(r * self.cols + c) {
                    '■'
                } else {
                    '□'
                };
                write!(f, "{} ", bit)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Iterator over the set bits of a bit grid.
#[derive(Clone, Copy)]
pub struct SetBits<'a, T>
where
    T: PrimInt + Unsigned + Zero,
{
    grid: &'a BitGrid<T>,
    idx: usize,
}

impl<'a, T> Iterator for SetBits<'a, T>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < self.grid.rows * self.grid.cols {
            let idx = self.idx;
            self.idx += 1;
            if self.grid.bit(idx) {
                return Some((idx / self.grid.cols, idx % self.grid.cols));
            }
        }
        None
    }
}
