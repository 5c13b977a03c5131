//! A fixed-size cell mask over an `N×N` board, packed into an unsigned integer.
//!
//! The mask is the membership index behind [`OccupancyTracker`](crate::OccupancyTracker):
//! it answers "is this cell locked" in constant time while the tracker keeps
//! insertion order. Cell `(x, z)` lives at bit `z * N + x`.

use core::ops::{BitAnd, BitOrAssign};
use core::{any, fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

use crate::common::BoardCoordinate;

/// Errors returned by cell mask operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellMaskError {
    /// Requested board size N*N exceeds capacity of `T::BITS`.
    SizeTooLarge { n: usize, capacity: usize },
    /// Coordinate lies outside `[0, N)` on either axis.
    OutOfBounds { x: usize, z: usize },
}

impl fmt::Display for CellMaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellMaskError::SizeTooLarge { n, capacity } => {
                write!(f, "SizeTooLarge: N*N={} exceeds T::BITS={}", n * n, capacity)
            }
            CellMaskError::OutOfBounds { x, z } => {
                write!(f, "OutOfBounds: x={}, z={}", x, z)
            }
        }
    }
}

/// A fixed-size N×N set of board cells stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct CellMask<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

impl<T, const N: usize> CellMask<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    const BOARD_BITS: usize = N * N;

    #[inline]
    fn mask() -> T {
        if Self::BOARD_BITS == mem::size_of::<T>() * 8 {
            !T::zero()
        } else {
            (T::one() << Self::BOARD_BITS) - T::one()
        }
    }

    #[inline]
    fn index(cell: BoardCoordinate) -> Result<usize, CellMaskError> {
        if cell.x >= N || cell.z >= N {
            Err(CellMaskError::OutOfBounds {
                x: cell.x,
                z: cell.z,
            })
        } else {
            Ok(cell.z * N + cell.x)
        }
    }

    /// Create an empty mask without size check.
    #[inline]
    pub fn new() -> Self {
        CellMask { bits: T::zero() }
    }

    /// Fallible constructor: returns `Err(SizeTooLarge)` if N*N > T::BITS.
    pub fn try_new() -> Result<Self, CellMaskError> {
        let capacity = mem::size_of::<T>() * 8;
        if Self::BOARD_BITS > capacity {
            Err(CellMaskError::SizeTooLarge { n: N, capacity })
        } else {
            Ok(Self::new())
        }
    }

    /// Number of cells in the mask.
    pub fn count(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Membership test. Cells outside the board are never members.
    pub fn contains(&self, cell: BoardCoordinate) -> bool {
        match Self::index(cell) {
            Ok(idx) => ((self.bits >> idx) & T::one()) != T::zero(),
            Err(_) => false,
        }
    }

    /// Adds `cell` to the mask.
    pub fn insert(&mut self, cell: BoardCoordinate) -> Result<(), CellMaskError> {
        let idx = Self::index(cell)?;
        self.bits = self.bits | (T::one() << idx);
        Ok(())
    }

    /// Removes every cell.
    #[inline]
    pub fn clear(&mut self) {
        self.bits = T::zero();
    }

    /// Builds a mask from a sequence of cells.
    pub fn from_cells<'a, I>(cells: I) -> Result<Self, CellMaskError>
    where
        I: IntoIterator<Item = &'a BoardCoordinate>,
    {
        let mut mask = Self::new();
        for &cell in cells {
            mask.insert(cell)?;
        }
        Ok(mask)
    }

    /// Iterator over the member cells in row-major (z, then x) order.
    #[inline]
    pub fn iter(&self) -> Cells<'_, T, N> {
        Cells { mask: self, idx: 0 }
    }

    #[inline]
    fn from_raw(raw: T) -> Self {
        CellMask {
            bits: raw & Self::mask(),
        }
    }
}

impl<T, const N: usize> Default for CellMask<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> fmt::Debug for CellMask<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "CellMask<{}, {}>:", any::type_name::<T>(), N)?;
        for z in 0..N {
            for x in 0..N {
                let bit = if self.contains(BoardCoordinate::new(x, z)) {
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

/// Iterator over the member cells of a [`CellMask`].
#[derive(Clone, Copy)]
pub struct Cells<'a, T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    mask: &'a CellMask<T, N>,
    idx: usize,
}

impl<'a, T, const N: usize> Iterator for Cells<'a, T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = BoardCoordinate;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < N * N {
            let idx = self.idx;
            self.idx += 1;
            if ((self.mask.bits >> idx) & T::one()) != T::zero() {
                return Some(BoardCoordinate::new(idx % N, idx / N));
            }
        }
        None
    }
}

impl<T, const N: usize> BitAnd for CellMask<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        CellMask::from_raw(self.bits & rhs.bits)
    }
}

impl<T, const N: usize> BitOrAssign for CellMask<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits = self.bits | rhs.bits;
    }
}
