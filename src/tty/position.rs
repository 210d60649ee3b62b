//! Cursor positions.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// A position in a text terminal.
///
/// Follows the usual terminal convention: (row, column), both 1-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub row: i32,
    pub column: i32,
}

impl Position {
    pub const fn new(row: i32, column: i32) -> Self {
        Self { row, column }
    }

    /// Offset of `rows` rows and no columns.
    pub const fn rows(rows: i32) -> Self {
        Self::new(rows, 0)
    }
}

impl Add for Position {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.row + other.row, self.column + other.column)
    }
}

impl Mul<i32> for Position {
    type Output = Self;

    fn mul(self, scalar: i32) -> Self {
        Self::new(self.row * scalar, self.column * scalar)
    }
}

impl Neg for Position {
    type Output = Self;

    fn neg(self) -> Self {
        self * -1
    }
}

impl Sub for Position {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self + -other
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, column): (i32, i32)) -> Self {
        Self::new(row, column)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}
