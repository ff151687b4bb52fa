use std::ops::{Add, AddAssign};

/// Settings applied uniformly to every geometry of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CleanOptions {
    /// Decimal digits kept per ordinate. Zero and negative values are allowed.
    pub precision: i32,
    /// Append the first coordinate to rings that are open after cleaning.
    pub close_rings: bool,
}

impl CleanOptions {
    pub fn new(precision: i32) -> Self {
        CleanOptions {
            precision,
            close_rings: false,
        }
    }

    pub fn with_close_rings(self, close_rings: bool) -> Self {
        CleanOptions {
            close_rings,
            ..self
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CleanStats {
    /// Consecutive duplicates dropped.
    pub removed: usize,
    pub rings_closed: usize,
    /// Non-empty rings left with fewer than 4 coordinates.
    pub degenerate_rings: usize,
}

impl Add for CleanStats {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        CleanStats {
            removed: self.removed + rhs.removed,
            rings_closed: self.rings_closed + rhs.rings_closed,
            degenerate_rings: self.degenerate_rings + rhs.degenerate_rings,
        }
    }
}

impl AddAssign for CleanStats {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}
