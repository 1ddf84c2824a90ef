use std::fmt;
use std::ops::Index;

/// Number of coordinate axes.
pub const AXES: usize = 12;
/// Axes 0..BOUNDED_AXES are range-checked; the rest carry free integers.
pub const BOUNDED_AXES: usize = 2;
/// Extent of a bounded axis: valid values are `0..BOARD_SPAN`.
pub const BOARD_SPAN: i16 = 8;

/// A point in the twelve-axis coordinate space.
///
/// Axes 0 and 1 are bounded like the file/rank of a conventional board;
/// axes 2-11 are unbounded and never range-checked anywhere in the engine.
/// Coords are immutable values, compared and hashed structurally.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Coord([i16; AXES]);

impl Coord {
    #[inline]
    pub const fn new(values: [i16; AXES]) -> Self {
        Self(values)
    }

    /// A coordinate on the bounded plane, all unbounded axes zero.
    pub const fn plane(a0: i16, a1: i16) -> Self {
        let mut values = [0i16; AXES];
        values[0] = a0;
        values[1] = a1;
        Self(values)
    }

    #[inline]
    pub fn axis(self, axis: usize) -> i16 {
        self.0[axis]
    }

    #[inline]
    pub fn values(self) -> [i16; AXES] {
        self.0
    }

    /// Copy of `self` displaced by `delta` along one axis.
    #[inline]
    pub fn offset(self, axis: usize, delta: i16) -> Self {
        let mut values = self.0;
        values[axis] += delta;
        Self(values)
    }

    /// Copy of `self` with one axis replaced.
    #[inline]
    pub fn with_axis(self, axis: usize, value: i16) -> Self {
        let mut values = self.0;
        values[axis] = value;
        Self(values)
    }

    /// Copy of `self` displaced by a full delta vector.
    #[inline]
    pub fn shift(self, delta: &[i16; AXES]) -> Self {
        let mut values = self.0;
        for (v, d) in values.iter_mut().zip(delta) {
            *v += d;
        }
        Self(values)
    }

    /// Only the bounded axes are tested; unbounded axes never disqualify
    /// a coordinate.
    #[inline]
    pub fn on_board(self) -> bool {
        self.0[..BOUNDED_AXES].iter().all(|&v| (0..BOARD_SPAN).contains(&v))
    }
}

impl Index<usize> for Coord {
    type Output = i16;

    #[inline]
    fn index(&self, axis: usize) -> &i16 {
        &self.0[axis]
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{v}")?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
#[path = "coord_tests.rs"]
mod coord_tests;
