#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// A half-open range `[start, end)` of token positions.
///
/// Intervals are ordered by `(start, end)`, which is the order extraction
/// parts are rendered in. An interval with `end <= start` is empty and
/// intersects nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct Interval {
    pub start: u32,
    pub end: u32,
}

impl Interval {
    pub const EMPTY: Interval = Interval { start: 0, end: 0 };

    /// Interval from `start` (inclusive) to `end` (exclusive).
    pub const fn open(start: u32, end: u32) -> Self {
        if end <= start {
            Self::EMPTY
        } else {
            Self { start, end }
        }
    }

    /// Interval covering exactly one token.
    pub const fn singleton(index: u32) -> Self {
        Self { start: index, end: index + 1 }
    }

    pub const fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    pub const fn len(&self) -> u32 {
        if self.is_empty() {
            0
        } else {
            self.end - self.start
        }
    }

    pub const fn contains(&self, index: u32) -> bool {
        self.start <= index && index < self.end
    }

    /// Smallest interval covering every non-empty input.
    pub fn span<I>(intervals: I) -> Self
    where
        I: IntoIterator<Item = Interval>,
    {
        intervals
            .into_iter()
            .filter(|i| !i.is_empty())
            .fold(None, |acc: Option<Interval>, i| match acc {
                None => Some(i),
                Some(a) => Some(Interval {
                    start: a.start.min(i.start),
                    end: a.end.max(i.end),
                }),
            })
            .unwrap_or(Self::EMPTY)
    }

    /// True if every position of `other` lies inside `self`.
    pub const fn superset(&self, other: &Interval) -> bool {
        !self.is_empty() && !other.is_empty() && self.start <= other.start && other.end <= self.end
    }

    pub const fn intersects(&self, other: &Interval) -> bool {
        !self.is_empty() && !other.is_empty() && self.start < other.end && other.start < self.end
    }
}

impl core::fmt::Display for Interval {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.is_empty() {
            write!(f, "{{}}")
        } else {
            write!(f, "[{}, {})", self.start, self.end)
        }
    }
}
