use std::fmt;
use std::ops::{Bound, RangeBounds};
#[cfg(feature="serde")]
use serde::{Serialize, Deserialize, Deserializer};

use crate::endpoint::{fmt_bracketed, BoundaryKind, Endpoint};
use crate::error::{Result, SpanError};

/// Anything that covers a stretch of time between two boundaries.
///
/// Implementors must guarantee `end() >= start()`. A span whose start equals
/// its end is an instant, and is treated as closed at both ends by every
/// predicate and sweep in this crate, whatever kinds it reports.
pub trait Span {
    type Time: Ord + Clone;

    fn start(&self) -> &Self::Time;
    fn end(&self) -> &Self::Time;
    fn start_kind(&self) -> BoundaryKind;
    fn end_kind(&self) -> BoundaryKind;
}

impl<S: Span + ?Sized> Span for &S {
    type Time = S::Time;

    fn start(&self) -> &Self::Time {
        (**self).start()
    }

    fn end(&self) -> &Self::Time {
        (**self).end()
    }

    fn start_kind(&self) -> BoundaryKind {
        (**self).start_kind()
    }

    fn end_kind(&self) -> BoundaryKind {
        (**self).end_kind()
    }
}

/// A plain span of time with an explicit boundary kind at each end.
///
/// This is what [`union`](crate::union) and [`intersection`](crate::intersection)
/// produce when no combine function reshapes their results.
#[cfg_attr(feature="serde", derive(Serialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Interval<T> {
    start: T,
    end: T,
    start_kind: BoundaryKind,
    end_kind: BoundaryKind,
}

impl<T: Ord> Interval<T> {
    /// Creates a closed-open interval `[start, end[`.
    ///
    /// # Panics
    ///
    /// Panics if `end < start`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use spanset::{BoundaryKind, Interval, Span};
    ///
    /// let iv = Interval::new(0, 10);
    /// assert_eq!(iv.start_kind(), BoundaryKind::Closed);
    /// assert_eq!(iv.end_kind(), BoundaryKind::Open);
    /// ```
    pub fn new(start: T, end: T) -> Interval<T> {
        Interval::with_kinds(start, end, BoundaryKind::Closed, BoundaryKind::Open)
    }

    /// Creates an interval `[start, end]` including both ends.
    pub fn closed(start: T, end: T) -> Interval<T> {
        Interval::with_kinds(start, end, BoundaryKind::Closed, BoundaryKind::Closed)
    }

    /// Creates an interval `]start, end[` excluding both ends.
    pub fn open(start: T, end: T) -> Interval<T> {
        Interval::with_kinds(start, end, BoundaryKind::Open, BoundaryKind::Open)
    }

    /// # Panics
    ///
    /// Panics if `end < start`.
    pub fn with_kinds(
        start: T,
        end: T,
        start_kind: BoundaryKind,
        end_kind: BoundaryKind,
    ) -> Interval<T> {
        assert!(start <= end, "Invalid interval: end must not precede start");
        Interval {
            start,
            end,
            start_kind,
            end_kind,
        }
    }

    /// Fallible counterpart of [`Interval::new`].
    ///
    /// ```rust
    /// use spanset::{Interval, SpanError};
    ///
    /// assert!(Interval::try_new(1, 2).is_ok());
    /// assert_eq!(Interval::try_new(2, 1), Err(SpanError::InvalidRange));
    /// ```
    pub fn try_new(start: T, end: T) -> Result<Interval<T>> {
        Interval::try_with_kinds(start, end, BoundaryKind::Closed, BoundaryKind::Open)
    }

    pub fn try_closed(start: T, end: T) -> Result<Interval<T>> {
        Interval::try_with_kinds(start, end, BoundaryKind::Closed, BoundaryKind::Closed)
    }

    pub fn try_open(start: T, end: T) -> Result<Interval<T>> {
        Interval::try_with_kinds(start, end, BoundaryKind::Open, BoundaryKind::Open)
    }

    pub fn try_with_kinds(
        start: T,
        end: T,
        start_kind: BoundaryKind,
        end_kind: BoundaryKind,
    ) -> Result<Interval<T>> {
        if end < start {
            return Err(SpanError::InvalidRange);
        }

        Ok(Interval {
            start,
            end,
            start_kind,
            end_kind,
        })
    }

    /// Builds an interval from two endpoints whose order is already known.
    pub(crate) fn from_endpoints(start: Endpoint<T>, end: Endpoint<T>) -> Interval<T> {
        debug_assert!(start.value <= end.value);
        Interval {
            start: start.value,
            end: end.value,
            start_kind: start.kind,
            end_kind: end.kind,
        }
    }

    pub fn is_instant(&self) -> bool {
        self.start == self.end
    }

    /// Whether `point` lies inside the interval, honouring both boundary kinds.
    /// An instant always contains its own point.
    pub fn contains(&self, point: &T) -> bool {
        if self.is_instant() {
            return *point == self.start;
        }

        let after_start = match self.start_kind {
            BoundaryKind::Closed => *point >= self.start,
            BoundaryKind::Open => *point > self.start,
        };
        let before_end = match self.end_kind {
            BoundaryKind::Closed => *point <= self.end,
            BoundaryKind::Open => *point < self.end,
        };

        after_start && before_end
    }
}

impl<T: Ord + Clone> Interval<T> {
    /// Copies the time values and boundary kinds of any span.
    pub fn from_span<S>(span: &S) -> Interval<T>
    where
        S: Span<Time = T> + ?Sized,
    {
        Interval {
            start: span.start().clone(),
            end: span.end().clone(),
            start_kind: span.start_kind(),
            end_kind: span.end_kind(),
        }
    }

    pub fn start_endpoint(&self) -> Endpoint<T> {
        Endpoint::new(self.start.clone(), self.start_kind)
    }

    pub fn end_endpoint(&self) -> Endpoint<T> {
        Endpoint::new(self.end.clone(), self.end_kind)
    }

    pub fn endpoints(&self) -> (Endpoint<T>, Endpoint<T>) {
        (self.start_endpoint(), self.end_endpoint())
    }

    /// The interval as a pair of [`std::ops::Bound`]s.
    ///
    /// ```rust
    /// use std::ops::Bound::*;
    /// use spanset::Interval;
    ///
    /// assert_eq!(Interval::new(1, 4).to_bounds(), (Included(1), Excluded(4)));
    /// ```
    pub fn to_bounds(&self) -> (Bound<T>, Bound<T>) {
        (self.start_endpoint().into(), self.end_endpoint().into())
    }
}

impl<T: Ord + Clone> Span for Interval<T> {
    type Time = T;

    fn start(&self) -> &T {
        &self.start
    }

    fn end(&self) -> &T {
        &self.end
    }

    fn start_kind(&self) -> BoundaryKind {
        self.start_kind
    }

    fn end_kind(&self) -> BoundaryKind {
        self.end_kind
    }
}

impl<T> RangeBounds<T> for Interval<T> {
    fn start_bound(&self) -> Bound<&T> {
        match self.start_kind {
            BoundaryKind::Closed => Bound::Included(&self.start),
            BoundaryKind::Open => Bound::Excluded(&self.start),
        }
    }

    fn end_bound(&self) -> Bound<&T> {
        match self.end_kind {
            BoundaryKind::Closed => Bound::Included(&self.end),
            BoundaryKind::Open => Bound::Excluded(&self.end),
        }
    }
}

impl<T> fmt::Display for Interval<T>
where
    T: fmt::Display + Clone,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt_bracketed(
            f,
            &Endpoint::new(self.start.clone(), self.start_kind),
            &Endpoint::new(self.end.clone(), self.end_kind),
        )
    }
}

#[cfg(feature="serde")]
#[derive(Deserialize)]
struct RawInterval<T> {
    start: T,
    end: T,
    start_kind: BoundaryKind,
    end_kind: BoundaryKind,
}

#[cfg(feature="serde")]
impl<'de, T> Deserialize<'de> for Interval<T>
where
    T: Deserialize<'de> + Ord,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawInterval::<T>::deserialize(deserializer)?;
        Interval::try_with_kinds(raw.start, raw.end, raw.start_kind, raw.end_kind)
            .map_err(serde::de::Error::custom)
    }
}

/// A zero-length span: a single point in time, closed at both ends.
#[cfg_attr(feature="serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Instant<T> {
    at: T,
}

impl<T> Instant<T> {
    pub fn new(at: T) -> Instant<T> {
        Instant { at }
    }

    pub fn at(&self) -> &T {
        &self.at
    }
}

impl<T: Ord + Clone> Span for Instant<T> {
    type Time = T;

    fn start(&self) -> &T {
        &self.at
    }

    fn end(&self) -> &T {
        &self.at
    }

    fn start_kind(&self) -> BoundaryKind {
        BoundaryKind::Closed
    }

    fn end_kind(&self) -> BoundaryKind {
        BoundaryKind::Closed
    }
}

impl<T: Ord + Clone> From<Instant<T>> for Interval<T> {
    fn from(instant: Instant<T>) -> Interval<T> {
        Interval::closed(instant.at.clone(), instant.at)
    }
}

impl<T: fmt::Display> fmt::Display for Instant<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}]", self.at)
    }
}
