use std::cmp::Ordering;
use std::fmt;
use std::ops::Bound;
use std::ops::Bound::*;
#[cfg(feature="serde")]
use serde::{Serialize, Deserialize};

/// Whether the boundary value of a span belongs to it.
///
/// `Open` orders before `Closed`: a closed boundary is the looser (wider)
/// of the two, an open boundary the tighter (narrower).
#[cfg_attr(feature="serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BoundaryKind {
    /// The boundary value is excluded.
    Open,
    /// The boundary value is included.
    Closed,
}

impl BoundaryKind {
    pub fn is_open(self) -> bool {
        self == BoundaryKind::Open
    }

    pub fn is_closed(self) -> bool {
        self == BoundaryKind::Closed
    }

    /// The kind covering more of a shared boundary point: `Closed` wins.
    pub fn loosest(self, other: BoundaryKind) -> BoundaryKind {
        self.max(other)
    }

    /// The kind covering less of a shared boundary point: `Open` wins.
    pub fn tightest(self, other: BoundaryKind) -> BoundaryKind {
        self.min(other)
    }
}

impl fmt::Display for BoundaryKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BoundaryKind::Open => f.write_str("open"),
            BoundaryKind::Closed => f.write_str("closed"),
        }
    }
}

/// A point in time together with the kind of boundary it forms.
///
/// Equality and ordering look at `value` only. The kind is carried along so
/// that callers can settle ties between time-equal endpoints themselves.
#[cfg_attr(feature="serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug)]
pub struct Endpoint<T> {
    pub value: T,
    pub kind: BoundaryKind,
}

impl<T> Endpoint<T> {
    pub fn new(value: T, kind: BoundaryKind) -> Endpoint<T> {
        Endpoint { value, kind }
    }

    pub fn closed(value: T) -> Endpoint<T> {
        Endpoint::new(value, BoundaryKind::Closed)
    }

    pub fn open(value: T) -> Endpoint<T> {
        Endpoint::new(value, BoundaryKind::Open)
    }

    pub fn is_before(&self, other: &Endpoint<T>) -> bool
    where
        T: Ord,
    {
        self.value < other.value
    }

    pub fn is_after(&self, other: &Endpoint<T>) -> bool
    where
        T: Ord,
    {
        self.value > other.value
    }

    /// Same instant, regardless of the boundary kinds.
    pub fn coincides(&self, other: &Endpoint<T>) -> bool
    where
        T: Ord,
    {
        self.value == other.value
    }
}

impl<T: PartialEq> PartialEq for Endpoint<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq> Eq for Endpoint<T> {}

impl<T: PartialOrd> PartialOrd for Endpoint<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<T: Ord> Ord for Endpoint<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T> From<Endpoint<T>> for Bound<T> {
    fn from(endpoint: Endpoint<T>) -> Bound<T> {
        match endpoint.kind {
            BoundaryKind::Closed => Included(endpoint.value),
            BoundaryKind::Open => Excluded(endpoint.value),
        }
    }
}

/// Formats a span in bracket notation: `[a, b]`, `]a, b]`, `[a, b[`, `]a, b[`.
pub(crate) fn fmt_bracketed<T: fmt::Display>(
    f: &mut fmt::Formatter,
    start: &Endpoint<T>,
    end: &Endpoint<T>,
) -> fmt::Result {
    let open = match start.kind {
        BoundaryKind::Closed => '[',
        BoundaryKind::Open => ']',
    };
    let close = match end.kind {
        BoundaryKind::Closed => ']',
        BoundaryKind::Open => '[',
    };

    write!(f, "{}{}, {}{}", open, start.value, end.value, close)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_is_loosest_and_open_is_tightest() {
        use BoundaryKind::*;

        assert_eq!(Open.loosest(Closed), Closed);
        assert_eq!(Closed.loosest(Open), Closed);
        assert_eq!(Open.loosest(Open), Open);
        assert_eq!(Open.tightest(Closed), Open);
        assert_eq!(Closed.tightest(Open), Open);
        assert_eq!(Closed.tightest(Closed), Closed);
    }

    #[test]
    fn endpoints_compare_on_value_only() {
        let a = Endpoint::closed(3);
        let b = Endpoint::open(3);
        let c = Endpoint::open(5);

        assert_eq!(a, b);
        assert!(a.coincides(&b));
        assert!(a.is_before(&c));
        assert!(c.is_after(&b));
        assert!(!a.is_before(&b) && !a.is_after(&b));
        assert_eq!(a.cmp(&c), Ordering::Less);
    }

    #[test]
    fn endpoint_into_bound() {
        assert_eq!(Bound::from(Endpoint::closed(1)), Included(1));
        assert_eq!(Bound::from(Endpoint::open(1)), Excluded(1));
    }
}
