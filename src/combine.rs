//! Boundary arithmetic for merged and intersected spans.
//!
//! A union result takes the wider boundary at each edge, an intersection
//! result the narrower one. When both sources sit on the same instant at an
//! edge, their kinds are combined: `Closed` wins for a union, `Open` for an
//! intersection. Instants always contribute `Closed`.

use std::cmp::Ordering;

use crate::endpoint::Endpoint;
use crate::predicate::{effective_end_kind, effective_start_kind};
use crate::span::{Interval, Span};

fn start_of<S: Span + ?Sized>(span: &S) -> Endpoint<S::Time> {
    Endpoint::new(span.start().clone(), effective_start_kind(span))
}

fn end_of<S: Span + ?Sized>(span: &S) -> Endpoint<S::Time> {
    Endpoint::new(span.end().clone(), effective_end_kind(span))
}

/// The smallest span covering both `a` and `b`.
///
/// The caller decides whether `a` and `b` may be merged at all; this only
/// computes the boundaries.
pub fn merge_bounds<A, B>(a: &A, b: &B) -> Interval<A::Time>
where
    A: Span + ?Sized,
    B: Span<Time = A::Time> + ?Sized,
{
    let (a_start, b_start) = (start_of(a), start_of(b));
    let start = match a_start.cmp(&b_start) {
        Ordering::Less => a_start,
        Ordering::Greater => b_start,
        Ordering::Equal => Endpoint::new(a_start.value, a_start.kind.loosest(b_start.kind)),
    };

    let (a_end, b_end) = (end_of(a), end_of(b));
    let end = match a_end.cmp(&b_end) {
        Ordering::Greater => a_end,
        Ordering::Less => b_end,
        Ordering::Equal => Endpoint::new(a_end.value, a_end.kind.loosest(b_end.kind)),
    };

    Interval::from_endpoints(start, end)
}

/// The span shared by `a` and `b`.
///
/// Only meaningful when [`overlaps`](crate::overlaps) holds for the pair.
pub fn intersect_bounds<A, B>(a: &A, b: &B) -> Interval<A::Time>
where
    A: Span + ?Sized,
    B: Span<Time = A::Time> + ?Sized,
{
    let (a_start, b_start) = (start_of(a), start_of(b));
    let start = match a_start.cmp(&b_start) {
        Ordering::Greater => a_start,
        Ordering::Less => b_start,
        Ordering::Equal => Endpoint::new(a_start.value, a_start.kind.tightest(b_start.kind)),
    };

    let (a_end, b_end) = (end_of(a), end_of(b));
    let end = match a_end.cmp(&b_end) {
        Ordering::Less => a_end,
        Ordering::Greater => b_end,
        Ordering::Equal => Endpoint::new(a_end.value, a_end.kind.tightest(b_end.kind)),
    };

    Interval::from_endpoints(start, end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoint::BoundaryKind::*;
    use crate::span::Instant;

    #[test]
    fn merge_takes_outer_boundaries() {
        let a = Interval::with_kinds(0, 5, Open, Closed);
        let b = Interval::with_kinds(3, 8, Closed, Open);

        assert_eq!(merge_bounds(&a, &b), Interval::with_kinds(0, 8, Open, Open));
        assert_eq!(merge_bounds(&b, &a), Interval::with_kinds(0, 8, Open, Open));
    }

    #[test]
    fn merge_prefers_closed_on_shared_boundaries() {
        let a = Interval::closed(1, 2);
        let b = Interval::open(1, 2);

        assert_eq!(merge_bounds(&a, &b), Interval::closed(1, 2));
        assert_eq!(merge_bounds(&b, &a), Interval::closed(1, 2));
    }

    #[test]
    fn merge_closes_the_end_an_instant_touches() {
        let a = Interval::new(0, 2);
        let b = Interval::with_kinds(2, 2, Open, Closed);

        assert_eq!(merge_bounds(&a, &b), Interval::closed(0, 2));
        assert_eq!(merge_bounds(&a, &Instant::new(2)), Interval::closed(0, 2));
    }

    #[test]
    fn intersection_takes_inner_boundaries() {
        let a = Interval::with_kinds(0, 5, Open, Closed);
        let b = Interval::with_kinds(3, 8, Closed, Open);

        assert_eq!(intersect_bounds(&a, &b), Interval::closed(3, 5));
        assert_eq!(intersect_bounds(&b, &a), Interval::closed(3, 5));
    }

    #[test]
    fn intersection_prefers_open_on_shared_boundaries() {
        let a = Interval::closed(1, 2);
        let b = Interval::open(1, 2);

        assert_eq!(intersect_bounds(&a, &b), Interval::open(1, 2));
        assert_eq!(intersect_bounds(&b, &a), Interval::open(1, 2));
    }

    #[test]
    fn intersection_of_touching_closed_spans_is_an_instant() {
        let a = Interval::closed(0, 2);
        let b = Interval::closed(2, 4);

        let shared = intersect_bounds(&a, &b);
        assert_eq!(shared, Interval::closed(2, 2));
        assert!(shared.is_instant());
    }

    #[test]
    fn intersection_with_an_instant_is_that_instant() {
        let a = Interval::open(0, 4);

        assert_eq!(intersect_bounds(&a, &Instant::new(1)), Interval::closed(1, 1));
    }
}
