//! Overlap and adjacency tests between two spans.
//!
//! Both predicates treat an instant as closed at both ends, whatever kinds
//! it reports.

use crate::endpoint::BoundaryKind;
use crate::span::Span;

/// Whether the span starts and ends at the same instant.
pub fn is_instant<S: Span + ?Sized>(span: &S) -> bool {
    span.start() == span.end()
}

/// Start kind of `span`, forced to `Closed` for instants.
pub(crate) fn effective_start_kind<S: Span + ?Sized>(span: &S) -> BoundaryKind {
    if is_instant(span) {
        BoundaryKind::Closed
    } else {
        span.start_kind()
    }
}

/// End kind of `span`, forced to `Closed` for instants.
pub(crate) fn effective_end_kind<S: Span + ?Sized>(span: &S) -> BoundaryKind {
    if is_instant(span) {
        BoundaryKind::Closed
    } else {
        span.end_kind()
    }
}

/// Whether the two spans share at least one point in time.
///
/// Spans touching at a single instant overlap only if both are closed there.
///
/// ```rust
/// use spanset::{overlaps, Instant, Interval};
///
/// assert!(overlaps(&Interval::closed(1, 2), &Interval::closed(2, 3)));
/// assert!(!overlaps(&Interval::new(1, 2), &Interval::new(2, 3)));
/// assert!(overlaps(&Interval::closed(1, 3), &Instant::new(2)));
/// ```
pub fn overlaps<A, B>(a: &A, b: &B) -> bool
where
    A: Span + ?Sized,
    B: Span<Time = A::Time> + ?Sized,
{
    let a_start_kind = effective_start_kind(a);
    let a_end_kind = effective_end_kind(a);
    let b_start_kind = effective_start_kind(b);
    let b_end_kind = effective_end_kind(b);

    // a starts after b ends
    let a_after_b = if a.start() > b.end() {
        true
    } else if a.start() == b.end() {
        a_start_kind.is_open() || b_end_kind.is_open()
    } else {
        false
    };

    // a ends before b starts
    let a_before_b = if a.end() < b.start() {
        true
    } else if a.end() == b.start() {
        a_end_kind.is_open() || b_start_kind.is_open()
    } else {
        false
    };

    !(a_after_b || a_before_b)
}

/// Whether the two spans are disjoint but touch at one instant that exactly
/// one of them includes, so that together they cover an unbroken stretch.
///
/// Two instants are never contiguous.
///
/// ```rust
/// use spanset::{is_contiguous, BoundaryKind::*, Interval};
///
/// let a = Interval::with_kinds(1, 2, Open, Closed);
/// let b = Interval::with_kinds(2, 3, Open, Closed);
/// assert!(is_contiguous(&a, &b));
/// assert!(!is_contiguous(&Interval::new(1, 2), &Interval::open(2, 3)));
/// ```
pub fn is_contiguous<A, B>(a: &A, b: &B) -> bool
where
    A: Span + ?Sized,
    B: Span<Time = A::Time> + ?Sized,
{
    if is_instant(a) && is_instant(b) {
        return false;
    }

    // Put the earlier span first; an instant sorts before a longer span
    // sharing its start.
    if (b.start(), b.end()) < (a.start(), a.end()) {
        return touches(b, a);
    }
    touches(a, b)
}

fn touches<A, B>(first: &A, second: &B) -> bool
where
    A: Span + ?Sized,
    B: Span<Time = A::Time> + ?Sized,
{
    if first.end() != second.start() {
        return false;
    }

    effective_end_kind(first) != effective_start_kind(second)
}
