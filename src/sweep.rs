//! Sweep-line union and intersection over collections of spans.
//!
//! Both sweeps work on a stably sorted copy of their input and never touch
//! the caller's spans.

use std::cmp::Ordering;

use tracing::{debug, trace};

use crate::combine::{intersect_bounds, merge_bounds};
use crate::predicate::{is_contiguous, overlaps};
use crate::span::{Interval, Span};

/// Orders spans by start time. Time-equal starts compare equal, so a stable
/// sort keeps their input order.
pub fn by_start<S: Span + ?Sized>(a: &S, b: &S) -> Ordering {
    a.start().cmp(b.start())
}

/// Orders spans by end time.
pub fn by_end<S: Span + ?Sized>(a: &S, b: &S) -> Ordering {
    a.end().cmp(b.end())
}

fn sorted_by_start<S: Span>(spans: &[S]) -> Vec<&S> {
    let mut sorted: Vec<&S> = spans.iter().collect();
    sorted.sort_by(|a, b| by_start(*a, *b));
    sorted
}

fn mergeable<A, B>(a: &A, b: &B) -> bool
where
    A: Span + ?Sized,
    B: Span<Time = A::Time> + ?Sized,
{
    overlaps(a, b) || is_contiguous(a, b)
}

/// Merges every run of overlapping or contiguous spans into one [`Interval`].
///
/// ```rust
/// use spanset::{union, Interval};
///
/// let merged = union(&[Interval::new(0, 60), Interval::new(30, 90), Interval::new(120, 150)]);
/// assert_eq!(merged, vec![Interval::new(0, 90), Interval::new(120, 150)]);
/// ```
pub fn union<S>(spans: &[S]) -> Vec<Interval<S::Time>>
where
    S: Span,
{
    let intervals: Vec<Interval<S::Time>> = spans.iter().map(Interval::from_span).collect();
    union_with(&intervals, |_, _, merged| merged)
}

/// Merges every run of overlapping or contiguous spans, letting `combine`
/// build each merged span.
///
/// `combine` receives the span merged into (the earlier one), the span merged
/// from, and the [`Interval`] covering both. Its result replaces the earlier
/// span and takes part in further merges, so a run of three or more spans
/// is folded pairwise from left to right.
///
/// Fewer than two spans are returned as they are. Output is ordered by start.
pub fn union_with<S, F>(spans: &[S], mut combine: F) -> Vec<S>
where
    S: Span + Clone,
    F: FnMut(&S, &S, Interval<S::Time>) -> S,
{
    if spans.len() < 2 {
        return spans.to_vec();
    }

    let sorted = sorted_by_start(spans);
    let mut merged: Vec<S> = Vec::with_capacity(sorted.len());
    merged.push(sorted[0].clone());

    for b in sorted.into_iter().skip(1) {
        let last = merged.len() - 1;
        if !mergeable(&merged[last], b) {
            merged.push(b.clone());
            continue;
        }

        let span = merge_bounds(&merged[last], b);
        merged[last] = combine(&merged[last], b, span);
        trace!(index = last, "merged span into accumulator");

        // A grown span can now reach back to the one before it.
        while merged.len() >= 2 {
            let last = merged.len() - 1;
            if !mergeable(&merged[last - 1], &merged[last]) {
                break;
            }

            let from = merged.remove(last);
            let span = merge_bounds(&merged[last - 1], &from);
            merged[last - 1] = combine(&merged[last - 1], &from, span);
            trace!(index = last - 1, "folded accumulator tail into predecessor");
        }
    }

    debug!(input = spans.len(), output = merged.len(), "union sweep finished");
    merged
}

/// Every pairwise overlap between the spans, as plain [`Interval`]s.
///
/// ```rust
/// use spanset::{intersection, Interval};
///
/// let shared = intersection(&[Interval::new(0, 60), Interval::new(30, 90)]);
/// assert_eq!(shared, vec![Interval::new(30, 60)]);
/// ```
pub fn intersection<S>(spans: &[S]) -> Vec<Interval<S::Time>>
where
    S: Span,
{
    intersection_with(spans, |_, _, shared| shared)
}

/// Every pairwise overlap between the spans, each shaped by `combine`.
///
/// `combine` receives the earlier span, the later span, and the
/// [`Interval`] they share. A span is never paired with itself, and each
/// overlapping pair is reported once. Results come in the order they are
/// found: by start of the later span, then by the earlier span's position
/// among those still open.
pub fn intersection_with<S, R, F>(spans: &[S], mut combine: F) -> Vec<R>
where
    S: Span,
    F: FnMut(&S, &S, Interval<S::Time>) -> R,
{
    let mut sorted = sorted_by_start(spans).into_iter();
    let mut intersections = Vec::new();

    let mut actives: Vec<&S> = match sorted.next() {
        Some(first) => vec![first],
        None => return intersections,
    };

    for b in sorted {
        // Identical ranges stay active so duplicates all meet each other.
        actives.retain(|t| {
            (t.start() == b.start() && t.end() == b.end()) || b.start() <= t.end()
        });

        for a in &actives {
            if overlaps(*a, b) {
                let shared = intersect_bounds(*a, b);
                intersections.push(combine(*a, b, shared));
                trace!(active = actives.len(), "found overlapping pair");
            }
        }
        actives.push(b);
    }

    debug!(input = spans.len(), output = intersections.len(), "intersection sweep finished");
    intersections
}

/// Intersects each span with `candidate`, keeping the input order.
///
/// Entries are `None` where a span does not overlap the candidate.
///
/// ```rust
/// use spanset::{intersect_each, Interval};
///
/// let spans = [Interval::new(0, 60), Interval::new(120, 180), Interval::new(240, 300)];
/// let shared = intersect_each(&spans, &Interval::new(45, 180));
/// assert_eq!(shared, vec![Some(Interval::new(45, 60)), Some(Interval::new(120, 180)), None]);
/// ```
pub fn intersect_each<S, C>(spans: &[S], candidate: &C) -> Vec<Option<Interval<S::Time>>>
where
    S: Span,
    C: Span<Time = S::Time> + ?Sized,
{
    spans
        .iter()
        .map(|span| overlaps(span, candidate).then(|| intersect_bounds(span, candidate)))
        .collect()
}

/// Set operations available on any slice of spans.
pub trait SpanSet<S: Span> {
    fn union(&self) -> Vec<Interval<S::Time>>;

    fn union_with<F>(&self, combine: F) -> Vec<S>
    where
        S: Clone,
        F: FnMut(&S, &S, Interval<S::Time>) -> S;

    fn intersection(&self) -> Vec<Interval<S::Time>>;

    fn intersection_with<R, F>(&self, combine: F) -> Vec<R>
    where
        F: FnMut(&S, &S, Interval<S::Time>) -> R;

    fn intersect_each<C>(&self, candidate: &C) -> Vec<Option<Interval<S::Time>>>
    where
        C: Span<Time = S::Time> + ?Sized;
}

impl<S: Span> SpanSet<S> for [S] {
    fn union(&self) -> Vec<Interval<S::Time>> {
        union(self)
    }

    fn union_with<F>(&self, combine: F) -> Vec<S>
    where
        S: Clone,
        F: FnMut(&S, &S, Interval<S::Time>) -> S,
    {
        union_with(self, combine)
    }

    fn intersection(&self) -> Vec<Interval<S::Time>> {
        intersection(self)
    }

    fn intersection_with<R, F>(&self, combine: F) -> Vec<R>
    where
        F: FnMut(&S, &S, Interval<S::Time>) -> R,
    {
        intersection_with(self, combine)
    }

    fn intersect_each<C>(&self, candidate: &C) -> Vec<Option<Interval<S::Time>>>
    where
        C: Span<Time = S::Time> + ?Sized,
    {
        intersect_each(self, candidate)
    }
}
