//! Set algebra over spans of time ([`Span`]) whose boundaries can each be
//! inclusive ([`BoundaryKind::Closed`]) or exclusive ([`BoundaryKind::Open`]).
//! It provides the union of a collection of spans (overlapping or contiguous
//! spans merged into the smallest covering set, see [`union`]) and their
//! intersection (every pairwise overlap as its own span, see
//! [`intersection`]), both computed with a single sorted sweep.
//!
//! Touching closed boundaries overlap, touching open boundaries do not, and a
//! span starting and ending at the same instant is treated as a closed point
//! whatever kinds it declares.
//!
//! Any type implementing [`Span`] can take part, and the `*_with` variants
//! let callers carry their own payloads through a merge or an intersection.
//! Any type satisfying [`Ord`] and [`Clone`] can serve as the time value.

mod combine;
mod endpoint;
mod error;
mod predicate;
mod span;
mod sweep;

pub use combine::{intersect_bounds, merge_bounds};
pub use endpoint::{BoundaryKind, Endpoint};
pub use error::{Result, SpanError};
pub use predicate::{is_contiguous, is_instant, overlaps};
pub use span::{Instant, Interval, Span};
pub use sweep::{
    by_end, by_start, intersect_each, intersection, intersection_with, union, union_with, SpanSet,
};
