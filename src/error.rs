use thiserror::Error;

/// Errors raised while building a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SpanError {
    /// The end of the span precedes its start.
    #[error("invalid span: end precedes start")]
    InvalidRange,
}

pub type Result<T, E = SpanError> = std::result::Result<T, E>;
