/// Instant decoding error type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// Input token is not a number literal.
    #[error("Expected a number of milliseconds, got: {0}")]
    NotANumber(String),

    /// Input is a number, but has no exact 64-bit integer value.
    #[error("Number of milliseconds is not a 64-bit integer: {0}")]
    NotAnInteger(String),

    /// Milliseconds since the Unix epoch are outside of representable range.
    #[error("Out of range timestamp: {0}ms since Unix epoch")]
    OutOfRange(i64),
}

/// Instant decoding result type.
pub type DecodeResult<T> = Result<T, DecodeError>;
