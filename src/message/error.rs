//! Error types for message reassembly and binary encoding.
//!
//! Uses `thiserror` for typed variants that callers can inspect.

use thiserror::Error;

/// Errors that can occur when reassembling a multi-part message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReassemblyError {
    /// Reassembly was attempted with no fragments.
    ///
    /// This is a caller contract violation and is never retried.
    #[error("cannot reassemble a message from an empty fragment list")]
    EmptyFragmentList,
}

/// Errors produced by the binary codec.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// The byte stream is truncated or corrupt.
    ///
    /// No partially-populated message is ever returned alongside this error.
    #[error("malformed encoding in field '{field}': {reason}")]
    MalformedEncoding {
        /// The field being decoded when the problem was detected.
        field: &'static str,
        /// What was wrong with the bytes.
        reason: MalformedReason,
    },

    /// A text field is too long for its 32-bit length prefix.
    #[error("field '{field}' is {len} bytes, which exceeds the encodable maximum")]
    FieldTooLarge {
        /// The offending field.
        field: &'static str,
        /// The field length in bytes.
        len: usize,
    },
}

impl CodecError {
    /// Creates a malformed encoding error for the given field.
    #[must_use]
    pub const fn malformed(field: &'static str, reason: MalformedReason) -> Self {
        Self::MalformedEncoding { field, reason }
    }

    /// Returns `true` if this error reports a malformed byte stream.
    #[must_use]
    pub const fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedEncoding { .. })
    }
}

/// Reasons a byte stream fails to decode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedReason {
    /// The stream ended before the field was complete.
    #[error("stream truncated: need {needed} bytes, {available} available")]
    Truncated {
        /// Bytes required to finish the field.
        needed: usize,
        /// Bytes left in the stream.
        available: usize,
    },

    /// A text length prefix was negative but not the absent marker.
    #[error("invalid negative text length {0}")]
    NegativeLength(i32),

    /// A text length prefix exceeds the configured limit.
    #[error("text length {len} exceeds limit of {limit} bytes")]
    LengthOverLimit {
        /// The declared length.
        len: usize,
        /// The configured maximum.
        limit: usize,
    },

    /// Text bytes are not valid UTF-8.
    #[error("text is not valid UTF-8")]
    InvalidUtf8,

    /// Group identifier and action code disagree about whether the message
    /// is a group control message.
    #[error("group identifier and group action are inconsistent")]
    InconsistentGroupFields,

    /// Bytes remain after the final field.
    #[error("{0} trailing bytes after final field")]
    TrailingBytes(usize),
}
