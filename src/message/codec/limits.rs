//! Decoder configuration.

/// Bounds applied while decoding.
///
/// The default accepts every length the encoder can write, so anything
/// [`encode`](super::encode) produces decodes again. [`CodecLimits::strict`]
/// opts into a tighter bound for callers that want to refuse large fields.
///
/// # Examples
///
/// ```
/// use inbound_text::message::codec::CodecLimits;
///
/// let limits = CodecLimits::default();
/// assert_eq!(limits, CodecLimits::unbounded());
/// assert!(CodecLimits::strict().max_text_bytes < limits.max_text_bytes);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecLimits {
    /// Maximum length in bytes of any single text field.
    pub max_text_bytes: usize,
}

impl Default for CodecLimits {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl CodecLimits {
    /// Creates limits that accept any encodable text length.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            max_text_bytes: usize::MAX,
        }
    }

    /// Creates limits with the given text bound.
    #[must_use]
    pub const fn new(max_text_bytes: usize) -> Self {
        Self { max_text_bytes }
    }

    /// Creates reduced limits for resource-constrained callers.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            max_text_bytes: 64 * 1024, // 64 KiB
        }
    }
}
