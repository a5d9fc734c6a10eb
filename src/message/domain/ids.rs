//! Identifier newtypes for message senders and groups.
//!
//! These wrap the raw wire representations to keep device indices and group
//! identifiers from being confused with other integers and strings.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Logical device index of a message sender.
///
/// # Examples
///
/// ```
/// use inbound_text::message::domain::DeviceId;
///
/// assert_eq!(DeviceId::DEFAULT.value(), 1);
/// assert_eq!(DeviceId::default(), DeviceId::DEFAULT);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeviceId(i32);

impl DeviceId {
    /// Device index used for senders that only have a single device.
    pub const DEFAULT: Self = Self(1);

    /// Creates a device identifier from its raw value.
    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Returns the raw device index.
    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }
}

impl Default for DeviceId {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Text-encoded group identifier.
///
/// Group identifiers travel as opaque bytes on the relayed channel and are
/// stored as a prefixed lowercase hex string. Encoding is deterministic: the
/// same bytes always yield the same text.
///
/// # Examples
///
/// ```
/// use inbound_text::message::domain::GroupId;
///
/// let id = GroupId::from_raw(&[0x00, 0xab, 0x10]);
/// assert_eq!(id.as_str(), "__textsecure_group__!00ab10");
/// assert_eq!(id.decode_raw(), Some(vec![0x00, 0xab, 0x10]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupId(String);

impl GroupId {
    /// Prefix marking a text value as an encoded group identifier.
    pub const PREFIX: &'static str = "__textsecure_group__!";

    /// Encodes raw group identifier bytes.
    #[must_use]
    pub fn from_raw(raw: &[u8]) -> Self {
        Self(format!("{}{}", Self::PREFIX, hex::encode(raw)))
    }

    /// Wraps an already-encoded group identifier.
    ///
    /// The value is taken as-is; stored identifiers are never re-validated.
    #[must_use]
    pub fn from_encoded(encoded: impl Into<String>) -> Self {
        Self(encoded.into())
    }

    /// Returns the encoded text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the identifier, returning the encoded text.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Recovers the raw identifier bytes.
    ///
    /// Returns `None` when the text lacks the prefix or is not valid hex.
    #[must_use]
    pub fn decode_raw(&self) -> Option<Vec<u8>> {
        self.0
            .strip_prefix(Self::PREFIX)
            .and_then(|digits| hex::decode(digits).ok())
    }
}

impl AsRef<str> for GroupId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
