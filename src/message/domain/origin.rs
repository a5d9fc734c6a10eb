//! Origin channel markers.
//!
//! Every message records the channel it arrived on as an integer marker plus
//! a descriptive label. Carrier deliveries carry the carrier's own protocol
//! identifier; the relayed and local channels use reserved sentinel values.

use serde::{Deserialize, Serialize};

/// Reserved origin marker for messages relayed over the push transport.
pub const RELAYED_PROTOCOL: i32 = 31337;

/// Origin descriptor for messages relayed over the push transport.
pub const RELAYED_DESCRIPTOR: &str = "GCM";

/// Reserved origin marker for locally-originated messages.
pub const LOCAL_PROTOCOL: i32 = 31338;

/// Origin descriptor for locally-originated messages.
pub const LOCAL_DESCRIPTOR: &str = "Outgoing";

/// The channel category a message came from.
///
/// # Examples
///
/// ```
/// use inbound_text::message::domain::Origin;
///
/// assert_eq!(Origin::from_protocol(31337), Origin::Relayed);
/// assert_eq!(Origin::from_protocol(0), Origin::Carrier);
/// assert_eq!(Origin::Local.descriptor(), Some("Outgoing"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    /// Delivered by the carrier's short-message service.
    Carrier,
    /// Relayed through the encrypted push transport.
    Relayed,
    /// Originated on this device (outgoing echo or group control).
    Local,
}

impl Origin {
    /// Classifies a raw origin marker.
    ///
    /// Any marker other than the two reserved sentinels is a carrier value.
    #[must_use]
    pub const fn from_protocol(protocol: i32) -> Self {
        match protocol {
            RELAYED_PROTOCOL => Self::Relayed,
            LOCAL_PROTOCOL => Self::Local,
            _ => Self::Carrier,
        }
    }

    /// Returns the reserved marker, or `None` for carrier origins whose
    /// marker is supplied by the carrier.
    #[must_use]
    pub const fn sentinel_protocol(self) -> Option<i32> {
        match self {
            Self::Carrier => None,
            Self::Relayed => Some(RELAYED_PROTOCOL),
            Self::Local => Some(LOCAL_PROTOCOL),
        }
    }

    /// Returns the fixed descriptor, or `None` for carrier origins whose
    /// descriptor is the service-centre address.
    #[must_use]
    pub const fn descriptor(self) -> Option<&'static str> {
        match self {
            Self::Carrier => None,
            Self::Relayed => Some(RELAYED_DESCRIPTOR),
            Self::Local => Some(LOCAL_DESCRIPTOR),
        }
    }
}
