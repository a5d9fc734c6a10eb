//! Read-only views of parsed origin records.

use crate::message::domain::DeviceId;

/// A short message delivered by the carrier.
pub trait CarrierDelivery {
    /// Returns the displayable message body.
    fn display_body(&self) -> &str;

    /// Returns the displayable originating address.
    fn originating_address(&self) -> &str;

    /// Returns the carrier protocol identifier.
    fn protocol_identifier(&self) -> i32;

    /// Returns the service-centre address.
    fn service_center_address(&self) -> &str;

    /// Returns `true` if the carrier reported a reply path.
    fn is_reply_path_present(&self) -> bool;

    /// Returns the pseudo-subject, or an empty string if none.
    fn pseudo_subject(&self) -> &str;

    /// Returns the carrier-reported send time in milliseconds since the epoch.
    fn timestamp_millis(&self) -> i64;
}

/// Envelope of a message relayed over the push transport.
///
/// The decrypted body is supplied separately since the envelope itself
/// carries ciphertext.
pub trait PushEnvelope {
    /// Returns the sender address.
    fn source(&self) -> &str;

    /// Returns the sending device.
    fn source_device(&self) -> DeviceId;

    /// Returns the sender-reported send time in milliseconds since the epoch.
    fn timestamp_millis(&self) -> i64;
}

/// An outgoing send that is still in flight.
pub trait OutgoingRequest {
    /// Returns the recipient addresses in send order.
    fn recipients(&self) -> &[String];
}

/// An outgoing message loaded from history.
pub trait StoredOutgoing {
    /// Returns the stored message body.
    fn body(&self) -> &str;

    /// Returns the address of the resolved individual recipient.
    fn individual_recipient(&self) -> &str;
}
