//! Capability surface shared by every inbound message shape.

/// Read-only view implemented by all inbound message shapes.
///
/// Generic handling code branches on the capability predicates without
/// knowing the concrete message type. Plain text messages answer `false` to
/// all four; sibling shapes (key exchanges, encrypted payloads) do not.
pub trait InboundMessage {
    /// Returns the message body.
    fn body(&self) -> &str;

    /// Returns the sender address.
    fn sender(&self) -> &str;

    /// Returns the send time in milliseconds since the epoch.
    fn sent_at_millis(&self) -> i64;

    /// Returns `true` if the message carries a key exchange.
    fn is_key_exchange(&self) -> bool;

    /// Returns `true` if the body is an encrypted payload.
    fn is_secure_message(&self) -> bool;

    /// Returns `true` if the message carries a pre-key bundle.
    fn is_pre_key_bundle(&self) -> bool;

    /// Returns `true` if the message announces an identity key change.
    fn is_identity_update(&self) -> bool;
}
