//! Canonical inbound text message, its construction rules and binary codec.
//!
//! # Architecture
//!
//! - **Domain**: Pure domain types ([`domain::IncomingTextMessage`],
//!   [`domain::GroupContext`], [`domain::Origin`], etc.)
//! - **Ports**: Origin record traits ([`ports::CarrierDelivery`],
//!   [`ports::PushEnvelope`], [`ports::OutgoingRequest`],
//!   [`ports::StoredOutgoing`])
//! - **Codec**: Binary encode/decode ([`codec::encode`], [`codec::decode`])
//!
//! # Example
//!
//! ```
//! use inbound_text::message::codec;
//! use inbound_text::message::domain::{GroupId, IncomingTextMessage};
//! use mockable::DefaultClock;
//!
//! let clock = DefaultClock;
//! let leave = IncomingTextMessage::leaving_group(
//!     GroupId::from_encoded("__textsecure_group__!00ff"),
//!     "+15551234",
//!     &clock,
//! );
//!
//! let bytes = codec::encode(&leave).expect("encodable message");
//! let decoded = codec::decode(&bytes).expect("well-formed encoding");
//! assert_eq!(decoded, leave);
//! ```

pub mod codec;
pub mod domain;
pub mod error;
pub mod ports;

#[cfg(test)]
mod tests;
