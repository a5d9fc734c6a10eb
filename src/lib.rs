//! Inbound text: canonical representation of text-style messages received by
//! a messaging client.
//!
//! This crate folds the structurally different origin formats a client sees
//! (carrier short-message deliveries, relayed push messages, local echoes of
//! outgoing sends and reassembled multi-part fragments) into one immutable
//! value type, and provides a stable binary encoding for moving that value
//! across process and storage boundaries.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: The canonical message value and its construction rules
//! - **Ports**: Traits describing the already-parsed origin records handed in
//!   by external collaborators
//! - **Codec**: The versionless binary field-sequence encoding
//!
//! # Modules
//!
//! - [`message`]: Canonical message type, construction rules and codec

pub mod message;
