//! Port definitions for the origin records handed to the normalizer.
//!
//! Parsing the carrier PDU, decrypting the push envelope and loading
//! outgoing history all happen outside this crate. Collaborators expose
//! their parsed records through these traits.

mod origin;

pub use origin::{CarrierDelivery, OutgoingRequest, PushEnvelope, StoredOutgoing};
