//! Domain types for inbound text messages.
//!
//! This module contains pure domain types with no infrastructure
//! dependencies. All types are immutable after construction and
//! serialisable via serde.

mod capability;
mod construct;
mod group;
mod ids;
mod message;
mod origin;

pub use capability::InboundMessage;
pub use group::{GroupActionType, GroupContext, NO_GROUP_ACTION};
pub use ids::{DeviceId, GroupId};
pub use message::{GroupControl, IncomingTextMessage};
pub use origin::{LOCAL_DESCRIPTOR, LOCAL_PROTOCOL, Origin, RELAYED_DESCRIPTOR, RELAYED_PROTOCOL};
