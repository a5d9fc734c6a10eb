//! The canonical inbound text message.
//!
//! Instances are immutable after construction. Every origin-specific
//! construction rule produces a fully-populated value; derived variants such
//! as [`IncomingTextMessage::with_body`] are new instances.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{DeviceId, GroupActionType, GroupId, InboundMessage, NO_GROUP_ACTION, Origin};
use crate::message::error::{MalformedReason, ReassemblyError};

/// Group control fields of a message.
///
/// Present exactly when the message carries group-control metadata, which
/// keeps the group identifier and action code from disagreeing. The action
/// is never [`NO_GROUP_ACTION`], including when deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGroupControl")]
pub struct GroupControl {
    id: GroupId,
    action: i32,
    argument: Option<String>,
}

#[derive(Deserialize)]
struct RawGroupControl {
    id: GroupId,
    action: i32,
    argument: Option<String>,
}

impl TryFrom<RawGroupControl> for GroupControl {
    type Error = MalformedReason;

    fn try_from(raw: RawGroupControl) -> Result<Self, Self::Error> {
        if raw.action == NO_GROUP_ACTION {
            return Err(MalformedReason::InconsistentGroupFields);
        }
        Ok(Self::new(raw.id, raw.action, raw.argument))
    }
}

impl GroupControl {
    pub(crate) const fn new(id: GroupId, action: i32, argument: Option<String>) -> Self {
        Self {
            id,
            action,
            argument,
        }
    }

    /// Returns the encoded group identifier.
    #[must_use]
    pub const fn id(&self) -> &GroupId {
        &self.id
    }

    /// Returns the raw action code.
    #[must_use]
    pub const fn action(&self) -> i32 {
        self.action
    }

    /// Returns the serialized action argument, if the action has one.
    #[must_use]
    pub fn argument(&self) -> Option<&str> {
        self.argument.as_deref()
    }
}

/// A text-style message in canonical form.
///
/// # Invariants
///
/// - `group` is `None` exactly when the group action is [`NO_GROUP_ACTION`]
/// - the origin marker is fixed at construction
/// - no field is ever modified after construction
///
/// # Examples
///
/// ```
/// use inbound_text::message::domain::{GroupId, IncomingTextMessage};
/// use mockable::DefaultClock;
///
/// let clock = DefaultClock;
/// let leave = IncomingTextMessage::leaving_group(
///     GroupId::from_encoded("__textsecure_group__!0a"),
///     "+15551234",
///     &clock,
/// );
/// let edited = leave.with_body("bye");
///
/// assert_eq!(edited.body(), "bye");
/// assert_eq!(leave.body(), "");
/// assert_eq!(edited.group_id(), leave.group_id());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomingTextMessage {
    pub(crate) body: String,
    pub(crate) sender: String,
    pub(crate) sender_device_id: DeviceId,
    pub(crate) origin_marker: i32,
    pub(crate) origin_descriptor: String,
    pub(crate) reply_path_present: bool,
    pub(crate) auxiliary_subject: String,
    pub(crate) sent_at_millis: i64,
    pub(crate) group: Option<GroupControl>,
}

impl IncomingTextMessage {
    /// Returns a copy of this message with its body replaced.
    ///
    /// Every other field is preserved and `self` is left untouched.
    #[must_use]
    pub fn with_body(&self, body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            sender: self.sender.clone(),
            sender_device_id: self.sender_device_id,
            origin_marker: self.origin_marker,
            origin_descriptor: self.origin_descriptor.clone(),
            reply_path_present: self.reply_path_present,
            auxiliary_subject: self.auxiliary_subject.clone(),
            sent_at_millis: self.sent_at_millis,
            group: self.group.clone(),
        }
    }

    /// Reassembles a multi-part message.
    ///
    /// Bodies are concatenated in slice order. Every other field is taken
    /// from the first fragment.
    ///
    /// # Errors
    ///
    /// Returns [`ReassemblyError::EmptyFragmentList`] if `fragments` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use inbound_text::message::domain::{GroupId, IncomingTextMessage};
    /// use mockable::DefaultClock;
    ///
    /// let clock = DefaultClock;
    /// let base = IncomingTextMessage::leaving_group(
    ///     GroupId::from_encoded("__textsecure_group__!0a"),
    ///     "+15551234",
    ///     &clock,
    /// );
    /// let parts = [base.with_body("Hel"), base.with_body("lo")];
    ///
    /// let whole = IncomingTextMessage::from_fragments(&parts).expect("non-empty fragments");
    /// assert_eq!(whole.body(), "Hello");
    /// ```
    pub fn from_fragments(fragments: &[Self]) -> Result<Self, ReassemblyError> {
        let (first, _) = fragments
            .split_first()
            .ok_or(ReassemblyError::EmptyFragmentList)?;
        let body: String = fragments.iter().map(|fragment| fragment.body.as_str()).collect();

        debug!(
            fragments = fragments.len(),
            body_len = body.len(),
            "reassembled multi-part message"
        );
        Ok(first.with_body(body))
    }

    /// Returns the message body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns the sender address.
    #[must_use]
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Returns the sending device.
    #[must_use]
    pub const fn sender_device_id(&self) -> DeviceId {
        self.sender_device_id
    }

    /// Returns the raw origin marker.
    #[must_use]
    pub const fn origin_marker(&self) -> i32 {
        self.origin_marker
    }

    /// Returns the origin channel category.
    #[must_use]
    pub const fn origin(&self) -> Origin {
        Origin::from_protocol(self.origin_marker)
    }

    /// Returns the origin descriptor.
    #[must_use]
    pub fn origin_descriptor(&self) -> &str {
        &self.origin_descriptor
    }

    /// Returns `true` if a reply path was available at the origin.
    #[must_use]
    pub const fn is_reply_path_present(&self) -> bool {
        self.reply_path_present
    }

    /// Returns the auxiliary subject, empty if none.
    #[must_use]
    pub fn auxiliary_subject(&self) -> &str {
        &self.auxiliary_subject
    }

    /// Returns the send time in milliseconds since the epoch.
    #[must_use]
    pub const fn sent_at_millis(&self) -> i64 {
        self.sent_at_millis
    }

    /// Returns the send time, or `None` if it is outside chrono's range.
    #[must_use]
    pub fn sent_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.sent_at_millis)
    }

    /// Returns the group control fields, if any.
    #[must_use]
    pub const fn group(&self) -> Option<&GroupControl> {
        self.group.as_ref()
    }

    /// Returns `true` if this is a group control message.
    #[must_use]
    pub const fn is_group(&self) -> bool {
        self.group.is_some()
    }

    /// Returns the encoded group identifier, if any.
    #[must_use]
    pub fn group_id(&self) -> Option<&GroupId> {
        self.group.as_ref().map(GroupControl::id)
    }

    /// Returns the group action code, or [`NO_GROUP_ACTION`].
    #[must_use]
    pub fn group_action(&self) -> i32 {
        self.group.as_ref().map_or(NO_GROUP_ACTION, GroupControl::action)
    }

    /// Returns the group action as a known type, if it is one.
    #[must_use]
    pub fn group_action_type(&self) -> Option<GroupActionType> {
        GroupActionType::from_code(self.group_action())
    }

    /// Returns the serialized group action argument, if any.
    #[must_use]
    pub fn group_action_argument(&self) -> Option<&str> {
        self.group.as_ref().and_then(GroupControl::argument)
    }
}

impl InboundMessage for IncomingTextMessage {
    fn body(&self) -> &str {
        &self.body
    }

    fn sender(&self) -> &str {
        &self.sender
    }

    fn sent_at_millis(&self) -> i64 {
        self.sent_at_millis
    }

    fn is_key_exchange(&self) -> bool {
        false
    }

    fn is_secure_message(&self) -> bool {
        false
    }

    fn is_pre_key_bundle(&self) -> bool {
        false
    }

    fn is_identity_update(&self) -> bool {
        false
    }
}
