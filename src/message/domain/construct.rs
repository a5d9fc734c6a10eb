//! Origin-specific construction rules.
//!
//! Each rule is a pure mapping from one origin record to a fully-populated
//! [`IncomingTextMessage`]. Rules that stamp the current time read it from
//! the supplied [`Clock`]; the rest copy the origin's own timestamp.

use mockable::Clock;

use super::{
    DeviceId, GroupActionType, GroupContext, GroupControl, GroupId, IncomingTextMessage,
    LOCAL_DESCRIPTOR, LOCAL_PROTOCOL, RELAYED_DESCRIPTOR, RELAYED_PROTOCOL,
};
use crate::message::ports::{CarrierDelivery, OutgoingRequest, PushEnvelope, StoredOutgoing};

impl IncomingTextMessage {
    /// Builds a message from a carrier delivery.
    ///
    /// Carrier fields are copied verbatim. The sender is treated as a
    /// single-device sender and no group fields are set.
    #[must_use]
    pub fn from_carrier(delivery: &impl CarrierDelivery) -> Self {
        Self {
            body: delivery.display_body().to_owned(),
            sender: delivery.originating_address().to_owned(),
            sender_device_id: DeviceId::DEFAULT,
            origin_marker: delivery.protocol_identifier(),
            origin_descriptor: delivery.service_center_address().to_owned(),
            reply_path_present: delivery.is_reply_path_present(),
            auxiliary_subject: delivery.pseudo_subject().to_owned(),
            sent_at_millis: delivery.timestamp_millis(),
            group: None,
        }
    }

    /// Builds a message from a relayed push envelope and its decoded body.
    ///
    /// The origin is always the relayed sentinel with a reply path and no
    /// subject. When a group context is attached, its identifier, action code
    /// and serialized arguments populate the group fields.
    #[must_use]
    pub fn from_push(
        envelope: &impl PushEnvelope,
        body: impl Into<String>,
        group: Option<&GroupContext>,
    ) -> Self {
        Self {
            body: body.into(),
            sender: envelope.source().to_owned(),
            sender_device_id: envelope.source_device(),
            origin_marker: RELAYED_PROTOCOL,
            origin_descriptor: RELAYED_DESCRIPTOR.to_owned(),
            reply_path_present: true,
            auxiliary_subject: String::new(),
            sent_at_millis: envelope.timestamp_millis(),
            group: group.map(|context| {
                GroupControl::new(
                    context.encoded_id(),
                    context.action().code(),
                    context.serialized_arguments(),
                )
            }),
        }
    }

    /// Echoes an in-flight outgoing send as an incoming message.
    ///
    /// The body is empty, the sender is the first recipient (empty if the
    /// request has none) and the timestamp is taken from `clock`.
    #[must_use]
    pub fn from_outgoing_request(request: &impl OutgoingRequest, clock: &impl Clock) -> Self {
        let sender = request.recipients().first().cloned().unwrap_or_default();
        Self::local(String::new(), sender, None, clock)
    }

    /// Converts a stored outgoing message into an incoming message.
    ///
    /// The stored body and recipient are kept, but the timestamp is re-stamped
    /// from `clock` rather than taken from the stored record.
    #[must_use]
    pub fn from_stored_outgoing(record: &impl StoredOutgoing, clock: &impl Clock) -> Self {
        Self::local(
            record.body().to_owned(),
            record.individual_recipient().to_owned(),
            None,
            clock,
        )
    }

    /// Builds the control message announcing that `user` leaves a group.
    ///
    /// # Examples
    ///
    /// ```
    /// use inbound_text::message::domain::{GroupActionType, GroupId, IncomingTextMessage};
    /// use mockable::DefaultClock;
    ///
    /// let leave = IncomingTextMessage::leaving_group(
    ///     GroupId::from_encoded("g1"),
    ///     "+15551234",
    ///     &DefaultClock,
    /// );
    ///
    /// assert_eq!(leave.group_action_type(), Some(GroupActionType::Quit));
    /// assert_eq!(leave.group_action_argument(), None);
    /// assert_eq!(leave.body(), "");
    /// ```
    #[must_use]
    pub fn leaving_group(group_id: GroupId, user: impl Into<String>, clock: &impl Clock) -> Self {
        let control = GroupControl::new(group_id, GroupActionType::Quit.code(), None);
        Self::local(String::new(), user.into(), Some(control), clock)
    }

    fn local(
        body: String,
        sender: String,
        group: Option<GroupControl>,
        clock: &impl Clock,
    ) -> Self {
        Self {
            body,
            sender,
            sender_device_id: DeviceId::DEFAULT,
            origin_marker: LOCAL_PROTOCOL,
            origin_descriptor: LOCAL_DESCRIPTOR.to_owned(),
            reply_path_present: true,
            auxiliary_subject: String::new(),
            sent_at_millis: clock.utc().timestamp_millis(),
            group,
        }
    }
}
