//! Versionless binary encoding of [`IncomingTextMessage`].
//!
//! Fields are written back to back in a fixed order with no header, schema
//! version or framing:
//!
//! ```text
//! body, sender, senderDeviceId(i32), originMarker(i32), originDescriptor,
//! replyPathPresent(i32: 1|0), auxiliarySubject, sentAtMillis(i64),
//! groupId, groupAction(i32), groupActionArgument
//! ```
//!
//! Adding, removing or reordering a field breaks every stored encoding.
//!
//! The absent marker is only meaningful for `groupId` and
//! `groupActionArgument`. The other text fields are always present on a
//! message, so an absent marker in one of them decodes as the empty string
//! and re-encodes as an empty string, not as absent. A group action argument
//! that arrives without a group identifier is discarded.
//!
//! # Example
//!
//! ```
//! use inbound_text::message::codec::{self, ABSENT_TEXT};
//! use inbound_text::message::domain::{GroupId, IncomingTextMessage};
//! use mockable::DefaultClock;
//!
//! let group = GroupId::from_encoded("g1");
//! let leave = IncomingTextMessage::leaving_group(group, "+15551234", &DefaultClock);
//! let bytes = codec::encode(&leave).expect("encodable message");
//!
//! // The final field is the absent group action argument.
//! assert_eq!(bytes[bytes.len() - 4..], ABSENT_TEXT.to_be_bytes());
//! assert_eq!(codec::decode(&bytes), Ok(leave));
//! ```

mod limits;
mod wire;

pub use limits::CodecLimits;
pub use wire::ABSENT_TEXT;

use tracing::debug;

use crate::message::domain::{DeviceId, GroupControl, GroupId, IncomingTextMessage, NO_GROUP_ACTION};
use crate::message::error::{CodecError, MalformedReason};
use wire::{FieldReader, FieldWriter};

mod field {
    pub const BODY: &str = "body";
    pub const SENDER: &str = "sender";
    pub const SENDER_DEVICE_ID: &str = "senderDeviceId";
    pub const ORIGIN_MARKER: &str = "originMarker";
    pub const ORIGIN_DESCRIPTOR: &str = "originDescriptor";
    pub const REPLY_PATH_PRESENT: &str = "replyPathPresent";
    pub const AUXILIARY_SUBJECT: &str = "auxiliarySubject";
    pub const SENT_AT_MILLIS: &str = "sentAtMillis";
    pub const GROUP_ID: &str = "groupId";
    pub const GROUP_ACTION: &str = "groupAction";
    pub const GROUP_ACTION_ARGUMENT: &str = "groupActionArgument";
}

// Six length prefixes plus five fixed-width integers.
const FIXED_OVERHEAD: usize = 6 * 4 + 4 * 4 + 8;

/// Encodes a message.
///
/// # Errors
///
/// Returns [`CodecError::FieldTooLarge`] if a text field is longer than a
/// 32-bit length prefix can describe.
pub fn encode(message: &IncomingTextMessage) -> Result<Vec<u8>, CodecError> {
    let text_len = message.body.len()
        + message.sender.len()
        + message.origin_descriptor.len()
        + message.auxiliary_subject.len()
        + message.group_id().map_or(0, |id| id.as_str().len())
        + message.group_action_argument().map_or(0, str::len);

    let mut writer = FieldWriter::with_capacity(FIXED_OVERHEAD.saturating_add(text_len));
    writer.text(field::BODY, &message.body)?;
    writer.text(field::SENDER, &message.sender)?;
    writer.int32(message.sender_device_id.value());
    writer.int32(message.origin_marker);
    writer.text(field::ORIGIN_DESCRIPTOR, &message.origin_descriptor)?;
    writer.int32(i32::from(message.reply_path_present));
    writer.text(field::AUXILIARY_SUBJECT, &message.auxiliary_subject)?;
    writer.int64(message.sent_at_millis);
    writer.optional_text(field::GROUP_ID, message.group_id().map(GroupId::as_str))?;
    writer.int32(message.group_action());
    writer.optional_text(field::GROUP_ACTION_ARGUMENT, message.group_action_argument())?;
    Ok(writer.finish())
}

/// Decodes a message using the default [`CodecLimits`].
///
/// # Errors
///
/// Returns [`CodecError::MalformedEncoding`] if the bytes are truncated,
/// corrupt or followed by trailing data.
pub fn decode(bytes: &[u8]) -> Result<IncomingTextMessage, CodecError> {
    decode_with_limits(bytes, &CodecLimits::default())
}

/// Decodes a message, bounding text lengths by `limits`.
///
/// # Errors
///
/// Returns [`CodecError::MalformedEncoding`] if the bytes are truncated,
/// corrupt, exceed `limits` or are followed by trailing data.
pub fn decode_with_limits(
    bytes: &[u8],
    limits: &CodecLimits,
) -> Result<IncomingTextMessage, CodecError> {
    let result = read_message(FieldReader::new(bytes, limits));
    if let Err(error) = &result {
        debug!(%error, len = bytes.len(), "rejected inbound text encoding");
    }
    result
}

fn read_message(mut reader: FieldReader<'_>) -> Result<IncomingTextMessage, CodecError> {
    let body = reader.required_text(field::BODY)?;
    let sender = reader.required_text(field::SENDER)?;
    let sender_device_id = DeviceId::new(reader.int32(field::SENDER_DEVICE_ID)?);
    let origin_marker = reader.int32(field::ORIGIN_MARKER)?;
    let origin_descriptor = reader.required_text(field::ORIGIN_DESCRIPTOR)?;
    let reply_path_present = reader.int32(field::REPLY_PATH_PRESENT)? == 1;
    let auxiliary_subject = reader.required_text(field::AUXILIARY_SUBJECT)?;
    let sent_at_millis = reader.int64(field::SENT_AT_MILLIS)?;
    let group_id = reader.optional_text(field::GROUP_ID)?;
    let group_action = reader.int32(field::GROUP_ACTION)?;
    let group_action_argument = reader.optional_text(field::GROUP_ACTION_ARGUMENT)?;
    reader.finish()?;

    // An argument without a group carries no meaning and is dropped.
    let group = match (group_id, group_action) {
        (None, NO_GROUP_ACTION) => None,
        (Some(id), action) if action != NO_GROUP_ACTION => Some(GroupControl::new(
            GroupId::from_encoded(id),
            action,
            group_action_argument,
        )),
        _ => {
            return Err(CodecError::malformed(
                field::GROUP_ACTION,
                MalformedReason::InconsistentGroupFields,
            ));
        }
    };

    Ok(IncomingTextMessage {
        body,
        sender,
        sender_device_id,
        origin_marker,
        origin_descriptor,
        reply_path_present,
        auxiliary_subject,
        sent_at_millis,
        group,
    })
}
