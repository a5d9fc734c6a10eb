//! Unit tests for derivation, reassembly and serde of the canonical message.

use super::fixtures::{CarrierPdu, Envelope, carrier_pdu, envelope};
use crate::message::domain::{GroupActionType, GroupContext, IncomingTextMessage, NO_GROUP_ACTION};
use crate::message::error::ReassemblyError;
use rstest::rstest;

fn group_message(envelope: &Envelope, body: &str) -> IncomingTextMessage {
    let context = GroupContext::new(vec![0x42], GroupActionType::Update).with_title("Crew");
    IncomingTextMessage::from_push(envelope, body, Some(&context))
}

// ============================================================================
// Derivation
// ============================================================================

#[rstest]
fn with_body_replaces_only_the_body(envelope: Envelope) {
    let original = group_message(&envelope, "old");

    let derived = original.with_body("new");

    assert_eq!(derived.body(), "new");
    assert_eq!(derived.sender(), original.sender());
    assert_eq!(derived.sender_device_id(), original.sender_device_id());
    assert_eq!(derived.origin_marker(), original.origin_marker());
    assert_eq!(derived.origin_descriptor(), original.origin_descriptor());
    assert_eq!(
        derived.is_reply_path_present(),
        original.is_reply_path_present()
    );
    assert_eq!(derived.auxiliary_subject(), original.auxiliary_subject());
    assert_eq!(derived.sent_at_millis(), original.sent_at_millis());
    assert_eq!(derived.group(), original.group());
}

#[rstest]
fn with_body_leaves_original_unchanged(envelope: Envelope) {
    let original = group_message(&envelope, "old");
    let snapshot = original.clone();

    let _derived = original.with_body("new");

    assert_eq!(original, snapshot);
    assert_eq!(original.body(), "old");
}

#[rstest]
fn with_same_body_yields_equal_message(carrier_pdu: CarrierPdu) {
    let original = IncomingTextMessage::from_carrier(&carrier_pdu);

    assert_eq!(original.with_body(original.body()), original);
}

// ============================================================================
// Reassembly
// ============================================================================

#[rstest]
fn from_fragments_concatenates_in_order(carrier_pdu: CarrierPdu) {
    let first = IncomingTextMessage::from_carrier(&carrier_pdu).with_body("Hel");
    let second = IncomingTextMessage::from_carrier(&CarrierPdu {
        address: "+15550999",
        timestamp: 1,
        ..carrier_pdu
    })
    .with_body("lo ");
    let third = first.with_body("World");

    let whole = IncomingTextMessage::from_fragments(&[first.clone(), second, third])
        .expect("non-empty fragments");

    assert_eq!(whole.body(), "Hello World");
    assert_eq!(whole, first.with_body("Hello World"));
}

#[rstest]
fn from_fragments_copies_group_fields_from_first(envelope: Envelope) {
    let first = group_message(&envelope, "a");
    let second = IncomingTextMessage::from_push(&envelope, "b", None);

    let whole =
        IncomingTextMessage::from_fragments(&[first.clone(), second]).expect("non-empty fragments");

    assert_eq!(whole.body(), "ab");
    assert_eq!(whole.group(), first.group());
}

#[rstest]
fn from_single_fragment_is_identity(carrier_pdu: CarrierPdu) {
    let only = IncomingTextMessage::from_carrier(&carrier_pdu);

    let whole =
        IncomingTextMessage::from_fragments(std::slice::from_ref(&only)).expect("one fragment");

    assert_eq!(whole, only);
}

#[rstest]
fn from_fragments_rejects_empty_list() {
    let result = IncomingTextMessage::from_fragments(&[]);

    assert_eq!(result, Err(ReassemblyError::EmptyFragmentList));
}

#[rstest]
fn empty_fragment_list_error_displays_reason() {
    let display = ReassemblyError::EmptyFragmentList.to_string();

    assert!(display.contains("empty fragment list"));
}

// ============================================================================
// Time and serde
// ============================================================================

#[rstest]
fn sent_at_converts_millis(carrier_pdu: CarrierPdu) {
    let message = IncomingTextMessage::from_carrier(&carrier_pdu);

    let sent_at = message.sent_at().expect("timestamp in range");

    assert_eq!(sent_at.timestamp_millis(), 1_650_000_000_000);
}

#[rstest]
fn sent_at_is_none_when_out_of_range(carrier_pdu: CarrierPdu) {
    let message = IncomingTextMessage::from_carrier(&CarrierPdu {
        timestamp: i64::MAX,
        ..carrier_pdu
    });

    assert_eq!(message.sent_at(), None);
}

#[rstest]
fn json_with_no_group_action_inside_group_is_rejected(envelope: Envelope) {
    let message = group_message(&envelope, "hello");
    let mut value = serde_json::to_value(&message).expect("serialize");
    value["group"]["action"] = serde_json::json!(NO_GROUP_ACTION);

    let result = serde_json::from_value::<IncomingTextMessage>(value);

    assert!(result.is_err());
}

#[rstest]
fn json_without_group_deserializes(carrier_pdu: CarrierPdu) {
    let message = IncomingTextMessage::from_carrier(&carrier_pdu);
    let value = serde_json::to_value(&message).expect("serialize");

    let back: IncomingTextMessage = serde_json::from_value(value).expect("deserialize");

    assert_eq!(back.group_action(), NO_GROUP_ACTION);
    assert_eq!(back, message);
}

#[rstest]
fn json_round_trip_preserves_group_fields(envelope: Envelope) {
    let message = group_message(&envelope, "hello");

    let json = serde_json::to_string(&message).expect("serialize");
    let back: IncomingTextMessage = serde_json::from_str(&json).expect("deserialize");

    assert_eq!(back, message);
}
