//! Shared helpers for integration tests: origin record fixtures and a
//! hand-built field-sequence writer.

use bytes::BufMut;
use inbound_text::message::codec::ABSENT_TEXT;
use inbound_text::message::domain::DeviceId;
use inbound_text::message::ports::{CarrierDelivery, OutgoingRequest, PushEnvelope, StoredOutgoing};

/// Carrier delivery record with owned fields.
#[derive(Debug, Clone)]
pub struct Carrier {
    pub body: String,
    pub address: String,
    pub protocol: i32,
    pub service_center: String,
    pub reply_path: bool,
    pub pseudo_subject: String,
    pub timestamp: i64,
}

impl Carrier {
    /// A typical carrier delivery with the given body.
    pub fn with_body(body: &str) -> Self {
        Self {
            body: body.to_owned(),
            address: "+15550100".to_owned(),
            protocol: 0,
            service_center: "+15559999".to_owned(),
            reply_path: false,
            pseudo_subject: String::new(),
            timestamp: 1_650_000_000_000,
        }
    }
}

impl CarrierDelivery for Carrier {
    fn display_body(&self) -> &str {
        &self.body
    }

    fn originating_address(&self) -> &str {
        &self.address
    }

    fn protocol_identifier(&self) -> i32 {
        self.protocol
    }

    fn service_center_address(&self) -> &str {
        &self.service_center
    }

    fn is_reply_path_present(&self) -> bool {
        self.reply_path
    }

    fn pseudo_subject(&self) -> &str {
        &self.pseudo_subject
    }

    fn timestamp_millis(&self) -> i64 {
        self.timestamp
    }
}

/// Push envelope record with owned fields.
#[derive(Debug, Clone)]
pub struct Envelope {
    pub source: String,
    pub device: DeviceId,
    pub timestamp: i64,
}

impl PushEnvelope for Envelope {
    fn source(&self) -> &str {
        &self.source
    }

    fn source_device(&self) -> DeviceId {
        self.device
    }

    fn timestamp_millis(&self) -> i64 {
        self.timestamp
    }
}

/// Outgoing send request addressed to zero or more recipients.
#[derive(Debug, Clone)]
pub struct Outgoing {
    pub recipients: Vec<String>,
}

impl OutgoingRequest for Outgoing {
    fn recipients(&self) -> &[String] {
        &self.recipients
    }
}

/// Outgoing message reloaded from history.
#[derive(Debug, Clone)]
pub struct Stored {
    pub body: String,
    pub recipient: String,
}

impl StoredOutgoing for Stored {
    fn body(&self) -> &str {
        &self.body
    }

    fn individual_recipient(&self) -> &str {
        &self.recipient
    }
}

/// Appends fields in wire format.
#[derive(Debug, Default)]
pub struct WireBuilder {
    pub buf: Vec<u8>,
}

impl WireBuilder {
    pub fn text(mut self, value: Option<&str>) -> Self {
        match value {
            Some(text) => {
                self.buf
                    .put_i32(i32::try_from(text.len()).expect("short test text"));
                self.buf.put_slice(text.as_bytes());
            }
            None => self.buf.put_i32(ABSENT_TEXT),
        }
        self
    }

    pub fn int32(mut self, value: i32) -> Self {
        self.buf.put_i32(value);
        self
    }

    pub fn int64(mut self, value: i64) -> Self {
        self.buf.put_i64(value);
        self
    }
}
