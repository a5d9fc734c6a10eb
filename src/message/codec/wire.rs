//! Primitive field readers and writers.
//!
//! Integers are big-endian. Text is an `i32` byte length followed by UTF-8
//! bytes, with [`ABSENT_TEXT`] standing for a missing value.

use bytes::{Buf, BufMut};

use super::CodecLimits;
use crate::message::error::{CodecError, MalformedReason};

/// Length prefix marking an absent text value.
pub const ABSENT_TEXT: i32 = -1;

const INT32_LEN: usize = 4;
const INT64_LEN: usize = 8;

pub(super) struct FieldWriter {
    buf: Vec<u8>,
}

impl FieldWriter {
    pub(super) fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    pub(super) fn int32(&mut self, value: i32) {
        self.buf.put_i32(value);
    }

    pub(super) fn int64(&mut self, value: i64) {
        self.buf.put_i64(value);
    }

    pub(super) fn text(&mut self, field: &'static str, text: &str) -> Result<(), CodecError> {
        let len = i32::try_from(text.len()).map_err(|_| CodecError::FieldTooLarge {
            field,
            len: text.len(),
        })?;
        self.buf.put_i32(len);
        self.buf.put_slice(text.as_bytes());
        Ok(())
    }

    pub(super) fn optional_text(
        &mut self,
        field: &'static str,
        value: Option<&str>,
    ) -> Result<(), CodecError> {
        match value {
            Some(text) => self.text(field, text),
            None => {
                self.buf.put_i32(ABSENT_TEXT);
                Ok(())
            }
        }
    }

    pub(super) fn finish(self) -> Vec<u8> {
        self.buf
    }
}

pub(super) struct FieldReader<'a> {
    buf: &'a [u8],
    limits: &'a CodecLimits,
}

impl<'a> FieldReader<'a> {
    pub(super) const fn new(buf: &'a [u8], limits: &'a CodecLimits) -> Self {
        Self { buf, limits }
    }

    fn ensure(&self, field: &'static str, needed: usize) -> Result<(), CodecError> {
        let available = self.buf.remaining();
        if available < needed {
            return Err(CodecError::malformed(
                field,
                MalformedReason::Truncated { needed, available },
            ));
        }
        Ok(())
    }

    pub(super) fn int32(&mut self, field: &'static str) -> Result<i32, CodecError> {
        self.ensure(field, INT32_LEN)?;
        Ok(self.buf.get_i32())
    }

    pub(super) fn int64(&mut self, field: &'static str) -> Result<i64, CodecError> {
        self.ensure(field, INT64_LEN)?;
        Ok(self.buf.get_i64())
    }

    pub(super) fn optional_text(
        &mut self,
        field: &'static str,
    ) -> Result<Option<String>, CodecError> {
        let prefix = self.int32(field)?;
        if prefix == ABSENT_TEXT {
            return Ok(None);
        }
        let len = usize::try_from(prefix)
            .map_err(|_| CodecError::malformed(field, MalformedReason::NegativeLength(prefix)))?;
        if len > self.limits.max_text_bytes {
            return Err(CodecError::malformed(
                field,
                MalformedReason::LengthOverLimit {
                    len,
                    limit: self.limits.max_text_bytes,
                },
            ));
        }
        let buf = self.buf;
        let (raw, rest) = buf.split_at_checked(len).ok_or_else(|| {
            CodecError::malformed(
                field,
                MalformedReason::Truncated {
                    needed: len,
                    available: buf.len(),
                },
            )
        })?;
        let text = std::str::from_utf8(raw)
            .map_err(|_| CodecError::malformed(field, MalformedReason::InvalidUtf8))?;
        self.buf = rest;
        Ok(Some(text.to_owned()))
    }

    pub(super) fn required_text(&mut self, field: &'static str) -> Result<String, CodecError> {
        Ok(self.optional_text(field)?.unwrap_or_default())
    }

    pub(super) fn finish(self) -> Result<(), CodecError> {
        match self.buf.remaining() {
            0 => Ok(()),
            extra => Err(CodecError::malformed(
                "end of message",
                MalformedReason::TrailingBytes(extra),
            )),
        }
    }
}
