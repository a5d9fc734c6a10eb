//! Unit tests for the message module.
//!
//! Tests are organised by domain concept, covering construction rules,
//! derivation, group metadata and the binary codec.

mod message_tests;
