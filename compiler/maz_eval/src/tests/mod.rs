//! Operator tests, kept apart from the implementation files.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
