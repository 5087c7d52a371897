//! Shared helpers for the lock tests and the `history_fixture` binary.
