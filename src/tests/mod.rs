// src/tests/mod.rs

//! Tests for _alrlib_.
//!
//! Tests are placed at `src/tests/`, inside the `alrlib`. This is a reasonable
//! trade-off of separation and access.
//!
//! Tests placed at top-level path `tests/` do not have crate-internal
//! visibility.
