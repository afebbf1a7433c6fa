//! Integration tests for vodcast
//!
//! Tests are organized by component:
//! - catalog_test: catalog fetch + build (document walk, rendition selection)
//! - store_test: single-slot store (memoization, sticky failure, races)
//! - queue_test: playback queue construction and load request mapping
//! - cli_test: CLI argument parsing and exit codes

// Note: Each test file is a separate integration test crate
// Tests are run individually by cargo, not via mod.rs
