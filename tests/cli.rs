//! End-to-end tests driving the compiled binary.

mod common;

#[path = "cli/smoke_tests.rs"]
mod smoke_tests;
