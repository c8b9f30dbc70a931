//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! This crate defines traits that abstract external concerns:
//!
//! - [`corpus`]: Retrieval of corpus text by style key
//! - [`observer`]: Verbose reporting while a progression is scored
//!
//! These ports allow the domain and application layers to remain
//! independent of specific implementations.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod corpus;
pub mod observer;
