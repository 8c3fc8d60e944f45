//! Kiosk Core - Shared types library.
//!
//! This crate provides common types used across all Kiosk services:
//! - `catalog` - Catalog browsing and checkout service
//! - `tasks` - Task board with capped submission counts
//! - `notify` - Submission acknowledgement echo service
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no async.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe ids, prices, and emails

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
