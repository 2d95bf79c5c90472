//! hbnb Core - Shared types library.
//!
//! This crate provides the domain types used by the hbnb front end:
//! - `web` - Browser front end compiled to WebAssembly
//! - `integration-tests` - Flow tests over an in-memory page
//!
//! # Architecture
//!
//! The core crate contains only types and parsing - no I/O, no DOM access,
//! no HTTP clients. This keeps it lightweight and testable on any target.
//!
//! # Modules
//!
//! - [`types`] - Listing ids, prices, credentials, listings, reviews and the
//!   request bodies sent to the API

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
