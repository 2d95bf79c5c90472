//! Browser front end for hbnb.
//!
//! Compiled to WebAssembly and loaded by every page of the site. Which
//! components run is decided by the elements a page carries:
//!
//! - `.login-form` - credential exchange and cookie persistence
//! - `#places-list` / `#price-filter` - listing cards and the price filter
//! - `#place-details` / `#reviews` - one listing with its reviews
//! - `#review-form` - review submission, authenticated visitors only
//!
//! Everything except the `entry` module builds natively, so components are
//! tested against the in-memory page and a scripted [`api::PlacesApi`].

#![cfg_attr(not(test), deny(unsafe_code))]

pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod page;
pub mod session;
pub mod state;
pub mod submit;
pub mod views;

// `#[wasm_bindgen]` expands to unsafe glue.
#[cfg(target_arch = "wasm32")]
#[allow(unsafe_code)]
mod entry;

pub use api::{ApiClient, ApiError, PlacesApi};
pub use app::{Mounted, boot};
pub use config::WebConfig;
pub use error::{AppError, Result};
pub use state::PageContext;
