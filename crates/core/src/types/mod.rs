//! Core types for hbnb.
//!
//! This module provides type-safe wrappers for the lodging domain.

pub mod credential;
pub mod filter;
pub mod id;
pub mod place;
pub mod price;
pub mod request;

pub use credential::AccessToken;
pub use filter::{PriceFilter, PriceFilterError};
pub use id::PlaceId;
pub use place::{Amenity, Place, Review};
pub use price::{Price, PriceError};
pub use request::{LoginRequest, LoginResponse, NewReview, parse_leading_int};
