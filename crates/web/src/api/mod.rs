//! hbnb REST API access.
//!
//! # Architecture
//!
//! - [`PlacesApi`] is the seam between components and the network
//! - [`ApiClient`] implements it with `reqwest` (browser `fetch` on wasm32)
//! - The API is the source of truth; nothing is cached beyond one page view
//!
//! # Endpoints
//!
//! | Method | Path | Auth |
//! |---|---|---|
//! | POST | `/auth/login` | none |
//! | GET | `/places` | bearer |
//! | GET | `/places/{id}` | optional bearer |
//! | POST | `/reviews` | bearer |

mod client;

pub use client::ApiClient;

use hbnb_core::{AccessToken, LoginRequest, NewReview, Place, PlaceId};
use thiserror::Error;

/// Errors that can occur when calling the API.
///
/// `Display` yields exactly the text shown to the user after a prefix such
/// as `"Failed to submit review: "` or `"Network error: "`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The API answered with a non-success status; carries the raw body.
    #[error("{body}")]
    Status { status: u16, body: String },

    /// The request never produced a response.
    #[error("{0}")]
    Transport(String),

    /// A success response did not have the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),

    /// The endpoint URL could not be built from the API base.
    #[error("invalid endpoint URL: {0}")]
    Url(String),
}

impl ApiError {
    /// Whether the error is a transport failure rather than an API answer.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

/// Operations the front end performs against the API.
///
/// Futures are not `Send`: everything runs on the page's single thread.
#[allow(async_fn_in_trait)]
pub trait PlacesApi {
    /// Exchange credentials for an access token.
    async fn login(&self, credentials: &LoginRequest) -> Result<AccessToken, ApiError>;

    /// Fetch every listing.
    async fn places(&self, token: &AccessToken) -> Result<Vec<Place>, ApiError>;

    /// Fetch one listing with its embedded reviews.
    async fn place(&self, id: &PlaceId, token: Option<&AccessToken>) -> Result<Place, ApiError>;

    /// Post a new review.
    async fn submit_review(&self, token: &AccessToken, review: &NewReview) -> Result<(), ApiError>;
}
