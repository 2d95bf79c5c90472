//! Integration tests for the hbnb front end.
//!
//! Components run against [`MemoryPage`] and [`FakeApi`], a scripted
//! stand-in for the REST API that records every call it receives.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p hbnb-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `listings` - card rendering and the price filter
//! - `detail` - listing details and reviews
//! - `login` - credential exchange and cookie persistence
//! - `review` - review submission and its guard

use std::cell::RefCell;

use hbnb_core::{
    AccessToken, LoginRequest, LoginResponse, NewReview, Place, PlaceId, Price, Review,
};
use hbnb_web::page::MemoryPage;
use hbnb_web::{ApiError, PageContext, PlacesApi, WebConfig};

/// API base every test context is configured with.
pub const API_BASE: &str = "http://127.0.0.1:5000/api/v1";

/// One request received by [`FakeApi`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Login(LoginRequest),
    Places { token: String },
    Place { id: PlaceId, token: Option<String> },
    SubmitReview { token: String, review: NewReview },
}

/// Scripted API. Every endpoint answers with the configured response.
#[derive(Debug)]
pub struct FakeApi {
    login: Result<String, ApiError>,
    places: Result<Vec<Place>, ApiError>,
    place: Result<Place, ApiError>,
    review: Result<(), ApiError>,
    suspend: bool,
    calls: RefCell<Vec<Call>>,
}

impl Default for FakeApi {
    fn default() -> Self {
        Self {
            login: Err(status(401, "Invalid credentials")),
            places: Ok(Vec::new()),
            place: Err(status(404, "Place not found")),
            review: Ok(()),
            suspend: false,
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl FakeApi {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `POST /auth/login` with `body` and HTTP `code`.
    #[must_use]
    pub fn with_login_response(mut self, code: u16, body: &str) -> Self {
        self.login = if (200..300).contains(&code) {
            Ok(body.to_string())
        } else {
            Err(status(code, body))
        };
        self
    }

    #[must_use]
    pub fn with_login_error(mut self, err: ApiError) -> Self {
        self.login = Err(err);
        self
    }

    #[must_use]
    pub fn with_places(mut self, places: Vec<Place>) -> Self {
        self.places = Ok(places);
        self
    }

    #[must_use]
    pub fn with_places_error(mut self, err: ApiError) -> Self {
        self.places = Err(err);
        self
    }

    #[must_use]
    pub fn with_place(mut self, place: Place) -> Self {
        self.place = Ok(place);
        self
    }

    #[must_use]
    pub fn with_place_error(mut self, err: ApiError) -> Self {
        self.place = Err(err);
        self
    }

    #[must_use]
    pub fn with_review_error(mut self, err: ApiError) -> Self {
        self.review = Err(err);
        self
    }

    /// Yield to the executor once before answering, as a real request would.
    #[must_use]
    pub const fn suspending(mut self) -> Self {
        self.suspend = true;
        self
    }

    /// Every call received so far, in order.
    #[must_use]
    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    async fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
        if self.suspend {
            tokio::task::yield_now().await;
        }
    }
}

impl PlacesApi for FakeApi {
    async fn login(&self, credentials: &LoginRequest) -> Result<AccessToken, ApiError> {
        self.record(Call::Login(credentials.clone())).await;

        let body = self.login.clone()?;
        let response: LoginResponse = serde_json::from_str(&body)?;
        AccessToken::new(response.access_token)
            .ok_or_else(|| ApiError::Decode("access_token is empty".to_string()))
    }

    async fn places(&self, token: &AccessToken) -> Result<Vec<Place>, ApiError> {
        self.record(Call::Places {
            token: token.expose().to_string(),
        })
        .await;
        self.places.clone()
    }

    async fn place(&self, id: &PlaceId, token: Option<&AccessToken>) -> Result<Place, ApiError> {
        self.record(Call::Place {
            id: id.clone(),
            token: token.map(|t| t.expose().to_string()),
        })
        .await;
        self.place.clone()
    }

    async fn submit_review(&self, token: &AccessToken, review: &NewReview) -> Result<(), ApiError> {
        self.record(Call::SubmitReview {
            token: token.expose().to_string(),
            review: review.clone(),
        })
        .await;
        self.review.clone()
    }
}

/// Context over `page` and `api` with the default page paths.
///
/// # Panics
///
/// Panics if [`API_BASE`] stops being a valid API base.
#[must_use]
#[allow(clippy::expect_used)]
pub fn context(page: MemoryPage, api: FakeApi) -> PageContext<MemoryPage, FakeApi> {
    let config = WebConfig::with_api_base(API_BASE).expect("API_BASE is valid");
    PageContext::new(page, api, config)
}

/// A non-success API answer.
#[must_use]
pub fn status(code: u16, body: &str) -> ApiError {
    ApiError::Status {
        status: code,
        body: body.to_string(),
    }
}

/// A listing with only the required fields set.
#[must_use]
pub fn place(id: &str, name: &str, price: i64) -> Place {
    Place {
        id: PlaceId::new(id),
        name: name.to_string(),
        price_per_night: Price::from_units(price),
        host: None,
        description: None,
        amenities: None,
        reviews: None,
    }
}

#[must_use]
pub fn review(user: &str, rating: i64, comment: &str) -> Review {
    Review {
        user: user.to_string(),
        rating,
        comment: comment.to_string(),
    }
}
