//! View models and their templates.
//!
//! Records go in, escaped markup comes out. Fetch logic never builds HTML
//! itself, and every field is escaped by the template engine.

use askama::Template;
use hbnb_core::{Amenity, Place, Review};
use thiserror::Error;

use crate::config::WebConfig;

/// Glyph repeated once per rating point.
pub const STAR: &str = "⭐";

/// Most glyphs a single review renders; larger ratings are clamped.
pub const MAX_STARS: usize = 10;

/// Errors that can occur while rendering a view.
#[derive(Debug, Error)]
pub enum ViewError {
    #[error("Template error: {0}")]
    Render(#[from] askama::Error),
}

/// Listing card display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceCardView {
    pub name: String,
    pub price: String,
    pub href: String,
}

impl PlaceCardView {
    /// Build the card for `place`, linking to the configured detail page.
    #[must_use]
    pub fn new(place: &Place, config: &WebConfig) -> Self {
        let id: String = url::form_urlencoded::byte_serialize(place.id.as_str().as_bytes()).collect();
        Self {
            name: place.name.clone(),
            price: place.price_per_night.to_string(),
            href: format!("{}?id={id}", config.detail_page),
        }
    }
}

/// Listing detail display data with placeholders already applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceDetailsView {
    pub name: String,
    pub host: String,
    pub price: String,
    pub description: String,
    pub amenities: String,
}

impl From<&Place> for PlaceDetailsView {
    fn from(place: &Place) -> Self {
        let amenities = place
            .amenities
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(Amenity::name)
            .collect::<Vec<_>>()
            .join(", ");

        Self {
            name: place.name.clone(),
            host: non_empty(place.host.as_deref()).unwrap_or("N/A").to_string(),
            price: place.price_per_night.to_string(),
            description: non_empty(place.description.as_deref())
                .unwrap_or("No description")
                .to_string(),
            amenities: if amenities.is_empty() {
                "None".to_string()
            } else {
                amenities
            },
        }
    }
}

/// Review card display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewCardView {
    pub user: String,
    pub comment: String,
    pub rating: i64,
    pub stars: String,
}

impl From<&Review> for ReviewCardView {
    fn from(review: &Review) -> Self {
        Self {
            user: review.user.clone(),
            comment: review.comment.clone(),
            rating: review.rating,
            stars: stars(review.rating),
        }
    }
}

/// One star per rating point, at most [`MAX_STARS`]; non-positive ratings
/// render no stars.
#[must_use]
pub fn stars(rating: i64) -> String {
    STAR.repeat(usize::try_from(rating).unwrap_or(0).min(MAX_STARS))
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Listing cards fragment.
#[derive(Template)]
#[template(path = "partials/place_cards.html")]
pub struct PlaceCardsTemplate {
    pub cards: Vec<PlaceCardView>,
}

/// Listing detail fragment.
#[derive(Template)]
#[template(path = "partials/place_details.html")]
pub struct PlaceDetailsTemplate {
    pub place: PlaceDetailsView,
}

/// Reviews fragment.
#[derive(Template)]
#[template(path = "partials/reviews.html")]
pub struct ReviewsTemplate {
    pub reviews: Vec<ReviewCardView>,
}

/// Render one card per listing.
///
/// # Errors
///
/// Returns `ViewError` if the template fails to render.
pub fn render_place_cards(places: &[Place], config: &WebConfig) -> Result<String, ViewError> {
    let cards = places
        .iter()
        .map(|place| PlaceCardView::new(place, config))
        .collect();
    Ok(PlaceCardsTemplate { cards }.render()?)
}

/// Render the detail section of one listing.
///
/// # Errors
///
/// Returns `ViewError` if the template fails to render.
pub fn render_place_details(place: &Place) -> Result<String, ViewError> {
    Ok(PlaceDetailsTemplate {
        place: PlaceDetailsView::from(place),
    }
    .render()?)
}

/// Render the reviews section.
///
/// # Errors
///
/// Returns `ViewError` if the template fails to render.
pub fn render_reviews(reviews: &[Review]) -> Result<String, ViewError> {
    let reviews = reviews.iter().map(ReviewCardView::from).collect();
    Ok(ReviewsTemplate { reviews }.render()?)
}
