//! Listing and review records as returned by the API.
//!
//! Records are transient: they are decoded from a response, rendered and
//! dropped. Optional fields stay optional here; placeholder text is a
//! presentation concern.

use serde::{Deserialize, Serialize};

use super::id::PlaceId;
use super::price::Price;

/// A rentable property record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Place {
    pub id: PlaceId,
    #[serde(alias = "title")]
    pub name: String,
    #[serde(alias = "price")]
    pub price_per_night: Price,
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub amenities: Option<Vec<Amenity>>,
    #[serde(default)]
    pub reviews: Option<Vec<Review>>,
}

/// An amenity entry.
///
/// The listings endpoint sends plain names; the detail endpoint of some API
/// versions sends `{ "id": ..., "name": ... }` objects. Both decode here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amenity {
    Name(String),
    Record { name: String },
}

impl Amenity {
    /// Display name of the amenity.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Name(name) | Self::Record { name } => name,
        }
    }
}

/// User-submitted feedback embedded in a [`Place`].
///
/// The rating is kept exactly as sent, including values outside 1-5.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub rating: i64,
    #[serde(default, alias = "text")]
    pub comment: String,
}
