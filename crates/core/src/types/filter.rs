//! Price filter selection.

use std::str::FromStr;

use super::price::{Price, PriceError};

/// Value of the filter control that disables filtering.
pub const ALL_SENTINEL: &str = "all";

/// Errors that can occur when parsing a [`PriceFilter`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceFilterError {
    /// The selection is neither the sentinel nor a price.
    #[error("invalid price filter: {0}")]
    InvalidThreshold(#[from] PriceError),
}

/// Selected maximum nightly price.
///
/// ```
/// use hbnb_core::{Price, PriceFilter};
///
/// let filter: PriceFilter = "100".parse().unwrap();
/// assert!(filter.admits(Some(Price::from_units(80))));
/// assert!(!filter.admits(Some(Price::from_units(120))));
/// assert!(PriceFilter::All.admits(None));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriceFilter {
    /// Every card is shown.
    #[default]
    All,
    /// Cards priced at or below the threshold are shown.
    AtMost(Price),
}

impl PriceFilter {
    /// Whether a card carrying `price` stays visible.
    ///
    /// A card without a readable price is only admitted by [`PriceFilter::All`].
    #[must_use]
    pub fn admits(&self, price: Option<Price>) -> bool {
        match self {
            Self::All => true,
            Self::AtMost(threshold) => price.is_some_and(|price| price <= *threshold),
        }
    }
}

impl FromStr for PriceFilter {
    type Err = PriceFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case(ALL_SENTINEL) {
            return Ok(Self::All);
        }
        Ok(Self::AtMost(s.parse()?))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sentinel() {
        assert_eq!("all".parse::<PriceFilter>().unwrap(), PriceFilter::All);
        assert_eq!(" ALL ".parse::<PriceFilter>().unwrap(), PriceFilter::All);
    }

    #[test]
    fn test_parse_threshold() {
        assert_eq!(
            "50".parse::<PriceFilter>().unwrap(),
            PriceFilter::AtMost(Price::from_units(50))
        );
    }

    #[test]
    fn test_parse_invalid() {
        assert!(matches!(
            "cheap".parse::<PriceFilter>(),
            Err(PriceFilterError::InvalidThreshold(_))
        ));
        assert!("".parse::<PriceFilter>().is_err());
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let filter = PriceFilter::AtMost(Price::from_units(100));
        assert!(filter.admits(Some(Price::from_units(100))));
        assert!(filter.admits(Some("99.99".parse().unwrap())));
        assert!(!filter.admits(Some("100.01".parse().unwrap())));
    }

    #[test]
    fn test_unreadable_price() {
        assert!(!PriceFilter::AtMost(Price::from_units(10)).admits(None));
        assert!(PriceFilter::All.admits(None));
    }
}
