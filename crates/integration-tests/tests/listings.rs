//! Integration tests for the listing cards and the price filter.

use hbnb_integration_tests::{Call, FakeApi, context, place, status};
use hbnb_web::components::{filter, listings};
use hbnb_web::page::{MemoryPage, Page, selectors};
use scraper::{Html, Selector};

fn index_page() -> MemoryPage {
    MemoryPage::new()
        .with_element(selectors::LOGIN_LINK)
        .with_element(selectors::PLACES_LIST)
        .with_field(selectors::PRICE_FILTER, "all")
}

fn api() -> FakeApi {
    FakeApi::new().with_places(vec![
        place("p1", "Beach House", 120),
        place("p2", "City Loft", 80),
        place("p3", "Cabin", 10),
    ])
}

// =============================================================================
// Loading
// =============================================================================

#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn test_one_card_per_listing() {
    let ctx = context(index_page().with_cookie("token=abc123"), api());

    assert_eq!(listings::load(&ctx).await.unwrap(), 3);
    assert_eq!(
        ctx.page().card_prices(selectors::PLACE_CARD),
        [Some("120".to_string()), Some("80".to_string()), Some("10".to_string())]
    );
    assert_eq!(ctx.places().len(), 3);
    assert_eq!(
        ctx.api().calls(),
        [Call::Places {
            token: "abc123".to_string()
        }]
    );
}

#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn test_cards_link_to_details() {
    let ctx = context(index_page().with_cookie("token=abc123"), api());
    listings::load(&ctx).await.unwrap();

    let html = Html::parse_fragment(&ctx.page().html(selectors::PLACES_LIST));
    let links = Selector::parse(".place-card a").unwrap();
    let hrefs: Vec<_> = html
        .select(&links)
        .filter_map(|a| a.value().attr("href"))
        .collect();

    assert_eq!(hrefs, ["place.html?id=p1", "place.html?id=p2", "place.html?id=p3"]);
    assert!(ctx.page().html(selectors::PLACES_LIST).contains("Price per night: $80"));
}

#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn test_reload_replaces_cards() {
    let ctx = context(index_page().with_cookie("token=abc123"), api());

    listings::load(&ctx).await.unwrap();
    listings::load(&ctx).await.unwrap();
    assert_eq!(ctx.page().card_prices(selectors::PLACE_CARD).len(), 3);
}

#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn test_no_credential_fetches_nothing() {
    let ctx = context(index_page(), api());

    assert_eq!(listings::load(&ctx).await.unwrap(), 0);
    assert!(ctx.api().calls().is_empty());
    assert_eq!(ctx.page().visible(selectors::LOGIN_LINK), Some(true));
    assert!(ctx.page().navigations().is_empty());
}

#[tokio::test]
async fn test_credential_hides_login_link() {
    let ctx = context(index_page().with_cookie("token=abc123"), api());

    assert!(listings::load(&ctx).await.is_ok());
    assert_eq!(ctx.page().visible(selectors::LOGIN_LINK), Some(false));
}

#[tokio::test]
async fn test_failed_fetch_leaves_list_empty() {
    let ctx = context(
        index_page().with_cookie("token=abc123"),
        FakeApi::new().with_places_error(status(500, "Internal error")),
    );

    assert!(listings::load(&ctx).await.is_err());
    assert_eq!(ctx.page().html(selectors::PLACES_LIST), "");
    assert!(ctx.places().is_empty());
}

// =============================================================================
// Price filter
// =============================================================================

#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn test_filter_over_loaded_cards() {
    let ctx = context(index_page().with_cookie("token=abc123"), api());
    listings::load(&ctx).await.unwrap();

    ctx.page().set_field(selectors::PRICE_FILTER, "10");
    assert_eq!(filter::apply(&ctx), 1);
    assert_eq!(
        ctx.page().card_visibility(selectors::PLACE_CARD),
        [false, false, true]
    );

    ctx.page().set_field(selectors::PRICE_FILTER, "100");
    assert_eq!(filter::apply(&ctx), 2);
    assert_eq!(
        ctx.page().card_visibility(selectors::PLACE_CARD),
        [false, true, true]
    );

    ctx.page().set_field(selectors::PRICE_FILTER, "all");
    assert_eq!(filter::apply(&ctx), 3);
}

#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn test_filter_threshold_is_inclusive() {
    let ctx = context(index_page().with_cookie("token=abc123"), api());
    listings::load(&ctx).await.unwrap();

    ctx.page().set_field(selectors::PRICE_FILTER, "80");
    assert_eq!(
        ctx.page().card_visibility(selectors::PLACE_CARD),
        [true, true, true]
    );
    filter::apply(&ctx);
    assert_eq!(
        ctx.page().card_visibility(selectors::PLACE_CARD),
        [false, true, true]
    );
}

#[test]
fn test_filter_without_cards() {
    let ctx = context(index_page(), FakeApi::new());
    ctx.page().set_field(selectors::PRICE_FILTER, "50");
    assert_eq!(filter::apply(&ctx), 0);
}
