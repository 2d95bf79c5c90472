//! Integration tests for the listing detail page.

use hbnb_core::{Amenity, PlaceId};
use hbnb_integration_tests::{Call, FakeApi, context, place, review, status};
use hbnb_web::components::detail;
use hbnb_web::page::{MemoryPage, Page, selectors};
use hbnb_web::views::{MAX_STARS, STAR};
use scraper::{Html, Selector};

fn detail_page() -> MemoryPage {
    MemoryPage::new()
        .with_element(selectors::LOGIN_LINK)
        .with_element(selectors::PLACE_DETAILS)
        .with_element(selectors::ADD_REVIEW)
        .with_element(selectors::REVIEWS)
        .with_search("?id=p1")
}

#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn test_renders_details_and_reviews() {
    let mut listing = place("p1", "Beach House", 120);
    listing.host = Some("Ada".to_string());
    listing.amenities = Some(vec![Amenity::Name("WiFi".to_string())]);
    listing.reviews = Some(vec![review("Bob", 3, "Lovely")]);

    let ctx = context(
        detail_page().with_cookie("token=abc123"),
        FakeApi::new().with_place(listing),
    );
    let loaded = detail::load(&ctx).await.unwrap().unwrap();
    assert_eq!(loaded.name, "Beach House");

    let details = Html::parse_fragment(&ctx.page().html(selectors::PLACE_DETAILS));
    let heading = Selector::parse("h1").unwrap();
    let lines = Selector::parse(".place-info p").unwrap();
    let lines: Vec<String> = details
        .select(&lines)
        .map(|line| line.text().collect())
        .collect();

    assert_eq!(
        details.select(&heading).next().map(|h| h.text().collect::<String>()),
        Some("Beach House".to_string())
    );
    assert_eq!(
        lines,
        [
            "Host: Ada",
            "Price: $120 per night",
            "Description: No description",
            "Amenities: WiFi",
        ]
    );

    let reviews = ctx.page().html(selectors::REVIEWS);
    assert_eq!(reviews.matches(STAR).count(), 3);
    assert!(reviews.contains("Lovely"));
    assert_eq!(
        ctx.api().calls(),
        [Call::Place {
            id: PlaceId::new("p1"),
            token: Some("abc123".to_string()),
        }]
    );
}

#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn test_authenticated_visitor_may_add_review() {
    let ctx = context(
        detail_page().with_cookie("token=abc123"),
        FakeApi::new().with_place(place("p1", "Beach House", 120)),
    );
    detail::load(&ctx).await.unwrap();

    assert_eq!(ctx.page().visible(selectors::ADD_REVIEW), Some(true));
    assert_eq!(ctx.page().visible(selectors::LOGIN_LINK), Some(false));
}

#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn test_anonymous_visitor_reads_without_credential() {
    let ctx = context(
        detail_page(),
        FakeApi::new().with_place(place("p1", "Beach House", 120)),
    );
    detail::load(&ctx).await.unwrap();

    assert_eq!(ctx.page().visible(selectors::ADD_REVIEW), Some(false));
    assert_eq!(ctx.page().visible(selectors::LOGIN_LINK), Some(true));
    assert_eq!(
        ctx.api().calls(),
        [Call::Place {
            id: PlaceId::new("p1"),
            token: None,
        }]
    );
}

#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn test_absent_reviews_leave_section_alone() {
    let ctx = context(
        detail_page(),
        FakeApi::new().with_place(place("p1", "Beach House", 120)),
    );
    detail::load(&ctx).await.unwrap();

    assert_eq!(ctx.page().html(selectors::REVIEWS), "");
}

#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn test_missing_id_skips_fetch() {
    let ctx = context(
        detail_page().with_search(""),
        FakeApi::new().with_place(place("p1", "Beach House", 120)),
    );

    assert!(detail::load(&ctx).await.unwrap().is_none());
    assert!(ctx.api().calls().is_empty());
}

#[tokio::test]
async fn test_failed_fetch_leaves_details_empty() {
    let ctx = context(
        detail_page(),
        FakeApi::new().with_place_error(status(404, "Place not found")),
    );

    assert!(detail::load(&ctx).await.is_err());
    assert_eq!(ctx.page().html(selectors::PLACE_DETAILS), "");
}

#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn test_huge_rating_renders_clamped_stars() {
    let mut listing = place("p1", "Beach House", 120);
    listing.reviews = Some(vec![review("Eve", i64::MAX, "!"), review("Bob", 2, "Fine")]);

    let ctx = context(detail_page(), FakeApi::new().with_place(listing));
    detail::load(&ctx).await.unwrap();

    let reviews = ctx.page().html(selectors::REVIEWS);
    assert_eq!(reviews.matches(STAR).count(), MAX_STARS + 2);
    assert!(reviews.contains("Fine"));
}
