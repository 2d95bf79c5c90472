//! Integration tests for the review form.

use hbnb_core::{NewReview, PlaceId};
use hbnb_integration_tests::{Call, FakeApi, context, status};
use hbnb_web::ApiError;
use hbnb_web::app;
use hbnb_web::components::review;
use hbnb_web::page::{MemoryPage, Page, Tone, selectors};
use hbnb_web::submit::SubmitState;

fn review_page() -> MemoryPage {
    MemoryPage::new()
        .with_element(selectors::REVIEW_FORM)
        .with_element(selectors::REVIEW_SUBMIT)
        .with_element(selectors::MESSAGE)
        .with_field(selectors::USERNAME, "Bob")
        .with_field(selectors::RATING, "4")
        .with_field(selectors::COMMENT, "Great stay")
        .with_search("?id=p1")
}

// =============================================================================
// Page entry
// =============================================================================

#[test]
fn test_anonymous_visitor_is_sent_to_login() {
    let ctx = context(review_page(), FakeApi::new());
    let mounted = app::mount(&ctx);

    assert!(!mounted.review_form);
    assert_eq!(ctx.page().navigations(), ["login.html"]);
}

#[tokio::test]
async fn test_redirected_page_loads_nothing() {
    let ctx = context(
        review_page().with_element(selectors::PLACE_DETAILS),
        FakeApi::new(),
    );

    let mounted = app::boot(&ctx).await;
    assert!(mounted.redirected);
    assert!(ctx.api().calls().is_empty());
}

// =============================================================================
// Submission
// =============================================================================

#[tokio::test]
async fn test_success_resets_form() {
    let ctx = context(review_page().with_cookie("token=abc123"), FakeApi::new());
    assert!(app::mount(&ctx).review_form);

    assert_eq!(review::submit(&ctx).await, Ok(SubmitState::Succeeded));
    assert_eq!(
        ctx.page().text(selectors::MESSAGE),
        "Review submitted successfully!"
    );
    assert_eq!(ctx.page().tone(selectors::MESSAGE), Some(Tone::Success));
    assert_eq!(
        ctx.page().element(selectors::REVIEW_FORM).map(|f| f.resets),
        Some(1)
    );
    assert_eq!(
        ctx.api().calls(),
        [Call::SubmitReview {
            token: "abc123".to_string(),
            review: NewReview {
                user: "Bob".to_string(),
                rating: Some(4),
                comment: "Great stay".to_string(),
                place_id: Some(PlaceId::new("p1")),
            },
        }]
    );
}

#[tokio::test]
async fn test_rejected_review_shows_body() {
    let ctx = context(
        review_page().with_cookie("token=abc123"),
        FakeApi::new().with_review_error(status(400, "Invalid rating")),
    );

    assert_eq!(review::submit(&ctx).await, Ok(SubmitState::Failed));
    assert_eq!(
        ctx.page().text(selectors::MESSAGE),
        "Failed to submit review: Invalid rating"
    );
    assert_eq!(ctx.page().tone(selectors::MESSAGE), Some(Tone::Error));
    assert_eq!(
        ctx.page().element(selectors::REVIEW_FORM).map(|f| f.resets),
        Some(0)
    );
}

#[tokio::test]
async fn test_network_failure() {
    let ctx = context(
        review_page().with_cookie("token=abc123"),
        FakeApi::new().with_review_error(ApiError::Transport("Failed to fetch".to_string())),
    );

    assert_eq!(review::submit(&ctx).await, Ok(SubmitState::Failed));
    assert_eq!(
        ctx.page().text(selectors::MESSAGE),
        "Network error: Failed to fetch"
    );
    assert_eq!(ctx.page().tone(selectors::MESSAGE), Some(Tone::Error));
}

#[tokio::test]
async fn test_message_is_overwritten() {
    let ctx = context(
        review_page().with_cookie("token=abc123"),
        FakeApi::new().with_review_error(status(400, "Invalid rating")),
    );
    review::submit(&ctx).await.ok();
    review::submit(&ctx).await.ok();

    assert_eq!(
        ctx.page().text(selectors::MESSAGE),
        "Failed to submit review: Invalid rating"
    );
}

#[tokio::test]
async fn test_unparseable_rating_is_sent_as_null() {
    let ctx = context(review_page().with_cookie("token=abc123"), FakeApi::new());
    ctx.page().set_field(selectors::RATING, "great");
    review::submit(&ctx).await.ok();

    let calls = ctx.api().calls();
    let Some(Call::SubmitReview { review, .. }) = calls.first() else {
        panic!("expected a review submission, got {calls:?}");
    };
    assert_eq!(review.rating, None);
}

#[tokio::test]
async fn test_cleared_credential_redirects_on_submit() {
    let ctx = context(review_page(), FakeApi::new());

    assert_eq!(review::submit(&ctx).await, Ok(SubmitState::Failed));
    assert!(ctx.api().calls().is_empty());
    assert_eq!(ctx.page().navigations(), ["login.html"]);
}

// =============================================================================
// Double submission
// =============================================================================

#[tokio::test]
async fn test_second_submit_while_in_flight_issues_no_request() {
    let ctx = context(
        review_page().with_cookie("token=abc123"),
        FakeApi::new().suspending(),
    );

    let (first, second) = tokio::join!(review::submit(&ctx), review::submit(&ctx));

    assert_eq!(first, Ok(SubmitState::Succeeded));
    assert!(second.is_err());
    assert_eq!(ctx.api().calls().len(), 1);
}

#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn test_submit_control_disabled_during_request() {
    let ctx = context(review_page().with_cookie("token=abc123"), FakeApi::new());
    review::submit(&ctx).await.unwrap();
    review::submit(&ctx).await.unwrap();

    let submit = ctx.page().element(selectors::REVIEW_SUBMIT).unwrap();
    assert_eq!(submit.disabled_history, [true, false, true, false]);
    assert_eq!(ctx.review_guard().state(), SubmitState::Succeeded);
}
