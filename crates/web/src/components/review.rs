//! Review submitter.

use hbnb_core::{NewReview, PlaceId, parse_leading_int};
use tracing::instrument;

use crate::api::PlacesApi;
use crate::page::{Page, Tone, selectors};
use crate::session::{Redirect, check_authentication, place_id_from_location};
use crate::state::PageContext;
use crate::submit::{AlreadySubmitting, SubmitState};

pub const SUCCESS_MESSAGE: &str = "Review submitted successfully!";

/// Build the review body from the form fields and the page's `id`.
pub fn review_from_form<P: Page, A>(ctx: &PageContext<P, A>) -> NewReview {
    let page = ctx.page();
    let field = |selector| page.field_value(selector).unwrap_or_default();

    NewReview {
        user: field(selectors::USERNAME),
        rating: parse_leading_int(&field(selectors::RATING)),
        comment: field(selectors::COMMENT),
        place_id: place_id_from_location(ctx).map(PlaceId::new),
    }
}

/// Post the review form and report the outcome in `#message`.
///
/// The submit control is disabled while the request is in flight.
///
/// # Errors
///
/// Returns `AlreadySubmitting` without issuing a request if a previous
/// submission has not resolved yet.
#[instrument(skip(ctx))]
pub async fn submit<P: Page, A: PlacesApi>(
    ctx: &PageContext<P, A>,
) -> Result<SubmitState, AlreadySubmitting> {
    let guard = ctx.review_guard();
    guard
        .begin()
        .inspect_err(|_| tracing::warn!("Review already being submitted, ignoring"))?;

    let page = ctx.page();
    page.set_disabled(selectors::REVIEW_SUBMIT, true);
    let succeeded = send(ctx).await;
    page.set_disabled(selectors::REVIEW_SUBMIT, false);

    guard.finish(succeeded);
    Ok(guard.state())
}

async fn send<P: Page, A: PlacesApi>(ctx: &PageContext<P, A>) -> bool {
    // The cookie may have been cleared since the page was mounted.
    let Some(token) = check_authentication(ctx, Redirect::ToLogin) else {
        return false;
    };

    let page = ctx.page();
    let review = review_from_form(ctx);

    match ctx.api().submit_review(&token, &review).await {
        Ok(()) => {
            tracing::info!("Review submitted");
            page.show_message(selectors::MESSAGE, SUCCESS_MESSAGE, Tone::Success);
            page.reset_form(selectors::REVIEW_FORM);
            true
        }
        Err(err) => {
            tracing::error!(error = %err, "Failed to submit review");
            let message = if err.is_transport() {
                format!("Network error: {err}")
            } else {
                format!("Failed to submit review: {err}")
            };
            page.show_message(selectors::MESSAGE, &message, Tone::Error);
            false
        }
    }
}
