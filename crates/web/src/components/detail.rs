//! Listing detail loader.

use hbnb_core::{Place, PlaceId};
use tracing::instrument;

use crate::api::PlacesApi;
use crate::error::Result;
use crate::page::{Page, selectors};
use crate::session::{Redirect, check_authentication, place_id_from_location};
use crate::state::PageContext;
use crate::views::{render_place_details, render_reviews};

/// Fetch the listing named by the `id` query parameter and render it.
///
/// `#add-review` is shown only to authenticated visitors. The credential is
/// sent when present; the API decides whether anonymous reads are allowed.
/// Returns the listing, or `None` when the page has no `id` parameter.
///
/// # Errors
///
/// Returns an error if the fetch fails or the listing cannot be rendered.
/// The sections are left unrendered.
#[instrument(skip(ctx))]
pub async fn load<P: Page, A: PlacesApi>(ctx: &PageContext<P, A>) -> Result<Option<Place>> {
    let page = ctx.page();
    let token = check_authentication(ctx, Redirect::Stay);
    page.set_visible(selectors::ADD_REVIEW, token.is_some());

    let Some(id) = place_id_from_location(ctx) else {
        tracing::warn!("No place id in the query string, details not fetched");
        return Ok(None);
    };
    let id = PlaceId::new(id);

    let place = ctx.api().place(&id, token.as_ref()).await?;
    page.replace_html(selectors::PLACE_DETAILS, &render_place_details(&place)?);

    if let Some(reviews) = place.reviews.as_deref() {
        page.replace_html(selectors::REVIEWS, &render_reviews(reviews)?);
    }

    tracing::info!(place_id = %id, "Rendered place details");
    Ok(Some(place))
}
