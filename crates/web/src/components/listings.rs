//! Listing collection loader.

use tracing::instrument;

use crate::api::PlacesApi;
use crate::error::Result;
use crate::page::{Page, selectors};
use crate::session::{Redirect, check_authentication};
use crate::state::PageContext;
use crate::views::render_place_cards;

/// Fetch every listing and render one card each into `#places-list`.
///
/// Without a credential nothing is fetched; the login link is still
/// toggled. Returns the number of cards rendered.
///
/// # Errors
///
/// Returns an error if the fetch fails or the cards cannot be rendered. The
/// list is left as it was.
#[instrument(skip(ctx))]
pub async fn load<P: Page, A: PlacesApi>(ctx: &PageContext<P, A>) -> Result<usize> {
    let Some(token) = check_authentication(ctx, Redirect::Stay) else {
        tracing::debug!("No credential, listings not fetched");
        return Ok(0);
    };

    let places = ctx.api().places(&token).await?;
    let html = render_place_cards(&places, ctx.config())?;
    ctx.page().replace_html(selectors::PLACES_LIST, &html);

    let count = places.len();
    ctx.store_places(places);
    tracing::info!(count, "Rendered listings");
    Ok(count)
}
