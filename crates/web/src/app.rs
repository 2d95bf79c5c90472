//! Page boot.
//!
//! One bundle serves every page. [`mount`] checks which elements the page
//! carries and prepares the matching components, in the order login,
//! listings, detail, review; [`load`] then runs the loaders that fetch.

use crate::api::PlacesApi;
use crate::components::{detail, listings, login};
use crate::page::{Page, selectors};
use crate::session::{Redirect, check_authentication};
use crate::state::PageContext;

/// Components attached to the current page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct Mounted {
    pub login_form: bool,
    pub places_list: bool,
    pub price_filter: bool,
    pub place_details: bool,
    pub review_form: bool,
    /// An unauthenticated visitor was sent to the login page.
    pub redirected: bool,
}

/// Detect the page's capabilities and prepare the synchronous parts.
///
/// A review form is only mounted for authenticated visitors; everyone else
/// is navigated to the login page before it is wired.
pub fn mount<P: Page, A>(ctx: &PageContext<P, A>) -> Mounted {
    let page = ctx.page();
    let mut mounted = Mounted::default();

    if page.exists(selectors::LOGIN_FORM) {
        login::prepare(ctx);
        mounted.login_form = true;
    }

    mounted.places_list = page.exists(selectors::PLACES_LIST);
    mounted.price_filter = page.exists(selectors::PRICE_FILTER);
    mounted.place_details = page.exists(selectors::PLACE_DETAILS);

    if page.exists(selectors::REVIEW_FORM) {
        mounted.review_form = check_authentication(ctx, Redirect::ToLogin).is_some();
        mounted.redirected = !mounted.review_form;
    }

    tracing::debug!(?mounted, "Mounted components");
    mounted
}

/// Run the loaders for the mounted sections, logging their failures.
pub async fn load<P: Page, A: PlacesApi>(ctx: &PageContext<P, A>, mounted: Mounted) {
    if mounted.redirected {
        return;
    }

    if mounted.places_list
        && let Err(err) = listings::load(ctx).await
    {
        tracing::error!(error = %err, "Failed to load places");
    }

    if mounted.place_details
        && let Err(err) = detail::load(ctx).await
    {
        tracing::error!(error = %err, "Failed to load place details");
    }
}

/// Mount the page and run its loaders.
pub async fn boot<P: Page, A: PlacesApi>(ctx: &PageContext<P, A>) -> Mounted {
    let mounted = mount(ctx);
    load(ctx, mounted).await;
    mounted
}
