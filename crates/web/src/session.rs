//! Session Reader.
//!
//! Derives the authentication state from the cookie jar and gates the
//! login-only parts of the page on it.

use hbnb_core::AccessToken;

use crate::page::{Page, query_param, selectors};
use crate::state::PageContext;

/// Whether an unauthenticated visitor should be sent to the login page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redirect {
    /// Send the visitor to the login page.
    ToLogin,
    /// Stay, and show the login link instead.
    Stay,
}

/// Find the value of cookie `name` in a `document.cookie` string.
///
/// An empty value counts as absent.
#[must_use]
pub fn read_token(cookie_string: &str, name: &str) -> Option<AccessToken> {
    cookie_string
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .and_then(|(_, value)| AccessToken::new(value))
}

/// Current bearer credential, without touching the page.
pub fn current_token<P: Page, A>(ctx: &PageContext<P, A>) -> Option<AccessToken> {
    read_token(&ctx.page().cookie_string(), &ctx.config().token_cookie)
}

/// Read the credential and gate the page on it.
///
/// With [`Redirect::ToLogin`] an unauthenticated visitor is navigated to the
/// login page. Otherwise `#login-link` is shown when there is no credential
/// and hidden when there is one.
pub fn check_authentication<P: Page, A>(
    ctx: &PageContext<P, A>,
    redirect: Redirect,
) -> Option<AccessToken> {
    let token = current_token(ctx);

    if token.is_none() && redirect == Redirect::ToLogin {
        tracing::info!("Not authenticated, redirecting to login");
        ctx.page().navigate(&ctx.config().login_page);
    } else {
        ctx.page()
            .set_visible(selectors::LOGIN_LINK, token.is_none());
    }

    token
}

/// The `id` query parameter of the current page.
pub fn place_id_from_location<P: Page, A>(ctx: &PageContext<P, A>) -> Option<String> {
    query_param(&ctx.page().location_search(), "id").filter(|id| !id.is_empty())
}
