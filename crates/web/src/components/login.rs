//! Login submitter.

use hbnb_core::{AccessToken, LoginRequest};
use tracing::instrument;

use crate::api::{ApiError, PlacesApi};
use crate::page::{Page, Tone, selectors};
use crate::state::PageContext;
use crate::submit::{AlreadySubmitting, SubmitState};

/// Add the `#login-error` paragraph to the login form.
pub fn prepare<P: Page, A>(ctx: &PageContext<P, A>) {
    ctx.page()
        .append_paragraph(selectors::LOGIN_FORM, selectors::LOGIN_ERROR_ID, Tone::Error);
}

/// Cookie assignment that persists `token` for the whole site.
#[must_use]
pub fn token_cookie(name: &str, token: &AccessToken) -> String {
    format!("{name}={}; path=/", token.expose())
}

/// Text shown in `#login-error` for a failed login.
#[must_use]
pub fn failure_message(err: &ApiError) -> String {
    if err.is_transport() {
        format!("Network error: {err}")
    } else {
        format!("Login failed: {err}")
    }
}

/// Exchange the form's credentials for a token.
///
/// On success the token is written to the cookie jar and the window moves
/// to the landing page.
///
/// # Errors
///
/// Returns `AlreadySubmitting` without issuing a request if a previous
/// attempt has not resolved yet.
#[instrument(skip(ctx))]
pub async fn submit<P: Page, A: PlacesApi>(
    ctx: &PageContext<P, A>,
) -> Result<SubmitState, AlreadySubmitting> {
    let guard = ctx.login_guard();
    guard
        .begin()
        .inspect_err(|_| tracing::warn!("Login already in progress, ignoring"))?;

    let page = ctx.page();
    let config = ctx.config();
    let credentials = LoginRequest {
        email: page.field_value(selectors::EMAIL).unwrap_or_default(),
        password: page.field_value(selectors::PASSWORD).unwrap_or_default(),
    };

    page.set_disabled(selectors::LOGIN_SUBMIT, true);
    let succeeded = match ctx.api().login(&credentials).await {
        Ok(token) => {
            tracing::info!("Logged in");
            page.write_cookie(&token_cookie(&config.token_cookie, &token));
            page.navigate(&config.landing_page);
            true
        }
        Err(err) => {
            tracing::warn!(error = %err, "Login failed");
            page.show_message(selectors::LOGIN_ERROR, &failure_message(&err), Tone::Error);
            false
        }
    };
    page.set_disabled(selectors::LOGIN_SUBMIT, false);

    guard.finish(succeeded);
    Ok(guard.state())
}
