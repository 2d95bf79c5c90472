//! WebAssembly entry point.
//!
//! Attaches to the live document, mounts the components the page carries
//! and wires their DOM events. Each handler runs its future with
//! `spawn_local` on the page's only thread.

use std::future::Future;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions};
use tracing_wasm::WASMLayerConfigBuilder;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen_futures::spawn_local;

use crate::api::ApiClient;
use crate::app::{self, Mounted};
use crate::components::{filter, login, review};
use crate::config::WebConfig;
use crate::error::AppError;
use crate::page::{DomPage, selectors};
use crate::state::PageContext;

type Context = PageContext<DomPage, ApiClient>;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let config = WebConfig::from_build_env();
    let level = config.as_ref().map_or(tracing::Level::INFO, |c| c.log_level);
    tracing_wasm::set_as_global_default_with_config(
        WASMLayerConfigBuilder::new().set_max_level(level).build(),
    );

    let config = match config {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(error = %AppError::from(err), "Front end not started");
            return;
        }
    };
    let Some(page) = DomPage::current() else {
        tracing::error!("No document to attach to");
        return;
    };

    tracing::info!(api_base = %config.api_base, "Starting hbnb front end");
    let api = ApiClient::new(&config);
    let ctx = Rc::new(PageContext::new(page, api, config));

    let mounted = app::mount(&ctx);
    wire(&ctx, mounted);
    spawn_local(async move { app::load(&ctx, mounted).await });
}

fn wire(ctx: &Rc<Context>, mounted: Mounted) {
    if mounted.login_form {
        on_submit(ctx, selectors::LOGIN_FORM, |ctx| async move {
            if let Ok(state) = login::submit(&ctx).await {
                tracing::debug!(?state, "Login settled");
            }
        });
    }

    if mounted.price_filter
        && let Some(control) = ctx.page().element(selectors::PRICE_FILTER)
    {
        let ctx = Rc::clone(ctx);
        EventListener::new(&control, "change", move |_| {
            let visible = filter::apply(&ctx);
            tracing::debug!(visible, "Price filter applied");
        })
        .forget();
    }

    if mounted.review_form {
        on_submit(ctx, selectors::REVIEW_FORM, |ctx| async move {
            if let Ok(state) = review::submit(&ctx).await {
                tracing::debug!(?state, "Review settled");
            }
        });
    }
}

/// Run `handler` on every submit of the form matching `selector`, in place
/// of the browser's own submission.
fn on_submit<F, Fut>(ctx: &Rc<Context>, selector: &str, handler: F)
where
    F: Fn(Rc<Context>) -> Fut + 'static,
    Fut: Future<Output = ()> + 'static,
{
    let Some(form) = ctx.page().element(selector) else {
        return;
    };

    let ctx = Rc::clone(ctx);
    EventListener::new_with_options(
        &form,
        "submit",
        EventListenerOptions::enable_prevent_default(),
        move |event| {
            event.prevent_default();
            spawn_local(handler(Rc::clone(&ctx)));
        },
    )
    .forget();
}
