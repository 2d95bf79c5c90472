//! Page-scoped state shared by every component.

use std::cell::{Ref, RefCell};

use hbnb_core::Place;

use crate::config::WebConfig;
use crate::submit::SubmitGuard;

/// Everything the components of one page view share.
///
/// Built once per page load and shared behind an `Rc` with the event
/// handlers. The listing cache is written only by the collection loader and
/// read by anyone holding the context.
pub struct PageContext<P, A> {
    page: P,
    api: A,
    config: WebConfig,
    places: RefCell<Vec<Place>>,
    login: SubmitGuard,
    review: SubmitGuard,
}

impl<P, A> PageContext<P, A> {
    /// Create the context for a freshly loaded page.
    pub fn new(page: P, api: A, config: WebConfig) -> Self {
        Self {
            page,
            api,
            config,
            places: RefCell::new(Vec::new()),
            login: SubmitGuard::new(),
            review: SubmitGuard::new(),
        }
    }

    pub const fn page(&self) -> &P {
        &self.page
    }

    pub const fn api(&self) -> &A {
        &self.api
    }

    pub const fn config(&self) -> &WebConfig {
        &self.config
    }

    /// Listings fetched by the last successful collection load.
    pub fn places(&self) -> Ref<'_, Vec<Place>> {
        self.places.borrow()
    }

    pub(crate) fn store_places(&self, places: Vec<Place>) {
        *self.places.borrow_mut() = places;
    }

    pub const fn login_guard(&self) -> &SubmitGuard {
        &self.login
    }

    pub const fn review_guard(&self) -> &SubmitGuard {
        &self.review
    }
}
