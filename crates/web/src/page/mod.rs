//! The page seam.
//!
//! Components never touch the DOM directly; they go through [`Page`], which
//! addresses elements by CSS selector. Every operation on a selector that
//! matches nothing is a silent no-op, so one bundle can serve every page and
//! each component attaches only where its elements exist.
//!
//! - [`DomPage`] - the live document (wasm32 only)
//! - [`MemoryPage`] - an in-memory page for tests (`test-support` feature)

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(any(test, feature = "test-support"))]
mod memory;

#[cfg(target_arch = "wasm32")]
pub use dom::DomPage;
#[cfg(any(test, feature = "test-support"))]
pub use memory::MemoryPage;

/// Styling applied to an outcome message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Error,
}

impl Tone {
    /// CSS color used for the message text.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Success => "green",
            Self::Error => "red",
        }
    }
}

/// Element identifiers and classes of the page-boundary contract.
pub mod selectors {
    pub const LOGIN_LINK: &str = "#login-link";
    pub const PLACES_LIST: &str = "#places-list";
    pub const PLACE_CARD: &str = "#places-list .place-card";
    pub const PRICE_FILTER: &str = "#price-filter";
    pub const PLACE_DETAILS: &str = "#place-details";
    pub const ADD_REVIEW: &str = "#add-review";
    pub const REVIEWS: &str = "#reviews";

    pub const LOGIN_FORM: &str = ".login-form";
    pub const LOGIN_SUBMIT: &str = ".login-form [type=\"submit\"]";
    pub const LOGIN_ERROR_ID: &str = "login-error";
    pub const LOGIN_ERROR: &str = "#login-error";
    pub const EMAIL: &str = "#email";
    pub const PASSWORD: &str = "#password";

    pub const REVIEW_FORM: &str = "#review-form";
    pub const REVIEW_SUBMIT: &str = "#review-form [type=\"submit\"]";
    pub const USERNAME: &str = "#username";
    pub const RATING: &str = "#rating";
    pub const COMMENT: &str = "#comment";
    pub const MESSAGE: &str = "#message";
}

/// Operations components perform on the current document.
pub trait Page {
    /// Whether any element matches `selector`.
    fn exists(&self, selector: &str) -> bool;

    /// The raw `document.cookie` string.
    fn cookie_string(&self) -> String;

    /// Assign one `name=value; attributes` entry to `document.cookie`.
    fn write_cookie(&self, cookie: &str);

    /// Navigate the window to `href`.
    fn navigate(&self, href: &str);

    /// The query string of the current location, including the leading `?`.
    fn location_search(&self) -> String;

    /// Show or hide the first element matching `selector`.
    fn set_visible(&self, selector: &str, visible: bool);

    /// Replace the children of the first element matching `selector`.
    fn replace_html(&self, selector: &str, html: &str);

    /// Current value of the form control matching `selector`.
    fn field_value(&self, selector: &str) -> Option<String>;

    /// Reset the form matching `selector` to its initial values.
    fn reset_form(&self, selector: &str);

    /// Enable or disable every control matching `selector`.
    fn set_disabled(&self, selector: &str, disabled: bool);

    /// Set the text of the element matching `selector` and color it by tone.
    fn show_message(&self, selector: &str, text: &str, tone: Tone);

    /// Append an empty `<p id="{id}">` to the element matching `parent`,
    /// unless an element with that id already exists.
    fn append_paragraph(&self, parent: &str, id: &str, tone: Tone);

    /// `data-price` of every element matching `selector`, in document order.
    fn card_prices(&self, selector: &str) -> Vec<Option<String>>;

    /// Show or hide every element matching `selector`, in document order.
    ///
    /// Elements beyond the end of `visible` are left alone.
    fn set_cards_visible(&self, selector: &str, visible: &[bool]);
}

/// Read one parameter from a `?a=1&b=2` query string.
///
/// Returns the first occurrence, percent-decoded.
#[must_use]
pub fn query_param(search: &str, name: &str) -> Option<String> {
    url::form_urlencoded::parse(search.trim_start_matches('?').as_bytes())
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}
