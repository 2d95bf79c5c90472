//! In-memory [`Page`] for tests.
//!
//! Elements are registered under the exact selector the components use.
//! Rendered markup is kept as a string and inspected with `scraper`, so card
//! queries see exactly what the templates produced.

use std::cell::RefCell;
use std::collections::BTreeMap;

use scraper::{Html, Selector};

use super::{Page, Tone};

/// Observable state of one registered element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementState {
    pub html: String,
    pub text: String,
    pub visible: Option<bool>,
    pub value: Option<String>,
    pub tone: Option<Tone>,
    pub disabled_history: Vec<bool>,
    pub resets: usize,
}

#[derive(Debug, Default)]
struct MemoryPageInner {
    elements: BTreeMap<String, ElementState>,
    cookie_jar: BTreeMap<String, String>,
    cookie_writes: Vec<String>,
    search: String,
    navigations: Vec<String>,
    card_visibility: BTreeMap<(String, usize), bool>,
}

/// A page held entirely in memory.
#[derive(Debug, Default)]
pub struct MemoryPage {
    inner: RefCell<MemoryPageInner>,
}

impl MemoryPage {
    /// Create an empty page: no elements, no cookies, no query string.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an element under `selector`.
    #[must_use]
    pub fn with_element(self, selector: &str) -> Self {
        self.inner
            .borrow_mut()
            .elements
            .entry(selector.to_string())
            .or_default();
        self
    }

    /// Register a form control under `selector` holding `value`.
    #[must_use]
    pub fn with_field(self, selector: &str, value: &str) -> Self {
        self.set_field(selector, value);
        self
    }

    /// Seed the cookie jar as if `document.cookie = cookie` had run.
    #[must_use]
    pub fn with_cookie(self, cookie: &str) -> Self {
        store_cookie(&mut self.inner.borrow_mut().cookie_jar, cookie);
        self
    }

    /// Set the query string of the current location.
    #[must_use]
    pub fn with_search(self, search: &str) -> Self {
        self.inner.borrow_mut().search = search.to_string();
        self
    }

    /// Change the value of a form control, registering it if needed.
    pub fn set_field(&self, selector: &str, value: &str) {
        self.inner
            .borrow_mut()
            .elements
            .entry(selector.to_string())
            .or_default()
            .value = Some(value.to_string());
    }

    /// Snapshot of the element registered under `selector`.
    #[must_use]
    pub fn element(&self, selector: &str) -> Option<ElementState> {
        self.inner.borrow().elements.get(selector).cloned()
    }

    /// Inner HTML of `selector`, empty when unregistered.
    #[must_use]
    pub fn html(&self, selector: &str) -> String {
        self.element(selector).map(|e| e.html).unwrap_or_default()
    }

    /// Text content of `selector`, empty when unregistered.
    #[must_use]
    pub fn text(&self, selector: &str) -> String {
        self.element(selector).map(|e| e.text).unwrap_or_default()
    }

    /// Visibility last assigned to `selector`, if any.
    #[must_use]
    pub fn visible(&self, selector: &str) -> Option<bool> {
        self.element(selector).and_then(|e| e.visible)
    }

    /// Tone last assigned to `selector`, if any.
    #[must_use]
    pub fn tone(&self, selector: &str) -> Option<Tone> {
        self.element(selector).and_then(|e| e.tone)
    }

    /// Every `href` navigated to, in order.
    #[must_use]
    pub fn navigations(&self) -> Vec<String> {
        self.inner.borrow().navigations.clone()
    }

    /// Every raw string assigned to `document.cookie`, in order.
    #[must_use]
    pub fn cookie_writes(&self) -> Vec<String> {
        self.inner.borrow().cookie_writes.clone()
    }

    /// Visibility of each card matching `selector`; cards never touched by
    /// a visibility pass count as visible.
    #[must_use]
    pub fn card_visibility(&self, selector: &str) -> Vec<bool> {
        let count = self.card_prices(selector).len();
        let inner = self.inner.borrow();
        (0..count)
            .map(|index| {
                inner
                    .card_visibility
                    .get(&(selector.to_string(), index))
                    .copied()
                    .unwrap_or(true)
            })
            .collect()
    }

    fn update(&self, selector: &str, f: impl FnOnce(&mut ElementState)) {
        if let Some(element) = self.inner.borrow_mut().elements.get_mut(selector) {
            f(element);
        }
    }
}

/// Store one `name=value; attr...` assignment the way a browser jar would.
fn store_cookie(jar: &mut BTreeMap<String, String>, cookie: &str) {
    let pair = cookie.split(';').next().unwrap_or_default();
    if let Some((name, value)) = pair.split_once('=') {
        jar.insert(name.trim().to_string(), value.trim().to_string());
    }
}

/// Split `"#container .card"` into the container and the card selector.
fn split_descendant(selector: &str) -> Option<(&str, &str)> {
    selector
        .split_once(' ')
        .map(|(container, cards)| (container.trim(), cards.trim()))
}

impl Page for MemoryPage {
    fn exists(&self, selector: &str) -> bool {
        self.inner.borrow().elements.contains_key(selector)
    }

    fn cookie_string(&self) -> String {
        self.inner
            .borrow()
            .cookie_jar
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join("; ")
    }

    fn write_cookie(&self, cookie: &str) {
        let mut inner = self.inner.borrow_mut();
        inner.cookie_writes.push(cookie.to_string());
        store_cookie(&mut inner.cookie_jar, cookie);
    }

    fn navigate(&self, href: &str) {
        self.inner.borrow_mut().navigations.push(href.to_string());
    }

    fn location_search(&self) -> String {
        self.inner.borrow().search.clone()
    }

    fn set_visible(&self, selector: &str, visible: bool) {
        self.update(selector, |element| element.visible = Some(visible));
    }

    fn replace_html(&self, selector: &str, html: &str) {
        if !self.exists(selector) {
            return;
        }
        self.update(selector, |element| element.html = html.to_string());
        self.inner
            .borrow_mut()
            .card_visibility
            .retain(|(cards, _), _| split_descendant(cards).is_none_or(|(c, _)| c != selector));
    }

    fn field_value(&self, selector: &str) -> Option<String> {
        self.element(selector).and_then(|e| e.value)
    }

    fn reset_form(&self, selector: &str) {
        self.update(selector, |element| element.resets += 1);
    }

    fn set_disabled(&self, selector: &str, disabled: bool) {
        self.update(selector, |element| element.disabled_history.push(disabled));
    }

    fn show_message(&self, selector: &str, text: &str, tone: Tone) {
        self.update(selector, |element| {
            element.text = text.to_string();
            element.tone = Some(tone);
        });
    }

    fn append_paragraph(&self, parent: &str, id: &str, tone: Tone) {
        let selector = format!("#{id}");
        if self.exists(&selector) || !self.exists(parent) {
            return;
        }
        self.inner.borrow_mut().elements.insert(
            selector,
            ElementState {
                tone: Some(tone),
                ..ElementState::default()
            },
        );
    }

    fn card_prices(&self, selector: &str) -> Vec<Option<String>> {
        let Some((container, cards)) = split_descendant(selector) else {
            return Vec::new();
        };
        let Ok(cards) = Selector::parse(cards) else {
            return Vec::new();
        };

        let fragment = Html::parse_fragment(&self.html(container));
        fragment
            .select(&cards)
            .map(|card| card.value().attr("data-price").map(str::to_string))
            .collect()
    }

    fn set_cards_visible(&self, selector: &str, visible: &[bool]) {
        let count = self.card_prices(selector).len();
        let mut inner = self.inner.borrow_mut();
        for (index, visible) in visible.iter().take(count).enumerate() {
            inner
                .card_visibility
                .insert((selector.to_string(), index), *visible);
        }
    }
}
