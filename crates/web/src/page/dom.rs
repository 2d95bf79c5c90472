//! [`Page`] over the live browser document.

use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlDocument, HtmlElement, HtmlFormElement, HtmlInputElement,
    HtmlSelectElement, HtmlTextAreaElement, Window,
};

use super::{Page, Tone};

/// The document of the current window.
#[derive(Clone)]
pub struct DomPage {
    window: Window,
    document: Document,
}

impl DomPage {
    /// Attach to the current window, if there is one.
    #[must_use]
    pub fn current() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }

    pub(crate) fn element(&self, selector: &str) -> Option<Element> {
        self.document.query_selector(selector).ok().flatten()
    }

    fn html_element(&self, selector: &str) -> Option<HtmlElement> {
        self.element(selector)
            .and_then(|element| element.dyn_into::<HtmlElement>().ok())
    }

    fn elements(&self, selector: &str) -> Vec<Element> {
        let Ok(nodes) = self.document.query_selector_all(selector) else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }
}

fn set_display(element: &HtmlElement, visible: bool) {
    let display = if visible { "block" } else { "none" };
    if let Err(err) = element.style().set_property("display", display) {
        tracing::debug!(?err, "Failed to set display");
    }
}

impl Page for DomPage {
    fn exists(&self, selector: &str) -> bool {
        self.element(selector).is_some()
    }

    fn cookie_string(&self) -> String {
        self.document
            .dyn_ref::<HtmlDocument>()
            .and_then(|document| document.cookie().ok())
            .unwrap_or_default()
    }

    fn write_cookie(&self, cookie: &str) {
        if let Some(document) = self.document.dyn_ref::<HtmlDocument>()
            && let Err(err) = document.set_cookie(cookie)
        {
            tracing::error!(?err, "Failed to write cookie");
        }
    }

    fn navigate(&self, href: &str) {
        if let Err(err) = self.window.location().set_href(href) {
            tracing::error!(?err, href, "Failed to navigate");
        }
    }

    fn location_search(&self) -> String {
        self.window.location().search().unwrap_or_default()
    }

    fn set_visible(&self, selector: &str, visible: bool) {
        if let Some(element) = self.html_element(selector) {
            set_display(&element, visible);
        }
    }

    fn replace_html(&self, selector: &str, html: &str) {
        if let Some(element) = self.element(selector) {
            element.set_inner_html(html);
        }
    }

    fn field_value(&self, selector: &str) -> Option<String> {
        let element = self.element(selector)?;
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            return Some(input.value());
        }
        if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
            return Some(select.value());
        }
        element
            .dyn_ref::<HtmlTextAreaElement>()
            .map(HtmlTextAreaElement::value)
    }

    fn reset_form(&self, selector: &str) {
        if let Some(form) = self
            .element(selector)
            .and_then(|element| element.dyn_into::<HtmlFormElement>().ok())
        {
            form.reset();
        }
    }

    fn set_disabled(&self, selector: &str, disabled: bool) {
        for element in self.elements(selector) {
            let result = if disabled {
                element.set_attribute("disabled", "")
            } else {
                element.remove_attribute("disabled")
            };
            if let Err(err) = result {
                tracing::debug!(?err, selector, "Failed to toggle disabled");
            }
        }
    }

    fn show_message(&self, selector: &str, text: &str, tone: Tone) {
        if let Some(element) = self.html_element(selector) {
            element.set_text_content(Some(text));
            if let Err(err) = element.style().set_property("color", tone.color()) {
                tracing::debug!(?err, "Failed to set message color");
            }
        }
    }

    fn append_paragraph(&self, parent: &str, id: &str, tone: Tone) {
        if self.document.get_element_by_id(id).is_some() {
            return;
        }
        let Some(parent) = self.element(parent) else {
            return;
        };
        let Some(paragraph) = self
            .document
            .create_element("p")
            .ok()
            .and_then(|element| element.dyn_into::<HtmlElement>().ok())
        else {
            return;
        };

        paragraph.set_id(id);
        if let Err(err) = paragraph.style().set_property("color", tone.color()) {
            tracing::debug!(?err, "Failed to set paragraph color");
        }
        if let Err(err) = parent.append_child(&paragraph) {
            tracing::error!(?err, id, "Failed to append paragraph");
        }
    }

    fn card_prices(&self, selector: &str) -> Vec<Option<String>> {
        self.elements(selector)
            .iter()
            .map(|card| card.get_attribute("data-price"))
            .collect()
    }

    fn set_cards_visible(&self, selector: &str, visible: &[bool]) {
        let cards = self
            .elements(selector)
            .into_iter()
            .filter_map(|element| element.dyn_into::<HtmlElement>().ok());
        for (card, visible) in cards.zip(visible) {
            set_display(&card, *visible);
        }
    }
}
