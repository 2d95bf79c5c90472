//! Client-side price filter over the rendered cards.

use hbnb_core::{Price, PriceFilter};

use crate::page::{Page, selectors};
use crate::state::PageContext;

/// The filter currently selected in `#price-filter`.
///
/// A missing control selects everything, and so does a value that is
/// neither `all` nor a price.
pub fn selected<P: Page, A>(ctx: &PageContext<P, A>) -> PriceFilter {
    let Some(raw) = ctx.page().field_value(selectors::PRICE_FILTER) else {
        return PriceFilter::All;
    };

    raw.parse().unwrap_or_else(|err| {
        tracing::warn!(value = %raw, error = %err, "Unreadable price filter, showing all");
        PriceFilter::All
    })
}

/// Show the cards the selected filter admits and hide the rest.
///
/// A card whose `data-price` cannot be read is shown only for `all`.
/// Returns the number of cards left visible.
pub fn apply<P: Page, A>(ctx: &PageContext<P, A>) -> usize {
    let filter = selected(ctx);
    let page = ctx.page();

    let visible: Vec<bool> = page
        .card_prices(selectors::PLACE_CARD)
        .iter()
        .map(|raw| filter.admits(raw.as_deref().and_then(|p| p.parse::<Price>().ok())))
        .collect();

    page.set_cards_visible(selectors::PLACE_CARD, &visible);
    visible.iter().filter(|shown| **shown).count()
}
