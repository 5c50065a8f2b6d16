//! Footer year stamp.

#[cfg(test)]
#[path = "footer_test.rs"]
mod footer_test;

use crate::consts::YEAR_ELEMENT_ID;
use crate::dom::Dom;

/// Write `year` into the `#year` element. Returns `false` when the page has
/// no such element.
pub fn stamp_year<D: Dom>(dom: &D, year: u32) -> bool {
    let Some(el) = dom.element_by_id(YEAR_ELEMENT_ID) else {
        return false;
    };
    dom.set_text(&el, &year.to_string());
    true
}
