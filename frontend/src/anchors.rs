use std::borrow::Cow;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, MouseEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

use crate::dom;
use crate::error::SiteError;

const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

#[derive(Debug, PartialEq)]
pub enum Fragment<'a> {
    /// `#` alone.
    Bare,
    /// `#id`, percent-decoded.
    Id(Cow<'a, str>),
    /// Anything else; the browser handles it.
    External,
}

pub fn parse_fragment(href: &str) -> Fragment<'_> {
    let Some(raw) = href.strip_prefix('#') else {
        return Fragment::External;
    };
    if raw.is_empty() {
        return Fragment::Bare;
    }
    match urlencoding::decode(raw) {
        Ok(id) => Fragment::Id(id),
        Err(_) => Fragment::Id(Cow::Borrowed(raw)),
    }
}

fn scroll_to(target: &Element) -> Result<(), SiteError> {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
    dom::focus(target, true)
}

fn handle_click(document: &Document, e: &MouseEvent) -> Result<(), SiteError> {
    let Some(origin) = e.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
        return Ok(());
    };
    let Some(anchor) = origin.closest(ANCHOR_SELECTOR)? else {
        return Ok(());
    };
    let href = anchor.get_attribute("href").unwrap_or_default();

    match parse_fragment(&href) {
        Fragment::Bare => e.prevent_default(),
        Fragment::Id(id) => {
            if let Some(target) = document.get_element_by_id(&id) {
                e.prevent_default();
                debug!("Smooth scrolling to #{}", id);
                scroll_to(&target)?;
            }
        }
        Fragment::External => {}
    }
    Ok(())
}

/// Document-wide click delegation for in-page anchors. Covers links added
/// after binding too.
pub struct AnchorBinding {
    document: Document,
    listener: Closure<dyn FnMut(MouseEvent)>,
}

pub fn bind() -> Result<AnchorBinding, SiteError> {
    let document = dom::document()?;
    let listener = Closure::wrap(Box::new({
        let document = document.clone();
        move |e: MouseEvent| {
            if let Err(err) = handle_click(&document, &e) {
                warn!("Anchor navigation failed: {}", err);
            }
        }
    }) as Box<dyn FnMut(MouseEvent)>);

    document.add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())?;
    Ok(AnchorBinding { document, listener })
}

impl Drop for AnchorBinding {
    fn drop(&mut self) {
        let _ = self
            .document
            .remove_event_listener_with_callback("click", self.listener.as_ref().unchecked_ref());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_hash() {
        assert_eq!(parse_fragment("#"), Fragment::Bare);
    }

    #[test]
    fn plain_id() {
        assert_eq!(parse_fragment("#faq"), Fragment::Id(Cow::Borrowed("faq")));
    }

    #[test]
    fn percent_encoded_id_is_decoded() {
        assert_eq!(parse_fragment("#caf%C3%A9"), Fragment::Id(Cow::Owned("café".to_string())));
    }

    #[test]
    fn invalid_utf8_escape_keeps_raw_id() {
        assert_eq!(parse_fragment("#bad%FF"), Fragment::Id(Cow::Borrowed("bad%FF")));
    }

    #[test]
    fn other_links_are_left_alone() {
        assert_eq!(parse_fragment("/page#x"), Fragment::External);
        assert_eq!(parse_fragment("https://example.com/#top"), Fragment::External);
        assert_eq!(parse_fragment(""), Fragment::External);
    }
}
