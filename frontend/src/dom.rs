use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, Event, FocusOptions, HtmlElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement, Storage, Window,
};

use crate::error::SiteError;

pub fn window() -> Result<Window, SiteError> {
    web_sys::window().ok_or(SiteError::NoWindow)
}

pub fn document() -> Result<Document, SiteError> {
    window()?.document().ok_or(SiteError::NoDocument)
}

pub fn local_storage() -> Result<Storage, SiteError> {
    window()?.local_storage()?.ok_or(SiteError::NoStorage)
}

/// Value of an input, select or textarea; `None` for anything else.
pub fn control_value(control: &JsValue) -> Option<String> {
    if let Some(input) = control.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    if let Some(select) = control.dyn_ref::<HtmlSelectElement>() {
        return Some(select.value());
    }
    control.dyn_ref::<HtmlTextAreaElement>().map(|area| area.value())
}

pub fn event_value(e: &Event) -> Option<String> {
    control_value(e.target()?.as_ref())
}

/// Moves keyboard focus to `element`. Elements that cannot take focus on
/// their own get `tabindex="-1"` first.
pub fn focus(element: &Element, prevent_scroll: bool) -> Result<(), SiteError> {
    let Some(html) = element.dyn_ref::<HtmlElement>() else {
        return Ok(());
    };
    if !element.has_attribute("tabindex") && html.tab_index() < 0 {
        element.set_attribute("tabindex", "-1")?;
    }
    if prevent_scroll {
        let options = FocusOptions::new();
        options.set_prevent_scroll(true);
        html.focus_with_options(&options)?;
    } else {
        html.focus()?;
    }
    Ok(())
}
