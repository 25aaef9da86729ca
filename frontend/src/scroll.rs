use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Window};

use crate::config::SiteConfig;
use crate::debounce::Debouncer;
use crate::dom;
use crate::error::SiteError;

pub const ANIMATE_CLASS: &str = "animate-on-scroll";
pub const ANIMATED_CLASS: &str = "animated";
pub const FLOATING_CTA_ID: &str = "floatingCta";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElementBounds {
    pub top: f64,
    pub bottom: f64,
}

pub fn is_in_viewport(bounds: ElementBounds, viewport_height: f64, margin: f64) -> bool {
    bounds.top < viewport_height - margin && bounds.bottom > 0.0
}

/// Whether an element is animated after this tick. Never goes back to false.
pub fn next_animated(already: bool, bounds: ElementBounds, viewport_height: f64, margin: f64) -> bool {
    already || is_in_viewport(bounds, viewport_height, margin)
}

/// Whether this tick should add the animated class.
pub fn reveal_now(already: bool, bounds: ElementBounds, viewport_height: f64, margin: f64) -> bool {
    !already && next_animated(already, bounds, viewport_height, margin)
}

pub fn floating_cta_visible(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

pub struct ScrollObserver {
    window: Window,
    trigger_offset: f64,
    visibility_offset: f64,
}

impl ScrollObserver {
    pub fn new(config: &SiteConfig) -> Result<Self, SiteError> {
        Ok(Self {
            window: dom::window()?,
            trigger_offset: config.scroll_trigger_offset,
            visibility_offset: config.visibility_offset,
        })
    }

    /// One reveal pass plus the floating CTA update.
    pub fn tick(&self) {
        let reveal = || self.reveal_visible();
        let floating_cta = || self.update_floating_cta();
        let steps: [Step<'_>; 2] = [("reveal", &reveal), ("floating CTA", &floating_cta)];
        run_steps(&steps);
    }

    fn reveal_visible(&self) -> Result<(), SiteError> {
        let document = self.window.document().ok_or(SiteError::NoDocument)?;
        let viewport_height = self.window.inner_height()?.as_f64().unwrap_or(0.0);
        let elements = document.query_selector_all(&format!(".{}", ANIMATE_CLASS))?;

        for i in 0..elements.length() {
            let Some(element) = elements.item(i).and_then(|node| node.dyn_into::<Element>().ok()) else {
                continue;
            };
            let class_list = element.class_list();
            let already = class_list.contains(ANIMATED_CLASS);
            let rect = element.get_bounding_client_rect();
            let bounds = ElementBounds { top: rect.top(), bottom: rect.bottom() };
            if reveal_now(already, bounds, viewport_height, self.visibility_offset) {
                class_list.add_1(ANIMATED_CLASS)?;
            }
        }
        Ok(())
    }

    fn update_floating_cta(&self) -> Result<(), SiteError> {
        let document = self.window.document().ok_or(SiteError::NoDocument)?;
        let Some(cta) = document.get_element_by_id(FLOATING_CTA_ID) else {
            return Ok(());
        };
        let scroll_y = self.window.scroll_y()?;

        if floating_cta_visible(scroll_y, self.trigger_offset) {
            cta.class_list().add_1("visible")?;
            cta.set_attribute("aria-hidden", "false")?;
        } else {
            cta.class_list().remove_1("visible")?;
            cta.set_attribute("aria-hidden", "true")?;
        }
        Ok(())
    }
}

type Step<'a> = (&'a str, &'a dyn Fn() -> Result<(), SiteError>);

/// Runs every step even when an earlier one fails. Returns the failure count.
fn run_steps(steps: &[Step<'_>]) -> usize {
    let mut failures = 0;
    for (name, step) in steps {
        if let Err(e) = step() {
            warn!("Scroll {} step failed: {}", name, e);
            failures += 1;
        }
    }
    failures
}

/// Live scroll listener. Dropping it detaches the listener and cancels any
/// pending debounced tick.
pub struct ScrollBinding {
    window: Window,
    listener: Closure<dyn FnMut()>,
    _debouncer: Rc<Debouncer>,
}

pub fn bind(config: &SiteConfig) -> Result<ScrollBinding, SiteError> {
    let observer = Rc::new(ScrollObserver::new(config)?);
    // Initial check so content already in view shows without scrolling.
    observer.tick();

    let debouncer = Rc::new(Debouncer::new(config.debounce_ms, {
        let observer = Rc::clone(&observer);
        move || observer.tick()
    }));

    let listener = Closure::wrap(Box::new({
        let debouncer = Rc::clone(&debouncer);
        move || debouncer.call()
    }) as Box<dyn FnMut()>);

    let window = observer.window.clone();
    window.add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref())?;
    debug!("Scroll observer bound");

    Ok(ScrollBinding { window, listener, _debouncer: debouncer })
}

impl Drop for ScrollBinding {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("scroll", self.listener.as_ref().unchecked_ref());
    }
}
