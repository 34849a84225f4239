//! Browser Page
//!
//! `Page` implementation over the real window and document.

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::config::{DeleteConfig, CONFIG_ELEMENT_ID};
use crate::error::PageError;
use crate::page::{Page, ScheduledTask, StatusIndicator, StatusTone};

#[derive(Clone)]
pub struct BrowserPage {
    window: web_sys::Window,
    document: web_sys::Document,
}

impl BrowserPage {
    pub fn new() -> Result<Self, PageError> {
        let window = web_sys::window().ok_or(PageError::NoWindow)?;
        let document = window.document().ok_or(PageError::NoDocument)?;
        Ok(Self { window, document })
    }

    pub fn document(&self) -> &web_sys::Document {
        &self.document
    }

    /// Settings from the page's JSON script element, defaults otherwise
    pub fn load_config(&self) -> DeleteConfig {
        let json = self
            .document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content());
        DeleteConfig::from_page_json(json.as_deref())
    }
}

/// Bootstrap alert `<div>` appended to the body
pub struct BrowserStatus {
    element: Option<web_sys::Element>,
}

impl StatusIndicator for BrowserStatus {
    fn update(&self, tone: StatusTone, text: &str) {
        if let Some(element) = &self.element {
            element.set_class_name(tone.class_name());
            element.set_text_content(Some(text));
        }
    }
}

/// Pending `setTimeout`; cancelled if dropped without `detach`
pub struct BrowserTimer(Timeout);

impl ScheduledTask for BrowserTimer {
    fn cancel(self) {
        let _ = self.0.cancel();
    }

    fn detach(self) {
        let _ = self.0.forget();
    }
}

impl Page for BrowserPage {
    type Status = BrowserStatus;
    type Timer = BrowserTimer;
    type Trigger = web_sys::Element;

    fn confirm(&self, message: &str) -> bool {
        self.window.confirm_with_message(message).unwrap_or(false)
    }

    fn alert(&self, message: &str) {
        if let Err(e) = self.window.alert_with_message(message) {
            log::error!("alert failed: {:?}", e);
        }
    }

    fn cookies(&self) -> String {
        self.document
            .dyn_ref::<web_sys::HtmlDocument>()
            .and_then(|doc| doc.cookie().ok())
            .unwrap_or_default()
    }

    fn insert_status(&self, tone: StatusTone, text: &str) -> BrowserStatus {
        let element = match self.document.create_element("div") {
            Ok(element) => element,
            Err(e) => {
                log::error!("could not create status element: {:?}", e);
                return BrowserStatus { element: None };
            }
        };
        element.set_class_name(tone.class_name());
        element.set_text_content(Some(text));
        match self.document.body() {
            Some(body) => {
                if let Err(e) = body.append_child(&element) {
                    log::error!("could not insert status element: {:?}", e);
                }
            }
            None => log::warn!("document has no body, status not shown"),
        }
        BrowserStatus { element: Some(element) }
    }

    fn navigate(&self, url: &str) {
        if let Err(e) = self.window.location().set_href(url) {
            log::error!("navigation to {} failed: {:?}", url, e);
        }
    }

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> BrowserTimer {
        BrowserTimer(Timeout::new(delay_ms, task))
    }

    fn triggers(&self, selector: &str) -> Vec<web_sys::Element> {
        let nodes = match self.document.query_selector_all(selector) {
            Ok(nodes) => nodes,
            Err(e) => {
                log::error!("invalid trigger selector `{}`: {:?}", selector, e);
                return Vec::new();
            }
        };
        (0..nodes.length())
            .filter_map(|i| nodes.get(i))
            .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
            .collect()
    }

    fn guard(&self, trigger: &web_sys::Element, guard: Box<dyn Fn() -> bool>) {
        let on_click = Closure::<dyn FnMut(web_sys::Event)>::new(move |ev: web_sys::Event| {
            if !guard() {
                ev.prevent_default();
            }
        });
        if let Err(e) = trigger.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref()) {
            log::error!("could not guard trigger: {:?}", e);
        }
        // Lives as long as the page
        on_click.forget();
    }
}

/// Run `task` once the DOM is parsed, right away if that already happened
pub fn on_dom_ready(document: &web_sys::Document, task: impl FnOnce() + 'static) {
    if document.ready_state() != "loading" {
        task();
        return;
    }
    let callback = Closure::once_into_js(task);
    if let Err(e) = document.add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref()) {
        log::error!("could not wait for DOMContentLoaded: {:?}", e);
    }
}
