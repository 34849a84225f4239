//! JavaScript Exports
//!
//! Functions callable from the host page. Besides the module exports, `start`
//! installs each one on `window` so inline handlers such as
//! `<a href="/products/1/delete/" onclick="return confirmDelete()">` resolve.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::browser::{on_dom_ready, BrowserPage};
use crate::components::show_delete_confirmation_modal;
use crate::confirm::{confirm_delete, confirm_delete_with_details};
use crate::cookie::get_cookie;
use crate::delete_flow::delete_with_ajax;
use crate::models::{DeleteReport, DeleteSubject, SubjectId};
use crate::page::{Page, ScheduledTask};
use crate::transport::FetchTransport;
use crate::wiring::wire_delete_triggers;

fn page() -> Option<BrowserPage> {
    BrowserPage::new()
        .map_err(|e| log::error!("{}", e))
        .ok()
}

/// Numbers and strings from JS; anything else is stringified
fn subject_id(value: JsValue) -> SubjectId {
    match serde_wasm_bindgen::from_value::<SubjectId>(value.clone()) {
        Ok(id) => id,
        Err(_) => SubjectId::Text(
            value
                .as_f64()
                .map(|n| n.to_string())
                .or_else(|| value.as_string())
                .unwrap_or_else(|| format!("{:?}", value)),
        ),
    }
}

/// Entry points published as `window` globals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryPoint {
    ConfirmDelete,
    ConfirmDeleteWithDetails,
    ShowDeleteConfirmationModal,
    HandleDeleteWithAjax,
    GetCookie,
    WireDeleteTriggers,
    RecentDeleteLogs,
}

impl EntryPoint {
    const ALL: [EntryPoint; 7] = [
        EntryPoint::ConfirmDelete,
        EntryPoint::ConfirmDeleteWithDetails,
        EntryPoint::ShowDeleteConfirmationModal,
        EntryPoint::HandleDeleteWithAjax,
        EntryPoint::GetCookie,
        EntryPoint::WireDeleteTriggers,
        EntryPoint::RecentDeleteLogs,
    ];

    /// Same name as the module export
    fn js_name(self) -> &'static str {
        match self {
            EntryPoint::ConfirmDelete => "confirmDelete",
            EntryPoint::ConfirmDeleteWithDetails => "confirmDeleteWithDetails",
            EntryPoint::ShowDeleteConfirmationModal => "showDeleteConfirmationModal",
            EntryPoint::HandleDeleteWithAjax => "handleDeleteWithAjax",
            EntryPoint::GetCookie => "getCookie",
            EntryPoint::WireDeleteTriggers => "wireDeleteTriggers",
            EntryPoint::RecentDeleteLogs => "recentDeleteLogs",
        }
    }

    /// JS function forwarding to the export. Leaked on purpose, globals live as long as the page.
    fn to_js(self) -> JsValue {
        match self {
            EntryPoint::ConfirmDelete => {
                Closure::<dyn Fn() -> bool>::new(confirm_delete_js).into_js_value()
            }
            EntryPoint::ConfirmDeleteWithDetails => {
                Closure::<dyn Fn(JsValue, JsValue) -> bool>::new(|name: JsValue, id: JsValue| {
                    confirm_delete_with_details_js(js_string(&name), id)
                })
                .into_js_value()
            }
            EntryPoint::ShowDeleteConfirmationModal => {
                Closure::<dyn Fn(JsValue, JsValue, JsValue)>::new(
                    |name: JsValue, id: JsValue, callback: JsValue| {
                        let callback = callback.dyn_into::<js_sys::Function>().ok();
                        if let Err(e) = show_delete_confirmation_modal_js(js_string(&name), id, callback) {
                            log::error!("could not show delete modal: {:?}", e);
                        }
                    },
                )
                .into_js_value()
            }
            EntryPoint::HandleDeleteWithAjax => {
                Closure::<dyn Fn(JsValue, JsValue) -> js_sys::Promise>::new(
                    |id: JsValue, endpoint: JsValue| {
                        wasm_bindgen_futures::future_to_promise(handle_delete_with_ajax_js(
                            id,
                            endpoint.as_string(),
                        ))
                    },
                )
                .into_js_value()
            }
            EntryPoint::GetCookie => Closure::<dyn Fn(JsValue) -> String>::new(|name: JsValue| {
                get_cookie_js(&js_string(&name))
            })
            .into_js_value(),
            EntryPoint::WireDeleteTriggers => {
                Closure::<dyn Fn() -> usize>::new(wire_delete_triggers_js).into_js_value()
            }
            EntryPoint::RecentDeleteLogs => {
                Closure::<dyn Fn() -> js_sys::Array>::new(recent_delete_logs_js).into_js_value()
            }
        }
    }
}

fn js_string(value: &JsValue) -> String {
    value.as_string().unwrap_or_default()
}

/// Hand every entry point to `publish`, in a fixed order
fn install_entry_points(mut publish: impl FnMut(&'static str, EntryPoint)) {
    for entry in EntryPoint::ALL {
        publish(entry.js_name(), entry);
    }
}

fn install_globals(window: &web_sys::Window) {
    install_entry_points(|name, entry| {
        if let Err(e) = js_sys::Reflect::set(window, &JsValue::from_str(name), &entry.to_js()) {
            log::error!("could not install window.{}: {:?}", name, e);
        }
    });
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    // Logger first, so config problems are reported
    if let Err(e) = console_logger::init(log::LevelFilter::Info) {
        web_sys::console::warn_1(&format!("[delete-confirm] logger already set: {}", e).into());
    }

    let Some(window) = web_sys::window() else {
        log::error!("{}", crate::error::PageError::NoWindow);
        return;
    };
    install_globals(&window);

    let Some(page) = page() else {
        return;
    };
    let config = page.load_config();
    console_logger::set_level(config.level_filter());

    let document = page.document().clone();
    on_dom_ready(&document, move || {
        wire_delete_triggers(&page, &config.trigger_selector);
    });
}

#[wasm_bindgen(js_name = confirmDelete)]
pub fn confirm_delete_js() -> bool {
    page().map(|page| confirm_delete(&page)).unwrap_or(false)
}

#[wasm_bindgen(js_name = confirmDeleteWithDetails)]
pub fn confirm_delete_with_details_js(product_name: String, product_id: JsValue) -> bool {
    let subject = DeleteSubject::new(product_name, subject_id(product_id));
    page()
        .map(|page| confirm_delete_with_details(&page, &subject))
        .unwrap_or(false)
}

#[wasm_bindgen(js_name = showDeleteConfirmationModal)]
pub fn show_delete_confirmation_modal_js(
    product_name: String,
    product_id: JsValue,
    callback: Option<js_sys::Function>,
) -> Result<(), JsValue> {
    let subject = DeleteSubject::new(product_name, subject_id(product_id));
    show_delete_confirmation_modal(subject, move || {
        if let Some(callback) = callback {
            if let Err(e) = callback.call0(&JsValue::NULL) {
                log::error!("delete modal callback threw: {:?}", e);
            }
        }
    })
    .map(|_session| ())
    .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Resolves with `{ outcome, status?, message? }`
#[wasm_bindgen(js_name = handleDeleteWithAjax)]
pub async fn handle_delete_with_ajax_js(
    product_id: JsValue,
    endpoint: Option<String>,
) -> Result<JsValue, JsValue> {
    let page = BrowserPage::new().map_err(|e| JsValue::from_str(&e.to_string()))?;
    let config = page.load_config();
    let id = subject_id(product_id);

    let result = delete_with_ajax(&page, &FetchTransport, &config, &id, endpoint.as_deref()).await;
    let report = DeleteReport::from(&result);
    if let Ok(redirect) = result {
        redirect.detach();
    }
    serde_wasm_bindgen::to_value(&report).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen(js_name = getCookie)]
pub fn get_cookie_js(name: &str) -> String {
    page()
        .map(|page| get_cookie(&page.cookies(), name))
        .unwrap_or_default()
}

/// Guard triggers again, for pages that re-render without a reload.
/// Already guarded elements get a second guard.
#[wasm_bindgen(js_name = wireDeleteTriggers)]
pub fn wire_delete_triggers_js() -> usize {
    page()
        .map(|page| {
            let config = page.load_config();
            wire_delete_triggers(&page, &config.trigger_selector)
        })
        .unwrap_or(0)
}

/// Recent log lines, oldest first
#[wasm_bindgen(js_name = recentDeleteLogs)]
pub fn recent_delete_logs_js() -> js_sys::Array {
    console_logger::recent()
        .into_iter()
        .map(JsValue::from)
        .collect()
}
