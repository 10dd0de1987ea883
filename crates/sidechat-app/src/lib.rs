//! Sidechat plugin — WASM entry point.
//!
//! Composition root for the host plugin contract: `plugin_init` installs
//! the sidebar button and the popup canvas into the host document and
//! starts the egui runner; `plugin_unmount` removes every element the
//! plugin created. The host owns registration and calls these two
//! exports; nothing else crosses that boundary.

mod app;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use sidechat_core::event_bus::EventBus;
use sidechat_types::event::ChatEvent;

const SIDEBUTTON_ID: &str = "sidechat-sidebutton";
const CANVAS_ID: &str = "sidechat-canvas";

const SIDEBUTTON_STYLE: &str = "background:#007bff;color:#fff;border:none;\
    border-radius:8px;padding:8px 12px;cursor:pointer;";
const CANVAS_STYLE: &str = "position:fixed;top:40%;left:50%;\
    transform:translate(-50%,-50%);width:340px;height:460px;z-index:9999;";

/// Install the plugin into the host document and start the popup runner.
#[wasm_bindgen]
pub async fn plugin_init() -> Result<(), JsValue> {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("sidechat plugin starting...");

    let document = web_sys::window()
        .ok_or_else(|| JsValue::from_str("no window"))?
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    // A previous instance may not have been unmounted cleanly
    remove_by_id(&document, SIDEBUTTON_ID);
    remove_by_id(&document, CANVAS_ID);

    let event_bus = EventBus::new();

    install_side_button(&document, event_bus.clone())?;
    let canvas = install_canvas(&document)?;

    let web_options = eframe::WebOptions::default();
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(e) = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(move |cc| Ok(Box::new(app::SidechatApp::new(cc, event_bus)))),
            )
            .await
        {
            log::error!("failed to start popup runner: {:?}", e);
        }
    });

    Ok(())
}

/// Remove every element the plugin created, by id.
#[wasm_bindgen]
pub fn plugin_unmount() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    remove_by_id(&document, SIDEBUTTON_ID);
    remove_by_id(&document, CANVAS_ID);
    log::info!("sidechat plugin unmounted");
}

fn remove_by_id(document: &web_sys::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        el.remove();
    }
}

/// Sidebar button — clicking it emits a popup-show request into the bus.
fn install_side_button(document: &web_sys::Document, bus: EventBus) -> Result<(), JsValue> {
    let button = document
        .create_element("button")?
        .dyn_into::<web_sys::HtmlElement>()?;
    button.set_id(SIDEBUTTON_ID);
    button.set_inner_text("Chat Gemini");
    button.set_attribute("style", SIDEBUTTON_STYLE)?;

    let onclick = Closure::<dyn FnMut()>::new(move || {
        bus.emit(ChatEvent::PopupRequested);
    });
    button.set_onclick(Some(onclick.as_ref().unchecked_ref()));
    onclick.forget();

    document
        .body()
        .ok_or_else(|| JsValue::from_str("no body"))?
        .append_child(&button)?;
    Ok(())
}

/// Canvas the egui popup renders into.
fn install_canvas(document: &web_sys::Document) -> Result<web_sys::HtmlCanvasElement, JsValue> {
    let canvas = document
        .create_element("canvas")?
        .dyn_into::<web_sys::HtmlCanvasElement>()?;
    canvas.set_id(CANVAS_ID);
    canvas.set_attribute("style", CANVAS_STYLE)?;
    document
        .body()
        .ok_or_else(|| JsValue::from_str("no body"))?
        .append_child(&canvas)?;
    Ok(canvas)
}
