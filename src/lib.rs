#![cfg(target_arch = "wasm32")]
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod app;
mod constants;
mod dom;
mod effects;
mod entry;
mod events;
mod frame;
mod hud;
mod input;
mod viewport;

use app::{App, Page};
use roomscroll_core::NavEvent;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("roomscroll starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let page = Page::collect(window.clone(), document.clone())?;
    let app: Rc<App> = App::new(page);

    // Interaction is live straight away; only the initial state waits for load.
    events::wire_click_handlers(&app);
    events::wire_choice_keys(&app);
    events::wire_room_keys(&app);
    events::wire_resize(&app);
    events::wire_panel_observer(&app)?;

    dom::window_loaded(&window, &document).await?;
    let fragment = dom::location_hash(&window);
    log::info!("[nav] loaded with fragment {:?}", fragment);
    app.dispatch(NavEvent::PageLoaded { fragment });
    Ok(())
}
