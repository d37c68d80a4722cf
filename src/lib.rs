#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

mod dom;
mod toggle;
mod ui;

use toggle::Toggler;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("snippet-toggle starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
        return Err(JsValue::from_str(&format!("{e}")));
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Both handles are resolved here, once; a missing id aborts init before
    // any mutation.
    let mut toggler = Toggler::from_registry(&document)?;
    toggler.sync_label();

    let target = toggler.control().target();
    let toggler = Rc::new(RefCell::new(toggler));
    dom::on_click(&target, move || {
        let vis = toggler.borrow_mut().toggle();
        log::debug!("snippet now {:?}", vis);
    });

    Ok(())
}
