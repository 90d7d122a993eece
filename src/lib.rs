#![cfg(target_arch = "wasm32")]
use anyhow::anyhow;
use folio_core::{FolioConfig, Mounted};
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

mod canvas;
mod cards;
mod constants;
mod dom;
mod events;
mod frame;
mod nav;
mod reveal;
mod starfield;
mod style;
mod trail;

thread_local! {
    // Everything currently mounted on the page; dropping an entry unmounts it.
    static MOUNTED: RefCell<Vec<Mounted>> = const { RefCell::new(Vec::new()) };
}

fn mount_all(config: &FolioConfig) -> anyhow::Result<Vec<Mounted>> {
    config.validate()?;
    let (window, document) =
        dom::window_document().ok_or_else(|| anyhow!("no window or document"))?;

    // a failure part-way drops (and so unmounts) whatever already mounted
    let mut mounted = Vec::new();
    mounted.extend(starfield::mount(&window, &document, &config.starfield)?);
    mounted.extend(trail::mount(&window, &document, &config.trail)?);
    mounted.extend(cards::mount(&document, &config.reveal)?);
    mounted.extend(nav::mount(&window, &document)?);
    Ok(mounted)
}

/// Tear down every animator and listener this module registered.
#[wasm_bindgen]
pub fn unmount() {
    let parts = MOUNTED.with(|m| std::mem::take(&mut *m.borrow_mut()));
    let n = parts.len();
    drop(parts);
    if n > 0 {
        log::info!("unmounted {} components", n);
    }
}

/// (Re)start all animators with the default configuration.
#[wasm_bindgen]
pub fn mount() -> Result<(), JsValue> {
    unmount();
    let mounted = mount_all(&FolioConfig::default()).map_err(|e| {
        log::error!("mount error: {:?}", e);
        JsValue::from_str(&e.to_string())
    })?;
    log::info!(
        "mounted: {}",
        mounted.iter().map(|m| m.name()).collect::<Vec<_>>().join(", ")
    );
    MOUNTED.with(|m| *m.borrow_mut() = mounted);
    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    // already logged; keep the page usable without animations
    _ = mount();
    Ok(())
}
