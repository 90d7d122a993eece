use crate::constants::{EV_CLICK, EV_RESIZE, MENU_BUTTON_SELECTOR, MOBILE_MENU_SELECTOR};
use crate::dom;
use crate::events::EventListener;
use folio_core::{MenuState, Mounted, MENU_OPEN_CLASS};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
fn apply(menu: &web::Element, state: MenuState) {
    _ = menu
        .class_list()
        .toggle_with_force(MENU_OPEN_CLASS, state.is_open());
}

/// Wire the mobile menu: the button toggles it, its links close it, and
/// widening the viewport past the breakpoint closes it.
pub fn mount(window: &web::Window, document: &web::Document) -> anyhow::Result<Option<Mounted>> {
    let (Some(button), Some(menu)) = (
        dom::query(document, MENU_BUTTON_SELECTOR)?,
        dom::query(document, MOBILE_MENU_SELECTOR)?,
    ) else {
        log::debug!("[nav] menu markup not found, skipping");
        return Ok(None);
    };
    let state = Rc::new(Cell::new(MenuState::default()));
    apply(&menu, state.get());

    let toggle = {
        let (state, menu) = (state.clone(), menu.clone());
        EventListener::new(&button, EV_CLICK, move |_| {
            let mut s = state.get();
            s.toggle();
            state.set(s);
            apply(&menu, s);
        })?
    };

    let follow_link = {
        let (state, menu_el) = (state.clone(), menu.clone());
        EventListener::new(&menu, EV_CLICK, move |ev| {
            let on_link = ev
                .target()
                .and_then(|t| t.dyn_into::<web::Element>().ok())
                .and_then(|el| el.closest("a").ok().flatten())
                .is_some();
            let mut s = state.get();
            if on_link && s.close() {
                state.set(s);
                apply(&menu_el, s);
            }
        })?
    };

    let resize = {
        let window_r = window.clone();
        EventListener::new(window, EV_RESIZE, move |_| {
            let mut s = state.get();
            if s.on_resize(dom::viewport_size(&window_r).width) {
                state.set(s);
                apply(&menu, s);
            }
        })?
    };

    Ok(Some(
        Mounted::new("nav")
            .with(toggle)
            .with(follow_link)
            .with(resize),
    ))
}
