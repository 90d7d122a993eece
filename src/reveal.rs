use anyhow::anyhow;
use folio_core::{Detach, RevealCard, RevealParams, Transition, CARD_CLASS, REVEALED_CLASS};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>;

/// Per-card intersection observer. Stops observing the card once revealed;
/// detaching disconnects it whether or not it ever fired.
pub struct RevealObserver {
    observer: web::IntersectionObserver,
    _callback: ObserverCallback,
}

impl Detach for RevealObserver {
    fn detach(&mut self) {
        self.observer.disconnect();
    }
}

pub fn observe(
    card: &web::Element,
    index: usize,
    params: &RevealParams,
) -> anyhow::Result<RevealObserver> {
    let mut state = RevealCard::new(index);
    _ = card.class_list().add_2(CARD_CLASS, state.slide().class());

    let el = card.clone();
    let callback: ObserverCallback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if state.on_intersection(entry.is_intersecting()) == Transition::Revealed {
                    _ = el.class_list().add_1(REVEALED_CLASS);
                    observer.unobserve(&entry.target());
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(params.threshold));
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|e| anyhow!("IntersectionObserver: {:?}", e))?;
    observer.observe(card);

    Ok(RevealObserver {
        observer,
        _callback: callback,
    })
}
