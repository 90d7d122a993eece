use anyhow::anyhow;
use folio_core::Detach;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// An event listener that stays registered until detached.
pub struct EventListener {
    target: web::EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(web::Event)>,
}

impl EventListener {
    pub fn new(
        target: &web::EventTarget,
        event: &'static str,
        mut handler: impl FnMut(&web::Event) + 'static,
    ) -> anyhow::Result<Self> {
        let callback =
            Closure::wrap(Box::new(move |ev: web::Event| handler(&ev)) as Box<dyn FnMut(_)>);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(|e| anyhow!("add {} listener: {:?}", event, e))?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Detach for EventListener {
    fn detach(&mut self) {
        if let Err(e) = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            log::warn!("remove {} listener: {:?}", self.event, e);
        }
    }
}

/// Listen for `pointermove`, handing the handler the pointer event.
pub fn on_pointer_move(
    target: &web::EventTarget,
    mut handler: impl FnMut(&web::PointerEvent) + 'static,
) -> anyhow::Result<EventListener> {
    EventListener::new(target, crate::constants::EV_POINTER_MOVE, move |ev| {
        if let Some(pe) = ev.dyn_ref::<web::PointerEvent>() {
            handler(pe);
        }
    })
}
