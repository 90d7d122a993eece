use crate::canvas::CanvasSurface;
use crate::constants::{EV_RESIZE, TRAIL_CANVAS_ID};
use crate::events::{on_pointer_move, EventListener};
use crate::{dom, frame};
use folio_core::{Mounted, ParticleTrail, PointerState, TrailParams};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::Cell;
use std::rc::Rc;
use web_sys as web;

/// Mount the cursor trail on `#cursor-trail`, pinned above all content.
pub fn mount(
    window: &web::Window,
    document: &web::Document,
    params: &TrailParams,
) -> anyhow::Result<Option<Mounted>> {
    let Some(canvas) = dom::canvas_by_id(document, TRAIL_CANVAS_ID)? else {
        log::debug!("[trail] #{} not found, skipping", TRAIL_CANVAS_ID);
        return Ok(None);
    };

    dom::pin_overlay(&canvas)?;
    dom::size_canvas(&canvas, dom::viewport_size(window));
    let mut surface = CanvasSurface::new(&canvas)?;

    // written by the pointer handler, read once per frame
    let pointer = Rc::new(Cell::new(PointerState::default()));

    let resize = {
        let window_r = window.clone();
        EventListener::new(window, EV_RESIZE, move |_| {
            dom::size_canvas(&canvas, dom::viewport_size(&window_r));
        })?
    };

    let moved = {
        let pointer = pointer.clone();
        on_pointer_move(window, move |ev| {
            pointer.set(PointerState::at(ev.client_x() as f32, ev.client_y() as f32));
        })?
    };

    let mut trail = ParticleTrail::new(params.clone());
    let mut rng = StdRng::from_entropy();
    let frame_loop = frame::start_loop(window, move || {
        trail.frame(&mut rng, pointer.get(), &mut surface);
    });

    log::info!("[trail] mounted");
    Ok(Some(
        Mounted::new("trail")
            .with(resize)
            .with(moved)
            .with(frame_loop),
    ))
}
