use crate::canvas::CanvasSurface;
use crate::constants::{EV_RESIZE, MOUSE_X_VAR, MOUSE_Y_VAR, STARFIELD_CANVAS_ID};
use crate::events::{on_pointer_move, EventListener};
use crate::{dom, frame, style};
use folio_core::{Mounted, Starfield, StarfieldParams};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Mount the background starfield on `#stars`.
///
/// Besides animating the stars, pointer movement is published as normalized
/// parallax offsets on the root element for CSS to consume.
pub fn mount(
    window: &web::Window,
    document: &web::Document,
    params: &StarfieldParams,
) -> anyhow::Result<Option<Mounted>> {
    let Some(canvas) = dom::canvas_by_id(document, STARFIELD_CANVAS_ID)? else {
        log::debug!("[starfield] #{} not found, skipping", STARFIELD_CANVAS_ID);
        return Ok(None);
    };

    let viewport = dom::viewport_size(window);
    dom::size_canvas(&canvas, viewport);
    let mut surface = CanvasSurface::new(&canvas)?;
    let field = Rc::new(RefCell::new(Starfield::new(
        viewport,
        params.clone(),
        &mut rand::thread_rng(),
    )));

    let resize = {
        let window_r = window.clone();
        let field = field.clone();
        EventListener::new(window, EV_RESIZE, move |_| {
            let vp = dom::viewport_size(&window_r);
            dom::size_canvas(&canvas, vp);
            field.borrow_mut().resize(vp);
        })?
    };

    let root = dom::root_element(document);
    let window_p = window.clone();
    let parallax = on_pointer_move(window, move |ev| {
        let Some(root) = &root else { return };
        let vp = dom::viewport_size(&window_p);
        let offset = vp.parallax_offset(Vec2::new(ev.client_x() as f32, ev.client_y() as f32));
        dom::set_css_var(root, MOUSE_X_VAR, &style::css_number(offset.x));
        dom::set_css_var(root, MOUSE_Y_VAR, &style::css_number(offset.y));
    })?;

    let star_count = field.borrow().len();
    let frame_loop = frame::start_loop(window, move || field.borrow_mut().frame(&mut surface));

    log::info!(
        "[starfield] mounted {} stars on {}x{}",
        star_count,
        viewport.width,
        viewport.height
    );
    Ok(Some(
        Mounted::new("starfield")
            .with(resize)
            .with(parallax)
            .with(frame_loop),
    ))
}
