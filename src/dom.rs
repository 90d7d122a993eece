use crate::style::TRAIL_OVERLAY_STYLE;
use anyhow::anyhow;
use folio_core::Viewport;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<(web::Window, web::Document)> {
    let window = web::window()?;
    let document = window.document()?;
    Some((window, document))
}

/// Current `innerWidth` x `innerHeight`; zero if the host cannot report it.
pub fn viewport_size(window: &web::Window) -> Viewport {
    let read = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
    };
    Viewport::new(read(window.inner_width()), read(window.inner_height()))
}

pub fn size_canvas(canvas: &web::HtmlCanvasElement, viewport: Viewport) {
    canvas.set_width(viewport.width as u32);
    canvas.set_height(viewport.height as u32);
}

/// `Ok(None)` when the element is absent; an error when it is not a canvas.
pub fn canvas_by_id(
    document: &web::Document,
    id: &str,
) -> anyhow::Result<Option<web::HtmlCanvasElement>> {
    match document.get_element_by_id(id) {
        None => Ok(None),
        Some(el) => el
            .dyn_into::<web::HtmlCanvasElement>()
            .map(Some)
            .map_err(|e| anyhow!("#{} is not a canvas: {:?}", id, e)),
    }
}

pub fn query(document: &web::Document, selector: &str) -> anyhow::Result<Option<web::Element>> {
    document
        .query_selector(selector)
        .map_err(|e| anyhow!("bad selector {}: {:?}", selector, e))
}

pub fn pin_overlay(canvas: &web::HtmlCanvasElement) -> anyhow::Result<()> {
    let style = canvas.style();
    for (prop, value) in TRAIL_OVERLAY_STYLE {
        style
            .set_property(prop, value)
            .map_err(|e| anyhow!("style {}: {:?}", prop, e))?;
    }
    Ok(())
}

#[inline]
pub fn root_element(document: &web::Document) -> Option<web::HtmlElement> {
    document
        .document_element()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

#[inline]
pub fn set_css_var(el: &web::HtmlElement, name: &str, value: &str) {
    _ = el.style().set_property(name, value);
}

pub fn create_element(
    document: &web::Document,
    tag: &str,
    class: &str,
    text: Option<&str>,
) -> anyhow::Result<web::Element> {
    let el = document
        .create_element(tag)
        .map_err(|e| anyhow!("create <{}>: {:?}", tag, e))?;
    el.set_class_name(class);
    if text.is_some() {
        el.set_text_content(text);
    }
    Ok(el)
}

pub fn append(parent: &web::Element, child: &web::Element) -> anyhow::Result<()> {
    parent
        .append_child(child)
        .map(|_| ())
        .map_err(|e| anyhow!("append_child: {:?}", e))
}
