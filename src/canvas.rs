use anyhow::anyhow;
use folio_core::{Color, Fill, Surface};
use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// 2D canvas backing for an animator's `Surface`.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    last_color: Option<Color>,
}

impl CanvasSurface {
    pub fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow!("getContext('2d'): {:?}", e))?
            .ok_or_else(|| anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow!("{:?}", e))?;
        Ok(Self {
            canvas: canvas.clone(),
            ctx,
            last_color: None,
        })
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self) {
        // resizing the canvas resets context state, fill style included
        self.last_color = None;
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, fill: Fill) {
        if self.last_color != Some(fill.color) {
            self.ctx.set_fill_style_str(&fill.color.css());
            self.last_color = Some(fill.color);
        }
        self.ctx.begin_path();
        _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius.max(0.0) as f64, 0.0, TAU);
        // opacity is applied per shape, then reset for the next caller
        self.ctx.set_global_alpha(fill.alpha as f64);
        self.ctx.fill();
        self.ctx.set_global_alpha(1.0);
    }
}
