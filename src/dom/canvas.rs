//! Particle background on the `#particles` canvas.

use std::cell::RefCell;
use std::f64::consts::PI;
use std::rc::Rc;

use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::schedule::{CancelToken, frame_loop};
use super::{listen, viewport};
use crate::config::ParticleConfig;
use crate::error::{FxError, Result};
use crate::particles::{ParticleField, Surface, css_rgba};

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| FxError::NoContext(canvas.id()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| FxError::NoContext(canvas.id()))?;
        Ok(Self { ctx })
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f64, height: f64) {
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn line(&mut self, from: (f64, f64), to: (f64, f64), color: (u8, u8, u8), alpha: f64) {
        self.ctx.begin_path();
        self.ctx.set_stroke_style_str(&css_rgba(color, alpha));
        self.ctx.set_line_width(1.0);
        self.ctx.move_to(from.0, from.1);
        self.ctx.line_to(to.0, to.1);
        self.ctx.stroke();
    }

    fn dot(&mut self, center: (f64, f64), radius: f64, color: (u8, u8, u8), alpha: f64) {
        self.ctx.set_fill_style_str(&css_rgba(color, alpha));
        self.ctx.begin_path();
        let _ = self.ctx.arc(center.0, center.1, radius, 0.0, PI * 2.0);
        self.ctx.fill();
    }
}

struct Scene {
    field: ParticleField,
    surface: CanvasSurface,
    rng: SmallRng,
}

fn fit_to_window(canvas: &HtmlCanvasElement, win: &Window) -> (f64, f64) {
    let (w, h) = viewport(win);
    canvas.set_width(w as u32);
    canvas.set_height(h as u32);
    (w, h)
}

/// Size the canvas to the viewport, seed the field and start the frame loop.
/// Resizing the window rebuilds the particle batch for the new size.
pub fn start(win: &Window, canvas: HtmlCanvasElement, cfg: &ParticleConfig, token: CancelToken) -> Result<()> {
    let (w, h) = fit_to_window(&canvas, win);
    let mut rng = SmallRng::from_entropy();
    let mut field = ParticleField::new(w, h, cfg.clone());
    let count = field.resize(w, h, &mut rng);
    log::info!("particles: {count} on {w}x{h}");

    let scene = Rc::new(RefCell::new(Scene {
        field,
        surface: CanvasSurface::new(&canvas)?,
        rng,
    }));

    {
        let scene = scene.clone();
        let canvas = canvas.clone();
        listen(win, "resize", move |_: web_sys::Event| {
            let Some(win) = web_sys::window() else { return };
            let (w, h) = fit_to_window(&canvas, &win);
            let mut s = scene.borrow_mut();
            let Scene { field, rng, .. } = &mut *s;
            let count = field.resize(w, h, rng);
            log::debug!("particles: resized to {w}x{h}, {count} particles");
        })?;
    }

    frame_loop(token, move |_ts| {
        let mut s = scene.borrow_mut();
        let Scene { field, surface, .. } = &mut *s;
        field.frame(surface);
    })
}
