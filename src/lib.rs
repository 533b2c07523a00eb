//! Portfolio FX core crate.
//!
//! Cosmetic effects for the static portfolio page, loaded as a WASM module. The
//! state machines (particles, typewriter, counters, filters, validation) live in
//! plain modules that build and test natively; `dom` wires them to the page.

use wasm_bindgen::prelude::*;

pub mod config;
pub mod counter;
pub mod dom;
pub mod error;
pub mod filter;
pub mod logging;
pub mod nav;
pub mod particles;
pub mod reveal;
pub mod trigger;
pub mod typewriter;
pub mod validation;

pub use config::EffectsConfig;
pub use error::{FxError, Result};
pub use particles::{Particle, ParticleField, Surface};
pub use typewriter::{Mode, Tick, Typewriter};

use dom::{CancelToken, Page};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Returned to JS so the page can stop the animation loops.
#[wasm_bindgen]
pub struct PortfolioHandle {
    token: CancelToken,
    features: Vec<&'static str>,
}

#[wasm_bindgen]
impl PortfolioHandle {
    /// Stop the particle, typewriter and counter loops after their current tick.
    pub fn stop(&self) {
        log::info!("stopping effect loops");
        self.token.cancel();
    }

    pub fn active_features(&self) -> js_sys::Array {
        self.features.iter().map(|f| JsValue::from_str(f)).collect()
    }
}

// -----------------------------------------------------------------------------
// Entry points
// -----------------------------------------------------------------------------

#[wasm_bindgen]
pub fn start_portfolio() -> std::result::Result<PortfolioHandle, JsValue> {
    Ok(run(EffectsConfig::default())?)
}

#[wasm_bindgen]
pub fn start_portfolio_with(config_json: &str) -> std::result::Result<PortfolioHandle, JsValue> {
    let cfg = EffectsConfig::from_json(config_json)?;
    Ok(run(cfg)?)
}

/// Outcome of one feature start. A failing feature is logged and counted as
/// inactive; it never stops the others.
fn settle(name: &'static str, started: Result<bool>) -> (&'static str, bool) {
    match started {
        Ok(active) => (name, active),
        Err(e) => {
            log::warn!("{name}: failed to start: {e}");
            (name, false)
        }
    }
}

/// Start every feature whose elements exist on the page.
pub fn run(cfg: EffectsConfig) -> Result<PortfolioHandle> {
    cfg.validate()?;
    logging::init(cfg.log_level.into());
    let page = Page::discover()?;
    let token = CancelToken::new();
    let timing = &cfg.timing;

    let particles = match page.canvas.clone() {
        Some(canvas) => dom::canvas::start(&page.window, canvas, &cfg.particles, token.clone()).map(|_| true),
        None => Ok(false),
    };
    let typing = match page.typing_text.clone() {
        Some(el) => dom::typing::start(el, &cfg.typewriter, token.clone()).map(|_| true),
        None => Ok(false),
    };
    let features = [
        settle("preloader", dom::chrome::start_preloader(&page, timing)),
        settle("particles", particles),
        settle("typewriter", typing),
        settle("menu", dom::chrome::start_menu(&page)),
        settle("smooth-scroll", dom::chrome::start_smooth_scroll(&page)),
        settle("scroll-chrome", dom::chrome::start_scroll_chrome(&page, timing)),
        settle("counters", dom::observe::start_counters(&page, timing, token.clone())),
        settle("skills", dom::observe::start_skills(&page, timing)),
        settle("reveal", dom::observe::start_reveal(&page, timing)),
        settle("project-filter", dom::projects::start(&page, timing)),
        settle("contact-form", dom::form::start(&page, timing)),
    ];
    for (name, active) in features {
        if active {
            log::info!("{name}: active");
        } else {
            log::info!("{name}: inactive");
        }
    }
    Ok(PortfolioHandle {
        token,
        features: features.iter().filter(|(_, on)| *on).map(|(n, _)| *n).collect(),
    })
}
