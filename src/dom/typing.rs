use web_sys::Element;

use super::schedule::{CancelToken, ticker};
use crate::config::TypewriterConfig;
use crate::error::Result;
use crate::typewriter::Typewriter;

/// Drive the typewriter into `target`'s text content.
pub fn start(target: Element, cfg: &TypewriterConfig, token: CancelToken) -> Result<()> {
    let mut tw = Typewriter::from_config(cfg)?;
    log::info!("typewriter: cycling {} texts", cfg.texts.len());
    ticker(token, cfg.start_delay_ms, move || {
        let tick = tw.tick();
        target.set_text_content(Some(&tick.text));
        Some(tick.delay_ms)
    })
}
