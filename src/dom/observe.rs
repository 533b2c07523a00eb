//! Visibility-driven effects: stat counters, skill bars and reveal-on-scroll.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::schedule::{CancelToken, after, ticker};
use super::{Page, set_class, set_style};
use crate::config::TimingConfig;
use crate::counter::{self, CounterStep};
use crate::error::Result;
use crate::reveal::RevealTracker;
use crate::trigger::OneShot;

/// Observe `targets`; `on_visible` gets each intersecting element. The observer
/// itself is handed over so callers can `unobserve`.
fn observe(
    targets: &[Element],
    threshold: f64,
    root_margin: &str,
    mut on_visible: impl FnMut(&Element, &IntersectionObserver) + 'static,
) -> Result<()> {
    let callback = Closure::wrap(Box::new(move |entries: Array, obs: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else { continue };
            if entry.is_intersecting() {
                on_visible(&entry.target(), &obs);
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);
    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    init.set_root_margin(root_margin);
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    for t in targets {
        observer.observe(t);
    }
    callback.forget();
    Ok(())
}

/// Count every `.counter` up to its `data-target` once `.stats` is half visible.
pub fn start_counters(page: &Page, timing: &TimingConfig, token: CancelToken) -> Result<bool> {
    let Some(stats) = page.stats.clone() else {
        return Ok(false);
    };
    let counters: Vec<(Element, i64)> = page
        .counters
        .iter()
        .map(|c| {
            let target = c.get_attribute("data-target").map(|t| counter::parse_count(&t)).unwrap_or(0);
            (c.clone(), target)
        })
        .collect();
    let mut once = OneShot::new();
    let (steps, tick_ms) = (timing.counter_steps, timing.counter_tick_ms);
    observe(&[stats], timing.stats_threshold, "0px", move |el, obs| {
        obs.unobserve(el);
        if !once.fire() {
            return;
        }
        log::debug!("stats visible, animating {} counters", counters.len());
        let counters = counters.clone();
        let _ = ticker(token.clone(), 0, move || {
            let mut running = false;
            for (el, target) in &counters {
                let shown = counter::parse_count(&el.text_content().unwrap_or_default());
                match counter::step(shown, *target, steps) {
                    CounterStep::Next(v) => {
                        el.set_text_content(Some(&v.to_string()));
                        running = true;
                    }
                    CounterStep::Done => el.set_text_content(Some(&counter::final_label(*target))),
                }
            }
            running.then_some(tick_ms)
        });
    })?;
    Ok(true)
}

fn fill_bars(bars: &[HtmlElement], only_unfilled: bool) {
    for bar in bars {
        if only_unfilled {
            let width = bar.style().get_property_value("width").unwrap_or_default();
            if !counter::bar_unfilled(&width) {
                continue;
            }
        }
        if let Some(w) = bar.get_attribute("data-progress").and_then(|p| counter::progress_width(&p)) {
            set_style(bar, "width", &w);
        }
    }
}

/// Grow skill bars when `.skills` scrolls in, with a timed fallback for
/// browsers where the observer never fires (seen on some mobiles).
pub fn start_skills(page: &Page, timing: &TimingConfig) -> Result<bool> {
    let Some(skills) = page.skills.clone() else {
        return Ok(false);
    };
    let bars = Rc::new(page.skill_bars.clone());
    let once = Rc::new(RefCell::new(OneShot::new()));
    {
        let (bars, once) = (bars.clone(), once.clone());
        observe(&[skills], timing.skills_threshold, &timing.skills_root_margin, move |el, obs| {
            obs.unobserve(el);
            if once.borrow_mut().fire() {
                fill_bars(&bars, false);
            }
        })?;
    }
    after(timing.skills_fallback_ms, move || {
        if once.borrow_mut().fire() {
            log::debug!("skills observer did not fire, using fallback");
            fill_bars(&bars, true);
        }
    })?;
    Ok(true)
}

/// Reveal `[data-aos]` elements once each. With reduced motion requested the
/// animation attributes are stripped instead and nothing is observed.
pub fn start_reveal(page: &Page, timing: &TimingConfig) -> Result<bool> {
    if page.reveal_targets.is_empty() {
        return Ok(false);
    }
    let reduced = page
        .window
        .match_media("(prefers-reduced-motion: reduce)")
        .ok()
        .flatten()
        .is_some_and(|mq| mq.matches());
    if reduced {
        for el in &page.reveal_targets {
            let _ = el.remove_attribute("data-aos");
            let _ = el.remove_attribute("data-aos-delay");
        }
        log::info!("reveal: reduced motion, {} elements left static", page.reveal_targets.len());
        return Ok(false);
    }
    let targets = page.reveal_targets.clone();
    let mut tracker = RevealTracker::new();
    observe(&page.reveal_targets, timing.reveal_threshold, &timing.reveal_root_margin, move |el, obs| {
        let Some(slot) = targets.iter().position(|t| t == el) else { return };
        if tracker.observe(slot, true) {
            set_class(el, "aos-animate", true);
        }
        obs.unobserve(el);
    })?;
    Ok(true)
}
