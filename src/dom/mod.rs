//! Browser glue. `Page::discover` looks every optional element up once; each
//! feature then starts only if its elements are present and reports whether it
//! is active.

use wasm_bindgen::JsCast;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, EventTarget, HtmlCanvasElement, HtmlElement, HtmlFormElement, Window, window,
};

use crate::error::{FxError, Result};

pub mod canvas;
pub mod chrome;
pub mod form;
pub mod observe;
pub mod projects;
pub mod schedule;
pub mod typing;

pub use schedule::CancelToken;

/// Every element the effects touch. Missing ones are `None` / empty.
pub struct Page {
    pub window: Window,
    pub document: Document,
    pub preloader: Option<HtmlElement>,
    pub canvas: Option<HtmlCanvasElement>,
    pub typing_text: Option<Element>,
    pub hamburger: Option<HtmlElement>,
    pub nav_menu: Option<Element>,
    pub nav_links: Vec<Element>,
    pub navbar: Option<Element>,
    pub scroll_top: Option<HtmlElement>,
    pub anchors: Vec<Element>,
    pub stats: Option<Element>,
    pub counters: Vec<Element>,
    pub skills: Option<Element>,
    pub skill_bars: Vec<HtmlElement>,
    pub filter_buttons: Vec<Element>,
    pub project_cards: Vec<HtmlElement>,
    pub contact_form: Option<HtmlFormElement>,
    pub reveal_targets: Vec<Element>,
}

impl Page {
    pub fn discover() -> Result<Self> {
        let window = window().ok_or(FxError::NoWindow)?;
        let document = window.document().ok_or(FxError::NoDocument)?;
        let one = |sel: &str| document.query_selector(sel).ok().flatten();
        Ok(Self {
            preloader: one(".preloader").and_then(|e| e.dyn_into().ok()),
            canvas: document.get_element_by_id("particles").and_then(|e| e.dyn_into().ok()),
            typing_text: one(".typing-text"),
            hamburger: one(".hamburger").and_then(|e| e.dyn_into().ok()),
            nav_menu: one(".nav-menu"),
            nav_links: query_all(&document, ".nav-link"),
            navbar: one(".navbar"),
            scroll_top: document.get_element_by_id("scrollTop").and_then(|e| e.dyn_into().ok()),
            anchors: query_all(&document, "a[href^=\"#\"]"),
            stats: one(".stats"),
            counters: query_all(&document, ".counter"),
            skills: one(".skills"),
            skill_bars: query_all(&document, ".skill-progress"),
            filter_buttons: query_all(&document, ".filter-btn"),
            project_cards: query_all(&document, ".project-card"),
            contact_form: document.get_element_by_id("contactForm").and_then(|e| e.dyn_into().ok()),
            reveal_targets: query_all(&document, "[data-aos]"),
            window,
            document,
        })
    }
}

/// All matches of `selector` that are of type `T`.
pub fn query_all<T: JsCast>(root: &Document, selector: &str) -> Vec<T> {
    match root.query_selector_all(selector) {
        Ok(list) => (0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|n| n.dyn_into::<T>().ok())
            .collect(),
        Err(_) => Vec::new(),
    }
}

/// Like [`query_all`] but scoped to an element's subtree.
pub fn query_within<T: JsCast>(root: &Element, selector: &str) -> Vec<T> {
    match root.query_selector_all(selector) {
        Ok(list) => (0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|n| n.dyn_into::<T>().ok())
            .collect(),
        Err(_) => Vec::new(),
    }
}

/// Attach a long-lived event listener (kept for the page lifetime).
pub fn listen<E>(target: &EventTarget, event: &str, handler: impl FnMut(E) + 'static) -> Result<()>
where
    E: FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

pub fn set_style(el: &HtmlElement, prop: &str, value: &str) {
    let _ = el.style().set_property(prop, value);
}

pub fn set_class(el: &Element, class: &str, on: bool) {
    let _ = el.class_list().toggle_with_force(class, on);
}

pub fn viewport(win: &Window) -> (f64, f64) {
    let w = win.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let h = win.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (w, h)
}

pub fn scroll_y(win: &Window) -> f64 {
    win.scroll_y().unwrap_or(0.0)
}
