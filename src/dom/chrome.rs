//! Page chrome: preloader, mobile menu, smooth anchors, navbar shade and the
//! scroll-to-top button.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{
    Element, Event, HtmlElement, KeyboardEvent, MouseEvent, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition, ScrollToOptions,
};

use super::schedule::after;
use super::{Page, listen, scroll_y, set_class, set_style};
use crate::config::TimingConfig;
use crate::error::Result;
use crate::nav::{MenuChange, MenuEvent, MenuState, aria_expanded, scroll_chrome};

/// Fade the splash out once the page has loaded. Returns whether a preloader
/// was found.
pub fn start_preloader(page: &Page, timing: &TimingConfig) -> Result<bool> {
    let Some(preloader) = page.preloader.clone() else {
        return Ok(false);
    };
    let (hide_ms, remove_ms) = (timing.preloader_hide_ms, timing.preloader_remove_ms);
    let dismiss = move || {
        let _ = after(hide_ms, move || {
            set_class(&preloader, "hide", true);
            let _ = after(remove_ms, move || set_style(&preloader, "display", "none"));
        });
    };
    // The module may be instantiated after `load` already fired.
    if page.document.ready_state() == "complete" {
        dismiss();
    } else {
        let mut dismiss = Some(dismiss);
        listen(&page.window, "load", move |_: Event| {
            if let Some(f) = dismiss.take() {
                f();
            }
        })?;
    }
    Ok(true)
}

fn apply_menu(change: MenuChange, hamburger: &HtmlElement, menu: &Element) {
    set_class(menu, "active", change.open);
    set_class(hamburger, "active", change.open);
    let _ = hamburger.set_attribute("aria-expanded", aria_expanded(change.open));
    if change.refocus_toggle {
        let _ = hamburger.focus();
    }
}

/// Hamburger toggle, close on nav-link click, close on Escape.
pub fn start_menu(page: &Page) -> Result<bool> {
    let (Some(hamburger), Some(menu)) = (page.hamburger.clone(), page.nav_menu.clone()) else {
        return Ok(false);
    };
    let state = Rc::new(RefCell::new(MenuState::default()));
    let dispatch = {
        let state = state.clone();
        let (hamburger, menu) = (hamburger.clone(), menu.clone());
        Rc::new(move |event: MenuEvent| {
            if let Some(change) = state.borrow_mut().handle(event) {
                apply_menu(change, &hamburger, &menu);
            }
        })
    };

    {
        let dispatch = dispatch.clone();
        listen(&hamburger, "click", move |_: MouseEvent| dispatch(MenuEvent::Toggle))?;
    }
    for link in &page.nav_links {
        let dispatch = dispatch.clone();
        listen(link, "click", move |_: MouseEvent| dispatch(MenuEvent::LinkClicked))?;
    }
    listen(&page.document, "keydown", move |evt: KeyboardEvent| {
        if evt.key() == "Escape" {
            dispatch(MenuEvent::Escape);
        }
    })?;
    Ok(true)
}

/// In-page anchors scroll smoothly to their target, if it exists.
pub fn start_smooth_scroll(page: &Page) -> Result<bool> {
    if page.anchors.is_empty() {
        return Ok(false);
    }
    for anchor in &page.anchors {
        let doc = page.document.clone();
        let href = anchor.get_attribute("href").unwrap_or_default();
        listen(anchor, "click", move |evt: MouseEvent| {
            evt.prevent_default();
            // A bare "#" is not a valid selector.
            if href.len() <= 1 {
                return;
            }
            if let Ok(Some(target)) = doc.query_selector(&href) {
                let opts = ScrollIntoViewOptions::new();
                opts.set_behavior(ScrollBehavior::Smooth);
                opts.set_block(ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&opts);
            }
        })?;
    }
    Ok(true)
}

/// Navbar shade and scroll-to-top visibility follow the scroll offset.
pub fn start_scroll_chrome(page: &Page, timing: &TimingConfig) -> Result<bool> {
    if page.navbar.is_none() && page.scroll_top.is_none() {
        return Ok(false);
    }
    if let Some(btn) = &page.scroll_top {
        let win = page.window.clone();
        listen(btn, "click", move |_: MouseEvent| {
            let opts = ScrollToOptions::new();
            opts.set_top(0.0);
            opts.set_behavior(ScrollBehavior::Smooth);
            win.scroll_to_with_scroll_to_options(&opts);
        })?;
    }
    let navbar = page.navbar.clone();
    let scroll_top: Option<Element> = page.scroll_top.clone().map(|b| b.unchecked_into());
    let (navbar_px, top_px) = (timing.navbar_scrolled_px, timing.scroll_top_px);
    let win = page.window.clone();
    listen(&page.window, "scroll", move |_: Event| {
        let chrome = scroll_chrome(scroll_y(&win), navbar_px, top_px);
        if let Some(nav) = &navbar {
            set_class(nav, "scrolled", chrome.navbar_scrolled);
        }
        if let Some(btn) = &scroll_top {
            set_class(btn, "show", chrome.show_scroll_top);
        }
    })?;
    Ok(true)
}
