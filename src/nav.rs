//! Navigation chrome state: mobile menu, navbar shade and scroll-to-top button.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    Toggle,
    LinkClicked,
    Escape,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuChange {
    pub open: bool,
    /// Escape on an open menu hands focus back to the hamburger.
    pub refocus_toggle: bool,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    /// Apply an event; `None` when nothing visible changes.
    pub fn handle(&mut self, event: MenuEvent) -> Option<MenuChange> {
        match event {
            MenuEvent::Toggle => {
                self.open = !self.open;
                Some(MenuChange { open: self.open, refocus_toggle: false })
            }
            MenuEvent::LinkClicked => {
                self.open = false;
                Some(MenuChange { open: false, refocus_toggle: false })
            }
            MenuEvent::Escape if self.open => {
                self.open = false;
                Some(MenuChange { open: false, refocus_toggle: true })
            }
            MenuEvent::Escape => None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}

pub fn aria_expanded(open: bool) -> &'static str {
    if open { "true" } else { "false" }
}

/// Scroll-dependent class flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollChrome {
    pub navbar_scrolled: bool,
    pub show_scroll_top: bool,
}

pub fn scroll_chrome(scroll_y: f64, navbar_px: f64, scroll_top_px: f64) -> ScrollChrome {
    ScrollChrome {
        navbar_scrolled: scroll_y > navbar_px,
        show_scroll_top: scroll_y > scroll_top_px,
    }
}
