use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Element, HtmlElement, MouseEvent};

use super::schedule::after;
use super::{Page, listen, set_class, set_style};
use crate::config::TimingConfig;
use crate::error::Result;
use crate::filter::{self, CardEpochs, CardTransition, Filter};

/// Style a card now and schedule the rest of its transition. The delayed half
/// is dropped if the card was re-filtered in the meantime.
fn apply(
    card: &HtmlElement,
    slot: usize,
    transition: CardTransition,
    epochs: &Rc<RefCell<CardEpochs>>,
    (show_ms, hide_ms): (u32, u32),
) {
    let epoch = epochs.borrow_mut().bump(slot);
    let (card, epochs) = (card.clone(), epochs.clone());
    let current = move || epochs.borrow().is_current(slot, epoch);
    match transition {
        CardTransition::Show => {
            set_style(&card, "display", "block");
            let _ = after(show_ms, move || {
                if current() {
                    set_style(&card, "opacity", "1");
                    set_style(&card, "transform", "scale(1)");
                }
            });
        }
        CardTransition::Hide => {
            set_style(&card, "opacity", "0");
            set_style(&card, "transform", "scale(0.8)");
            let _ = after(hide_ms, move || {
                if current() {
                    set_style(&card, "display", "none");
                }
            });
        }
    }
}

fn press(buttons: &[Element], active: &Element) {
    for b in buttons {
        let on = b == active;
        set_class(b, "active", on);
        let _ = b.set_attribute("aria-pressed", if on { "true" } else { "false" });
    }
}

/// Filter buttons partition the project cards by `data-category`.
pub fn start(page: &Page, timing: &TimingConfig) -> Result<bool> {
    if page.filter_buttons.is_empty() {
        return Ok(false);
    }
    let buttons = Rc::new(page.filter_buttons.clone());
    let cards = Rc::new(page.project_cards.clone());
    let epochs = Rc::new(RefCell::new(CardEpochs::new(cards.len())));
    let delays = (timing.card_show_ms, timing.card_hide_ms);
    for btn in buttons.iter() {
        let (buttons, cards, epochs, me) = (buttons.clone(), cards.clone(), epochs.clone(), btn.clone());
        listen(btn, "click", move |_: MouseEvent| {
            let f = Filter::parse(me.get_attribute("data-filter").as_deref());
            press(&buttons, &me);
            let categories: Vec<Option<String>> =
                cards.iter().map(|c| c.get_attribute("data-category")).collect();
            let plan = filter::plan(&f, categories.iter().map(|c| c.as_deref()));
            for (slot, (card, t)) in cards.iter().zip(plan).enumerate() {
                apply(card, slot, t, &epochs, delays);
            }
            log::debug!("filter {f:?} applied to {} cards", cards.len());
        })?;
    }
    Ok(true)
}
