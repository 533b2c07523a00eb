//! Self-rescheduling loops on top of `requestAnimationFrame` and `setTimeout`.
//! Each loop checks a [`CancelToken`] before running and drops its own closure
//! once cancelled.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::window;

use crate::error::{FxError, Result};

#[derive(Clone, Default, Debug)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

/// `setTimeout` takes an i32; larger delays saturate instead of wrapping
/// negative (which would fire immediately).
fn timeout_ms(ms: u32) -> i32 {
    i32::try_from(ms).unwrap_or(i32::MAX)
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;
type TimerCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Run `tick` once per animation frame until `token` is cancelled.
pub fn frame_loop(token: CancelToken, mut tick: impl FnMut(f64) + 'static) -> Result<()> {
    let win = window().ok_or(FxError::NoWindow)?;
    let f: FrameCallback = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
        if token.is_cancelled() {
            // Breaks the Rc cycle; the closure is freed once this call returns.
            let _ = f.borrow_mut().take();
            return;
        }
        tick(ts);
        if let (Some(w), Some(cb)) = (window(), f.borrow().as_ref()) {
            let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut(f64)>));
    if let Some(cb) = g.borrow().as_ref() {
        win.request_animation_frame(cb.as_ref().unchecked_ref())?;
    }
    Ok(())
}

/// Timer loop with a variable cadence: `tick` returns the delay before the next
/// call, or `None` to stop. The first call happens after `first_delay_ms`.
pub fn ticker(
    token: CancelToken,
    first_delay_ms: u32,
    mut tick: impl FnMut() -> Option<u32> + 'static,
) -> Result<()> {
    let win = window().ok_or(FxError::NoWindow)?;
    let f: TimerCallback = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let next = if token.is_cancelled() { None } else { tick() };
        match next {
            Some(ms) => {
                if let (Some(w), Some(cb)) = (window(), f.borrow().as_ref()) {
                    let _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(
                        cb.as_ref().unchecked_ref(),
                        timeout_ms(ms),
                    );
                }
            }
            None => {
                let _ = f.borrow_mut().take();
            }
        }
    }) as Box<dyn FnMut()>));
    if let Some(cb) = g.borrow().as_ref() {
        win.set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.as_ref().unchecked_ref(),
            timeout_ms(first_delay_ms),
        )?;
    }
    Ok(())
}

/// Fire-and-forget timeout.
pub fn after(ms: u32, f: impl FnOnce() + 'static) -> Result<()> {
    let win = window().ok_or(FxError::NoWindow)?;
    let cb = Closure::once_into_js(f);
    win.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), timeout_ms(ms))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_clones_share_state() {
        let a = CancelToken::new();
        let b = a.clone();
        assert!(!b.is_cancelled());
        a.cancel();
        assert!(b.is_cancelled());
    }

    #[test]
    fn long_delays_saturate() {
        assert_eq!(timeout_ms(80), 80);
        assert_eq!(timeout_ms(u32::MAX), i32::MAX);
        assert_eq!(timeout_ms(i32::MAX as u32 + 1), i32::MAX);
    }
}
