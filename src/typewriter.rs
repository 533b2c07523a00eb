//! Typewriter text effect: a two-mode automaton that types out a string one
//! character per tick, pauses, deletes it again and moves on to the next.
//!
//! Each [`Typewriter::tick`] returns the text to show and how long to wait before
//! the next tick; scheduling is left to the caller (see `dom::typing`).

use crate::config::TypewriterConfig;
use crate::error::{FxError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Typing,
    Deleting,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timings {
    pub typing_ms: u32,
    pub deleting_ms: u32,
    pub pause_ms: u32,
}

impl From<&TypewriterConfig> for Timings {
    fn from(cfg: &TypewriterConfig) -> Self {
        Self {
            typing_ms: cfg.typing_ms,
            deleting_ms: cfg.deleting_ms,
            pause_ms: cfg.pause_ms,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tick {
    pub text: String,
    pub delay_ms: u32,
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    texts: Vec<String>,
    index: usize,
    /// Characters currently shown, counted in chars (not bytes).
    chars: usize,
    mode: Mode,
    timings: Timings,
}

impl Typewriter {
    pub fn new(texts: Vec<String>, timings: Timings) -> Result<Self> {
        if texts.is_empty() {
            return Err(FxError::EmptyTexts);
        }
        Ok(Self {
            texts,
            index: 0,
            chars: 0,
            mode: Mode::Typing,
            timings,
        })
    }

    pub fn from_config(cfg: &TypewriterConfig) -> Result<Self> {
        Self::new(cfg.texts.clone(), Timings::from(cfg))
    }

    pub fn tick(&mut self) -> Tick {
        let len = self.current_len();
        let delay_ms = match self.mode {
            Mode::Typing => {
                self.chars = (self.chars + 1).min(len);
                if self.chars == len {
                    self.mode = Mode::Deleting;
                    self.timings.pause_ms
                } else {
                    self.timings.typing_ms
                }
            }
            Mode::Deleting => {
                self.chars = self.chars.saturating_sub(1);
                if self.chars == 0 {
                    self.mode = Mode::Typing;
                    self.index = (self.index + 1) % self.texts.len();
                }
                self.timings.deleting_ms
            }
        };
        Tick {
            text: self.visible().to_string(),
            delay_ms,
        }
    }

    /// Prefix of the active string currently on screen. After the last delete
    /// tick the index has already advanced, but the prefix is empty either way.
    pub fn visible(&self) -> &str {
        let s = &self.texts[self.index];
        match s.char_indices().nth(self.chars) {
            Some((byte, _)) => &s[..byte],
            None => s,
        }
    }

    fn current_len(&self) -> usize {
        self.texts[self.index].chars().count()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn char_count(&self) -> usize {
        self.chars
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const T: Timings = Timings { typing_ms: 80, deleting_ms: 40, pause_ms: 2000 };

    fn tw(texts: &[&str]) -> Typewriter {
        Typewriter::new(texts.iter().map(|s| s.to_string()).collect(), T).unwrap()
    }

    #[test]
    fn empty_list_rejected() {
        assert!(matches!(Typewriter::new(vec![], T), Err(FxError::EmptyTexts)));
    }

    #[test]
    fn types_pauses_then_deletes() {
        let mut t = tw(&["abc", "xy"]);
        assert_eq!(t.tick(), Tick { text: "a".into(), delay_ms: 80 });
        assert_eq!(t.tick(), Tick { text: "ab".into(), delay_ms: 80 });
        assert_eq!(t.tick(), Tick { text: "abc".into(), delay_ms: 2000 });
        assert_eq!(t.mode(), Mode::Deleting);
        assert_eq!(t.tick(), Tick { text: "ab".into(), delay_ms: 40 });
        assert_eq!(t.tick().text, "a");
        assert_eq!(t.tick(), Tick { text: "".into(), delay_ms: 40 });
        assert_eq!(t.mode(), Mode::Typing);
        assert_eq!(t.index(), 1);
        assert_eq!(t.tick().text, "x");
    }

    #[test]
    fn index_wraps_after_last_string() {
        let mut t = tw(&["a", "b", "c", "d", "e"]);
        // each one-char string takes one type tick and one delete tick
        for _ in 0..8 {
            t.tick();
        }
        assert_eq!(t.index(), 4);
        t.tick();
        t.tick();
        assert_eq!(t.index(), 0);
    }

    #[test]
    fn slices_on_char_boundaries() {
        let mut t = tw(&["ok 🚀"]);
        let shown: Vec<String> = (0..4).map(|_| t.tick().text).collect();
        assert_eq!(shown, vec!["o", "ok", "ok ", "ok 🚀"]);
        assert_eq!(t.mode(), Mode::Deleting);
    }

    #[test]
    fn empty_string_in_cycle_is_skipped_through() {
        let mut t = tw(&["", "z"]);
        assert_eq!(t.tick(), Tick { text: "".into(), delay_ms: 2000 });
        assert_eq!(t.mode(), Mode::Deleting);
        t.tick();
        assert_eq!(t.index(), 1);
        assert_eq!(t.tick().text, "z");
    }
}
