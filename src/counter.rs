//! Stat counters and skill bars, both revealed once when their section scrolls
//! into view.

/// Result of advancing a counter by one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterStep {
    /// Show this value and tick again.
    Next(i64),
    /// Target reached; show [`final_label`].
    Done,
}

/// Counters climb in `steps` equal increments, rounding up so they always land.
pub fn step(current: i64, target: i64, steps: u32) -> CounterStep {
    if current >= target {
        return CounterStep::Done;
    }
    let increment = target as f64 / steps.max(1) as f64;
    let next = (current as f64 + increment).ceil() as i64;
    // ceil(current + x) with x > 0 is always > current, but guard tiny targets.
    CounterStep::Next(next.max(current + 1))
}

/// Single-digit targets read as "5+".
pub fn final_label(target: i64) -> String {
    if target < 10 {
        format!("{target}+")
    } else {
        target.to_string()
    }
}

/// Parse a counter's displayed text; anything unparsable counts as zero.
pub fn parse_count(text: &str) -> i64 {
    text.trim().trim_end_matches('+').parse().unwrap_or(0)
}

/// CSS width for a skill bar's `data-progress` value, clamped to 0..=100.
pub fn progress_width(progress: &str) -> Option<String> {
    let pct: f64 = progress.trim().trim_end_matches('%').parse().ok()?;
    Some(format!("{}%", pct.clamp(0.0, 100.0)))
}

/// A skill bar still needs filling when its inline width was never set.
pub fn bar_unfilled(style_width: &str) -> bool {
    matches!(style_width.trim(), "" | "0px" | "0" | "0%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_up_and_lands_on_target() {
        let mut cur = 0;
        let mut ticks = 0;
        while let CounterStep::Next(v) = step(cur, 1500, 200) {
            assert!(v > cur);
            cur = v;
            ticks += 1;
        }
        assert!(cur >= 1500);
        assert!(ticks <= 200);
    }

    #[test]
    fn small_targets_still_progress() {
        assert_eq!(step(0, 3, 200), CounterStep::Next(1));
        assert_eq!(step(3, 3, 200), CounterStep::Done);
    }

    #[test]
    fn labels() {
        assert_eq!(final_label(5), "5+");
        assert_eq!(final_label(50), "50");
        assert_eq!(parse_count(" 12 "), 12);
        assert_eq!(parse_count("n/a"), 0);
    }

    #[test]
    fn progress_widths() {
        assert_eq!(progress_width("85").as_deref(), Some("85%"));
        assert_eq!(progress_width("120").as_deref(), Some("100%"));
        assert_eq!(progress_width("x"), None);
        assert!(bar_unfilled(""));
        assert!(bar_unfilled("0px"));
        assert!(!bar_unfilled("85%"));
    }
}
