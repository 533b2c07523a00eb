// Integration tests (native) for the `portfolio-fx` crate.
// These tests avoid wasm-specific functionality and exercise pure Rust logic so
// they can run under `cargo test` on the host.

use portfolio_fx::config::EffectsConfig;
use portfolio_fx::filter::{CardTransition, Filter, plan};
use portfolio_fx::trigger::OneShot;
use portfolio_fx::typewriter::{Mode, Typewriter};
use portfolio_fx::validation::{FieldKind, FormField, validate_form};

// Counters and skill bars share the same once-per-page rule.
#[test]
fn one_shot_ignores_repeated_visibility() {
    let mut counters = OneShot::new();
    let fired = (0..5).filter(|_| counters.fire()).count();
    assert_eq!(fired, 1);
}

#[test]
fn default_typewriter_cycles_all_texts() {
    let cfg = EffectsConfig::default();
    let mut tw = Typewriter::from_config(&cfg.typewriter).unwrap();
    let n = cfg.typewriter.texts.len();
    let mut seen = vec![false; n];
    // Type and delete every string once.
    for _ in 0..n {
        seen[tw.index()] = true;
        let start = tw.index();
        while tw.index() == start {
            tw.tick();
        }
    }
    assert!(seen.iter().all(|s| *s));
    assert_eq!(tw.index(), 0);
    assert_eq!(tw.mode(), Mode::Typing);
}

#[test]
fn filter_scenario_from_button_values() {
    let cards = [Some("aws devops"), Some("kubernetes"), Some("terraform aws")];
    let shown = |value: &str| {
        plan(&Filter::parse(Some(value)), cards)
            .into_iter()
            .filter(|t| *t == CardTransition::Show)
            .count()
    };
    assert_eq!(shown("all"), 3);
    assert_eq!(shown("aws"), 2);
    assert_eq!(shown("gcp"), 0);
}

#[test]
fn valid_contact_form_passes() {
    let fields = [
        FormField { name: "name".into(), kind: FieldKind::Text, min_len: Some(2), value: "Ada".into() },
        FormField { name: "email".into(), kind: FieldKind::Email, min_len: None, value: "ada@example.org".into() },
        FormField { name: "message".into(), kind: FieldKind::Message, min_len: Some(10), value: "Hello there, nice site".into() },
    ];
    let report = validate_form(&fields);
    assert!(report.is_valid());
    assert_eq!(report.errors().count(), 0);
}
