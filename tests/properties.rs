// Property tests for the particle field and typewriter state machines.

use portfolio_fx::config::ParticleConfig;
use portfolio_fx::particles::{Particle, ParticleField};
use portfolio_fx::typewriter::{Mode, Timings, Typewriter};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

const T: Timings = Timings { typing_ms: 80, deleting_ms: 40, pause_ms: 2000 };

proptest! {
    #[test]
    fn initialize_yields_exact_count(n in 0usize..300, seed in any::<u64>()) {
        let mut field = ParticleField::new(640.0, 480.0, ParticleConfig::default());
        field.initialize(n, &mut StdRng::seed_from_u64(seed));
        prop_assert_eq!(field.len(), n);
    }

    #[test]
    fn resize_count_matches_width(w in 1.0f64..3000.0, h in 1.0f64..3000.0, seed in any::<u64>()) {
        let cfg = ParticleConfig::default();
        let mut field = ParticleField::new(800.0, 600.0, cfg.clone());
        let count = field.resize(w, h, &mut StdRng::seed_from_u64(seed));
        prop_assert_eq!(count, cfg.count_for_width(w));
        prop_assert_eq!(field.len(), count);
    }

    #[test]
    fn step_keeps_in_bounds_or_flips(seed in any::<u64>(), frames in 1usize..200) {
        let (w, h) = (300.0, 200.0);
        let mut field = ParticleField::new(w, h, ParticleConfig::default());
        field.initialize(40, &mut StdRng::seed_from_u64(seed));
        for _ in 0..frames {
            let before: Vec<Particle> = field.particles().to_vec();
            field.step();
            for (b, a) in before.iter().zip(field.particles()) {
                if a.x < 0.0 || a.x > w {
                    prop_assert_eq!(a.speed_x, -b.speed_x);
                } else {
                    prop_assert_eq!(a.speed_x, b.speed_x);
                }
                if a.y < 0.0 || a.y > h {
                    prop_assert_eq!(a.speed_y, -b.speed_y);
                } else {
                    prop_assert_eq!(a.speed_y, b.speed_y);
                }
            }
        }
    }

    #[test]
    fn pair_links_iff_within_distance(dx in -150.0f64..150.0, dy in -150.0f64..150.0) {
        let mut field = ParticleField::new(1000.0, 1000.0, ParticleConfig::default());
        let p = |x, y| Particle { x, y, speed_x: 0.0, speed_y: 0.0, size: 1.0, opacity: 0.5 };
        field.particles_mut().extend([p(500.0, 500.0), p(500.0 + dx, 500.0 + dy)]);
        let expected = usize::from((dx * dx + dy * dy).sqrt() < 100.0);
        prop_assert_eq!(field.links().count(), expected);
    }

    #[test]
    fn typewriter_moves_one_char_per_tick(
        texts in prop::collection::vec("[a-z🚀 ]{0,12}", 1..6),
        ticks in 1usize..400,
    ) {
        let mut tw = Typewriter::new(texts.clone(), T).unwrap();
        for _ in 0..ticks {
            let (mode, idx, len) = (tw.mode(), tw.index(), tw.char_count());
            let bound = texts[idx].chars().count();
            let tick = tw.tick();
            match mode {
                Mode::Typing => {
                    prop_assert_eq!(tw.char_count(), (len + 1).min(bound));
                    prop_assert_eq!(tick.text.chars().count(), tw.char_count());
                    if tw.char_count() == bound {
                        prop_assert_eq!(tw.mode(), Mode::Deleting);
                        prop_assert_eq!(tick.delay_ms, T.pause_ms);
                    }
                }
                Mode::Deleting => {
                    prop_assert_eq!(tw.char_count(), len.saturating_sub(1));
                    prop_assert_eq!(tick.delay_ms, T.deleting_ms);
                    if tw.char_count() == 0 {
                        prop_assert_eq!(tw.mode(), Mode::Typing);
                        prop_assert_eq!(tw.index(), (idx + 1) % texts.len());
                    } else {
                        prop_assert_eq!(tw.index(), idx);
                    }
                }
            }
        }
    }
}
