//! Effect tuning. Every field has a default so a partial JSON object from the
//! page (or none at all) is enough.

use serde::Deserialize;

use crate::error::{FxError, Result};

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct EffectsConfig {
    pub particles: ParticleConfig,
    pub typewriter: TypewriterConfig,
    pub timing: TimingConfig,
    /// `log` level filter name ("off", "error", "warn", "info", "debug", "trace").
    pub log_level: LogLevel,
}

impl EffectsConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let cfg = if json.trim().is_empty() {
            Self::default()
        } else {
            serde_json::from_str(json)?
        };
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject settings no effect can run with, before any loop is started.
    pub fn validate(&self) -> Result<()> {
        if self.typewriter.texts.is_empty() {
            return Err(FxError::EmptyTexts);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Off,
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    /// Viewports narrower than this get `small_count` particles.
    pub small_screen_width: f64,
    pub small_count: usize,
    pub large_count: usize,
    /// Maximum absolute speed per axis, in px per frame.
    pub max_speed: f64,
    pub min_size: f64,
    pub max_size: f64,
    pub min_opacity: f64,
    pub max_opacity: f64,
    pub link_distance: f64,
    /// `alpha = link_alpha - distance / link_falloff`
    pub link_alpha: f64,
    pub link_falloff: f64,
    /// RGB triple used for dots and links.
    pub color: (u8, u8, u8),
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            small_screen_width: 768.0,
            small_count: 30,
            large_count: 80,
            max_speed: 0.5,
            min_size: 1.0,
            max_size: 4.0,
            min_opacity: 0.2,
            max_opacity: 0.7,
            link_distance: 100.0,
            link_alpha: 0.2,
            link_falloff: 500.0,
            color: (0, 212, 255),
        }
    }
}

impl ParticleConfig {
    pub fn count_for_width(&self, width: f64) -> usize {
        if width < self.small_screen_width {
            self.small_count
        } else {
            self.large_count
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TypewriterConfig {
    pub texts: Vec<String>,
    pub typing_ms: u32,
    pub deleting_ms: u32,
    pub pause_ms: u32,
    pub start_delay_ms: u32,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            texts: DEFAULT_TEXTS.iter().map(|s| s.to_string()).collect(),
            typing_ms: 80,
            deleting_ms: 40,
            pause_ms: 2000,
            start_delay_ms: 1000,
        }
    }
}

pub const DEFAULT_TEXTS: &[&str] = &[
    "Managing AWS cloud infrastructure (EC2, VPC, S3, EKS) ☁️",
    "Deploying and orchestrating Kubernetes applications 🐳",
    "Automating CI/CD pipelines with Jenkins 🚀",
    "Optimizing cloud costs by 30% with smart strategies 💰",
    "Building Infrastructure as Code with Terraform 📝",
    "Monitoring systems with Prometheus & Grafana 📊",
    "Ensuring zero-downtime deployments with auto-scaling 🔒",
];

/// Delays (ms) and scroll thresholds (px) for the smaller page features.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub preloader_hide_ms: u32,
    pub preloader_remove_ms: u32,
    pub navbar_scrolled_px: f64,
    pub scroll_top_px: f64,
    pub counter_steps: u32,
    pub counter_tick_ms: u32,
    pub stats_threshold: f64,
    pub skills_threshold: f64,
    pub skills_fallback_ms: u32,
    pub skills_root_margin: String,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
    pub card_show_ms: u32,
    pub card_hide_ms: u32,
    pub submit_delay_ms: u32,
    pub announce_ms: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            preloader_hide_ms: 1000,
            preloader_remove_ms: 500,
            navbar_scrolled_px: 50.0,
            scroll_top_px: 300.0,
            counter_steps: 200,
            counter_tick_ms: 1,
            stats_threshold: 0.5,
            skills_threshold: 0.1,
            skills_fallback_ms: 2000,
            skills_root_margin: "0px 0px -50px 0px".to_string(),
            reveal_threshold: 0.1,
            reveal_root_margin: "0px 0px -50px 0px".to_string(),
            card_show_ms: 10,
            card_hide_ms: 300,
            submit_delay_ms: 1000,
            announce_ms: 1000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_gives_defaults() {
        let cfg = EffectsConfig::from_json("  ").unwrap();
        assert_eq!(cfg.particles.large_count, 80);
        assert_eq!(cfg.typewriter.texts.len(), DEFAULT_TEXTS.len());
        assert_eq!(cfg.log_level, LogLevel::Warn);
    }

    #[test]
    fn partial_json_overrides_only_named_fields() {
        let cfg = EffectsConfig::from_json(
            r#"{"particles": {"link_distance": 120.0}, "typewriter": {"texts": ["a", "b"]}, "log_level": "debug"}"#,
        )
        .unwrap();
        assert!((cfg.particles.link_distance - 120.0).abs() < 1e-9);
        assert_eq!(cfg.particles.small_count, 30);
        assert_eq!(cfg.typewriter.texts, vec!["a", "b"]);
        assert_eq!(cfg.typewriter.pause_ms, 2000);
        assert_eq!(log::LevelFilter::from(cfg.log_level), log::LevelFilter::Debug);
    }

    #[test]
    fn bad_json_is_a_config_error() {
        let err = EffectsConfig::from_json("{nope").unwrap_err();
        assert!(matches!(err, FxError::Config(_)));
    }

    #[test]
    fn empty_typewriter_texts_rejected_up_front() {
        let err = EffectsConfig::from_json(r#"{"typewriter": {"texts": []}}"#).unwrap_err();
        assert!(matches!(err, FxError::EmptyTexts));
        assert!(EffectsConfig::default().validate().is_ok());
    }

    #[test]
    fn skills_margin_is_independent_of_reveal_margin() {
        let cfg = EffectsConfig::from_json(r#"{"timing": {"reveal_root_margin": "0px"}}"#).unwrap();
        assert_eq!(cfg.timing.reveal_root_margin, "0px");
        assert_eq!(cfg.timing.skills_root_margin, "0px 0px -50px 0px");
    }

    #[test]
    fn count_switches_at_breakpoint() {
        let p = ParticleConfig::default();
        assert_eq!(p.count_for_width(767.9), 30);
        assert_eq!(p.count_for_width(768.0), 80);
    }
}
