// src/config/mod.rs
// Runtime configuration: defaults, overridden by environment (.env aware),
// optionally overlaid by a TOML file passed on the command line.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use crate::carousel::CarouselTuning;
use crate::error::{CredzError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredzConfig {
    // ── Simulated latency (milliseconds)
    pub mint_delay_ms: u64,
    pub analyze_delay_ms: u64,

    // ── Carousel tuning
    pub idle_spin_speed: f64,
    pub spin_friction: f64,
    pub drag_sensitivity: f64,
    pub max_fling_speed: f64,

    // ── Terminal front end
    pub frame_interval_ms: f64,
    pub default_spin_frames: u32,

    // ── Logging Configuration
    pub log_level: String,
}

impl Default for CredzConfig {
    fn default() -> Self {
        let tuning = CarouselTuning::default();
        Self {
            mint_delay_ms: 800,
            analyze_delay_ms: 1200,
            idle_spin_speed: tuning.base_speed,
            spin_friction: tuning.friction,
            drag_sensitivity: tuning.drag_sensitivity,
            max_fling_speed: tuning.max_fling,
            frame_interval_ms: 16.66,
            default_spin_frames: 60,
            log_level: "info".to_string(),
        }
    }
}

/// Partial config as read from a TOML file; every key is optional.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    mint_delay_ms: Option<u64>,
    analyze_delay_ms: Option<u64>,
    idle_spin_speed: Option<f64>,
    spin_friction: Option<f64>,
    drag_sensitivity: Option<f64>,
    max_fling_speed: Option<f64>,
    frame_interval_ms: Option<f64>,
    default_spin_frames: Option<u32>,
    log_level: Option<String>,
}

// Tolerates trailing comments and whitespace; falls back to the default
// when the variable is missing or does not parse.
fn env_var_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    match std::env::var(key) {
        Ok(val) => {
            let clean_val = val.split('#').next().unwrap_or("").trim();
            match clean_val.parse::<T>() {
                Ok(parsed) => parsed,
                Err(_) => {
                    eprintln!("Config: {} = '{}' (parse failed, using default)", key, val);
                    default
                }
            }
        }
        Err(_) => default,
    }
}

impl CredzConfig {
    pub fn from_env() -> Self {
        // A missing .env is normal; plain environment variables still apply
        let _ = dotenvy::dotenv();

        let d = Self::default();
        Self {
            mint_delay_ms: env_var_or("CREDZ_MINT_DELAY_MS", d.mint_delay_ms),
            analyze_delay_ms: env_var_or("CREDZ_ANALYZE_DELAY_MS", d.analyze_delay_ms),
            idle_spin_speed: env_var_or("CREDZ_IDLE_SPIN_SPEED", d.idle_spin_speed),
            spin_friction: env_var_or("CREDZ_SPIN_FRICTION", d.spin_friction),
            drag_sensitivity: env_var_or("CREDZ_DRAG_SENSITIVITY", d.drag_sensitivity),
            max_fling_speed: env_var_or("CREDZ_MAX_FLING_SPEED", d.max_fling_speed),
            frame_interval_ms: env_var_or("CREDZ_FRAME_INTERVAL_MS", d.frame_interval_ms),
            default_spin_frames: env_var_or("CREDZ_SPIN_FRAMES", d.default_spin_frames),
            log_level: env_var_or("CREDZ_LOG_LEVEL", d.log_level),
        }
    }

    /// Overlay values from a TOML file on top of `self`
    pub fn merge_file(mut self, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let display = path.display().to_string();
        let content = std::fs::read_to_string(path).map_err(|source| CredzError::ConfigRead {
            path: display.clone(),
            source,
        })?;
        let file: ConfigFile = toml::from_str(&content).map_err(|source| CredzError::ConfigParse {
            path: display,
            source,
        })?;

        if let Some(v) = file.mint_delay_ms {
            self.mint_delay_ms = v;
        }
        if let Some(v) = file.analyze_delay_ms {
            self.analyze_delay_ms = v;
        }
        if let Some(v) = file.idle_spin_speed {
            self.idle_spin_speed = v;
        }
        if let Some(v) = file.spin_friction {
            self.spin_friction = v;
        }
        if let Some(v) = file.drag_sensitivity {
            self.drag_sensitivity = v;
        }
        if let Some(v) = file.max_fling_speed {
            self.max_fling_speed = v;
        }
        if let Some(v) = file.frame_interval_ms {
            self.frame_interval_ms = v;
        }
        if let Some(v) = file.default_spin_frames {
            self.default_spin_frames = v;
        }
        if let Some(v) = file.log_level {
            self.log_level = v;
        }
        Ok(self)
    }

    // --- Convenience Methods ---

    pub fn mint_delay(&self) -> Duration {
        Duration::from_millis(self.mint_delay_ms)
    }

    pub fn analyze_delay(&self) -> Duration {
        Duration::from_millis(self.analyze_delay_ms)
    }

    /// Carousel physics parameters; out-of-range values are clamped by the model
    pub fn carousel_tuning(&self) -> CarouselTuning {
        CarouselTuning {
            base_speed: self.idle_spin_speed,
            friction: self.spin_friction,
            drag_sensitivity: self.drag_sensitivity,
            max_fling: self.max_fling_speed,
            ..CarouselTuning::default()
        }
    }

    pub fn is_debug(&self) -> bool {
        matches!(self.log_level.to_lowercase().as_str(), "debug" | "trace")
    }
}

// Global config instance - loaded once at startup
pub static CONFIG: Lazy<CredzConfig> = Lazy::new(CredzConfig::from_env);

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_defaults() {
        let config = CredzConfig::default();
        assert_eq!(config.mint_delay_ms, 800);
        assert_eq!(config.analyze_delay_ms, 1200);
        assert_eq!(config.log_level, "info");
        assert!(!config.is_debug());
    }

    #[test]
    fn test_convenience_methods() {
        let config = CredzConfig::default();
        assert_eq!(config.mint_delay(), Duration::from_millis(800));
        assert_eq!(config.analyze_delay(), Duration::from_millis(1200));

        let tuning = config.carousel_tuning();
        assert_eq!(tuning.base_speed, 0.2);
        assert_eq!(tuning.friction, 0.97);
        assert_eq!(tuning.max_fling, 12.0);
    }

    #[test]
    fn test_merge_file_overrides_only_present_keys() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "mint_delay_ms = 5\nlog_level = \"debug\"").unwrap();

        let config = CredzConfig::default().merge_file(file.path()).unwrap();
        assert_eq!(config.mint_delay_ms, 5);
        assert_eq!(config.analyze_delay_ms, 1200);
        assert!(config.is_debug());
    }

    #[test]
    fn test_merge_file_reports_parse_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "mint_delay_ms = \"soon\"").unwrap();

        let err = CredzConfig::default().merge_file(file.path()).unwrap_err();
        assert!(matches!(err, CredzError::ConfigParse { .. }));
    }

    #[test]
    fn test_merge_missing_file() {
        let err = CredzConfig::default()
            .merge_file("/nonexistent/zen-credz.toml")
            .unwrap_err();
        assert!(matches!(err, CredzError::ConfigRead { .. }));
    }
}
