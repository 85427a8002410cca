//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`HW_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::{Path, PathBuf};

use hyperwire_render::controls::{DEFAULT_FREQUENCIES, DEFAULT_INTERVAL_MS, DEFAULT_TICK_STEP};
use hyperwire_render::RotationSliders;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Animation configuration
    #[serde(default)]
    pub animation: AnimationConfig,
    /// Initial slider positions
    #[serde(default)]
    pub rotation: RotationConfig,
    /// SVG output configuration
    #[serde(default)]
    pub output: OutputConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`HW_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // HW_OUTPUT__DIRECTORY=frames -> output.directory = "frames"
        figment = figment.merge(Env::prefixed("HW_").split("__"));

        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the animation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.output.width == 0 || self.output.height == 0 {
            return Err(ConfigError::new("output.width and output.height must be non-zero"));
        }
        if !self.animation.tick_step.is_finite() {
            return Err(ConfigError::new("animation.tick_step must be finite"));
        }
        Ok(())
    }
}

/// Animation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Drive the sliders with the sine-wave rotator after the first frame
    pub auto_rotate: bool,
    /// Number of frames to render
    pub frames: u32,
    /// Tick advance per frame
    pub tick_step: f64,
    /// WX, WY, WZ frequencies
    pub frequencies: [f64; 3],
    /// Time between frames in milliseconds
    pub interval_ms: u64,
    /// Sleep `interval_ms` between frames
    pub realtime: bool,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            auto_rotate: true,
            frames: 120,
            tick_step: DEFAULT_TICK_STEP,
            frequencies: DEFAULT_FREQUENCIES,
            interval_ms: DEFAULT_INTERVAL_MS,
            realtime: false,
        }
    }
}

/// Initial slider positions in degrees
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RotationConfig {
    pub wx: f64,
    pub wy: f64,
    pub wz: f64,
}

impl RotationConfig {
    pub fn to_sliders(&self) -> RotationSliders {
        RotationSliders::new(self.wx, self.wy, self.wz)
    }
}

/// SVG output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory frames are written to
    pub directory: PathBuf,
    /// File name prefix; frames are named `<prefix>_0000.svg`
    pub file_prefix: String,
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("frames"),
            file_prefix: "hypercube".to_string(),
            width: 600,
            height: 600,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl ConfigError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
