//! Simulation configuration resource.
//!
//! Settings are loaded from an INI file. Every value has a safe default, so a
//! missing file or key leaves the simulation runnable.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 600
//! height = 600
//! target_fps = 60
//! title = Custom Hit Boxes
//!
//! [player]
//! speed = 5
//!
//! [world]
//! clamp_to_bounds = true
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

use crate::components::rect::Rect;
use crate::error::SimError;

/// Default safe values for startup
const DEFAULT_WORLD_WIDTH: u32 = 600;
const DEFAULT_WORLD_HEIGHT: u32 = 600;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_TITLE: &str = "Custom Hit Boxes";
const DEFAULT_PLAYER_SPEED: f32 = 5.0;
const DEFAULT_CLAMP_TO_BOUNDS: bool = true;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// World (and window) width in pixels.
    pub world_width: u32,
    /// World (and window) height in pixels.
    pub world_height: u32,
    /// Tick rate the host loop aims for.
    pub target_fps: u32,
    /// Window title for hosts that open one.
    pub title: String,
    /// Per-tick speed given to control bindings.
    pub player_speed: f32,
    /// Keep movers' hit boxes inside the world rectangle.
    pub clamp_to_bounds: bool,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            world_width: DEFAULT_WORLD_WIDTH,
            world_height: DEFAULT_WORLD_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            title: DEFAULT_TITLE.to_string(),
            player_speed: DEFAULT_PLAYER_SPEED,
            clamp_to_bounds: DEFAULT_CLAMP_TO_BOUNDS,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    pub fn load_from_file(&mut self) -> Result<(), SimError> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| SimError::Config(format!("failed to load config file: {e}")))?;
        self.apply_ini(&config)?;

        info!(
            "Loaded config: {}x{} world, fps={}, speed={}, clamp={}",
            self.world_width,
            self.world_height,
            self.target_fps,
            self.player_speed,
            self.clamp_to_bounds
        );

        Ok(())
    }

    /// Load configuration from INI text instead of a file.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), SimError> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| SimError::Config(format!("failed to parse config: {e}")))?;
        self.apply_ini(&config)
    }

    fn apply_ini(&mut self, config: &Ini) -> Result<(), SimError> {
        // [window] section
        if let Some(width) = get_u32(config, "window", "width")? {
            self.world_width = width;
        }
        if let Some(height) = get_u32(config, "window", "height")? {
            self.world_height = height;
        }
        if let Some(fps) = get_u32(config, "window", "target_fps")? {
            self.target_fps = fps;
        }
        if let Some(title) = config.get("window", "title") {
            self.title = title;
        }

        // [player] section
        if let Some(speed) = config.getfloat("player", "speed").map_err(SimError::Config)? {
            if !speed.is_finite() || speed < 0.0 {
                return Err(SimError::Config(format!("invalid player speed: {speed}")));
            }
            self.player_speed = speed as f32;
        }

        // [world] section
        if let Some(clamp) = config
            .getbool("world", "clamp_to_bounds")
            .map_err(SimError::Config)?
        {
            self.clamp_to_bounds = clamp;
        }

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), SimError> {
        let mut config = Ini::new();

        // [window] section
        config.set("window", "width", Some(self.world_width.to_string()));
        config.set("window", "height", Some(self.world_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));
        config.set("window", "title", Some(self.title.clone()));

        // [player] section
        config.set("player", "speed", Some(self.player_speed.to_string()));

        // [world] section
        config.set(
            "world",
            "clamp_to_bounds",
            Some(self.clamp_to_bounds.to_string()),
        );

        config
            .write(&self.config_path)
            .map_err(|e| SimError::Config(format!("failed to save config file: {e}")))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// World rectangle used by the bounds clamp.
    pub fn world_bounds(&self) -> Rect {
        Rect::new(
            0.0,
            0.0,
            self.world_width as f32,
            self.world_height as f32,
        )
    }
}

fn get_u32(config: &Ini, section: &str, key: &str) -> Result<Option<u32>, SimError> {
    config
        .getuint(section, key)
        .map_err(SimError::Config)?
        .map(|value| {
            u32::try_from(value)
                .map_err(|_| SimError::Config(format!("[{section}] {key} out of range: {value}")))
        })
        .transpose()
}
