//! Game configuration.
//!
//! Values are layered, highest priority first: command-line flag,
//! `NXN_TICTACTOE_DIMENSION` environment variable, TOML config file,
//! built-in default.

use derive_getters::Getters;
use derive_more::{Display, Error};
use nxn_tictactoe_core::{Dimension, GameController, MoveOrder};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Environment variable overriding the board dimension.
pub const DIMENSION_ENV: &str = "NXN_TICTACTOE_DIMENSION";

/// Settings for a new game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board dimension N (the board has N×N cells).
    #[serde(default = "default_dimension")]
    dimension: usize,

    /// Initial move-list order.
    #[serde(default)]
    move_order: MoveOrder,
}

#[instrument]
fn default_dimension() -> usize {
    Dimension::CLASSIC.get()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            dimension: default_dimension(),
            move_order: MoveOrder::default(),
        }
    }
}

impl GameConfig {
    /// Creates a configuration for an N×N board.
    #[instrument]
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            ..Self::default()
        }
    }

    /// Sets the initial move-list order.
    pub fn with_move_order(mut self, move_order: MoveOrder) -> Self {
        self.move_order = move_order;
        self
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(dimension = config.dimension, "Config loaded successfully");
        Ok(config)
    }

    /// Resolves the configuration from every source, reading the
    /// environment of the current process.
    #[instrument(skip(file))]
    pub fn load(cli_dimension: Option<usize>, file: Option<&Path>) -> Result<Self, ConfigError> {
        let env_dimension = std::env::var(DIMENSION_ENV).ok();
        Self::layered(file, env_dimension.as_deref(), cli_dimension)
    }

    /// Resolves the configuration from explicit sources.
    ///
    /// Later arguments win over earlier ones.
    #[instrument(skip(file))]
    pub fn layered(
        file: Option<&Path>,
        env_dimension: Option<&str>,
        cli_dimension: Option<usize>,
    ) -> Result<Self, ConfigError> {
        let mut config = match file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        if let Some(raw) = env_dimension {
            config.dimension = raw.trim().parse().map_err(|_| {
                ConfigError::new(format!("{} must be a whole number, got '{}'", DIMENSION_ENV, raw))
            })?;
            debug!(dimension = config.dimension, "Dimension taken from environment");
        }

        if let Some(dimension) = cli_dimension {
            config.dimension = dimension;
            debug!(dimension, "Dimension taken from command line");
        }

        config.board_dimension()?;
        Ok(config)
    }

    /// Returns the validated board dimension.
    pub fn board_dimension(&self) -> Result<Dimension, ConfigError> {
        Dimension::new(self.dimension).map_err(|e| ConfigError::new(e.to_string()))
    }

    /// Starts a game with these settings.
    #[instrument(skip(self), fields(dimension = self.dimension))]
    pub fn controller(&self) -> Result<GameController, ConfigError> {
        let mut controller = GameController::new(self.board_dimension()?);
        if controller.state().move_order() != self.move_order {
            controller.toggle_move_order();
        }
        Ok(controller)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
