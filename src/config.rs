use crate::consts;
use crate::difficulty::Difficulty;
use crate::highscore::JsonHighScoreFile;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub(crate) struct Config {
    /// Gameplay settings
    #[serde(default)]
    pub(crate) game: GameConfig,

    /// Settings about data files
    #[serde(default)]
    pub(crate) files: FileConfig,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("gridsnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read, if the file's contents
    /// could not be deserialized, or if the grid size is out of range.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        Config::parse(&content)
    }

    fn parse(content: &str) -> Result<Config, ConfigError> {
        let config = toml::from_str::<Config>(content)?;
        config.game.validate()?;
        Ok(config)
    }

    /// Return the high score store described by the configuration: the file
    /// given in the configuration or, if that is not set, the default high
    /// score file path.  If `save-high-score` is false, or no path could be
    /// determined, the store is disabled.
    pub(crate) fn high_score_store(&self) -> JsonHighScoreFile {
        if !self.files.save_high_score {
            return JsonHighScoreFile::disabled();
        }
        match self
            .files
            .high_score_file
            .clone()
            .or_else(JsonHighScoreFile::default_path)
        {
            Some(path) => JsonHighScoreFile::new(path),
            None => {
                tracing::warn!("Could not determine high score file path; high score will not be saved");
                JsonHighScoreFile::disabled()
            }
        }
    }
}

#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub(crate) struct GameConfig {
    /// Width & height of the playing field in cells
    pub(crate) grid_size: u16,

    /// Difficulty selected when the program starts
    pub(crate) difficulty: Difficulty,
}

impl GameConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if (consts::MIN_GRID_SIZE..=consts::MAX_GRID_SIZE).contains(&self.grid_size) {
            Ok(())
        } else {
            Err(ConfigError::GridSize(self.grid_size))
        }
    }
}

impl Default for GameConfig {
    fn default() -> GameConfig {
        GameConfig {
            grid_size: consts::DEFAULT_GRID_SIZE,
            difficulty: Difficulty::default(),
        }
    }
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub(crate) struct FileConfig {
    /// Path at which the high score should be stored
    pub(crate) high_score_file: Option<PathBuf>,

    /// Whether to load & save the high score in a file
    pub(crate) save_high_score: bool,

    /// Path to which log messages are appended
    pub(crate) log_file: Option<PathBuf>,
}

impl Default for FileConfig {
    fn default() -> FileConfig {
        FileConfig {
            high_score_file: None,
            save_high_score: true,
            log_file: None,
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
    #[error(
        "grid size {0} is out of range; must be between {min} and {max}",
        min = consts::MIN_GRID_SIZE,
        max = consts::MAX_GRID_SIZE
    )]
    GridSize(u16),
}
