use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Somewhere to keep the best score between runs.
///
/// Neither operation reports failure: a store that can't be read acts as if
/// no high score was ever set, and a failed save is dropped.
pub(crate) trait HighScoreStore {
    fn load(&mut self) -> u32;
    fn save(&mut self, score: u32);
}

/// A high score kept in a JSON file of the form `{"high_score": 120}`
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct JsonHighScoreFile {
    /// `None` if no path could be determined or persistence is disabled
    path: Option<PathBuf>,
}

impl JsonHighScoreFile {
    pub(crate) fn new(path: PathBuf) -> JsonHighScoreFile {
        JsonHighScoreFile { path: Some(path) }
    }

    /// A store that never reads or writes anything
    pub(crate) fn disabled() -> JsonHighScoreFile {
        JsonHighScoreFile { path: None }
    }

    /// Return the default high score file path
    pub(crate) fn default_path() -> Option<PathBuf> {
        dirs::data_local_dir().map(|p| p.join("gridsnake").join("highscore.json"))
    }

    pub(crate) fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn read(path: &Path) -> Result<u32, LoadError> {
        let src = match fs_err::read(path) {
            Ok(src) => src,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(LoadError::read(e)),
        };
        let record = serde_json::from_slice::<HighScoreRecord>(&src).map_err(LoadError::deserialize)?;
        Ok(record.high_score)
    }

    fn write(path: &Path, high_score: u32) -> Result<(), SaveError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs_err::create_dir_all(parent).map_err(SaveError::mkdir)?;
        }
        let mut src =
            serde_json::to_string(&HighScoreRecord { high_score }).map_err(SaveError::serialize)?;
        src.push('\n');
        fs_err::write(path, &src).map_err(SaveError::write)?;
        Ok(())
    }
}

impl HighScoreStore for JsonHighScoreFile {
    fn load(&mut self) -> u32 {
        let Some(path) = self.path.as_deref() else {
            return 0;
        };
        match JsonHighScoreFile::read(path) {
            Ok(score) => {
                tracing::debug!(path = %path.display(), score, "Loaded high score");
                score
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %DisplayChain(&e), "High score unavailable for this session");
                0
            }
        }
    }

    fn save(&mut self, score: u32) {
        let Some(path) = self.path.as_deref() else {
            return;
        };
        match JsonHighScoreFile::write(path, score) {
            Ok(()) => tracing::info!(path = %path.display(), score, "Saved new high score"),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %DisplayChain(&e), "Could not save high score");
            }
        }
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
struct HighScoreRecord {
    high_score: u32,
}

/// Formats an error together with all of its sources, separated by colons
#[derive(Debug)]
struct DisplayChain<'a>(&'a dyn std::error::Error);

impl std::fmt::Display for DisplayChain<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)?;
        let mut source = self.0.source();
        while let Some(src) = source {
            write!(f, ": {src}")?;
            source = src.source();
        }
        Ok(())
    }
}

#[derive(Debug, Error)]
#[error("Failed to save high score to disk")]
pub(crate) struct SaveError(#[source] SaveErrorSource);

impl SaveError {
    fn mkdir(e: std::io::Error) -> Self {
        SaveError(SaveErrorSource::Mkdir(e))
    }

    fn serialize(e: serde_json::Error) -> Self {
        SaveError(SaveErrorSource::Serialize(e))
    }

    fn write(e: std::io::Error) -> Self {
        SaveError(SaveErrorSource::Write(e))
    }
}

#[derive(Debug, Error)]
enum SaveErrorSource {
    #[error("failed to create parent directories")]
    Mkdir(#[source] std::io::Error),
    #[error("failed to serialize high score")]
    Serialize(#[source] serde_json::Error),
    #[error("failed to write high score file")]
    Write(#[source] std::io::Error),
}

#[derive(Debug, Error)]
#[error("Failed to read high score from disk")]
pub(crate) struct LoadError(#[source] LoadErrorSource);

impl LoadError {
    fn read(e: std::io::Error) -> Self {
        LoadError(LoadErrorSource::Read(e))
    }

    fn deserialize(e: serde_json::Error) -> Self {
        LoadError(LoadErrorSource::Deserialize(e))
    }
}

#[derive(Debug, Error)]
enum LoadErrorSource {
    #[error("failed to read high score file")]
    Read(#[source] std::io::Error),
    #[error("failed to deserialize high score")]
    Deserialize(#[source] serde_json::Error),
}

/// A [`HighScoreStore`] held in memory, for tests
#[cfg(test)]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct MemoryStore {
    pub(crate) stored: u32,
    pub(crate) saves: Vec<u32>,
}

#[cfg(test)]
impl HighScoreStore for MemoryStore {
    fn load(&mut self) -> u32 {
        self.stored
    }

    fn save(&mut self, score: u32) {
        self.stored = score;
        self.saves.push(score);
    }
}
