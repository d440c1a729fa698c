use crate::error::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "quizzes.json";
const DEFAULT_LISTEN: &str = "127.0.0.1:3030";
const HOME_ENV: &str = "QUIZZ_HOME";

/// Configuration for quizz, stored in `<home>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuizzConfig {
    /// Quiz file; relative paths are resolved against the home directory
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Address `quizz serve` listens on
    #[serde(default = "default_listen")]
    pub listen: String,

    /// Colorize output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Write the default quizzes when the quiz file does not exist yet
    #[serde(default = "default_true")]
    pub seed: bool,

    /// Names shown by `credits`
    #[serde(default = "default_authors")]
    pub authors: Vec<String>,
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

fn default_listen() -> String {
    DEFAULT_LISTEN.to_string()
}

fn default_true() -> bool {
    true
}

fn default_authors() -> Vec<String> {
    vec!["The quizz developers".to_string()]
}

impl Default for QuizzConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            listen: default_listen(),
            color: true,
            seed: true,
            authors: default_authors(),
        }
    }
}

impl QuizzConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    /// The quiz file, resolved against `home`
    pub fn data_path(&self, home: &Path) -> PathBuf {
        if self.data_file.is_absolute() {
            self.data_file.clone()
        } else {
            home.join(&self.data_file)
        }
    }
}

/// `$QUIZZ_HOME`, or the platform data directory.
pub fn home_dir() -> Option<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(home));
    }
    ProjectDirs::from("com", "quizz", "quizz").map(|dirs| dirs.data_dir().to_path_buf())
}
