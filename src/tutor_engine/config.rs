use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::tutor_engine::{
    error::ConfigError,
    ledger::{ProgressLedger, DEFAULT_LEDGER_KEY},
    models::Difficulty,
    store::FileStore,
};

/// Tutor settings. Every field has a default, so `{}` is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TutorConfig {
    /// Key the ledger is stored under.
    pub ledger_key: String,
    /// Directory holding `<ledger_key>.json`.
    pub ledger_dir: PathBuf,
    /// Level offered first when the learner has not picked one.
    pub default_difficulty: Difficulty,
}

impl Default for TutorConfig {
    fn default() -> Self {
        TutorConfig {
            ledger_key: DEFAULT_LEDGER_KEY.to_string(),
            ledger_dir: PathBuf::from("."),
            default_difficulty: Difficulty::Easy,
        }
    }
}

impl TutorConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a JSON config file. A missing file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(contents) => Self::from_json_str(&contents),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Read { path: path.to_path_buf(), source }),
        }
    }

    pub fn file_ledger(&self) -> ProgressLedger<FileStore> {
        ProgressLedger::with_key(FileStore::new(&self.ledger_dir), self.ledger_key.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tutor_engine::models::ProblemKind;

    #[test]
    fn empty_object_is_all_defaults() {
        assert_eq!(TutorConfig::from_json_str("{}").unwrap(), TutorConfig::default());
    }

    #[test]
    fn partial_config_overrides_named_fields() {
        let cfg = TutorConfig::from_json_str(
            r#"{ "ledger_key": "learner-7", "default_difficulty": "hard" }"#,
        )
        .unwrap();
        assert_eq!(cfg.ledger_key, "learner-7");
        assert_eq!(cfg.default_difficulty, Difficulty::Hard);
        assert_eq!(cfg.ledger_dir, PathBuf::from("."));
    }

    #[test]
    fn bad_difficulty_in_config_is_rejected() {
        let err = TutorConfig::from_json_str(r#"{ "default_difficulty": "extreme" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = TutorConfig::load(dir.path().join("nope.json")).unwrap();
        assert_eq!(cfg, TutorConfig::default());
    }

    #[test]
    fn file_ledger_persists_under_configured_dir() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = TutorConfig {
            ledger_key: "kid".to_string(),
            ledger_dir: dir.path().to_path_buf(),
            ..TutorConfig::default()
        };
        cfg.file_ledger().record_attempt(ProblemKind::Division, true, 4);

        assert!(dir.path().join("kid.json").exists());
        assert_eq!(cfg.file_ledger().load().total_problems, 1);
    }
}
