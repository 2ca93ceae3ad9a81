//! Application configuration.
//!
//! The configuration is loaded from a JSON file, by default
//! `$XDG_CONFIG_HOME/x3/config.json`, or the path given with
//! `--config <path>`.  The top-level schema is split into sections so it
//! can grow without breaking existing files.
//!
//! # Example
//!
//! ```json
//! {
//!   "resolver": { "match_policy": "exact-then-substring" },
//!   "ipc": { "socket_path": "/run/user/1000/i3/ipc-socket.1234" }
//! }
//! ```

use crate::resolver::MatchPolicy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level configuration.
///
/// Every field is optional — a minimal `{}` file is valid and all sections
/// fall back to their compiled-in defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// How workspace names given on the command line are matched.
    #[serde(default)]
    pub resolver: ResolverConfig,

    /// Window manager connection settings.
    #[serde(default)]
    pub ipc: IpcConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// `"substring"` (default) or `"exact-then-substring"`.
    pub match_policy: MatchPolicy,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IpcConfig {
    /// Explicit IPC socket.  When unset the socket is discovered from the
    /// environment.
    pub socket_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a JSON file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError(format!("failed to read {}: {}", path.display(), e)))?;
        let config: Self = serde_json::from_str(&contents)
            .map_err(|e| ConfigError(format!("failed to parse {}: {}", path.display(), e)))?;
        Ok(config)
    }
}

/// Error from loading or parsing a configuration file.
#[derive(Debug, thiserror::Error)]
#[error("config error: {0}")]
pub struct ConfigError(String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_full_config() {
        let json = r#"{
            "resolver": { "match_policy": "exact-then-substring" },
            "ipc": { "socket_path": "/tmp/i3.sock" }
        }"#;
        let cfg: Config = serde_json::from_str(json).unwrap();
        assert_eq!(cfg.resolver.match_policy, MatchPolicy::ExactThenSubstring);
        assert_eq!(cfg.ipc.socket_path, Some(PathBuf::from("/tmp/i3.sock")));
    }

    #[test]
    fn deserialize_empty_uses_defaults() {
        let cfg: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg.resolver.match_policy, MatchPolicy::Substring);
        assert_eq!(cfg.ipc.socket_path, None);
    }

    #[test]
    fn deserialize_empty_sections() {
        let cfg: Config = serde_json::from_str(r#"{ "resolver": {}, "ipc": {} }"#).unwrap();
        assert_eq!(cfg.resolver.match_policy, MatchPolicy::default());
    }

    #[test]
    fn unknown_policy_rejected() {
        let json = r#"{ "resolver": { "match_policy": "regex" } }"#;
        assert!(serde_json::from_str::<Config>(json).is_err());
    }

    #[test]
    fn unknown_top_level_keys_ignored() {
        let json = r#"{ "resolver": {}, "future_section": { "key": 42 } }"#;
        // Should not fail — unknown keys are silently ignored.
        let _cfg: Config = serde_json::from_str(json).unwrap();
    }

    #[test]
    fn load_missing_file_is_error() {
        let path = std::env::temp_dir().join(format!("x3-missing-{}.json", std::process::id()));
        let err = Config::load(&path).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }

    #[test]
    fn load_from_disk() {
        let path = std::env::temp_dir().join(format!("x3-config-{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "ipc": { "socket_path": "/tmp/sway.sock" } }"#).unwrap();
        let cfg = Config::load(&path).unwrap();
        assert_eq!(cfg.ipc.socket_path.as_deref(), Some(Path::new("/tmp/sway.sock")));
        let _ = std::fs::remove_file(&path);
    }
}
