//! Config file loading and runtime settings.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::ConfigError;
use crate::models::Config;

/// Tag used to find `$HOME/.ripe-atlas/config.toml`.
pub const TAG: &str = "ripe-atlas";

/// Default base URL of the Atlas REST API.
pub const API: &str = "http://atlas.ripe.net/api/v1";

const CONFIG_FILE: &str = "config.toml";
const CONFIG_EXT: &str = ".toml";

/// Runtime settings from environment variables.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Tag or explicit `.toml` path handed to [`load_config`].
    pub config: String,
    /// Base URL of the Atlas API.
    pub api_url: String,
}

impl Settings {
    /// Creates Settings from environment variables with defaults.
    pub fn from_env() -> Self {
        Self {
            config: env::var("RIPE_ATLAS_CONFIG").unwrap_or_else(|_| TAG.into()),
            api_url: env::var("RIPE_ATLAS_API").unwrap_or_else(|_| API.into()),
        }
    }
}

/// Turns a tag or a path into the config file location.
///
/// Anything ending in `.toml` is taken as a path. Anything else is a tag
/// and maps to `<home>/.<tag>/config.toml`.
pub fn config_path(file: &str, home: Option<&Path>) -> Result<PathBuf, ConfigError> {
    if file.ends_with(CONFIG_EXT) {
        return Ok(PathBuf::from(file));
    }
    let home = home.ok_or_else(|| ConfigError::NoHome(file.to_string()))?;
    Ok(home.join(format!(".{}", file)).join(CONFIG_FILE))
}

/// Loads the config for `file`, resolving tags against `$HOME`.
pub fn load_config(file: &str) -> Result<Config, ConfigError> {
    let home = env::var_os("HOME").map(PathBuf::from);
    load_config_from(file, home.as_deref())
}

/// Same as [`load_config`] with an explicit home directory.
pub fn load_config_from(file: &str, home: Option<&Path>) -> Result<Config, ConfigError> {
    let path = config_path(file, home)?;
    debug!("Loading config from {}", path.display());

    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(source) => return Err(ConfigError::Read { path, source }),
    };

    toml::from_str(&content).map_err(|source| ConfigError::Parse { path, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn home_with_config(tag: &str, content: &str) -> TempDir {
        let home = TempDir::new().unwrap();
        let dir = home.path().join(format!(".{}", tag));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(CONFIG_FILE), content).unwrap();
        home
    }

    #[test]
    fn test_tag_resolves_under_home() {
        let path = config_path("foo", Some(Path::new("/tmp/home"))).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/home/.foo/config.toml"));
    }

    #[test]
    fn test_toml_path_used_verbatim() {
        let path = config_path("/etc/custom/config.toml", Some(Path::new("/tmp/home"))).unwrap();
        assert_eq!(path, PathBuf::from("/etc/custom/config.toml"));

        let no_home = config_path("/etc/custom/config.toml", None).unwrap();
        assert_eq!(no_home, PathBuf::from("/etc/custom/config.toml"));
    }

    #[test]
    fn test_tag_without_home_fails() {
        let err = config_path("foo", None).unwrap_err();
        assert!(matches!(err, ConfigError::NoHome(ref tag) if tag == "foo"));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let home = TempDir::new().unwrap();
        let err = load_config_from("foo", Some(home.path())).unwrap_err();
        let expected = home.path().join(".foo").join("config.toml");
        match &err {
            ConfigError::Read { path, .. } => assert_eq!(path, &expected),
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(
            err.to_string(),
            format!("Can not read {} file.", expected.display())
        );
    }

    #[test]
    fn test_loads_id_from_tag() {
        let home = home_with_config("foo", "Id = \"123\"\n");
        let config = load_config_from("foo", Some(home.path())).unwrap();
        assert_eq!(config.id, "123");
    }

    #[test]
    fn test_loads_explicit_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(&path, "Id = \"789\"\n").unwrap();

        let config = load_config_from(path.to_str().unwrap(), None).unwrap();
        assert_eq!(config.id, "789");
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let home = home_with_config("foo", "Id = \"unterminated\n");
        let err = load_config_from("foo", Some(home.path())).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().starts_with("Can not parse "));
    }

    #[test]
    fn test_empty_file_gives_empty_id() {
        let home = home_with_config("foo", "");
        let config = load_config_from("foo", Some(home.path())).unwrap();
        assert_eq!(config, Config::default());
    }
}
