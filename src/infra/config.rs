use crate::domain::GroupConfiguration;
use crate::error::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_SETTINGS_TOML_NAME: &str = "stackctl.toml";
pub const DEFAULT_GROUPS_FILE_NAME: &str = "container-groups.yml";
pub const DEFAULT_COMPOSE_FILE_NAME: &str = "docker-compose.yml";
pub const DEFAULT_COMPOSE_BIN: &str = "docker";

fn home_dir() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/root"))
}

pub fn default_config_dir() -> PathBuf {
    home_dir().join(".config/stackctl")
}

pub fn default_compose_file() -> PathBuf {
    home_dir().join(".stackctl").join(DEFAULT_COMPOSE_FILE_NAME)
}

/// The groups file lives next to the compose file unless configured otherwise.
pub fn groups_path_for(compose_file: &Path) -> PathBuf {
    compose_file
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join(DEFAULT_GROUPS_FILE_NAME)
}

/// Expands a leading `~` the way a shell would.
pub fn expand_path(path: &Path) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path.to_string_lossy().as_ref()).into_owned())
}

#[derive(Deserialize, Debug, Default)]
pub struct ComposeSection {
    pub file: Option<PathBuf>,
    pub bin: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
pub struct GroupsSection {
    pub file: Option<PathBuf>,
}

/// Shape of `stackctl.toml`.
#[derive(Deserialize, Debug, Default)]
pub struct SettingsFile {
    #[serde(default)]
    pub compose: ComposeSection,
    #[serde(default)]
    pub groups: GroupsSection,
}

/// Values passed on the command line or through the environment.
#[derive(Debug, Default, Clone)]
pub struct SettingsOverrides {
    pub compose_file: Option<PathBuf>,
    pub groups_file: Option<PathBuf>,
}

/// Where the compose project lives and how to drive it.
///
/// Built once in `main` and handed to every component, so tests can point
/// everything at a temp directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub compose_file: PathBuf,
    pub groups_file: PathBuf,
    pub compose_bin: String,
}

impl Settings {
    /// Settings for a compose file with everything else defaulted.
    pub fn for_compose_file(compose_file: impl Into<PathBuf>) -> Self {
        let compose_file = compose_file.into();
        Self {
            groups_file: groups_path_for(&compose_file),
            compose_file,
            compose_bin: DEFAULT_COMPOSE_BIN.to_string(),
        }
    }

    /// Layers defaults, `stackctl.toml` in `config_dir` and overrides, in that order.
    pub fn load(config_dir: &Path, overrides: SettingsOverrides) -> Result<Self, ConfigError> {
        let file = load_settings_file(&config_dir.join(DEFAULT_SETTINGS_TOML_NAME))?;
        Ok(Self::layer(file, overrides))
    }

    fn layer(file: SettingsFile, overrides: SettingsOverrides) -> Self {
        let compose_file = overrides
            .compose_file
            .or(file.compose.file)
            .map(|p| expand_path(&p))
            .unwrap_or_else(default_compose_file);

        let groups_file = overrides
            .groups_file
            .or(file.groups.file)
            .map(|p| expand_path(&p))
            .unwrap_or_else(|| groups_path_for(&compose_file));

        let compose_bin = file
            .compose
            .bin
            .filter(|bin| !bin.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_COMPOSE_BIN.to_string());

        Self {
            compose_file,
            groups_file,
            compose_bin,
        }
    }
}

fn load_settings_file(path: &Path) -> Result<SettingsFile, ConfigError> {
    if !path.exists() {
        debug!("no settings file at {:?}, using defaults", path);
        return Ok(SettingsFile::default());
    }

    let content = fs::read_to_string(path).map_err(|source| ConfigError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    toml::from_str(&content).map_err(|source| ConfigError::Malformed {
        path: path.to_path_buf(),
        source: Box::new(source),
    })
}

/// Reads and parses the group configuration. No semantic checks are made.
pub fn load_groups(path: &Path) -> Result<GroupConfiguration, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let groups = parse_groups(&content, path)?;
    debug!("loaded {} group(s) from {:?}", groups.groups.len(), path);
    Ok(groups)
}

fn parse_groups(content: &str, path: &Path) -> Result<GroupConfiguration, ConfigError> {
    if content.trim().is_empty() {
        return Ok(GroupConfiguration::default());
    }

    serde_yml::from_str(content).map_err(|source| ConfigError::Malformed {
        path: path.to_path_buf(),
        source: Box::new(source),
    })
}
