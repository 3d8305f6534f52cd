//! Configuration handling for sprintdoc
//!
//! Configuration is stored in `sprintdoc.toml` (project, found by walking up
//! from the current directory) and `~/.config/sprintdoc/config.toml` (global).
//! Command-line flags take precedence over both.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Name of the project configuration file
pub const PROJECT_CONFIG_FILE: &str = "sprintdoc.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Project-level configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ProjectConfig {
    /// Directory holding `sprint.md`, `story.md` and `subtask.md`
    pub templates_dir: Option<PathBuf>,

    /// Directory generated files are written to
    pub output_dir: PathBuf,

    /// Prefix for generated file names
    pub file_prefix: Option<String>,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            templates_dir: None,
            output_dir: PathBuf::from("sprint-files"),
            file_prefix: None,
        }
    }
}

/// Global user configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GlobalConfig {
    /// Default output format (text or json)
    pub default_format: OutputFormat,
}

/// Output format for commands
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Combined configuration (global + project)
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub project: ProjectConfig,
    pub global: GlobalConfig,
    /// Directory containing the project config file, if one was found
    pub project_root: Option<PathBuf>,
}

impl Config {
    /// Loads configuration from the default locations
    pub fn load() -> Result<Self> {
        let start = std::env::current_dir().context("Failed to determine current directory")?;
        Self::load_from(&start)
    }

    /// Loads configuration, searching for the project file from `start` upward
    pub fn load_from(start: &Path) -> Result<Self> {
        let global = Self::load_global()?;

        let (project, project_root) = match Self::find_project_root(start) {
            Some(root) => (Self::load_project_config(&root)?, Some(root)),
            None => (ProjectConfig::default(), None),
        };

        Ok(Self {
            project,
            global,
            project_root,
        })
    }

    /// Returns the global config directory
    pub fn global_config_dir() -> Option<PathBuf> {
        ProjectDirs::from("dev", "sprintdoc", "sprintdoc").map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Loads global configuration
    fn load_global() -> Result<GlobalConfig> {
        let config_dir = match Self::global_config_dir() {
            Some(dir) => dir,
            None => return Ok(GlobalConfig::default()),
        };

        let config_path = config_dir.join("config.toml");
        if !config_path.exists() {
            return Ok(GlobalConfig::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read global config: {}", config_path.display()))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(e.to_string()))
            .context("Failed to parse global config")
    }

    /// Loads project configuration from a specific root
    pub fn load_project_config(project_root: &Path) -> Result<ProjectConfig> {
        let config_path = project_root.join(PROJECT_CONFIG_FILE);

        if !config_path.exists() {
            return Ok(ProjectConfig::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read project config: {}", config_path.display()))?;

        let mut config: ProjectConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(e.to_string()))
            .context("Failed to parse project config")?;

        // Relative paths are relative to the config file
        if let Some(dir) = config.templates_dir.take() {
            config.templates_dir = Some(project_root.join(dir));
        }
        config.output_dir = project_root.join(&config.output_dir);

        Ok(config)
    }

    /// Finds the nearest directory containing `sprintdoc.toml`
    pub fn find_project_root(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();

        loop {
            if current.join(PROJECT_CONFIG_FILE).is_file() {
                return Some(current);
            }

            if !current.pop() {
                return None;
            }
        }
    }

    /// Returns the templates directory, preferring the command-line value
    pub fn templates_dir(&self, flag: Option<PathBuf>) -> Option<PathBuf> {
        flag.or_else(|| self.project.templates_dir.clone())
    }

    /// Returns the output directory, preferring the command-line value
    pub fn output_dir(&self, flag: Option<PathBuf>) -> PathBuf {
        flag.unwrap_or_else(|| self.project.output_dir.clone())
    }

    /// Returns the file name prefix, preferring the command-line value
    pub fn file_prefix(&self, flag: Option<String>) -> Option<String> {
        flag.or_else(|| self.project.file_prefix.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config() {
        let config = Config::default();

        assert_eq!(config.project.output_dir, PathBuf::from("sprint-files"));
        assert_eq!(config.project.templates_dir, None);
        assert_eq!(config.global.default_format, OutputFormat::Text);
    }

    #[test]
    fn parse_project_config() {
        let toml = r#"
templates_dir = "templates"
file_prefix = "acme-"
"#;

        let config: ProjectConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.templates_dir, Some(PathBuf::from("templates")));
        assert_eq!(config.file_prefix.as_deref(), Some("acme-"));
        assert_eq!(config.output_dir, PathBuf::from("sprint-files"));
    }

    #[test]
    fn parse_global_config() {
        let config: GlobalConfig = toml::from_str(r#"default_format = "json""#).unwrap();
        assert_eq!(config.default_format, OutputFormat::Json);
    }

    #[test]
    fn project_paths_resolve_against_root() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(PROJECT_CONFIG_FILE),
            "templates_dir = \"tpl\"\noutput_dir = \"out\"\n",
        )
        .unwrap();

        let config = Config::load_project_config(dir.path()).unwrap();
        assert_eq!(config.templates_dir, Some(dir.path().join("tpl")));
        assert_eq!(config.output_dir, dir.path().join("out"));
    }

    #[test]
    fn find_project_root_from_subdirectory() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(PROJECT_CONFIG_FILE), "").unwrap();

        let sub_dir = dir.path().join("sub").join("dir");
        fs::create_dir_all(&sub_dir).unwrap();

        assert_eq!(Config::find_project_root(&sub_dir), Some(dir.path().to_path_buf()));
    }

    #[test]
    fn invalid_project_config() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(PROJECT_CONFIG_FILE), "output_dir = [1, 2]").unwrap();

        let err = Config::load_project_config(dir.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse project config"));
    }

    #[test]
    fn flags_override_project_values() {
        let config = Config {
            project: ProjectConfig {
                templates_dir: Some(PathBuf::from("tpl")),
                output_dir: PathBuf::from("out"),
                file_prefix: Some("cfg-".to_string()),
            },
            ..Config::default()
        };

        assert_eq!(config.templates_dir(None), Some(PathBuf::from("tpl")));
        assert_eq!(config.templates_dir(Some(PathBuf::from("cli"))), Some(PathBuf::from("cli")));
        assert_eq!(config.output_dir(None), PathBuf::from("out"));
        assert_eq!(config.file_prefix(Some("cli-".to_string())).as_deref(), Some("cli-"));
    }
}
