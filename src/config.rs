use crate::common::ApplicationResult;
use crate::domains::route_map::LoaderOptions;
use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub map: MapConfig,
    pub scenario: ScenarioConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    /// Title of a built-in map, or a map file name under the data directory.
    pub source: String,
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    #[serde(default)]
    pub strict_routes: bool,
}

impl MapConfig {
    pub fn loader_options(&self) -> LoaderOptions {
        LoaderOptions {
            strict_routes: self.strict_routes,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioConfig {
    pub start: String,
    pub goal: String,
    pub strategy: String,
    pub heuristic: String,
    #[serde(default = "default_max_steps")]
    pub max_steps: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    #[serde(default)]
    pub file: Option<String>,
    /// Print step snapshots as JSON lines instead of text.
    #[serde(default)]
    pub json: bool,
}

fn default_max_steps() -> usize {
    1000
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
            json: false,
        }
    }
}

impl Config {
    pub async fn from_file<P: AsRef<Path>>(path: P) -> ApplicationResult<Self> {
        let content = tokio::fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ApplicationResult<()> {
        if self.scenario.max_steps == 0 {
            return Err(anyhow!("scenario.max_steps must be at least 1").into());
        }
        if self.map.source.trim().is_empty() {
            return Err(anyhow!("map.source must name a built-in map or a map file").into());
        }
        Ok(())
    }

    /// Like `from_file`, but a missing file yields the defaults. The flag
    /// tells whether the file was actually read.
    pub async fn load_or_default<P: AsRef<Path>>(path: P) -> ApplicationResult<(Self, bool)> {
        if !tokio::fs::try_exists(path.as_ref()).await? {
            return Ok((Self::default(), false));
        }
        Ok((Self::from_file(path).await?, true))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            map: MapConfig {
                source: "Romania".to_string(),
                data_dir: None,
                strict_routes: false,
            },
            scenario: ScenarioConfig {
                start: "Arad".to_string(),
                goal: "Bucharest".to_string(),
                strategy: "a-star".to_string(),
                heuristic: "straight-line".to_string(),
                max_steps: default_max_steps(),
            },
            logging: LoggingConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logging_section_is_optional() {
        let config: Config = toml::from_str(
            r#"
            [map]
            source = "tiny.txt"

            [scenario]
            start = "A"
            goal = "C"
            strategy = "uniform-cost"
            heuristic = "zero"
            "#,
        )
        .unwrap();

        assert_eq!(config.map.source, "tiny.txt");
        assert!(!config.map.loader_options().strict_routes);
        assert_eq!(config.scenario.max_steps, 1000);
        assert_eq!(config.logging.level, "info");
    }

    #[tokio::test]
    async fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let (config, from_file) = Config::load_or_default(path).await.unwrap();

        assert!(!from_file);
        assert_eq!(config.map.source, "Romania");
        assert_eq!(config.scenario.strategy, "a-star");
    }

    #[tokio::test]
    async fn reads_file_when_present() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        tokio::fs::write(
            &path,
            r#"
            [map]
            source = "islands.txt"
            strict_routes = true

            [scenario]
            start = "North"
            goal = "Lighthouse"
            strategy = "bfs"
            heuristic = "zero"
            max_steps = 5
            "#,
        )
        .await
        .unwrap();

        let (config, from_file) = Config::load_or_default(&path).await.unwrap();
        assert!(from_file);
        assert!(config.map.strict_routes);
        assert_eq!(config.scenario.max_steps, 5);
    }

    #[tokio::test]
    async fn malformed_file_is_a_format_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        tokio::fs::write(&path, "[map\n").await.unwrap();

        let result = Config::from_file(&path).await;
        assert!(matches!(result, Err(crate::common::ApplicationError::ConfigurationFormat(_))));
    }

    #[test]
    fn zero_step_limit_is_rejected() {
        let mut config = Config::default();
        config.scenario.max_steps = 0;
        assert!(matches!(
            config.validate(),
            Err(crate::common::ApplicationError::Configuration(_))
        ));
        assert!(Config::default().validate().is_ok());
    }
}
