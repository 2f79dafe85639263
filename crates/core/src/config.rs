use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use directories::{BaseDirs, ProjectDirs};
use once_cell::sync::Lazy;
use reqwest::Url;

pub static DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";
static DEFAULT_LOG_NAME: &str = "lifeos.log";
static ENV_API_BASE: &str = "LIFEOS_API_BASE";
static ENV_DATA_DIR: &str = "LIFEOS_DATA_DIR";

static PROJECT_DIRS: Lazy<Option<ProjectDirs>> =
    Lazy::new(|| ProjectDirs::from("dev", "lifeos", "lifeos"));

#[derive(Debug, Clone)]
pub struct AppConfig {
    api_base: Url,
    data_dir: PathBuf,
    log_path: PathBuf,
}

impl AppConfig {
    /// Construct [`AppConfig`] by resolving the API base and data directory from the
    /// provided overrides, environment variables, and defaults.
    pub fn discover(
        api_base_override: Option<String>,
        data_dir_override: Option<PathBuf>,
    ) -> Result<Self> {
        let api_base = resolve_api_base(api_base_override, env::var(ENV_API_BASE).ok())?;
        let data_dir = resolve_data_dir(data_dir_override)?;
        if !data_dir.exists() {
            fs::create_dir_all(&data_dir).with_context(|| {
                format!("Failed to create data directory at {}", data_dir.display())
            })?;
        }
        Ok(Self::new(api_base, data_dir))
    }

    pub fn new(api_base: Url, data_dir: PathBuf) -> Self {
        let log_path = data_dir.join(DEFAULT_LOG_NAME);
        Self {
            api_base,
            data_dir,
            log_path,
        }
    }

    pub fn api_base(&self) -> &Url {
        &self.api_base
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn log_path(&self) -> &Path {
        &self.log_path
    }
}

/// Pick the API base: explicit override first, then the environment, then the default.
pub fn resolve_api_base(override_value: Option<String>, env_value: Option<String>) -> Result<Url> {
    let raw = override_value
        .or(env_value)
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    parse_api_base(&raw)
}

pub fn parse_api_base(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim())
        .with_context(|| format!("Invalid API base URL '{}'", raw.trim()))?;
    if !matches!(url.scheme(), "http" | "https") {
        bail!("API base must use http or https, got '{}'", url.scheme());
    }
    if url.cannot_be_a_base() {
        bail!("API base '{}' cannot carry a path", url);
    }
    Ok(url)
}

fn resolve_data_dir(data_dir_override: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = data_dir_override {
        return Ok(dir);
    }

    if let Ok(env_dir) = env::var(ENV_DATA_DIR) {
        return Ok(PathBuf::from(env_dir));
    }

    if cfg!(debug_assertions) {
        let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        return Ok(manifest_dir.join("..").join("tmp").join("dev-lifeos"));
    }

    if let Some(project) = &*PROJECT_DIRS {
        return Ok(project.data_dir().to_path_buf());
    }

    if let Some(base) = BaseDirs::new() {
        return Ok(base.home_dir().join(".lifeos"));
    }

    Ok(env::current_dir()?.join(".lifeos"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use tempfile::TempDir;

    #[rstest]
    #[case(Some("http://api.local:9000"), Some("http://env:1"), "http://api.local:9000/")]
    #[case(None, Some("https://env.example/lifeos/"), "https://env.example/lifeos/")]
    #[case(None, None, "http://127.0.0.1:8000/")]
    #[case(Some("  "), None, "http://127.0.0.1:8000/")]
    fn api_base_prefers_override_then_env(
        #[case] override_value: Option<&str>,
        #[case] env_value: Option<&str>,
        #[case] expected: &str,
    ) {
        let url = resolve_api_base(
            override_value.map(str::to_string),
            env_value.map(str::to_string),
        )
        .expect("resolve");
        assert_eq!(url.as_str(), expected);
    }

    #[rstest]
    #[case("ftp://files.example")]
    #[case("mailto:someone@example.com")]
    #[case("not a url")]
    fn api_base_rejects_unusable_urls(#[case] raw: &str) {
        assert!(parse_api_base(raw).is_err());
    }

    #[test]
    fn discover_creates_data_dir_and_log_path() {
        let temp = TempDir::new().expect("temp dir");
        let data_dir = temp.path().join("nested").join("lifeos");

        let config = AppConfig::discover(Some("http://localhost:8000".into()), Some(data_dir.clone()))
            .expect("config");

        assert!(data_dir.exists());
        assert_eq!(config.data_dir(), data_dir.as_path());
        assert_eq!(config.log_path(), data_dir.join("lifeos.log").as_path());
        assert_eq!(config.api_base().as_str(), "http://localhost:8000/");
    }
}
