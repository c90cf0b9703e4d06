//! Loading `~/.merge/config.yaml`.
//!
//! ```yaml
//! gitlab:
//!   - api: https://gitlab.example.com/api/v4
//!     token: glpat-xxxx
//! slack:
//!   webhook: https://hooks.example.com/services/xxx
//!   messages:
//!     - "Merge please!"
//! mr_picker_count: 5
//! ```

use crate::error::{Error, Result};
use crate::types::Upstream;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use url::Url;

/// Directory under `$HOME` holding the config file.
const CONFIG_DIR: &str = ".merge";

/// Config file name.
const CONFIG_FILE: &str = "config.yaml";

/// Picker size when `mr_picker_count` is missing or not positive.
pub const DEFAULT_PICKER_LIMIT: usize = 5;

/// Validated configuration for a single run
#[derive(Debug, Clone)]
pub struct Config {
    /// GitLab endpoints to query
    pub upstreams: Vec<Upstream>,
    /// Chat webhook to post to
    pub webhook_url: Url,
    /// Nag phrases (may be empty)
    pub phrases: Vec<String>,
    /// Maximum number of MRs offered in the picker, always >= 1
    pub picker_limit: usize,
}

#[derive(Deserialize)]
struct RawConfig {
    #[serde(default)]
    gitlab: Vec<RawUpstream>,
    slack: Option<RawSlack>,
    mr_picker_count: Option<i64>,
}

#[derive(Deserialize)]
struct RawUpstream {
    api: String,
    #[serde(default)]
    token: String,
}

#[derive(Deserialize)]
struct RawSlack {
    webhook: Option<String>,
    #[serde(default)]
    messages: Vec<String>,
}

/// Get path to the config file (`$HOME/.merge/config.yaml`).
pub fn config_path() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| Error::Config {
        path: PathBuf::from("~").join(CONFIG_DIR).join(CONFIG_FILE),
        reason: "could not determine home directory".to_string(),
    })?;
    Ok(home.join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load and validate the config file at `path`.
pub fn load_config(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| config_error(path, e))?;
    let config = parse_config(&content).map_err(|reason| Error::Config {
        path: path.to_path_buf(),
        reason,
    })?;
    debug!(
        path = %path.display(),
        upstreams = config.upstreams.len(),
        phrases = config.phrases.len(),
        picker_limit = config.picker_limit,
        "loaded config"
    );
    Ok(config)
}

fn config_error(path: &Path, reason: impl std::fmt::Display) -> Error {
    Error::Config {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}

/// Parse and validate config text. Errors are plain reasons; the caller
/// attaches the path.
fn parse_config(content: &str) -> std::result::Result<Config, String> {
    let raw: RawConfig = serde_yaml::from_str(content).map_err(|e| e.to_string())?;

    if raw.gitlab.is_empty() {
        return Err("`gitlab` must list at least one instance".to_string());
    }

    let upstreams = raw
        .gitlab
        .into_iter()
        .enumerate()
        .map(|(i, g)| {
            let api = parse_http_url(&g.api).map_err(|e| format!("gitlab[{i}].api: {e}"))?;
            if g.token.trim().is_empty() {
                return Err(format!("gitlab[{i}].token is empty"));
            }
            Ok(Upstream {
                api,
                token: g.token.trim().to_string(),
            })
        })
        .collect::<std::result::Result<Vec<_>, String>>()?;

    let slack = raw
        .slack
        .ok_or_else(|| "`slack.webhook` is required".to_string())?;
    let webhook = slack
        .webhook
        .ok_or_else(|| "`slack.webhook` is required".to_string())?;
    let webhook_url = parse_http_url(&webhook).map_err(|e| format!("slack.webhook: {e}"))?;

    let total = slack.messages.len();
    let phrases: Vec<String> = slack
        .messages
        .into_iter()
        .filter(|m| !m.trim().is_empty())
        .collect();
    if phrases.len() < total {
        warn!(dropped = total - phrases.len(), "ignoring blank slack.messages entries");
    }

    let picker_limit = raw
        .mr_picker_count
        .filter(|&n| n > 0)
        .and_then(|n| usize::try_from(n).ok())
        .unwrap_or(DEFAULT_PICKER_LIMIT);

    Ok(Config {
        upstreams,
        webhook_url,
        phrases,
        picker_limit,
    })
}

fn parse_http_url(raw: &str) -> std::result::Result<Url, String> {
    let url = Url::parse(raw.trim()).map_err(|e| format!("invalid URL {raw:?}: {e}"))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(format!("unsupported URL scheme {other:?}")),
    }
}
