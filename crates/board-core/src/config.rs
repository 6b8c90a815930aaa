//! Board Configuration
//!
//! Endpoints and constants. Browser builds have no runtime environment, so
//! overrides come from compile-time variables or a JSON snippet.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::gate::SHARED_SECRET;

pub const DEFAULT_API_BASE: &str = "https://jsonblob.com/api/jsonBlob";
pub const DEFAULT_POLISH_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_POLISH_MODEL: &str = "gemini-3-flash-preview";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Base URL of the document store; documents live at `<api_base>/<id>`
    pub api_base: String,
    /// Gate value for posting and deleting
    pub shared_secret: String,
    /// Query parameter carrying the board id
    pub board_param: String,
    /// Local storage key remembering the last board
    pub storage_key: String,
    pub polish: PolishConfig,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            shared_secret: SHARED_SECRET.to_string(),
            board_param: "b".to_string(),
            storage_key: "last_board_id".to_string(),
            polish: PolishConfig::default(),
        }
    }
}

impl BoardConfig {
    /// Build-time configuration: an optional `INSTANT_BOARD_CONFIG` JSON
    /// document, then `INSTANT_BOARD_API_BASE`, `INSTANT_BOARD_SECRET` and
    /// `GEMINI_API_KEY` on top
    pub fn from_build_env() -> Self {
        Self::layered(
            option_env!("INSTANT_BOARD_CONFIG"),
            option_env!("INSTANT_BOARD_API_BASE"),
            option_env!("INSTANT_BOARD_SECRET"),
            option_env!("GEMINI_API_KEY"),
        )
    }

    fn layered(json: Option<&str>, api_base: Option<&str>, secret: Option<&str>, api_key: Option<&str>) -> Self {
        let mut config = match json.map(Self::from_json) {
            Some(Ok(config)) => config,
            Some(Err(e)) => {
                warn!("[CONFIG] Ignoring invalid INSTANT_BOARD_CONFIG: {}", e);
                Self::default()
            }
            None => Self::default(),
        };
        if let Some(base) = api_base {
            config.api_base = base.trim_end_matches('/').to_string();
        }
        if let Some(secret) = secret {
            config.shared_secret = secret.to_string();
        }
        if let Some(key) = api_key.filter(|k| !k.is_empty()) {
            config.polish.api_key = Some(key.to_string());
        }
        config
    }

    /// Parse a (possibly partial) JSON override; absent fields keep defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolishConfig {
    pub endpoint: String,
    pub model: String,
    pub api_key: Option<String>,
}

impl Default for PolishConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_POLISH_ENDPOINT.to_string(),
            model: DEFAULT_POLISH_MODEL.to_string(),
            api_key: None,
        }
    }
}

impl PolishConfig {
    pub fn is_enabled(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.is_empty())
    }
}
