use anyhow::{ensure, Context};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";
pub const DEFAULT_RESET_PAGE_PORT: u16 = 3000;
pub const DEFAULT_RESET_PAGE_PATH: &str = "/reset-password";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub api_base_url: String,
    pub reset_page_port: u16,
    pub reset_page_path: String,
    pub request_timeout_secs: u64,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            reset_page_port: DEFAULT_RESET_PAGE_PORT,
            reset_page_path: DEFAULT_RESET_PAGE_PATH.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl RuntimeConfig {
    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        let cfg: RuntimeConfig =
            serde_json::from_str(raw).context("runtime config is not valid JSON")?;
        cfg.validated()
    }

    fn validated(mut self) -> anyhow::Result<Self> {
        self.api_base_url = self.api_base_url.trim().trim_end_matches('/').to_string();
        ensure!(!self.api_base_url.is_empty(), "api_base_url must not be empty");
        ensure!(
            self.request_timeout_secs > 0,
            "request_timeout_secs must be greater than zero"
        );
        if !self.reset_page_path.starts_with('/') {
            self.reset_page_path = format!("/{}", self.reset_page_path);
        }
        Ok(self)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

static RUNTIME_CONFIG: OnceLock<RuntimeConfig> = OnceLock::new();

fn cache_config(cfg: RuntimeConfig) -> RuntimeConfig {
    let _ = RUNTIME_CONFIG.set(cfg);
    RUNTIME_CONFIG.get().cloned().unwrap_or_default()
}

/// The resolved config, or defaults when `init` has not finished yet.
pub fn current() -> RuntimeConfig {
    RUNTIME_CONFIG.get().cloned().unwrap_or_default()
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::RuntimeConfig;
    use anyhow::Context;

    fn global_object(key: &str) -> Option<js_sys::Object> {
        let w = web_sys::window()?;
        let any = js_sys::Reflect::get(&w, &key.into()).ok()?;
        if any.is_undefined() || any.is_null() {
            return None;
        }
        Some(js_sys::Object::from(any))
    }

    // window.__RESETKIT_ENV (env.js) wins over window.__RESETKIT_CONFIG.
    pub fn snapshot_from_globals() -> Option<RuntimeConfig> {
        let obj = global_object("__RESETKIT_ENV").or_else(|| global_object("__RESETKIT_CONFIG"))?;
        let raw = js_sys::JSON::stringify(&obj).ok()?.as_string()?;
        match RuntimeConfig::from_json(&raw) {
            Ok(cfg) => Some(cfg),
            Err(err) => {
                log::warn!("ignoring window runtime config: {:#}", err);
                None
            }
        }
    }

    pub async fn fetch_runtime_config() -> anyhow::Result<RuntimeConfig> {
        let resp = reqwest::get("./config.json")
            .await
            .context("failed to fetch ./config.json")?;
        anyhow::ensure!(
            resp.status().is_success(),
            "./config.json returned status {}",
            resp.status()
        );
        let raw = resp.text().await.context("failed to read ./config.json")?;
        RuntimeConfig::from_json(&raw)
    }
}

#[cfg(target_arch = "wasm32")]
pub async fn init() -> RuntimeConfig {
    if let Some(cached) = RUNTIME_CONFIG.get() {
        return cached.clone();
    }
    if let Some(cfg) = browser::snapshot_from_globals() {
        return cache_config(cfg);
    }
    match browser::fetch_runtime_config().await {
        Ok(cfg) => cache_config(cfg),
        Err(err) => {
            log::debug!("using default runtime config: {:#}", err);
            cache_config(RuntimeConfig::default())
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn init() -> RuntimeConfig {
    cache_config(current())
}
