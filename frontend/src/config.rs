use anyhow::{anyhow, Context};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::utils::storage;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_TIME_ZONE: Tz = chrono_tz::Asia::Jakarta;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
    pub time_zone: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();
static TIME_ZONE: OnceLock<Tz> = OnceLock::new();

fn read_global(global: &str, keys: &[&str]) -> Option<String> {
    let w = storage::window().ok()?;
    let any = js_sys::Reflect::get(&w, &global.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    keys.iter().find_map(|key| {
        js_sys::Reflect::get(&obj, &(*key).into())
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
            .and_then(|v| v.as_string())
    })
}

// window.__ABSENSI_ENV = { API_BASE_URL: "...", TIME_ZONE: "..." } (env.js) wins over
// window.__ABSENSI_CONFIG, which is what a previously fetched config.json is mirrored into.
fn snapshot_from_globals() -> RuntimeConfig {
    let api_base_url = read_global("__ABSENSI_ENV", &["API_BASE_URL", "api_base_url"])
        .or_else(|| read_global("__ABSENSI_CONFIG", &["api_base_url", "API_BASE_URL"]));
    let time_zone = read_global("__ABSENSI_ENV", &["TIME_ZONE", "time_zone"])
        .or_else(|| read_global("__ABSENSI_CONFIG", &["time_zone", "TIME_ZONE"]));
    RuntimeConfig {
        api_base_url,
        time_zone,
    }
}

fn write_window_config(cfg: &RuntimeConfig) {
    let Ok(w) = storage::window() else {
        return;
    };
    let obj = js_sys::Object::new();
    if let Some(url) = &cfg.api_base_url {
        let _ = js_sys::Reflect::set(
            &obj,
            &"api_base_url".into(),
            &wasm_bindgen::JsValue::from_str(url),
        );
    }
    if let Some(tz) = &cfg.time_zone {
        let _ = js_sys::Reflect::set(
            &obj,
            &"time_zone".into(),
            &wasm_bindgen::JsValue::from_str(tz),
        );
    }
    let _ = js_sys::Reflect::set(&w, &"__ABSENSI_CONFIG".into(), &obj);
}

async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    storage::window().ok()?;
    let resp = reqwest::get("./config.json").await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

pub fn parse_time_zone(name: &str) -> anyhow::Result<Tz> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(anyhow!("time zone name is empty"));
    }
    trimmed
        .parse::<Tz>()
        .map_err(|err| anyhow!(err))
        .with_context(|| format!("unknown time zone `{trimmed}`"))
}

fn cache_time_zone(name: Option<&str>) -> Tz {
    let tz = match name.map(parse_time_zone) {
        Some(Ok(tz)) => tz,
        Some(Err(err)) => {
            log::warn!("{err:#}; falling back to {DEFAULT_TIME_ZONE}");
            DEFAULT_TIME_ZONE
        }
        None => DEFAULT_TIME_ZONE,
    };
    *TIME_ZONE.get_or_init(|| tz)
}

fn cache_base_url(value: &str) -> String {
    API_BASE_URL
        .get_or_init(|| value.trim_end_matches('/').to_string())
        .clone()
}

fn apply(cfg: &RuntimeConfig) -> String {
    cache_time_zone(cfg.time_zone.as_deref());
    cache_base_url(cfg.api_base_url.as_deref().unwrap_or(DEFAULT_API_BASE_URL))
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl RuntimeConfig {
    fn is_complete(&self) -> bool {
        self.api_base_url.is_some() && self.time_zone.is_some()
    }
}

/// Resolves each field on its own: window globals win, `config.json` fills
/// what they leave unset.
pub fn merge_config(globals: RuntimeConfig, fetched: Option<RuntimeConfig>) -> RuntimeConfig {
    let fetched = fetched.unwrap_or_default();
    RuntimeConfig {
        api_base_url: present(globals.api_base_url).or(present(fetched.api_base_url)),
        time_zone: present(globals.time_zone).or(present(fetched.time_zone)),
    }
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    let globals = snapshot_from_globals();
    let fetched = if globals.is_complete() {
        None
    } else {
        fetch_runtime_config().await
    };
    if let Some(cfg) = &fetched {
        write_window_config(cfg);
    }
    apply(&merge_config(globals, fetched))
}

/// Organization time zone used for "today" and every displayed clock value.
pub fn current_time_zone() -> Tz {
    TIME_ZONE.get().copied().unwrap_or(DEFAULT_TIME_ZONE)
}

/// True once `init` has fixed the API base URL and the organization zone.
pub fn is_resolved() -> bool {
    API_BASE_URL.get().is_some() && TIME_ZONE.get().is_some()
}

pub async fn init() {
    let base = await_api_base_url().await;
    log::info!(
        "runtime config ready: api={} tz={}",
        base,
        current_time_zone()
    );
}
