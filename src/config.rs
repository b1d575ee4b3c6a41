//! Console Configuration
//!
//! Resolved once at startup from compile-time env and the page URL.

use std::str::FromStr;

use log::LevelFilter;
use percent_encoding::percent_decode_str;

/// Which REST collection the console manages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResourceKind {
    #[default]
    Products,
    Pets,
}

impl FromStr for ResourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "products" | "product" => Ok(ResourceKind::Products),
            "pets" | "pet" => Ok(ResourceKind::Pets),
            other => Err(format!("unknown resource: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Scheme + host prefix for every request, without trailing slash
    pub api_base: String,
    pub resource: ResourceKind,
    pub log_level: LevelFilter,
}

impl ConsoleConfig {
    /// Read `window.location` plus the compile-time overrides
    pub fn from_window() -> Self {
        let location = web_sys::window().map(|w| w.location());
        let origin = location.as_ref().and_then(|l| l.origin().ok());
        let search = location.and_then(|l| l.search().ok()).unwrap_or_default();
        Self::resolve(
            option_env!("CATALOG_API_BASE"),
            option_env!("CATALOG_RESOURCE"),
            origin,
            &search,
        )
    }

    /// Precedence: URL query > compile-time env > defaults
    pub fn resolve(
        env_base: Option<&str>,
        env_resource: Option<&str>,
        origin: Option<String>,
        search: &str,
    ) -> Self {
        let api_base = env_base
            .map(str::to_string)
            .or(origin)
            .unwrap_or_default()
            .trim_end_matches('/')
            .to_string();

        let resource = query_param(search, "resource")
            .as_deref()
            .or(env_resource)
            .and_then(|value| value.parse().ok())
            .unwrap_or_default();

        let log_level = query_param(search, "log")
            .and_then(|value| LevelFilter::from_str(&value).ok())
            .unwrap_or(LevelFilter::Info);

        Self { api_base, resource, log_level }
    }
}

/// First value of `key` in a `?a=b&c=d` string, percent-decoded
pub fn query_param(search: &str, key: &str) -> Option<String> {
    search
        .trim_start_matches('?')
        .split('&')
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .find(|(k, _)| *k == key)
        .map(|(_, v)| percent_decode_str(&v.replace('+', " ")).decode_utf8_lossy().into_owned())
}
