use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use crate::error::AppError;

pub const DEFAULT_SOCIAL_URL: &str = "https://www.facebook.com/share/g/17eVUPDmLb/";

/// Static, per-deployment values the layout shell and page sections read.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub title: String,
    pub description: String,
    pub social_url: String,
    pub sign_up_path: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "E Score".to_string(),
            description: "منصة تعليمية متكاملة".to_string(),
            social_url: DEFAULT_SOCIAL_URL.to_string(),
            sign_up_path: "/sign-up".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CatalogConfig {
    pub base_url: String,
    pub timeout: Option<Duration>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub catalog: CatalogConfig,
    pub prefetch_courses: bool,
    pub site: SiteConfig,
}

impl AppConfig {
    pub fn new_from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset keys take defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = lookup("BIND_ADDR")
            .unwrap_or_else(|| "127.0.0.1:3000".to_string())
            .parse::<SocketAddr>()
            .map_err(|e| AppError::Config(format!("BIND_ADDR is not a socket address: {}", e)))?;

        let base_url = lookup("CATALOG_BASE_URL")
            .unwrap_or_else(|| "http://127.0.0.1:3001".to_string())
            .trim_end_matches('/')
            .to_string();
        if base_url.is_empty() {
            return Err(AppError::Config("CATALOG_BASE_URL is empty".to_string()));
        }

        let timeout = match lookup("CATALOG_TIMEOUT_SECS") {
            Some(raw) => {
                let secs = raw.trim().parse::<u64>().map_err(|_| {
                    AppError::Config(format!("CATALOG_TIMEOUT_SECS is not a number: {}", raw))
                })?;
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        let prefetch_courses = match lookup("PREFETCH_COURSES") {
            Some(raw) => parse_flag(&raw).ok_or_else(|| {
                AppError::Config(format!("PREFETCH_COURSES is not a boolean: {}", raw))
            })?,
            None => false,
        };

        let defaults = SiteConfig::default();
        let site = SiteConfig {
            title: lookup("SITE_TITLE").unwrap_or(defaults.title),
            description: lookup("SITE_DESCRIPTION").unwrap_or(defaults.description),
            social_url: lookup("SOCIAL_URL").unwrap_or(defaults.social_url),
            sign_up_path: defaults.sign_up_path,
        };

        Ok(Self {
            bind_addr,
            catalog: CatalogConfig { base_url, timeout },
            prefetch_courses,
            site,
        })
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = AppConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:3000".parse().unwrap());
        assert_eq!(config.catalog.base_url, "http://127.0.0.1:3001");
        assert_eq!(config.catalog.timeout, None);
        assert!(!config.prefetch_courses);
        assert_eq!(config.site, SiteConfig::default());
    }

    #[test]
    fn reads_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("BIND_ADDR", "0.0.0.0:8080"),
            ("CATALOG_BASE_URL", "https://lms.example.com/"),
            ("CATALOG_TIMEOUT_SECS", "5"),
            ("PREFETCH_COURSES", "yes"),
            ("SITE_TITLE", "Staging"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.catalog.base_url, "https://lms.example.com");
        assert_eq!(config.catalog.timeout, Some(Duration::from_secs(5)));
        assert!(config.prefetch_courses);
        assert_eq!(config.site.title, "Staging");
        assert_eq!(config.site.social_url, DEFAULT_SOCIAL_URL);
    }

    #[test]
    fn rejects_bad_values() {
        let bad_addr = AppConfig::from_lookup(lookup_from(&[("BIND_ADDR", "localhost")]));
        assert!(matches!(bad_addr, Err(AppError::Config(_))));

        let bad_timeout = AppConfig::from_lookup(lookup_from(&[("CATALOG_TIMEOUT_SECS", "soon")]));
        assert!(matches!(bad_timeout, Err(AppError::Config(_))));

        let bad_flag = AppConfig::from_lookup(lookup_from(&[("PREFETCH_COURSES", "maybe")]));
        assert!(matches!(bad_flag, Err(AppError::Config(_))));
    }
}
