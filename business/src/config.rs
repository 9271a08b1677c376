use libris_states::State;
use serde::Deserialize;
use thiserror::Error;

/// Locale used to render short dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum DateLocale {
    /// `3/5/2024`
    #[default]
    #[serde(rename = "en-US")]
    EnUs,
    /// `05/03/2024`
    #[serde(rename = "en-GB")]
    EnGb,
    /// `2024-03-05`
    #[serde(rename = "iso")]
    Iso,
}

impl DateLocale {
    /// `chrono` format string for the locale's short date.
    pub fn short_date_format(self) -> &'static str {
        match self {
            Self::EnUs => "%-m/%-d/%Y",
            Self::EnGb => "%d/%m/%Y",
            Self::Iso => "%Y-%m-%d",
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read configuration from environment: {0}")]
    Env(#[from] serde_env::Error),
    #[error("LIBRIS_PAGE_SIZE must be greater than zero")]
    InvalidPageSize,
}

/// Raw environment variables, all optional.
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    libris_api_base_url: Option<String>,
    libris_locale: Option<DateLocale>,
    libris_currency_symbol: Option<String>,
    libris_page_size: Option<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BusinessConfig {
    pub api_base_url: String,
    pub locale: DateLocale,
    pub currency_symbol: String,
    pub default_page_size: usize,
}

impl BusinessConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Base URL of the REST API, i.e. `{api_base_url}/api`.
    pub fn api_url(&self) -> String {
        let base = self.api_base_url.trim_end_matches('/');
        if base.is_empty() {
            "/api".to_owned()
        } else {
            format!("{base}/api")
        }
    }

    /// Build-time defaults overridden by `LIBRIS_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(std::env::vars())
    }

    pub fn from_vars<I, S>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let raw: RawConfig = serde_env::from_iter(vars)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawConfig) -> Result<Self, ConfigError> {
        let RawConfig {
            libris_api_base_url,
            libris_locale,
            libris_currency_symbol,
            libris_page_size,
        } = raw;

        let defaults = Self::default();

        let default_page_size = libris_page_size.unwrap_or(defaults.default_page_size);
        if default_page_size == 0 {
            return Err(ConfigError::InvalidPageSize);
        }

        if let Some(url) = &libris_api_base_url {
            log::info!("Using LIBRIS_API_BASE_URL: {url}");
        }

        Ok(Self {
            api_base_url: libris_api_base_url.unwrap_or(defaults.api_base_url),
            locale: libris_locale.unwrap_or(defaults.locale),
            currency_symbol: libris_currency_symbol.unwrap_or(defaults.currency_symbol),
            default_page_size,
        })
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self {
            api_base_url: if cfg!(target_arch = "wasm32") {
                String::new()
            } else if cfg!(feature = "env_test") {
                "https://libris-test.example.org".to_owned()
            } else if cfg!(feature = "env_internal") {
                "https://libris-internal.example.org".to_owned()
            } else if cfg!(feature = "env_nightly") {
                "https://libris-nightly.example.org".to_owned()
            } else {
                "http://localhost:8080".to_owned()
            },
            locale: DateLocale::EnUs,
            currency_symbol: "$".to_owned(),
            default_page_size: 10,
        }
    }
}

impl State for BusinessConfig {}
