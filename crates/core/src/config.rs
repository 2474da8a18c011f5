//! Site configuration

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Build-time override for the catalog endpoint's base address
const CATALOG_BASE_URL_OVERRIDE: Option<&str> = option_env!("SHOWCASE_CATALOG_BASE_URL");

/// Main site configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SiteConfig {
    /// Product catalog endpoint
    pub catalog: CatalogConfig,

    /// Theme persistence and transitions
    pub theme: ThemeConfig,

    /// Simulated contact form submission
    pub contact: ContactConfig,

    /// Responsive layout
    pub layout: LayoutConfig,
}

/// Product catalog endpoint configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Base address of the REST endpoint
    pub base_url: String,

    /// Number of products requested
    pub page_size: u32,

    /// Bounded wait for the response in milliseconds
    pub timeout_ms: u32,
}

/// Theme preference configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Local storage key holding the selected theme
    pub storage_key: String,

    /// How long root scrolling stays locked after a switch, in milliseconds
    pub transition_lock_ms: u32,
}

/// Contact form configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    /// Simulated network latency in milliseconds
    pub submit_delay_ms: u32,

    /// How long the success banner stays visible, in milliseconds
    pub banner_ms: u32,
}

/// Layout configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Viewports narrower than this (logical pixels) get the overlay panel
    pub narrow_breakpoint_px: u32,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: "https://dummyjson.com".to_string(),
            page_size: 15,
            timeout_ms: 3000,
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: "theme".to_string(),
            transition_lock_ms: 300,
        }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: 1500,
            banner_ms: 3000,
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            narrow_breakpoint_px: 768,
        }
    }
}

impl CatalogConfig {
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(u64::from(self.timeout_ms))
    }
}

impl ThemeConfig {
    #[must_use]
    pub fn transition_lock(&self) -> Duration {
        Duration::from_millis(u64::from(self.transition_lock_ms))
    }
}

impl ContactConfig {
    #[must_use]
    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(u64::from(self.submit_delay_ms))
    }

    #[must_use]
    pub fn banner_duration(&self) -> Duration {
        Duration::from_millis(u64::from(self.banner_ms))
    }
}

impl SiteConfig {
    /// Load configuration from defaults and the build-time environment
    ///
    /// # Errors
    ///
    /// Returns an error if the overridden values fail validation
    pub fn from_build_env() -> CoreResult<Self> {
        let settings = Self::builder_with_defaults()?
            .set_override_option("catalog.base_url", CATALOG_BASE_URL_OVERRIDE)?
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML document layered over the defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be parsed or fails validation
    pub fn from_toml_str(toml: &str) -> CoreResult<Self> {
        let settings = Self::builder_with_defaults()?
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn builder_with_defaults() -> CoreResult<config::ConfigBuilder<config::builder::DefaultState>> {
        let defaults = Self::default();

        Ok(config::Config::builder()
            .set_default("catalog.base_url", defaults.catalog.base_url)?
            .set_default("catalog.page_size", i64::from(defaults.catalog.page_size))?
            .set_default("catalog.timeout_ms", i64::from(defaults.catalog.timeout_ms))?
            .set_default("theme.storage_key", defaults.theme.storage_key)?
            .set_default(
                "theme.transition_lock_ms",
                i64::from(defaults.theme.transition_lock_ms),
            )?
            .set_default(
                "contact.submit_delay_ms",
                i64::from(defaults.contact.submit_delay_ms),
            )?
            .set_default("contact.banner_ms", i64::from(defaults.contact.banner_ms))?
            .set_default(
                "layout.narrow_breakpoint_px",
                i64::from(defaults.layout.narrow_breakpoint_px),
            )?)
    }

    /// Check the values the rest of the site relies on
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidConfig`] naming the first offending key
    pub fn validate(&self) -> CoreResult<()> {
        if self.catalog.base_url.trim().is_empty() {
            return Err(CoreError::invalid_config("catalog.base_url must not be empty"));
        }
        if self.catalog.page_size == 0 {
            return Err(CoreError::invalid_config("catalog.page_size must be positive"));
        }
        if self.catalog.timeout_ms == 0 {
            return Err(CoreError::invalid_config("catalog.timeout_ms must be positive"));
        }
        if self.theme.storage_key.is_empty() {
            return Err(CoreError::invalid_config("theme.storage_key must not be empty"));
        }
        Ok(())
    }
}
