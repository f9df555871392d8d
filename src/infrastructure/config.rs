use crate::application::bill_service::{DEFAULT_RATE, DEFAULT_THRESHOLD};
use crate::domain::appliance::{AppliancePreset, PresetCatalog};
use config::builder::DefaultState;
use config::{ConfigBuilder, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerSettings,
    pub billing: BillingSettings,
    #[serde(default)]
    pub presets: Vec<AppliancePreset>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct BillingSettings {
    pub default_rate: f64,
    pub discrepancy_threshold: f64,
}

impl Default for BillingSettings {
    fn default() -> Self {
        Self {
            default_rate: DEFAULT_RATE,
            discrepancy_threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl AppConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Configured presets, or the built-in catalog when none are configured
    pub fn preset_catalog(&self) -> PresetCatalog {
        if self.presets.is_empty() {
            PresetCatalog::default()
        } else {
            PresetCatalog::new(self.presets.clone())
        }
    }
}

fn builder_with_defaults() -> anyhow::Result<ConfigBuilder<DefaultState>> {
    let defaults = BillingSettings::default();

    Ok(config::Config::builder()
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8080)?
        .set_default("billing.default_rate", defaults.default_rate)?
        .set_default("billing.discrepancy_threshold", defaults.discrepancy_threshold)?)
}

/// `BILL_TRACKER__BILLING__DEFAULT_RATE=8` sets `billing.default_rate`
fn environment() -> Environment {
    Environment::with_prefix("BILL_TRACKER")
        .prefix_separator("__")
        .separator("__")
}

/// Defaults, then `config/billing.*` if present, then `BILL_TRACKER__*` environment variables
pub fn load_app_config() -> anyhow::Result<AppConfig> {
    let settings = builder_with_defaults()?
        .add_source(File::with_name("config/billing").required(false))
        .add_source(environment())
        .build()?;

    Ok(settings.try_deserialize()?)
}
