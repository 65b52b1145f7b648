use crate::application::scheduler::RefreshSettings;
use anyhow::ensure;
use chrono_tz::Tz;
use config::builder::DefaultState;
use config::ConfigBuilder;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    pub source: SourceSettings,
    pub refresh: RefreshConfig,
    pub display: DisplaySettings,
    pub server: ServerSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SourceSettings {
    pub base_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RefreshConfig {
    pub interval_secs: u64,
    pub min_busy_ms: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DisplaySettings {
    pub timezone: String,
    pub tick_stride: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub listen_addr: String,
}

impl DashboardConfig {
    /// Apply defaults under whatever sources the builder already has, then validate.
    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> anyhow::Result<Self> {
        let settings = builder
            .set_default("source.base_url", "http://127.0.0.1:5000")?
            .set_default("source.timeout_secs", 10_i64)?
            .set_default("refresh.interval_secs", 30_i64)?
            .set_default("refresh.min_busy_ms", 1000_i64)?
            .set_default("display.timezone", "Asia/Karachi")?
            .set_default("display.tick_stride", 3_i64)?
            .set_default("server.listen_addr", "0.0.0.0:8080")?
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        ensure!(self.source.timeout_secs > 0, "source.timeout_secs must be positive");
        ensure!(self.refresh.interval_secs > 0, "refresh.interval_secs must be positive");
        ensure!(self.display.tick_stride > 0, "display.tick_stride must be positive");
        self.display.tz()?;
        Ok(())
    }

    pub fn refresh_settings(&self) -> RefreshSettings {
        RefreshSettings {
            interval: Duration::from_secs(self.refresh.interval_secs),
            min_busy: Duration::from_millis(self.refresh.min_busy_ms),
        }
    }
}

impl DisplaySettings {
    pub fn tz(&self) -> anyhow::Result<Tz> {
        self.timezone
            .parse::<Tz>()
            .map_err(|e| anyhow::anyhow!("invalid display.timezone {:?}: {e}", self.timezone))
    }
}

pub fn load_dashboard_config() -> anyhow::Result<DashboardConfig> {
    let builder = config::Config::builder()
        .add_source(config::File::with_name("config/dashboard").required(false))
        .add_source(
            config::Environment::with_prefix("DASHBOARD")
                .separator("__")
                .try_parsing(true),
        );

    DashboardConfig::from_builder(builder)
}
