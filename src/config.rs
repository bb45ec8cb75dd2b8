use anyhow::{anyhow, ensure, Result};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_SAMPLE_INTERVAL: u32 = 10;
const MAX_SAMPLE_INTERVAL: u32 = 60;
const DEFAULT_MIN_CONFIRMATIONS: u32 = 3;

#[derive(Debug, Deserialize, Default)]
struct ScanConfigFile {
    sample_interval: Option<u32>,
    min_confirmations: Option<u32>,
}

/// Scan parameters, immutable for the duration of one batch run.
#[derive(Clone, Debug)]
pub struct ScanConfig {
    /// Analyze every Nth frame; all others are discarded undecoded.
    pub sample_interval: u32,
    /// Sampled-frame matches required before a video counts as confirmed.
    pub min_confirmations: u32,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            sample_interval: DEFAULT_SAMPLE_INTERVAL,
            min_confirmations: DEFAULT_MIN_CONFIRMATIONS,
        }
    }
}

impl ScanConfig {
    /// Load from the JSON file named by `QRSWEEP_CONFIG` (when set), then
    /// apply individual environment overrides, then validate.
    pub fn load() -> Result<Self> {
        let config_path = std::env::var("QRSWEEP_CONFIG").ok();
        let file_cfg = match config_path.as_deref() {
            Some(path) => read_config_file(Path::new(path))?,
            None => ScanConfigFile::default(),
        };
        let mut cfg = Self::from_file(file_cfg);
        cfg.apply_env()?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn from_file(file: ScanConfigFile) -> Self {
        Self {
            sample_interval: file.sample_interval.unwrap_or(DEFAULT_SAMPLE_INTERVAL),
            min_confirmations: file
                .min_confirmations
                .unwrap_or(DEFAULT_MIN_CONFIRMATIONS),
        }
    }

    fn apply_env(&mut self) -> Result<()> {
        if let Ok(interval) = std::env::var("QRSWEEP_SAMPLE_INTERVAL") {
            self.sample_interval = interval
                .parse()
                .map_err(|_| anyhow!("QRSWEEP_SAMPLE_INTERVAL must be an integer"))?;
        }
        if let Ok(confirmations) = std::env::var("QRSWEEP_MIN_CONFIRMATIONS") {
            self.min_confirmations = confirmations
                .parse()
                .map_err(|_| anyhow!("QRSWEEP_MIN_CONFIRMATIONS must be an integer"))?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            (1..=MAX_SAMPLE_INTERVAL).contains(&self.sample_interval),
            "sample_interval must be between 1 and {}",
            MAX_SAMPLE_INTERVAL
        );
        ensure!(
            self.min_confirmations >= 1,
            "min_confirmations must be at least 1"
        );
        Ok(())
    }
}

fn read_config_file(path: &Path) -> Result<ScanConfigFile> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| anyhow!("failed to read config file {}: {}", path.display(), e))?;
    let cfg = serde_json::from_str(&raw)
        .map_err(|e| anyhow!("invalid config file {}: {}", path.display(), e))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let cfg = ScanConfig::default();
        assert_eq!(cfg.sample_interval, 10);
        assert_eq!(cfg.min_confirmations, 3);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn interval_bounds_are_enforced() {
        let mut cfg = ScanConfig::default();
        cfg.sample_interval = 0;
        assert!(cfg.validate().is_err());
        cfg.sample_interval = 61;
        assert!(cfg.validate().is_err());
        cfg.sample_interval = 60;
        assert!(cfg.validate().is_ok());
        cfg.sample_interval = 1;
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn confirmations_must_be_positive() {
        let mut cfg = ScanConfig::default();
        cfg.min_confirmations = 0;
        assert!(cfg.validate().is_err());
    }
}
