use anyhow::{bail, Context, Result};
use itertools::Itertools;
use serde::Deserialize;
use std::fs;

#[derive(Deserialize, Debug, Clone)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Source {
    Cmd { command: String },
    File { path: String },
    None,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    #[default]
    Kalman,
    Average,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Filter {
    pub mode: FilterMode,
    pub q: f64,
    pub r: f64,
    pub initial_estimate: f64,
    pub initial_covariance: f64,
    pub outlier_rejection: bool,
    pub reset_per_batch: bool,
}

impl Default for Filter {
    fn default() -> Self {
        Self {
            mode: FilterMode::Kalman,
            q: 0.01,
            r: 1.0,
            initial_estimate: 0.0,
            initial_covariance: 1.0,
            outlier_rejection: true,
            reset_per_batch: false,
        }
    }
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Formula {
    Linear { min: f64, max: f64 },
    Quadratic { a: f64, b: f64, c: f64 },
    QuadraticInverse { a: f64, b: f64, c: f64 },
}

#[derive(Deserialize, Debug, Clone)]
pub struct Calibration {
    #[serde(flatten)]
    pub formula: Formula,
    pub temp_min: f64,
    pub temp_max: f64,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Display {
    #[default]
    Log,
    None,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Channel {
    pub name: String,
    #[serde(default = "default_vref")]
    pub vref: f64,
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
    #[serde(default = "default_window_ms")]
    pub window_ms: u64,
    pub source: Source,
    #[serde(default)]
    pub filter: Filter,
    pub calibration: Calibration,
    #[serde(default)]
    pub display: Display,
}

#[derive(Deserialize, Debug)]
pub struct Config {
    #[serde(rename = "channel", default)]
    pub channels: Vec<Channel>,
}

fn default_vref() -> f64 {
    3.3
}

fn default_batch_size() -> usize {
    50
}

fn default_window_ms() -> u64 {
    1000
}

impl Config {
    pub fn load() -> Result<Self> {
        let config = xdg::BaseDirectories::with_prefix("tempsense")
            .ok()
            .and_then(|dirs| dirs.find_config_file("config.toml"))
            .and_then(|path| fs::read_to_string(path).ok())
            .unwrap_or_else(|| include_str!("../config.toml").to_string());

        Self::parse(&config)
    }

    pub fn parse(config: &str) -> Result<Self> {
        let cfg: Self = toml::from_str(config).context("Invalid config file")?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> Result<()> {
        if self.channels.is_empty() {
            bail!("No channels configured");
        }

        if let Some(name) = self.channels.iter().map(|c| &c.name).duplicates().next() {
            bail!("Channel '{}' is configured more than once", name);
        }

        self.channels.iter().try_for_each(Channel::validate)
    }
}

impl Channel {
    fn validate(&self) -> Result<()> {
        let name = &self.name;

        if self.batch_size == 0 {
            bail!("Channel '{name}': batch_size must be at least 1");
        }
        if self.batch_size > u32::MAX as usize {
            bail!("Channel '{name}': batch_size must not exceed {}", u32::MAX);
        }

        let values = [
            ("vref", self.vref),
            ("q", self.filter.q),
            ("r", self.filter.r),
            ("initial_estimate", self.filter.initial_estimate),
            ("initial_covariance", self.filter.initial_covariance),
            ("temp_min", self.calibration.temp_min),
            ("temp_max", self.calibration.temp_max),
        ];
        let coefficients = match self.calibration.formula {
            Formula::Linear { min, max } => vec![("min", min), ("max", max)],
            Formula::Quadratic { a, b, c } | Formula::QuadraticInverse { a, b, c } => {
                vec![("a", a), ("b", b), ("c", c)]
            }
        };
        if let Some((key, value)) = values
            .into_iter()
            .chain(coefficients)
            .find(|(_, value)| !value.is_finite())
        {
            bail!("Channel '{name}': {key} must be a finite number, got {value}");
        }

        if self.vref <= 0.0 {
            bail!("Channel '{name}': vref must be positive, got {}", self.vref);
        }
        if self.filter.q <= 0.0 || self.filter.r <= 0.0 {
            bail!(
                "Channel '{name}': q and r must be positive, got q={} r={}",
                self.filter.q,
                self.filter.r
            );
        }
        if self.filter.initial_covariance < 0.0 {
            bail!("Channel '{name}': initial_covariance must not be negative");
        }
        if self.calibration.temp_min > self.calibration.temp_max {
            bail!(
                "Channel '{name}': temp_min ({}) is above temp_max ({})",
                self.calibration.temp_min,
                self.calibration.temp_max
            );
        }

        Ok(())
    }
}
