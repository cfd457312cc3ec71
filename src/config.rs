use crate::model::{DEFAULT_INIT, DEFAULT_T_END, DEFAULT_T0, State, System};
use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::{fmt::Debug, fs, ops::RangeBounds, path::Path};

/// Upper bound (exclusive) on `t_end - t0`.
pub const MAX_STEPS: u32 = 1_000_000;

/// Simulation configuration parameters.
///
/// Loaded from a TOML file and validated before use. Every section and field
/// is optional; missing values fall back to the defaults of
/// [`make_system`](crate::model::make_system).
#[derive(Debug, Default, PartialEq, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub model: ModelConfig,
    pub init: InitConfig,
    pub time: TimeConfig,
}

/// Rate parameters.
#[derive(Debug, PartialEq, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModelConfig {
    /// Transmission rate (one contact every 3 days by default).
    pub beta: f64,
    /// Recovery rate (4 days to recover by default).
    pub gamma: f64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            beta: 1.0 / 3.0,
            gamma: 1.0 / 4.0,
        }
    }
}

/// Initial compartment sizes, normalized on use.
#[derive(Debug, PartialEq, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InitConfig {
    pub susceptible: f64,
    pub infected: f64,
    pub resistant: f64,
}

impl Default for InitConfig {
    fn default() -> Self {
        Self {
            susceptible: DEFAULT_INIT.s,
            infected: DEFAULT_INIT.i,
            resistant: DEFAULT_INIT.r,
        }
    }
}

#[derive(Debug, PartialEq, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TimeConfig {
    pub t0: u32,
    pub t_end: u32,
}

impl Default for TimeConfig {
    fn default() -> Self {
        Self {
            t0: DEFAULT_T0,
            t_end: DEFAULT_T_END,
        }
    }
}

impl Config {
    /// Load a [`Config`] from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, deserialized,
    /// or if the configuration values are invalid.
    pub fn from_file<P: AsRef<Path>>(file: P) -> Result<Self> {
        let file = file.as_ref();
        let contents =
            fs::read_to_string(file).with_context(|| format!("failed to read {file:?}"))?;
        Self::from_toml(&contents)
    }

    /// Parse and validate a [`Config`] from a TOML string.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents).context("failed to deserialize config")?;

        config.validate().context("failed to validate config")?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        check_num(self.model.beta, 0.0..f64::INFINITY).context("invalid transmission rate")?;
        check_num(self.model.gamma, 0.0..f64::INFINITY).context("invalid recovery rate")?;

        let init = &self.init;
        check_num(init.susceptible, 0.0..f64::INFINITY)
            .context("invalid susceptible population")?;
        check_num(init.infected, 0.0..f64::INFINITY).context("invalid infected population")?;
        check_num(init.resistant, 0.0..f64::INFINITY).context("invalid resistant population")?;
        let total = init.susceptible + init.infected + init.resistant;
        if total <= 0.0 {
            bail!("initial population must be positive, but is {total}");
        }

        check_num(self.time.t_end, self.time.t0..).context("invalid end time")?;
        check_num(self.time.t_end - self.time.t0, 0..MAX_STEPS)
            .context("invalid number of steps")?;

        Ok(())
    }

    /// Build the [`System`] described by this configuration.
    pub fn system(&self) -> System {
        let init = State::new(
            self.init.susceptible,
            self.init.infected,
            self.init.resistant,
        );
        System::new(
            init,
            self.time.t0,
            self.time.t_end,
            self.model.beta,
            self.model.gamma,
        )
    }
}

fn check_num<T, R>(num: T, range: R) -> Result<()>
where
    T: PartialOrd + Debug,
    R: RangeBounds<T> + Debug,
{
    if !range.contains(&num) {
        bail!("number must be in the range {range:?}, but is {num:?}");
    }
    Ok(())
}
